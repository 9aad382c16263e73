//! Package manager availability.

pub mod checker;
pub mod resolver;

pub use checker::{AvailabilityChecker, VersionProbe};
pub use resolver::{default_context, ensure_available, Resolution, ResolverContext};
