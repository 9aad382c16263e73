//! CLI argument definitions.
//!
//! `pr` is forgiving about its command line: flags may appear anywhere,
//! unknown flags are reported and dropped, and everything after a literal
//! `--` is passed to the script untouched. [`Cli::parse_lenient`] sorts the
//! raw arguments into that shape before handing them to clap.

use clap::{CommandFactory, Parser};
use std::path::{Path, PathBuf};

use crate::detection::ScriptRole;
use crate::ui::OutputMode;

/// pr - zero-config project runner.
#[derive(Debug, Default, Parser)]
#[command(name = "pr", disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Show detection details
    #[arg(short, long)]
    pub verbose: bool,

    /// Project directory (defaults to the current directory)
    #[arg(short, long, env = "PR_DIR")]
    pub dir: Option<PathBuf>,

    /// Skip the dependency install step
    #[arg(long)]
    pub no_install: bool,

    /// Install dependencies before running, even when up to date
    #[arg(short, long)]
    pub install: bool,

    /// Show help
    #[arg(short, long)]
    pub help: bool,

    /// Show version
    #[arg(short = 'V', long)]
    pub version: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Command or script name
    pub command: Option<String>,

    /// Arguments forwarded to the script
    pub args: Vec<String>,
}

/// A named flag and whether it takes a value.
#[derive(Debug)]
struct FlagSpec {
    short: Option<char>,
    long: Option<String>,
    takes_value: bool,
}

/// The named flags `Cli` declares, read back from clap.
fn known_flags() -> Vec<FlagSpec> {
    Cli::command()
        .get_arguments()
        .filter(|arg| !arg.is_positional())
        .map(|arg| FlagSpec {
            short: arg.get_short(),
            long: arg.get_long().map(str::to_string),
            takes_value: arg.get_action().takes_values(),
        })
        .collect()
}

/// Parsed command line plus the flags that were dropped.
#[derive(Debug)]
pub struct ParsedArgs {
    pub cli: Cli,
    /// Unrecognized flags, in the order they appeared.
    pub ignored: Vec<String>,
}

/// What the user asked `pr` to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Help,
    Version,
    Info,
    /// Run the script detected for a role.
    Role(ScriptRole),
    /// Run a script by name.
    Script(String),
}

/// When to install dependencies before running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallMode {
    Skip,
    WhenStale,
    Force,
}

impl Cli {
    /// Parse a full argument vector (program name first).
    pub fn parse_lenient<I, T>(argv: I) -> Result<ParsedArgs, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut argv = argv.into_iter().map(Into::into);
        let program = argv.next().unwrap_or_else(|| "pr".to_string());
        let rest: Vec<String> = argv.collect();

        let split = split_args(&rest);

        let mut normalized = Vec::with_capacity(rest.len() + 2);
        normalized.push(program);
        normalized.extend(split.flags);
        normalized.push("--".to_string());
        normalized.extend(split.positionals);

        let cli = Cli::try_parse_from(normalized)?;
        Ok(ParsedArgs {
            cli,
            ignored: split.ignored,
        })
    }

    pub fn invocation(&self) -> Invocation {
        if self.help {
            return Invocation::Help;
        }
        if self.version {
            return Invocation::Version;
        }

        match self.command.as_deref() {
            None | Some("help") => Invocation::Help,
            Some("version") => Invocation::Version,
            Some("info") => Invocation::Info,
            Some("run") => Invocation::Role(ScriptRole::Dev),
            Some("test") => Invocation::Role(ScriptRole::Test),
            Some("build") => Invocation::Role(ScriptRole::Build),
            Some("start") => Invocation::Role(ScriptRole::Start),
            Some(script) => Invocation::Script(script.to_string()),
        }
    }

    /// Install policy for a command. Only `run` installs stale
    /// dependencies on its own; everything else needs `--install`.
    pub fn install_mode(&self, invocation: &Invocation) -> InstallMode {
        if self.no_install {
            InstallMode::Skip
        } else if self.install {
            InstallMode::Force
        } else if *invocation == Invocation::Role(ScriptRole::Dev) {
            InstallMode::WhenStale
        } else {
            InstallMode::Skip
        }
    }

    pub fn output_mode(&self) -> OutputMode {
        OutputMode::from_verbose_flag(self.verbose)
    }

    /// The project directory, resolved against `cwd`.
    pub fn project_dir(&self, cwd: &Path) -> PathBuf {
        match &self.dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => cwd.join(dir),
            None => cwd.to_path_buf(),
        }
    }
}

#[derive(Debug, Default, PartialEq)]
struct SplitArgs {
    flags: Vec<String>,
    positionals: Vec<String>,
    ignored: Vec<String>,
}

fn find_long<'a>(flags: &'a [FlagSpec], name: &str) -> Option<&'a FlagSpec> {
    flags.iter().find(|f| f.long.as_deref() == Some(name))
}

fn find_short(flags: &[FlagSpec], c: char) -> Option<&FlagSpec> {
    flags.iter().find(|f| f.short == Some(c))
}

/// Check a cluster of short flags (`vi`, `dpath`). Returns whether the
/// next argument is consumed as a value, or `None` if any flag is unknown.
fn short_cluster(flags: &[FlagSpec], cluster: &str) -> Option<bool> {
    for (i, c) in cluster.char_indices() {
        let flag = find_short(flags, c)?;
        if flag.takes_value {
            return Some(i + c.len_utf8() == cluster.len());
        }
    }
    Some(false)
}

fn split_args(args: &[String]) -> SplitArgs {
    let flags = known_flags();
    let mut split = SplitArgs::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if arg == "--" {
            split.positionals.extend(iter.by_ref().cloned());
            break;
        }

        let needs_value = if let Some(long) = arg.strip_prefix("--") {
            let (name, inline_value) = match long.split_once('=') {
                Some((name, _)) => (name, true),
                None => (long, false),
            };
            find_long(&flags, name).map(|flag| flag.takes_value && !inline_value)
        } else if let Some(cluster) = arg.strip_prefix('-').filter(|c| !c.is_empty()) {
            short_cluster(&flags, cluster)
        } else {
            split.positionals.push(arg.clone());
            continue;
        };

        match needs_value {
            Some(needs_value) => {
                split.flags.push(arg.clone());
                if needs_value {
                    if let Some(value) = iter.next() {
                        split.flags.push(value.clone());
                    }
                }
            }
            None => split.ignored.push(arg.clone()),
        }
    }

    split
}
