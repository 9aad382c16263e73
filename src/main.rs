//! `pr` CLI entry point.

use std::process::ExitCode;

use project_runner::cli::{report_error, Cli, CommandDispatcher};
use project_runner::shell::{can_prompt, install_signal_handler, ForegroundChild};
use project_runner::ui::create_ui;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("project_runner=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("project_runner=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}

fn main() -> ExitCode {
    let parsed = match Cli::parse_lenient(std::env::args()) {
        Ok(parsed) => parsed,
        Err(e) => e.exit(),
    };
    let cli = parsed.cli;
    init_tracing(cli.debug);

    tracing::debug!("pr starting with args: {:?}", cli);

    if cli.no_color || std::env::var_os("NO_COLOR").is_some() {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let mut ui = create_ui(can_prompt(), cli.output_mode());

    for flag in &parsed.ignored {
        ui.warning(&format!(
            "Unknown option {} ignored (use -- to pass it to the script)",
            flag
        ));
    }

    let foreground = ForegroundChild::new();
    if let Err(e) = install_signal_handler(foreground.clone()) {
        tracing::warn!("{}", e);
    }

    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(e) => {
            ui.error(&format!("Cannot read the current directory: {}", e));
            return ExitCode::FAILURE;
        }
    };

    let dispatcher = CommandDispatcher::new(cli.project_dir(&cwd), foreground);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => exit_code(result.exit_code),
        Err(e) => {
            report_error(ui.as_mut(), &e);
            exit_code(e.exit_code())
        }
    }
}
