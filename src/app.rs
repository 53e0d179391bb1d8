//! Top-level application orchestration.
//!
//! `src/main.rs` stays tiny; this module is the "real main" that:
//! - loads `.env` and parses CLI arguments
//! - installs logging
//! - runs the TUI or prints a projection

use std::io::Write;

use clap::Parser;
use tracing::info;

use crate::cli::{Command, InputArgs, ProjectArgs};
use crate::error::AppError;

pub mod logging;

/// Entry point for the `fe` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    // `fe` and `fe --loan 3000` behave like `fe tui ...`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Tui(args) => handle_tui(args),
        Command::Project(args) => handle_project(args),
    }
}

fn handle_tui(args: InputArgs) -> Result<(), AppError> {
    // stderr would draw over the alternate screen, so only log to a file here.
    if let Some(path) = &args.log_file {
        logging::init_file(path)?;
    }
    let params = args.to_params()?;
    crate::tui::run(args.to_inputs(), params)
}

fn handle_project(args: ProjectArgs) -> Result<(), AppError> {
    match &args.inputs.log_file {
        Some(path) => logging::init_file(path)?,
        None => logging::init_stderr()?,
    }

    let inputs = args.inputs.to_inputs();
    let params = args.inputs.to_params()?;
    let series = crate::projection::series_with(inputs.loan_amount, inputs.annual_salary, params);
    info!(loan = inputs.loan_amount, salary = inputs.annual_salary, years = params.years, "projection computed");

    let mut out = if args.json {
        crate::report::ProjectionReport::new(&inputs, params, &series).to_json()?
    } else {
        crate::report::format_projection(&inputs, params, &series)
    };

    if args.plot && !args.json {
        let spec = crate::chart::ChartSpec::earnings(&series);
        out.push('\n');
        out.push_str(&crate::plot::render_ascii_bars(&spec, args.width));
    }

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{out}").map_err(|e| AppError::io("Failed to write output", e))?;
    Ok(())
}

/// Rewrite argv so `fe` defaults to `fe tui`.
///
/// Rules:
/// - `fe`                      -> `fe tui`
/// - `fe --loan 3000 ...`      -> `fe tui --loan 3000 ...`
/// - `fe --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "tui" | "project");
    if is_subcommand {
        return argv;
    }

    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    argv
}
