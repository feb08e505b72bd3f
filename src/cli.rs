use std::io;

use crate::batch::{run_batch, SubprocessRunner, BATCH_STEPS};
use crate::config::load_config;
use crate::data::validate::{validate_datasets, ValidationSeverity};
use crate::generate::Step;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Ownership,
    Map,
    Bump,
    All,
    Validate,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("ownership") => Some(Command::Ownership),
        Some("map") => Some(Command::Map),
        Some("bump") => Some(Command::Bump),
        Some("all") => Some(Command::All),
        Some("validate") => Some(Command::Validate),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Ownership) => run_step(Step::Ownership),
        Some(Command::Map) => run_step(Step::Map),
        Some(Command::Bump) => run_step(Step::Bump),
        Some(Command::All) => run_all(),
        Some(Command::Validate) => handle_validate(),
        None => {
            eprintln!("usage: petviz <ownership|map|bump|all|validate>");
            2
        }
    }
}

/// One generation step as a process: 0 on success, 1 with a diagnostic on failure.
pub fn run_step(step: Step) -> i32 {
    match load_config().and_then(|config| step.run(&config)) {
        Ok(report) => {
            let suffix = if step == Step::Map {
                " with State Comparison Mode"
            } else {
                ""
            };
            println!(
                "Visualization {} saved to {}{suffix}",
                step.number(),
                report.output.display()
            );
            0
        }
        Err(err) => {
            eprintln!(
                "failed to generate visualization {} ({}): {err}",
                step.number(),
                step.label()
            );
            1
        }
    }
}

/// Every step in order, each in its own process, stopping at the first failure.
pub fn run_all() -> i32 {
    if let Err(err) = load_config() {
        eprintln!("config error: {err}");
        return 1;
    }
    let mut runner = match SubprocessRunner::beside_current_exe() {
        Ok(runner) => runner,
        Err(err) => {
            eprintln!("unable to locate step binaries: {err}");
            return 1;
        }
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let outcome = match run_batch(&mut runner, &BATCH_STEPS, &mut out) {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("failed to report batch progress: {err}");
            return 1;
        }
    };
    if outcome.succeeded() {
        println!("\nOpen index.html in a web browser to view the article with visualizations.");
    }
    outcome.exit_code()
}

fn handle_validate() -> i32 {
    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("config error: {err}");
            return 1;
        }
    };
    let report = validate_datasets(&config);
    for diag in &report.diagnostics {
        if diag.severity == ValidationSeverity::Info {
            println!("{diag}");
        } else {
            eprintln!("{diag}");
        }
    }
    if report.has_errors() {
        eprintln!(
            "validation failed: {} issue(s)",
            report.count(ValidationSeverity::Error)
        );
        1
    } else {
        println!(
            "validation passed ({} warning(s))",
            report.count(ValidationSeverity::Warning)
        );
        0
    }
}

