//! Batch driver: run every generation step in order as its own process and
//! stop at the first failure. Files from earlier steps stay in place.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::Command;

use crate::generate::Step;

/// Fixed run order.
pub const BATCH_STEPS: [Step; 3] = [Step::Ownership, Step::Map, Step::Bump];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StepSuccess {
    /// Whatever the step printed, echoed after it finishes.
    pub stdout: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepFailure {
    pub exit_code: Option<i32>,
    pub diagnostic: String,
}

pub trait StepRunner {
    fn run_step(&mut self, step: Step) -> Result<StepSuccess, StepFailure>;
}

/// Runs each step's binary from the directory holding the current executable.
#[derive(Debug, Clone)]
pub struct SubprocessRunner {
    bin_dir: PathBuf,
}

impl SubprocessRunner {
    pub fn new(bin_dir: impl Into<PathBuf>) -> Self {
        Self {
            bin_dir: bin_dir.into(),
        }
    }

    /// Sibling binaries of the running executable.
    pub fn beside_current_exe() -> std::io::Result<Self> {
        let exe = std::env::current_exe()?;
        let dir = exe
            .parent()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        Ok(Self::new(dir))
    }

    pub fn step_binary(&self, step: Step) -> PathBuf {
        self.bin_dir
            .join(format!("{}{}", step.bin_name(), std::env::consts::EXE_SUFFIX))
    }
}

impl StepRunner for SubprocessRunner {
    fn run_step(&mut self, step: Step) -> Result<StepSuccess, StepFailure> {
        let program = self.step_binary(step);
        tracing::debug!(program = %program.display(), "spawning step");
        let output = Command::new(&program).output().map_err(|err| StepFailure {
            exit_code: None,
            diagnostic: format!("failed to run '{}': {err}", program.display()),
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if output.status.success() {
            return Ok(StepSuccess { stdout });
        }
        let stderr = String::from_utf8_lossy(&output.stderr);
        let diagnostic = match (stderr.trim(), stdout.trim()) {
            ("", "") => format!("{} exited with {}", step.bin_name(), output.status),
            ("", out) => out.to_string(),
            (err, _) => err.to_string(),
        };
        Err(StepFailure {
            exit_code: output.status.code(),
            diagnostic,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BatchOutcome {
    pub completed: Vec<Step>,
    pub failure: Option<(Step, StepFailure)>,
}

impl BatchOutcome {
    pub fn succeeded(&self) -> bool {
        self.failure.is_none()
    }

    pub fn exit_code(&self) -> i32 {
        if self.succeeded() {
            0
        } else {
            1
        }
    }
}

/// Run `steps` in order, writing progress to `out`. Stops at the first failure.
/// A failed write to `out` aborts the batch with that error.
pub fn run_batch<R: StepRunner, W: Write>(
    runner: &mut R,
    steps: &[Step],
    out: &mut W,
) -> io::Result<BatchOutcome> {
    let mut outcome = BatchOutcome::default();
    writeln!(out, "Generating all visualizations...")?;
    writeln!(out, "{}", "-".repeat(50))?;

    for &step in steps {
        let number = step.number();
        writeln!(out, "\n{number}. Generating {}...", step.label())?;
        match runner.run_step(step) {
            Ok(success) => {
                if !success.stdout.trim().is_empty() {
                    writeln!(out, "   {}", success.stdout.trim())?;
                }
                writeln!(out, "   ✓ Visualization {number} created successfully")?;
                outcome.completed.push(step);
            }
            Err(failure) => {
                writeln!(
                    out,
                    "   ✗ Error generating Visualization {number}: {}",
                    failure.diagnostic
                )?;
                tracing::error!(
                    step = step.bin_name(),
                    exit_code = ?failure.exit_code,
                    "step failed"
                );
                outcome.failure = Some((step, failure));
                return Ok(outcome);
            }
        }
    }

    writeln!(out, "\n{}", "-".repeat(50))?;
    writeln!(out, "All visualizations generated successfully!")?;
    Ok(outcome)
}
