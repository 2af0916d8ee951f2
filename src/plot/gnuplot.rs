use crate::plot::script::Script;
use anyhow::Context;
use std::path::Path;
use std::process::Command;
use tracing::{debug, error, info};

/// Result of a renderer run that got as far as exiting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    Success {
        stdout: String,
    },
    Failure {
        /// `None` if the renderer was terminated by a signal.
        exit_code: Option<i32>,
        stderr: String,
    },
}

impl RenderOutcome {
    pub fn report(&self) {
        match self {
            Self::Success { stdout } => info!("Gnuplot output: {}", stdout.trim_end()),
            Self::Failure { exit_code, stderr } => {
                error!(?exit_code, "Gnuplot error: {}", stderr.trim_end())
            }
        }
    }
}

/// Writes `script` to `script_path` and runs `program` on it.
///
/// A non-zero exit is reported as [`RenderOutcome::Failure`]; only I/O
/// problems (writing the script, spawning the program) are errors.
pub fn run_gnuplot(
    script: &Script,
    script_path: impl AsRef<Path>,
    program: &str,
) -> anyhow::Result<RenderOutcome> {
    let script_path = script_path.as_ref();
    std::fs::write(script_path, script.as_str())
        .with_context(|| format!("cannot write script {:?}", script_path))?;
    debug!(?script_path, program, "running renderer");

    let output = Command::new(program)
        .arg(script_path)
        .output()
        .with_context(|| format!("cannot run {:?}", program))?;

    let outcome = if output.status.success() {
        RenderOutcome::Success {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        }
    } else {
        RenderOutcome::Failure {
            exit_code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    };
    Ok(outcome)
}
