use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, info};

use semrel_core::ReleaseOptions;

use crate::error::EngineError;
use crate::result::ReleaseResult;
use crate::{ReleaseEngine, Result};

/// Default engine executable, looked up on `PATH`.
pub const DEFAULT_ENGINE_PROGRAM: &str = "semantic-release";

/// Release engine driven as a child process.
///
/// Wire contract: the engine runs in the working directory, receives the
/// sanitized options JSON on stdin, and prints the release result JSON on
/// stdout. An empty, `null`, or `false` stdout means no release was
/// warranted. Anything written to stderr is reserved for the engine's own
/// logging and only surfaces when the engine fails.
pub struct CommandEngine {
    program: String,
}

impl CommandEngine {
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for CommandEngine {
    fn default() -> Self {
        Self::new(DEFAULT_ENGINE_PROGRAM)
    }
}

impl ReleaseEngine for CommandEngine {
    fn run(&self, options: &ReleaseOptions, work_dir: &Path) -> Result<Option<ReleaseResult>> {
        let payload = options.to_sanitized_value().map_err(EngineError::Options)?;

        debug!("invoking release engine '{}' in {}", self.program, work_dir.display());
        let mut child = Command::new(&self.program)
            .current_dir(work_dir)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| EngineError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(payload.to_string().as_bytes())
                .map_err(EngineError::Io)?;
        }

        let output = child.wait_with_output().map_err(EngineError::Io)?;
        if !output.status.success() {
            return Err(EngineError::Failed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_engine_output(stdout.trim())
    }
}

fn parse_engine_output(stdout: &str) -> Result<Option<ReleaseResult>> {
    if stdout.is_empty() || stdout == "null" || stdout == "false" {
        debug!("no release published");
        return Ok(None);
    }

    let result: ReleaseResult = serde_json::from_str(stdout).map_err(EngineError::Parse)?;
    info!(
        "release engine result: {}",
        serde_json::to_string_pretty(&result).unwrap_or_default()
    );
    Ok(Some(result))
}
