use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::Result;
use crate::environment::Environment;
use crate::error::CiError;
use crate::platform::CiPlatform;

const OUTPUT_FILE_VAR: &str = "GITHUB_OUTPUT";
const ENV_FILE_VAR: &str = "GITHUB_ENV";
const SUMMARY_FILE_VAR: &str = "GITHUB_STEP_SUMMARY";

/// Delimiter for multi-line values in the key/value command files.
const MULTILINE_DELIMITER: &str = "__SEMREL_EOF__";

/// GitHub-Actions-compatible command surface.
///
/// Inputs arrive as `INPUT_*` variables in the captured environment; step
/// outputs, exported variables, and the run summary are the line-oriented
/// files named by `GITHUB_OUTPUT`, `GITHUB_ENV`, and `GITHUB_STEP_SUMMARY`.
/// Gitea's runner provides the same surfaces, which is what makes the
/// alternate-runner support a pure input-naming concern.
pub struct GithubPlatform {
    environment: Environment,
}

impl GithubPlatform {
    #[must_use]
    pub fn new(environment: Environment) -> Self {
        Self { environment }
    }

    fn surface_path(&self, var: &'static str) -> Result<PathBuf> {
        self.environment
            .get(var)
            .map(PathBuf::from)
            .ok_or(CiError::MissingSurface { var })
    }

    fn append(&self, var: &'static str, record: &str) -> Result<()> {
        let path = self.surface_path(var)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| CiError::SurfaceWrite {
                path: path.clone(),
                source,
            })?;
        file.write_all(record.as_bytes())
            .map_err(|source| CiError::SurfaceWrite { path, source })
    }
}

fn format_record(name: &str, value: &str) -> String {
    if value.contains('\n') {
        format!("{name}<<{MULTILINE_DELIMITER}\n{value}\n{MULTILINE_DELIMITER}\n")
    } else {
        format!("{name}={value}\n")
    }
}

/// Escapes a message for a single-line workflow command annotation.
fn escape_annotation(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

impl CiPlatform for GithubPlatform {
    fn raw_input(&self, name: &str) -> Option<String> {
        let key = format!("INPUT_{}", name.replace(' ', "_").to_ascii_uppercase());
        self.environment.get(&key).map(str::to_string)
    }

    fn env_var(&self, name: &str) -> Option<String> {
        self.environment.get(name).map(str::to_string)
    }

    fn set_output(&self, name: &str, value: &str) -> Result<()> {
        tracing::debug!("set-output: {name}={value}");
        self.append(OUTPUT_FILE_VAR, &format_record(name, value))
    }

    fn export_variable(&self, name: &str, value: &str) -> Result<()> {
        tracing::debug!("export-variable: {name}={value}");
        self.append(ENV_FILE_VAR, &format_record(name, value))
    }

    fn add_summary(&self, markdown: &str) -> Result<()> {
        let mut record = markdown.to_string();
        record.push('\n');
        self.append(SUMMARY_FILE_VAR, &record)
    }

    fn report_failure(&self, message: &str) {
        println!("::error::{}", escape_annotation(message));
    }
}
