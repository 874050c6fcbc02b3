use std::process::ExitStatus;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to serialize release options")]
    Options(#[source] serde_json::Error),

    #[error("failed to launch release engine '{program}'")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("release engine I/O failed")]
    Io(#[source] std::io::Error),

    #[error("release engine exited with {status}: {stderr}")]
    Failed { status: ExitStatus, stderr: String },

    #[error("release engine produced unparseable output")]
    Parse(#[source] serde_json::Error),
}
