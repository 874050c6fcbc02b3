use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CiError {
    #[error("command surface '{var}' is not available in this environment")]
    MissingSurface { var: &'static str },

    #[error("failed to write to command surface file '{path}'")]
    SurfaceWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
