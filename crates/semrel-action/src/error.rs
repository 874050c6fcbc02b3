use thiserror::Error;

#[derive(Debug, Error)]
pub enum ActionError {
    #[error("CI platform surface failed")]
    Ci(#[from] semrel_ci::CiError),

    #[error("release engine failed")]
    Engine(#[from] semrel_engine::EngineError),
}

pub type Result<T> = std::result::Result<T, ActionError>;
