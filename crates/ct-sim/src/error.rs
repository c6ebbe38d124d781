use ct_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("store rejected tick: {0}")]
    Store(#[from] StoreError),

    #[error("simulator task failed: {0}")]
    Task(String),
}

pub type SimResult<T> = Result<T, SimError>;
