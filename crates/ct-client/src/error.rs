use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request to campus server failed: {0}")]
    Http(#[source] reqwest::Error),

    #[error("campus server answered {status}: {message}")]
    Server { status: u16, message: String },

    #[error("unknown building `{0}`")]
    UnknownBuilding(String),

    #[error("background task failed: {0}")]
    Task(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Http(err)
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
