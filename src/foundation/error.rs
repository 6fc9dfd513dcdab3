pub type ShowroomResult<T> = Result<T, ShowroomError>;

#[derive(thiserror::Error, Debug)]
pub enum ShowroomError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("asset error: {0}")]
    Asset(String),

    #[error("model error: {0}")]
    Model(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ShowroomError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    pub fn model(msg: impl Into<String>) -> Self {
        Self::Model(msg.into())
    }
}
