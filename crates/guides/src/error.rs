use thiserror::Error;

pub type Result<T> = std::result::Result<T, GuideError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuideError {
    #[error("unknown operation: {0}")]
    UnknownOperation(String),
}

impl GuideError {
    /// Name of the operation the caller asked for.
    pub fn operation(&self) -> &str {
        match self {
            Self::UnknownOperation(name) => name,
        }
    }
}
