use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ReadingError {
    #[error("unknown topic: {0}")]
    UnknownTopic(String),
}
