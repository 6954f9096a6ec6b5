use thiserror::Error;

/// Crate-wide result alias.
pub type IbisResult<T> = Result<T, IbisError>;

/// Errors surfaced by the ibis runtime.
#[derive(Debug, Error)]
pub enum IbisError {
    #[error("runtime already initialized")]
    AlreadyInitialized,

    #[error("runtime not initialized")]
    NotInitialized,

    #[error("invalid topic name: {0}")]
    InvalidTopic(String),

    #[error(
        "topic '{topic}' is registered with element type {existing}, requested {requested}"
    )]
    TopicTypeMismatch {
        topic: String,
        existing: &'static str,
        requested: &'static str,
    },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("internal error: {0}")]
    Internal(String),
}
