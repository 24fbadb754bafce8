use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Document contains no analyzable text")]
    EmptyDocument,

    #[error("Unknown compliance framework: {0}")]
    UnknownFramework(String),
}
