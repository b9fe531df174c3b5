#[derive(Debug, thiserror::Error)]
pub enum NexusError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid value: {0}")]
    Value(#[from] nexus_types::TextError),

    #[error("failed to read case file: {0}")]
    FileRead(std::io::Error),
    #[error("invalid case dataset at `{path}`: {source}")]
    CaseDataset {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("duplicate historical case id: {0}")]
    DuplicateCaseId(String),
    #[error("invalid historical case {id}: {reason}")]
    InvalidCase { id: String, reason: String },
    #[error("case store unavailable: {0}")]
    StoreUnavailable(String),
}

impl NexusError {
    /// Whether this error was caused by caller input rather than a fault in the system.
    pub fn is_input_error(&self) -> bool {
        matches!(self, NexusError::InvalidInput(_) | NexusError::Value(_))
    }
}

pub type NexusResult<T> = std::result::Result<T, NexusError>;
