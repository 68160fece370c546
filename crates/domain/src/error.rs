use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    EmptyAssetId,
    InvalidBatchSize(usize),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyAssetId => write!(f, "asset id must not be empty"),
            Self::InvalidBatchSize(value) => {
                write!(f, "batch size must be positive, got {value}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
