use std::fmt;
use thiserror::Error;

/// Which raw text field of a catalog entry failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Cost,
    Weight,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Cost => write!(f, "cost"),
            Field::Weight => write!(f, "weight"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadoutError {
    #[error("Failed to parse {field} {input:?}: {reason}")]
    Parse {
        field: Field,
        input: String,
        reason: String,
    },
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl LoadoutError {
    pub(crate) fn parse(field: Field, input: &str, reason: impl Into<String>) -> Self {
        LoadoutError::Parse {
            field,
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, LoadoutError::Parse { .. })
    }

    pub fn is_invalid_catalog(&self) -> bool {
        matches!(self, LoadoutError::InvalidCatalog(_))
    }
}

/// A catalog entry that could not be turned into an item.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Entry {index} ({name}): {source}")]
pub struct EntryError {
    pub index: usize,
    pub name: String,
    #[source]
    pub source: LoadoutError,
}

pub type Result<T> = std::result::Result<T, LoadoutError>;
