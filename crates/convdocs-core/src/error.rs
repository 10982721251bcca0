use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid rule id '{0}': ids must be non-empty file stems without separators or whitespace")]
    InvalidRuleId(String),

    #[error("invalid category key '{0}'")]
    InvalidCategoryKey(String),

    #[error("duplicate rule id '{0}'")]
    DuplicateRule(String),

    #[error("duplicate category '{0}'")]
    DuplicateCategory(String),

    #[error("rule '{id}' refers to unknown category '{category}'")]
    UnknownCategory { id: String, category: String },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {what}: {source}")]
    Parse {
        what: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid content pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

impl CoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(what: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Parse {
            what: what.into(),
            source,
        }
    }
}
