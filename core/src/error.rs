use std::path::PathBuf;
use thiserror::Error;

/// Failures while reading the postings file. All of them end the run.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("dataset file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read dataset {}: {reason}", .path.display())]
    Read { path: PathBuf, reason: String },

    #[error("required column '{column}' missing from {}", .path.display())]
    Schema { path: PathBuf, column: String },
}

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("empty subset ({empty}): local={local} remote={remote}")]
    EmptySubset { empty: &'static str, local: usize, remote: usize },

    #[error("invalid remote pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Scoped to a single subset; the run keeps going without it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RankError {
    #[error("the query shares no retained vocabulary with the {0} documents; try a more descriptive query")]
    EmptyVocabulary(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("the query text must not be empty")]
    EmptyQuery,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration error: {0}")]
    Source(#[from] ::config::ConfigError),
}
