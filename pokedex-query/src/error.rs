//! Error types for dataset queries.

use std::fmt;

use thiserror::Error;

/// Result type for query operations.
pub type QueryResult<T> = Result<T, QueryError>;

/// Which record sequence a lookup searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Category,
    Entity,
    Move,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RecordKind::Category => "type",
            RecordKind::Entity => "pokemon",
            RecordKind::Move => "move",
        };
        f.write_str(label)
    }
}

/// Errors reported to callers of the query engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// No record has the requested name.
    #[error("no {kind} named {name:?}")]
    NotFound { kind: RecordKind, name: String },

    /// The sort token is not in the [`SortKey`](crate::SortKey) table.
    #[error("invalid sort key: {0:?}")]
    InvalidSortKey(String),
}

impl QueryError {
    pub fn not_found(kind: RecordKind, name: &str) -> Self {
        Self::NotFound {
            kind,
            name: name.to_string(),
        }
    }
}
