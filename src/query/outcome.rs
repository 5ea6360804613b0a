//! Outcome types returned by the executor and the table loader.
//!
//! Neither component returns `Err`: database failures are folded into these
//! values at the point of execution so callers only ever render them.

use std::fmt;

use serde::Serialize;

use crate::db::QueryResult;
use crate::error::ConsoleError;

/// The two kinds of failure a user can see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    Load,
    Query,
}

impl ErrorKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Load => "Load Error",
            Self::Query => "Query Error",
        }
    }
}

/// A user-facing failure description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorDescription {
    pub kind: ErrorKind,
    /// Message derived from the underlying database error.
    pub message: String,
}

impl ErrorDescription {
    pub fn query(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Query,
            message: message.into(),
        }
    }

    /// Builds a load failure; the message always names the table.
    pub fn load(table: &str, cause: impl fmt::Display) -> Self {
        Self {
            kind: ErrorKind::Load,
            message: ConsoleError::load(table, cause.to_string()).to_string(),
        }
    }

    /// Folds a client error into a query failure, keeping the driver's wording.
    pub fn from_query_error(error: &ConsoleError) -> Self {
        let message = match error {
            ConsoleError::Query(msg) => msg.clone(),
            other => other.to_string(),
        };
        Self::query(message)
    }
}

impl fmt::Display for ErrorDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::Query => write!(f, "{}: {}", self.kind.label(), self.message),
            ErrorKind::Load => write!(f, "{}", self.message),
        }
    }
}

/// Result of running a piece of SQL.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExecutionOutcome {
    Success(QueryResult),
    Failure(ErrorDescription),
}

impl ExecutionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn result(&self) -> Option<&QueryResult> {
        match self {
            Self::Success(result) => Some(result),
            Self::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&ErrorDescription> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }
}

/// Result of loading one table.
///
/// On failure `result` is empty and `failure` names the table.
#[derive(Debug, Clone, Serialize)]
pub struct LoadOutcome {
    pub table: String,
    pub result: QueryResult,
    pub failure: Option<ErrorDescription>,
}

impl LoadOutcome {
    pub fn loaded(table: impl Into<String>, result: QueryResult) -> Self {
        Self {
            table: table.into(),
            result,
            failure: None,
        }
    }

    pub fn failed(table: impl Into<String>, failure: ErrorDescription) -> Self {
        Self {
            table: table.into(),
            result: QueryResult::new(),
            failure: Some(failure),
        }
    }

    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }
}
