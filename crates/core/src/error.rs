// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for driving orchestrations.

use thiserror::Error;

/// Misuse of the advance protocol by whoever drives an orchestration.
///
/// The runner never triggers these; they exist for orchestrations driven
/// by hand, or driven again after completion.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("orchestration advanced after it already completed")]
    Exhausted,

    #[error("orchestration resumed without a result for its pending action")]
    MissingResult,

    #[error("orchestration received a result before yielding any action")]
    UnexpectedResult,
}

/// Failure of a [`run`](crate::run) call, tagged with the side that raised it.
///
/// The wrapped value is passed through untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RunError<O, X> {
    #[error("orchestration failed: {0}")]
    Orchestration(O),

    #[error("executor failed: {0}")]
    Executor(X),
}

impl<O, X> RunError<O, X> {
    /// Whether the failure came from interpreting an action
    pub fn is_executor(&self) -> bool {
        matches!(self, RunError::Executor(_))
    }

    /// The executor failure, if that is what this is
    pub fn executor_error(self) -> Option<X> {
        match self {
            RunError::Executor(e) => Some(e),
            RunError::Orchestration(_) => None,
        }
    }

    /// The orchestration failure, if that is what this is
    pub fn orchestration_error(self) -> Option<O> {
        match self {
            RunError::Orchestration(e) => Some(e),
            RunError::Executor(_) => None,
        }
    }
}

impl<E> RunError<E, E> {
    /// Collapse to the inner error when both sides share one error type.
    pub fn into_inner(self) -> E {
        match self {
            RunError::Orchestration(e) | RunError::Executor(e) => e,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
