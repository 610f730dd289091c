// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The suspend/resume loop that drives an orchestration against an executor.

use crate::error::RunError;
use crate::executor::Executor;
use crate::orchestration::{Orchestration, Step};

/// Drive `orchestration` to completion, interpreting each action it yields
/// with `executor`.
///
/// Exactly one response is fed back per yielded action, in order. Failures
/// from either side end the run and are returned as-is inside [`RunError`];
/// actions already performed are not undone. There is no timeout: an
/// executor that never completes stalls the run.
pub async fn run<O, X>(
    mut orchestration: O,
    executor: &X,
) -> Result<O::Return, RunError<O::Error, X::Error>>
where
    O: Orchestration,
    X: Executor<O::Action, Output = O::Response>,
{
    let mut step = orchestration.advance(None).map_err(RunError::Orchestration)?;
    let mut performed = 0usize;

    loop {
        match step {
            Step::Yield(action) => {
                tracing::debug!(step = performed, "orchestration yielded an action");
                let response = executor
                    .execute(action)
                    .await
                    .map_err(|e| {
                        tracing::debug!(step = performed, "executor failed, abandoning run");
                        RunError::Executor(e)
                    })?;
                performed += 1;
                step = orchestration
                    .advance(Some(response))
                    .map_err(RunError::Orchestration)?;
            }
            Step::Complete(value) => {
                tracing::debug!(actions = performed, "orchestration completed");
                return Ok(value);
            }
        }
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
