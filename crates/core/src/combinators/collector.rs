// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Action-recording executor wrapper.
//!
//! ```
//! # use std::convert::Infallible;
//! # use syncopate::combinators::Collector;
//! # use syncopate::{from_sync_fn, run, script};
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let collector = Collector::new(from_sync_fn(|n: u32| Ok::<_, Infallible>(n * 2)));
//! run(script([1, 2], |doubled: Vec<u32>| doubled), &collector).await?;
//! assert_eq!(collector.actions(), vec![1, 2]); // every action, in the order it arrived
//! # Ok(())
//! # }
//! ```

use syncopate_capture::ActionLog;

use crate::executor::Executor;

/// Records every action it sees, then delegates to the wrapped executor.
///
/// The action is appended before the wrapped executor is invoked, under a
/// lock, so the log stays complete and ordered even when the collector sits
/// beneath a parallel fan-out.
#[derive(Debug)]
pub struct Collector<A, E> {
    inner: E,
    log: ActionLog<A>,
}

impl<A, E> Collector<A, E> {
    /// Wrap `executor` with a fresh in-memory log
    pub fn new(executor: E) -> Self {
        Self::with_log(executor, ActionLog::new())
    }

    /// Wrap `executor`, recording into an existing log (e.g. one mirrored to a file).
    ///
    /// Every collector sharing `log` appends to it, so [`actions`](Self::actions)
    /// returns the union of what all of them observed.
    pub fn with_log(executor: E, log: ActionLog<A>) -> Self {
        Self {
            inner: executor,
            log,
        }
    }

    /// The underlying log, with sequence numbers and timing
    pub fn log(&self) -> &ActionLog<A> {
        &self.log
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    pub fn inner(&self) -> &E {
        &self.inner
    }

    /// Unwrap, returning the executor and the log
    pub fn into_parts(self) -> (E, ActionLog<A>) {
        (self.inner, self.log)
    }
}

impl<A: Clone, E> Collector<A, E> {
    /// Every action observed so far, oldest first
    pub fn actions(&self) -> Vec<A> {
        self.log.actions()
    }
}

impl<A, E> Executor<A> for Collector<A, E>
where
    A: Clone + Send,
    E: Executor<A>,
{
    type Output = E::Output;
    type Error = E::Error;

    fn execute(
        &self,
        action: A,
    ) -> impl std::future::Future<Output = Result<E::Output, E::Error>> + Send {
        self.log.record(action.clone());
        self.inner.execute(action)
    }
}

#[cfg(test)]
#[path = "collector_tests.rs"]
mod tests;
