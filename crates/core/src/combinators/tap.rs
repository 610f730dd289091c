// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Side-effecting hooks around an executor.
//!
//! None of these change the result. A hook may fail, in which case its error
//! is returned exactly as an executor error would be.

use std::fmt::Debug;

use super::sink::{LogSink, StdoutSink};
use crate::executor::Executor;

/// Runs a hook on each action before the wrapped executor sees it.
///
/// Built with [`pre`].
#[derive(Clone, Debug)]
pub struct Pre<E, F> {
    inner: E,
    hook: F,
}

/// Call `hook(&action)` before every `executor` invocation.
///
/// If the hook fails the executor is never invoked.
pub fn pre<E, F>(executor: E, hook: F) -> Pre<E, F> {
    Pre {
        inner: executor,
        hook,
    }
}

impl<E, F> Pre<E, F> {
    pub fn inner(&self) -> &E {
        &self.inner
    }

    pub fn into_inner(self) -> E {
        self.inner
    }
}

impl<A, E, F> Executor<A> for Pre<E, F>
where
    A: Send,
    E: Executor<A>,
    F: Fn(&A) -> Result<(), E::Error> + Send + Sync,
{
    type Output = E::Output;
    type Error = E::Error;

    async fn execute(&self, action: A) -> Result<E::Output, E::Error> {
        (self.hook)(&action)?;
        self.inner.execute(action).await
    }
}

/// Runs a hook on each (action, result) pair after the wrapped executor succeeds.
///
/// Built with [`post`].
#[derive(Clone, Debug)]
pub struct Post<E, F> {
    inner: E,
    hook: F,
}

/// Call `hook(&action, &result)` after every successful `executor` invocation.
///
/// If the hook fails, its error replaces the result even though the
/// underlying action already succeeded.
pub fn post<E, F>(executor: E, hook: F) -> Post<E, F> {
    Post {
        inner: executor,
        hook,
    }
}

impl<E, F> Post<E, F> {
    pub fn inner(&self) -> &E {
        &self.inner
    }

    pub fn into_inner(self) -> E {
        self.inner
    }
}

impl<A, E, F> Executor<A> for Post<E, F>
where
    A: Clone + Send,
    E: Executor<A>,
    F: Fn(&A, &E::Output) -> Result<(), E::Error> + Send + Sync,
{
    type Output = E::Output;
    type Error = E::Error;

    async fn execute(&self, action: A) -> Result<E::Output, E::Error> {
        let output = self.inner.execute(action.clone()).await?;
        (self.hook)(&action, &output)?;
        Ok(output)
    }
}

/// Writes a line before and after each action.
///
/// Built with [`logged`] or [`logged_with`].
#[derive(Clone, Debug)]
pub struct Logged<E, S = StdoutSink> {
    inner: E,
    sink: S,
}

/// Log every action and its result to standard output.
pub fn logged<E>(executor: E) -> Logged<E, StdoutSink> {
    logged_with(executor, StdoutSink)
}

/// Log every action and its result through `sink`.
///
/// The start line is written before the executor is invoked; the completion
/// line only after it succeeds. A failed action leaves only the start line.
pub fn logged_with<E, S>(executor: E, sink: S) -> Logged<E, S>
where
    S: LogSink,
{
    Logged {
        inner: executor,
        sink,
    }
}

impl<E, S> Logged<E, S> {
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn inner(&self) -> &E {
        &self.inner
    }

    pub fn into_inner(self) -> E {
        self.inner
    }
}

impl<A, E, S> Executor<A> for Logged<E, S>
where
    A: Debug + Send,
    E: Executor<A>,
    E::Output: Debug,
    S: LogSink,
{
    type Output = E::Output;
    type Error = E::Error;

    async fn execute(&self, action: A) -> Result<E::Output, E::Error> {
        self.sink.log(&format!("[LOG] Executing {:?}", action));
        let output = self.inner.execute(action).await?;
        self.sink.log(&format!("[LOG] Executed -> {:?}", output));
        Ok(output)
    }
}

#[cfg(test)]
#[path = "tap_tests.rs"]
mod tests;
