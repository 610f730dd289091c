// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The executor contract and closure adapters.

use std::future::{ready, Future};
use std::sync::Arc;

/// Interprets one action into one result.
///
/// Executors are shared by reference and may be invoked concurrently (see
/// [`Parallel`](crate::combinators::Parallel)), so they take `&self`.
pub trait Executor<A>: Send + Sync {
    /// Value produced for a successfully interpreted action
    type Output: Send;
    /// Failure produced while interpreting an action
    type Error: Send;

    /// Interpret `action`.
    fn execute(&self, action: A) -> impl Future<Output = Result<Self::Output, Self::Error>> + Send;
}

impl<A, E> Executor<A> for &E
where
    E: Executor<A> + ?Sized,
{
    type Output = E::Output;
    type Error = E::Error;

    fn execute(&self, action: A) -> impl Future<Output = Result<E::Output, E::Error>> + Send {
        (**self).execute(action)
    }
}

impl<A, E> Executor<A> for Arc<E>
where
    E: Executor<A> + ?Sized,
{
    type Output = E::Output;
    type Error = E::Error;

    fn execute(&self, action: A) -> impl Future<Output = Result<E::Output, E::Error>> + Send {
        (**self).execute(action)
    }
}

/// Executor backed by a closure returning a future.
///
/// Built with [`from_fn`].
#[derive(Clone, Copy, Debug)]
pub struct FnExecutor<F> {
    f: F,
}

/// Wrap an asynchronous closure as an executor.
pub fn from_fn<F>(f: F) -> FnExecutor<F> {
    FnExecutor { f }
}

impl<A, F, Fut, R, E> Executor<A> for FnExecutor<F>
where
    F: Fn(A) -> Fut + Send + Sync,
    Fut: Future<Output = Result<R, E>> + Send,
    R: Send,
    E: Send,
{
    type Output = R;
    type Error = E;

    fn execute(&self, action: A) -> impl Future<Output = Result<R, E>> + Send {
        (self.f)(action)
    }
}

/// Executor backed by a synchronous closure; completes immediately.
///
/// Built with [`from_sync_fn`].
#[derive(Clone, Copy, Debug)]
pub struct SyncExecutor<F> {
    f: F,
}

/// Wrap a synchronous closure as an executor.
pub fn from_sync_fn<F>(f: F) -> SyncExecutor<F> {
    SyncExecutor { f }
}

impl<A, F, R, E> Executor<A> for SyncExecutor<F>
where
    F: Fn(A) -> Result<R, E> + Send + Sync,
    R: Send,
    E: Send,
{
    type Output = R;
    type Error = E;

    fn execute(&self, action: A) -> impl Future<Output = Result<R, E>> + Send {
        ready((self.f)(action))
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
