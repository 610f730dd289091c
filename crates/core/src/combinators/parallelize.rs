// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fan-out/fan-in over a batch of actions.
//!
//! Branches run concurrently on the caller's task through a
//! `FuturesUnordered`; nothing is spawned. Results are slotted back by
//! index, so the output order always matches the input order no matter
//! which branch finishes first.

use futures::stream::{FuturesUnordered, StreamExt};

use crate::executor::Executor;

/// Input accepted by a [`Parallel`] executor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dispatch<A> {
    /// A single action, passed straight through
    One(A),
    /// A batch, fanned out concurrently
    Many(Vec<A>),
}

impl<A> From<Vec<A>> for Dispatch<A> {
    fn from(actions: Vec<A>) -> Self {
        Dispatch::Many(actions)
    }
}

/// Output of a [`Parallel`] executor, shaped like its input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Gathered<R> {
    One(R),
    /// Positionally aligned with the dispatched batch
    Many(Vec<R>),
}

impl<R> Gathered<R> {
    /// The single result, if this was a single dispatch
    pub fn into_one(self) -> Option<R> {
        match self {
            Gathered::One(r) => Some(r),
            Gathered::Many(_) => None,
        }
    }

    /// The batch results, if this was a batch dispatch
    pub fn into_many(self) -> Option<Vec<R>> {
        match self {
            Gathered::Many(rs) => Some(rs),
            Gathered::One(_) => None,
        }
    }
}

/// What happens to sibling branches once one branch fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Drop every branch still in flight and return the failure at once.
    #[default]
    CancelSiblings,
    /// Launch nothing new, let in-flight branches finish, then return the
    /// first failure observed.
    DrainSiblings,
}

/// Tuning for a [`Parallel`] executor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Sibling handling on failure
    pub policy: FailurePolicy,
    /// Upper bound on branches in flight at once; `None` runs the whole batch together
    pub max_in_flight: Option<usize>,
}

impl ParallelConfig {
    /// Set the failure policy
    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Cap concurrent branches (a cap of zero is treated as one)
    pub fn with_max_in_flight(mut self, limit: Option<usize>) -> Self {
        self.max_in_flight = limit;
        self
    }
}

/// Executor that accepts a single action or a batch of actions.
///
/// Built with [`parallelize`] or [`parallelize_with`].
#[derive(Clone, Debug)]
pub struct Parallel<E> {
    inner: E,
    config: ParallelConfig,
}

/// Wrap `executor` so it can interpret a batch of actions concurrently.
pub fn parallelize<E>(executor: E) -> Parallel<E> {
    parallelize_with(executor, ParallelConfig::default())
}

/// Like [`parallelize`], with explicit tuning.
pub fn parallelize_with<E>(executor: E, config: ParallelConfig) -> Parallel<E> {
    Parallel {
        inner: executor,
        config,
    }
}

impl<E> Parallel<E> {
    pub fn config(&self) -> &ParallelConfig {
        &self.config
    }

    pub fn inner(&self) -> &E {
        &self.inner
    }

    pub fn into_inner(self) -> E {
        self.inner
    }

    /// Interpret one action; identical to calling the wrapped executor.
    pub async fn call<A>(&self, action: A) -> Result<E::Output, E::Error>
    where
        E: Executor<A>,
    {
        self.inner.execute(action).await
    }

    /// Interpret every action concurrently and return results in input order.
    ///
    /// An empty batch returns an empty vector without touching the executor.
    pub async fn call_batch<A>(&self, actions: Vec<A>) -> Result<Vec<E::Output>, E::Error>
    where
        E: Executor<A>,
    {
        let total = actions.len();
        let limit = self.config.max_in_flight.unwrap_or(total).max(1);
        let mut slots: Vec<Option<E::Output>> =
            std::iter::repeat_with(|| None).take(total).collect();
        let mut pending = actions.into_iter().enumerate();
        let mut in_flight = FuturesUnordered::new();
        let mut first_error = None;

        // The executor is invoked eagerly, so invocations start in input
        // order; only completion order is free.
        let launch = |index: usize, action: A| {
            let invocation = self.inner.execute(action);
            async move { (index, invocation.await) }
        };

        for (index, action) in pending.by_ref().take(limit) {
            in_flight.push(launch(index, action));
        }

        while let Some((index, outcome)) = in_flight.next().await {
            match outcome {
                Ok(output) => slots[index] = Some(output),
                Err(e) => {
                    tracing::debug!(
                        index,
                        total,
                        policy = ?self.config.policy,
                        "parallel branch failed"
                    );
                    match self.config.policy {
                        FailurePolicy::CancelSiblings => return Err(e),
                        FailurePolicy::DrainSiblings => {
                            if first_error.is_none() {
                                first_error = Some(e);
                            }
                        }
                    }
                }
            }

            if first_error.is_none() {
                if let Some((index, action)) = pending.next() {
                    in_flight.push(launch(index, action));
                }
            }
        }

        if let Some(e) = first_error {
            return Err(e);
        }
        tracing::debug!(total, "parallel batch joined");
        Ok(slots.into_iter().flatten().collect())
    }
}

impl<A, E> Executor<Dispatch<A>> for Parallel<E>
where
    A: Send,
    E: Executor<A>,
{
    type Output = Gathered<E::Output>;
    type Error = E::Error;

    async fn execute(&self, dispatch: Dispatch<A>) -> Result<Gathered<E::Output>, E::Error> {
        match dispatch {
            Dispatch::One(action) => self.call(action).await.map(Gathered::One),
            Dispatch::Many(actions) => self.call_batch(actions).await.map(Gathered::Many),
        }
    }
}

#[cfg(test)]
#[path = "parallelize_tests.rs"]
mod tests;
