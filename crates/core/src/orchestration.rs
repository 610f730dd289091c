// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Resumable orchestrations.
//!
//! An orchestration is a single-use, strictly sequential computation. Each
//! call to [`Orchestration::advance`] either suspends it on the next action
//! it wants performed or completes it with its return value. The first call
//! receives `None`; every later call receives the result of the action the
//! previous call yielded.

use std::collections::VecDeque;
use std::marker::PhantomData;

use crate::error::ProtocolError;

/// Outcome of advancing an orchestration by one step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step<A, T> {
    /// Suspended, waiting for the result of this action
    Yield(A),
    /// Finished with a return value
    Complete(T),
}

impl<A, T> Step<A, T> {
    /// Whether the orchestration has finished
    pub fn is_complete(&self) -> bool {
        matches!(self, Step::Complete(_))
    }

    /// The yielded action, if any
    pub fn into_action(self) -> Option<A> {
        match self {
            Step::Yield(action) => Some(action),
            Step::Complete(_) => None,
        }
    }
}

/// A computation that alternately yields actions and accepts their results.
pub trait Orchestration {
    /// Request handed to an executor
    type Action;
    /// What the executor hands back for one action
    type Response;
    /// Final value produced once, on completion
    type Return;
    /// Failure raised while advancing
    type Error;

    /// Advance to the next suspension point.
    ///
    /// `input` is `None` on the first call and `Some(response)` for every
    /// call after a [`Step::Yield`].
    fn advance(
        &mut self,
        input: Option<Self::Response>,
    ) -> Result<Step<Self::Action, Self::Return>, Self::Error>;
}

impl<O> Orchestration for &mut O
where
    O: Orchestration + ?Sized,
{
    type Action = O::Action;
    type Response = O::Response;
    type Return = O::Return;
    type Error = O::Error;

    fn advance(
        &mut self,
        input: Option<O::Response>,
    ) -> Result<Step<O::Action, O::Return>, O::Error> {
        (**self).advance(input)
    }
}

/// Orchestration that yields a fixed list of actions, then folds their results.
///
/// Built with [`script`].
pub struct Script<A, R, F> {
    pending: VecDeque<A>,
    responses: Vec<R>,
    finish: Option<F>,
    started: bool,
}

/// Yield `actions` one at a time, in order, and complete with `finish`
/// applied to their responses.
pub fn script<A, R, T, F>(actions: impl IntoIterator<Item = A>, finish: F) -> Script<A, R, F>
where
    F: FnOnce(Vec<R>) -> T,
{
    Script {
        pending: actions.into_iter().collect(),
        responses: Vec::new(),
        finish: Some(finish),
        started: false,
    }
}

impl<A, R, F> Script<A, R, F> {
    /// Number of actions not yet yielded
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl<A, R, T, F> Orchestration for Script<A, R, F>
where
    F: FnOnce(Vec<R>) -> T,
{
    type Action = A;
    type Response = R;
    type Return = T;
    type Error = ProtocolError;

    fn advance(&mut self, input: Option<R>) -> Result<Step<A, T>, ProtocolError> {
        if self.finish.is_none() {
            return Err(ProtocolError::Exhausted);
        }
        match (self.started, input) {
            (false, Some(_)) => return Err(ProtocolError::UnexpectedResult),
            (false, None) => self.started = true,
            (true, None) => return Err(ProtocolError::MissingResult),
            (true, Some(response)) => self.responses.push(response),
        }

        if let Some(action) = self.pending.pop_front() {
            return Ok(Step::Yield(action));
        }
        let finish = self.finish.take().ok_or(ProtocolError::Exhausted)?;
        Ok(Step::Complete(finish(std::mem::take(&mut self.responses))))
    }
}

/// Orchestration driven by a step function over explicit state.
///
/// Built with [`unfold`].
pub struct Unfold<S, R, F> {
    state: S,
    step: F,
    started: bool,
    done: bool,
    _response: PhantomData<fn(R)>,
}

/// Build an orchestration from a state value and a step function.
///
/// The step function sees `None` exactly once, on the first advance, and the
/// previous action's response on every advance after that. Protocol misuse
/// is rejected before the step function runs, so `E` must be able to carry
/// a [`ProtocolError`].
pub fn unfold<S, R, A, T, E, F>(state: S, step: F) -> Unfold<S, R, F>
where
    F: FnMut(&mut S, Option<R>) -> Result<Step<A, T>, E>,
    E: From<ProtocolError>,
{
    Unfold {
        state,
        step,
        started: false,
        done: false,
        _response: PhantomData,
    }
}

impl<S, R, F> Unfold<S, R, F> {
    /// Current state
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Consume the orchestration, keeping its state
    pub fn into_state(self) -> S {
        self.state
    }
}

impl<S, R, A, T, E, F> Orchestration for Unfold<S, R, F>
where
    F: FnMut(&mut S, Option<R>) -> Result<Step<A, T>, E>,
    E: From<ProtocolError>,
{
    type Action = A;
    type Response = R;
    type Return = T;
    type Error = E;

    fn advance(&mut self, input: Option<R>) -> Result<Step<A, T>, E> {
        if self.done {
            return Err(ProtocolError::Exhausted.into());
        }
        match (self.started, &input) {
            (false, Some(_)) => return Err(ProtocolError::UnexpectedResult.into()),
            (true, None) => return Err(ProtocolError::MissingResult.into()),
            _ => self.started = true,
        }

        let outcome = (self.step)(&mut self.state, input);
        // A failed orchestration is as finished as a completed one.
        if !matches!(outcome, Ok(Step::Yield(_))) {
            self.done = true;
        }
        outcome
    }
}

#[cfg(test)]
#[path = "orchestration_tests.rs"]
mod tests;
