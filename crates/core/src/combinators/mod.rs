// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Executor combinators.
//!
//! Each combinator takes an executor and returns a new one that keeps the
//! executor contract while adding behavior: hooks around each call, a record
//! of every action, or concurrent fan-out over a batch.

pub mod collector;
pub mod parallelize;
pub mod sink;
pub mod tap;

pub use collector::Collector;
pub use parallelize::{
    parallelize, parallelize_with, Dispatch, FailurePolicy, Gathered, Parallel, ParallelConfig,
};
pub use sink::{LogSink, MemorySink, StdoutSink, TracingSink};
pub use tap::{logged, logged_with, post, pre, Logged, Post, Pre};
