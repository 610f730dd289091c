// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Walkthrough binary for syncopate.
//!
//! Measures a list of words by driving an orchestration through a stack of
//! combinators: a collector at the bottom, a logging tap above it, and a
//! parallel fan-out on top.

pub mod cli;
pub mod pipeline;

pub use cli::{Cli, PolicyArg, SinkArg};
pub use pipeline::{run_demo, DemoError, DemoSink, Outcome};
