// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use syncopate::combinators::{FailurePolicy, ParallelConfig};

/// Drive a sample orchestration through syncopate's combinators
#[derive(Parser, Debug, Clone)]
#[command(name = "syncopate-demo", version, about = "Measure words through a stack of executors")]
pub struct Cli {
    /// Words to measure, in order
    #[arg(value_name = "WORD", default_values = ["a", "bb", "ccc"])]
    pub words: Vec<String>,

    /// Dispatch every word as one concurrent batch
    #[arg(long, env = "SYNCOPATE_PARALLEL")]
    pub parallel: bool,

    /// What a failing branch does to its siblings
    #[arg(long, value_enum, default_value = "cancel", env = "SYNCOPATE_POLICY")]
    pub policy: PolicyArg,

    /// Upper bound on branches in flight during a batch
    #[arg(long)]
    pub max_in_flight: Option<usize>,

    /// Reject this word when it is executed
    #[arg(long, env = "SYNCOPATE_FAIL_ON")]
    pub fail_on: Option<String>,

    /// Where execution log lines go
    #[arg(long, value_enum, default_value = "stdout")]
    pub log: SinkArg,

    /// Mirror every executed action to this JSONL file
    #[arg(long, env = "SYNCOPATE_CAPTURE")]
    pub capture: Option<PathBuf>,
}

impl Cli {
    pub fn parallel_config(&self) -> ParallelConfig {
        ParallelConfig::default()
            .with_policy(self.policy.into())
            .with_max_in_flight(self.max_in_flight)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Drop in-flight siblings on the first failure
    #[default]
    Cancel,
    /// Let in-flight siblings finish, then report the first failure
    Drain,
}

impl From<PolicyArg> for FailurePolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Cancel => FailurePolicy::CancelSiblings,
            PolicyArg::Drain => FailurePolicy::DrainSiblings,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SinkArg {
    /// Plain lines on stdout
    #[default]
    Stdout,
    /// `info` events through tracing (see RUST_LOG)
    Tracing,
    /// Discard log lines
    None,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
