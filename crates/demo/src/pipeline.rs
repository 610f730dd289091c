// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The demo's orchestration and executor stack.

use std::time::Duration;

use syncopate::capture::ActionLog;
use syncopate::combinators::{
    logged_with, parallelize_with, Collector, Dispatch, Gathered, LogSink, StdoutSink, TracingSink,
};
use syncopate::{from_fn, run, script, Executor, ProtocolError, RunError};

use crate::cli::{Cli, SinkArg};

#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("refusing to measure {0:?}")]
    Rejected(String),

    #[error("orchestration misbehaved: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("cannot open capture file: {0}")]
    Capture(#[from] std::io::Error),
}

impl From<RunError<ProtocolError, DemoError>> for DemoError {
    fn from(e: RunError<ProtocolError, DemoError>) -> Self {
        match e {
            RunError::Orchestration(e) => e.into(),
            RunError::Executor(e) => e,
        }
    }
}

/// Log sink picked on the command line.
#[derive(Clone, Copy, Debug)]
pub enum DemoSink {
    Stdout(StdoutSink),
    Tracing(TracingSink),
    Silent,
}

impl From<SinkArg> for DemoSink {
    fn from(arg: SinkArg) -> Self {
        match arg {
            SinkArg::Stdout => DemoSink::Stdout(StdoutSink),
            SinkArg::Tracing => DemoSink::Tracing(TracingSink),
            SinkArg::None => DemoSink::Silent,
        }
    }
}

impl LogSink for DemoSink {
    fn log(&self, message: &str) {
        match self {
            DemoSink::Stdout(sink) => sink.log(message),
            DemoSink::Tracing(sink) => sink.log(message),
            DemoSink::Silent => {}
        }
    }
}

/// What a successful run produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// Byte length of each word, in input order
    pub lengths: Vec<usize>,
    /// Actions in the order the collector saw them
    pub actions: Vec<String>,
}

/// Byte length of a word, after a short pause proportional to it.
///
/// Longer words finish later, so a batch completes out of order.
fn measure(fail_on: Option<String>) -> impl Executor<String, Output = usize, Error = DemoError> {
    from_fn(move |word: String| {
        let rejected = fail_on.as_deref() == Some(word.as_str());
        async move {
            tokio::time::sleep(Duration::from_millis(word.len() as u64)).await;
            if rejected {
                return Err(DemoError::Rejected(word));
            }
            Ok(word.len())
        }
    })
}

/// Run the demo described by `cli`.
pub async fn run_demo(cli: &Cli) -> Result<Outcome, DemoError> {
    let log = match &cli.capture {
        Some(path) => ActionLog::with_file(path)?,
        None => ActionLog::new(),
    };
    let exec = parallelize_with(
        logged_with(
            Collector::with_log(measure(cli.fail_on.clone()), log),
            DemoSink::from(cli.log),
        ),
        cli.parallel_config(),
    );

    let lengths = if cli.parallel {
        tracing::debug!(words = cli.words.len(), "dispatching one batch");
        let orch = script([Dispatch::Many(cli.words.clone())], |gathered: Vec<Gathered<usize>>| {
            gathered
                .into_iter()
                .flat_map(|g| g.into_many().unwrap_or_default())
                .collect::<Vec<_>>()
        });
        run(orch, &exec).await?
    } else {
        tracing::debug!(words = cli.words.len(), "dispatching one word at a time");
        let orch = script(
            cli.words.iter().cloned().map(Dispatch::One),
            |gathered: Vec<Gathered<usize>>| {
                gathered
                    .into_iter()
                    .filter_map(Gathered::into_one)
                    .collect::<Vec<_>>()
            },
        );
        run(orch, &exec).await?
    };

    Ok(Outcome {
        lengths,
        actions: exec.inner().inner().actions(),
    })
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
