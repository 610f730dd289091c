// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! End-to-end scenarios through the public API: an orchestration driven by
//! the runner against a stack of combinators.

use std::collections::VecDeque;
use std::convert::Infallible;
use std::time::Duration;

use syncopate::capture::ActionLog;
use syncopate::combinators::{
    logged_with, parallelize, parallelize_with, post, pre, Collector, Dispatch, FailurePolicy,
    Gathered, MemorySink, ParallelConfig,
};
use syncopate::{
    from_fn, from_sync_fn, run, script, unfold, Executor, Orchestration, ProtocolError, RunError,
    Step,
};

#[derive(Clone, Debug, PartialEq)]
enum Command {
    Fetch(String),
    Sum(Vec<u32>),
}

#[derive(Clone, Debug, PartialEq)]
enum Reply {
    Page(u32),
    Total(u32),
}

#[derive(Debug, PartialEq)]
enum AppError {
    Protocol(ProtocolError),
    Unexpected(Reply),
    NotFound(String),
}

impl From<ProtocolError> for AppError {
    fn from(e: ProtocolError) -> Self {
        AppError::Protocol(e)
    }
}

fn interpreter() -> impl Executor<Command, Output = Reply, Error = AppError> {
    from_fn(|command: Command| async move {
        tokio::time::sleep(Duration::from_millis(1)).await;
        match command {
            Command::Fetch(name) if name == "missing" => Err(AppError::NotFound(name)),
            Command::Fetch(name) => Ok(Reply::Page(name.len() as u32)),
            Command::Sum(values) => Ok(Reply::Total(values.iter().sum())),
        }
    })
}

/// Fetch every page, then ask for the sum of their sizes.
fn report(
    pages: Vec<&'static str>,
) -> impl Orchestration<Action = Command, Response = Reply, Return = u32, Error = AppError> {
    let mut queue: VecDeque<&'static str> = pages.into_iter().collect();
    unfold(
        Vec::new(),
        move |sizes: &mut Vec<u32>, input: Option<Reply>| -> Result<Step<Command, u32>, AppError> {
            match input {
                None | Some(Reply::Page(_)) => {
                    if let Some(Reply::Page(size)) = input {
                        sizes.push(size);
                    }
                    match queue.pop_front() {
                        Some(page) => Ok(Step::Yield(Command::Fetch(page.to_string()))),
                        None => Ok(Step::Yield(Command::Sum(sizes.clone()))),
                    }
                }
                Some(Reply::Total(total)) => Ok(Step::Complete(total)),
            }
        },
    )
}

#[tokio::test]
async fn test_two_actions_then_done() {
    let exec = from_sync_fn(|s: &'static str| Ok::<_, Infallible>(s.len()));
    assert_eq!(run(script(["a", "b"], |_: Vec<usize>| "done"), &exec).await, Ok("done"));

    let parallel = parallelize(exec);
    assert_eq!(parallel.call_batch(vec!["a", "bb"]).await, Ok(vec![1, 2]));
}

#[tokio::test]
async fn test_structured_orchestration_with_full_stack() {
    let sink = MemorySink::new();
    let collector = Collector::new(interpreter());
    let exec = logged_with(&collector, sink.clone());

    let total = run(report(vec!["home", "about"]), &exec).await.unwrap();

    assert_eq!(total, 9);
    assert_eq!(
        collector.actions(),
        vec![
            Command::Fetch("home".into()),
            Command::Fetch("about".into()),
            Command::Sum(vec![4, 5]),
        ]
    );
    assert_eq!(sink.len(), 6);
}

#[tokio::test]
async fn test_failure_aborts_run_without_rollback() {
    let sink = MemorySink::new();
    let collector = Collector::new(interpreter());
    let exec = logged_with(&collector, sink.clone());

    let err = run(report(vec!["home", "missing", "never"]), &exec)
        .await
        .unwrap_err();

    assert_eq!(err, RunError::Executor(AppError::NotFound("missing".into())));
    assert_eq!(collector.len(), 2);
    // Two lines for the success, one start line for the failure.
    assert_eq!(sink.len(), 3);
}

#[tokio::test]
async fn test_hooks_can_veto() {
    let exec = post(
        pre(interpreter(), |c: &Command| match c {
            Command::Sum(values) if values.is_empty() => Err(AppError::Unexpected(Reply::Total(0))),
            _ => Ok(()),
        }),
        |_: &Command, reply: &Reply| match reply {
            Reply::Page(0) => Err(AppError::Unexpected(reply.clone())),
            _ => Ok(()),
        },
    );

    assert_eq!(
        run(report(vec![]), &exec).await,
        Err(RunError::Executor(AppError::Unexpected(Reply::Total(0))))
    );
    assert_eq!(
        run(report(vec![""]), &exec).await,
        Err(RunError::Executor(AppError::Unexpected(Reply::Page(0))))
    );
    assert_eq!(run(report(vec!["x"]), &exec).await, Ok(1));
}

#[tokio::test]
async fn test_parallel_batches_inside_an_orchestration() {
    let log = ActionLog::new();
    let exec = parallelize_with(
        Collector::with_log(interpreter(), log.clone()),
        ParallelConfig::default().with_policy(FailurePolicy::DrainSiblings),
    );

    let orch = script(
        [
            Dispatch::Many(vec![Command::Fetch("ab".into()), Command::Fetch("abc".into())]),
            Dispatch::One(Command::Sum(vec![2, 3])),
        ],
        |replies: Vec<Gathered<Reply>>| replies,
    );

    let replies = run(orch, &exec).await.unwrap();
    assert_eq!(
        replies,
        vec![
            Gathered::Many(vec![Reply::Page(2), Reply::Page(3)]),
            Gathered::One(Reply::Total(5)),
        ]
    );
    assert_eq!(log.len(), 3);
    assert_eq!(log.records()[2].seq, 2);
}

#[tokio::test]
async fn test_parallel_failure_surfaces_through_run() {
    let exec = parallelize(interpreter());
    let orch = script(
        [Dispatch::Many(vec![
            Command::Fetch("fine".into()),
            Command::Fetch("missing".into()),
        ])],
        |_: Vec<Gathered<Reply>>| (),
    );

    let err = run(orch, &exec).await.unwrap_err();
    assert_eq!(
        err.executor_error(),
        Some(AppError::NotFound("missing".into()))
    );
}
