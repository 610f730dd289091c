// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use rstest::rstest;

#[rstest]
#[case(ProtocolError::Exhausted, "already completed")]
#[case(ProtocolError::MissingResult, "without a result")]
#[case(ProtocolError::UnexpectedResult, "before yielding")]
fn test_protocol_error_messages(#[case] error: ProtocolError, #[case] fragment: &str) {
    assert!(error.to_string().contains(fragment), "{}", error);
}

#[test]
fn test_run_error_display_names_the_side() {
    let orchestration: RunError<String, String> = RunError::Orchestration("bad state".into());
    let executor: RunError<String, String> = RunError::Executor("boom".into());

    assert_eq!(orchestration.to_string(), "orchestration failed: bad state");
    assert_eq!(executor.to_string(), "executor failed: boom");
}

#[test]
fn test_run_error_accessors() {
    let err: RunError<ProtocolError, &str> = RunError::Executor("disk full");
    assert!(err.is_executor());
    assert_eq!(err.executor_error(), Some("disk full"));

    let err: RunError<ProtocolError, &str> = RunError::Orchestration(ProtocolError::Exhausted);
    assert!(!err.is_executor());
    assert_eq!(err.orchestration_error(), Some(ProtocolError::Exhausted));
}

#[test]
fn test_run_error_into_inner() {
    let err: RunError<&str, &str> = RunError::Executor("same");
    assert_eq!(err.into_inner(), "same");

    let err: RunError<&str, &str> = RunError::Orchestration("other");
    assert_eq!(err.into_inner(), "other");
}
