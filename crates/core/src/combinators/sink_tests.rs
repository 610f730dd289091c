// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;

#[test]
fn test_memory_sink_records_in_order() {
    let sink = MemorySink::new();
    assert!(sink.is_empty());

    sink.log("one");
    sink.log("two");

    assert_eq!(sink.len(), 2);
    assert_eq!(sink.lines(), vec!["one", "two"]);
}

#[test]
fn test_memory_sink_clones_share_buffer() {
    let sink = MemorySink::new();
    let handle = sink.clone();

    handle.log("from clone");

    assert_eq!(sink.lines(), vec!["from clone"]);
}

#[test]
fn test_closure_sink() {
    let captured = Mutex::new(Vec::new());
    let sink = |message: &str| captured.lock().push(message.len());

    sink.log("abc");
    sink.log("");

    assert_eq!(*captured.lock(), vec![3, 0]);
}

#[test]
fn test_stdout_and_tracing_sinks_accept_messages() {
    // Neither has observable state; both must simply not fail.
    StdoutSink.log("[LOG] stdout sink smoke test");
    TracingSink.log("[LOG] tracing sink smoke test");
}
