// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;

#[test]
fn test_captured_action_serialization() {
    let record = CapturedAction {
        seq: 3,
        timestamp: SystemTime::UNIX_EPOCH,
        elapsed: Duration::from_millis(1500),
        action: "fetch".to_string(),
    };

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["seq"], 3);
    assert_eq!(json["action"], "fetch");
    assert_eq!(json["elapsed"], 1_500_000);

    let parsed: CapturedAction<String> = serde_json::from_value(json).unwrap();
    assert_eq!(parsed.seq, 3);
    assert_eq!(parsed.elapsed, Duration::from_millis(1500));
    assert_eq!(parsed.into_action(), "fetch");
}

#[test]
fn test_captured_action_structured_payload() {
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    enum Command {
        Read { path: String },
        Sleep(u64),
    }

    let record = CapturedAction {
        seq: 0,
        timestamp: SystemTime::now(),
        elapsed: Duration::ZERO,
        action: Command::Read {
            path: "/tmp/x".to_string(),
        },
    };

    let json = serde_json::to_string(&record).unwrap();
    let parsed: CapturedAction<Command> = serde_json::from_str(&json).unwrap();
    assert_eq!(
        parsed.action,
        Command::Read {
            path: "/tmp/x".to_string()
        }
    );
    assert_ne!(parsed.action, Command::Sleep(0));
}
