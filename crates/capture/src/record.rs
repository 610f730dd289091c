// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Captured action record.

use super::duration_serde;
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime};

/// One action as observed by a capture log
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CapturedAction<A> {
    /// Position in the log, starting at zero
    pub seq: u64,

    /// Wall-clock timestamp
    pub timestamp: SystemTime,

    /// Elapsed time since the log was created, stored as microseconds
    #[serde(with = "duration_serde")]
    pub elapsed: Duration,

    /// The action itself
    pub action: A,
}

impl<A> CapturedAction<A> {
    /// Discard the bookkeeping and keep the action.
    pub fn into_action(self) -> A {
        self.action
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
