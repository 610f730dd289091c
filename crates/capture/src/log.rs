// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Action log implementation.

use crate::record::CapturedAction;
use parking_lot::Mutex;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::{Instant, SystemTime};

type Mirror<A> = Arc<dyn Fn(&CapturedAction<A>) + Send + Sync>;

/// Append-only log of captured actions.
///
/// Clones share the same underlying storage, so a log handed to an executor
/// wrapper can still be inspected through the original handle. A shared log
/// holds the union of everything its handles recorded. Records are never
/// removed while any handle is alive, and sequence numbers are never reused.
pub struct ActionLog<A> {
    start: Instant,
    records: Arc<Mutex<Vec<CapturedAction<A>>>>,
    mirror: Option<Mirror<A>>,
}

impl<A> ActionLog<A> {
    /// Create a new in-memory action log
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            records: Arc::new(Mutex::new(Vec::new())),
            mirror: None,
        }
    }

    /// Create an action log that also writes every record to a file (JSONL format)
    pub fn with_file(path: &Path) -> std::io::Result<Self>
    where
        A: Serialize + 'static,
    {
        let file = File::create(path)?;
        let writer = Mutex::new(BufWriter::new(file));
        let mirror: Mirror<A> = Arc::new(move |record: &CapturedAction<A>| {
            let json = match serde_json::to_string(record) {
                Ok(json) => json,
                Err(e) => {
                    tracing::warn!(
                        seq = record.seq,
                        error = %e,
                        "action not mirrored to capture file"
                    );
                    return;
                }
            };
            let mut w = writer.lock();
            if let Err(e) = writeln!(w, "{}", json).and_then(|()| w.flush()) {
                tracing::warn!(seq = record.seq, error = %e, "capture file write failed");
            }
        });
        Ok(Self {
            start: Instant::now(),
            records: Arc::new(Mutex::new(Vec::new())),
            mirror: Some(mirror),
        })
    }

    /// Record an action.
    ///
    /// The sequence number is assigned under the same lock as the append, so
    /// concurrent writers never share or skip a number.
    pub fn record(&self, action: A) {
        let mut records = self.records.lock();
        let record = CapturedAction {
            seq: records.len() as u64,
            timestamp: SystemTime::now(),
            elapsed: self.start.elapsed(),
            action,
        };

        if let Some(ref mirror) = self.mirror {
            mirror(&record);
        }

        records.push(record);
    }

    /// Get the total number of recorded actions
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Count records matching a predicate
    pub fn count<F: Fn(&CapturedAction<A>) -> bool>(&self, pred: F) -> usize {
        self.records.lock().iter().filter(|r| pred(r)).count()
    }
}

impl<A: Clone> ActionLog<A> {
    /// Get all records, including sequence numbers and timing
    pub fn records(&self) -> Vec<CapturedAction<A>> {
        self.records.lock().clone()
    }

    /// Get the recorded actions in arrival order
    pub fn actions(&self) -> Vec<A> {
        self.records
            .lock()
            .iter()
            .map(|r| r.action.clone())
            .collect()
    }

    /// Get the last N records
    pub fn last(&self, n: usize) -> Vec<CapturedAction<A>> {
        let all = self.records.lock();
        all.iter().rev().take(n).rev().cloned().collect()
    }

    /// Give up this handle and take the records.
    ///
    /// Moves them out when this is the last handle; otherwise copies them and
    /// leaves the shared log untouched for the remaining handles.
    pub fn into_records(self) -> Vec<CapturedAction<A>> {
        match Arc::try_unwrap(self.records) {
            Ok(records) => records.into_inner(),
            Err(shared) => shared.lock().clone(),
        }
    }
}

impl<A> Default for ActionLog<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Clone for ActionLog<A> {
    fn clone(&self) -> Self {
        Self {
            start: self.start,
            records: Arc::clone(&self.records),
            mirror: self.mirror.as_ref().map(Arc::clone),
        }
    }
}

impl<A> std::fmt::Debug for ActionLog<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionLog")
            .field("len", &self.len())
            .field("mirrored", &self.mirror.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
