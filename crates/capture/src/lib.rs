// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Action capture and recording for test assertions.
//!
//! This crate provides an append-only, thread-safe log of the actions an
//! executor has been asked to interpret, in the exact order they arrived.
//! The `syncopate` collector records into it; tests read it back once the
//! orchestration under test has finished.

mod duration_serde;
mod log;
mod record;

pub use log::ActionLog;
pub use record::CapturedAction;
