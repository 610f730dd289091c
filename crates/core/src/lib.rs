// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Effect-interpreter runtime.
//!
//! An [`Orchestration`] describes *what* should happen as a sequence of
//! actions; an [`Executor`] decides *how* each action is carried out. [`run`]
//! drives one against the other, feeding each result back until the
//! orchestration completes. The [`combinators`] wrap executors with extra
//! behavior without touching orchestration logic.
//!
//! ```
//! # use std::convert::Infallible;
//! use syncopate::combinators::{logged, Collector};
//! use syncopate::{from_sync_fn, run, script};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let collector = Collector::new(from_sync_fn(|s: &str| Ok::<_, Infallible>(s.len())));
//! let done = run(script(["a", "b"], |_: Vec<usize>| "done"), &logged(&collector)).await?;
//! assert_eq!(done, "done");
//! assert_eq!(collector.actions(), vec!["a", "b"]);
//! # Ok(())
//! # }
//! ```

pub mod combinators;
mod error;
mod executor;
mod orchestration;
mod runner;

pub use error::{ProtocolError, RunError};
pub use executor::{from_fn, from_sync_fn, Executor, FnExecutor, SyncExecutor};
pub use orchestration::{script, unfold, Orchestration, Script, Step, Unfold};
pub use runner::run;

/// Re-exported capture types from the syncopate-capture crate.
pub mod capture {
    pub use syncopate_capture::{ActionLog, CapturedAction};
}
