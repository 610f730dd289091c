// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! syncopate-demo binary entry point.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use syncopate_demo::{run_demo, Cli};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run_demo(&cli).await {
        Ok(outcome) => {
            println!("result: {:?}", outcome.lengths);
            println!("actions: {:?}", outcome.actions);
            Ok(())
        }
        Err(e) => {
            tracing::debug!(error = ?e, "demo failed");
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
