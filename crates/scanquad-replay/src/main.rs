// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// scanquad-replay: replay a gesture script and print the committed corners.
//
// Usage: scanquad-replay <script.json>
//
// The result goes to stdout as pretty JSON; logs go to stderr and are
// filtered by RUST_LOG (default `info`).

use std::path::Path;
use std::process::ExitCode;

use scanquad_core::error::Result;
use scanquad_replay::{load_script, run_script};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let Some(path) = std::env::args_os().nth(1) else {
        eprintln!("usage: scanquad-replay <script.json>");
        return ExitCode::from(2);
    };

    match replay(Path::new(&path)) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Replay failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn replay(path: &Path) -> Result<String> {
    let script = load_script(path)?;
    let output = run_script(&script)?;
    Ok(serde_json::to_string_pretty(&output)?)
}
