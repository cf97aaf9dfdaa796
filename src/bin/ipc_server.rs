#![allow(missing_docs)]
//! IPC Server for the SignBot Plugin
//!
//! Runs as a subprocess and answers JSON-RPC requests over stdin/stdout so
//! any runtime (TypeScript, Python, Go, ...) can use the Rust engine.
//!
//! ## Usage
//!
//! ```bash
//! cargo build --features ipc --bin signbot-ipc
//! SIGNBOT_CATALOG=./my-catalog.json RUST_LOG=debug ./signbot-ipc
//! ```
//!
//! ## Protocol
//!
//! One request per line on stdin, one response per line on stdout. Logs go
//! to stderr.
//!
//! ### Example Request
//! ```json
//! {"id": 1, "method": "generateResponse", "params": {"input": "hello", "context": {"activeMode": "word", "toggleActive": true}}}
//! ```

use anyhow::Context;
use elizaos_plugin_signbot::interop::{handle_ipc_request, init_plugin, IpcRequest, IpcResponse};
use std::io::{self, BufRead, Write};
use tracing::{error, info};

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();
}

fn load_catalog_from_env() -> anyhow::Result<()> {
    let path = match std::env::var("SIGNBOT_CATALOG") {
        Ok(p) if !p.trim().is_empty() => p,
        _ => return Ok(()),
    };
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("reading catalog {}", path))?;
    init_plugin(&raw).map_err(anyhow::Error::msg)?;
    info!(path = %path, "Loaded custom catalog");
    Ok(())
}

fn write_response(stdout: &mut impl Write, response: &IpcResponse) {
    match serde_json::to_string(response) {
        Ok(output) => {
            writeln!(stdout, "{}", output).ok();
            stdout.flush().ok();
        }
        Err(e) => error!("Error serializing response: {}", e),
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    load_catalog_from_env()?;
    info!("Server started, waiting for requests...");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                error!("Error reading input: {}", e);
                continue;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<IpcRequest>(&line) {
            Ok(request) => handle_ipc_request(&request),
            Err(e) => IpcResponse::error(0, &format!("Invalid JSON: {}", e)),
        };
        write_response(&mut stdout, &response);
    }

    info!("Server shutting down");
    Ok(())
}
