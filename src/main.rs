//! Binary entrypoint.
//!
//! The crate is split into layers:
//! - domain: graph types, traversal state, ports
//! - infrastructure: DFS, Kosaraju detector, NDJSON output
//! - usecase: orchestration + progress events + verification
//! - interface: CLI wiring

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    kosaraju_scc::interface::cli::run().await
}
