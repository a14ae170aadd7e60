//! Domain layer: pure, synchronous graph types and ports.

pub mod error;
pub mod graph;
pub mod traits;
pub mod traversal;
