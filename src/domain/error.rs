use thiserror::Error;

/// Construction-time failures. The computation itself cannot fail once a
/// graph has been built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("invalid argument: vertex count must be non-negative, got {vertex_count}")]
    InvalidArgument { vertex_count: i64 },
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    OutOfRange { vertex: i64, vertex_count: usize },
}
