use crate::domain::graph::{Graph, SccResult};

pub trait SccDetector {
    fn compute_scc(&self, graph: &Graph) -> SccResult;
}

/// Visit action driven by a depth-first traversal.
///
/// `on_enter` runs when a vertex is first reached, before any of its
/// neighbors. `on_finish` runs once every vertex reachable from it within the
/// same traversal has finished.
pub trait DfsVisitor {
    fn on_enter(&mut self, _vertex: usize) {}

    fn on_finish(&mut self, _vertex: usize) {}
}
