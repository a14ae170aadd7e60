//! Per-computation traversal state and the two visit actions Kosaraju needs.
//!
//! None of this outlives a single SCC computation; a fresh set is built for
//! every call so one [`Graph`](crate::domain::graph::Graph) can be shared
//! between independent computations.

use crate::domain::traits::DfsVisitor;

/// Visited marks for one DFS pass.
#[derive(Debug, Clone)]
pub struct VisitedSet {
    seen: Vec<bool>,
}

impl VisitedSet {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            seen: vec![false; vertex_count],
        }
    }

    pub fn is_visited(&self, vertex: usize) -> bool {
        self.seen[vertex]
    }

    /// Marks `vertex`; returns false if it was already marked.
    pub fn mark(&mut self, vertex: usize) -> bool {
        !std::mem::replace(&mut self.seen[vertex], true)
    }

    /// Clears every mark ahead of the next pass.
    pub fn reset(&mut self) {
        self.seen.fill(false);
    }
}

/// Vertices in DFS completion order, consumed last-in-first-out.
#[derive(Debug, Clone, Default)]
pub struct FinishOrder {
    order: Vec<usize>,
}

impl FinishOrder {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            order: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, vertex: usize) {
        self.order.push(vertex);
    }

    /// Most recently finished vertex, or `None` once drained.
    pub fn pop(&mut self) -> Option<usize> {
        self.order.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Finish order oldest first.
    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }
}

impl DfsVisitor for FinishOrder {
    fn on_finish(&mut self, vertex: usize) {
        self.push(vertex);
    }
}

/// Collects every vertex entered during one traversal, in entry order.
#[derive(Debug, Clone, Default)]
pub struct ComponentCollector {
    members: Vec<usize>,
}

impl ComponentCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn members(&self) -> &[usize] {
        &self.members
    }

    pub fn into_members(self) -> Vec<usize> {
        self.members
    }

    /// Empties the collector so it can serve the next root.
    pub fn take(&mut self) -> Vec<usize> {
        std::mem::take(&mut self.members)
    }
}

impl DfsVisitor for ComponentCollector {
    fn on_enter(&mut self, vertex: usize) {
        self.members.push(vertex);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visited_set_marks_once_and_resets() {
        let mut seen = VisitedSet::new(3);
        assert!(seen.mark(1));
        assert!(!seen.mark(1));
        assert!(seen.is_visited(1));
        assert!(!seen.is_visited(0));

        seen.reset();
        assert!(!seen.is_visited(1));
    }

    #[test]
    fn finish_order_pops_last_in_first_out() {
        let mut order = FinishOrder::with_capacity(3);
        assert!(order.is_empty());
        order.on_finish(4);
        order.on_enter(9);
        order.on_finish(7);

        assert_eq!(order.as_slice(), &[4, 7]);
        assert_eq!(order.pop(), Some(7));
        assert_eq!(order.pop(), Some(4));
        assert_eq!(order.pop(), None);
        assert!(order.is_empty());
    }

    #[test]
    fn component_collector_records_on_enter_only() {
        let mut c = ComponentCollector::new();
        c.on_enter(2);
        c.on_finish(3);
        c.on_enter(0);
        assert_eq!(c.members(), &[2, 0]);
        assert_eq!(c.take(), vec![2, 0]);
        assert!(c.members().is_empty());
    }
}
