use crate::domain::graph::Graph;
use crate::domain::traits::DfsVisitor;
use crate::domain::traversal::VisitedSet;

/// Depth-first walk from `start` over vertices not yet in `visited`.
///
/// Iterative: each stack frame is `(vertex, next_child_index)`, so depth is
/// bounded by heap rather than the call stack. A vertex is marked and entered
/// when its frame is pushed and finished when its frame runs out of children.
/// Returns without calling the visitor if `start` is already visited.
pub fn depth_first_visit<V>(graph: &Graph, start: usize, visited: &mut VisitedSet, visitor: &mut V)
where
    V: DfsVisitor + ?Sized,
{
    depth_first_visit_within(graph, start, visited, visitor, |_| true);
}

/// [`depth_first_visit`] that never steps onto a vertex rejected by `keep`.
/// Rejected vertices are left unmarked. `start` itself is not checked.
pub fn depth_first_visit_within<V, K>(
    graph: &Graph,
    start: usize,
    visited: &mut VisitedSet,
    visitor: &mut V,
    keep: K,
) where
    V: DfsVisitor + ?Sized,
    K: Fn(usize) -> bool,
{
    if !visited.mark(start) {
        return;
    }
    visitor.on_enter(start);

    let mut stack: Vec<(usize, usize)> = vec![(start, 0)];

    while let Some(frame) = stack.last_mut() {
        let (v, next_i) = *frame;
        let outs = graph.neighbors(v);

        if next_i < outs.len() {
            frame.1 += 1;
            let to = outs[next_i];
            if keep(to) && visited.mark(to) {
                visitor.on_enter(to);
                stack.push((to, 0));
            }
            continue;
        }

        stack.pop();
        visitor.on_finish(v);
    }
}
