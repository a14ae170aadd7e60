use crate::domain::graph::{Graph, SccResult};
use crate::domain::traits::SccDetector;
use crate::domain::traversal::{ComponentCollector, FinishOrder, VisitedSet};
use crate::infrastructure::dfs::depth_first_visit;
use tracing::debug;

pub struct KosarajuSccDetector;

impl SccDetector for KosarajuSccDetector {
    fn compute_scc(&self, graph: &Graph) -> SccResult {
        kosaraju_scc(graph)
    }
}

fn kosaraju_scc(graph: &Graph) -> SccResult {
    let mut components: Vec<Vec<usize>> = Vec::new();
    for_each_component(graph, |comp| components.push(comp.to_vec()));

    let res = SccResult::from_components(graph, components);
    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        components = res.components.len(),
        cyclic = res.cyclic_count(),
        "kosaraju.done"
    );
    res
}

/// Runs both passes over `graph`, handing each component to `on_component`
/// as soon as its second-pass walk completes.
///
/// Components arrive in reverse finish order of the first pass; members
/// arrive in the order the walk over the transpose entered them.
pub fn for_each_component<F>(graph: &Graph, mut on_component: F)
where
    F: FnMut(&[usize]),
{
    let n = graph.vertex_count();
    let mut seen = VisitedSet::new(n);
    let mut order = FinishOrder::with_capacity(n);

    for start in 0..n {
        if seen.is_visited(start) {
            continue;
        }
        depth_first_visit(graph, start, &mut seen, &mut order);
    }
    debug!(finished = order.len(), "kosaraju.finish_order");

    let rev = graph.transpose();
    seen.reset();

    let mut collector = ComponentCollector::new();
    while let Some(v) = order.pop() {
        if seen.is_visited(v) {
            continue;
        }
        depth_first_visit(&rev, v, &mut seen, &mut collector);
        on_component(&collector.take());
    }
}
