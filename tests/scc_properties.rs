//! Property tests over random graphs, checked against a brute-force
//! reachability oracle.

use kosaraju_scc::domain::graph::Graph;
use kosaraju_scc::domain::traits::SccDetector;
use kosaraju_scc::infrastructure::scc_kosaraju::KosarajuSccDetector;
use kosaraju_scc::usecase::verify::verify_components;
use proptest::prelude::*;

fn arb_graph() -> impl Strategy<Value = Graph> {
    (1usize..40).prop_flat_map(|n| {
        proptest::collection::vec((0..n, 0..n), 0..=n * 3).prop_map(move |edges| {
            let mut g = Graph::new(n);
            for (u, v) in edges {
                g.add_edge(u, v).expect("in range");
            }
            g
        })
    })
}

/// `reach[u][v]` is true when a directed path (possibly empty) leads u to v.
fn reachability(g: &Graph) -> Vec<Vec<bool>> {
    let n = g.vertex_count();
    let mut reach = vec![vec![false; n]; n];
    for (src, row) in reach.iter_mut().enumerate() {
        let mut stack = vec![src];
        row[src] = true;
        while let Some(u) = stack.pop() {
            for &v in g.neighbors(u) {
                if !row[v] {
                    row[v] = true;
                    stack.push(v);
                }
            }
        }
    }
    reach
}

fn sorted_edges(g: &Graph) -> Vec<(usize, usize)> {
    let mut e: Vec<_> = g.edges().collect();
    e.sort_unstable();
    e
}

proptest! {
    #[test]
    fn components_partition_the_vertices(g in arb_graph()) {
        let scc = KosarajuSccDetector.compute_scc(&g);
        let mut all: Vec<usize> = scc.components.iter().flatten().copied().collect();
        all.sort_unstable();
        prop_assert_eq!(all, (0..g.vertex_count()).collect::<Vec<_>>());
        prop_assert!(scc.components.iter().all(|c| !c.is_empty()));
    }

    /// Same component exactly when mutually reachable: soundness and
    /// maximality in one check.
    #[test]
    fn components_match_mutual_reachability(g in arb_graph()) {
        let scc = KosarajuSccDetector.compute_scc(&g);
        let reach = reachability(&g);
        let n = g.vertex_count();
        for u in 0..n {
            for v in 0..n {
                let mutual = reach[u][v] && reach[v][u];
                prop_assert_eq!(
                    scc.component_of[u] == scc.component_of[v],
                    mutual,
                    "u={} v={}", u, v
                );
            }
        }
    }

    #[test]
    fn detector_output_passes_verification(g in arb_graph()) {
        let scc = KosarajuSccDetector.compute_scc(&g);
        prop_assert!(verify_components(&g, &scc).is_ok());
    }

    #[test]
    fn computation_is_idempotent(g in arb_graph()) {
        let first = KosarajuSccDetector.compute_scc(&g);
        let second = KosarajuSccDetector.compute_scc(&g);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn transpose_twice_restores_edge_multiset(g in arb_graph()) {
        let back = g.transpose().transpose();
        prop_assert_eq!(back.vertex_count(), g.vertex_count());
        prop_assert_eq!(sorted_edges(&back), sorted_edges(&g));
    }

    #[test]
    fn transpose_has_same_components(g in arb_graph()) {
        let a = KosarajuSccDetector.compute_scc(&g).normalized();
        let b = KosarajuSccDetector.compute_scc(&g.transpose()).normalized();
        prop_assert_eq!(a, b);
    }
}
