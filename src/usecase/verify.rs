use crate::domain::graph::{Graph, SccResult};
use crate::domain::traversal::{ComponentCollector, FinishOrder, VisitedSet};
use crate::infrastructure::dfs::{depth_first_visit, depth_first_visit_within};
use anyhow::{anyhow, Result};

/// Checks `res` against `graph` without trusting the detector that made it.
///
/// Runs in O(V + E). Maximality holds when the condensation (components as
/// nodes, crossing edges between them) is acyclic. Given that, any path
/// between two members of one component stays inside it, so soundness only
/// needs forward and backward walks restricted to each component.
pub fn verify_components(graph: &Graph, res: &SccResult) -> Result<()> {
    let n = graph.vertex_count();

    if res.component_of.len() != n {
        return Err(anyhow!(
            "component_of has {} entries for {n} vertices",
            res.component_of.len()
        ));
    }
    if res.cyclic_component.len() != res.components.len() {
        return Err(anyhow!(
            "cyclic_component has {} entries for {} components",
            res.cyclic_component.len(),
            res.components.len()
        ));
    }

    // Partition: every vertex exactly once, lookup table consistent.
    let mut owner: Vec<Option<usize>> = vec![None; n];
    for (cid, comp) in res.components.iter().enumerate() {
        if comp.is_empty() {
            return Err(anyhow!("component {cid} is empty"));
        }
        for &v in comp {
            if v >= n {
                return Err(anyhow!("component {cid} holds vertex {v} outside 0..{n}"));
            }
            if let Some(prev) = owner[v] {
                return Err(anyhow!("vertex {v} appears in components {prev} and {cid}"));
            }
            owner[v] = Some(cid);
        }
    }
    for (v, cid) in owner.iter().enumerate() {
        let Some(cid) = *cid else {
            return Err(anyhow!("vertex {v} is not in any component"));
        };
        if res.component_of[v] != cid {
            return Err(anyhow!(
                "component_of[{v}] is {} but vertex sits in component {cid}",
                res.component_of[v]
            ));
        }
    }

    check_condensation_acyclic(graph, res)?;

    let rev = graph.transpose();
    check_members_reach_root(graph, res, "cannot reach")?;
    check_members_reach_root(&rev, res, "is not reachable from")?;

    for (cid, comp) in res.components.iter().enumerate() {
        let cyclic = comp.len() > 1 || graph.has_self_loop(comp[0]);
        if res.cyclic_component[cid] != cyclic {
            return Err(anyhow!(
                "component {cid} cyclic flag is {} but should be {cyclic}",
                res.cyclic_component[cid]
            ));
        }
    }

    Ok(())
}

/// In a DAG every edge `a -> b` has `b` finishing before `a`; a cycle always
/// leaves at least one edge pointing at a later finisher.
fn check_condensation_acyclic(graph: &Graph, res: &SccResult) -> Result<()> {
    let c = res.components.len();
    let mut cond = Graph::new(c);
    for (u, v) in graph.edges() {
        let (a, b) = (res.component_of[u], res.component_of[v]);
        if a != b {
            cond.add_edge(a, b)?;
        }
    }

    let mut seen = VisitedSet::new(c);
    let mut order = FinishOrder::with_capacity(c);
    for start in 0..c {
        depth_first_visit(&cond, start, &mut seen, &mut order);
    }
    let mut finished_at = vec![0usize; c];
    for (pos, &cid) in order.as_slice().iter().enumerate() {
        finished_at[cid] = pos;
    }

    for (u, v) in graph.edges() {
        let (a, b) = (res.component_of[u], res.component_of[v]);
        if a != b && finished_at[a] < finished_at[b] {
            return Err(anyhow!(
                "component {a} is not maximal: edge {u} -> {v} into component {b} closes a cycle between them"
            ));
        }
    }
    Ok(())
}

/// Walks `graph` from each component's first member without leaving the
/// component; every member has to be reached.
fn check_members_reach_root(graph: &Graph, res: &SccResult, relation: &str) -> Result<()> {
    let mut seen = VisitedSet::new(graph.vertex_count());
    let mut collector = ComponentCollector::new();

    for (cid, comp) in res.components.iter().enumerate() {
        let root = comp[0];
        depth_first_visit_within(graph, root, &mut seen, &mut collector, |x| {
            res.component_of[x] == cid
        });
        if collector.take().len() == comp.len() {
            continue;
        }
        if let Some(&v) = comp.iter().find(|&&v| !seen.is_visited(v)) {
            return Err(anyhow!(
                "component {cid}: vertices {root} and {v} are not mutually reachable ({root} {relation} {v} inside the component)"
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::traits::SccDetector;
    use crate::infrastructure::scc_kosaraju::KosarajuSccDetector;
    use std::time::{Duration, Instant};

    fn graph() -> Graph {
        Graph::from_edges(5, &[(0, 2), (2, 1), (1, 0), (0, 3), (3, 4)]).expect("graph")
    }

    #[test]
    fn accepts_detector_output() {
        let g = graph();
        let res = KosarajuSccDetector.compute_scc(&g);
        verify_components(&g, &res).expect("valid");
    }

    #[test]
    fn rejects_merged_components() {
        let g = graph();
        let res = SccResult::from_components(&g, vec![vec![0, 1, 2, 3], vec![4]]);
        let err = verify_components(&g, &res).unwrap_err().to_string();
        assert!(err.contains("not mutually reachable"), "{err}");
    }

    #[test]
    fn rejects_unconnected_vertices_sharing_a_component() {
        let g = Graph::new(2);
        let res = SccResult::from_components(&g, vec![vec![0, 1]]);
        let err = verify_components(&g, &res).unwrap_err().to_string();
        assert!(err.contains("0 cannot reach 1"), "{err}");
    }

    #[test]
    fn rejects_split_component() {
        let g = graph();
        let res = SccResult::from_components(&g, vec![vec![0, 1], vec![2], vec![3], vec![4]]);
        let err = verify_components(&g, &res).unwrap_err().to_string();
        assert!(err.contains("not maximal"), "{err}");
    }

    #[test]
    fn rejects_missing_and_duplicate_vertices() {
        let g = graph();

        let res = SccResult::from_components(&g, vec![vec![0, 1, 2], vec![3]]);
        let err = verify_components(&g, &res).unwrap_err().to_string();
        assert!(err.contains("vertex 4 is not in any component"), "{err}");

        let res = SccResult::from_components(&g, vec![vec![0, 1, 2], vec![3], vec![4, 3]]);
        let err = verify_components(&g, &res).unwrap_err().to_string();
        assert!(err.contains("appears in components"), "{err}");
    }

    #[test]
    fn rejects_wrong_cyclic_flag() {
        let g = graph();
        let mut res = KosarajuSccDetector.compute_scc(&g);
        res.cyclic_component[1] = true;
        let err = verify_components(&g, &res).unwrap_err().to_string();
        assert!(err.contains("cyclic flag"), "{err}");
    }

    #[test]
    fn split_component_names_the_closing_edge() {
        let g = graph();
        let res = SccResult::from_components(&g, vec![vec![0, 1], vec![2], vec![3], vec![4]]);
        let err = verify_components(&g, &res).unwrap_err().to_string();
        assert_eq!(
            err,
            "component 1 is not maximal: edge 2 -> 1 into component 0 closes a cycle between them"
        );
    }

    #[test]
    fn verifies_long_path_in_linear_time() {
        // One singleton component per vertex.
        let n = 100_000;
        let mut g = Graph::new(n);
        for v in 0..n - 1 {
            g.add_edge(v, v + 1).expect("edge");
        }
        let res = KosarajuSccDetector.compute_scc(&g);
        assert_eq!(res.components.len(), n);

        let started = Instant::now();
        verify_components(&g, &res).expect("valid");
        assert!(
            started.elapsed() < Duration::from_secs(5),
            "verification took {:?}",
            started.elapsed()
        );
    }
}
