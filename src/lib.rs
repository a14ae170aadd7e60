//! Strongly connected components of a directed graph using Kosaraju's
//! two-pass depth-first search.
//!
//! ```
//! use kosaraju_scc::domain::graph::Graph;
//! use kosaraju_scc::domain::traits::SccDetector;
//! use kosaraju_scc::infrastructure::scc_kosaraju::KosarajuSccDetector;
//!
//! let graph = Graph::from_edges(5, &[(0, 2), (2, 1), (1, 0), (0, 3), (3, 4)])?;
//! let scc = KosarajuSccDetector.compute_scc(&graph);
//! assert_eq!(scc.components, vec![vec![0, 1, 2], vec![3], vec![4]]);
//! # Ok::<(), kosaraju_scc::domain::error::GraphError>(())
//! ```

pub mod domain;
pub mod infrastructure;
pub mod interface;
pub mod usecase;
