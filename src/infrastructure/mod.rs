// Infrastructure layer: traversal, SCC detector, event output
pub mod dfs;
pub mod event_ndjson;
pub mod scc_kosaraju;
