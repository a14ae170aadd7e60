use crate::domain::error::GraphError;

/// Directed graph over vertices `0..vertex_count`, stored as adjacency lists.
///
/// Every destination held in an adjacency list is known to be in range: the
/// lists are only reachable through [`Graph::add_edge`], which checks both
/// endpoints before inserting anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    edges: Vec<Vec<usize>>,
}

impl Graph {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            edges: vec![Vec::new(); vertex_count],
        }
    }

    /// Signed constructor for callers that can express a negative count.
    pub fn try_new(vertex_count: i64) -> Result<Self, GraphError> {
        let count = usize::try_from(vertex_count)
            .map_err(|_| GraphError::InvalidArgument { vertex_count })?;
        Ok(Self::new(count))
    }

    /// Builds a graph from signed input, inserting edges in the given order.
    /// Fails on the first negative count or out-of-range endpoint.
    pub fn from_edges(vertex_count: i64, edges: &[(i64, i64)]) -> Result<Self, GraphError> {
        let mut graph = Self::try_new(vertex_count)?;
        for &(source, destination) in edges {
            let source = graph.check_signed(source)?;
            let destination = graph.check_signed(destination)?;
            graph.add_edge(source, destination)?;
        }
        Ok(graph)
    }

    /// Appends `destination` to the adjacency list of `source`.
    /// Duplicates are kept; `b -> a` is not implied.
    pub fn add_edge(&mut self, source: usize, destination: usize) -> Result<(), GraphError> {
        self.check(source)?;
        self.check(destination)?;
        self.edges[source].push(destination);
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(|v| v.len()).sum()
    }

    /// Outgoing edges of `vertex` in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `vertex >= self.vertex_count()`.
    pub fn neighbors(&self, vertex: usize) -> &[usize] {
        &self.edges[vertex]
    }

    /// All edges as `(source, destination)`, sources ascending, each source's
    /// destinations in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .flat_map(|(u, outs)| outs.iter().map(move |&v| (u, v)))
    }

    pub fn has_self_loop(&self, vertex: usize) -> bool {
        self.edges[vertex].contains(&vertex)
    }

    /// Same vertex set with every edge reversed. Multiplicity is preserved:
    /// an edge stored twice yields two reversed edges.
    pub fn transpose(&self) -> Graph {
        let mut rev: Vec<Vec<usize>> = vec![Vec::new(); self.vertex_count()];
        for (u, v) in self.edges() {
            rev[v].push(u);
        }
        Graph { edges: rev }
    }

    fn check(&self, vertex: usize) -> Result<(), GraphError> {
        if vertex < self.vertex_count() {
            return Ok(());
        }
        Err(GraphError::OutOfRange {
            vertex: i64::try_from(vertex).unwrap_or(i64::MAX),
            vertex_count: self.vertex_count(),
        })
    }

    fn check_signed(&self, vertex: i64) -> Result<usize, GraphError> {
        usize::try_from(vertex)
            .ok()
            .filter(|&v| v < self.vertex_count())
            .ok_or(GraphError::OutOfRange {
                vertex,
                vertex_count: self.vertex_count(),
            })
    }
}

/// Components produced by one SCC computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SccResult {
    /// Components in emission order; members in the order they were visited.
    pub components: Vec<Vec<usize>>,
    pub component_of: Vec<usize>,
    /// True for components with more than one member or a self-loop.
    pub cyclic_component: Vec<bool>,
}

impl SccResult {
    /// Derives the lookup tables for `components` emitted over `graph`.
    ///
    /// # Panics
    ///
    /// Panics if a component holds a vertex outside `graph`.
    pub fn from_components(graph: &Graph, components: Vec<Vec<usize>>) -> Self {
        let mut component_of = vec![usize::MAX; graph.vertex_count()];
        for (cid, comp) in components.iter().enumerate() {
            for &v in comp {
                component_of[v] = cid;
            }
        }

        let cyclic_component = components
            .iter()
            .map(|comp| match comp.as_slice() {
                [only] => graph.has_self_loop(*only),
                _ => comp.len() > 1,
            })
            .collect();

        Self {
            component_of,
            components,
            cyclic_component,
        }
    }

    pub fn cyclic_count(&self) -> usize {
        self.cyclic_component.iter().filter(|&&b| b).count()
    }

    pub fn largest_component(&self) -> usize {
        self.components.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Components with members sorted and the list sorted, for comparisons
    /// that only care about membership.
    pub fn normalized(&self) -> Vec<Vec<usize>> {
        let mut out: Vec<Vec<usize>> = self
            .components
            .iter()
            .map(|c| {
                let mut c = c.clone();
                c.sort_unstable();
                c
            })
            .collect();
        out.sort();
        out
    }
}
