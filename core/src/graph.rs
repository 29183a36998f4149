use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;

use tracing::debug;

use crate::error::GraphError;

/// Vertex identifier as supplied by the caller.
pub type VertexId = i64;

/// An undirected edge stored in canonical order (`low < high`), so that
/// `(a, b)` and `(b, a)` compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub low: VertexId,
    pub high: VertexId,
}

impl Edge {
    pub fn new(u: VertexId, v: VertexId) -> Self {
        Self {
            low: u.min(v),
            high: u.max(v),
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.low, self.high)
    }
}

/// Immutable, validated undirected graph.
///
/// Vertices keep their input order; edges keep their input order after
/// canonicalization. Both orders feed the adjacency view and therefore
/// determine path enumeration order and the order of reported results.
#[derive(Debug, Clone)]
pub struct Graph {
    vertices: Vec<VertexId>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Build a graph from raw vertex and edge lists.
    ///
    /// Fails on duplicate vertices, self-loops, edges whose endpoints are not
    /// in `vertices`, and edges that repeat once orientation is ignored.
    pub fn new<V, E>(vertices: V, edges: E) -> Result<Self, GraphError>
    where
        V: IntoIterator<Item = VertexId>,
        E: IntoIterator<Item = (VertexId, VertexId)>,
    {
        let vertices: Vec<VertexId> = vertices.into_iter().collect();
        let edges: Vec<Edge> = edges.into_iter().map(|(u, v)| Edge::new(u, v)).collect();

        let vertex_set = distinct(&vertices).map_err(GraphError::DuplicateVertices)?;

        for edge in &edges {
            if edge.low == edge.high {
                return Err(GraphError::SelfLoop(edge.low));
            }
            for endpoint in [edge.low, edge.high] {
                if !vertex_set.contains(&endpoint) {
                    return Err(GraphError::UnknownEndpoint {
                        edge: *edge,
                        missing: endpoint,
                    });
                }
            }
        }

        distinct(&edges).map_err(GraphError::DuplicateEdges)?;

        debug!(
            vertices = vertices.len(),
            edges = edges.len(),
            "graph constructed"
        );

        Ok(Self { vertices, edges })
    }

    /// Build a graph from textual tokens, e.g. `["1", "2"]` and `["1-2"]`.
    pub fn parse<'a, V, E>(vertices: V, edges: E) -> Result<Self, GraphError>
    where
        V: IntoIterator<Item = &'a str>,
        E: IntoIterator<Item = &'a str>,
    {
        let vertices = vertices
            .into_iter()
            .map(parse_vertex)
            .collect::<Result<Vec<_>, _>>()?;
        let edges = edges
            .into_iter()
            .map(parse_edge)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(vertices, edges)
    }

    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains(&self, v: VertexId) -> bool {
        self.vertices.contains(&v)
    }

    /// Derive the vertex → neighbors view. Scans the edge list once.
    pub fn adjacency(&self) -> Adjacency {
        let mut neighbors: HashMap<VertexId, Vec<VertexId>> =
            HashMap::with_capacity(self.vertices.len());
        for &v in &self.vertices {
            neighbors.insert(v, Vec::new());
        }
        for edge in &self.edges {
            neighbors.entry(edge.low).or_default().push(edge.high);
            neighbors.entry(edge.high).or_default().push(edge.low);
        }
        Adjacency { neighbors }
    }
}

/// Neighbor lists derived from a [`Graph`]. Never mutated after derivation.
#[derive(Debug, Clone)]
pub struct Adjacency {
    neighbors: HashMap<VertexId, Vec<VertexId>>,
}

impl Adjacency {
    /// Neighbors of `v` in edge-list order. Empty for isolated or unknown vertices.
    pub fn neighbors(&self, v: VertexId) -> &[VertexId] {
        self.neighbors.get(&v).map(|n| n.as_slice()).unwrap_or(&[])
    }

    pub fn contains(&self, v: VertexId) -> bool {
        self.neighbors.contains_key(&v)
    }

    pub fn degree(&self, v: VertexId) -> usize {
        self.neighbors(v).len()
    }

    pub fn vertex_count(&self) -> usize {
        self.neighbors.len()
    }
}

/// Parse a vertex token.
pub fn parse_vertex(token: &str) -> Result<VertexId, GraphError> {
    let token = token.trim();
    token
        .parse::<VertexId>()
        .map_err(|_| GraphError::InvalidVertex(token.to_string()))
}

/// Parse an edge token of the form `u-v`. A leading minus on either
/// endpoint is allowed (`-1--2`).
pub fn parse_edge(token: &str) -> Result<(VertexId, VertexId), GraphError> {
    let trimmed = token.trim();
    let split = trimmed
        .char_indices()
        .skip(1)
        .find(|&(_, c)| c == '-')
        .map(|(i, _)| i)
        .ok_or_else(|| GraphError::InvalidEdge(trimmed.to_string()))?;
    let (u, v) = (&trimmed[..split], &trimmed[split + 1..]);
    if u.is_empty() || v.is_empty() {
        return Err(GraphError::InvalidEdge(trimmed.to_string()));
    }
    Ok((parse_vertex(u)?, parse_vertex(v)?))
}

/// Return the items as a set, or the sorted set of repeated items.
fn distinct<T>(items: &[T]) -> Result<HashSet<T>, Vec<T>>
where
    T: Copy + Eq + Ord + std::hash::Hash,
{
    let mut seen = HashSet::with_capacity(items.len());
    let mut repeated = BTreeSet::new();
    for &item in items {
        if !seen.insert(item) {
            repeated.insert(item);
        }
    }
    if repeated.is_empty() {
        Ok(seen)
    } else {
        Err(repeated.into_iter().collect())
    }
}
