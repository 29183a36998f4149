//! Error type shared by graph construction and every query.
//!
//! All variants are fatal for the operation that raised them: construction
//! errors abort `Graph::new`, traversal errors abort the query in progress.

use thiserror::Error;

use crate::graph::{Edge, VertexId};

/// Errors raised while building or querying a graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A vertex token could not be read as an integer identifier.
    #[error("vertex '{0}' is not an integer")]
    InvalidVertex(String),

    /// An edge token was not of the form `u-v`.
    #[error("edge '{0}' is not of the form 'u-v'")]
    InvalidEdge(String),

    /// The vertex list repeats identifiers. Carries the repeated set, sorted.
    #[error("vertices contain duplicates: {0:?}")]
    DuplicateVertices(Vec<VertexId>),

    /// An edge connects a vertex to itself.
    #[error("edge ({0}, {0}) is a self-loop")]
    SelfLoop(VertexId),

    /// An edge endpoint is not in the vertex set.
    #[error("edge {edge} references vertex {missing}, which is not in the vertex set")]
    UnknownEndpoint { edge: Edge, missing: VertexId },

    /// The edge list repeats an edge once orientation is ignored.
    #[error("edges contain duplicates: {}", format_edges(.0))]
    DuplicateEdges(Vec<Edge>),

    /// A query named a vertex the graph does not contain.
    #[error("vertex {0} is not in the graph")]
    UnknownVertex(VertexId),

    /// The target never appeared in any BFS level from the source.
    #[error("vertex {to} is unreachable from {from}; the graph must be connected")]
    Unreachable { from: VertexId, to: VertexId },

    /// Enumeration produced no path of the computed shortest length.
    #[error("no shortest path found between {from} and {to}")]
    NoShortestPath { from: VertexId, to: VertexId },

    /// Centrality is combinatorial in vertex count; larger graphs are refused.
    #[error("graph has {vertices} vertices; centrality supports at most {max}")]
    TooLarge { vertices: usize, max: usize },
}

fn format_edges(edges: &[Edge]) -> String {
    let parts: Vec<String> = edges.iter().map(|e| e.to_string()).collect();
    format!("[{}]", parts.join(", "))
}
