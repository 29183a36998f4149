//! graph-centrality-core: shortest paths and betweenness centrality.
//!
//! A pure Rust library over small, static, undirected, unweighted graphs.
//! Builds a validated graph from explicit vertex and edge lists, derives an
//! adjacency view, partitions vertices into BFS levels, enumerates every
//! shortest path between two vertices and aggregates those paths into a
//! betweenness-centrality score per vertex.
//!
//! Every query assumes a connected graph; reaching an unreachable pair is
//! reported as an error instead of silently contributing nothing.

mod centrality;
mod error;
mod graph;
mod traversal;

pub use centrality::{
    betweenness_centrality, centrality_scores, top_centrality_nodes, top_scores,
    CentralityScore, MAX_CENTRALITY_VERTICES,
};
pub use error::GraphError;
pub use graph::{parse_edge, parse_vertex, Adjacency, Edge, Graph, VertexId};
pub use traversal::{all_shortest_paths, distance, levels_from, Levels, Path};
