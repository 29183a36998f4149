use tracing::debug;

use crate::error::GraphError;
use crate::graph::{Adjacency, Graph, VertexId};
use crate::traversal::all_shortest_paths;

/// Largest graph centrality will run on. Each vertex costs a pass over all
/// `C(n-1, 2)` pairs, and each pair enumerates every shortest path.
pub const MAX_CENTRALITY_VERTICES: usize = 64;

/// Betweenness centrality of a single vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CentralityScore {
    pub vertex: VertexId,
    pub score: f64,
}

/// Betweenness centrality of `node`: over every unordered pair `{s, t}` of
/// other vertices, the fraction of `s`–`t` shortest paths that contain
/// `node`, summed.
///
/// The graph must be connected; an unreachable pair is an error rather than
/// a zero contribution.
pub fn betweenness_centrality(graph: &Graph, node: VertexId) -> Result<f64, GraphError> {
    check_size(graph)?;
    if !graph.contains(node) {
        return Err(GraphError::UnknownVertex(node));
    }
    let adj = graph.adjacency();
    betweenness_with(&adj, graph.vertices(), node)
}

/// Betweenness centrality of every vertex, in vertex input order.
pub fn centrality_scores(graph: &Graph) -> Result<Vec<CentralityScore>, GraphError> {
    check_size(graph)?;
    let adj = graph.adjacency();
    graph
        .vertices()
        .iter()
        .map(|&vertex| {
            let score = betweenness_with(&adj, graph.vertices(), vertex)?;
            debug!(vertex, score, "betweenness computed");
            Ok(CentralityScore { vertex, score })
        })
        .collect()
}

/// All vertices whose centrality equals the maximum, in vertex input order.
///
/// The number of results depends on how many vertices tie at the top.
/// Returns an empty list for a graph without vertices.
pub fn top_centrality_nodes(graph: &Graph) -> Result<Vec<VertexId>, GraphError> {
    let scores = centrality_scores(graph)?;
    Ok(top_scores(&scores))
}

/// Vertices of `scores` tied at the maximum score. Ties compare exactly.
pub fn top_scores(scores: &[CentralityScore]) -> Vec<VertexId> {
    let max = scores
        .iter()
        .map(|s| s.score)
        .fold(f64::NEG_INFINITY, f64::max);
    scores
        .iter()
        .filter(|s| s.score == max)
        .map(|s| s.vertex)
        .collect()
}

fn betweenness_with(
    adj: &Adjacency,
    vertices: &[VertexId],
    node: VertexId,
) -> Result<f64, GraphError> {
    let others: Vec<VertexId> = vertices.iter().copied().filter(|&v| v != node).collect();
    let mut total = 0.0;

    for (i, &s) in others.iter().enumerate() {
        for &t in &others[i + 1..] {
            let paths = all_shortest_paths(adj, s, t)?;
            if paths.is_empty() {
                return Err(GraphError::NoShortestPath { from: s, to: t });
            }
            let through = paths.iter().filter(|p| p.contains(&node)).count();
            total += through as f64 / paths.len() as f64;
        }
    }

    Ok(total)
}

fn check_size(graph: &Graph) -> Result<(), GraphError> {
    if graph.vertex_count() > MAX_CENTRALITY_VERTICES {
        return Err(GraphError::TooLarge {
            vertices: graph.vertex_count(),
            max: MAX_CENTRALITY_VERTICES,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;

    fn make_star(leaves: i64) -> Graph {
        Graph::new(0..=leaves, (1..=leaves).map(|i| (0, i))).unwrap()
    }

    fn make_chain(n: i64) -> Graph {
        Graph::new(1..=n, (1..n).map(|i| (i, i + 1))).unwrap()
    }

    fn make_cycle(n: i64) -> Graph {
        Graph::new(1..=n, (1..=n).map(|i| (i, i % n + 1))).unwrap()
    }

    /// Clique on `1..=k` with a path of `tail` extra vertices hanging off `k`.
    fn make_clique_with_tail(k: i64, tail: i64) -> Graph {
        let mut edges = Vec::new();
        for u in 1..=k {
            for v in u + 1..=k {
                edges.push((u, v));
            }
        }
        edges.extend((k..k + tail).map(|v| (v, v + 1)));
        Graph::new(1..=k + tail, edges).unwrap()
    }

    fn demo_graph() -> Graph {
        Graph::new(
            vec![1, 2, 3, 4, 5, 6],
            vec![
                (1, 2),
                (1, 5),
                (2, 3),
                (2, 5),
                (3, 4),
                (4, 5),
                (4, 6),
                (3, 6),
            ],
        )
        .unwrap()
    }

    // --- Betweenness tests ---

    #[test]
    fn test_star_center() {
        let g = make_star(5);
        // C(5, 2) leaf pairs, each routed through the center
        assert_eq!(betweenness_centrality(&g, 0).unwrap(), 10.0);
    }

    #[test]
    fn test_star_leaves_zero() {
        let g = make_star(5);
        for leaf in 1..=5 {
            assert_eq!(betweenness_centrality(&g, leaf).unwrap(), 0.0);
        }
    }

    #[test]
    fn test_chain() {
        let g = make_chain(5);
        assert_eq!(betweenness_centrality(&g, 1).unwrap(), 0.0);
        assert_eq!(betweenness_centrality(&g, 2).unwrap(), 3.0);
        assert_eq!(betweenness_centrality(&g, 3).unwrap(), 4.0);
        assert_eq!(betweenness_centrality(&g, 5).unwrap(), 0.0);
    }

    #[test]
    fn test_square_splits_paths() {
        // Opposite corners of a 4-cycle have two shortest paths; each side
        // vertex lies on one of them.
        let g = make_cycle(4);
        for v in 1..=4 {
            assert_eq!(betweenness_centrality(&g, v).unwrap(), 0.5);
        }
    }

    #[test]
    fn test_two_vertices() {
        let g = Graph::new(vec![1, 2], vec![(1, 2)]).unwrap();
        assert_eq!(betweenness_centrality(&g, 1).unwrap(), 0.0);
    }

    #[test]
    fn test_disconnected_fails() {
        let g = Graph::new(vec![1, 2, 3], vec![(1, 2)]).unwrap();
        assert_eq!(
            betweenness_centrality(&g, 1).unwrap_err(),
            GraphError::Unreachable { from: 2, to: 3 }
        );
    }

    #[test]
    fn test_unknown_vertex() {
        let g = make_chain(3);
        assert_eq!(
            betweenness_centrality(&g, 9).unwrap_err(),
            GraphError::UnknownVertex(9)
        );
    }

    #[test]
    fn test_too_large() {
        let n = MAX_CENTRALITY_VERTICES as i64 + 1;
        let g = make_chain(n);
        assert_eq!(
            top_centrality_nodes(&g).unwrap_err(),
            GraphError::TooLarge {
                vertices: MAX_CENTRALITY_VERTICES + 1,
                max: MAX_CENTRALITY_VERTICES
            }
        );
    }

    #[test]
    fn test_dense_graph_under_cap_completes() {
        // Every clique vertex other than 20 routes to the tail through 20
        let g = make_clique_with_tail(20, 4);
        let started = Instant::now();
        assert_eq!(top_centrality_nodes(&g).unwrap(), vec![20]);
        assert_eq!(betweenness_centrality(&g, 20).unwrap(), 76.0);
        assert!(started.elapsed() < Duration::from_secs(10));
    }

    #[test]
    fn test_idempotent() {
        let g = demo_graph();
        let first = betweenness_centrality(&g, 2).unwrap();
        for _ in 0..3 {
            assert_eq!(betweenness_centrality(&g, 2).unwrap(), first);
        }
    }

    // --- Top node tests ---

    #[test]
    fn test_top_star() {
        assert_eq!(top_centrality_nodes(&make_star(4)).unwrap(), vec![0]);
    }

    #[test]
    fn test_top_ties_all_reported() {
        assert_eq!(top_centrality_nodes(&make_cycle(4)).unwrap(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_top_empty_graph() {
        let g = Graph::new(Vec::<VertexId>::new(), Vec::<(VertexId, VertexId)>::new()).unwrap();
        assert!(top_centrality_nodes(&g).unwrap().is_empty());
    }

    #[test]
    fn test_demo_graph_scores() {
        let scores = centrality_scores(&demo_graph()).unwrap();
        let by_vertex: Vec<(VertexId, f64)> = scores.iter().map(|s| (s.vertex, s.score)).collect();
        assert_eq!(
            by_vertex,
            vec![(1, 0.0), (2, 2.0), (3, 2.0), (4, 2.0), (5, 2.0), (6, 0.0)]
        );
    }

    #[test]
    fn test_demo_graph_top() {
        assert_eq!(top_centrality_nodes(&demo_graph()).unwrap(), vec![2, 3, 4, 5]);
    }

    #[test]
    fn test_top_scores_exact_ties() {
        let scores = vec![
            CentralityScore { vertex: 7, score: 1.5 },
            CentralityScore { vertex: 3, score: 0.5 },
            CentralityScore { vertex: 9, score: 1.5 },
        ];
        assert_eq!(top_scores(&scores), vec![7, 9]);
        assert!(top_scores(&[]).is_empty());
    }
}
