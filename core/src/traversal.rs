use std::collections::{HashMap, HashSet};

use tracing::trace;

use crate::error::GraphError;
use crate::graph::{Adjacency, VertexId};

/// A sequence of adjacent vertices, endpoints included. Length in edges is
/// `len() - 1`.
pub type Path = Vec<VertexId>;

/// Result of a level-BFS from one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Levels {
    /// Flat visitation order (the concatenation of `levels`).
    pub order: Vec<VertexId>,
    /// `levels[k]` holds exactly the vertices at distance `k` from the source.
    pub levels: Vec<Vec<VertexId>>,
}

impl Levels {
    /// Distance from the source to `v`, or None if `v` was never reached.
    pub fn depth_of(&self, v: VertexId) -> Option<u32> {
        self.levels
            .iter()
            .position(|level| level.contains(&v))
            .map(|d| d as u32)
    }

    /// Distance from the source to every reached vertex.
    pub fn depths(&self) -> HashMap<VertexId, u32> {
        self.levels
            .iter()
            .enumerate()
            .flat_map(|(d, level)| level.iter().map(move |&v| (v, d as u32)))
            .collect()
    }

    pub fn reached(&self) -> usize {
        self.order.len()
    }
}

/// Partition the vertices reachable from `source` into BFS levels.
///
/// Each round stages the unvisited neighbors of the whole previous level,
/// deduplicated across the frontier. Stops as soon as a round adds nothing,
/// so disconnected graphs terminate with only the source's component.
pub fn levels_from(adj: &Adjacency, source: VertexId) -> Result<Levels, GraphError> {
    if !adj.contains(source) {
        return Err(GraphError::UnknownVertex(source));
    }

    let mut visited: HashSet<VertexId> = HashSet::with_capacity(adj.vertex_count());
    visited.insert(source);
    let mut order = vec![source];
    let mut levels = vec![vec![source]];

    loop {
        let mut next = Vec::new();
        if let Some(frontier) = levels.last() {
            for &v in frontier {
                for &n in adj.neighbors(v) {
                    if visited.insert(n) {
                        next.push(n);
                    }
                }
            }
        }
        if next.is_empty() {
            break;
        }
        order.extend_from_slice(&next);
        levels.push(next);
    }

    trace!(
        source,
        depth = levels.len() - 1,
        reached = order.len(),
        "levels computed"
    );

    Ok(Levels { order, levels })
}

/// Shortest-path length in edges from `start` to `end`.
///
/// Fails with `Unreachable` when `end` is in the graph but not in any level
/// from `start`.
pub fn distance(adj: &Adjacency, start: VertexId, end: VertexId) -> Result<u32, GraphError> {
    if !adj.contains(end) {
        return Err(GraphError::UnknownVertex(end));
    }
    levels_from(adj, start)?
        .depth_of(end)
        .ok_or(GraphError::Unreachable {
            from: start,
            to: end,
        })
}

/// Every simple path from `start` to `end` whose length equals
/// `distance(start, end)`, in neighbor-order DFS order.
///
/// Levels are computed from both endpoints, and the search only steps onto a
/// vertex `v` at hop `i + 1` when `depth_from_start(v) == i + 1` and
/// `depth_from_end(v) == budget - (i + 1)`. Every explored prefix therefore
/// extends to at least one shortest path.
pub fn all_shortest_paths(
    adj: &Adjacency,
    start: VertexId,
    end: VertexId,
) -> Result<Vec<Path>, GraphError> {
    if !adj.contains(end) {
        return Err(GraphError::UnknownVertex(end));
    }
    let forward = levels_from(adj, start)?;
    let budget = forward.depth_of(end).ok_or(GraphError::Unreachable {
        from: start,
        to: end,
    })?;
    let backward = levels_from(adj, end)?;

    let paths = layered_paths(
        adj,
        start,
        end,
        budget,
        &forward.depths(),
        &backward.depths(),
    );
    trace!(start, end, budget, count = paths.len(), "shortest paths enumerated");
    Ok(paths)
}

/// Depth-first enumeration over the shortest-path layers between `start` and
/// `end`. Uses an explicit stack: `cursors[i]` is the index of the next
/// neighbor to try from `path[i]`. Depth from `start` strictly increases along
/// the path, so no vertex repeats.
fn layered_paths(
    adj: &Adjacency,
    start: VertexId,
    end: VertexId,
    budget: u32,
    from_start: &HashMap<VertexId, u32>,
    to_end: &HashMap<VertexId, u32>,
) -> Vec<Path> {
    let budget = budget as usize;
    let on_layer = |v: VertexId, hop: usize| {
        from_start.get(&v) == Some(&(hop as u32))
            && to_end.get(&v) == Some(&((budget - hop) as u32))
    };

    let mut found = Vec::new();
    let mut path: Path = vec![start];
    let mut cursors: Vec<usize> = vec![0];

    while let Some(&cursor) = cursors.last() {
        let top = cursors.len() - 1;
        let current = path[top];

        if top == budget {
            if current == end {
                found.push(path.clone());
            }
            cursors.pop();
            path.pop();
            continue;
        }

        match adj.neighbors(current).get(cursor) {
            Some(&next) => {
                cursors[top] += 1;
                if on_layer(next, top + 1) {
                    path.push(next);
                    cursors.push(0);
                }
            }
            None => {
                cursors.pop();
                path.pop();
            }
        }
    }

    found
}
