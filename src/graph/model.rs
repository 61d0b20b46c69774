use std::collections::{HashMap, HashSet, VecDeque};

use crate::foundation::error::{SceneError, SceneResult};

/// Vertex label as supplied by the scene script.
pub type VertexId = u32;

/// An undirected simple graph with insertion-ordered vertices.
///
/// Positions are not part of a graph; layouts derive them on demand (see
/// [`compute_layout`](crate::graph::layout::compute_layout)).
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Graph {
    vertices: Vec<VertexId>,
    edges: Vec<(VertexId, VertexId)>,
}

impl Graph {
    /// Build a graph, rejecting duplicate vertices, unknown endpoints, self-loops and duplicate
    /// edges (in either orientation).
    pub fn new(
        vertices: impl IntoIterator<Item = VertexId>,
        edges: impl IntoIterator<Item = (VertexId, VertexId)>,
    ) -> SceneResult<Self> {
        let vertices: Vec<VertexId> = vertices.into_iter().collect();
        let mut seen = HashSet::with_capacity(vertices.len());
        for v in &vertices {
            if !seen.insert(*v) {
                return Err(SceneError::validation(format!("duplicate vertex {v}")));
            }
        }

        let mut edge_set = HashSet::new();
        let mut out_edges = Vec::new();
        for (u, v) in edges {
            if !seen.contains(&u) || !seen.contains(&v) {
                return Err(SceneError::validation(format!(
                    "edge ({u}, {v}) references an unknown vertex"
                )));
            }
            if u == v {
                return Err(SceneError::validation(format!(
                    "self-loop on vertex {u} is not supported"
                )));
            }
            if !edge_set.insert((u.min(v), u.max(v))) {
                return Err(SceneError::validation(format!("duplicate edge ({u}, {v})")));
            }
            out_edges.push((u, v));
        }

        Ok(Self {
            vertices,
            edges: out_edges,
        })
    }

    /// The complete graph on vertices `0..n`.
    pub fn complete(n: u32) -> Self {
        let vertices: Vec<VertexId> = (0..n).collect();
        let mut edges = Vec::with_capacity((n as usize) * (n as usize).saturating_sub(1) / 2);
        for u in 0..n {
            for v in (u + 1)..n {
                edges.push((u, v));
            }
        }
        Self { vertices, edges }
    }

    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    pub fn edges(&self) -> &[(VertexId, VertexId)] {
        &self.edges
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn index_of(&self, v: VertexId) -> Option<usize> {
        self.vertices.iter().position(|x| *x == v)
    }

    /// Edges as pairs of vertex indices.
    pub fn edge_indices(&self) -> Vec<(usize, usize)> {
        let index: HashMap<VertexId, usize> = self
            .vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (*v, i))
            .collect();
        self.edges
            .iter()
            .map(|(u, v)| (index[u], index[v]))
            .collect()
    }

    /// Index-based adjacency lists, neighbors in edge order.
    pub fn adjacency(&self) -> Vec<Vec<usize>> {
        let mut adj = vec![Vec::new(); self.vertices.len()];
        for (a, b) in self.edge_indices() {
            adj[a].push(b);
            adj[b].push(a);
        }
        adj
    }

    /// Hop distances between every pair of vertices; `None` when disconnected.
    pub fn shortest_path_lengths(&self) -> Vec<Vec<Option<usize>>> {
        let adj = self.adjacency();
        let n = adj.len();
        let mut out = vec![vec![None; n]; n];
        for (src, row) in out.iter_mut().enumerate() {
            row[src] = Some(0);
            let mut queue = VecDeque::from([src]);
            while let Some(u) = queue.pop_front() {
                let du = row[u].unwrap_or(0);
                for &w in &adj[u] {
                    if row[w].is_none() {
                        row[w] = Some(du + 1);
                        queue.push_back(w);
                    }
                }
            }
        }
        out
    }

    /// Connected components as vertex-index lists, in order of first vertex.
    pub fn components(&self) -> Vec<Vec<usize>> {
        let adj = self.adjacency();
        let mut seen = vec![false; adj.len()];
        let mut out = Vec::new();
        for start in 0..adj.len() {
            if seen[start] {
                continue;
            }
            seen[start] = true;
            let mut comp = vec![start];
            let mut queue = VecDeque::from([start]);
            while let Some(u) = queue.pop_front() {
                for &w in &adj[u] {
                    if !seen[w] {
                        seen[w] = true;
                        comp.push(w);
                        queue.push_back(w);
                    }
                }
            }
            out.push(comp);
        }
        out
    }

    pub fn is_forest(&self) -> bool {
        self.edges.len() + self.components().len() == self.vertices.len()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/graph/model.rs"]
mod tests;
