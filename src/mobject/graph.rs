use crate::animation::lerp::Lerp;
use crate::foundation::core::{Point, Vec2};
use crate::foundation::error::{SceneError, SceneResult};
use crate::graph::layout::{LayoutKind, LayoutOpts, compute_layout};
use crate::graph::model::{Graph, VertexId};
use crate::mobject::model::Style;

/// A graph drawn at fixed vertex positions: edges as lines, vertices as dots.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphMobject {
    pub graph: Graph,
    /// Aligned with `graph.vertices()`.
    pub positions: Vec<Point>,
    pub vertex_radius: f64,
    pub style: Style,
}

impl GraphMobject {
    pub const DEFAULT_VERTEX_RADIUS: f64 = 0.1;

    pub fn new(graph: Graph, positions: Vec<Point>) -> SceneResult<Self> {
        if positions.len() != graph.vertex_count() {
            return Err(SceneError::validation(format!(
                "{} positions supplied for {} vertices",
                positions.len(),
                graph.vertex_count()
            )));
        }
        Ok(Self {
            graph,
            positions,
            vertex_radius: Self::DEFAULT_VERTEX_RADIUS,
            style: Style::default(),
        })
    }

    /// Position `graph` with the named layout.
    pub fn with_layout(graph: Graph, kind: LayoutKind, opts: &LayoutOpts) -> SceneResult<Self> {
        let positions = compute_layout(&graph, kind, opts)?;
        Self::new(graph, positions)
    }

    pub fn position_of(&self, v: VertexId) -> Option<Point> {
        self.graph.index_of(v).map(|i| self.positions[i])
    }

    /// Endpoints of every edge, in edge order.
    pub fn edge_segments(&self) -> Vec<(Point, Point)> {
        self.graph
            .edge_indices()
            .into_iter()
            .map(|(a, b)| (self.positions[a], self.positions[b]))
            .collect()
    }

    /// Center of the bounding box of all vertices.
    pub fn center(&self) -> Point {
        let Some(first) = self.positions.first() else {
            return Point::ORIGIN;
        };
        let (mut lo, mut hi) = (*first, *first);
        for p in &self.positions {
            lo = Point::new(lo.x.min(p.x), lo.y.min(p.y));
            hi = Point::new(hi.x.max(p.x), hi.y.max(p.y));
        }
        lo.midpoint(hi)
    }

    pub fn shift(&mut self, by: Vec2) {
        for p in &mut self.positions {
            *p += by;
        }
    }

    /// Move every vertex toward its position in `target`; both must hold the same graph.
    pub fn interpolate(&self, target: &Self, t: f64) -> SceneResult<Self> {
        if self.graph != target.graph {
            return Err(SceneError::animation(format!(
                "cannot transform a graph with {} vertices and {} edges into a different graph \
                 with {} vertices and {} edges",
                self.graph.vertex_count(),
                self.graph.edge_count(),
                target.graph.vertex_count(),
                target.graph.edge_count()
            )));
        }
        Ok(Self {
            graph: self.graph.clone(),
            positions: self
                .positions
                .iter()
                .zip(&target.positions)
                .map(|(a, b)| <Point as Lerp>::lerp(a, b, t))
                .collect(),
            vertex_radius: f64::lerp(&self.vertex_radius, &target.vertex_radius, t),
            style: Style::lerp(&self.style, &target.style, t),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mobject/graph.rs"]
mod tests;
