//! Named layout strategies mapping graph vertices to 2D positions.
//!
//! Every strategy produces raw coordinates which are then centered on the origin and rescaled so
//! the largest absolute coordinate equals [`LayoutOpts::scale`]. Randomized strategies are seeded
//! so that a scene renders identically on every run.

use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;

use nalgebra::{DMatrix, SymmetricEigen};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::foundation::core::{Point, Vec2};
use crate::graph::model::{Graph, VertexId};

/// Errors raised while selecting or computing a layout.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("unsupported layout '{0}' (expected one of: {names})", names = LayoutKind::names().join(", "))]
    UnknownLayout(String),

    #[error("graph is not planar: {0}")]
    NotPlanar(String),

    #[error("no crossing-free drawing found for a graph with {vertices} vertices and {edges} edges")]
    NoDrawingFound { vertices: usize, edges: usize },

    #[error("invalid shell specification: {0}")]
    InvalidShells(String),

    #[error("layout '{0}' produced non-finite coordinates")]
    NonFinite(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutKind {
    Spring,
    Circular,
    KamadaKawai,
    Planar,
    Random,
    Shell,
    Spectral,
    Spiral,
}

impl LayoutKind {
    /// Every supported strategy, in the order the layout scenes cycle through them.
    pub const ALL: [LayoutKind; 8] = [
        Self::Spring,
        Self::Circular,
        Self::KamadaKawai,
        Self::Planar,
        Self::Random,
        Self::Shell,
        Self::Spectral,
        Self::Spiral,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Spring => "spring",
            Self::Circular => "circular",
            Self::KamadaKawai => "kamada_kawai",
            Self::Planar => "planar",
            Self::Random => "random",
            Self::Shell => "shell",
            Self::Spectral => "spectral",
            Self::Spiral => "spiral",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|k| k.name()).collect()
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LayoutKind {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| LayoutError::UnknownLayout(s.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LayoutOpts {
    /// Largest absolute coordinate after rescaling, in scene units.
    pub scale: f64,
    /// Seed for `spring`, `random` and the `planar` fallback search.
    pub seed: u64,
    /// Iteration budget for the force-directed strategies.
    pub iterations: usize,
    /// Explicit shells for `shell`; `None` puts every vertex on one shell.
    pub shells: Option<Vec<Vec<VertexId>>>,
}

impl Default for LayoutOpts {
    fn default() -> Self {
        Self {
            scale: 2.0,
            seed: 0,
            iterations: 50,
            shells: None,
        }
    }
}

/// Compute vertex positions (aligned with `graph.vertices()`) for one strategy.
#[tracing::instrument(skip(graph, opts), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn compute_layout(
    graph: &Graph,
    kind: LayoutKind,
    opts: &LayoutOpts,
) -> Result<Vec<Point>, LayoutError> {
    let n = graph.vertex_count();
    let raw = match n {
        0 => Vec::new(),
        1 => vec![Point::ORIGIN],
        _ => match kind {
            LayoutKind::Spring => spring(graph, opts),
            LayoutKind::Circular => circular(n),
            LayoutKind::KamadaKawai => kamada_kawai(graph),
            LayoutKind::Planar => planar(graph, opts)?,
            LayoutKind::Random => random(n, opts.seed),
            LayoutKind::Shell => shell(graph, opts.shells.as_deref())?,
            LayoutKind::Spectral => spectral(graph),
            LayoutKind::Spiral => spiral(n, 0.35),
        },
    };

    if raw.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
        return Err(LayoutError::NonFinite(kind.name()));
    }
    Ok(rescale(raw, opts.scale))
}

/// Center on the origin, then scale so that `max(|x|, |y|) == scale`.
pub fn rescale(mut pos: Vec<Point>, scale: f64) -> Vec<Point> {
    if pos.is_empty() {
        return pos;
    }
    let n = pos.len() as f64;
    let mean = pos
        .iter()
        .fold(Vec2::ZERO, |acc, p| acc + p.to_vec2())
        / n;
    let mut lim = 0.0f64;
    for p in pos.iter_mut() {
        *p -= mean;
        lim = lim.max(p.x.abs()).max(p.y.abs());
    }
    if lim > 0.0 {
        let k = scale / lim;
        for p in pos.iter_mut() {
            *p = Point::new(p.x * k, p.y * k);
        }
    }
    pos
}

fn circular(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let theta = TAU * (i as f64) / (n as f64);
            Point::new(theta.cos(), theta.sin())
        })
        .collect()
}

fn random(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Point::new(rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0)))
        .collect()
}

fn spiral(n: usize, resolution: f64) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let dist = i as f64;
            let angle = resolution * dist;
            Point::new(dist * angle.cos(), dist * angle.sin())
        })
        .collect()
}

/// Fruchterman-Reingold with a linearly cooling temperature.
fn spring(graph: &Graph, opts: &LayoutOpts) -> Vec<Point> {
    spring_from(graph, random(graph.vertex_count(), opts.seed), opts.iterations)
}

fn spring_from(graph: &Graph, mut pos: Vec<Point>, iterations: usize) -> Vec<Point> {
    let n = pos.len();
    let mut adj = vec![vec![false; n]; n];
    for (a, b) in graph.edge_indices() {
        adj[a][b] = true;
        adj[b][a] = true;
    }

    let k = (1.0 / n as f64).sqrt();
    let (min, max) = bounds(&pos);
    let mut t = (max.x - min.x).max(max.y - min.y) * 0.1;
    let dt = t / (iterations as f64 + 1.0);
    const THRESHOLD: f64 = 1e-4;

    for _ in 0..iterations {
        let mut disp = vec![Vec2::ZERO; n];
        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let delta = pos[i] - pos[j];
                let dist = delta.hypot().max(0.01);
                let attract = if adj[i][j] { dist / k } else { 0.0 };
                let force = k * k / (dist * dist) - attract;
                disp[i] += delta * force;
            }
        }

        let mut moved = 0.0;
        for i in 0..n {
            let len = disp[i].hypot().max(0.01);
            let step = disp[i] * (t / len);
            pos[i] += step;
            moved += step.hypot();
        }
        t -= dt;
        if moved / (n as f64) < THRESHOLD {
            break;
        }
    }
    pos
}

/// Stress majorization over shortest-path distances, started from the circular layout.
fn kamada_kawai(graph: &Graph) -> Vec<Point> {
    let n = graph.vertex_count();
    let hops = graph.shortest_path_lengths();
    let max_finite = hops
        .iter()
        .flatten()
        .filter_map(|d| *d)
        .max()
        .unwrap_or(1)
        .max(1);
    // Disconnected pairs are kept one step further apart than the graph's diameter.
    let dist: Vec<Vec<f64>> = hops
        .iter()
        .map(|row| {
            row.iter()
                .map(|d| d.unwrap_or(max_finite + 1) as f64)
                .collect()
        })
        .collect();

    let mut pos = circular(n);
    const ITERATIONS: usize = 300;
    const TOLERANCE: f64 = 1e-6;
    for _ in 0..ITERATIONS {
        let mut max_move = 0.0f64;
        for i in 0..n {
            let mut num = Vec2::ZERO;
            let mut den = 0.0;
            for j in 0..n {
                if i == j {
                    continue;
                }
                let d = dist[i][j];
                let w = 1.0 / (d * d);
                let delta = pos[i] - pos[j];
                let len = delta.hypot();
                let dir = if len > 1e-9 {
                    delta / len
                } else {
                    // Coincident points: nudge apart along a vertex-dependent direction.
                    Vec2::from_angle(TAU * (i as f64) / (n as f64))
                };
                num += (pos[j].to_vec2() + dir * d) * w;
                den += w;
            }
            if den > 0.0 {
                let next = (num / den).to_point();
                max_move = max_move.max((next - pos[i]).hypot());
                pos[i] = next;
            }
        }
        if max_move < TOLERANCE {
            break;
        }
    }
    pos
}

fn shell(graph: &Graph, shells: Option<&[Vec<VertexId>]>) -> Result<Vec<Point>, LayoutError> {
    let n = graph.vertex_count();
    let shells: Vec<Vec<usize>> = match shells {
        None => vec![(0..n).collect()],
        Some(shells) => {
            let mut seen = vec![false; n];
            let mut out = Vec::with_capacity(shells.len());
            for s in shells {
                let mut idx = Vec::with_capacity(s.len());
                for v in s {
                    let i = graph.index_of(*v).ok_or_else(|| {
                        LayoutError::InvalidShells(format!("vertex {v} is not in the graph"))
                    })?;
                    if std::mem::replace(&mut seen[i], true) {
                        return Err(LayoutError::InvalidShells(format!(
                            "vertex {v} appears in more than one shell"
                        )));
                    }
                    idx.push(i);
                }
                out.push(idx);
            }
            if let Some(missing) = seen.iter().position(|s| !s) {
                return Err(LayoutError::InvalidShells(format!(
                    "vertex {} is not assigned to a shell",
                    graph.vertices()[missing]
                )));
            }
            out
        }
    };

    let radius_bump = 1.0 / shells.len() as f64;
    let rotate = std::f64::consts::PI / shells.len() as f64;
    let mut radius = if shells.first().is_some_and(|s| s.len() == 1) {
        0.0
    } else {
        radius_bump
    };
    let mut first_theta = rotate;
    let mut pos = vec![Point::ORIGIN; n];
    for s in &shells {
        let m = s.len().max(1) as f64;
        for (k, &i) in s.iter().enumerate() {
            let theta = TAU * (k as f64) / m + first_theta;
            pos[i] = Point::new(radius * theta.cos(), radius * theta.sin());
        }
        radius += radius_bump;
        first_theta += rotate;
    }
    Ok(pos)
}

/// Second and third eigenvectors of the graph Laplacian.
fn spectral(graph: &Graph) -> Vec<Point> {
    let n = graph.vertex_count();
    if n <= 2 {
        return circular(n);
    }
    let mut lap = DMatrix::<f64>::zeros(n, n);
    for (a, b) in graph.edge_indices() {
        lap[(a, b)] -= 1.0;
        lap[(b, a)] -= 1.0;
        lap[(a, a)] += 1.0;
        lap[(b, b)] += 1.0;
    }

    let eig = SymmetricEigen::new(lap);
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&i, &j| eig.eigenvalues[i].total_cmp(&eig.eigenvalues[j]));

    let column = |k: usize| -> Vec<f64> {
        let mut v: Vec<f64> = eig.eigenvectors.column(order[k]).iter().copied().collect();
        // Eigenvectors are defined up to sign; pin it so layouts are reproducible.
        let flip = v.iter().find(|x| x.abs() > 1e-9).is_some_and(|x| *x < 0.0);
        if flip {
            v.iter_mut().for_each(|x| *x = -*x);
        }
        v
    };
    let xs = column(1);
    let ys = column(2);
    xs.into_iter()
        .zip(ys)
        .map(|(x, y)| Point::new(x, y))
        .collect()
}

/// Crossing-free drawing: layered drawing for forests, otherwise the first crossing-free
/// candidate among circular orders, barycentric drawings framed by a short chordless cycle, and
/// seeded spring layouts.
///
/// Only the edge-count bound proves non-planarity; a planar graph whose drawing the search misses
/// reports [`LayoutError::NoDrawingFound`].
fn planar(graph: &Graph, opts: &LayoutOpts) -> Result<Vec<Point>, LayoutError> {
    let n = graph.vertex_count();
    let m = graph.edge_count();
    if n >= 3 && m > 3 * n - 6 {
        return Err(LayoutError::NotPlanar(format!(
            "{m} edges exceed the planar bound 3n - 6 = {} for {n} vertices",
            3 * n - 6
        )));
    }
    if graph.is_forest() {
        return Ok(forest_layers(graph));
    }

    let edges = graph.edge_indices();
    let mut candidates = vec![circular(n), circular_in_order(&dfs_order(graph))];
    for outer in chordless_cycles(graph, 5, 48) {
        candidates.push(barycentric(graph, &outer));
    }
    for k in 0..16u64 {
        candidates.push(spring_from(
            graph,
            random(n, opts.seed.wrapping_add(k)),
            opts.iterations.max(50) * 4,
        ));
    }
    candidates
        .into_iter()
        .find(|pos| !has_crossing(pos, &edges))
        .ok_or(LayoutError::NoDrawingFound { vertices: n, edges: m })
}

/// Induced cycles of length 3 up to `max_len`, shortest first, each listed once in walking order.
///
/// Faces of a 3-connected planar graph are exactly its non-separating induced cycles.
fn chordless_cycles(graph: &Graph, max_len: usize, limit: usize) -> Vec<Vec<usize>> {
    fn extend(
        path: &mut Vec<usize>,
        len: usize,
        adj: &[Vec<usize>],
        out: &mut Vec<Vec<usize>>,
        limit: usize,
    ) {
        if out.len() >= limit {
            return;
        }
        let start = path[0];
        let last = path[path.len() - 1];
        if path.len() == len {
            // Each cycle is found in both directions; keep the one with the smaller second vertex.
            if adj[last].contains(&start) && path[1] < last {
                out.push(path.clone());
            }
            return;
        }
        for &next in &adj[last] {
            if next <= start || path.contains(&next) {
                continue;
            }
            // A chord to any earlier vertex other than the one just left rules the cycle out.
            // The closing edge back to `start` is only allowed at the last position.
            let chord = path[..path.len() - 1]
                .iter()
                .enumerate()
                .any(|(i, &u)| adj[next].contains(&u) && !(i == 0 && path.len() + 1 == len));
            if chord {
                continue;
            }
            path.push(next);
            extend(path, len, adj, out, limit);
            path.pop();
        }
    }

    let adj = graph.adjacency();
    let mut out = Vec::new();
    for len in 3..=max_len {
        for start in 0..adj.len() {
            extend(&mut vec![start], len, &adj, &mut out, limit);
        }
    }
    out
}

/// Tutte-style drawing: `outer` pinned on a circle, every other vertex repeatedly moved to the
/// barycenter of its neighbors.
fn barycentric(graph: &Graph, outer: &[usize]) -> Vec<Point> {
    let adj = graph.adjacency();
    let n = adj.len();
    let mut pos = vec![Point::ORIGIN; n];
    let mut pinned = vec![false; n];
    for (p, &i) in circular(outer.len()).into_iter().zip(outer) {
        pos[i] = p;
        pinned[i] = true;
    }
    for _ in 0..500 {
        for i in 0..n {
            if pinned[i] || adj[i].is_empty() {
                continue;
            }
            let sum = adj[i]
                .iter()
                .fold(Vec2::ZERO, |acc, &j| acc + pos[j].to_vec2());
            pos[i] = (sum / adj[i].len() as f64).to_point();
        }
    }
    pos
}

fn circular_in_order(order: &[usize]) -> Vec<Point> {
    let ring = circular(order.len());
    let mut pos = vec![Point::ORIGIN; order.len()];
    for (slot, &i) in order.iter().enumerate() {
        pos[i] = ring[slot];
    }
    pos
}

fn dfs_order(graph: &Graph) -> Vec<usize> {
    let adj = graph.adjacency();
    let mut seen = vec![false; adj.len()];
    let mut out = Vec::with_capacity(adj.len());
    for root in 0..adj.len() {
        if seen[root] {
            continue;
        }
        let mut stack = vec![root];
        while let Some(u) = stack.pop() {
            if std::mem::replace(&mut seen[u], true) {
                continue;
            }
            out.push(u);
            for &w in adj[u].iter().rev() {
                if !seen[w] {
                    stack.push(w);
                }
            }
        }
    }
    out
}

/// Each tree hangs from its first vertex; leaves get consecutive x slots, parents sit centered
/// over their children, depth goes downwards.
fn forest_layers(graph: &Graph) -> Vec<Point> {
    let adj = graph.adjacency();
    let n = adj.len();
    let mut pos = vec![Point::ORIGIN; n];
    let mut next_slot = 0.0;

    fn place(
        u: usize,
        parent: Option<usize>,
        depth: usize,
        adj: &[Vec<usize>],
        pos: &mut [Point],
        next_slot: &mut f64,
    ) -> f64 {
        let children: Vec<usize> = adj[u].iter().copied().filter(|w| Some(*w) != parent).collect();
        let x = if children.is_empty() {
            let x = *next_slot;
            *next_slot += 1.0;
            x
        } else {
            let xs: Vec<f64> = children
                .iter()
                .map(|&c| place(c, Some(u), depth + 1, adj, pos, next_slot))
                .collect();
            (xs[0] + xs[xs.len() - 1]) / 2.0
        };
        pos[u] = Point::new(x, -(depth as f64));
        x
    }

    for comp in graph.components() {
        place(comp[0], None, 0, &adj, &mut pos, &mut next_slot);
    }
    pos
}

fn has_crossing(pos: &[Point], edges: &[(usize, usize)]) -> bool {
    for (i, &(a, b)) in edges.iter().enumerate() {
        for &(c, d) in &edges[i + 1..] {
            if a == c || a == d || b == c || b == d {
                continue;
            }
            if segments_intersect(pos[a], pos[b], pos[c], pos[d]) {
                return true;
            }
        }
    }
    false
}

pub(crate) fn segments_intersect(p1: Point, p2: Point, p3: Point, p4: Point) -> bool {
    const EPS: f64 = 1e-9;
    fn orient(a: Point, b: Point, c: Point) -> f64 {
        (b - a).cross(c - a)
    }
    fn on_segment(a: Point, b: Point, p: Point) -> bool {
        p.x >= a.x.min(b.x) - EPS
            && p.x <= a.x.max(b.x) + EPS
            && p.y >= a.y.min(b.y) - EPS
            && p.y <= a.y.max(b.y) + EPS
    }

    let d1 = orient(p3, p4, p1);
    let d2 = orient(p3, p4, p2);
    let d3 = orient(p1, p2, p3);
    let d4 = orient(p1, p2, p4);
    if ((d1 > EPS && d2 < -EPS) || (d1 < -EPS && d2 > EPS))
        && ((d3 > EPS && d4 < -EPS) || (d3 < -EPS && d4 > EPS))
    {
        return true;
    }
    (d1.abs() <= EPS && on_segment(p3, p4, p1))
        || (d2.abs() <= EPS && on_segment(p3, p4, p2))
        || (d3.abs() <= EPS && on_segment(p1, p2, p3))
        || (d4.abs() <= EPS && on_segment(p1, p2, p4))
}

fn bounds(pos: &[Point]) -> (Point, Point) {
    let mut min = Point::new(f64::INFINITY, f64::INFINITY);
    let mut max = Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
    for p in pos {
        min = Point::new(min.x.min(p.x), min.y.min(p.y));
        max = Point::new(max.x.max(p.x), max.y.max(p.y));
    }
    (min, max)
}

#[cfg(test)]
#[path = "../../tests/unit/graph/layout.rs"]
mod tests;
