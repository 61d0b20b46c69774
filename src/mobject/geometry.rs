use std::f64::consts::TAU;

use crate::animation::lerp::Lerp;
use crate::foundation::color::Color;
use crate::foundation::core::{Point, Vec2};
use crate::foundation::error::{SceneError, SceneResult};
use crate::foundation::math::{normalize_angle, rotate_about};
use crate::mobject::model::Style;

#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    pub start: Point,
    pub end: Point,
    pub style: Style,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            style: Style::default(),
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.style.stroke = color;
        self
    }

    pub fn direction(&self) -> Vec2 {
        self.end - self.start
    }

    pub fn length(&self) -> f64 {
        self.direction().hypot()
    }

    pub fn center(&self) -> Point {
        self.start.midpoint(self.end)
    }

    pub fn shift(&mut self, by: Vec2) {
        self.start += by;
        self.end += by;
    }

    /// A copy rotated counterclockwise by `angle` radians about `about`.
    pub fn rotated(&self, angle: f64, about: Point) -> Self {
        Self {
            start: rotate_about(self.start, angle, about),
            end: rotate_about(self.end, angle, about),
            style: self.style,
        }
    }
}

impl Lerp for Line {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            start: <Point as Lerp>::lerp(&a.start, &b.start, t),
            end: <Point as Lerp>::lerp(&a.end, &b.end, t),
            style: Style::lerp(&a.style, &b.style, t),
        }
    }
}

/// A line with a triangular tip at `end`.
#[derive(Clone, Debug, PartialEq)]
pub struct Arrow {
    pub start: Point,
    pub end: Point,
    pub tip_length: f64,
    pub style: Style,
}

impl Arrow {
    pub const DEFAULT_TIP_LENGTH: f64 = 0.35;

    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            tip_length: Self::DEFAULT_TIP_LENGTH,
            style: Style::default(),
        }
    }

    /// An arrow from the origin to `coords`.
    pub fn vector(coords: Vec2) -> Self {
        Self::new(Point::ORIGIN, coords.to_point())
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.style.stroke = color;
        self
    }

    /// Components of the arrow, `end - start`.
    pub fn coordinates(&self) -> Vec2 {
        self.end - self.start
    }

    pub fn rotated(&self, angle: f64, about: Point) -> Self {
        Self {
            start: rotate_about(self.start, angle, about),
            end: rotate_about(self.end, angle, about),
            ..self.clone()
        }
    }

    pub fn rotated_about_origin(&self, angle: f64) -> Self {
        self.rotated(angle, Point::ORIGIN)
    }

    /// Tip length actually drawn: short arrows get proportionally shorter tips.
    pub fn effective_tip_length(&self) -> f64 {
        self.tip_length.min(0.5 * self.coordinates().hypot())
    }
}

impl Lerp for Arrow {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            start: <Point as Lerp>::lerp(&a.start, &b.start, t),
            end: <Point as Lerp>::lerp(&a.end, &b.end, t),
            tip_length: f64::lerp(&a.tip_length, &b.tip_length, t),
            style: Style::lerp(&a.style, &b.style, t),
        }
    }
}

/// Circular arc marking the angle between two lines.
///
/// The arc starts at `start_angle` and sweeps `sweep` radians; a negative sweep runs clockwise.
#[derive(Clone, Debug, PartialEq)]
pub struct Angle {
    pub vertex: Point,
    pub radius: f64,
    pub start_angle: f64,
    pub sweep: f64,
    pub style: Style,
}

impl Angle {
    pub const DEFAULT_RADIUS: f64 = 0.4;

    /// Arc between `first` and `second`, centered on their intersection.
    ///
    /// The arc runs counterclockwise from the direction of `first`'s end to the direction of
    /// `second`'s end, or clockwise (the reflex side) when `other_angle` is set.
    pub fn between(
        first: &Line,
        second: &Line,
        radius: f64,
        other_angle: bool,
    ) -> SceneResult<Self> {
        let vertex = intersection(first, second)?;
        let a0 = ray_angle(first, vertex);
        let a1 = ray_angle(second, vertex);
        let ccw = normalize_angle(a1 - a0);
        let sweep = if other_angle && ccw > 0.0 {
            ccw - TAU
        } else {
            ccw
        };
        Ok(Self {
            vertex,
            radius,
            start_angle: a0,
            sweep,
            style: Style::default(),
        })
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.style.stroke = color;
        self
    }

    /// Point at fraction `t` along the arc, `t` in `[0, 1]`.
    pub fn point_from_proportion(&self, t: f64) -> Point {
        let a = self.start_angle + self.sweep * t.clamp(0.0, 1.0);
        self.vertex + self.radius * Vec2::new(a.cos(), a.sin())
    }

    pub fn to_arc(&self) -> kurbo::Arc {
        kurbo::Arc::new(
            self.vertex,
            Vec2::new(self.radius, self.radius),
            self.start_angle,
            self.sweep,
            0.0,
        )
    }
}

impl Lerp for Angle {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            vertex: <Point as Lerp>::lerp(&a.vertex, &b.vertex, t),
            radius: f64::lerp(&a.radius, &b.radius, t),
            start_angle: f64::lerp(&a.start_angle, &b.start_angle, t),
            sweep: f64::lerp(&a.sweep, &b.sweep, t),
            style: Style::lerp(&a.style, &b.style, t),
        }
    }
}

fn intersection(a: &Line, b: &Line) -> SceneResult<Point> {
    let d1 = a.direction();
    let d2 = b.direction();
    let denom = d1.cross(d2);
    if denom.abs() < 1e-12 {
        // Collinear lines that share an endpoint still meet there.
        return shared_endpoint(a, b).ok_or_else(|| {
            SceneError::evaluation("angle between parallel lines is undefined")
        });
    }
    let s = (b.start - a.start).cross(d2) / denom;
    Ok(a.start + d1 * s)
}

fn shared_endpoint(a: &Line, b: &Line) -> Option<Point> {
    [a.start, a.end].into_iter().find(|p| {
        [b.start, b.end]
            .into_iter()
            .any(|q| (*p - q).hypot() < 1e-9)
    })
}

fn ray_angle(line: &Line, vertex: Point) -> f64 {
    let towards_end = line.end - vertex;
    let dir = if towards_end.hypot() > 1e-9 {
        towards_end
    } else {
        line.direction()
    };
    dir.y.atan2(dir.x)
}

#[derive(Clone, Debug, PartialEq)]
pub struct Dot {
    pub center: Point,
    pub radius: f64,
    pub style: Style,
}

impl Dot {
    pub const DEFAULT_RADIUS: f64 = 0.08;

    pub fn new(center: Point) -> Self {
        Self {
            center,
            radius: Self::DEFAULT_RADIUS,
            style: Style::filled(Color::WHITE),
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.style = Style::filled(color);
        self
    }
}

impl Lerp for Dot {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            center: <Point as Lerp>::lerp(&a.center, &b.center, t),
            radius: f64::lerp(&a.radius, &b.radius, t),
            style: Style::lerp(&a.style, &b.style, t),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mobject/geometry.rs"]
mod tests;
