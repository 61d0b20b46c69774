use crate::animation::lerp::Lerp;
use crate::foundation::color::Color;
use crate::foundation::core::Point;
use crate::mobject::model::Style;

/// A coordinate grid with emphasized axes and optional integer tick labels.
#[derive(Clone, Debug, PartialEq)]
pub struct NumberPlane {
    /// Inclusive `(min, max)` extent of the grid along x, in scene units.
    pub x_range: (i32, i32),
    pub y_range: (i32, i32),
    pub with_coordinates: bool,
    pub axis_color: Color,
    pub style: Style,
}

impl NumberPlane {
    /// A plane covering the default 16:9 frame.
    pub fn new() -> Self {
        Self::with_ranges((-7, 7), (-4, 4))
    }

    pub fn with_ranges(x_range: (i32, i32), y_range: (i32, i32)) -> Self {
        Self {
            x_range,
            y_range,
            with_coordinates: false,
            axis_color: Color::WHITE,
            style: Style {
                stroke_width: 2.0,
                ..Style::stroked(Color::BLUE_D)
            },
        }
    }

    /// Show integer coordinates along both axes.
    pub fn add_coordinates(mut self) -> Self {
        self.with_coordinates = true;
        self
    }

    /// Grid lines as segments, vertical lines first; axes excluded.
    pub fn grid_segments(&self) -> Vec<(Point, Point)> {
        let (x0, x1) = self.x_range;
        let (y0, y1) = self.y_range;
        let mut out = Vec::new();
        for x in x0..=x1 {
            if x != 0 {
                out.push((
                    Point::new(f64::from(x), f64::from(y0)),
                    Point::new(f64::from(x), f64::from(y1)),
                ));
            }
        }
        for y in y0..=y1 {
            if y != 0 {
                out.push((
                    Point::new(f64::from(x0), f64::from(y)),
                    Point::new(f64::from(x1), f64::from(y)),
                ));
            }
        }
        out
    }

    /// The x and y axes.
    pub fn axes(&self) -> [(Point, Point); 2] {
        let (x0, x1) = self.x_range;
        let (y0, y1) = self.y_range;
        [
            (Point::new(f64::from(x0), 0.0), Point::new(f64::from(x1), 0.0)),
            (Point::new(0.0, f64::from(y0)), Point::new(0.0, f64::from(y1))),
        ]
    }

    /// Tick labels with their anchor points; empty unless coordinates are enabled.
    pub fn coordinate_labels(&self) -> Vec<(String, Point)> {
        if !self.with_coordinates {
            return Vec::new();
        }
        let mut out = Vec::new();
        for x in self.x_range.0..=self.x_range.1 {
            if x != 0 {
                out.push((x.to_string(), Point::new(f64::from(x), -0.3)));
            }
        }
        for y in self.y_range.0..=self.y_range.1 {
            if y != 0 {
                out.push((y.to_string(), Point::new(-0.3, f64::from(y))));
            }
        }
        out
    }
}

impl Default for NumberPlane {
    fn default() -> Self {
        Self::new()
    }
}

impl Lerp for NumberPlane {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        let pick = if t < 1.0 { a } else { b };
        Self {
            x_range: pick.x_range,
            y_range: pick.y_range,
            with_coordinates: pick.with_coordinates,
            axis_color: Color::lerp(&a.axis_color, &b.axis_color, t),
            style: Style::lerp(&a.style, &b.style, t),
        }
    }
}
