use crate::animation::lerp::Lerp;
use crate::foundation::color::Color;
use crate::foundation::core::Point;
use crate::mobject::model::Style;

/// Default label size in pixels at 1080p.
pub const DEFAULT_FONT_SIZE: f64 = 48.0;

/// A single line of plain Unicode text centered on `center`.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub text: String,
    pub center: Point,
    pub font_size: f64,
    pub style: Style,
}

impl Label {
    pub fn new(text: impl Into<String>, center: Point) -> Self {
        Self {
            text: text.into(),
            center,
            font_size: DEFAULT_FONT_SIZE,
            style: Style::filled(Color::WHITE),
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.style = Style {
            stroke: color,
            fill: Some(color),
            ..self.style
        };
        self
    }

    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }
}

impl Lerp for Label {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            text: if t < 1.0 { a.text.clone() } else { b.text.clone() },
            center: <Point as Lerp>::lerp(&a.center, &b.center, t),
            font_size: f64::lerp(&a.font_size, &b.font_size, t),
            style: Style::lerp(&a.style, &b.style, t),
        }
    }
}

/// Entries laid out in rows and columns between square brackets.
#[derive(Clone, Debug, PartialEq)]
pub struct MatrixLabel {
    pub entries: Vec<Vec<String>>,
    pub center: Point,
    pub font_size: f64,
    pub style: Style,
}

impl MatrixLabel {
    pub fn new(entries: Vec<Vec<String>>, center: Point) -> Self {
        Self {
            entries,
            center,
            font_size: DEFAULT_FONT_SIZE,
            style: Style::filled(Color::WHITE),
        }
    }

    /// A single-column matrix of `values`, each formatted with `decimals` places.
    pub fn column(values: &[f64], decimals: usize, center: Point) -> Self {
        let entries = values
            .iter()
            .map(|v| vec![format_coordinate(*v, decimals)])
            .collect();
        Self::new(entries, center)
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.style = Style {
            stroke: color,
            fill: Some(color),
            ..self.style
        };
        self
    }

    pub fn rows(&self) -> usize {
        self.entries.len()
    }

    pub fn cols(&self) -> usize {
        self.entries.iter().map(Vec::len).max().unwrap_or(0)
    }
}

impl Lerp for MatrixLabel {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            entries: if t < 1.0 {
                a.entries.clone()
            } else {
                b.entries.clone()
            },
            center: <Point as Lerp>::lerp(&a.center, &b.center, t),
            font_size: f64::lerp(&a.font_size, &b.font_size, t),
            style: Style::lerp(&a.style, &b.style, t),
        }
    }
}

/// Format a coordinate with a fixed number of decimals, never printing `-0`.
pub fn format_coordinate(value: f64, decimals: usize) -> String {
    let s = format!("{value:.decimals$}");
    if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
        s[1..].to_string()
    } else {
        s
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mobject/label.rs"]
mod tests;
