use crate::animation::lerp::Lerp;
use crate::foundation::color::Color;
use crate::foundation::core::{Point, Vec2};
use crate::foundation::error::{SceneError, SceneResult};
use crate::mobject::geometry::{Angle, Arrow, Dot, Line};
use crate::mobject::graph::GraphMobject;
use crate::mobject::label::{Label, MatrixLabel};
use crate::mobject::plane::NumberPlane;

/// Handle of a mobject owned by a [`Scene`](crate::Scene).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct MobjectId(pub(crate) u32);

/// Paint parameters shared by every mobject kind.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Style {
    pub stroke: Color,
    pub fill: Option<Color>,
    /// Stroke width in pixels at 1080p; the renderer scales it to the output height.
    pub stroke_width: f64,
    pub opacity: f64,
    /// Fraction of the mobject drawn so far; `Create`/`Write` animate it from 0 to 1.
    pub reveal: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            stroke: Color::WHITE,
            fill: None,
            stroke_width: 4.0,
            opacity: 1.0,
            reveal: 1.0,
        }
    }
}

impl Style {
    pub fn stroked(color: Color) -> Self {
        Self {
            stroke: color,
            ..Self::default()
        }
    }

    pub fn filled(color: Color) -> Self {
        Self {
            stroke: color,
            fill: Some(color),
            ..Self::default()
        }
    }
}

impl Lerp for Style {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            stroke: Color::lerp(&a.stroke, &b.stroke, t),
            fill: Option::lerp(&a.fill, &b.fill, t),
            stroke_width: f64::lerp(&a.stroke_width, &b.stroke_width, t),
            opacity: f64::lerp(&a.opacity, &b.opacity, t),
            reveal: f64::lerp(&a.reveal, &b.reveal, t),
        }
    }
}

/// Every visual object a scene can hold.
#[derive(Clone, Debug, PartialEq)]
pub enum Mobject {
    Line(Line),
    Arrow(Arrow),
    Angle(Angle),
    Dot(Dot),
    Label(Label),
    Matrix(MatrixLabel),
    Graph(GraphMobject),
    Plane(NumberPlane),
}

impl Mobject {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Line(_) => "line",
            Self::Arrow(_) => "arrow",
            Self::Angle(_) => "angle",
            Self::Dot(_) => "dot",
            Self::Label(_) => "label",
            Self::Matrix(_) => "matrix",
            Self::Graph(_) => "graph",
            Self::Plane(_) => "plane",
        }
    }

    pub fn style(&self) -> &Style {
        match self {
            Self::Line(m) => &m.style,
            Self::Arrow(m) => &m.style,
            Self::Angle(m) => &m.style,
            Self::Dot(m) => &m.style,
            Self::Label(m) => &m.style,
            Self::Matrix(m) => &m.style,
            Self::Graph(m) => &m.style,
            Self::Plane(m) => &m.style,
        }
    }

    pub fn style_mut(&mut self) -> &mut Style {
        match self {
            Self::Line(m) => &mut m.style,
            Self::Arrow(m) => &mut m.style,
            Self::Angle(m) => &mut m.style,
            Self::Dot(m) => &mut m.style,
            Self::Label(m) => &mut m.style,
            Self::Matrix(m) => &mut m.style,
            Self::Graph(m) => &mut m.style,
            Self::Plane(m) => &mut m.style,
        }
    }

    pub fn center(&self) -> Point {
        match self {
            Self::Line(m) => m.center(),
            Self::Arrow(m) => m.start.midpoint(m.end),
            Self::Angle(m) => m.point_from_proportion(0.5),
            Self::Dot(m) => m.center,
            Self::Label(m) => m.center,
            Self::Matrix(m) => m.center,
            Self::Graph(m) => m.center(),
            Self::Plane(_) => Point::ORIGIN,
        }
    }

    pub fn shift(&mut self, by: Vec2) {
        match self {
            Self::Line(m) => m.shift(by),
            Self::Arrow(m) => {
                m.start += by;
                m.end += by;
            }
            Self::Angle(m) => m.vertex += by,
            Self::Dot(m) => m.center += by,
            Self::Label(m) => m.center += by,
            Self::Matrix(m) => m.center += by,
            Self::Graph(m) => m.shift(by),
            Self::Plane(_) => {}
        }
    }

    pub fn move_to(&mut self, point: Point) {
        let by = point - self.center();
        self.shift(by);
    }

    /// Recolor the stroke, and the fill when the mobject has one.
    pub fn set_color(&mut self, color: Color) {
        let style = self.style_mut();
        style.stroke = color;
        if style.fill.is_some() {
            style.fill = Some(color);
        }
    }

    /// Interpolate between two states of the same kind of mobject.
    pub fn interpolate(&self, target: &Mobject, t: f64) -> SceneResult<Mobject> {
        let out = match (self, target) {
            (Self::Line(a), Self::Line(b)) => Self::Line(Line::lerp(a, b, t)),
            (Self::Arrow(a), Self::Arrow(b)) => Self::Arrow(Arrow::lerp(a, b, t)),
            (Self::Angle(a), Self::Angle(b)) => Self::Angle(Angle::lerp(a, b, t)),
            (Self::Dot(a), Self::Dot(b)) => Self::Dot(Dot::lerp(a, b, t)),
            (Self::Label(a), Self::Label(b)) => Self::Label(Label::lerp(a, b, t)),
            (Self::Matrix(a), Self::Matrix(b)) => Self::Matrix(MatrixLabel::lerp(a, b, t)),
            (Self::Graph(a), Self::Graph(b)) => Self::Graph(a.interpolate(b, t)?),
            (Self::Plane(a), Self::Plane(b)) => Self::Plane(NumberPlane::lerp(a, b, t)),
            (a, b) => {
                return Err(SceneError::animation(format!(
                    "cannot transform a {} into a {}",
                    a.kind(),
                    b.kind()
                )));
            }
        };
        Ok(out)
    }

    pub fn as_line(&self) -> Option<&Line> {
        match self {
            Self::Line(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_arrow(&self) -> Option<&Arrow> {
        match self {
            Self::Arrow(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_angle(&self) -> Option<&Angle> {
        match self {
            Self::Angle(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_label(&self) -> Option<&Label> {
        match self {
            Self::Label(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_matrix(&self) -> Option<&MatrixLabel> {
        match self {
            Self::Matrix(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_graph(&self) -> Option<&GraphMobject> {
        match self {
            Self::Graph(m) => Some(m),
            _ => None,
        }
    }
}

macro_rules! impl_from_kind {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Mobject {
                fn from(m: $ty) -> Self {
                    Self::$variant(m)
                }
            }
        )*
    };
}

impl_from_kind!(
    Line(Line),
    Arrow(Arrow),
    Angle(Angle),
    Dot(Dot),
    Label(Label),
    Matrix(MatrixLabel),
    Graph(GraphMobject),
    Plane(NumberPlane),
);

#[cfg(test)]
#[path = "../../tests/unit/mobject/model.rs"]
mod tests;
