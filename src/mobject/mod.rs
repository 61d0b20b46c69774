pub mod geometry;
pub mod graph;
pub mod label;
pub mod model;
pub mod plane;

pub use geometry::{Angle, Arrow, Dot, Line};
pub use graph::GraphMobject;
pub use label::{Label, MatrixLabel};
pub use model::{Mobject, MobjectId, Style};
pub use plane::NumberPlane;

/// Standard spacing between a mobject and something placed next to it, in scene units.
pub const SMALL_BUFF: f64 = 0.1;
/// Larger spacing used for labels set off from the object they describe.
pub const MED_SMALL_BUFF: f64 = 0.25;
