pub mod cycler;
pub mod layout;
pub mod model;

pub use cycler::LayoutCycler;
pub use layout::{LayoutError, LayoutKind, LayoutOpts, compute_layout};
pub use model::{Graph, VertexId};
