//! The scene scripts shipped with the crate, and a registry to look them up by name.

pub mod determinant;
pub mod graph_layouts;
pub mod moving_angle;
pub mod vectors;

use crate::runtime::scene::SceneScript;

pub use determinant::DeterminantLabel;
pub use graph_layouts::{CompleteGraphAllAnimations, VGraphAllAnimations};
pub use moving_angle::MovingAngle;
pub use vectors::VGraphVectors;

/// Every registered scene, in listing order.
pub static SCENES: &[&dyn SceneScript] = &[
    &VGraphAllAnimations,
    &MovingAngle,
    &VGraphVectors,
    &CompleteGraphAllAnimations,
    &DeterminantLabel,
];

/// Look a scene up by its exact name.
pub fn find_scene(name: &str) -> Option<&'static dyn SceneScript> {
    SCENES.iter().copied().find(|s| s.name() == name)
}

pub fn scene_names() -> Vec<&'static str> {
    SCENES.iter().map(|s| s.name()).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/mod.rs"]
mod tests;
