use crate::foundation::error::SceneResult;
use crate::graph::cycler::LayoutCycler;
use crate::graph::model::Graph;
use crate::runtime::scene::{Scene, SceneScript};

/// Every layout, in the order the path graph cycles through them.
pub const PATH_GRAPH_LAYOUTS: [&str; 8] = [
    "spring",
    "circular",
    "kamada_kawai",
    "planar",
    "random",
    "shell",
    "spectral",
    "spiral",
];

/// `planar` is left out: K9 has no crossing-free drawing.
pub const COMPLETE_GRAPH_LAYOUTS: [&str; 7] = [
    "spring",
    "circular",
    "kamada_kawai",
    "random",
    "shell",
    "spectral",
    "spiral",
];

/// The path graph 1-2-3 shown under every layout.
pub struct VGraphAllAnimations;

impl SceneScript for VGraphAllAnimations {
    fn name(&self) -> &'static str {
        "VGraphAllAnimations"
    }

    fn description(&self) -> &'static str {
        "path graph 1-2-3 transformed through all eight layouts"
    }

    fn construct(&self, scene: &mut Scene<'_>) -> SceneResult<()> {
        let graph = Graph::new([1, 2, 3], [(1, 2), (2, 3)])?;
        LayoutCycler::from_names(graph, &PATH_GRAPH_LAYOUTS, scene.layout_opts())?.play(scene)?;
        Ok(())
    }
}

/// The complete graph on nine vertices shown under every non-planar layout.
pub struct CompleteGraphAllAnimations;

impl SceneScript for CompleteGraphAllAnimations {
    fn name(&self) -> &'static str {
        "CompleteGraphAllAnimations"
    }

    fn description(&self) -> &'static str {
        "K9 transformed through every layout except planar"
    }

    fn construct(&self, scene: &mut Scene<'_>) -> SceneResult<()> {
        LayoutCycler::from_names(
            Graph::complete(9),
            &COMPLETE_GRAPH_LAYOUTS,
            scene.layout_opts(),
        )?
        .play(scene)?;
        Ok(())
    }
}
