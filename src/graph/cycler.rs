use crate::foundation::error::{SceneError, SceneResult};
use crate::graph::layout::{LayoutKind, LayoutOpts};
use crate::graph::model::Graph;
use crate::mobject::graph::GraphMobject;
use crate::mobject::model::MobjectId;
use crate::runtime::animation::Animation;
use crate::runtime::scene::Scene;

/// Shows one graph under a sequence of layouts.
///
/// The first layout is drawn with `Create`; each following one is reached with a `Transform`
/// from the previous snapshot. Every step is followed by a one second wait.
#[derive(Clone, Debug)]
pub struct LayoutCycler {
    graph: Graph,
    layouts: Vec<LayoutKind>,
    opts: LayoutOpts,
}

impl LayoutCycler {
    pub fn new(graph: Graph, layouts: Vec<LayoutKind>, opts: LayoutOpts) -> SceneResult<Self> {
        if layouts.is_empty() {
            return Err(SceneError::validation("layout cycler needs at least one layout"));
        }
        Ok(Self {
            graph,
            layouts,
            opts,
        })
    }

    /// Parse every name before anything is drawn.
    pub fn from_names(graph: Graph, names: &[&str], opts: LayoutOpts) -> SceneResult<Self> {
        let layouts = names
            .iter()
            .map(|n| n.parse::<LayoutKind>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(graph, layouts, opts)
    }

    pub fn layouts(&self) -> &[LayoutKind] {
        &self.layouts
    }

    /// One positioned graph per layout, in order.
    pub fn snapshots(&self) -> SceneResult<Vec<GraphMobject>> {
        self.layouts
            .iter()
            .map(|kind| GraphMobject::with_layout(self.graph.clone(), *kind, &self.opts))
            .collect()
    }

    /// Play the full sequence on `scene`, returning the id of the animated graph.
    #[tracing::instrument(skip(self, scene), fields(layouts = self.layouts.len()))]
    pub fn play(&self, scene: &mut Scene<'_>) -> SceneResult<MobjectId> {
        let mut snapshots = self.snapshots()?.into_iter();
        let first = snapshots
            .next()
            .ok_or_else(|| SceneError::validation("layout cycler needs at least one layout"))?;
        let id = scene.add(first);
        scene.play(vec![Animation::Create(id)])?;
        scene.wait_default()?;

        for (snapshot, kind) in snapshots.zip(self.layouts.iter().skip(1)) {
            tracing::debug!(layout = %kind, "transform");
            scene.play(vec![Animation::transform(id, snapshot)])?;
            scene.wait_default()?;
        }
        Ok(id)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/graph/cycler.rs"]
mod tests;
