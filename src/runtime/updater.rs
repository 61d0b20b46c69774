use std::collections::HashSet;

use crate::foundation::core::FrameIndex;
use crate::foundation::error::{SceneError, SceneResult};
use crate::mobject::geometry::{Arrow, Line};
use crate::mobject::model::{Mobject, MobjectId};
use crate::runtime::store::ObjectStore;
use crate::runtime::tracker::{TrackerId, TrackerStore};

/// Per-tick callback that recomputes a mobject from trackers and other mobjects.
///
/// Updaters receive a copy of their mobject; the scene writes it back after every updater bound
/// to that mobject has run.
pub type Updater = Box<dyn Fn(&mut Mobject, &UpdateCtx<'_>) -> SceneResult<()>>;

/// Read-only view of the scene handed to updaters and tick observers.
pub struct UpdateCtx<'s> {
    pub(crate) objects: &'s ObjectStore,
    pub(crate) trackers: &'s TrackerStore,
    /// Index of the frame being produced.
    pub frame: FrameIndex,
    /// Seconds per frame.
    pub dt: f64,
}

impl<'s> UpdateCtx<'s> {
    pub fn tracker(&self, id: TrackerId) -> SceneResult<f64> {
        self.trackers.value(id)
    }

    pub fn get(&self, id: MobjectId) -> SceneResult<&'s Mobject> {
        self.objects.require(id)
    }

    pub fn line(&self, id: MobjectId) -> SceneResult<&'s Line> {
        let m = self.get(id)?;
        m.as_line().ok_or_else(|| wrong_kind(id, "line", m))
    }

    pub fn arrow(&self, id: MobjectId) -> SceneResult<&'s Arrow> {
        let m = self.get(id)?;
        m.as_arrow().ok_or_else(|| wrong_kind(id, "arrow", m))
    }

    pub fn objects(&self) -> &'s ObjectStore {
        self.objects
    }

    pub fn trackers(&self) -> &'s TrackerStore {
        self.trackers
    }
}

fn wrong_kind(id: MobjectId, want: &str, got: &Mobject) -> SceneError {
    SceneError::validation(format!(
        "mobject {} is a {}, expected a {want}",
        id.0,
        got.kind()
    ))
}

/// Run every updater in insertion order, skipping mobjects in `suspended`.
///
/// Each mobject's result is stored before the next mobject updates, so later updaters observe
/// earlier ones.
pub(crate) fn run_updaters(
    objects: &mut ObjectStore,
    trackers: &TrackerStore,
    suspended: &HashSet<MobjectId>,
    frame: FrameIndex,
    dt: f64,
) -> SceneResult<()> {
    for idx in 0..objects.len() {
        let slot = &objects.slots()[idx];
        if slot.updaters.is_empty() || suspended.contains(&slot.id) {
            continue;
        }
        let mut next = slot.mobject.clone();
        {
            let ctx = UpdateCtx {
                objects,
                trackers,
                frame,
                dt,
            };
            for updater in &slot.updaters {
                updater(&mut next, &ctx)?;
            }
        }
        objects.slot_mut(idx).mobject = next;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/updater.rs"]
mod tests;
