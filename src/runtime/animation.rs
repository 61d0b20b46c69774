use crate::foundation::color::Color;
use crate::foundation::core::Point;
use crate::foundation::error::{SceneError, SceneResult};
use crate::mobject::model::{Mobject, MobjectId};
use crate::runtime::store::ObjectStore;
use crate::runtime::tracker::{TrackerId, TrackerStore};

/// Declarative animations accepted by [`Scene::play`](crate::Scene::play).
#[derive(Clone, Debug, PartialEq)]
pub enum Animation {
    /// Draw the mobject progressively.
    Create(MobjectId),
    /// Like `Create`, meant for labels.
    Write(MobjectId),
    FadeIn(MobjectId),
    /// Morph into `target`; the mobject equals `target` when the play ends.
    Transform { id: MobjectId, target: Mobject },
    SetColor { id: MobjectId, color: Color },
    MoveTo { id: MobjectId, point: Point },
    SetValue { tracker: TrackerId, value: f64 },
    IncrementValue { tracker: TrackerId, by: f64 },
}

impl Animation {
    pub fn transform(id: MobjectId, target: impl Into<Mobject>) -> Self {
        Self::Transform {
            id,
            target: target.into(),
        }
    }

    pub fn set_color(id: MobjectId, color: Color) -> Self {
        Self::SetColor { id, color }
    }

    pub fn move_to(id: MobjectId, point: Point) -> Self {
        Self::MoveTo { id, point }
    }

    pub fn set_value(tracker: TrackerId, value: f64) -> Self {
        Self::SetValue { tracker, value }
    }

    pub fn increment_value(tracker: TrackerId, by: f64) -> Self {
        Self::IncrementValue { tracker, by }
    }

    pub fn target(&self) -> Target {
        match self {
            Self::Create(id)
            | Self::Write(id)
            | Self::FadeIn(id)
            | Self::Transform { id, .. }
            | Self::SetColor { id, .. }
            | Self::MoveTo { id, .. } => Target::Mobject(*id),
            Self::SetValue { tracker, .. } | Self::IncrementValue { tracker, .. } => {
                Target::Tracker(*tracker)
            }
        }
    }

    /// Capture start and end states against the current scene.
    pub(crate) fn begin(
        self,
        objects: &ObjectStore,
        trackers: &TrackerStore,
    ) -> SceneResult<Running> {
        match self {
            Self::Create(id) | Self::Write(id) => {
                let end = objects.require(id)?.clone();
                let mut start = end.clone();
                start.style_mut().reveal = 0.0;
                Ok(Running::mobject(id, start, with_reveal(end)))
            }
            Self::FadeIn(id) => {
                let mut end = objects.require(id)?.clone();
                if end.style().opacity <= 0.0 {
                    end.style_mut().opacity = 1.0;
                }
                let mut start = end.clone();
                start.style_mut().opacity = 0.0;
                Ok(Running::mobject(id, start, with_reveal(end)))
            }
            Self::Transform { id, target } => {
                let start = objects.require(id)?.clone();
                start.interpolate(&target, 0.0)?;
                Ok(Running::mobject(id, start, target))
            }
            Self::SetColor { id, color } => {
                let start = objects.require(id)?.clone();
                let mut end = start.clone();
                end.set_color(color);
                Ok(Running::mobject(id, start, end))
            }
            Self::MoveTo { id, point } => {
                let start = objects.require(id)?.clone();
                let mut end = start.clone();
                end.move_to(point);
                Ok(Running::mobject(id, start, end))
            }
            Self::SetValue { tracker, value } => {
                let from = trackers.value(tracker)?;
                Running::tracker(tracker, from, value)
            }
            Self::IncrementValue { tracker, by } => {
                let from = trackers.value(tracker)?;
                Running::tracker(tracker, from, from + by)
            }
        }
    }
}

/// What an animation writes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    Mobject(MobjectId),
    Tracker(TrackerId),
}

fn with_reveal(mut m: Mobject) -> Mobject {
    m.style_mut().reveal = 1.0;
    m
}

/// An animation with resolved endpoints, stepped once per frame.
#[derive(Clone, Debug)]
pub(crate) enum Running {
    Mobject {
        id: MobjectId,
        start: Mobject,
        end: Mobject,
    },
    Tracker {
        id: TrackerId,
        from: f64,
        to: f64,
    },
}

impl Running {
    fn mobject(id: MobjectId, start: Mobject, end: Mobject) -> Self {
        Self::Mobject { id, start, end }
    }

    fn tracker(id: TrackerId, from: f64, to: f64) -> SceneResult<Self> {
        if !to.is_finite() {
            return Err(SceneError::numeric(format!(
                "tracker {} target {to} is not finite",
                id.0
            )));
        }
        Ok(Self::Tracker { id, from, to })
    }

    pub(crate) fn mobject_id(&self) -> Option<MobjectId> {
        match self {
            Self::Mobject { id, .. } => Some(*id),
            Self::Tracker { .. } => None,
        }
    }

    /// Write the state at eased progress `alpha`; at `alpha >= 1` the end state is copied exactly.
    pub(crate) fn apply(
        &self,
        alpha: f64,
        objects: &mut ObjectStore,
        trackers: &mut TrackerStore,
    ) -> SceneResult<()> {
        match self {
            Self::Mobject { id, start, end } => {
                let next = if alpha >= 1.0 {
                    end.clone()
                } else {
                    start.interpolate(end, alpha)?
                };
                *objects.get_mut(*id)? = next;
            }
            Self::Tracker { id, from, to } => {
                let v = if alpha >= 1.0 {
                    *to
                } else {
                    from + (to - from) * alpha
                };
                trackers.set(*id, v)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/animation.rs"]
mod tests;
