use crate::foundation::error::{SceneError, SceneResult};

/// Handle of a scalar value tracker owned by a [`Scene`](crate::Scene).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct TrackerId(pub(crate) u32);

/// Scene-owned scalar values; only tracker animations and the script between plays write them.
#[derive(Clone, Debug, Default)]
pub struct TrackerStore {
    values: Vec<f64>,
}

impl TrackerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, value: f64) -> SceneResult<TrackerId> {
        check_finite(value)?;
        let id = TrackerId(self.values.len() as u32);
        self.values.push(value);
        Ok(id)
    }

    pub fn get(&self, id: TrackerId) -> Option<f64> {
        self.values.get(id.0 as usize).copied()
    }

    pub fn value(&self, id: TrackerId) -> SceneResult<f64> {
        self.get(id)
            .ok_or_else(|| SceneError::validation(format!("unknown tracker {}", id.0)))
    }

    pub(crate) fn set(&mut self, id: TrackerId, value: f64) -> SceneResult<()> {
        check_finite(value)?;
        let slot = self
            .values
            .get_mut(id.0 as usize)
            .ok_or_else(|| SceneError::validation(format!("unknown tracker {}", id.0)))?;
        *slot = value;
        Ok(())
    }

    /// Current values in creation order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn check_finite(value: f64) -> SceneResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SceneError::numeric(format!(
            "tracker value {value} is not finite"
        )))
    }
}
