use crate::foundation::error::{SceneError, SceneResult};
use crate::mobject::model::{Mobject, MobjectId};
use crate::runtime::updater::Updater;

pub(crate) struct Slot {
    pub(crate) id: MobjectId,
    pub(crate) mobject: Mobject,
    pub(crate) updaters: Vec<Updater>,
}

/// Mobjects in insertion order, which is also draw order and updater order.
#[derive(Default)]
pub struct ObjectStore {
    slots: Vec<Slot>,
    next_id: u32,
}

impl ObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, mobject: Mobject) -> MobjectId {
        let id = MobjectId(self.next_id);
        self.next_id += 1;
        self.slots.push(Slot {
            id,
            mobject,
            updaters: Vec::new(),
        });
        id
    }

    pub(crate) fn remove(&mut self, id: MobjectId) -> SceneResult<Mobject> {
        let idx = self.index(id)?;
        Ok(self.slots.remove(idx).mobject)
    }

    pub fn get(&self, id: MobjectId) -> Option<&Mobject> {
        self.slots
            .iter()
            .find(|s| s.id == id)
            .map(|s| &s.mobject)
    }

    pub fn require(&self, id: MobjectId) -> SceneResult<&Mobject> {
        self.get(id).ok_or_else(|| unknown(id))
    }

    pub(crate) fn get_mut(&mut self, id: MobjectId) -> SceneResult<&mut Mobject> {
        self.slots
            .iter_mut()
            .find(|s| s.id == id)
            .map(|s| &mut s.mobject)
            .ok_or_else(|| unknown(id))
    }

    pub fn contains(&self, id: MobjectId) -> bool {
        self.slots.iter().any(|s| s.id == id)
    }

    /// Mobjects in draw order.
    pub fn iter(&self) -> impl Iterator<Item = (MobjectId, &Mobject)> {
        self.slots.iter().map(|s| (s.id, &s.mobject))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn updater_count(&self, id: MobjectId) -> usize {
        self.slots
            .iter()
            .find(|s| s.id == id)
            .map_or(0, |s| s.updaters.len())
    }

    pub(crate) fn add_updater(&mut self, id: MobjectId, updater: Updater) -> SceneResult<()> {
        let idx = self.index(id)?;
        self.slots[idx].updaters.push(updater);
        Ok(())
    }

    pub(crate) fn clear_updaters(&mut self, id: MobjectId) -> SceneResult<()> {
        let idx = self.index(id)?;
        self.slots[idx].updaters.clear();
        Ok(())
    }

    pub(crate) fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub(crate) fn slot_mut(&mut self, idx: usize) -> &mut Slot {
        &mut self.slots[idx]
    }

    fn index(&self, id: MobjectId) -> SceneResult<usize> {
        self.slots
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| unknown(id))
    }
}

fn unknown(id: MobjectId) -> SceneError {
    SceneError::validation(format!("unknown mobject {}", id.0))
}
