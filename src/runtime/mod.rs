pub mod animation;
pub mod scene;
pub mod store;
pub mod tracker;
pub mod updater;

pub use animation::Animation;
pub use scene::{PlayOpts, RunStats, Scene, SceneScript, run_scene, run_scene_observed};
pub use store::ObjectStore;
pub use tracker::{TrackerId, TrackerStore};
pub use updater::{UpdateCtx, Updater};
