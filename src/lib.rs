#![forbid(unsafe_code)]

pub mod animation;
pub mod config;
pub mod encode;
pub mod foundation;
pub mod graph;
pub mod mobject;
pub mod render;
pub mod runtime;
pub mod scenes;

pub use animation::ease::RateFunc;
pub use config::{Quality, RenderConfig, RenderMode};
pub use encode::{FfmpegSink, FfmpegSinkOpts, FrameSink, InMemorySink, NullSink, SinkConfig};
pub use foundation::color::Color;
pub use foundation::core::{Canvas, Fps, FrameIndex, Point, Vec2};
pub use foundation::error::{SceneError, SceneResult};
pub use graph::{Graph, LayoutCycler, LayoutError, LayoutKind, LayoutOpts};
pub use mobject::{Mobject, MobjectId};
pub use render::{CpuRenderer, FrameRGBA};
pub use runtime::{
    Animation, PlayOpts, RunStats, Scene, SceneScript, TrackerId, UpdateCtx, run_scene,
    run_scene_observed,
};
pub use scenes::{SCENES, find_scene, scene_names};
