use std::collections::HashSet;

use crate::animation::ease::RateFunc;
use crate::config::RenderConfig;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::color::Color;
use crate::foundation::core::{Canvas, Fps, FrameIndex};
use crate::foundation::error::{SceneError, SceneResult};
use crate::graph::layout::LayoutOpts;
use crate::mobject::model::{Mobject, MobjectId};
use crate::render::backend::FrameRGBA;
use crate::render::cpu::CpuRenderer;
use crate::runtime::animation::{Animation, Running};
use crate::runtime::store::ObjectStore;
use crate::runtime::tracker::{TrackerId, TrackerStore};
use crate::runtime::updater::{UpdateCtx, run_updaters};

/// Timing options for one [`Scene::play_with`] call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayOpts {
    /// Duration in seconds.
    pub run_time: f64,
    pub rate: RateFunc,
}

impl Default for PlayOpts {
    fn default() -> Self {
        Self {
            run_time: 1.0,
            rate: RateFunc::Smooth,
        }
    }
}

impl PlayOpts {
    pub fn run_time(run_time: f64) -> Self {
        Self {
            run_time,
            ..Self::default()
        }
    }
}

/// Counters reported when a scene finishes.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct RunStats {
    pub frames: u64,
    pub plays: u32,
    pub waits: u32,
    pub duration_secs: f64,
}

/// Observer invoked with the full scene state after every tick.
pub type TickObserver<'a> = Box<dyn FnMut(&UpdateCtx<'_>) + 'a>;

/// A scripted scene: implementations issue `add` / `play` / `wait` calls in `construct`.
pub trait SceneScript: Sync {
    fn name(&self) -> &'static str;

    /// One-line summary shown by `mathscene list`.
    fn description(&self) -> &'static str {
        ""
    }

    fn construct(&self, scene: &mut Scene<'_>) -> SceneResult<()>;
}

/// Owns the mobjects, trackers and frame clock of one run.
pub struct Scene<'a> {
    canvas: Canvas,
    fps: Fps,
    layout: LayoutOpts,
    raster: bool,
    objects: ObjectStore,
    trackers: TrackerStore,
    renderer: CpuRenderer,
    sink: &'a mut dyn FrameSink,
    observer: Option<TickObserver<'a>>,
    next_frame: u64,
    last_frame: Option<FrameRGBA>,
    stats: RunStats,
}

impl<'a> Scene<'a> {
    /// Build a scene and start `sink`.
    pub fn new(config: &RenderConfig, sink: &'a mut dyn FrameSink) -> SceneResult<Self> {
        config.validate()?;
        let canvas = config.canvas()?;
        let fps = config.fps()?;
        sink.begin(SinkConfig {
            width: canvas.width,
            height: canvas.height,
            fps,
        })?;
        Ok(Self {
            canvas,
            fps,
            layout: config.layout_opts(),
            raster: !config.is_headless(),
            objects: ObjectStore::new(),
            trackers: TrackerStore::new(),
            renderer: CpuRenderer::new(canvas, config.background)?,
            sink,
            observer: None,
            next_frame: 0,
            last_frame: None,
            stats: RunStats::default(),
        })
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn fps(&self) -> Fps {
        self.fps
    }

    pub fn background(&self) -> Color {
        self.renderer.background()
    }

    /// Layout options carrying the configured seed.
    pub fn layout_opts(&self) -> LayoutOpts {
        self.layout.clone()
    }

    pub fn add(&mut self, mobject: impl Into<Mobject>) -> MobjectId {
        self.objects.insert(mobject.into())
    }

    pub fn remove(&mut self, id: MobjectId) -> SceneResult<Mobject> {
        self.objects.remove(id)
    }

    pub fn get(&self, id: MobjectId) -> Option<&Mobject> {
        self.objects.get(id)
    }

    /// Mutate a mobject between plays.
    pub fn get_mut(&mut self, id: MobjectId) -> SceneResult<&mut Mobject> {
        self.objects.get_mut(id)
    }

    pub fn objects(&self) -> &ObjectStore {
        &self.objects
    }

    /// Bind an updater to `id`; it first runs on the next tick.
    pub fn add_updater<F>(&mut self, id: MobjectId, updater: F) -> SceneResult<()>
    where
        F: Fn(&mut Mobject, &UpdateCtx<'_>) -> SceneResult<()> + 'static,
    {
        self.objects.add_updater(id, Box::new(updater))
    }

    pub fn clear_updaters(&mut self, id: MobjectId) -> SceneResult<()> {
        self.objects.clear_updaters(id)
    }

    pub fn tracker(&mut self, value: f64) -> SceneResult<TrackerId> {
        self.trackers.create(value)
    }

    pub fn tracker_value(&self, id: TrackerId) -> SceneResult<f64> {
        self.trackers.value(id)
    }

    /// Overwrite a tracker between plays. Updaters see the value on the next tick.
    pub fn set_tracker(&mut self, id: TrackerId, value: f64) -> SceneResult<()> {
        self.trackers.set(id, value)
    }

    pub fn set_tick_observer(&mut self, observer: impl FnMut(&UpdateCtx<'_>) + 'a) {
        self.observer = Some(Box::new(observer));
    }

    /// Run every updater once without emitting a frame.
    pub fn update_now(&mut self) -> SceneResult<()> {
        run_updaters(
            &mut self.objects,
            &self.trackers,
            &HashSet::new(),
            FrameIndex(self.next_frame),
            0.0,
        )
    }

    pub fn play(&mut self, anims: Vec<Animation>) -> SceneResult<()> {
        self.play_with(anims, PlayOpts::default())
    }

    #[tracing::instrument(skip(self, anims), fields(anims = anims.len(), run_time = opts.run_time))]
    pub fn play_with(&mut self, anims: Vec<Animation>, opts: PlayOpts) -> SceneResult<()> {
        if anims.is_empty() {
            return Err(SceneError::animation("play needs at least one animation"));
        }
        let frames = self.frames_for(opts.run_time)?;

        let mut targets = HashSet::new();
        for anim in &anims {
            let target = anim.target();
            if !targets.insert(target) {
                return Err(SceneError::animation(format!(
                    "{target:?} is animated twice in one play"
                )));
            }
        }

        let running = anims
            .into_iter()
            .map(|a| a.begin(&self.objects, &self.trackers))
            .collect::<SceneResult<Vec<Running>>>()?;
        let suspended: HashSet<MobjectId> = running.iter().filter_map(Running::mobject_id).collect();

        tracing::debug!(frames, "play");
        for i in 1..=frames {
            let alpha = opts.rate.apply(i as f64 / frames as f64);
            for r in &running {
                r.apply(alpha, &mut self.objects, &mut self.trackers)?;
            }
            self.tick(&suspended)?;
        }
        self.stats.plays += 1;
        Ok(())
    }

    pub fn wait_default(&mut self) -> SceneResult<()> {
        self.wait(1.0)
    }

    #[tracing::instrument(skip(self))]
    pub fn wait(&mut self, secs: f64) -> SceneResult<()> {
        let frames = self.frames_for(secs)?;
        tracing::debug!(frames, "wait");
        let none = HashSet::new();
        for _ in 0..frames {
            self.tick(&none)?;
        }
        self.stats.waits += 1;
        Ok(())
    }

    /// The most recent rasterized frame, if any.
    pub fn last_frame(&self) -> Option<&FrameRGBA> {
        self.last_frame.as_ref()
    }

    /// Rasterize the current state without advancing the clock.
    pub fn render_current(&mut self) -> SceneResult<FrameRGBA> {
        self.renderer.render(&self.objects)
    }

    pub fn stats(&self) -> RunStats {
        self.stats
    }

    /// Finish the sink and report counters.
    pub fn finish(self) -> SceneResult<RunStats> {
        self.sink.end()?;
        Ok(self.stats)
    }

    fn frames_for(&self, secs: f64) -> SceneResult<u64> {
        if !secs.is_finite() || secs < 0.0 {
            return Err(SceneError::validation(format!(
                "duration must be a non-negative number of seconds, got {secs}"
            )));
        }
        Ok(self.fps.secs_to_frames_round(secs).max(1))
    }

    fn tick(&mut self, suspended: &HashSet<MobjectId>) -> SceneResult<()> {
        let frame = FrameIndex(self.next_frame);
        let dt = self.fps.frame_duration_secs();
        run_updaters(&mut self.objects, &self.trackers, suspended, frame, dt)?;

        if let Some(observer) = self.observer.as_mut() {
            observer(&UpdateCtx {
                objects: &self.objects,
                trackers: &self.trackers,
                frame,
                dt,
            });
        }
        if self.raster {
            let rgba = self.renderer.render(&self.objects)?;
            self.sink.push_frame(frame, &rgba)?;
            self.last_frame = Some(rgba);
        }

        self.next_frame += 1;
        self.stats.frames += 1;
        self.stats.duration_secs = self.fps.frames_to_secs(self.stats.frames);
        Ok(())
    }
}

/// Run `script` from an empty scene to completion.
#[tracing::instrument(skip(script, config, sink), fields(scene = script.name()))]
pub fn run_scene(
    script: &dyn SceneScript,
    config: &RenderConfig,
    sink: &mut dyn FrameSink,
) -> SceneResult<RunStats> {
    let scene = Scene::new(config, sink)?;
    drive(script, scene)
}

/// Like [`run_scene`], with `observer` installed before `construct` runs.
#[tracing::instrument(skip(script, config, sink, observer), fields(scene = script.name()))]
pub fn run_scene_observed<'a>(
    script: &dyn SceneScript,
    config: &RenderConfig,
    sink: &'a mut dyn FrameSink,
    observer: impl FnMut(&UpdateCtx<'_>) + 'a,
) -> SceneResult<RunStats> {
    let mut scene = Scene::new(config, sink)?;
    scene.set_tick_observer(observer);
    drive(script, scene)
}

fn drive(script: &dyn SceneScript, mut scene: Scene<'_>) -> SceneResult<RunStats> {
    script.construct(&mut scene)?;
    let stats = scene.finish()?;
    tracing::info!(
        frames = stats.frames,
        plays = stats.plays,
        waits = stats.waits,
        "scene finished"
    );
    Ok(stats)
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/scene.rs"]
mod tests;
