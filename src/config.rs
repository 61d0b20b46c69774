use std::path::Path;

use crate::foundation::color::Color;
use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{SceneError, SceneResult};
use crate::graph::layout::LayoutOpts;

/// Output presets, named after the usual render quality flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quality {
    #[default]
    Low,
    Medium,
    High,
    #[serde(rename = "4k")]
    FourK,
}

impl Quality {
    /// `(width, height, fps)` of the preset.
    pub fn preset(self) -> (u32, u32, u32) {
        match self {
            Self::Low => (854, 480, 15),
            Self::Medium => (1280, 720, 30),
            Self::High => (1920, 1080, 60),
            Self::FourK => (3840, 2160, 60),
        }
    }

    /// Short tag used in output file names.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Low => "480p15",
            Self::Medium => "720p30",
            Self::High => "1080p60",
            Self::FourK => "2160p60",
        }
    }
}

/// Whether a run rasterizes frames or only steps the scene clock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    #[default]
    Raster,
    Headless,
}

/// Render settings; explicit fields override the quality preset.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    pub quality: Quality,
    pub fps: Option<u32>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub background: Color,
    pub layout_seed: u64,
    pub mode: RenderMode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            quality: Quality::default(),
            fps: None,
            width: None,
            height: None,
            background: Color::BLACK,
            layout_seed: 0,
            mode: RenderMode::default(),
        }
    }
}

impl RenderConfig {
    pub fn with_quality(quality: Quality) -> Self {
        Self {
            quality,
            ..Self::default()
        }
    }

    /// Load a JSON config file.
    pub fn from_path(path: &Path) -> SceneResult<Self> {
        use anyhow::Context as _;
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_str(&text)
            .map_err(|e| SceneError::serde(format!("{}: {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn canvas(&self) -> SceneResult<Canvas> {
        let (w, h, _) = self.quality.preset();
        Canvas::new(self.width.unwrap_or(w), self.height.unwrap_or(h))
    }

    pub fn fps(&self) -> SceneResult<Fps> {
        let (_, _, fps) = self.quality.preset();
        Fps::new(self.fps.unwrap_or(fps), 1)
    }

    pub fn headless(mut self) -> Self {
        self.mode = RenderMode::Headless;
        self
    }

    pub fn is_headless(&self) -> bool {
        self.mode == RenderMode::Headless
    }

    pub fn layout_opts(&self) -> LayoutOpts {
        LayoutOpts {
            seed: self.layout_seed,
            ..LayoutOpts::default()
        }
    }

    pub fn validate(&self) -> SceneResult<()> {
        self.canvas()?;
        self.fps()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
