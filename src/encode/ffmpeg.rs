use std::ffi::OsString;
use std::io::{Read, Write as _};
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdin, Command, Stdio};
use std::thread::JoinHandle;

use crate::encode::sink::{FrameSink, SinkConfig, check_order};
use crate::foundation::color::Color;
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{SceneError, SceneResult};
use crate::foundation::math::mul_div255_u16;
use crate::render::backend::FrameRGBA;

/// Where and how [`FfmpegSink`] writes its MP4.
#[derive(Clone, Debug)]
pub struct FfmpegSinkOpts {
    pub out_path: PathBuf,
    /// Replace an existing file at `out_path` instead of failing.
    pub overwrite: bool,
    /// Opaque color under every frame; the MP4 carries no alpha.
    pub background: Color,
}

impl FfmpegSinkOpts {
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            overwrite: true,
            background: Color::BLACK,
        }
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }
}

/// Encodes scene frames to H.264 by piping raw RGBA into an `ffmpeg` child process.
pub struct FfmpegSink {
    opts: FfmpegSinkOpts,
    encoder: Option<Encoder>,
    opaque: Vec<u8>,
    cfg: Option<SinkConfig>,
    last_idx: Option<FrameIndex>,
}

/// A running `ffmpeg` plus the thread collecting its diagnostics.
struct Encoder {
    child: Child,
    stdin: Option<ChildStdin>,
    diagnostics: JoinHandle<std::io::Result<Vec<u8>>>,
}

impl FfmpegSink {
    pub fn new(opts: FfmpegSinkOpts) -> Self {
        Self {
            opts,
            encoder: None,
            opaque: Vec::new(),
            cfg: None,
            last_idx: None,
        }
    }

    pub fn out_path(&self) -> &Path {
        &self.opts.out_path
    }
}

/// Command line for one encode, without the program name.
///
/// Frames arrive on stdin as straight `rgba` at the sink's frame rate; the output drops audio
/// and uses `yuv420p` so common players accept it.
pub(crate) fn encoder_args(cfg: &SinkConfig, opts: &FfmpegSinkOpts) -> Vec<OsString> {
    let mut args: Vec<OsString> = Vec::with_capacity(24);
    let mut push = |items: &[&str]| args.extend(items.iter().map(OsString::from));

    push(&[if opts.overwrite { "-y" } else { "-n" }, "-loglevel", "error"]);
    push(&["-f", "rawvideo", "-pix_fmt", "rgba"]);
    push(&["-s", &format!("{}x{}", cfg.width, cfg.height)]);
    // Input rate must precede `-i`.
    push(&["-r", &format!("{}/{}", cfg.fps.num, cfg.fps.den)]);
    push(&["-i", "pipe:0", "-an"]);
    push(&["-c:v", "libx264", "-pix_fmt", "yuv420p", "-movflags", "+faststart"]);
    args.push(opts.out_path.clone().into_os_string());
    args
}

impl FrameSink for FfmpegSink {
    #[tracing::instrument(skip(self), fields(out = %self.opts.out_path.display()))]
    fn begin(&mut self, cfg: SinkConfig) -> SceneResult<()> {
        if cfg.width == 0 || cfg.height == 0 {
            return Err(SceneError::validation("cannot encode an empty frame size"));
        }
        if !cfg.width.is_multiple_of(2) || !cfg.height.is_multiple_of(2) {
            return Err(SceneError::validation(format!(
                "yuv420p needs even dimensions, got {}x{}",
                cfg.width, cfg.height
            )));
        }

        ensure_parent_dir(&self.opts.out_path)?;
        if !self.opts.overwrite && self.opts.out_path.exists() {
            return Err(SceneError::validation(format!(
                "refusing to replace '{}'",
                self.opts.out_path.display()
            )));
        }
        if !is_ffmpeg_on_path() {
            return Err(SceneError::evaluation(
                "`ffmpeg` not found on PATH; install it or render with --headless",
            ));
        }

        let mut child = Command::new("ffmpeg")
            .args(encoder_args(&cfg, &self.opts))
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| SceneError::evaluation(format!("could not start ffmpeg: {e}")))?;

        let (Some(stdin), Some(mut stderr)) = (child.stdin.take(), child.stderr.take()) else {
            return Err(SceneError::evaluation("ffmpeg started without piped stdio"));
        };
        let diagnostics = std::thread::spawn(move || {
            let mut bytes = Vec::new();
            stderr.read_to_end(&mut bytes)?;
            Ok(bytes)
        });

        self.opaque = vec![0u8; cfg.width as usize * cfg.height as usize * 4];
        self.encoder = Some(Encoder {
            child,
            stdin: Some(stdin),
            diagnostics,
        });
        self.cfg = Some(cfg);
        self.last_idx = None;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> SceneResult<()> {
        let Some(cfg) = self.cfg.as_ref() else {
            return Err(SceneError::evaluation("push_frame called before begin"));
        };
        check_order(self.last_idx, idx)?;
        self.last_idx = Some(idx);

        if (frame.width, frame.height) != (cfg.width, cfg.height) {
            return Err(SceneError::validation(format!(
                "frame is {}x{} but the encoder was opened at {}x{}",
                frame.width, frame.height, cfg.width, cfg.height
            )));
        }
        if frame.data.len() != self.opaque.len() {
            return Err(SceneError::validation(format!(
                "frame holds {} bytes, expected {}",
                frame.data.len(),
                self.opaque.len()
            )));
        }

        flatten_premul_over_bg(&mut self.opaque, &frame.data, self.opts.background)?;

        let stdin = self
            .encoder
            .as_mut()
            .and_then(|e| e.stdin.as_mut())
            .ok_or_else(|| SceneError::evaluation("encoder already closed"))?;
        stdin
            .write_all(&self.opaque)
            .map_err(|e| SceneError::evaluation(format!("ffmpeg stopped reading frames: {e}")))
    }

    fn end(&mut self) -> SceneResult<()> {
        let Some(mut encoder) = self.encoder.take() else {
            return Err(SceneError::evaluation("end called before begin"));
        };
        // Closing stdin is ffmpeg's end-of-stream signal.
        drop(encoder.stdin.take());

        let status = encoder
            .child
            .wait()
            .map_err(|e| SceneError::evaluation(format!("lost track of ffmpeg: {e}")))?;
        let diagnostics = encoder
            .diagnostics
            .join()
            .map_err(|_| SceneError::evaluation("ffmpeg stderr reader panicked"))?
            .map_err(|e| SceneError::evaluation(format!("reading ffmpeg stderr: {e}")))?;

        self.cfg = None;
        if !status.success() {
            return Err(SceneError::evaluation(format!(
                "ffmpeg failed ({status}): {}",
                String::from_utf8_lossy(&diagnostics).trim()
            )));
        }
        tracing::info!(out = %self.opts.out_path.display(), "wrote video");
        Ok(())
    }
}

/// Writes `src_premul` composited onto `bg` into `dst`, leaving every pixel opaque.
pub(crate) fn flatten_premul_over_bg(
    dst: &mut [u8],
    src_premul: &[u8],
    bg: Color,
) -> SceneResult<()> {
    if dst.len() != src_premul.len() || !dst.len().is_multiple_of(4) {
        return Err(SceneError::validation(format!(
            "cannot flatten {} source bytes into {}",
            src_premul.len(),
            dst.len()
        )));
    }

    let under = [u16::from(bg.r), u16::from(bg.g), u16::from(bg.b)];
    for (d, s) in dst.chunks_exact_mut(4).zip(src_premul.chunks_exact(4)) {
        let cover = 255 - u16::from(s[3]);
        for c in 0..3 {
            d[c] = (u16::from(s[c]) + mul_div255_u16(under[c], cover)).min(255) as u8;
        }
        d[3] = 255;
    }
    Ok(())
}

/// Creates the directory that will hold `path`, if any.
pub fn ensure_parent_dir(path: &Path) -> SceneResult<()> {
    let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };
    use anyhow::Context as _;
    std::fs::create_dir_all(parent)
        .with_context(|| format!("create directory '{}'", parent.display()))?;
    Ok(())
}

pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|s| s.success())
}
