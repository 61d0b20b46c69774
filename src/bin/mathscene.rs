use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use mathscene::{
    FfmpegSink, FfmpegSinkOpts, FrameSink, NullSink, Quality, RenderConfig, SceneScript,
};

#[derive(Parser, Debug)]
#[command(name = "mathscene", version)]
struct Cli {
    /// Raise the log level (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the registered scenes.
    List,
    /// Render a scene to MP4 (requires `ffmpeg` on PATH unless --headless).
    Render(RenderArgs),
    /// Run a scene headless and write its last frame as a PNG.
    Frame(FrameArgs),
}

#[derive(Parser, Debug)]
struct SceneArgs {
    /// Scene name, as printed by `list`.
    scene: String,

    /// Quality preset; overrides the config file.
    #[arg(short, long, value_enum)]
    quality: Option<QualityArg>,

    /// JSON render config.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Output MP4 path [default: media/<SCENE>_<quality>.mp4].
    #[arg(long)]
    out: Option<PathBuf>,

    /// Step the scene without rasterizing or encoding.
    #[arg(long)]
    headless: bool,

    /// Print tracker values after every tick.
    #[arg(long)]
    dump_ticks: bool,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum QualityArg {
    #[value(name = "l", alias = "low")]
    Low,
    #[value(name = "m", alias = "medium")]
    Medium,
    #[value(name = "h", alias = "high")]
    High,
    #[value(name = "k", alias = "4k")]
    FourK,
}

impl From<QualityArg> for Quality {
    fn from(q: QualityArg) -> Self {
        match q {
            QualityArg::Low => Quality::Low,
            QualityArg::Medium => Quality::Medium,
            QualityArg::High => Quality::High,
            QualityArg::FourK => Quality::FourK,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::List => cmd_list(),
        Command::Render(args) => cmd_render(args),
        Command::Frame(args) => cmd_frame(args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_list() -> anyhow::Result<()> {
    for script in mathscene::SCENES {
        if script.description().is_empty() {
            println!("{}", script.name());
        } else {
            println!("{:<28} {}", script.name(), script.description());
        }
    }
    Ok(())
}

fn resolve(args: &SceneArgs) -> anyhow::Result<(&'static dyn SceneScript, RenderConfig)> {
    let script = mathscene::find_scene(&args.scene).with_context(|| {
        format!(
            "unknown scene '{}' (available: {})",
            args.scene,
            mathscene::scene_names().join(", ")
        )
    })?;

    let mut config = match &args.config {
        Some(path) => RenderConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => RenderConfig::default(),
    };
    if let Some(q) = args.quality {
        config.quality = q.into();
    }
    config.validate()?;
    Ok((script, config))
}

fn default_out(scene: &str, config: &RenderConfig) -> PathBuf {
    Path::new("media").join(format!("{scene}_{}.mp4", config.quality.tag()))
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let (script, mut config) = resolve(&args.scene)?;
    if args.headless {
        config = config.headless();
    }

    let out = args
        .out
        .unwrap_or_else(|| default_out(script.name(), &config));
    let mut ffmpeg;
    let mut null;
    let sink: &mut dyn FrameSink = if config.is_headless() {
        null = NullSink::new();
        &mut null
    } else {
        ffmpeg = FfmpegSink::new(
            FfmpegSinkOpts::new(out.clone()).with_background(config.background),
        );
        &mut ffmpeg
    };

    let stats = if args.dump_ticks {
        mathscene::run_scene_observed(script, &config, sink, |ctx| {
            let values: Vec<String> = ctx
                .trackers()
                .values()
                .iter()
                .map(|v| format!("{v:.4}"))
                .collect();
            eprintln!(
                "frame {:>5}  objects {:>3}  trackers [{}]",
                ctx.frame.0,
                ctx.objects().len(),
                values.join(", ")
            );
        })
    } else {
        mathscene::run_scene(script, &config, sink)
    }
    .with_context(|| format!("run scene '{}'", script.name()))?;

    if config.is_headless() {
        eprintln!(
            "ran {} headless: {} frames, {:.2}s",
            script.name(),
            stats.frames,
            stats.duration_secs
        );
    } else {
        eprintln!("wrote {} ({} frames)", out.display(), stats.frames);
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let (script, config) = resolve(&args.scene)?;
    let config = config.headless();

    let mut sink = NullSink::new();
    let mut scene = mathscene::Scene::new(&config, &mut sink)?;
    script
        .construct(&mut scene)
        .with_context(|| format!("run scene '{}'", script.name()))?;
    let frame = scene.render_current()?;
    scene.finish()?;

    mathscene::encode::ffmpeg::ensure_parent_dir(&args.out)?;
    image::save_buffer_with_format(
        &args.out,
        &frame.to_straight_rgba(),
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
