use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use explainer::{Quality, Rasterizer, RenderConfig, RenderToMp4Opts, Script};

#[derive(Parser, Debug)]
#[command(name = "explainer", version)]
struct Cli {
    /// Verbose logging (repeat for trace output).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Extra directory of `.ttf`/`.otf`/`.ttc` fonts for text rendering.
    #[arg(long, global = true)]
    font_dir: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a scene to MP4 (requires `ffmpeg` on PATH).
    Render(RenderArgs),
    /// Render a single instant as PNG or SVG, chosen by the output extension.
    Frame(FrameArgs),
    /// List scenes with their durations.
    List(ListArgs),
    /// Print the resolved step schedule of a scene as JSON.
    Timeline(SceneArgs),
}

#[derive(Parser, Debug)]
struct SceneArgs {
    /// Script name (`autonomous_agent`, `neural_network`, or the `.py` file name).
    script: Script,
    /// Scene class name, e.g. `CompoundLoopScene`.
    scene: String,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    target: SceneArgs,

    /// Quality preset: l (480p15), m (720p30), h (1080p60), k (2160p60).
    #[arg(short, long, default_value = "h")]
    quality: Quality,

    /// Open the video when rendering finishes.
    #[arg(short, long, default_value_t = false)]
    preview: bool,

    /// Media root; videos land in `<out>/videos/<script>/<quality>/`.
    #[arg(long, default_value = "media")]
    out: PathBuf,

    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Fail instead of replacing an existing video.
    #[arg(long, default_value_t = false)]
    no_overwrite: bool,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    target: SceneArgs,

    /// Scene time in seconds.
    #[arg(long)]
    time: f64,

    /// Output path (`.png` or `.svg`).
    #[arg(long)]
    out: PathBuf,

    /// Quality preset used for the canvas size.
    #[arg(short, long, default_value = "h")]
    quality: Quality,
}

#[derive(Parser, Debug)]
struct ListArgs {
    /// Only list scenes of this script.
    script: Option<Script>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let font_dir = cli.font_dir.as_deref();
    match cli.cmd {
        Command::Render(args) => cmd_render(args, &Rasterizer::with_font_dir(font_dir)),
        Command::Frame(args) => cmd_frame(args, &Rasterizer::with_font_dir(font_dir)),
        Command::List(args) => cmd_list(args),
        Command::Timeline(args) => cmd_timeline(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn cmd_render(args: RenderArgs, raster: &Rasterizer) -> anyhow::Result<()> {
    let SceneArgs { script, scene } = args.target;
    let config = RenderConfig {
        quality: args.quality,
        preview: args.preview,
        output_dir: args.out,
        parallel: args.parallel,
        overwrite: !args.no_overwrite,
    };

    let built = explainer::build_scene(script, &scene)
        .with_context(|| format!("build scene '{scene}' of {script}"))?;
    // The file takes the name the scene was requested by, alias or not.
    let out_path = config.output_path(script.name(), &scene)?;
    let opts = RenderToMp4Opts {
        overwrite: config.overwrite,
        threading: config.threading(),
    };
    let stats = explainer::render_to_mp4(
        &built,
        out_path.clone(),
        config.quality.settings(),
        &opts,
        raster,
    )
    .with_context(|| format!("render '{}'", out_path.display()))?;
    tracing::info!(frames = stats.frames, chunks = stats.chunks, "render finished");

    eprintln!("wrote {}", out_path.display());
    if config.preview {
        open_with_platform_viewer(&out_path)?;
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs, raster: &Rasterizer) -> anyhow::Result<()> {
    let SceneArgs { script, scene } = args.target;
    let built = explainer::build_scene(script, &scene)
        .with_context(|| format!("build scene '{scene}' of {script}"))?;
    explainer::write_still(&built, args.time, args.quality.canvas(), raster, &args.out)
        .with_context(|| format!("render {scene} at {}s", args.time))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_list(args: ListArgs) -> anyhow::Result<()> {
    let scripts = match args.script {
        Some(script) => vec![script],
        None => Script::ALL.to_vec(),
    };
    for script in scripts {
        println!("{script}");
        for entry in script.scenes() {
            let scene = (entry.build)().with_context(|| format!("build scene '{}'", entry.name))?;
            println!("  {:<32} {:>6.2}s", entry.name, scene.duration());
        }
    }
    Ok(())
}

fn cmd_timeline(args: SceneArgs) -> anyhow::Result<()> {
    let built = explainer::build_scene(args.script, &args.scene)
        .with_context(|| format!("build scene '{}' of {}", args.scene, args.script))?;
    let schedule = built.timeline.schedule()?;
    let json = serde_json::json!({
        "script": args.script,
        "scene": built.name,
        "elements": built.elements.len(),
        "schedule": schedule,
    });
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

fn open_with_platform_viewer(path: &Path) -> anyhow::Result<()> {
    let mut cmd = if cfg!(target_os = "macos") {
        std::process::Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut c = std::process::Command::new("cmd");
        c.args(["/C", "start", ""]);
        c
    } else {
        std::process::Command::new("xdg-open")
    };
    cmd.arg(path)
        .spawn()
        .with_context(|| format!("open '{}'", path.display()))?;
    Ok(())
}
