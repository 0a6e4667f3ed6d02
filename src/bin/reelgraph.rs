use std::fs::File;
use std::io::{BufWriter, Write as _};
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "reelgraph", version)]
struct Cli {
    /// Log debug output to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the render description of one frame as JSON.
    Frame(FrameArgs),
    /// Write render descriptions for a frame range as JSON Lines.
    Frames(FramesArgs),
    /// Normalize a configuration and print a timeline summary.
    Validate(ValidateArgs),
    /// Write a normalized configuration (the built-in one when `--in` is omitted).
    Export(ExportArgs),
}

#[derive(Parser, Debug)]
struct SurfaceArgs {
    /// Override the configured canvas width.
    #[arg(long)]
    width: Option<u32>,

    /// Override the configured canvas height.
    #[arg(long)]
    height: Option<u32>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input video config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Global frame index (0-based; out-of-range values clamp).
    #[arg(long, allow_negative_numbers = true)]
    frame: i64,

    #[command(flatten)]
    surface: SurfaceArgs,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Input video config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    from: u64,

    /// Last frame (exclusive); defaults to the end of the timeline.
    #[arg(long)]
    to: Option<u64>,

    #[command(flatten)]
    surface: SurfaceArgs,

    /// Output JSON Lines path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input video config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct ExportArgs {
    /// Input video config JSON.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Output JSON path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
        Command::Validate(args) => cmd_validate(args),
        Command::Export(args) => cmd_export(args),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn load(path: &Path) -> anyhow::Result<reelgraph::VideoConfig> {
    reelgraph::VideoConfig::from_path(path)
        .with_context(|| format!("load video config '{}'", path.display()))
}

fn render_ctx(
    config: &reelgraph::VideoConfig,
    surface: &SurfaceArgs,
) -> anyhow::Result<reelgraph::RenderCtx> {
    let base = config.canvas();
    let canvas = reelgraph::Canvas::new(
        surface.width.unwrap_or(base.width),
        surface.height.unwrap_or(base.height),
    )?;
    Ok(config.render_ctx().with_canvas(canvas))
}

fn create_output(path: &Path) -> anyhow::Result<BufWriter<File>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let f = File::create(path).with_context(|| format!("create '{}'", path.display()))?;
    Ok(BufWriter::new(f))
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let config = load(&args.in_path)?;
    let ctx = render_ctx(&config, &args.surface)?;
    let desc = reelgraph::render(&config, args.frame, &ctx);
    let json = serde_json::to_string_pretty(&desc).context("serialize render description")?;

    match &args.out {
        Some(out) => {
            let mut w = create_output(out)?;
            writeln!(w, "{json}").with_context(|| format!("write '{}'", out.display()))?;
            w.flush()?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let config = load(&args.in_path)?;
    let ctx = render_ctx(&config, &args.surface)?;
    let session = reelgraph::PlaybackSession::new(config);

    let total = session.timeline().total_frames();
    let end = args.to.unwrap_or(total).min(total);
    let range = reelgraph::FrameRange::new(
        reelgraph::FrameIndex(args.from.min(end)),
        reelgraph::FrameIndex(end),
    )?;

    let mut w = create_output(&args.out)?;
    for f in range.start.0..range.end.0 {
        let desc = session.render_with(reelgraph::FrameIndex(f).as_i64(), &ctx);
        serde_json::to_writer(&mut w, &desc)
            .with_context(|| format!("serialize frame {f}"))?;
        w.write_all(b"\n")?;
    }
    w.flush()
        .with_context(|| format!("write '{}'", args.out.display()))?;

    eprintln!(
        "wrote {} frames to {}",
        range.len_frames(),
        args.out.display()
    );
    Ok(())
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let config = load(&args.in_path)?;
    let timeline = reelgraph::Timeline::new(config.scenes());
    let canvas = config.canvas();

    println!(
        "ok: {} scenes, {} frames ({:.2}s) at {} fps, {}x{}, theme {:?}",
        config.scenes().len(),
        config.total_duration_frames(),
        config.duration_secs(),
        config.fps().num,
        canvas.width,
        canvas.height,
        config.theme(),
    );
    for (i, scene) in config.scenes().iter().enumerate() {
        let Some(range) = timeline.scene_range(i) else {
            continue;
        };
        let detail = match &scene.kind {
            reelgraph::SceneKind::TechDiagram { diagram } => format!(
                " ({} nodes, {} edges, {} actions)",
                diagram.nodes.len(),
                diagram.edges.len(),
                diagram.actions.len()
            ),
            _ => String::new(),
        };
        println!(
            "  [{i}] {:?} {}..{} \"{}\"{detail}",
            scene.scene_type(),
            range.start.0,
            range.end.0,
            scene.title,
        );
    }
    Ok(())
}

fn cmd_export(args: ExportArgs) -> anyhow::Result<()> {
    let config = match &args.in_path {
        Some(p) => load(p)?,
        None => reelgraph::default_config(),
    };
    let mut w = create_output(&args.out)?;
    config.write_json(&mut w)?;
    w.flush()
        .with_context(|| format!("write '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}
