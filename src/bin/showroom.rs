use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "showroom", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the builtin vehicle catalog as JSON.
    Catalog,
    /// Evaluate the scroll-to-frame mapping for a sequence.
    Frames(FramesArgs),
    /// Preload a frame sequence from disk and report per-frame results.
    Preload(PreloadArgs),
    /// Check availability of every catalog model under an asset root.
    Probe(ProbeArgs),
    /// Load and process a GLB model, printing bounds and material classes.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// First frame number (inclusive).
    #[arg(long, default_value_t = 6)]
    start: u32,

    /// Last frame number (inclusive).
    #[arg(long, default_value_t = 67)]
    end: u32,

    /// Scroll progress in [0, 1].
    #[arg(long)]
    progress: f64,

    /// Directory component of the frame path template.
    #[arg(long, default_value = "images/carro3")]
    dir: String,

    /// Stem component of the frame path template.
    #[arg(long, default_value = "carro3")]
    stem: String,
}

#[derive(Parser, Debug)]
struct PreloadArgs {
    /// Asset root the frame paths are resolved against.
    #[arg(long)]
    root: PathBuf,

    /// First frame number (inclusive).
    #[arg(long, default_value_t = 6)]
    start: u32,

    /// Last frame number (inclusive).
    #[arg(long, default_value_t = 67)]
    end: u32,

    /// Directory component of the frame path template.
    #[arg(long, default_value = "images/carro3")]
    dir: String,

    /// Stem component of the frame path template.
    #[arg(long, default_value = "carro3")]
    stem: String,

    /// Image extension.
    #[arg(long, default_value = "jpg")]
    ext: String,
}

#[derive(Parser, Debug)]
struct ProbeArgs {
    /// Asset root containing the models/ directory.
    #[arg(long)]
    root: PathBuf,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Path to a .glb model file.
    model: PathBuf,

    /// Paint color as #RRGGBB.
    #[arg(long, default_value = "#D40000")]
    color: String,

    /// Metallic finish.
    #[arg(long)]
    metallic: bool,

    /// Normalization target size in scene units.
    #[arg(long, default_value_t = 4.5)]
    target_size: f32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Catalog => cmd_catalog(),
        Command::Frames(args) => cmd_frames(args),
        Command::Preload(args) => cmd_preload(args),
        Command::Probe(args) => cmd_probe(args),
        Command::Inspect(args) => cmd_inspect(args),
    }
}

fn cmd_catalog() -> anyhow::Result<()> {
    let catalog = showroom::builtin_catalog();
    println!("{}", serde_json::to_string_pretty(&catalog)?);
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let span = showroom::FrameSpan::new(args.start, args.end)?;
    let seq = showroom::FrameSequence::new(
        span,
        showroom::FramePathTemplate::new(args.dir, args.stem, "jpg"),
    );

    let frame = seq.compute_frame(args.progress);
    println!("frame: {frame}");
    println!("path:  {}", seq.frame_path(frame));
    Ok(())
}

fn cmd_preload(args: PreloadArgs) -> anyhow::Result<()> {
    let span = showroom::FrameSpan::new(args.start, args.end)?;
    let seq = showroom::FrameSequence::new(
        span,
        showroom::FramePathTemplate::new(args.dir, args.stem, args.ext),
    );

    let loader = showroom::FsFrameLoader::new(&args.root);
    let report = showroom::preload_all(&seq, &loader, |progress| {
        eprint!("\rpreloading {}/{}", progress.settled, progress.total);
    });
    eprintln!();

    println!(
        "loaded {} / failed {} of {} frames",
        report.loaded_count(),
        report.failed_count(),
        report.total_frames()
    );
    for frame in report.failed_frames() {
        println!("failed: {}", seq.frame_path(*frame));
    }
    Ok(())
}

fn cmd_probe(args: ProbeArgs) -> anyhow::Result<()> {
    let catalog = showroom::builtin_catalog();
    let probe = showroom::FsModelProbe::new(&args.root);

    let mut missing = 0usize;
    for (car, status) in showroom::probe_catalog(&catalog, &probe) {
        println!("{:28} {:40} {:?}", car.id, car.model_path, status);
        if status == showroom::Availability::Error {
            missing += 1;
        }
    }
    if missing > 0 {
        eprintln!("{missing} model(s) missing under '{}'", args.root.display());
    }
    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let paint = showroom::PaintSelection {
        color: showroom::Rgb::from_hex(&args.color)
            .with_context(|| format!("parse paint color '{}'", args.color))?,
        metallic: args.metallic,
    };

    let mut session = showroom::ViewerSession::new();
    let phase = session.select_model(&args.model, paint, args.target_size);
    println!("phase: {phase:?}");

    let Some(model) = session.model() else {
        anyhow::bail!("no model after select (bug)");
    };

    let aabb = model.world_aabb();
    println!("meshes: {}", model.mesh_count());
    println!("scale: {:.4}  translation: {:.3?}", model.scale, model.translation);
    println!(
        "bounds: min {:.3?} max {:.3?} (scaled max dim {:.3})",
        aabb.min,
        aabb.max,
        aabb.max_dim() * model.scale
    );
    println!("materials:");
    for (name, class) in model.material_slots() {
        let shown = if name.is_empty() { "<unnamed>" } else { &name };
        println!("  {shown:32} {class:?}");
    }
    Ok(())
}
