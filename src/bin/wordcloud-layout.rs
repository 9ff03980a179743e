use std::fs::File;
use std::io::{BufReader, BufWriter, Write as _};
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use animated_wordcloud::{
    CloudConfig, EstimatedTextMeasurer, Rng64, TimelapseWordVector, allocate_all,
    animate_with_durations,
};

#[derive(Parser, Debug)]
#[command(name = "wordcloud-layout", version)]
struct Cli {
    /// Log progress at debug level.
    #[arg(long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lay out every frame of the animation, with display durations.
    Animate(AnimateArgs),
    /// Lay out only the per-timestamp keyframes.
    Keyframes(KeyframesArgs),
}

#[derive(Parser, Debug)]
struct AnimateArgs {
    /// Input timelapse JSON: `[{ "label": ..., "weights": { word: weight } }]`.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output JSON path.
    #[arg(long)]
    out: PathBuf,

    /// Config JSON; missing fields take their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the number of transition frames between keyframes.
    #[arg(long)]
    frames: Option<usize>,

    /// Override the placement seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Search the frontier sides in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,
}

#[derive(Parser, Debug)]
struct KeyframesArgs {
    /// Input timelapse JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output JSON path.
    #[arg(long)]
    out: PathBuf,

    /// Config JSON; missing fields take their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the placement seed.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Animate(args) => cmd_animate(args),
        Command::Keyframes(args) => cmd_keyframes(args),
    }
}

fn cmd_animate(args: AnimateArgs) -> anyhow::Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(frames) = args.frames {
        config.n_frames_for_interpolation = frames;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    config.parallel_sides |= args.parallel;

    let timelapse = load_timelapse(&args.in_path)?;
    let out = animate_with_durations(&timelapse, &config, &EstimatedTextMeasurer::default())
        .context("lay out animation")?;

    write_json(&args.out, &out)?;
    eprintln!("wrote {} ({} frames)", args.out.display(), out.frames.len());
    Ok(())
}

fn cmd_keyframes(args: KeyframesArgs) -> anyhow::Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    config.validate()?;

    let timelapse = load_timelapse(&args.in_path)?;
    timelapse.validate()?;
    let mut rng = Rng64::new(config.seed);
    let keyframes = allocate_all(
        &timelapse,
        &config,
        &EstimatedTextMeasurer::default(),
        &mut rng,
    )
    .context("lay out keyframes")?;

    write_json(&args.out, &keyframes)?;
    eprintln!("wrote {} ({} keyframes)", args.out.display(), keyframes.len());
    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<CloudConfig> {
    let Some(path) = path else {
        return Ok(CloudConfig::default());
    };
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("read config '{}'", path.display()))?;
    let config = CloudConfig::from_json_str(&s)
        .with_context(|| format!("parse config '{}'", path.display()))?;
    Ok(config)
}

fn load_timelapse(path: &Path) -> anyhow::Result<TimelapseWordVector> {
    let f = File::open(path).with_context(|| format!("open input '{}'", path.display()))?;
    let timelapse: TimelapseWordVector = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parse input '{}'", path.display()))?;
    Ok(timelapse)
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let f = File::create(path).with_context(|| format!("create output '{}'", path.display()))?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer_pretty(&mut w, value)
        .with_context(|| format!("write output '{}'", path.display()))?;
    w.flush()
        .with_context(|| format!("flush output '{}'", path.display()))?;
    Ok(())
}
