use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use roundel::{
    COLOR_PRESETS, ColorPreset, FONT_PRESETS, FontPreset, InputSource, RenderJob, StyleConfig,
    TransformState,
};

#[derive(Parser, Debug)]
#[command(name = "roundel", version, about = "Render circular avatars")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one avatar from a photo or a name.
    Render(RenderArgs),
    /// Render initials avatars for many names in parallel.
    Batch(BatchArgs),
    /// List built-in color and font presets.
    Presets,
}

#[derive(Parser, Debug)]
struct StyleArgs {
    /// Style JSON (camelCase fields; missing fields take defaults).
    #[arg(long)]
    style: Option<PathBuf>,

    /// Color preset by name or index.
    #[arg(long)]
    color_preset: Option<String>,

    /// Font preset by name or index.
    #[arg(long)]
    font_preset: Option<String>,
}

impl StyleArgs {
    fn resolve(&self) -> anyhow::Result<StyleConfig> {
        let mut style = match &self.style {
            Some(path) => StyleConfig::from_path(path)?,
            None => StyleConfig::default(),
        };
        if let Some(key) = &self.color_preset {
            ColorPreset::find(key)?.apply(&mut style);
        }
        if let Some(key) = &self.font_preset {
            FontPreset::find(key)?.apply(&mut style);
        }
        Ok(style.clamped())
    }
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    style: StyleArgs,

    /// Photo to place in the avatar. Takes precedence over --name.
    #[arg(long)]
    image: Option<PathBuf>,

    /// Name whose first letter is drawn when no image is given.
    #[arg(long)]
    name: Option<String>,

    /// Zoom factor (0.5..=3.0).
    #[arg(long, default_value_t = 1.0)]
    zoom: f64,

    /// Horizontal pan in pixels (-100..=100).
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    offset_x: i32,

    /// Vertical pan in pixels (-100..=100).
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    offset_y: i32,

    /// Rotation in degrees.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    rotation: i32,

    /// Output PNG path.
    #[arg(long, default_value = roundel::DEFAULT_FILE_NAME)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct BatchArgs {
    #[command(flatten)]
    style: StyleArgs,

    /// Comma-separated names.
    #[arg(long, value_delimiter = ',', required = true)]
    names: Vec<String>,

    /// Override rayon worker threads.
    #[arg(long)]
    threads: Option<usize>,

    /// Output directory; files are named `<index>-<initial>.png`.
    #[arg(long)]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Batch(args) => cmd_batch(args),
        Command::Presets => cmd_presets(),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let style = args.style.resolve()?;
    let transform = TransformState {
        zoom_factor: args.zoom,
        offset_x: args.offset_x,
        offset_y: args.offset_y,
        rotation_degrees: args.rotation,
    }
    .clamped();

    let image = match &args.image {
        Some(path) => Some(roundel::decode_image_path(path)?),
        None => None,
    };
    let input = InputSource::select(image, args.name.as_deref())?;

    let result = roundel::render(&input, &style, &transform)?;
    roundel::encode_to_path(&result, &args.out)
        .with_context(|| format!("export avatar to '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_batch(args: BatchArgs) -> anyhow::Result<()> {
    let style = args.style.resolve()?;
    let names: Vec<String> = args
        .names
        .iter()
        .map(|n| n.trim().to_owned())
        .filter(|n| !n.is_empty())
        .collect();
    if names.is_empty() {
        anyhow::bail!("--names must contain at least one non-empty name");
    }

    let jobs: Vec<RenderJob> = names
        .iter()
        .map(|n| RenderJob::initials(n.clone(), style.clone()))
        .collect();
    let results = roundel::render_batch(&jobs, args.threads)?;

    let mut failed = 0usize;
    for (i, (name, res)) in names.iter().zip(results).enumerate() {
        let initial: String = roundel::initial_glyph(name)
            .unwrap_or_default()
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '_' })
            .collect();
        let path = args.out_dir.join(format!("{i}-{initial}.png"));
        match res.and_then(|r| roundel::encode_to_path(&r, &path)) {
            Ok(()) => eprintln!("wrote {}", path.display()),
            Err(e) => {
                failed += 1;
                tracing::error!(%name, error = %e, "avatar failed");
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {} avatars failed", names.len());
    }
    Ok(())
}

fn cmd_presets() -> anyhow::Result<()> {
    println!("color presets:");
    for (i, p) in COLOR_PRESETS.iter().enumerate() {
        println!(
            "  {i}: {:<10} background {} border {} text {}",
            p.name, p.background, p.border, p.text
        );
    }
    println!("font presets:");
    for (i, p) in FONT_PRESETS.iter().enumerate() {
        println!(
            "  {i}: {:<12} {} {}px {}",
            p.name, p.family, p.size, p.color
        );
    }
    Ok(())
}
