use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use zpoly::{Canvas, DepthRenderer, RenderConfig, SceneRenderer, VertexFormat};

#[derive(Parser)]
#[command(name = "zpoly")]
#[command(about = "Render a scene of convex polygons with a depth buffer")]
struct Cli {
    /// Scene file, asked for on stdin if not given
    scene: Option<PathBuf>,

    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Image file to write
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long)]
    width: Option<usize>,

    /// Image height in pixels
    #[arg(long)]
    height: Option<usize>,

    /// Vertices are x y z instead of x y
    #[arg(long)]
    spatial: bool,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn prompt_filename() -> Result<PathBuf> {
    print!("enter filename: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let name = line.split_whitespace().next().unwrap_or("");
    if name.is_empty() {
        anyhow::bail!("no scene file given");
    }
    Ok(PathBuf::from(name))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut cfg = match &cli.config {
        Some(path) => RenderConfig::from_file(path)?,
        None => RenderConfig::default(),
    };
    if let Some(output) = cli.output {
        cfg.output = output;
    }
    if let Some(width) = cli.width {
        cfg.width = width;
    }
    if let Some(height) = cli.height {
        cfg.height = height;
    }
    if cli.spatial {
        cfg.vertex_format = VertexFormat::Spatial;
    }
    if cfg.width == 0 || cfg.height == 0 {
        anyhow::bail!("image size must be non-zero, got {}x{}", cfg.width, cfg.height);
    }

    let scene = match cli.scene {
        Some(scene) => scene,
        None => prompt_filename()?,
    };

    let mut canvas = Canvas::new(cfg.width, cfg.height);
    canvas.clear(cfg.background);

    info!("{}: {:?} -> {:?} ({}x{})", cfg.title, scene, cfg.output, cfg.width, cfg.height);
    let ren = SceneRenderer::from_file(DepthRenderer::new(canvas), &scene, cfg.vertex_format)
        .with_context(|| format!("loading scene {:?}", scene))?;
    info!("{} polygons drawn", ren.polygons().len());

    let canvas = ren.into_inner().into_inner();
    canvas.to_file(&cfg.output)
        .with_context(|| format!("writing {:?}", cfg.output))?;
    Ok(())
}
