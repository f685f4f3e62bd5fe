//! scribble-preview - Main Entry Point

mod cli;
mod config;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use scribble_font::{Font, TextRenderer, TracingDiagnostics, XorShiftPicker};
use tiny_skia::Pixmap;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, RenderArgs};
use config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = match &cli.log {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("invalid log filter {directives:?}"))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Render(args) => render(&args),
        Commands::List { font } => list(&font),
    }
}

fn load_font(path: &Path) -> Result<Font> {
    let data = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    smol::block_on(Font::load(data)).with_context(|| format!("loading font {}", path.display()))
}

fn render(args: &RenderArgs) -> Result<()> {
    let config = Config::from_args(args)?;
    let font = load_font(&args.font)?;

    let text = if args.text == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading text from stdin")?;
        text
    } else {
        args.text.clone()
    };

    let mut page = Pixmap::new(config.width, config.height)
        .with_context(|| format!("allocating {}x{} canvas", config.width, config.height))?;
    page.fill(config.background);

    let picker = config
        .seed
        .map(XorShiftPicker::new)
        .unwrap_or_else(XorShiftPicker::from_time);
    let mut renderer = TextRenderer::new(picker, TracingDiagnostics);
    renderer.draw_text(&font, &mut page, &text, config.origin_x, config.origin_y);

    page.save_png(&config.output)
        .with_context(|| format!("writing {}", config.output.display()))?;
    tracing::info!("Wrote {}", config.output.display());
    Ok(())
}

fn list(path: &Path) -> Result<()> {
    let font = load_font(path)?;
    println!(
        "{} ligatures, line height {}, baseline {}",
        font.num_ligatures(),
        font.line_height(),
        font.baseline()
    );

    let mut ligatures: Vec<_> = font.ligatures().collect();
    ligatures.sort_by(|a, b| a.key.cmp(&b.key));
    for ligature in ligatures {
        let images = ligature.glyphs.iter().filter(|g| g.image.is_some()).count();
        println!(
            "{:?}\tadvance {}\t{} glyphs ({} with images)",
            ligature.key,
            ligature.advance,
            ligature.glyphs.len(),
            images
        );
    }
    Ok(())
}
