//! Command-line interface for scribble-preview.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// scribble-preview - render text with a handwriting ligature font
#[derive(Parser, Debug)]
#[command(name = "scribble-preview")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log filter (overrides RUST_LOG), e.g. "debug" or "scribble_font=trace"
    #[arg(long, global = true, value_name = "FILTER")]
    pub log: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Draw text into a PNG image
    Render(RenderArgs),

    /// List the ligatures of a font
    List {
        /// Font PNG containing a foNt chunk
        font: PathBuf,
    },
}

#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    /// Font PNG containing a foNt chunk
    pub font: PathBuf,

    /// Text to draw; "-" reads standard input
    pub text: String,

    /// Output PNG path
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Canvas width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Canvas height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Pen start X
    #[arg(short = 'x', long)]
    pub x: Option<i32>,

    /// Baseline of the first line
    #[arg(short = 'y', long)]
    pub y: Option<i32>,

    /// Background color as RRGGBB or RRGGBBAA hex
    #[arg(long, value_name = "HEX")]
    pub background: Option<String>,

    /// Seed for glyph alternates; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,
}
