use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use gamethumbs::ResampleFilter;
use gamethumbs::core::params::DEFAULT_IMAGES_DIR;

#[derive(Parser)]
#[command(name = "gamethumbs", version, about = "Game icon thumbnail preparation")]
pub struct CliArgs {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(long, global = true, default_value_t = false)]
    pub log: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Crop local images to the target aspect ratio, then resize
    Crop(CommonArgs),

    /// Download images and stretch them to the target size
    Download {
        #[command(flatten)]
        common: CommonArgs,

        /// Use this URL for every entry instead of the manifest's URLs
        #[arg(long)]
        url: Option<String>,
    },
}

#[derive(Args)]
pub struct CommonArgs {
    /// Directory sources are read from and PNGs are written to (created if missing)
    #[arg(long, default_value = DEFAULT_IMAGES_DIR)]
    pub images_dir: PathBuf,

    /// Output size as WIDTHxHEIGHT
    #[arg(long, default_value = "300x200")]
    pub size: String,

    /// Resampling filter
    #[arg(long, value_enum, default_value_t = ResampleFilter::Lanczos3)]
    pub filter: ResampleFilter,

    /// JSON manifest replacing the built-in entry lists
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Write a JSON report of every entry's outcome
    #[arg(long)]
    pub report: Option<PathBuf>,
}
