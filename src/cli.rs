use clap::Parser;
use std::path::PathBuf;

/// gis-material-update - process geographic source material
#[derive(Parser, Debug)]
#[command(name = "gis-material-update")]
#[command(about = "Transforms downloaded GIS material into database tables and GeoJSON files")]
#[command(version)]
pub struct Cli {
    /// Items to process, in order (e.g. hsl tram_lines cycle_infra)
    pub items: Vec<String>,

    /// JSON settings file with per-profile directories
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Exit with status 2 if any item name was not recognized
    #[arg(long)]
    pub strict: bool,

    /// List the recognized item names and exit
    #[arg(long)]
    pub list: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
