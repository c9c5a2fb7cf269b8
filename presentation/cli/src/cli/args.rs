use std::path::PathBuf;

use business::domain::scan::errors::ScanError;
use business::domain::scan::value_objects::{Dpi, Orientation, PaperSize};
use clap::Parser;

/// Scan a single page from an HP network scanner and save it as an image.
#[derive(Debug, Parser)]
#[command(name = "hp-scan", version)]
pub struct Args {
    /// Scan DPI
    #[arg(short, long, default_value = "300", value_parser = parse_dpi)]
    pub dpi: Dpi,

    /// Output file name; an existing file is never overwritten
    #[arg(short, long, default_value = "scan.png")]
    pub out: PathBuf,

    /// Size in WxH pixels or ISO size (a4, a5, a6)
    #[arg(short, long, default_value = "2550x3508", value_parser = parse_size)]
    pub size: PaperSize,

    /// Scan in landscape
    #[arg(short, long)]
    pub landscape: bool,

    /// Scanner base URL, overrides SCANNER_URL
    #[arg(short, long)]
    pub url: Option<String>,
}

impl Args {
    pub fn orientation(&self) -> Orientation {
        if self.landscape {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

fn parse_dpi(value: &str) -> Result<Dpi, String> {
    value.parse().map_err(|e: ScanError| e.to_string())
}

fn parse_size(value: &str) -> Result<PaperSize, String> {
    value.parse().map_err(|e: ScanError| e.to_string())
}
