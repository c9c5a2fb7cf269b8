use std::path::PathBuf;

use business::domain::scan::model::ScanParameters;

use super::scanner_config::ScannerConfig;
use crate::cli::args::Args;

/// Settings for one invocation, resolved once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub scanner: ScannerConfig,
    pub parameters: ScanParameters,
    pub output: PathBuf,
}

impl AppConfig {
    pub fn from_env(args: Args) -> anyhow::Result<Self> {
        Ok(Self::from_parts(args, ScannerConfig::from_env()?))
    }

    /// Command line values take precedence over the environment.
    pub fn from_parts(args: Args, mut scanner: ScannerConfig) -> Self {
        if let Some(url) = &args.url {
            scanner.base_url = url.clone();
        }
        let parameters = ScanParameters::new(args.dpi, args.size, args.orientation());

        Self {
            scanner,
            parameters,
            output: args.out,
        }
    }
}
