use business::domain::scan::use_cases::scan_document::{ScanDocumentParams, ScanOutcome};

use crate::config::app_config::AppConfig;
use crate::setup::dependency_injection::DependencyContainer;

pub struct Runner;

impl Runner {
    /// Runs one scan job against the configured device.
    pub async fn run(config: AppConfig) -> anyhow::Result<ScanOutcome> {
        tracing::debug!("Using scanner at {}", config.scanner.base_url);
        let container = DependencyContainer::new(&config.scanner)?;

        let outcome = container
            .scan_document
            .execute(ScanDocumentParams {
                parameters: config.parameters,
                output: config.output,
            })
            .await
            .map_err(|e| anyhow::anyhow!("{} error: {}", e.kind(), e))?;

        Ok(outcome)
    }
}
