use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::scan::errors::ScanError;
use crate::domain::scan::model::ScanParameters;

pub struct ScanDocumentParams {
    pub parameters: ScanParameters,
    pub output: PathBuf,
}

/// Result of a completed scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

#[async_trait]
pub trait ScanDocumentUseCase: Send + Sync {
    async fn execute(&self, params: ScanDocumentParams) -> Result<ScanOutcome, ScanError>;
}
