use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::errors::ScanError;
use super::model::RawImage;

/// Service port for the scanner's HTTP imaging API.
///
/// URLs returned by the device may be relative; implementations resolve them
/// against the scanner base URL.
#[async_trait]
pub trait ScannerService: Send + Sync {
    /// Posts the scan settings document and returns the job metadata URL.
    async fn submit_job(&self, request_xml: &str) -> Result<String, ScanError>;

    /// Returns the raw job metadata document.
    async fn fetch_metadata(&self, metadata_url: &str) -> Result<String, ScanError>;

    /// Downloads the raw pixel payload of the scanned page.
    async fn fetch_image(&self, binary_url: &str) -> Result<Vec<u8>, ScanError>;
}

/// Service port for persisting a scanned raster.
#[async_trait]
pub trait ImageWriterService: Send + Sync {
    /// Returns a path that does not collide with an existing file.
    fn resolve_output_path(&self, requested: &Path) -> PathBuf;

    /// Encodes the image in the format implied by the path's extension and writes it.
    async fn save(&self, image: RawImage, path: &Path) -> Result<(), ScanError>;
}
