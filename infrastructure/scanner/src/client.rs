use std::time::Duration;

use business::domain::scan::errors::ScanError;
use reqwest::Client;
use url::Url;

/// Shared HTTP client configuration for one scanner device.
pub struct ScannerClient {
    pub client: Client,
    pub base_url: Url,
}

impl ScannerClient {
    /// Builds a client for the device at `base_url`. Without a timeout a stalled device blocks forever.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ScanError> {
        let mut base_url = Url::parse(base_url)
            .map_err(|e| ScanError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        // Keeps a path prefix such as `/proxy` when joining relative endpoints.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ScanError::Transport(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    /// Returns the job creation endpoint URL, `{base_url}/Scan/Jobs`.
    pub fn jobs_url(&self) -> Result<Url, ScanError> {
        self.resolve("Scan/Jobs")
    }

    /// Resolves a relative or absolute reference returned by the device.
    pub fn resolve(&self, reference: &str) -> Result<Url, ScanError> {
        self.base_url
            .join(reference)
            .map_err(|e| ScanError::InvalidUrl(format!("{}: {}", reference, e)))
    }
}
