use async_trait::async_trait;
use reqwest::Response;
use reqwest::header::{CONTENT_TYPE, LOCATION};
use url::Url;

use business::domain::scan::errors::ScanError;
use business::domain::scan::services::ScannerService;

use crate::client::ScannerClient;

/// `ScannerService` backed by the HP imaging HTTP API.
pub struct ScannerHttp {
    client: ScannerClient,
}

impl ScannerHttp {
    pub fn new(client: ScannerClient) -> Self {
        Self { client }
    }

    fn check_status(url: &Url, response: Response) -> Result<Response, ScanError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ScanError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    async fn get(&self, reference: &str) -> Result<Response, ScanError> {
        let url = self.client.resolve(reference)?;
        let response = self
            .client
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| ScanError::Transport(e.to_string()))?;

        Self::check_status(&url, response)
    }
}

#[async_trait]
impl ScannerService for ScannerHttp {
    async fn submit_job(&self, request_xml: &str) -> Result<String, ScanError> {
        let url = self.client.jobs_url()?;

        let response = self
            .client
            .client
            .post(url.clone())
            .header(CONTENT_TYPE, "application/xml")
            .body(request_xml.to_string())
            .send()
            .await
            .map_err(|e| ScanError::Transport(e.to_string()))?;

        let response = Self::check_status(&url, response)?;

        let location = response
            .headers()
            .get(LOCATION)
            .ok_or(ScanError::MissingLocation)?
            .to_str()
            .map_err(|_| ScanError::InvalidUrl("Location header is not valid text".to_string()))?;

        Ok(self.client.resolve(location)?.to_string())
    }

    async fn fetch_metadata(&self, metadata_url: &str) -> Result<String, ScanError> {
        self.get(metadata_url)
            .await?
            .text()
            .await
            .map_err(|e| ScanError::Transport(e.to_string()))
    }

    async fn fetch_image(&self, binary_url: &str) -> Result<Vec<u8>, ScanError> {
        let bytes = self
            .get(binary_url)
            .await?
            .bytes()
            .await
            .map_err(|e| ScanError::Transport(e.to_string()))?;

        Ok(bytes.to_vec())
    }
}
