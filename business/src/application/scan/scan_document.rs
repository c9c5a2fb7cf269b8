use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::scan::errors::ScanError;
use crate::domain::scan::model::{JobMetadata, RawImage};
use crate::domain::scan::request::ScanJobRequest;
use crate::domain::scan::services::{ImageWriterService, ScannerService};
use crate::domain::scan::use_cases::scan_document::{
    ScanDocumentParams, ScanDocumentUseCase, ScanOutcome,
};

pub struct ScanDocumentUseCaseImpl {
    pub scanner: Arc<dyn ScannerService>,
    pub writer: Arc<dyn ImageWriterService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ScanDocumentUseCase for ScanDocumentUseCaseImpl {
    async fn execute(&self, params: ScanDocumentParams) -> Result<ScanOutcome, ScanError> {
        let scan = params.parameters;
        let request = ScanJobRequest::new(&scan);
        self.logger.debug(&format!(
            "Scan settings: {} dpi, {}x{} ({})",
            scan.dpi, scan.width, scan.height, scan.orientation
        ));

        self.logger.info("Issuing scan command...");
        let metadata_url = self.scanner.submit_job(request.as_xml()).await?;

        self.logger.info("Downloading metadata...");
        let body = self.scanner.fetch_metadata(&metadata_url).await?;
        let metadata = JobMetadata::parse(&body)?;
        let expected_len = metadata.expected_payload_len()?;
        self.logger.debug(&format!(
            "Job metadata: {} ({}x{}, {} bytes)",
            metadata.binary_url, metadata.image_width, metadata.image_height, expected_len
        ));

        self.logger.info("Downloading image...");
        let payload = self.scanner.fetch_image(&metadata.binary_url).await?;
        let image = RawImage::new(metadata.image_width, metadata.image_height, payload)?;

        let path = self.writer.resolve_output_path(&params.output);
        self.logger.info(&format!("Saving image to {}...", path.display()));
        self.writer.save(image, &path).await?;

        Ok(ScanOutcome {
            path,
            width: metadata.image_width,
            height: metadata.image_height,
        })
    }
}
