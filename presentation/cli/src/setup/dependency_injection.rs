use std::sync::Arc;

use imaging::file_writer::ImageFileWriter;
use logger::TracingLogger;
use scanner::client::ScannerClient;
use scanner::imaging_api::ScannerHttp;

use business::application::scan::scan_document::ScanDocumentUseCaseImpl;
use business::domain::scan::use_cases::scan_document::ScanDocumentUseCase;

use crate::config::scanner_config::ScannerConfig;

pub struct DependencyContainer {
    pub scan_document: Arc<dyn ScanDocumentUseCase>,
}

impl DependencyContainer {
    pub fn new(config: &ScannerConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let client = ScannerClient::new(&config.base_url, config.timeout)?;
        let scanner = Arc::new(ScannerHttp::new(client));
        let writer = Arc::new(ImageFileWriter::new());

        let scan_document = Arc::new(ScanDocumentUseCaseImpl {
            scanner,
            writer,
            logger,
        });

        Ok(Self { scan_document })
    }
}
