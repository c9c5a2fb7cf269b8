/// Errors raised while running a scan job.
/// Identifiers follow the `area.reason` code style; the payload carries the detail shown to the user.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScanError {
    #[error("scan.transport_error: {0}")]
    Transport(String),
    #[error("scan.http_status: {url} returned {status}")]
    HttpStatus { url: String, status: u16 },
    #[error("scan.missing_location: job submission response has no Location header")]
    MissingLocation,
    #[error("scan.missing_field: <{0}> not found in job metadata")]
    MissingField(&'static str),
    #[error("scan.invalid_field: <{field}> has invalid value {value:?}")]
    InvalidField { field: &'static str, value: String },
    #[error("scan.invalid_url: {0}")]
    InvalidUrl(String),
    #[error("scan.invalid_dpi: {0:?}")]
    InvalidDpi(String),
    #[error("scan.invalid_size: {0:?}")]
    InvalidSize(String),
    #[error("scan.size_mismatch: expected {expected} bytes of RGB data, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
    #[error("scan.decode_error: {0}")]
    Decode(String),
    #[error("scan.io_error: {0}")]
    Io(String),
}

/// Coarse failure classes reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    Protocol,
    Parse,
    Decode,
    Filesystem,
}

impl ScanError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScanError::Transport(_) | ScanError::HttpStatus { .. } => ErrorKind::Transport,
            ScanError::MissingLocation
            | ScanError::MissingField(_)
            | ScanError::InvalidField { .. }
            | ScanError::InvalidUrl(_) => ErrorKind::Protocol,
            ScanError::InvalidDpi(_) | ScanError::InvalidSize(_) => ErrorKind::Parse,
            ScanError::SizeMismatch { .. } | ScanError::Decode(_) => ErrorKind::Decode,
            ScanError::Io(_) => ErrorKind::Filesystem,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Transport => write!(f, "transport"),
            ErrorKind::Protocol => write!(f, "protocol"),
            ErrorKind::Parse => write!(f, "parse"),
            ErrorKind::Decode => write!(f, "decode"),
            ErrorKind::Filesystem => write!(f, "filesystem"),
        }
    }
}
