use std::env;
use std::time::Duration;

pub const DEFAULT_SCANNER_URL: &str = "http://192.168.1.34:8080";

/// Scanner device connection settings
#[derive(Debug, Clone, PartialEq)]
pub struct ScannerConfig {
    pub base_url: String,
    pub timeout: Option<Duration>,
}

impl ScannerConfig {
    /// Load scanner configuration from environment variables
    ///
    /// Environment variables:
    /// - SCANNER_URL: Base URL of the scanner (default: "http://192.168.1.34:8080")
    /// - SCANNER_TIMEOUT_SECS: Request timeout in seconds (default: none, wait forever)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let base_url = var("SCANNER_URL").unwrap_or_else(|| DEFAULT_SCANNER_URL.to_string());
        let timeout = match var("SCANNER_TIMEOUT_SECS") {
            Some(secs) => {
                let secs: u64 = secs.trim().parse().map_err(|_| {
                    anyhow::anyhow!("SCANNER_TIMEOUT_SECS must be a whole number of seconds, got {secs:?}")
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self { base_url, timeout })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn should_use_defaults_without_environment() {
        // Arrange
        let lookup = vars(&[]);

        // Act
        let config = ScannerConfig::from_vars(lookup).unwrap();

        // Assert
        assert_eq!(config.base_url, DEFAULT_SCANNER_URL);
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn should_read_url_and_timeout() {
        // Arrange
        let lookup = vars(&[
            ("SCANNER_URL", "http://10.0.0.9:8080"),
            ("SCANNER_TIMEOUT_SECS", "45"),
        ]);

        // Act
        let config = ScannerConfig::from_vars(lookup).unwrap();

        // Assert
        assert_eq!(config.base_url, "http://10.0.0.9:8080");
        assert_eq!(config.timeout, Some(Duration::from_secs(45)));
    }

    #[test]
    fn should_reject_invalid_timeout() {
        // Arrange
        let lookup = vars(&[("SCANNER_TIMEOUT_SECS", "soon")]);

        // Act
        let result = ScannerConfig::from_vars(lookup);

        // Assert
        assert!(result.is_err());
    }
}
