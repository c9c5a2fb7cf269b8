use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "hp_scan", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "hp_scan", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "hp_scan", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "hp_scan", "{}", message);
    }
}
