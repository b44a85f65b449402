use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "thrifthub", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "thrifthub", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "thrifthub", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "thrifthub", "{}", message);
    }
}
