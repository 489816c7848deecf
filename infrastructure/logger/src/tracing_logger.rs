use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// `tracing`-backed logger adapter. Constructed once at startup and handed
/// to every component that needs it; never reached through global state.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "product-service", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "product-service", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "product-service", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "product-service", "{}", message);
    }
}
