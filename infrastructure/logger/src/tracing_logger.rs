use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "simpleapp", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "simpleapp", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "simpleapp", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "simpleapp", "{}", message);
    }
}
