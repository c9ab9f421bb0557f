use log::{error, info};

/// Scoped wrapper over the `log` facade used by workflow code.
pub struct LogManager {
    scope: &'static str,
}

impl LogManager {
    pub fn new(scope: &'static str) -> Self {
        Self { scope }
    }

    pub fn record(&self, message: &str) {
        info!("{}: {}", self.scope, message);
    }

    pub fn record_failure(&self, message: &str) {
        error!("{}: {}", self.scope, message);
    }
}
