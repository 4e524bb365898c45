use business::domain::notifier::Notifier;
use tracing::{error, info};

const TARGET: &str = "Notification -- ";

/// Headless notifier: toasts become log lines. Used by the client binary and
/// anywhere no UI surface is attached.
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        info!(target: TARGET, kind = "success", "{}", message);
    }

    fn error(&self, message: &str) {
        error!(target: TARGET, kind = "error", "{}", message);
    }
}
