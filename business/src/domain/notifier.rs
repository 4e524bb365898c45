/// Transient, non-blocking user notifications raised by the list coordinator.
///
/// Implementations must never block: the list view stays interactive while a
/// notification is shown.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}
