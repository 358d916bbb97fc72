//! Alert port for blocking, user-facing notices.

/// Shows a short message to the user, the way a browser `alert()` would.
///
/// Implementations must be thread-safe so pages can be driven from async
/// tasks.
pub trait Alerter: Send + Sync {
    fn alert(&self, message: &str);
}

impl<T: Alerter + ?Sized> Alerter for Box<T> {
    fn alert(&self, message: &str) {
        (**self).alert(message);
    }
}
