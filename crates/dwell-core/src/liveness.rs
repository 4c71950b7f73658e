use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag tying async work to the lifetime of the wizard that started it.
///
/// Clones observe the same flag. Once [`Liveness::cancel`] is called, pending
/// geolocation or submission results must be discarded by whoever holds a
/// clone.
#[derive(Debug, Clone, Default)]
pub struct Liveness(Arc<AtomicBool>);

impl Liveness {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        !self.is_cancelled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_cancellation() {
        let token = Liveness::new();
        let held_by_task = token.clone();
        assert!(held_by_task.is_live());
        token.cancel();
        assert!(held_by_task.is_cancelled());
    }

    #[test]
    fn independent_tokens_do_not_interfere() {
        let a = Liveness::new();
        let b = Liveness::new();
        a.cancel();
        assert!(b.is_live());
    }
}
