//! Session snapshot type and the pending-flag guard.

use std::sync::atomic::{AtomicBool, Ordering};

use kchat_common::Message;

/// Immutable snapshot of a session, cloned out for rendering.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// Full transcript, oldest first. Append-only.
    pub history: Vec<Message>,
    /// True exactly while one request is outstanding.
    pub pending: bool,
    /// Unsent user input.
    pub draft: String,
}

/// Guard that clears the pending flag on drop, so the session returns
/// to idle on every exit path. Acquisition is the atomic
/// check-and-set that keeps submits from overlapping.
pub(crate) struct PendingGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> PendingGuard<'a> {
    /// Returns `None` if a request is already outstanding.
    pub(crate) fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_ok()
            .then_some(Self { flag })
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_is_exclusive() {
        let flag = AtomicBool::new(false);

        let first = PendingGuard::acquire(&flag);
        assert!(first.is_some());
        assert!(flag.load(Ordering::Acquire));

        let second = PendingGuard::acquire(&flag);
        assert!(second.is_none());
    }

    #[test]
    fn guard_releases_on_drop() {
        let flag = AtomicBool::new(false);

        {
            let _guard = PendingGuard::acquire(&flag).unwrap();
            assert!(flag.load(Ordering::Acquire));
        }
        assert!(!flag.load(Ordering::Acquire));

        assert!(PendingGuard::acquire(&flag).is_some());
    }
}
