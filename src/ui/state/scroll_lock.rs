// SPDX-License-Identifier: MPL-2.0
//! Page scroll lock
//!
//! While the viewer is fullscreen the surrounding page must not scroll. The
//! lock has a single owner at a time; ownership is an RAII guard so that every
//! exit path (close, Escape, teardown) releases exactly what was acquired.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Debug, Default)]
struct Inner {
    held: AtomicBool,
    acquisitions: AtomicUsize,
    releases: AtomicUsize,
}

/// Shared handle to the page scroll lock.
///
/// Clones refer to the same lock.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    inner: Arc<Inner>,
}

impl ScrollLock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the lock if nobody holds it.
    #[must_use]
    pub fn try_acquire(&self) -> Option<ScrollLockGuard> {
        self.inner
            .held
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;
        self.inner.acquisitions.fetch_add(1, Ordering::AcqRel);
        Some(ScrollLockGuard {
            inner: Arc::clone(&self.inner),
        })
    }

    /// Returns true while a guard is alive.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.inner.held.load(Ordering::Acquire)
    }

    /// Number of successful acquisitions so far.
    #[must_use]
    pub fn acquisitions(&self) -> usize {
        self.inner.acquisitions.load(Ordering::Acquire)
    }

    /// Number of releases so far.
    #[must_use]
    pub fn releases(&self) -> usize {
        self.inner.releases.load(Ordering::Acquire)
    }
}

/// Ownership of the scroll lock; dropping it releases the lock.
#[derive(Debug)]
pub struct ScrollLockGuard {
    inner: Arc<Inner>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.inner.releases.fetch_add(1, Ordering::AcqRel);
        self.inner.held.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acquire_and_drop_round_trip() {
        let lock = ScrollLock::new();
        let guard = lock.try_acquire();
        assert!(guard.is_some());
        assert!(lock.is_locked());

        drop(guard);
        assert!(!lock.is_locked());
        assert_eq!(lock.acquisitions(), 1);
        assert_eq!(lock.releases(), 1);
    }

    #[test]
    fn second_acquire_fails_while_held() {
        let lock = ScrollLock::new();
        let other = lock.clone();
        let _guard = lock.try_acquire().expect("lock should be free");

        assert!(other.try_acquire().is_none());
        assert_eq!(lock.acquisitions(), 1);
    }

    #[test]
    fn lock_can_be_reacquired_after_release() {
        let lock = ScrollLock::new();
        drop(lock.try_acquire());
        assert!(lock.try_acquire().is_some());
        assert_eq!(lock.acquisitions(), 2);
        assert_eq!(lock.releases(), 2);
    }
}
