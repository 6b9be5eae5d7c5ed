// Copyright 2025 the serlog authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

//! Exclusion primitive for the format-and-emit critical section.
//!
//! Two build variants, selected by the `lock` cargo feature:
//!
//! - `lock` (default): a [`spin::mutex::SpinMutex`], so concurrent callers
//!   never interleave their output. Acquisition spins without timeout.
//! - without `lock`: [`Unsynchronized`], a zero-cost pass-through for builds
//!   where only one execution context ever logs.

#[cfg(feature = "lock")]
pub(crate) use spin::mutex::SpinMutex as Lock;

#[cfg(not(feature = "lock"))]
pub(crate) use unsync::Unsynchronized as Lock;

#[cfg(not(feature = "lock"))]
mod unsync {
    use core::cell::UnsafeCell;
    use core::ops::{Deref, DerefMut};

    /// A "lock" that performs no synchronization at all.
    ///
    /// Sound only while a single execution context calls into the logger;
    /// that is the contract of a build without the `lock` feature.
    pub(crate) struct Unsynchronized<T> {
        value: UnsafeCell<T>,
    }

    // SAFETY: the without-lock build variant requires that only one context
    // accesses the logger; under that contract no aliasing can occur.
    unsafe impl<T: Send> Sync for Unsynchronized<T> {}

    impl<T> Unsynchronized<T> {
        pub(crate) const fn new(value: T) -> Self {
            Self {
                value: UnsafeCell::new(value),
            }
        }

        pub(crate) fn lock(&self) -> UnsynchronizedGuard<'_, T> {
            UnsynchronizedGuard { owner: self }
        }
    }

    pub(crate) struct UnsynchronizedGuard<'a, T> {
        owner: &'a Unsynchronized<T>,
    }

    impl<T> Deref for UnsynchronizedGuard<'_, T> {
        type Target = T;

        fn deref(&self) -> &T {
            // SAFETY: single-context contract, see `Sync` impl above.
            unsafe { &*self.owner.value.get() }
        }
    }

    impl<T> DerefMut for UnsynchronizedGuard<'_, T> {
        fn deref_mut(&mut self) -> &mut T {
            // SAFETY: single-context contract, see `Sync` impl above.
            unsafe { &mut *self.owner.value.get() }
        }
    }
}
