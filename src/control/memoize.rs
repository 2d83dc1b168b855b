//! At-most-once evaluation shared across threads.
//!
//! [`Memoized`] defers a computation until it is first observed, runs it
//! exactly once no matter how many threads race to observe it, and hands
//! every caller the same cached value afterwards.
//!
//! # Poisoning
//!
//! If the initializer panics, the value is **poisoned**: it will never be
//! computed. [`Memoized::force`] panics on a poisoned value and
//! [`Memoized::try_force`] reports [`MemoizeError::Poisoned`].
//!
//! # Re-entrancy
//!
//! Forcing a `Memoized` from inside its own initializer deadlocks.
//!
//! # Examples
//!
//! ```rust
//! use kindred::control::memoize;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! let calls = Arc::new(AtomicUsize::new(0));
//! let counted = Arc::clone(&calls);
//! let cached = memoize(move || {
//!     counted.fetch_add(1, Ordering::SeqCst);
//!     "expensive".to_string()
//! });
//!
//! assert_eq!(cached(), "expensive");
//! assert_eq!(cached.clone()(), "expensive");
//! assert_eq!(calls.load(Ordering::SeqCst), 1);
//! ```

use std::fmt;
use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;
use thiserror::Error;

/// Error returned by [`Memoized::try_force`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MemoizeError {
    /// The initializer panicked during an earlier evaluation.
    #[error("Memoized: initializer panicked, value is poisoned")]
    Poisoned,
}

/// A lazily computed value whose initializer runs at most once.
///
/// The initializer sits behind a [`parking_lot::Mutex`] that only the first
/// observer takes; the result is published through a [`OnceLock`], so reads
/// after initialization never lock.
///
/// `Memoized<T, F>` is `Send + Sync` when `T: Send + Sync` and `F: Send`.
///
/// # Examples
///
/// ```rust
/// use kindred::control::Memoized;
/// use std::sync::Arc;
/// use std::thread;
///
/// let shared = Arc::new(Memoized::new(|| 6 * 7));
/// let handles: Vec<_> = (0..4)
///     .map(|_| {
///         let shared = Arc::clone(&shared);
///         thread::spawn(move || *shared.force())
///     })
///     .collect();
///
/// for handle in handles {
///     assert_eq!(handle.join().ok(), Some(42));
/// }
/// ```
pub struct Memoized<T, F = fn() -> T> {
    value: OnceLock<T>,
    initializer: Mutex<Option<F>>,
}

impl<T, F: FnOnce() -> T> Memoized<T, F> {
    /// Creates an unevaluated value. `initializer` is not called yet.
    #[inline]
    pub fn new(initializer: F) -> Self {
        Self {
            value: OnceLock::new(),
            initializer: Mutex::new(Some(initializer)),
        }
    }

    /// Evaluates the value on first use and returns the cached result.
    ///
    /// # Panics
    ///
    /// - If the value is poisoned.
    /// - If the initializer panics (the value becomes poisoned).
    pub fn force(&self) -> &T {
        match self.try_force() {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Like [`Memoized::force`], but reports poisoning instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns [`MemoizeError::Poisoned`] if an earlier initialization panicked.
    ///
    /// # Panics
    ///
    /// A panic raised by the initializer itself is propagated.
    pub fn try_force(&self) -> Result<&T, MemoizeError> {
        if let Some(value) = self.value.get() {
            return Ok(value);
        }
        let mut gate = self.initializer.lock();
        // Another thread may have finished while this one waited on the gate.
        if let Some(value) = self.value.get() {
            return Ok(value);
        }
        let pending = gate.take().ok_or(MemoizeError::Poisoned)?;
        let value = self.value.get_or_init(pending);
        drop(gate);
        Ok(value)
    }
}

impl<T, F> Memoized<T, F> {
    /// Creates an already evaluated value.
    pub fn evaluated(value: T) -> Self {
        Self {
            value: OnceLock::from(value),
            initializer: Mutex::new(None),
        }
    }

    /// Returns the cached value without evaluating.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        self.value.get()
    }

    /// Returns whether the value has been computed.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.value.get().is_some()
    }

    /// Returns whether an earlier initialization panicked.
    pub fn is_poisoned(&self) -> bool {
        self.value.get().is_none() && self.initializer.lock().is_none()
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Memoized<T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value.get() {
            Some(value) => formatter.debug_tuple("Memoized").field(value).finish(),
            None if self.is_poisoned() => formatter.write_str("Memoized(<poisoned>)"),
            None => formatter.write_str("Memoized(<unevaluated>)"),
        }
    }
}

/// Wraps a nullary computation so that it runs at most once.
///
/// The returned function is cheap to clone; all clones share the same cache
/// and each call returns a clone of the cached value.
///
/// # Panics
///
/// Calling the returned function panics if `initializer` panicked on an
/// earlier call.
pub fn memoize<T, F>(initializer: F) -> impl Fn() -> T + Clone
where
    T: Clone,
    F: FnOnce() -> T,
{
    let memoized = Arc::new(Memoized::new(initializer));
    move || memoized.force().clone()
}
