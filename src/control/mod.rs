//! Evaluation control.
//!
//! - [`Memoized`]: a value computed at most once, safe to share across threads
//! - [`memoize`]: wraps a nullary function in a shared [`Memoized`]

mod memoize;

pub use memoize::{MemoizeError, Memoized, memoize};
