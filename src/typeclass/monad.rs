//! Monad type class - `Applicative` together with `Chainable`.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! chain(of(a), f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! chain(m, of) == m
//! ```
//!
//! Associativity is inherited from [`Chainable`](super::Chainable).
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::{Chainable, Monad, OptionBrand, Pointed};
//!
//! fn halve<F: Monad>(value: F::Applied<i32>) -> F::Applied<i32> {
//!     F::chain::<i32, i32, _>(value, |n: i32| F::of(n / 2))
//! }
//!
//! assert_eq!(halve::<OptionBrand>(Some(10)), Some(5));
//! ```

use super::applicative::Applicative;
use super::chain::Chainable;

/// A type class for contexts that sequence dependent computations.
///
/// Blanket-implemented for every [`Applicative`] that is also [`Chainable`].
pub trait Monad: Applicative + Chainable {}

impl<F: Applicative + Chainable> Monad for F {}
