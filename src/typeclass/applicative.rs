//! Applicative type class - `Apply` together with `Pointed`.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! ap(of(|x| x), fa) == fa
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! ap(of(f), of(a)) == of(f(a))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! ap(fab, of(a)) == ap(of(|f| f(a)), fab)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::{function, Applicative, Apply, OptionBrand, Pointed};
//!
//! fn lift_sum<F: Applicative>(left: i32, right: i32) -> F::Applied<i32> {
//!     F::map2(F::of(left), F::of(right), |a: i32, b: i32| a + b)
//! }
//!
//! assert_eq!(lift_sum::<OptionBrand>(1, 2), Some(3));
//! assert_eq!(OptionBrand::ap(OptionBrand::of(function(|n: i32| n + 1)), Some(1)), Some(2));
//! ```

use super::apply::Apply;
use super::pointed::Pointed;

/// A type class for contexts with both `ap` and `of`.
///
/// There is nothing to implement: every brand that is both [`Apply`] and
/// [`Pointed`] is `Applicative`.
pub trait Applicative: Apply + Pointed {}

impl<F: Apply + Pointed> Applicative for F {}
