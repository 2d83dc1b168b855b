//! `FromIO` type class - lifting an [`IO`] action into another effect.
//!
//! Any effect stack that has `IO` at its base can embed an `IO` action without
//! knowing how the rest of the stack is built. Transformers get an instance
//! whenever the effect they wrap has one.
//!
//! # Examples
//!
//! ```rust
//! use kindred::effect::{IO, IOBrand};
//! use kindred::transformer::EitherT;
//! use kindred::typeclass::FromIO;
//!
//! let lifted = EitherT::<IOBrand, String>::from_io(IO::pure(5));
//! assert_eq!(lifted.run_unsafe(), Ok(5));
//! ```

use super::chain::Chainable;
use super::higher::TypeConstructor;
use crate::effect::IO;

/// A type class for effects that can embed an [`IO`] action.
pub trait FromIO: TypeConstructor {
    /// Lifts `io` into this effect. The action is not run by lifting.
    fn from_io<A>(io: IO<A>) -> Self::Applied<A>
    where
        A: 'static;

    /// Chains an `IO`-producing continuation, lifting its result.
    ///
    /// ```rust
    /// use kindred::effect::{IO, IOBrand};
    /// use kindred::typeclass::FromIO;
    ///
    /// let doubled = IOBrand::chain_io_k(IO::pure(21), |n: i32| IO::pure(n * 2));
    /// assert_eq!(doubled.run_unsafe(), 42);
    /// ```
    fn chain_io_k<A, B, F>(fa: Self::Applied<A>, function: F) -> Self::Applied<B>
    where
        Self: Chainable,
        A: 'static,
        B: 'static,
        F: Fn(A) -> IO<B> + 'static,
    {
        Self::chain::<A, B, _>(fa, move |a| Self::from_io(function(a)))
    }
}
