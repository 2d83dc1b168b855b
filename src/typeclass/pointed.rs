//! Pointed type class - injecting a pure value into a context.
//!
//! `Pointed` is the smallest piece of the applicative tower: it only knows how
//! to place a value inside the context, with no effect. It is also the unit
//! that the monad identity laws are stated against.
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::{OptionBrand, Pointed, VecBrand};
//!
//! assert_eq!(OptionBrand::of(42), Some(42));
//! assert_eq!(VecBrand::of("a"), vec!["a"]);
//! ```

use super::higher::{OptionBrand, ResultBrand, TypeConstructor, VecBrand};
use super::identity::{Identity, IdentityBrand};

/// A type class for contexts that can hold a pure value.
///
/// # Laws
///
/// `of` must be referentially transparent: calling it twice with equal inputs
/// produces equal outputs. The applicative and monad laws depend on it.
pub trait Pointed: TypeConstructor {
    /// Lifts a pure value into the context.
    ///
    /// `A: Clone` is required because re-runnable effects (`IO`, `ReaderT`)
    /// hand out the value every time they are run.
    fn of<A>(value: A) -> Self::Applied<A>
    where
        A: Clone + 'static;
}

impl Pointed for OptionBrand {
    #[inline]
    fn of<A>(value: A) -> Option<A>
    where
        A: Clone + 'static,
    {
        Some(value)
    }
}

impl<E: 'static> Pointed for ResultBrand<E> {
    #[inline]
    fn of<A>(value: A) -> Result<A, E>
    where
        A: Clone + 'static,
    {
        Ok(value)
    }
}

impl Pointed for VecBrand {
    #[inline]
    fn of<A>(value: A) -> Vec<A>
    where
        A: Clone + 'static,
    {
        vec![value]
    }
}

impl Pointed for IdentityBrand {
    #[inline]
    fn of<A>(value: A) -> Identity<A>
    where
        A: Clone + 'static,
    {
        Identity(value)
    }
}
