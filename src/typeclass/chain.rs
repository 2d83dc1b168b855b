//! Chainable type class - sequencing computations that depend on earlier results.
//!
//! `Chainable` extends [`Apply`] with `chain` (also known as `flatMap` or
//! `>>=`). The continuation sees the produced value and decides which effect
//! runs next.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! chain(chain(fa, afb), bfc) == chain(fa, |a| chain(afb(a), bfc))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::{Chainable, OptionBrand};
//!
//! let parsed = OptionBrand::chain(Some("42"), |text: &str| text.parse::<i32>().ok());
//! assert_eq!(parsed, Some(42));
//!
//! let missing = OptionBrand::chain(Some("x"), |text: &str| text.parse::<i32>().ok());
//! assert_eq!(missing, None);
//! ```

use std::rc::Rc;

use super::apply::Apply;
use super::higher::{OptionBrand, ResultBrand, VecBrand};
use super::identity::{Identity, IdentityBrand};

/// A type class for contexts whose computations can be chained.
pub trait Chainable: Apply {
    /// Runs `function` on the value(s) of `fa` and flattens the result.
    ///
    /// Contexts that carry no value (`None`, `Err`, an empty `Vec`) never
    /// invoke the continuation.
    fn chain<A, B, F>(fa: Self::Applied<A>, function: F) -> Self::Applied<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> Self::Applied<B> + 'static;

    /// Runs a dependent effect for its effect only and keeps the original value.
    ///
    /// `function` is invoked exactly once per produced value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::{Chainable, ResultBrand};
    ///
    /// let validate = |n: i32| if n > 0 { Ok(()) } else { Err("not positive") };
    /// assert_eq!(ResultBrand::<&str>::chain_first(Ok(5), validate), Ok(5));
    /// assert_eq!(ResultBrand::<&str>::chain_first(Ok(-1), validate), Err("not positive"));
    /// ```
    fn chain_first<A, B, F>(fa: Self::Applied<A>, function: F) -> Self::Applied<A>
    where
        A: Clone + 'static,
        B: 'static,
        F: Fn(A) -> Self::Applied<B> + 'static,
    {
        let function = Rc::new(function);
        Self::chain::<A, A, _>(fa, move |a: A| {
            let kept = a.clone();
            Self::map::<B, A, _>(function(a), move |_| kept.clone())
        })
    }

    /// Removes one layer of nesting.
    #[inline]
    fn flatten<A>(ffa: Self::Applied<Self::Applied<A>>) -> Self::Applied<A>
    where
        A: 'static,
    {
        Self::chain::<Self::Applied<A>, A, _>(ffa, |inner| inner)
    }
}

impl Chainable for OptionBrand {
    #[inline]
    fn chain<A, B, F>(fa: Option<A>, function: F) -> Option<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> Option<B> + 'static,
    {
        fa.and_then(function)
    }
}

impl<E: 'static> Chainable for ResultBrand<E> {
    #[inline]
    fn chain<A, B, F>(fa: Result<A, E>, function: F) -> Result<B, E>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> Result<B, E> + 'static,
    {
        fa.and_then(function)
    }
}

impl Chainable for VecBrand {
    fn chain<A, B, F>(fa: Vec<A>, function: F) -> Vec<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> Vec<B> + 'static,
    {
        fa.into_iter().flat_map(function).collect()
    }
}

impl Chainable for IdentityBrand {
    #[inline]
    fn chain<A, B, F>(fa: Identity<A>, function: F) -> Identity<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> Identity<B> + 'static,
    {
        function(fa.0)
    }
}
