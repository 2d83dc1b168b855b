//! Apply type class - applying functions that live inside a context.
//!
//! `Apply` extends [`Functor`] with `ap`, which combines a context holding
//! function(s) with a context holding argument(s). Unlike `chain`, neither
//! side can observe the other's value, so independent computations can be
//! combined.
//!
//! # Laws
//!
//! ## Associative Composition
//!
//! ```text
//! ap(ap(map(fbc, compose), fab), fa) == ap(fbc, ap(fab, fa))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::{function, Apply, OptionBrand};
//!
//! let increment = Some(function(|n: i32| n + 1));
//! assert_eq!(OptionBrand::ap(increment, Some(41)), Some(42));
//!
//! let sum = OptionBrand::map2(Some(1), Some(2), |a, b| a + b);
//! assert_eq!(sum, Some(3));
//! ```

use std::rc::Rc;

use super::functor::Functor;
use super::higher::{Function, OptionBrand, ResultBrand, VecBrand};
use super::identity::{Identity, IdentityBrand};

/// A type class for contexts that can apply wrapped functions.
///
/// `ap` takes the function container first (the uncurried `MonadAp` shape);
/// the curried form taking the argument first is [`crate::combinator::ap`].
pub trait Apply: Functor {
    /// Applies the function(s) in `fab` to the value(s) in `fa`.
    ///
    /// `A: Clone` lets multi-element contexts feed one argument to several
    /// functions.
    fn ap<A, B>(fab: Self::Applied<Function<A, B>>, fa: Self::Applied<A>) -> Self::Applied<B>
    where
        A: Clone + 'static,
        B: 'static;

    /// Combines two independent values with a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::{Apply, VecBrand};
    ///
    /// let pairs = VecBrand::map2(vec![1, 2], vec![10, 20], |a, b| a + b);
    /// assert_eq!(pairs, vec![11, 21, 12, 22]);
    /// ```
    fn map2<A, B, C, F>(fa: Self::Applied<A>, fb: Self::Applied<B>, function: F) -> Self::Applied<C>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: 'static,
        F: Fn(A, B) -> C + 'static,
    {
        let function = Rc::new(function);
        let partially_applied = Self::map::<A, Function<B, C>, _>(fa, move |a| -> Function<B, C> {
            let function = Rc::clone(&function);
            Rc::new(move |b: B| function(a.clone(), b))
        });
        Self::ap::<B, C>(partially_applied, fb)
    }

    /// Sequences two contexts and keeps the first value.
    #[inline]
    fn ap_first<A, B>(first: Self::Applied<A>, second: Self::Applied<B>) -> Self::Applied<A>
    where
        A: Clone + 'static,
        B: Clone + 'static,
    {
        Self::map2::<A, B, A, _>(first, second, |a, _| a)
    }

    /// Sequences two contexts and keeps the second value.
    #[inline]
    fn ap_second<A, B>(first: Self::Applied<A>, second: Self::Applied<B>) -> Self::Applied<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
    {
        Self::map2::<A, B, B, _>(first, second, |_, b| b)
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl Apply for OptionBrand {
    #[inline]
    fn ap<A, B>(fab: Option<Function<A, B>>, fa: Option<A>) -> Option<B>
    where
        A: Clone + 'static,
        B: 'static,
    {
        match (fab, fa) {
            (Some(function), Some(value)) => Some(function(value)),
            _ => None,
        }
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<E: 'static> Apply for ResultBrand<E> {
    /// The function side's error wins when both sides failed.
    #[inline]
    fn ap<A, B>(fab: Result<Function<A, B>, E>, fa: Result<A, E>) -> Result<B, E>
    where
        A: Clone + 'static,
        B: 'static,
    {
        match (fab, fa) {
            (Ok(function), Ok(value)) => Ok(function(value)),
            (Err(error), _) | (_, Err(error)) => Err(error),
        }
    }
}

// =============================================================================
// Vec<A> Implementation
//
// Vec's Apply is the cartesian product: every function is applied to every
// argument, functions in the outer loop.
// =============================================================================

impl Apply for VecBrand {
    fn ap<A, B>(fab: Vec<Function<A, B>>, fa: Vec<A>) -> Vec<B>
    where
        A: Clone + 'static,
        B: 'static,
    {
        let mut result = Vec::with_capacity(fab.len().saturating_mul(fa.len()));
        for function in &fab {
            for value in &fa {
                result.push(function(value.clone()));
            }
        }
        result
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl Apply for IdentityBrand {
    #[inline]
    fn ap<A, B>(fab: Identity<Function<A, B>>, fa: Identity<A>) -> Identity<B>
    where
        A: Clone + 'static,
        B: 'static,
    {
        Identity((fab.0)(fa.0))
    }
}
