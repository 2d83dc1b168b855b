//! Functor type class - mapping over container values.
//!
//! A `Functor` transforms the value(s) inside a context without changing the
//! context's shape.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! F::map(fa, |x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! F::map(fa, |x| g(f(x))) == F::map(F::map(fa, f), g)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::{Functor, OptionBrand, VecBrand};
//!
//! let transformed = OptionBrand::map(Some(5), |n: i32| n.to_string());
//! assert_eq!(transformed, Some("5".to_string()));
//!
//! let doubled = VecBrand::map(vec![1, 2, 3], |n: i32| n * 2);
//! assert_eq!(doubled, vec![2, 4, 6]);
//! ```

use super::higher::{Function, OptionBrand, ResultBrand, TypeConstructor, VecBrand};
use super::identity::{Identity, IdentityBrand};

/// A type class for contexts whose contents can be mapped.
///
/// This is the uncurried form (`MonadMap`): the effectful value comes first.
/// The curried, pipeline-friendly form is [`crate::combinator::map`].
///
/// # Laws
///
/// ```text
/// F::map(fa, |x| x) == fa
/// F::map(fa, |x| g(f(x))) == F::map(F::map(fa, f), g)
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value(s) inside the context.
    ///
    /// The function is `Fn` so that multi-element and re-runnable contexts
    /// can invoke it as often as they need.
    fn map<A, B, F>(fa: Self::Applied<A>, function: F) -> Self::Applied<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static;

    /// Applies a fixed value to function(s) living inside the context.
    ///
    /// This is `map` with the arguments flipped: `flap(a, fab)` maps
    /// `|g| g(a)` over `fab`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::{function, Functor, VecBrand};
    ///
    /// let functions = vec![function(|n: i32| n + 1), function(|n: i32| n * 10)];
    /// assert_eq!(VecBrand::flap(3, functions), vec![4, 30]);
    /// ```
    #[inline]
    fn flap<A, B>(value: A, fab: Self::Applied<Function<A, B>>) -> Self::Applied<B>
    where
        A: Clone + 'static,
        B: 'static,
    {
        Self::map::<Function<A, B>, B, _>(fab, move |function| function(value.clone()))
    }

    /// Replaces the value(s) inside the context with a constant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::{Functor, OptionBrand};
    ///
    /// assert_eq!(OptionBrand::replace(Some(5), "replaced"), Some("replaced"));
    /// assert_eq!(OptionBrand::replace(None::<i32>, "replaced"), None);
    /// ```
    #[inline]
    fn replace<A, B>(fa: Self::Applied<A>, value: B) -> Self::Applied<B>
    where
        A: 'static,
        B: Clone + 'static,
    {
        Self::map::<A, B, _>(fa, move |_| value.clone())
    }

    /// Discards the value(s), keeping only the shape.
    #[inline]
    fn void<A>(fa: Self::Applied<A>) -> Self::Applied<()>
    where
        A: 'static,
    {
        Self::replace(fa, ())
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl Functor for OptionBrand {
    #[inline]
    fn map<A, B, F>(fa: Option<A>, function: F) -> Option<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        fa.map(function)
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<E: 'static> Functor for ResultBrand<E> {
    #[inline]
    fn map<A, B, F>(fa: Result<A, E>, function: F) -> Result<B, E>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        fa.map(function)
    }
}

// =============================================================================
// Vec<T> Implementation
// =============================================================================

impl Functor for VecBrand {
    #[inline]
    fn map<A, B, F>(fa: Vec<A>, function: F) -> Vec<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        fa.into_iter().map(function).collect()
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl Functor for IdentityBrand {
    #[inline]
    fn map<A, B, F>(fa: Identity<A>, function: F) -> Identity<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        Identity(function(fa.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::function;
    use rstest::rstest;

    #[rstest]
    fn option_map_some() {
        assert_eq!(OptionBrand::map(Some(5), |n: i32| n.to_string()), Some("5".to_string()));
    }

    #[rstest]
    fn option_map_none_does_not_call_function() {
        let result = OptionBrand::map(None::<i32>, |_| -> i32 { unreachable!("not called") });
        assert_eq!(result, None);
    }

    #[rstest]
    fn result_map_err_is_preserved() {
        let failed: Result<i32, &str> = Err("error");
        assert_eq!(ResultBrand::<&str>::map(failed, |n| n + 1), Err("error"));
    }

    #[rstest]
    fn vec_map_transforms_every_element() {
        assert_eq!(VecBrand::map(vec![1, 2, 3], |n: i32| n * 2), vec![2, 4, 6]);
    }

    #[rstest]
    fn vec_map_empty() {
        assert!(VecBrand::map(Vec::<i32>::new(), |n| n + 1).is_empty());
    }

    #[rstest]
    fn identity_map_transforms_value() {
        assert_eq!(IdentityBrand::map(Identity(20), |n: i32| n + 1), Identity(21));
    }

    #[rstest]
    fn flap_applies_value_to_each_function() {
        let functions = Some(function(|n: i32| n * 3));
        assert_eq!(OptionBrand::flap(4, functions), Some(12));
    }

    #[rstest]
    fn flap_matches_mapping_application() {
        let make = || vec![function(|n: i32| n + 1), function(|n: i32| n - 1)];
        let flapped = VecBrand::flap(10, make());
        let mapped = VecBrand::map(make(), |g: Function<i32, i32>| g(10));
        assert_eq!(flapped, mapped);
    }

    #[rstest]
    fn void_keeps_shape() {
        assert_eq!(VecBrand::void(vec![1, 2]), vec![(), ()]);
        assert_eq!(OptionBrand::void(None::<i32>), None);
    }

    #[rstest]
    #[case(Some(42))]
    #[case(None)]
    fn option_identity_law(#[case] value: Option<i32>) {
        assert_eq!(OptionBrand::map(value, |x| x), value);
    }

    #[rstest]
    fn vec_composition_law() {
        let first = |n: i32| n + 1;
        let second = |n: i32| n * 2;
        let left = VecBrand::map(VecBrand::map(vec![1, 2, 3], first), second);
        let right = VecBrand::map(vec![1, 2, 3], move |x| second(first(x)));
        assert_eq!(left, right);
        assert_eq!(left, vec![4, 6, 8]);
    }
}
