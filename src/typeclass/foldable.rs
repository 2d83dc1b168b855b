//! Foldable type class - reducing a structure to a summary value.
//!
//! Folding consumes the structure. Left and right folds visit elements in
//! opposite orders; for an associative operation they agree.
//!
//! # Laws
//!
//! ```text
//! F::reduce(fa, b, f) == F::to_vec(fa).into_iter().fold(b, f)
//! F::fold_map(fa, f) == F::reduce(fa, M::empty(), |m, a| m.combine(f(a)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::{Foldable, OptionBrand, Sum, VecBrand};
//!
//! assert_eq!(VecBrand::reduce(vec![1, 2, 3], 0, |total, n| total + n), 6);
//! assert_eq!(OptionBrand::reduce(None::<i32>, 5, |total, n| total + n), 5);
//! assert_eq!(VecBrand::fold_map(vec![1, 2, 3], Sum), Sum(6));
//! ```

use super::higher::{OptionBrand, ResultBrand, TypeConstructor, VecBrand};
use super::identity::{Identity, IdentityBrand};
use super::monoid::Monoid;

/// A type class for structures that can be folded.
pub trait Foldable: TypeConstructor {
    /// Folds from left to right.
    fn reduce<A, B, F>(fa: Self::Applied<A>, initial: B, function: F) -> B
    where
        A: 'static,
        F: FnMut(B, A) -> B;

    /// Folds from right to left.
    ///
    /// ```rust
    /// use kindred::typeclass::{Foldable, VecBrand};
    ///
    /// let joined = VecBrand::reduce_right(vec![1, 2, 3], String::new(), |n, text| format!("{text}{n}"));
    /// assert_eq!(joined, "321");
    /// ```
    fn reduce_right<A, B, F>(fa: Self::Applied<A>, initial: B, function: F) -> B
    where
        A: 'static,
        F: FnMut(A, B) -> B;

    /// Maps every element into a monoid and combines the results left to right.
    fn fold_map<A, M, F>(fa: Self::Applied<A>, mut function: F) -> M
    where
        A: 'static,
        M: Monoid,
        F: FnMut(A) -> M,
    {
        Self::reduce::<A, M, _>(fa, M::empty(), |accumulated, element| {
            accumulated.combine(function(element))
        })
    }

    /// Counts the elements.
    fn length<A>(fa: Self::Applied<A>) -> usize
    where
        A: 'static,
    {
        Self::reduce::<A, usize, _>(fa, 0, |count, _| count + 1)
    }

    /// Collects the elements in left-to-right order.
    fn to_vec<A>(fa: Self::Applied<A>) -> Vec<A>
    where
        A: 'static,
    {
        Self::reduce::<A, Vec<A>, _>(fa, Vec::new(), |mut collected, element| {
            collected.push(element);
            collected
        })
    }
}

impl Foldable for OptionBrand {
    fn reduce<A, B, F>(fa: Option<A>, initial: B, mut function: F) -> B
    where
        A: 'static,
        F: FnMut(B, A) -> B,
    {
        match fa {
            Some(value) => function(initial, value),
            None => initial,
        }
    }

    fn reduce_right<A, B, F>(fa: Option<A>, initial: B, mut function: F) -> B
    where
        A: 'static,
        F: FnMut(A, B) -> B,
    {
        match fa {
            Some(value) => function(value, initial),
            None => initial,
        }
    }
}

/// `Err` folds like an empty structure.
impl<E: 'static> Foldable for ResultBrand<E> {
    fn reduce<A, B, F>(fa: Result<A, E>, initial: B, mut function: F) -> B
    where
        A: 'static,
        F: FnMut(B, A) -> B,
    {
        match fa {
            Ok(value) => function(initial, value),
            Err(_) => initial,
        }
    }

    fn reduce_right<A, B, F>(fa: Result<A, E>, initial: B, mut function: F) -> B
    where
        A: 'static,
        F: FnMut(A, B) -> B,
    {
        match fa {
            Ok(value) => function(value, initial),
            Err(_) => initial,
        }
    }
}

impl Foldable for VecBrand {
    fn reduce<A, B, F>(fa: Vec<A>, initial: B, function: F) -> B
    where
        A: 'static,
        F: FnMut(B, A) -> B,
    {
        fa.into_iter().fold(initial, function)
    }

    fn reduce_right<A, B, F>(fa: Vec<A>, initial: B, mut function: F) -> B
    where
        A: 'static,
        F: FnMut(A, B) -> B,
    {
        fa.into_iter()
            .rev()
            .fold(initial, |accumulated, element| function(element, accumulated))
    }

    fn length<A>(fa: Vec<A>) -> usize
    where
        A: 'static,
    {
        fa.len()
    }

    fn to_vec<A>(fa: Vec<A>) -> Vec<A>
    where
        A: 'static,
    {
        fa
    }
}

impl Foldable for IdentityBrand {
    fn reduce<A, B, F>(fa: Identity<A>, initial: B, mut function: F) -> B
    where
        A: 'static,
        F: FnMut(B, A) -> B,
    {
        function(initial, fa.0)
    }

    fn reduce_right<A, B, F>(fa: Identity<A>, initial: B, mut function: F) -> B
    where
        A: 'static,
        F: FnMut(A, B) -> B,
    {
        function(fa.0, initial)
    }
}
