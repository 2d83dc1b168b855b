//! The I, K and C combinators.

/// Returns its argument unchanged.
///
/// This is the function the functor identity law maps with.
///
/// ```rust
/// use kindred::compose::identity;
/// use kindred::typeclass::{Functor, VecBrand};
///
/// assert_eq!(VecBrand::map(vec![1, 2], identity), vec![1, 2]);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Returns a function that ignores its input and yields `value`.
///
/// ```rust
/// use kindred::compose::constant;
/// use kindred::typeclass::{Functor, OptionBrand};
///
/// assert_eq!(OptionBrand::map(Some("ignored"), constant(7)), Some(7));
/// ```
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the two arguments of a binary function.
///
/// Handy for adapting a value-first function into a do-notation setter,
/// which takes the context first.
///
/// ```rust
/// use kindred::combinator::let_to;
/// use kindred::compose::flip;
/// use kindred::typeclass::OptionBrand;
///
/// fn prepend(item: char, mut items: Vec<char>) -> Vec<char> {
///     items.insert(0, item);
///     items
/// }
///
/// let step = let_to::<OptionBrand, _, _, _, _>(flip(prepend), 'a');
/// assert_eq!(step(Some(vec!['b'])), Some(vec!['a', 'b']));
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second, first| function(first, second)
}
