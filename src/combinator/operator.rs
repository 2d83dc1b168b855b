//! Curried combinators.
//!
//! Each function here takes the "configuration" argument first and returns
//! an operator `F::Applied<X> -> F::Applied<Y>`, so steps can be lined up
//! with [`pipe!`](crate::pipe). The brand cannot be inferred from a closure,
//! so it is named with a turbofish.
//!
//! ```rust
//! use kindred::combinator::{chain, map};
//! use kindred::pipe;
//! use kindred::typeclass::OptionBrand;
//!
//! let result = pipe!(
//!     Some(4),
//!     map::<OptionBrand, _, _, _>(|n: i32| n * 10),
//!     chain::<OptionBrand, _, _, _>(|n: i32| (n > 20).then_some(n))
//! );
//! assert_eq!(result, Some(40));
//! ```

use std::rc::Rc;

use crate::typeclass::{Apply, Chainable, Function, Functor};

/// Curried [`Functor::map`].
pub fn map<F, A, B, G>(function: G) -> impl Fn(F::Applied<A>) -> F::Applied<B>
where
    F: Functor,
    A: 'static,
    B: 'static,
    G: Fn(A) -> B + 'static,
{
    let function = Rc::new(function);
    move |fa: F::Applied<A>| {
        let function = Rc::clone(&function);
        F::map::<A, B, _>(fa, move |a| function(a))
    }
}

/// Curried [`Chainable::chain`].
pub fn chain<F, A, B, G>(function: G) -> impl Fn(F::Applied<A>) -> F::Applied<B>
where
    F: Chainable,
    A: 'static,
    B: 'static,
    G: Fn(A) -> F::Applied<B> + 'static,
{
    let function = Rc::new(function);
    move |fa: F::Applied<A>| {
        let function = Rc::clone(&function);
        F::chain::<A, B, _>(fa, move |a| function(a))
    }
}

/// Curried [`Apply::ap`]: fixes the argument and waits for the functions.
pub fn ap<F, A, B>(fa: F::Applied<A>) -> impl Fn(F::Applied<Function<A, B>>) -> F::Applied<B>
where
    F: Apply,
    A: Clone + 'static,
    B: 'static,
    F::Applied<A>: Clone,
{
    move |fab: F::Applied<Function<A, B>>| F::ap::<A, B>(fab, fa.clone())
}

/// Curried [`Chainable::chain_first`].
///
/// ```rust
/// use kindred::combinator::chain_first;
/// use kindred::typeclass::ResultBrand;
///
/// let non_zero = chain_first::<ResultBrand<&str>, _, _, _>(|n: i32| {
///     if n == 0 { Err("zero") } else { Ok(()) }
/// });
/// assert_eq!(non_zero(Ok(3)), Ok(3));
/// assert_eq!(non_zero(Ok(0)), Err("zero"));
/// ```
pub fn chain_first<F, A, B, G>(function: G) -> impl Fn(F::Applied<A>) -> F::Applied<A>
where
    F: Chainable,
    A: Clone + 'static,
    B: 'static,
    G: Fn(A) -> F::Applied<B> + 'static,
{
    let function = Rc::new(function);
    move |fa: F::Applied<A>| {
        let function = Rc::clone(&function);
        F::chain_first::<A, B, _>(fa, move |a| function(a))
    }
}

/// Curried [`Functor::flap`]: fixes the argument handed to every function.
pub fn flap<F, A, B>(value: A) -> impl Fn(F::Applied<Function<A, B>>) -> F::Applied<B>
where
    F: Functor,
    A: Clone + 'static,
    B: 'static,
{
    move |fab: F::Applied<Function<A, B>>| F::flap::<A, B>(value.clone(), fab)
}

/// Boxes a curried operator into a shareable [`Operator`](crate::typeclass::Operator).
pub fn into_operator<F, A, B, O>(operator: O) -> crate::typeclass::Operator<F, A, B>
where
    F: crate::typeclass::TypeConstructor,
    A: 'static,
    B: 'static,
    O: Fn(F::Applied<A>) -> F::Applied<B> + 'static,
{
    Rc::new(operator)
}
