//! `EitherT` - the Either monad transformer.
//!
//! `EitherT<F, E>` is the brand of "`F` of `Result<_, E>`": for any monad `F`
//! it adds a failure channel `E` on top of `F`'s own effect.
//! `<EitherT<F, E> as TypeConstructor>::Applied<A>` is exactly
//! `F::Applied<Result<A, E>>`, so values are plain `F` values and no wrapper
//! has to be unpacked to run them.
//!
//! `chain` short-circuits: once an `Err` is produced, later continuations are
//! never invoked, while `F`'s effect up to that point still happens.
//!
//! # Examples
//!
//! ```rust
//! use kindred::effect::{IO, IOBrand};
//! use kindred::transformer::{either_t, EitherT};
//! use kindred::typeclass::Chainable;
//!
//! type Task = EitherT<IOBrand, String>;
//!
//! let parsed = Task::chain(either_t::right::<IOBrand, String, _>("42"), |text: &str| {
//!     either_t::from_either::<IOBrand, _, _>(text.parse::<i32>().map_err(|error| error.to_string()))
//! });
//! assert_eq!(parsed.run_unsafe(), Ok(42));
//!
//! let failed = Task::chain(either_t::left::<IOBrand, String, i32>("boom".into()), |n: i32| {
//!     either_t::right::<IOBrand, String, _>(n + 1)
//! });
//! assert_eq!(failed.run_unsafe(), Err("boom".to_string()));
//! ```

use std::marker::PhantomData;
use std::rc::Rc;

use crate::effect::IO;
use crate::typeclass::{Apply, Chainable, FromIO, Function, Functor, Monad, Pointed, TypeConstructor};

/// Brand for `F` of `Result<_, E>`.
///
/// Implements `Pointed`/`Functor`/`Apply`/`Chainable` (hence `Applicative`
/// and `Monad`) whenever `F` does, and `FromIO` whenever `F` does.
pub struct EitherT<F, E>(PhantomData<fn() -> (F, E)>);

impl<F: TypeConstructor, E: 'static> TypeConstructor for EitherT<F, E> {
    type Applied<A: 'static> = F::Applied<Result<A, E>>;
}

impl<F: Pointed + Functor, E: 'static> Pointed for EitherT<F, E> {
    fn of<A>(value: A) -> F::Applied<Result<A, E>>
    where
        A: Clone + 'static,
    {
        right::<F, E, A>(value)
    }
}

impl<F: Functor, E: 'static> Functor for EitherT<F, E> {
    fn map<A, B, G>(fa: F::Applied<Result<A, E>>, function: G) -> F::Applied<Result<B, E>>
    where
        A: 'static,
        B: 'static,
        G: Fn(A) -> B + 'static,
    {
        F::map::<Result<A, E>, Result<B, E>, _>(fa, move |result| result.map(&function))
    }
}

/// When both sides failed, the function side's error wins.
impl<F: Apply, E: Clone + 'static> Apply for EitherT<F, E> {
    fn ap<A, B>(
        fab: F::Applied<Result<Function<A, B>, E>>,
        fa: F::Applied<Result<A, E>>,
    ) -> F::Applied<Result<B, E>>
    where
        A: Clone + 'static,
        B: 'static,
    {
        let lifted = F::map::<Result<Function<A, B>, E>, Function<Result<A, E>, Result<B, E>>, _>(
            fab,
            |function_result: Result<Function<A, B>, E>| -> Function<Result<A, E>, Result<B, E>> {
                Rc::new(move |value_result: Result<A, E>| match (&function_result, value_result) {
                    (Ok(function), Ok(value)) => Ok(function(value)),
                    (Err(error), _) => Err(error.clone()),
                    (Ok(_), Err(error)) => Err(error),
                })
            },
        );
        F::ap::<Result<A, E>, Result<B, E>>(lifted, fa)
    }
}

impl<F: Monad, E: Clone + 'static> Chainable for EitherT<F, E> {
    fn chain<A, B, G>(fa: F::Applied<Result<A, E>>, function: G) -> F::Applied<Result<B, E>>
    where
        A: 'static,
        B: 'static,
        G: Fn(A) -> F::Applied<Result<B, E>> + 'static,
    {
        F::chain::<Result<A, E>, Result<B, E>, _>(fa, move |result| match result {
            Ok(value) => function(value),
            Err(error) => left::<F, E, B>(error),
        })
    }
}

impl<F: FromIO + Functor, E: 'static> FromIO for EitherT<F, E> {
    fn from_io<A>(io: IO<A>) -> F::Applied<Result<A, E>>
    where
        A: 'static,
    {
        right_f::<F, E, A>(F::from_io(io))
    }
}

// =============================================================================
// Constructors
// =============================================================================

/// Lifts a success value.
pub fn right<F, E, A>(value: A) -> F::Applied<Result<A, E>>
where
    F: Pointed + Functor,
    E: 'static,
    A: Clone + 'static,
{
    F::map::<A, Result<A, E>, _>(F::of(value), Ok)
}

/// Lifts a failure value.
pub fn left<F, E, A>(error: E) -> F::Applied<Result<A, E>>
where
    F: Pointed + Functor,
    E: Clone + 'static,
    A: 'static,
{
    F::map::<E, Result<A, E>, _>(F::of(error), Err)
}

/// Lifts an effect that cannot fail.
pub fn right_f<F, E, A>(fa: F::Applied<A>) -> F::Applied<Result<A, E>>
where
    F: Functor,
    E: 'static,
    A: 'static,
{
    F::map::<A, Result<A, E>, _>(fa, Ok)
}

/// Lifts an effect that produces an error.
pub fn left_f<F, E, A>(fe: F::Applied<E>) -> F::Applied<Result<A, E>>
where
    F: Functor,
    E: 'static,
    A: 'static,
{
    F::map::<E, Result<A, E>, _>(fe, Err)
}

/// Lifts a plain `Result`.
pub fn from_either<F, E, A>(result: Result<A, E>) -> F::Applied<Result<A, E>>
where
    F: Pointed + Functor,
    E: Clone + 'static,
    A: Clone + 'static,
{
    match result {
        Ok(value) => right::<F, E, A>(value),
        Err(error) => left::<F, E, A>(error),
    }
}

/// Lifts an `Option`, producing the error with `on_none` when it is `None`.
pub fn from_option<F, E, A, N>(option: Option<A>, on_none: N) -> F::Applied<Result<A, E>>
where
    F: Pointed + Functor,
    E: Clone + 'static,
    A: Clone + 'static,
    N: FnOnce() -> E,
{
    from_either::<F, E, A>(option.ok_or_else(on_none))
}

// =============================================================================
// Eliminators
// =============================================================================

/// Folds both channels into a single effect.
pub fn fold<F, E, A, B, L, R>(fa: F::Applied<Result<A, E>>, on_left: L, on_right: R) -> F::Applied<B>
where
    F: Chainable,
    E: 'static,
    A: 'static,
    B: 'static,
    L: Fn(E) -> F::Applied<B> + 'static,
    R: Fn(A) -> F::Applied<B> + 'static,
{
    F::chain::<Result<A, E>, B, _>(fa, move |result| match result {
        Ok(value) => on_right(value),
        Err(error) => on_left(error),
    })
}

/// Recovers from failure with an effect producing a fallback value.
pub fn get_or_else<F, E, A, L>(fa: F::Applied<Result<A, E>>, on_left: L) -> F::Applied<A>
where
    F: Monad,
    E: 'static,
    A: Clone + 'static,
    L: Fn(E) -> F::Applied<A> + 'static,
{
    fold::<F, E, A, A, _, _>(fa, on_left, |value| F::of(value))
}

// =============================================================================
// Error channel
// =============================================================================

/// Evaluates `second` only when `first` failed.
///
/// `second` is a thunk so the alternative is built lazily; a successful
/// `first` never constructs it.
pub fn alt<F, E, A, S>(first: F::Applied<Result<A, E>>, second: S) -> F::Applied<Result<A, E>>
where
    F: Monad,
    E: 'static,
    A: Clone + 'static,
    S: Fn() -> F::Applied<Result<A, E>> + 'static,
{
    F::chain::<Result<A, E>, Result<A, E>, _>(first, move |result| match result {
        Ok(value) => right::<F, E, A>(value),
        Err(_) => second(),
    })
}

/// Transforms the error.
pub fn map_left<F, E, G, A, L>(fa: F::Applied<Result<A, E>>, function: L) -> F::Applied<Result<A, G>>
where
    F: Functor,
    E: 'static,
    G: 'static,
    A: 'static,
    L: Fn(E) -> G + 'static,
{
    F::map::<Result<A, E>, Result<A, G>, _>(fa, move |result| result.map_err(&function))
}

/// Transforms both channels.
pub fn bimap<F, E, G, A, B, L, R>(
    fa: F::Applied<Result<A, E>>,
    on_left: L,
    on_right: R,
) -> F::Applied<Result<B, G>>
where
    F: Functor,
    E: 'static,
    G: 'static,
    A: 'static,
    B: 'static,
    L: Fn(E) -> G + 'static,
    R: Fn(A) -> B + 'static,
{
    F::map::<Result<A, E>, Result<B, G>, _>(fa, move |result| match result {
        Ok(value) => Ok(on_right(value)),
        Err(error) => Err(on_left(error)),
    })
}

/// Continues a failed computation with `function`; success passes through.
pub fn chain_left<F, E, G, A, L>(fa: F::Applied<Result<A, E>>, function: L) -> F::Applied<Result<A, G>>
where
    F: Monad,
    E: 'static,
    G: 'static,
    A: Clone + 'static,
    L: Fn(E) -> F::Applied<Result<A, G>> + 'static,
{
    F::chain::<Result<A, E>, Result<A, G>, _>(fa, move |result| match result {
        Ok(value) => right::<F, G, A>(value),
        Err(error) => function(error),
    })
}

/// Alias of [`chain_left`].
#[inline]
pub fn or_else<F, E, G, A, L>(fa: F::Applied<Result<A, E>>, function: L) -> F::Applied<Result<A, G>>
where
    F: Monad,
    E: 'static,
    G: 'static,
    A: Clone + 'static,
    L: Fn(E) -> F::Applied<Result<A, G>> + 'static,
{
    chain_left::<F, E, G, A, L>(fa, function)
}

/// Replaces the error with one computed by an effect that cannot fail.
pub fn or_left<F, E, G, A, L>(fa: F::Applied<Result<A, E>>, function: L) -> F::Applied<Result<A, G>>
where
    F: Monad,
    E: 'static,
    G: 'static,
    A: Clone + 'static,
    L: Fn(E) -> F::Applied<G> + 'static,
{
    chain_left::<F, E, G, A, _>(fa, move |error| left_f::<F, G, A>(function(error)))
}

/// Runs `function` on the error for its effect.
///
/// If `function` fails with `e2` the result is `Err(e2)`; otherwise the
/// original error is kept. Successes pass through without calling `function`.
pub fn chain_first_left<F, E, A, B, L>(fa: F::Applied<Result<A, E>>, function: L) -> F::Applied<Result<A, E>>
where
    F: Monad,
    E: Clone + 'static,
    A: Clone + 'static,
    B: 'static,
    L: Fn(E) -> F::Applied<Result<B, E>> + 'static,
{
    chain_left::<F, E, E, A, _>(fa, move |error| {
        let original = error.clone();
        F::map::<Result<B, E>, Result<A, E>, _>(function(error), move |outcome| match outcome {
            Ok(_) => Err(original.clone()),
            Err(replacement) => Err(replacement),
        })
    })
}

/// Exchanges the channels.
pub fn swap<F, E, A>(fa: F::Applied<Result<A, E>>) -> F::Applied<Result<E, A>>
where
    F: Functor,
    E: 'static,
    A: 'static,
{
    F::map::<Result<A, E>, Result<E, A>, _>(fa, |result| match result {
        Ok(value) => Err(value),
        Err(error) => Ok(error),
    })
}

/// Chains a pure, fallible step.
pub fn chain_either_k<F, E, A, B, K>(fa: F::Applied<Result<A, E>>, function: K) -> F::Applied<Result<B, E>>
where
    F: Functor,
    E: 'static,
    A: 'static,
    B: 'static,
    K: Fn(A) -> Result<B, E> + 'static,
{
    F::map::<Result<A, E>, Result<B, E>, _>(fa, move |result| result.and_then(&function))
}
