//! `ReaderT` - the Reader monad transformer.
//!
//! `ReaderT<R, M>` wraps a function `R -> M`: given an environment it
//! produces an inner effect `M`. Its brand [`ReaderTBrand<R, F>`] makes it a
//! monad for any monad `F`, threading the same environment to every step.
//!
//! # Examples
//!
//! ```rust
//! use kindred::transformer::{reader_t, ReaderT, ReaderTBrand};
//! use kindred::typeclass::{Chainable, OptionBrand};
//!
//! #[derive(Clone)]
//! struct Config {
//!     port: u16,
//! }
//!
//! type App<A> = ReaderT<Config, Option<A>>;
//!
//! let port: App<u16> = reader_t::asks::<Config, OptionBrand, _, _>(|config: Config| config.port);
//! let checked: App<u16> = ReaderTBrand::<Config, OptionBrand>::chain(port, |port: u16| {
//!     ReaderT::new(move |_| (port > 1024).then_some(port))
//! });
//!
//! assert_eq!(checked.run(Config { port: 8080 }), Some(8080));
//! assert_eq!(checked.run(Config { port: 80 }), None);
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::effect::{IO, Reader};
use crate::typeclass::{
    Apply, Chainable, FromIO, Function, Functor, Pointed, TypeConstructor,
};

/// A computation reading an environment `R` and producing the effect `M`.
///
/// Cloning shares the underlying function.
pub struct ReaderT<R, M> {
    run_function: Rc<dyn Fn(R) -> M>,
}

impl<R, M> Clone for ReaderT<R, M> {
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<R, M> fmt::Debug for ReaderT<R, M> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("ReaderT(<function>)")
    }
}

impl<R: 'static, M: 'static> ReaderT<R, M> {
    /// Creates a `ReaderT` from a function of the environment.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(R) -> M + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Runs the computation with `environment`. Can be run any number of times.
    #[inline]
    pub fn run(&self, environment: R) -> M {
        (self.run_function)(environment)
    }
}

/// Brand for `ReaderT<R, F::Applied<_>>`.
pub struct ReaderTBrand<R, F>(PhantomData<fn() -> (R, F)>);

impl<R: 'static, F: TypeConstructor> TypeConstructor for ReaderTBrand<R, F> {
    type Applied<A: 'static> = ReaderT<R, F::Applied<A>>;
}

impl<R: 'static, F: Pointed> Pointed for ReaderTBrand<R, F> {
    fn of<A>(value: A) -> ReaderT<R, F::Applied<A>>
    where
        A: Clone + 'static,
    {
        ReaderT::new(move |_| F::of(value.clone()))
    }
}

impl<R: 'static, F: Functor> Functor for ReaderTBrand<R, F> {
    fn map<A, B, G>(fa: ReaderT<R, F::Applied<A>>, function: G) -> ReaderT<R, F::Applied<B>>
    where
        A: 'static,
        B: 'static,
        G: Fn(A) -> B + 'static,
    {
        let function = Rc::new(function);
        ReaderT::new(move |environment| {
            let function = Rc::clone(&function);
            F::map::<A, B, _>(fa.run(environment), move |a| function(a))
        })
    }
}

impl<R: Clone + 'static, F: Apply> Apply for ReaderTBrand<R, F> {
    fn ap<A, B>(
        fab: ReaderT<R, F::Applied<Function<A, B>>>,
        fa: ReaderT<R, F::Applied<A>>,
    ) -> ReaderT<R, F::Applied<B>>
    where
        A: Clone + 'static,
        B: 'static,
    {
        ReaderT::new(move |environment: R| {
            F::ap::<A, B>(fab.run(environment.clone()), fa.run(environment))
        })
    }
}

impl<R: Clone + 'static, F: Chainable> Chainable for ReaderTBrand<R, F> {
    fn chain<A, B, G>(fa: ReaderT<R, F::Applied<A>>, function: G) -> ReaderT<R, F::Applied<B>>
    where
        A: 'static,
        B: 'static,
        G: Fn(A) -> ReaderT<R, F::Applied<B>> + 'static,
    {
        let function = Rc::new(function);
        ReaderT::new(move |environment: R| {
            let function = Rc::clone(&function);
            let shared = environment.clone();
            F::chain::<A, B, _>(fa.run(environment), move |a| function(a).run(shared.clone()))
        })
    }
}

impl<R: 'static, F: FromIO> FromIO for ReaderTBrand<R, F> {
    fn from_io<A>(io: IO<A>) -> ReaderT<R, F::Applied<A>>
    where
        A: 'static,
    {
        ReaderT::new(move |_| F::from_io(io.clone()))
    }
}

/// Produces the environment itself.
pub fn ask<R, F>() -> ReaderT<R, F::Applied<R>>
where
    R: Clone + 'static,
    F: Pointed,
{
    ReaderT::new(|environment| F::of(environment))
}

/// Produces a projection of the environment.
pub fn asks<R, F, A, P>(projection: P) -> ReaderT<R, F::Applied<A>>
where
    R: 'static,
    F: Pointed,
    A: Clone + 'static,
    P: Fn(R) -> A + 'static,
{
    ReaderT::new(move |environment| F::of(projection(environment)))
}

/// Selects the next computation from the environment, then runs it with the
/// same environment.
pub fn asks_reader_t<R, M, P>(projection: P) -> ReaderT<R, M>
where
    R: Clone + 'static,
    M: 'static,
    P: Fn(R) -> ReaderT<R, M> + 'static,
{
    ReaderT::new(move |environment: R| projection(environment.clone()).run(environment))
}

/// Runs `computation` in an environment derived from the outer one.
///
/// ```rust
/// use kindred::transformer::{reader_t, ReaderT};
/// use kindred::typeclass::OptionBrand;
///
/// let doubled: ReaderT<i32, Option<i32>> = reader_t::asks::<i32, OptionBrand, _, _>(|n: i32| n * 2);
/// let from_text: ReaderT<&str, Option<i32>> = reader_t::local(|text: &str| text.len() as i32, doubled);
/// assert_eq!(from_text.run("abc"), Some(6));
/// ```
pub fn local<R1, R2, M, L>(modify: L, computation: ReaderT<R1, M>) -> ReaderT<R2, M>
where
    R1: 'static,
    R2: 'static,
    M: 'static,
    L: Fn(R2) -> R1 + 'static,
{
    ReaderT::new(move |environment| computation.run(modify(environment)))
}

/// Lifts an inner effect, ignoring the environment.
pub fn lift<R, M>(inner: M) -> ReaderT<R, M>
where
    R: 'static,
    M: Clone + 'static,
{
    ReaderT::new(move |_| inner.clone())
}

/// Lifts a plain [`Reader`] into `ReaderT` over `F`.
pub fn from_reader<R, F, A>(reader: Reader<R, A>) -> ReaderT<R, F::Applied<A>>
where
    R: 'static,
    F: Pointed,
    A: Clone + 'static,
{
    ReaderT::new(move |environment| F::of(reader.run_reader(environment)))
}

/// Compares two computations by running both in `environment`.
#[cfg(feature = "laws")]
pub fn equivalence<R, M>(
    environment: R,
    results: crate::laws::Equivalence<M>,
) -> crate::laws::Equivalence<ReaderT<R, M>>
where
    R: Clone + 'static,
    M: 'static,
{
    crate::laws::Equivalence::from_equals(move |left: &ReaderT<R, M>, right: &ReaderT<R, M>| {
        results.equals(&left.run(environment.clone()), &right.run(environment.clone()))
    })
}
