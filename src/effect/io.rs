//! IO - a deferred, re-runnable side-effecting computation.
//!
//! `IO<A>` describes an action without performing it. Running it with
//! [`IO::run_unsafe`] performs the action; running it again performs it
//! again. Use [`IO::memoize`] for an action that should run at most once.
//!
//! # Examples
//!
//! ```rust
//! use kindred::effect::IO;
//!
//! let io = IO::pure(10).fmap(|x| x * 2).flat_map(|x| IO::pure(x + 1));
//! assert_eq!(io.run_unsafe(), 21);
//! ```
//!
//! # Side Effect Deferral
//!
//! ```rust
//! use kindred::effect::IO;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let executed = Rc::new(Cell::new(false));
//! let flag = Rc::clone(&executed);
//! let io = IO::new(move || {
//!     flag.set(true);
//!     42
//! });
//!
//! assert!(!executed.get());
//! assert_eq!(io.run_unsafe(), 42);
//! assert!(executed.get());
//! ```

use std::fmt;
use std::rc::Rc;

use crate::control::Memoized;
use crate::typeclass::{
    Apply, Chainable, FromIO, Function, Functor, Pointed, TypeConstructor,
};

/// A deferred computation producing `A`.
///
/// Cloning an `IO` shares the description, not a result.
///
/// # Monad Laws
///
/// 1. **Left Identity**: `IO::pure(a).flat_map(f) == f(a)`
/// 2. **Right Identity**: `m.flat_map(IO::pure) == m`
/// 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
///
/// where `==` compares the results of running both sides.
pub struct IO<A> {
    run_io: Rc<dyn Fn() -> A>,
}

impl<A> Clone for IO<A> {
    fn clone(&self) -> Self {
        Self {
            run_io: Rc::clone(&self.run_io),
        }
    }
}

impl<A> fmt::Debug for IO<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("IO(<deferred>)")
    }
}

impl<A: 'static> IO<A> {
    /// Creates an IO action from a closure. The closure runs on every
    /// [`IO::run_unsafe`].
    pub fn new<F>(action: F) -> Self
    where
        F: Fn() -> A + 'static,
    {
        Self {
            run_io: Rc::new(action),
        }
    }

    /// Wraps a pure value.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move || value.clone())
    }

    /// Performs the action and returns its result.
    ///
    /// Named `run_unsafe` because it breaks referential transparency; call it
    /// at the edge of the program.
    #[inline]
    pub fn run_unsafe(&self) -> A {
        (self.run_io)()
    }

    /// Transforms the result.
    pub fn fmap<B, F>(self, function: F) -> IO<B>
    where
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        IO::new(move || function(self.run_unsafe()))
    }

    /// Sequences a dependent action.
    pub fn flat_map<B, F>(self, function: F) -> IO<B>
    where
        B: 'static,
        F: Fn(A) -> IO<B> + 'static,
    {
        IO::new(move || function(self.run_unsafe()).run_unsafe())
    }

    /// Runs `self`, discards its result, then runs `next`.
    pub fn then<B: 'static>(self, next: IO<B>) -> IO<B> {
        IO::new(move || {
            self.run_unsafe();
            next.run_unsafe()
        })
    }

    /// Runs `self` then `other` and combines both results.
    pub fn map2<B, C, F>(self, other: IO<B>, function: F) -> IO<C>
    where
        B: 'static,
        C: 'static,
        F: Fn(A, B) -> C + 'static,
    {
        IO::new(move || function(self.run_unsafe(), other.run_unsafe()))
    }

    /// Runs `self` then `other` and pairs the results.
    pub fn product<B: 'static>(self, other: IO<B>) -> IO<(A, B)> {
        self.map2(other, |a, b| (a, b))
    }

    /// Returns an action that performs `self` at most once and replays the
    /// cached result on every later run, including runs of its clones.
    ///
    /// # Panics
    ///
    /// Running the result panics if the first run of `self` panicked.
    ///
    /// ```rust
    /// use kindred::effect::IO;
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    ///
    /// let runs = Rc::new(Cell::new(0));
    /// let counted = Rc::clone(&runs);
    /// let once = IO::new(move || {
    ///     counted.set(counted.get() + 1);
    ///     counted.get()
    /// })
    /// .memoize();
    ///
    /// assert_eq!(once.run_unsafe(), 1);
    /// assert_eq!(once.clone().run_unsafe(), 1);
    /// assert_eq!(runs.get(), 1);
    /// ```
    #[must_use]
    pub fn memoize(self) -> Self
    where
        A: Clone,
    {
        let memoized = Rc::new(Memoized::new(move || self.run_unsafe()));
        Self::new(move || memoized.force().clone())
    }
}

/// Brand for [`IO`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IOBrand;

impl TypeConstructor for IOBrand {
    type Applied<A: 'static> = IO<A>;
}

impl Pointed for IOBrand {
    fn of<A>(value: A) -> IO<A>
    where
        A: Clone + 'static,
    {
        IO::pure(value)
    }
}

impl Functor for IOBrand {
    fn map<A, B, F>(fa: IO<A>, function: F) -> IO<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        fa.fmap(function)
    }
}

/// The function side runs first.
impl Apply for IOBrand {
    fn ap<A, B>(fab: IO<Function<A, B>>, fa: IO<A>) -> IO<B>
    where
        A: Clone + 'static,
        B: 'static,
    {
        fab.map2(fa, |function, value| function(value))
    }
}

impl Chainable for IOBrand {
    fn chain<A, B, F>(fa: IO<A>, function: F) -> IO<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> IO<B> + 'static,
    {
        fa.flat_map(function)
    }
}

impl FromIO for IOBrand {
    #[inline]
    fn from_io<A>(io: IO<A>) -> IO<A>
    where
        A: 'static,
    {
        io
    }
}

/// Compares two actions by running both and comparing the results.
#[cfg(feature = "laws")]
pub fn equivalence<A: 'static>(
    results: crate::laws::Equivalence<A>,
) -> crate::laws::Equivalence<IO<A>> {
    crate::laws::Equivalence::from_equals(move |left: &IO<A>, right: &IO<A>| {
        results.equals(&left.run_unsafe(), &right.run_unsafe())
    })
}
