//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Option<_>` directly.
//! This module works around that with *brands*: zero-sized marker types that
//! stand for an unapplied constructor. A brand implements [`TypeConstructor`],
//! whose generic associated type [`TypeConstructor::Applied`] produces the
//! concrete type for any element type.
//!
//! Every type class in this crate is a trait over a brand, so the brand type
//! *is* the type-class dictionary. Dictionaries carry no data, are resolved at
//! compile time, and narrowing a `Monad` to a `Functor` is an ordinary
//! supertrait view.
//!
//! # Example
//!
//! ```rust
//! use kindred::typeclass::{OptionBrand, TypeConstructor};
//!
//! fn empty<F: TypeConstructor>() -> F::Applied<String>
//! where
//!     F::Applied<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none: Option<String> = empty::<OptionBrand>();
//! assert_eq!(none, None);
//! ```

use std::marker::PhantomData;
use std::rc::Rc;

/// A trait representing an unapplied type constructor.
///
/// Implementors are brand types. `F::Applied<A>` is "the constructor `F`
/// applied to `A`", for example `<OptionBrand as TypeConstructor>::Applied<i32>`
/// is `Option<i32>`.
///
/// Element types are required to be `'static` because effectful instances
/// (`IO`, `ReaderT`) store their continuations in boxed closures.
///
/// # Laws
///
/// Brands must be stateless: two values of the same brand type are
/// indistinguishable, and `Applied<A>` must depend only on `A`.
pub trait TypeConstructor {
    /// The constructor applied to `A`.
    type Applied<A: 'static>: 'static;
}

/// A shared, re-invocable function value.
///
/// This is the element type of "a function inside the functor" (`F<A -> B>`),
/// as consumed by [`Apply::ap`](super::Apply::ap). `Rc` makes it cheap to
/// clone, which multi-element containers need.
pub type Function<A, B> = Rc<dyn Fn(A) -> B>;

/// A Kleisli arrow `A -> F<B>`.
pub type Kleisli<F, A, B> = Rc<dyn Fn(A) -> <F as TypeConstructor>::Applied<B>>;

/// A function from one effectful value to another, `F<A> -> F<B>`.
///
/// Curried combinators in [`crate::combinator`] produce operators.
pub type Operator<F, A, B> =
    Rc<dyn Fn(<F as TypeConstructor>::Applied<A>) -> <F as TypeConstructor>::Applied<B>>;

/// Wraps a closure into a [`Function`].
///
/// # Examples
///
/// ```rust
/// use kindred::typeclass::function;
///
/// let increment = function(|value: i32| value + 1);
/// assert_eq!(increment(41), 42);
/// ```
#[inline]
pub fn function<A, B, F>(body: F) -> Function<A, B>
where
    F: Fn(A) -> B + 'static,
{
    Rc::new(body)
}

/// A zero-sized view of a type-class dictionary.
///
/// Brands already act as dictionaries at the type level; `Dictionary` gives
/// callers a value to pass around when an API wants one. Narrowing a richer
/// dictionary to a weaker one (see [`to_functor`] and friends) only changes the
/// bound that is checked and never allocates.
pub struct Dictionary<F>(PhantomData<fn() -> F>);

impl<F> Dictionary<F> {
    /// Returns the dictionary for brand `F`.
    #[inline]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<F> Default for Dictionary<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> Clone for Dictionary<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for Dictionary<F> {}

impl<F> std::fmt::Debug for Dictionary<F> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "Dictionary<{}>", std::any::type_name::<F>())
    }
}

macro_rules! narrowing {
    ($(#[$meta:meta])* $name:ident => $bound:path) => {
        $(#[$meta])*
        #[inline]
        pub const fn $name<F: $bound>(_dictionary: Dictionary<F>) -> Dictionary<F> {
            Dictionary::new()
        }
    };
}

narrowing!(
    /// Views a dictionary as a `Functor` dictionary.
    to_functor => super::Functor
);
narrowing!(
    /// Views a dictionary as a `Pointed` dictionary.
    to_pointed => super::Pointed
);
narrowing!(
    /// Views a dictionary as an `Apply` dictionary.
    to_apply => super::Apply
);
narrowing!(
    /// Views a dictionary as an `Applicative` dictionary.
    to_applicative => super::Applicative
);
narrowing!(
    /// Views a dictionary as a `Chainable` dictionary.
    to_chainable => super::Chainable
);

// =============================================================================
// Standard Library Brands
// =============================================================================

/// Brand for [`Option`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OptionBrand;

impl TypeConstructor for OptionBrand {
    type Applied<A: 'static> = Option<A>;
}

/// Brand for [`Result`] with a fixed error type `E`.
///
/// `Result` plays the role of the `Either` algebra: `Err` is the left
/// (failure) channel and `Ok` the right (success) channel.
pub struct ResultBrand<E>(PhantomData<fn() -> E>);

impl<E: 'static> TypeConstructor for ResultBrand<E> {
    type Applied<A: 'static> = Result<A, E>;
}

/// Brand for [`Vec`], the non-deterministic array instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VecBrand;

impl TypeConstructor for VecBrand {
    type Applied<A: 'static> = Vec<A>;
}
