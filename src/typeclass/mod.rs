//! Type classes over brand types.
//!
//! Rust has no higher-kinded types, so a type class such as `Functor` cannot
//! be a trait on `Option<_>` itself. Instead each class is a trait on a
//! zero-sized *brand* (see [`TypeConstructor`]) and operations are called as
//! associated functions: `OptionBrand::map(Some(1), f)`.
//!
//! The tower, weakest first:
//!
//! - [`Pointed`]: `of`
//! - [`Functor`]: `map` (plus `flap`, `replace`, `void`)
//! - [`Apply`]: `ap` (plus `map2`, `ap_first`, `ap_second`)
//! - [`Applicative`]: `Apply + Pointed`, blanket-implemented
//! - [`Chainable`]: `chain` (plus `chain_first`, `flatten`)
//! - [`Monad`]: `Applicative + Chainable`, blanket-implemented
//!
//! Satellite classes: [`Foldable`] (with [`Semigroup`] and [`Monoid`]) and,
//! with the `effect` feature, [`FromIO`].
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::{Chainable, Monad, OptionBrand, Pointed, VecBrand};
//!
//! fn pairs<F: Monad>(left: F::Applied<i32>, right: F::Applied<i32>) -> F::Applied<(i32, i32)>
//! where
//!     F::Applied<i32>: Clone,
//! {
//!     F::chain::<i32, (i32, i32), _>(left, move |a| {
//!         F::chain::<i32, (i32, i32), _>(right.clone(), move |b| F::of((a, b)))
//!     })
//! }
//!
//! assert_eq!(pairs::<OptionBrand>(Some(1), Some(2)), Some((1, 2)));
//! assert_eq!(pairs::<VecBrand>(vec![1, 2], vec![3]), vec![(1, 3), (2, 3)]);
//! ```

mod applicative;
mod apply;
mod chain;
mod foldable;
#[cfg(feature = "effect")]
mod from_io;
mod functor;
mod higher;
mod identity;
mod monad;
mod monoid;
mod pointed;
mod semigroup;

pub use applicative::Applicative;
pub use apply::Apply;
pub use chain::Chainable;
pub use foldable::Foldable;
#[cfg(feature = "effect")]
pub use from_io::FromIO;
pub use functor::Functor;
pub use higher::{
    Dictionary, Function, Kleisli, OptionBrand, Operator, ResultBrand, TypeConstructor, VecBrand,
    function, to_applicative, to_apply, to_chainable, to_functor, to_pointed,
};
pub use identity::{Identity, IdentityBrand};
pub use monad::Monad;
pub use monoid::{Monoid, Sum};
pub use pointed::Pointed;
pub use semigroup::Semigroup;
