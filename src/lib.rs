//! # kindred
//!
//! Higher-kinded type classes for Rust, encoded with brand types.
//!
//! A *brand* is a zero-sized type standing for a type constructor such as
//! `Option<_>`; type classes (`Functor`, `Apply`, `Chainable`, `Monad`, ...)
//! are traits on brands. Code written once against a trait bound then runs
//! for every instance, monad transformers included.
//!
//! ## Overview
//!
//! - **Type classes**: Pointed, Functor, Apply, Applicative, Chainable, Monad,
//!   Foldable, `FromIO`, with instances for `Option`, `Result`, `Vec`, and
//!   `Identity`
//! - **Combinators**: curried `map`/`chain`/`ap`/`chain_first`/`flap` and
//!   do-notation (`do_`, `bind`, `let_`, `ap_s`, ...)
//! - **Effects**: a deferred `IO` and `Reader`
//! - **Transformers**: `EitherT` and `ReaderT`, nestable into stacks such as
//!   `ReaderTBrand<R, EitherT<IOBrand, E>>`
//! - **Control**: thread-safe memoization that runs an initializer at most once
//! - **Laws**: predicates checking the type-class laws for any instance
//!
//! ## Feature Flags
//!
//! - `typeclass`: type-class traits and standard instances
//! - `compose`: `pipe!`, `compose!` and small function utilities
//! - `combinator`: curried operators and do-notation
//! - `control`: memoization
//! - `effect`: `IO`, `FromIO`
//! - `transformer`: `EitherT`, `ReaderT`, `Reader`
//! - `laws`: the law-checking harness
//! - `serde`: `Serialize`/`Deserialize` for `Identity`
//! - `full`: everything
//!
//! ## Example
//!
//! ```rust
//! use kindred::prelude::*;
//!
//! fn add_all<F: Monad>(values: F::Applied<Vec<i32>>) -> F::Applied<i32> {
//!     F::map::<Vec<i32>, i32, _>(values, |values| values.into_iter().sum())
//! }
//!
//! assert_eq!(add_all::<OptionBrand>(Some(vec![1, 2, 3])), Some(6));
//!
//! let checked = pipe!(
//!     Ok::<i32, String>(10),
//!     map::<ResultBrand<String>, _, _, _>(|n: i32| n * 2),
//!     chain::<ResultBrand<String>, _, _, _>(|n: i32| {
//!         if n < 100 { Ok(n) } else { Err(format!("{n} is too large")) }
//!     })
//! );
//! assert_eq!(checked, Ok(20));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the type classes, brands, combinators and effects. Module-level
/// free functions such as `either_t::right` stay behind their module path.
///
/// # Usage
///
/// ```rust
/// use kindred::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "combinator")]
    pub use crate::combinator::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::{IO, IOBrand};

    #[cfg(feature = "transformer")]
    pub use crate::effect::{Reader, ReaderBrand};

    #[cfg(feature = "transformer")]
    pub use crate::transformer::{EitherT, ReaderT, ReaderTBrand, either_t, reader_t};
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "combinator")]
pub mod combinator;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(feature = "transformer")]
pub mod transformer;

#[cfg(feature = "laws")]
pub mod laws;
