//! Function composition for operator pipelines.
//!
//! - [`pipe!`]: feeds a value through functions left to right
//! - [`compose!`]: composes functions right to left
//! - [`identity`], [`constant`] and [`flip`]: the I, K and C combinators
//!
//! The curried operators in [`crate::combinator`] are ordinary functions
//! `F<A> -> F<B>`, so they slot into both macros.
//!
//! ```rust
//! use kindred::combinator::{flap, map};
//! use kindred::typeclass::VecBrand;
//! use kindred::{compose, pipe};
//!
//! let describe = compose!(
//!     map::<VecBrand, _, _, _>(|n: i32| format!("#{n}")),
//!     map::<VecBrand, _, _, _>(|n: i32| n + 1)
//! );
//! assert_eq!(describe(vec![1, 2]), vec!["#2", "#3"]);
//!
//! let applied = pipe!(vec![kindred::typeclass::function(|n: i32| n * n)], flap::<VecBrand, _, _>(5));
//! assert_eq!(applied, vec![25]);
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`
//! - **Pipe/compose duality**: `pipe!(x, f, g) == compose!(g, f)(x)`

mod compose_macro;
mod pipe_macro;
mod utils;

pub use utils::{constant, flip, identity};

pub use crate::compose;
pub use crate::pipe;
