//! Brand-generic combinators.
//!
//! The type-class traits expose the uncurried forms (`F::map(fa, f)`); this
//! module adds the curried, data-last operators and do-notation built on top
//! of them. Everything here is written once against the traits and works
//! for every brand, transformers included.

mod do_notation;
mod operator;

pub use do_notation::{ap_s, bind, bind_to, do_, let_, let_to};
pub use operator::{ap, chain, chain_first, flap, into_operator, map};
