//! Law checks for the type classes.
//!
//! Each submodule states the laws of one class as functions returning
//! `Result<(), LawViolation>`, plus an `assert_laws` that runs them together
//! with every law of the weaker classes and returns a predicate suitable for
//! property tests:
//!
//! | module          | laws                                      | predicate            |
//! |-----------------|-------------------------------------------|----------------------|
//! | [`functor`]     | identity, composition                     | `Fn(F<A>) -> bool`   |
//! | [`apply`]       | associative composition                   | `Fn(F<A>) -> bool`   |
//! | [`applicative`] | identity, homomorphism, interchange       | `Fn(A, F<A>) -> bool`|
//! | [`chain`]       | associativity                             | `Fn(F<A>) -> bool`   |
//! | [`monad`]       | left identity, right identity             | `Fn(A, F<A>) -> bool`|
//!
//! Violations are logged with [`tracing::error!`] and reported as `false`;
//! nothing panics.
//!
//! # Examples
//!
//! ```rust
//! use kindred::laws::{Equivalence, monad};
//! use kindred::typeclass::OptionBrand;
//!
//! let holds = monad::assert_laws::<OptionBrand, i32, String, usize>(
//!     Equivalence::structural(),
//!     Equivalence::structural(),
//!     Equivalence::structural(),
//!     |n: i32| n.to_string(),
//!     |text: String| text.len(),
//! );
//!
//! assert!(holds(7, Some(42)));
//! assert!(holds(0, None));
//! ```

use std::fmt;

use thiserror::Error;

pub mod applicative;
pub mod apply;
pub mod chain;
mod equivalence;
pub mod functor;
pub mod monad;

pub use equivalence::Equivalence;

/// The individual laws checked by this module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Law {
    /// `map(fa, id) == fa`
    FunctorIdentity,
    /// `map(fa, bc . ab) == map(map(fa, ab), bc)`
    FunctorComposition,
    /// `ap(ap(map(fbc, compose), fab), fa) == ap(fbc, ap(fab, fa))`
    ApplyAssociativeComposition,
    /// `ap(of(id), fa) == fa`
    ApplicativeIdentity,
    /// `ap(of(ab), of(a)) == of(ab(a))`
    ApplicativeHomomorphism,
    /// `ap(fab, of(a)) == ap(of(|g| g(a)), fab)`
    ApplicativeInterchange,
    /// `chain(chain(fa, afb), bfc) == chain(fa, |a| chain(afb(a), bfc))`
    ChainAssociativity,
    /// `chain(of(a), afb) == afb(a)`
    MonadLeftIdentity,
    /// `chain(fa, of) == fa`
    MonadRightIdentity,
}

impl Law {
    /// The equation this law requires.
    pub const fn equation(self) -> &'static str {
        match self {
            Self::FunctorIdentity => "map(fa, id) == fa",
            Self::FunctorComposition => "map(fa, bc . ab) == map(map(fa, ab), bc)",
            Self::ApplyAssociativeComposition => {
                "ap(ap(map(fbc, compose), fab), fa) == ap(fbc, ap(fab, fa))"
            }
            Self::ApplicativeIdentity => "ap(of(id), fa) == fa",
            Self::ApplicativeHomomorphism => "ap(of(ab), of(a)) == of(ab(a))",
            Self::ApplicativeInterchange => "ap(fab, of(a)) == ap(of(|g| g(a)), fab)",
            Self::ChainAssociativity => {
                "chain(chain(fa, afb), bfc) == chain(fa, |a| chain(afb(a), bfc))"
            }
            Self::MonadLeftIdentity => "chain(of(a), afb) == afb(a)",
            Self::MonadRightIdentity => "chain(fa, of) == fa",
        }
    }
}

impl fmt::Display for Law {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::FunctorIdentity => "Functor identity",
            Self::FunctorComposition => "Functor composition",
            Self::ApplyAssociativeComposition => "Apply associative composition",
            Self::ApplicativeIdentity => "Applicative identity",
            Self::ApplicativeHomomorphism => "Applicative homomorphism",
            Self::ApplicativeInterchange => "Applicative interchange",
            Self::ChainAssociativity => "Chain associativity",
            Self::MonadLeftIdentity => "Monad left identity",
            Self::MonadRightIdentity => "Monad right identity",
        };
        formatter.write_str(name)
    }
}

/// A failed law check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{law} violated: {message}")]
pub struct LawViolation {
    /// Which law failed.
    pub law: Law,
    /// What was expected to hold.
    pub message: String,
}

impl LawViolation {
    /// Creates a violation of `law`, describing it by its equation.
    pub fn new(law: Law) -> Self {
        Self {
            law,
            message: law.equation().to_string(),
        }
    }
}

/// Turns the outcome of an equation into a law check result.
pub(crate) fn check(law: Law, holds: bool) -> Result<(), LawViolation> {
    if holds { Ok(()) } else { Err(LawViolation::new(law)) }
}

/// Logs every violation and folds the outcomes into one verdict.
///
/// All outcomes are inspected so that each failing law is reported.
pub(crate) fn verdict<I>(class: &'static str, outcomes: I) -> bool
where
    I: IntoIterator<Item = Result<(), LawViolation>>,
{
    let mut holds = true;
    for outcome in outcomes {
        if let Err(violation) = outcome {
            tracing::error!(class, law = %violation.law, message = %violation.message, "{violation}");
            holds = false;
        }
    }
    if holds {
        tracing::debug!(class, "all laws hold");
    }
    holds
}
