#![cfg(feature = "laws")]
//! Property-based tests for the Applicative, Chain and Monad laws of the
//! standard instances.
//!
//! - **Left identity**: `chain(of(a), f) == f(a)`
//! - **Right identity**: `chain(m, of) == m`
//! - **Associativity**: `chain(chain(m, f), g) == chain(m, |x| chain(f(x), g))`
//!
//! `monad::assert_laws` also runs every Functor, Apply and Applicative law.

use kindred::laws::{Equivalence, applicative, chain, monad};
use kindred::typeclass::{Identity, IdentityBrand, Monad, OptionBrand, ResultBrand, VecBrand};
use proptest::prelude::*;

fn monad_laws<F>() -> impl Fn(i32, F::Applied<i32>) -> bool
where
    F: Monad,
    F::Applied<i32>: Clone + PartialEq,
    F::Applied<u64>: PartialEq,
    F::Applied<bool>: PartialEq,
{
    monad::assert_laws::<F, i32, u64, bool>(
        Equivalence::structural(),
        Equivalence::structural(),
        Equivalence::structural(),
        magnitude,
        |n: u64| n % 3 == 0,
    )
}

fn magnitude(n: i32) -> u64 {
    u64::from(n.unsigned_abs())
}

proptest! {
    #[test]
    fn prop_option_monad_laws(a in any::<i32>(), fa in any::<Option<i32>>()) {
        prop_assert!(monad_laws::<OptionBrand>()(a, fa));
    }

    #[test]
    fn prop_result_monad_laws(a in any::<i32>(), fa in any::<Result<i32, String>>()) {
        prop_assert!(monad_laws::<ResultBrand<String>>()(a, fa));
    }

    #[test]
    fn prop_vec_monad_laws(a in any::<i32>(), fa in prop::collection::vec(any::<i32>(), 0..5)) {
        prop_assert!(monad_laws::<VecBrand>()(a, fa));
    }

    #[test]
    fn prop_identity_monad_laws(a in any::<i32>(), value in any::<i32>()) {
        prop_assert!(monad_laws::<IdentityBrand>()(a, Identity(value)));
    }

    #[test]
    fn prop_vec_chain_associativity(fa in prop::collection::vec(0u8..10, 0..6)) {
        let holds = chain::assert_laws::<VecBrand, u8, u16, String>(
            Equivalence::structural(),
            Equivalence::structural(),
            |n| u16::from(n) * 2,
            |n| n.to_string(),
        );
        prop_assert!(holds(fa));
    }

    #[test]
    fn prop_option_applicative_laws(a in any::<i32>(), fa in any::<Option<i32>>()) {
        let holds = applicative::assert_laws::<OptionBrand, i32, String, usize>(
            Equivalence::structural(),
            Equivalence::structural(),
            Equivalence::structural(),
            |n| n.to_string(),
            |text| text.len(),
        );
        prop_assert!(holds(a, fa));
    }
}

#[cfg(feature = "effect")]
mod io {
    use super::*;
    use kindred::effect::{self, IO, IOBrand};

    proptest! {
        #[test]
        fn prop_io_monad_laws(a in any::<i32>(), value in any::<i32>()) {
            let holds = monad::assert_laws::<IOBrand, i32, u64, bool>(
                effect::equivalence(Equivalence::structural()),
                effect::equivalence(Equivalence::structural()),
                effect::equivalence(Equivalence::structural()),
                magnitude,
                |n: u64| n % 2 == 1,
            );
            prop_assert!(holds(a, IO::new(move || value)));
        }
    }
}
