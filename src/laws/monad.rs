//! Monad laws: left and right identity, together with everything the
//! weaker classes require.

use std::rc::Rc;

use super::{Equivalence, Law, LawViolation, applicative, chain, check, verdict};
use crate::typeclass::{Function, Kleisli, Monad};

/// `chain(of(a), of . ab) == of(ab(a))`
///
/// # Errors
///
/// Returns a [`LawViolation`] when the two sides are not equivalent.
pub fn left_identity<F, A, B>(
    eq_b: &Equivalence<F::Applied<B>>,
    ab: &Function<A, B>,
    a: A,
) -> Result<(), LawViolation>
where
    F: Monad,
    A: Clone + 'static,
    B: Clone + 'static,
{
    let afb: Kleisli<F, A, B> = {
        let ab = Rc::clone(ab);
        Rc::new(move |a: A| F::of(ab(a)))
    };
    let expected = afb(a.clone());
    let chained = F::chain::<A, B, _>(F::of(a), move |a| afb(a));
    check(Law::MonadLeftIdentity, eq_b.equals(&chained, &expected))
}

/// `chain(fa, of) == fa`
///
/// # Errors
///
/// Returns a [`LawViolation`] when the two sides are not equivalent.
pub fn right_identity<F, A>(eq_a: &Equivalence<F::Applied<A>>, fa: F::Applied<A>) -> Result<(), LawViolation>
where
    F: Monad,
    A: Clone + 'static,
    F::Applied<A>: Clone,
{
    let chained = F::chain::<A, A, _>(fa.clone(), |a| F::of(a));
    check(Law::MonadRightIdentity, eq_a.equals(&chained, &fa))
}

/// Runs every law from Functor up to Monad.
#[allow(clippy::too_many_arguments)]
pub fn check_all<F, A, B, C>(
    eq_a: &Equivalence<F::Applied<A>>,
    eq_b: &Equivalence<F::Applied<B>>,
    eq_c: &Equivalence<F::Applied<C>>,
    ab: &Function<A, B>,
    bc: &Function<B, C>,
    a: &A,
    fa: &F::Applied<A>,
) -> Vec<Result<(), LawViolation>>
where
    F: Monad,
    A: Clone + 'static,
    B: Clone + 'static,
    C: Clone + 'static,
    F::Applied<A>: Clone,
{
    let mut outcomes = applicative::check_all::<F, A, B, C>(eq_a, eq_b, eq_c, ab, bc, a, fa);
    outcomes.push(chain::associativity::<F, A, B, C>(eq_c, ab, bc, fa.clone()));
    outcomes.push(left_identity::<F, A, B>(eq_b, ab, a.clone()));
    outcomes.push(right_identity::<F, A>(eq_a, fa.clone()));
    outcomes
}

/// Builds a predicate checking every law from Functor up to Monad for `F`.
///
/// # Examples
///
/// ```rust
/// use kindred::effect::{self, IOBrand, IO};
/// use kindred::laws::{monad, Equivalence};
///
/// let holds = monad::assert_laws::<IOBrand, i32, i32, bool>(
///     effect::equivalence(Equivalence::structural()),
///     effect::equivalence(Equivalence::structural()),
///     effect::equivalence(Equivalence::structural()),
///     |n: i32| n * 3,
///     |n: i32| n > 10,
/// );
/// assert!(holds(2, IO::pure(5)));
/// ```
pub fn assert_laws<F, A, B, C>(
    eq_a: Equivalence<F::Applied<A>>,
    eq_b: Equivalence<F::Applied<B>>,
    eq_c: Equivalence<F::Applied<C>>,
    ab: impl Fn(A) -> B + 'static,
    bc: impl Fn(B) -> C + 'static,
) -> impl Fn(A, F::Applied<A>) -> bool
where
    F: Monad,
    A: Clone + 'static,
    B: Clone + 'static,
    C: Clone + 'static,
    F::Applied<A>: Clone,
{
    let ab: Function<A, B> = Rc::new(ab);
    let bc: Function<B, C> = Rc::new(bc);
    move |a: A, fa: F::Applied<A>| {
        verdict("Monad", check_all::<F, A, B, C>(&eq_a, &eq_b, &eq_c, &ab, &bc, &a, &fa))
    }
}
