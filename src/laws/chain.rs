//! Chain law: associativity.
//!
//! The Kleisli arrows are `of . ab` and `of . bc`, so the check needs `of`
//! as well as `chain`.

use std::rc::Rc;

use super::{Equivalence, Law, LawViolation, apply, check, verdict};
use crate::typeclass::{Chainable, Function, Kleisli, Pointed};

/// `chain(chain(fa, afb), bfc) == chain(fa, |a| chain(afb(a), bfc))`
///
/// # Errors
///
/// Returns a [`LawViolation`] when the two sides are not equivalent.
pub fn associativity<F, A, B, C>(
    eq_c: &Equivalence<F::Applied<C>>,
    ab: &Function<A, B>,
    bc: &Function<B, C>,
    fa: F::Applied<A>,
) -> Result<(), LawViolation>
where
    F: Chainable + Pointed,
    A: 'static,
    B: Clone + 'static,
    C: Clone + 'static,
    F::Applied<A>: Clone,
{
    let afb: Kleisli<F, A, B> = {
        let ab = Rc::clone(ab);
        Rc::new(move |a: A| F::of(ab(a)))
    };
    let bfc: Kleisli<F, B, C> = {
        let bc = Rc::clone(bc);
        Rc::new(move |b: B| F::of(bc(b)))
    };

    let left = {
        let (afb, bfc) = (Rc::clone(&afb), Rc::clone(&bfc));
        F::chain::<B, C, _>(F::chain::<A, B, _>(fa.clone(), move |a| afb(a)), move |b| bfc(b))
    };
    let right = F::chain::<A, C, _>(fa, move |a| {
        let bfc = Rc::clone(&bfc);
        F::chain::<B, C, _>(afb(a), move |b| bfc(b))
    });

    check(Law::ChainAssociativity, eq_c.equals(&left, &right))
}

/// Runs the Functor, Apply and Chain laws on `fa`.
pub fn check_all<F, A, B, C>(
    eq_a: &Equivalence<F::Applied<A>>,
    eq_c: &Equivalence<F::Applied<C>>,
    ab: &Function<A, B>,
    bc: &Function<B, C>,
    fa: &F::Applied<A>,
) -> Vec<Result<(), LawViolation>>
where
    F: Chainable + Pointed,
    A: Clone + 'static,
    B: Clone + 'static,
    C: Clone + 'static,
    F::Applied<A>: Clone,
{
    let mut outcomes = apply::check_all::<F, A, B, C>(eq_a, eq_c, ab, bc, fa);
    outcomes.push(associativity::<F, A, B, C>(eq_c, ab, bc, fa.clone()));
    outcomes
}

/// Builds a predicate checking the Functor, Apply and Chain laws for `F`.
pub fn assert_laws<F, A, B, C>(
    eq_a: Equivalence<F::Applied<A>>,
    eq_c: Equivalence<F::Applied<C>>,
    ab: impl Fn(A) -> B + 'static,
    bc: impl Fn(B) -> C + 'static,
) -> impl Fn(F::Applied<A>) -> bool
where
    F: Chainable + Pointed,
    A: Clone + 'static,
    B: Clone + 'static,
    C: Clone + 'static,
    F::Applied<A>: Clone,
{
    let ab: Function<A, B> = Rc::new(ab);
    let bc: Function<B, C> = Rc::new(bc);
    move |fa: F::Applied<A>| verdict("Chain", check_all::<F, A, B, C>(&eq_a, &eq_c, &ab, &bc, &fa))
}
