//! Apply law: associative composition.
//!
//! The function-carrying samples `fab` and `fbc` are derived from `fa` with
//! [`Functor::replace`](crate::typeclass::Functor::replace), so they share its
//! shape (length, failure, effects).

use std::rc::Rc;

use super::{Equivalence, Law, LawViolation, check, functor, verdict};
use crate::typeclass::{Apply, Function};

/// `ap(ap(map(fbc, compose), fab), fa) == ap(fbc, ap(fab, fa))`
///
/// # Errors
///
/// Returns a [`LawViolation`] when the two sides are not equivalent.
pub fn associative_composition<F, A, B, C>(
    eq_c: &Equivalence<F::Applied<C>>,
    ab: &Function<A, B>,
    bc: &Function<B, C>,
    fa: F::Applied<A>,
) -> Result<(), LawViolation>
where
    F: Apply,
    A: Clone + 'static,
    B: Clone + 'static,
    C: 'static,
    F::Applied<A>: Clone,
{
    let fab = || F::replace::<A, Function<A, B>>(fa.clone(), Rc::clone(ab));
    let fbc = || F::replace::<A, Function<B, C>>(fa.clone(), Rc::clone(bc));

    let compose = F::map::<Function<B, C>, Function<Function<A, B>, Function<A, C>>, _>(
        fbc(),
        |second: Function<B, C>| -> Function<Function<A, B>, Function<A, C>> {
            Rc::new(move |first: Function<A, B>| -> Function<A, C> {
                let second = Rc::clone(&second);
                Rc::new(move |a: A| second(first(a)))
            })
        },
    );
    let left = F::ap::<A, C>(F::ap::<Function<A, B>, Function<A, C>>(compose, fab()), fa.clone());
    let right = F::ap::<B, C>(fbc(), F::ap::<A, B>(fab(), fa.clone()));

    check(Law::ApplyAssociativeComposition, eq_c.equals(&left, &right))
}

/// Runs the Functor laws and the Apply law on `fa`.
pub fn check_all<F, A, B, C>(
    eq_a: &Equivalence<F::Applied<A>>,
    eq_c: &Equivalence<F::Applied<C>>,
    ab: &Function<A, B>,
    bc: &Function<B, C>,
    fa: &F::Applied<A>,
) -> Vec<Result<(), LawViolation>>
where
    F: Apply,
    A: Clone + 'static,
    B: Clone + 'static,
    C: 'static,
    F::Applied<A>: Clone,
{
    let mut outcomes = functor::check_all::<F, A, B, C>(eq_a, eq_c, ab, bc, fa);
    outcomes.push(associative_composition::<F, A, B, C>(eq_c, ab, bc, fa.clone()));
    outcomes
}

/// Builds a predicate checking the Functor and Apply laws for `F`.
pub fn assert_laws<F, A, B, C>(
    eq_a: Equivalence<F::Applied<A>>,
    eq_c: Equivalence<F::Applied<C>>,
    ab: impl Fn(A) -> B + 'static,
    bc: impl Fn(B) -> C + 'static,
) -> impl Fn(F::Applied<A>) -> bool
where
    F: Apply,
    A: Clone + 'static,
    B: Clone + 'static,
    C: 'static,
    F::Applied<A>: Clone,
{
    let ab: Function<A, B> = Rc::new(ab);
    let bc: Function<B, C> = Rc::new(bc);
    move |fa: F::Applied<A>| verdict("Apply", check_all::<F, A, B, C>(&eq_a, &eq_c, &ab, &bc, &fa))
}
