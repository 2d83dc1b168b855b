//! Functor laws: identity and composition.

use std::rc::Rc;

use super::{Equivalence, Law, LawViolation, check, verdict};
use crate::typeclass::{Function, Functor};

/// `map(fa, id) == fa`
///
/// # Errors
///
/// Returns a [`LawViolation`] when the two sides are not equivalent.
pub fn identity<F, A>(eq_a: &Equivalence<F::Applied<A>>, fa: F::Applied<A>) -> Result<(), LawViolation>
where
    F: Functor,
    A: 'static,
    F::Applied<A>: Clone,
{
    let mapped = F::map::<A, A, _>(fa.clone(), |a| a);
    check(Law::FunctorIdentity, eq_a.equals(&mapped, &fa))
}

/// `map(fa, bc . ab) == map(map(fa, ab), bc)`
///
/// # Errors
///
/// Returns a [`LawViolation`] when the two sides are not equivalent.
pub fn composition<F, A, B, C>(
    eq_c: &Equivalence<F::Applied<C>>,
    ab: &Function<A, B>,
    bc: &Function<B, C>,
    fa: F::Applied<A>,
) -> Result<(), LawViolation>
where
    F: Functor,
    A: 'static,
    B: 'static,
    C: 'static,
    F::Applied<A>: Clone,
{
    let (first, second) = (Rc::clone(ab), Rc::clone(bc));
    let composed = F::map::<A, C, _>(fa.clone(), move |a| second(first(a)));

    let (first, second) = (Rc::clone(ab), Rc::clone(bc));
    let stepwise = F::map::<B, C, _>(F::map::<A, B, _>(fa, move |a| first(a)), move |b| second(b));

    check(Law::FunctorComposition, eq_c.equals(&composed, &stepwise))
}

/// Runs both Functor laws on `fa`.
pub fn check_all<F, A, B, C>(
    eq_a: &Equivalence<F::Applied<A>>,
    eq_c: &Equivalence<F::Applied<C>>,
    ab: &Function<A, B>,
    bc: &Function<B, C>,
    fa: &F::Applied<A>,
) -> Vec<Result<(), LawViolation>>
where
    F: Functor,
    A: 'static,
    B: 'static,
    C: 'static,
    F::Applied<A>: Clone,
{
    vec![
        identity::<F, A>(eq_a, fa.clone()),
        composition::<F, A, B, C>(eq_c, ab, bc, fa.clone()),
    ]
}

/// Builds a predicate checking the Functor laws for the brand `F`.
///
/// # Examples
///
/// ```rust
/// use kindred::laws::{functor, Equivalence};
/// use kindred::typeclass::VecBrand;
///
/// let holds = functor::assert_laws::<VecBrand, i32, i64, String>(
///     Equivalence::structural(),
///     Equivalence::structural(),
///     |n: i32| i64::from(n) * 2,
///     |n: i64| n.to_string(),
/// );
/// assert!(holds(vec![1, 2, 3]));
/// ```
pub fn assert_laws<F, A, B, C>(
    eq_a: Equivalence<F::Applied<A>>,
    eq_c: Equivalence<F::Applied<C>>,
    ab: impl Fn(A) -> B + 'static,
    bc: impl Fn(B) -> C + 'static,
) -> impl Fn(F::Applied<A>) -> bool
where
    F: Functor,
    A: 'static,
    B: 'static,
    C: 'static,
    F::Applied<A>: Clone,
{
    let ab: Function<A, B> = Rc::new(ab);
    let bc: Function<B, C> = Rc::new(bc);
    move |fa: F::Applied<A>| verdict("Functor", check_all::<F, A, B, C>(&eq_a, &eq_c, &ab, &bc, &fa))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{Identity, IdentityBrand, OptionBrand, ResultBrand, function};
    use rstest::rstest;

    #[rstest]
    #[case(Some(4))]
    #[case(None)]
    fn option_satisfies_functor_laws(#[case] fa: Option<i32>) {
        let holds = assert_laws::<OptionBrand, i32, i32, String>(
            Equivalence::structural(),
            Equivalence::structural(),
            |n| n + 1,
            |n| n.to_string(),
        );
        assert!(holds(fa));
    }

    #[rstest]
    fn result_and_identity_pass_individual_checks() {
        let eq = Equivalence::structural();
        assert_eq!(identity::<ResultBrand<String>, i32>(&eq, Err("e".into())), Ok(()));
        assert_eq!(
            composition::<IdentityBrand, i32, i32, i32>(
                &Equivalence::structural(),
                &function(|n| n * 2),
                &function(|n| n - 1),
                Identity(5),
            ),
            Ok(())
        );
    }

    #[rstest]
    fn coarse_equivalence_hides_differences() {
        let everything_equal = Equivalence::from_equals(|_: &Option<i32>, _: &Option<i32>| true);
        assert_eq!(identity::<OptionBrand, i32>(&everything_equal, Some(1)), Ok(()));
    }
}
