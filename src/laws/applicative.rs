//! Applicative laws: identity, homomorphism and interchange.

use std::rc::Rc;

use super::{Equivalence, Law, LawViolation, apply, check, verdict};
use crate::typeclass::{Applicative, Function};

/// `ap(of(id), fa) == fa`
///
/// # Errors
///
/// Returns a [`LawViolation`] when the two sides are not equivalent.
pub fn identity<F, A>(eq_a: &Equivalence<F::Applied<A>>, fa: F::Applied<A>) -> Result<(), LawViolation>
where
    F: Applicative,
    A: Clone + 'static,
    F::Applied<A>: Clone,
{
    let unchanged: Function<A, A> = Rc::new(|a| a);
    let applied = F::ap::<A, A>(F::of(unchanged), fa.clone());
    check(Law::ApplicativeIdentity, eq_a.equals(&applied, &fa))
}

/// `ap(of(ab), of(a)) == of(ab(a))`
///
/// # Errors
///
/// Returns a [`LawViolation`] when the two sides are not equivalent.
pub fn homomorphism<F, A, B>(
    eq_b: &Equivalence<F::Applied<B>>,
    ab: &Function<A, B>,
    a: A,
) -> Result<(), LawViolation>
where
    F: Applicative,
    A: Clone + 'static,
    B: Clone + 'static,
{
    let applied = F::ap::<A, B>(F::of(Rc::clone(ab)), F::of(a.clone()));
    let expected = F::of(ab(a));
    check(Law::ApplicativeHomomorphism, eq_b.equals(&applied, &expected))
}

/// `ap(fab, of(a)) == ap(of(|g| g(a)), fab)`, with `fab` shaped like `fa`.
///
/// # Errors
///
/// Returns a [`LawViolation`] when the two sides are not equivalent.
pub fn interchange<F, A, B>(
    eq_b: &Equivalence<F::Applied<B>>,
    ab: &Function<A, B>,
    a: A,
    fa: F::Applied<A>,
) -> Result<(), LawViolation>
where
    F: Applicative,
    A: Clone + 'static,
    B: 'static,
    F::Applied<A>: Clone,
{
    let fab = || F::replace::<A, Function<A, B>>(fa.clone(), Rc::clone(ab));

    let left = F::ap::<A, B>(fab(), F::of(a.clone()));
    let apply_to_a: Function<Function<A, B>, B> = Rc::new(move |g: Function<A, B>| g(a.clone()));
    let right = F::ap::<Function<A, B>, B>(F::of(apply_to_a), fab());

    check(Law::ApplicativeInterchange, eq_b.equals(&left, &right))
}

/// Runs the Functor, Apply and Applicative laws.
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
    F: Applicative,
    A: Clone + 'static,
    B: Clone + 'static,
    C: 'static,
    F::Applied<A>: Clone,
{
    let mut outcomes = apply::check_all::<F, A, B, C>(eq_a, eq_c, ab, bc, fa);
    outcomes.push(identity::<F, A>(eq_a, fa.clone()));
    outcomes.push(homomorphism::<F, A, B>(eq_b, ab, a.clone()));
    outcomes.push(interchange::<F, A, B>(eq_b, ab, a.clone(), fa.clone()));
    outcomes
}

/// Builds a predicate checking every law up to Applicative for `F`.
///
/// The predicate takes a bare value as well as an effectful one, since
/// homomorphism and interchange quantify over plain values.
///
/// # Examples
///
/// ```rust
/// use kindred::laws::{applicative, Equivalence};
/// use kindred::typeclass::ResultBrand;
///
/// let holds = applicative::assert_laws::<ResultBrand<String>, u8, u16, u32>(
///     Equivalence::structural(),
///     Equivalence::structural(),
///     Equivalence::structural(),
///     u16::from,
///     u32::from,
/// );
/// assert!(holds(7, Ok(1)));
/// assert!(holds(7, Err("nope".to_string())));
/// ```
pub fn assert_laws<F, A, B, C>(
    eq_a: Equivalence<F::Applied<A>>,
    eq_b: Equivalence<F::Applied<B>>,
    eq_c: Equivalence<F::Applied<C>>,
    ab: impl Fn(A) -> B + 'static,
    bc: impl Fn(B) -> C + 'static,
) -> impl Fn(A, F::Applied<A>) -> bool
where
    F: Applicative,
    A: Clone + 'static,
    B: Clone + 'static,
    C: 'static,
    F::Applied<A>: Clone,
{
    let ab: Function<A, B> = Rc::new(ab);
    let bc: Function<B, C> = Rc::new(bc);
    move |a: A, fa: F::Applied<A>| {
        verdict(
            "Applicative",
            check_all::<F, A, B, C>(&eq_a, &eq_b, &eq_c, &ab, &bc, &a, &fa),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{Identity, IdentityBrand, OptionBrand, VecBrand};
    use rstest::rstest;

    #[rstest]
    #[case(0, vec![])]
    #[case(2, vec![1, 2])]
    fn vec_satisfies_applicative_laws(#[case] a: i32, #[case] fa: Vec<i32>) {
        let holds = assert_laws::<VecBrand, i32, i64, bool>(
            Equivalence::structural(),
            Equivalence::structural(),
            Equivalence::structural(),
            |n| i64::from(n) - 1,
            |n| n % 2 == 0,
        );
        assert!(holds(a, fa));
    }

    #[rstest]
    fn option_interchange_with_none() {
        let ab: Function<i32, i32> = Rc::new(|n| n + 1);
        assert_eq!(interchange::<OptionBrand, i32, i32>(&Equivalence::structural(), &ab, 3, None), Ok(()));
    }

    #[rstest]
    fn identity_homomorphism() {
        let ab: Function<&str, usize> = Rc::new(str::len);
        assert_eq!(homomorphism::<IdentityBrand, &str, usize>(&Equivalence::structural(), &ab, "four"), Ok(()));
        assert_eq!(identity::<IdentityBrand, &str>(&Equivalence::structural(), Identity("x")), Ok(()));
    }
}
