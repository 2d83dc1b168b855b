//! Do-notation as a pipeline of operators over an accumulated context.
//!
//! A computation starts from a seed context with [`do_`] (or [`bind_to`]) and
//! each step returns a fresh context built by a *setter*
//! `Fn(S1, T) -> S2` from the previous context and a new field value.
//!
//! - [`bind`]: the field comes from an effect that may look at the context
//! - [`ap_s`]: the field comes from an independent effect
//! - [`let_`]: the field is computed purely from the context
//! - [`let_to`]: the field is a constant
//!
//! # Examples
//!
//! ```rust
//! use kindred::combinator::{bind, do_, let_};
//! use kindred::pipe;
//! use kindred::typeclass::OptionBrand;
//!
//! #[derive(Debug, Clone, Default, PartialEq)]
//! struct Order {
//!     quantity: u32,
//!     total: u32,
//! }
//!
//! let order = pipe!(
//!     do_::<OptionBrand, _>(Order::default()),
//!     bind::<OptionBrand, _, _, _, _, _>(
//!         |order: Order, quantity| Order { quantity, ..order },
//!         |_| Some(3),
//!     ),
//!     let_::<OptionBrand, _, _, _, _, _>(
//!         |order: Order, total| Order { total, ..order },
//!         |order: Order| order.quantity * 250,
//!     )
//! );
//! assert_eq!(order, Some(Order { quantity: 3, total: 750 }));
//! ```

use std::rc::Rc;

use crate::typeclass::{Apply, Chainable, Function, Functor, Pointed};

/// Lifts the seed context.
#[inline]
pub fn do_<F, S>(empty: S) -> F::Applied<S>
where
    F: Pointed,
    S: Clone + 'static,
{
    F::of(empty)
}

/// Seeds a context from the value already inside the effect.
pub fn bind_to<F, T, S, Setter>(setter: Setter) -> impl Fn(F::Applied<T>) -> F::Applied<S>
where
    F: Functor,
    T: 'static,
    S: 'static,
    Setter: Fn(T) -> S + 'static,
{
    let setter = Rc::new(setter);
    move |ft: F::Applied<T>| {
        let setter = Rc::clone(&setter);
        F::map::<T, S, _>(ft, move |value| setter(value))
    }
}

/// Runs a dependent effect and stores its value in the context.
///
/// One `chain` and one `map` per step.
pub fn bind<F, S1, S2, T, Setter, K>(setter: Setter, function: K) -> impl Fn(F::Applied<S1>) -> F::Applied<S2>
where
    F: Chainable,
    S1: Clone + 'static,
    S2: 'static,
    T: 'static,
    Setter: Fn(S1, T) -> S2 + 'static,
    K: Fn(S1) -> F::Applied<T> + 'static,
{
    let setter = Rc::new(setter);
    let function = Rc::new(function);
    move |fs: F::Applied<S1>| {
        let setter = Rc::clone(&setter);
        let function = Rc::clone(&function);
        F::chain::<S1, S2, _>(fs, move |context: S1| {
            let setter = Rc::clone(&setter);
            let previous = context.clone();
            F::map::<T, S2, _>(function(context), move |value| setter(previous.clone(), value))
        })
    }
}

/// Stores a value computed purely from the context.
pub fn let_<F, S1, S2, T, Setter, K>(setter: Setter, function: K) -> impl Fn(F::Applied<S1>) -> F::Applied<S2>
where
    F: Functor,
    S1: Clone + 'static,
    S2: 'static,
    T: 'static,
    Setter: Fn(S1, T) -> S2 + 'static,
    K: Fn(S1) -> T + 'static,
{
    let step = Rc::new(move |context: S1| {
        let value = function(context.clone());
        setter(context, value)
    });
    move |fs: F::Applied<S1>| {
        let step = Rc::clone(&step);
        F::map::<S1, S2, _>(fs, move |context| step(context))
    }
}

/// Stores a constant in the context.
pub fn let_to<F, S1, S2, T, Setter>(setter: Setter, value: T) -> impl Fn(F::Applied<S1>) -> F::Applied<S2>
where
    F: Functor,
    S1: Clone + 'static,
    S2: 'static,
    T: Clone + 'static,
    Setter: Fn(S1, T) -> S2 + 'static,
{
    let_::<F, S1, S2, T, _, _>(setter, move |_| value.clone())
}

/// Stores the value of an effect that does not depend on the context.
///
/// The effect `fa` is combined with the context through `ap`, so it cannot
/// observe intermediate context state.
pub fn ap_s<F, S1, S2, T, Setter>(setter: Setter, fa: F::Applied<T>) -> impl Fn(F::Applied<S1>) -> F::Applied<S2>
where
    F: Apply,
    S1: Clone + 'static,
    S2: 'static,
    T: Clone + 'static,
    Setter: Fn(S1, T) -> S2 + 'static,
    F::Applied<T>: Clone,
{
    let setter = Rc::new(setter);
    move |fs: F::Applied<S1>| {
        let setter = Rc::clone(&setter);
        let with_context = F::map::<S1, Function<T, S2>, _>(fs, move |context: S1| -> Function<T, S2> {
            let setter = Rc::clone(&setter);
            Rc::new(move |value: T| setter(context.clone(), value))
        });
        F::ap::<T, S2>(with_context, fa.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{OptionBrand, ResultBrand, VecBrand};
    use rstest::rstest;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    fn set_x(point: Point, x: i32) -> Point {
        Point { x, ..point }
    }

    fn set_y(point: Point, y: i32) -> Point {
        Point { y, ..point }
    }

    #[rstest]
    fn do_lifts_seed() {
        assert_eq!(do_::<OptionBrand, _>(Point::default()), Some(Point::default()));
    }

    #[rstest]
    fn bind_sees_previous_fields() {
        let start = do_::<OptionBrand, _>(Point::default());
        let with_x = bind::<OptionBrand, _, _, _, _, _>(set_x, |_: Point| Some(4))(start);
        let with_y = bind::<OptionBrand, _, _, _, _, _>(set_y, |point: Point| Some(point.x + 1))(with_x);
        assert_eq!(with_y, Some(Point { x: 4, y: 5 }));
    }

    #[rstest]
    fn bind_failure_short_circuits() {
        let start = do_::<ResultBrand<&str>, _>(Point::default());
        let failed = bind::<ResultBrand<&str>, _, _, _, _, _>(set_x, |_: Point| Err("no x"))(start);
        assert_eq!(failed, Err("no x"));
    }

    #[rstest]
    fn bind_to_seeds_context() {
        let seeded = bind_to::<VecBrand, i32, Point, _>(|x| Point { x, y: 0 })(vec![1, 2]);
        assert_eq!(seeded, vec![Point { x: 1, y: 0 }, Point { x: 2, y: 0 }]);
    }

    #[rstest]
    fn let_and_let_to_are_pure_steps() {
        let doubled = let_::<OptionBrand, _, _, _, _, _>(set_y, |point: Point| point.x * 2);
        let fixed = let_to::<OptionBrand, _, _, _, _>(set_x, 7);
        assert_eq!(doubled(Some(Point { x: 3, y: 0 })), Some(Point { x: 3, y: 6 }));
        assert_eq!(fixed(Some(Point::default())), Some(Point { x: 7, y: 0 }));
    }

    #[rstest]
    fn ap_s_combines_independent_effect() {
        let with_y = ap_s::<VecBrand, _, _, _, _>(set_y, vec![1, 2]);
        assert_eq!(
            with_y(vec![Point::default()]),
            vec![Point { x: 0, y: 1 }, Point { x: 0, y: 2 }]
        );
    }
}
