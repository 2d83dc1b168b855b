#![cfg(feature = "combinator")]
//! Do-notation scenarios run against several instances.
//!
//! Each scenario is written once against the trait bounds and then
//! instantiated for a concrete brand, including transformer stacks.

use kindred::combinator::{ap_s, bind, bind_to, chain, chain_first, do_, flap, let_, let_to, map};
use kindred::pipe;
use kindred::typeclass::{
    Apply, Chainable, Function, Monad, OptionBrand, Pointed, ResultBrand, VecBrand, function,
};
use rstest::rstest;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct State {
    x: i32,
    y: i32,
    z: i32,
}

fn set_x(state: State, x: i32) -> State {
    State { x, ..state }
}

fn set_y(state: State, y: i32) -> State {
    State { y, ..state }
}

fn set_z(state: State, z: i32) -> State {
    State { z, ..state }
}

/// `x <- of(10); y = 20`
fn bind_then_let<F: Monad>() -> F::Applied<State> {
    pipe!(
        do_::<F, _>(State::default()),
        bind::<F, _, _, _, _, _>(set_x, |_| F::of(10_i32)),
        let_::<F, _, _, _, _, _>(set_y, |_| 20)
    )
}

/// `x <- of(10); y <- of(20); z <- ap(of(30))`
fn bind_then_ap_s<F: Monad>() -> F::Applied<State>
where
    F::Applied<i32>: Clone,
{
    pipe!(
        do_::<F, _>(State::default()),
        bind::<F, _, _, _, _, _>(set_x, |_| F::of(10_i32)),
        bind::<F, _, _, _, _, _>(set_y, |_| F::of(20_i32)),
        ap_s::<F, _, _, _, _>(set_z, F::of(30_i32))
    )
}

#[rstest]
fn bind_and_let_for_option() {
    assert_eq!(bind_then_let::<OptionBrand>(), Some(State { x: 10, y: 20, z: 0 }));
}

#[rstest]
fn bind_and_ap_s_for_result() {
    assert_eq!(bind_then_ap_s::<ResultBrand<String>>(), Ok(State { x: 10, y: 20, z: 30 }));
}

#[rstest]
fn bind_and_ap_s_for_vec() {
    assert_eq!(bind_then_ap_s::<VecBrand>(), vec![State { x: 10, y: 20, z: 30 }]);
}

/// `x <- of(10); y <- ap(of(20)); z <- ap(of(30))`, with the two `ap_s`
/// steps in the requested order.
fn two_ap_s<F: Monad>(y_first: bool) -> F::Applied<State>
where
    F::Applied<i32>: Clone,
{
    let seeded = pipe!(
        do_::<F, _>(State::default()),
        bind::<F, _, _, _, _, _>(set_x, |_| F::of(10_i32))
    );
    let with_y = ap_s::<F, _, _, _, _>(set_y, F::of(20_i32));
    let with_z = ap_s::<F, _, _, _, _>(set_z, F::of(30_i32));
    if y_first { with_z(with_y(seeded)) } else { with_y(with_z(seeded)) }
}

#[rstest]
#[case(true)]
#[case(false)]
fn independent_ap_s_steps_commute(#[case] y_first: bool) {
    let expected = State { x: 10, y: 20, z: 30 };
    assert_eq!(two_ap_s::<OptionBrand>(y_first), OptionBrand::of(expected.clone()));
    assert_eq!(two_ap_s::<VecBrand>(y_first), VecBrand::of(expected));
}

#[rstest]
fn bind_sees_fields_set_earlier() {
    let result = pipe!(
        do_::<OptionBrand, _>(State::default()),
        let_to::<OptionBrand, _, _, _, _>(set_x, 4),
        bind::<OptionBrand, _, _, _, _, _>(set_y, |state: State| Some(state.x * 2)),
        let_::<OptionBrand, _, _, _, _, _>(set_z, |state: State| state.x + state.y)
    );
    assert_eq!(result, Some(State { x: 4, y: 8, z: 12 }));
}

#[rstest]
fn failing_bind_short_circuits_later_steps() {
    let result = pipe!(
        do_::<ResultBrand<&str>, _>(State::default()),
        bind::<ResultBrand<&str>, _, _, _, _, _>(set_x, |_| Err("no x")),
        let_::<ResultBrand<&str>, _, _, _, _, _>(set_y, |_: State| -> i32 { unreachable!("skipped") })
    );
    assert_eq!(result, Err("no x"));
}

#[rstest]
fn vec_bind_enumerates_every_combination() {
    let result = pipe!(
        vec![1, 2],
        bind_to::<VecBrand, _, _, _>(|x: i32| State { x, ..State::default() }),
        bind::<VecBrand, _, _, _, _, _>(set_y, |state: State| vec![state.x, state.x * 10])
    );
    let pairs: Vec<(i32, i32)> = result.into_iter().map(|state| (state.x, state.y)).collect();
    assert_eq!(pairs, vec![(1, 1), (1, 10), (2, 2), (2, 20)]);
}

#[rstest]
fn ap_s_with_missing_effect_is_none() {
    let result = pipe!(
        do_::<OptionBrand, _>(State::default()),
        ap_s::<OptionBrand, _, _, _, _>(set_z, None)
    );
    assert_eq!(result, None);
}

#[rstest]
fn curried_operators_compose_in_pipelines() {
    let result = pipe!(
        Some(3),
        map::<OptionBrand, _, _, _>(|n: i32| n + 1),
        chain_first::<OptionBrand, _, _, _>(|n: i32| (n > 0).then_some(())),
        chain::<OptionBrand, _, _, _>(|n: i32| Some(n * 100))
    );
    assert_eq!(result, Some(400));

    let functions: Vec<Function<i32, i32>> = vec![function(|n| n + 1), function(|n| n * n)];
    assert_eq!(flap::<VecBrand, _, _>(7)(functions), vec![8, 49]);
}

#[rstest]
fn map2_through_generic_code() {
    fn sum<F: Apply>(left: F::Applied<i32>, right: F::Applied<i32>) -> F::Applied<i32> {
        F::map2::<i32, i32, i32, _>(left, right, |a, b| a + b)
    }
    assert_eq!(sum::<OptionBrand>(Some(1), Some(2)), Some(3));
    assert_eq!(sum::<VecBrand>(vec![1, 2], vec![10]), vec![11, 12]);
}

#[rstest]
fn flatten_nested_results() {
    let nested: Result<Result<i32, String>, String> = Ok(Err("inner".to_string()));
    assert_eq!(ResultBrand::<String>::flatten(nested), Err("inner".to_string()));
}

#[cfg(feature = "transformer")]
mod stacks {
    use super::*;
    use kindred::effect::{IO, IOBrand};
    use kindred::transformer::{EitherT, ReaderT, ReaderTBrand};

    #[rstest]
    fn io_either_runs_scenario_when_executed() {
        let program = bind_then_ap_s::<EitherT<IOBrand, String>>();
        assert_eq!(program.run_unsafe(), Ok(State { x: 10, y: 20, z: 30 }));
    }

    #[rstest]
    fn reader_io_either_reads_environment_in_bind() {
        type App = ReaderTBrand<i32, EitherT<IOBrand, String>>;
        let program = pipe!(
            do_::<App, _>(State::default()),
            bind::<App, _, _, _, _, _>(set_x, |_| {
                ReaderT::new(|limit: i32| IO::pure(if limit > 0 { Ok(limit) } else { Err("limit".to_string()) }))
            }),
            let_::<App, _, _, _, _, _>(set_y, |state: State| state.x + 1)
        );
        assert_eq!(program.run(5).run_unsafe(), Ok(State { x: 5, y: 6, z: 0 }));
        assert_eq!(program.run(0).run_unsafe(), Err("limit".to_string()));
    }
}
