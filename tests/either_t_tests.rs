#![cfg(feature = "transformer")]
//! Behavioral tests for `EitherT` over `IO` and `Option`.

use std::cell::Cell;
use std::rc::Rc;

use kindred::effect::{IO, IOBrand};
use kindred::transformer::{EitherT, either_t};
use kindred::typeclass::{Apply, Chainable, Functor, OptionBrand, Pointed, function};
use rstest::rstest;

type IOEither = EitherT<IOBrand, String>;

fn counter() -> Rc<Cell<usize>> {
    Rc::new(Cell::new(0))
}

#[rstest]
fn chain_on_left_skips_continuation_and_effects() {
    let calls = counter();
    let seen = Rc::clone(&calls);
    let program = IOEither::chain(either_t::left::<IOBrand, String, i32>("denied".into()), move |n: i32| {
        seen.set(seen.get() + 1);
        either_t::right::<IOBrand, String, i32>(n)
    });

    assert_eq!(program.run_unsafe(), Err("denied".to_string()));
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn effects_are_deferred_until_run() {
    let calls = counter();
    let seen = Rc::clone(&calls);
    let program = IOEither::map(
        IO::new(move || {
            seen.set(seen.get() + 1);
            Ok::<i32, String>(2)
        }),
        |n: i32| n * 21,
    );

    assert_eq!(calls.get(), 0);
    assert_eq!(program.run_unsafe(), Ok(42));
    assert_eq!(program.run_unsafe(), Ok(42));
    assert_eq!(calls.get(), 2);
}

#[rstest]
fn alt_evaluates_fallback_only_on_left() {
    let calls = counter();
    let fallback = {
        let calls = Rc::clone(&calls);
        move || {
            calls.set(calls.get() + 1);
            either_t::right::<IOBrand, String, i32>(0)
        }
    };

    let kept = either_t::alt::<IOBrand, String, i32, _>(IOEither::of(7), fallback.clone());
    assert_eq!(kept.run_unsafe(), Ok(7));
    assert_eq!(calls.get(), 0);

    let recovered = either_t::alt::<IOBrand, String, i32, _>(
        either_t::left::<IOBrand, String, i32>("missing".into()),
        fallback,
    );
    assert_eq!(recovered.run_unsafe(), Ok(0));
    assert_eq!(calls.get(), 1);
}

#[rstest]
#[case(Err("first".to_string()), Ok(()), Err("first".to_string()))]
#[case(Err("first".to_string()), Err("second".to_string()), Err("second".to_string()))]
fn chain_first_left_keeps_or_replaces_error(
    #[case] input: Result<i32, String>,
    #[case] side_effect: Result<(), String>,
    #[case] expected: Result<i32, String>,
) {
    let program = either_t::chain_first_left::<IOBrand, String, i32, (), _>(
        either_t::from_either::<IOBrand, String, i32>(input),
        move |_| IO::pure(side_effect.clone()),
    );
    assert_eq!(program.run_unsafe(), expected);
}

#[rstest]
fn chain_first_left_ignores_success() {
    let program = either_t::chain_first_left::<IOBrand, String, i32, (), _>(
        either_t::right::<IOBrand, String, i32>(3),
        |_| -> IO<Result<(), String>> { unreachable!("success path") },
    );
    assert_eq!(program.run_unsafe(), Ok(3));
}

#[rstest]
fn fold_and_get_or_else() {
    let describe = either_t::fold::<OptionBrand, String, i32, String, _, _>(
        Some(Err("bad".to_string())),
        |error| Some(format!("error: {error}")),
        |value| Some(format!("value: {value}")),
    );
    assert_eq!(describe, Some("error: bad".to_string()));

    let defaulted =
        either_t::get_or_else::<OptionBrand, String, i32, _>(Some(Err("bad".to_string())), |_| Some(-1));
    assert_eq!(defaulted, Some(-1));
}

#[rstest]
fn left_side_combinators() {
    let failed = || either_t::left::<OptionBrand, i32, &str>(404);

    assert_eq!(either_t::map_left::<OptionBrand, i32, String, &str, _>(failed(), |code| code.to_string()), Some(Err("404".to_string())));
    assert_eq!(
        either_t::bimap::<OptionBrand, i32, i64, &str, usize, _, _>(failed(), i64::from, str::len),
        Some(Err(404_i64))
    );
    assert_eq!(
        either_t::or_else::<OptionBrand, i32, i32, &str, _>(failed(), |_| Some(Ok("recovered"))),
        Some(Ok("recovered"))
    );
    assert_eq!(either_t::or_left::<OptionBrand, i32, bool, &str, _>(failed(), |code| Some(code > 400)), Some(Err(true)));
    assert_eq!(either_t::swap::<OptionBrand, i32, &str>(failed()), Some(Ok(404)));
}

#[rstest]
fn from_option_and_chain_either_k() {
    let parsed = either_t::chain_either_k::<OptionBrand, String, &str, i32, _>(
        either_t::from_option::<OptionBrand, String, &str, _>(Some("12"), || "absent".to_string()),
        |text| text.parse::<i32>().map_err(|error| error.to_string()),
    );
    assert_eq!(parsed, Some(Ok(12)));

    let absent = either_t::from_option::<OptionBrand, String, i32, _>(None, || "absent".to_string());
    assert_eq!(absent, Some(Err("absent".to_string())));
}

#[rstest]
fn ap_reports_function_error_first() {
    let fab = either_t::left::<IOBrand, String, kindred::typeclass::Function<i32, i32>>("function".into());
    let fa = either_t::left::<IOBrand, String, i32>("value".into());
    assert_eq!(IOEither::ap(fab, fa).run_unsafe(), Err("function".to_string()));

    let fab = IOEither::of(function(|n: i32| n + 1));
    assert_eq!(IOEither::ap(fab, IOEither::of(1)).run_unsafe(), Ok(2));
}

#[rstest]
fn right_f_and_left_f_lift_inner_effects() {
    assert_eq!(either_t::right_f::<IOBrand, String, i32>(IO::pure(5)).run_unsafe(), Ok(5));
    assert_eq!(either_t::left_f::<IOBrand, String, i32>(IO::pure("e".to_string())).run_unsafe(), Err("e".to_string()));
}
