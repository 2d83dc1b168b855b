//! Benchmark for the brand-generic combinators and transformer stacks.
//!
//! Compares direct trait calls with the curried operators and measures the
//! overhead of running `EitherT` and `ReaderT` stacks.

use criterion::{Criterion, criterion_group, criterion_main};
use kindred::combinator::{bind, chain, do_, let_, map};
use kindred::control::Memoized;
use kindred::effect::{IO, IOBrand};
use kindred::pipe;
use kindred::transformer::{EitherT, ReaderT, ReaderTBrand};
use kindred::typeclass::{Chainable, Functor, OptionBrand, Pointed, VecBrand};
use std::hint::black_box;

// =============================================================================
// Option / Vec
// =============================================================================

fn benchmark_option_operators(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("option_operators");

    group.bench_function("trait_map_chain", |bencher| {
        bencher.iter(|| {
            let mapped = OptionBrand::map(black_box(Some(1)), |n: i32| n + 1);
            black_box(OptionBrand::chain(mapped, |n: i32| Some(n * 2)))
        });
    });

    let pipeline = {
        let increment = map::<OptionBrand, _, _, _>(|n: i32| n + 1);
        let double = chain::<OptionBrand, _, _, _>(|n: i32| Some(n * 2));
        move |value: Option<i32>| double(increment(value))
    };
    group.bench_function("curried_map_chain", |bencher| {
        bencher.iter(|| black_box(pipeline(black_box(Some(1)))));
    });

    group.finish();
}

fn benchmark_vec_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("vec_chain");
    let input: Vec<i32> = (0..1_000).collect();

    group.bench_function("chain_1000", |bencher| {
        bencher.iter(|| black_box(VecBrand::chain(input.clone(), |n: i32| vec![n, n + 1])));
    });

    group.bench_function("chain_first_1000", |bencher| {
        bencher.iter(|| black_box(VecBrand::chain_first(input.clone(), |n: i32| vec![n])));
    });

    group.finish();
}

// =============================================================================
// Do-notation
// =============================================================================

#[derive(Clone, Default)]
struct Context {
    first: i32,
    second: i32,
}

fn benchmark_do_notation(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("do_notation");

    group.bench_function("option_bind_let", |bencher| {
        bencher.iter(|| {
            let result = pipe!(
                do_::<OptionBrand, _>(Context::default()),
                bind::<OptionBrand, _, _, _, _, _>(
                    |context: Context, first| Context { first, ..context },
                    |_| Some(black_box(10)),
                ),
                let_::<OptionBrand, _, _, _, _, _>(
                    |context: Context, second| Context { second, ..context },
                    |context: Context| context.first * 2,
                )
            );
            black_box(result.map(|context| context.first + context.second))
        });
    });

    group.finish();
}

// =============================================================================
// Transformers
// =============================================================================

fn benchmark_transformer_stacks(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("transformer_stacks");

    type IOEither = EitherT<IOBrand, String>;
    let io_either = (0..10).fold(IOEither::of(0), |program, _| {
        IOEither::chain(program, |n: i32| IO::pure(Ok::<i32, String>(n + 1)))
    });
    group.bench_function("io_either_chain_10", |bencher| {
        bencher.iter(|| black_box(io_either.run_unsafe()));
    });

    type App = ReaderTBrand<i32, EitherT<IOBrand, String>>;
    let reader_io_either = (0..10).fold(App::of(0), |program, _| {
        App::chain(program, |n: i32| ReaderT::new(move |step: i32| IO::pure(Ok(n + step))))
    });
    group.bench_function("reader_io_either_chain_10", |bencher| {
        bencher.iter(|| black_box(reader_io_either.run(black_box(1)).run_unsafe()));
    });

    group.finish();
}

// =============================================================================
// Memoization
// =============================================================================

fn benchmark_memoized(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("memoized");

    group.bench_function("force_evaluated", |bencher| {
        let memoized = Memoized::new(|| (0..100).sum::<i32>());
        let _ = memoized.force();
        bencher.iter(|| black_box(*memoized.force()));
    });

    group.bench_function("create_and_force", |bencher| {
        bencher.iter(|| {
            let memoized = Memoized::new(|| black_box(42));
            black_box(*memoized.force())
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_option_operators,
    benchmark_vec_chain,
    benchmark_do_notation,
    benchmark_transformer_stacks,
    benchmark_memoized
);

criterion_main!(benches);
