use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ol_core::{ExerciseType, OptionType};
use ol_methods::lattice::{
    european_binomial, LatticeEngine, LatticeSettings, NodeBuffer, ParameterSet, TreeVariant,
};
use std::hint::black_box;

fn american_put(steps: usize) -> ParameterSet {
    ParameterSet::new(
        OptionType::Put,
        ExerciseType::American,
        100.0,
        100.0,
        0.5,
        0.1,
        0.02,
        0.125,
        steps,
    )
}

fn bench_price_and_greeks(c: &mut Criterion) {
    let mut group = c.benchmark_group("lattice_price_and_greeks");
    for variant in TreeVariant::ALL {
        let engine = LatticeEngine::new(LatticeSettings::default().with_variant(variant));
        for steps in [50usize, 200, 1000] {
            let params = american_put(steps);
            group.bench_with_input(
                BenchmarkId::new(format!("{variant:?}"), steps),
                &params,
                |b, params| {
                    b.iter(|| {
                        let result = engine
                            .calculate(black_box(params))
                            .expect("valid inputs should price");
                        black_box(result)
                    })
                },
            );
        }
    }
    group.finish();
}

fn bench_reused_buffer(c: &mut Criterion) {
    let engine = LatticeEngine::default();
    let params = american_put(500);
    let mut buffer = NodeBuffer::default();

    c.bench_function("crr_american_put_500_reused_buffer", |b| {
        b.iter(|| {
            let price = engine
                .price_with_buffer(black_box(&params), &mut buffer)
                .expect("valid inputs should price");
            black_box(price)
        })
    });
}

fn bench_european_binomial_sum(c: &mut Criterion) {
    c.bench_function("european_binomial_sum_500", |b| {
        b.iter(|| {
            let price = european_binomial::price(
                OptionType::Call,
                black_box(100.0),
                100.0,
                0.5,
                0.1,
                0.02,
                0.125,
                500,
            )
            .expect("valid inputs should price");
            black_box(price)
        })
    });
}

criterion_group!(
    benches,
    bench_price_and_greeks,
    bench_reused_buffer,
    bench_european_binomial_sum
);
criterion_main!(benches);
