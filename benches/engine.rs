//! Engine throughput benchmarks (Criterion).
//!
//! Run: `cargo bench` or `cargo bench --bench engine`.

use clob_engine::{CollectSink, Engine, Generator, GeneratorConfig, OrderId};
use criterion::{criterion_group, criterion_main, BatchSize, Criterion, Throughput};

fn bench_submit_throughput(c: &mut Criterion) {
    const N: usize = 1000;
    let mut group = c.benchmark_group("engine");
    group.throughput(Throughput::Elements(N as u64));
    group.bench_function("submit_1000", |b| {
        b.iter_batched(
            || {
                let config = GeneratorConfig {
                    seed: 42,
                    num_orders: N,
                    ..Default::default()
                };
                let engine = Engine::new(Box::new(CollectSink::new()));
                let orders = Generator::new(config).all_orders();
                (engine, orders)
            },
            |(mut engine, orders)| {
                for order in orders {
                    engine.submit(order).unwrap();
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_cancel(c: &mut Criterion) {
    const RESTING: usize = 500;
    const CANCELS_PER_ITER: usize = 100;
    let mut group = c.benchmark_group("engine");
    group.throughput(Throughput::Elements(CANCELS_PER_ITER as u64));
    group.bench_function("cancel_100_after_500_resting", |b| {
        b.iter_batched(
            || {
                // All buys: nothing crosses, so every order rests.
                let config = GeneratorConfig {
                    seed: 123,
                    num_orders: RESTING,
                    buy_ratio: 1.0,
                    price_min: 1,
                    price_max: 500,
                    ..Default::default()
                };
                let mut engine = Engine::new(Box::new(CollectSink::new()));
                let orders = Generator::new(config).all_orders();
                let cancel_ids: Vec<OrderId> = orders[..CANCELS_PER_ITER]
                    .iter()
                    .map(|o| o.id.clone())
                    .collect();
                for order in orders {
                    engine.submit(order).unwrap();
                }
                (engine, cancel_ids)
            },
            |(mut engine, cancel_ids)| {
                for id in &cancel_ids {
                    engine.cancel(id).unwrap();
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_submit_throughput, bench_cancel);
criterion_main!(benches);
