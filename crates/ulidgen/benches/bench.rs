use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::{sync::Arc, thread::scope, time::Instant};
use ulidgen::{FixedClock, MonotonicRandom, SystemClock, ThreadRandom, Ulid, UlidFactory};

// Number of IDs generated per benchmark iteration (per-thread for
// multi-threaded).
const TOTAL_IDS: usize = 4096;

// 2022-04-07T01:02:30.045Z
const FIXED_MILLIS: u64 = 1_649_293_350_045;

/// Same-millisecond generation: every call after the first increments.
fn bench_increment(c: &mut Criterion) {
    let mut group = c.benchmark_group("factory/fixed_clock");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        b.iter_custom(|iters| {
            let start = Instant::now();
            for _ in 0..iters {
                let factory = UlidFactory::new(FixedClock::new(FIXED_MILLIS), ThreadRandom);
                for _ in 0..TOTAL_IDS {
                    black_box(factory.generate_now().unwrap());
                }
            }
            start.elapsed()
        });
    });

    group.finish();
}

/// Wall-clock generation: mixes fresh draws and increments.
fn bench_system(c: &mut Criterion) {
    let mut group = c.benchmark_group("factory/system_clock");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    let factory = UlidFactory::new(SystemClock, ThreadRandom);
    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        b.iter(|| {
            for _ in 0..TOTAL_IDS {
                black_box(factory.generate_now().unwrap());
            }
        });
    });

    group.finish();
}

/// Contended generation through one shared generator.
fn bench_threaded(c: &mut Criterion) {
    const THREADS: usize = 8;
    let mut group = c.benchmark_group("factory/threads");
    group.throughput(Throughput::Elements((TOTAL_IDS * THREADS) as u64));

    group.bench_function(format!("threads/{THREADS}/elems/{TOTAL_IDS}"), |b| {
        b.iter_custom(|iters| {
            let generator = Arc::new(MonotonicRandom::new(ThreadRandom));
            let start = Instant::now();
            for _ in 0..iters {
                scope(|s| {
                    for _ in 0..THREADS {
                        let factory =
                            UlidFactory::with_generator(SystemClock, Arc::clone(&generator));
                        s.spawn(move || {
                            for _ in 0..TOTAL_IDS {
                                black_box(factory.generate_now().unwrap());
                            }
                        });
                    }
                });
            }
            start.elapsed()
        });
    });

    group.finish();
}

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("base32");
    let id = Ulid::from_u128(0x0180_0A63_5A4D_0123_4567_89AB_CDEF_0123);
    let encoded = id.to_string();

    group.bench_function("encode", |b| b.iter(|| black_box(black_box(&id).encode())));
    group.bench_function("decode", |b| {
        b.iter(|| black_box(Ulid::decode(black_box(&encoded)).unwrap()))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_increment,
    bench_system,
    bench_threaded,
    bench_codec
);
criterion_main!(benches);
