use criterion::{
    BenchmarkId, Criterion, Throughput, {criterion_group, criterion_main},
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use sortkey::{f16, Direction, HalfOps, HalfOpsBuilder, KeyComparator, PathOption, Predicate};

fn random_keys(len: usize) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(0);
    (0..len).map(|_| rng.gen()).collect()
}

fn reference_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("reference_sort");
    let full = KeyComparator::<u32>::full(Direction::Ascending);
    let slice = KeyComparator::<u32>::new(Direction::Descending, 4, 20).unwrap();
    for size in [1_000, 10_000, 100_000].iter() {
        let keys = random_keys(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("full", size), &keys, |b, keys| {
            b.iter(|| {
                let mut keys = keys.clone();
                full.sort(&mut keys[..]);
                keys
            })
        });
        group.bench_with_input(BenchmarkId::new("slice", size), &keys, |b, keys| {
            b.iter(|| {
                let mut keys = keys.clone();
                slice.sort(&mut keys[..]);
                keys
            })
        });
    }
    group.finish();
}

fn half_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("half_sum");
    let mut rng = StdRng::seed_from_u64(1);
    let values: Vec<f16> = (0..10_000)
        .map(|_| f16::from_f32(rng.gen_range(-1.0..1.0)))
        .collect();
    let mut paths = vec![("fallback", HalfOps::fallback())];
    if let Ok(native) = HalfOpsBuilder::new().path(PathOption::NativeOnly).build() {
        paths.push(("native", native));
    }
    group.throughput(Throughput::Elements(values.len() as u64));
    for (name, ops) in paths {
        group.bench_with_input(BenchmarkId::from_parameter(name), &values, |b, values| {
            b.iter(|| values.iter().fold(f16::ZERO, |acc, &x| ops.plus(acc, x)))
        });
    }
    group.finish();
}

criterion_group!(benches, reference_sort, half_paths);
criterion_main!(benches);
