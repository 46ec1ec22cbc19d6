use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sha256_engine::sha256;

fn bench_sha256(c: &mut Criterion) {
    let mut group = c.benchmark_group("sha256");

    for size in [64usize, 1024, 16 * 1024] {
        let message = vec![0xa5u8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &message, |b, m| {
            b.iter(|| sha256(black_box(m)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sha256);
criterion_main!(benches);
