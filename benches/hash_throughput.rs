// Benchmark for hash algorithm throughput.
// Run with: cargo bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hashbench::digest::HashAlgorithm;

fn bench_hashing(c: &mut Criterion) {
    // Representative catalogue sizes: 1KB, 64KB, 512KB, 4MB
    let sizes: [(usize, &str); 4] = [
        (1024, "1KB"),
        (64 * 1024, "64KB"),
        (512 * 1024, "512KB"),
        (4 * 1024 * 1024, "4MB"),
    ];

    let algorithms = [
        HashAlgorithm::Md5,
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha256,
    ];

    let mut group = c.benchmark_group("hash_throughput");

    for (size, label) in sizes {
        let data = vec![0u8; size];

        group.throughput(Throughput::Bytes(size as u64));

        for algo in algorithms {
            group.bench_with_input(
                BenchmarkId::new(algo.log_name(), label),
                &data,
                |b, data| {
                    b.iter(|| {
                        let mut hasher = algo.hasher();
                        hasher.update(data);
                        hasher.finalize_hex()
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_hashing);
criterion_main!(benches);
