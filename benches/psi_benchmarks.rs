/// Performance benchmarks for psi computation
///
/// Run with: cargo bench
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};
use sj2psi::{compute_psi, JunctionRecord, PsiConfig};

/// Generate a synthetic junction table where roughly a third of donors are shared
fn generate_synthetic_table(num_junctions: usize) -> Vec<JunctionRecord> {
    let mut rng = StdRng::seed_from_u64(42);

    (0..num_junctions)
        .map(|i| {
            let chrom = format!("chr{}", i % 22 + 1);
            let donor = 10_000 + (i as u64 / 3) * 500;
            let acceptor = donor + rng.gen_range(100..5_000);
            JunctionRecord::new(chrom, donor, acceptor, rng.gen_range(0..200), rng.gen_range(0..50))
        })
        .collect()
}

fn bench_compute_psi(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_psi");
    let config = PsiConfig::default();

    for size in [1_000, 10_000, 100_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));

        let table = generate_synthetic_table(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &table, |b, table| {
            b.iter(|| compute_psi(black_box(table), &config).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compute_psi);
criterion_main!(benches);
