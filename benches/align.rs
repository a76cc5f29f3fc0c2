use banded_aligner::{generate::setup_sequences, prelude::*};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench(c: &mut Criterion) {
    let c = &mut c.benchmark_group("align");
    for n in [100, 1000] {
        // Few errors, so that the lengths stay within the band.
        let (ref a, ref b) = setup_sequences(n, 0.01);
        for banded in [false, true] {
            let aligner = Aligner::new(AlignParams {
                banded,
                ..AlignParams::default()
            });
            let name = if banded { "Banded" } else { "Full" };
            c.bench_function(BenchmarkId::new(name, n), |bb| {
                bb.iter(|| aligner.align(a, b))
            });
        }
    }

    let (ref a, ref b) = setup_sequences(1000, 0.01);
    let cm = LinearCost::default();
    c.bench_function(BenchmarkId::new("FullTable", 1000), |bb| {
        bb.iter(|| FullTable::build(a, b, &cm).score())
    });
    c.bench_function(BenchmarkId::new("BandedTable", 1000), |bb| {
        bb.iter(|| BandedTable::build(a, b, &cm, Band::default()).score())
    });
}

criterion_group!(benches, bench);
criterion_main!(benches);
