use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use jdp_benches::available_corpora;
use jdp_core::DiffOptions;

fn bench_diff(c: &mut Criterion) {
    let mut group = c.benchmark_group("diff");
    let options = DiffOptions::default();
    for corpus in available_corpora() {
        let before = corpus.before();
        let after = corpus.after();
        group.throughput(Throughput::Bytes(corpus.fixture_bytes() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(corpus.name()),
            &(before, after),
            |b, (before, after)| {
                b.iter(|| {
                    let delta = jdp_core::diff(before, after, &options);
                    black_box(delta)
                });
            },
        );
    }
    group.finish();
}

fn bench_patch_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("patch-apply");
    let options = DiffOptions::default();
    for corpus in available_corpora() {
        let before = corpus.before();
        let after = corpus.after();
        let delta =
            jdp_core::diff(&before, &after, &options).expect("diff").expect("fixtures differ");
        group.throughput(Throughput::Bytes(corpus.fixture_bytes() as u64));
        group.bench_function(corpus.name(), |b| {
            b.iter(|| {
                let patched = jdp_core::patch(&before, &delta, &options);
                black_box(patched)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_diff, bench_patch_apply);
criterion_main!(benches);
