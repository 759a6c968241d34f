use criterion::{Criterion, black_box, criterion_group, criterion_main};
use gochara_base::{ALL_GRAHAS, Graha};
use gochara_timeline::{MotionModel, annual_timeline, graha_transits_with_model};

fn single_lane_bench(c: &mut Criterion) {
    let year = 2024;

    let mut group = c.benchmark_group("single_lane");
    group.bench_function("moon_year", |b| {
        b.iter(|| {
            graha_transits_with_model(
                black_box(year),
                Graha::Chandra,
                MotionModel::annual(Graha::Chandra, year),
            )
        })
    });
    group.bench_function("saturn_year", |b| {
        b.iter(|| {
            graha_transits_with_model(
                black_box(year),
                Graha::Shani,
                MotionModel::annual(Graha::Shani, year),
            )
        })
    });
    group.finish();
}

fn timeline_bench(c: &mut Criterion) {
    let year = 2024;

    let mut group = c.benchmark_group("timeline");
    group.bench_function("all_grahas_year", |b| {
        b.iter(|| annual_timeline(black_box(year), &ALL_GRAHAS))
    });
    group.finish();
}

criterion_group!(benches, single_lane_bench, timeline_bench);
criterion_main!(benches);
