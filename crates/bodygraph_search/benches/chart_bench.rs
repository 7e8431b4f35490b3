use criterion::{Criterion, black_box, criterion_group, criterion_main};

use bodygraph_ephem::AnalyticEphemeris;
use bodygraph_search::{
    ChartConfig, DesignSearchConfig, calculate_chart, chart_point_at, find_design_jd,
};
use bodygraph_time::BirthTime;

fn design_search_bench(c: &mut Criterion) {
    let eph = AnalyticEphemeris::default();
    let config = DesignSearchConfig::default();
    c.bench_function("find_design_jd", |b| {
        b.iter(|| find_design_jd(&eph, black_box(2_447_444.020_833), &config))
    });
}

fn chart_bench(c: &mut Criterion) {
    let eph = AnalyticEphemeris::default();
    let birth = BirthTime::new(1988, 10, 9, 5, 30, -7.0);
    let config = ChartConfig::default();

    let mut group = c.benchmark_group("chart");
    group.bench_function("chart_point_at", |b| {
        b.iter(|| chart_point_at(&eph, black_box(2_447_444.020_833)))
    });
    group.bench_function("calculate_chart", |b| {
        b.iter(|| calculate_chart(&eph, black_box(&birth), &config))
    });
    group.finish();
}

criterion_group!(benches, design_search_bench, chart_bench);
criterion_main!(benches);
