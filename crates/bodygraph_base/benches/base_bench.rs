use criterion::{Criterion, black_box, criterion_group, criterion_main};

use bodygraph_base::{
    GateSet, defined_centers, degree_to_gate_line, determine_authority, determine_type,
};

fn mapper_bench(c: &mut Criterion) {
    c.bench_function("degree_to_gate_line", |b| {
        b.iter(|| degree_to_gate_line(black_box(196.4)))
    });
}

fn derive_bench(c: &mut Criterion) {
    let gates: GateSet = [1, 8, 20, 34, 57, 10, 35, 36, 19, 49, 64, 47, 3, 60].into_iter().collect();
    c.bench_function("derive_chart", |b| {
        b.iter(|| {
            let defined = defined_centers(black_box(&gates));
            (
                determine_type(&defined, &gates),
                determine_authority(&defined),
            )
        })
    });
}

criterion_group!(benches, mapper_bench, derive_bench);
criterion_main!(benches);
