//! Criterion benchmarks for curve evaluation
//!
//! Run with: cargo bench -p distplot_core

use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use distplot_core::{DistributionKind, DistributionPlot, Grid, evaluate};

fn bench_evaluate(c: &mut Criterion) {
    let grid = Grid::default();
    let mut group = c.benchmark_group("evaluate");

    for kind in DistributionKind::ALL {
        let spec = kind.spec();
        let values: Vec<f64> = spec.params.iter().map(|p| p.default).collect();
        group.bench_with_input(BenchmarkId::from_parameter(kind), &values, |b, values| {
            b.iter(|| evaluate(black_box(&grid), spec.density, black_box(values)))
        });
    }

    group.finish();
}

fn bench_slider_drag(c: &mut Criterion) {
    let grid = Arc::new(Grid::default());
    let mut plot = DistributionPlot::initialize(&DistributionKind::Pareto.spec(), grid);

    // One full sweep of the shape slider, one recompute per step
    c.bench_function("pareto_shape_sweep", |b| {
        b.iter(|| {
            plot.set_control(0, -5.0);
            for _ in 0..100 {
                plot.nudge_control(0, 1);
            }
            black_box(plot.line().ys()[500])
        })
    });
}

criterion_group!(benches, bench_evaluate, bench_slider_drag);
criterion_main!(benches);
