use criterion::{Criterion, criterion_group, criterion_main};

use mandelbrot_explorer::{
    AcceleratedEngine, Colour, FrameEngine, FrameParams, ReferenceEngine, ViewState,
    build_colour_table, COLOUR_TABLE_SIZE,
};

const WIDTH: u32 = 256;
const HEIGHT: u32 = 256;
const MAX_ITERS: u32 = 256;

fn bench_step_strategies(c: &mut Criterion) {
    let view = ViewState::new(WIDTH, HEIGHT);
    let table = build_colour_table(COLOUR_TABLE_SIZE);
    let params = FrameParams {
        view: &view,
        max_iters: MAX_ITERS,
        table: &table,
        width: WIDTH,
        height: HEIGHT,
    };
    let mut output = vec![Colour::INTERIOR; (WIDTH * HEIGHT) as usize];

    let mut group = c.benchmark_group("step");

    group.bench_function("reference", |b| {
        b.iter(|| ReferenceEngine.step(&params, &mut output));
    });

    let accelerated = AcceleratedEngine::new().expect("thread pool");
    group.bench_function("accelerated", |b| {
        b.iter(|| accelerated.step(&params, &mut output));
    });

    group.finish();
}

criterion_group!(benches, bench_step_strategies);
criterion_main!(benches);
