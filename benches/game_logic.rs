use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_blocks::core::collision::{try_rotate, try_shift};
use tui_blocks::core::{
    can_place, is_attached, Catalog, Field, Figure, GameConfig, GameEngine, Shape, SimpleRng,
};
use tui_blocks::types::Key;

fn t_shape() -> Shape {
    Shape::from_rows(&[".#.", "###", "..."]).unwrap()
}

fn bench_step(c: &mut Criterion) {
    let catalog = Catalog::new(vec![t_shape()]).unwrap();
    let mut engine = GameEngine::new(GameConfig::default(), catalog, SimpleRng::new(12345));
    engine.step(Some(Key::Confirm));

    c.bench_function("engine_step_idle", |b| {
        b.iter(|| {
            engine.step(black_box(None));
        })
    });
}

fn bench_row_clear(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut field = Field::default();
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..10 {
                    field.set(x, y, true);
                }
            }
            field.clear_full_rows();
        })
    });
}

fn bench_collision(c: &mut Criterion) {
    let field = Field::default();
    let figure = Figure::new(t_shape(), 4, 10);

    c.bench_function("can_place_and_is_attached", |b| {
        b.iter(|| {
            black_box(can_place(&field, black_box(&figure)));
            black_box(is_attached(&field, black_box(&figure)));
        })
    });
}

fn bench_try_shift(c: &mut Criterion) {
    let field = Field::default();
    let mut figure = Figure::new(t_shape(), 4, 10);

    c.bench_function("try_shift", |b| {
        b.iter(|| {
            try_shift(&field, &mut figure, 1);
            try_shift(&field, &mut figure, -1);
        })
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let field = Field::default();
    let mut figure = Figure::new(t_shape(), 4, 10);

    c.bench_function("try_rotate", |b| {
        b.iter(|| {
            try_rotate(&field, &mut figure);
        })
    });
}

criterion_group!(
    benches,
    bench_step,
    bench_row_clear,
    bench_collision,
    bench_try_shift,
    bench_try_rotate
);
criterion_main!(benches);
