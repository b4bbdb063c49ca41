use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_shooter::core::World;
use tui_shooter::engine::FrameDriver;
use tui_shooter::term::{DrawLog, FrameBuffer, GameView, Viewport};
use tui_shooter::types::GameAction;

fn loaded_driver(projectiles: usize) -> FrameDriver {
    let mut world = World::new(1280.0, 768.0);
    for i in 0..projectiles {
        // Spread spawn rows so projectiles cover more cells.
        world.player_mut().position.y = (i / 10 % 70) as f64 * 10.0;
        world.apply_action(GameAction::Fire);
    }
    FrameDriver::new(world, GameView::default())
}

fn bench_tick(c: &mut Criterion) {
    let mut driver = loaded_driver(1_000);

    c.bench_function("tick_1000_projectiles", |b| {
        b.iter(|| {
            driver.step();
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let driver = loaded_driver(1_000);
    let vp = Viewport::new(160, 48);
    let mut fb = FrameBuffer::new(vp.width, vp.height);

    c.bench_function("render_1000_projectiles", |b| {
        b.iter(|| {
            driver.render_into(black_box(vp), &mut fb);
        })
    });
}

fn bench_frame(c: &mut Criterion) {
    let mut driver = loaded_driver(100);
    let mut log = DrawLog::new();

    c.bench_function("frame_100_projectiles_draw_log", |b| {
        b.iter(|| {
            log.reset();
            driver.frame(&mut log);
        })
    });
}

fn bench_fire(c: &mut Criterion) {
    c.bench_function("fire", |b| {
        b.iter_batched(
            || loaded_driver(0),
            |mut driver| {
                driver.handle(black_box(GameAction::Fire));
                driver
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_tick, bench_render, bench_frame, bench_fire);
criterion_main!(benches);
