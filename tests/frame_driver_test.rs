//! Frame driver behaviour: firing, ticking, and rendering.

use tui_shooter::core::{ProjectilePolicy, World, WorldConfig};
use tui_shooter::engine::FrameDriver;
use tui_shooter::term::{DrawLog, GameView};
use tui_shooter::types::{GameAction, Rect, Vec2, PLAYER_COLOR};

fn driver() -> FrameDriver {
    FrameDriver::new(World::new(800.0, 600.0), GameView::default())
}

#[test]
fn fire_then_one_tick_moves_projectile_right() {
    let mut d = driver();
    assert_eq!(d.world().player().position, Vec2::new(400.0, 300.0));

    d.handle(GameAction::Fire);
    d.step();

    let ps = d.world().projectiles();
    assert_eq!(ps.len(), 1);
    assert_eq!(ps[0].position, Vec2::new(405.0, 300.0));
    assert_eq!(ps[0].velocity, Vec2::new(5.0, 0.0));
}

#[test]
fn three_triggers_without_tick_stack_at_player() {
    let mut d = driver();
    for _ in 0..3 {
        d.handle(GameAction::Fire);
    }

    let ps = d.world().projectiles();
    assert_eq!(ps.len(), 3);
    assert!(ps.iter().all(|p| p.position == Vec2::new(400.0, 300.0)));
}

#[test]
fn no_trigger_only_player_is_rendered() {
    let mut d = driver();
    let mut log = DrawLog::new();
    for _ in 0..30 {
        d.frame(&mut log);
    }

    assert!(d.world().projectiles().is_empty());
    assert_eq!(
        log.visible_fills(),
        vec![(Rect::new(400.0, 300.0, 50.0, 50.0), PLAYER_COLOR)]
    );
}

#[test]
fn every_tick_adds_velocity_to_every_projectile() {
    let config = WorldConfig {
        projectile_velocity: Vec2::new(3.0, 1.0),
        ..WorldConfig::default()
    };
    let mut d = FrameDriver::new(World::with_config(800.0, 600.0, config), GameView::default());

    for tick in 0..20 {
        if tick % 3 == 0 {
            d.handle(GameAction::Fire);
        }

        let before: Vec<_> = d.world().projectiles().to_vec();
        d.step();
        let after = d.world().projectiles();

        assert_eq!(before.len(), after.len());
        for (b, a) in before.iter().zip(after) {
            assert_eq!(a.position, Vec2::new(b.position.x + 3.0, b.position.y + 1.0));
            assert_eq!(a.velocity, b.velocity);
        }
    }
}

#[test]
fn collection_grows_by_exactly_the_number_of_triggers() {
    let mut d = driver();
    let mut log = DrawLog::new();
    let mut triggers = 0usize;
    let mut last_len = 0usize;

    for frame in 0..200u32 {
        // Irregular bursts, including several triggers in one frame.
        let burst = (frame * 7 % 5).saturating_sub(2);
        for _ in 0..burst {
            d.handle(GameAction::Fire);
            triggers += 1;
        }
        d.frame(&mut log);

        let len = d.world().projectiles().len();
        assert!(len >= last_len);
        assert_eq!(len, triggers);
        last_len = len;
    }
    assert_eq!(d.world().fired() as usize, triggers);
}

#[test]
fn rendering_twice_is_idempotent() {
    let mut d = driver();
    d.handle(GameAction::Fire);
    d.step();
    d.handle(GameAction::Fire);

    let before = d.world().projectiles().to_vec();

    let mut first = DrawLog::new();
    let mut second = DrawLog::new();
    d.draw(&mut first);
    d.draw(&mut second);

    assert_eq!(first, second);
    assert_eq!(d.world().projectiles(), before.as_slice());
}

#[test]
fn projectiles_travel_indefinitely_by_default() {
    let mut d = driver();
    d.handle(GameAction::Fire);
    for _ in 0..10_000 {
        d.step();
    }
    let p = d.world().projectiles()[0];
    assert_eq!(p.position.x, 400.0 + 5.0 * 10_000.0);
    assert_eq!(d.world().config().policy, ProjectilePolicy::Retain);
}

#[test]
fn cull_policy_bounds_the_collection() {
    let config = WorldConfig {
        policy: ProjectilePolicy::CullOffscreen,
        ..WorldConfig::default()
    };
    let mut d = FrameDriver::new(World::with_config(800.0, 600.0, config), GameView::default());

    for _ in 0..1_000 {
        d.handle(GameAction::Fire);
        d.step();
    }
    // From x=400 a projectile reaches x=800 on its 80th tick and is dropped,
    // so only the ones aged 1..=79 ticks remain.
    assert_eq!(d.world().projectiles().len(), 79);
    assert_eq!(d.world().fired(), 1_000);
}
