use tui_shooter::core::World;
use tui_shooter::term::RenderThrottle;
use tui_shooter::types::GameAction;

#[test]
fn render_throttle_renders_first_frame() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, true));
}

#[test]
fn render_throttle_static_renders_on_change() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, true));
    assert!(t.should_render(1, 2, true));
}

#[test]
fn render_throttle_static_throttles_when_unchanged() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, true));
    assert!(!t.should_render(10, 1, true));
    assert!(!t.should_render(249, 1, true));
    assert!(t.should_render(250, 1, true));
}

#[test]
fn render_throttle_dynamic_always_renders() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, false));
    assert!(t.should_render(1, 1, false));
    assert!(t.should_render(2, 1, false));
}

#[test]
fn idle_world_is_throttled_until_input() {
    let mut world = World::new(640.0, 384.0);
    let mut t = RenderThrottle::default();

    assert!(t.should_render(0, world.fingerprint(), world.is_static()));
    world.tick();
    assert!(!t.should_render(16, world.fingerprint(), world.is_static()));

    world.tick();
    assert!(!t.should_render(32, world.fingerprint(), world.is_static()));

    world.apply_action(GameAction::Fire);
    assert!(!world.is_static());
    assert!(t.should_render(33, world.fingerprint(), world.is_static()));
    world.tick();
    assert!(t.should_render(34, world.fingerprint(), world.is_static()));
}
