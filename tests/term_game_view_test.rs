use tui_shooter::core::WorldConfig;
use tui_shooter::engine::FrameDriver;
use tui_shooter::term::{FrameBuffer, GameView, Viewport};
use tui_shooter::types::{GameAction, Rgb, BACKGROUND_COLOR, PLAYER_COLOR, PROJECTILE_COLOR};

// 100x40 cells at 8x16 px per cell => an 800x640 px world, player at (400, 320).
fn driver() -> FrameDriver {
    FrameDriver::for_viewport(Viewport::new(100, 40), GameView::default(), WorldConfig::default())
}

fn cells_with(fb: &FrameBuffer, color: Rgb) -> Vec<(u16, u16)> {
    let mut out = Vec::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            if fb.get(x, y).unwrap().style.bg == color {
                out.push((x, y));
            }
        }
    }
    out
}

#[test]
fn term_view_renders_player_square() {
    let d = driver();
    let fb = d.view().render(d.world(), Viewport::new(100, 40));

    // 400..450 px => columns 50..57, 320..370 px => rows 20..24.
    let cells = cells_with(&fb, PLAYER_COLOR);
    assert_eq!(cells.len(), 7 * 4);
    assert_eq!(cells.first(), Some(&(50, 20)));
    assert_eq!(cells.last(), Some(&(56, 23)));
    assert!(cells_with(&fb, PROJECTILE_COLOR).is_empty());
}

#[test]
fn term_view_renders_moving_projectile() {
    let mut d = driver();
    d.handle(GameAction::Fire);
    for _ in 0..20 {
        d.step();
    }

    let mut fb = FrameBuffer::new(1, 1);
    d.render_into(Viewport::new(100, 40), &mut fb);

    // x = 500..510 px => columns 62..64, y = 320..324 px => row 20.
    assert_eq!(cells_with(&fb, PROJECTILE_COLOR), vec![(62, 20), (63, 20)]);
}

#[test]
fn term_view_clears_previous_frame() {
    let mut d = driver();
    d.handle(GameAction::Fire);
    let mut fb = FrameBuffer::new(100, 40);

    for _ in 0..20 {
        d.step();
    }
    d.render_into(Viewport::new(100, 40), &mut fb);
    for _ in 0..20 {
        d.step();
    }
    d.render_into(Viewport::new(100, 40), &mut fb);

    // Only the current position is painted; the old trail is gone.
    assert_eq!(cells_with(&fb, PROJECTILE_COLOR), vec![(75, 20), (76, 20)]);
}

#[test]
fn term_view_offscreen_projectile_leaves_background() {
    let mut d = driver();
    d.handle(GameAction::Fire);
    for _ in 0..200 {
        d.step();
    }
    let fb = d.view().render(d.world(), Viewport::new(100, 40));

    assert!(cells_with(&fb, PROJECTILE_COLOR).is_empty());
    assert_eq!(
        cells_with(&fb, BACKGROUND_COLOR).len() + cells_with(&fb, PLAYER_COLOR).len(),
        100 * 40
    );
}

#[test]
fn term_view_render_is_repeatable_without_tick() {
    let mut d = driver();
    d.handle(GameAction::Fire);
    d.step();

    let vp = Viewport::new(100, 40);
    let a = d.view().render(d.world(), vp);
    let b = d.view().render(d.world(), vp);
    assert_eq!(a, b);
}
