//! Terminal shooter runner (default binary).
//!
//! It uses crossterm for input and the framebuffer renderer from `term`.
//! The run loop is owned here: poll input until the next tick is due, run the
//! due ticks, render when the picture may have changed.

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use tui_shooter::engine::{EngineConfig, FrameClock, FrameDriver};
use tui_shooter::input::{action_for_event, should_quit};
use tui_shooter::term::{FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    // A missing .env file is fine.
    let _ = dotenvy::dotenv();
    let config = EngineConfig::from_env();
    init_tracing(config.log_path.as_deref())?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        error!(error = %e, "run loop failed");
    }
    result
}

/// Log to `log_path` when set. The terminal is in raw mode, so logs never go
/// to stdout/stderr.
fn init_tracing(log_path: Option<&str>) -> Result<()> {
    let Some(path) = log_path else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("failed to create log file {path}"))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let backtrace = std::backtrace::Backtrace::capture();
        error!(%info, ?backtrace, "panic");
        default_hook(info);
    }));
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &EngineConfig) -> Result<()> {
    // Read once; the world does not follow later resizes.
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let viewport = Viewport::new(w, h);
    let mut driver = FrameDriver::for_viewport(viewport, GameView::default(), config.world);

    let bounds = driver.world().bounds();
    info!(
        cols = w,
        rows = h,
        width = bounds.w,
        height = bounds.h,
        tick_ms = config.tick_ms,
        policy = ?config.world.policy,
        "starting"
    );

    let mut clock = FrameClock::new(config.tick_ms, config.max_catch_up);
    let mut throttle = RenderThrottle::default();
    let mut fb = FrameBuffer::new(w, h);

    let started = Instant::now();
    let mut last = Instant::now();

    loop {
        // Render.
        let now_ms = started.elapsed().as_millis() as u64;
        let world = driver.world();
        if throttle.should_render(now_ms, world.fingerprint(), world.is_static()) {
            driver.render_into(viewport, &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = Duration::from_millis(clock.until_next_ms()).saturating_sub(last.elapsed());

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if should_quit(key) {
                    info!(
                        ticks = driver.world().tick_count(),
                        fired = driver.world().fired(),
                        "quit"
                    );
                    return Ok(());
                }
                if let Some(action) = action_for_event(key) {
                    driver.handle(action);
                }
            }
        }

        // Tick. Whole milliseconds are consumed; the remainder carries over.
        let elapsed_ms = last.elapsed().as_millis() as u64;
        last += Duration::from_millis(elapsed_ms);

        for _ in 0..clock.advance(elapsed_ms) {
            driver.step();
        }
    }
}
