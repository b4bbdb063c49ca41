//! Runtime configuration from environment variables.
//!
//! Every variable is optional. Missing, unparsable or out-of-range values fall
//! back to the defaults so a typo never prevents the game from starting.

use std::str::FromStr;

use crate::core::{ProjectilePolicy, WorldConfig};
use crate::types::{Vec2, MAX_CATCH_UP_TICKS, TICK_MS};

/// Engine configuration
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Fixed timestep in milliseconds.
    pub tick_ms: u32,
    /// Ticks run at most per loop iteration.
    pub max_catch_up: u32,
    pub world: WorldConfig,
    /// Log file; `None` disables logging.
    pub log_path: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            max_catch_up: MAX_CATCH_UP_TICKS,
            world: WorldConfig::default(),
            log_path: None,
        }
    }
}

impl EngineConfig {
    /// Create from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup.
    pub fn from_lookup<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let world_defaults = defaults.world;

        let tick_ms = parse::<u32, _>(&get, "SHOOTER_TICK_MS")
            .filter(|&v| v > 0)
            .unwrap_or(defaults.tick_ms);
        let max_catch_up = parse::<u32, _>(&get, "SHOOTER_MAX_CATCH_UP")
            .filter(|&v| v > 0)
            .unwrap_or(defaults.max_catch_up);

        let velocity = Vec2::new(
            parse_finite(&get, "SHOOTER_PROJECTILE_DX").unwrap_or(world_defaults.projectile_velocity.x),
            parse_finite(&get, "SHOOTER_PROJECTILE_DY").unwrap_or(world_defaults.projectile_velocity.y),
        );
        let player_size = parse_finite(&get, "SHOOTER_PLAYER_SIZE")
            .filter(|&v| v > 0.0)
            .unwrap_or(world_defaults.player_size);

        let policy = if flag(&get, "SHOOTER_CULL_OFFSCREEN") {
            ProjectilePolicy::CullOffscreen
        } else {
            ProjectilePolicy::Retain
        };

        let log_path = get("SHOOTER_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            tick_ms,
            max_catch_up,
            world: WorldConfig {
                player_size,
                projectile_velocity: velocity,
                policy,
                ..world_defaults
            },
            log_path,
        }
    }
}

fn parse<T: FromStr, F: Fn(&str) -> Option<String>>(get: &F, key: &str) -> Option<T> {
    get(key).and_then(|s| s.trim().parse().ok())
}

fn parse_finite<F: Fn(&str) -> Option<String>>(get: &F, key: &str) -> Option<f64> {
    parse::<f64, F>(get, key).filter(|v| v.is_finite())
}

fn flag<F: Fn(&str) -> Option<String>>(get: &F, key: &str) -> bool {
    get(key)
        .map(|v| {
            let v = v.trim();
            v == "1" || v.eq_ignore_ascii_case("true")
        })
        .unwrap_or(false)
}
