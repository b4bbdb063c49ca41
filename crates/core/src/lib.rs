//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the world state and the per-tick update. It has **zero
//! dependencies** on rendering, terminals, or I/O, making it:
//!
//! - **Deterministic**: The same sequence of actions and ticks yields the same world
//! - **Testable**: Every rule is covered by unit tests
//! - **Fast**: `World::tick` mutates projectiles in place and never allocates
//!
//! # Module Structure
//!
//! - [`player`]: the player square
//! - [`projectile`]: projectiles and the off-screen removal policy
//! - [`world`]: world bounds, the projectile collection, actions and ticking
//! - [`fingerprint`]: stable hashing of the world for render throttling
//!
//! # Example
//!
//! ```
//! use tui_shooter_core::World;
//! use tui_shooter_types::{GameAction, Vec2};
//!
//! let mut world = World::new(800.0, 600.0);
//! assert_eq!(world.player().position, Vec2::new(400.0, 300.0));
//!
//! world.apply_action(GameAction::Fire);
//! world.tick();
//!
//! assert_eq!(world.projectiles()[0].position, Vec2::new(405.0, 300.0));
//! ```

pub mod fingerprint;
pub mod player;
pub mod projectile;
pub mod world;

pub use tui_shooter_types as types;

// Re-export commonly used types for convenience
pub use fingerprint::Fnv1aHasher;
pub use player::Player;
pub use projectile::{Projectile, ProjectilePolicy};
pub use world::{World, WorldConfig};
