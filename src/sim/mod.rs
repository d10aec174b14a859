//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One state advance per tick, wall-clock time passed in by the caller
//! - Seeded RNG only
//! - Stable iteration order (reverse insertion order for removals)
//! - No rendering, audio, or storage dependencies; collaborators are reached
//!   through drained events

pub mod collision;
pub mod entity;
pub mod spawn;
pub mod state;
pub mod tick;

pub use entity::{Aabb, Entity};
pub use state::{
    Bounds, Effect, Enemy, GameEvent, GameState, Item, ItemKind, Outcome, Player, Projectile,
    ProjectileKind, SpriteInstance, WeaponKind,
};
pub use tick::{TickInput, tick};
