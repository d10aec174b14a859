//! Knight Rush - a side-scrolling survival arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, round state)
//! - `driver`: Fixed-cadence frame loop and intent mailbox
//! - `assets`: Sprite keys and the provider seam to asset decoding
//! - `audio`: Cue player / music controller seams
//! - `persistence`: Key-value storage seam
//! - `highscores`: Persisted six-entry score ledger
//! - `settings`: Audio preferences

pub mod assets;
pub mod audio;
pub mod driver;
pub mod highscores;
pub mod persistence;
pub mod settings;
pub mod sim;

pub use assets::{Sprite, SpriteKey, SpriteProvider};
pub use highscores::HighScores;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Target tick period (~60 ticks/second)
    pub const TICK_MILLIS: u64 = 16;

    /// Default play area
    pub const PLAY_WIDTH: f32 = 1280.0;
    pub const PLAY_HEIGHT: f32 = 720.0;

    /// Round length in wall-clock seconds
    pub const ROUND_DURATION_SECS: u64 = 60;

    /// Enemy spawn cadence (wall-clock ms); 1..=3 enemies per burst
    pub const ENEMY_SPAWN_INTERVAL_MS: u64 = 5000;
    pub const MAX_ENEMIES_PER_SPAWN: u32 = 3;

    /// Item spawn cadence (wall-clock ms); at most one item live at a time
    pub const ITEM_SPAWN_INTERVAL_MS: u64 = 8000;

    /// Player defaults
    pub const PLAYER_START_X: f32 = 200.0;
    pub const PLAYER_START_Y: f32 = 300.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const MAX_HEALTH: i32 = 100;
    pub const MAX_ARMOR: i32 = 100;

    /// Contact damage from an enemy (halved while the shield holds)
    pub const ENEMY_CONTACT_DAMAGE: i32 = 10;
    pub const ENEMY_CONTACT_DAMAGE_SHIELDED: i32 = 5;

    /// Enemy pursuit speed (px/tick)
    pub const ENEMY_SPEED: f32 = 5.0;

    /// Projectile speeds (px/tick)
    pub const FIREBALL_SPEED: f32 = 15.0;
    pub const ENEMY_BULLET_SPEED: f32 = 8.0;

    /// Sword wave stays live for this many ticks and can score every tick
    pub const SWORD_WAVE_LIFESPAN: i32 = 5;

    /// Gold per kill, by attack kind
    pub const GOLD_PER_SWORD_KILL: u32 = 15;
    pub const GOLD_PER_PROJECTILE_KILL: u32 = 10;
    pub const GOLD_PER_BOMB_KILL: u32 = 5;

    /// Item effects
    pub const HEART_HEAL: i32 = 25;
    pub const SHIELD_DURATION_TICKS: u32 = 300;
    pub const INVINCIBILITY_DURATION_MS: u64 = 5000;
    pub const ITEM_DRIFT_SPEED: f32 = 3.0;

    /// Collision burst effect lifetime (ticks)
    pub const EFFECT_LIFETIME_TICKS: u32 = 30;

    /// Hitbox shrink factors for forgiving contact checks
    pub const PLAYER_HITBOX_SCALE: f32 = 0.8;
    pub const ENEMY_HITBOX_SCALE: f32 = 0.85;

    /// Cosmetic background scroll (px/tick)
    pub const SCROLL_SPEED: f32 = 2.0;
}
