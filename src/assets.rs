//! Sprite keys and the provider seam to asset decoding
//!
//! The simulation never touches pixel data. It looks up integer extents for
//! each [`SpriteKey`] once at round construction and carries the keys through
//! to the render snapshot. A provider that cannot supply a key degrades the
//! dependent spawn or attack to a silent skip.

use std::collections::HashMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Stable identifiers for every bitmap the game can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteKey {
    Knight,
    Enemy,
    Fireball,
    SwordSlash,
    Bomb,
    Explosion,
    HeartItem,
    ShieldItem,
    InvincibleItem,
    Background,
}

impl SpriteKey {
    /// Every key, for catalog snapshots
    pub const ALL: [SpriteKey; 10] = [
        SpriteKey::Knight,
        SpriteKey::Enemy,
        SpriteKey::Fireball,
        SpriteKey::SwordSlash,
        SpriteKey::Bomb,
        SpriteKey::Explosion,
        SpriteKey::HeartItem,
        SpriteKey::ShieldItem,
        SpriteKey::InvincibleItem,
        SpriteKey::Background,
    ];
}

/// Decoded-bitmap extents, the only asset property the simulation reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprite {
    pub width: u32,
    pub height: u32,
}

impl Sprite {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

/// Source of sprite extents; implemented by the host's asset loader
pub trait SpriteProvider {
    /// Extents for `key`, or `None` if the asset failed to decode
    fn sprite(&self, key: SpriteKey) -> Option<Sprite>;
}

/// Immutable extent snapshot taken from a provider at round construction
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpriteCatalog {
    extents: HashMap<SpriteKey, Sprite>,
}

impl SpriteCatalog {
    /// Query the provider once per key; missing keys stay absent
    pub fn snapshot(provider: &dyn SpriteProvider) -> Self {
        let mut extents = HashMap::new();
        for key in SpriteKey::ALL {
            match provider.sprite(key) {
                Some(sprite) => {
                    extents.insert(key, sprite);
                }
                None => log::warn!("sprite {key:?} unavailable, dependent spawns will be skipped"),
            }
        }
        Self { extents }
    }

    pub fn get(&self, key: SpriteKey) -> Option<Sprite> {
        self.extents.get(&key).copied()
    }
}

/// Fixed in-memory sprite table for headless runs and tests
#[derive(Debug, Clone, Default)]
pub struct SpriteTable {
    sprites: HashMap<SpriteKey, Sprite>,
}

impl SpriteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extents matching the shipped art after its load-time scaling
    pub fn standard() -> Self {
        let mut table = Self::new();
        table.insert(SpriteKey::Knight, Sprite::new(64, 64));
        table.insert(SpriteKey::Enemy, Sprite::new(56, 56));
        table.insert(SpriteKey::Fireball, Sprite::new(32, 32));
        table.insert(SpriteKey::SwordSlash, Sprite::new(64, 64));
        table.insert(SpriteKey::Bomb, Sprite::new(21, 21));
        table.insert(SpriteKey::Explosion, Sprite::new(84, 84));
        table.insert(SpriteKey::HeartItem, Sprite::new(32, 32));
        table.insert(SpriteKey::ShieldItem, Sprite::new(32, 32));
        table.insert(SpriteKey::InvincibleItem, Sprite::new(32, 32));
        table.insert(SpriteKey::Background, Sprite::new(1280, 720));
        table
    }

    pub fn insert(&mut self, key: SpriteKey, sprite: Sprite) {
        self.sprites.insert(key, sprite);
    }

    pub fn remove(&mut self, key: SpriteKey) {
        self.sprites.remove(&key);
    }
}

impl SpriteProvider for SpriteTable {
    fn sprite(&self, key: SpriteKey) -> Option<Sprite> {
        self.sprites.get(&key).copied()
    }
}
