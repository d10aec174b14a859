//! Round state and core simulation types
//!
//! One [`GameState`] owns everything a round touches: the player, every live
//! entity collection, the spawn timers, the score ledger, and the event queue
//! the driver drains after each tick. External collaborators (audio, storage,
//! rendering) are reached only through drained [`GameEvent`]s and snapshots.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use crate::assets::{Sprite, SpriteCatalog, SpriteKey, SpriteProvider};
use crate::audio::AudioCue;
use crate::consts::*;
use crate::highscores::HighScores;

/// Player-selectable weapons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WeaponKind {
    #[default]
    Fireball,
    SwordSlash,
    BombDrop,
}

/// Attack-kind tag carried by every projectile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileKind {
    PlayerFireball,
    EnemyBullet,
    PlayerSwordWave,
    /// Resolved synchronously on trigger; never enters the projectile list
    PlayerSuperBomb,
}

/// Pickup variants drifting in from the right edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Heart,
    Shield,
    Invincibility,
}

impl ItemKind {
    pub const ALL: [ItemKind; 3] = [ItemKind::Heart, ItemKind::Shield, ItemKind::Invincibility];

    pub fn sprite_key(&self) -> SpriteKey {
        match self {
            ItemKind::Heart => SpriteKey::HeartItem,
            ItemKind::Shield => SpriteKey::ShieldItem,
            ItemKind::Invincibility => SpriteKey::InvincibleItem,
        }
    }
}

/// Round outcome; Won and Lost are terminal until a restart intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    Running,
    Won,
    Lost,
}

/// Signals the simulation raises for the driver to forward to collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Fire-and-forget sound effect request
    Cue(AudioCue),
    /// Background music should pause (round ended)
    MusicPaused,
    /// The ledger changed and should be persisted
    ScoresChanged,
    /// A fresh round began; music may resume from the top
    RoundRestarted,
}

/// Play-area extents; fixed for the lifetime of a round context
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            width: PLAY_WIDTH,
            height: PLAY_HEIGHT,
        }
    }
}

/// The knight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub entity: Entity,
    pub speed: f32,
    pub moving_up: bool,
    pub moving_down: bool,
    pub moving_left: bool,
    pub moving_right: bool,
    pub health: i32,
    pub armor: i32,
    /// Ticks of shield remaining; damage is halved while >0
    pub shield_ticks: u32,
    pub gold: u32,
    /// Wall-clock deadline (ms); damage is ignored entirely before it
    pub invincible_until: Option<u64>,
    pub weapon: WeaponKind,
}

impl Player {
    pub fn new(extent: Sprite) -> Self {
        Self {
            entity: Entity::new(
                Vec2::new(PLAYER_START_X, PLAYER_START_Y),
                SpriteKey::Knight,
                extent,
            ),
            speed: PLAYER_SPEED,
            moving_up: false,
            moving_down: false,
            moving_left: false,
            moving_right: false,
            health: MAX_HEALTH,
            armor: MAX_ARMOR,
            shield_ticks: 0,
            gold: 0,
            invincible_until: None,
            weapon: WeaponKind::default(),
        }
    }

    /// Intent-scaled movement clamped to the play area, plus timed-status
    /// bookkeeping (shield tick-down, invincibility expiry)
    pub fn update(&mut self, bounds: Bounds, now_ms: u64) {
        let mut delta = Vec2::ZERO;
        if self.moving_up {
            delta.y -= self.speed;
        }
        if self.moving_down {
            delta.y += self.speed;
        }
        if self.moving_left {
            delta.x -= self.speed;
        }
        if self.moving_right {
            delta.x += self.speed;
        }
        self.entity.pos += delta;
        self.entity.pos.x = self
            .entity
            .pos
            .x
            .clamp(0.0, bounds.width - self.entity.width());
        self.entity.pos.y = self
            .entity
            .pos
            .y
            .clamp(0.0, bounds.height - self.entity.height());

        if self.shield_ticks > 0 {
            self.shield_ticks -= 1;
        }
        if let Some(deadline) = self.invincible_until
            && now_ms >= deadline
        {
            self.invincible_until = None;
        }
    }

    pub fn is_invincible(&self, now_ms: u64) -> bool {
        self.invincible_until.is_some_and(|deadline| now_ms < deadline)
    }

    pub fn shield_active(&self) -> bool {
        self.shield_ticks > 0
    }

    pub fn heal(&mut self, amount: i32) {
        self.health = (self.health + amount).clamp(0, MAX_HEALTH);
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.health = (self.health - amount).clamp(0, MAX_HEALTH);
    }

    pub fn add_armor(&mut self, amount: i32) {
        self.armor = (self.armor + amount).clamp(0, MAX_ARMOR);
    }

    pub fn add_gold(&mut self, amount: u32) {
        self.gold += amount;
    }

    /// Right edge of the sprite, where attacks originate
    pub fn leading_edge(&self) -> Vec2 {
        Vec2::new(
            self.entity.pos.x + self.entity.width(),
            self.entity.center().y,
        )
    }
}

/// Pure-pursuit enemy; no health, destroyed outright on a qualifying hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub entity: Entity,
    pub speed: f32,
}

impl Enemy {
    pub fn new(pos: Vec2, extent: Sprite) -> Self {
        Self {
            entity: Entity::new(pos, SpriteKey::Enemy, extent),
            speed: ENEMY_SPEED,
        }
    }

    /// Unit vector toward the target, recomputed every tick (no inertia)
    pub fn pursue(&mut self, target: Vec2) {
        let dir = (target - self.entity.pos).normalize_or_zero();
        self.entity.pos += dir * self.speed;
    }
}

/// A moving (or stationary) attack representation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub entity: Entity,
    pub kind: ProjectileKind,
    pub speed: f32,
    pub active: bool,
    /// Ticks remaining; −1 means unbounded
    pub lifespan: i32,
}

impl Projectile {
    pub fn new(
        pos: Vec2,
        sprite: SpriteKey,
        extent: Sprite,
        kind: ProjectileKind,
        speed: f32,
    ) -> Self {
        Self {
            entity: Entity::new(pos, sprite, extent),
            kind,
            speed,
            active: true,
            lifespan: -1,
        }
    }

    /// Variant movement rule; deactivates on leaving the play area
    pub fn advance(&mut self, bounds: Bounds) {
        match self.kind {
            ProjectileKind::PlayerFireball => {
                self.entity.pos.x += self.speed;
                if self.entity.pos.x > bounds.width {
                    self.active = false;
                }
            }
            ProjectileKind::EnemyBullet => {
                self.entity.pos.x -= self.speed;
                if self.entity.pos.x < -self.entity.width() {
                    self.active = false;
                }
            }
            // Zero-speed wave; lifespan bookkeeping happens in the tick
            ProjectileKind::PlayerSwordWave => {}
            // Never stored; resolved synchronously at trigger time
            ProjectileKind::PlayerSuperBomb => {}
        }
    }
}

/// A drifting pickup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub entity: Entity,
    pub kind: ItemKind,
    pub active: bool,
}

impl Item {
    pub fn new(pos: Vec2, kind: ItemKind, extent: Sprite) -> Self {
        Self {
            entity: Entity::new(pos, kind.sprite_key(), extent),
            kind,
            active: true,
        }
    }

    pub fn advance(&mut self) {
        self.entity.pos.x -= ITEM_DRIFT_SPEED;
        if self.entity.pos.x < -self.entity.width() {
            self.active = false;
        }
    }
}

/// Gameplay-inert collision burst, anchored at its center
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    pub center: Vec2,
    pub sprite: SpriteKey,
    pub size: Vec2,
    pub frames_left: u32,
}

impl Effect {
    pub fn new(center: Vec2, extent: Sprite) -> Self {
        Self {
            center,
            sprite: SpriteKey::Explosion,
            size: extent.size(),
            frames_left: EFFECT_LIFETIME_TICKS,
        }
    }

    pub fn update(&mut self) {
        if self.frames_left > 0 {
            self.frames_left -= 1;
        }
    }

    pub fn is_alive(&self) -> bool {
        self.frames_left > 0
    }

    pub fn top_left(&self) -> Vec2 {
        self.center - self.size * 0.5
    }
}

/// One (position, sprite) pair of the per-tick render snapshot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteInstance {
    pub pos: Vec2,
    pub sprite: SpriteKey,
}

/// Complete round context
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducible spawn sequences
    pub seed: u64,
    pub bounds: Bounds,
    pub outcome: Outcome,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub projectiles: Vec<Projectile>,
    pub items: Vec<Item>,
    pub effects: Vec<Effect>,
    /// Wall-clock ms when the round started
    pub started_at_ms: u64,
    pub last_enemy_spawn_ms: u64,
    pub last_item_spawn_ms: u64,
    /// Cosmetic background offset, wraps at −width
    pub scroll_offset: f32,
    pub high_scores: HighScores,
    pub(crate) catalog: SpriteCatalog,
    pub(crate) rng: Pcg32,
    events: Vec<GameEvent>,
}

impl GameState {
    pub fn new(
        seed: u64,
        bounds: Bounds,
        provider: &dyn SpriteProvider,
        high_scores: HighScores,
        now_ms: u64,
    ) -> Self {
        let catalog = SpriteCatalog::snapshot(provider);
        let player_extent = catalog.get(SpriteKey::Knight).unwrap_or(Sprite::new(50, 50));
        Self {
            seed,
            bounds,
            outcome: Outcome::Running,
            player: Player::new(player_extent),
            enemies: Vec::new(),
            projectiles: Vec::new(),
            items: Vec::new(),
            effects: Vec::new(),
            started_at_ms: now_ms,
            last_enemy_spawn_ms: now_ms,
            last_item_spawn_ms: now_ms,
            scroll_offset: 0.0,
            high_scores,
            catalog,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        }
    }

    /// Back to initial stats and an empty field; the ledger survives
    pub fn restart(&mut self, now_ms: u64) {
        let player_extent = self
            .catalog
            .get(SpriteKey::Knight)
            .unwrap_or(Sprite::new(50, 50));
        self.player = Player::new(player_extent);
        self.enemies.clear();
        self.projectiles.clear();
        self.items.clear();
        self.effects.clear();
        self.outcome = Outcome::Running;
        self.started_at_ms = now_ms;
        self.last_enemy_spawn_ms = now_ms;
        self.last_item_spawn_ms = now_ms;
        self.scroll_offset = 0.0;
        self.push_event(GameEvent::RoundRestarted);
        log::debug!("round restarted");
    }

    /// Whole seconds left on the round clock; negative once overdue
    pub fn remaining_secs(&self, now_ms: u64) -> i64 {
        ROUND_DURATION_SECS as i64 - (now_ms.saturating_sub(self.started_at_ms) / 1000) as i64
    }

    /// Burst effect centered on `center`; skipped if the art is missing
    pub fn spawn_effect(&mut self, center: Vec2) {
        if let Some(extent) = self.catalog.get(SpriteKey::Explosion) {
            self.effects.push(Effect::new(center, extent));
        }
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Hand the queued signals to the driver, clearing the queue
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Position + sprite-key snapshot of everything visible this tick
    pub fn draw_list(&self) -> Vec<SpriteInstance> {
        let mut list = Vec::with_capacity(
            1 + self.enemies.len() + self.projectiles.len() + self.items.len() + self.effects.len(),
        );
        list.push(SpriteInstance {
            pos: self.player.entity.pos,
            sprite: self.player.entity.sprite,
        });
        for enemy in &self.enemies {
            list.push(SpriteInstance {
                pos: enemy.entity.pos,
                sprite: enemy.entity.sprite,
            });
        }
        for projectile in self.projectiles.iter().filter(|p| p.active) {
            list.push(SpriteInstance {
                pos: projectile.entity.pos,
                sprite: projectile.entity.sprite,
            });
        }
        for item in self.items.iter().filter(|i| i.active) {
            list.push(SpriteInstance {
                pos: item.entity.pos,
                sprite: item.entity.sprite,
            });
        }
        for effect in &self.effects {
            list.push(SpriteInstance {
                pos: effect.top_left(),
                sprite: effect.sprite,
            });
        }
        list
    }
}
