//! Fixed-cadence state advance
//!
//! One [`tick`] call per ~16 ms frame. The pass order is load-bearing: clock,
//! spawners, player, enemies, contact damage, projectiles, scoring, effects,
//! items, scroll. Victim lists iterate in reverse insertion order so in-place
//! removal stays stable, and a terminal outcome freezes everything until a
//! restart intent arrives.

use glam::Vec2;

use super::collision;
use super::spawn;
use super::state::{GameEvent, GameState, ItemKind, Outcome, Projectile, ProjectileKind, WeaponKind};
use crate::assets::SpriteKey;
use crate::audio::AudioCue;
use crate::consts::*;

/// Intents consumed by a single tick
///
/// Movement flags and weapon selection are idempotent sets; attack and
/// restart are one-shot triggers the driver clears after each tick.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub move_up: bool,
    pub move_down: bool,
    pub move_left: bool,
    pub move_right: bool,
    pub select_weapon: Option<WeaponKind>,
    pub attack: bool,
    pub restart: bool,
}

/// Advance the round by one tick at wall-clock time `now_ms`
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: u64) {
    if input.restart {
        state.restart(now_ms);
    }

    // Terminal outcomes freeze the field; only restart gets through.
    if state.outcome != Outcome::Running {
        return;
    }

    state.player.moving_up = input.move_up;
    state.player.moving_down = input.move_down;
    state.player.moving_left = input.move_left;
    state.player.moving_right = input.move_right;
    if let Some(weapon) = input.select_weapon {
        state.player.weapon = weapon;
    }
    if input.attack {
        trigger_attack(state);
    }

    // Round clock is wall-clock based; winning records the gold haul.
    if state.remaining_secs(now_ms) <= 0 {
        let gold = state.player.gold;
        state.high_scores.record(gold);
        state.outcome = Outcome::Won;
        state.push_event(GameEvent::ScoresChanged);
        state.push_event(GameEvent::MusicPaused);
        log::info!("round won with {gold} gold");
        return;
    }

    spawn::maybe_spawn_enemies(state, now_ms);
    spawn::maybe_spawn_item(state, now_ms);

    // Player movement, shield tick-down, invincibility expiry.
    state.player.update(state.bounds, now_ms);
    if state.player.health <= 0 {
        state.outcome = Outcome::Lost;
        state.push_event(GameEvent::MusicPaused);
        log::info!("round lost at {} gold", state.player.gold);
        return;
    }

    // Enemies re-aim at the player's current position every tick.
    let target = state.player.entity.pos;
    for enemy in &mut state.enemies {
        enemy.pursue(target);
    }

    // Contact damage: the enemy always dies, the player only bleeds when
    // neither invincibility nor the shield covers the hit.
    let invincible = state.player.is_invincible(now_ms);
    for i in (0..state.enemies.len()).rev() {
        if collision::player_hits_enemy(&state.player, &state.enemies[i]) {
            let enemy = state.enemies.remove(i);
            if !invincible {
                let damage = if state.player.shield_active() {
                    ENEMY_CONTACT_DAMAGE_SHIELDED
                } else {
                    ENEMY_CONTACT_DAMAGE
                };
                state.player.take_damage(damage);
            }
            state.spawn_effect(enemy.entity.center());
        }
    }

    for projectile in &mut state.projectiles {
        projectile.advance(state.bounds);
    }

    // Scoring pass. The sword wave keeps killing for its whole lifespan;
    // every other projectile is spent on its first hit.
    for i in (0..state.projectiles.len()).rev() {
        if !state.projectiles[i].active {
            continue;
        }
        if state.projectiles[i].kind == ProjectileKind::PlayerSwordWave {
            for j in (0..state.enemies.len()).rev() {
                if collision::projectile_hits_enemy(&state.projectiles[i], &state.enemies[j]) {
                    let enemy = state.enemies.remove(j);
                    state.spawn_effect(enemy.entity.center());
                    state.player.add_gold(GOLD_PER_SWORD_KILL);
                }
            }
            let wave = &mut state.projectiles[i];
            if wave.lifespan <= 0 {
                wave.active = false;
            } else {
                wave.lifespan -= 1;
            }
        } else {
            for j in (0..state.enemies.len()).rev() {
                if collision::projectile_hits_enemy(&state.projectiles[i], &state.enemies[j]) {
                    let enemy = state.enemies.remove(j);
                    state.spawn_effect(enemy.entity.center());
                    state.player.add_gold(GOLD_PER_PROJECTILE_KILL);
                    state.projectiles[i].active = false;
                    break;
                }
            }
        }
    }

    state.projectiles.retain(|p| p.active);

    for effect in &mut state.effects {
        effect.update();
    }
    state.effects.retain(|e| e.is_alive());

    // Items drift, expire off-screen, or get picked up (raw AABB).
    for i in (0..state.items.len()).rev() {
        state.items[i].advance();
        if !state.items[i].active {
            state.items.remove(i);
            continue;
        }
        if collision::player_hits_item(&state.player, &state.items[i]) {
            let item = state.items.remove(i);
            apply_item(state, item.kind, now_ms);
            state.spawn_effect(item.entity.center());
            state.push_event(GameEvent::Cue(AudioCue::ItemPickup));
            log::debug!("picked up {:?}", item.kind);
        }
    }

    // Cosmetic parallax scroll, wraps once a full screen has passed.
    state.scroll_offset -= SCROLL_SPEED;
    if state.scroll_offset <= -state.bounds.width {
        state.scroll_offset = 0.0;
    }
}

fn apply_item(state: &mut GameState, kind: ItemKind, now_ms: u64) {
    match kind {
        ItemKind::Heart => state.player.heal(HEART_HEAL),
        ItemKind::Shield => state.player.shield_ticks = SHIELD_DURATION_TICKS,
        ItemKind::Invincibility => {
            state.player.invincible_until = Some(now_ms + INVINCIBILITY_DURATION_MS);
        }
    }
}

/// Construct the selected attack at the player's leading edge
///
/// A missing sprite makes this a silent no-op: no projectile, no cue.
fn trigger_attack(state: &mut GameState) {
    match state.player.weapon {
        WeaponKind::Fireball => {
            let Some(extent) = state.catalog.get(SpriteKey::Fireball) else {
                log::warn!("fireball sprite unavailable, attack skipped");
                return;
            };
            let edge = state.player.leading_edge();
            let pos = Vec2::new(edge.x, edge.y - extent.size().y * 0.5);
            state.projectiles.push(Projectile::new(
                pos,
                SpriteKey::Fireball,
                extent,
                ProjectileKind::PlayerFireball,
                FIREBALL_SPEED,
            ));
            state.push_event(GameEvent::Cue(AudioCue::Attack));
        }
        WeaponKind::SwordSlash => {
            let Some(extent) = state.catalog.get(SpriteKey::SwordSlash) else {
                log::warn!("sword sprite unavailable, attack skipped");
                return;
            };
            let edge = state.player.leading_edge();
            let pos = Vec2::new(edge.x, edge.y - extent.size().y * 0.5);
            let mut wave = Projectile::new(
                pos,
                SpriteKey::SwordSlash,
                extent,
                ProjectileKind::PlayerSwordWave,
                0.0,
            );
            wave.lifespan = SWORD_WAVE_LIFESPAN;
            state.projectiles.push(wave);
            state.push_event(GameEvent::Cue(AudioCue::Attack));
        }
        WeaponKind::BombDrop => {
            if state.catalog.get(SpriteKey::Bomb).is_none() {
                log::warn!("bomb sprite unavailable, attack skipped");
                return;
            }
            if state.enemies.is_empty() {
                return;
            }
            let cleared = state.enemies.len() as u32;
            let centers: Vec<Vec2> = state.enemies.iter().map(|e| e.entity.center()).collect();
            state.enemies.clear();
            for center in centers {
                state.spawn_effect(center);
            }
            state.player.add_gold(cleared * GOLD_PER_BOMB_KILL);
            state.push_event(GameEvent::Cue(AudioCue::SuperBomb));
            log::debug!("super bomb cleared {cleared} enemies");
        }
    }
}
