//! Enemy and item spawn timing and placement
//!
//! Both spawners run on their own wall-clock interval. Enemies arrive in
//! bursts of 1..=3 at the right edge; items arrive one at a time, and the
//! item timer only resets when a spawn actually happens, so a blocked spawn
//! retries as soon as the live item clears.

use glam::Vec2;
use rand::Rng;

use super::state::{Enemy, GameState, Item, ItemKind};
use crate::assets::SpriteKey;
use crate::consts::{ENEMY_SPAWN_INTERVAL_MS, ITEM_SPAWN_INTERVAL_MS, MAX_ENEMIES_PER_SPAWN};

/// Burst-spawn 1..=3 enemies at the right edge if the interval elapsed
pub fn maybe_spawn_enemies(state: &mut GameState, now_ms: u64) {
    if now_ms.saturating_sub(state.last_enemy_spawn_ms) < ENEMY_SPAWN_INTERVAL_MS {
        return;
    }
    state.last_enemy_spawn_ms = now_ms;

    let Some(extent) = state.catalog.get(SpriteKey::Enemy) else {
        log::warn!("enemy sprite unavailable, spawn skipped");
        return;
    };
    let max_y = state.bounds.height - extent.size().y;
    if max_y <= 0.0 {
        return;
    }

    let count = state.rng.random_range(1..=MAX_ENEMIES_PER_SPAWN);
    for _ in 0..count {
        let y = state.rng.random_range(0.0..max_y);
        state
            .enemies
            .push(Enemy::new(Vec2::new(state.bounds.width, y), extent));
    }
    log::debug!("spawned {count} enemies");
}

/// Spawn one uniformly-chosen item at the right edge if the interval elapsed
/// and no item is currently live
pub fn maybe_spawn_item(state: &mut GameState, now_ms: u64) {
    if now_ms.saturating_sub(state.last_item_spawn_ms) < ITEM_SPAWN_INTERVAL_MS {
        return;
    }
    if state.items.iter().any(|item| item.active) {
        return;
    }
    state.last_item_spawn_ms = now_ms;

    let kind = ItemKind::ALL[state.rng.random_range(0..ItemKind::ALL.len())];
    let Some(extent) = state.catalog.get(kind.sprite_key()) else {
        log::warn!("{kind:?} sprite unavailable, spawn skipped");
        return;
    };
    let max_y = state.bounds.height - extent.size().y;
    if max_y <= 0.0 {
        return;
    }

    let y = state.rng.random_range(0.0..max_y);
    state
        .items
        .push(Item::new(Vec2::new(state.bounds.width, y), kind, extent));
    log::debug!("spawned item {kind:?}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::SpriteTable;
    use crate::highscores::HighScores;
    use crate::sim::state::Bounds;

    fn new_state(seed: u64) -> GameState {
        GameState::new(
            seed,
            Bounds::default(),
            &SpriteTable::standard(),
            HighScores::default_ledger(),
            0,
        )
    }

    #[test]
    fn enemy_burst_is_one_to_three_at_right_edge() {
        for seed in 0..20 {
            let mut state = new_state(seed);
            maybe_spawn_enemies(&mut state, ENEMY_SPAWN_INTERVAL_MS);
            assert!((1..=3).contains(&state.enemies.len()));
            for enemy in &state.enemies {
                assert_eq!(enemy.entity.pos.x, state.bounds.width);
                assert!(enemy.entity.pos.y >= 0.0);
                assert!(enemy.entity.pos.y < state.bounds.height - enemy.entity.height());
            }
            assert_eq!(state.last_enemy_spawn_ms, ENEMY_SPAWN_INTERVAL_MS);
        }
    }

    #[test]
    fn enemy_spawn_waits_for_interval() {
        let mut state = new_state(1);
        maybe_spawn_enemies(&mut state, ENEMY_SPAWN_INTERVAL_MS - 1);
        assert!(state.enemies.is_empty());
        assert_eq!(state.last_enemy_spawn_ms, 0);
    }

    #[test]
    fn at_most_one_item_live() {
        let mut state = new_state(2);
        maybe_spawn_item(&mut state, ITEM_SPAWN_INTERVAL_MS);
        assert_eq!(state.items.len(), 1);

        // Second interval elapses while the item is live: blocked, timer kept
        maybe_spawn_item(&mut state, 2 * ITEM_SPAWN_INTERVAL_MS);
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.last_item_spawn_ms, ITEM_SPAWN_INTERVAL_MS);

        // Once the slot frees, the pending spawn fires immediately
        state.items.clear();
        maybe_spawn_item(&mut state, 2 * ITEM_SPAWN_INTERVAL_MS + 1);
        assert_eq!(state.items.len(), 1);
    }

    #[test]
    fn missing_sprite_skips_spawn_silently() {
        let mut table = SpriteTable::standard();
        table.remove(SpriteKey::Enemy);
        let mut state = GameState::new(
            3,
            Bounds::default(),
            &table,
            HighScores::default_ledger(),
            0,
        );
        maybe_spawn_enemies(&mut state, ENEMY_SPAWN_INTERVAL_MS);
        assert!(state.enemies.is_empty());
        // Timer still reset; the outage does not tighten the cadence
        assert_eq!(state.last_enemy_spawn_ms, ENEMY_SPAWN_INTERVAL_MS);
    }

    #[test]
    fn item_kind_choice_is_seed_deterministic() {
        let mut a = new_state(9);
        let mut b = new_state(9);
        maybe_spawn_item(&mut a, ITEM_SPAWN_INTERVAL_MS);
        maybe_spawn_item(&mut b, ITEM_SPAWN_INTERVAL_MS);
        assert_eq!(a.items[0].kind, b.items[0].kind);
        assert_eq!(a.items[0].entity.pos, b.items[0].entity.pos);
    }
}
