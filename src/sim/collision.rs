//! Collision resolution policies
//!
//! Two overlap policies cover every pairing in the game:
//! - shrink-and-intersect: both boxes pulled toward their centers by a fixed
//!   factor before the overlap test, so sprite padding does not register as
//!   contact (player vs enemy, enemy vs projectile);
//! - raw AABB: full extents compared directly (player vs item).
//!
//! Overlap is strict on both axes; boxes that merely touch do not collide.

use super::state::{Enemy, Item, Player, Projectile};
use crate::consts::{ENEMY_HITBOX_SCALE, PLAYER_HITBOX_SCALE};

/// Player vs enemy contact, both hitboxes shrunk
pub fn player_hits_enemy(player: &Player, enemy: &Enemy) -> bool {
    let player_box = player.entity.bounds().shrunk(PLAYER_HITBOX_SCALE);
    let enemy_box = enemy.entity.bounds().shrunk(ENEMY_HITBOX_SCALE);
    player_box.intersects(&enemy_box)
}

/// Projectile vs enemy contact; the projectile keeps its full extent
pub fn projectile_hits_enemy(projectile: &Projectile, enemy: &Enemy) -> bool {
    let enemy_box = enemy.entity.bounds().shrunk(ENEMY_HITBOX_SCALE);
    projectile.entity.bounds().intersects(&enemy_box)
}

/// Player vs item pickup, raw extents on both sides
pub fn player_hits_item(player: &Player, item: &Item) -> bool {
    player.entity.bounds().intersects(&item.entity.bounds())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{Sprite, SpriteKey};
    use crate::sim::state::{ItemKind, ProjectileKind};
    use glam::Vec2;

    fn player_at(pos: Vec2) -> Player {
        let mut player = Player::new(Sprite::new(100, 100));
        player.entity.pos = pos;
        player
    }

    fn enemy_at(pos: Vec2) -> Enemy {
        Enemy::new(pos, Sprite::new(100, 100))
    }

    #[test]
    fn shrunk_boxes_need_deeper_overlap() {
        let player = player_at(Vec2::ZERO);

        // Raw extents overlap by 5px, but the shrunk hitboxes
        // (player 80x80 centered, enemy 85x85 centered) stay apart.
        let grazing = enemy_at(Vec2::new(95.0, 0.0));
        assert!(player.entity.bounds().intersects(&grazing.entity.bounds()));
        assert!(!player_hits_enemy(&player, &grazing));

        // Deep overlap registers.
        let deep = enemy_at(Vec2::new(40.0, 0.0));
        assert!(player_hits_enemy(&player, &deep));
    }

    #[test]
    fn touching_shrunk_edges_do_not_collide() {
        let player = player_at(Vec2::ZERO);
        // Player hitbox reaches x=90, enemy hitbox starts at x=90 exactly
        // (enemy at 82.5 with 7.5px inset): touching, not overlapping.
        let enemy = enemy_at(Vec2::new(82.5, 0.0));
        assert!(!player_hits_enemy(&player, &enemy));
    }

    #[test]
    fn projectile_uses_raw_extent_against_shrunk_enemy() {
        let enemy = enemy_at(Vec2::ZERO);
        let projectile = Projectile::new(
            Vec2::new(90.0, 40.0),
            SpriteKey::Fireball,
            Sprite::new(10, 10),
            ProjectileKind::PlayerFireball,
            15.0,
        );
        // Enemy hitbox spans 7.5..92.5; the 10px projectile at x=90 overlaps it
        assert!(projectile_hits_enemy(&projectile, &enemy));

        let outside = Projectile::new(
            Vec2::new(92.5, 40.0),
            SpriteKey::Fireball,
            Sprite::new(10, 10),
            ProjectileKind::PlayerFireball,
            15.0,
        );
        assert!(!projectile_hits_enemy(&outside, &enemy));
    }

    #[test]
    fn item_pickup_uses_full_extents() {
        let player = player_at(Vec2::ZERO);
        let item = Item::new(Vec2::new(99.0, 0.0), ItemKind::Heart, Sprite::new(32, 32));
        assert!(player_hits_item(&player, &item));

        let apart = Item::new(Vec2::new(100.0, 0.0), ItemKind::Heart, Sprite::new(32, 32));
        assert!(!player_hits_item(&player, &apart));
    }
}
