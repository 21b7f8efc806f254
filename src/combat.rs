//! Firing, bullet movement and every bullet collision.
//!
//! Each function takes the world by mutable reference and is called once per
//! tick by [`GameWorld::tick`](crate::world::GameWorld::tick), except
//! [`player_fire`] which runs on fire input.

use log::{debug, trace};
use rand::Rng;

use crate::config::{BULLET_SPEED, MAX_PLAYER_BULLETS, SCREEN_HEIGHT, WIN_SCORE};
use crate::entities::collision::remove_indices;
use crate::entities::{Entity, EntityKind, Topping, Utensil, find_collision_indices, overlaps};
use crate::events::{GameEvent, SoundEffect};
use crate::world::{GameState, GameWorld};

/// Throw a utensil from the top of the player, unless too many are already
/// in the air.
pub fn player_fire(world: &mut GameWorld, rng: &mut impl Rng) -> bool {
    if world.player_bullets.len() >= MAX_PLAYER_BULLETS {
        return false;
    }

    let sound = SoundEffect::random_throw(rng);
    let utensil = Utensil::random(rng);
    let mut bullet =
        Entity::spinning_bullet(EntityKind::PlayerBullet(utensil), BULLET_SPEED, rng);
    bullet.x = world.player.x;
    bullet.set_bottom(world.player.top());

    debug!("player threw {} from ({}, {})", utensil.get_name(), bullet.x, bullet.y);
    world.player_bullets.push(bullet);
    world.events.push(GameEvent::PlayerFired { utensil, sound });
    true
}

/// Give every enemy a chance to drop a topping.
///
/// The fewer enemies are left, the more likely each one fires. Only the
/// first enemy seen at a given x gets a roll that can succeed. Enemies are
/// stored bottom row first within each column, so that is the bottom-most
/// survivor unless the column was destroyed out of order.
pub fn enemies_fire(world: &mut GameWorld, rng: &mut impl Rng) -> usize {
    let chance = 4 + world.formation.len() as u32 * 4;
    let mut x_spawn: Vec<f32> = Vec::new();
    let mut fired = 0;

    for enemy in &world.formation.enemies {
        if rng.random_range(0..chance) == 0 && !x_spawn.contains(&enemy.x) {
            let topping = Topping::random(rng);
            let mut bullet =
                Entity::spinning_bullet(EntityKind::EnemyBullet(topping), -BULLET_SPEED, rng);
            bullet.x = enemy.x;
            bullet.set_top(enemy.bottom());

            trace!("enemy at ({}, {}) dropped {}", enemy.x, enemy.y, topping.get_name());
            world.enemy_bullets.push(bullet);
            world.events.push(GameEvent::EnemyFired { topping });
            fired += 1;
        }
        // This column has had its chance this frame
        x_spawn.push(enemy.x);
    }

    fired
}

/// Move enemy bullets and resolve them against shields and the player.
pub fn process_enemy_bullets(world: &mut GameWorld) {
    for bullet in &mut world.enemy_bullets {
        bullet.advance();
    }

    let mut spent = Vec::new();
    let mut player_hit = false;

    for (idx, bullet) in world.enemy_bullets.iter().enumerate() {
        let blocks = find_collision_indices(bullet, &world.shields);
        if !blocks.is_empty() {
            remove_indices(&mut world.shields, &blocks);
            world.events.push(GameEvent::ShieldHit { blocks: blocks.len() });
            spent.push(idx);
            continue;
        }

        if overlaps(&world.player, bullet) {
            player_hit = true;
        }

        if bullet.top() < 0.0 {
            spent.push(idx);
        }
    }

    remove_indices(&mut world.enemy_bullets, &spent);

    if player_hit {
        world.finish(GameState::GameOver);
    }
    check_victory(world);
}

/// Move player bullets and resolve them against shields and enemies.
pub fn process_player_bullets(world: &mut GameWorld, rng: &mut impl Rng) {
    for bullet in &mut world.player_bullets {
        bullet.advance();
    }

    let mut spent = Vec::new();

    for (idx, bullet) in world.player_bullets.iter().enumerate() {
        // Shields soak up the bullet before it can reach an enemy
        let blocks = find_collision_indices(bullet, &world.shields);
        if !blocks.is_empty() {
            remove_indices(&mut world.shields, &blocks);
            world.events.push(GameEvent::ShieldHit { blocks: blocks.len() });
            spent.push(idx);
            continue;
        }

        let hits = find_collision_indices(bullet, &world.formation.enemies);
        for &enemy_idx in &hits {
            let enemy = &world.formation.enemies[enemy_idx];
            world.score += 1;
            world.events.push(GameEvent::EnemyDestroyed {
                x: enemy.x,
                y: enemy.y,
                sound: SoundEffect::random_hit(rng),
            });
        }
        remove_indices(&mut world.formation.enemies, &hits);

        if !hits.is_empty() || bullet.bottom() > SCREEN_HEIGHT {
            spent.push(idx);
        }
    }

    remove_indices(&mut world.player_bullets, &spent);
    check_victory(world);
}

/// Win once the score lands exactly on the threshold.
pub fn check_victory(world: &mut GameWorld) {
    if world.score == WIN_SCORE {
        world.finish(GameState::Won);
    }
}
