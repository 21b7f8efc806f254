//! Integration tests for game logic
//!
//! These drive whole ticks of the world and check the formation, combat and
//! state machine working together.

use burger_invaders::config::{BULLET_SPEED, ENEMY_MOVE_DOWN_AMOUNT, ENEMY_SPEED, WIN_SCORE};
use burger_invaders::{Entity, EntityKind, GameEvent, GameState, GameWorld, Topping, Utensil};
use rand::RngCore;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Every roll lands on its highest value, so enemies never fire
struct NeverFire;

impl RngCore for NeverFire {
    fn next_u32(&mut self) -> u32 {
        u32::MAX
    }

    fn next_u64(&mut self) -> u64 {
        u64::MAX
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(u8::MAX);
    }
}

fn player_bullet(x: f32, y: f32) -> Entity {
    let mut bullet = Entity::new(EntityKind::PlayerBullet(Utensil::FryingPan), x, y);
    bullet.dy = BULLET_SPEED;
    bullet
}

fn enemy_bullet(x: f32, y: f32) -> Entity {
    let mut bullet = Entity::new(EntityKind::EnemyBullet(Topping::Patty), x, y);
    bullet.dy = -BULLET_SPEED;
    bullet
}

/// A world with a few enemies in open space and nothing else
fn sparse_world(enemies: &[(f32, f32)]) -> GameWorld {
    let mut world = GameWorld::new();
    world.shields.clear();
    world.formation.enemies = enemies.iter().map(|&(x, y)| Entity::enemy(x, y)).collect();
    world
}

#[test]
fn test_formation_turns_and_drops_at_left_border() {
    let mut world = GameWorld::new();
    // Leftmost column at x=38, left edge 16: one step from crossing 15
    for enemy in &mut world.formation.enemies {
        enemy.x += 38.0;
    }
    let before: Vec<(f32, f32)> = world.formation.enemies.iter().map(|e| (e.x, e.y)).collect();

    world.tick(&mut NeverFire);

    assert_eq!(world.formation.change_x, ENEMY_SPEED);
    for (enemy, (x, y)) in world.formation.enemies.iter().zip(&before) {
        assert_eq!(enemy.x, x - ENEMY_SPEED);
        assert_eq!(enemy.y, y - ENEMY_MOVE_DOWN_AMOUNT);
    }
    assert!(world.drain_events().contains(&GameEvent::FormationTurned));

    // The next translation is rightward
    world.tick(&mut NeverFire);
    for (enemy, (x, _)) in world.formation.enemies.iter().zip(&before) {
        assert_eq!(enemy.x, *x);
    }
}

#[test]
fn test_bullet_through_two_enemies_scores_two() {
    let mut world = sparse_world(&[(400.0, 400.0), (400.0, 440.0), (600.0, 300.0)]);
    world.player_bullets.push(player_bullet(400.0, 415.0));

    world.tick(&mut NeverFire);

    assert_eq!(world.score, 2);
    assert!(world.player_bullets.is_empty());
    assert_eq!(world.formation.len(), 1);
    assert_eq!(world.formation.enemies[0].y, 300.0);
}

#[test]
fn test_reaching_win_score_ends_game_that_tick() {
    let mut world = sparse_world(&[(400.0, 400.0), (600.0, 300.0)]);
    world.score = WIN_SCORE - 1;
    world.player_bullets.push(player_bullet(400.0, 380.0));

    world.tick(&mut NeverFire);

    assert_eq!(world.score, WIN_SCORE);
    assert_eq!(world.game_state(), GameState::Won);
    assert!(world.drain_events().contains(&GameEvent::Won));

    // Frozen from here on
    let snapshot = world.clone();
    world.tick(&mut NeverFire);
    assert_eq!(world.tick_count, snapshot.tick_count);
    assert_eq!(world.formation.enemies, snapshot.formation.enemies);
    assert_eq!(world.score, snapshot.score);
}

#[test]
fn test_enemy_bullet_takes_out_one_shield_block() {
    let mut world = GameWorld::new();
    let blocks_before = world.shields.len();
    // Just over the bottom-left corner block of the first shield
    world.enemy_bullets.push(enemy_bullet(65.5, 145.0));

    world.tick(&mut NeverFire);

    assert!(world.enemy_bullets.is_empty());
    assert_eq!(world.shields.len(), blocks_before - 1);
    assert!(!world.shields.iter().any(|b| b.x == 75.0 && b.y == 150.0));
    assert!(
        world
            .drain_events()
            .contains(&GameEvent::ShieldHit { blocks: 1 })
    );
}

#[test]
fn test_cleared_wave_is_replaced_before_next_frame() {
    let mut world = sparse_world(&[(400.0, 400.0)]);
    world.formation.change_x = ENEMY_SPEED;
    world.player_bullets.push(player_bullet(400.0, 380.0));

    world.tick(&mut NeverFire);

    let fresh = GameWorld::new();
    assert_eq!(world.score, 1);
    assert_eq!(world.wave, 2);
    assert_eq!(world.formation.enemies, fresh.formation.enemies);
    assert_eq!(world.formation.change_x, -ENEMY_SPEED);
    assert!(
        world
            .drain_events()
            .contains(&GameEvent::WaveSpawned { wave: 2 })
    );
}

#[test]
fn test_enemy_bullet_on_player_is_game_over() {
    let mut world = sparse_world(&[(400.0, 400.0)]);
    let (x, y) = (world.player.x, world.player.y);
    world.enemy_bullets.push(enemy_bullet(x, y + 20.0));

    world.tick(&mut NeverFire);
    assert_eq!(world.game_state(), GameState::GameOver);

    // Nothing moves once the game is over
    let enemy_x = world.formation.enemies[0].x;
    let bullet_y = world.enemy_bullets[0].y;
    world.tick(&mut NeverFire);
    world.pointer_moved(500.0, 500.0);
    assert_eq!(world.formation.enemies[0].x, enemy_x);
    assert_eq!(world.enemy_bullets[0].y, bullet_y);
    assert_eq!((world.player.x, world.player.y), (x, y));
}

#[test]
fn test_player_can_only_have_three_bullets() {
    let mut world = GameWorld::new();
    let mut rng = StdRng::seed_from_u64(4);
    let fired: Vec<bool> = (0..5).map(|_| world.pointer_pressed(&mut rng)).collect();
    assert_eq!(fired, vec![true, true, true, false, false]);

    // Bullets that fly off the top free up the cap
    for bullet in &mut world.player_bullets {
        bullet.y = 800.0;
    }
    world.tick(&mut NeverFire);
    assert!(world.player_bullets.is_empty());
    assert!(world.pointer_pressed(&mut rng));
}

#[test]
fn test_long_runs_keep_invariants() {
    for seed in 0..20u64 {
        let mut world = GameWorld::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut last_score = 0;
        let mut ended_as = None;

        for tick in 0..600u64 {
            if tick % 7 == 0 {
                let x = (tick * 13 % 800) as f32;
                world.pointer_moved(x, 40.0);
                world.pointer_pressed(&mut rng);
            }
            let shields_before = world.shields.len();
            world.tick(&mut rng);

            assert!(world.score >= last_score);
            last_score = world.score;
            assert!(world.shields.len() <= shields_before);
            assert!(world.player_bullets.len() <= 3);

            if let Some(state) = ended_as {
                assert_eq!(world.game_state(), state);
            } else if world.is_terminal() {
                ended_as = Some(world.game_state());
            }
        }
    }
}
