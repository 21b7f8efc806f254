use log::{debug, info};
use rand::Rng;

use crate::combat;
use crate::config::{PLAYER_START_X, PLAYER_START_Y};
use crate::entities::{Entity, Formation, make_shields};
use crate::events::GameEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    GameOver,
    Won,
}

impl GameState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameState::GameOver | GameState::Won)
    }
}

/// Everything the simulation owns. The app loop holds one of these and
/// hands it to the controllers each tick.
#[derive(Debug, Clone)]
pub struct GameWorld {
    pub player: Entity,
    pub formation: Formation,
    pub player_bullets: Vec<Entity>,
    pub enemy_bullets: Vec<Entity>,
    pub shields: Vec<Entity>,
    pub score: u32,
    /// 1 for the first wave
    pub wave: u32,
    pub tick_count: u64,
    pub(crate) game_state: GameState,
    pub(crate) events: Vec<GameEvent>,
}

impl Default for GameWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl GameWorld {
    pub fn new() -> Self {
        Self {
            player: Entity::player(PLAYER_START_X, PLAYER_START_Y),
            formation: Formation::new(),
            player_bullets: Vec::new(),
            enemy_bullets: Vec::new(),
            shields: make_shields(),
            score: 0,
            wave: 1,
            tick_count: 0,
            game_state: GameState::Playing,
            events: Vec::new(),
        }
    }

    pub fn game_state(&self) -> GameState {
        self.game_state
    }

    pub fn is_terminal(&self) -> bool {
        self.game_state.is_terminal()
    }

    /// Move from Playing into a terminal state. Returns false when the game
    /// had already ended or `outcome` is not terminal.
    pub fn finish(&mut self, outcome: GameState) -> bool {
        if self.is_terminal() || !outcome.is_terminal() {
            return false;
        }
        self.game_state = outcome;
        info!(
            "game ended: {:?} with score {} on wave {} after {} ticks",
            outcome, self.score, self.wave, self.tick_count
        );
        self.events.push(match outcome {
            GameState::Won => GameEvent::Won,
            _ => GameEvent::GameOver,
        });
        true
    }

    /// Take every event produced since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Put the player wherever the pointer is. No clamping.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        if self.is_terminal() {
            return;
        }
        self.player.x = x;
        self.player.y = y;
    }

    pub fn nudge_player(&mut self, dx: f32, dy: f32) {
        let (x, y) = (self.player.x + dx, self.player.y + dy);
        self.pointer_moved(x, y);
    }

    /// Fire input. Returns true when a bullet was thrown.
    pub fn pointer_pressed(&mut self, rng: &mut impl Rng) -> bool {
        if self.is_terminal() {
            return false;
        }
        combat::player_fire(self, rng)
    }

    /// Advance the simulation by one frame. Does nothing once the game has
    /// ended.
    pub fn tick(&mut self, rng: &mut impl Rng) {
        if self.is_terminal() {
            return;
        }
        self.tick_count += 1;

        if self.formation.update() {
            self.events.push(GameEvent::FormationTurned);
        }
        combat::enemies_fire(self, rng);
        combat::process_enemy_bullets(self);
        combat::process_player_bullets(self, rng);

        if self.formation.is_empty() {
            self.formation.populate();
            self.wave += 1;
            info!("wave {} incoming", self.wave);
            self.events.push(GameEvent::WaveSpawned { wave: self.wave });
        }

        debug!(
            "tick {}: {} enemies, {} player bullets, {} enemy bullets, {} shield blocks",
            self.tick_count,
            self.formation.len(),
            self.player_bullets.len(),
            self.enemy_bullets.len(),
            self.shields.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_world_new() {
        let world = GameWorld::new();
        assert_eq!(world.game_state(), GameState::Playing);
        assert_eq!(world.score, 0);
        assert_eq!(world.wave, 1);
        assert_eq!(world.formation.len(), 50);
        assert_eq!(world.shields.len(), 400);
        assert_eq!((world.player.x, world.player.y), (50.0, 40.0));
        assert!(world.player_bullets.is_empty());
        assert!(world.enemy_bullets.is_empty());
    }

    #[test]
    fn test_finish_is_one_way() {
        let mut world = GameWorld::new();
        assert!(world.finish(GameState::GameOver));
        assert!(!world.finish(GameState::Won));
        assert!(!world.finish(GameState::Playing));
        assert_eq!(world.game_state(), GameState::GameOver);
        assert_eq!(world.drain_events(), vec![GameEvent::GameOver]);
    }

    #[test]
    fn test_finish_rejects_playing() {
        let mut world = GameWorld::new();
        assert!(!world.finish(GameState::Playing));
        assert_eq!(world.game_state(), GameState::Playing);
        assert!(world.drain_events().is_empty());
    }

    #[test]
    fn test_pointer_moves_player_anywhere() {
        let mut world = GameWorld::new();
        world.pointer_moved(-30.0, 900.0);
        assert_eq!((world.player.x, world.player.y), (-30.0, 900.0));
    }

    #[test]
    fn test_pointer_ignored_after_game_over() {
        let mut world = GameWorld::new();
        world.finish(GameState::GameOver);
        world.pointer_moved(300.0, 300.0);
        world.nudge_player(10.0, 0.0);
        assert_eq!((world.player.x, world.player.y), (50.0, 40.0));
        let mut rng = StdRng::seed_from_u64(1);
        assert!(!world.pointer_pressed(&mut rng));
        assert!(world.player_bullets.is_empty());
    }

    #[test]
    fn test_tick_counts_only_while_playing() {
        let mut world = GameWorld::new();
        let mut rng = StdRng::seed_from_u64(9);
        world.tick(&mut rng);
        world.tick(&mut rng);
        assert_eq!(world.tick_count, 2);
        world.finish(GameState::Won);
        world.tick(&mut rng);
        assert_eq!(world.tick_count, 2);
    }

    #[test]
    fn test_drain_events_empties_queue() {
        let mut world = GameWorld::new();
        let mut rng = StdRng::seed_from_u64(2);
        world.pointer_pressed(&mut rng);
        assert_eq!(world.drain_events().len(), 1);
        assert!(world.drain_events().is_empty());
    }
}
