use super::entity::Entity;
use crate::config::{
    ENEMY_COLUMNS, ENEMY_MOVE_DOWN_AMOUNT, ENEMY_ROWS, ENEMY_SPEED, ENEMY_X_SPACING,
    ENEMY_X_START, ENEMY_Y_SPACING, ENEMY_Y_START, LEFT_ENEMY_BORDER, RIGHT_ENEMY_BORDER,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

/// The grid of burgers that sweeps side to side and drops when it turns.
#[derive(Debug, Clone)]
pub struct Formation {
    /// Live enemies, in the order they were populated (column by column,
    /// bottom row first within each column)
    pub enemies: Vec<Entity>,
    /// Shared horizontal velocity, magnitude always `ENEMY_SPEED`
    pub change_x: f32,
}

impl Default for Formation {
    fn default() -> Self {
        Self::new()
    }
}

impl Formation {
    /// A full wave in the starting position, sweeping left
    pub fn new() -> Self {
        let mut formation = Self {
            enemies: Vec::with_capacity(ENEMY_COLUMNS * ENEMY_ROWS),
            change_x: -ENEMY_SPEED,
        };
        formation.populate();
        formation
    }

    /// Rebuild the grid from scratch. Velocity resets to the leftward sweep
    /// regardless of how the previous wave ended.
    pub fn populate(&mut self) {
        self.enemies.clear();
        self.change_x = -ENEMY_SPEED;
        for column in 0..ENEMY_COLUMNS {
            let x = ENEMY_X_START + column as f32 * ENEMY_X_SPACING;
            for row in 0..ENEMY_ROWS {
                let y = ENEMY_Y_START + row as f32 * ENEMY_Y_SPACING;
                self.enemies.push(Entity::enemy(x, y));
            }
        }
    }

    pub fn facing(&self) -> Facing {
        if self.change_x > 0.0 {
            Facing::Right
        } else {
            Facing::Left
        }
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    /// Advance one tick. Returns true when the formation turned around.
    ///
    /// The border check runs on positions already moved this tick, so an
    /// enemy can sit past the border for the frame on which it turns.
    pub fn update(&mut self) -> bool {
        for enemy in &mut self.enemies {
            enemy.x += self.change_x;
        }

        // Both edges are judged against the velocity this tick moved with
        let vx = self.change_x;
        let move_down = self.enemies.iter().any(|enemy| {
            (enemy.right() > RIGHT_ENEMY_BORDER && vx > 0.0)
                || (enemy.left() < LEFT_ENEMY_BORDER && vx < 0.0)
        });

        if move_down {
            self.change_x = -vx;
            for enemy in &mut self.enemies {
                enemy.y -= ENEMY_MOVE_DOWN_AMOUNT;
            }
        }

        move_down
    }
}
