use super::entity::Entity;
use crate::config::{
    SCREEN_WIDTH, SHIELD_BLOCK_HEIGHT, SHIELD_BLOCK_WIDTH, SHIELD_HEIGHT_COUNT,
    SHIELD_WIDTH_COUNT, SHIELD_X_FIRST, SHIELD_X_STEP, SHIELD_Y_START,
};

/// One shield: a solid grid of blocks packed edge to edge so it reads as a
/// single bunker that erodes block by block.
pub fn make_shield(x_start: f32) -> Vec<Entity> {
    let mut blocks = Vec::with_capacity(SHIELD_WIDTH_COUNT * SHIELD_HEIGHT_COUNT);
    for column in 0..SHIELD_WIDTH_COUNT {
        let x = x_start + column as f32 * SHIELD_BLOCK_WIDTH;
        for row in 0..SHIELD_HEIGHT_COUNT {
            let y = SHIELD_Y_START + row as f32 * SHIELD_BLOCK_HEIGHT;
            blocks.push(Entity::shield_block(x, y));
        }
    }
    blocks
}

/// Every shield across the bottom of the screen
pub fn make_shields() -> Vec<Entity> {
    let mut blocks = Vec::new();
    let mut x_start = SHIELD_X_FIRST;
    while x_start < SCREEN_WIDTH {
        blocks.extend(make_shield(x_start));
        x_start += SHIELD_X_STEP;
    }
    blocks
}
