//! Gameplay tuning constants and runtime settings.

use std::env;
use std::path::PathBuf;

/// Play-field size in world units. The origin is bottom-left, y grows upward.
pub const SCREEN_WIDTH: f32 = 800.0;
pub const SCREEN_HEIGHT: f32 = 600.0;

pub const BULLET_SPEED: f32 = 5.0;
pub const ENEMY_SPEED: f32 = 2.0;

pub const MAX_PLAYER_BULLETS: usize = 3;

/// How close an enemy may get to either side before the formation turns.
pub const ENEMY_VERTICAL_MARGIN: f32 = 15.0;
pub const RIGHT_ENEMY_BORDER: f32 = SCREEN_WIDTH - ENEMY_VERTICAL_MARGIN;
pub const LEFT_ENEMY_BORDER: f32 = ENEMY_VERTICAL_MARGIN;

/// How far the formation drops each time it turns around.
pub const ENEMY_MOVE_DOWN_AMOUNT: f32 = 20.0;

pub const WIN_SCORE: u32 = 50;

// Formation grid
pub const ENEMY_COLUMNS: usize = 10;
pub const ENEMY_ROWS: usize = 5;
pub const ENEMY_X_START: f32 = 0.0;
pub const ENEMY_X_SPACING: f32 = 60.0;
pub const ENEMY_Y_START: f32 = 550.0;
pub const ENEMY_Y_SPACING: f32 = 40.0;

// Shields
pub const SHIELD_BLOCK_WIDTH: f32 = 5.0;
pub const SHIELD_BLOCK_HEIGHT: f32 = 10.0;
pub const SHIELD_WIDTH_COUNT: usize = 20;
pub const SHIELD_HEIGHT_COUNT: usize = 5;
pub const SHIELD_Y_START: f32 = 150.0;
pub const SHIELD_X_FIRST: f32 = 75.0;
pub const SHIELD_X_STEP: f32 = 190.0;

// Sprite extents
pub const PLAYER_WIDTH: f32 = 48.0;
pub const PLAYER_HEIGHT: f32 = 48.0;
pub const PLAYER_START_X: f32 = 50.0;
pub const PLAYER_START_Y: f32 = 40.0;
pub const ENEMY_WIDTH: f32 = 44.0;
pub const ENEMY_HEIGHT: f32 = 32.0;
pub const BULLET_WIDTH: f32 = 16.0;
pub const BULLET_HEIGHT: f32 = 24.0;

/// Degrees per tick a thrown bullet spins.
pub const BULLET_SPIN: f32 = 15.0;

/// World units the player moves per arrow-key press.
pub const PLAYER_KEY_STEP: f32 = 12.0;

pub const MUSIC_VOLUME: f32 = 0.1;
pub const EFFECTS_VOLUME: f32 = 0.5;

const ASSETS_ENV: &str = "BURGER_INVADERS_ASSETS";
const LOG_ENV: &str = "BURGER_INVADERS_LOG";
const MUTE_ENV: &str = "BURGER_INVADERS_MUTE";

/// Runtime settings read from the environment at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Directory holding `song.mp3` and the sound effect `.wav` files
    pub asset_dir: PathBuf,
    /// File the logger writes to (the terminal belongs to the UI)
    pub log_file: PathBuf,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from("assets"),
            log_file: PathBuf::from("burger_invaders.log"),
            muted: false,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            asset_dir: lookup(ASSETS_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.asset_dir),
            log_file: lookup(LOG_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.log_file),
            muted: lookup(MUTE_ENV).is_some(),
        }
    }
}
