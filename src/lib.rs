// Library exports for testing
pub use app::App;
pub use config::Settings;
pub use entities::{Entity, EntityKind, Facing, Formation, Topping, Utensil};
pub use events::{GameEvent, SoundEffect};
pub use world::{GameState, GameWorld};

pub mod app;
pub mod audio;
pub mod combat;
pub mod config;
pub mod effects;
pub mod entities;
pub mod events;
pub mod input;
pub mod renderer;
pub mod world;
