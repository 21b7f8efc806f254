pub mod collision;
mod entity;
mod formation;
mod shield;

// Re-export all public types
pub use collision::{find_collision_indices, find_collisions, overlaps};
pub use entity::{Entity, EntityKind, Topping, Utensil};
pub use formation::{Facing, Formation};
pub use shield::{make_shield, make_shields};
