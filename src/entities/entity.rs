use rand::Rng;

use crate::config::{
    BULLET_HEIGHT, BULLET_SPIN, BULLET_WIDTH, ENEMY_HEIGHT, ENEMY_WIDTH, PLAYER_HEIGHT,
    PLAYER_WIDTH, SHIELD_BLOCK_HEIGHT, SHIELD_BLOCK_WIDTH,
};

/// What the chef throws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Utensil {
    FryingPan,
    RollingPin,
    Spoon,
    Knife,
}

impl Utensil {
    pub const ALL: [Utensil; 4] = [
        Utensil::FryingPan,
        Utensil::RollingPin,
        Utensil::Spoon,
        Utensil::Knife,
    ];

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    pub fn get_name(&self) -> &'static str {
        match self {
            Utensil::FryingPan => "frying_pan",
            Utensil::RollingPin => "rolling_pin",
            Utensil::Spoon => "spoon",
            Utensil::Knife => "knife",
        }
    }
}

/// What the burgers drop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topping {
    Onion,
    TopBun,
    Patty,
    TomatoPickle,
}

impl Topping {
    pub const ALL: [Topping; 4] = [
        Topping::Onion,
        Topping::TopBun,
        Topping::Patty,
        Topping::TomatoPickle,
    ];

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    pub fn get_name(&self) -> &'static str {
        match self {
            Topping::Onion => "onion",
            Topping::TopBun => "top_bun",
            Topping::Patty => "patty",
            Topping::TomatoPickle => "tomato_pickle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntityKind {
    Player,
    Enemy,
    PlayerBullet(Utensil),
    EnemyBullet(Topping),
    ShieldBlock,
}

impl EntityKind {
    /// Full (width, height) of the bounding box for this kind
    pub fn get_size(&self) -> (f32, f32) {
        match self {
            EntityKind::Player => (PLAYER_WIDTH, PLAYER_HEIGHT),
            EntityKind::Enemy => (ENEMY_WIDTH, ENEMY_HEIGHT),
            EntityKind::PlayerBullet(_) | EntityKind::EnemyBullet(_) => {
                (BULLET_WIDTH, BULLET_HEIGHT)
            }
            EntityKind::ShieldBlock => (SHIELD_BLOCK_WIDTH, SHIELD_BLOCK_HEIGHT),
        }
    }
}

/// A positioned object in the play-field.
///
/// `x`/`y` is the center of an axis-aligned box of `half_width` by
/// `half_height`. `angle` only changes how the object is drawn; collision
/// always uses the unrotated box.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub x: f32,
    pub y: f32,
    pub half_width: f32,
    pub half_height: f32,
    /// Degrees, kept in [0, 360)
    pub angle: f32,
    /// Degrees per tick
    pub change_angle: f32,
    pub dx: f32,
    pub dy: f32,
    pub kind: EntityKind,
}

impl Entity {
    pub fn new(kind: EntityKind, x: f32, y: f32) -> Self {
        let (width, height) = kind.get_size();
        Self {
            x,
            y,
            half_width: width / 2.0,
            half_height: height / 2.0,
            angle: 0.0,
            change_angle: 0.0,
            dx: 0.0,
            dy: 0.0,
            kind,
        }
    }

    pub fn player(x: f32, y: f32) -> Self {
        Self::new(EntityKind::Player, x, y)
    }

    pub fn enemy(x: f32, y: f32) -> Self {
        Self::new(EntityKind::Enemy, x, y)
    }

    pub fn shield_block(x: f32, y: f32) -> Self {
        Self::new(EntityKind::ShieldBlock, x, y)
    }

    /// A bullet with a random starting angle that spins as it flies
    pub fn spinning_bullet(kind: EntityKind, dy: f32, rng: &mut impl Rng) -> Self {
        let mut bullet = Self::new(kind, 0.0, 0.0);
        bullet.dy = dy;
        bullet.angle = rng.random_range(0..360) as f32;
        bullet.change_angle = BULLET_SPIN;
        bullet
    }

    pub fn left(&self) -> f32 {
        self.x - self.half_width
    }

    pub fn right(&self) -> f32 {
        self.x + self.half_width
    }

    pub fn top(&self) -> f32 {
        self.y + self.half_height
    }

    pub fn bottom(&self) -> f32 {
        self.y - self.half_height
    }

    pub fn set_top(&mut self, top: f32) {
        self.y = top - self.half_height;
    }

    pub fn set_bottom(&mut self, bottom: f32) {
        self.y = bottom + self.half_height;
    }

    /// Apply one tick of linear and angular velocity
    pub fn advance(&mut self) {
        self.x += self.dx;
        self.y += self.dy;
        self.angle = (self.angle + self.change_angle).rem_euclid(360.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_entity_size_by_kind() {
        let enemy = Entity::enemy(100.0, 100.0);
        assert_eq!(enemy.half_width, 22.0);
        assert_eq!(enemy.half_height, 16.0);

        let block = Entity::shield_block(0.0, 0.0);
        assert_eq!(block.half_width, 2.5);
        assert_eq!(block.half_height, 5.0);
    }

    #[test]
    fn test_entity_edges() {
        let player = Entity::player(50.0, 40.0);
        assert_eq!(player.left(), 26.0);
        assert_eq!(player.right(), 74.0);
        assert_eq!(player.top(), 64.0);
        assert_eq!(player.bottom(), 16.0);
    }

    #[test]
    fn test_entity_edge_setters() {
        let mut bullet = Entity::new(EntityKind::PlayerBullet(Utensil::Spoon), 0.0, 0.0);
        bullet.set_bottom(64.0);
        assert_eq!(bullet.bottom(), 64.0);
        bullet.set_top(10.0);
        assert_eq!(bullet.top(), 10.0);
    }

    #[test]
    fn test_advance_moves_and_spins() {
        let mut bullet = Entity::new(EntityKind::EnemyBullet(Topping::Patty), 10.0, 10.0);
        bullet.dy = -5.0;
        bullet.angle = 350.0;
        bullet.change_angle = 15.0;
        bullet.advance();
        assert_eq!(bullet.y, 5.0);
        assert_eq!(bullet.x, 10.0);
        assert_eq!(bullet.angle, 5.0);
    }

    #[test]
    fn test_spinning_bullet_setup() {
        let mut rng = StdRng::seed_from_u64(7);
        let bullet = Entity::spinning_bullet(EntityKind::PlayerBullet(Utensil::Knife), 5.0, &mut rng);
        assert_eq!(bullet.dy, 5.0);
        assert_eq!(bullet.change_angle, BULLET_SPIN);
        assert!((0.0..360.0).contains(&bullet.angle));
    }

    #[cfg(test)]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_angle_stays_in_range(
                start in 0u16..360,
                spin in -50i16..50,
                ticks in 0usize..100
            ) {
                let mut entity = Entity::enemy(0.0, 0.0);
                entity.angle = start as f32;
                entity.change_angle = spin as f32;
                for _ in 0..ticks {
                    entity.advance();
                }
                prop_assert!(entity.angle >= 0.0 && entity.angle < 360.0);
            }

            #[test]
            fn test_rotation_never_changes_box(angle in 0u16..360) {
                let mut entity = Entity::enemy(200.0, 300.0);
                let (left, right, top, bottom) =
                    (entity.left(), entity.right(), entity.top(), entity.bottom());
                entity.angle = angle as f32;
                prop_assert_eq!(entity.left(), left);
                prop_assert_eq!(entity.right(), right);
                prop_assert_eq!(entity.top(), top);
                prop_assert_eq!(entity.bottom(), bottom);
            }
        }
    }
}
