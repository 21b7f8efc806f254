use rand::Rng;

use crate::entities::{Topping, Utensil};

/// Sound effects the simulation asks for. The audio layer maps each one to a
/// file under the asset directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    Throw1,
    Throw3,
    Throw4,
    Hit1,
    Hit2,
    Hit4,
}

impl SoundEffect {
    /// Throw4 appears twice, so it plays half the time
    pub const THROWS: [SoundEffect; 4] = [
        SoundEffect::Throw1,
        SoundEffect::Throw3,
        SoundEffect::Throw4,
        SoundEffect::Throw4,
    ];

    pub const HITS: [SoundEffect; 4] = [
        SoundEffect::Hit1,
        SoundEffect::Hit2,
        SoundEffect::Hit1,
        SoundEffect::Hit4,
    ];

    pub const ALL: [SoundEffect; 6] = [
        SoundEffect::Throw1,
        SoundEffect::Throw3,
        SoundEffect::Throw4,
        SoundEffect::Hit1,
        SoundEffect::Hit2,
        SoundEffect::Hit4,
    ];

    pub fn random_throw(rng: &mut impl Rng) -> Self {
        Self::THROWS[rng.random_range(0..Self::THROWS.len())]
    }

    pub fn random_hit(rng: &mut impl Rng) -> Self {
        Self::HITS[rng.random_range(0..Self::HITS.len())]
    }

    pub fn get_file_name(&self) -> &'static str {
        match self {
            SoundEffect::Throw1 => "throw1.wav",
            SoundEffect::Throw3 => "throw3.wav",
            SoundEffect::Throw4 => "throw4.wav",
            SoundEffect::Hit1 => "hit1.wav",
            SoundEffect::Hit2 => "hit2.wav",
            SoundEffect::Hit4 => "hit4.wav",
        }
    }
}

/// Things that happened during a tick that the presentation layer may want
/// to react to. Drained once per frame.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    PlayerFired { utensil: Utensil, sound: SoundEffect },
    EnemyFired { topping: Topping },
    EnemyDestroyed { x: f32, y: f32, sound: SoundEffect },
    ShieldHit { blocks: usize },
    FormationTurned,
    WaveSpawned { wave: u32 },
    GameOver,
    Won,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_file_names_are_unique() {
        let mut names: Vec<&str> = SoundEffect::ALL.iter().map(|s| s.get_file_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), SoundEffect::ALL.len());
    }

    #[test]
    fn test_random_choices_come_from_their_lists() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            assert!(SoundEffect::THROWS.contains(&SoundEffect::random_throw(&mut rng)));
            assert!(SoundEffect::HITS.contains(&SoundEffect::random_hit(&mut rng)));
        }
    }
}
