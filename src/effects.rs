/// A short-lived bit of flying burger drawn where an enemy was hit.
/// Purely visual; it never touches the simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct Splat {
    pub x: f32,
    pub y: f32,
    pub velocity_x: f32,
    pub velocity_y: f32,
    pub lifetime: u8,
    pub char: char,
}

impl Splat {
    pub fn new(x: f32, y: f32, velocity_x: f32, velocity_y: f32, lifetime: u8, char: char) -> Self {
        Self {
            x,
            y,
            velocity_x,
            velocity_y,
            lifetime,
            char,
        }
    }

    pub fn update(&mut self) {
        self.lifetime = self.lifetime.saturating_sub(1);
        self.x += self.velocity_x;
        self.y += self.velocity_y;
    }

    pub fn is_dead(&self) -> bool {
        self.lifetime == 0
    }
}

/// Bits flying out in 8 directions plus one in the middle
pub fn create_splat(center_x: f32, center_y: f32) -> Vec<Splat> {
    let directions = [
        (0.0, 1.0),
        (1.0, 1.0),
        (1.0, 0.0),
        (1.0, -1.0),
        (0.0, -1.0),
        (-1.0, -1.0),
        (-1.0, 0.0),
        (-1.0, 1.0),
    ];

    let mut splats: Vec<Splat> = directions
        .iter()
        .map(|(dx, dy)| Splat::new(center_x, center_y, dx * 4.0, dy * 4.0, 8, '*'))
        .collect();
    splats.push(Splat::new(center_x, center_y, 0.0, 0.0, 5, '@'));
    splats
}
