// Last known mouse position and the radius inside which it pushes particles away

use vecmath::Vector2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pointer {
    pub pos: Option<Vector2<f64>>,
    pub radius: f64,
}

impl Pointer {
    pub fn new(radius: f64) -> Pointer {
        Pointer { pos: None, radius }
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.pos = Some([x, y]);
    }

    pub fn clear(&mut self) {
        self.pos = None;
    }

    // Linear falloff: 1 at the pointer, 0 at the radius and beyond
    pub fn force_at(&self, distance: f64) -> f64 {
        if distance < self.radius {
            (self.radius - distance) / self.radius
        } else {
            0.0
        }
    }

    /// Displacement for a particle at `pos`, pointing away from the pointer.
    ///
    /// Returns `None` when the pointer is unset or the particle is outside
    /// the interaction radius. A particle sitting exactly on the pointer is
    /// pushed along -x, since `atan2(0, 0)` is 0.
    pub fn push(&self, pos: Vector2<f64>, strength: f64) -> Option<Vector2<f64>> {
        let target = self.pos?;
        let to_pointer = vecmath::vec2_sub(target, pos);
        let distance = vecmath::vec2_len(to_pointer);
        if distance >= self.radius {
            return None;
        }
        let force = self.force_at(distance);
        let angle = to_pointer[1].atan2(to_pointer[0]);
        Some([
            -force * angle.cos() * strength,
            -force * angle.sin() * strength,
        ])
    }
}
