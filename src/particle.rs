// Simple particle struct to keep track of individual position, velocity, size, and color

use crate::color::Color;
use crate::config::FieldConfig;
use crate::pointer::Pointer;
use rand::Rng;
use vecmath::Vector2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub radius: f64,
    pub color: Color,
}

impl Particle {
    pub fn new(
        pos_x: f64,
        pos_y: f64,
        vel_x: f64,
        vel_y: f64,
        radius: f64,
        color: Color,
    ) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            radius,
            color,
        }
    }

    // Random ash flake somewhere inside a width x height canvas
    pub fn random<R: Rng>(rng: &mut R, width: f64, height: f64, config: &FieldConfig) -> Particle {
        let radius = rng.gen::<f64>() * (config.max_radius - config.min_radius) + config.min_radius;
        let pos_x = rng.gen::<f64>() * width;
        let pos_y = rng.gen::<f64>() * height;
        let vel_x = (rng.gen::<f64>() - 0.5) * config.speed_spread;
        let vel_y = (rng.gen::<f64>() - 0.5) * config.speed_spread;
        let shade_span = config.max_shade.saturating_sub(config.min_shade) as f64;
        let shade = config.min_shade + (rng.gen::<f64>() * shade_span) as u8;
        let color = Color::gray(shade, config.alpha);
        Particle::new(pos_x, pos_y, vel_x, vel_y, radius, color)
    }

    pub fn advance(&mut self) {
        self.pos = vecmath::vec2_add(self.pos, self.vel);
    }

    // Toroidal edges, checked per axis. Overflow lands on 0, underflow on the far edge.
    pub fn wrap(&mut self, width: f64, height: f64) {
        if self.pos[0] > width {
            self.pos[0] = 0.0;
        }
        if self.pos[0] < 0.0 {
            self.pos[0] = width;
        }
        if self.pos[1] > height {
            self.pos[1] = 0.0;
        }
        if self.pos[1] < 0.0 {
            self.pos[1] = height;
        }
    }

    pub fn repel(&mut self, pointer: &Pointer, strength: f64) {
        if let Some(push) = pointer.push(self.pos, strength) {
            self.pos = vecmath::vec2_add(self.pos, push);
        }
    }

    /// One frame of motion: drift, wrap at the edges, then get pushed by the pointer.
    pub fn update(&mut self, width: f64, height: f64, pointer: &Pointer, strength: f64) {
        self.advance();
        self.wrap(width, height);
        self.repel(pointer, strength);
    }
}
