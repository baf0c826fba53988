// The ash field: a fixed set of drifting particles on a canvas sized to the
// viewport, pushed around by the mouse pointer.

use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::pointer::Pointer;
use crate::surface::Surface;
use rand::Rng;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

#[wasm_bindgen]
pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    pointer: Pointer,
    config: FieldConfig,
}

#[wasm_bindgen]
impl ParticleField {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64, config: &FieldConfig) -> ParticleField {
        ParticleField::with_rng(&mut rand::thread_rng(), width, height, *config)
    }

    /// Advances every particle by one frame.
    ///
    /// Particles never interact, so the order they are visited in doesn't
    /// change the result.
    pub fn step(&mut self) {
        let (width, height) = (self.width, self.height);
        let strength = self.config.push_strength;
        let pointer = self.pointer;
        for particle in &mut self.particles {
            particle.update(width, height, &pointer, strength);
        }
    }

    pub fn render(&self, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        let mut ctx = ctx.clone();
        self.draw(&mut ctx)
    }

    // Positions are left alone; anything now out of bounds comes back through
    // the next wrap on that axis
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer.move_to(x, y);
    }

    pub fn clear_pointer(&mut self) {
        self.pointer.clear();
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl ParticleField {
    pub fn with_rng<R: Rng>(
        rng: &mut R,
        width: f64,
        height: f64,
        config: FieldConfig,
    ) -> ParticleField {
        let particles = (0..config.particle_count)
            .map(|_| Particle::random(rng, width, height, &config))
            .collect();
        ParticleField::from_particles(particles, width, height, config)
    }

    pub fn from_particles(
        particles: Vec<Particle>,
        width: f64,
        height: f64,
        config: FieldConfig,
    ) -> ParticleField {
        ParticleField {
            width,
            height,
            particles,
            pointer: Pointer::new(config.pointer_radius),
            config,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn pointer(&self) -> &Pointer {
        &self.pointer
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Clears the whole surface, then draws each particle as a filled disc.
    pub fn draw<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        surface.clear(self.width, self.height);
        for p in &self.particles {
            surface.fill_circle(p.pos[0], p.pos[1], p.radius, &p.color)?;
        }
        Ok(())
    }

    /// Everything one animation frame does: step, then clear and draw.
    pub fn tick<S: Surface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        self.step();
        self.draw(surface)
    }
}
