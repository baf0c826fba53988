// Tunable constants for the ash field. Defaults reproduce the landing page.
// Plain fields are exposed to JS as properties, ranges go through setters.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub particle_count: u32,
    pub min_radius: f64,
    pub max_radius: f64,
    pub speed_spread: f64,
    pub min_shade: u8,
    pub max_shade: u8,
    pub alpha: f64,
    pub pointer_radius: f64,
    pub push_strength: f64,
    pub profile: bool,
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            particle_count: FieldConfig::PARTICLE_COUNT,
            min_radius: 1.0,
            max_radius: 3.0,
            speed_spread: 0.5,
            min_shade: 100,
            max_shade: 200,
            alpha: 0.7,
            pointer_radius: FieldConfig::POINTER_RADIUS,
            push_strength: FieldConfig::PUSH_STRENGTH,
            profile: false,
        }
    }
}

impl FieldConfig {
    pub const PARTICLE_COUNT: u32 = 150;
    pub const POINTER_RADIUS: f64 = 100.0;
    pub const PUSH_STRENGTH: f64 = 5.0;
}

#[wasm_bindgen]
impl FieldConfig {
    #[wasm_bindgen(constructor)]
    pub fn new() -> FieldConfig {
        FieldConfig::default()
    }

    // Radius is drawn from [min, max); an inverted range is swapped
    pub fn set_radius_range(&mut self, min: f64, max: f64) {
        self.min_radius = min.min(max);
        self.max_radius = max.max(min);
    }

    pub fn set_shade_range(&mut self, min: u8, max: u8) {
        self.min_shade = min.min(max);
        self.max_shade = max.max(min);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page() {
        let config = FieldConfig::default();
        assert_eq!(config.particle_count, 150);
        assert_eq!(config.pointer_radius, 100.0);
        assert_eq!(config.push_strength, 5.0);
        assert_eq!((config.min_radius, config.max_radius), (1.0, 3.0));
        assert_eq!((config.min_shade, config.max_shade), (100, 200));
        assert_eq!(config.alpha, 0.7);
        assert!(!config.profile);
    }

    #[test]
    fn setters_normalize_ranges() {
        let mut config = FieldConfig::new();
        config.set_radius_range(4.0, 2.0);
        config.set_shade_range(220, 30);
        assert_eq!((config.min_radius, config.max_radius), (2.0, 4.0));
        assert_eq!((config.min_shade, config.max_shade), (30, 220));
    }
}
