// Drifting "ash" particle background for a full-viewport canvas. The mouse
// pushes nearby flakes away; everything else just floats and wraps around
// the screen edges.

mod utils;

pub mod color;
pub mod config;
pub mod field;
pub mod particle;
pub mod pointer;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub mod frame_loop;

use wasm_bindgen::prelude::*;
use web_sys::console;

pub use crate::color::Color;
pub use crate::config::FieldConfig;
pub use crate::field::ParticleField;
pub use crate::particle::Particle;
pub use crate::pointer::Pointer;
pub use crate::surface::Surface;

#[cfg(target_arch = "wasm32")]
pub use crate::frame_loop::{start, start_with_config, FrameLoop};

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

// Logs the time between creation and drop to the browser console
pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}
