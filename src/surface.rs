// Anything the field can draw onto: the browser's 2d canvas context, or a
// recorder in tests

use crate::color::Color;
use std::f64::consts::PI;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

pub trait Surface {
    type Error;

    fn clear(&mut self, width: f64, height: f64);
    fn fill_circle(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        color: &Color,
    ) -> Result<(), Self::Error>;
}

impl Surface for CanvasRenderingContext2d {
    type Error = JsValue;

    fn clear(&mut self, width: f64, height: f64) {
        self.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &Color) -> Result<(), JsValue> {
        self.begin_path();
        self.arc(x, y, radius, 0.0, PI * 2.0)?;
        #[allow(deprecated)]
        self.set_fill_style(&JsValue::from_str(&color.to_css()));
        self.fill();
        Ok(())
    }
}
