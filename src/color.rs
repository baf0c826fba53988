// Simple color struct, red/green/blue channels plus a fractional alpha,
// rendered as a css rgba() string for the 2d canvas fill style
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    // Ash particles use the same value on every channel
    pub fn gray(shade: u8, alpha: f64) -> Color {
        Color {
            r: shade,
            g: shade,
            b: shade,
            a: alpha,
        }
    }

    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}
