//! Colors

use serde::Deserialize;

/// Convert an f64 [0,1] component to a u8 [0,255] component
///
/// Values outside of [0,1] are clamped
pub fn cu8(v: f64) -> u8 {
    (v.max(0.0).min(1.0) * 255.0).round() as u8
}

fn color_u8_to_f64(x: u8) -> f64 {
    f64::from(x) / 255.0
}

/// Color as Red, Green, Blue floating point components
///
/// Components are nominally within [0,1]; there is no transparency
#[derive(Debug,Default,Copy,Clone,PartialEq,Deserialize)]
pub struct Rgb {
    /// Red
    pub r: f64,
    /// Green
    pub g: f64,
    /// Blue
    pub b: f64,
}

impl Rgb {
    /// Create new color
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Rgb { r, g, b }
    }
    /// White Color (1,1,1)
    pub fn white() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
    /// Black Color (0,0,0)
    pub fn black() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
    /// Convert to 8-bit components
    ///
    ///     use zpoly::{Rgb,Rgb8};
    ///
    ///     assert_eq!(Rgb::new(1.0, 0.5, 0.0).to_rgb8(), Rgb8::new(255,128,0));
    ///     assert_eq!(Rgb::new(2.0, -1.0, 0.0).to_rgb8(), Rgb8::new(255,0,0));
    ///
    pub fn to_rgb8(&self) -> Rgb8 {
        Rgb8::new(cu8(self.r), cu8(self.g), cu8(self.b))
    }
}

/// Color as Red, Green, Blue
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub fn white() -> Self {
        Self::new(255,255,255)
    }
    pub fn black() -> Self {
        Self::new(0,0,0)
    }
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb8 { r, g, b }
    }
    pub fn gray(g: u8) -> Self {
        Self::new(g,g,g)
    }
    /// Create from the first three components of a pixel slice
    pub fn from_slice(p: &[u8]) -> Self {
        Self::new(p[0], p[1], p[2])
    }
}

impl From<Rgb> for Rgb8 {
    fn from(c: Rgb) -> Rgb8 {
        c.to_rgb8()
    }
}
impl From<Rgb8> for Rgb {
    fn from(c: Rgb8) -> Rgb {
        Rgb::new(color_u8_to_f64(c.r), color_u8_to_f64(c.g), color_u8_to_f64(c.b))
    }
}
