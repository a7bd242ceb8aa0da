//! RGB colors for entities

use rand::Rng;
use serde::{Deserialize, Serialize};

/// 8-bit RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uniformly random color, every channel in 0..=255
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            r: rng.random_range(0..=255),
            g: rng.random_range(0..=255),
            b: rng.random_range(0..=255),
        }
    }

    /// CSS `rgb(r,g,b)` string for canvas fill/stroke styles
    pub fn to_css(&self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }

    /// CSS `rgba(...)` string with the given alpha
    pub fn to_css_alpha(&self, alpha: f32) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::WHITE
    }
}
