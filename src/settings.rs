//! Simulation settings
//!
//! Persisted as JSON in LocalStorage on the web. Native builds read an
//! optional JSON file instead.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Rgb;

/// Tunables for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Balls ===
    /// Balls spawned at startup
    pub ball_count: usize,
    /// Smallest ball radius (pixels)
    pub min_radius: u32,
    /// Largest ball radius (pixels)
    pub max_radius: u32,
    /// Largest absolute velocity component (pixels per frame)
    pub max_speed: i32,

    // === Evil circle ===
    pub evil_radius: f32,
    /// Distance moved per key press
    pub evil_step: f32,
    pub evil_color: Rgb,

    // === Presentation ===
    /// Overlay alpha per frame (lower = longer trails)
    pub trail_alpha: f32,
    /// Update the ball count element every frame
    pub show_ball_count: bool,

    /// Fixed RNG seed; `None` seeds from the clock
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ball_count: BALL_COUNT,
            min_radius: BALL_MIN_RADIUS,
            max_radius: BALL_MAX_RADIUS,
            max_speed: BALL_MAX_SPEED,

            evil_radius: EVIL_RADIUS,
            evil_step: EVIL_STEP,
            evil_color: Rgb::WHITE,

            trail_alpha: TRAIL_ALPHA,
            show_ball_count: true,

            seed: None,
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "bouncing_balls_settings";

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Copy with ranges repaired so sampling from them cannot panic
    pub fn sanitized(&self) -> Self {
        let mut s = self.clone();
        if s.min_radius == 0 {
            s.min_radius = 1;
        }
        if s.max_radius < s.min_radius {
            std::mem::swap(&mut s.min_radius, &mut s.max_radius);
            s.min_radius = s.min_radius.max(1);
        }
        s.max_speed = s.max_speed.saturating_abs();
        if s.evil_radius.is_nan() || s.evil_radius <= 0.0 {
            s.evil_radius = EVIL_RADIUS;
        }
        if !s.evil_step.is_finite() {
            s.evil_step = EVIL_STEP;
        }
        s.trail_alpha = if s.trail_alpha.is_finite() {
            s.trail_alpha.clamp(0.0, 1.0)
        } else {
            TRAIL_ALPHA
        };
        s
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring corrupt settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            match self.to_json() {
                Ok(json) => {
                    if storage.set_item(Self::STORAGE_KEY, &json).is_err() {
                        log::warn!("Failed to write settings to LocalStorage");
                    } else {
                        log::info!("Settings saved");
                    }
                }
                Err(e) => log::warn!("Failed to serialize settings: {}", e),
            }
        }
    }

    /// Load settings from a JSON file, falling back to defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: Option<&std::path::Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring corrupt settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_exercise() {
        let s = Settings::default();
        assert_eq!(s.ball_count, 25);
        assert_eq!((s.min_radius, s.max_radius), (10, 20));
        assert_eq!(s.max_speed, 7);
        assert_eq!(s.evil_radius, 10.0);
        assert_eq!(s.evil_step, 20.0);
        assert_eq!(s.evil_color, Rgb::WHITE);
        assert_eq!(s.trail_alpha, 0.25);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let s = Settings::from_json(r#"{ "ball_count": 3, "seed": 42 }"#).unwrap();
        assert_eq!(s.ball_count, 3);
        assert_eq!(s.seed, Some(42));
        assert_eq!(s.max_radius, 20);
        assert!(s.show_ball_count);
    }

    #[test]
    fn test_json_round_trip() {
        let s = Settings {
            evil_color: Rgb::new(255, 0, 0),
            seed: Some(7),
            ..Settings::default()
        };
        let back = Settings::from_json(&s.to_json().unwrap()).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn test_corrupt_json_is_an_error() {
        assert!(Settings::from_json("{ not json").is_err());
        assert!(Settings::from_json(r#"{ "ball_count": -1 }"#).is_err());
    }

    #[test]
    fn test_sanitized_repairs_ranges() {
        let s = Settings {
            min_radius: 30,
            max_radius: 5,
            max_speed: -4,
            evil_radius: -1.0,
            trail_alpha: 3.0,
            ..Settings::default()
        }
        .sanitized();
        assert_eq!((s.min_radius, s.max_radius), (5, 30));
        assert_eq!(s.max_speed, 4);
        assert_eq!(s.evil_radius, EVIL_RADIUS);
        assert_eq!(s.trail_alpha, 1.0);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_missing_file_falls_back() {
        let s = Settings::load_from(Some(std::path::Path::new("/definitely/not/here.json")));
        assert_eq!(s, Settings::default());
    }
}
