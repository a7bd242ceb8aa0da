//! Bouncing Balls - colliding balls and a user-steered evil circle
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, motion, collisions, frame driver)
//! - `renderer`: Canvas 2D drawing of frame reports (web only)
//! - `settings`: Tunables with JSON persistence

#[cfg(target_arch = "wasm32")]
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Simulation defaults (mirrors the classic bouncing balls exercise)
pub mod consts {
    /// Balls spawned at startup
    pub const BALL_COUNT: usize = 25;
    /// Ball radius range (inclusive)
    pub const BALL_MIN_RADIUS: u32 = 10;
    pub const BALL_MAX_RADIUS: u32 = 20;
    /// Largest absolute velocity component (pixels per frame)
    pub const BALL_MAX_SPEED: i32 = 7;

    /// Evil circle defaults
    pub const EVIL_RADIUS: f32 = 10.0;
    /// Distance moved per key press
    pub const EVIL_STEP: f32 = 20.0;
    /// Stroke width used when drawing the evil circle
    pub const EVIL_LINE_WIDTH: f64 = 3.0;

    /// Alpha of the black overlay painted every frame (fading trails)
    pub const TRAIL_ALPHA: f32 = 0.25;

    /// Surface used by the headless native run
    pub const HEADLESS_WIDTH: f32 = 800.0;
    pub const HEADLESS_HEIGHT: f32 = 600.0;
}
