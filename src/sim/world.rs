//! Simulation context
//!
//! Everything the frame driver and input handlers touch lives in one `World`,
//! created at startup and passed by reference. Balls are an arena: dead balls
//! keep their slot so indices stay stable for the whole run.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::color::Rgb;
use super::entity::{Ball, Entity, EvilCircle};
use super::motion::Surface;
use crate::settings::Settings;

#[derive(Debug, Clone)]
pub struct World {
    /// Run seed for reproducibility
    pub seed: u64,
    pub surface: Surface,
    /// Ball arena (index order is collision order)
    pub balls: Vec<Ball>,
    pub evil: EvilCircle,
    /// Balls still alive, shown in the HUD
    pub live_count: usize,
    /// Frames simulated so far
    pub frame: u64,
    /// Overlay alpha painted at the start of each frame
    pub trail_alpha: f32,
    pub rng: Pcg32,
}

impl World {
    /// Build a world with the settings' startup batch of balls
    pub fn new(settings: &Settings, surface: Surface, seed: u64) -> Self {
        let settings = settings.sanitized();
        let mut rng = Pcg32::seed_from_u64(seed);

        let mut balls = Vec::with_capacity(settings.ball_count);
        while balls.len() < settings.ball_count {
            balls.push(random_ball(&mut rng, &settings, &surface));
        }

        let evil_pos = random_inset_position(&mut rng, settings.evil_radius, &surface);
        let evil = EvilCircle::new(
            evil_pos,
            settings.evil_step,
            settings.evil_radius,
            settings.evil_color,
        );

        log::info!(
            "World created: {} balls on {}x{} (seed {})",
            balls.len(),
            surface.width,
            surface.height,
            seed
        );

        Self::from_parts(seed, surface, balls, evil, settings.trail_alpha, rng)
    }

    /// Assemble a world from explicit entities (scripted setups and tests)
    pub fn from_parts(
        seed: u64,
        surface: Surface,
        balls: Vec<Ball>,
        evil: EvilCircle,
        trail_alpha: f32,
        rng: Pcg32,
    ) -> Self {
        let live_count = balls.iter().filter(|b| b.is_alive()).count();
        Self {
            seed,
            surface,
            balls,
            evil,
            live_count,
            frame: 0,
            trail_alpha,
            rng,
        }
    }

    /// Live balls with their arena index
    pub fn live_balls(&self) -> impl Iterator<Item = (usize, &Ball)> {
        self.balls.iter().enumerate().filter(|(_, b)| b.is_alive())
    }

    /// All live entities, balls first in index order, then the evil circle
    pub fn entities(&self) -> impl Iterator<Item = Entity<'_>> {
        self.balls
            .iter()
            .map(Entity::Ball)
            .chain(std::iter::once(Entity::EvilCircle(&self.evil)))
            .filter(|e| e.is_alive())
    }

    /// True once the evil circle has eaten every ball
    pub fn is_cleared(&self) -> bool {
        self.live_count == 0
    }
}

/// Integer-valued uniform position at least `radius` away from every edge
fn random_inset_position(rng: &mut Pcg32, radius: f32, surface: &Surface) -> Vec2 {
    Vec2::new(
        random_coord(rng, radius, surface.width),
        random_coord(rng, radius, surface.height),
    )
}

fn random_coord(rng: &mut Pcg32, radius: f32, extent: f32) -> f32 {
    let lo = radius.ceil() as i64;
    let hi = (extent - radius).floor() as i64;
    if hi <= lo {
        // Surface narrower than the entity: centre it
        return extent / 2.0;
    }
    rng.random_range(lo..=hi) as f32
}

fn random_ball(rng: &mut Pcg32, settings: &Settings, surface: &Surface) -> Ball {
    let radius = rng.random_range(settings.min_radius..=settings.max_radius) as f32;
    let pos = random_inset_position(rng, radius, surface);
    let vel = Vec2::new(
        rng.random_range(-settings.max_speed..=settings.max_speed) as f32,
        rng.random_range(-settings.max_speed..=settings.max_speed) as f32,
    );
    let color = Rgb::random(rng);
    Ball::new(pos, vel, color, radius)
}
