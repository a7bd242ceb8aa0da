//! Deterministic simulation module
//!
//! All simulation logic lives here. This module must stay pure:
//! - One frame per tick, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (ball arena index)
//! - No rendering or platform dependencies

pub mod collision;
pub mod color;
pub mod driver;
pub mod entity;
pub mod input;
pub mod motion;
pub mod tick;
pub mod world;

pub use collision::{circles_overlap, consume_contacts, recolor_contacts};
pub use color::Rgb;
pub use driver::{Driver, Event};
pub use entity::{Ball, Body, Entity, EvilCircle};
pub use input::{Direction, step_evil_circle};
pub use motion::{Surface, clamp_evil_circle, integrate_ball};
pub use tick::{DrawCommand, FrameReport, Paint, tick};
pub use world::World;
