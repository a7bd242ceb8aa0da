//! One frame of simulation
//!
//! Per frame: overlay, then for every live ball draw → integrate → recolor
//! contacts, then the evil circle draw → clamp → eat contacts. Draw commands
//! are recorded with the position at draw time, before that entity moves.

use glam::Vec2;

use super::collision::{consume_contacts, recolor_contacts};
use super::color::Rgb;
use super::entity::Entity;
use super::motion::{clamp_evil_circle, integrate_ball};
use super::world::World;

/// How a circle is painted
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    /// Solid disc (balls)
    Fill,
    /// Outline only (evil circle)
    Stroke,
}

/// A circle to draw this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    /// Arena index for balls, `None` for the evil circle
    pub ball_index: Option<usize>,
    pub pos: Vec2,
    pub radius: f32,
    pub color: Rgb,
    pub paint: Paint,
}

impl DrawCommand {
    fn for_entity(entity: Entity<'_>, ball_index: Option<usize>) -> Self {
        let paint = match entity {
            Entity::Ball(_) => Paint::Fill,
            Entity::EvilCircle(_) => Paint::Stroke,
        };
        Self {
            ball_index,
            pos: entity.body().pos,
            radius: entity.radius(),
            color: entity.color(),
            paint,
        }
    }
}

/// Everything a host needs to present one frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    /// Frame number (1-based)
    pub frame: u64,
    /// Alpha of the black overlay painted before the draw list
    pub overlay_alpha: f32,
    pub draw_list: Vec<DrawCommand>,
    /// Balls still alive after this frame
    pub live_count: usize,
    /// Arena indices eaten by the evil circle this frame
    pub eaten: Vec<usize>,
    /// Ball-vs-ball contacts found this frame
    pub contacts: usize,
}

impl FrameReport {
    /// True if ball `index` was drawn this frame
    pub fn draws_ball(&self, index: usize) -> bool {
        self.draw_list.iter().any(|c| c.ball_index == Some(index))
    }
}

/// Advance the world by one frame
pub fn tick(world: &mut World) -> FrameReport {
    world.frame += 1;

    let mut draw_list = Vec::with_capacity(world.balls.len() + 1);
    let mut contacts = 0;

    for i in 0..world.balls.len() {
        if !world.balls[i].is_alive() {
            continue;
        }
        draw_list.push(DrawCommand::for_entity(
            Entity::Ball(&world.balls[i]),
            Some(i),
        ));
        integrate_ball(&mut world.balls[i], &world.surface);
        contacts += recolor_contacts(&mut world.balls, i, &mut world.rng);
    }

    let mut eaten = Vec::new();
    if world.evil.is_alive() {
        draw_list.push(DrawCommand::for_entity(Entity::EvilCircle(&world.evil), None));
        clamp_evil_circle(&mut world.evil, &world.surface);
        eaten = consume_contacts(&world.evil, &mut world.balls, &mut world.live_count);
    }

    for idx in &eaten {
        log::debug!(
            "Frame {}: ball {} eaten, {} left",
            world.frame,
            idx,
            world.live_count
        );
    }
    if !eaten.is_empty() && world.is_cleared() {
        log::info!("All balls eaten after {} frames", world.frame);
    }

    FrameReport {
        frame: world.frame,
        overlay_alpha: world.trail_alpha,
        draw_list,
        live_count: world.live_count,
        eaten,
        contacts,
    }
}
