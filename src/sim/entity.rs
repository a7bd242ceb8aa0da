//! Entity model: shared body record plus the two variants

use glam::Vec2;

use super::color::Rgb;

/// Position, velocity and liveness shared by every entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Dead bodies are skipped by motion, collision and drawing
    pub alive: bool,
}

impl Body {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            alive: true,
        }
    }
}

/// An autonomous ball: bounces off walls, recolors on contact
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub body: Body,
    pub radius: f32,
    pub color: Rgb,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, color: Rgb, radius: f32) -> Self {
        Self {
            body: Body::new(pos, vel),
            radius,
            color,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.body.alive
    }
}

/// The user-steered circle that eats balls
#[derive(Debug, Clone, PartialEq)]
pub struct EvilCircle {
    /// `vel` holds the step size on each axis; it is never integrated
    pub body: Body,
    pub radius: f32,
    pub color: Rgb,
}

impl EvilCircle {
    pub fn new(pos: Vec2, step: f32, radius: f32, color: Rgb) -> Self {
        Self {
            body: Body::new(pos, Vec2::splat(step)),
            radius,
            color,
        }
    }

    /// Distance moved per directional key press along x and y
    #[inline]
    pub fn step(&self) -> Vec2 {
        self.body.vel
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.body.alive
    }
}

/// Borrowed view over either variant, for code that treats them uniformly
#[derive(Debug, Clone, Copy)]
pub enum Entity<'a> {
    Ball(&'a Ball),
    EvilCircle(&'a EvilCircle),
}

impl<'a> Entity<'a> {
    pub fn body(&self) -> &'a Body {
        match *self {
            Entity::Ball(b) => &b.body,
            Entity::EvilCircle(e) => &e.body,
        }
    }

    pub fn radius(&self) -> f32 {
        match *self {
            Entity::Ball(b) => b.radius,
            Entity::EvilCircle(e) => e.radius,
        }
    }

    pub fn color(&self) -> Rgb {
        match *self {
            Entity::Ball(b) => b.color,
            Entity::EvilCircle(e) => e.color,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.body().alive
    }
}

impl<'a> From<&'a Ball> for Entity<'a> {
    fn from(ball: &'a Ball) -> Self {
        Entity::Ball(ball)
    }
}

impl<'a> From<&'a EvilCircle> for Entity<'a> {
    fn from(evil: &'a EvilCircle) -> Self {
        Entity::EvilCircle(evil)
    }
}
