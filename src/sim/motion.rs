//! Motion and boundary handling
//!
//! Balls bounce: the wall test runs on the pre-update position, then the ball
//! moves. The evil circle clamps: its centre is put back one radius inside the
//! wall it touched and its velocity is left alone.

use glam::Vec2;

use super::entity::{Ball, EvilCircle};

/// Drawable surface dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

impl Surface {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Advance a live ball by one frame (reflect-then-move)
pub fn integrate_ball(ball: &mut Ball, surface: &Surface) {
    if !ball.is_alive() {
        return;
    }

    let r = ball.radius;
    let body = &mut ball.body;

    if body.pos.x + r >= surface.width || body.pos.x - r <= 0.0 {
        body.vel.x = -body.vel.x;
    }
    if body.pos.y + r >= surface.height || body.pos.y - r <= 0.0 {
        body.vel.y = -body.vel.y;
    }

    body.pos += body.vel;
}

/// Pull the evil circle back inside the surface
///
/// Returns true if the position changed.
pub fn clamp_evil_circle(evil: &mut EvilCircle, surface: &Surface) -> bool {
    let before = evil.body.pos;
    let r = evil.radius;
    let pos = &mut evil.body.pos;

    if pos.x + r >= surface.width {
        pos.x = surface.width - r;
    }
    if pos.x - r <= 0.0 {
        pos.x = r;
    }
    if pos.y + r >= surface.height {
        pos.y = surface.height - r;
    }
    if pos.y - r <= 0.0 {
        pos.y = r;
    }

    *pos != before
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::color::Rgb;
    use proptest::prelude::*;

    const SURFACE: Surface = Surface {
        width: 640.0,
        height: 480.0,
    };

    fn ball_at(x: f32, y: f32, vx: f32, vy: f32, r: f32) -> Ball {
        Ball::new(Vec2::new(x, y), Vec2::new(vx, vy), Rgb::WHITE, r)
    }

    #[test]
    fn test_free_flight() {
        let mut ball = ball_at(100.0, 100.0, 3.0, -4.0, 10.0);
        integrate_ball(&mut ball, &SURFACE);
        assert_eq!(ball.body.pos, Vec2::new(103.0, 96.0));
        assert_eq!(ball.body.vel, Vec2::new(3.0, -4.0));
    }

    #[test]
    fn test_reflect_then_move_at_right_wall() {
        let mut ball = ball_at(SURFACE.width - 3.0, 240.0, 5.0, 0.0, 10.0);
        integrate_ball(&mut ball, &SURFACE);
        assert_eq!(ball.body.vel.x, -5.0);
        assert_eq!(ball.body.pos.x, SURFACE.width - 3.0 - 5.0);
    }

    #[test]
    fn test_reflect_at_top_wall() {
        let mut ball = ball_at(300.0, 10.0, 0.0, -2.0, 10.0);
        integrate_ball(&mut ball, &SURFACE);
        assert_eq!(ball.body.vel.y, 2.0);
        assert_eq!(ball.body.pos.y, 12.0);
    }

    #[test]
    fn test_dead_ball_does_not_move() {
        let mut ball = ball_at(100.0, 100.0, 3.0, 3.0, 10.0);
        ball.body.alive = false;
        integrate_ball(&mut ball, &SURFACE);
        assert_eq!(ball.body.pos, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_clamp_right_and_bottom() {
        let mut evil = EvilCircle::new(Vec2::new(650.0, 495.0), 20.0, 10.0, Rgb::WHITE);
        assert!(clamp_evil_circle(&mut evil, &SURFACE));
        assert_eq!(evil.body.pos, Vec2::new(630.0, 470.0));
        // Velocity is a step size, not reflected
        assert_eq!(evil.step(), Vec2::splat(20.0));
    }

    #[test]
    fn test_clamp_left_and_top() {
        let mut evil = EvilCircle::new(Vec2::new(-15.0, 4.0), 20.0, 10.0, Rgb::WHITE);
        clamp_evil_circle(&mut evil, &SURFACE);
        assert_eq!(evil.body.pos, Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_clamp_is_idempotent() {
        let mut evil = EvilCircle::new(Vec2::new(700.0, -40.0), 20.0, 10.0, Rgb::WHITE);
        clamp_evil_circle(&mut evil, &SURFACE);
        let once = evil.body.pos;
        assert!(!clamp_evil_circle(&mut evil, &SURFACE));
        assert_eq!(evil.body.pos, once);
    }

    #[test]
    fn test_clamp_leaves_interior_alone() {
        let mut evil = EvilCircle::new(Vec2::new(320.0, 240.0), 20.0, 10.0, Rgb::WHITE);
        assert!(!clamp_evil_circle(&mut evil, &SURFACE));
    }

    proptest! {
        #[test]
        fn prop_ball_overshoot_is_bounded(
            width in 100.0f32..1000.0,
            height in 100.0f32..1000.0,
            r in 10u32..=20,
            fx in 0.0f32..=1.0,
            fy in 0.0f32..=1.0,
            vx in -7i32..=7,
            vy in -7i32..=7,
            steps in 1usize..400,
        ) {
            let surface = Surface::new(width, height);
            let r = r as f32;
            let x = r + fx * (width - 2.0 * r);
            let y = r + fy * (height - 2.0 * r);
            let mut ball = ball_at(x, y, vx as f32, vy as f32, r);

            for _ in 0..steps {
                integrate_ball(&mut ball, &surface);
                let p = ball.body.pos;
                prop_assert!(p.x >= -r && p.x <= width + r, "x escaped: {}", p.x);
                prop_assert!(p.y >= -r && p.y <= height + r, "y escaped: {}", p.y);
            }
        }

        #[test]
        fn prop_clamp_keeps_circle_inside(
            x in -500.0f32..1500.0,
            y in -500.0f32..1500.0,
        ) {
            let mut evil = EvilCircle::new(Vec2::new(x, y), 20.0, 10.0, Rgb::WHITE);
            clamp_evil_circle(&mut evil, &SURFACE);
            let p = evil.body.pos;
            prop_assert!(p.x >= 10.0 && p.x <= SURFACE.width - 10.0);
            prop_assert!(p.y >= 10.0 && p.y <= SURFACE.height - 10.0);
            prop_assert!(!clamp_evil_circle(&mut evil, &SURFACE));
        }
    }
}
