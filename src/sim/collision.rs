//! Pairwise collision detection
//!
//! Full O(n²) scan every frame, no broad phase. Fine for a few dozen balls.
//! Effects are side effects only: balls that touch share a fresh color, balls
//! the evil circle touches die.

use glam::Vec2;
use rand::Rng;

use super::color::Rgb;
use super::entity::{Ball, EvilCircle};

/// True when two circles overlap (strictly closer than the sum of radii)
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    a.distance(b) < ra + rb
}

/// Recolor every live ball touching ball `i`
///
/// Each contact draws one random color and paints both balls with it.
/// Returns the number of contacts found. Does nothing if `i` is dead.
pub fn recolor_contacts<R: Rng + ?Sized>(balls: &mut [Ball], i: usize, rng: &mut R) -> usize {
    if !balls.get(i).is_some_and(Ball::is_alive) {
        return 0;
    }

    let mut contacts = 0;
    for j in 0..balls.len() {
        if j == i || !balls[j].is_alive() {
            continue;
        }

        let (a, b) = (&balls[i], &balls[j]);
        if circles_overlap(a.body.pos, a.radius, b.body.pos, b.radius) {
            let color = Rgb::random(rng);
            balls[i].color = color;
            balls[j].color = color;
            contacts += 1;
        }
    }
    contacts
}

/// Kill every live ball the evil circle touches
///
/// Decrements `live_count` once per kill and returns the indices killed, in
/// ascending order.
pub fn consume_contacts(evil: &EvilCircle, balls: &mut [Ball], live_count: &mut usize) -> Vec<usize> {
    let mut eaten = Vec::new();
    if !evil.is_alive() {
        return eaten;
    }

    for (idx, ball) in balls.iter_mut().enumerate() {
        if !ball.is_alive() {
            continue;
        }
        if circles_overlap(evil.body.pos, evil.radius, ball.body.pos, ball.radius) {
            ball.body.alive = false;
            *live_count = live_count.saturating_sub(1);
            eaten.push(idx);
        }
    }
    eaten
}
