//! Directional keyboard control of the evil circle

use glam::Vec2;

use super::entity::EvilCircle;

/// One of the four movement keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Map a DOM `KeyboardEvent.key` value to a direction
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "a" | "A" | "ArrowLeft" => Some(Direction::Left),
            "d" | "D" | "ArrowRight" => Some(Direction::Right),
            "w" | "W" | "ArrowUp" => Some(Direction::Up),
            "s" | "S" | "ArrowDown" => Some(Direction::Down),
            _ => None,
        }
    }

    /// Unit offset in screen coordinates (y grows downward)
    pub fn unit(&self) -> Vec2 {
        match self {
            Direction::Left => Vec2::NEG_X,
            Direction::Right => Vec2::X,
            Direction::Up => Vec2::NEG_Y,
            Direction::Down => Vec2::Y,
        }
    }
}

/// Move the evil circle one step. No bounds check; the frame clamp handles that.
pub fn step_evil_circle(evil: &mut EvilCircle, dir: Direction) {
    evil.body.pos += dir.unit() * evil.step();
}
