//! Run-to-completion event dispatch
//!
//! Frame callbacks and key presses arrive from independent host callbacks.
//! Both are queued as `Event`s and dispatched strictly in arrival order; each
//! event finishes before the next one starts, so nothing ever observes a
//! half-updated `World`.

use std::collections::VecDeque;

use super::input::{Direction, step_evil_circle};
use super::tick::{FrameReport, tick};
use super::world::World;

/// Work item for the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Host display refresh: advance one frame
    Frame,
    /// Directional key pressed: move the evil circle one step now
    Key(Direction),
}

/// Owns the world and the pending event queue
#[derive(Debug, Clone)]
pub struct Driver {
    world: World,
    queue: VecDeque<Event>,
}

impl Driver {
    pub fn new(world: World) -> Self {
        Self {
            world,
            queue: VecDeque::new(),
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn push(&mut self, event: Event) {
        self.queue.push_back(event);
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Drain the queue in FIFO order
    ///
    /// Returns the report of the last `Frame` event dispatched, if any.
    pub fn dispatch(&mut self) -> Option<FrameReport> {
        let mut last = None;
        while let Some(event) = self.queue.pop_front() {
            if let Some(report) = self.handle(event) {
                last = Some(report);
            }
        }
        last
    }

    /// Queue one event and dispatch everything pending
    pub fn submit(&mut self, event: Event) -> Option<FrameReport> {
        self.push(event);
        self.dispatch()
    }

    fn handle(&mut self, event: Event) -> Option<FrameReport> {
        match event {
            Event::Frame => Some(tick(&mut self.world)),
            Event::Key(dir) => {
                step_evil_circle(&mut self.world.evil, dir);
                log::trace!("Evil circle moved {:?} to {}", dir, self.world.evil.body.pos);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::color::Rgb;
    use crate::sim::entity::{Ball, EvilCircle};
    use crate::sim::motion::Surface;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn driver_with(balls: Vec<Ball>, evil_pos: Vec2) -> Driver {
        let evil = EvilCircle::new(evil_pos, 20.0, 10.0, Rgb::WHITE);
        Driver::new(World::from_parts(
            0,
            Surface::new(800.0, 600.0),
            balls,
            evil,
            0.25,
            Pcg32::seed_from_u64(0),
        ))
    }

    #[test]
    fn test_keys_apply_between_frames() {
        let mut driver = driver_with(Vec::new(), Vec2::new(400.0, 300.0));

        driver.push(Event::Key(Direction::Right));
        driver.push(Event::Key(Direction::Right));
        driver.push(Event::Key(Direction::Up));
        assert_eq!(driver.pending(), 3);
        assert!(driver.dispatch().is_none());
        assert_eq!(driver.pending(), 0);
        assert_eq!(driver.world().evil.body.pos, Vec2::new(440.0, 280.0));
        assert_eq!(driver.world().frame, 0);
    }

    #[test]
    fn test_events_run_in_order() {
        let mut driver = driver_with(Vec::new(), Vec2::new(400.0, 300.0));

        driver.push(Event::Frame);
        driver.push(Event::Key(Direction::Left));
        driver.push(Event::Frame);
        let report = driver.dispatch().expect("frame report");

        assert_eq!(report.frame, 2);
        // Second frame drew the circle after the key moved it
        assert_eq!(report.draw_list[0].pos, Vec2::new(380.0, 300.0));
    }

    #[test]
    fn test_steering_into_a_ball() {
        let ball = Ball::new(Vec2::new(430.0, 300.0), Vec2::ZERO, Rgb::BLACK, 10.0);
        let mut driver = driver_with(vec![ball], Vec2::new(400.0, 300.0));

        let report = driver.submit(Event::Frame).expect("frame report");
        assert!(report.eaten.is_empty());

        driver.submit(Event::Key(Direction::Right));
        let report = driver.submit(Event::Frame).expect("frame report");
        assert_eq!(report.eaten, vec![0]);
        assert_eq!(report.live_count, 0);
        assert!(driver.world().is_cleared());

        let report = driver.submit(Event::Frame).expect("frame report");
        assert!(!report.draws_ball(0));
    }

    #[test]
    fn test_key_past_edge_is_clamped_next_frame() {
        let mut driver = driver_with(Vec::new(), Vec2::new(15.0, 300.0));
        driver.submit(Event::Key(Direction::Left));
        assert_eq!(driver.world().evil.body.pos.x, -5.0);

        driver.submit(Event::Frame);
        assert_eq!(driver.world().evil.body.pos.x, 10.0);
    }
}
