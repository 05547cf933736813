//! Mouse slingshot.
//!
//! Pressing on a body picks it up, dragging pulls a line away from it and
//! releasing launches the body in the opposite direction of the pull, with a
//! speed proportional to the pull length.

use glam::Vec2;

use crate::{
    consts::{ARENA_HALF_EXTENT, MIN_LAUNCH_MAGNITUDE},
    simulator::{Selection, Simulation},
};

/// Pointer events in arena coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Press(Vec2),
    Drag(Vec2),
    Release(Vec2),
}

/// Size of the drawing surface in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Maps a pixel position (origin top left) into the arena, flipping y.
    pub fn to_arena(&self, device: Vec2) -> Vec2 {
        Vec2::new(
            (device.x / self.width * 2.0 - 1.0) * ARENA_HALF_EXTENT,
            (1.0 - device.y / self.height * 2.0) * ARENA_HALF_EXTENT,
        )
    }
}

/// Velocity for a slingshot pulled from `start` to `end`.
/// Returns `None` if the pull is too short to have a direction.
pub fn launch_velocity(start: Vec2, end: Vec2, launch_scale: f32) -> Option<Vec2> {
    let delta = end - start;
    if delta.length() > MIN_LAUNCH_MAGNITUDE {
        Some(-delta * launch_scale)
    } else {
        None
    }
}

impl Simulation {
    /// First body in insertion order that contains `point`.
    pub fn body_at(&self, point: Vec2) -> Option<usize> {
        self.bodies.iter().position(|body| body.contains(point))
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Press(point) => self.press(point),
            InputEvent::Drag(point) => self.drag(point),
            InputEvent::Release(point) => self.release(point),
        }
    }

    fn press(&mut self, point: Vec2) {
        self.selection = self.body_at(point).map(|body| Selection {
            body,
            drag_end: point,
        });

        if let Some(selection) = self.selection {
            log::trace!("Picked up body {}", selection.body);
        }
    }

    fn drag(&mut self, point: Vec2) {
        if let Some(selection) = self.selection.as_mut() {
            selection.drag_end = point;
        }
    }

    fn release(&mut self, point: Vec2) {
        let Some(selection) = self.selection.take() else {
            return;
        };

        let Some(body) = self.bodies.get_mut(selection.body) else {
            return;
        };

        match launch_velocity(body.position, point, self.launch_scale) {
            Some(velocity) => {
                body.velocity = velocity;
                log::debug!("Launched body {} with velocity {}", selection.body, velocity);
            }
            None => log::trace!("Released body {} without pulling", selection.body),
        }
    }
}
