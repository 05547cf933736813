use glam::Vec2;
use winit::{
    dpi::{PhysicalPosition, PhysicalSize},
    event::{ElementState, MouseButton},
};

use crate::input::{InputEvent, Viewport};

/// Turns winit's separate cursor and button events into slingshot events.
pub struct PointerState {
    viewport: Viewport,
    cursor: Vec2,
    held: bool,
}

impl PointerState {
    pub fn new(size: PhysicalSize<u32>) -> Self {
        Self {
            viewport: Viewport::new(size.width as f32, size.height as f32),
            cursor: Vec2::ZERO,
            held: false,
        }
    }

    pub fn resized(&mut self, size: PhysicalSize<u32>) {
        // A minimized window reports 0x0
        if size.width > 0 && size.height > 0 {
            self.viewport = Viewport::new(size.width as f32, size.height as f32);
        }
    }

    pub fn cursor_moved(&mut self, position: PhysicalPosition<f64>) -> Option<InputEvent> {
        self.cursor = Vec2::new(position.x as f32, position.y as f32);

        if self.held {
            return Some(InputEvent::Drag(self.arena_position()));
        }
        None
    }

    pub fn mouse_input(&mut self, state: ElementState, button: MouseButton) -> Option<InputEvent> {
        if button != MouseButton::Left {
            return None;
        }

        match state {
            ElementState::Pressed if !self.held => {
                self.held = true;
                Some(InputEvent::Press(self.arena_position()))
            }
            ElementState::Released if self.held => {
                self.held = false;
                Some(InputEvent::Release(self.arena_position()))
            }
            _ => None,
        }
    }

    pub fn arena_position(&self) -> Vec2 {
        self.viewport.to_arena(self.cursor)
    }
}
