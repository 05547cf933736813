//! Balls bouncing in a square arena under gravity, launched with a mouse slingshot.
//!
//! # Example
//! ```no_run
//!let simulation = gravisim::simulator::SimulationBuilder::new()
//!    .random_bodies(&mut rand::thread_rng(), 5)
//!    .build();
//!let renderer = gravisim::renderer::Renderer::new(simulation);
//!renderer.create_window().unwrap();
//! ```

pub mod error;
pub mod input;
pub mod properties;
pub mod renderer;
pub mod simulator;

/// Hard-coded tuning values.
pub mod consts {
    pub const WINDOW_TITLE: &str = "Gravity Simulation";
    pub const WINDOW_WIDTH: u32 = 800;
    pub const WINDOW_HEIGHT: u32 = 800;

    /// Arena is the square `[-ARENA_HALF_EXTENT, ARENA_HALF_EXTENT]` on both axes
    pub const ARENA_HALF_EXTENT: f32 = 1.0;

    pub const GRAVITY: f32 = -9.81;
    /// Velocity multiplier on wall contact
    pub const DAMPING: f32 = 0.8;
    /// Velocity components below this are snapped to zero after a bounce
    pub const VELOCITY_THRESHOLD: f32 = 0.01;

    pub const LAUNCH_SCALE: f32 = 1.0;
    /// Shorter drags do not launch
    pub const MIN_LAUNCH_MAGNITUDE: f32 = 0.0001;

    pub const DEFAULT_RADIUS: f32 = 0.15;
    pub const CIRCLE_SEGMENTS: usize = 25;
    pub const BODY_COLOR: [f32; 3] = [1.0, 1.0, 0.0];

    pub const BACKGROUND_COLOR: [f32; 3] = [0.2, 0.3, 0.3];
    pub const HEADING_COLOR: [f32; 3] = [0.0, 0.0, 1.0];
    pub const DRAG_LINE_COLOR: [f32; 3] = [1.0, 0.0, 0.0];
    pub const LINE_WIDTH: f32 = 2.0;

    /// Random bodies spawned next to the fixed one at startup
    pub const RANDOM_BODY_COUNT: usize = 4;
}
