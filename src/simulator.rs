use std::time::Instant;

use glam::Vec2;
use rand::Rng;

use crate::{
    consts::{ARENA_HALF_EXTENT, LAUNCH_SCALE},
    properties::Body,
};

/// A body picked up by the pointer and the point it is being pulled towards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Selection {
    pub(crate) body: usize,
    pub(crate) drag_end: Vec2,
}

/// All bodies of the arena plus the slingshot state.
/// Bodies do not interact with each other.
#[derive(Clone, Debug)]
pub struct Simulation {
    pub(crate) bodies: Vec<Body>,
    pub(crate) selection: Option<Selection>,
    pub(crate) launch_scale: f32,
}

impl Simulation {
    pub fn builder() -> SimulationBuilder {
        SimulationBuilder::default()
    }

    /// Advances every body by `dt` seconds in insertion order.
    pub fn step(&mut self, dt: f32) {
        for body in self.bodies.iter_mut() {
            body.integrate(dt);
        }
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn launch_scale(&self) -> f32 {
        self.launch_scale
    }

    /// Index of the body held by the pointer
    pub fn selected(&self) -> Option<usize> {
        self.selection.map(|s| s.body)
    }

    /// Line from the held body to the pointer, only while a drag is active.
    pub fn drag_line(&self) -> Option<(Vec2, Vec2)> {
        let selection = self.selection?;
        let body = self.bodies.get(selection.body)?;
        Some((body.position, selection.drag_end))
    }
}

/// Measures the time between frames.
#[derive(Debug, Default)]
pub struct FrameClock {
    last_frame: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous call. The first call returns `0.0`.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = match self.last_frame {
            Some(last) => now.duration_since(last).as_secs_f32(),
            None => 0.0,
        };
        self.last_frame = Some(now);
        dt
    }
}

/// Builder for `Simulation`
pub struct SimulationBuilder {
    bodies: Vec<Body>,
    launch_scale: f32,
}

impl SimulationBuilder {
    /// Get a Instance of `SimulationBuilder` with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Multiplier from drag vector to launch velocity.
    /// `1.0` -> pulling by the whole arena width launches at 2 units per second
    pub fn launch_scale(mut self, launch_scale: f32) -> Self {
        self.launch_scale = launch_scale;
        self
    }

    /// Adds a single body. Bodies are updated and drawn in the order they are added.
    pub fn body(mut self, body: Body) -> Self {
        self.bodies.push(body);
        self
    }

    pub fn bodies(mut self, bodies: impl IntoIterator<Item = Body>) -> Self {
        self.bodies.extend(bodies);
        self
    }

    /// Adds `count` bodies with random size, color, position and velocity.
    /// Every body starts fully inside the arena.
    pub fn random_bodies<R: Rng>(mut self, rng: &mut R, count: usize) -> Self {
        for _ in 0..count {
            let radius = rng.gen_range(0.05..=0.15);
            let limit = ARENA_HALF_EXTENT - radius;
            let position = Vec2::new(rng.gen_range(-limit..limit), rng.gen_range(-limit..limit));
            let velocity = Vec2::new(rng.gen_range(-1.0..=1.0), rng.gen_range(-1.0..=1.0));
            let color = [
                (rng.gen_range(10..=100) as f32) / 100.0,
                (rng.gen_range(10..=100) as f32) / 100.0,
                (rng.gen_range(10..=100) as f32) / 100.0,
            ];

            self.bodies.push(Body::new(position, velocity, radius).with_color(color));
        }
        self
    }

    /// Constructs a instance of `Simulation`
    pub fn build(self) -> Simulation {
        Simulation {
            bodies: self.bodies,
            selection: None,
            launch_scale: self.launch_scale,
        }
    }
}

impl Default for SimulationBuilder {
    /// Get a Instance of `SimulationBuilder` with default values
    fn default() -> Self {
        Self {
            bodies: vec![],
            launch_scale: LAUNCH_SCALE,
        }
    }
}

#[cfg(test)]
mod test {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_bodies_move_independently() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut simulation = SimulationBuilder::new().random_bodies(&mut rng, 8).build();
        let mut alone: Vec<Simulation> = simulation
            .bodies()
            .iter()
            .map(|b| SimulationBuilder::new().body(b.clone()).build())
            .collect();

        for _ in 0..1000 {
            simulation.step(DT);
            for single in alone.iter_mut() {
                single.step(DT);
            }
        }

        for (body, single) in simulation.bodies().iter().zip(alone.iter()) {
            assert_eq!(body, &single.bodies()[0]);
        }
    }

    #[test]
    fn test_random_bodies_fit_arena() {
        let mut rng = StdRng::seed_from_u64(3);
        let simulation = SimulationBuilder::new().random_bodies(&mut rng, 100).build();

        assert_eq!(simulation.bodies().len(), 100);
        for body in simulation.bodies() {
            assert!((0.05..=0.15).contains(&body.radius));
            assert!(body.position.x.abs() + body.radius <= ARENA_HALF_EXTENT);
            assert!(body.position.y.abs() + body.radius <= ARENA_HALF_EXTENT);
            assert!(body.color.iter().all(|c| (0.0..=1.0).contains(c)));
        }
    }

    #[test]
    fn test_builder_keeps_order() {
        let first = Body::new(Vec2::new(-0.5, 0.0), Vec2::ZERO, 0.1);
        let second = Body::new(Vec2::new(0.5, 0.0), Vec2::ZERO, 0.2);
        let simulation = Simulation::builder()
            .body(first.clone())
            .bodies([second.clone()])
            .launch_scale(2.5)
            .build();

        assert_eq!(simulation.bodies(), &[first, second]);
        assert_eq!(simulation.launch_scale(), 2.5);
        assert_eq!(simulation.selected(), None);
        assert_eq!(simulation.drag_line(), None);
    }

    #[test]
    fn test_zero_step_keeps_bodies() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut simulation = SimulationBuilder::new().random_bodies(&mut rng, 5).build();
        let before = simulation.bodies().to_vec();

        simulation.step(0.0);

        assert_eq!(simulation.bodies(), &before[..]);
    }

    #[test]
    fn test_first_frame_has_no_delta() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(), 0.0);
        assert!(clock.tick() >= 0.0);
    }
}
