use glam::Vec2;

use crate::consts::{
    ARENA_HALF_EXTENT, BODY_COLOR, CIRCLE_SEGMENTS, DAMPING, GRAVITY, VELOCITY_THRESHOLD,
};

/// When gravity is added to a body's vertical velocity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GravityMode {
    /// Only while the lower edge is above the floor, so a resting body stays at rest
    #[default]
    Airborne,
    /// Every step, the floor bounce cancels it again
    Always,
}

/// A circular body inside the arena.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub color: [f32; 3],
    pub gravity: f32,
    pub damping: f32,
    pub velocity_threshold: f32,
    pub gravity_mode: GravityMode,
    /// Number of segments used to approximate the circle
    pub segments: usize,
}

impl Body {
    /// `radius` has to be smaller than the arena half extent for the body to fit.
    pub fn new(position: Vec2, velocity: Vec2, radius: f32) -> Self {
        debug_assert!(radius > 0.0 && radius < ARENA_HALF_EXTENT);
        Self {
            position,
            velocity,
            radius,
            color: BODY_COLOR,
            gravity: GRAVITY,
            damping: DAMPING,
            velocity_threshold: VELOCITY_THRESHOLD,
            gravity_mode: GravityMode::default(),
            segments: CIRCLE_SEGMENTS,
        }
    }

    pub fn with_color(mut self, color: [f32; 3]) -> Self {
        self.color = color;
        self
    }

    /// Acceleration along y, negative pulls down
    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    /// Velocity multiplier on wall contact, should be in `(0, 1)`
    pub fn with_damping(mut self, damping: f32) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_velocity_threshold(mut self, velocity_threshold: f32) -> Self {
        self.velocity_threshold = velocity_threshold;
        self
    }

    pub fn with_gravity_mode(mut self, gravity_mode: GravityMode) -> Self {
        self.gravity_mode = gravity_mode;
        self
    }

    pub fn with_segments(mut self, segments: usize) -> Self {
        self.segments = segments;
        self
    }

    /// Advances the body by `dt` seconds (explicit euler) and resolves wall contacts.
    /// A large `dt` can carry the body far past a wall; it is clamped back inside but
    /// the bounce happens late.
    pub fn integrate(&mut self, dt: f32) {
        if self.gravity_mode == GravityMode::Always || self.is_airborne() {
            self.velocity.y += self.gravity * dt;
        }

        self.position += self.velocity * dt;

        self.resolve_wall_collisions();
    }

    /// Lower edge strictly above the floor.
    pub fn is_airborne(&self) -> bool {
        // Same expression as the floor clamp so a resting body compares equal.
        self.position.y > -ARENA_HALF_EXTENT + self.radius
    }

    /// Strictly inside the circle.
    pub fn contains(&self, point: Vec2) -> bool {
        self.position.distance_squared(point) < self.radius * self.radius
    }

    /// Segment from the center to the rim in the direction of travel.
    /// Points along +x while the body is at rest.
    pub fn heading_indicator(&self) -> (Vec2, Vec2) {
        let direction = self.velocity.normalize_or(Vec2::X);
        (self.position, self.position + direction * self.radius)
    }

    fn resolve_wall_collisions(&mut self) {
        let min = -ARENA_HALF_EXTENT + self.radius;
        let max = ARENA_HALF_EXTENT - self.radius;

        // Left or right wall
        if self.position.x >= max || self.position.x <= min {
            self.velocity.x *= -self.damping;
            self.position.x = self.position.x.clamp(min, max);
            self.snap_x();
        }

        if self.position.y <= min {
            // Floor, the horizontal part decays without reflecting
            self.velocity.y *= -self.damping;
            self.position.y = min;
            self.velocity.x *= self.damping;
            self.snap_y();
            self.snap_x();
        } else if self.position.y >= max {
            // Ceiling
            self.velocity.y *= -self.damping;
            self.position.y = max;
            self.snap_y();
        }
    }

    fn snap_x(&mut self) {
        if self.velocity.x.abs() < self.velocity_threshold {
            self.velocity.x = 0.0;
        }
    }

    fn snap_y(&mut self) {
        if self.velocity.y.abs() < self.velocity_threshold {
            self.velocity.y = 0.0;
        }
    }
}
