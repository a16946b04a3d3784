use std::time::Duration;

use cgmath::prelude::*;
use cgmath::Vector2;

use crate::config::FieldConfig;
use crate::field::Canvas;

/// Unit vector pointing from `from` towards `to`, or zero when the two
/// points coincide.
pub fn unit_towards(from: Vector2<f32>, to: Vector2<f32>) -> Vector2<f32> {
    let offset = to - from;
    let length = offset.magnitude();
    if length > 0.0 {
        offset / length
    } else {
        Vector2::zero()
    }
}

/// One dot of the grid. It is pulled towards a nearby path while one is
/// being drawn and drifts back to `home` once left alone.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    home: Vector2<f32>,
    position: Vector2<f32>,
    velocity: Vector2<f32>,
    acceleration: Vector2<f32>,
    seeking_path: bool,
    last_seek_time: Duration,
}

impl Particle {
    pub fn new(home: Vector2<f32>) -> Self {
        Self {
            home,
            position: home,
            velocity: Vector2::zero(),
            acceleration: Vector2::zero(),
            seeking_path: false,
            last_seek_time: Duration::ZERO,
        }
    }

    pub fn home(&self) -> Vector2<f32> {
        self.home
    }

    pub fn position(&self) -> Vector2<f32> {
        self.position
    }

    pub fn velocity(&self) -> Vector2<f32> {
        self.velocity
    }

    pub fn acceleration(&self) -> Vector2<f32> {
        self.acceleration
    }

    pub fn is_seeking_path(&self) -> bool {
        self.seeking_path
    }

    pub fn last_seek_time(&self) -> Duration {
        self.last_seek_time
    }

    /// Accelerate towards the nearest path point if it lies within the
    /// interaction radius. Linear scan over the whole path; on equal
    /// distances the earliest point wins.
    pub fn seek_path(&mut self, path: &[Vector2<f32>], now: Duration, config: &FieldConfig) {
        let mut nearest: Option<(Vector2<f32>, f32)> = None;
        for &point in path {
            let distance = point.distance(self.position);
            match nearest {
                Some((_, best)) if best <= distance => {}
                _ => nearest = Some((point, distance)),
            }
        }

        match nearest {
            Some((point, distance)) if distance < config.interaction_radius => {
                self.acceleration +=
                    unit_towards(self.position, point) * config.attraction_force;
                self.seeking_path = true;
                self.last_seek_time = now;
            }
            _ => self.seeking_path = false,
        }
    }

    /// Accelerate towards home once the particle has been free of the path
    /// for longer than the idle threshold.
    pub fn seek_home(&mut self, now: Duration, config: &FieldConfig) {
        if self.seeking_path || now.saturating_sub(self.last_seek_time) <= config.idle_threshold()
        {
            return;
        }
        self.acceleration += unit_towards(self.position, self.home) * config.return_force;
    }

    /// Velocity picks up the frame's acceleration and is damped before it
    /// moves the particle. Acceleration only lives for one frame.
    pub fn integrate(&mut self, damping: f32) {
        self.velocity += self.acceleration;
        self.velocity *= damping;
        self.position += self.velocity;
        self.acceleration = Vector2::zero();
    }

    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C, config: &FieldConfig) {
        canvas.fill_circle(self.position, config.particle_size, config.particle_color);
    }
}
