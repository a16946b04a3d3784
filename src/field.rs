use std::time::Duration;

use cgmath::{vec2, Vector2};
use rayon::prelude::*;
use tracing::debug;

use crate::config::FieldConfig;
use crate::particle::Particle;

/// Drawing primitives supplied by the host window.
pub trait Canvas {
    fn clear(&mut self, color: [u8; 3]);
    fn fill_circle(&mut self, center: Vector2<f32>, diameter: f32, color: [u8; 3]);
}

/// The full grid of particles covering the canvas.
pub struct ParticleField {
    config: FieldConfig,
    width: f32,
    height: f32,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// An empty field; call [`ParticleField::regenerate`] once the canvas
    /// size is known.
    pub fn new(config: FieldConfig) -> Self {
        Self {
            config,
            width: 0.0,
            height: 0.0,
            particles: vec![],
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Throw away every particle and lay out a fresh grid with one home at
    /// each multiple of `grid_size` inside `[0, width) x [0, height)`.
    pub fn regenerate(&mut self, width: f32, height: f32) {
        let grid = self.config.grid_size;
        let steps = move |limit: f32| {
            (0u32..)
                .map(move |i| i as f32 * grid)
                .take_while(move |&v| v < limit)
        };

        self.particles = steps(width)
            .flat_map(|x| steps(height).map(move |y| Particle::new(vec2(x, y))))
            .collect();
        self.width = width;
        self.height = height;

        debug!(width, height, particles = self.particles.len(), "regenerated particle grid");
    }

    /// Physics for one frame: seek the path, seek home, integrate. Each
    /// particle only reads the shared path, so they are updated in
    /// parallel.
    ///
    /// Every particle scans the whole path, which costs
    /// particles x path length per frame.
    pub fn advance(&mut self, path: &[Vector2<f32>], now: Duration) {
        let config = self.config;
        self.particles.par_iter_mut().for_each(|particle| {
            particle.seek_path(path, now, &config);
            particle.seek_home(now, &config);
            particle.integrate(config.damping);
        });
    }

    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        for particle in &self.particles {
            particle.render(canvas, &self.config);
        }
    }

    /// Advance then draw every particle.
    pub fn step<C: Canvas + ?Sized>(&mut self, path: &[Vector2<f32>], now: Duration, canvas: &mut C) {
        self.advance(path, now);
        self.render(canvas);
    }
}
