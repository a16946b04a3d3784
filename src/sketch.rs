use std::time::Duration;

use cgmath::Vector2;
use tracing::{debug, info};

use crate::config::FieldConfig;
use crate::field::{Canvas, ParticleField};
use crate::letter::{classify_with_min, Letter};
use crate::path::PathTracker;

/// Pointer state sampled once per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub engaged: bool,
    pub position: Vector2<f32>,
}

impl PointerSample {
    pub fn idle() -> Self {
        Self {
            engaged: false,
            position: Vector2::new(0.0, 0.0),
        }
    }

    pub fn pressed(position: Vector2<f32>) -> Self {
        Self {
            engaged: true,
            position,
        }
    }
}

/// The whole animation: particle grid, pointer trail and letter detection,
/// advanced one frame at a time by the host.
pub struct Sketch {
    config: FieldConfig,
    field: ParticleField,
    path: PathTracker,
    canvas_size: Option<(f32, f32)>,
    last_letter: Option<Letter>,
}

impl Sketch {
    pub fn new(config: FieldConfig) -> Self {
        Self {
            config,
            field: ParticleField::new(config),
            path: PathTracker::new(config.max_path_len),
            canvas_size: None,
            last_letter: None,
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn path(&self) -> &PathTracker {
        &self.path
    }

    pub fn last_letter(&self) -> Option<Letter> {
        self.last_letter
    }

    /// Rebuild the grid if the canvas size changed. Returns whether it did.
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        if self.canvas_size == Some((width, height)) {
            return false;
        }
        self.field.regenerate(width, height);
        self.canvas_size = Some((width, height));
        true
    }

    /// Run one frame and draw it. Returns the letter recognised if the
    /// path completed during this frame.
    pub fn tick<C: Canvas + ?Sized>(
        &mut self,
        pointer: PointerSample,
        now: Duration,
        canvas: &mut C,
    ) -> Option<Letter> {
        canvas.clear(self.config.background_color);

        self.path.record_if_active(pointer.engaged, pointer.position, now);
        self.field.step(self.path.current_path(), now, canvas);

        let completed = self.path.take_if_idle(now, self.config.idle_threshold())?;
        debug!(points = completed.len(), "path completed");

        let letter = classify_with_min(&completed, self.config.min_classify_len);
        match letter {
            Some(letter) => {
                info!(%letter, "detected letter");
                self.last_letter = Some(letter);
            }
            None => debug!("no letter detected"),
        }
        letter
    }
}
