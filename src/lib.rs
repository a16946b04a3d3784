//! A grid of particles that is drawn towards a pointer stroke while it is
//! fresh and relaxes back to its home positions afterwards. Finished strokes
//! are run through a tiny letter classifier.

pub mod config;
pub mod error;
pub mod field;
pub mod letter;
pub mod particle;
pub mod path;
pub mod sketch;

pub use config::FieldConfig;
pub use error::{Error, Result};
pub use field::{Canvas, ParticleField};
pub use letter::{classify, Letter};
pub use particle::Particle;
pub use path::PathTracker;
pub use sketch::{PointerSample, Sketch};
