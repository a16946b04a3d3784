//! Toy letter recognition for a finished path.
//!
//! Only looks at the vertical profile of the stroke: interior points that
//! sit strictly above both neighbours (smaller y, since screen y grows
//! downwards) are counted as peaks. Four or more peaks read as an "M", a
//! single peak at the very top of the stroke reads as an "A".

use std::fmt;

use cgmath::Vector2;

/// Paths with fewer points than this are never classified.
pub const MIN_PATH_POINTS: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Letter {
    M,
    A,
}

impl Letter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Letter::M => "M",
            Letter::A => "A",
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn peaks(path: &[Vector2<f32>]) -> impl Iterator<Item = &Vector2<f32>> {
    path.windows(3)
        .filter(|w| w[1].y < w[0].y && w[1].y < w[2].y)
        .map(|w| &w[1])
}

pub fn is_m(path: &[Vector2<f32>], min_points: usize) -> bool {
    if path.len() < min_points {
        return false;
    }
    peaks(path).count() >= 4
}

/// Exactly one peak reaching the topmost y of the path. The comparison is
/// exact, so two apexes that differ by a rounding error are not a tie.
pub fn is_a(path: &[Vector2<f32>], min_points: usize) -> bool {
    if path.len() < min_points {
        return false;
    }
    let min_y = path.iter().map(|p| p.y).fold(f32::INFINITY, f32::min);
    peaks(path).filter(|p| p.y == min_y).count() == 1
}

/// Best guess for `path`, trying "M" before "A".
pub fn classify_with_min(path: &[Vector2<f32>], min_points: usize) -> Option<Letter> {
    if is_m(path, min_points) {
        Some(Letter::M)
    } else if is_a(path, min_points) {
        Some(Letter::A)
    } else {
        None
    }
}

pub fn classify(path: &[Vector2<f32>]) -> Option<Letter> {
    classify_with_min(path, MIN_PATH_POINTS)
}
