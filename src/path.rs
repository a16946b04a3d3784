use std::mem;
use std::time::Duration;

use cgmath::Vector2;

/// Recent pointer positions, oldest first. Bounded in length and dropped
/// wholesale once the pointer has been idle long enough.
#[derive(Clone, Debug)]
pub struct PathTracker {
    points: Vec<Vector2<f32>>,
    max_len: usize,
    last_activity_time: Duration,
}

impl PathTracker {
    pub fn new(max_len: usize) -> Self {
        Self {
            points: Vec::with_capacity(max_len),
            max_len,
            last_activity_time: Duration::ZERO,
        }
    }

    pub fn current_path(&self) -> &[Vector2<f32>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last_activity_time(&self) -> Duration {
        self.last_activity_time
    }

    pub fn record_if_active(&mut self, pointer_active: bool, position: Vector2<f32>, now: Duration) {
        if pointer_active {
            self.points.push(position);
            self.last_activity_time = now;
        }

        if self.points.len() > self.max_len {
            let excess = self.points.len() - self.max_len;
            self.points.drain(..excess);
        }
    }

    /// Hand over the finished path if the pointer has been idle for longer
    /// than `idle_threshold`. Yields at most once per path.
    pub fn take_if_idle(&mut self, now: Duration, idle_threshold: Duration) -> Option<Vec<Vector2<f32>>> {
        if self.points.is_empty() || now.saturating_sub(self.last_activity_time) <= idle_threshold {
            return None;
        }
        Some(mem::take(&mut self.points))
    }

    /// Clear the path once idle. Returns true when a path just completed.
    pub fn expire_if_idle(&mut self, now: Duration, idle_threshold: Duration) -> bool {
        self.take_if_idle(now, idle_threshold).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::vec2;

    const IDLE: Duration = Duration::from_millis(1000);

    #[test]
    fn test_inactive_pointer_records_nothing() {
        let mut tracker = PathTracker::new(50);
        tracker.record_if_active(false, vec2(1.0, 2.0), Duration::from_millis(30));
        assert!(tracker.is_empty());
        assert_eq!(tracker.last_activity_time(), Duration::ZERO);
    }

    #[test]
    fn test_fifo_trim() {
        let mut tracker = PathTracker::new(50);
        for i in 0..60 {
            tracker.record_if_active(true, vec2(i as f32, 0.0), Duration::from_millis(i));
        }

        let path = tracker.current_path();
        assert_eq!(path.len(), 50);
        assert_eq!(path[0], vec2(10.0, 0.0));
        assert_eq!(path[49], vec2(59.0, 0.0));
        assert!(path.windows(2).all(|w| w[0].x < w[1].x));
        assert_eq!(tracker.last_activity_time(), Duration::from_millis(59));
    }

    #[test]
    fn test_idle_boundary_is_exclusive() {
        let t0 = Duration::from_millis(5000);
        let mut tracker = PathTracker::new(50);
        tracker.record_if_active(true, vec2(3.0, 4.0), t0);

        assert!(!tracker.expire_if_idle(t0 + IDLE, IDLE));
        assert_eq!(tracker.len(), 1);

        assert!(tracker.expire_if_idle(t0 + IDLE + Duration::from_millis(1), IDLE));
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_expiry_fires_once() {
        let mut tracker = PathTracker::new(50);
        tracker.record_if_active(true, vec2(0.0, 0.0), Duration::ZERO);
        tracker.record_if_active(true, vec2(1.0, 0.0), Duration::from_millis(16));

        let later = Duration::from_secs(3);
        let completed = tracker.take_if_idle(later, IDLE).unwrap();
        assert_eq!(completed, vec![vec2(0.0, 0.0), vec2(1.0, 0.0)]);

        assert!(tracker.take_if_idle(later, IDLE).is_none());
        assert!(!tracker.expire_if_idle(later + IDLE, IDLE));
    }

    #[test]
    fn test_single_point_capacity() {
        let mut tracker = PathTracker::new(1);
        tracker.record_if_active(true, vec2(1.0, 1.0), Duration::from_millis(1));
        tracker.record_if_active(true, vec2(2.0, 2.0), Duration::from_millis(2));
        assert_eq!(tracker.current_path(), &[vec2(2.0, 2.0)]);
    }

    #[test]
    fn test_empty_path_never_expires() {
        let mut tracker = PathTracker::new(50);
        assert!(!tracker.expire_if_idle(Duration::from_secs(100), IDLE));
    }
}
