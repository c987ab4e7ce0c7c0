//! Shared utilities

use std::collections::VecDeque;
use std::time::Instant;

/// Affine map of `value` from `[from_min, from_max]` onto `[to_min, to_max]`.
///
/// Used both for pixel -> complex plane and iteration -> intensity.
/// `from_min == from_max` yields inf/NaN; callers must pass distinct endpoints.
#[inline]
pub fn map_range(value: f64, from_min: f64, from_max: f64, to_min: f64, to_max: f64) -> f64 {
    to_min + (to_max - to_min) / (from_max - from_min) * (value - from_min)
}

// ============================================================================
// FPS Counter
// ============================================================================

/// FPS counter with rolling average
pub struct FpsCounter {
    frame_times: VecDeque<f32>,
    last_frame: Instant,
    sample_count: usize,
}

impl FpsCounter {
    /// Create a new FPS counter with specified sample window
    pub fn new(sample_count: usize) -> Self {
        let sample_count = sample_count.max(1);
        Self {
            frame_times: VecDeque::with_capacity(sample_count),
            last_frame: Instant::now(),
            sample_count,
        }
    }

    /// Call once per frame. Returns (delta_time, current_fps, average_fps)
    pub fn tick(&mut self) -> (f32, f32, f32) {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.record(dt);

        let current_fps = if dt > 0.0 { 1.0 / dt } else { 0.0 };
        let avg_dt = self.avg_frame_time();
        let avg_fps = if avg_dt > 0.0 { 1.0 / avg_dt } else { 0.0 };

        (dt, current_fps, avg_fps)
    }

    fn record(&mut self, dt: f32) {
        self.frame_times.push_back(dt);
        if self.frame_times.len() > self.sample_count {
            self.frame_times.pop_front();
        }
    }

    fn avg_frame_time(&self) -> f32 {
        self.frame_times.iter().sum::<f32>() / self.frame_times.len().max(1) as f32
    }

    /// Average frame time in milliseconds
    pub fn avg_frame_time_ms(&self) -> f32 {
        self.avg_frame_time() * 1000.0
    }

    /// Min/max FPS over the sample window
    pub fn min_max_fps(&self) -> (f32, f32) {
        if self.frame_times.is_empty() {
            return (0.0, 0.0);
        }
        let min_dt = self.frame_times.iter().copied().fold(f32::INFINITY, f32::min);
        let max_dt = self.frame_times.iter().copied().fold(0.0, f32::max);
        let max_fps = if min_dt > 0.0 { 1.0 / min_dt } else { 0.0 };
        let min_fps = if max_dt > 0.0 { 1.0 / max_dt } else { 0.0 };
        (min_fps, max_fps)
    }

    /// Number of samples currently in the window
    pub fn frame_count(&self) -> usize {
        self.frame_times.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_range_endpoints() {
        assert_eq!(map_range(0.0, 0.0, 800.0, -2.5, 1.0), -2.5);
        assert!((map_range(800.0, 0.0, 800.0, -2.5, 1.0) - 1.0).abs() < 1e-12);
        assert_eq!(map_range(1.0, 1.0, 50.0, 0.0, 255.0), 0.0);
        assert_eq!(map_range(50.0, 1.0, 50.0, 0.0, 255.0), 255.0);
    }

    #[test]
    fn test_map_range_midpoint() {
        assert_eq!(map_range(300.0, 0.0, 600.0, -1.25, 1.25), 0.0);
    }

    #[test]
    fn test_map_range_monotonic() {
        let mut prev = f64::NEG_INFINITY;
        for px in 0..800 {
            let x = map_range(px as f64, 0.0, 800.0, -2.5, 1.0);
            assert!(x > prev, "not increasing at px={}", px);
            prev = x;
        }
    }

    #[test]
    fn test_map_range_reversed_target() {
        // Descending target interval is mapped in reverse
        assert_eq!(map_range(0.0, 0.0, 10.0, 5.0, -5.0), 5.0);
        assert_eq!(map_range(10.0, 0.0, 10.0, 5.0, -5.0), -5.0);
        assert!(map_range(3.0, 0.0, 10.0, 5.0, -5.0) > map_range(4.0, 0.0, 10.0, 5.0, -5.0));
    }

    #[test]
    fn test_map_range_degenerate_interval() {
        assert!(!map_range(1.0, 2.0, 2.0, 0.0, 1.0).is_finite());
    }

    #[test]
    fn test_fps_counter_window() {
        let mut counter = FpsCounter::new(3);
        for dt in [0.01, 0.02, 0.04, 0.05] {
            counter.record(dt);
        }
        assert_eq!(counter.frame_count(), 3);
        let (min_fps, max_fps) = counter.min_max_fps();
        assert!((min_fps - 20.0).abs() < 0.01);
        assert!((max_fps - 50.0).abs() < 0.01);
        assert!((counter.avg_frame_time_ms() - 36.666).abs() < 0.01);
    }

    #[test]
    fn test_fps_counter_empty() {
        let counter = FpsCounter::new(10);
        assert_eq!(counter.min_max_fps(), (0.0, 0.0));
        assert_eq!(counter.avg_frame_time_ms(), 0.0);
    }
}
