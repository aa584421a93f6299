use super::PoseFilter;
use nalgebra::Vector3;
use std::collections::VecDeque;

/// Moving average filter
pub struct MovingAverageFilter {
    window_size: usize,
    buffer: VecDeque<Vector3<f64>>,
}

impl MovingAverageFilter {
    /// Create a filter averaging the last `window_size` samples
    ///
    /// # Panics
    ///
    /// Panics if `window_size` is zero
    pub fn new(window_size: usize) -> Self {
        assert!(window_size > 0, "Window size must be greater than 0");
        Self {
            window_size,
            buffer: VecDeque::with_capacity(window_size),
        }
    }
}

impl PoseFilter for MovingAverageFilter {
    fn apply(&mut self, sample: Vector3<f64>) -> Vector3<f64> {
        if self.buffer.len() >= self.window_size {
            self.buffer.pop_front();
        }
        self.buffer.push_back(sample);

        let sum: Vector3<f64> = self.buffer.iter().sum();
        sum / self.buffer.len() as f64
    }

    fn reset(&mut self) {
        self.buffer.clear();
    }

    fn name(&self) -> &str {
        "MovingAverageFilter"
    }
}
