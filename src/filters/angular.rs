use super::PoseFilter;
use nalgebra::Vector3;
use std::f64::consts::{PI, TAU};

/// Wrap an angle into [-pi, pi)
#[must_use]
pub fn wrap_to_pi(angle: f64) -> f64 {
    (angle + PI).rem_euclid(TAU) - PI
}

/// Shift each component of `sample` by whole turns so it lies within pi of
/// the matching component of `reference`
#[must_use]
pub fn unwrap_angles(reference: &Vector3<f64>, sample: &Vector3<f64>) -> Vector3<f64> {
    reference.zip_map(sample, |r, s| r + wrap_to_pi(s - r))
}

/// Smooths Euler angles through an inner filter without blending across the
/// 2*pi seam.
///
/// Each sample is unwrapped against the previous output before it reaches the
/// inner filter, so the output stays continuous with the first sample rather
/// than being folded back into a fixed range.
pub struct AngularFilter {
    inner: Box<dyn PoseFilter>,
    last: Option<Vector3<f64>>,
}

impl AngularFilter {
    /// Wrap `inner` so it sees continuous angles
    #[must_use]
    pub fn new(inner: Box<dyn PoseFilter>) -> Self {
        Self { inner, last: None }
    }

    /// Name of the wrapped filter
    #[must_use]
    pub fn inner_name(&self) -> &str {
        self.inner.name()
    }
}

impl PoseFilter for AngularFilter {
    fn apply(&mut self, sample: Vector3<f64>) -> Vector3<f64> {
        let continuous = match self.last {
            Some(last) => unwrap_angles(&last, &sample),
            None => sample,
        };

        let filtered = self.inner.apply(continuous);
        self.last = Some(filtered);
        filtered
    }

    fn reset(&mut self) {
        self.inner.reset();
        self.last = None;
    }

    fn name(&self) -> &str {
        "AngularFilter"
    }
}
