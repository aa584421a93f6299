use crate::{
    config::PoseConfig,
    landmark::{Hand, HandJoint},
};
use nalgebra::{Point3, Vector2, Vector3};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

/// Euler rotation in radians
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rotation {
    /// Rotation about the scene x axis
    pub pitch: f64,
    /// Rotation about the scene y axis
    pub yaw: f64,
    /// Rotation about the scene z axis
    pub roll: f64,
}

impl Rotation {
    /// Create a rotation from its three angles
    #[must_use]
    pub const fn new(pitch: f64, yaw: f64, roll: f64) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Angles as an `(x, y, z)` vector: pitch, yaw, roll
    #[must_use]
    pub fn to_vector(&self) -> Vector3<f64> {
        Vector3::new(self.pitch, self.yaw, self.roll)
    }

    /// Rotation from an `(x, y, z)` angle vector
    #[must_use]
    pub fn from_vector(angles: &Vector3<f64>) -> Self {
        Self::new(angles.x, angles.y, angles.z)
    }
}

/// World-space position and orientation of a tracked hand
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose3D {
    /// Position in scene units
    pub position: Point3<f64>,
    /// Euler rotation in radians
    pub rotation: Rotation,
}

impl Pose3D {
    /// Combine a world position with a rotation
    #[must_use]
    pub const fn new(position: Point3<f64>, rotation: Rotation) -> Self {
        Self { position, rotation }
    }
}

/// Heuristic single-frame hand rotation estimator
///
/// Uses three landmarks only: wrist, middle MCP (forward) and thumb tip
/// (sideways). Intended for a fist; the caller checks the gesture. No
/// smoothing is applied here, see [`crate::filters`] for that.
#[derive(Debug, Clone, Default)]
pub struct PoseEstimator {
    config: PoseConfig,
}

impl PoseEstimator {
    /// Create a new pose estimator
    #[must_use]
    pub fn new(config: PoseConfig) -> Self {
        Self { config }
    }

    /// Estimate pitch, yaw and roll of a hand
    ///
    /// A foreshortened hand whose forward vector is shorter than the
    /// degenerate epsilon yields a zero rotation rather than an error.
    #[must_use]
    pub fn estimate_rotation(&self, hand: &Hand) -> Rotation {
        let wrist = hand.wrist();
        let forward = hand.joint(HandJoint::MiddleMcp).to_vector() - wrist.to_vector();

        let length = forward.norm();
        if length < self.config.degenerate_epsilon {
            return Rotation::default();
        }
        let forward = forward / length;

        let yaw = forward.x.atan2(forward.z);
        let pitch = -forward.y.clamp(-1.0, 1.0).asin();

        let thumb = hand.joint(HandJoint::ThumbTip);
        let right = Vector2::new(thumb.x - wrist.x, thumb.y - wrist.y);
        let planar = right.norm();
        // The quarter-turn offset matches the scene's roll convention
        let roll = if planar < self.config.degenerate_epsilon {
            0.0
        } else {
            (right.y / planar).atan2(right.x / planar) - FRAC_PI_2
        };

        Rotation::new(pitch, yaw, roll)
    }
}

/// Estimate rotation with default parameters
#[must_use]
pub fn estimate_rotation(hand: &Hand) -> Rotation {
    PoseEstimator::default().estimate_rotation(hand)
}
