//! Mapping normalized landmarks into 3D scene coordinates.
//!
//! Depth comes from a monocular heuristic: the apparent wrist-to-knuckle size
//! of the hand. This is a proxy, not metric depth. It degrades for hands that
//! are not facing the camera and for unusually small or large hands.
//!
//! The virtual camera parameters are fixed design values and are independent
//! of whatever camera actually renders the scene; callers must keep the two in
//! sync to avoid a visual mismatch.

use crate::{
    config::ProjectionConfig,
    landmark::{Hand, HandJoint, Landmark},
    Error, Result,
};
use nalgebra::Point3;

/// Projects normalized landmarks onto the world plane of a virtual camera
#[derive(Debug, Clone)]
pub struct WorldProjector {
    config: ProjectionConfig,
    world_width: f64,
    world_height: f64,
}

impl WorldProjector {
    /// Create a projector for a canvas of the given size
    ///
    /// # Errors
    ///
    /// Returns an error if either canvas dimension is not a positive finite number
    pub fn new(config: ProjectionConfig, canvas_width: f64, canvas_height: f64) -> Result<Self> {
        if !(canvas_width.is_finite() && canvas_width > 0.0 && canvas_height.is_finite() && canvas_height > 0.0) {
            return Err(Error::InvalidInput(format!(
                "Canvas dimensions must be positive, got {canvas_width}x{canvas_height}"
            )));
        }

        let aspect = canvas_width / canvas_height;
        let world_height = 2.0 * (config.fov_degrees.to_radians() / 2.0).tan() * config.reference_distance;
        let world_width = world_height * aspect;

        log::debug!(
            "World plane {:.3}x{:.3} for canvas {}x{}",
            world_width,
            world_height,
            canvas_width,
            canvas_height
        );

        Ok(Self {
            config,
            world_width,
            world_height,
        })
    }

    /// Width of the world plane at the reference distance
    #[must_use]
    pub fn world_width(&self) -> f64 {
        self.world_width
    }

    /// Height of the world plane at the reference distance
    #[must_use]
    pub fn world_height(&self) -> f64 {
        self.world_height
    }

    /// Approximate camera-relative depth from apparent hand size
    #[must_use]
    pub fn estimate_hand_depth(&self, hand: &Hand) -> f64 {
        depth_from_hand_size(&self.config, hand)
    }

    /// Project a landmark to world space at the given depth
    ///
    /// Normalized y grows downward while world y grows upward, so y is inverted.
    #[must_use]
    pub fn landmark_to_world(&self, landmark: &Landmark, depth: Option<f64>) -> Point3<f64> {
        Point3::new(
            (landmark.x - 0.5) * self.world_width,
            (0.5 - landmark.y) * self.world_height,
            depth.unwrap_or(self.config.default_depth),
        )
    }

    /// World position of a hand: wrist projected at the heuristic depth
    #[must_use]
    pub fn hand_to_world(&self, hand: &Hand) -> Point3<f64> {
        self.landmark_to_world(hand.wrist(), Some(self.estimate_hand_depth(hand)))
    }
}

/// Linear map from the clamped wrist-to-middle-MCP size onto the depth range
fn depth_from_hand_size(config: &ProjectionConfig, hand: &Hand) -> f64 {
    let size = hand
        .span(HandJoint::Wrist, HandJoint::MiddleMcp)
        .clamp(config.hand_size_min, config.hand_size_max);

    let per_unit = config.depth_range / (config.hand_size_max - config.hand_size_min);
    config.depth_near - (size - config.hand_size_min) * per_unit
}

/// Depth heuristic with the default camera model
#[must_use]
pub fn estimate_hand_depth(hand: &Hand) -> f64 {
    depth_from_hand_size(&ProjectionConfig::default(), hand)
}

/// Project a landmark with the default camera model
///
/// # Errors
///
/// Returns an error if the canvas dimensions are not positive
pub fn landmark_to_world(landmark: &Landmark, canvas_width: f64, canvas_height: f64, depth: Option<f64>) -> Result<Point3<f64>> {
    Ok(WorldProjector::new(ProjectionConfig::default(), canvas_width, canvas_height)?.landmark_to_world(landmark, depth))
}

/// Hand world position with the default camera model
///
/// # Errors
///
/// Returns an error if the canvas dimensions are not positive
pub fn hand_to_world(hand: &Hand, canvas_width: f64, canvas_height: f64) -> Result<Point3<f64>> {
    Ok(WorldProjector::new(ProjectionConfig::default(), canvas_width, canvas_height)?.hand_to_world(hand))
}
