//! Per-frame composition of the gesture, orientation, pose and interaction stages.

use crate::{
    config::{Config, InteractionConfig, OrientationConfig},
    gesture::GestureClassifier,
    interaction::{facing_each_other, hands_close_within, is_near_object_within},
    landmark::Hand,
    orientation::{estimate_orientation_with, Orientation},
    pose_estimation::{Pose3D, PoseEstimator},
    projection::WorldProjector,
    Result,
};
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Derived state of one hand for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureResult {
    pub fist: bool,
    pub peace: bool,
    pub thumbs_up: bool,
    pub orientation: Orientation,
    /// World pose, present only for a fist
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pose: Option<Pose3D>,
}

/// Relations between the first two hands of a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwoHandInteraction {
    pub hands_close: bool,
    pub facing_each_other: bool,
    /// Both fists, facing each other and close together
    pub celebration: bool,
}

/// Everything derived from one frame's hand set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameAnalysis {
    /// One result per detected hand, in detector order
    pub hands: Vec<GestureResult>,
    /// Present when at least two hands were detected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interaction: Option<TwoHandInteraction>,
}

/// Runs the full landmark-to-semantics pipeline
///
/// Holds only immutable parameters, so one analyzer can be shared across
/// threads and frames.
#[derive(Debug, Clone)]
pub struct HandAnalyzer {
    classifier: GestureClassifier,
    orientation: OrientationConfig,
    pose_estimator: PoseEstimator,
    projector: WorldProjector,
    interaction: InteractionConfig,
}

impl HandAnalyzer {
    /// Create an analyzer for a canvas of the given size
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas dimensions are not positive
    pub fn new(config: &Config, canvas_width: f64, canvas_height: f64) -> Result<Self> {
        log::info!("Initializing HandAnalyzer for {}x{} canvas", canvas_width, canvas_height);

        Ok(Self {
            classifier: GestureClassifier::new(config.gesture.clone()),
            orientation: config.orientation.clone(),
            pose_estimator: PoseEstimator::new(config.pose.clone()),
            projector: WorldProjector::new(config.projection.clone(), canvas_width, canvas_height)?,
            interaction: config.interaction.clone(),
        })
    }

    /// Projector used for world positions
    #[must_use]
    pub fn projector(&self) -> &WorldProjector {
        &self.projector
    }

    /// Classify one hand; the world pose is only estimated for a fist
    #[must_use]
    pub fn analyze_hand(&self, hand: &Hand) -> GestureResult {
        let fist = self.classifier.is_fist(hand);
        let pose = fist.then(|| Pose3D::new(self.projector.hand_to_world(hand), self.pose_estimator.estimate_rotation(hand)));

        GestureResult {
            fist,
            peace: self.classifier.is_peace(hand),
            thumbs_up: self.classifier.is_thumbs_up(hand),
            orientation: estimate_orientation_with(hand, &self.orientation),
            pose,
        }
    }

    /// Whether a hand's world position is within the configured reach of an
    /// object; either position being absent means "not near"
    #[must_use]
    pub fn is_near_object(&self, hand: Option<&Point3<f64>>, object: Option<&Point3<f64>>) -> bool {
        is_near_object_within(hand, object, self.interaction.near_object_threshold)
    }

    /// Analyze every hand in a frame plus the first pair's interaction
    #[must_use]
    pub fn analyze_frame(&self, hands: &[Hand]) -> FrameAnalysis {
        let results: Vec<GestureResult> = hands.iter().map(|hand| self.analyze_hand(hand)).collect();

        let interaction = match (hands, results.as_slice()) {
            ([hand_a, hand_b, ..], [result_a, result_b, ..]) => {
                let close = hands_close_within(hand_a, hand_b, self.interaction.hands_close_threshold);
                let facing = facing_each_other(result_a.orientation, result_b.orientation);
                Some(TwoHandInteraction {
                    hands_close: close,
                    facing_each_other: facing,
                    celebration: result_a.fist && result_b.fist && close && facing,
                })
            }
            _ => None,
        };

        log::debug!(
            "Analyzed frame: {} hand(s), interaction {:?}",
            results.len(),
            interaction
        );

        FrameAnalysis {
            hands: results,
            interaction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        constants::NUM_HAND_LANDMARKS,
        landmark::{Finger, HandJoint, Landmark},
    };

    /// Fist centered at `wrist_x`, knuckles pointing `dx` sideways
    fn fist(wrist_x: f64, dx: f64) -> Hand {
        let mut landmarks = [Landmark::new(wrist_x, 0.5); NUM_HAND_LANDMARKS];
        landmarks[HandJoint::MiddleMcp.index()] = Landmark::new(wrist_x + dx, 0.5);
        for finger in Finger::ALL {
            let pip = landmarks[finger.pip().index()];
            landmarks[finger.tip().index()] = Landmark::new(pip.x, pip.y + 0.01);
        }
        Hand::new(landmarks)
    }

    fn analyzer() -> HandAnalyzer {
        HandAnalyzer::new(&Config::default(), 640.0, 480.0).unwrap()
    }

    #[test]
    fn test_invalid_canvas_rejected() {
        assert!(HandAnalyzer::new(&Config::default(), 0.0, 480.0).is_err());
    }

    #[test]
    fn test_near_object_uses_configured_reach() {
        let pose = analyzer().analyze_hand(&fist(0.4, 0.1)).pose.unwrap();
        let object = pose.position + nalgebra::Vector3::new(1.0, 0.0, 0.0);

        // Default reach is 0.8
        assert!(!analyzer().is_near_object(Some(&pose.position), Some(&object)));

        let mut config = Config::default();
        config.interaction.near_object_threshold = 1.5;
        let wide = HandAnalyzer::new(&config, 640.0, 480.0).unwrap();
        assert!(wide.is_near_object(Some(&pose.position), Some(&object)));
        assert!(!wide.is_near_object(None, Some(&object)));
    }

    #[test]
    fn test_single_fist_has_pose() {
        let result = analyzer().analyze_hand(&fist(0.4, 0.1));
        assert!(result.fist);
        assert!(!result.peace);
        assert_eq!(result.orientation, Orientation::Right);

        let pose = result.pose.unwrap();
        assert!(pose.position.z <= -2.5 && pose.position.z >= -4.5);
    }

    #[test]
    fn test_open_hand_has_no_pose() {
        let mut landmarks = [Landmark::new(0.5, 0.5); NUM_HAND_LANDMARKS];
        for finger in Finger::ALL {
            landmarks[finger.tip().index()] = Landmark::new(0.5, 0.2);
        }
        let result = analyzer().analyze_hand(&Hand::new(landmarks));
        assert!(!result.fist);
        assert!(result.pose.is_none());
    }

    #[test]
    fn test_celebration() {
        let frame = analyzer().analyze_frame(&[fist(0.4, 0.1), fist(0.55, -0.1)]);
        let interaction = frame.interaction.unwrap();
        assert!(interaction.hands_close);
        assert!(interaction.facing_each_other);
        assert!(interaction.celebration);
    }

    #[test]
    fn test_no_celebration_when_apart() {
        let frame = analyzer().analyze_frame(&[fist(0.1, 0.1), fist(0.9, -0.1)]);
        let interaction = frame.interaction.unwrap();
        assert!(!interaction.hands_close);
        assert!(interaction.facing_each_other);
        assert!(!interaction.celebration);
    }

    #[test]
    fn test_no_celebration_same_direction() {
        let frame = analyzer().analyze_frame(&[fist(0.4, 0.1), fist(0.55, 0.1)]);
        assert!(!frame.interaction.unwrap().celebration);
    }

    #[test]
    fn test_single_hand_no_interaction() {
        let frame = analyzer().analyze_frame(&[fist(0.4, 0.1)]);
        assert_eq!(frame.hands.len(), 1);
        assert!(frame.interaction.is_none());

        let frame = analyzer().analyze_frame(&[]);
        assert!(frame.hands.is_empty());
        assert!(frame.interaction.is_none());
    }
}
