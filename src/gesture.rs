//! Stateless gesture predicates over a single hand.
//!
//! All checks are fixed-threshold 2D geometry on normalized coordinates. The
//! predicates are independent; nothing enforces a priority between them.

use crate::{
    config::GestureConfig,
    landmark::{Finger, Hand, HandJoint},
};

/// Gesture classifier with tunable thresholds
#[derive(Debug, Clone, Default)]
pub struct GestureClassifier {
    config: GestureConfig,
}

impl GestureClassifier {
    /// Create a classifier from the given thresholds
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self { config }
    }

    /// Thresholds in use
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Whether the fingertip has curled back onto the joint two below it (PIP)
    #[must_use]
    pub fn is_finger_folded(&self, hand: &Hand, finger: Finger) -> bool {
        hand.span(finger.tip(), finger.pip()) < self.config.folded_threshold
    }

    /// Number of folded non-thumb fingers
    #[must_use]
    pub fn folded_fingers(&self, hand: &Hand) -> usize {
        Finger::ALL
            .iter()
            .filter(|&&finger| self.is_finger_folded(hand, finger))
            .count()
    }

    /// Closed fist: majority of the four fingers folded, one noisy finger tolerated
    #[must_use]
    pub fn is_fist(&self, hand: &Hand) -> bool {
        self.folded_fingers(hand) >= self.config.min_folded_fingers
    }

    /// Peace sign: index and middle raised, ring and pinky curled
    #[must_use]
    pub fn is_peace(&self, hand: &Hand) -> bool {
        let up = |finger: Finger| hand.span(finger.tip(), finger.mcp()) > self.config.up_threshold;

        up(Finger::Index)
            && up(Finger::Middle)
            && self.is_finger_folded(hand, Finger::Ring)
            && self.is_finger_folded(hand, Finger::Pinky)
    }

    /// Thumbs up: thumb extended and reaching farther from the wrist than its base
    #[must_use]
    pub fn is_thumbs_up(&self, hand: &Hand) -> bool {
        let extended = hand.span(HandJoint::ThumbTip, HandJoint::ThumbIp) > self.config.thumb_extended_threshold;
        let reaching = hand.span(HandJoint::ThumbTip, HandJoint::Wrist) > hand.span(HandJoint::ThumbCmc, HandJoint::Wrist);

        extended && reaching
    }
}

/// Fist check with default thresholds
#[must_use]
pub fn is_fist(hand: &Hand) -> bool {
    GestureClassifier::default().is_fist(hand)
}

/// Peace check with default thresholds
#[must_use]
pub fn is_peace(hand: &Hand) -> bool {
    GestureClassifier::default().is_peace(hand)
}

/// Thumbs-up check with default thresholds
#[must_use]
pub fn is_thumbs_up(hand: &Hand) -> bool {
    GestureClassifier::default().is_thumbs_up(hand)
}
