//! Coarse pointing direction of a hand in image space.

use crate::{
    config::OrientationConfig,
    landmark::{Hand, HandJoint},
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Four-way compass label for a hand's wrist-to-knuckle direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Left,
    Right,
    Up,
    Unknown,
}

impl Orientation {
    /// Label as shown in debug output
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Orientation::Left => "left",
            Orientation::Right => "right",
            Orientation::Up => "up",
            Orientation::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Estimate orientation with default thresholds
#[must_use]
pub fn estimate_orientation(hand: &Hand) -> Orientation {
    estimate_orientation_with(hand, &OrientationConfig::default())
}

/// Estimate orientation from the wrist to middle-MCP displacement
///
/// Image coordinates are assumed, so "up" means negative dy. Horizontal
/// displacement wins whenever it dominates.
#[must_use]
pub fn estimate_orientation_with(hand: &Hand, config: &OrientationConfig) -> Orientation {
    let wrist = hand.wrist();
    let knuckle = hand.joint(HandJoint::MiddleMcp);
    let dx = knuckle.x - wrist.x;
    let dy = knuckle.y - wrist.y;

    if dx.abs() > dy.abs() {
        if dx > 0.0 {
            Orientation::Right
        } else {
            Orientation::Left
        }
    } else if dy < -config.up_threshold {
        Orientation::Up
    } else {
        Orientation::Unknown
    }
}
