//! Hand landmark types and primitive distance functions.
//!
//! A [`Hand`] is the fixed 21-point skeleton produced by the hand-tracking model.
//! Points are addressed through [`HandJoint`] rather than raw indices, so a wrong
//! joint is a compile error instead of a silent mis-index.

use crate::{constants::NUM_HAND_LANDMARKS, Error, Result};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// A single tracked point: x/y normalized to the source frame, optional relative depth
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Landmark {
    /// Horizontal position, 0.0 (left edge) to 1.0 (right edge)
    pub x: f64,
    /// Vertical position, 0.0 (top edge) to 1.0 (bottom edge)
    pub y: f64,
    /// Relative depth in the same normalized scale, when the model supplies one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
}

impl Landmark {
    /// Create a 2D landmark with no depth
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: None }
    }

    /// Create a landmark with relative depth
    #[must_use]
    pub const fn with_z(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z: Some(z) }
    }

    /// Depth with absent values read as 0
    #[must_use]
    pub fn depth(&self) -> f64 {
        self.z.unwrap_or(0.0)
    }

    /// Position as a 3D vector (absent depth is 0)
    #[must_use]
    pub fn to_vector(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.depth())
    }
}

/// Euclidean distance using only x and y
#[must_use]
pub fn distance_2d(a: &Landmark, b: &Landmark) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Euclidean distance over x, y and z, missing z treated as 0 on either side
#[must_use]
pub fn distance_3d(a: &Landmark, b: &Landmark) -> f64 {
    (a.to_vector() - b.to_vector()).norm()
}

/// Anatomical landmark positions in the hand-tracking model's ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum HandJoint {
    Wrist = 0,
    ThumbCmc = 1,
    ThumbMcp = 2,
    ThumbIp = 3,
    ThumbTip = 4,
    IndexMcp = 5,
    IndexPip = 6,
    IndexDip = 7,
    IndexTip = 8,
    MiddleMcp = 9,
    MiddlePip = 10,
    MiddleDip = 11,
    MiddleTip = 12,
    RingMcp = 13,
    RingPip = 14,
    RingDip = 15,
    RingTip = 16,
    PinkyMcp = 17,
    PinkyPip = 18,
    PinkyDip = 19,
    PinkyTip = 20,
}

impl HandJoint {
    /// Position of this joint in the flat landmark sequence
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// The four non-thumb fingers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Finger {
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    /// All non-thumb fingers in anatomical order
    pub const ALL: [Finger; 4] = [Finger::Index, Finger::Middle, Finger::Ring, Finger::Pinky];

    /// Metacarpophalangeal (knuckle) joint
    #[must_use]
    pub const fn mcp(self) -> HandJoint {
        match self {
            Finger::Index => HandJoint::IndexMcp,
            Finger::Middle => HandJoint::MiddleMcp,
            Finger::Ring => HandJoint::RingMcp,
            Finger::Pinky => HandJoint::PinkyMcp,
        }
    }

    /// Proximal interphalangeal joint
    #[must_use]
    pub const fn pip(self) -> HandJoint {
        match self {
            Finger::Index => HandJoint::IndexPip,
            Finger::Middle => HandJoint::MiddlePip,
            Finger::Ring => HandJoint::RingPip,
            Finger::Pinky => HandJoint::PinkyPip,
        }
    }

    /// Distal interphalangeal joint
    #[must_use]
    pub const fn dip(self) -> HandJoint {
        match self {
            Finger::Index => HandJoint::IndexDip,
            Finger::Middle => HandJoint::MiddleDip,
            Finger::Ring => HandJoint::RingDip,
            Finger::Pinky => HandJoint::PinkyDip,
        }
    }

    /// Fingertip
    #[must_use]
    pub const fn tip(self) -> HandJoint {
        match self {
            Finger::Index => HandJoint::IndexTip,
            Finger::Middle => HandJoint::MiddleTip,
            Finger::Ring => HandJoint::RingTip,
            Finger::Pinky => HandJoint::PinkyTip,
        }
    }
}

/// One detected hand: exactly 21 landmarks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Landmark>", into = "Vec<Landmark>")]
pub struct Hand {
    landmarks: [Landmark; NUM_HAND_LANDMARKS],
}

impl Hand {
    /// Create a hand from a fixed-size landmark array
    #[must_use]
    pub const fn new(landmarks: [Landmark; NUM_HAND_LANDMARKS]) -> Self {
        Self { landmarks }
    }

    /// Create a hand from a detector-supplied slice
    ///
    /// # Errors
    ///
    /// Returns an error if the slice does not hold exactly 21 landmarks
    pub fn from_slice(landmarks: &[Landmark]) -> Result<Self> {
        let landmarks: [Landmark; NUM_HAND_LANDMARKS] = landmarks.try_into().map_err(|_| {
            Error::InvalidInput(format!(
                "Expected {} hand landmarks, got {}",
                NUM_HAND_LANDMARKS,
                landmarks.len()
            ))
        })?;
        Ok(Self { landmarks })
    }

    /// Landmark at the given joint
    #[must_use]
    pub fn joint(&self, joint: HandJoint) -> &Landmark {
        &self.landmarks[joint.index()]
    }

    /// Wrist landmark
    #[must_use]
    pub fn wrist(&self) -> &Landmark {
        self.joint(HandJoint::Wrist)
    }

    /// All landmarks in model order
    #[must_use]
    pub fn landmarks(&self) -> &[Landmark; NUM_HAND_LANDMARKS] {
        &self.landmarks
    }

    /// 2D distance between two joints of this hand
    #[must_use]
    pub fn span(&self, a: HandJoint, b: HandJoint) -> f64 {
        distance_2d(self.joint(a), self.joint(b))
    }
}

impl Index<HandJoint> for Hand {
    type Output = Landmark;

    fn index(&self, joint: HandJoint) -> &Landmark {
        self.joint(joint)
    }
}

impl TryFrom<Vec<Landmark>> for Hand {
    type Error = Error;

    fn try_from(landmarks: Vec<Landmark>) -> Result<Self> {
        Self::from_slice(&landmarks)
    }
}

impl From<Hand> for Vec<Landmark> {
    fn from(hand: Hand) -> Self {
        hand.landmarks.to_vec()
    }
}
