//! Relational checks between two hands, or a hand and a scene object.

use crate::{
    constants::{HANDS_CLOSE_THRESHOLD, NEAR_OBJECT_THRESHOLD},
    landmark::{distance_2d, Hand},
    orientation::Orientation,
};
use nalgebra::Point3;

/// Whether two wrists are closer than the default threshold (strict)
#[must_use]
pub fn hands_close(a: &Hand, b: &Hand) -> bool {
    hands_close_within(a, b, HANDS_CLOSE_THRESHOLD)
}

/// Whether two wrists are closer than `threshold` in normalized image units
#[must_use]
pub fn hands_close_within(a: &Hand, b: &Hand, threshold: f64) -> bool {
    distance_2d(a.wrist(), b.wrist()) < threshold
}

/// Whether a hand is within the default distance of an object (inclusive)
#[must_use]
pub fn is_near_object(hand: Option<&Point3<f64>>, object: Option<&Point3<f64>>) -> bool {
    is_near_object_within(hand, object, NEAR_OBJECT_THRESHOLD)
}

/// Whether a hand is within `threshold` world units of an object
///
/// Either position being absent means "not near".
#[must_use]
pub fn is_near_object_within(hand: Option<&Point3<f64>>, object: Option<&Point3<f64>>, threshold: f64) -> bool {
    match (hand, object) {
        (Some(hand), Some(object)) => nalgebra::distance(hand, object) <= threshold,
        _ => false,
    }
}

/// Whether two hands point toward each other, in either order
#[must_use]
pub fn facing_each_other(a: Orientation, b: Orientation) -> bool {
    matches!(
        (a, b),
        (Orientation::Left, Orientation::Right) | (Orientation::Right, Orientation::Left)
    )
}
