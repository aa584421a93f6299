//! Constants used throughout the library
//!
//! All thresholds are in normalized image units ([0, 1] in x/y) unless noted.
//! They are the defaults of [`crate::config::Config`] and can be overridden there.

/// Number of landmarks in one detected hand
pub const NUM_HAND_LANDMARKS: usize = 21;

/// Tip-to-knuckle distance below which a finger counts as folded
pub const FINGER_FOLDED_THRESHOLD: f64 = 0.05;

/// Tip-to-MCP distance above which a finger counts as raised (peace sign)
pub const FINGER_UP_THRESHOLD: f64 = 0.09;

/// Thumb tip-to-IP distance above which the thumb counts as extended
pub const THUMB_EXTENDED_THRESHOLD: f64 = 0.07;

/// Minimum number of folded non-thumb fingers for a fist
pub const MIN_FOLDED_FINGERS: usize = 3;

/// Upward displacement (negative y) required for the "up" orientation
pub const ORIENTATION_UP_THRESHOLD: f64 = 0.05;

/// Vector magnitude below which rotation estimation falls back to zero
pub const DEGENERATE_VECTOR_EPSILON: f64 = 0.001;

/// Vertical field of view of the virtual camera, in degrees
pub const CAMERA_FOV_DEGREES: f64 = 75.0;

/// Distance at which the world plane is sized from the field of view
pub const REFERENCE_DISTANCE: f64 = 5.0;

/// Depth used when a projection is not given one
pub const DEFAULT_DEPTH: f64 = -2.5;

/// Depth assigned to the smallest clamped hand size
pub const DEPTH_NEAR: f64 = -2.5;

/// Depth span covered between the smallest and largest clamped hand size
pub const DEPTH_RANGE: f64 = 2.0;

/// Apparent wrist-to-middle-MCP size clamp bounds
pub const HAND_SIZE_MIN: f64 = 0.05;
pub const HAND_SIZE_MAX: f64 = 0.20;

/// Wrist distance below which two hands are considered close
pub const HANDS_CLOSE_THRESHOLD: f64 = 0.25;

/// Default world-space distance for hand-to-object proximity
pub const NEAR_OBJECT_THRESHOLD: f64 = 0.8;

/// Default cooldown between celebratory effect triggers
pub const DEFAULT_TRIGGER_COOLDOWN_MS: u64 = 1500;

/// Default window size for the moving average pose filter
pub const DEFAULT_MOVING_AVERAGE_WINDOW: usize = 5;

/// Default exponential pose filter smoothing factor
pub const DEFAULT_EXPONENTIAL_ALPHA: f64 = 0.5;

/// Exponential filter bounds
pub const EXPONENTIAL_ALPHA_MIN: f64 = 0.0;
pub const EXPONENTIAL_ALPHA_MAX: f64 = 1.0;

/// Default canvas size used by the CLI
pub const DEFAULT_CANVAS_WIDTH: f64 = 640.0;
pub const DEFAULT_CANVAS_HEIGHT: f64 = 480.0;
