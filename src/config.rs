//! Configuration management for the hand gesture pipeline

use crate::{constants::*, Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Pipeline configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Gesture classification thresholds
    pub gesture: GestureConfig,

    /// Orientation estimation
    pub orientation: OrientationConfig,

    /// Rotation estimation
    pub pose: PoseConfig,

    /// Virtual camera and depth heuristic
    pub projection: ProjectionConfig,

    /// Two-hand and hand-object predicates
    pub interaction: InteractionConfig,

    /// Pose smoothing filter
    pub filter: FilterConfig,

    /// Celebratory effect debounce
    pub trigger: TriggerConfig,
}

/// Gesture classification thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Tip-to-knuckle distance below which a finger is folded
    pub folded_threshold: f64,

    /// Tip-to-MCP distance above which a finger is raised
    pub up_threshold: f64,

    /// Thumb tip-to-IP distance above which the thumb is extended
    pub thumb_extended_threshold: f64,

    /// Folded non-thumb fingers required for a fist (1-4)
    pub min_folded_fingers: usize,
}

/// Orientation estimation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrientationConfig {
    /// Upward wrist-to-knuckle displacement required for "up"
    pub up_threshold: f64,
}

/// Rotation estimation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoseConfig {
    /// Magnitude below which a direction vector is treated as degenerate
    pub degenerate_epsilon: f64,
}

/// Virtual camera and monocular depth heuristic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Vertical field of view in degrees; keep in sync with the rendering camera
    pub fov_degrees: f64,

    /// Distance at which the world plane is sized
    pub reference_distance: f64,

    /// Depth used when none is supplied
    pub default_depth: f64,

    /// Depth at the smallest clamped hand size
    pub depth_near: f64,

    /// Depth span across the clamped hand size range
    pub depth_range: f64,

    /// Lower clamp for the apparent hand size
    pub hand_size_min: f64,

    /// Upper clamp for the apparent hand size
    pub hand_size_max: f64,
}

/// Interaction predicate thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Wrist distance (normalized) below which two hands are close
    pub hands_close_threshold: f64,

    /// World distance at or below which a hand is near an object
    pub near_object_threshold: f64,
}

/// Pose filter configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Filter type (none, exponential, moving_average)
    pub default_filter: String,

    /// Moving average window size
    pub moving_average_window: usize,

    /// Exponential filter alpha value
    pub exponential_alpha: f64,
}

/// Effect trigger configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriggerConfig {
    /// Minimum time between two effect triggers, in milliseconds
    pub cooldown_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gesture: GestureConfig::default(),
            orientation: OrientationConfig::default(),
            pose: PoseConfig::default(),
            projection: ProjectionConfig::default(),
            interaction: InteractionConfig::default(),
            filter: FilterConfig::default(),
            trigger: TriggerConfig::default(),
        }
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            folded_threshold: FINGER_FOLDED_THRESHOLD,
            up_threshold: FINGER_UP_THRESHOLD,
            thumb_extended_threshold: THUMB_EXTENDED_THRESHOLD,
            min_folded_fingers: MIN_FOLDED_FINGERS,
        }
    }
}

impl Default for OrientationConfig {
    fn default() -> Self {
        Self {
            up_threshold: ORIENTATION_UP_THRESHOLD,
        }
    }
}

impl Default for PoseConfig {
    fn default() -> Self {
        Self {
            degenerate_epsilon: DEGENERATE_VECTOR_EPSILON,
        }
    }
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            fov_degrees: CAMERA_FOV_DEGREES,
            reference_distance: REFERENCE_DISTANCE,
            default_depth: DEFAULT_DEPTH,
            depth_near: DEPTH_NEAR,
            depth_range: DEPTH_RANGE,
            hand_size_min: HAND_SIZE_MIN,
            hand_size_max: HAND_SIZE_MAX,
        }
    }
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            hands_close_threshold: HANDS_CLOSE_THRESHOLD,
            near_object_threshold: NEAR_OBJECT_THRESHOLD,
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            default_filter: "none".to_string(),
            moving_average_window: DEFAULT_MOVING_AVERAGE_WINDOW,
            exponential_alpha: DEFAULT_EXPONENTIAL_ALPHA,
        }
    }
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            cooldown_ms: DEFAULT_TRIGGER_COOLDOWN_MS,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid YAML
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::IoError(e.to_string()))?;

        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid YAML for this structure
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content).map_err(|e| Error::IoError(e.to_string()))?;

        Ok(())
    }

    /// Filter description with the configured parameter attached, in the
    /// `name[:param]` form accepted by [`crate::filters::create_filter`]
    ///
    /// An explicit parameter in `default_filter` wins over the section's
    /// `exponential_alpha` / `moving_average_window`.
    #[must_use]
    pub fn filter_spec(&self) -> String {
        let name = self.filter.default_filter.trim();
        if name.contains(':') {
            return name.to_string();
        }

        match name.to_lowercase().as_str() {
            "exponential" => format!("exponential:{}", self.filter.exponential_alpha),
            "moving_average" | "movingaverage" => format!("moving_average:{}", self.filter.moving_average_window),
            _ => name.to_string(),
        }
    }

    /// Create a pose filter from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the filter name is unknown or its parameter is
    /// out of range
    pub fn create_filter(&self) -> Result<Box<dyn crate::filters::PoseFilter>> {
        crate::filters::create_filter(&self.filter_spec())
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` describing the first invalid value
    pub fn validate(&self) -> Result<()> {
        // Gesture thresholds
        let gesture = &self.gesture;
        for (name, value) in [
            ("Folded threshold", gesture.folded_threshold),
            ("Finger up threshold", gesture.up_threshold),
            ("Thumb extended threshold", gesture.thumb_extended_threshold),
        ] {
            if !(value > 0.0) {
                return Err(Error::ConfigError(format!("{name} must be greater than 0")));
            }
        }
        if !(1..=4).contains(&gesture.min_folded_fingers) {
            return Err(Error::ConfigError(
                "Minimum folded fingers must be between 1 and 4".to_string(),
            ));
        }

        if self.orientation.up_threshold < 0.0 {
            return Err(Error::ConfigError(
                "Orientation up threshold must not be negative".to_string(),
            ));
        }
        if !(self.pose.degenerate_epsilon > 0.0) {
            return Err(Error::ConfigError(
                "Degenerate epsilon must be greater than 0".to_string(),
            ));
        }

        // Camera model
        let projection = &self.projection;
        if !(projection.fov_degrees > 0.0 && projection.fov_degrees < 180.0) {
            return Err(Error::ConfigError(
                "Field of view must be between 0 and 180 degrees".to_string(),
            ));
        }
        if !(projection.reference_distance > 0.0) {
            return Err(Error::ConfigError(
                "Reference distance must be greater than 0".to_string(),
            ));
        }
        if !(projection.hand_size_min > 0.0 && projection.hand_size_min < projection.hand_size_max) {
            return Err(Error::ConfigError(
                "Hand size bounds must satisfy 0 < min < max".to_string(),
            ));
        }

        // Interaction
        if !(self.interaction.hands_close_threshold > 0.0) {
            return Err(Error::ConfigError(
                "Hands close threshold must be greater than 0".to_string(),
            ));
        }
        if self.interaction.near_object_threshold < 0.0 {
            return Err(Error::ConfigError(
                "Near object threshold must not be negative".to_string(),
            ));
        }

        // Filter parameters
        if self.filter.moving_average_window == 0 {
            return Err(Error::ConfigError(
                "Moving average window size must be greater than 0".to_string(),
            ));
        }
        if !(self.filter.exponential_alpha > EXPONENTIAL_ALPHA_MIN && self.filter.exponential_alpha <= EXPONENTIAL_ALPHA_MAX) {
            return Err(Error::ConfigError(
                "Exponential alpha must be in (0, 1]".to_string(),
            ));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Hand Gesture Configuration

# Gesture thresholds (normalized image units)
gesture:
  folded_threshold: 0.05
  up_threshold: 0.09
  thumb_extended_threshold: 0.07
  min_folded_fingers: 3

# Orientation estimation
orientation:
  up_threshold: 0.05

# Rotation estimation
pose:
  degenerate_epsilon: 0.001

# Virtual camera; keep in sync with the rendering camera
projection:
  fov_degrees: 75.0
  reference_distance: 5.0
  default_depth: -2.5
  depth_near: -2.5
  depth_range: 2.0
  hand_size_min: 0.05
  hand_size_max: 0.2

# Interaction predicates
interaction:
  hands_close_threshold: 0.25
  near_object_threshold: 0.8

# Pose smoothing
filter:
  default_filter: "none"
  moving_average_window: 5
  exponential_alpha: 0.5

# Effect debounce
trigger:
  cooldown_ms: 1500
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_config_matches_defaults() {
        let parsed = Config::from_yaml(EXAMPLE_CONFIG).unwrap();
        assert_eq!(parsed, Config::default());
        assert!(parsed.validate().is_ok());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed = Config::from_yaml("gesture:\n  folded_threshold: 0.04\n").unwrap();
        assert_eq!(parsed.gesture.folded_threshold, 0.04);
        assert_eq!(parsed.gesture.up_threshold, FINGER_UP_THRESHOLD);
        assert_eq!(parsed.projection, ProjectionConfig::default());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.gesture.min_folded_fingers = 5;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.projection.fov_degrees = 180.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.projection.hand_size_min = 0.3;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.filter.exponential_alpha = 0.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.filter.moving_average_window = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_create_filter_from_config() {
        let mut config = Config::default();
        assert_eq!(config.create_filter().unwrap().name(), "NoFilter");

        config.filter.default_filter = "exponential".to_string();
        assert_eq!(config.create_filter().unwrap().name(), "ExponentialFilter");

        config.filter.default_filter = "bogus".to_string();
        assert!(config.create_filter().is_err());
    }

    #[test]
    fn test_filter_spec_carries_parameters() {
        let mut config = Config::default();
        assert_eq!(config.filter_spec(), "none");

        config.filter.default_filter = "exponential".to_string();
        config.filter.exponential_alpha = 0.25;
        assert_eq!(config.filter_spec(), "exponential:0.25");

        config.filter.default_filter = "moving_average".to_string();
        config.filter.moving_average_window = 7;
        assert_eq!(config.filter_spec(), "moving_average:7");

        config.filter.default_filter = "moving_average:3".to_string();
        assert_eq!(config.filter_spec(), "moving_average:3");
    }

    #[test]
    fn test_file_round_trip() {
        let path = std::env::temp_dir().join(format!("hand_gesture_config_{}.yaml", std::process::id()));
        let mut config = Config::default();
        config.interaction.hands_close_threshold = 0.3;

        config.to_file(&path).unwrap();
        let loaded = Config::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            Config::from_file("/nonexistent/hand_gesture.yaml"),
            Err(Error::IoError(_))
        ));
    }
}
