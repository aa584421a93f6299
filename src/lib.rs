//! Hand gesture library: semantic state from per-frame hand landmarks.
//!
//! Input is the 21-point hand skeleton produced by an external hand-tracking
//! model, x/y normalized to [0, 1]. The pipeline derives:
//! 1. Gesture flags (fist, peace sign, thumbs up) from fixed-threshold geometry
//! 2. A coarse pointing orientation (left, right, up, unknown)
//! 3. A heuristic world pose for a fist: monocular depth, projected position
//!    and an Euler rotation
//! 4. Two-hand predicates: proximity and facing each other
//!
//! Every stage is a pure function of the current frame. Smoothing and effect
//! debouncing are separate stateful layers ([`filters`], [`trigger`]).
//!
//! # Examples
//!
//! ## Single Hand
//!
//! ```no_run
//! use hand_gesture::{
//!     gesture::is_fist,
//!     landmark::{Hand, Landmark},
//!     orientation::estimate_orientation,
//!     pose_estimation::estimate_rotation,
//!     projection::hand_to_world,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let landmarks = vec![Landmark::new(0.5, 0.5); 21];
//! let hand = Hand::from_slice(&landmarks)?;
//!
//! if is_fist(&hand) {
//!     let position = hand_to_world(&hand, 640.0, 480.0)?;
//!     let rotation = estimate_rotation(&hand);
//!     println!("Fist at {:?}, yaw {:.2}", position, rotation.yaw);
//! }
//! println!("Pointing {}", estimate_orientation(&hand));
//! # Ok(())
//! # }
//! ```
//!
//! ## Whole Frame
//!
//! ```no_run
//! use hand_gesture::{analysis::HandAnalyzer, config::Config, landmark::Hand};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let analyzer = HandAnalyzer::new(&Config::default(), 640.0, 480.0)?;
//! let hands: Vec<Hand> = Vec::new();
//!
//! let frame = analyzer.analyze_frame(&hands);
//! if frame.interaction.is_some_and(|i| i.celebration) {
//!     println!("Both fists bumped");
//! }
//! # Ok(())
//! # }
//! ```

/// Landmark and hand types, distance primitives
pub mod landmark;

/// Fist, peace and thumbs-up classification
pub mod gesture;

/// Four-way pointing direction
pub mod orientation;

/// Heuristic Euler rotation of a hand
pub mod pose_estimation;

/// Monocular depth and world projection
pub mod projection;

/// Two-hand and hand-object predicates
pub mod interaction;

/// Per-frame pipeline composition
pub mod analysis;

/// Smoothing filters for pose estimates
pub mod filters;

/// Effect trigger debounce
pub mod trigger;

/// Error types and result handling
pub mod error;

/// Frame-stream application
pub mod app;

/// Constants used throughout the library
pub mod constants;

/// Configuration management
pub mod config;

pub use error::{Error, Result};
