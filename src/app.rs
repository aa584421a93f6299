//! Frame-stream application: reads hand sets, writes per-frame analyses.
//!
//! Input is JSON lines, one frame per line:
//! `{"hands": [[{"x": 0.5, "y": 0.5, "z": 0.0}, ... 21 landmarks], ...]}`.
//! Output is one JSON [`FrameReport`] per processed frame.

use crate::{
    analysis::{FrameAnalysis, HandAnalyzer},
    config::Config,
    error::Result,
    filters::{angular::AngularFilter, create_filter, PoseFilter},
    landmark::Hand,
    pose_estimation::Rotation,
    trigger::EffectTrigger,
};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Where frames are read from
    pub input: InputSource,
    /// Canvas width used for world projection
    pub canvas_width: f64,
    /// Canvas height used for world projection
    pub canvas_height: f64,
    /// Pose filter, overriding the configuration file
    pub filter_type: Option<String>,
    /// Pipeline configuration
    pub config: Config,
}

/// Frame input source
#[derive(Debug, Clone, PartialEq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// JSON lines file
    File(PathBuf),
}

/// One frame of detector output
#[derive(Debug, Clone, Deserialize)]
pub struct FrameInput {
    #[serde(default)]
    pub hands: Vec<Hand>,
}

/// Analysis of one frame as written to the output stream
#[derive(Debug, Clone, Serialize)]
pub struct FrameReport {
    /// Zero-based index of the frame in the input stream
    pub frame: u64,
    #[serde(flatten)]
    pub analysis: FrameAnalysis,
    /// Whether the celebratory effect fired on this frame
    pub effect_fired: bool,
}

/// Main application struct
pub struct GestureApp {
    analyzer: HandAnalyzer,
    /// Resolved `name[:param]` used for every per-hand filter
    filter_spec: String,
    filters: Vec<Box<dyn PoseFilter>>,
    trigger: EffectTrigger,
    frame_count: u64,
}

impl GestureApp {
    /// Create a new gesture application
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the canvas size is
    /// not positive, or the filter type is unknown
    pub fn new(app_config: &AppConfig) -> Result<Self> {
        info!("Initializing hand gesture application");

        let config = &app_config.config;
        config.validate()?;

        let analyzer = HandAnalyzer::new(config, app_config.canvas_width, app_config.canvas_height)?;

        let filter_spec = app_config
            .filter_type
            .clone()
            .unwrap_or_else(|| config.filter_spec());
        // Fail early on an unknown filter rather than on the first fist
        let filter = create_filter(&filter_spec)?;
        info!("Using pose filter: {} ({})", filter.name(), filter_spec);

        Ok(Self {
            analyzer,
            filter_spec,
            filters: Vec::new(),
            trigger: EffectTrigger::new(Duration::from_millis(config.trigger.cooldown_ms)),
            frame_count: 0,
        })
    }

    /// Number of frames processed so far
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Analyze one frame, smooth fist rotations and debounce the effect
    ///
    /// # Errors
    ///
    /// Returns an error if a pose filter cannot be created
    pub fn process_frame(&mut self, hands: &[Hand], now: Instant) -> Result<FrameReport> {
        let mut analysis = self.analyzer.analyze_frame(hands);
        self.sync_filters(hands.len())?;

        for (result, filter) in analysis.hands.iter_mut().zip(self.filters.iter_mut()) {
            match result.pose.as_mut() {
                Some(pose) => {
                    let smoothed = filter.apply(pose.rotation.to_vector());
                    pose.rotation = Rotation::from_vector(&smoothed);
                }
                None => filter.reset(),
            }
        }

        let celebration = analysis.interaction.is_some_and(|i| i.celebration);
        let effect_fired = celebration && self.trigger.fire_at(now);
        if effect_fired {
            info!("Celebration effect fired on frame {}", self.frame_count);
        }

        let report = FrameReport {
            frame: self.frame_count,
            analysis,
            effect_fired,
        };
        self.frame_count += 1;

        Ok(report)
    }

    /// Process a JSON lines stream until end of input
    ///
    /// Malformed lines are logged and skipped. Returns the number of frames
    /// written.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing the stream fails
    pub fn run<R: BufRead, W: Write>(&mut self, reader: R, mut writer: W) -> Result<u64> {
        let mut written = 0;

        for (line_number, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let frame: FrameInput = match serde_json::from_str(&line) {
                Ok(frame) => frame,
                Err(e) => {
                    warn!("Skipping line {}: {}", line_number + 1, e);
                    continue;
                }
            };

            let report = self.process_frame(&frame.hands, Instant::now())?;
            serde_json::to_writer(&mut writer, &report)?;
            writer.write_all(b"\n")?;
            written += 1;
        }

        writer.flush()?;
        info!("Processed {} frame(s)", written);
        Ok(written)
    }

    /// Keep one filter per hand slot; a change in hand count resets them all
    /// since positional identity may have shifted.
    fn sync_filters(&mut self, hand_count: usize) -> Result<()> {
        if self.filters.len() == hand_count {
            return Ok(());
        }

        debug!("Hand count changed {} -> {}, resetting filters", self.filters.len(), hand_count);
        self.filters.truncate(hand_count);
        for filter in &mut self.filters {
            filter.reset();
        }
        while self.filters.len() < hand_count {
            let inner = create_filter(&self.filter_spec)?;
            self.filters.push(Box::new(AngularFilter::new(inner)));
        }
        Ok(())
    }
}
