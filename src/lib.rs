//! Trigviz: declarative figure generation for unit-circle trigonometry
//!
//! This crate computes complete, serializable chart specifications for two
//! educational visualizations: an animated unit circle with synchronized
//! cosine/sine curves, and a static multi-quadrant right-triangle figure.
//! The output ([`figure::FigureSpec`]) is plain data — drawable primitives
//! plus layout, slider, and playback metadata — consumed by an external
//! rendering collaborator.
//!
//! Both builders are pure functions of their parameters. UI state such as
//! the currently selected angle unit is owned by the caller and passed in on
//! every call; the crate keeps no state between invocations.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod angle;
pub mod animator;
pub mod connection;
pub mod constants;
pub mod figure;
pub mod geometry;

// Re-export commonly used types
pub use angle::AngleUnit;
pub use animator::build_circular_function_figure;
pub use connection::{build_trig_connection_figure, Quadrant};
pub use figure::{FigureSpec, Theme};

/// Main error type for the trigviz library
#[derive(Debug, Error)]
pub enum TrigvizError {
    #[error("Invalid angle {0:?}: not a finite number")]
    InvalidAngle(String),

    #[error("Angle {0}° is outside the supported range 0°..=90°")]
    AngleOutOfRange(f64),

    #[error("Unknown angle unit {0:?} (expected \"degrees\" or \"radians\")")]
    UnknownUnit(String),

    #[error("Unknown quadrant {0:?} (expected \"Q2\", \"Q3\", or \"Q4\")")]
    UnknownQuadrant(String),

    #[error("Unknown theme {0:?} (expected \"light\" or \"dark\")")]
    UnknownTheme(String),
}

/// Result type for trigviz operations
pub type Result<T> = std::result::Result<T, TrigvizError>;

/// Figure parameters as threaded by the UI layer.
///
/// The caller owns these between renders; passing the same options twice
/// produces identical figures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FigureOptions {
    /// Display unit for all angle labels
    #[serde(default)]
    pub unit: AngleUnit,
    /// Symmetric quadrants to reflect into (connection figure only);
    /// subset of {Q2, Q3, Q4}
    #[serde(default)]
    pub active_quadrants: BTreeSet<Quadrant>,
    /// Color theme (animator figure only)
    #[serde(default)]
    pub theme: Theme,
}

impl FigureOptions {
    /// Check the enumerated fields; deserialized options may carry Q1,
    /// which is implicit and never selectable.
    pub fn validate(&self) -> Result<()> {
        if self.active_quadrants.contains(&Quadrant::Q1) {
            return Err(TrigvizError::UnknownQuadrant("Q1".to_string()));
        }
        Ok(())
    }

    /// Build the animated circular-function figure from these options.
    pub fn circular_function_figure(&self) -> Result<FigureSpec> {
        self.validate()?;
        Ok(build_circular_function_figure(self.unit, self.theme))
    }

    /// Build the trig-connection figure from these options and the UI's
    /// current angle string.
    pub fn trig_connection_figure(&self, angle: &str) -> Result<FigureSpec> {
        self.validate()?;
        build_trig_connection_figure(self.unit, &self.active_quadrants, angle)
    }
}
