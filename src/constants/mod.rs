//! Constants module for figure geometry and animation timing

use std::f64::consts::PI;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
/// Tau (2*PI) for full circle
pub const TAU: f64 = 2.0 * PI;
/// Largest denominator allowed when reducing an angle to a fraction of pi
pub const MAX_PI_DENOMINATOR: i64 = 12;

// Sampling densities
/// Number of points in the unit-circle outline
pub const CIRCLE_OUTLINE_POINTS: usize = 500;
/// Number of points along any angle arc
pub const ARC_POINTS: usize = 100;

// Animator geometry
/// Radius of the filled angle sector inside the unit circle
pub const SECTOR_RADIUS: f64 = 0.3;
/// Radius at which the moving theta label is placed
pub const THETA_LABEL_RADIUS: f64 = 0.6;

// Animator timing and controls
/// Playback duration of one animation frame in milliseconds
pub const FRAME_DURATION_MS: u64 = 30;
/// Degree stride between labeled slider stops
pub const SLIDER_STEP_DEG: u32 = 15;
/// Degree stride between labeled axis ticks
pub const AXIS_TICK_STEP_DEG: u32 = 30;
/// Final animated degree (inclusive)
pub const MAX_DEGREE: u32 = 360;

// Composer geometry
/// Reference-angle arc radius as a fraction of the adjacent leg.
/// The arc shrinks toward zero as theta approaches 90 degrees.
pub const REFERENCE_ARC_SHRINK: f64 = 0.35;
/// Half extent of the composer plot area (quadrant bounding boxes reach this)
pub const QUADRANT_EXTENT: f64 = 1.4;
/// Inner radius of circle boundary tick marks
pub const TICK_RADIUS_INNER: f64 = 0.97;
/// Outer radius of circle boundary tick marks
pub const TICK_RADIUS_OUTER: f64 = 1.02;
/// Radius of circle boundary tick labels
pub const TICK_LABEL_RADIUS: f64 = 1.12;
