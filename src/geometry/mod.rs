//! Shared geometry sampling for circle outlines and angle arcs

use lazy_static::lazy_static;

use crate::constants::{ARC_POINTS, CIRCLE_OUTLINE_POINTS, TAU};

/// Evenly spaced samples from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    assert!(count >= 2, "linspace needs at least two samples");
    let step = (end - start) / (count - 1) as f64;
    (0..count).map(|i| start + step * i as f64).collect()
}

/// Sampled x/y coordinates of a circular arc about the origin.
///
/// The arc runs counterclockwise from `start_rad` to `end_rad` at `radius`,
/// with the standard [`ARC_POINTS`] density. `sign_x`/`sign_y` reflect the
/// arc into other quadrants.
pub fn arc_points(
    radius: f64,
    start_rad: f64,
    end_rad: f64,
    sign_x: f64,
    sign_y: f64,
) -> (Vec<f64>, Vec<f64>) {
    linspace(start_rad, end_rad, ARC_POINTS)
        .into_iter()
        .map(|t| (radius * t.cos() * sign_x, radius * t.sin() * sign_y))
        .unzip()
}

lazy_static! {
    /// The 500-point unit-circle outline shared by both figures.
    static ref UNIT_CIRCLE: (Vec<f64>, Vec<f64>) = linspace(0.0, TAU, CIRCLE_OUTLINE_POINTS)
        .into_iter()
        .map(|t| (t.cos(), t.sin()))
        .unzip();
}

/// x/y coordinate arrays of the unit-circle outline.
pub fn unit_circle_outline() -> (Vec<f64>, Vec<f64>) {
    UNIT_CIRCLE.clone()
}
