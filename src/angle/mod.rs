//! Angle units, conversion, and label formatting
//!
//! Every angle shown to the user — slider stops, axis ticks, arc labels,
//! in-figure theta labels — goes through [`format_angle`] so the rendering is
//! visually consistent across both figures. Internally all trigonometry is
//! done in radians; [`AngleUnit`] only governs presentation.
//!
//! In radians mode an angle is reduced to a fraction of pi with denominator
//! at most [`crate::constants::MAX_PI_DENOMINATOR`]. The formatter does not
//! collapse wrap-around angles: 360 degrees reduces to 2/1 and is rendered
//! `"2π"`, while 0 degrees renders `"0"`. Both appear on the radians axis.

pub mod fraction;

use std::fmt;
use std::str::FromStr;

use num::rational::Ratio;
use serde::{Deserialize, Serialize};

use crate::constants::{AXIS_TICK_STEP_DEG, DEG2RAD, MAX_DEGREE, MAX_PI_DENOMINATOR, SLIDER_STEP_DEG};
use crate::{Result, TrigvizError};

/// Unit used when displaying angles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    /// Plain degree labels ("30°")
    #[default]
    Degrees,
    /// Fractional-pi labels ("π/6")
    Radians,
}

impl AngleUnit {
    /// Convert an angle in degrees to this unit's axis position.
    ///
    /// Degrees pass through unchanged; radians use the standard factor.
    pub fn axis_position(&self, degrees: f64) -> f64 {
        match self {
            AngleUnit::Degrees => degrees,
            AngleUnit::Radians => degrees * DEG2RAD,
        }
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AngleUnit::Degrees => write!(f, "degrees"),
            AngleUnit::Radians => write!(f, "radians"),
        }
    }
}

impl FromStr for AngleUnit {
    type Err = TrigvizError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "degrees" => Ok(AngleUnit::Degrees),
            "radians" => Ok(AngleUnit::Radians),
            other => Err(TrigvizError::UnknownUnit(other.to_string())),
        }
    }
}

/// Parse an angle given as a numeric string, as delivered by UI controls.
///
/// Rejects anything that does not parse as a finite number; range policy is
/// left to the caller.
pub fn parse_angle_degrees(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| TrigvizError::InvalidAngle(input.to_string()))?;
    if !value.is_finite() {
        return Err(TrigvizError::InvalidAngle(input.to_string()));
    }
    Ok(value)
}

/// Format an angle (given in degrees) under the requested unit.
///
/// Degrees mode renders `"{n}°"`. Radians mode renders the reduced fraction
/// of pi: `"0"`, `"π"`, `"{num}π"`, or `"{num}π/{den}"`.
pub fn format_angle(degrees: f64, unit: AngleUnit) -> String {
    match unit {
        AngleUnit::Degrees => format!("{}°", degrees),
        AngleUnit::Radians => {
            let frac = fraction::limit_denominator(degrees / 180.0, MAX_PI_DENOMINATOR);
            pi_fraction_label(frac)
        }
    }
}

/// Format an angle with the `θ = ` variable prefix used inside figures.
pub fn format_theta(degrees: f64, unit: AngleUnit) -> String {
    format!("θ = {}", format_angle(degrees, unit))
}

/// Render a reduced fraction of pi as a display label.
fn pi_fraction_label(frac: Ratio<i64>) -> String {
    if *frac.numer() == 0 {
        "0".to_string()
    } else if frac == Ratio::new(1, 1) {
        "π".to_string()
    } else if *frac.denom() == 1 {
        format!("{}π", frac.numer())
    } else {
        format!("{}π/{}", frac.numer(), frac.denom())
    }
}

/// Labeled slider stops: every 15 degrees from 0 to 360 inclusive (25 stops).
pub fn slider_stops(unit: AngleUnit) -> Vec<(u32, String)> {
    (0..=MAX_DEGREE)
        .step_by(SLIDER_STEP_DEG as usize)
        .map(|deg| (deg, format_angle(deg as f64, unit)))
        .collect()
}

/// Axis tick positions and labels: every 30 degrees from 0 to 360 inclusive.
///
/// Degrees mode places ticks at the plain degree values labeled as bare
/// integers (no degree sign, matching the axis style). Radians mode places
/// ticks at the radian value rounded to six decimals, labeled as fractions
/// of pi.
pub fn axis_ticks(unit: AngleUnit) -> (Vec<f64>, Vec<String>) {
    let degrees = (0..=MAX_DEGREE).step_by(AXIS_TICK_STEP_DEG as usize);
    match unit {
        AngleUnit::Degrees => degrees
            .map(|deg| (deg as f64, deg.to_string()))
            .unzip(),
        AngleUnit::Radians => degrees
            .map(|deg| {
                let value = (deg as f64 * DEG2RAD * 1e6).round() / 1e6;
                (value, format_angle(deg as f64, AngleUnit::Radians))
            })
            .unzip(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_unit_parsing() {
        assert_eq!("degrees".parse::<AngleUnit>().unwrap(), AngleUnit::Degrees);
        assert_eq!("radians".parse::<AngleUnit>().unwrap(), AngleUnit::Radians);
        assert!("gradians".parse::<AngleUnit>().is_err());
        assert!("Degrees".parse::<AngleUnit>().is_err());
    }

    #[test]
    fn test_degree_labels_exact() {
        for deg in 0..=360 {
            assert_eq!(
                format_angle(deg as f64, AngleUnit::Degrees),
                format!("{}°", deg)
            );
        }
    }

    #[rstest]
    #[case(0.0, "0")]
    #[case(15.0, "π/12")]
    #[case(30.0, "π/6")]
    #[case(45.0, "π/4")]
    #[case(60.0, "π/3")]
    #[case(90.0, "π/2")]
    #[case(120.0, "2π/3")]
    #[case(180.0, "π")]
    #[case(270.0, "3π/2")]
    #[case(330.0, "11π/6")]
    #[case(360.0, "2π")]
    fn test_radian_labels(#[case] degrees: f64, #[case] expected: &str) {
        assert_eq!(format_angle(degrees, AngleUnit::Radians), expected);
    }

    #[test]
    fn test_wraparound_not_collapsed() {
        // 360° and 0° are mathematically identical but label differently;
        // both appear at the ends of the radians axis.
        assert_eq!(format_angle(360.0, AngleUnit::Radians), "2π");
        assert_eq!(format_angle(0.0, AngleUnit::Radians), "0");
    }

    #[test]
    fn test_theta_prefix() {
        assert_eq!(format_theta(30.0, AngleUnit::Degrees), "θ = 30°");
        assert_eq!(format_theta(30.0, AngleUnit::Radians), "θ = π/6");
    }

    #[test]
    fn test_label_round_trip_within_tolerance() {
        // Multiplying the displayed fraction back by pi reconstructs the
        // angle within the denominator-12 rounding tolerance.
        for deg in (0..=360).step_by(15) {
            let frac = fraction::limit_denominator(deg as f64 / 180.0, 12);
            let reconstructed = *frac.numer() as f64 / *frac.denom() as f64 * 180.0;
            assert_relative_eq!(reconstructed, deg as f64, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_parse_angle() {
        assert_relative_eq!(parse_angle_degrees("30").unwrap(), 30.0);
        assert_relative_eq!(parse_angle_degrees("42.5").unwrap(), 42.5);
        assert_relative_eq!(parse_angle_degrees(" 7 ").unwrap(), 7.0);
        assert!(parse_angle_degrees("ninety").is_err());
        assert!(parse_angle_degrees("").is_err());
        assert!(parse_angle_degrees("NaN").is_err());
        assert!(parse_angle_degrees("inf").is_err());
    }

    #[test]
    fn test_slider_stops() {
        let stops = slider_stops(AngleUnit::Degrees);
        assert_eq!(stops.len(), 25);
        assert_eq!(stops[0], (0, "0°".to_string()));
        assert_eq!(stops[1], (15, "15°".to_string()));
        assert_eq!(stops[24], (360, "360°".to_string()));

        let stops = slider_stops(AngleUnit::Radians);
        assert_eq!(stops[6].1, "π/2");
        assert_eq!(stops[24].1, "2π");
    }

    #[test]
    fn test_axis_ticks_degrees() {
        let (values, labels) = axis_ticks(AngleUnit::Degrees);
        assert_eq!(values.len(), 13);
        assert_eq!(values[1], 30.0);
        // Axis labels in degrees mode are bare integers.
        assert_eq!(labels[1], "30");
        assert_eq!(labels[12], "360");
    }

    #[test]
    fn test_axis_ticks_radians() {
        let (values, labels) = axis_ticks(AngleUnit::Radians);
        assert_eq!(values.len(), 13);
        // Positions are radian values rounded to six decimals.
        assert_relative_eq!(values[6], 3.141593, epsilon = 1e-9);
        assert_eq!(labels[6], "π");
        assert_eq!(labels[12], "2π");
    }

    #[test]
    fn test_axis_position() {
        assert_relative_eq!(AngleUnit::Degrees.axis_position(90.0), 90.0);
        assert_relative_eq!(
            AngleUnit::Radians.axis_position(90.0),
            std::f64::consts::FRAC_PI_2
        );
    }
}
