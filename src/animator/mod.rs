//! Circular-function animator
//!
//! Builds the animated three-panel figure: the unit circle on the left, the
//! cosine and sine curves stacked on the right, with one frame per integer
//! degree from 0 to 360. Each frame is a self-contained drawable snapshot;
//! only the highlighted point and angle geometry differ between frames, the
//! curves themselves are identical in every frame.
//!
//! The builder is a pure function. The previously selected unit is owned and
//! threaded by the caller; nothing here survives between calls.

use log::debug;

use crate::angle::{self, format_theta, AngleUnit};
use crate::constants::{
    DEG2RAD, FRAME_DURATION_MS, MAX_DEGREE, SECTOR_RADIUS, TAU, THETA_LABEL_RADIUS,
};
use crate::figure::style::{
    self, CIRCLE_COLOR, COS_COLOR, POINT_COLOR, RADIUS_COLOR, SECTOR_FILL_COLOR, SIN_COLOR,
    THETA_LABEL_COLOR,
};
use crate::figure::{
    Axis, FigureSpec, Font, Frame, Layout, Line, Margin, Marker, Panel, PanelAxes, PlaybackAction,
    PlaybackButton, PlaybackMenu, Slider, SliderStep, TextPosition, Theme, Trace,
};
use crate::geometry::{arc_points, unit_circle_outline};

/// One integer degree with its derived trigonometric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleSample {
    /// Degree in [0, 360]
    pub degree: u32,
    /// Radian measure of the degree
    pub radians: f64,
    pub cos: f64,
    pub sin: f64,
    /// Position on the curve panels' x axis (degrees or radians)
    pub axis_position: f64,
}

/// Derived samples for every integer degree 0..=360, ascending.
pub fn angle_samples(unit: AngleUnit) -> Vec<AngleSample> {
    (0..=MAX_DEGREE)
        .map(|degree| {
            let radians = degree as f64 * DEG2RAD;
            AngleSample {
                degree,
                radians,
                cos: radians.cos(),
                sin: radians.sin(),
                axis_position: unit.axis_position(degree as f64),
            }
        })
        .collect()
}

/// Build the complete animated circular-function figure.
///
/// The result holds 361 frames named `"0"` through `"360"`, a 25-stop
/// slider, and play/pause controls, ready for the rendering collaborator.
pub fn build_circular_function_figure(unit: AngleUnit, theme: Theme) -> FigureSpec {
    debug!("building circular-function figure: unit={unit}, theme={theme}");

    let samples = angle_samples(unit);
    let frames: Vec<Frame> = samples
        .iter()
        .map(|sample| build_frame(sample, &samples, unit))
        .collect();

    let initial = frames[0].data.clone();
    FigureSpec {
        layout: layout(unit, theme),
        data: initial,
        frames,
    }
}

/// Drawable snapshot for one degree.
fn build_frame(sample: &AngleSample, samples: &[AngleSample], unit: AngleUnit) -> Frame {
    let (circle_x, circle_y) = unit_circle_outline();
    let axis_positions: Vec<f64> = samples.iter().map(|s| s.axis_position).collect();
    let cos_values: Vec<f64> = samples.iter().map(|s| s.cos).collect();
    let sin_values: Vec<f64> = samples.iter().map(|s| s.sin).collect();

    let (arc_x, arc_y) = arc_points(SECTOR_RADIUS, 0.0, sample.radians, 1.0, 1.0);

    // Sector polygon: origin, arc, back to origin.
    let mut sector_x = Vec::with_capacity(arc_x.len() + 2);
    let mut sector_y = Vec::with_capacity(arc_y.len() + 2);
    sector_x.push(0.0);
    sector_x.extend_from_slice(&arc_x);
    sector_x.push(0.0);
    sector_y.push(0.0);
    sector_y.extend_from_slice(&arc_y);
    sector_y.push(0.0);

    // Theta label sits at half the current angle along a fixed radius.
    let half = sample.radians / 2.0;
    let label_x = THETA_LABEL_RADIUS * half.cos();
    let label_y = THETA_LABEL_RADIUS * half.sin();

    let data = vec![
        // Static unit-circle outline.
        Trace::lines(Panel::UnitCircle, circle_x, circle_y, Line::solid(CIRCLE_COLOR)),
        // Full cosine and sine curves; identical in every frame.
        Trace::lines(
            Panel::Cosine,
            axis_positions.clone(),
            cos_values,
            Line::solid(COS_COLOR),
        ),
        Trace::lines(Panel::Sine, axis_positions, sin_values, Line::solid(SIN_COLOR)),
        // Filled angle sector from 0 to the current angle.
        Trace::filled(Panel::UnitCircle, sector_x, sector_y, SECTOR_FILL_COLOR),
        // Radius from the origin to the current point.
        Trace::lines_markers(
            Panel::UnitCircle,
            vec![0.0, sample.cos],
            vec![0.0, sample.sin],
            Line::solid(RADIUS_COLOR),
        ),
        // Current point with its two-color coordinate label.
        Trace::labeled_marker(
            Panel::UnitCircle,
            sample.cos,
            sample.sin,
            Marker::new(POINT_COLOR, 8.0),
            style::coordinate_label(sample.cos, sample.sin),
            TextPosition::TopRight,
            Some(Font::sized(14.0)),
        )
        .skip_hover(),
        // Dashed arc outlining the sector.
        Trace::lines(Panel::UnitCircle, arc_x, arc_y, Line::dashed(RADIUS_COLOR)),
        // Moving theta label.
        Trace::text_label(
            Panel::UnitCircle,
            label_x,
            label_y,
            format_theta(sample.degree as f64, unit),
            Font::colored(14.0, THETA_LABEL_COLOR),
        ),
        // Markers tracking the current angle on each curve.
        Trace::labeled_marker(
            Panel::Cosine,
            sample.axis_position,
            sample.cos,
            Marker::new(COS_COLOR, 10.0),
            format!("{:.2}", sample.cos),
            TextPosition::TopCenter,
            None,
        ),
        Trace::labeled_marker(
            Panel::Sine,
            sample.axis_position,
            sample.sin,
            Marker::new(SIN_COLOR, 10.0),
            format!("{:.2}", sample.sin),
            TextPosition::TopCenter,
            None,
        ),
    ];

    Frame {
        name: sample.degree.to_string(),
        data,
    }
}

/// Three-panel layout with unit-dependent curve axes and playback controls.
fn layout(unit: AngleUnit, theme: Theme) -> Layout {
    let axis_title = match unit {
        AngleUnit::Degrees => "θ (degrees)",
        AngleUnit::Radians => "θ (radians)",
    };
    // Extend slightly past 360° so the final frame's marker is not clipped.
    let x_range = match unit {
        AngleUnit::Degrees => [0.0, 385.0],
        AngleUnit::Radians => [0.0, 1.05 * TAU],
    };
    let (tick_values, tick_labels) = angle::axis_ticks(unit);

    let curve_x_axis = Axis {
        title: Some(axis_title.to_string()),
        range: Some(x_range),
        domain: Some([0.65, 1.0]),
        tick_values: Some(tick_values),
        tick_labels: Some(tick_labels),
        tick_angle: Some(-45.0),
        title_standoff: Some(20.0),
        ..Axis::default()
    };

    Layout {
        title: None,
        template: theme.template().to_string(),
        width: 1200,
        height: 750,
        margin: Margin {
            top: 100.0,
            bottom: 80.0,
        },
        panels: vec![
            PanelAxes {
                panel: Panel::UnitCircle,
                title: Some("Unit Circle".to_string()),
                x: Axis {
                    domain: Some([0.0, 0.55]),
                    range: Some([-1.5, 1.5]),
                    scale_anchor: true,
                    ..Axis::default()
                },
                y: Axis {
                    domain: Some([0.0, 1.0]),
                    range: Some([-1.5, 1.5]),
                    ..Axis::default()
                },
            },
            PanelAxes {
                panel: Panel::Cosine,
                title: Some("cos(θ)".to_string()),
                x: curve_x_axis.clone(),
                y: Axis {
                    domain: Some([0.6, 1.0]),
                    range: Some([-1.3, 1.3]),
                    ..Axis::default()
                },
            },
            PanelAxes {
                panel: Panel::Sine,
                title: Some("sin(θ)".to_string()),
                x: curve_x_axis,
                y: Axis {
                    domain: Some([0.0, 0.35]),
                    range: Some([-1.3, 1.3]),
                    ..Axis::default()
                },
            },
        ],
        shapes: Vec::new(),
        sliders: vec![slider(unit)],
        playback: Some(playback()),
    }
}

/// 25-stop slider: every 15 degrees, instant jump to the named frame.
fn slider(unit: AngleUnit) -> Slider {
    let steps = angle::slider_stops(unit)
        .into_iter()
        .map(|(degree, label)| SliderStep {
            label,
            frame: degree.to_string(),
            frame_duration_ms: 0,
        })
        .collect();
    Slider {
        steps,
        x: 0.05,
        y: -0.07,
        length: 0.9,
    }
}

fn playback() -> PlaybackMenu {
    PlaybackMenu {
        buttons: vec![
            PlaybackButton {
                label: "Play".to_string(),
                action: PlaybackAction::Play {
                    frame_duration_ms: FRAME_DURATION_MS,
                    from_current: true,
                },
            },
            PlaybackButton {
                label: "Pause".to_string(),
                action: PlaybackAction::Pause,
            },
        ],
        x: 0.03,
        y: -0.08,
    }
}
