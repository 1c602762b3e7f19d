//! Trig-connection composer
//!
//! Builds the static figure connecting right-triangle trigonometry to the
//! unit circle: a chosen acute angle θ in the first quadrant, optionally
//! reflected into the other quadrants, with reference-angle and
//! standard-angle arcs, leg labels, connectors between mirrored points, and
//! tick marks around the circle boundary.
//!
//! Quadrant behavior is table-driven: each quadrant carries its sign pair,
//! standard-angle formula, arc-radius multiplier, and label color, and the
//! builder iterates the table uniformly.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::angle::{format_angle, parse_angle_degrees, AngleUnit};
use crate::constants::{
    DEG2RAD, QUADRANT_EXTENT, REFERENCE_ARC_SHRINK, TICK_LABEL_RADIUS, TICK_RADIUS_INNER,
    TICK_RADIUS_OUTER,
};
use crate::figure::style::{
    self, CIRCLE_COLOR, CONNECTOR_COLOR, COS_COLOR, HYPOTENUSE_COLOR, OVERLAY_COLOR, POINT_COLOR,
    REFERENCE_ARC_COLOR, SIN_COLOR, TICK_COLOR,
};
use crate::figure::{
    Axis, FigureSpec, Font, Layout, Line, Margin, Marker, Panel, PanelAxes, RectShape,
    TextPosition, Theme, Trace,
};
use crate::geometry::{arc_points, unit_circle_outline};
use crate::{Result, TrigvizError};

/// Quadrant of the plane, with Q1 always drawn and Q2-Q4 selectable
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Quadrant {
    Q1,
    Q2,
    Q3,
    Q4,
}

/// Per-quadrant drawing parameters, iterated uniformly by the builder
struct QuadrantSpec {
    sign_x: f64,
    sign_y: f64,
    /// Standard angle = offset + sweep_sign * theta (degrees)
    sweep_offset_deg: f64,
    sweep_sign: f64,
    /// Multiplier separating overlapping standard-angle arcs
    arc_radius_factor: f64,
    /// Label color for the standard angle
    arc_color: &'static str,
}

const QUADRANT_TABLE: [QuadrantSpec; 4] = [
    QuadrantSpec {
        sign_x: 1.0,
        sign_y: 1.0,
        sweep_offset_deg: 0.0,
        sweep_sign: 1.0,
        arc_radius_factor: 1.0,
        arc_color: "green",
    },
    QuadrantSpec {
        sign_x: -1.0,
        sign_y: 1.0,
        sweep_offset_deg: 180.0,
        sweep_sign: -1.0,
        arc_radius_factor: 1.1,
        arc_color: "#000080",
    },
    QuadrantSpec {
        sign_x: -1.0,
        sign_y: -1.0,
        sweep_offset_deg: 180.0,
        sweep_sign: 1.0,
        arc_radius_factor: 1.3,
        arc_color: "#9932CC",
    },
    QuadrantSpec {
        sign_x: 1.0,
        sign_y: -1.0,
        sweep_offset_deg: 360.0,
        sweep_sign: -1.0,
        arc_radius_factor: 1.5,
        arc_color: "#DC143C",
    },
];

impl Quadrant {
    /// All quadrants in drawing order.
    pub const ALL: [Quadrant; 4] = [Quadrant::Q1, Quadrant::Q2, Quadrant::Q3, Quadrant::Q4];

    fn spec(self) -> &'static QuadrantSpec {
        &QUADRANT_TABLE[self as usize]
    }

    /// Sign pair applied to (cos θ, sin θ) for this quadrant.
    pub fn signs(self) -> (f64, f64) {
        let spec = self.spec();
        (spec.sign_x, spec.sign_y)
    }

    /// Standard angle (measured from the positive x axis) in degrees for a
    /// reference angle `theta_deg`: θ, 180°−θ, 180°+θ, or 360°−θ.
    pub fn standard_angle_deg(self, theta_deg: f64) -> f64 {
        let spec = self.spec();
        spec.sweep_offset_deg + spec.sweep_sign * theta_deg
    }

    /// Radius multiplier for this quadrant's standard-angle arc.
    pub fn arc_radius_factor(self) -> f64 {
        self.spec().arc_radius_factor
    }

    /// Label color for this quadrant's standard-angle arc.
    pub fn arc_color(self) -> &'static str {
        self.spec().arc_color
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{}", *self as usize + 1)
    }
}

impl FromStr for Quadrant {
    type Err = TrigvizError;

    /// Parse a symmetry selection token. Only Q2-Q4 are selectable; Q1 is
    /// implicit and always drawn, so it is rejected here like any unknown
    /// token.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Q2" => Ok(Quadrant::Q2),
            "Q3" => Ok(Quadrant::Q3),
            "Q4" => Ok(Quadrant::Q4),
            other => Err(TrigvizError::UnknownQuadrant(other.to_string())),
        }
    }
}

/// Parse UI symmetry tokens into a validated quadrant set.
pub fn parse_symmetry_selection<S: AsRef<str>>(tokens: &[S]) -> Result<BTreeSet<Quadrant>> {
    tokens.iter().map(|t| t.as_ref().parse()).collect()
}

/// Build the static trig-connection figure.
///
/// `angle` is the acute angle in degrees as delivered by the UI slider, a
/// numeric string in [0, 90]. `active` selects the symmetric quadrants to
/// reflect into; Q1 is always drawn and must not appear in the set.
pub fn build_trig_connection_figure(
    unit: AngleUnit,
    active: &BTreeSet<Quadrant>,
    angle: &str,
) -> Result<FigureSpec> {
    let theta_deg = parse_angle_degrees(angle)?;
    if !(0.0..=90.0).contains(&theta_deg) {
        return Err(TrigvizError::AngleOutOfRange(theta_deg));
    }
    if active.contains(&Quadrant::Q1) {
        return Err(TrigvizError::UnknownQuadrant("Q1".to_string()));
    }
    debug!("building trig-connection figure: unit={unit}, theta={theta_deg}°, quadrants={active:?}");

    let theta_rad = theta_deg * DEG2RAD;
    let (x, y) = (theta_rad.cos(), theta_rad.sin());
    // The reference arc shrinks with the adjacent leg; zero at θ = 90°.
    let arc_radius = REFERENCE_ARC_SHRINK * x;

    let mut traces = Vec::new();

    let (circle_x, circle_y) = unit_circle_outline();
    traces.push(Trace::lines(
        Panel::UnitCircle,
        circle_x,
        circle_y,
        Line::solid(CIRCLE_COLOR),
    ));

    for quadrant in Quadrant::ALL {
        if quadrant == Quadrant::Q1 || active.contains(&quadrant) {
            draw_triangle(&mut traces, quadrant, theta_deg, theta_rad, x, y, arc_radius, unit);
        }
    }

    draw_connectors(&mut traces, active, x, y);
    draw_boundary_ticks(&mut traces, unit);

    Ok(FigureSpec {
        layout: layout(active),
        data: traces,
        frames: Vec::new(),
    })
}

/// Reflected point of the current angle in a quadrant.
fn reflected_point(quadrant: Quadrant, x: f64, y: f64) -> (f64, f64) {
    let (sx, sy) = quadrant.signs();
    (sx * x, sy * y)
}

/// All triangle traces for one quadrant: legs, hypotenuse, point marker,
/// reference arc, standard-angle arc, and labels.
#[allow(clippy::too_many_arguments)]
fn draw_triangle(
    traces: &mut Vec<Trace>,
    quadrant: Quadrant,
    theta_deg: f64,
    theta_rad: f64,
    x: f64,
    y: f64,
    arc_radius: f64,
    unit: AngleUnit,
) {
    let (sx, sy) = quadrant.signs();
    let (px, py) = reflected_point(quadrant, x, y);

    // Hypotenuse (the radius), then the two dotted legs.
    traces.push(Trace::lines(
        Panel::UnitCircle,
        vec![0.0, px],
        vec![0.0, py],
        Line::solid(HYPOTENUSE_COLOR).width(2.0),
    ));
    traces.push(Trace::lines(
        Panel::UnitCircle,
        vec![0.0, px],
        vec![0.0, 0.0],
        Line::dotted(COS_COLOR).width(3.0),
    ));
    traces.push(Trace::lines(
        Panel::UnitCircle,
        vec![px, px],
        vec![0.0, py],
        Line::dotted(SIN_COLOR).width(3.0),
    ));

    // Point marker with two-color coordinate label.
    traces.push(
        Trace::labeled_marker(
            Panel::UnitCircle,
            px,
            py,
            Marker::new(POINT_COLOR, 7.0),
            style::coordinate_label(px, py),
            TextPosition::TopRight,
            Some(Font::sized(12.0)),
        )
        .skip_hover(),
    );

    // Dashed reference-angle arc, reflected into the quadrant.
    let (ref_arc_x, ref_arc_y) = arc_points(arc_radius, 0.0, theta_rad, sx, sy);
    traces.push(Trace::lines(
        Panel::UnitCircle,
        ref_arc_x,
        ref_arc_y,
        Line::dotted(REFERENCE_ARC_COLOR),
    ));

    // Reflected quadrants carry their own θ label inside the triangle.
    if quadrant != Quadrant::Q1 {
        let half = theta_rad / 2.0;
        traces.push(Trace::text_label(
            Panel::UnitCircle,
            arc_radius * 0.75 * half.cos() * sx,
            arc_radius * 0.75 * half.sin() * sy,
            format_angle(theta_deg, unit),
            Font::colored(10.0, REFERENCE_ARC_COLOR),
        ));
    }

    // Standard-angle arc from the positive x axis, at the quadrant's radius
    // multiplier so overlapping arcs stay distinguishable.
    let standard_deg = quadrant.standard_angle_deg(theta_deg);
    let standard_rad = standard_deg * DEG2RAD;
    let radius = arc_radius * quadrant.arc_radius_factor();
    let (std_arc_x, std_arc_y) = arc_points(radius, 0.0, standard_rad, 1.0, 1.0);
    traces.push(Trace::lines(
        Panel::UnitCircle,
        std_arc_x,
        std_arc_y,
        Line::dotted(quadrant.arc_color()),
    ));

    // Standard-angle label just outside the arc, offset back from its
    // terminal end by half the reference angle.
    let label_angle = standard_rad - theta_rad / 2.0;
    traces.push(Trace::text_label(
        Panel::UnitCircle,
        radius * 1.2 * label_angle.cos(),
        radius * 1.2 * label_angle.sin(),
        style::colored(&format_angle(standard_deg, unit), quadrant.arc_color()),
        Font::sized(14.0),
    ));

    // Q1 carries the pedagogical side labels: adjacent, opposite, and the
    // unit hypotenuse.
    if quadrant == Quadrant::Q1 {
        traces.push(Trace::text_label(
            Panel::UnitCircle,
            px / 2.0,
            -0.05 * sy,
            style::colored(&format!("A = {:.2}", x.abs()), COS_COLOR),
            Font::sized(13.0),
        ));
        traces.push(Trace::text_label(
            Panel::UnitCircle,
            px + 0.05 * sx,
            py / 2.0,
            style::colored(&format!("O = {:.2}", y.abs()), SIN_COLOR),
            Font::sized(13.0),
        ));
        traces.push(Trace::text_label(
            Panel::UnitCircle,
            px / 2.0 - 0.05 * sx,
            py / 2.0 + 0.05 * sy,
            "1".to_string(),
            Font::sized(13.0),
        ));
    }
}

/// Dashed horizontal connectors between mirrored points: Q2 to Q1 when Q2 is
/// active, Q3 to Q4 when both are active.
fn draw_connectors(traces: &mut Vec<Trace>, active: &BTreeSet<Quadrant>, x: f64, y: f64) {
    if active.contains(&Quadrant::Q2) {
        let (x1, y1) = reflected_point(Quadrant::Q2, x, y);
        let (x2, y2) = reflected_point(Quadrant::Q1, x, y);
        traces.push(Trace::lines(
            Panel::UnitCircle,
            vec![x1, x2],
            vec![y1, y2],
            Line::dashed(CONNECTOR_COLOR),
        ));
    }
    if active.contains(&Quadrant::Q3) && active.contains(&Quadrant::Q4) {
        let (x1, y1) = reflected_point(Quadrant::Q3, x, y);
        let (x2, y2) = reflected_point(Quadrant::Q4, x, y);
        traces.push(Trace::lines(
            Panel::UnitCircle,
            vec![x1, x2],
            vec![y1, y2],
            Line::dashed(CONNECTOR_COLOR),
        ));
    }
}

/// Degrees that get a boundary tick: multiples of 30° or 45°, deduplicated
/// and ascending.
pub fn boundary_tick_degrees() -> Vec<u32> {
    let mut degrees: BTreeSet<u32> = (0..=360).step_by(30).collect();
    degrees.extend((0..=360).step_by(45));
    degrees.into_iter().collect()
}

/// Short radial tick marks and outward labels around the circle.
fn draw_boundary_ticks(traces: &mut Vec<Trace>, unit: AngleUnit) {
    for deg in boundary_tick_degrees() {
        let rad = deg as f64 * DEG2RAD;
        let (cos, sin) = (rad.cos(), rad.sin());

        traces.push(
            Trace::lines(
                Panel::UnitCircle,
                vec![TICK_RADIUS_INNER * cos, TICK_RADIUS_OUTER * cos],
                vec![TICK_RADIUS_INNER * sin, TICK_RADIUS_OUTER * sin],
                Line::solid(TICK_COLOR).width(1.0),
            )
            .skip_hover(),
        );
        traces.push(
            Trace::text_label(
                Panel::UnitCircle,
                TICK_LABEL_RADIUS * cos,
                TICK_LABEL_RADIUS * sin,
                format_angle(deg as f64, unit),
                Font::sized(10.0),
            )
            .skip_hover(),
        );
    }
}

/// Single square panel with gray overlays covering unselected quadrants.
fn layout(active: &BTreeSet<Quadrant>) -> Layout {
    let e = QUADRANT_EXTENT;
    let overlay = |x0: f64, y0: f64, x1: f64, y1: f64| RectShape {
        x0,
        y0,
        x1,
        y1,
        fill_color: OVERLAY_COLOR.to_string(),
        opacity: 0.3,
        line_width: 0.0,
    };

    let mut shapes = Vec::new();
    if !active.contains(&Quadrant::Q2) {
        shapes.push(overlay(-e, 0.0, 0.0, e));
    }
    if !active.contains(&Quadrant::Q3) {
        shapes.push(overlay(-e, -e, 0.0, 0.0));
    }
    if !active.contains(&Quadrant::Q4) {
        shapes.push(overlay(0.0, -e, e, 0.0));
    }

    let axis = Axis {
        range: Some([-e, e]),
        zero_line: true,
        hide_grid: true,
        ..Axis::default()
    };

    Layout {
        title: Some("Trigonometric Triangles in All Quadrants".to_string()),
        template: Theme::Light.template().to_string(),
        width: 800,
        height: 700,
        margin: Margin {
            top: 40.0,
            bottom: 10.0,
        },
        panels: vec![PanelAxes {
            panel: Panel::UnitCircle,
            title: None,
            x: Axis {
                scale_anchor: true,
                ..axis.clone()
            },
            y: axis,
        }],
        shapes,
        sliders: Vec::new(),
        playback: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn quadrants(list: &[Quadrant]) -> BTreeSet<Quadrant> {
        list.iter().copied().collect()
    }

    /// Coordinates of every point-marker trace in the figure.
    fn marker_points(figure: &FigureSpec) -> Vec<(f64, f64)> {
        figure
            .data
            .iter()
            .filter(|t| matches!(t.mode, crate::figure::TraceMode::MarkersText))
            .map(|t| (t.x[0], t.y[0]))
            .collect()
    }

    #[rstest]
    #[case(Quadrant::Q1, 30.0, 30.0)]
    #[case(Quadrant::Q2, 30.0, 150.0)]
    #[case(Quadrant::Q3, 30.0, 210.0)]
    #[case(Quadrant::Q4, 30.0, 330.0)]
    fn test_standard_angles(
        #[case] quadrant: Quadrant,
        #[case] theta: f64,
        #[case] expected: f64,
    ) {
        assert_relative_eq!(quadrant.standard_angle_deg(theta), expected);
    }

    #[test]
    fn test_quadrant_table() {
        assert_eq!(Quadrant::Q1.signs(), (1.0, 1.0));
        assert_eq!(Quadrant::Q2.signs(), (-1.0, 1.0));
        assert_eq!(Quadrant::Q3.signs(), (-1.0, -1.0));
        assert_eq!(Quadrant::Q4.signs(), (1.0, -1.0));
        assert_relative_eq!(Quadrant::Q1.arc_radius_factor(), 1.0);
        assert_relative_eq!(Quadrant::Q4.arc_radius_factor(), 1.5);
        assert_eq!(Quadrant::Q2.arc_color(), "#000080");
    }

    #[test]
    fn test_selection_parsing() {
        let set = parse_symmetry_selection(&["Q2", "Q4"]).unwrap();
        assert_eq!(set, quadrants(&[Quadrant::Q2, Quadrant::Q4]));
        assert!(parse_symmetry_selection(&["Q1"]).is_err());
        assert!(parse_symmetry_selection(&["Q5"]).is_err());
        assert!(parse_symmetry_selection(&["q2"]).is_err());
    }

    #[test]
    fn test_single_triangle_no_symmetry() {
        let figure =
            build_trig_connection_figure(AngleUnit::Degrees, &BTreeSet::new(), "30").unwrap();
        let points = marker_points(&figure);
        assert_eq!(points.len(), 1);
        assert_relative_eq!(points[0].0, 0.8660254, epsilon = 1e-6);
        assert_relative_eq!(points[0].1, 0.5, epsilon = 1e-12);
        // All three non-Q1 quadrants are grayed out.
        assert_eq!(figure.layout.shapes.len(), 3);
    }

    #[test]
    fn test_all_quadrants_at_45() {
        let active = quadrants(&[Quadrant::Q2, Quadrant::Q3, Quadrant::Q4]);
        let figure = build_trig_connection_figure(AngleUnit::Degrees, &active, "45").unwrap();

        let points = marker_points(&figure);
        assert_eq!(points.len(), 4);
        let half_sqrt2 = std::f64::consts::FRAC_1_SQRT_2;
        for (px, py) in &points {
            assert_relative_eq!(px.abs(), half_sqrt2, epsilon = 1e-9);
            assert_relative_eq!(py.abs(), half_sqrt2, epsilon = 1e-9);
        }
        // All sign combinations present.
        for (sx, sy) in [(1.0, 1.0), (-1.0, 1.0), (-1.0, -1.0), (1.0, -1.0)] {
            assert!(points
                .iter()
                .any(|(px, py)| px.signum() == sx && py.signum() == sy));
        }

        // No overlays, both connectors present.
        assert!(figure.layout.shapes.is_empty());
        let connectors: Vec<&Trace> = figure
            .data
            .iter()
            .filter(|t| {
                t.line
                    .as_ref()
                    .map_or(false, |l| l.dash == Some(crate::figure::DashStyle::Dash))
            })
            .collect();
        assert_eq!(connectors.len(), 2);
        // Q2-Q1 connector is horizontal at y = sin 45°.
        assert_relative_eq!(connectors[0].y[0], half_sqrt2, epsilon = 1e-9);
        assert_relative_eq!(connectors[0].y[1], half_sqrt2, epsilon = 1e-9);
        // Q3-Q4 connector is horizontal at y = -sin 45°.
        assert_relative_eq!(connectors[1].y[0], -half_sqrt2, epsilon = 1e-9);
        assert_relative_eq!(connectors[1].y[1], -half_sqrt2, epsilon = 1e-9);
    }

    #[test]
    fn test_connector_needs_both_q3_and_q4() {
        let active = quadrants(&[Quadrant::Q3]);
        let figure = build_trig_connection_figure(AngleUnit::Degrees, &active, "30").unwrap();
        let dashed = figure
            .data
            .iter()
            .filter(|t| {
                t.line
                    .as_ref()
                    .map_or(false, |l| l.dash == Some(crate::figure::DashStyle::Dash))
            })
            .count();
        assert_eq!(dashed, 0);
    }

    #[test]
    fn test_degenerate_90_degrees() {
        let figure =
            build_trig_connection_figure(AngleUnit::Degrees, &BTreeSet::new(), "90").unwrap();
        let points = marker_points(&figure);
        assert_relative_eq!(points[0].0, 0.0, epsilon = 1e-12);
        assert_relative_eq!(points[0].1, 1.0, epsilon = 1e-12);
        // Leg labels still render, showing zero length.
        let labels: Vec<&str> = figure
            .data
            .iter()
            .filter_map(|t| t.text.as_ref())
            .flatten()
            .map(String::as_str)
            .collect();
        assert!(labels.iter().any(|l| l.contains("A = 0.00")));
        assert!(labels.iter().any(|l| l.contains("O = 1.00")));
        // Arc radius collapsed to zero: every reference-arc sample is at the
        // origin, no numeric hazard.
        assert!(figure.data.iter().all(|t| t
            .x
            .iter()
            .chain(&t.y)
            .all(|v| v.is_finite())));
    }

    #[test]
    fn test_degenerate_0_degrees() {
        let figure =
            build_trig_connection_figure(AngleUnit::Degrees, &BTreeSet::new(), "0").unwrap();
        let points = marker_points(&figure);
        assert_relative_eq!(points[0].0, 1.0, epsilon = 1e-12);
        assert_relative_eq!(points[0].1, 0.0, epsilon = 1e-12);
        let labels: Vec<&str> = figure
            .data
            .iter()
            .filter_map(|t| t.text.as_ref())
            .flatten()
            .map(String::as_str)
            .collect();
        assert!(labels.iter().any(|l| l.contains("A = 1.00")));
        assert!(labels.iter().any(|l| l.contains("O = 0.00")));
    }

    #[test]
    fn test_boundary_ticks() {
        let degrees = boundary_tick_degrees();
        // Union of multiples of 30 and 45, deduplicated and sorted.
        assert_eq!(
            degrees,
            vec![0, 30, 45, 60, 90, 120, 135, 150, 180, 210, 225, 240, 270, 300, 315, 330, 360]
        );
        assert!(degrees.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_radian_tick_labels() {
        let figure =
            build_trig_connection_figure(AngleUnit::Radians, &BTreeSet::new(), "30").unwrap();
        let labels: Vec<&str> = figure
            .data
            .iter()
            .filter_map(|t| t.text.as_ref())
            .flatten()
            .map(String::as_str)
            .collect();
        assert!(labels.contains(&"π/6"));
        assert!(labels.contains(&"π/4"));
        assert!(labels.contains(&"π"));
        // 360° keeps its own wrap-around label, distinct from 0.
        assert!(labels.contains(&"2π"));
        assert!(labels.contains(&"0"));
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let empty = BTreeSet::new();
        assert!(matches!(
            build_trig_connection_figure(AngleUnit::Degrees, &empty, "ninety"),
            Err(TrigvizError::InvalidAngle(_))
        ));
        assert!(matches!(
            build_trig_connection_figure(AngleUnit::Degrees, &empty, "120"),
            Err(TrigvizError::AngleOutOfRange(_))
        ));
        assert!(matches!(
            build_trig_connection_figure(AngleUnit::Degrees, &empty, "-5"),
            Err(TrigvizError::AngleOutOfRange(_))
        ));
        let with_q1 = quadrants(&[Quadrant::Q1]);
        assert!(matches!(
            build_trig_connection_figure(AngleUnit::Degrees, &with_q1, "30"),
            Err(TrigvizError::UnknownQuadrant(_))
        ));
    }

    #[test]
    fn test_idempotent_output() {
        let active = quadrants(&[Quadrant::Q2]);
        let a = build_trig_connection_figure(AngleUnit::Radians, &active, "60").unwrap();
        let b = build_trig_connection_figure(AngleUnit::Radians, &active, "60").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_json().unwrap(), b.to_json().unwrap());
    }
}
