//! Drawable trace primitives
//!
//! A [`Trace`] is one drawable element of a figure: a polyline, a filled
//! region, a marker, or a text label, bound to one panel. Traces are plain
//! data; styling is carried alongside the coordinates and interpreted by the
//! rendering collaborator.

use serde::{Deserialize, Serialize};

use super::Panel;

/// How a trace's points are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraceMode {
    #[serde(rename = "lines")]
    Lines,
    #[serde(rename = "lines+markers")]
    LinesMarkers,
    #[serde(rename = "markers")]
    Markers,
    #[serde(rename = "markers+text")]
    MarkersText,
    #[serde(rename = "text")]
    Text,
}

/// Stroke pattern for line traces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashStyle {
    Dash,
    Dot,
}

/// Line styling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dash: Option<DashStyle>,
}

impl Line {
    /// Solid line in the given color.
    pub fn solid(color: &str) -> Self {
        Line {
            color: color.to_string(),
            width: None,
            dash: None,
        }
    }

    /// Dashed line in the given color.
    pub fn dashed(color: &str) -> Self {
        Line {
            dash: Some(DashStyle::Dash),
            ..Line::solid(color)
        }
    }

    /// Dotted line in the given color.
    pub fn dotted(color: &str) -> Self {
        Line {
            dash: Some(DashStyle::Dot),
            ..Line::solid(color)
        }
    }

    /// Set the stroke width.
    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }
}

/// Marker styling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub color: String,
    pub size: f64,
}

impl Marker {
    pub fn new(color: &str, size: f64) -> Self {
        Marker {
            color: color.to_string(),
            size,
        }
    }
}

/// Text font styling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub size: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Font {
    pub fn sized(size: f64) -> Self {
        Font { size, color: None }
    }

    pub fn colored(size: f64, color: &str) -> Self {
        Font {
            size,
            color: Some(color.to_string()),
        }
    }
}

/// Placement of text relative to its anchor point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextPosition {
    #[serde(rename = "top right")]
    TopRight,
    #[serde(rename = "top center")]
    TopCenter,
    #[serde(rename = "middle right")]
    MiddleRight,
}

/// Region fill for closed traces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fill {
    /// Fill color (may carry alpha)
    pub color: String,
}

/// One drawable element of a figure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    /// Panel this trace belongs to
    pub panel: Panel,
    pub mode: TraceMode,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    /// Close the trace and fill its interior
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<Fill>,
    /// One text entry per point
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_position: Option<TextPosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_font: Option<Font>,
    /// Suppress hover feedback for purely decorative traces
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub hover_skip: bool,
}

impl Trace {
    /// Line trace through the given points.
    pub fn lines(panel: Panel, x: Vec<f64>, y: Vec<f64>, line: Line) -> Self {
        Trace {
            panel,
            mode: TraceMode::Lines,
            x,
            y,
            line: Some(line),
            marker: None,
            fill: None,
            text: None,
            text_position: None,
            text_font: None,
            hover_skip: false,
        }
    }

    /// Line trace with markers at each point.
    pub fn lines_markers(panel: Panel, x: Vec<f64>, y: Vec<f64>, line: Line) -> Self {
        Trace {
            mode: TraceMode::LinesMarkers,
            ..Trace::lines(panel, x, y, line)
        }
    }

    /// Closed, filled region bounded by the given points.
    pub fn filled(panel: Panel, x: Vec<f64>, y: Vec<f64>, fill_color: &str) -> Self {
        Trace {
            fill: Some(Fill {
                color: fill_color.to_string(),
            }),
            ..Trace::lines(panel, x, y, Line::solid(super::style::TRANSPARENT))
        }
    }

    /// Single marker with an attached text label.
    pub fn labeled_marker(
        panel: Panel,
        x: f64,
        y: f64,
        marker: Marker,
        label: String,
        position: TextPosition,
        font: Option<Font>,
    ) -> Self {
        Trace {
            panel,
            mode: TraceMode::MarkersText,
            x: vec![x],
            y: vec![y],
            line: None,
            marker: Some(marker),
            fill: None,
            text: Some(vec![label]),
            text_position: Some(position),
            text_font: font,
            hover_skip: false,
        }
    }

    /// Free-standing text label at a single point.
    pub fn text_label(panel: Panel, x: f64, y: f64, label: String, font: Font) -> Self {
        Trace {
            panel,
            mode: TraceMode::Text,
            x: vec![x],
            y: vec![y],
            line: None,
            marker: None,
            fill: None,
            text: Some(vec![label]),
            text_position: None,
            text_font: Some(font),
            hover_skip: false,
        }
    }

    /// Mark this trace as hover-inert.
    pub fn skip_hover(mut self) -> Self {
        self.hover_skip = true;
        self
    }
}
