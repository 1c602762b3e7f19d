//! Declarative figure model
//!
//! A [`FigureSpec`] is the complete output of a builder: layout metadata,
//! the initial drawable set, and (for animated figures) an ordered list of
//! named frames plus slider and playback control specs. Everything here is
//! plain serializable data with no dependency on a rendering library; the
//! external collaborator interprets it.

pub mod style;
pub mod trace;

use serde::{Deserialize, Serialize};

pub use style::Theme;
pub use trace::{DashStyle, Fill, Font, Line, Marker, TextPosition, Trace, TraceMode};

/// Target panel for a trace within a figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Panel {
    /// The large unit-circle panel
    UnitCircle,
    /// The cosine-vs-angle curve panel
    Cosine,
    /// The sine-vs-angle curve panel
    Sine,
}

/// Axis configuration for one direction of a panel
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Axis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Visible range [min, max]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
    /// Fraction of the figure this axis spans [start, end]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<[f64; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tick_values: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tick_labels: Option<Vec<String>>,
    /// Tick label rotation in degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tick_angle: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_standoff: Option<f64>,
    /// Lock this axis' scale to its partner so circles stay round
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub scale_anchor: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub zero_line: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub hide_grid: bool,
}

/// Paired axes and title for one panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelAxes {
    pub panel: Panel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub x: Axis,
    pub y: Axis,
}

/// Figure margins in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub bottom: f64,
}

/// Axis-aligned rectangle drawn behind the traces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectShape {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub fill_color: String,
    pub opacity: f64,
    pub line_width: f64,
}

/// One labeled stop on the frame slider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderStep {
    pub label: String,
    /// Name of the frame this stop jumps to
    pub frame: String,
    /// Redraw duration for the jump; zero means instant
    pub frame_duration_ms: u64,
}

/// Slider control bound to the figure's frames
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slider {
    pub steps: Vec<SliderStep>,
    pub x: f64,
    pub y: f64,
    pub length: f64,
}

/// What a playback button does when pressed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PlaybackAction {
    /// Advance through all frames at a fixed per-frame duration,
    /// continuing from the current position
    Play {
        frame_duration_ms: u64,
        from_current: bool,
    },
    /// Halt advancement without resetting position
    Pause,
}

/// A single playback button
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackButton {
    pub label: String,
    pub action: PlaybackAction,
}

/// Play/pause button group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackMenu {
    pub buttons: Vec<PlaybackButton>,
    pub x: f64,
    pub y: f64,
}

/// Layout metadata for a whole figure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Renderer template name selected by the [`Theme`]
    pub template: String,
    pub width: u32,
    pub height: u32,
    pub margin: Margin,
    pub panels: Vec<PanelAxes>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shapes: Vec<RectShape>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sliders: Vec<Slider>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playback: Option<PlaybackMenu>,
}

/// One named, self-contained drawable snapshot of an animation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub name: String,
    pub data: Vec<Trace>,
}

/// Complete declarative figure description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureSpec {
    pub layout: Layout,
    /// Initial drawable set shown before any interaction
    pub data: Vec<Trace>,
    /// Ordered animation frames; empty for static figures
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub frames: Vec<Frame>,
}

impl FigureSpec {
    /// Serialize the figure for the rendering collaborator.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serialize the figure with human-readable indentation.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
