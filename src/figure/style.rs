//! Color themes and shared styling helpers

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Result, TrigvizError};

/// Color theme applied to a figure's layout template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light background template
    #[default]
    Light,
    /// Dark background template
    Dark,
}

impl Theme {
    /// Template name understood by the rendering collaborator.
    pub fn template(&self) -> &'static str {
        match self {
            Theme::Light => "plotly_white",
            Theme::Dark => "plotly_dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = TrigvizError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(TrigvizError::UnknownTheme(other.to_string())),
        }
    }
}

// Trace colors shared by both figures. Cosine values and the horizontal leg
// are always blue; sine values and the vertical leg are always red.
pub const CIRCLE_COLOR: &str = "black";
pub const COS_COLOR: &str = "blue";
pub const SIN_COLOR: &str = "red";
pub const RADIUS_COLOR: &str = "green";
pub const SECTOR_FILL_COLOR: &str = "rgba(0,100,255,0.2)";
pub const TRANSPARENT: &str = "rgba(0,0,0,0)";
pub const THETA_LABEL_COLOR: &str = "darkblue";
pub const POINT_COLOR: &str = "black";
pub const HYPOTENUSE_COLOR: &str = "gray";
pub const REFERENCE_ARC_COLOR: &str = "green";
pub const CONNECTOR_COLOR: &str = "black";
pub const OVERLAY_COLOR: &str = "gray";
pub const TICK_COLOR: &str = "gray";

/// Wrap text in an inline color span for the renderer's rich-text labels.
pub fn colored(text: &str, color: &str) -> String {
    format!("<span style='color:{}'>{}</span>", color, text)
}

/// Two-color coordinate label for a point on the circle: the x value in the
/// cosine color, the y value in the sine color, both to two decimals.
pub fn coordinate_label(x: f64, y: f64) -> String {
    format!(
        "({}, {})",
        colored(&format!("{:.2}", x), COS_COLOR),
        colored(&format!("{:.2}", y), SIN_COLOR)
    )
}
