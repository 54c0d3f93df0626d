//! Plotly-compatible figure description.
//!
//! The frontend hands this JSON straight to `Plotly.react`, so field names
//! follow Plotly's attribute names rather than Rust conventions.

use serde::{Deserialize, Serialize};

pub const FIGURE_WIDTH: u32 = 1000;
pub const FIGURE_HEIGHT: u32 = 675;
pub const CONTOUR_DX: f64 = 10.0;
pub const COLORBAR_FONT_SIZE: u32 = 14;
pub const COLORBAR_FONT_FAMILY: &str = "Arial, sans-serif";
pub const SEQUENTIAL_SCALE: &str = "Oranges";

/// Named Plotly scale or explicit `[fraction, color]` stops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorScale {
    Named(String),
    Stops(Vec<(f64, String)>),
}

impl ColorScale {
    pub fn sequential() -> Self {
        ColorScale::Named(SEQUENTIAL_SCALE.to_string())
    }

    /// Red to blue with white at `midpoint`.
    pub fn diverging(midpoint: f64) -> Self {
        ColorScale::Stops(vec![
            (0.0, "red".to_string()),
            (midpoint, "white".to_string()),
            (1.0, "blue".to_string()),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contours {
    pub start: f64,
    pub end: f64,
    /// Omitted to let the renderer choose spacing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub size: u32,
    pub family: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorBarTitle {
    pub text: String,
    pub side: String,
    pub font: Font,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorBar {
    pub title: ColorBarTitle,
}

impl ColorBar {
    pub fn titled(unit: &str) -> Self {
        ColorBar {
            title: ColorBarTitle {
                text: unit.to_string(),
                side: "top".to_string(),
                font: Font {
                    size: COLORBAR_FONT_SIZE,
                    family: COLORBAR_FONT_FAMILY.to_string(),
                },
            },
        }
    }
}

/// A single contour trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContourTrace {
    #[serde(rename = "type")]
    pub kind: String,
    pub z: Vec<Vec<f64>>,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub colorscale: ColorScale,
    pub dx: f64,
    pub contours: Contours,
    pub colorbar: ColorBar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisType {
    Linear,
    Log,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTitle {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub title: AxisTitle,
    #[serde(rename = "type")]
    pub kind: AxisType,
}

impl Axis {
    pub fn new(title: &str, kind: AxisType) -> Self {
        Axis {
            title: AxisTitle {
                text: title.to_string(),
            },
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub xaxis: Axis,
    pub yaxis: Axis,
}

/// `data` plus `layout`, as `Plotly.react` takes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<ContourTrace>,
    pub layout: Layout,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_colorscale_json_shapes() {
        let named = serde_json::to_value(ColorScale::sequential()).unwrap();
        assert_eq!(named, json!("Oranges"));

        let stops = serde_json::to_value(ColorScale::diverging(0.2)).unwrap();
        assert_eq!(stops, json!([[0.0, "red"], [0.2, "white"], [1.0, "blue"]]));
    }

    #[test]
    fn test_contours_size_omitted_when_none() {
        let c = Contours { start: 0.0, end: 10.0, size: None };
        let value = serde_json::to_value(c).unwrap();
        assert!(value.get("size").is_none());
    }

    #[test]
    fn test_axis_type_names() {
        let axis = serde_json::to_value(Axis::new("Permeability (mD)", AxisType::Log)).unwrap();
        assert_eq!(axis["type"], "log");
        assert_eq!(axis["title"]["text"], "Permeability (mD)");
    }
}
