//! View computation: selected metric + slider values + dataset → figure.
//!
//! [`compute_view`] is pure and framework-free. [`update_view`] adds the
//! submit gate and the per-request file load the dashboard uses.
//!
//! | Group | Color scale | v-min slider | v-max slider |
//! |-------|-------------|--------------|--------------|
//! | EUR (1-4) | `Oranges` | disabled, reset to 0 | observed min..max, step 1 |
//! | Cost (5-8) | `Oranges` | disabled, reset to 0 | 0..10, step 0.1 |
//! | Delta (9-10) | red/white/blue, white at zero | enabled | 0..10, step 0.1 |

pub mod figure;

use serde::{Deserialize, Serialize};

use crate::api::logs::log_info;
use crate::dataset::{load_dataset, Bounds, TransformedData};
use crate::error::{ViewError, ViewResult};
use crate::models::{Metric, MetricGroup};

pub use figure::{Axis, AxisType, ColorBar, ColorScale, ContourTrace, Contours, Figure, Layout};

pub const X_AXIS_TITLE: &str = "Gross Height (m)";
pub const Y_AXIS_TITLE: &str = "Permeability (mD)";

/// v-max slider range used for cost and delta metrics.
pub const DEFAULT_VMAX_RANGE: (f64, f64) = (0.0, 10.0);

// =============================================================================
// Slider marks
// =============================================================================

/// A labelled tick on a slider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderMark {
    pub value: f64,
    pub label: String,
}

impl SliderMark {
    pub fn at(value: f64) -> Self {
        // -0.0 would print as "-0"
        let value = value + 0.0;
        SliderMark {
            value,
            label: format!("{}", value),
        }
    }
}

fn marks_at(values: &[f64]) -> Vec<SliderMark> {
    values.iter().copied().map(SliderMark::at).collect()
}

/// 0, 2.5, 5, 7.5, 10
pub fn vmax_marks() -> Vec<SliderMark> {
    marks_at(&[0.0, 2.5, 5.0, 7.5, 10.0])
}

/// -10, -7.5, -5, -2.5, 0
pub fn vmin_marks() -> Vec<SliderMark> {
    marks_at(&[-10.0, -7.5, -5.0, -2.5, 0.0])
}

/// 0, 0.25, 0.5, 0.75, 1
pub fn granularity_marks() -> Vec<SliderMark> {
    marks_at(&[0.0, 0.25, 0.5, 0.75, 1.0])
}

/// Five integer marks spread over an observed range.
///
/// Positions are `trunc(min) + 1`, the quarter, middle and three-quarter
/// points, and `trunc(max)`, each truncated toward zero. Duplicates are
/// dropped.
pub fn slider_marks(min: f64, max: f64) -> Vec<SliderMark> {
    let middle = ((min + max) / 2.0).trunc();
    let lower = ((min + middle) / 2.0).trunc();
    let upper = ((max + middle) / 2.0).trunc();

    let mut marks: Vec<SliderMark> = Vec::with_capacity(5);
    for position in [min.trunc() + 1.0, lower, middle, upper, max.trunc()] {
        if !marks.iter().any(|m| m.value == position) {
            marks.push(SliderMark::at(position));
        }
    }
    marks.sort_by(|a, b| a.value.total_cmp(&b.value));
    marks
}

/// Static description of one slider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderSpec {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub value: f64,
    pub marks: Vec<SliderMark>,
}

/// Slider state before the first submit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitialSliders {
    pub vmin: SliderSpec,
    pub vmax: SliderSpec,
    pub granularity: SliderSpec,
}

pub fn initial_sliders() -> InitialSliders {
    InitialSliders {
        vmin: SliderSpec {
            min: -10.0,
            max: 0.0,
            step: 0.5,
            value: 0.0,
            marks: vmin_marks(),
        },
        vmax: SliderSpec {
            min: DEFAULT_VMAX_RANGE.0,
            max: DEFAULT_VMAX_RANGE.1,
            step: 0.5,
            value: 10.0,
            marks: vmax_marks(),
        },
        granularity: SliderSpec {
            min: 0.0,
            max: 1.0,
            step: 0.05,
            value: 0.5,
            marks: granularity_marks(),
        },
    }
}

// =============================================================================
// Color midpoint
// =============================================================================

/// Fraction along the color scale where the value zero falls.
///
/// `|v_min| / (|v_min| + |v_max|)`: 0.5 for a symmetric window, 0 when
/// `v_min` is zero. Fails when both ends are zero.
pub fn rescale(v_min: f64, v_max: f64) -> ViewResult<f64> {
    ensure_finite(v_min, "v_min")?;
    ensure_finite(v_max, "v_max")?;

    let span = v_min.abs() + v_max.abs();
    if span == 0.0 {
        return Err(ViewError::DegenerateRange { v_min, v_max });
    }
    Ok(v_min.abs() / span)
}

fn ensure_finite(value: f64, name: &'static str) -> ViewResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ViewError::NonFiniteInput(name))
    }
}

// =============================================================================
// Request / response
// =============================================================================

/// Everything the dashboard controls send.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewRequest {
    pub metric: u8,
    pub v_min: f64,
    pub v_max: f64,
    pub granularity: f64,
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub submit_clicks: u32,
}

impl Default for ViewRequest {
    fn default() -> Self {
        let sliders = initial_sliders();
        Self {
            metric: Metric::DEFAULT.id(),
            v_min: sliders.vmin.value,
            v_max: sliders.vmax.value,
            granularity: sliders.granularity.value,
            file_path: None,
            submit_clicks: 0,
        }
    }
}

/// Slider properties the view pushes back to the controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlState {
    pub vmin_disabled: bool,
    pub vmin_value: f64,
    pub vmin_step: f64,
    pub vmax_min: f64,
    pub vmax_max: f64,
    pub vmax_step: f64,
    pub vmax_marks: Vec<SliderMark>,
}

/// Read-only values shown under the sliders. `vmin` is `None` when the
/// v-min slider does not apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Readouts {
    pub vmin: Option<f64>,
    pub vmax: f64,
    pub granularity: f64,
}

/// Output of one recomputation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel {
    pub metric: Metric,
    pub title: String,
    pub figure: Figure,
    pub controls: ControlState,
    pub readouts: Readouts,
}

/// Result of gating a request on the submit counter.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewUpdate {
    /// Submit has not been clicked; leave every output as is.
    NoUpdate,
    Updated(Box<ViewModel>),
}

// =============================================================================
// Computation
// =============================================================================

/// Build the figure and control state for `request` over `data`.
pub fn compute_view(request: &ViewRequest, data: &TransformedData) -> ViewResult<ViewModel> {
    let metric = Metric::from_id(request.metric).ok_or(ViewError::UnknownMetric(request.metric))?;
    ensure_finite(request.v_min, "v_min")?;
    ensure_finite(request.v_max, "v_max")?;
    ensure_finite(request.granularity, "granularity")?;

    let metric_grid = data
        .grid(metric)
        .ok_or(ViewError::UnknownMetric(request.metric))?;

    let (colorscale, controls, vmin_readout) = match metric.group() {
        MetricGroup::Delta => (
            ColorScale::diverging(rescale(request.v_min, request.v_max)?),
            ControlState {
                vmin_disabled: false,
                vmin_value: request.v_min,
                vmin_step: 0.1,
                vmax_min: DEFAULT_VMAX_RANGE.0,
                vmax_max: DEFAULT_VMAX_RANGE.1,
                vmax_step: 0.1,
                vmax_marks: vmax_marks(),
            },
            Some(request.v_min),
        ),
        MetricGroup::Eur => {
            let bounds = data.eur_bounds.get(&metric).copied().unwrap_or(Bounds {
                min: DEFAULT_VMAX_RANGE.0,
                max: DEFAULT_VMAX_RANGE.1,
            });
            (
                ColorScale::sequential(),
                ControlState {
                    vmin_disabled: true,
                    vmin_value: 0.0,
                    vmin_step: 1.0,
                    vmax_min: bounds.min,
                    vmax_max: bounds.max,
                    vmax_step: 1.0,
                    vmax_marks: slider_marks(bounds.min, bounds.max),
                },
                None,
            )
        }
        MetricGroup::Cost => (
            ColorScale::sequential(),
            ControlState {
                vmin_disabled: true,
                vmin_value: 0.0,
                vmin_step: 1.0,
                vmax_min: DEFAULT_VMAX_RANGE.0,
                vmax_max: DEFAULT_VMAX_RANGE.1,
                vmax_step: 0.1,
                vmax_marks: vmax_marks(),
            },
            None,
        ),
    };

    let trace = ContourTrace {
        kind: "contour".to_string(),
        z: metric_grid.grid.to_nested(),
        x: data.heights.clone(),
        y: data.perms.clone(),
        colorscale,
        dx: figure::CONTOUR_DX,
        contours: Contours {
            start: request.v_min,
            end: request.v_max,
            size: (request.granularity > 0.0).then_some(request.granularity),
        },
        colorbar: ColorBar::titled(&metric_grid.unit),
    };

    let layout = Layout {
        width: figure::FIGURE_WIDTH,
        height: figure::FIGURE_HEIGHT,
        xaxis: Axis::new(X_AXIS_TITLE, AxisType::Linear),
        yaxis: Axis::new(Y_AXIS_TITLE, AxisType::Log),
    };

    Ok(ViewModel {
        metric,
        title: data.title(metric).to_string(),
        figure: Figure {
            data: vec![trace],
            layout,
        },
        controls,
        readouts: Readouts {
            vmin: vmin_readout,
            vmax: request.v_max,
            granularity: request.granularity,
        },
    })
}

/// Gate on the submit counter, re-read the file, compute the view.
///
/// The file is loaded from scratch on every call.
pub fn update_view(request: &ViewRequest, delimiter: char) -> ViewResult<ViewUpdate> {
    if request.submit_clicks == 0 {
        return Ok(ViewUpdate::NoUpdate);
    }

    let path = request
        .file_path
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .ok_or(ViewError::MissingFilePath)?;

    let data = load_dataset(path, delimiter)?;
    let view = compute_view(request, &data)?;
    log_info(format!(
        "🗺️  {} [{}, {}] step {}",
        view.metric, request.v_min, request.v_max, request.granularity
    ));

    Ok(ViewUpdate::Updated(Box::new(view)))
}
