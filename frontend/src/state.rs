//! Dashboard state shared by the sidebar and the graph.

use leptos::*;

use crate::types::{ControlState, ControlsResponse, InitialSliders, Readouts, ViewModel, ViewRequest};

impl ControlState {
    /// Slider properties before the first view comes back.
    pub fn from_initial(sliders: &InitialSliders) -> Self {
        ControlState {
            vmin_disabled: false,
            vmin_value: sliders.vmin.value,
            vmin_step: sliders.vmin.step,
            vmax_min: sliders.vmax.min,
            vmax_max: sliders.vmax.max,
            vmax_step: sliders.vmax.step,
            vmax_marks: sliders.vmax.marks.clone(),
        }
    }
}

/// Every reactive value behind the controls and the graph.
#[derive(Clone, Copy)]
pub struct DashboardState {
    pub file_path: RwSignal<String>,
    pub submit_clicks: RwSignal<u32>,
    pub metric: RwSignal<u8>,
    pub v_min: RwSignal<f64>,
    pub v_max: RwSignal<f64>,
    pub granularity: RwSignal<f64>,
    pub controls: RwSignal<ControlState>,
    /// Empty until the first view
    pub readouts: RwSignal<Option<Readouts>>,
    pub title: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
}

impl DashboardState {
    pub fn new(response: &ControlsResponse) -> Self {
        let sliders = &response.sliders;
        Self {
            file_path: create_rw_signal(response.default_file.clone().unwrap_or_default()),
            submit_clicks: create_rw_signal(0),
            metric: create_rw_signal(response.default_metric),
            v_min: create_rw_signal(sliders.vmin.value),
            v_max: create_rw_signal(sliders.vmax.value),
            granularity: create_rw_signal(sliders.granularity.value),
            controls: create_rw_signal(ControlState::from_initial(sliders)),
            readouts: create_rw_signal(None),
            title: create_rw_signal(String::new()),
            error: create_rw_signal(None),
        }
    }

    /// Current request, tracking every input including the file path.
    ///
    /// Nothing is sent until the first Submit; after that any change
    /// recomputes.
    pub fn request(&self) -> ViewRequest {
        ViewRequest {
            metric: self.metric.get(),
            v_min: self.v_min.get(),
            v_max: self.v_max.get(),
            granularity: self.granularity.get(),
            file_path: Some(self.file_path.get()),
            submit_clicks: self.submit_clicks.get(),
        }
    }

    /// Push a recomputed view into the controls.
    pub fn apply(&self, view: &ViewModel) {
        // Only write v-min when it moves, otherwise the request effect loops
        if self.v_min.get_untracked() != view.controls.vmin_value {
            self.v_min.set(view.controls.vmin_value);
        }
        self.controls.set(view.controls.clone());
        self.readouts.set(Some(view.readouts.clone()));
        self.title.set(view.title.clone());
        self.error.set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SliderMark, SliderSpec};

    fn spec(min: f64, max: f64, step: f64, value: f64) -> SliderSpec {
        SliderSpec {
            min,
            max,
            step,
            value,
            marks: vec![SliderMark { value: min, label: format!("{}", min) }],
        }
    }

    fn controls_response() -> ControlsResponse {
        ControlsResponse {
            metrics: vec![],
            default_metric: 9,
            sliders: InitialSliders {
                vmin: spec(-10.0, 0.0, 0.5, 0.0),
                vmax: spec(0.0, 10.0, 0.5, 10.0),
                granularity: spec(0.0, 1.0, 0.05, 0.5),
            },
            default_file: Some("data.csv".into()),
        }
    }

    #[test]
    fn test_initial_control_state() {
        let state = ControlState::from_initial(&controls_response().sliders);
        assert!(!state.vmin_disabled);
        assert_eq!(state.vmin_step, 0.5);
        assert_eq!((state.vmax_min, state.vmax_max), (0.0, 10.0));
        assert_eq!(state.vmax_marks.len(), 1);
    }

    #[test]
    fn test_request_before_submit() {
        let runtime = create_runtime();

        let state = DashboardState::new(&controls_response());
        let request = state.request();
        assert_eq!(request.metric, 9);
        assert_eq!(request.submit_clicks, 0);
        assert_eq!(request.file_path.as_deref(), Some("data.csv"));

        runtime.dispose();
    }

    #[test]
    fn test_request_follows_file_path() {
        let runtime = create_runtime();

        let state = DashboardState::new(&controls_response());
        state.submit_clicks.set(1);
        let request = create_memo(move |_| state.request());
        assert_eq!(request.get_untracked().file_path.as_deref(), Some("data.csv"));

        state.file_path.set("other.csv".into());
        let updated = request.get_untracked();
        assert_eq!(updated.file_path.as_deref(), Some("other.csv"));
        assert_eq!(updated.submit_clicks, 1);

        runtime.dispose();
    }

    #[test]
    fn test_apply_resets_vmin() {
        let runtime = create_runtime();

        let state = DashboardState::new(&controls_response());
        state.v_min.set(-3.0);
        let view = ViewModel {
            metric: 1,
            title: "EUR_Vert_NoCutoff (MMbbl)".into(),
            figure: serde_json::json!({}),
            controls: ControlState {
                vmin_disabled: true,
                vmin_value: 0.0,
                vmin_step: 1.0,
                vmax_min: 100.0,
                vmax_max: 130.0,
                vmax_step: 1.0,
                vmax_marks: vec![],
            },
            readouts: Readouts { vmin: None, vmax: 120.0, granularity: 0.5 },
        };
        state.apply(&view);

        assert_eq!(state.v_min.get_untracked(), 0.0);
        assert!(state.controls.get_untracked().vmin_disabled);
        assert_eq!(state.title.get_untracked(), "EUR_Vert_NoCutoff (MMbbl)");
        assert!(state.error.get_untracked().is_none());

        runtime.dispose();
    }
}
