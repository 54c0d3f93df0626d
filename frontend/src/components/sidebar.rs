//! Parameters sidebar: file path, submit, metric and the three sliders.

use leptos::*;

use super::slider::{readout_text, Slider};
use crate::state::DashboardState;
use crate::types::{InitialSliders, MetricOption};

#[component]
pub fn Sidebar(
    state: DashboardState,
    metrics: Vec<MetricOption>,
    sliders: InitialSliders,
) -> impl IntoView {
    let controls = state.controls;
    let readouts = state.readouts;

    let vmin_marks = sliders.vmin.marks.clone();
    let granularity_marks = sliders.granularity.marks.clone();
    let (vmin_min, vmin_max) = (sliders.vmin.min, sliders.vmin.max);
    let (granularity_min, granularity_max, granularity_step) = (
        sliders.granularity.min,
        sliders.granularity.max,
        sliders.granularity.step,
    );

    let on_submit = move |_| {
        log::info!("📤 Submit {}", state.file_path.get_untracked());
        state.submit_clicks.update(|n| *n += 1);
    };

    let on_metric = move |ev| {
        if let Ok(id) = event_target_value(&ev).parse::<u8>() {
            state.metric.set(id);
        }
    };

    view! {
        <aside class="sidebar">
            <h2>"Parameters"</h2>
            <hr/>

            <label for="file-path">"Data file"</label>
            <textarea
                id="file-path"
                placeholder="Path to the sensitivity table"
                prop:value=move || state.file_path.get()
                on:input=move |ev| state.file_path.set(event_target_value(&ev))
            ></textarea>
            <button class="submit-button" on:click=on_submit>"Submit"</button>

            <Show when=move || state.error.get().is_some()>
                <div class="sidebar-error">{move || state.error.get().unwrap_or_default()}</div>
            </Show>

            <label for="metric">"Metric"</label>
            <select id="metric" on:change=on_metric>
                {metrics
                    .into_iter()
                    .map(|option| {
                        let value = option.value;
                        view! {
                            <option
                                value=value
                                prop:selected=move || state.metric.get() == value
                            >
                                {option.label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>

            <p class="slider-label">"V Min"</p>
            <Slider
                id="slider-vmin"
                min=Signal::derive(move || vmin_min)
                max=Signal::derive(move || vmin_max)
                step=Signal::derive(move || controls.get().vmin_step)
                marks=Signal::derive(move || vmin_marks.clone())
                disabled=Signal::derive(move || controls.get().vmin_disabled)
                value=state.v_min
            />

            <p class="slider-label">"V Max"</p>
            <Slider
                id="slider-vmax"
                min=Signal::derive(move || controls.get().vmax_min)
                max=Signal::derive(move || controls.get().vmax_max)
                step=Signal::derive(move || controls.get().vmax_step)
                marks=Signal::derive(move || controls.get().vmax_marks)
                disabled=Signal::derive(|| false)
                value=state.v_max
            />

            <p class="slider-label">"Granularity"</p>
            <Slider
                id="slider-granularity"
                min=Signal::derive(move || granularity_min)
                max=Signal::derive(move || granularity_max)
                step=Signal::derive(move || granularity_step)
                marks=Signal::derive(move || granularity_marks.clone())
                disabled=Signal::derive(|| false)
                value=state.granularity
            />

            <div class="readouts">
                <div class="readout-card">
                    <h4>"V Min"</h4>
                    <p>{move || readouts.get().map(|r| readout_text(r.vmin)).unwrap_or_default()}</p>
                </div>
                <div class="readout-card">
                    <h4>"V Max"</h4>
                    <p>{move || readouts.get().map(|r| readout_text(Some(r.vmax))).unwrap_or_default()}</p>
                </div>
                <div class="readout-card">
                    <h4>"Granularity"</h4>
                    <p>{move || readouts.get().map(|r| readout_text(Some(r.granularity))).unwrap_or_default()}</p>
                </div>
            </div>
        </aside>
    }
}
