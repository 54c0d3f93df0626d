//! Range slider with labelled marks and a read-only readout.

use leptos::*;

use crate::types::SliderMark;

/// Text under a slider: the value, or "None" when the slider does not apply.
pub fn readout_text(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{}", v),
        None => "None".to_string(),
    }
}

/// Left offset of a mark as a percentage of the track.
pub fn mark_offset(value: f64, min: f64, max: f64) -> f64 {
    if max > min {
        ((value - min) / (max - min) * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    }
}

#[component]
pub fn Slider(
    /// Element id, also used for the marks datalist
    id: &'static str,
    #[prop(into)] min: Signal<f64>,
    #[prop(into)] max: Signal<f64>,
    #[prop(into)] step: Signal<f64>,
    #[prop(into)] marks: Signal<Vec<SliderMark>>,
    #[prop(into)] disabled: Signal<bool>,
    value: RwSignal<f64>,
) -> impl IntoView {
    let list_id = format!("{}-marks", id);

    let on_input = move |ev| {
        if let Ok(v) = event_target_value(&ev).parse::<f64>() {
            if v != value.get_untracked() {
                value.set(v);
            }
        }
    };

    view! {
        <div class="slider" class:disabled=move || disabled.get()>
            <input
                type="range"
                id=id
                list=list_id.clone()
                prop:min=move || min.get()
                prop:max=move || max.get()
                prop:step=move || step.get()
                prop:value=move || value.get()
                prop:disabled=move || disabled.get()
                on:input=on_input
            />
            <datalist id=list_id>
                <For
                    each=move || marks.get()
                    key=|mark| mark.label.clone()
                    children=move |mark| view! { <option value=mark.value></option> }
                />
            </datalist>
            <div class="slider-marks">
                <For
                    each=move || marks.get()
                    key=|mark| mark.label.clone()
                    children=move |mark| {
                        let value = mark.value;
                        view! {
                            <span
                                class="slider-mark"
                                style=move || format!("left: {}%", mark_offset(value, min.get(), max.get()))
                            >
                                {mark.label.clone()}
                            </span>
                        }
                    }
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readout_text() {
        assert_eq!(readout_text(Some(-2.5)), "-2.5");
        assert_eq!(readout_text(Some(10.0)), "10");
        assert_eq!(readout_text(None), "None");
    }

    #[test]
    fn test_mark_offset() {
        assert_eq!(mark_offset(5.0, 0.0, 10.0), 50.0);
        assert_eq!(mark_offset(-10.0, -10.0, 0.0), 0.0);
        assert_eq!(mark_offset(200.0, 100.0, 130.0), 100.0);
        assert_eq!(mark_offset(3.0, 3.0, 3.0), 0.0);
    }
}
