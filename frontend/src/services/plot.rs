//! Plotly bindings.
//!
//! The figure JSON comes straight from the server; `src/js/plot.js` parses
//! it and calls `Plotly.react` on the target div.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::types::{AppError, AppResult};

#[wasm_bindgen(module = "/src/js/plot.js")]
extern "C" {
    #[wasm_bindgen(js_name = "renderFigure", catch)]
    fn render_figure_js(element_id: &str, figure_json: &str) -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(js_name = "clearFigure")]
    fn clear_figure_js(element_id: &str);
}

/// Draw (or redraw in place) `figure` into the element `element_id`.
pub async fn render_figure(element_id: &str, figure: &serde_json::Value) -> AppResult<()> {
    let json = serde_json::to_string(figure).map_err(|e| AppError::Render(e.to_string()))?;
    let promise = render_figure_js(element_id, &json).map_err(js_error)?;
    JsFuture::from(promise).await.map_err(js_error)?;
    Ok(())
}

/// Remove any plot drawn in `element_id`.
pub fn clear_figure(element_id: &str) {
    clear_figure_js(element_id);
}

fn js_error(value: JsValue) -> AppError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    AppError::Render(message)
}
