//! Wellmap - Frontend Rust/Leptos Application
//!
//! A WebAssembly dashboard drawing contour heatmaps of vertical vs
//! horizontal well economics computed by the wellmap server.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (backend status)                                     │
//! ├──────────────────────┬──────────────────────────────────────┤
//! │  Sidebar             │  Graph                                │
//! │  ├── file + Submit   │  ├── heading, title                  │
//! │  ├── metric          │  └── Plotly div                      │
//! │  └── sliders         │                                       │
//! ├──────────────────────┴──────────────────────────────────────┤
//! │  LogsPanel (SSE)                                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Mirrors of the server's JSON
//! - [`state`] - Reactive dashboard state
//! - [`components`] - UI components (Sidebar, Graph, Logs, etc.)
//! - [`services`] - Backend calls and Plotly rendering

use leptos::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Controls
    ControlsResponse, InitialSliders, MetricOption, SliderMark, SliderSpec,
    // View
    ControlState, Readouts, ViewModel, ViewRequest, ViewResponse,
    // Logs
    LogEntry, LogLevel,
    // Errors
    AppError, AppResult,
};

pub use state::DashboardState;

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Wellmap - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let (controls, set_controls) = create_signal(None::<ControlsResponse>);
    let (load_error, set_load_error) = create_signal(None::<String>);
    let (logs, set_logs) = create_signal(Vec::<LogEntry>::new());

    // Initialize SSE connection ONCE at app startup
    init_sse_logs(set_logs);

    spawn_local(async move {
        match fetch_controls(BACKEND_URL).await {
            Ok(response) => set_controls.set(Some(response)),
            Err(e) => {
                log::error!("❌ {}", e);
                set_load_error.set(Some(e.to_string()));
            }
        }
    });

    view! {
        <Header connected=Signal::derive(move || controls.get().is_some())/>

        <div class="container">
            {move || match controls.get() {
                Some(response) => view! { <Dashboard response=response/> }.into_view(),
                None => view! {
                    <div class="loading">
                        {move || load_error.get().unwrap_or_else(|| "Loading controls...".to_string())}
                    </div>
                }
                .into_view(),
            }}

            <LogsPanel logs=logs set_logs=set_logs/>
        </div>

        <Footer/>
    }
}

/// Sidebar and graph, wired to one recomputation effect.
#[component]
fn Dashboard(response: ControlsResponse) -> impl IntoView {
    let state = DashboardState::new(&response);
    // Responses arriving after a newer request are dropped
    let latest = store_value(0u64);

    create_effect(move |_| {
        let request = state.request();
        if request.submit_clicks == 0 {
            return;
        }

        latest.update_value(|n| *n += 1);
        let ticket = latest.get_value();

        spawn_local(async move {
            let result = fetch_view(BACKEND_URL, &request).await;
            if latest.get_value() != ticket {
                return;
            }
            match result {
                Ok(ViewResponse { view: Some(view), .. }) => {
                    state.apply(&view);
                    if let Err(e) = render_figure(PLOT_ELEMENT_ID, &view.figure).await {
                        log::error!("❌ {}", e);
                        state.error.set(Some(e.to_string()));
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    log::error!("❌ {}", e);
                    state.error.set(Some(e.to_string()));
                }
            }
        });
    });

    on_cleanup(|| clear_figure(PLOT_ELEMENT_ID));

    view! {
        <div class="dashboard">
            <Sidebar state=state metrics=response.metrics sliders=response.sliders/>
            <Graph title=state.title/>
        </div>
    }
}
