//! Header bar with the backend connection indicator

use leptos::*;

use crate::BACKEND_URL;

#[component]
pub fn Header(
    /// Whether `/api/metrics` answered
    #[prop(into)]
    connected: Signal<bool>,
) -> impl IntoView {
    view! {
        <header>
            <div class="header-left">
                <span class="logo">"WELLMAP"</span>
                <span class="badge">"Vertical vs Horizontal"</span>
            </div>
            <div class="header-right">
                <div class="backend-status" class:connected=move || connected.get()>
                    <span class="status-dot" class:connected=move || connected.get()></span>
                    <span>
                        {move || if connected.get() {
                            BACKEND_URL.to_string()
                        } else {
                            "Backend offline".to_string()
                        }}
                    </span>
                </div>
            </div>
        </header>
    }
}
