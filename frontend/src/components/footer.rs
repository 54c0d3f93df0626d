//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>"Wellmap • Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span> " and Plotly.js"</div>
            <div class="footer-links">
                <a href="https://github.com/wellmap/wellmap" class="footer-link" target="_blank">
                    "GitHub"
                </a>
            </div>
        </footer>
    }
}
