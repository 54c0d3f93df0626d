//! Heading, dynamic title and the Plotly target div.

use leptos::*;

use crate::{PAGE_HEADING, PLOT_ELEMENT_ID};

#[component]
pub fn Graph(#[prop(into)] title: Signal<String>) -> impl IntoView {
    view! {
        <section class="content">
            <h2 class="page-heading">{PAGE_HEADING}</h2>
            <hr/>
            <h4 class="graph-title">{move || title.get()}</h4>
            <div id=PLOT_ELEMENT_ID class="graph"></div>
        </section>
    }
}
