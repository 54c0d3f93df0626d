//! Real-time log streaming using Server-Sent Events (SSE).
//!
//! Connects to the backend's `/api/logs` endpoint and displays
//! load and view logs in real-time with auto-scroll support.

use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{EventSource, MessageEvent};

use crate::{LogEntry, BACKEND_URL, MAX_LOG_ENTRIES};

/// Request animation frame helper for smooth scrolling
fn request_animation_frame(f: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(f);
    if window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .is_ok()
    {
        closure.forget();
    }
}

/// Parse an SSE payload into a LogEntry
pub fn parse_sse_log(json: &str) -> Option<LogEntry> {
    serde_json::from_str(json).ok()
}

/// Append `entry`, dropping the oldest past `MAX_LOG_ENTRIES`.
pub fn push_capped(logs: &mut Vec<LogEntry>, entry: LogEntry) {
    logs.push(entry);
    if logs.len() > MAX_LOG_ENTRIES {
        let excess = logs.len() - MAX_LOG_ENTRIES;
        logs.drain(..excess);
    }
}

/// Start SSE connection to receive real-time logs
/// Should be called ONCE at app startup
pub fn init_sse_logs(set_logs: WriteSignal<Vec<LogEntry>>) {
    let sse_url = format!("{}/api/logs", BACKEND_URL);

    let event_source = match EventSource::new(&sse_url) {
        Ok(es) => es,
        Err(e) => {
            log::error!("Failed to create EventSource: {:?}", e);
            return;
        }
    };

    let onmessage = Closure::wrap(Box::new(move |event: MessageEvent| {
        if let Some(entry) = event.data().as_string().as_deref().and_then(parse_sse_log) {
            set_logs.update(|logs| push_capped(logs, entry));
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    event_source.set_onmessage(Some(onmessage.as_ref().unchecked_ref()));
    onmessage.forget();

    let onopen = Closure::wrap(Box::new(move |_: web_sys::Event| {
        log::info!("📡 SSE connected to logs stream");
    }) as Box<dyn FnMut(web_sys::Event)>);

    event_source.set_onopen(Some(onopen.as_ref().unchecked_ref()));
    onopen.forget();

    let onerror = Closure::wrap(Box::new(move |_: web_sys::Event| {
        log::warn!("SSE connection error - will auto-reconnect");
    }) as Box<dyn FnMut(web_sys::Event)>);

    event_source.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onerror.forget();

    // Lives for the app's lifetime
    std::mem::forget(event_source);

    log::info!("📡 SSE log stream initialized");
}

/// Real-time logs panel component (display only, SSE is initialized elsewhere)
#[component]
pub fn LogsPanel(
    logs: ReadSignal<Vec<LogEntry>>,
    set_logs: WriteSignal<Vec<LogEntry>>,
) -> impl IntoView {
    let logs_container = create_node_ref::<leptos::html::Div>();

    // Auto-scroll to bottom when logs change
    create_effect(move |_| {
        let _ = logs.get();

        if let Some(container) = logs_container.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    view! {
        <div class="logs-panel">
            <div class="logs-header">
                <span class="logs-title">"📋 Server Logs"</span>
                <button
                    class="logs-clear"
                    on:click=move |_| set_logs.set(vec![])
                >
                    "Clear"
                </button>
            </div>
            <div class="logs-content" node_ref=logs_container>
                <For
                    each=move || logs.get().into_iter().enumerate()
                    key=|(i, entry)| (*i, entry.timestamp.clone())
                    children=move |(_, entry)| {
                        view! {
                            <div
                                class=format!("log-entry {}", entry.level.css_class())
                                style=format!("padding-left: {}em", entry.indent)
                            >
                                <span class="log-time">"[" {entry.timestamp.clone()} "] "</span>
                                {entry.message.clone()}
                            </div>
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
    use crate::LogLevel;

    fn entry(n: usize) -> LogEntry {
        LogEntry {
            level: LogLevel::Info,
            message: format!("line {}", n),
            indent: 0,
            timestamp: "00:00:00".to_string(),
        }
    }

    #[test]
    fn test_parse_sse_log() {
        let entry = parse_sse_log(
            r#"{"level":"success","message":"Read 4 rows","indent":0,"timestamp":"09:15:00"}"#,
        )
        .unwrap();
        assert_eq!(entry.level, LogLevel::Success);
        assert_eq!(entry.timestamp, "09:15:00");

        assert!(parse_sse_log("keep-alive").is_none());
    }

    #[test]
    fn test_push_capped_drops_oldest() {
        let mut logs = Vec::new();
        for n in 0..MAX_LOG_ENTRIES + 5 {
            push_capped(&mut logs, entry(n));
        }
        assert_eq!(logs.len(), MAX_LOG_ENTRIES);
        assert_eq!(logs[0].message, "line 5");
    }
}
