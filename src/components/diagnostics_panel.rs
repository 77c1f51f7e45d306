//! Diagnostics Panel Component
//!
//! Shows the lines buffered by the rolling logger, e.g. failed gateway calls.

use leptos::prelude::*;

#[component]
pub fn DiagnosticsPanel() -> impl IntoView {
    let (open, set_open) = signal(false);
    let (lines, set_lines) = signal(Vec::<String>::new());

    // Snapshot the ring each time the panel is opened
    let toggle = move |_| {
        if !open.get_untracked() {
            set_lines.set(rolling_logger::recent_lines());
        }
        set_open.update(|open| *open = !*open);
    };

    view! {
        <div class="diagnostics">
            <button class="diagnostics-btn" on:click=toggle>
                {move || if open.get() { "Hide log" } else { "Show log" }}
            </button>
            <Show when=move || open.get()>
                <pre class="diagnostics-log">
                    {move || {
                        let lines = lines.get();
                        if lines.is_empty() { "No log lines yet".to_string() } else { lines.join("\n") }
                    }}
                </pre>
            </Show>
        </div>
    }
}
