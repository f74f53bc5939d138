use dioxus::prelude::*;

/// Single action control: payload input, run button and the outcome banners.
#[component]
pub fn AnalysisPanel(
    loading: bool,
    message: Option<String>,
    error: Option<String>,
    on_analyze: EventHandler<String>,
) -> Element {
    let mut payload = use_signal(String::new);

    rsx! {
        div { class: "rounded-lg border border-slate-200 bg-white p-4 shadow-sm space-y-3",
            h3 { class: "text-sm font-semibold text-slate-800", "Run analysis" }
            textarea {
                class: "w-full rounded border border-slate-200 p-2 text-xs font-mono",
                rows: "4",
                placeholder: "Optional packet/activity data...",
                value: "{payload}",
                oninput: move |evt| payload.set(evt.value()),
            }
            button {
                class: "w-full rounded bg-blue-600 px-3 py-2 text-sm font-medium text-white disabled:opacity-60",
                disabled: loading,
                onclick: move |_| on_analyze.call(payload.read().clone()),
                if loading {
                    span { class: "mr-2 inline-block h-3 w-3 animate-spin rounded-full border-2 border-white border-t-transparent" }
                    "Analyzing…"
                } else {
                    "Analyze Logs"
                }
            }
            if let Some(ref message) = message {
                div { class: "rounded border border-sky-200 bg-sky-50 p-2 text-xs text-sky-800", "{message}" }
            }
            if let Some(ref error) = error {
                div { class: "rounded border border-red-200 bg-red-50 p-2 text-xs text-red-700", "{error}" }
            }
        }
    }
}
