use dioxus::prelude::*;
use ids_console::models::BaselineRow;

#[component]
pub fn BaselineTable(rows: Vec<BaselineRow>) -> Element {
    rsx! {
        div { class: "rounded-lg border border-slate-200 bg-white p-4 shadow-sm",
            h3 { class: "mb-3 text-sm font-semibold text-slate-800", "Baseline Statistics" }
            table { class: "w-full text-sm",
                thead { class: "bg-slate-50 text-slate-600",
                    tr {
                        th { class: "px-2 py-1 text-left", "Event" }
                        th { class: "px-2 py-1 text-right", "Mean" }
                        th { class: "px-2 py-1 text-right", "Std Dev" }
                    }
                }
                tbody {
                    // duplicate event names are legal, so rows are keyed by position
                    for (idx, row) in rows.iter().enumerate() {
                        tr { key: "{idx}", class: "border-t border-slate-100",
                            td { class: "px-2 py-1 text-slate-800", "{row.event}" }
                            td { class: "px-2 py-1 text-right tabular-nums", "{row.mean}" }
                            td { class: "px-2 py-1 text-right tabular-nums", "{row.stddev}" }
                        }
                    }
                    if rows.is_empty() {
                        tr {
                            td { colspan: "3", class: "py-6 text-center text-slate-400", "No data yet" }
                        }
                    }
                }
            }
        }
    }
}
