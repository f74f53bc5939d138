use dioxus::prelude::*;
use ids_console::models::StatCardData;

#[component]
pub fn StatCard(card: StatCardData) -> Element {
    let badge = if card.is_positive() {
        "bg-green-100 text-green-700"
    } else {
        "bg-red-100 text-red-700"
    };
    let delta = card.delta_label();

    rsx! {
        div { class: "rounded-lg border border-slate-200 bg-white p-4 shadow-sm",
            p { class: "text-xs uppercase tracking-wide text-slate-500", "{card.title}" }
            div { class: "mt-1 flex items-baseline gap-2",
                span { class: "text-2xl font-semibold text-slate-900", "{card.value}" }
                span { class: format!("rounded px-2 py-0.5 text-xs {badge}"), "{delta}" }
            }
        }
    }
}
