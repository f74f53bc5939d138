use dioxus::prelude::*;
use ids_console::models::BackendHealth;

#[component]
pub fn NavBar(endpoint: String, health: BackendHealth) -> Element {
    let (pill, label) = if health.online {
        ("bg-green-100 text-green-700", "online")
    } else {
        ("bg-slate-100 text-slate-500", "offline")
    };
    let detail = health.detail.clone().unwrap_or_default();

    rsx! {
        nav { class: "border-b border-slate-200 bg-white shadow-sm",
            div { class: "mx-auto flex max-w-7xl items-center justify-between px-4 py-3",
                a { class: "text-lg font-bold text-slate-900", href: "#", "IDS Dashboard" }
                div { class: "flex items-center gap-3 text-xs text-slate-500",
                    span { "API: {endpoint}" }
                    span { class: format!("rounded-full px-2 py-0.5 {pill}"), title: "{detail}", "{label}" }
                }
            }
        }
    }
}
