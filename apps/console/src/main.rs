#![allow(non_snake_case)]

mod hooks;
mod ui;

use dioxus::prelude::*;
use dioxus_router::prelude::*;
use ids_console::{AppConfig, ClientError, IdsClient};
use once_cell::sync::OnceCell;
use tracing::{error, info};

use hooks::dashboard::use_dashboard;
use hooks::health::use_backend_health;
use ui::analysis_panel::AnalysisPanel;
use ui::baseline_table::BaselineTable;
use ui::donut::Donut;
use ui::nav_bar::NavBar;
use ui::spark_line::SparkLine;
use ui::stat_card::StatCard;

pub(crate) static APP_CONFIG: OnceCell<AppConfig> = OnceCell::new();
pub(crate) static API_CLIENT: OnceCell<IdsClient> = OnceCell::new();

fn main() {
    console_error_panic_hook::set_once();
    init_logging();
    bootstrap_infrastructure();
    launch(App);
}

fn init_logging() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let _ = dioxus_logger::init(tracing::Level::INFO);
    });
}

fn bootstrap_infrastructure() {
    let config = AppConfig::from_env();
    let _ = APP_CONFIG.set(config.clone());

    match IdsClient::new(config) {
        Ok(client) => {
            let config = client.config();
            info!(endpoint = client.base_url(), profile = ?config.profile, "IDS client initialized");
            let _ = API_CLIENT.set(client);
        }
        Err(err) => {
            report_client_error("failed to initialize IDS client", &err);
        }
    }
}

fn report_client_error(context: &str, err: &ClientError) {
    error!(%context, ?err, status = ?err.status(), "api bootstrap error");
}

#[component]
fn App() -> Element {
    rsx! {
        div { class: "min-h-screen bg-slate-50",
            Router::<Route> {}
        }
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Dashboard {},
}

#[component]
fn Dashboard() -> Element {
    let api_endpoint = APP_CONFIG
        .get()
        .map(|c| c.endpoint().to_string())
        .unwrap_or_else(|| "API endpoint not configured".to_string());

    let dashboard = use_dashboard();
    let health = use_backend_health();

    let cards = ids_console::fixtures::dashboard::stat_cards();
    let volume = ids_console::fixtures::dashboard::event_volume();
    let severity = ids_console::fixtures::dashboard::severity_split();
    let event_types = ids_console::fixtures::dashboard::event_type_breakdown();

    let view = dashboard.state.read().clone();
    let analyze = dashboard.clone();

    rsx! {
        NavBar { endpoint: api_endpoint, health: health.read().clone() }
        main { class: "mx-auto max-w-7xl space-y-6 px-4 py-6",
            h2 { class: "text-2xl font-bold text-slate-900", "Dashboard" }

            section { class: "grid grid-cols-2 gap-3 md:grid-cols-3 lg:grid-cols-6",
                for (idx, card) in cards.into_iter().enumerate() {
                    StatCard { key: "{idx}", card: card }
                }
            }

            section { class: "grid gap-3 lg:grid-cols-3",
                SparkLine { title: "Event Volume Over Time", data: volume, height: 260 }
                Donut { title: "Alert Distribution by Severity", data: severity, height: 260 }
                Donut { title: "Event Types Breakdown", data: event_types, height: 260 }
            }

            section { class: "grid gap-3 lg:grid-cols-3",
                div { class: "lg:col-span-2",
                    BaselineTable { rows: view.baseline }
                }
                div { class: "space-y-3",
                    AnalysisPanel {
                        loading: view.loading,
                        message: view.message,
                        error: view.error,
                        on_analyze: move |payload: String| analyze.analyze(payload),
                    }
                    div { class: "rounded-lg border border-slate-200 bg-white p-4 shadow-sm",
                        h3 { class: "text-sm font-semibold text-slate-800", "Read our documentation" }
                        p { class: "text-xs text-slate-500", "with code samples." }
                    }
                }
            }
        }
    }
}
