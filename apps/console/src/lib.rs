//! Core of the IDS operator console: the backend gateway, view state and the
//! view-model that sequences them. The Dioxus shell in `main.rs` renders it.

pub mod api;
pub mod config;
pub mod fixtures;
pub mod health;
pub mod models;
pub mod state;
pub mod view_model;

pub use api::{ClientError, ClientResult, DataSource, IdsClient};
pub use config::AppConfig;
pub use state::{DashboardEvent, MountGuard, StateStore, ViewState};
pub use view_model::{AnalysisOutcome, DashboardViewModel};
