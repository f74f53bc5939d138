//! Dashboard hook
//!
//! Binds the view-model to a component-owned signal and runs the initial
//! baseline refresh on mount.

use std::rc::Rc;

use dioxus::prelude::*;
use ids_console::state::DashboardSignal;
use ids_console::{DashboardEvent, DashboardViewModel, IdsClient, StateStore, ViewState};

use crate::API_CLIENT;

pub type LiveViewModel = DashboardViewModel<IdsClient, DashboardSignal>;

#[derive(Clone)]
pub struct DashboardHandle {
    pub state: DashboardSignal,
    view_model: Option<Rc<LiveViewModel>>,
}

impl DashboardHandle {
    /// Starts an analysis run; ignored by the view-model while one is in flight.
    pub fn analyze(&self, payload: String) {
        let Some(view_model) = self.view_model.clone() else {
            tracing::warn!("analysis requested without an API client");
            return;
        };

        spawn(async move {
            let outcome = view_model.run_analyze_and_refresh(&payload).await;
            tracing::debug!(?outcome, "analysis command settled");
        });
    }
}

pub fn use_dashboard() -> DashboardHandle {
    let state = use_signal(ViewState::default);

    let view_model = use_hook(|| {
        API_CLIENT
            .get()
            .cloned()
            .map(|client| Rc::new(DashboardViewModel::new(client, state)))
    });

    let initial = view_model.clone();
    use_future(move || {
        let view_model = initial.clone();
        async move {
            match view_model {
                Some(view_model) => view_model.refresh_baseline().await,
                None => {
                    state.dispatch(DashboardEvent::BaselineFailed(
                        "IDS API client is not initialized; check IDS_API_BASE_URL.".into(),
                    ));
                }
            }
        }
    });

    let guard = view_model.as_ref().map(|view_model| view_model.guard());
    use_drop(move || {
        if let Some(guard) = guard {
            guard.detach();
        }
    });

    DashboardHandle { state, view_model }
}
