//! Sequencing and error surfacing for the dashboard.
//!
//! The view-model never touches rendering: it pulls data through a
//! [`DataSource`] and pushes [`DashboardEvent`]s into a [`StateStore`].

use std::cell::Cell;

use tracing::{debug, info, warn};

use crate::api::{ClientError, DataSource};
use crate::state::{DashboardEvent, MountGuard, StateStore};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnalysisOutcome {
    /// Another analysis was already running; nothing happened.
    Ignored,
    Succeeded,
    Failed,
    /// The view unmounted before the run settled; its results were dropped.
    Detached,
}

pub struct DashboardViewModel<G, S> {
    gateway: G,
    store: S,
    guard: MountGuard,
    // generation of the most recently started refresh; older results are stale
    refresh_generation: Cell<u64>,
}

impl<G, S> DashboardViewModel<G, S>
where
    G: DataSource,
    S: StateStore,
{
    pub fn new(gateway: G, store: S) -> Self {
        Self {
            gateway,
            store,
            guard: MountGuard::default(),
            refresh_generation: Cell::new(0),
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn guard(&self) -> MountGuard {
        self.guard.clone()
    }

    pub async fn refresh_baseline(&self) {
        if !self.guard.is_mounted() {
            return;
        }

        let generation = self.refresh_generation.get().wrapping_add(1);
        self.refresh_generation.set(generation);

        self.store.dispatch(DashboardEvent::RefreshStarted);
        let result = self.gateway.fetch_baseline_stats().await;

        if !self.guard.is_mounted() {
            debug!("dashboard unmounted, dropping baseline result");
            return;
        }

        if self.refresh_generation.get() != generation {
            debug!(generation, "newer refresh started, dropping stale baseline result");
            return;
        }

        match result {
            Ok(rows) => {
                info!(rows = rows.len(), "baseline refreshed");
                self.store.dispatch(DashboardEvent::BaselineLoaded(rows));
            }
            Err(err) => {
                warn!(?err, transport = err.is_transport(), "baseline refresh failed");
                self.store
                    .dispatch(DashboardEvent::BaselineFailed(describe_refresh_failure(&err)));
            }
        }
    }

    pub async fn run_analyze_and_refresh(&self, payload: &str) -> AnalysisOutcome {
        if !self.guard.is_mounted() {
            return AnalysisOutcome::Detached;
        }

        if !self.store.dispatch(DashboardEvent::AnalysisStarted) {
            debug!("analysis already in flight, ignoring request");
            return AnalysisOutcome::Ignored;
        }

        info!(payload_len = payload.len(), "analysis requested");
        let result = self.gateway.run_analysis(payload).await;

        if !self.guard.is_mounted() {
            debug!("dashboard unmounted, dropping analysis result");
            return AnalysisOutcome::Detached;
        }

        let outcome = match result {
            Ok(text) => {
                info!(message = %text, "analysis finished");
                self.store.dispatch(DashboardEvent::AnalysisSucceeded(text));
                self.refresh_baseline().await;
                AnalysisOutcome::Succeeded
            }
            Err(err) => {
                warn!(?err, "analysis failed");
                self.store
                    .dispatch(DashboardEvent::AnalysisFailed(describe_analysis_failure(&err)));
                AnalysisOutcome::Failed
            }
        };

        if !self.guard.is_mounted() {
            return AnalysisOutcome::Detached;
        }

        self.store.dispatch(DashboardEvent::AnalysisSettled);
        outcome
    }
}

pub(crate) fn describe_refresh_failure(err: &ClientError) -> String {
    if err.is_decode() {
        return "Baseline stats were not in the expected format (check /baseline endpoint)."
            .into();
    }

    match err {
        ClientError::Status { status, .. } => {
            format!("Could not load baseline stats: backend answered {status}.")
        }
        other => format!("Could not load baseline stats (check /baseline endpoint): {other}"),
    }
}

pub(crate) fn describe_analysis_failure(err: &ClientError) -> String {
    format!("Analyze failed. Is the backend running and reachable? ({err})")
}
