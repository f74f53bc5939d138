use std::cell::{Cell, RefCell};
use std::rc::Rc;

use dioxus_signals::{Readable, Signal, Writable};
use serde::{Deserialize, Serialize};

use crate::models::BaselineRow;

pub type DashboardSignal = Signal<ViewState>;

/// Everything the dashboard renders that is not static fixture data.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub baseline: Vec<BaselineRow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub loading: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// State transitions, applied through [`ViewState::apply`].
#[derive(Clone, Debug, PartialEq)]
pub enum DashboardEvent {
    RefreshStarted,
    BaselineLoaded(Vec<BaselineRow>),
    BaselineFailed(String),
    AnalysisStarted,
    AnalysisSucceeded(String),
    AnalysisFailed(String),
    AnalysisSettled,
}

impl ViewState {
    /// Applies `event` and reports whether it was accepted. Only
    /// `AnalysisStarted` can be rejected, when an analysis is already running.
    pub fn apply(&mut self, event: DashboardEvent) -> bool {
        match event {
            DashboardEvent::RefreshStarted => {
                self.error = None;
            }
            DashboardEvent::BaselineLoaded(rows) => {
                self.baseline = rows;
            }
            DashboardEvent::BaselineFailed(message) => {
                self.error = Some(message);
            }
            DashboardEvent::AnalysisStarted => {
                if self.loading {
                    return false;
                }
                self.error = None;
                self.message = None;
                self.loading = true;
            }
            DashboardEvent::AnalysisSucceeded(text) => {
                self.message = Some(text);
            }
            DashboardEvent::AnalysisFailed(message) => {
                self.error = Some(message);
            }
            DashboardEvent::AnalysisSettled => {
                self.loading = false;
            }
        }
        true
    }
}

/// Owner of a [`ViewState`]; the only way the view-model reads or mutates it.
pub trait StateStore {
    fn read_with<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R;

    fn dispatch(&self, event: DashboardEvent) -> bool;

    fn snapshot(&self) -> ViewState {
        self.read_with(ViewState::clone)
    }
}

impl StateStore for Signal<ViewState> {
    fn read_with<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R {
        f(&*self.peek())
    }

    fn dispatch(&self, event: DashboardEvent) -> bool {
        let mut signal = *self;
        let accepted = signal.write().apply(event);
        accepted
    }
}

/// Headless store for contexts without a Dioxus runtime.
#[derive(Clone, Debug, Default)]
pub struct LocalStore {
    inner: Rc<RefCell<ViewState>>,
}

impl LocalStore {
    pub fn new(state: ViewState) -> Self {
        Self {
            inner: Rc::new(RefCell::new(state)),
        }
    }
}

impl StateStore for LocalStore {
    fn read_with<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R {
        f(&self.inner.borrow())
    }

    fn dispatch(&self, event: DashboardEvent) -> bool {
        self.inner.borrow_mut().apply(event)
    }
}

/// Tracks whether the owning view is still mounted. Results that settle after
/// `detach` are discarded instead of being written to a torn-down store.
#[derive(Clone, Debug)]
pub struct MountGuard {
    mounted: Rc<Cell<bool>>,
}

impl Default for MountGuard {
    fn default() -> Self {
        Self {
            mounted: Rc::new(Cell::new(true)),
        }
    }
}

impl MountGuard {
    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }

    pub fn detach(&self) {
        self.mounted.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(event: &str) -> BaselineRow {
        BaselineRow::new(event, 1.0, 0.5)
    }

    #[test]
    fn analysis_start_clears_outcome_and_sets_loading() {
        let mut state = ViewState {
            baseline: vec![row("login_fail")],
            message: Some("old".into()),
            loading: false,
            error: Some("old failure".into()),
        };

        assert!(state.apply(DashboardEvent::AnalysisStarted));
        assert!(state.loading);
        assert_eq!(state.message, None);
        assert_eq!(state.error, None);
        assert_eq!(state.baseline, vec![row("login_fail")]);
    }

    #[test]
    fn second_analysis_start_is_rejected_without_change() {
        let mut state = ViewState::default();
        assert!(state.apply(DashboardEvent::AnalysisStarted));
        state.apply(DashboardEvent::BaselineFailed("stale".into()));
        let before = state.clone();

        assert!(!state.apply(DashboardEvent::AnalysisStarted));
        assert_eq!(state, before);
    }

    #[test]
    fn baseline_is_replaced_not_merged() {
        let mut state = ViewState::default();
        state.apply(DashboardEvent::BaselineLoaded(vec![row("a"), row("b")]));
        state.apply(DashboardEvent::BaselineLoaded(vec![row("c")]));
        assert_eq!(state.baseline, vec![row("c")]);

        state.apply(DashboardEvent::BaselineLoaded(Vec::new()));
        assert!(state.baseline.is_empty());
    }

    #[test]
    fn failure_keeps_rows_and_refresh_clears_error() {
        let mut state = ViewState::default();
        state.apply(DashboardEvent::BaselineLoaded(vec![row("a")]));
        state.apply(DashboardEvent::BaselineFailed("unreachable".into()));
        assert_eq!(state.baseline, vec![row("a")]);
        assert_eq!(state.error.as_deref(), Some("unreachable"));

        state.apply(DashboardEvent::RefreshStarted);
        assert_eq!(state.error, None);
        assert_eq!(state.baseline, vec![row("a")]);
    }

    #[test]
    fn settle_only_resets_loading() {
        let mut state = ViewState::default();
        state.apply(DashboardEvent::AnalysisStarted);
        state.apply(DashboardEvent::AnalysisSucceeded("done".into()));
        state.apply(DashboardEvent::BaselineFailed("refresh failed".into()));
        state.apply(DashboardEvent::AnalysisSettled);

        assert!(!state.loading);
        assert_eq!(state.message.as_deref(), Some("done"));
        assert_eq!(state.error.as_deref(), Some("refresh failed"));
    }

    #[test]
    fn local_store_dispatches_and_snapshots() {
        let store = LocalStore::default();
        assert!(store.dispatch(DashboardEvent::AnalysisStarted));
        assert!(!store.dispatch(DashboardEvent::AnalysisStarted));
        assert!(store.read_with(|state| state.loading));
        assert_eq!(store.snapshot().message, None);
    }

    #[test]
    fn signal_store_applies_events_through_the_reducer() {
        use dioxus::prelude::*;

        thread_local! {
            static SEEN: RefCell<Option<(bool, bool, bool, ViewState)>> = const { RefCell::new(None) };
        }

        fn app() -> Element {
            let state = use_signal(ViewState::default);
            use_hook(|| {
                let first = state.dispatch(DashboardEvent::AnalysisStarted);
                let second = state.dispatch(DashboardEvent::AnalysisStarted);
                state.dispatch(DashboardEvent::BaselineLoaded(vec![row("login_fail")]));
                let loading = state.read_with(|view| view.loading);
                SEEN.with(|seen| *seen.borrow_mut() = Some((first, second, loading, state.snapshot())));
            });
            rsx! {}
        }

        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();

        let (first, second, loading, snapshot) =
            SEEN.with(|seen| seen.borrow_mut().take()).expect("component rendered");
        assert!(first);
        assert!(!second);
        assert!(loading);
        assert_eq!(
            snapshot,
            ViewState {
                baseline: vec![row("login_fail")],
                message: None,
                loading: true,
                error: None,
            }
        );
    }

    #[test]
    fn mount_guard_is_shared_between_clones() {
        let guard = MountGuard::default();
        let observer = guard.clone();
        assert!(observer.is_mounted());
        guard.detach();
        assert!(!observer.is_mounted());
    }

    #[test]
    fn view_state_omits_empty_fields_when_serialized() {
        let value = serde_json::to_value(ViewState::default()).unwrap();
        assert_eq!(value, serde_json::json!({ "baseline": [], "loading": false }));
    }
}
