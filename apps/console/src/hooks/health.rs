use dioxus::prelude::*;
use ids_console::models::BackendHealth;

#[cfg(target_arch = "wasm32")]
use {
    crate::API_CLIENT, gloo_timers::future::TimeoutFuture, ids_console::health::HealthTracker,
    tracing::warn,
};

/// Polls `/status` in the background; the nav bar renders the result.
pub fn use_backend_health() -> Signal<BackendHealth> {
    let health = use_signal(BackendHealth::default);

    #[cfg(target_arch = "wasm32")]
    use_future(move || {
        let mut health = health;
        async move {
            let Some(client) = API_CLIENT.get().cloned() else {
                health.set(BackendHealth {
                    online: false,
                    detail: Some("IDS client not initialized".into()),
                });
                return;
            };

            let mut tracker = HealthTracker::default();
            loop {
                let snapshot = match client.check_status().await {
                    Ok(detail) => tracker.record_success(detail).clone(),
                    Err(err) => {
                        warn!(failures = tracker.consecutive_failures() + 1, "status probe failed: {err}");
                        tracker.record_failure(&err).clone()
                    }
                };
                if *health.peek() != snapshot {
                    health.set(snapshot);
                }

                TimeoutFuture::new(tracker.next_interval_ms() as u32).await;
            }
        }
    });

    health
}
