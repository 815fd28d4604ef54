//! Fixed-cadence polling of the log snapshot endpoint.
//!
//! One fetch fires on mount and every two seconds thereafter. Ticks are
//! fire-and-forget: a slow response neither delays nor cancels the next
//! tick, and a failed poll only updates the connection indicator before the
//! next unconditional retry. Dropping the interval (component cleanup)
//! stops the timer but does not abort a request already in flight; a late
//! response is discarded along with the component.

use leptos::prelude::RwSignal;

use crate::state::logs::LogsState;

/// Poll cadence for `GET /logs`.
pub const POLL_INTERVAL_MS: u32 = 2000;

/// Start polling `/logs` into `logs`.
///
/// Must be called inside a component scope; the repeating timer is
/// cancelled when that scope is disposed.
#[cfg(feature = "csr")]
pub fn spawn_log_poller(logs: RwSignal<LogsState>) {
    use gloo_timers::callback::Interval;
    use leptos::prelude::on_cleanup;

    poll_once(logs);
    let interval = Interval::new(POLL_INTERVAL_MS, move || poll_once(logs));
    on_cleanup(move || drop(interval));
}

#[cfg(not(feature = "csr"))]
pub fn spawn_log_poller(logs: RwSignal<LogsState>) {
    let _ = logs;
}

/// Issue one snapshot fetch and fold the outcome into the shared state.
#[cfg(feature = "csr")]
fn poll_once(logs: RwSignal<LogsState>) {
    use leptos::prelude::Update;

    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_logs().await {
            Ok(entries) => logs.update(|s| s.apply_snapshot(entries)),
            Err(err) => {
                leptos::logging::warn!("log poll failed: {err}");
                logs.update(|s| s.apply_poll_error(&err));
            }
        }
    });
}
