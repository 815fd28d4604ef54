//! Log feed panel: severity filter, connection indicator, and the entries
//! table.

use leptos::prelude::*;

use crate::net::poller;
use crate::net::types::LogEntry;
use crate::state::logs::{LevelFilter, LogsState, Severity};
use crate::util::time;

/// Panel showing the live log table with a severity filter bar and a
/// connection-health pill. Starts the snapshot poller on mount.
#[component]
pub fn LogFeedPanel() -> impl IntoView {
    let logs = expect_context::<RwSignal<LogsState>>();

    poller::spawn_log_poller(logs);

    view! {
        <section class="log-feed">
            <header class="log-feed__header">
                <div>
                    <h2 class="log-feed__title">"System Activity"</h2>
                    <p class="log-feed__subtitle">"Real-time log ingestion stream"</p>
                </div>
                <div class="log-feed__controls">
                    <FilterBar logs=logs/>
                    <ConnectionPill logs=logs/>
                </div>
            </header>

            <div class="log-feed__scroll">
                <table class="log-feed__table">
                    <thead>
                        <tr>
                            <th class="log-feed__th log-feed__th--time">"Timestamp"</th>
                            <th class="log-feed__th log-feed__th--level">"Level"</th>
                            <th class="log-feed__th log-feed__th--service">"Service"</th>
                            <th class="log-feed__th">"Message"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let state = logs.get();
                            (state.entries.is_empty() && !state.loading).then(|| {
                                view! {
                                    <tr>
                                        <td colspan="4" class="log-feed__empty">
                                            "Waiting for logs..."
                                        </td>
                                    </tr>
                                }
                            })
                        }}
                        <For
                            each=move || logs.get().visible()
                            key=|entry| entry.id
                            children=move |entry: LogEntry| {
                                let badge = Severity::classify(&entry.level).badge_class();
                                let clock = time::clock_time(&entry.timestamp);
                                view! {
                                    <tr class="log-feed__row">
                                        <td class="log-feed__time">{clock}</td>
                                        <td>
                                            <span class=badge>{entry.level}</span>
                                        </td>
                                        <td class="log-feed__service">{entry.service}</td>
                                        <td class="log-feed__message">{entry.message}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </section>
    }
}

/// Severity filter buttons. The active filter is an exact-case match
/// against entry levels.
#[component]
fn FilterBar(logs: RwSignal<LogsState>) -> impl IntoView {
    view! {
        <div class="log-feed__filters">
            {LevelFilter::OPTIONS
                .into_iter()
                .map(|option| {
                    view! {
                        <button
                            class="log-feed__filter"
                            class:log-feed__filter--active=move || logs.get().filter == option
                            on:click=move |_| logs.update(|s| s.filter = option)
                        >
                            {option.label()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// Connection-health pill: "Connected" after a good poll, otherwise the
/// latest poll error.
#[component]
fn ConnectionPill(logs: RwSignal<LogsState>) -> impl IntoView {
    let error = move || logs.get().error;

    view! {
        <span class="log-feed__status" class:log-feed__status--error=move || error().is_some()>
            <span class="log-feed__status-dot"></span>
            {move || error().unwrap_or_else(|| "Connected".to_owned())}
        </span>
    }
}
