//! Root application component and shared state contexts.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::chat_assistant::ChatAssistant;
use crate::components::log_feed::LogFeedPanel;
use crate::state::chat::ChatState;
use crate::state::logs::LogsState;

/// Root application component.
///
/// Provides the per-widget state contexts and lays out the page chrome.
/// The two widgets share nothing beyond the backend base URL.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let logs = RwSignal::new(LogsState::default());
    let chat = RwSignal::new(ChatState::default());

    provide_context(logs);
    provide_context(chat);

    view! {
        <Title text="LogDeck"/>

        <div class="app-shell">
            <nav class="topbar">
                <div class="topbar__brand">
                    <span class="topbar__mark">"⌁"</span>
                    <div>
                        <h1 class="topbar__name">"LogDeck"</h1>
                        <span class="topbar__tagline">"Log Intelligence Console"</span>
                    </div>
                </div>
                <div class="topbar__status">
                    <span class="topbar__status-dot"></span>
                    "System Healthy"
                </div>
            </nav>

            <main class="app-shell__main">
                <LogFeedPanel/>
            </main>

            <ChatAssistant/>
        </div>
    }
}
