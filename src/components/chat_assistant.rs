//! Floating assistant chat widget: toggle button plus overlay panel.

use leptos::prelude::*;

use crate::state::chat::{ChatState, Role};

/// Assistant chat overlay toggled by a floating button.
///
/// The toggle flips visibility only; the transcript lives in context and
/// survives close/reopen without replaying anything to the backend. A send
/// that never resolves leaves the widget loading; there is no retry and no
/// cancellation.
#[component]
pub fn ChatAssistant() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let open = RwSignal::new(false);
    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest message in view when the transcript grows or the
    // panel opens.
    Effect::new(move || {
        let _ = chat.get().messages.len();
        let _ = open.get();

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let mut message = None;
        chat.update(|c| message = c.begin_send(&input.get()));
        let Some(message) = message else {
            return;
        };
        input.set(String::new());

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let reply = crate::net::api::request_analysis(&message).await;
            chat.update(|c| c.finish_send(reply));
        });
        #[cfg(not(feature = "csr"))]
        drop(message);
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let send_disabled = move || chat.get().loading || input.get().trim().is_empty();

    view! {
        <div class="chat-widget">
            <button
                class="chat-widget__toggle"
                class:chat-widget__toggle--open=move || open.get()
                on:click=move |_| open.update(|o| *o = !*o)
                title="AI Log Analyst"
            >
                {move || if open.get() { "✕" } else { "✦" }}
            </button>

            <Show when=move || open.get()>
                <div class="chat-widget__panel">
                    <div class="chat-widget__header">
                        <span class="chat-widget__avatar">"◉"</span>
                        <div>
                            <h3 class="chat-widget__name">"AI Log Analyst"</h3>
                            <span class="chat-widget__presence">"Online & Listening"</span>
                        </div>
                    </div>

                    <div class="chat-widget__messages" node_ref=messages_ref>
                        {move || {
                            chat.get()
                                .messages
                                .iter()
                                .map(|msg| {
                                    let text = msg.text.clone();
                                    let is_user = msg.role == Role::User;
                                    view! {
                                        <div
                                            class="chat-widget__message"
                                            class:chat-widget__message--user=is_user
                                        >
                                            {text}
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                        {move || {
                            chat.get().loading.then(|| {
                                view! {
                                    <div class="chat-widget__typing">
                                        <span></span>
                                        <span></span>
                                        <span></span>
                                    </div>
                                }
                            })
                        }}
                    </div>

                    <div class="chat-widget__input-row">
                        <input
                            class="chat-widget__input"
                            type="text"
                            placeholder="Ask about 500 errors, latency..."
                            prop:value=move || input.get()
                            on:input=move |ev| input.set(event_target_value(&ev))
                            on:keydown=on_keydown
                        />
                        <button class="chat-widget__send" on:click=on_click disabled=send_disabled>
                            "Send"
                        </button>
                    </div>
                    <p class="chat-widget__hint">"AI can make mistakes. Verify important logs."</p>
                </div>
            </Show>
        </div>
    }
}
