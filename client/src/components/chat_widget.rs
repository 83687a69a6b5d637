//! Floating AI assistant: launcher button and chat panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once beside the page content and independent of the wizard. Every
//! accepted send schedules one canned reply on a timer owned by this widget
//! instance; unmounting cancels whatever is still pending.

#[cfg(test)]
#[path = "chat_widget_test.rs"]
mod chat_widget_test;

use leptos::prelude::*;

use crate::components::icon::IconGlyph;
use crate::state::chat::{ChatRole, ChatState};
use crate::util::icons::Icon;
#[cfg(feature = "hydrate")]
use crate::util::reply_timer::{ReplyTimers, submit_draft};

fn message_row_class(role: ChatRole) -> &'static str {
    match role {
        ChatRole::User => "chat__row chat__row--user",
        ChatRole::Assistant => "chat__row chat__row--assistant",
    }
}

fn bubble_class(role: ChatRole) -> &'static str {
    match role {
        ChatRole::User => "chat__bubble chat__bubble--user",
        ChatRole::Assistant => "chat__bubble chat__bubble--assistant",
    }
}

#[component]
pub fn ChatWidget() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    let timers = StoredValue::new_local(ReplyTimers::new());

    #[cfg(feature = "hydrate")]
    on_cleanup(move || {
        let cancelled = timers.try_update_value(|pending| pending.cancel_all()).unwrap_or(0);
        if cancelled > 0 {
            log::debug!("chat: cancelled {cancelled} pending replies");
        }
    });

    Effect::new(move || {
        let _ = chat.with(|c| (c.messages.len(), c.open));

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let do_send = move || {
        #[cfg(feature = "hydrate")]
        {
            submit_draft(timers, chat);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            chat.update(|state| {
                state.submit_draft();
            });
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };
    let on_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        chat.update(|c| c.draft = value);
    };
    let on_open = move |_| chat.update(|c| c.set_open(true));
    let on_close = move |_| chat.update(|c| c.set_open(false));
    let on_send_click = move |_| do_send();

    let is_open = move || chat.with(|c| c.open);

    view! {
        <div class="chat">
            <Show
                when=is_open
                fallback=move || {
                    view! {
                        <button type="button" class="chat__launcher" aria-label="Open assistant" on:click=on_open>
                            <IconGlyph icon=Icon::Bot />
                        </button>
                    }
                }
            >
                <div class="chat__panel">
                    <div class="chat__header">
                        <div class="chat__title">
                            <IconGlyph icon=Icon::Bot extra_class="chat__title-icon" />
                            <h3>"AI Assistant"</h3>
                        </div>
                        <button type="button" class="chat__close" aria-label="Close assistant" on:click=on_close>
                            <IconGlyph icon=Icon::Close />
                        </button>
                    </div>
                    <div class="chat__messages" node_ref=messages_ref>
                        <For
                            each=move || chat.with(|c| c.messages.clone())
                            key=|msg| msg.seq
                            children=|msg| {
                                view! {
                                    <div class=message_row_class(msg.role)>
                                        <div class=bubble_class(msg.role)>{msg.text}</div>
                                    </div>
                                }
                            }
                        />
                    </div>
                    <div class="chat__composer">
                        <input
                            class="chat__input"
                            type="text"
                            placeholder="Ask anything..."
                            prop:value=move || chat.with(|c| c.draft.clone())
                            on:input=on_input
                            on:keydown=on_keydown
                        />
                        <button type="button" class="chat__send" aria-label="Send message" on:click=on_send_click>
                            <IconGlyph icon=Icon::Send />
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
