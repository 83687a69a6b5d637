//! Cancellable one-shot timers for the assistant's canned replies.
//!
//! Every accepted chat send reserves an id and stores the timer handle under
//! it. When the timer fires it retires its own id: the spent handle moves to
//! a release list that is cleared on the next send or on teardown, since a
//! callback cannot drop its own handle while running. Dropping a pending
//! handle cancels the timer, so clearing the set on teardown guarantees no
//! reply lands after the widget is gone.

use std::collections::BTreeMap;

use crate::state::chat::ChatState;

#[cfg(test)]
#[path = "reply_timer_test.rs"]
mod reply_timer_test;

/// Pending reply timers keyed by reservation id.
#[derive(Debug)]
pub struct PendingReplies<H> {
    next_id: u64,
    handles: BTreeMap<u64, H>,
    spent: Vec<H>,
}

impl<H> Default for PendingReplies<H> {
    fn default() -> Self {
        Self { next_id: 0, handles: BTreeMap::new(), spent: Vec::new() }
    }
}

impl<H> PendingReplies<H> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the id the next handle will be stored under.
    pub fn reserve(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Store `handle` under a previously reserved `id`.
    pub fn insert(&mut self, id: u64, handle: H) {
        self.handles.insert(id, handle);
    }

    /// Mark a fired timer as done without dropping its handle yet.
    ///
    /// Returns `false` if `id` was not pending.
    pub fn retire(&mut self, id: u64) -> bool {
        match self.handles.remove(&id) {
            Some(handle) => {
                self.spent.push(handle);
                true
            }
            None => false,
        }
    }

    /// Drop handles of timers that already fired. Returns how many.
    pub fn release_spent(&mut self) -> usize {
        let count = self.spent.len();
        self.spent.clear();
        count
    }

    /// Drop every pending and spent handle. Returns how many were pending.
    pub fn cancel_all(&mut self) -> usize {
        let count = self.handles.len();
        self.handles.clear();
        self.spent.clear();
        count
    }

    /// Number of timers that have not fired yet.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    #[must_use]
    pub fn spent_len(&self) -> usize {
        self.spent.len()
    }
}

/// Send `text` and, if it was accepted, schedule exactly one reply.
///
/// `make` builds the timer handle for the reserved id. Blank text appends
/// nothing and schedules nothing. Handles of already fired timers are
/// released first.
pub fn send_and_schedule<H>(
    chat: &mut ChatState,
    pending: &mut PendingReplies<H>,
    text: &str,
    make: impl FnOnce(u64) -> H,
) -> bool {
    pending.release_spent();
    if !chat.send(text) {
        return false;
    }
    let id = pending.reserve();
    pending.insert(id, make(id));
    true
}

#[cfg(feature = "hydrate")]
pub use browser::{ReplyTimers, submit_draft};

#[cfg(feature = "hydrate")]
mod browser {
    use gloo_timers::callback::Timeout;
    use leptos::prelude::*;

    use super::{PendingReplies, send_and_schedule};
    use crate::state::chat::{ChatState, REPLY_DELAY_MS};

    pub type ReplyTimers = PendingReplies<Timeout>;

    fn reply_timeout(id: u64, timers: StoredValue<ReplyTimers, LocalStorage>, chat: RwSignal<ChatState>) -> Timeout {
        Timeout::new(REPLY_DELAY_MS, move || {
            if chat.try_update(ChatState::push_canned_reply).is_none() {
                log::debug!("chat reply {id} fired after teardown");
            }
            timers.try_update_value(|pending| pending.retire(id));
        })
    }

    /// Send the current draft and schedule its reply `REPLY_DELAY_MS` from now.
    ///
    /// The reply is appended to whatever the transcript holds when the timer
    /// fires. Returns whether the draft was accepted.
    pub fn submit_draft(timers: StoredValue<ReplyTimers, LocalStorage>, chat: RwSignal<ChatState>) -> bool {
        let draft = chat.with_untracked(|state| state.draft.clone());
        let sent = chat
            .try_update(|state| {
                timers.try_update_value(|pending| {
                    send_and_schedule(state, pending, &draft, |id| reply_timeout(id, timers, chat))
                })
            })
            .flatten()
            .unwrap_or(false);
        if sent {
            log::debug!("chat: message sent, reply scheduled");
        }
        sent
    }
}
