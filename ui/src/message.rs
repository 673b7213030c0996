//! Transient status messages ("toasts").
//!
//! Pages report the outcome of an action through [`MessageState`]; the
//! [`MessageHost`] renders the current message and clears it after a few seconds.

use dioxus::prelude::*;

const MESSAGE_TTL_SECS: u64 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub kind: MessageKind,
    pub text: String,
}

/// Handle for posting transient messages from anywhere under a [`MessageHost`].
#[derive(Clone, Copy, PartialEq)]
pub struct MessageState {
    current: Signal<Option<Message>>,
    generation: Signal<u64>,
}

impl MessageState {
    pub fn success(&mut self, text: impl Into<String>) {
        self.show(MessageKind::Success, text.into());
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.show(MessageKind::Error, text.into());
    }

    pub fn clear(&mut self) {
        self.current.set(None);
    }

    fn show(&mut self, kind: MessageKind, text: String) {
        let generation = self.generation() + 1;
        self.generation.set(generation);
        self.current.set(Some(Message { kind, text }));

        let mut state = *self;
        spawn(async move {
            sleep_secs(MESSAGE_TTL_SECS).await;
            // A newer message restarts the clock; only the latest one expires.
            if state.generation() == generation {
                state.current.set(None);
            }
        });
    }

    fn generation(&self) -> u64 {
        (self.generation)()
    }
}

/// Get the message state provided by the nearest [`MessageHost`].
pub fn use_messages() -> MessageState {
    use_context::<MessageState>()
}

/// Provides [`MessageState`] and renders the active message above `children`.
#[component]
pub fn MessageHost(children: Element) -> Element {
    let current = use_signal(|| Option::<Message>::None);
    let generation = use_signal(|| 0u64);
    let state = use_context_provider(|| MessageState {
        current,
        generation,
    });

    rsx! {
        if let Some(message) = (state.current)() {
            div {
                class: match message.kind {
                    MessageKind::Success => "message message-success",
                    MessageKind::Error => "message message-error",
                },
                "{message.text}"
            }
        }
        {children}
    }
}

async fn sleep_secs(secs: u64) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(std::time::Duration::from_secs(secs)).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_secs(secs)).await;
}
