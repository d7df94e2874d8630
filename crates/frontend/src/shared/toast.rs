//! Transient notification shown at the bottom of the screen.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use super::config::config;

#[derive(Clone, Copy)]
pub struct ToastService {
    message: RwSignal<Option<String>>,
    generation: StoredValue<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            message: RwSignal::new(None),
            generation: StoredValue::new(0),
        }
    }

    /// Shows `message`, replacing any visible toast; it hides itself after
    /// `ui.toast_timeout_ms`.
    pub fn show(&self, message: impl Into<String>) {
        let generation = self.generation.get_value().wrapping_add(1);
        self.generation.set_value(generation);
        self.message.set(Some(message.into()));

        let this = *self;
        Timeout::new(config().ui.toast_timeout_ms, move || {
            // A newer toast owns the slot
            if this.generation.try_get_value() == Some(generation) {
                this.message.try_set(None);
            }
        })
        .forget();
    }

    pub fn dismiss(&self) {
        self.message.set(None);
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toast() -> Option<ToastService> {
    use_context::<ToastService>()
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let Some(toast) = use_toast() else {
        log::warn!("ToastHost rendered without ToastService context");
        return view! { <></> }.into_any();
    };

    view! {
        {move || toast.message.get().map(|text| view! {
            <div class="toast" role="status" on:click=move |_| toast.dismiss()>
                {text}
            </div>
        })}
    }
    .into_any()
}
