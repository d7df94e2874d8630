pub mod center;
pub mod global_context;
pub mod header;

use leptos::prelude::*;

/// Application shell.
///
/// ```text
/// +------------------------------------------+
/// |  Header: screens         role selector   |
/// +------------------------------------------+
/// |              active screen               |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header />
            <div class="app-body">
                <center::Center />
            </div>
        </div>
    }
}
