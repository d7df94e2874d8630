use leptos::prelude::*;

use crate::domain::a001_school::ui::list::SchoolSearchList;
use crate::domain::a002_accreditation_application::ui::list::ApplicationsList;
use crate::layout::global_context::{AppGlobalContext, AppView};

/// Renders the active screen; switching screens unmounts the previous one
#[component]
pub fn Center() -> impl IntoView {
    let active = use_context::<AppGlobalContext>()
        .map(|ctx| Signal::from(ctx.active))
        .unwrap_or_else(|| Signal::derive(AppView::default));

    view! {
        <main data-zone="center" class="app-main">
            {move || match active.get() {
                AppView::Schools => view! { <SchoolSearchList /> }.into_any(),
                AppView::Applications => view! { <ApplicationsList /> }.into_any(),
            }}
        </main>
    }
}
