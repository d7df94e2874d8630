use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::session::provide_session;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Active screen, mirrored into the `view` query param
    let ctx = AppGlobalContext::new();
    provide_context(ctx);
    ctx.init_url_integration();

    provide_context(ToastService::new());
    provide_session();

    view! {
        <Shell />
        <ToastHost />
    }
}
