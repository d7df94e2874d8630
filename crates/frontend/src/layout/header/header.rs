use contracts::system::roles::Role;
use leptos::prelude::*;

use crate::layout::global_context::{AppGlobalContext, AppView};
use crate::shared::icons;
use crate::system::session::use_session;

#[component]
pub fn Header() -> impl IntoView {
    let Some(ctx) = use_context::<AppGlobalContext>() else {
        log::warn!("Header rendered without AppGlobalContext");
        return view! { <></> }.into_any();
    };

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">"Accreditation"</span>
                <nav class="header__nav">
                    {AppView::all()
                        .into_iter()
                        .map(|screen| view! {
                            <button
                                class=move || if ctx.active.get() == screen {
                                    "header__nav-item header__nav-item--active"
                                } else {
                                    "header__nav-item"
                                }
                                on:click=move |_| ctx.open(screen)
                            >
                                {icons::icon(screen.icon_name())}
                                <span>{screen.title()}</span>
                            </button>
                        })
                        .collect_view()}
                </nav>
            </div>
            <div class="header__actions">
                <RoleSelect />
            </div>
        </header>
    }
    .into_any()
}

/// Picks the role the dashboard acts as
#[component]
fn RoleSelect() -> impl IntoView {
    let Some(session) = use_session() else {
        return view! { <></> }.into_any();
    };
    let role = session.role();

    view! {
        <label class="role-select">
            <span class="role-select__label">"Acting as"</span>
            <select
                class="role-select__field"
                prop:value=move || role.get().code()
                on:change=move |ev| {
                    let code = event_target_value(&ev);
                    match Role::from_code(&code) {
                        Some(next) => session.set_role(next),
                        None => log::warn!("unknown role code '{}'", code),
                    }
                }
            >
                {Role::all()
                    .into_iter()
                    .map(|r| view! {
                        <option value=r.code() selected=move || role.get() == r>
                            {r.display_name()}
                        </option>
                    })
                    .collect_view()}
            </select>
        </label>
    }
    .into_any()
}
