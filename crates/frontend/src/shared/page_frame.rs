//! PageFrame: root wrapper of every screen.
//!
//! Sets `id` in the format `"{entity}--list"` (e.g. `"a001_school--list"`) so
//! a DOM id copied from the inspector leads straight to `domain/a001_school/`.

use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    /// Additional CSS classes appended after `page`
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let full_class = if class.is_empty() {
        "page".to_string()
    } else {
        format!("page {class}")
    };

    view! {
        <div id=page_id class=full_class>
            {children()}
        </div>
    }
}
