mod assign_team;
mod state;

use contracts::domain::a002_accreditation_application::aggregate::{
    Application, ApplicationId, ApplicationStatus,
};
use contracts::system::roles::{can_transition, Role};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a002_accreditation_application::repository::{
    self, load_applications, needs_team, reset_applications, WorkflowError,
};
use crate::shared::components::table::paging::{page_slice, total_pages};
use crate::shared::components::table::{DataTable, TableColumn};
use crate::shared::config::config;
use crate::shared::icons::icon;
use crate::shared::list_utils::sort_list;
use crate::shared::page_frame::PageFrame;
use crate::shared::storage::local_repository;
use crate::shared::toast::use_toast;
use crate::system::session::use_role;
use assign_team::AssignTeamModal;
use state::create_state;

const TABLE_ID: &str = "a002-application-table";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowAction {
    Advance,
    Reject,
}

fn application_columns(
    role: Signal<Role>,
    on_action: Callback<(ApplicationId, RowAction)>,
) -> Vec<TableColumn<Application>> {
    vec![
        TableColumn::new("schoolName", "School").sortable().min_width(220.0),
        TableColumn::new("district", "District").sortable(),
        TableColumn::new("status", "Status").sortable().min_width(160.0),
        TableColumn::new("inspectionTeam", "Inspection team").sortable(),
        TableColumn::new("updatedAt", "Updated").sortable().min_width(140.0),
        TableColumn::new("actions", "Actions")
            .min_width(220.0)
            .render(move |_, app: &Application| {
                let id = app.id;
                let status = app.status;
                view! {
                    <div class="table__actions">
                        {move || {
                            let role = role.get();
                            let forward = status.next().filter(|to| can_transition(role, status, *to));
                            let can_reject = can_transition(role, status, ApplicationStatus::Rejected);
                            view! {
                                {forward.map(|to| view! {
                                    <button
                                        class="button button--primary button--small"
                                        on:click=move |_| on_action.run((id, RowAction::Advance))
                                    >
                                        {icon("arrow-right")}
                                        {format!(" {}", to.display_name())}
                                    </button>
                                })}
                                {can_reject.then(|| view! {
                                    <button
                                        class="button button--ghost button--small"
                                        on:click=move |_| on_action.run((id, RowAction::Reject))
                                    >
                                        "Reject"
                                    </button>
                                })}
                            }
                        }}
                    </div>
                }
                .into_any()
            }),
    ]
}

#[component]
pub fn ApplicationsList() -> impl IntoView {
    let state = create_state();
    let role = use_role();
    let toast = use_toast();
    let page_size = config().table.page_size;
    let assigning = RwSignal::new(None::<Application>);

    let load_data = move || {
        let items = load_applications(&local_repository());
        log::debug!("loaded {} applications", items.len());
        state.update(|s| {
            s.items = items;
            s.is_loaded = true;
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let notify = move |message: String| match toast {
        Some(toast) => toast.show(message),
        None => log::info!("{}", message),
    };

    let finish = move |result: Result<Application, WorkflowError>| match result {
        Ok(updated) => {
            let message = format!("{} is now {}", updated.school_name, updated.status.display_name());
            state.update(|s| {
                if let Some(slot) = s.items.iter_mut().find(|a| a.id == updated.id) {
                    *slot = updated;
                }
            });
            notify(message);
        }
        Err(e) => {
            log::warn!("workflow action failed: {}", e);
            notify(e.to_string());
        }
    };

    let on_action = Callback::new(move |(id, action): (ApplicationId, RowAction)| {
        let role = role.get_untracked();
        let repo = local_repository();
        match action {
            RowAction::Advance => {
                let pending = state.with_untracked(|s| s.items.iter().find(|a| a.id == id).cloned());
                match pending {
                    Some(app) if needs_team(app.status) => assigning.set(Some(app)),
                    _ => finish(repository::advance(&repo, id, role)),
                }
            }
            RowAction::Reject => finish(repository::reject(&repo, id, role)),
        }
    });

    let confirm_team = Callback::new(move |team: String| {
        if let Some(app) = assigning.get_untracked() {
            finish(repository::schedule_inspection(
                &local_repository(),
                app.id,
                role.get_untracked(),
                &team,
            ));
        }
        assigning.set(None);
    });

    let reset_data = move || {
        let items = reset_applications(&local_repository());
        state.update(|s| {
            s.items = items;
            s.page = 1;
        });
        notify("Sample applications restored".to_string());
    };

    let sorted = Memo::new(move |_| {
        state.with(|s| {
            let mut rows = s.items.clone();
            sort_list(&mut rows, &s.sort);
            rows
        })
    });

    let current_page = Signal::derive(move || state.with(|s| s.page));
    let total_items = Signal::derive(move || sorted.with(Vec::len));
    let page_rows = Signal::derive(move || {
        sorted.with(|rows| page_slice(rows, current_page.get(), page_size).to_vec())
    });
    let sort = Signal::derive(move || state.with(|s| s.sort.clone()));

    let toggle_sort = Callback::new(move |field: String| {
        state.update(|s| s.sort.toggle(&field));
    });

    let go_to_page = Callback::new(move |page: usize| {
        let last = total_pages(total_items.get_untracked(), page_size);
        state.update(|s| s.page = page.clamp(1, last));
    });

    view! {
        <PageFrame page_id="a002_accreditation_application--list">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Applications"</h1>
                    <Badge>{move || total_items.get().to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <span class="page__hint">
                        {move || format!("Actions shown for: {}", role.get().display_name())}
                    </span>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| load_data()>
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| reset_data()>
                        "Reset sample data"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <DataTable
                    columns=application_columns(role, on_action)
                    rows=page_rows
                    sort=sort
                    on_sort=toggle_sort
                    current_page=current_page
                    page_size=page_size
                    total_items=total_items
                    on_page_change=go_to_page
                    empty_message="No applications yet"
                    is_loading=Signal::derive(move || !state.with(|s| s.is_loaded))
                    table_id=TABLE_ID
                />
            </div>

            {move || assigning.get().map(|app| view! {
                <AssignTeamModal
                    school_name=app.school_name
                    on_confirm=confirm_team
                    on_close=Callback::new(move |_| assigning.set(None))
                />
            })}
        </PageFrame>
    }
}
