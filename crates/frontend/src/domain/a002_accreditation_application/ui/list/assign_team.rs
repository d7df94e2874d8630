use leptos::prelude::*;
use thaw::*;

use crate::domain::a002_accreditation_application::repository::INSPECTION_TEAMS;
use crate::shared::modal_frame::ModalFrame;

/// Team picker shown before an inspection is scheduled
#[component]
pub fn AssignTeamModal(
    #[prop(into)]
    school_name: String,
    /// Called with the chosen team
    on_confirm: Callback<String>,
    on_close: Callback<()>,
) -> impl IntoView {
    let selected = RwSignal::new(None::<&'static str>);

    view! {
        <ModalFrame title=format!("Schedule inspection: {}", school_name) on_close=on_close>
            <div class="assign-team">
                {INSPECTION_TEAMS
                    .iter()
                    .map(|team| {
                        let team: &'static str = team;
                        view! {
                            <label class="assign-team__option">
                                <input
                                    type="radio"
                                    name="inspection-team"
                                    prop:checked=move || selected.get() == Some(team)
                                    on:change=move |_| selected.set(Some(team))
                                />
                                {team}
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="modal__actions">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || selected.get().is_none())
                    on_click=move |_| {
                        if let Some(team) = selected.get_untracked() {
                            on_confirm.run(team.to_string());
                        }
                    }
                >
                    "Schedule"
                </Button>
            </div>
        </ModalFrame>
    }
}
