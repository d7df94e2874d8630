//! Accreditation applications kept in local storage.
//!
//! All reads and writes go through [`Repository`]; the list is seeded with
//! sample applications the first time it is opened.

use chrono::{Duration, Utc};
use contracts::domain::a002_accreditation_application::aggregate::{
    Application, ApplicationId, ApplicationStatus,
};
use contracts::system::roles::{can_transition, Role};
use thiserror::Error;

use crate::shared::error::AppError;
use crate::shared::storage::{KeyValueStore, Repository};

pub const APPLICATIONS_KEY: &str = "accreditation_applications";

/// Teams a district officer can send to a school
pub const INSPECTION_TEAMS: &[&str] = &["Team A", "Team B", "Team C", "Team D"];

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("application {0} not found")]
    NotFound(String),

    #[error("application is already {0}")]
    Terminal(&'static str),

    #[error("action not available for an application in {0}")]
    NotAvailable(&'static str),

    #[error("{role} may not move an application from {from} to {to}")]
    Forbidden {
        role: &'static str,
        from: &'static str,
        to: &'static str,
    },

    #[error("unknown inspection team '{0}'")]
    UnknownTeam(String),

    #[error(transparent)]
    Storage(#[from] AppError),
}

fn sample_applications() -> Vec<Application> {
    let samples = [
        ("Lycee de Kigali", "Nyarugenge", ApplicationStatus::Draft, None),
        ("GS Huye", "Huye", ApplicationStatus::Submitted, None),
        ("ES Gasabo", "Gasabo", ApplicationStatus::DistrictReview, None),
        ("College Saint Andre", "Nyarugenge", ApplicationStatus::InspectionScheduled, Some("Team A")),
        ("GS Musanze", "Musanze", ApplicationStatus::Inspected, Some("Team B")),
        ("TSS Rubavu", "Rubavu", ApplicationStatus::Approved, Some("Team B")),
        ("GS Nyagatare", "Nyagatare", ApplicationStatus::Rejected, Some("Team C")),
    ];

    let now = Utc::now();
    samples
        .into_iter()
        .enumerate()
        .map(|(i, (name, district, status, team))| {
            let created = now - Duration::days(30 - i as i64 * 3);
            Application {
                id: ApplicationId::new_v4(),
                school_name: name.to_string(),
                district: district.to_string(),
                status,
                created_at: created,
                updated_at: created,
                inspection_team: team.map(str::to_string),
            }
        })
        .collect()
}

/// Stored applications; seeds and persists the sample set when the key is
/// missing or unreadable.
pub fn load_applications<S: KeyValueStore>(repo: &Repository<S>) -> Vec<Application> {
    if let Some(items) = repo.get::<Vec<Application>>(APPLICATIONS_KEY) {
        return items;
    }
    let seeded = sample_applications();
    if let Err(e) = repo.set(APPLICATIONS_KEY, &seeded) {
        log::warn!("could not persist seeded applications: {}", e);
    }
    seeded
}

/// Drops the stored list and returns a freshly seeded one.
pub fn reset_applications<S: KeyValueStore>(repo: &Repository<S>) -> Vec<Application> {
    repo.remove(APPLICATIONS_KEY);
    load_applications(repo)
}

pub fn save_applications<S: KeyValueStore>(
    repo: &Repository<S>,
    items: &[Application],
) -> Result<(), AppError> {
    repo.set(APPLICATIONS_KEY, &items)
}

/// Moves application `id` one tier forward on behalf of `role` and
/// persists the whole list. Reviewed applications go through
/// [`schedule_inspection`] instead.
pub fn advance<S: KeyValueStore>(
    repo: &Repository<S>,
    id: ApplicationId,
    role: Role,
) -> Result<Application, WorkflowError> {
    transition(repo, id, role, |from| from.next().filter(|_| !needs_team(from)), |_| {})
}

/// Assigns `team` and moves a reviewed application to `InspectionScheduled`.
pub fn schedule_inspection<S: KeyValueStore>(
    repo: &Repository<S>,
    id: ApplicationId,
    role: Role,
    team: &str,
) -> Result<Application, WorkflowError> {
    if !INSPECTION_TEAMS.contains(&team) {
        return Err(WorkflowError::UnknownTeam(team.to_string()));
    }
    transition(
        repo,
        id,
        role,
        |from| (from == ApplicationStatus::DistrictReview).then_some(ApplicationStatus::InspectionScheduled),
        |app| app.inspection_team = Some(team.to_string()),
    )
}

/// Whether the forward action from `status` needs a team assignment first
pub fn needs_team(status: ApplicationStatus) -> bool {
    status == ApplicationStatus::DistrictReview
}

/// Rejects application `id` from the review or inspection tier.
pub fn reject<S: KeyValueStore>(
    repo: &Repository<S>,
    id: ApplicationId,
    role: Role,
) -> Result<Application, WorkflowError> {
    transition(repo, id, role, |_| Some(ApplicationStatus::Rejected), |_| {})
}

fn transition<S: KeyValueStore>(
    repo: &Repository<S>,
    id: ApplicationId,
    role: Role,
    target: impl FnOnce(ApplicationStatus) -> Option<ApplicationStatus>,
    apply: impl FnOnce(&mut Application),
) -> Result<Application, WorkflowError> {
    let mut items = load_applications(repo);
    let app = items
        .iter_mut()
        .find(|a| a.id == id)
        .ok_or_else(|| WorkflowError::NotFound(id.as_string()))?;

    let from = app.status;
    if from.is_terminal() {
        return Err(WorkflowError::Terminal(from.display_name()));
    }
    let to = target(from).ok_or(WorkflowError::NotAvailable(from.display_name()))?;

    if !can_transition(role, from, to) {
        return Err(WorkflowError::Forbidden {
            role: role.display_name(),
            from: from.display_name(),
            to: to.display_name(),
        });
    }

    apply(app);
    app.move_to(to);
    let updated = app.clone();
    save_applications(repo, &items)?;
    log::debug!("application {} moved {:?} -> {:?}", id.as_string(), from, to);
    Ok(updated)
}
