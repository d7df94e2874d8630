use contracts::system::roles::Role;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;
use crate::shared::storage::{local_repository, KeyValueStore, Repository};

pub const SESSION_KEY: &str = "accreditation_session";

/// Everything the dashboard remembers between visits
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionBlob {
    #[serde(default)]
    pub role: Role,
}

pub fn read_role<S: KeyValueStore>(repo: &Repository<S>) -> Role {
    repo.get_or_default::<SessionBlob>(SESSION_KEY).role
}

pub fn write_role<S: KeyValueStore>(repo: &Repository<S>, role: Role) -> Result<(), AppError> {
    let mut blob = repo.get_or_default::<SessionBlob>(SESSION_KEY);
    blob.role = role;
    repo.set(SESSION_KEY, &blob)
}

/// Role saved in localStorage, `School` when nothing usable is stored
pub fn load_role() -> Role {
    read_role(&local_repository())
}

pub fn save_role(role: Role) {
    if let Err(e) = write_role(&local_repository(), role) {
        log::warn!("could not persist role: {}", e);
    }
}
