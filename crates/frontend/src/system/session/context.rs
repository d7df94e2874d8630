use contracts::system::roles::Role;
use leptos::prelude::*;

use super::storage;

/// Role the dashboard is currently acting as
#[derive(Clone, Copy)]
pub struct SessionContext {
    role: RwSignal<Role>,
}

impl SessionContext {
    pub fn role(&self) -> Signal<Role> {
        self.role.into()
    }

    /// Switches role and remembers it for the next visit
    pub fn set_role(&self, role: Role) {
        if self.role.get_untracked() == role {
            return;
        }
        log::info!("acting as {}", role.display_name());
        self.role.set(role);
        storage::save_role(role);
    }
}

/// Restores the stored role and puts the session into context
pub fn provide_session() -> SessionContext {
    let session = SessionContext {
        role: RwSignal::new(storage::load_role()),
    };
    provide_context(session);
    session
}

pub fn use_session() -> Option<SessionContext> {
    use_context::<SessionContext>()
}

/// Current role; `School` outside a session provider
pub fn use_role() -> Signal<Role> {
    match use_session() {
        Some(session) => session.role(),
        None => {
            log::warn!("use_role called without a session context");
            Signal::derive(Role::default)
        }
    }
}
