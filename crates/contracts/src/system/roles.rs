use serde::{Deserialize, Serialize};

use crate::domain::a002_accreditation_application::aggregate::ApplicationStatus;

/// Dashboard role stored in the local session blob
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    School,
    DistrictOfficer,
    Inspector,
    Administrator,
}

impl Role {
    pub fn code(&self) -> &'static str {
        match self {
            Role::School => "school",
            Role::DistrictOfficer => "district_officer",
            Role::Inspector => "inspector",
            Role::Administrator => "administrator",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::School => "School",
            Role::DistrictOfficer => "District officer",
            Role::Inspector => "Inspector",
            Role::Administrator => "Administrator",
        }
    }

    pub fn all() -> Vec<Role> {
        vec![
            Role::School,
            Role::DistrictOfficer,
            Role::Inspector,
            Role::Administrator,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|r| r.code() == code)
    }
}

/// Whether `from -> to` is an edge of the application workflow at all.
fn is_workflow_edge(from: ApplicationStatus, to: ApplicationStatus) -> bool {
    use ApplicationStatus::*;
    from.next() == Some(to) || matches!((from, to), (DistrictReview, Rejected) | (Inspected, Rejected))
}

/// Capability check consulted before any workflow action is offered.
///
/// Administrators may perform every workflow edge; other roles only the
/// edges of their own approval tier.
pub fn can_transition(role: Role, from: ApplicationStatus, to: ApplicationStatus) -> bool {
    use ApplicationStatus::*;

    if !is_workflow_edge(from, to) {
        return false;
    }

    match role {
        Role::Administrator => true,
        Role::School => matches!((from, to), (Draft, Submitted)),
        Role::DistrictOfficer => matches!(
            (from, to),
            (Submitted, DistrictReview) | (DistrictReview, InspectionScheduled) | (DistrictReview, Rejected)
        ),
        Role::Inspector => matches!(
            (from, to),
            (InspectionScheduled, Inspected) | (Inspected, Approved) | (Inspected, Rejected)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ApplicationStatus::*;

    #[test]
    fn test_school_can_only_submit() {
        assert!(can_transition(Role::School, Draft, Submitted));
        assert!(!can_transition(Role::School, Submitted, DistrictReview));
        assert!(!can_transition(Role::School, Approved, CertificateIssued));
    }

    #[test]
    fn test_tiers_are_separated() {
        assert!(can_transition(Role::DistrictOfficer, Submitted, DistrictReview));
        assert!(!can_transition(Role::DistrictOfficer, Inspected, Approved));
        assert!(can_transition(Role::Inspector, Inspected, Approved));
        assert!(can_transition(Role::Inspector, Inspected, Rejected));
        assert!(!can_transition(Role::Inspector, Draft, Submitted));
    }

    #[test]
    fn test_administrator_limited_to_workflow_edges() {
        assert!(can_transition(Role::Administrator, Approved, CertificateIssued));
        assert!(can_transition(Role::Administrator, DistrictReview, Rejected));
        assert!(!can_transition(Role::Administrator, Draft, Approved));
        assert!(!can_transition(Role::Administrator, CertificateIssued, Draft));
    }

    #[test]
    fn test_role_codes() {
        for role in Role::all() {
            assert_eq!(Role::from_code(role.code()), Some(role));
        }
        assert_eq!(Role::default(), Role::School);
    }
}
