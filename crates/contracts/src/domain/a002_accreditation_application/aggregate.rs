use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of an accreditation application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub Uuid);

impl ApplicationId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_string(&self) -> String {
        self.0.to_string()
    }
}

// ============================================================================
// Workflow status
// ============================================================================

/// Approval tier an application currently sits in
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Draft,
    Submitted,
    DistrictReview,
    InspectionScheduled,
    Inspected,
    Approved,
    Rejected,
    CertificateIssued,
}

impl ApplicationStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            ApplicationStatus::Draft => "Draft",
            ApplicationStatus::Submitted => "Submitted",
            ApplicationStatus::DistrictReview => "District review",
            ApplicationStatus::InspectionScheduled => "Inspection scheduled",
            ApplicationStatus::Inspected => "Inspected",
            ApplicationStatus::Approved => "Approved",
            ApplicationStatus::Rejected => "Rejected",
            ApplicationStatus::CertificateIssued => "Certificate issued",
        }
    }

    /// The tier reached by the forward ("advance") action, if any.
    ///
    /// Rejection is a side exit from `Inspected` and is not returned here.
    pub fn next(&self) -> Option<ApplicationStatus> {
        match self {
            ApplicationStatus::Draft => Some(ApplicationStatus::Submitted),
            ApplicationStatus::Submitted => Some(ApplicationStatus::DistrictReview),
            ApplicationStatus::DistrictReview => Some(ApplicationStatus::InspectionScheduled),
            ApplicationStatus::InspectionScheduled => Some(ApplicationStatus::Inspected),
            ApplicationStatus::Inspected => Some(ApplicationStatus::Approved),
            ApplicationStatus::Approved => Some(ApplicationStatus::CertificateIssued),
            ApplicationStatus::Rejected | ApplicationStatus::CertificateIssued => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ApplicationStatus::Rejected | ApplicationStatus::CertificateIssued
        )
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Accreditation application filed by a school
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: ApplicationId,
    pub school_name: String,
    pub district: String,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub inspection_team: Option<String>,
}

impl Application {
    /// Move to `to`, stamping `updated_at`. Caller is responsible for the
    /// permission check.
    pub fn move_to(&mut self, to: ApplicationStatus) {
        self.status = to;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_chain_ends_with_certificate() {
        let mut status = ApplicationStatus::Draft;
        let mut steps = 0;
        while let Some(next) = status.next() {
            status = next;
            steps += 1;
        }
        assert_eq!(status, ApplicationStatus::CertificateIssued);
        assert_eq!(steps, 6);
        assert!(status.is_terminal());
    }

    #[test]
    fn test_rejected_has_no_next() {
        assert_eq!(ApplicationStatus::Rejected.next(), None);
    }

    #[test]
    fn test_move_to_updates_timestamp() {
        let now = Utc::now();
        let mut app = Application {
            id: ApplicationId::new_v4(),
            school_name: "GS Huye".into(),
            district: "Huye".into(),
            status: ApplicationStatus::Draft,
            created_at: now,
            updated_at: now,
            inspection_team: None,
        };
        let created = app.created_at;
        app.move_to(ApplicationStatus::Submitted);
        assert_eq!(app.status, ApplicationStatus::Submitted);
        assert!(app.updated_at >= created);
    }

    #[test]
    fn test_id_serializes_as_bare_uuid() {
        let id = ApplicationId::new_v4();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.as_string()));
    }
}
