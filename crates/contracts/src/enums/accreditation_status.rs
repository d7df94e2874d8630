use serde::{Deserialize, Serialize};

/// Accreditation standing of a school in the public directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccreditationStatus {
    Accredited,
    Provisional,
    Pending,
    Expired,
}

impl AccreditationStatus {
    pub fn code(&self) -> &'static str {
        match self {
            AccreditationStatus::Accredited => "accredited",
            AccreditationStatus::Provisional => "provisional",
            AccreditationStatus::Pending => "pending",
            AccreditationStatus::Expired => "expired",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AccreditationStatus::Accredited => "Accredited",
            AccreditationStatus::Provisional => "Provisional",
            AccreditationStatus::Pending => "Pending",
            AccreditationStatus::Expired => "Expired",
        }
    }

    /// CSS badge modifier used by list screens
    pub fn badge_class(&self) -> &'static str {
        match self {
            AccreditationStatus::Accredited => "badge badge--success",
            AccreditationStatus::Provisional => "badge badge--warning",
            AccreditationStatus::Pending => "badge badge--neutral",
            AccreditationStatus::Expired => "badge badge--error",
        }
    }

    pub fn all() -> Vec<AccreditationStatus> {
        vec![
            AccreditationStatus::Accredited,
            AccreditationStatus::Provisional,
            AccreditationStatus::Pending,
            AccreditationStatus::Expired,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for status in AccreditationStatus::all() {
            assert_eq!(AccreditationStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(AccreditationStatus::from_code("revoked"), None);
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&AccreditationStatus::Provisional).unwrap();
        assert_eq!(json, "\"provisional\"");
    }
}
