use serde::{Deserialize, Serialize};

use crate::enums::accreditation_status::AccreditationStatus;

/// School as published in the accreditation directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct School {
    pub id: String,
    pub name: String,
    pub province: String,
    pub district: String,
    pub sector: String,
    /// e.g. "Public", "Private", "Government-aided"
    pub school_type: String,
    /// Subject combinations offered (e.g. "PCM", "MEG")
    #[serde(default)]
    pub combinations: Vec<String>,
    pub status: AccreditationStatus,
    #[serde(default)]
    pub certificate_number: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_directory_record() {
        let json = r#"{
            "id": "sch-001",
            "name": "Lycee de Kigali",
            "province": "Kigali",
            "district": "Nyarugenge",
            "sector": "Nyamirambo",
            "schoolType": "Public",
            "combinations": ["PCM", "MEG"],
            "status": "accredited"
        }"#;
        let school: School = serde_json::from_str(json).unwrap();
        assert_eq!(school.school_type, "Public");
        assert_eq!(school.combinations, vec!["PCM", "MEG"]);
        assert_eq!(school.status, AccreditationStatus::Accredited);
        assert!(school.certificate_number.is_none());
    }

    #[test]
    fn test_missing_combinations_default_to_empty() {
        let json = r#"{
            "id": "sch-002",
            "name": "GS Huye",
            "province": "Southern",
            "district": "Huye",
            "sector": "Ngoma",
            "schoolType": "Private",
            "status": "pending"
        }"#;
        let school: School = serde_json::from_str(json).unwrap();
        assert!(school.combinations.is_empty());
    }
}
