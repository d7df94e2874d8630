use std::cmp::Ordering;
use std::collections::BTreeSet;

use contracts::domain::a001_school::aggregate::School;
use leptos::prelude::*;

use crate::shared::components::table::TableRecord;
use crate::shared::filter::{FacetDef, FacetRecord};
use crate::shared::list_utils::{SortState, Sortable};

pub const FACET_PROVINCES: &str = "provinces";
pub const FACET_DISTRICTS: &str = "districts";
pub const FACET_SECTORS: &str = "sectors";
pub const FACET_SCHOOL_TYPES: &str = "schoolTypes";
pub const FACET_COMBINATIONS: &str = "combinations";

pub const SCHOOL_FACETS: &[FacetDef] = &[
    FacetDef::new(FACET_PROVINCES, "Province"),
    FacetDef::new(FACET_DISTRICTS, "District"),
    FacetDef::new(FACET_SECTORS, "Sector"),
    FacetDef::new(FACET_SCHOOL_TYPES, "School type"),
    FacetDef::new(FACET_COMBINATIONS, "Combination"),
];

#[derive(Clone, Debug)]
pub struct SchoolListState {
    /// Full directory as loaded
    pub all: Vec<School>,
    pub sort: SortState,
    pub is_loaded: bool,
}

impl Default for SchoolListState {
    fn default() -> Self {
        Self {
            all: Vec::new(),
            sort: SortState::by("name"),
            is_loaded: false,
        }
    }
}

pub fn create_state() -> RwSignal<SchoolListState> {
    RwSignal::new(SchoolListState::default())
}

fn facet_field<'a>(school: &'a School, facet: &str) -> Vec<&'a str> {
    match facet {
        FACET_PROVINCES => vec![school.province.as_str()],
        FACET_DISTRICTS => vec![school.district.as_str()],
        FACET_SECTORS => vec![school.sector.as_str()],
        FACET_SCHOOL_TYPES => vec![school.school_type.as_str()],
        FACET_COMBINATIONS => school.combinations.iter().map(String::as_str).collect(),
        _ => Vec::new(),
    }
}

/// Distinct values of `facet` across the directory, sorted
pub fn facet_options(schools: &[School], facet: &str) -> Vec<String> {
    schools
        .iter()
        .flat_map(|s| facet_field(s, facet))
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

impl FacetRecord for School {
    fn matches_facet(&self, facet: &str, selected: &[String]) -> bool {
        facet_field(self, facet)
            .iter()
            .any(|value| selected.iter().any(|s| s == value))
    }

    fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.id.to_lowercase().contains(&query)
            || self
                .certificate_number
                .as_deref()
                .is_some_and(|n| n.to_lowercase().contains(&query))
    }
}

impl Sortable for School {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "province" => self.province.cmp(&other.province),
            "district" => self.district.cmp(&other.district),
            "sector" => self.sector.cmp(&other.sector),
            "schoolType" => self.school_type.cmp(&other.school_type),
            "status" => self.status.cmp(&other.status),
            _ => self.name.cmp(&other.name),
        }
    }
}

impl TableRecord for School {
    fn row_key(&self) -> String {
        self.id.clone()
    }

    fn field_value(&self, key: &str) -> Option<String> {
        match key {
            "name" => Some(self.name.clone()),
            "province" => Some(self.province.clone()),
            "district" => Some(self.district.clone()),
            "sector" => Some(self.sector.clone()),
            "schoolType" => Some(self.school_type.clone()),
            "combinations" => Some(self.combinations.join(", ")),
            "status" => Some(self.status.display_name().to_string()),
            "certificate" => self.certificate_number.clone(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filter::{apply_filter, FilterState};
    use crate::shared::list_utils::sort_list;
    use contracts::enums::accreditation_status::AccreditationStatus;

    fn school(id: &str, name: &str, province: &str, district: &str, combos: &[&str]) -> School {
        School {
            id: id.into(),
            name: name.into(),
            province: province.into(),
            district: district.into(),
            sector: "Central".into(),
            school_type: "Public".into(),
            combinations: combos.iter().map(|c| c.to_string()).collect(),
            status: AccreditationStatus::Accredited,
            certificate_number: None,
        }
    }

    fn directory() -> Vec<School> {
        vec![
            school("1", "Lycee de Kigali", "Kigali", "Nyarugenge", &["PCM", "MEG"]),
            school("2", "GS Huye", "Southern", "Huye", &["HEG"]),
            school("3", "ES Gasabo", "Kigali", "Gasabo", &["MEG"]),
        ]
    }

    #[test]
    fn test_facet_options_are_distinct_and_sorted() {
        let schools = directory();
        assert_eq!(facet_options(&schools, FACET_PROVINCES), vec!["Kigali", "Southern"]);
        assert_eq!(facet_options(&schools, FACET_COMBINATIONS), vec!["HEG", "MEG", "PCM"]);
        assert!(facet_options(&schools, "unknown").is_empty());
    }

    #[test]
    fn test_filter_by_url_state() {
        let schools = directory();
        let state = FilterState::from_search("?provinces=Kigali&combinations=MEG", SCHOOL_FACETS);
        let ids: Vec<String> = apply_filter(&schools, &state).into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["1", "3"]);

        let state = FilterState::from_search("?q=huye", SCHOOL_FACETS);
        let ids: Vec<String> = apply_filter(&schools, &state).into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["2"]);
    }

    #[test]
    fn test_sort_by_district_descending() {
        let mut schools = directory();
        let mut sort = SortState::by("district");
        sort.toggle("district");
        sort_list(&mut schools, &sort);
        let districts: Vec<&str> = schools.iter().map(|s| s.district.as_str()).collect();
        assert_eq!(districts, vec!["Nyarugenge", "Huye", "Gasabo"]);
    }

    #[test]
    fn test_field_values() {
        let s = &directory()[0];
        assert_eq!(s.field_value("combinations").as_deref(), Some("PCM, MEG"));
        assert_eq!(s.field_value("status").as_deref(), Some("Accredited"));
        assert_eq!(s.field_value("certificate"), None);
        assert_eq!(s.field_value("nope"), None);
    }
}
