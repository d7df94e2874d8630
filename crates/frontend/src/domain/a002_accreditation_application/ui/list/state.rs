use std::cmp::Ordering;

use contracts::domain::a002_accreditation_application::aggregate::Application;
use leptos::prelude::*;

use crate::shared::components::table::TableRecord;
use crate::shared::list_utils::{SortState, Sortable};

pub const UPDATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Clone, Debug)]
pub struct ApplicationsListState {
    pub items: Vec<Application>,
    pub sort: SortState,
    /// 1-based
    pub page: usize,
    pub is_loaded: bool,
}

impl Default for ApplicationsListState {
    fn default() -> Self {
        let mut sort = SortState::by("updatedAt");
        sort.toggle("updatedAt");
        Self {
            items: Vec::new(),
            sort,
            page: 1,
            is_loaded: false,
        }
    }
}

pub fn create_state() -> RwSignal<ApplicationsListState> {
    RwSignal::new(ApplicationsListState::default())
}

impl Sortable for Application {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "district" => self.district.cmp(&other.district),
            "status" => self.status.cmp(&other.status),
            "inspectionTeam" => self.inspection_team.cmp(&other.inspection_team),
            "updatedAt" => self.updated_at.cmp(&other.updated_at),
            _ => self.school_name.cmp(&other.school_name),
        }
    }
}

impl TableRecord for Application {
    fn row_key(&self) -> String {
        self.id.as_string()
    }

    fn field_value(&self, key: &str) -> Option<String> {
        match key {
            "schoolName" => Some(self.school_name.clone()),
            "district" => Some(self.district.clone()),
            "status" => Some(self.status.display_name().to_string()),
            "inspectionTeam" => self.inspection_team.clone(),
            "updatedAt" => Some(self.updated_at.format(UPDATED_AT_FORMAT).to_string()),
            _ => None,
        }
    }
}
