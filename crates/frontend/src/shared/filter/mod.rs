pub mod browser;
pub mod controller;
pub mod query_params;
pub mod state;

pub use browser::{use_facet_filter, FacetFilter};
pub use controller::{FilterController, SyncPhase, UrlPort};
pub use state::{apply_filter, summarize, FacetDef, FacetRecord, FilterState};
