pub mod context;
pub mod storage;

pub use context::{provide_session, use_role, use_session, SessionContext};
