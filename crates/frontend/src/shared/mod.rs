pub mod api_utils;
pub mod components;
pub mod config;
pub mod error;
pub mod filter;
pub mod icons;
pub mod list_utils;
pub mod modal_frame;
pub mod page_frame;
pub mod storage;
pub mod toast;
