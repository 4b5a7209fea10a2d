pub mod api_utils;
pub mod config;
pub mod infinite_scroll;
pub mod url_state;
