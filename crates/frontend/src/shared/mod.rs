pub mod components;
pub mod config;
pub mod date_utils;
pub mod list_utils;
pub mod media_info;
