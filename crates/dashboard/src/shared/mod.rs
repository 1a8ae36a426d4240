pub mod config;
pub mod data;
pub mod date_utils;
pub mod format;
