pub mod service;
pub mod statistics;
