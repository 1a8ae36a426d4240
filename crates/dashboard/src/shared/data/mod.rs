pub mod provider;
pub mod seed;

pub use provider::{DataProvider, SeedDataProvider};
pub use seed::{SeedData, SeedError};
