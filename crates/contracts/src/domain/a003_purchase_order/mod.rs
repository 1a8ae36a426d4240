pub mod aggregate;
pub mod filter;
