pub mod aggregate;
pub mod store;
