pub mod store;
pub mod system;
