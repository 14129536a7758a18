pub mod request_store;
pub mod sources;
