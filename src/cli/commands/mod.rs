pub mod decide;
pub mod list;
pub mod request;
pub mod service_helpers;
