pub mod request_service;
pub mod request_validator;
