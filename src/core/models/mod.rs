pub mod swap_request;
