pub mod audit;
pub mod error_detail;
pub mod request;
pub mod service;
pub mod service_definition;
