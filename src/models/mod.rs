pub mod catalog;
pub mod remote_api;
