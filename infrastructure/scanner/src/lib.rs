pub mod client;
pub mod imaging_api;
