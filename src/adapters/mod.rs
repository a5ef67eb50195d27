pub mod backend;
pub mod http;
pub mod persistence;
