pub mod auth;
pub mod call;
pub mod config;
pub mod tools;
