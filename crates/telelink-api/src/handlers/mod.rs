//! HTTP request handlers

pub mod credentials;
pub mod operations;
