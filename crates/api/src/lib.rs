//! HTTP API: catalog search and pricing preview endpoints.

pub mod app;
pub mod config;
