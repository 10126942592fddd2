//! Configuration, error types and filesystem paths.

pub mod config;
pub mod errors;
pub mod paths;
