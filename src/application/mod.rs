/// Module containing service interfaces and traits
pub mod interfaces;
/// Resource data models
pub mod models;
/// Module containing resource services implemented for the client
pub mod services;
