// BP Monitor Data
// This crate owns the in-process record store for blood pressure readings

// Repository implementations for data access
pub mod repository;

// Data storage models
pub mod models;
