//! Persisted identity stores.

pub mod json_file;

pub use json_file::JsonFileIdentityStore;
