//! Shared utilities for the Studyroom workspace.

pub mod logger;
pub mod time;
