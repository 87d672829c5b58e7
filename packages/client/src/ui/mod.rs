//! Terminal rendering of the room stage.

pub mod formatter;

pub use formatter::StageFormatter;
