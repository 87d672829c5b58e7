//! Peer transport implementations.
//!
//! - `dry_run`: records and logs offers without opening connections

pub mod dry_run;

pub use dry_run::DryRunPeerTransport;
