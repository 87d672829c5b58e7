//! Infrastructure layer: adapters implementing the domain ports.

pub mod dto;
pub mod http;
pub mod identity;
pub mod media;
pub mod transport;
