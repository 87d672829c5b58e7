//! Data Transfer Objects (DTOs) for the media-room client.
//!
//! - `http`: request/response DTOs of the room API

pub mod conversion;
pub mod http;
