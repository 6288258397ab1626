//! # Blog Shared
//!
//! Wire types shared between the server and its clients: acknowledgement
//! bodies and the error payload shape.

pub mod dto;
pub mod response;

pub use response::ErrorBody;
