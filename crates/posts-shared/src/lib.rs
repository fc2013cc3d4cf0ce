//! # Posts Shared
//!
//! Wire types shared by the server and any Rust client of the posts API.

pub mod dto;

pub use dto::{DELETED_MESSAGE, PostEnvelope, PostInput, PostsEnvelope};
