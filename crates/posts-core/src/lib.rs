//! # Posts Core
//!
//! The domain layer of the posts service.
//! This crate contains the post entity, its error types and the repository
//! port, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use domain::{NewPost, NotFoundPolicy, Post, PostChanges, PostId};
pub use error::{DomainError, RepoError};
