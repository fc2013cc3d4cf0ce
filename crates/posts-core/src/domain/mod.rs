//! Domain entities - the core business objects.

mod lookup;
mod post;

pub use lookup::{NotFoundPolicy, ParsePolicyError};
pub use post::{NewPost, Post, PostChanges, PostId};
