use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::post::{Post, PostId};
use crate::error::DomainError;

/// How reads and updates treat an id with no live post behind it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NotFoundPolicy {
    /// Report the missing post as an error (HTTP 404).
    #[default]
    Strict,
    /// Answer with the zero-valued post, as if the lookup succeeded.
    Lenient,
}

impl NotFoundPolicy {
    /// Turn a lookup result into the post to return.
    pub fn resolve(self, id: PostId, found: Option<Post>) -> Result<Post, DomainError> {
        match (found, self) {
            (Some(post), _) => Ok(post),
            (None, Self::Lenient) => Ok(Post::zeroed()),
            (None, Self::Strict) => Err(DomainError::post_not_found(id)),
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown not-found policy {0:?}, expected \"strict\" or \"lenient\"")]
pub struct ParsePolicyError(String);

impl FromStr for NotFoundPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            _ => Err(ParsePolicyError(s.to_string())),
        }
    }
}

impl fmt::Display for NotFoundPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Strict => "strict",
            Self::Lenient => "lenient",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("STRICT".parse::<NotFoundPolicy>().unwrap(), NotFoundPolicy::Strict);
        assert_eq!(" lenient ".parse::<NotFoundPolicy>().unwrap(), NotFoundPolicy::Lenient);
        assert!("loose".parse::<NotFoundPolicy>().is_err());
    }

    #[test]
    fn lenient_returns_zero_valued_post() {
        let post = NotFoundPolicy::Lenient.resolve(12, None).unwrap();
        assert_eq!(post, Post::zeroed());
    }

    #[test]
    fn strict_reports_missing_id() {
        let err = NotFoundPolicy::Strict.resolve(12, None).unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity_type: "post", id: 12 }));
    }

    #[test]
    fn found_post_passes_through_either_policy() {
        let post = Post {
            id: 3,
            title: "t".into(),
            ..Post::zeroed()
        };
        for policy in [NotFoundPolicy::Strict, NotFoundPolicy::Lenient] {
            assert_eq!(policy.resolve(3, Some(post.clone())).unwrap(), post);
        }
    }
}
