//! Data Transfer Objects - request/response types for the posts API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Confirmation returned by `DELETE /posts/:id`.
pub const DELETED_MESSAGE: &str = "Post deleted";

/// Body of `POST /posts` and `PUT /posts/:id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostInput {
    pub title: String,
    pub body: String,
}

impl PostInput {
    /// Decode a request body without ever failing.
    ///
    /// Keys match case-insensitively. A field that is absent or not a string
    /// decodes as `""`, and a body that is not a JSON object (including an
    /// empty or truncated one) yields empty fields.
    pub fn from_body(bytes: &[u8]) -> Self {
        let Ok(Value::Object(fields)) = serde_json::from_slice::<Value>(bytes) else {
            return Self::default();
        };

        let field = |name: &str| {
            fields
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .and_then(|(_, value)| value.as_str())
                .unwrap_or_default()
                .to_string()
        };

        Self {
            title: field("title"),
            body: field("body"),
        }
    }
}

/// `{"post": ...}` - a single post, or the delete confirmation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostEnvelope<T> {
    pub post: T,
}

/// `{"posts": [...]}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostsEnvelope<T> {
    pub posts: Vec<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default_to_empty() {
        assert_eq!(PostInput::from_body(b"{}"), PostInput::default());

        let input = PostInput::from_body(br#"{"title":"only title"}"#);
        assert_eq!(input.title, "only title");
        assert_eq!(input.body, "");
    }

    #[test]
    fn keys_match_any_case() {
        let input = PostInput::from_body(br#"{"Title":"T","BODY":"B"}"#);
        assert_eq!(input.title, "T");
        assert_eq!(input.body, "B");
    }

    #[test]
    fn undecodable_bodies_yield_empty_fields() {
        let bodies: [&[u8]; 5] = [b"", b"{\"title\": ", b"not json", b"[1, 2]", b"\"text\""];
        for body in bodies {
            assert_eq!(PostInput::from_body(body), PostInput::default());
        }
    }

    #[test]
    fn wrong_typed_field_is_dropped_alone() {
        let input = PostInput::from_body(br#"{"title": 5, "body": "b"}"#);
        assert_eq!(input.title, "");
        assert_eq!(input.body, "b");
    }

    #[test]
    fn delete_confirmation_shape() {
        let json = serde_json::to_value(PostEnvelope {
            post: DELETED_MESSAGE,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({ "post": "Post deleted" }));
    }
}
