use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Store-assigned post identifier.
pub type PostId = i64;

/// Post entity - a title and a body of text.
///
/// `Default` yields the zero-valued post: id `0`, empty strings and both
/// timestamps at the Unix epoch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// The post returned for a missing id when lookups are lenient.
    pub fn zeroed() -> Self {
        Self::default()
    }

    /// Apply a set of changes in place, refreshing `updated_at`.
    pub fn apply(&mut self, changes: PostChanges, now: DateTime<Utc>) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(body) = changes.body {
            self.body = body;
        }
        self.updated_at = now;
    }
}

/// A post that has not been persisted yet; the store assigns id and timestamps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub body: String,
}

impl NewPost {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Field overwrites for an update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostChanges {
    pub title: Option<String>,
    pub body: Option<String>,
}

impl PostChanges {
    /// Build changes from raw request fields. Empty strings are skipped, so
    /// an update carrying `""` keeps the existing value.
    pub fn from_fields(title: String, body: String) -> Self {
        let non_empty = |s: String| (!s.is_empty()).then_some(s);
        Self {
            title: non_empty(title),
            body: non_empty(body),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.body.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_are_skipped() {
        let changes = PostChanges::from_fields(String::new(), "new body".into());
        assert_eq!(changes.title, None);
        assert_eq!(changes.body.as_deref(), Some("new body"));
        assert!(!changes.is_empty());

        assert!(PostChanges::from_fields(String::new(), String::new()).is_empty());
    }

    #[test]
    fn apply_overwrites_only_present_fields() {
        let mut post = Post {
            id: 7,
            title: "old title".into(),
            body: "old body".into(),
            ..Post::zeroed()
        };
        let now = Utc::now();

        post.apply(PostChanges::from_fields(String::new(), "new body".into()), now);

        assert_eq!(post.title, "old title");
        assert_eq!(post.body, "new body");
        assert_eq!(post.updated_at, now);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(Post::zeroed()).unwrap();
        let obj = json.as_object().unwrap();

        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["body", "createdAt", "id", "title", "updatedAt"]);
        assert_eq!(json["id"], 0);
        assert_eq!(json["title"], "");
    }
}
