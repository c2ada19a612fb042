use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity - a blog article filed under one category and one author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub category_id: Uuid,
    pub author_id: Uuid,
    pub published_at: DateTime<Utc>,
    pub body: String,
}

impl Post {
    /// Create a post from validated input, assigning a fresh id.
    pub fn new(input: NewPost) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: input.title,
            category_id: input.category_id,
            author_id: input.author_id,
            published_at: input.published_at.unwrap_or_else(Utc::now),
            body: input.body,
        }
    }
}

/// Fields supplied by the operator when creating a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub category_id: Uuid,
    pub author_id: Uuid,
    /// Defaults to the creation time when omitted.
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub body: String,
}

/// Partial update of a post. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PostPatch {
    pub title: Option<String>,
    pub category_id: Option<Uuid>,
    pub author_id: Option<Uuid>,
    pub published_at: Option<DateTime<Utc>>,
    pub body: Option<String>,
}

impl PostPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.category_id.is_none()
            && self.author_id.is_none()
            && self.published_at.is_none()
            && self.body.is_none()
    }

    /// Apply the patch to a copy of `post`.
    pub(crate) fn applied_to(&self, post: &Post) -> Post {
        let mut updated = post.clone();
        if let Some(title) = &self.title {
            updated.title = title.clone();
        }
        if let Some(category_id) = self.category_id {
            updated.category_id = category_id;
        }
        if let Some(author_id) = self.author_id {
            updated.author_id = author_id;
        }
        if let Some(published_at) = self.published_at {
            updated.published_at = published_at;
        }
        if let Some(body) = &self.body {
            updated.body = body.clone();
        }
        updated
    }
}
