use serde::{Deserialize, Serialize};

use super::{Category, Post, SiteSettings, User};

/// Point-in-time copy of every record, in creation order.
///
/// This is what the persistence collaborator loads and saves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub settings: SiteSettings,
}

impl Snapshot {
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty() && self.categories.is_empty() && self.users.is_empty()
    }
}
