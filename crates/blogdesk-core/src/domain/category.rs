use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category entity - a named bucket posts are filed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
}

impl Category {
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
        }
    }

    /// Key used for the name uniqueness check.
    pub(crate) fn name_key(name: &str) -> String {
        name.trim().to_lowercase()
    }
}
