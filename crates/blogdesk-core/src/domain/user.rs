use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Console role of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Editor,
    #[default]
    Viewer,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Admin => "admin",
            Role::Editor => "editor",
            Role::Viewer => "viewer",
        };
        f.write_str(name)
    }
}

/// User entity - a person who can author posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub display_name: String,
    pub role: Role,
}

impl User {
    /// Create a new user with a generated ID.
    pub fn new(display_name: String, role: Role) -> Self {
        Self {
            id: Uuid::new_v4(),
            display_name,
            role,
        }
    }
}

/// Fields supplied when creating a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub display_name: String,
    #[serde(default)]
    pub role: Role,
}

/// Partial update of a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPatch {
    pub display_name: Option<String>,
    pub role: Option<Role>,
}
