//! Operator actions accepted by the shell and the results they report.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    Category, NewPost, NewUser, Post, PostPatch, SettingsPatch, SiteSettings, User, UserPatch,
};
use crate::navigation::Section;
use crate::query::PostQuery;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    CreatePost(NewPost),
    EditPost { id: Uuid, patch: PostPatch },
    DeletePost { id: Uuid },
    CreateCategory { name: String },
    RenameCategory { id: Uuid, name: String },
    DeleteCategory { id: Uuid },
    CreateUser(NewUser),
    UpdateUser { id: Uuid, patch: UserPatch },
    DeleteUser { id: Uuid },
    UpdateSettings(SettingsPatch),
    SearchPosts(PostQuery),
    SelectSection { section: Section },
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::CreatePost(_) => ActionKind::CreatePost,
            Action::EditPost { .. } => ActionKind::EditPost,
            Action::DeletePost { .. } => ActionKind::DeletePost,
            Action::CreateCategory { .. } => ActionKind::CreateCategory,
            Action::RenameCategory { .. } => ActionKind::RenameCategory,
            Action::DeleteCategory { .. } => ActionKind::DeleteCategory,
            Action::CreateUser(_) => ActionKind::CreateUser,
            Action::UpdateUser { .. } => ActionKind::UpdateUser,
            Action::DeleteUser { .. } => ActionKind::DeleteUser,
            Action::UpdateSettings(_) => ActionKind::UpdateSettings,
            Action::SearchPosts(_) => ActionKind::SearchPosts,
            Action::SelectSection { .. } => ActionKind::SelectSection,
        }
    }
}

/// Name of an action, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    CreatePost,
    EditPost,
    DeletePost,
    CreateCategory,
    RenameCategory,
    DeleteCategory,
    CreateUser,
    UpdateUser,
    DeleteUser,
    UpdateSettings,
    SearchPosts,
    SelectSection,
}

impl ActionKind {
    pub const ALL: [ActionKind; 12] = [
        ActionKind::CreatePost,
        ActionKind::EditPost,
        ActionKind::DeletePost,
        ActionKind::CreateCategory,
        ActionKind::RenameCategory,
        ActionKind::DeleteCategory,
        ActionKind::CreateUser,
        ActionKind::UpdateUser,
        ActionKind::DeleteUser,
        ActionKind::UpdateSettings,
        ActionKind::SearchPosts,
        ActionKind::SelectSection,
    ];
}

/// What a successful action did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ActionOutcome {
    PostSaved(Post),
    PostDeleted(Post),
    CategorySaved(Category),
    CategoryDeleted(Category),
    UserSaved(User),
    UserDeleted(User),
    SettingsSaved(SiteSettings),
    QueryApplied { matches: usize },
    SectionSelected { section: Section },
}
