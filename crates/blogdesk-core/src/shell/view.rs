//! Data handed to the presentation layer for each section.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::{
    Category, CategoryDistributionEntry, Post, SiteSettings, Totals, TrafficSample, User,
};
use crate::navigation::Section;
use crate::query::PostQuery;
use crate::store::RecordStore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "section", rename_all = "lowercase")]
pub enum View {
    Dashboard(DashboardView),
    Posts(PostsView),
    Categories(CategoriesView),
    Users(UsersView),
    Settings(SettingsView),
}

impl View {
    pub fn section(&self) -> Section {
        match self {
            View::Dashboard(_) => Section::Dashboard,
            View::Posts(_) => Section::Posts,
            View::Categories(_) => Section::Categories,
            View::Users(_) => Section::Users,
            View::Settings(_) => Section::Settings,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub traffic: Vec<TrafficSample>,
    pub category_distribution: Vec<CategoryDistributionEntry>,
    pub totals: Totals,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostsView {
    pub query: PostQuery,
    pub rows: Vec<PostRow>,
}

/// One line of the posts table, with references resolved to names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostRow {
    pub id: Uuid,
    pub title: String,
    pub category_id: Uuid,
    pub category_name: String,
    pub author_id: Uuid,
    pub author_name: String,
    pub published_at: DateTime<Utc>,
}

impl PostRow {
    pub(crate) fn resolve(post: &Post, store: &RecordStore) -> Self {
        let category_name = store
            .category(post.category_id)
            .map(|c| c.name.clone())
            .unwrap_or_default();
        let author_name = store
            .user(post.author_id)
            .map(|u| u.display_name.clone())
            .unwrap_or_default();

        Self {
            id: post.id,
            title: post.title.clone(),
            category_id: post.category_id,
            category_name,
            author_id: post.author_id,
            author_name,
            published_at: post.published_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoriesView {
    pub categories: Vec<CategoryRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRow {
    #[serde(flatten)]
    pub category: Category,
    pub post_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsersView {
    pub users: Vec<UserRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRow {
    #[serde(flatten)]
    pub user: User,
    pub post_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsView {
    pub settings: SiteSettings,
}
