//! Record store - the authoritative in-memory collection of posts, categories and users.
//!
//! The store is the only mutator of records. Every list operation hands out an
//! owned copy, so callers can iterate while the store keeps changing.

use std::collections::HashSet;

use uuid::Uuid;

use crate::domain::{
    Category, NewPost, NewUser, Post, PostPatch, SettingsPatch, SiteSettings, Snapshot, User,
    UserPatch,
};
use crate::error::DomainError;

pub(crate) const POST: &str = "Post";
pub(crate) const CATEGORY: &str = "Category";
pub(crate) const USER: &str = "User";

/// In-memory record store. Collections keep creation order.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    posts: Vec<Post>,
    categories: Vec<Category>,
    users: Vec<User>,
    settings: SiteSettings,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from a persisted snapshot, checking every invariant the
    /// mutators would have enforced.
    pub fn restore(snapshot: Snapshot) -> Result<Self, DomainError> {
        let Snapshot {
            posts,
            categories,
            users,
            settings,
        } = snapshot;

        ensure_unique_ids(CATEGORY, categories.iter().map(|c| c.id))?;
        ensure_unique_ids(USER, users.iter().map(|u| u.id))?;
        ensure_unique_ids(POST, posts.iter().map(|p| p.id))?;

        require_non_blank(&settings.site_title, "site title")?;
        for user in &users {
            require_non_blank(&user.display_name, "display name")?;
        }

        let mut names = HashSet::new();
        for category in &categories {
            require_non_blank(&category.name, "category name")?;
            if !names.insert(Category::name_key(&category.name)) {
                return Err(duplicate_category(&category.name));
            }
        }

        let store = Self {
            posts: Vec::new(),
            categories,
            users,
            settings,
        };
        for post in &posts {
            require_non_blank(&post.title, "post title")?;
            store.check_references(post.category_id, post.author_id)?;
        }

        tracing::debug!(
            posts = posts.len(),
            categories = store.categories.len(),
            users = store.users.len(),
            "Record store restored"
        );

        Ok(Self { posts, ..store })
    }

    /// Copy of every record, in creation order.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            posts: self.posts.clone(),
            categories: self.categories.clone(),
            users: self.users.clone(),
            settings: self.settings.clone(),
        }
    }

    pub fn list_posts(&self) -> Vec<Post> {
        self.posts.clone()
    }

    pub fn list_categories(&self) -> Vec<Category> {
        self.categories.clone()
    }

    pub fn list_users(&self) -> Vec<User> {
        self.users.clone()
    }

    /// Borrowed view of the posts, for read-only derivations.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn settings(&self) -> &SiteSettings {
        &self.settings
    }

    pub fn post(&self, id: Uuid) -> Result<&Post, DomainError> {
        self.posts
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| DomainError::not_found(POST, id))
    }

    pub fn category(&self, id: Uuid) -> Result<&Category, DomainError> {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| DomainError::not_found(CATEGORY, id))
    }

    pub fn user(&self, id: Uuid) -> Result<&User, DomainError> {
        self.users
            .iter()
            .find(|u| u.id == id)
            .ok_or_else(|| DomainError::not_found(USER, id))
    }

    pub fn posts_in_category(&self, category_id: Uuid) -> usize {
        self.posts
            .iter()
            .filter(|p| p.category_id == category_id)
            .count()
    }

    pub fn posts_by_author(&self, author_id: Uuid) -> usize {
        self.posts.iter().filter(|p| p.author_id == author_id).count()
    }

    // ---- posts ----

    pub fn create_post(&mut self, input: NewPost) -> Result<Post, DomainError> {
        require_non_blank(&input.title, "post title")?;
        self.check_references(input.category_id, input.author_id)?;

        let post = Post::new(input);
        self.posts.push(post.clone());
        tracing::debug!(post_id = %post.id, "Post created");
        Ok(post)
    }

    /// Apply `patch` to the post. Nothing changes unless every field validates.
    pub fn update_post(&mut self, id: Uuid, patch: PostPatch) -> Result<Post, DomainError> {
        let index = self.post_index(id)?;
        let updated = patch.applied_to(&self.posts[index]);

        if patch.title.is_some() {
            require_non_blank(&updated.title, "post title")?;
        }
        if patch.category_id.is_some() || patch.author_id.is_some() {
            self.check_references(updated.category_id, updated.author_id)?;
        }

        self.posts[index] = updated.clone();
        tracing::debug!(post_id = %id, "Post updated");
        Ok(updated)
    }

    pub fn delete_post(&mut self, id: Uuid) -> Result<Post, DomainError> {
        let index = self.post_index(id)?;
        let removed = self.posts.remove(index);
        tracing::debug!(post_id = %id, "Post deleted");
        Ok(removed)
    }

    // ---- categories ----

    pub fn create_category(&mut self, name: &str) -> Result<Category, DomainError> {
        require_non_blank(name, "category name")?;
        self.ensure_category_name_free(name, None)?;

        let category = Category::new(name.to_string());
        self.categories.push(category.clone());
        tracing::debug!(category_id = %category.id, name = %category.name, "Category created");
        Ok(category)
    }

    pub fn rename_category(&mut self, id: Uuid, name: &str) -> Result<Category, DomainError> {
        let index = self.category_index(id)?;
        require_non_blank(name, "category name")?;
        self.ensure_category_name_free(name, Some(id))?;

        let category = &mut self.categories[index];
        category.name = name.to_string();
        tracing::debug!(category_id = %id, name = %name, "Category renamed");
        Ok(category.clone())
    }

    /// Delete a category. Rejected while any post is filed under it.
    pub fn delete_category(&mut self, id: Uuid) -> Result<Category, DomainError> {
        let index = self.category_index(id)?;
        let dependents = self.posts_in_category(id);
        if dependents > 0 {
            tracing::debug!(category_id = %id, dependents, "Category delete rejected");
            return Err(DomainError::InUse {
                entity_type: CATEGORY,
                id,
                dependents,
            });
        }

        let removed = self.categories.remove(index);
        tracing::debug!(category_id = %id, "Category deleted");
        Ok(removed)
    }

    // ---- users ----

    pub fn create_user(&mut self, input: NewUser) -> Result<User, DomainError> {
        require_non_blank(&input.display_name, "display name")?;

        let user = User::new(input.display_name, input.role);
        self.users.push(user.clone());
        tracing::debug!(user_id = %user.id, role = %user.role, "User created");
        Ok(user)
    }

    pub fn update_user(&mut self, id: Uuid, patch: UserPatch) -> Result<User, DomainError> {
        let index = self.user_index(id)?;
        if let Some(name) = &patch.display_name {
            require_non_blank(name, "display name")?;
        }

        let user = &mut self.users[index];
        if let Some(name) = patch.display_name {
            user.display_name = name;
        }
        if let Some(role) = patch.role {
            user.role = role;
        }
        tracing::debug!(user_id = %id, "User updated");
        Ok(user.clone())
    }

    /// Delete a user. Rejected while the user still authors posts.
    pub fn delete_user(&mut self, id: Uuid) -> Result<User, DomainError> {
        let index = self.user_index(id)?;
        let dependents = self.posts_by_author(id);
        if dependents > 0 {
            tracing::debug!(user_id = %id, dependents, "User delete rejected");
            return Err(DomainError::InUse {
                entity_type: USER,
                id,
                dependents,
            });
        }

        let removed = self.users.remove(index);
        tracing::debug!(user_id = %id, "User deleted");
        Ok(removed)
    }

    // ---- settings ----

    pub fn update_settings(&mut self, patch: SettingsPatch) -> Result<SiteSettings, DomainError> {
        if let Some(title) = &patch.site_title {
            require_non_blank(title, "site title")?;
        }

        let settings = &mut self.settings;
        if let Some(title) = patch.site_title {
            settings.site_title = title;
        }
        if let Some(tagline) = patch.tagline {
            settings.tagline = tagline;
        }
        if let Some(logo_url) = patch.logo_url {
            settings.logo_url = logo_url;
        }
        if let Some(theme) = patch.theme {
            settings.theme = theme;
        }
        if let Some(description) = patch.seo_description {
            settings.seo_description = description;
        }
        tracing::debug!("Site settings updated");
        Ok(settings.clone())
    }

    // ---- helpers ----

    fn check_references(&self, category_id: Uuid, author_id: Uuid) -> Result<(), DomainError> {
        if !self.categories.iter().any(|c| c.id == category_id) {
            return Err(DomainError::reference(CATEGORY, category_id));
        }
        if !self.users.iter().any(|u| u.id == author_id) {
            return Err(DomainError::reference(USER, author_id));
        }
        Ok(())
    }

    fn ensure_category_name_free(
        &self,
        name: &str,
        except: Option<Uuid>,
    ) -> Result<(), DomainError> {
        let key = Category::name_key(name);
        let taken = self
            .categories
            .iter()
            .any(|c| Some(c.id) != except && Category::name_key(&c.name) == key);
        if taken {
            return Err(duplicate_category(name));
        }
        Ok(())
    }

    fn post_index(&self, id: Uuid) -> Result<usize, DomainError> {
        self.posts
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| DomainError::not_found(POST, id))
    }

    fn category_index(&self, id: Uuid) -> Result<usize, DomainError> {
        self.categories
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| DomainError::not_found(CATEGORY, id))
    }

    fn user_index(&self, id: Uuid) -> Result<usize, DomainError> {
        self.users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| DomainError::not_found(USER, id))
    }
}

fn require_non_blank(value: &str, field: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

fn duplicate_category(name: &str) -> DomainError {
    DomainError::Validation(format!("category name '{}' is already in use", name.trim()))
}

fn ensure_unique_ids(
    entity_type: &'static str,
    ids: impl Iterator<Item = Uuid>,
) -> Result<(), DomainError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DomainError::Validation(format!(
                "duplicate {entity_type} id {id} in snapshot"
            )));
        }
    }
    Ok(())
}
