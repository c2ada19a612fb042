//! Admin shell - the single action surface the presentation layer talks to.
//!
//! The shell owns one record store and one navigation controller per session.
//! Views are pulled: after any action the caller asks for [`AdminShell::view`]
//! again.

mod action;
mod view;

#[cfg(test)]
mod tests;

use uuid::Uuid;

pub use action::{Action, ActionKind, ActionOutcome};
pub use view::{
    CategoriesView, CategoryRow, DashboardView, PostRow, PostsView, SettingsView, UserRow,
    UsersView, View,
};

use crate::analytics::{self, ReportingWindow};
use crate::domain::{
    Category, NewPost, NewUser, Post, PostPatch, SettingsPatch, SiteSettings, TrafficSample, User,
    UserPatch,
};
use crate::error::{DomainError, SessionError};
use crate::navigation::{FetchTicket, NavigationController, Section};
use crate::ports::{SnapshotStore, ViewTracker};
use crate::query::{PostFilters, PostQuery};
use crate::store::RecordStore;

/// Session-level settings of the shell.
#[derive(Debug, Clone, Default)]
pub struct ShellConfig {
    /// Buckets the dashboard traffic chart is reported over.
    pub traffic_window: ReportingWindow,
}

#[derive(Debug)]
pub struct AdminShell {
    store: RecordStore,
    navigation: NavigationController,
    post_query: PostQuery,
    raw_traffic: Vec<TrafficSample>,
    config: ShellConfig,
}

impl AdminShell {
    pub fn new(store: RecordStore, config: ShellConfig) -> Self {
        Self {
            store,
            navigation: NavigationController::new(),
            post_query: PostQuery::default(),
            raw_traffic: Vec::new(),
            config,
        }
    }

    /// Start a session from whatever the persistence collaborator holds.
    pub async fn open(
        persistence: &dyn SnapshotStore,
        config: ShellConfig,
    ) -> Result<Self, SessionError> {
        let snapshot = persistence.load().await?;
        let store = RecordStore::restore(snapshot)?;
        tracing::info!(
            posts = store.posts().len(),
            categories = store.categories().len(),
            users = store.users().len(),
            "Admin session opened"
        );
        Ok(Self::new(store, config))
    }

    /// End the session, handing the current records back for saving.
    pub async fn close(&self, persistence: &dyn SnapshotStore) -> Result<(), SessionError> {
        persistence.save(&self.store.snapshot()).await?;
        tracing::info!("Admin session saved");
        Ok(())
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn current_section(&self) -> Section {
        self.navigation.current()
    }

    pub fn post_query(&self) -> &PostQuery {
        &self.post_query
    }

    pub fn available_actions(&self) -> &'static [ActionKind] {
        &ActionKind::ALL
    }

    /// Data for the section that is active right now.
    pub fn view(&self) -> View {
        match self.navigation.current() {
            Section::Dashboard => View::Dashboard(self.dashboard_view()),
            Section::Posts => View::Posts(self.posts_view()),
            Section::Categories => View::Categories(self.categories_view()),
            Section::Users => View::Users(self.users_view()),
            Section::Settings => View::Settings(SettingsView {
                settings: self.store.settings().clone(),
            }),
        }
    }

    /// Run one operator action. Domain failures are returned unchanged.
    pub fn dispatch(&mut self, action: Action) -> Result<ActionOutcome, DomainError> {
        let kind = action.kind();
        let result = match action {
            Action::CreatePost(input) => self.create_post(input).map(ActionOutcome::PostSaved),
            Action::EditPost { id, patch } => {
                self.edit_post(id, patch).map(ActionOutcome::PostSaved)
            }
            Action::DeletePost { id } => self.delete_post(id).map(ActionOutcome::PostDeleted),
            Action::CreateCategory { name } => self
                .create_category(&name)
                .map(ActionOutcome::CategorySaved),
            Action::RenameCategory { id, name } => self
                .rename_category(id, &name)
                .map(ActionOutcome::CategorySaved),
            Action::DeleteCategory { id } => self
                .delete_category(id)
                .map(ActionOutcome::CategoryDeleted),
            Action::CreateUser(input) => self.create_user(input).map(ActionOutcome::UserSaved),
            Action::UpdateUser { id, patch } => {
                self.update_user(id, patch).map(ActionOutcome::UserSaved)
            }
            Action::DeleteUser { id } => self.delete_user(id).map(ActionOutcome::UserDeleted),
            Action::UpdateSettings(patch) => self
                .update_settings(patch)
                .map(ActionOutcome::SettingsSaved),
            Action::SearchPosts(query) => {
                let matches = self.search_posts(query.text, query.filters);
                Ok(ActionOutcome::QueryApplied { matches })
            }
            Action::SelectSection { section } => {
                self.select_section(section);
                Ok(ActionOutcome::SectionSelected { section })
            }
        };

        match &result {
            Ok(_) => tracing::info!(action = ?kind, "Action applied"),
            Err(e) => {
                tracing::warn!(action = ?kind, error_kind = e.kind(), error = %e, "Action rejected")
            }
        }
        result
    }

    pub fn create_post(&mut self, input: NewPost) -> Result<Post, DomainError> {
        self.store.create_post(input)
    }

    pub fn edit_post(&mut self, id: Uuid, patch: PostPatch) -> Result<Post, DomainError> {
        self.store.update_post(id, patch)
    }

    pub fn delete_post(&mut self, id: Uuid) -> Result<Post, DomainError> {
        self.store.delete_post(id)
    }

    pub fn create_category(&mut self, name: &str) -> Result<Category, DomainError> {
        self.store.create_category(name)
    }

    pub fn rename_category(&mut self, id: Uuid, name: &str) -> Result<Category, DomainError> {
        self.store.rename_category(id, name)
    }

    pub fn delete_category(&mut self, id: Uuid) -> Result<Category, DomainError> {
        self.store.delete_category(id)
    }

    pub fn create_user(&mut self, input: NewUser) -> Result<User, DomainError> {
        self.store.create_user(input)
    }

    pub fn update_user(&mut self, id: Uuid, patch: UserPatch) -> Result<User, DomainError> {
        self.store.update_user(id, patch)
    }

    pub fn delete_user(&mut self, id: Uuid) -> Result<User, DomainError> {
        self.store.delete_user(id)
    }

    pub fn update_settings(&mut self, patch: SettingsPatch) -> Result<SiteSettings, DomainError> {
        self.store.update_settings(patch)
    }

    /// Replace the posts page query and return how many posts now match.
    pub fn search_posts(&mut self, text: impl Into<String>, filters: PostFilters) -> usize {
        self.post_query = PostQuery::new(text, filters);
        self.post_query.run(self.store.posts()).len()
    }

    pub fn select_section(&mut self, section: Section) {
        self.navigation.select_section(section);
    }

    /// Capture the navigation state before starting an asynchronous fetch.
    pub fn begin_fetch(&self) -> FetchTicket {
        self.navigation.ticket()
    }

    /// Apply fetched traffic samples unless the operator navigated away since
    /// `ticket` was taken. Returns whether the samples were applied.
    pub fn apply_traffic(&mut self, ticket: FetchTicket, samples: Vec<TrafficSample>) -> bool {
        if !self.navigation.is_current(ticket) {
            tracing::debug!(
                fetched_for = %ticket.section(),
                current = %self.navigation.current(),
                "Discarding stale traffic result"
            );
            return false;
        }
        self.raw_traffic = samples;
        true
    }

    /// Pull fresh samples from the view tracker.
    pub async fn refresh_traffic(
        &mut self,
        tracker: &dyn ViewTracker,
    ) -> Result<bool, SessionError> {
        let ticket = self.begin_fetch();
        let samples = tracker.fetch_samples().await?;
        Ok(self.apply_traffic(ticket, samples))
    }

    fn dashboard_view(&self) -> DashboardView {
        DashboardView {
            traffic: analytics::traffic_summary(&self.raw_traffic, &self.config.traffic_window),
            category_distribution: analytics::category_distribution(
                self.store.posts(),
                self.store.categories(),
            ),
            totals: analytics::totals(&self.store),
        }
    }

    fn posts_view(&self) -> PostsView {
        let rows = self
            .post_query
            .run(self.store.posts())
            .into_iter()
            .map(|post| PostRow::resolve(post, &self.store))
            .collect();
        PostsView {
            query: self.post_query.clone(),
            rows,
        }
    }

    fn categories_view(&self) -> CategoriesView {
        let categories = self
            .store
            .categories()
            .iter()
            .map(|category| CategoryRow {
                category: category.clone(),
                post_count: self.store.posts_in_category(category.id) as u64,
            })
            .collect();
        CategoriesView { categories }
    }

    fn users_view(&self) -> UsersView {
        let users = self
            .store
            .users()
            .iter()
            .map(|user| UserRow {
                user: user.clone(),
                post_count: self.store.posts_by_author(user.id) as u64,
            })
            .collect();
        UsersView { users }
    }
}
