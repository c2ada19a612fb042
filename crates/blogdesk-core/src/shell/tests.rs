use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use super::*;
use crate::domain::{Role, Snapshot};
use crate::ports::{PersistenceError, TrackingError};

struct Fixture {
    shell: AdminShell,
    c1: Category,
    c2: Category,
    author: User,
}

fn fixture() -> Fixture {
    let mut shell = AdminShell::new(RecordStore::new(), ShellConfig::default());
    let c1 = shell.create_category("Tech").unwrap();
    let c2 = shell.create_category("Travel").unwrap();
    let author = shell
        .create_user(NewUser {
            display_name: "Admin".to_string(),
            role: Role::Admin,
        })
        .unwrap();

    let posts = [("Tech News", c1.id), ("Travel Log", c2.id), ("Tech News", c1.id)];
    for (title, category_id) in posts {
        shell
            .create_post(NewPost {
                title: title.to_string(),
                category_id,
                author_id: author.id,
                published_at: None,
                body: String::new(),
            })
            .unwrap();
    }

    Fixture {
        shell,
        c1,
        c2,
        author,
    }
}

#[derive(Default)]
struct RecordingStore {
    saved: Mutex<Option<Snapshot>>,
    initial: Snapshot,
}

#[async_trait]
impl SnapshotStore for RecordingStore {
    async fn load(&self) -> Result<Snapshot, PersistenceError> {
        Ok(self.initial.clone())
    }

    async fn save(&self, snapshot: &Snapshot) -> Result<(), PersistenceError> {
        *self.saved.lock().unwrap() = Some(snapshot.clone());
        Ok(())
    }
}

struct StaticTracker(Vec<TrafficSample>);

#[async_trait]
impl ViewTracker for StaticTracker {
    async fn fetch_samples(&self) -> Result<Vec<TrafficSample>, TrackingError> {
        Ok(self.0.clone())
    }
}

struct DownTracker;

#[async_trait]
impl ViewTracker for DownTracker {
    async fn fetch_samples(&self) -> Result<Vec<TrafficSample>, TrackingError> {
        Err(TrackingError::Unavailable("offline".to_string()))
    }
}

#[test]
fn test_starts_on_dashboard_view() {
    let f = fixture();
    assert_eq!(f.shell.current_section(), Section::Dashboard);

    let View::Dashboard(dashboard) = f.shell.view() else {
        panic!("expected dashboard view");
    };
    assert_eq!(dashboard.totals.posts, 3);
    assert_eq!(dashboard.totals.users, 1);
    assert_eq!(dashboard.category_distribution[0].category_id, f.c1.id);
    assert_eq!(dashboard.category_distribution[0].count, 2);
    // No tracker data yet: every bucket reports zero.
    assert_eq!(dashboard.traffic.len(), 7);
    assert!(dashboard.traffic.iter().all(|s| s.view_count == 0));
}

#[test]
fn test_select_users_never_returns_stale_posts() {
    for start in Section::ALL {
        let mut f = fixture();
        f.shell.select_section(Section::Posts);
        let _ = f.shell.view();
        f.shell.select_section(start);

        f.shell.select_section(Section::Users);
        assert_eq!(f.shell.current_section(), Section::Users);

        let View::Users(users) = f.shell.view() else {
            panic!("expected users view");
        };
        assert_eq!(users.users.len(), 1);
        assert_eq!(users.users[0].user.id, f.author.id);
        assert_eq!(users.users[0].post_count, 3);
    }
}

#[test]
fn test_posts_view_uses_current_query() {
    let mut f = fixture();
    f.shell.select_section(Section::Posts);

    let View::Posts(all) = f.shell.view() else {
        panic!("expected posts view");
    };
    assert_eq!(all.rows.len(), 3);
    assert_eq!(all.rows[1].title, "Travel Log");
    assert_eq!(all.rows[1].category_name, "Travel");
    assert_eq!(all.rows[1].author_name, "Admin");

    let filters = PostFilters {
        category_id: Some(f.c1.id),
        author_id: None,
    };
    assert_eq!(f.shell.search_posts("tech", filters), 2);

    let View::Posts(narrowed) = f.shell.view() else {
        panic!("expected posts view");
    };
    assert_eq!(narrowed.query.text, "tech");
    assert_eq!(narrowed.rows.len(), 2);
    assert!(narrowed.rows.iter().all(|r| r.title == "Tech News"));
}

#[test]
fn test_categories_view_counts_posts() {
    let mut f = fixture();
    f.shell.create_category("Food").unwrap();
    f.shell.select_section(Section::Categories);

    let View::Categories(view) = f.shell.view() else {
        panic!("expected categories view");
    };
    let counts: Vec<(&str, u64)> = view
        .categories
        .iter()
        .map(|row| (row.category.name.as_str(), row.post_count))
        .collect();
    assert_eq!(counts, vec![("Tech", 2), ("Travel", 1), ("Food", 0)]);
}

#[test]
fn test_settings_view() {
    let mut f = fixture();
    f.shell
        .dispatch(Action::UpdateSettings(SettingsPatch {
            tagline: Some("Notes from the road".to_string()),
            ..Default::default()
        }))
        .unwrap();
    f.shell
        .dispatch(Action::SelectSection {
            section: Section::Settings,
        })
        .unwrap();

    let View::Settings(view) = f.shell.view() else {
        panic!("expected settings view");
    };
    assert_eq!(view.settings.tagline, "Notes from the road");
    assert_eq!(view.settings.site_title, "Blog CMS");
}

#[test]
fn test_dispatch_surfaces_errors_unchanged() {
    let mut f = fixture();
    let post_id = f.shell.store().posts()[0].id;
    let before = f.shell.store().post(post_id).unwrap().clone();
    let missing = Uuid::new_v4();

    let err = f
        .shell
        .dispatch(Action::EditPost {
            id: post_id,
            patch: PostPatch {
                category_id: Some(missing),
                ..Default::default()
            },
        })
        .unwrap_err();
    assert_eq!(
        err,
        DomainError::Reference {
            entity_type: "Category",
            id: missing
        }
    );
    assert_eq!(f.shell.store().post(post_id).unwrap(), &before);

    let err = f
        .shell
        .dispatch(Action::DeleteCategory { id: f.c2.id })
        .unwrap_err();
    assert_eq!(err.kind(), "in_use");

    let err = f
        .shell
        .dispatch(Action::DeletePost { id: missing })
        .unwrap_err();
    assert_eq!(err.kind(), "not_found");
}

#[test]
fn test_dispatch_create_and_delete() {
    let mut f = fixture();
    let outcome = f
        .shell
        .dispatch(Action::CreatePost(NewPost {
            title: "Street Food".to_string(),
            category_id: f.c2.id,
            author_id: f.author.id,
            published_at: None,
            body: "Tacos".to_string(),
        }))
        .unwrap();
    let ActionOutcome::PostSaved(post) = outcome else {
        panic!("expected saved post");
    };
    assert_eq!(f.shell.store().list_posts().len(), 4);

    let outcome = f.shell.dispatch(Action::DeletePost { id: post.id }).unwrap();
    assert_eq!(outcome, ActionOutcome::PostDeleted(post));
    assert_eq!(f.shell.store().list_posts().len(), 3);
}

#[test]
fn test_dispatch_search_reports_matches() {
    let mut f = fixture();
    let outcome = f
        .shell
        .dispatch(Action::SearchPosts(PostQuery::new("LOG", PostFilters::default())))
        .unwrap();
    assert_eq!(outcome, ActionOutcome::QueryApplied { matches: 1 });
    assert_eq!(f.shell.post_query().text, "LOG");
}

#[test]
fn test_actions_parse_from_json() {
    let f = fixture();
    let raw = format!(
        r#"[
            {{"action": "select_section", "section": "categories"}},
            {{"action": "rename_category", "id": "{}", "name": "Gadgets"}},
            {{"action": "search_posts", "text": "news", "filters": {{"author_id": "{}"}}}}
        ]"#,
        f.c1.id, f.author.id
    );
    let actions: Vec<Action> = serde_json::from_str(&raw).unwrap();
    let kinds: Vec<ActionKind> = actions.iter().map(Action::kind).collect();
    assert_eq!(
        kinds,
        vec![
            ActionKind::SelectSection,
            ActionKind::RenameCategory,
            ActionKind::SearchPosts
        ]
    );
}

#[test]
fn test_available_actions_cover_every_kind() {
    let f = fixture();
    let actions = f.shell.available_actions();
    assert_eq!(actions.len(), 12);
    assert!(actions.contains(&ActionKind::SelectSection));
    assert!(actions.contains(&ActionKind::DeletePost));
}

#[test]
fn test_stale_traffic_is_discarded() {
    let mut f = fixture();
    let ticket = f.shell.begin_fetch();
    f.shell.select_section(Section::Posts);

    let applied = f
        .shell
        .apply_traffic(ticket, vec![TrafficSample::new("Mon", 400)]);
    assert!(!applied);

    f.shell.select_section(Section::Dashboard);
    let View::Dashboard(dashboard) = f.shell.view() else {
        panic!("expected dashboard view");
    };
    assert_eq!(dashboard.traffic[0].view_count, 0);
}

#[tokio::test]
async fn test_refresh_traffic_applies_samples() {
    let mut f = fixture();
    let tracker = StaticTracker(vec![
        TrafficSample::new("Sun", 650),
        TrafficSample::new("Mon", 400),
    ]);

    assert!(f.shell.refresh_traffic(&tracker).await.unwrap());

    let View::Dashboard(dashboard) = f.shell.view() else {
        panic!("expected dashboard view");
    };
    assert_eq!(dashboard.traffic[0], TrafficSample::new("Mon", 400));
    assert_eq!(dashboard.traffic[6], TrafficSample::new("Sun", 650));
}

#[tokio::test]
async fn test_refresh_traffic_reports_tracker_failure() {
    let mut f = fixture();
    let err = f.shell.refresh_traffic(&DownTracker).await.unwrap_err();
    assert!(matches!(err, SessionError::Tracking(_)));
}

#[tokio::test]
async fn test_open_and_close_round_trip() {
    let f = fixture();
    let persistence = RecordingStore {
        initial: f.shell.store().snapshot(),
        ..Default::default()
    };

    let mut shell = AdminShell::open(&persistence, ShellConfig::default())
        .await
        .unwrap();
    assert_eq!(shell.store().snapshot(), f.shell.store().snapshot());
    assert_eq!(shell.current_section(), Section::Dashboard);

    shell.delete_post(shell.store().posts()[0].id).unwrap();
    shell.close(&persistence).await.unwrap();

    let saved = persistence.saved.lock().unwrap().clone().unwrap();
    assert_eq!(saved.posts.len(), 2);
    assert_eq!(saved.categories, vec![f.c1, f.c2]);
}

#[tokio::test]
async fn test_open_rejects_inconsistent_snapshot() {
    let f = fixture();
    let mut initial = f.shell.store().snapshot();
    initial.users.clear();
    let persistence = RecordingStore {
        initial,
        ..Default::default()
    };

    let result = AdminShell::open(&persistence, ShellConfig::default()).await;
    assert!(matches!(result, Err(SessionError::Snapshot(_))));
}
