//! Demo records for a first start with an empty data file.

use chrono::{TimeZone, Utc};

use blogdesk_core::domain::{NewPost, NewUser, Role, Snapshot};
use blogdesk_core::{DomainError, RecordStore};

/// A small blog: four categories, two users and a handful of posts.
pub fn demo_snapshot() -> Result<Snapshot, DomainError> {
    let mut store = RecordStore::new();

    let tech = store.create_category("Tech")?.id;
    let lifestyle = store.create_category("Lifestyle")?.id;
    let travel = store.create_category("Travel")?.id;
    let food = store.create_category("Food")?.id;

    let admin = store.create_user(NewUser {
        display_name: "Admin".to_string(),
        role: Role::Admin,
    })?;
    let editor = store.create_user(NewUser {
        display_name: "Editor".to_string(),
        role: Role::Editor,
    })?;

    let posts = [
        ("Sample Blog Post 1", tech, admin.id, 25),
        ("Sample Blog Post 2", tech, admin.id, 25),
        ("Sample Blog Post 3", tech, admin.id, 25),
        ("Slow Mornings", lifestyle, editor.id, 21),
        ("Three Days in Lisbon", travel, editor.id, 18),
        ("Weeknight Ramen", food, editor.id, 12),
    ];
    for (title, category_id, author_id, day) in posts {
        store.create_post(NewPost {
            title: title.to_string(),
            category_id,
            author_id,
            published_at: Utc.with_ymd_and_hms(2025, 8, day, 9, 0, 0).single(),
            body: String::new(),
        })?;
    }

    tracing::debug!("Demo records generated");
    Ok(store.snapshot())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_snapshot_is_consistent() {
        let snapshot = demo_snapshot().unwrap();
        assert_eq!(snapshot.categories.len(), 4);
        assert_eq!(snapshot.users.len(), 2);
        assert_eq!(snapshot.posts.len(), 6);
        assert!(RecordStore::restore(snapshot).is_ok());
    }
}
