//! Query/filter engine - read-only narrowing of the post collection.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::Post;

/// Exact-match filters, combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostFilters {
    pub category_id: Option<Uuid>,
    pub author_id: Option<Uuid>,
}

/// Search state of the posts page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostQuery {
    pub text: String,
    pub filters: PostFilters,
}

impl PostQuery {
    pub fn new(text: impl Into<String>, filters: PostFilters) -> Self {
        Self {
            text: text.into(),
            filters,
        }
    }

    pub fn run<'a>(&self, posts: &'a [Post]) -> Vec<&'a Post> {
        search_posts(posts, &self.text, &self.filters)
    }
}

/// Posts whose title contains `query` (case-insensitive) and that match every
/// set filter, in input order. A blank query matches every title.
pub fn search_posts<'a>(posts: &'a [Post], query: &str, filters: &PostFilters) -> Vec<&'a Post> {
    let needle = query.trim().to_lowercase();

    posts
        .iter()
        .filter(|post| needle.is_empty() || post.title.to_lowercase().contains(&needle))
        .filter(|post| filters.category_id.is_none_or(|id| post.category_id == id))
        .filter(|post| filters.author_id.is_none_or(|id| post.author_id == id))
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn post(title: &str, category_id: Uuid, author_id: Uuid) -> Post {
        Post {
            id: Uuid::new_v4(),
            title: title.to_string(),
            category_id,
            author_id,
            published_at: Utc::now(),
            body: String::new(),
        }
    }

    struct Fixture {
        posts: Vec<Post>,
        c1: Uuid,
        c2: Uuid,
        author: Uuid,
    }

    fn fixture() -> Fixture {
        let (c1, c2, author) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let posts = vec![
            post("Tech News", c1, author),
            post("Travel Log", c2, author),
            post("Tech News", c1, author),
        ];
        Fixture {
            posts,
            c1,
            c2,
            author,
        }
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let f = fixture();
        let found = search_posts(&f.posts, "", &PostFilters::default());
        let expected: Vec<&Post> = f.posts.iter().collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_text_and_category_filter() {
        let f = fixture();
        let filters = PostFilters {
            category_id: Some(f.c1),
            author_id: None,
        };
        let found = search_posts(&f.posts, "tech", &filters);

        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|p| p.title == "Tech News"));
        assert_eq!(found[0].id, f.posts[0].id);
        assert_eq!(found[1].id, f.posts[2].id);
    }

    #[test]
    fn test_match_is_case_insensitive_substring() {
        let f = fixture();
        let found = search_posts(&f.posts, "  LOG ", &PostFilters::default());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].category_id, f.c2);
    }

    #[test]
    fn test_unknown_filter_ids_yield_empty() {
        let f = fixture();
        let filters = PostFilters {
            category_id: Some(Uuid::new_v4()),
            author_id: Some(f.author),
        };
        assert!(search_posts(&f.posts, "", &filters).is_empty());
    }

    #[test]
    fn test_author_filter() {
        let f = fixture();
        let filters = PostFilters {
            category_id: None,
            author_id: Some(f.author),
        };
        assert_eq!(search_posts(&f.posts, "travel", &filters).len(), 1);
    }

    #[test]
    fn test_empty_collection() {
        let query = PostQuery::new("tech", PostFilters::default());
        assert!(query.run(&[]).is_empty());
    }
}
