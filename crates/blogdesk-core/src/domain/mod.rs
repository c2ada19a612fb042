//! Domain entities - the records the console manages and the summaries derived from them.

mod analytics;
mod category;
mod post;
mod settings;
mod snapshot;
mod user;

pub use analytics::{CategoryDistributionEntry, Totals, TrafficSample};
pub use category::Category;
pub use post::{NewPost, Post, PostPatch};
pub use settings::{SettingsPatch, SiteSettings, Theme};
pub use snapshot::Snapshot;
pub use user::{NewUser, Role, User, UserPatch};
