use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Site-wide settings shown on the settings page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSettings {
    pub site_title: String,
    pub tagline: String,
    pub logo_url: Option<String>,
    pub theme: Theme,
    pub seo_description: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_title: "Blog CMS".to_string(),
            tagline: String::new(),
            logo_url: None,
            theme: Theme::Light,
            seo_description: String::new(),
        }
    }
}

/// Partial update of the site settings.
///
/// `logo_url: Some(None)` clears the logo.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsPatch {
    pub site_title: Option<String>,
    pub tagline: Option<String>,
    pub logo_url: Option<Option<String>>,
    pub theme: Option<Theme>,
    pub seo_description: Option<String>,
}
