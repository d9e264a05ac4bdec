use header_state::IconSet;

use crate::locale::locale;
use serde::{Deserialize, Serialize};

#[cfg(feature = "ssr")]
use axum::extract::FromRef;
#[cfg(feature = "ssr")]
use leptos::config::LeptosOptions;

#[cfg(feature = "ssr")]
#[derive(FromRef, Debug, Clone)]
pub struct AppState {
    pub site: std::sync::Arc<SiteConfig>,
    pub leptos_options: std::sync::Arc<LeptosOptions>,
}

#[cfg(feature = "ssr")]
impl FromRef<AppState> for LeptosOptions {
    fn from_ref(state: &AppState) -> Self {
        state.leptos_options.as_ref().clone()
    }
}

/// Labels for the navigation bar. The default is the English table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavStrings {
    pub index: String,
    pub about: String,
    pub rss: String,
    pub search: String,
}

impl Default for NavStrings {
    fn default() -> Self {
        Self {
            index: "Blog".to_owned(),
            about: "About".to_owned(),
            rss: "RSS".to_owned(),
            search: "Search".to_owned(),
        }
    }
}

/// Per-label replacements applied on top of the locale table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NavOverrides {
    pub index: Option<String>,
    pub about: Option<String>,
    pub rss: Option<String>,
    pub search: Option<String>,
}

impl NavOverrides {
    #[must_use]
    pub fn apply(&self, mut strings: NavStrings) -> NavStrings {
        let slots = [
            (&self.index, &mut strings.index),
            (&self.about, &mut strings.about),
            (&self.rss, &mut strings.rss),
            (&self.search, &mut strings.search),
        ];
        for (replacement, label) in slots {
            if let Some(replacement) = replacement {
                label.clone_from(replacement);
            }
        }
        strings
    }
}

/// Site-wide settings consumed by the header.
///
/// Every field has a default so a partial JSON document is enough.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub title: String,
    pub description: String,
    /// Base path of the index page; empty means `/`.
    pub path: String,
    pub show_about: bool,
    /// Collapses the nav bar instead of sticking it to the viewport.
    pub auto_collapsed_nav_bar: bool,
    /// Document language; also selects the built-in UI strings.
    pub lang: String,
    pub favicon: IconSet,
    pub nav: NavOverrides,
    /// Whether a click landing on the site description also scrolls to top.
    pub description_scrolls_to_top: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Field Notes".to_owned(),
            description: "writing about systems".to_owned(),
            path: String::new(),
            show_about: true,
            auto_collapsed_nav_bar: false,
            lang: "en-US".to_owned(),
            favicon: IconSet::default(),
            nav: NavOverrides::default(),
            description_scrolls_to_top: false,
        }
    }
}

impl SiteConfig {
    #[must_use]
    pub const fn sticky_enabled(&self) -> bool {
        !self.auto_collapsed_nav_bar
    }

    /// Path the index link points at.
    #[must_use]
    pub fn index_path(&self) -> &str {
        if self.path.is_empty() { "/" } else { &self.path }
    }

    /// Nav labels for `lang`, with any configured overrides applied.
    #[must_use]
    pub fn nav_strings(&self) -> NavStrings {
        self.nav.apply(locale(&self.lang).nav)
    }
}
