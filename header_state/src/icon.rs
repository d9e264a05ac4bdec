//! Site icon resolution with a one-shot fallback.
//!
//! The displayed path is a pure function of `(theme, failed)`. A load error
//! switches to the theme-independent fallback; a theme change starts over
//! from the themed variant.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// Icon resources available to the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconSet {
    pub light: String,
    pub dark: String,
    /// Shown after a load error. Must not depend on the theme, otherwise a
    /// broken themed asset could bounce between error and fallback forever.
    pub fallback: String,
}

impl Default for IconSet {
    fn default() -> Self {
        Self {
            light: "/favicon.svg".to_owned(),
            dark: "/favicon.dark.svg".to_owned(),
            fallback: "/favicon.fallback.svg".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IconState {
    pub theme: Theme,
    pub failed: bool,
}

impl IconState {
    #[must_use]
    pub const fn clean(theme: Theme) -> Self {
        Self {
            theme,
            failed: false,
        }
    }
}

/// Picks the icon path for the given state. Resolution never fetches
/// anything; calling it twice with the same inputs gives the same path.
#[must_use]
pub fn resolve(icons: &IconSet, state: IconState) -> &str {
    match (state.failed, state.theme) {
        (true, _) => &icons.fallback,
        (false, Theme::Light) => &icons.light,
        (false, Theme::Dark) => &icons.dark,
    }
}

/// What a load error did to the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadErrorOutcome {
    /// The themed icon failed; the fallback is now displayed.
    FellBack,
    /// The fallback failed as well, or is the very path that failed. The
    /// path is unchanged and the header should stop rendering the image.
    Exhausted,
    /// Already exhausted; nothing left to do.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconResolver {
    icons: IconSet,
    state: IconState,
    exhausted: bool,
}

impl IconResolver {
    #[must_use]
    pub fn new(icons: IconSet, theme: Theme) -> Self {
        Self {
            icons,
            state: IconState::clean(theme),
            exhausted: false,
        }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        resolve(&self.icons, self.state)
    }

    #[must_use]
    pub const fn state(&self) -> IconState {
        self.state
    }

    #[must_use]
    pub const fn icons(&self) -> &IconSet {
        &self.icons
    }

    /// `true` once both the themed icon and the fallback failed to load.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Re-resolves from a clean state when the theme actually changed.
    /// Returns whether anything was reset.
    pub fn set_theme(&mut self, theme: Theme) -> bool {
        if theme == self.state.theme {
            return false;
        }
        debug!(?theme, "theme changed; resolving icon from a clean state");
        self.state = IconState::clean(theme);
        self.exhausted = false;
        true
    }

    /// Handles a load error reported for the currently displayed path.
    pub fn on_load_error(&mut self) -> LoadErrorOutcome {
        if self.exhausted {
            return LoadErrorOutcome::Ignored;
        }
        if self.state.failed {
            warn!(path = %self.path(), "fallback icon failed to load; rendering header without icon");
            self.exhausted = true;
            return LoadErrorOutcome::Exhausted;
        }
        let failed_path = self.path().to_owned();
        self.state.failed = true;
        // The image source must change for the browser to report another
        // error, so a fallback equal to the broken path is already spent.
        if self.path() == failed_path {
            warn!(path = %failed_path, "icon failed to load and fallback is the same resource; rendering header without icon");
            self.exhausted = true;
            return LoadErrorOutcome::Exhausted;
        }
        warn!(path = %failed_path, "icon failed to load; switching to fallback");
        LoadErrorOutcome::FellBack
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn resolves_themed_variant_initially() {
        let icons = IconSet::default();
        let light = IconResolver::new(icons.clone(), Theme::Light);
        let dark = IconResolver::new(icons, Theme::Dark);

        assert_eq!(light.path(), "/favicon.svg");
        assert_eq!(dark.path(), "/favicon.dark.svg");
        assert!(!dark.state().failed);
    }

    #[test]
    fn resolution_is_idempotent() {
        let icons = IconSet::default();
        for theme in [Theme::Light, Theme::Dark] {
            for failed in [false, true] {
                let state = IconState { theme, failed };
                assert_eq!(resolve(&icons, state), resolve(&icons, state));
            }
        }
    }

    #[test]
    fn fallback_ignores_theme() {
        let icons = IconSet::default();
        let light = resolve(&icons, IconState { theme: Theme::Light, failed: true });
        let dark = resolve(&icons, IconState { theme: Theme::Dark, failed: true });
        assert_eq!(light, dark);
        assert_eq!(light, "/favicon.fallback.svg");
    }

    #[test]
    fn theme_change_clears_failure() {
        let mut resolver = IconResolver::new(IconSet::default(), Theme::Dark);
        assert_matches!(resolver.on_load_error(), LoadErrorOutcome::FellBack);
        assert!(resolver.state().failed);

        assert!(resolver.set_theme(Theme::Light));
        assert_eq!(resolver.state(), IconState::clean(Theme::Light));
        assert_eq!(resolver.path(), "/favicon.svg");
    }

    #[test]
    fn same_theme_keeps_failure() {
        let mut resolver = IconResolver::new(IconSet::default(), Theme::Light);
        resolver.on_load_error();

        assert!(!resolver.set_theme(Theme::Light));
        assert!(resolver.state().failed);
    }

    #[test]
    fn repeated_errors_keep_fallback_path() {
        let mut resolver = IconResolver::new(IconSet::default(), Theme::Dark);
        assert_matches!(resolver.on_load_error(), LoadErrorOutcome::FellBack);
        let fallback = resolver.path().to_owned();

        assert_matches!(resolver.on_load_error(), LoadErrorOutcome::Exhausted);
        assert_eq!(resolver.path(), fallback);
        assert!(resolver.is_exhausted());

        assert_matches!(resolver.on_load_error(), LoadErrorOutcome::Ignored);
        assert_eq!(resolver.path(), fallback);
    }

    #[test]
    fn theme_change_recovers_from_exhaustion() {
        let mut resolver = IconResolver::new(IconSet::default(), Theme::Light);
        resolver.on_load_error();
        resolver.on_load_error();
        assert!(resolver.is_exhausted());

        resolver.set_theme(Theme::Dark);
        assert!(!resolver.is_exhausted());
        assert_eq!(resolver.path(), "/favicon.dark.svg");
    }

    #[test]
    fn fallback_equal_to_failed_path_exhausts_at_once() {
        let icons = IconSet {
            light: "/a.svg".to_owned(),
            dark: "/b.svg".to_owned(),
            fallback: "/a.svg".to_owned(),
        };
        let mut resolver = IconResolver::new(icons, Theme::Light);

        assert_matches!(resolver.on_load_error(), LoadErrorOutcome::Exhausted);
        assert!(resolver.is_exhausted());
        assert!(resolver.state().failed);
        assert_eq!(resolver.path(), "/a.svg");
        assert_matches!(resolver.on_load_error(), LoadErrorOutcome::Ignored);

        // The other theme still gets one fallback attempt.
        resolver.set_theme(Theme::Dark);
        assert_eq!(resolver.path(), "/b.svg");
        assert_matches!(resolver.on_load_error(), LoadErrorOutcome::FellBack);
        assert_eq!(resolver.path(), "/a.svg");
    }

    #[test]
    fn icon_set_fills_missing_fields() {
        let icons: IconSet = serde_json::from_str(r#"{"dark": "/d.png"}"#).unwrap();
        assert_eq!(icons.dark, "/d.png");
        assert_eq!(icons.light, IconSet::default().light);
        assert_eq!(icons.fallback, IconSet::default().fallback);
    }
}
