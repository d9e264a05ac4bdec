//! Reactive wrapper around [`IconResolver`].

use header_state::{IconResolver, IconSet, LoadErrorOutcome, Theme};
use leptos::prelude::*;

/// Handle to the header icon's reactive state.
#[derive(Debug, Clone, Copy)]
pub struct Favicon {
    resolver: RwSignal<IconResolver>,
}

impl Favicon {
    /// Path of the icon to display.
    pub fn path(&self) -> String {
        self.resolver.with(|resolver| resolver.path().to_owned())
    }

    /// `false` once the fallback icon failed too.
    pub fn visible(&self) -> bool {
        self.resolver.with(|resolver| !resolver.is_exhausted())
    }

    /// Feeds an image load error into the resolver.
    pub fn report_error(&self) {
        self.resolver.maybe_update(|resolver| {
            let outcome = resolver.on_load_error();
            if outcome == LoadErrorOutcome::Exhausted {
                leptos::logging::warn!("header icon unavailable; rendering without it");
            }
            outcome != LoadErrorOutcome::Ignored
        });
    }
}

/// Creates the icon state and re-resolves it whenever `theme` changes.
///
/// The resolver starts from the theme's current value so the server render
/// and the first client render agree.
pub fn use_favicon(icons: IconSet, theme: Signal<Theme>) -> Favicon {
    let resolver = RwSignal::new(IconResolver::new(icons, theme.get_untracked()));

    Effect::new(move |_| {
        let theme = theme.get();
        resolver.maybe_update(|resolver| resolver.set_theme(theme));
    });

    Favicon { resolver }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_favicon_initial_path_follows_theme() {
        let owner = Owner::new();
        owner.set();

        let favicon = use_favicon(IconSet::default(), Signal::stored(Theme::Dark));
        assert_eq!(favicon.path(), "/favicon.dark.svg");
        assert!(favicon.visible());
    }

    #[test]
    fn test_favicon_error_falls_back_then_hides() {
        let owner = Owner::new();
        owner.set();

        let favicon = use_favicon(IconSet::default(), Signal::stored(Theme::Light));
        favicon.report_error();
        assert_eq!(favicon.path(), "/favicon.fallback.svg");
        assert!(favicon.visible());

        favicon.report_error();
        assert_eq!(favicon.path(), "/favicon.fallback.svg");
        assert!(!favicon.visible());
    }
}
