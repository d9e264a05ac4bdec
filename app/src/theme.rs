//! Light/dark theme signal.
//!
//! The server always renders the light theme. Once hydrated, the client
//! follows the `prefers-color-scheme` media query and keeps the signal in
//! sync with it. Nothing is persisted.

use header_state::Theme;
use leptos::prelude::*;

#[cfg(feature = "hydrate")]
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    pub dark: RwSignal<bool>,
}

impl ThemeContext {
    #[must_use]
    pub fn theme(&self) -> Signal<Theme> {
        let dark = self.dark;
        Signal::derive(move || Theme::from_dark(dark.get()))
    }
}

/// Creates the theme signal and makes it available to descendants.
pub fn provide_theme() -> ThemeContext {
    let context = ThemeContext {
        dark: RwSignal::new(false),
    };
    provide_context(context);

    #[cfg(feature = "hydrate")]
    follow_color_scheme(context.dark);

    context
}

/// Returns the theme provided by an ancestor, or a fixed light theme when
/// none was provided.
#[must_use]
pub fn use_theme() -> Signal<Theme> {
    use_context::<ThemeContext>()
        .map_or_else(|| Signal::stored(Theme::Light), |context| context.theme())
}

#[cfg(feature = "hydrate")]
fn follow_color_scheme(dark: RwSignal<bool>) {
    use send_wrapper::SendWrapper;
    use wasm_bindgen::{JsCast as _, closure::Closure};
    use web_sys::MediaQueryListEvent;

    Effect::new(move |_| {
        let Some(query) = web_sys::window().and_then(|w| w.match_media(DARK_QUERY).ok().flatten())
        else {
            leptos::logging::warn!("colour scheme query unavailable; keeping light theme");
            return;
        };
        dark.set(query.matches());

        let on_change = Closure::<dyn FnMut(MediaQueryListEvent)>::new(
            move |event: MediaQueryListEvent| dark.set(event.matches()),
        );
        if let Err(err) =
            query.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
        {
            leptos::logging::warn!("failed to watch colour scheme: {err:?}");
            return;
        }

        let listener = SendWrapper::new((query, on_change));
        on_cleanup(move || {
            let (query, on_change) = listener.take();
            if let Err(err) = query
                .remove_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
            {
                leptos::logging::warn!("failed to stop watching colour scheme: {err:?}");
            }
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_use_theme_without_provider_is_light() {
        let owner = Owner::new();
        owner.set();

        assert_eq!(use_theme().get_untracked(), Theme::Light);
    }

    #[test]
    fn test_provided_theme_follows_signal() {
        let owner = Owner::new();
        owner.set();

        let context = provide_theme();
        let theme = use_theme();
        assert_eq!(theme.get_untracked(), Theme::Light);

        context.dark.set(true);
        assert_eq!(theme.get_untracked(), Theme::Dark);
    }
}
