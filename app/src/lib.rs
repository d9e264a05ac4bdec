// Application shell, routes and the site header
use crate::components::{error_template, header};
use leptos::{
    html::{body, head, html, meta},
    prelude::*,
};
use leptos_meta::{MetaTags, Stylesheet, StylesheetProps, Title, TitleProps, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{FlatRoutes, Route, Router},
};

mod about;
pub mod api;
pub mod components;
mod home;
pub mod locale;
pub mod theme;
pub mod types;

use crate::{api::site_config, types::SiteConfig};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    #[cfg(feature = "ssr")]
    let site = use_context::<types::AppState>()
        .map_or_else(SiteConfig::default, |state| state.site.as_ref().clone());
    #[cfg(not(feature = "ssr"))]
    let site = SiteConfig::default();

    let html_comp = html().lang(site.lang).child((
        head().child((
            meta().charset("utf-8"),
            meta()
                .name("viewport")
                .content("width=device-width, initial-scale=1"),
            HydrationScripts(HydrationScriptsProps::builder().options(options).build()),
            MetaTags(),
            Stylesheet(
                StylesheetProps::builder()
                    .id("leptos")
                    .href("/pkg/site.css")
                    .build(),
            ),
            Title(TitleProps::builder().text(site.title).build()),
        )),
        body().child(self::component),
    ));

    view! {
        <!DOCTYPE html>
        {html_comp}
    }
}

#[must_use]
pub fn component() -> impl IntoView {
    theme::provide_theme();
    header::provide_header_title();

    let config = Resource::new_blocking(
        || (),
        |()| async move {
            site_config().await.unwrap_or_else(|err| {
                leptos::logging::warn!("using default site configuration: {err}");
                SiteConfig::default()
            })
        },
    );

    view! {
        <Router>
            <div class="text-black dark:text-white">
                <Suspense fallback=|| ()>
                    {move || {
                        config.get().map(|config| header::component(config, false))
                    }}
                </Suspense>
                <main class="container flex flex-col gap-8 px-4 pb-14 mx-auto max-w-3xl">
                    <FlatRoutes fallback=error_template::not_found>
                        <Route path=StaticSegment("") view=home::component/>
                        <Route path=StaticSegment("about") view=about::component/>
                    </FlatRoutes>
                </main>
            </div>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_creation() {
        let options = LeptosOptions::builder().output_name("site").build();
        let shell_view = shell(options);
        drop(shell_view);
    }

    #[test]
    fn test_component_function_signatures() {
        let _shell_fn: fn(LeptosOptions) -> _ = shell;
        let _component_fn: fn() -> _ = component;

        let options = LeptosOptions::builder().output_name("site").build();
        assert_eq!(options.site_addr.port(), 3000);
        assert_eq!(options.site_addr.ip().to_string(), "127.0.0.1");
    }
}
