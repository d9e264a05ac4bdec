//! Navigation links shown on the right side of the header.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::types::SiteConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub id: u8,
    pub name: String,
    pub to: String,
    pub show: bool,
    pub external: bool,
}

/// Builds the full link list for a site. Hidden links are kept so ids stay
/// stable; [`component`] filters on `show`.
#[must_use]
pub fn nav_links(config: &SiteConfig) -> Vec<NavLink> {
    let nav = config.nav_strings();
    vec![
        NavLink {
            id: 0,
            name: nav.index,
            to: config.index_path().to_owned(),
            show: false,
            external: false,
        },
        NavLink {
            id: 1,
            name: nav.about,
            to: "/about".to_owned(),
            show: config.show_about,
            external: false,
        },
        NavLink {
            id: 2,
            name: nav.rss,
            to: "/feed".to_owned(),
            show: false,
            external: false,
        },
        NavLink {
            id: 3,
            name: nav.search,
            to: "/search".to_owned(),
            show: false,
            external: false,
        },
    ]
}

pub fn component(config: &SiteConfig) -> impl IntoView + use<> {
    let items = nav_links(config)
        .into_iter()
        .filter(|link| link.show)
        .map(|link| {
            let entry = if link.external {
                view! {
                    <a href=link.to target="_blank" rel="noopener noreferrer">{link.name}</a>
                }
                .into_any()
            } else {
                view! { <A href=link.to>{link.name}</A> }.into_any()
            };
            view! { <li class="block ml-4 text-black dark:text-gray-50 nav">{entry}</li> }
        })
        .collect_view();

    view! {
        <div class="flex-shrink-0">
            <ul class="flex flex-row">{items}</ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_about_link_shown_by_default() {
        let shown: Vec<_> = nav_links(&SiteConfig::default())
            .into_iter()
            .filter(|link| link.show)
            .collect();

        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].to, "/about");
        assert_eq!(shown[0].name, "About");
    }

    #[test]
    fn test_about_hidden_when_disabled() {
        let config = SiteConfig {
            show_about: false,
            ..Default::default()
        };

        assert!(nav_links(&config).iter().all(|link| !link.show));
    }

    #[test]
    fn test_index_link_uses_configured_path() {
        let config = SiteConfig {
            path: "/notes".to_owned(),
            ..Default::default()
        };

        let links = nav_links(&config);
        assert_eq!(links[0].to, "/notes");
        assert_eq!(nav_links(&SiteConfig::default())[0].to, "/");
    }

    #[test]
    fn test_labels_follow_lang_with_unknown_falling_back() {
        let german = SiteConfig {
            lang: "de-DE".to_owned(),
            ..Default::default()
        };
        assert_eq!(nav_links(&german)[1].name, "Über");

        let unknown = SiteConfig {
            lang: "qq".to_owned(),
            ..Default::default()
        };
        let names: Vec<_> = nav_links(&unknown).into_iter().map(|link| link.name).collect();
        assert_eq!(names, vec!["Blog", "About", "RSS", "Search"]);
    }

    #[test]
    fn test_link_ids_are_stable() {
        let ids: Vec<u8> = nav_links(&SiteConfig::default())
            .iter()
            .map(|link| link.id)
            .collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }
}
