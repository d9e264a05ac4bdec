//! The site header: a sentinel, the sticky nav bar, the brand block and the
//! navigation links.
//!
//! Three behaviours meet here. The nav bar sticks to the viewport once the
//! sentinel above it scrolls away (see [`sticky`]). The brand icon follows the
//! theme and falls back once if it fails to load (see [`favicon`]). Clicking
//! directly on the header surface or on the title paragraph scrolls back to
//! the top of the page; clicks on links, the icon or nested spans do not.

use header_state::{ClickTargets, Presentation, SameNode};
use leptos::{ev::MouseEvent, html, prelude::*};
use wasm_bindgen::JsCast as _;

use crate::{
    components::{favicon, nav_bar, sticky, wordmark},
    theme::use_theme,
    types::SiteConfig,
};

const HEADER_CLASS: &str = "sticky-nav group m-auto w-full h-6 flex flex-row justify-between items-center mb-2 md:mb-12 py-8 bg-opacity-60";

/// Optional post title shown in front of the site title. Pages set it while
/// they are mounted.
#[derive(Debug, Clone, Copy)]
pub struct HeaderTitle(pub RwSignal<Option<String>>);

pub fn provide_header_title() -> HeaderTitle {
    let title = HeaderTitle(RwSignal::new(None));
    provide_context(title);
    title
}

/// Publishes `title` in the header until the calling component unmounts.
pub fn set_header_title(title: impl Into<String>) {
    let Some(HeaderTitle(slot)) = use_context::<HeaderTitle>() else {
        return;
    };
    slot.set(Some(title.into()));
    on_cleanup(move || slot.set(None));
}

/// A rendering-tree node compared by identity.
#[derive(Debug, Clone)]
pub struct DomNode(web_sys::Node);

impl DomNode {
    pub fn of(node: &impl AsRef<web_sys::Node>) -> Self {
        Self(node.as_ref().clone())
    }
}

impl SameNode for DomNode {
    fn same_node(&self, other: &Self) -> bool {
        self.0.is_same_node(Some(&other.0))
    }
}

#[must_use]
pub fn header_class(full_width: bool, presentation: Presentation) -> String {
    let width = if full_width {
        "px-4 md:px-24"
    } else {
        "max-w-3xl px-4"
    };
    match presentation.class() {
        Some(state) => format!("{HEADER_CLASS} {width} {state}"),
        None => format!("{HEADER_CLASS} {width}"),
    }
}

/// Nodes whose own clicks scroll to the top: the header surface and the
/// title paragraph, plus the description span when `description_scrolls`.
pub fn header_click_targets<N: SameNode>(
    description_scrolls: bool,
    surface: Option<N>,
    title: Option<N>,
    description: Option<N>,
) -> ClickTargets<N> {
    let targets = ClickTargets::new().with(surface).with(title);
    if description_scrolls {
        targets.with(description)
    } else {
        targets
    }
}

fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = web_sys::ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Renders the header for `config`.
///
/// `full_width` widens the bar for pages that use the whole viewport.
pub fn component(config: SiteConfig, full_width: bool) -> impl IntoView {
    let sentinel_ref = NodeRef::<html::Div>::new();
    let nav_ref = NodeRef::<html::Div>::new();
    let title_ref = NodeRef::<html::P>::new();
    let description_ref = NodeRef::<html::Span>::new();

    let presentation = sticky::use_sticky_nav(sentinel_ref, config.sticky_enabled());
    let favicon = favicon::use_favicon(config.favicon.clone(), use_theme());
    let post_title = use_context::<HeaderTitle>().map(|HeaderTitle(slot)| slot);

    let description_scrolls = config.description_scrolls_to_top;
    let on_click = move |ev: MouseEvent| {
        let targets = header_click_targets(
            description_scrolls,
            nav_ref.get_untracked().as_ref().map(DomNode::of),
            title_ref.get_untracked().as_ref().map(DomNode::of),
            description_ref.get_untracked().as_ref().map(DomNode::of),
        );
        let target = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
            .map(DomNode);
        targets.dispatch(target.as_ref(), scroll_to_top);
    };

    let alt = config.title.clone();
    let icon = move || {
        favicon.visible().then(|| {
            view! {
                <img
                    src=move || favicon.path()
                    width="24"
                    height="24"
                    alt=alt.clone()
                    on:error=move |_| favicon.report_error()
                />
            }
        })
    };

    view! {
        <div class="observer-element h-4 md:h-12" node_ref=sentinel_ref></div>
        <div
            id="sticky-nav"
            class=move || header_class(full_width, presentation.get())
            node_ref=nav_ref
            on:click=on_click
        >
            {wordmark::component()}
            <div class="flex items-center">
                <a href="/" aria-label=config.title.clone()>{icon}</a>
                <p
                    node_ref=title_ref
                    class="header-name ml-2 font-medium text-gray-600 dark:text-gray-300 capture-pointer-events grid-rows-1 grid-cols-1 items-center"
                >
                    {move || {
                        post_title
                            .and_then(|slot| slot.get())
                            .map(|title| {
                                view! { <span class="post-title row-start-1 col-start-1">{title}</span> }
                            })
                    }}
                    <span class="row-start-1 col-start-1">
                        <span class="site-title">{config.title.clone()}</span>
                        <span node_ref=description_ref class="site-description font-normal">
                            {format!(", {}", config.description)}
                        </span>
                    </span>
                </p>
            </div>
            {nav_bar::component(&config)}
        </div>
    }
}
