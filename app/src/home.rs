//! Landing page. Long enough to scroll the sentinel out of view so the
//! header can stick.

use leptos::prelude::*;
use leptos_meta::Title;

const SECTIONS: [(&str, &str); 4] = [
    (
        "Scrolling",
        "Scroll down and the navigation bar attaches itself to the top of the window.",
    ),
    (
        "Back to top",
        "Click the bar itself, or the title, to glide back up. Links keep working as links.",
    ),
    (
        "Icons",
        "The icon follows your colour scheme and quietly swaps to a fallback if it cannot load.",
    ),
    (
        "Configuration",
        "Titles, links and icon paths come from the site configuration file.",
    ),
];

pub fn component() -> impl IntoView {
    let sections = SECTIONS
        .iter()
        .map(|(heading, body)| {
            view! {
                <section class="min-h-[60vh]">
                    <h2 class="mb-4 text-2xl font-bold">{*heading}</h2>
                    <p class="text-gray-500">{*body}</p>
                </section>
            }
        })
        .collect_view();

    view! {
        <Title text="Home"/>
        <div class="flex flex-col gap-8">{sections}</div>
    }
}
