//! About page. Shows its own title in the header while mounted.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::header::set_header_title;

pub fn component() -> impl IntoView {
    set_header_title("About");

    view! {
        <Title text="About"/>
        <article class="flex flex-col gap-4">
            <h1 class="text-3xl font-bold">"About"</h1>
            <p class="text-gray-500">
                "A small site whose header sticks while you read and steps aside when you do not need it."
            </p>
        </article>
    }
}
