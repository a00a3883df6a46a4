//! Navigation Bar Component

use leptos::prelude::*;

use crate::routes::Page;

/// Top navigation; the current page's link is marked active
#[component]
pub fn NavBar(page: Page) -> impl IntoView {
    view! {
        <nav class="nav-bar">
            <span class="nav-title">"Problem Board"</span>
            {Page::NAV.into_iter().map(|(href, label, target)| {
                let class = if target == page { "nav-link active" } else { "nav-link" };
                view! { <a class=class href=href>{label}</a> }
            }).collect_view()}
            <a class="nav-link new-problem" href="/add_problem">"New problem"</a>
        </nav>
    }
}
