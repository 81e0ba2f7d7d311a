//! Top navigation bar shared by all views.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Navigation bar with links to every view. The static enhancer marks
/// the link matching the current URL as active.
#[component]
pub fn NavBar() -> impl IntoView {
    // The router handles these same-origin anchors without a page load,
    // so the highlighter re-runs on every route change.
    let location = use_location();
    Effect::new(move || {
        location.pathname.track();
        crate::util::enhancer::highlight_active_nav();
    });

    view! {
        <nav class="nav-bar">
            <a class="nav-bar__brand" href="/">"Retrace"</a>
            <ul class="nav-bar__links">
                <li><a href="/">"Home"</a></li>
                <li><a href="/report-lost">"Report Lost"</a></li>
                <li><a href="/report-found">"Report Found"</a></li>
                <li><a href="/browse">"Browse"</a></li>
            </ul>
        </nav>
    }
}
