//! Landing page with report call-to-actions and a browse link.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// Home page — hero section with buttons into the two report forms.
#[component]
pub fn HomePage() -> impl IntoView {
    let navigate = use_navigate();

    let go_lost = {
        let navigate = navigate.clone();
        move |_| navigate("/report-lost", NavigateOptions::default())
    };
    let go_found = move |_| navigate("/report-found", NavigateOptions::default());

    view! {
        <div class="home-page">
            <div class="home-page__hero">
                <div class="home-page__logo">
                    <span class="home-page__logo-icon">"\u{1F50D}"</span>
                    <h1>"Retrace"</h1>
                </div>
                <p class="home-page__tagline">"Campus Lost & Found Made Simple"</p>
                <p class="home-page__description">
                    "AI-powered item tracking with automated matching and notifications"
                </p>

                <div class="home-page__actions">
                    <button class="btn btn--primary" on:click=go_lost>
                        "Report Lost Item"
                    </button>
                    <button class="btn btn--secondary" on:click=go_found>
                        "Report Found Item"
                    </button>
                </div>

                <div class="home-page__links">
                    <a href="/browse">"Browse All Items"</a>
                </div>
            </div>
        </div>
    }
}
