//! Root application component with routing and shared navigation.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::pages::{
    browse::BrowsePage, home::HomePage, report_found::ReportFoundPage,
    report_lost::ReportLostPage,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Sets up client-side routing between the home, report, and browse views.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/retrace-client.css"/>
        <Title text="Retrace"/>

        <Router>
            <NavBar/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("report-lost") view=ReportLostPage/>
                <Route path=StaticSegment("report-found") view=ReportFoundPage/>
                <Route path=StaticSegment("browse") view=BrowsePage/>
            </Routes>
        </Router>
    }
}
