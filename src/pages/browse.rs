//! Browse page listing lost and found reports behind a tab toggle.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::item_card::ItemCard;
use crate::state::browse::{ItemSummary, ItemTab};

/// Browse page — fetches both lists on mount and shows one at a time.
///
/// The tab toggle only changes which stored list renders; it never
/// refetches. Counts come from the stored lists, so they read zero
/// while the initial fetch is in flight.
#[component]
pub fn BrowsePage() -> impl IntoView {
    let navigate = use_navigate();

    // Lost and found lists fetch concurrently; loading clears once both
    // have settled.
    let items = LocalResource::new(|| crate::net::api::fetch_all_items());
    let active_tab = RwSignal::new(ItemTab::Lost);

    let counts = move || {
        items
            .get()
            .map_or((0, 0), |(lost, found)| (lost.len(), found.len()))
    };

    let summaries = move || {
        items.get().map(|(lost, found)| match active_tab.get() {
            ItemTab::Lost => lost.iter().map(ItemSummary::from).collect::<Vec<_>>(),
            ItemTab::Found => found.iter().map(ItemSummary::from).collect(),
        })
    };

    let go_home = move |_| navigate("/", NavigateOptions::default());
    let set_lost = move |_| active_tab.set(ItemTab::Lost);
    let set_found = move |_| active_tab.set(ItemTab::Found);

    view! {
        <div class="browse-page">
            <header class="browse-page__header">
                <h2>"Browse Items"</h2>
                <button class="btn btn--primary" on:click=go_home>
                    "Back to Home"
                </button>
            </header>

            <div class="browse-page__tabs">
                <button
                    class="browse-page__tab"
                    class:browse-page__tab--active=move || active_tab.get() == ItemTab::Lost
                    on:click=set_lost
                >
                    {move || ItemTab::Lost.tab_label(counts().0)}
                </button>
                <button
                    class="browse-page__tab"
                    class:browse-page__tab--active=move || active_tab.get() == ItemTab::Found
                    on:click=set_found
                >
                    {move || ItemTab::Found.tab_label(counts().1)}
                </button>
            </div>

            {move || match summaries() {
                None => {
                    view! { <div class="browse-page__loading">"Loading items..."</div> }
                        .into_any()
                }
                Some(list) if list.is_empty() => {
                    view! {
                        <div class="browse-page__empty">{active_tab.get().empty_message()}</div>
                    }
                        .into_any()
                }
                Some(list) => {
                    view! {
                        <div class="browse-page__grid">
                            {list
                                .into_iter()
                                .map(|summary| {
                                    view! { <ItemCard summary=summary/> }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
