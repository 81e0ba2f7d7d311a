//! Card component for a single lost/found report in the browse grid.

use leptos::prelude::*;

use crate::net::api;
use crate::state::browse::ItemSummary;

/// A card showing one report: optional image, name, description,
/// location, date, and contact info.
#[component]
pub fn ItemCard(summary: ItemSummary) -> impl IntoView {
    let image_src = summary
        .image
        .as_deref()
        .map(|path| api::resolve_image(&api::base_url(), path));
    let alt = summary.name.clone();

    view! {
        <div class="item-card">
            {image_src
                .map(|src| {
                    view! {
                        <div class="item-card__image">
                            <img src=src alt=alt/>
                        </div>
                    }
                })}

            <div class="item-card__content">
                <h3 class="item-card__name">{summary.name}</h3>
                <p class="item-card__description">{summary.description}</p>
                <div class="item-card__meta">
                    <span class="item-card__location">{format!("\u{1F4CD} {}", summary.location)}</span>
                    <span class="item-card__date">{format!("\u{1F4C5} {}", summary.date)}</span>
                </div>
                <div class="item-card__contact">{format!("Contact: {}", summary.contact_info)}</div>
            </div>
        </div>
    }
}
