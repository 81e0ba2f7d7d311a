//! Shared report form for lost and found items.
//!
//! Both report pages render this component; [`ReportKind`] carries every
//! string that differs between them. Submission builds one multipart
//! POST, shows the inline confirmation or error, and on success
//! navigates to the browse view after a short delay.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::report::{self, ReportDraft, ReportKind};

/// Report form with name, description, date, location, contact, and an
/// optional image upload with local preview.
#[component]
pub fn ReportForm(kind: ReportKind) -> impl IntoView {
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let date = RwSignal::new(report::today());
    let location = RwSignal::new(String::new());
    let contact_info = RwSignal::new(String::new());

    let submitting = RwSignal::new(false);
    let message = RwSignal::new(String::new());
    let preview_url = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    let image_file = RwSignal::new_local(None::<web_sys::File>);

    let on_image_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            // The input is the source of truth: a cancelled picker
            // deselects the previously chosen image too.
            let selected = input.files().and_then(|files| files.get(0));
            preview_url.update(|p| report::preview_transition(p, selected.is_some()));
            if let Some(file) = &selected {
                let _ = crate::util::enhancer::read_data_url(file, move |url| {
                    preview_url.set(Some(url));
                });
            }
            image_file.set(selected);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    #[cfg(feature = "hydrate")]
    let submit_navigate = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let draft = ReportDraft {
            name: name.get(),
            description: description.get(),
            date: date.get(),
            location: location.get(),
            contact_info: contact_info.get(),
        };
        // Required fields are enforced by the inputs; this guard keeps an
        // incomplete or already-submitting form from issuing a request.
        if !draft.is_complete() || submitting.get() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = submit_navigate.clone();
            submitting.set(true);
            message.set(String::new());

            leptos::task::spawn_local(async move {
                match submit(kind, &draft, image_file.get_untracked()).await {
                    Ok(()) => {
                        message.set(kind.success_message().to_owned());
                        submitting.set(false);
                        gloo_timers::future::TimeoutFuture::new(2_000).await;
                        navigate("/browse", NavigateOptions::default());
                    }
                    Err(detail) => {
                        message.set(report::error_message(&detail));
                        submitting.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = draft;
        }
    };

    let on_cancel = move |_| navigate("/", NavigateOptions::default());

    view! {
        <div class="form-container">
            <div class="form-card">
                <h2>{kind.title()}</h2>
                <form on:submit=on_submit>
                    <div class="form-group">
                        <label>"Item Name *"</label>
                        <input
                            type="text"
                            required=true
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label>"Description *"</label>
                        <textarea
                            required=true
                            rows=3
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        ></textarea>
                    </div>

                    <div class="form-group">
                        <label>{kind.date_label()}</label>
                        <input
                            type="date"
                            prop:value=move || date.get()
                            on:input=move |ev| date.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label>{kind.location_label()}</label>
                        <input
                            type="text"
                            required=true
                            placeholder="e.g., Library, Cafeteria"
                            prop:value=move || location.get()
                            on:input=move |ev| location.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label>"Contact Info (Email/Phone) *"</label>
                        <input
                            type="text"
                            required=true
                            placeholder="your.email@example.com"
                            prop:value=move || contact_info.get()
                            on:input=move |ev| contact_info.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label>"Upload Image (Optional)"</label>
                        <input type="file" accept="image/*" on:change=on_image_change/>
                        {move || {
                            preview_url
                                .get()
                                .map(|src| {
                                    view! {
                                        <img class="form-group__preview" src=src alt="Selected image preview"/>
                                    }
                                })
                        }}
                    </div>

                    <Show when=move || !message.get().is_empty()>
                        <div class=move || {
                            if report::is_error(&message.get()) {
                                "message message--error"
                            } else {
                                "message message--success"
                            }
                        }>{move || message.get()}</div>
                    </Show>

                    <div class="form-actions">
                        <button type="button" class="btn btn--secondary" on:click=on_cancel>
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            class="btn btn--primary"
                            prop:disabled=move || submitting.get()
                        >
                            {move || if submitting.get() { "Submitting..." } else { kind.title() }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

/// Build the multipart payload for a draft and POST it to the kind's
/// endpoint. The image, when present, is attached under its own name.
#[cfg(feature = "hydrate")]
async fn submit(
    kind: ReportKind,
    draft: &ReportDraft,
    image: Option<web_sys::File>,
) -> Result<(), String> {
    let form = web_sys::FormData::new().map_err(|_| "could not build form data".to_owned())?;
    for (field, value) in draft.multipart_fields(kind) {
        form.append_with_str(field, &value)
            .map_err(|_| "could not build form data".to_owned())?;
    }
    if let Some(file) = image {
        form.append_with_blob_and_filename("image", &file, &file.name())
            .map_err(|_| "could not attach image".to_owned())?;
    }

    crate::net::api::post_multipart(kind.endpoint(), form).await
}
