//! Static page enhancer carried over from the legacy template pages.
//!
//! Two operations: mark the `nav` link matching the current URL as
//! active, and read a selected file as a data URL for an inline image
//! preview. Both require a browser environment and degrade to no-ops
//! without one.

#[cfg(test)]
#[path = "enhancer_test.rs"]
mod enhancer_test;

/// Toggle the `active` class on every `nav a` anchor: added where the
/// absolute href equals the current location href, removed elsewhere.
///
/// The router handles same-origin anchor clicks without a page load, so
/// callers re-run this on every route change rather than only on load.
pub fn highlight_active_nav() {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        let Ok(current) = window.location().href() else {
            return;
        };

        let Ok(links) = document.query_selector_all("nav a") else {
            return;
        };
        for i in 0..links.length() {
            let Some(node) = links.item(i) else {
                continue;
            };
            if let Some(anchor) = node.dyn_ref::<web_sys::HtmlAnchorElement>() {
                let class_list = anchor.class_list();
                if is_active_link(&anchor.href(), &current) {
                    let _ = class_list.add_1("active");
                } else {
                    let _ = class_list.remove_1("active");
                }
            }
        }
    }
}

/// Whether a nav anchor with `href` should carry the `active` class
/// while the browser is at `current`.
pub fn is_active_link(href: &str, current: &str) -> bool {
    href == current
}

/// Read a file as a data URL and hand the result to `on_load`.
///
/// Used by the report forms to preview the selected image before upload.
/// The callback is not invoked if the read fails or yields a non-string.
///
/// # Errors
///
/// Returns the raw JS error if the `FileReader` cannot be created or
/// the read cannot start.
#[cfg(feature = "hydrate")]
pub fn read_data_url(
    file: &web_sys::File,
    on_load: impl FnOnce(String) + 'static,
) -> Result<(), wasm_bindgen::JsValue> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let reader = web_sys::FileReader::new()?;
    let reader_for_result = reader.clone();
    let cb = Closure::once(move |_ev: web_sys::ProgressEvent| {
        if let Ok(result) = reader_for_result.result() {
            if let Some(data_url) = result.as_string() {
                on_load(data_url);
            }
        }
    });
    reader.set_onload(Some(cb.as_ref().unchecked_ref()));
    cb.forget();
    reader.read_as_data_url(file)?;
    Ok(())
}
