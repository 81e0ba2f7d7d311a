use super::*;

// =============================================================
// normalize_base
// =============================================================

#[test]
fn normalize_base_strips_trailing_slash() {
    assert_eq!(normalize_base("http://localhost:8001/"), "http://localhost:8001");
    assert_eq!(normalize_base("http://localhost:8001"), "http://localhost:8001");
}

#[test]
fn base_url_defaults_without_env_override() {
    // RETRACE_API_URL is unset in the test build.
    assert_eq!(base_url(), DEFAULT_API_URL);
}

// =============================================================
// resolve_image
// =============================================================

#[test]
fn resolve_image_joins_relative_media_path() {
    let url = resolve_image("http://localhost:8001", "/media/lost_products/keys.jpg");
    assert_eq!(url, "http://localhost:8001/media/lost_products/keys.jpg");
}

#[test]
fn resolve_image_passes_absolute_urls_through() {
    let absolute = "https://cdn.example.com/keys.jpg";
    assert_eq!(resolve_image("http://localhost:8001", absolute), absolute);
}
