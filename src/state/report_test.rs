use super::*;

fn complete_draft() -> ReportDraft {
    ReportDraft {
        name: "Blue Backpack".to_owned(),
        description: "Jansport with laptop inside".to_owned(),
        date: "2025-03-14".to_owned(),
        location: "Library".to_owned(),
        contact_info: "sam@example.com".to_owned(),
    }
}

// =============================================================
// ReportKind
// =============================================================

#[test]
fn kinds_post_to_their_own_endpoints() {
    assert_eq!(ReportKind::Lost.endpoint(), "/api/ai/lost/");
    assert_eq!(ReportKind::Found.endpoint(), "/api/ai/found/");
}

#[test]
fn kinds_use_their_own_field_names() {
    assert_eq!(ReportKind::Lost.date_field(), "date_lost");
    assert_eq!(ReportKind::Lost.location_field(), "location_lost");
    assert_eq!(ReportKind::Found.date_field(), "date_found");
    assert_eq!(ReportKind::Found.location_field(), "location_found");
}

#[test]
fn success_messages_are_kind_specific() {
    assert_ne!(
        ReportKind::Lost.success_message(),
        ReportKind::Found.success_message()
    );
    assert!(ReportKind::Lost.success_message().starts_with("Lost item reported successfully!"));
    assert!(ReportKind::Found.success_message().starts_with("Found item reported successfully!"));
}

// =============================================================
// ReportDraft validation
// =============================================================

#[test]
fn complete_draft_passes_validation() {
    assert!(complete_draft().is_complete());
}

#[test]
fn draft_missing_a_required_field_fails_validation() {
    let mut draft = complete_draft();
    draft.name.clear();
    assert!(!draft.is_complete());

    let mut draft = complete_draft();
    draft.description = "   ".to_owned();
    assert!(!draft.is_complete());

    let mut draft = complete_draft();
    draft.location.clear();
    assert!(!draft.is_complete());

    let mut draft = complete_draft();
    draft.contact_info.clear();
    assert!(!draft.is_complete());
}

#[test]
fn draft_without_a_date_is_still_complete() {
    let mut draft = complete_draft();
    draft.date.clear();
    assert!(draft.is_complete());
}

// =============================================================
// Multipart fields
// =============================================================

#[test]
fn multipart_fields_use_lost_names_for_lost_reports() {
    let fields = complete_draft().multipart_fields(ReportKind::Lost);
    let names: Vec<&str> = fields.iter().map(|(n, _)| *n).collect();
    assert_eq!(
        names,
        ["name", "description", "date_lost", "location_lost", "contact_info"]
    );
}

#[test]
fn multipart_fields_use_found_names_for_found_reports() {
    let fields = complete_draft().multipart_fields(ReportKind::Found);
    let names: Vec<&str> = fields.iter().map(|(n, _)| *n).collect();
    assert_eq!(
        names,
        ["name", "description", "date_found", "location_found", "contact_info"]
    );
}

#[test]
fn multipart_fields_carry_draft_values() {
    let fields = complete_draft().multipart_fields(ReportKind::Lost);
    assert!(fields.contains(&("name", "Blue Backpack".to_owned())));
    assert!(fields.contains(&("location_lost", "Library".to_owned())));
}

// =============================================================
// Image selection
// =============================================================

#[test]
fn cancelling_the_picker_clears_the_preview() {
    let mut preview = Some("data:image/png;base64,AAAA".to_owned());
    preview_transition(&mut preview, false);
    assert!(preview.is_none());
}

#[test]
fn picking_a_file_keeps_the_preview_until_the_read_lands() {
    let mut preview = Some("data:image/png;base64,AAAA".to_owned());
    preview_transition(&mut preview, true);
    assert!(preview.is_some());
}

// =============================================================
// Inline messages
// =============================================================

#[test]
fn error_message_wraps_server_detail() {
    assert_eq!(
        error_message("image too large"),
        "Error reporting item: image too large"
    );
}

#[test]
fn error_detection_separates_message_styles() {
    assert!(is_error(&error_message("bad request")));
    assert!(!is_error(ReportKind::Lost.success_message()));
    assert!(!is_error(ReportKind::Found.success_message()));
}
