use super::*;

fn lost_item() -> LostItem {
    LostItem {
        id: 2,
        name: "Water Bottle".to_owned(),
        description: "Steel, dented near the cap".to_owned(),
        date_lost: "2025-03-10".to_owned(),
        location_lost: "Lecture Hall B".to_owned(),
        contact_info: "mg@example.com".to_owned(),
        image: Some("/media/lost_products/bottle.jpg".to_owned()),
        created_at: None,
    }
}

fn found_item() -> FoundItem {
    FoundItem {
        id: 5,
        name: "Calculator".to_owned(),
        description: "TI-84 with initials on the back".to_owned(),
        date_found: "2025-03-11".to_owned(),
        location_found: "Cafeteria".to_owned(),
        contact_info: "front desk".to_owned(),
        image: None,
        created_at: None,
    }
}

// =============================================================
// ItemTab
// =============================================================

#[test]
fn item_tab_default_is_lost() {
    assert_eq!(ItemTab::default(), ItemTab::Lost);
}

#[test]
fn item_tab_keys_are_distinct() {
    assert_eq!(ItemTab::Lost.key(), "lost");
    assert_eq!(ItemTab::Found.key(), "found");
}

#[test]
fn tab_labels_include_counts() {
    assert_eq!(ItemTab::Lost.tab_label(2), "Lost Items (2)");
    assert_eq!(ItemTab::Found.tab_label(1), "Found Items (1)");
}

#[test]
fn tab_labels_show_zero_while_lists_are_empty() {
    assert_eq!(ItemTab::Lost.tab_label(0), "Lost Items (0)");
    assert_eq!(ItemTab::Found.tab_label(0), "Found Items (0)");
}

#[test]
fn empty_messages_name_the_active_tab() {
    assert_eq!(ItemTab::Lost.empty_message(), "No lost items reported yet.");
    assert_eq!(ItemTab::Found.empty_message(), "No found items reported yet.");
}

// =============================================================
// ItemSummary
// =============================================================

#[test]
fn summary_from_lost_item_uses_lost_fields() {
    let summary = ItemSummary::from(&lost_item());
    assert_eq!(summary.location, "Lecture Hall B");
    assert_eq!(summary.date, "2025-03-10");
    assert_eq!(summary.image.as_deref(), Some("/media/lost_products/bottle.jpg"));
}

#[test]
fn summary_from_found_item_uses_found_fields() {
    let summary = ItemSummary::from(&found_item());
    assert_eq!(summary.location, "Cafeteria");
    assert_eq!(summary.date, "2025-03-11");
    assert!(summary.image.is_none());
}
