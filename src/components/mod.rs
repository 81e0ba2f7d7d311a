//! Reusable UI components shared by the page views.

pub mod item_card;
pub mod nav_bar;
pub mod report_form;
