//! Lost-item report page.

use leptos::prelude::*;

use crate::components::report_form::ReportForm;
use crate::state::report::ReportKind;

#[component]
pub fn ReportLostPage() -> impl IntoView {
    view! { <ReportForm kind=ReportKind::Lost/> }
}
