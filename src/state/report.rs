#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

/// Which kind of item a report form submits.
///
/// The two forms share one component; this enum carries every string
/// that differs between them, including the backend field names.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportKind {
    Lost,
    Found,
}

impl ReportKind {
    /// Endpoint the form posts to, relative to the base URL.
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Lost => "/api/ai/lost/",
            Self::Found => "/api/ai/found/",
        }
    }

    /// Multipart field name for the report date.
    pub fn date_field(self) -> &'static str {
        match self {
            Self::Lost => "date_lost",
            Self::Found => "date_found",
        }
    }

    /// Multipart field name for the report location.
    pub fn location_field(self) -> &'static str {
        match self {
            Self::Lost => "location_lost",
            Self::Found => "location_found",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Lost => "Report Lost Item",
            Self::Found => "Report Found Item",
        }
    }

    pub fn date_label(self) -> &'static str {
        match self {
            Self::Lost => "Date Lost",
            Self::Found => "Date Found",
        }
    }

    pub fn location_label(self) -> &'static str {
        match self {
            Self::Lost => "Location Lost *",
            Self::Found => "Location Found *",
        }
    }

    /// Confirmation shown before navigating to the browse view.
    pub fn success_message(self) -> &'static str {
        match self {
            Self::Lost => "Lost item reported successfully! We'll notify you if we find a match.",
            Self::Found => "Found item reported successfully! We'll match it with lost items.",
        }
    }
}

/// Transient field values held by a report form.
///
/// Never persisted; filled from input signals and turned into multipart
/// fields on submit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReportDraft {
    pub name: String,
    pub description: String,
    pub date: String,
    pub location: String,
    pub contact_info: String,
}

impl ReportDraft {
    /// Whether every required field is filled. The date is optional since
    /// the form pre-fills it and the backend accepts the default.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.description.trim().is_empty()
            && !self.location.trim().is_empty()
            && !self.contact_info.trim().is_empty()
    }

    /// Multipart field name/value pairs for this draft.
    pub fn multipart_fields(&self, kind: ReportKind) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("description", self.description.clone()),
            (kind.date_field(), self.date.clone()),
            (kind.location_field(), self.location.clone()),
            ("contact_info", self.contact_info.clone()),
        ]
    }
}

/// Preview slot update for a file-input change. Cancelling the picker
/// clears the preview along with the attachment; a fresh pick keeps the
/// previous preview until the new read lands.
pub fn preview_transition(preview: &mut Option<String>, picked: bool) {
    if !picked {
        *preview = None;
    }
}

/// Inline failure message for a rejected or failed submission.
pub fn error_message(detail: &str) -> String {
    format!("Error reporting item: {detail}")
}

/// Whether an inline message should render with the error style.
pub fn is_error(message: &str) -> bool {
    message.contains("Error")
}

/// Today's date as `YYYY-MM-DD`, used to pre-fill the date input.
/// Empty off the browser, where the form never submits.
pub fn today() -> String {
    #[cfg(feature = "hydrate")]
    {
        let iso = String::from(js_sys::Date::new_0().to_iso_string());
        iso.chars().take(10).collect()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
