#[cfg(test)]
#[path = "browse_test.rs"]
mod browse_test;

use crate::net::types::{FoundItem, LostItem};

/// Which list the browse page is currently showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ItemTab {
    #[default]
    Lost,
    Found,
}

impl ItemTab {
    /// Lowercase key used in UI strings.
    pub fn key(self) -> &'static str {
        match self {
            Self::Lost => "lost",
            Self::Found => "found",
        }
    }

    /// Tab button label including the stored list's count.
    pub fn tab_label(self, count: usize) -> String {
        match self {
            Self::Lost => format!("Lost Items ({count})"),
            Self::Found => format!("Found Items ({count})"),
        }
    }

    /// Message shown when the active list has no reports.
    pub fn empty_message(self) -> String {
        format!("No {} items reported yet.", self.key())
    }
}

/// Display fields shared by both item kinds, used by the card grid.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemSummary {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub location: String,
    pub date: String,
    pub contact_info: String,
    pub image: Option<String>,
}

impl From<&LostItem> for ItemSummary {
    fn from(item: &LostItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            description: item.description.clone(),
            location: item.location_lost.clone(),
            date: item.date_lost.clone(),
            contact_info: item.contact_info.clone(),
            image: item.image.clone(),
        }
    }
}

impl From<&FoundItem> for ItemSummary {
    fn from(item: &FoundItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            description: item.description.clone(),
            location: item.location_found.clone(),
            date: item.date_found.clone(),
            contact_info: item.contact_info.clone(),
            image: item.image.clone(),
        }
    }
}
