//! Tab item data structure
//!
//! A ready-to-use `TabEntry`: a header plus an optional icon. Applications
//! with their own item types implement `TabEntry` directly instead.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tabview_host::{ElementId, TabEntry};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabItem {
    /// Unique identifier
    pub id: String,
    /// Header text shown in the tab strip
    pub header: String,
    /// Icon resource, if any
    pub icon: Option<String>,
    /// Container supplied by the application instead of realized by the list
    #[serde(skip)]
    pub container: Option<ElementId>,
}

impl TabItem {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            header: header.into(),
            icon: None,
            container: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Present this item through an application-owned container
    pub fn with_container(mut self, container: ElementId) -> Self {
        self.container = Some(container);
        self
    }

    pub fn set_header(&mut self, header: impl Into<String>) {
        self.header = header.into();
    }

    /// Header with a fallback for untitled tabs
    pub fn display_header(&self) -> &str {
        if self.header.trim().is_empty() {
            "Untitled"
        } else {
            &self.header
        }
    }
}

impl TabEntry for TabItem {
    fn as_container(&self) -> Option<ElementId> {
        self.container
    }
}
