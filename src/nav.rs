use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::MalformedEntryError;

/// One link card offered on the homepage.
///
/// `title` doubles as the card's identity key, so it should be unique within a list.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct NavigationEntry {
    pub title: Cow<'static, str>,
    pub description: Cow<'static, str>,
    pub href: Cow<'static, str>,
}

impl NavigationEntry {
    pub const fn from_static(
        title: &'static str,
        description: &'static str,
        href: &'static str,
    ) -> Self {
        Self {
            title: Cow::Borrowed(title),
            description: Cow::Borrowed(description),
            href: Cow::Borrowed(href),
        }
    }

    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        href: impl Into<String>,
    ) -> Self {
        Self {
            title: Cow::Owned(title.into()),
            description: Cow::Owned(description.into()),
            href: Cow::Owned(href.into()),
        }
    }

    /// Check the entry sitting at `index` of its list.
    pub fn validate(&self, index: usize) -> Result<(), MalformedEntryError> {
        if self.title.trim().is_empty() {
            return Err(MalformedEntryError::new(index, "title", "must not be empty"));
        }
        if self.description.trim().is_empty() {
            return Err(MalformedEntryError::new(
                index,
                "description",
                "must not be empty",
            ));
        }
        if !self.href.starts_with('/') {
            return Err(MalformedEntryError::new(
                index,
                "href",
                format!("`{}` is not relative to the site root", self.href),
            ));
        }

        Ok(())
    }
}

/// The sections linked from the homepage, in display order.
pub const NAV_SECTIONS: &[NavigationEntry] = &[
    NavigationEntry::from_static(
        "Backend Overview",
        "Architecture, deployment model, and core patterns for the Eggy API.",
        "/docs/backend",
    ),
    NavigationEntry::from_static(
        "Tutorial",
        "Step-by-step guide to build the NestJS + MongoDB task service used in production.",
        "/docs/tutorial",
    ),
];

/// A navigation entry as written in a config file, before any field is required.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Default)]
pub struct RawEntry {
    pub title: Option<String>,
    pub description: Option<String>,
    pub href: Option<String>,
}

impl RawEntry {
    pub fn into_entry(self, index: usize) -> Result<NavigationEntry, MalformedEntryError> {
        let require = |value: Option<String>, field: &'static str| {
            value.ok_or_else(|| MalformedEntryError::new(index, field, "missing"))
        };

        let entry = NavigationEntry::new(
            require(self.title, "title")?,
            require(self.description, "description")?,
            require(self.href, "href")?,
        );
        entry.validate(index)?;

        Ok(entry)
    }
}

/// Validate a whole list, stopping at the first bad entry.
pub fn validate_entries(entries: &[NavigationEntry]) -> Result<(), MalformedEntryError> {
    entries
        .iter()
        .enumerate()
        .try_for_each(|(index, entry)| entry.validate(index))
}

/// Turn raw config records into entries, keeping their order.
pub fn entries_from_raw(raw: Vec<RawEntry>) -> Result<Vec<NavigationEntry>, MalformedEntryError> {
    raw.into_iter()
        .enumerate()
        .map(|(index, entry)| entry.into_entry(index))
        .collect()
}
