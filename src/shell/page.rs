//! Page identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reserved link target that logs out instead of showing a panel
pub const LOGOUT: &str = "logout";

/// Name of one content panel, equal to the panel's element id
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(String);

impl PageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PageId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl PartialEq<str> for PageId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// The closed set of pages, in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSet {
    pages: Vec<PageId>,
}

impl PageSet {
    /// Build from identifiers, dropping duplicates and empty ids
    pub fn new<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        let mut pages: Vec<PageId> = Vec::new();
        for id in ids {
            if !id.is_empty() && !pages.iter().any(|page| page == id) {
                pages.push(PageId::new(id));
            }
        }
        Self { pages }
    }

    pub fn get(&self, id: &str) -> Option<&PageId> {
        self.pages.iter().find(|page| *page == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PageId> {
        self.pages.iter()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_set_dedups_and_keeps_order() {
        let pages = PageSet::new(["dashboard", "sessions", "", "dashboard", "login"]);
        let ids: Vec<&str> = pages.iter().map(PageId::as_str).collect();
        assert_eq!(ids, vec!["dashboard", "sessions", "login"]);
        assert!(pages.contains("sessions"));
        assert!(!pages.contains("Sessions"));
        assert!(!pages.contains(LOGOUT));
    }
}
