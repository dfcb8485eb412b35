//! Navigation tree entries.
//!
//! The SAMS sidebar is a two-level tree: top-level [`NavigationEntry`]
//! sections, each with an optional list of [`NavigationChildEntry`] items.
//! Children never nest further.
//!
//! Entries are plain data. They are built once per resolution context, either
//! in code with the builder methods below or by deserializing a
//! [`NavigationConfig`](crate::NavigationConfig), and are never mutated by the
//! resolver.
//!
//! # Example
//!
//! ```
//! use sams_navigator::{Badge, NavigationChildEntry, NavigationEntry};
//!
//! let grants = NavigationEntry::new("grants", "Grants")
//!     .path("/dashboard/grants")
//!     .badge(Badge::styled("New", "success"))
//!     .child(
//!         NavigationChildEntry::new("cash-transfers", "Cash Transfers")
//!             .path("/dashboard/grants/cash-transfers/home/2024"),
//!     );
//!
//! assert_eq!(grants.children().len(), 1);
//! assert_eq!(grants.badge.as_ref().map(Badge::text), Some("New"));
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Badge
// ============================================================================

/// Small label rendered next to an entry's title.
///
/// Serialized as a bare string for [`Badge::Plain`] and as
/// `{ "text": ..., "variant": ... }` for [`Badge::Styled`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Badge {
    /// Text only, default styling.
    Plain(String),
    /// Text with a named style variant (e.g. `"success"`, `"destructive"`).
    Styled { text: String, variant: String },
}

impl Badge {
    /// Create a plain badge.
    pub fn plain(text: impl Into<String>) -> Self {
        Badge::Plain(text.into())
    }

    /// Create a badge with a style variant.
    pub fn styled(text: impl Into<String>, variant: impl Into<String>) -> Self {
        Badge::Styled {
            text: text.into(),
            variant: variant.into(),
        }
    }

    /// The badge text regardless of styling.
    pub fn text(&self) -> &str {
        match self {
            Badge::Plain(text) | Badge::Styled { text, .. } => text,
        }
    }

    /// The style variant, if any.
    pub fn variant(&self) -> Option<&str> {
        match self {
            Badge::Plain(_) => None,
            Badge::Styled { variant, .. } => Some(variant),
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

// ============================================================================
// IconKey
// ============================================================================

/// Opaque icon identifier, resolved to an actual icon by the UI layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct IconKey(String);

impl IconKey {
    /// Wrap an icon name.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The icon name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for IconKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl fmt::Display for IconKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Entries
// ============================================================================

/// A top-level sidebar section or resource link.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NavigationEntry {
    /// Unique identifier
    pub id: String,
    /// Display label
    pub title: String,
    /// Route string; absent for entries that only group children
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub path: Option<String>,
    /// Path points outside the application (opens in a new context)
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "is_false"))]
    pub external: bool,
    /// Second-level entries, in display order
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub children: Option<Vec<NavigationChildEntry>>,
    /// Label shown next to the title
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub badge: Option<Badge>,
    /// Icon lookup key for the UI layer
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub icon: Option<IconKey>,
}

impl NavigationEntry {
    /// Create an entry with no path and no children.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            path: None,
            external: false,
            children: None,
            badge: None,
            icon: None,
        }
    }

    /// Set the route path.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Mark the entry as pointing outside the application.
    pub fn external(mut self) -> Self {
        self.external = true;
        self
    }

    /// Append a child entry.
    pub fn child(mut self, child: NavigationChildEntry) -> Self {
        self.children.get_or_insert_with(Vec::new).push(child);
        self
    }

    /// Replace the children with the given list.
    pub fn with_children(mut self, children: Vec<NavigationChildEntry>) -> Self {
        self.children = Some(children);
        self
    }

    /// Set the badge.
    pub fn badge(mut self, badge: Badge) -> Self {
        self.badge = Some(badge);
        self
    }

    /// Set the icon key.
    pub fn icon(mut self, icon: impl Into<IconKey>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Children as a slice; empty when the entry has none.
    pub fn children(&self) -> &[NavigationChildEntry] {
        self.children.as_deref().unwrap_or_default()
    }

    /// Route path as `&str`, if present.
    pub fn path_str(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Look up a direct child by id.
    pub fn find_child(&self, id: &str) -> Option<&NavigationChildEntry> {
        self.children().iter().find(|child| child.id == id)
    }
}

/// A second-level sidebar entry. Cannot have children of its own.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NavigationChildEntry {
    /// Unique identifier, across the whole tree
    pub id: String,
    /// Display label
    pub title: String,
    /// Route string; absent for placeholder entries
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub path: Option<String>,
    /// Label shown next to the title
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub badge: Option<Badge>,
    /// Icon lookup key for the UI layer
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub icon: Option<IconKey>,
}

impl NavigationChildEntry {
    /// Create a child with no path.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            path: None,
            badge: None,
            icon: None,
        }
    }

    /// Set the route path.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set the badge.
    pub fn badge(mut self, badge: Badge) -> Self {
        self.badge = Some(badge);
        self
    }

    /// Set the icon key.
    pub fn icon(mut self, icon: impl Into<IconKey>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Route path as `&str`, if present.
    pub fn path_str(&self) -> Option<&str> {
        self.path.as_deref()
    }
}

#[cfg(feature = "serde")]
#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(value: &bool) -> bool {
    !*value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_appends_children_in_order() {
        let entry = NavigationEntry::new("grants", "Grants")
            .path("/dashboard/grants")
            .child(NavigationChildEntry::new("a", "A").path("/dashboard/grants/a"))
            .child(NavigationChildEntry::new("b", "B"));

        let ids: Vec<&str> = entry.children().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(entry.find_child("a").and_then(|c| c.path_str()), Some("/dashboard/grants/a"));
        assert!(entry.find_child("missing").is_none());
    }

    #[test]
    fn test_entry_without_children() {
        let entry = NavigationEntry::new("home", "Home");
        assert!(entry.children.is_none());
        assert!(entry.children().is_empty());
        assert!(entry.path_str().is_none());
        assert!(!entry.external);
    }

    #[test]
    fn test_badge_accessors() {
        let plain = Badge::plain("3");
        assert_eq!(plain.text(), "3");
        assert_eq!(plain.variant(), None);

        let styled = Badge::styled("New", "success");
        assert_eq!(styled.text(), "New");
        assert_eq!(styled.variant(), Some("success"));
        assert_eq!(styled.to_string(), "New");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_badge_deserializes_string_or_object() {
        let plain: Badge = serde_json::from_str("\"Beta\"").unwrap();
        assert_eq!(plain, Badge::plain("Beta"));

        let styled: Badge =
            serde_json::from_str(r#"{ "text": "New", "variant": "success" }"#).unwrap();
        assert_eq!(styled, Badge::styled("New", "success"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_entry_deserialize_defaults() {
        let entry: NavigationEntry =
            serde_json::from_str(r#"{ "id": "docs", "title": "Docs" }"#).unwrap();
        assert_eq!(entry, NavigationEntry::new("docs", "Docs"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_entry_serialize_skips_empty_fields() {
        let json = serde_json::to_string(&NavigationEntry::new("docs", "Docs").icon("book")).unwrap();
        assert_eq!(json, r#"{"id":"docs","title":"Docs","icon":"book"}"#);
    }
}
