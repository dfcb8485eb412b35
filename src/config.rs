//! Navigation configuration.
//!
//! [`NavigationConfig`] is the explicit value the resolver runs against: the
//! sidebar sections (with their children) plus a flat list of resource
//! entries such as documentation links. It is built in code with the builder
//! methods, or loaded from JSON/TOML with the `serde` feature.
//!
//! Loaded configs are always [validated](NavigationConfig::validate) before
//! they are returned.
//!
//! # Example
//!
//! ```
//! use sams_navigator::{NavigationConfig, NavigationEntry};
//!
//! let config = NavigationConfig::new()
//!     .section(NavigationEntry::new("dashboard", "Dashboard").path("/dashboard"))
//!     .resource(
//!         NavigationEntry::new("docs", "Documentation")
//!             .path("https://docs.example.org")
//!             .external(),
//!     );
//!
//! assert!(config.validate().is_ok());
//! assert!(config.resolve("/dashboard/schools").is_section_active("dashboard"));
//! ```

use crate::entry::{NavigationChildEntry, NavigationEntry};
use crate::error::ConfigError;
use crate::resolve::{resolve_with_resources, ResolvedMatch};
use std::collections::HashSet;

#[cfg(feature = "serde")]
use crate::{debug_log, warn_log};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use std::path::Path;

/// Sections and resource entries of a navigation tree.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NavigationConfig {
    /// Sidebar sections, in display order
    #[cfg_attr(feature = "serde", serde(default))]
    pub sections: Vec<NavigationEntry>,
    /// Resource links shown below the sections
    #[cfg_attr(feature = "serde", serde(default))]
    pub resources: Vec<NavigationEntry>,
}

impl NavigationConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a section.
    pub fn section(mut self, entry: NavigationEntry) -> Self {
        self.sections.push(entry);
        self
    }

    /// Append a resource entry.
    pub fn resource(mut self, entry: NavigationEntry) -> Self {
        self.resources.push(entry);
        self
    }

    /// Resolve `current_path` against this configuration.
    pub fn resolve(&self, current_path: &str) -> ResolvedMatch<'_> {
        resolve_with_resources(current_path, &self.sections, &self.resources)
    }

    /// Total number of entries: sections, their children, and resources.
    pub fn entry_count(&self) -> usize {
        self.sections
            .iter()
            .map(|section| 1 + section.children().len())
            .sum::<usize>()
            + self.resources.len()
    }

    /// Find a section or resource entry by id.
    pub fn find_entry(&self, id: &str) -> Option<&NavigationEntry> {
        self.sections
            .iter()
            .chain(&self.resources)
            .find(|entry| entry.id == id)
    }

    /// Find a child entry by id, together with its section.
    pub fn find_child(&self, id: &str) -> Option<(&NavigationEntry, &NavigationChildEntry)> {
        self.sections
            .iter()
            .find_map(|section| section.find_child(id).map(|child| (section, child)))
    }

    /// Check the tree's invariants.
    ///
    /// Rejects empty ids and titles, ids repeated anywhere in the tree, and
    /// non-external paths that do not start with `/`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();

        for entry in self.sections.iter().chain(&self.resources) {
            check_entry(&mut seen, &entry.id, &entry.title, entry.path_str(), entry.external)?;
            for child in entry.children() {
                check_entry(&mut seen, &child.id, &child.title, child.path_str(), false)?;
            }
        }

        Ok(())
    }
}

fn check_entry<'a>(
    seen: &mut HashSet<&'a str>,
    id: &'a str,
    title: &str,
    path: Option<&str>,
    external: bool,
) -> Result<(), ConfigError> {
    if id.is_empty() {
        return Err(ConfigError::EmptyId {
            title: title.to_string(),
        });
    }
    if title.is_empty() {
        return Err(ConfigError::EmptyTitle { id: id.to_string() });
    }
    if !seen.insert(id) {
        return Err(ConfigError::DuplicateId { id: id.to_string() });
    }
    if let Some(path) = path {
        if !external && !path.starts_with('/') {
            return Err(ConfigError::RelativePath {
                id: id.to_string(),
                path: path.to_string(),
            });
        }
    }
    Ok(())
}

// ============================================================================
// Loading
// ============================================================================

#[cfg(feature = "serde")]
impl NavigationConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.finish_load("JSON")
    }

    /// Parse and validate a TOML configuration.
    ///
    /// ```
    /// use sams_navigator::NavigationConfig;
    ///
    /// let config = NavigationConfig::from_toml_str(r#"
    ///     [[sections]]
    ///     id = "schools"
    ///     title = "Schools"
    ///     path = "/dashboard/schools"
    /// "#).unwrap();
    ///
    /// assert_eq!(config.sections[0].id, "schools");
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.finish_load("TOML")
    }

    /// Read a `.json` or `.toml` configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&source),
            Some("toml") => Self::from_toml_str(&source),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    fn finish_load(self, format: &str) -> Result<Self, ConfigError> {
        self.validate()?;
        if self.sections.is_empty() && self.resources.is_empty() {
            warn_log!("{} navigation config has no entries; no route will resolve", format);
        }
        debug_log!(
            "Loaded {} navigation config: {} sections, {} resources",
            format,
            self.sections.len(),
            self.resources.len()
        );
        Ok(self)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NavigationConfig {
        NavigationConfig::new()
            .section(NavigationEntry::new("dashboard", "Dashboard").path("/dashboard"))
            .section(
                NavigationEntry::new("grants", "Grants")
                    .path("/dashboard/grants")
                    .child(
                        NavigationChildEntry::new("sbrts", "Capitation Grants")
                            .path("/dashboard/grants/sbrts/home/2024"),
                    ),
            )
            .resource(NavigationEntry::new("help", "Help").path("/help"))
    }

    #[test]
    fn test_entry_count_and_lookup() {
        let config = sample();
        assert_eq!(config.entry_count(), 4);
        assert_eq!(config.find_entry("help").map(|e| e.title.as_str()), Some("Help"));
        let (section, child) = config.find_child("sbrts").unwrap();
        assert_eq!(section.id, "grants");
        assert_eq!(child.title, "Capitation Grants");
        assert!(config.find_child("dashboard").is_none());
    }

    #[test]
    fn test_validate_accepts_sample() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_validate_duplicate_across_levels() {
        let config = sample().resource(NavigationEntry::new("sbrts", "Dup").path("/x"));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateId { id }) if id == "sbrts"
        ));
    }

    #[test]
    fn test_validate_relative_path() {
        let config = NavigationConfig::new()
            .section(NavigationEntry::new("schools", "Schools").path("dashboard/schools"));
        assert!(matches!(config.validate(), Err(ConfigError::RelativePath { .. })));

        let external = NavigationConfig::new().resource(
            NavigationEntry::new("docs", "Docs")
                .path("https://docs.example.org")
                .external(),
        );
        assert!(external.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_fields() {
        let empty_id = NavigationConfig::new().section(NavigationEntry::new("", "Nameless"));
        assert!(matches!(empty_id.validate(), Err(ConfigError::EmptyId { .. })));

        let empty_title = NavigationConfig::new().section(NavigationEntry::new("x", ""));
        assert!(matches!(empty_title.validate(), Err(ConfigError::EmptyTitle { .. })));
    }

    #[test]
    fn test_resolve_uses_resources() {
        let config = sample();
        assert!(config.resolve("/help/contact").is_section_active("help"));
        assert!(config.resolve("/dashboard/grants/sbrts/home/2027").is_child_active("sbrts"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_roundtrip_preserves_config() {
        let config = sample();
        let json = config.to_json_string().unwrap();
        assert_eq!(NavigationConfig::from_json_str(&json).unwrap(), config);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_rejects_invalid_tree() {
        let json = r#"{ "sections": [ { "id": "a", "title": "A" }, { "id": "a", "title": "B" } ] }"#;
        assert!(matches!(
            NavigationConfig::from_json_str(json),
            Err(ConfigError::DuplicateId { .. })
        ));
        assert!(matches!(
            NavigationConfig::from_json_str("{ not json"),
            Err(ConfigError::Json(_))
        ));
    }
}
