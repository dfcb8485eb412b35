//! Shared fixtures for integration tests.

#![allow(dead_code)]

use sams_navigator::{NavigationChildEntry, NavigationConfig, NavigationEntry};

/// Route the crate's log output to the test harness.
///
/// Safe to call from every test; only the first call installs the logger.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Section with a path and no children.
pub fn section(id: &str, path: &str) -> NavigationEntry {
    NavigationEntry::new(id, id).path(path)
}

/// Child with a path.
pub fn child(id: &str, path: &str) -> NavigationChildEntry {
    NavigationChildEntry::new(id, id).path(path)
}

/// A trimmed-down dashboard tree with both grants year routes.
pub fn dashboard_tree() -> Vec<NavigationEntry> {
    vec![
        section("dashboard", "/dashboard"),
        section("schools", "/dashboard/schools"),
        section("grants", "/dashboard/grants")
            .child(child("cash-transfers", "/dashboard/grants/cash-transfers/home/2024"))
            .child(child("sbrts", "/dashboard/grants/sbrts/home/2024")),
    ]
}

pub fn dashboard_config() -> NavigationConfig {
    let mut config = NavigationConfig::new().resource(
        NavigationEntry::new("docs", "Documentation")
            .path("https://docs.example.org")
            .external(),
    );
    config.sections = dashboard_tree();
    config
}

/// Id of the resolved section, if any.
pub fn section_id<'a>(resolved: &sams_navigator::ResolvedMatch<'a>) -> Option<&'a str> {
    resolved.section.map(|s| s.id.as_str())
}

/// Id of the resolved child, if any.
pub fn child_id<'a>(resolved: &sams_navigator::ResolvedMatch<'a>) -> Option<&'a str> {
    resolved.child.map(|c| c.id.as_str())
}
