//! Active-section resolution
//!
//! # Architecture
//!
//! The sidebar and breadcrumb both need to know which navigation entry is
//! "current" for the active route. Rather than each widget testing entries on
//! its own, the route is resolved **once** into a [`ResolvedMatch`] that
//! borrows the winning section and, optionally, the winning child.
//!
//! # Algorithm
//!
//! One accumulator is shared by three scans. A matching candidate is kept when
//! nothing has matched yet, or when its [`match_length`] is **strictly
//! greater** than the best so far:
//!
//! 1. every section that has a path;
//! 2. every child of every section that has a path;
//! 3. every resource entry that has a path.
//!
//! Ties keep the first candidate seen. A zero-segment path such as `"/"` still
//! becomes current when nothing more specific matches.
//!
//! ```text
//! sections:  /dashboard                        (1)
//!            /dashboard/grants                 (2)
//!              └ /dashboard/grants/sbrts/home/2024   (5)
//!
//! current:   /dashboard/grants/sbrts/home/2030
//! result:    section=grants child=sbrts match_length=5
//! ```

use crate::entry::{NavigationChildEntry, NavigationEntry};
use crate::matching::match_length;
use crate::trace_log;

// ============================================================================
// ResolvedMatch
// ============================================================================

/// Outcome of resolving a path against the navigation tree.
///
/// `section` is the top-level entry (or resource entry) that owns the match;
/// `child` is set when a second-level entry won. An unmatched path yields the
/// [`Default`] value: no section, no child, length 0.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ResolvedMatch<'a> {
    /// Matched top-level entry
    pub section: Option<&'a NavigationEntry>,
    /// Matched child within `section`
    pub child: Option<&'a NavigationChildEntry>,
    /// Segment count of the matched entry's own path
    pub match_length: usize,
}

impl<'a> ResolvedMatch<'a> {
    /// The "no match" result.
    pub fn none() -> Self {
        Self::default()
    }

    /// Check whether anything matched.
    pub fn is_match(&self) -> bool {
        self.section.is_some()
    }

    /// Check whether the section with the given id is active, either directly
    /// or through one of its children.
    pub fn is_section_active(&self, id: &str) -> bool {
        self.section.is_some_and(|section| section.id == id)
    }

    /// Check whether the child with the given id is the current entry.
    pub fn is_child_active(&self, id: &str) -> bool {
        self.child.is_some_and(|child| child.id == id)
    }

    /// Path of the most specific matched entry.
    pub fn active_path(&self) -> Option<&'a str> {
        match (self.section, self.child) {
            (_, Some(child)) => child.path_str(),
            (Some(section), None) => section.path_str(),
            (None, None) => None,
        }
    }

    /// Title of the most specific matched entry.
    pub fn active_title(&self) -> Option<&'a str> {
        match (self.section, self.child) {
            (_, Some(child)) => Some(child.title.as_str()),
            (Some(section), None) => Some(section.title.as_str()),
            (None, None) => None,
        }
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve `current_path` against the sections of a navigation tree.
///
/// Equivalent to [`resolve_with_resources`] with no resource entries.
///
/// # Examples
///
/// ```
/// use sams_navigator::{resolve, NavigationChildEntry, NavigationEntry};
///
/// let sections = vec![
///     NavigationEntry::new("dashboard", "Dashboard").path("/dashboard"),
///     NavigationEntry::new("grants", "Grants")
///         .path("/dashboard/grants")
///         .child(
///             NavigationChildEntry::new("sbrts", "Capitation Grants")
///                 .path("/dashboard/grants/sbrts/home/2024"),
///         ),
/// ];
///
/// let resolved = resolve("/dashboard/grants/sbrts/home/2024", &sections);
/// assert_eq!(resolved.section.map(|s| s.id.as_str()), Some("grants"));
/// assert_eq!(resolved.child.map(|c| c.id.as_str()), Some("sbrts"));
/// assert_eq!(resolved.match_length, 5);
///
/// assert!(!resolve("/unknown/page", &sections).is_match());
/// ```
pub fn resolve<'a>(current_path: &str, sections: &'a [NavigationEntry]) -> ResolvedMatch<'a> {
    resolve_with_resources(current_path, sections, &[])
}

/// Resolve `current_path` against sections, their children, and a flat list
/// of resource entries.
///
/// Resource entries compete in the same accumulator as bare sections; their
/// children, if any, are not considered.
pub fn resolve_with_resources<'a>(
    current_path: &str,
    sections: &'a [NavigationEntry],
    resources: &'a [NavigationEntry],
) -> ResolvedMatch<'a> {
    if current_path.is_empty() {
        trace_log!("Empty path, no navigation entry is current");
        return ResolvedMatch::none();
    }

    let mut best = ResolvedMatch::none();

    for section in sections {
        consider(&mut best, current_path, section, None, section.path_str());
    }

    for section in sections {
        for child in section.children() {
            consider(&mut best, current_path, section, Some(child), child.path_str());
        }
    }

    for resource in resources {
        consider(&mut best, current_path, resource, None, resource.path_str());
    }

    trace_log!(
        "Resolved '{}' → section={:?} child={:?} length={}",
        current_path,
        best.section.map(|s| s.id.as_str()),
        best.child.map(|c| c.id.as_str()),
        best.match_length
    );

    best
}

/// Replace `best` if `candidate_path` matches and either nothing matched yet
/// or it is strictly more specific.
fn consider<'a>(
    best: &mut ResolvedMatch<'a>,
    current_path: &str,
    section: &'a NavigationEntry,
    child: Option<&'a NavigationChildEntry>,
    candidate_path: Option<&str>,
) {
    let Some(length) = candidate_path.and_then(|path| match_length(path, current_path)) else {
        return;
    };

    if best.section.is_none() || length > best.match_length {
        *best = ResolvedMatch {
            section: Some(section),
            child,
            match_length: length,
        };
    }
}
