//! Breadcrumb trail built from a resolved match.
//!
//! The trail is at most two crumbs long: the section, then the child when one
//! matched. The last crumb is the current one. An unmatched route produces an
//! empty trail and the UI renders nothing.

use crate::entry::{NavigationChildEntry, NavigationEntry};
use crate::resolve::ResolvedMatch;
use std::fmt;

/// One element of a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub path: Option<&'a str>,
    pub external: bool,
    /// Last element of the trail
    pub current: bool,
}

impl<'a> Crumb<'a> {
    fn from_section(section: &'a NavigationEntry, current: bool) -> Self {
        Self {
            id: &section.id,
            title: &section.title,
            path: section.path_str(),
            external: section.external,
            current,
        }
    }

    fn from_child(child: &'a NavigationChildEntry) -> Self {
        Self {
            id: &child.id,
            title: &child.title,
            path: child.path_str(),
            external: false,
            current: true,
        }
    }

    /// Whether the crumb should render as a link.
    pub fn is_link(&self) -> bool {
        !self.current && self.path.is_some()
    }
}

/// Ordered breadcrumb trail, root first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Breadcrumbs<'a> {
    crumbs: Vec<Crumb<'a>>,
}

impl<'a> Breadcrumbs<'a> {
    /// Build the trail for a resolved match.
    ///
    /// ```
    /// use sams_navigator::{resolve, Breadcrumbs, NavigationChildEntry, NavigationEntry};
    ///
    /// let sections = vec![NavigationEntry::new("schools", "Schools")
    ///     .path("/dashboard/schools")
    ///     .child(NavigationChildEntry::new("enrollment", "Enrollment")
    ///         .path("/dashboard/schools/enrollment"))];
    ///
    /// let resolved = resolve("/dashboard/schools/enrollment", &sections);
    /// let trail = Breadcrumbs::from_match(&resolved);
    /// assert_eq!(trail.render(" / "), "Schools / Enrollment");
    /// ```
    pub fn from_match(resolved: &ResolvedMatch<'a>) -> Self {
        let Some(section) = resolved.section else {
            return Self::default();
        };

        let crumbs = match resolved.child {
            Some(child) => vec![Crumb::from_section(section, false), Crumb::from_child(child)],
            None => vec![Crumb::from_section(section, true)],
        };

        Self { crumbs }
    }

    pub fn crumbs(&self) -> &[Crumb<'a>] {
        &self.crumbs
    }

    pub fn current(&self) -> Option<&Crumb<'a>> {
        self.crumbs.last()
    }

    pub fn len(&self) -> usize {
        self.crumbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crumbs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Crumb<'a>> {
        self.crumbs.iter()
    }

    /// Join crumb titles with `separator`.
    pub fn render(&self, separator: &str) -> String {
        self.crumbs
            .iter()
            .map(|crumb| crumb.title)
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl fmt::Display for Breadcrumbs<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(" > "))
    }
}

impl<'a> IntoIterator for &'a Breadcrumbs<'a> {
    type Item = &'a Crumb<'a>;
    type IntoIter = std::slice::Iter<'a, Crumb<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.crumbs.iter()
    }
}
