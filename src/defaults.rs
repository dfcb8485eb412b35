//! The SAMS dashboard navigation tree.
//!
//! The grants pages embed the selected year as their last path segment, so
//! the tree is built for a given year. Resolution still treats every year of
//! the same grant as current (see [`crate::matching::is_grants_year_match`]).

use crate::config::NavigationConfig;
use crate::entry::{Badge, NavigationChildEntry, NavigationEntry};

/// Documentation site linked from the resources list.
pub const DOCS_URL: &str = "https://docs.sams.education";

/// Path of the cash transfers home page for `year`.
pub fn cash_transfers_path(year: u16) -> String {
    format!("/dashboard/grants/cash-transfers/home/{year}")
}

/// Path of the capitation grants (SBRTS) home page for `year`.
pub fn capitation_grants_path(year: u16) -> String {
    format!("/dashboard/grants/sbrts/home/{year}")
}

/// Build the SAMS navigation for the given grants year.
///
/// ```
/// use sams_navigator::defaults::sams_navigation;
///
/// let config = sams_navigation(2024);
/// let resolved = config.resolve("/dashboard/grants/cash-transfers/home/2026");
/// assert!(resolved.is_child_active("cash-transfers"));
/// ```
pub fn sams_navigation(year: u16) -> NavigationConfig {
    NavigationConfig::new()
        .section(
            NavigationEntry::new("overview", "Overview")
                .path("/dashboard")
                .icon("layout-dashboard"),
        )
        .section(
            NavigationEntry::new("schools", "Schools")
                .path("/dashboard/schools")
                .icon("school")
                .child(
                    NavigationChildEntry::new("school-list", "All Schools")
                        .path("/dashboard/schools/list"),
                )
                .child(
                    NavigationChildEntry::new("attendance", "Attendance")
                        .path("/dashboard/schools/attendance"),
                ),
        )
        .section(
            NavigationEntry::new("learners", "Learners")
                .path("/dashboard/learners")
                .icon("users")
                .child(
                    NavigationChildEntry::new("enrollment", "Enrollment")
                        .path("/dashboard/learners/enrollment"),
                )
                .child(
                    NavigationChildEntry::new("disabilities", "Disabilities")
                        .path("/dashboard/learners/disabilities"),
                ),
        )
        .section(
            NavigationEntry::new("grants", "Grants")
                .path("/dashboard/grants")
                .icon("banknote")
                .child(
                    NavigationChildEntry::new("cash-transfers", "Cash Transfers")
                        .path(cash_transfers_path(year)),
                )
                .child(
                    NavigationChildEntry::new("capitation-grants", "Capitation Grants")
                        .path(capitation_grants_path(year))
                        .badge(Badge::styled("SBRTS", "secondary")),
                ),
        )
        .section(
            NavigationEntry::new("budgets", "Budgets")
                .path("/dashboard/budgets")
                .icon("wallet"),
        )
        .section(
            NavigationEntry::new("approvals", "Approvals")
                .path("/dashboard/approvals")
                .icon("check-circle")
                .badge(Badge::plain("Pending")),
        )
        .section(
            NavigationEntry::new("accountability", "Accountability")
                .path("/dashboard/accountability")
                .icon("clipboard-check"),
        )
        .section(
            NavigationEntry::new("users", "User Management")
                .path("/dashboard/users")
                .icon("user-cog"),
        )
        .resource(
            NavigationEntry::new("documentation", "Documentation")
                .path(DOCS_URL)
                .external()
                .icon("book-open"),
        )
        .resource(
            NavigationEntry::new("help", "Help & Support")
                .path("/dashboard/help")
                .icon("life-buoy"),
        )
}
