//! Path matching for breadcrumb resolution
//!
//! Decides whether a navigation entry's path counts as "current" for the
//! active route, and how specific that match is.
//!
//! # Rules
//!
//! A candidate path matches the current path when, in order:
//!
//! 1. the two strings are equal;
//! 2. both are year-suffixed grants routes of the same family
//!    (see [`is_grants_year_match`]);
//! 3. the current path starts with the candidate path (plain string prefix).
//!
//! Specificity is the number of non-empty `/`-delimited segments in the
//! candidate's own path ([`segment_count`]).

/// Literal segment that marks the year-suffixed grants route family.
pub const GRANTS_SEGMENT: &str = "grants";

/// Index of [`GRANTS_SEGMENT`] within a grants route's segments.
const GRANTS_INDEX: usize = 1;

/// Minimum segment count for a grants route: parent, `grants`, type, `home`.
const GRANTS_MIN_SEGMENTS: usize = 4;

/// Split a path into segments, filtering empty segments
///
/// # Examples
///
/// ```
/// use sams_navigator::matching::split_path;
///
/// assert_eq!(split_path("/dashboard/schools"), vec!["dashboard", "schools"]);
/// assert_eq!(split_path("/"), Vec::<&str>::new());
/// assert_eq!(split_path(""), Vec::<&str>::new());
/// assert_eq!(split_path("/dashboard/"), vec!["dashboard"]);
/// ```
pub fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Count the non-empty segments of a path.
///
/// ```
/// use sams_navigator::matching::segment_count;
///
/// assert_eq!(segment_count("/dashboard/grants/cash-transfers/home/2024"), 5);
/// assert_eq!(segment_count("/"), 0);
/// ```
pub fn segment_count(path: &str) -> usize {
    path.split('/').filter(|s| !s.is_empty()).count()
}

/// Check whether two paths belong to the same year-suffixed grants route.
///
/// Both paths need at least four segments with `grants` as the second one,
/// and their segments at indices 1, 2 and 3 (`grants`, the grant type,
/// `home`) must be equal. Whatever follows, normally the year, is ignored.
///
/// ```
/// use sams_navigator::matching::is_grants_year_match;
///
/// assert!(is_grants_year_match(
///     "/dashboard/grants/cash-transfers/home/2024",
///     "/dashboard/grants/cash-transfers/home/2030",
/// ));
/// assert!(!is_grants_year_match(
///     "/dashboard/grants/cash-transfers/home/2024",
///     "/dashboard/grants/sbrts/home/2024",
/// ));
/// ```
pub fn is_grants_year_match(candidate_path: &str, current_path: &str) -> bool {
    let candidate = split_path(candidate_path);
    let current = split_path(current_path);

    if candidate.len() < GRANTS_MIN_SEGMENTS || current.len() < GRANTS_MIN_SEGMENTS {
        return false;
    }

    if candidate[GRANTS_INDEX] != GRANTS_SEGMENT || current[GRANTS_INDEX] != GRANTS_SEGMENT {
        return false;
    }

    candidate[1..4] == current[1..4]
}

/// Match predicate used by the resolver.
///
/// ```
/// use sams_navigator::matching::is_path_match;
///
/// assert!(is_path_match("/dashboard", "/dashboard"));
/// assert!(is_path_match("/dashboard", "/dashboard/schools/12"));
/// assert!(is_path_match(
///     "/dashboard/grants/sbrts/home/2024",
///     "/dashboard/grants/sbrts/home/2025",
/// ));
/// assert!(!is_path_match("/dashboard/schools", "/dashboard"));
/// ```
pub fn is_path_match(candidate_path: &str, current_path: &str) -> bool {
    if candidate_path == current_path {
        return true;
    }

    if is_grants_year_match(candidate_path, current_path) {
        return true;
    }

    current_path.starts_with(candidate_path)
}

/// Specificity of a matching candidate, or `None` if it does not match.
pub fn match_length(candidate_path: &str, current_path: &str) -> Option<usize> {
    is_path_match(candidate_path, current_path).then(|| segment_count(candidate_path))
}

/// Extract the trailing year of a grants route, if the path is one.
///
/// ```
/// use sams_navigator::matching::grants_year;
///
/// assert_eq!(grants_year("/dashboard/grants/sbrts/home/2024"), Some(2024));
/// assert_eq!(grants_year("/dashboard/grants/sbrts/home"), None);
/// assert_eq!(grants_year("/dashboard/schools/12/home/2024"), None);
/// ```
pub fn grants_year(path: &str) -> Option<u16> {
    let segments = split_path(path);
    if segments.len() <= GRANTS_MIN_SEGMENTS || segments[GRANTS_INDEX] != GRANTS_SEGMENT {
        return None;
    }
    segments[GRANTS_MIN_SEGMENTS].parse().ok()
}
