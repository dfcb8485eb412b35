//! # sams-navigator
//!
//! Active-section and breadcrumb resolution for the SAMS dashboard.
//!
//! The dashboard sidebar is a static two-level tree of sections and children,
//! plus a flat list of resource links. For the route the user is on, the
//! resolver picks the single most specific entry whose path matches: exact
//! equality, a year-agnostic rule for `/…/grants/{type}/home/{year}` pages, or
//! a plain string prefix. Longer paths win; ties keep the first entry seen.
//!
//! ```
//! use sams_navigator::{Breadcrumbs, defaults::sams_navigation};
//!
//! let config = sams_navigation(2024);
//! let resolved = config.resolve("/dashboard/grants/sbrts/home/2030");
//!
//! assert!(resolved.is_section_active("grants"));
//! assert!(resolved.is_child_active("capitation-grants"));
//! assert_eq!(Breadcrumbs::from_match(&resolved).to_string(), "Grants > Capitation Grants");
//! ```
//!
//! # Features
//!
//! | Feature   | Default | Description |
//! |-----------|---------|-------------|
//! | `log`     | yes     | Log through the `log` crate |
//! | `tracing` | no      | Log through `tracing` instead of `log` |
//! | `serde`   | yes     | JSON/TOML configuration loading |
//! | `cache`   | yes     | LRU-memoized [`CachedResolver`](cache::CachedResolver) |
//!
//! Resolution is a pure function of its inputs: no I/O, no global state, and
//! every type here is `Send + Sync`.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod breadcrumb;
#[cfg(feature = "cache")]
pub mod cache;
pub mod config;
pub mod defaults;
pub mod entry;
pub mod error;
pub mod logging;
pub mod matching;
pub mod resolve;

pub use breadcrumb::{Breadcrumbs, Crumb};
#[cfg(feature = "cache")]
pub use cache::{CacheStats, CachedResolver};
pub use config::NavigationConfig;
pub use entry::{Badge, IconKey, NavigationChildEntry, NavigationEntry};
pub use error::ConfigError;
pub use matching::{is_path_match, segment_count};
pub use resolve::{resolve, resolve_with_resources, ResolvedMatch};
