//! Gap and recommendation aggregation for the skillgap dashboard.
//!
//! This crate is the computational core of the client: pure functions that
//! take the payloads the API already computed and shape them for display:
//! - Priority display classification.
//! - Category and priority counts for charts.
//! - Gap and recommendation summaries for the analysis view.
//! - Headline metric projection for the dashboard tiles.
//!
//! Nothing here performs I/O, and nothing here fails: an absent payload
//! (no analysis has run yet) produces a zeroed summary, not an error.
//! Every load recomputes fresh values; callers replace their previous
//! snapshot wholesale.
//!
//! # Example
//!
//! ```
//! use skillgap_analysis::{count_by_priority, GapMetrics};
//!
//! // Before any analysis has run there is nothing to count, and the
//! // headline metrics degrade to zero instead of erroring.
//! let counts = count_by_priority(&[]);
//! assert_eq!(counts.total(), 0);
//! let metrics = GapMetrics::project(None);
//! assert_eq!(metrics.skill_gaps, 0);
//! ```

#![deny(unsafe_code)]

mod aggregate;
mod classify;
mod summary;

pub use aggregate::{count_by_category, count_by_priority, CategoryCount, PriorityCount};
pub use classify::{priority_style, PriorityStyle};
pub use summary::{GapMetrics, GapSummary, RecommendationSummary};
