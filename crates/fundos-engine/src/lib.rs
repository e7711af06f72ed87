//! Fundos Engine - Facets, filtering and sorting
//!
//! This crate derives everything the user sees from one snapshot of session
//! state: the per-facet counts and the ordered list of visible places.

pub mod facets;
pub mod filter;
pub mod models;
pub mod session;
pub mod sort;

pub use facets::{
    all_districts_selected, compute_facets, prune_stale_districts, select_all_total,
    toggle_all_districts,
};
pub use filter::visible_places;
pub use models::{FacetCounts, View, VisiblePlace};
pub use session::Session;
pub use sort::sort_places;
