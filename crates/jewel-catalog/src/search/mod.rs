//! Search module.
//!
//! Contains the listing's filter state, the filter/sort engine and facet
//! counts for the sidebar.

mod filter;
mod query;
mod results;

pub use filter::{compare, filter_catalog, matches_facets, sort_diamonds};
pub use query::{CaratRange, FacetKind, FilterState, SortOption};
pub use results::{facet_counts, Facet, FacetValue, FilteredView};
