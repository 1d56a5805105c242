//! Diamond catalog and listing engine for The Lab Jewel.
//!
//! This crate holds everything the listing page computes on:
//!
//! - **Catalog**: diamond records, closed facet vocabularies, the validated store
//! - **Price**: listed amounts and "on request", with the price-sort order
//! - **Search**: filter state, the filter/sort engine, facet counts
//!
//! # Example
//!
//! ```rust,ignore
//! use jewel_catalog::prelude::*;
//!
//! let catalog = Catalog::builtin()?;
//!
//! let mut state = FilterState::new(Group::White);
//! state.toggle_shape(Shape::Round);
//! state.set_sort(SortOption::PriceAsc);
//!
//! let view = filter_catalog(&catalog, &state);
//! println!("{} of {} stones", view.len(), view.group_total);
//! ```

pub mod error;
pub mod ids;
pub mod price;

pub mod catalog;
pub mod search;

pub use error::CatalogError;
pub use ids::DiamondId;
pub use price::{Price, SortDirection};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::ids::DiamondId;
    pub use crate::price::{Price, SortDirection};

    // Catalog
    pub use crate::catalog::{
        Carat, Catalog, Certification, Clarity, ColorGrade, ColorScale, CutGrade, Diamond,
        FancyColor, FinishGrade, Group, Shape, Vocabulary, WhiteColor,
    };

    // Search
    pub use crate::search::{
        facet_counts, filter_catalog, CaratRange, Facet, FacetKind, FacetValue, FilterState,
        FilteredView, SortOption,
    };
}
