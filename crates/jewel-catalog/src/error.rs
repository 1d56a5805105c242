//! Catalog error types.

use thiserror::Error;

use crate::catalog::Group;
use crate::ids::DiamondId;

/// Errors raised while loading the catalog.
///
/// Every variant is a configuration error: the catalog data is fixed at
/// build time, so a failure here means the data is wrong and the site must
/// not start with it.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog data could not be parsed (malformed JSON or a facet value
    /// outside its vocabulary).
    #[error("Catalog data is invalid: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two records share an id.
    #[error("Duplicate diamond id: {0}")]
    DuplicateId(DiamondId),

    /// Carat weight is not positive.
    #[error("Diamond {0} has a non-positive carat weight")]
    InvalidCarat(DiamondId),

    /// A listed price is zero.
    #[error("Diamond {0} has a zero price; omit the price for on-request stones")]
    InvalidPrice(DiamondId),

    /// Color grade drawn from the wrong scale for the record's group.
    #[error("Diamond {id} in group {group} uses a {scale} color grade")]
    ColorScaleMismatch {
        id: DiamondId,
        group: Group,
        scale: &'static str,
    },
}
