//! Diamond catalog module.
//!
//! Contains the record type, the facet vocabularies and the validated store.

mod diamond;
mod store;
mod vocabulary;

pub use diamond::{Carat, Diamond};
pub use store::Catalog;
pub use vocabulary::{
    slugify, Certification, Clarity, ColorGrade, ColorScale, CutGrade, FancyColor, FinishGrade,
    Group, Shape, Vocabulary, WhiteColor,
};
