//! Listing results and facet counts.

use serde::Serialize;

use crate::catalog::{Catalog, Certification, Clarity, CutGrade, Diamond, Group, Shape};
use crate::search::query::FacetKind;

/// Ordered output of the filter/sort engine.
#[derive(Debug, Clone, Serialize)]
pub struct FilteredView<'a> {
    /// The surviving records, in display order.
    pub items: Vec<&'a Diamond>,
    /// Records in the active group before facets, range and stock filters.
    pub group_total: usize,
    /// Badge count for the filter button.
    pub active_filter_count: usize,
}

impl<'a> FilteredView<'a> {
    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of matching records.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Diamond> + '_ {
        self.items.iter().copied()
    }
}

/// One facet of the sidebar, with a count for every vocabulary value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Facet {
    #[serde(skip)]
    pub kind: FacetKind,
    /// Facet name (e.g. "Shape").
    pub name: &'static str,
    /// Query parameter this facet filters on.
    pub field: &'static str,
    pub values: Vec<FacetValue>,
}

impl Facet {
    fn new(kind: FacetKind) -> Self {
        Self {
            kind,
            name: kind.display_name(),
            field: kind.param(),
            values: Vec::new(),
        }
    }

    fn add_value(&mut self, label: &'static str, slug: String, count: usize) {
        self.values.push(FacetValue { label, slug, count });
    }

    /// Count for a value label, if the value belongs to this facet.
    pub fn count_of(&self, label: &str) -> Option<usize> {
        self.values
            .iter()
            .find(|v| v.label == label)
            .map(|v| v.count)
    }
}

/// A single facet value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetValue {
    /// Display label.
    pub label: &'static str,
    /// Query-string form.
    pub slug: String,
    /// Records in the group carrying this value.
    pub count: usize,
}

/// Per-value counts within a group for every facet, in sidebar order.
///
/// Counts ignore the current selections, so they describe the whole group.
/// Zero-count values are kept so the sidebar can show them disabled.
pub fn facet_counts(catalog: &Catalog, group: Group) -> Vec<Facet> {
    let records: Vec<&Diamond> = catalog.in_group(group).collect();
    let count = |pred: &dyn Fn(&Diamond) -> bool| records.iter().filter(|&&d| pred(d)).count();

    FacetKind::ALL
        .iter()
        .map(|&kind| {
            let mut facet = Facet::new(kind);
            match kind {
                FacetKind::Shape => {
                    for shape in Shape::ALL {
                        facet.add_value(
                            shape.as_str(),
                            shape.slug(),
                            count(&|d: &Diamond| d.shape == *shape),
                        );
                    }
                }
                FacetKind::Color => {
                    for color in group.color_scale().options() {
                        facet.add_value(
                            color.as_str(),
                            color.slug(),
                            count(&|d: &Diamond| d.color == color),
                        );
                    }
                }
                FacetKind::Clarity => {
                    for clarity in Clarity::ALL {
                        facet.add_value(
                            clarity.as_str(),
                            clarity.slug(),
                            count(&|d: &Diamond| d.clarity == *clarity),
                        );
                    }
                }
                FacetKind::Cut => {
                    for cut in CutGrade::ALL {
                        facet.add_value(
                            cut.as_str(),
                            cut.slug(),
                            count(&|d: &Diamond| d.cut == *cut),
                        );
                    }
                }
                FacetKind::Certification => {
                    for cert in Certification::ALL {
                        facet.add_value(
                            cert.as_str(),
                            cert.slug(),
                            count(&|d: &Diamond| d.certification == *cert),
                        );
                    }
                }
            }
            facet
        })
        .collect()
}
