//! Filter state and sort options for the listing.

use std::collections::BTreeSet;
use std::fmt;

use crate::catalog::{Carat, Certification, Clarity, ColorGrade, CutGrade, Group, Shape};
use crate::price::SortDirection;

/// Sort options for the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOption {
    /// Featured records first, catalog order otherwise.
    #[default]
    Featured,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by carat, light to heavy.
    CaratAsc,
    /// Sort by carat, heavy to light.
    CaratDesc,
}

impl SortOption {
    pub const ALL: &'static [SortOption] = &[
        SortOption::Featured,
        SortOption::PriceAsc,
        SortOption::PriceDesc,
        SortOption::CaratAsc,
        SortOption::CaratDesc,
    ];

    /// Query-string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Featured => "featured",
            SortOption::PriceAsc => "price-asc",
            SortOption::PriceDesc => "price-desc",
            SortOption::CaratAsc => "carat-asc",
            SortOption::CaratDesc => "carat-desc",
        }
    }

    /// Parse the query-string form.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|s| s.as_str().eq_ignore_ascii_case(value))
    }

    /// Parse a query value, falling back to `Featured` for anything unknown.
    pub fn from_query(value: &str) -> Self {
        Self::parse(value).unwrap_or_default()
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Featured => "Featured",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::CaratAsc => "Carat: Low to High",
            SortOption::CaratDesc => "Carat: High to Low",
        }
    }

    /// Key into the string tables for the localized label.
    pub fn label_key(&self) -> &'static str {
        match self {
            SortOption::Featured => "sorting.featured",
            SortOption::PriceAsc => "sorting.priceLowHigh",
            SortOption::PriceDesc => "sorting.priceHighLow",
            SortOption::CaratAsc => "sorting.caratLowHigh",
            SortOption::CaratDesc => "sorting.caratHighLow",
        }
    }

    /// Direction of the comparison, if the option compares a value.
    pub fn direction(&self) -> Option<SortDirection> {
        match self {
            SortOption::Featured => None,
            SortOption::PriceAsc | SortOption::CaratAsc => Some(SortDirection::Ascending),
            SortOption::PriceDesc | SortOption::CaratDesc => Some(SortDirection::Descending),
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive carat range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CaratRange {
    pub min: Carat,
    pub max: Carat,
}

impl CaratRange {
    /// Create a range; bounds given in the wrong order are swapped.
    pub fn new(min: Carat, max: Carat) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Check if a weight lies inside the range, bounds included.
    pub fn contains(&self, carat: Carat) -> bool {
        self.min <= carat && carat <= self.max
    }

    /// Check if this is the full `[0, 5]` filter domain.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

impl Default for CaratRange {
    fn default() -> Self {
        Self {
            min: Carat::MIN_FILTER,
            max: Carat::MAX_FILTER,
        }
    }
}

impl fmt::Display for CaratRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}ct", self.min, self.max)
    }
}

/// A filterable attribute of a diamond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacetKind {
    Shape,
    Color,
    Clarity,
    Cut,
    Certification,
}

impl FacetKind {
    pub const ALL: &'static [FacetKind] = &[
        FacetKind::Shape,
        FacetKind::Color,
        FacetKind::Clarity,
        FacetKind::Cut,
        FacetKind::Certification,
    ];

    /// Query parameter carrying this facet's selections.
    pub fn param(&self) -> &'static str {
        match self {
            FacetKind::Shape => "shape",
            FacetKind::Color => "color",
            FacetKind::Clarity => "clarity",
            FacetKind::Cut => "cut",
            FacetKind::Certification => "cert",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FacetKind::Shape => "Shape",
            FacetKind::Color => "Color",
            FacetKind::Clarity => "Clarity",
            FacetKind::Cut => "Cut",
            FacetKind::Certification => "Certification",
        }
    }

    /// Key into the string tables for the localized facet title.
    pub fn label_key(&self) -> &'static str {
        match self {
            FacetKind::Shape => "filters.shape",
            FacetKind::Color => "filters.color",
            FacetKind::Clarity => "filters.clarity",
            FacetKind::Cut => "filters.cut",
            FacetKind::Certification => "filters.certification",
        }
    }
}

/// Everything the listing needs to pick and order records.
///
/// Owned by the current view. An empty selection set means "any value".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub group: Group,
    pub shapes: BTreeSet<Shape>,
    pub colors: BTreeSet<ColorGrade>,
    pub clarities: BTreeSet<Clarity>,
    pub cuts: BTreeSet<CutGrade>,
    pub certifications: BTreeSet<Certification>,
    pub carat: CaratRange,
    pub in_stock_only: bool,
    pub sort: SortOption,
}

impl FilterState {
    /// Default state for a group.
    pub fn new(group: Group) -> Self {
        Self {
            group,
            ..Self::default()
        }
    }

    /// Change the active group. Facets, carat range and the stock flag go
    /// back to their defaults; the sort key is kept.
    pub fn switch_group(&mut self, group: Group) {
        self.group = group;
        self.clear();
    }

    /// Drop every facet selection, the carat range and the stock flag.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.colors.clear();
        self.clarities.clear();
        self.cuts.clear();
        self.certifications.clear();
        self.carat = CaratRange::default();
        self.in_stock_only = false;
    }

    pub fn toggle_shape(&mut self, shape: Shape) {
        toggle(&mut self.shapes, shape);
    }

    /// Toggle a color. Grades from the other group's scale are ignored, since
    /// no record in this group could match them.
    pub fn toggle_color(&mut self, color: ColorGrade) -> bool {
        if color.scale() != self.group.color_scale() {
            return false;
        }
        toggle(&mut self.colors, color);
        true
    }

    pub fn toggle_clarity(&mut self, clarity: Clarity) {
        toggle(&mut self.clarities, clarity);
    }

    pub fn toggle_cut(&mut self, cut: CutGrade) {
        toggle(&mut self.cuts, cut);
    }

    pub fn toggle_certification(&mut self, certification: Certification) {
        toggle(&mut self.certifications, certification);
    }

    /// Toggle a facet value given as a label or slug.
    ///
    /// Returns `false` when the value is not in the facet's vocabulary.
    pub fn toggle_facet(&mut self, kind: FacetKind, value: &str) -> bool {
        match kind {
            FacetKind::Shape => match Shape::parse(value) {
                Some(shape) => {
                    self.toggle_shape(shape);
                    true
                }
                None => false,
            },
            FacetKind::Color => match ColorGrade::parse(value) {
                Some(color) => self.toggle_color(color),
                None => false,
            },
            FacetKind::Clarity => match Clarity::parse(value) {
                Some(clarity) => {
                    self.toggle_clarity(clarity);
                    true
                }
                None => false,
            },
            FacetKind::Cut => match CutGrade::parse(value) {
                Some(cut) => {
                    self.toggle_cut(cut);
                    true
                }
                None => false,
            },
            FacetKind::Certification => match Certification::parse(value) {
                Some(cert) => {
                    self.toggle_certification(cert);
                    true
                }
                None => false,
            },
        }
    }

    /// Slugs of the selected values for a facet, in vocabulary order.
    pub fn selected(&self, kind: FacetKind) -> Vec<String> {
        match kind {
            FacetKind::Shape => self.shapes.iter().map(|v| v.slug()).collect(),
            FacetKind::Color => self.colors.iter().map(|v| v.slug()).collect(),
            FacetKind::Clarity => self.clarities.iter().map(|v| v.slug()).collect(),
            FacetKind::Cut => self.cuts.iter().map(|v| v.slug()).collect(),
            FacetKind::Certification => self.certifications.iter().map(|v| v.slug()).collect(),
        }
    }

    /// Display labels of the selected values for a facet.
    fn selected_labels(&self, kind: FacetKind) -> Vec<&'static str> {
        match kind {
            FacetKind::Shape => self.shapes.iter().map(|v| v.as_str()).collect(),
            FacetKind::Color => self.colors.iter().map(|v| v.as_str()).collect(),
            FacetKind::Clarity => self.clarities.iter().map(|v| v.as_str()).collect(),
            FacetKind::Cut => self.cuts.iter().map(|v| v.as_str()).collect(),
            FacetKind::Certification => self.certifications.iter().map(|v| v.as_str()).collect(),
        }
    }

    /// Check if a facet value (label or slug) is selected.
    pub fn is_selected(&self, kind: FacetKind, value: &str) -> bool {
        match kind {
            FacetKind::Shape => Shape::parse(value).is_some_and(|v| self.shapes.contains(&v)),
            FacetKind::Color => ColorGrade::parse(value).is_some_and(|v| self.colors.contains(&v)),
            FacetKind::Clarity => {
                Clarity::parse(value).is_some_and(|v| self.clarities.contains(&v))
            }
            FacetKind::Cut => CutGrade::parse(value).is_some_and(|v| self.cuts.contains(&v)),
            FacetKind::Certification => {
                Certification::parse(value).is_some_and(|v| self.certifications.contains(&v))
            }
        }
    }

    pub fn set_carat_range(&mut self, range: CaratRange) {
        self.carat = range;
    }

    pub fn set_in_stock_only(&mut self, in_stock_only: bool) {
        self.in_stock_only = in_stock_only;
    }

    pub fn set_sort(&mut self, sort: SortOption) {
        self.sort = sort;
    }

    /// Badge count: one per selected facet value, plus one for a narrowed
    /// carat range, plus one for the stock flag.
    pub fn active_filter_count(&self) -> usize {
        let selections = self.shapes.len()
            + self.colors.len()
            + self.clarities.len()
            + self.cuts.len()
            + self.certifications.len();
        selections + usize::from(!self.carat.is_default()) + usize::from(self.in_stock_only)
    }

    pub fn has_filters(&self) -> bool {
        self.active_filter_count() > 0
    }

    /// Human-readable description of the active filters, used in inquiry
    /// messages. `None` when nothing is narrowed.
    ///
    /// Example: `"Shape: Round, Oval; Carat: 1-2ct; In stock only"`.
    pub fn summary(&self) -> Option<String> {
        let mut parts = Vec::new();

        for kind in FacetKind::ALL {
            let labels = self.selected_labels(*kind);
            if !labels.is_empty() {
                parts.push(format!("{}: {}", kind.display_name(), labels.join(", ")));
            }
        }

        if !self.carat.is_default() {
            parts.push(format!("Carat: {}", self.carat));
        }

        if self.in_stock_only {
            parts.push("In stock only".to_string());
        }

        if parts.is_empty() {
            None
        } else {
            Some(parts.join("; "))
        }
    }
}

fn toggle<T: Ord>(set: &mut BTreeSet<T>, value: T) {
    if !set.remove(&value) {
        set.insert(value);
    }
}
