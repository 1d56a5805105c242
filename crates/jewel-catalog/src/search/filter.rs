//! The filter/sort engine.
//!
//! A pure function of `(catalog, state)`: the group partition, facet, range
//! and availability filters run in that order over a linear scan, then a
//! stable sort orders the survivors. Neither input is mutated, and equal
//! inputs always give the same sequence.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use tracing::debug;

use crate::catalog::{Catalog, Diamond};
use crate::price::SortDirection;
use crate::search::query::{FilterState, SortOption};
use crate::search::results::FilteredView;

/// Run the listing pipeline over the catalog.
pub fn filter_catalog<'a>(catalog: &'a Catalog, state: &FilterState) -> FilteredView<'a> {
    let in_group: Vec<&Diamond> = catalog.in_group(state.group).collect();
    let group_total = in_group.len();

    let mut items: Vec<&Diamond> = in_group
        .into_iter()
        .filter(|d| matches_facets(d, state))
        .filter(|d| state.carat.contains(d.carat))
        .filter(|d| !state.in_stock_only || d.in_stock)
        .collect();

    sort_diamonds(&mut items, state.sort);

    debug!(
        group = %state.group,
        sort = %state.sort,
        group_total,
        matched = items.len(),
        "filtered catalog"
    );

    FilteredView {
        items,
        group_total,
        active_filter_count: state.active_filter_count(),
    }
}

/// Check a record against every non-empty selection set.
pub fn matches_facets(diamond: &Diamond, state: &FilterState) -> bool {
    admits(&state.shapes, &diamond.shape)
        && admits(&state.colors, &diamond.color)
        && admits(&state.clarities, &diamond.clarity)
        && admits(&state.cuts, &diamond.cut)
        && admits(&state.certifications, &diamond.certification)
}

fn admits<T: Ord>(selection: &BTreeSet<T>, value: &T) -> bool {
    selection.is_empty() || selection.contains(value)
}

/// Order records in place. `sort_by` is stable, so ties keep catalog order.
pub fn sort_diamonds(items: &mut [&Diamond], sort: SortOption) {
    items.sort_by(|a, b| compare(a, b, sort));
}

/// Ordering used by a sort option.
pub fn compare(a: &Diamond, b: &Diamond, sort: SortOption) -> Ordering {
    match sort {
        SortOption::Featured => b.featured.cmp(&a.featured),
        SortOption::PriceAsc => a.price.cmp_for(&b.price, SortDirection::Ascending),
        SortOption::PriceDesc => a.price.cmp_for(&b.price, SortDirection::Descending),
        SortOption::CaratAsc => a.carat.cmp(&b.carat),
        SortOption::CaratDesc => b.carat.cmp(&a.carat),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{
        Carat, Certification, Clarity, ColorGrade, CutGrade, FinishGrade, Group, Shape,
        WhiteColor,
    };
    use crate::ids::DiamondId;
    use crate::price::Price;
    use crate::search::query::CaratRange;

    fn diamond(id: &str, shape: Shape, points: u32, price: Price, in_stock: bool) -> Diamond {
        Diamond {
            id: DiamondId::new(id),
            name: id.to_string(),
            group: Group::White,
            shape,
            carat: Carat::from_points(points),
            color: ColorGrade::White(WhiteColor::F),
            clarity: Clarity::Vs1,
            cut: CutGrade::Excellent,
            polish: FinishGrade::Excellent,
            symmetry: FinishGrade::Excellent,
            measurements: String::new(),
            certification: Certification::Igi,
            price,
            in_stock,
            featured: false,
            image: String::new(),
        }
    }

    fn ids(view: &FilteredView<'_>) -> Vec<String> {
        view.items.iter().map(|d| d.id.to_string()).collect()
    }

    fn catalog() -> Catalog {
        Catalog::from_records(vec![
            diamond("a", Shape::Round, 100, Price::amount(4000), true),
            diamond("b", Shape::Oval, 250, Price::OnRequest, true),
            diamond("c", Shape::Round, 50, Price::amount(900), false),
            diamond("d", Shape::Pear, 500, Price::amount(12000), true),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_selection_admits_everything() {
        let catalog = catalog();
        let view = filter_catalog(&catalog, &FilterState::new(Group::White));
        assert_eq!(ids(&view), vec!["a", "b", "c", "d"]);
        assert_eq!(view.group_total, 4);
        assert_eq!(view.active_filter_count, 0);
    }

    #[test]
    fn test_shape_selection() {
        let catalog = catalog();
        let mut state = FilterState::new(Group::White);
        state.toggle_shape(Shape::Round);
        state.toggle_shape(Shape::Pear);

        let view = filter_catalog(&catalog, &state);
        assert_eq!(ids(&view), vec!["a", "c", "d"]);
        assert_eq!(view.active_filter_count, 2);
    }

    #[test]
    fn test_carat_bounds_are_inclusive() {
        let catalog = catalog();
        let mut state = FilterState::new(Group::White);
        state.set_carat_range(CaratRange::new(Carat::from_points(100), Carat::from_points(250)));

        assert_eq!(ids(&filter_catalog(&catalog, &state)), vec!["a", "b"]);
    }

    #[test]
    fn test_in_stock_only() {
        let catalog = catalog();
        let mut state = FilterState::new(Group::White);
        state.set_in_stock_only(true);

        assert_eq!(ids(&filter_catalog(&catalog, &state)), vec!["a", "b", "d"]);
    }

    #[test]
    fn test_price_sorts_sink_on_request() {
        let catalog = catalog();
        let mut state = FilterState::new(Group::White);

        state.set_sort(SortOption::PriceAsc);
        assert_eq!(ids(&filter_catalog(&catalog, &state)), vec!["c", "a", "d", "b"]);

        state.set_sort(SortOption::PriceDesc);
        assert_eq!(ids(&filter_catalog(&catalog, &state)), vec!["d", "a", "c", "b"]);
    }

    #[test]
    fn test_carat_sorts() {
        let catalog = catalog();
        let mut state = FilterState::new(Group::White);

        state.set_sort(SortOption::CaratAsc);
        assert_eq!(ids(&filter_catalog(&catalog, &state)), vec!["c", "a", "b", "d"]);

        state.set_sort(SortOption::CaratDesc);
        assert_eq!(ids(&filter_catalog(&catalog, &state)), vec!["d", "b", "a", "c"]);
    }

    #[test]
    fn test_compare_matches_sort() {
        let catalog = catalog();
        let a = catalog.get("a").unwrap();
        let b = catalog.get("b").unwrap();
        assert_eq!(compare(a, b, SortOption::PriceDesc), Ordering::Less);
        assert_eq!(compare(a, b, SortOption::CaratDesc), Ordering::Greater);
        assert_eq!(compare(a, b, SortOption::Featured), Ordering::Equal);
    }

    #[test]
    fn test_empty_group_is_not_an_error() {
        let catalog = catalog();
        let view = filter_catalog(&catalog, &FilterState::new(Group::Melee));
        assert!(view.is_empty());
        assert_eq!(view.group_total, 0);
    }
}
