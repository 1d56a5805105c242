//! Property tests for the filter/sort engine.

use jewel_catalog::prelude::*;
use proptest::prelude::*;

fn pick<T: Copy + std::fmt::Debug + 'static>(values: &'static [T]) -> impl Strategy<Value = T> {
    proptest::sample::select(values)
}

fn diamond_strategy() -> impl Strategy<Value = Diamond> {
    (
        (pick(Group::ALL), pick(Shape::ALL), 1u32..=600, 0usize..8),
        (pick(Clarity::ALL), pick(CutGrade::ALL), pick(Certification::ALL)),
        (prop::option::of(1u64..50_000), any::<bool>(), any::<bool>()),
    )
        .prop_map(
            |((group, shape, points, color_index), (clarity, cut, certification), (price, in_stock, featured))| {
                let options = group.color_scale().options();
                let color = options[color_index % options.len()];
                Diamond {
                    id: DiamondId::new(""),
                    name: String::new(),
                    group,
                    shape,
                    carat: Carat::from_points(points),
                    color,
                    clarity,
                    cut,
                    polish: FinishGrade::Excellent,
                    symmetry: FinishGrade::Excellent,
                    measurements: String::new(),
                    certification,
                    price: Price::from(price),
                    in_stock,
                    featured,
                    image: String::new(),
                }
            },
        )
}

fn catalog_strategy() -> impl Strategy<Value = Catalog> {
    prop::collection::vec(diamond_strategy(), 0..40).prop_map(|mut diamonds| {
        for (i, d) in diamonds.iter_mut().enumerate() {
            d.id = DiamondId::new(format!("P-{:03}", i));
        }
        Catalog::from_records(diamonds).unwrap()
    })
}

fn sort_strategy() -> impl Strategy<Value = SortOption> {
    pick(SortOption::ALL)
}

fn ids(view: &FilteredView<'_>) -> Vec<String> {
    view.iter().map(|d| d.id.to_string()).collect()
}

fn position(catalog: &Catalog, id: &DiamondId) -> usize {
    catalog.all().iter().position(|d| &d.id == id).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]

    #[test]
    fn test_group_partition_is_exhaustive_and_exclusive(catalog in catalog_strategy(), group in pick(Group::ALL)) {
        let view = filter_catalog(&catalog, &FilterState::new(group));
        let expected: Vec<String> = catalog
            .all()
            .iter()
            .filter(|d| d.group == group)
            .map(|d| d.id.to_string())
            .collect();

        let mut got = ids(&view);
        got.sort();
        prop_assert_eq!(got, expected);
        prop_assert_eq!(view.group_total, view.len());
    }

    #[test]
    fn test_narrowing_a_facet_never_grows_the_result(
        catalog in catalog_strategy(),
        group in pick(Group::ALL),
        first in pick(Shape::ALL),
        second in pick(Shape::ALL),
        clarity in pick(Clarity::ALL),
    ) {
        let base = FilterState::new(group);
        let base_len = filter_catalog(&catalog, &base).len();

        let mut by_shape = base.clone();
        by_shape.toggle_shape(first);
        let by_shape_len = filter_catalog(&catalog, &by_shape).len();
        prop_assert!(by_shape_len <= base_len);

        let mut by_shape_and_clarity = by_shape.clone();
        by_shape_and_clarity.toggle_clarity(clarity);
        prop_assert!(filter_catalog(&catalog, &by_shape_and_clarity).len() <= by_shape_len);

        // Values within one facet are alternatives.
        if first != second {
            let mut either_shape = by_shape.clone();
            either_shape.toggle_shape(second);
            prop_assert!(filter_catalog(&catalog, &either_shape).len() >= by_shape_len);
        }

        // Dropping every clarity restores the unconstrained facet.
        let mut restored = by_shape_and_clarity.clone();
        restored.clarities.clear();
        prop_assert_eq!(
            ids(&filter_catalog(&catalog, &restored)),
            ids(&filter_catalog(&catalog, &by_shape))
        );
    }

    #[test]
    fn test_carat_bounds_are_inclusive(catalog in catalog_strategy(), group in pick(Group::ALL), lo in 1u32..=300, span in 0u32..=300) {
        let range = CaratRange::new(Carat::from_points(lo), Carat::from_points(lo + span));
        let mut state = FilterState::new(group);
        state.set_carat_range(range);

        let view = filter_catalog(&catalog, &state);
        for d in catalog.in_group(group) {
            let inside = d.carat.points() >= lo && d.carat.points() <= lo + span;
            prop_assert_eq!(view.iter().any(|v| v.id == d.id), inside);
        }
    }

    #[test]
    fn test_featured_sort_is_stable(catalog in catalog_strategy(), group in pick(Group::ALL)) {
        let view = filter_catalog(&catalog, &FilterState::new(group));

        for pair in view.items.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            prop_assert!(a.featured || !b.featured);
            if a.featured == b.featured {
                prop_assert!(position(&catalog, &a.id) < position(&catalog, &b.id));
            }
        }
    }

    #[test]
    fn test_unpriced_records_follow_priced_ones(
        catalog in catalog_strategy(),
        group in pick(Group::ALL),
        descending in any::<bool>(),
    ) {
        let mut state = FilterState::new(group);
        state.set_sort(if descending { SortOption::PriceDesc } else { SortOption::PriceAsc });

        let view = filter_catalog(&catalog, &state);
        let first_unpriced = view.iter().position(|d| d.price.is_on_request()).unwrap_or(view.len());
        prop_assert!(view.iter().skip(first_unpriced).all(|d| d.price.is_on_request()));

        let amounts: Vec<u64> = view.iter().filter_map(|d| d.price.as_amount()).collect();
        for pair in amounts.windows(2) {
            if descending {
                prop_assert!(pair[0] >= pair[1]);
            } else {
                prop_assert!(pair[0] <= pair[1]);
            }
        }
    }

    #[test]
    fn test_engine_is_idempotent(
        catalog in catalog_strategy(),
        group in pick(Group::ALL),
        sort in sort_strategy(),
        in_stock in any::<bool>(),
    ) {
        let mut state = FilterState::new(group);
        state.set_sort(sort);
        state.set_in_stock_only(in_stock);
        let before = state.clone();

        let first = ids(&filter_catalog(&catalog, &state));
        let second = ids(&filter_catalog(&catalog, &state));

        prop_assert_eq!(first, second);
        prop_assert_eq!(state, before);
    }
}
