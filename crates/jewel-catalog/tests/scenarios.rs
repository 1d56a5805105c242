//! End-to-end listing scenarios over small hand-built catalogs.

use jewel_catalog::prelude::*;

fn record(id: &str, group: Group, points: u32, price: Price, featured: bool) -> Diamond {
    let color = match group.color_scale() {
        ColorScale::White => ColorGrade::White(WhiteColor::E),
        ColorScale::Fancy => ColorGrade::Fancy(FancyColor::Yellow),
    };
    Diamond {
        id: DiamondId::new(id),
        name: format!("Stone {}", id),
        group,
        shape: Shape::Oval,
        carat: Carat::from_points(points),
        color,
        clarity: Clarity::Vs1,
        cut: CutGrade::Excellent,
        polish: FinishGrade::Excellent,
        symmetry: FinishGrade::VeryGood,
        measurements: "8.0 x 6.0 x 3.7 mm".to_string(),
        certification: Certification::Igi,
        price,
        in_stock: true,
        featured,
        image: format!("/images/{}.jpg", id),
    }
}

fn ids(view: &FilteredView<'_>) -> Vec<String> {
    view.iter().map(|d| d.id.to_string()).collect()
}

/// A(white, 1.0ct, $5000, featured), B(white, 2.0ct, on request),
/// C(color, 1.5ct, $3000).
fn abc_catalog() -> Catalog {
    Catalog::from_records(vec![
        record("A", Group::White, 100, Price::amount(5000), true),
        record("B", Group::White, 200, Price::OnRequest, false),
        record("C", Group::Color, 150, Price::amount(3000), false),
    ])
    .unwrap()
}

#[test]
fn test_white_group_featured_sort() {
    let catalog = abc_catalog();
    let state = FilterState::new(Group::White);

    let view = filter_catalog(&catalog, &state);
    assert_eq!(ids(&view), vec!["A", "B"]);
    assert_eq!(view.len(), 2);
    assert_eq!(view.active_filter_count, 0);
}

#[test]
fn test_white_group_price_asc_sinks_on_request() {
    let catalog = abc_catalog();
    let mut state = FilterState::new(Group::White);
    state.set_sort(SortOption::PriceAsc);

    assert_eq!(ids(&filter_catalog(&catalog, &state)), vec!["A", "B"]);
}

#[test]
fn test_white_group_carat_desc() {
    let catalog = abc_catalog();
    let mut state = FilterState::new(Group::White);
    state.set_sort(SortOption::CaratDesc);

    assert_eq!(ids(&filter_catalog(&catalog, &state)), vec!["B", "A"]);
}

#[test]
fn test_unmatched_shape_yields_empty_view_with_one_active_filter() {
    let catalog = abc_catalog();
    let mut state = FilterState::new(Group::White);
    state.toggle_shape(Shape::Round);

    let view = filter_catalog(&catalog, &state);
    assert!(view.is_empty());
    assert_eq!(view.active_filter_count, 1);
    assert_eq!(view.group_total, 2);
}

#[test]
fn test_switching_group_resets_selections() {
    let mut state = FilterState::new(Group::White);
    state.toggle_shape(Shape::Round);
    state.toggle_clarity(Clarity::If);
    state.toggle_cut(CutGrade::Ideal);
    state.toggle_certification(Certification::Gia);
    state.set_carat_range(CaratRange::new(Carat::from_points(120), Carat::from_points(300)));
    state.set_in_stock_only(true);

    state.switch_group(Group::Color);

    assert_eq!(state.group, Group::Color);
    assert!(state.shapes.is_empty());
    assert!(state.colors.is_empty());
    assert!(state.clarities.is_empty());
    assert!(state.cuts.is_empty());
    assert!(state.certifications.is_empty());
    assert!(state.carat.is_default());
    assert!(!state.in_stock_only);
    assert_eq!(state.active_filter_count(), 0);
}

#[test]
fn test_price_desc_keeps_on_request_last() {
    let catalog = Catalog::from_records(vec![
        record("ask-1", Group::Fancy, 100, Price::OnRequest, false),
        record("cheap", Group::Fancy, 100, Price::amount(800), false),
        record("ask-2", Group::Fancy, 100, Price::OnRequest, false),
        record("dear", Group::Fancy, 100, Price::amount(9000), false),
    ])
    .unwrap();

    let mut state = FilterState::new(Group::Fancy);
    state.set_sort(SortOption::PriceDesc);

    assert_eq!(
        ids(&filter_catalog(&catalog, &state)),
        vec!["dear", "cheap", "ask-1", "ask-2"]
    );
}

#[test]
fn test_builtin_catalog_lists_every_group() {
    let catalog = Catalog::builtin().unwrap();

    let mut total = 0;
    for group in Group::ALL {
        let view = filter_catalog(&catalog, &FilterState::new(*group));
        assert!(!view.is_empty(), "no stones in {}", group);
        assert!(view.iter().all(|d| d.group == *group));
        total += view.len();
    }
    assert_eq!(total, catalog.len());
}

#[test]
fn test_builtin_featured_stones_lead_the_default_sort() {
    let catalog = Catalog::builtin().unwrap();
    let view = filter_catalog(&catalog, &FilterState::new(Group::White));

    let first_plain = view.iter().position(|d| !d.featured).unwrap_or(view.len());
    assert!(view.iter().skip(first_plain).all(|d| !d.featured));
}

#[test]
fn test_color_group_filters_on_fancy_names() {
    let catalog = Catalog::builtin().unwrap();
    let mut state = FilterState::new(Group::Color);
    assert!(state.toggle_facet(FacetKind::Color, "Fancy Pink"));

    let view = filter_catalog(&catalog, &state);
    assert!(!view.is_empty());
    assert!(view
        .iter()
        .all(|d| d.color == ColorGrade::Fancy(FancyColor::Pink)));
}
