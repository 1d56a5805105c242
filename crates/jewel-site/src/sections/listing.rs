//! Listing page sections: group tabs, facet sidebar, results grid.
//!
//! Every control is a link to the next filter state, computed by applying
//! the toggle to a copy of the current one.

use jewel_catalog::catalog::Group;
use jewel_catalog::search::{Facet, FilterState, FilteredView, SortOption};

use super::{group_label_key, render_diamond_card, ViewContext};
use crate::escape::html_escape;
use crate::request::{listing_href, parse_query, query_string};

/// Listing header.
pub fn render_listing_header(ctx: &ViewContext<'_>) -> String {
    format!(
        r#"<section class="container page-hero" data-section="listing-header">
    <h1>{}</h1>
    <p>{}</p>
</section>"#,
        ctx.t("diamonds.title"),
        ctx.t("diamonds.subtitle")
    )
}

/// Group tabs. Switching group resets the filters but keeps the sort.
pub fn render_group_tabs(ctx: &ViewContext<'_>, state: &FilterState) -> String {
    let tabs: String = Group::ALL
        .iter()
        .map(|group| {
            let mut next = state.clone();
            next.switch_group(*group);
            let current = if *group == state.group {
                r#" aria-current="page""#
            } else {
                ""
            };
            format!(
                r#"<a href="{}"{}>{}</a>"#,
                html_escape(&listing_href(&next)),
                current,
                ctx.t(group_label_key(*group))
            )
        })
        .collect();

    format!(
        r#"<nav class="container group-tabs" data-section="group-tabs">{}</nav>"#,
        tabs
    )
}

/// Facet sidebar with per-value counts, the carat range form and the stock
/// toggle.
pub fn render_facets(ctx: &ViewContext<'_>, facets: &[Facet], state: &FilterState) -> String {
    let groups: String = facets
        .iter()
        .map(|facet| render_facet_group(ctx, facet, state))
        .collect();

    let active = state.active_filter_count();
    let header_extra = if active > 0 {
        let mut cleared = state.clone();
        cleared.clear();
        format!(
            r#"<span class="badge count">{}</span> <a class="clear-all" href="{}">{}</a>"#,
            active,
            html_escape(&listing_href(&cleared)),
            ctx.t("common.clearAll")
        )
    } else {
        String::new()
    };

    format!(
        r#"<aside class="facets-sidebar" data-section="facets">
    <div class="facets-header">
        <h2>{title}{header_extra}</h2>
    </div>
    {groups}
    {carat}
    {stock}
</aside>"#,
        title = ctx.t("common.filter"),
        carat = render_carat_form(ctx, state),
        stock = render_stock_toggle(ctx, state),
    )
}

fn render_facet_group(ctx: &ViewContext<'_>, facet: &Facet, state: &FilterState) -> String {
    let options: String = facet
        .values
        .iter()
        .map(|value| {
            let selected = state.is_selected(facet.kind, &value.slug);
            let mut next = state.clone();
            next.toggle_facet(facet.kind, &value.slug);

            let class = match (selected, value.count) {
                (true, _) => "facet-option selected",
                (false, 0) => "facet-option empty",
                (false, _) => "facet-option",
            };
            format!(
                r#"<a class="{}" href="{}" aria-pressed="{}">{}<span class="facet-count">({})</span></a>"#,
                class,
                html_escape(&listing_href(&next)),
                selected,
                html_escape(value.label),
                value.count
            )
        })
        .collect();

    format!(
        r#"<div class="facet-group" data-facet="{}">
        <h3 class="facet-title">{}</h3>
        <div class="facet-options">{}</div>
    </div>"#,
        facet.field,
        ctx.t(facet.kind.label_key()),
        options
    )
}

/// GET form for the carat range. The other filters ride along as hidden
/// inputs so submitting only changes the range.
fn render_carat_form(ctx: &ViewContext<'_>, state: &FilterState) -> String {
    let mut rest = state.clone();
    rest.set_carat_range(Default::default());
    let hidden: String = parse_query(&query_string(&rest))
        .iter()
        .map(|(name, value)| {
            format!(
                r#"<input type="hidden" name="{}" value="{}">"#,
                html_escape(name),
                html_escape(value)
            )
        })
        .collect();

    format!(
        r#"<div class="facet-group" data-facet="carat">
        <h3 class="facet-title">{title}</h3>
        <form class="carat-form" method="get" action="/diamonds">
            {hidden}
            <label>{min_label} <input type="number" name="carat_min" min="0" max="5" step="0.01" value="{min}"></label>
            <label>{max_label} <input type="number" name="carat_max" min="0" max="5" step="0.01" value="{max}"></label>
            <button type="submit" class="btn btn-outline">{apply}</button>
        </form>
    </div>"#,
        title = ctx.t("filters.carat"),
        min_label = ctx.t("filters.caratMin"),
        max_label = ctx.t("filters.caratMax"),
        min = state.carat.min,
        max = state.carat.max,
        apply = ctx.t("common.apply"),
    )
}

fn render_stock_toggle(ctx: &ViewContext<'_>, state: &FilterState) -> String {
    let mut next = state.clone();
    next.set_in_stock_only(!state.in_stock_only);
    let class = if state.in_stock_only {
        "facet-option selected"
    } else {
        "facet-option"
    };

    format!(
        r#"<div class="facet-group" data-facet="in_stock">
        <h3 class="facet-title">{}</h3>
        <div class="facet-options"><a class="{}" href="{}" aria-pressed="{}">{}</a></div>
    </div>"#,
        ctx.t("filters.availability"),
        class,
        html_escape(&listing_href(&next)),
        state.in_stock_only,
        ctx.t("common.inStockOnly")
    )
}

/// Result count, sort options and the card grid (or the empty state).
pub fn render_results(ctx: &ViewContext<'_>, view: &FilteredView<'_>, state: &FilterState) -> String {
    let count = view.len().to_string();
    let summary = state.summary();

    let sort_links: String = SortOption::ALL
        .iter()
        .map(|sort| {
            let mut next = state.clone();
            next.set_sort(*sort);
            let current = if *sort == state.sort {
                r#" aria-current="true""#
            } else {
                ""
            };
            format!(
                r#"<a href="{}"{} data-sort="{}">{}</a>"#,
                html_escape(&listing_href(&next)),
                current,
                sort.as_str(),
                ctx.t(sort.label_key())
            )
        })
        .collect();

    let body = if view.is_empty() {
        let mut cleared = state.clone();
        cleared.clear();
        format!(
            r#"<div class="empty-state">
        <h2>{}</h2>
        <p>{}</p>
        <a class="btn btn-outline" href="{}">{}</a>
    </div>"#,
            ctx.t("common.noResults"),
            ctx.t("common.noResultsHint"),
            html_escape(&listing_href(&cleared)),
            ctx.t("common.clearAll")
        )
    } else {
        let cards: String = view
            .iter()
            .map(|diamond| render_diamond_card(ctx, diamond, summary.clone()))
            .collect();
        format!(r#"<div class="diamond-grid">{}</div>"#, cards)
    };

    format!(
        r#"<section class="results" data-section="results" data-count="{count_attr}">
    <div class="results-toolbar">
        <p class="results-count">{count_text}</p>
        <nav class="sort-options" aria-label="{sort_label}"><span>{sort_label}:</span> {sort_links}</nav>
    </div>
    {body}
</section>"#,
        count_attr = view.len(),
        count_text = ctx.format("common.results", &[("count", count.as_str())]),
        sort_label = ctx.t("common.sort"),
    )
}
