//! Diamond detail page sections.

use jewel_catalog::catalog::Diamond;

use super::{diamond_inquiry, group_label_key, render_price, render_stock_badge, ViewContext};
use crate::escape::html_escape;

/// Link back to the diamond's group tab.
pub fn render_breadcrumb(ctx: &ViewContext<'_>, diamond: &Diamond) -> String {
    format!(
        r#"<nav class="container page-hero" data-section="breadcrumb"><a href="/diamonds?group={}">&larr; {}</a> / {}</nav>"#,
        diamond.group.slug(),
        ctx.t("common.backToDiamonds"),
        ctx.t(group_label_key(diamond.group))
    )
}

/// Image, price, specification table and inquiry button.
///
/// The inquiry carries the group as category and the stone's spec line
/// (`"Round, 1.01ct, D, VVS1"`) as the filter summary.
pub fn render_detail(ctx: &ViewContext<'_>, diamond: &Diamond) -> String {
    let rows = [
        ("diamond.id", diamond.id.to_string()),
        ("diamond.shape", diamond.shape.to_string()),
        ("diamond.carat", format!("{}ct", diamond.carat)),
        ("diamond.color", diamond.color.to_string()),
        ("diamond.clarity", diamond.clarity.to_string()),
        ("diamond.cut", diamond.cut.to_string()),
        ("diamond.polish", diamond.polish.to_string()),
        ("diamond.symmetry", diamond.symmetry.to_string()),
        ("diamond.certification", diamond.certification.to_string()),
        ("diamond.measurements", diamond.measurements.clone()),
    ];
    let table: String = rows
        .iter()
        .map(|(key, value)| {
            format!(
                "<tr><th>{}</th><td>{}</td></tr>",
                ctx.t(key),
                html_escape(value)
            )
        })
        .collect();

    let inquiry = diamond_inquiry(diamond, Some(diamond.spec_summary()));

    format!(
        r#"<section class="container detail-layout" data-section="detail" data-id="{id}">
    <div><img src="{image}" alt="{name}"></div>
    <div>
        <h1>{name}</h1>
        <div class="detail-price">{price}</div>
        {stock}
        <h2>{spec_title}</h2>
        <table class="spec-table">{table}</table>
        <a class="btn btn-whatsapp" href="{inquiry}" target="_blank" rel="noopener noreferrer">{chat}</a>
    </div>
</section>"#,
        id = html_escape(diamond.id.as_str()),
        image = html_escape(&diamond.image),
        name = html_escape(&diamond.name),
        price = render_price(ctx, diamond),
        stock = render_stock_badge(ctx, diamond),
        spec_title = ctx.t("diamond.specifications"),
        inquiry = html_escape(&ctx.link.url(&inquiry)),
        chat = ctx.t("common.chatOnWhatsApp"),
    )
}

/// Shown for an id that is not in the catalog.
pub fn render_diamond_not_found(ctx: &ViewContext<'_>) -> String {
    format!(
        r#"<section class="container empty-state" data-section="not-found">
    <h1>{}</h1>
    <p>{}</p>
    <a class="btn btn-primary" href="/diamonds">{}</a>
</section>"#,
        ctx.t("common.notFound"),
        ctx.t("common.notFoundText"),
        ctx.t("common.backToDiamonds")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::Route;
    use crate::sections::test_support::Fixture;
    use jewel_catalog::catalog::Catalog;
    use jewel_i18n::Language;

    #[test]
    fn test_detail_inquiry_carries_spec_summary() {
        let catalog = Catalog::builtin().unwrap();
        let diamond = catalog.get("LJ-W-001").unwrap();
        let fixture = Fixture::new(Language::En, Route::Diamond("LJ-W-001".to_string()));
        let html = render_detail(&fixture.ctx(), diamond);

        let expected = fixture.link.url(
            &jewel_messaging::Inquiry::for_product("Round Brilliant 1.01ct", "LJ-W-001")
                .with_category("white")
                .with_filters("Round, 1.01ct, D, VVS1"),
        );
        assert!(html.contains(&html_escape(&expected)));
        assert!(html.contains("<tr><th>Stock Number</th><td>LJ-W-001</td></tr>"));
        assert!(html.contains("<tr><th>Carat</th><td>1.01ct</td></tr>"));
    }

    #[test]
    fn test_not_found_links_back() {
        let fixture = Fixture::new(Language::En, Route::Diamond("nope".to_string()));
        let html = render_diamond_not_found(&fixture.ctx());
        assert!(html.contains("Diamond Not Found"));
        assert!(html.contains(r#"href="/diamonds""#));
    }
}
