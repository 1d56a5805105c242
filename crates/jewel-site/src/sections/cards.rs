//! Diamond cards, shared by the listing and the homepage carousel.

use jewel_catalog::catalog::Diamond;
use jewel_messaging::Inquiry;

use super::ViewContext;
use crate::escape::html_escape;

/// Inquiry for a diamond, with an optional filter summary.
pub fn diamond_inquiry(diamond: &Diamond, filters: Option<String>) -> Inquiry {
    Inquiry::for_product(diamond.name.clone(), diamond.id.to_string())
        .with_category(diamond.group.as_str())
        .with_optional_filters(filters)
}

/// Price line: the listed amount, or the "on request" text.
pub fn render_price(ctx: &ViewContext<'_>, diamond: &Diamond) -> String {
    match diamond.price.display() {
        Some(amount) => format!(r#"<p class="price">{}</p>"#, amount),
        None => format!(
            r#"<p class="price on-request">{}</p>"#,
            ctx.t("common.onRequest")
        ),
    }
}

/// Stock badge.
pub fn render_stock_badge(ctx: &ViewContext<'_>, diamond: &Diamond) -> String {
    if diamond.in_stock {
        format!(r#"<span class="badge">{}</span>"#, ctx.t("common.inStock"))
    } else {
        format!(
            r#"<span class="badge out">{}</span>"#,
            ctx.t("common.outOfStock")
        )
    }
}

/// One diamond card. `filters` is the active filter summary carried into
/// the inquiry message.
pub fn render_diamond_card(
    ctx: &ViewContext<'_>,
    diamond: &Diamond,
    filters: Option<String>,
) -> String {
    let path = html_escape(&diamond.path());
    let name = html_escape(&diamond.name);
    let inquiry = ctx.link.url(&diamond_inquiry(diamond, filters));

    format!(
        r#"<article class="diamond-card" data-id="{id}">
    <a href="{path}"><img src="{image}" alt="{name}" loading="lazy"></a>
    <div class="card-body">
        <h3><a href="{path}">{name}</a></h3>
        <p class="specs">{shape} &middot; {carat}ct &middot; {color} &middot; {clarity}</p>
        {price}
        {stock}
        <div class="card-actions">
            <a class="btn btn-outline" href="{path}">{details}</a>
            <a class="btn btn-whatsapp" href="{inquiry}" target="_blank" rel="noopener noreferrer">{chat}</a>
        </div>
    </div>
</article>"#,
        id = html_escape(diamond.id.as_str()),
        image = html_escape(&diamond.image),
        shape = diamond.shape,
        carat = diamond.carat,
        color = diamond.color,
        clarity = diamond.clarity,
        price = render_price(ctx, diamond),
        stock = render_stock_badge(ctx, diamond),
        details = ctx.t("common.getDetails"),
        inquiry = html_escape(&inquiry),
        chat = ctx.t("common.chatOnWhatsApp"),
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
    fn test_card_for_priced_stone() {
        let catalog = Catalog::builtin().unwrap();
        let diamond = catalog.get("LJ-W-001").unwrap();
        let fixture = Fixture::new(Language::En, Route::Diamonds);

        let html = render_diamond_card(&fixture.ctx(), diamond, Some("Shape: Round".to_string()));
        assert!(html.contains(r#"href="/diamonds/LJ-W-001""#));
        assert!(html.contains("$4,850"));
        assert!(html.contains("Category%3A%20white."));
        assert!(html.contains("Filters%3A%20Shape%3A%20Round."));
    }

    #[test]
    fn test_card_for_on_request_stone() {
        let catalog = Catalog::builtin().unwrap();
        let diamond = catalog.get("LJ-C-002").unwrap();
        let fixture = Fixture::new(Language::Fr, Route::Diamonds);

        let html = render_diamond_card(&fixture.ctx(), diamond, None);
        assert!(html.contains("price on-request"));
        assert!(!html.contains("Filters%3A"));
    }
}
