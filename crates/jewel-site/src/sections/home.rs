//! Homepage sections.

use jewel_catalog::catalog::{Catalog, Group};
use jewel_catalog::search::FilterState;
use jewel_messaging::Inquiry;

use super::{group_description_key, group_label_key, render_diamond_card, ViewContext};
use crate::escape::html_escape;
use crate::request::listing_href;

struct Testimonial {
    name: &'static str,
    location: &'static str,
    text: &'static str,
    rating: usize,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah M.",
        location: "Dubai, UAE",
        text: "Absolutely stunning diamond! The quality exceeded my expectations and the customer service was impeccable. Highly recommend The Lab Jewel.",
        rating: 5,
    },
    Testimonial {
        name: "James L.",
        location: "Manila, Philippines",
        text: "I was skeptical about lab-grown diamonds at first, but after seeing mine in person, I am completely convinced. Beautiful, ethical, and affordable.",
        rating: 5,
    },
    Testimonial {
        name: "Aisha K.",
        location: "Riyadh, Saudi Arabia",
        text: "The certification process gave me complete peace of mind. My engagement ring is perfect and I love knowing it was ethically sourced.",
        rating: 5,
    },
];

const TRUST_ITEMS: &[(&str, &str, &str)] = &[
    ("&#128737;", "trust.certified", "trust.certifiedDesc"),
    ("&#127807;", "trust.ethical", "trust.ethicalDesc"),
    ("&#127760;", "trust.shipping", "trust.shippingDesc"),
    ("&#127941;", "trust.guarantee", "trust.guaranteeDesc"),
    ("&#127911;", "trust.support", "trust.supportDesc"),
];

/// Hero banner with the two calls to action and headline stats.
pub fn render_hero(ctx: &ViewContext<'_>) -> String {
    format!(
        r#"<section class="hero" data-section="hero">
    <div class="container">
        <p class="eyebrow">{subtitle}</p>
        <h1>{title}</h1>
        <p>{description}</p>
        <div class="hero-actions">
            <a class="btn btn-primary" href="/diamonds">{explore}</a>
            <a class="btn btn-whatsapp" href="{chat_url}" target="_blank" rel="noopener noreferrer">{chat}</a>
        </div>
        <div class="hero-stats">
            <div><strong>5000+</strong>{stat_diamonds}</div>
            <div><strong>50+</strong>{stat_countries}</div>
            <div><strong>100%</strong>{stat_certified}</div>
        </div>
    </div>
</section>"#,
        subtitle = ctx.t("hero.subtitle"),
        title = ctx.t("hero.title"),
        description = ctx.t("hero.description"),
        explore = ctx.t("common.exploreDiamonds"),
        chat_url = html_escape(&ctx.link.url(&Inquiry::general())),
        chat = ctx.t("common.chatOnWhatsApp"),
        stat_diamonds = ctx.t("hero.stats.diamonds"),
        stat_countries = ctx.t("hero.stats.countries"),
        stat_certified = ctx.t("hero.stats.certified"),
    )
}

/// Row of trust signals under the hero.
pub fn render_trust_strip(ctx: &ViewContext<'_>) -> String {
    let items: String = TRUST_ITEMS
        .iter()
        .map(|(icon, title, description)| {
            format!(
                r#"<div class="trust-item"><span aria-hidden="true">{}</span><h3>{}</h3><p>{}</p></div>"#,
                icon,
                ctx.t(title),
                ctx.t(description)
            )
        })
        .collect();

    format!(
        r#"<section class="container trust-strip" data-section="trust">{}</section>"#,
        items
    )
}

/// One card per group, each linking to its listing tab with a live count.
pub fn render_group_cards(ctx: &ViewContext<'_>, catalog: &Catalog) -> String {
    let cards: String = Group::ALL
        .iter()
        .map(|group| {
            let count = catalog.in_group(*group).count();
            format!(
                r#"<a class="group-card" href="{href}" data-group="{slug}">
    <h3>{title}</h3>
    <p>{description}</p>
    <span class="badge">{count}</span>
</a>"#,
                href = html_escape(&listing_href(&FilterState::new(*group))),
                slug = group.slug(),
                title = ctx.t(group_label_key(*group)),
                description = ctx.t(group_description_key(*group)),
                count = count,
            )
        })
        .collect();

    format!(
        r#"<section class="section container" data-section="groups">
    <div class="section-title">
        <h2>{}</h2>
        <p>{}</p>
    </div>
    <div class="group-cards">{}</div>
</section>"#,
        ctx.t("groups.title"),
        ctx.t("groups.subtitle"),
        cards
    )
}

/// Carousel of featured diamonds, in catalog order.
pub fn render_featured(ctx: &ViewContext<'_>, catalog: &Catalog) -> String {
    let cards: String = catalog
        .featured()
        .map(|diamond| render_diamond_card(ctx, diamond, None))
        .collect();

    format!(
        r#"<section class="section container" data-section="featured">
    <div class="section-title">
        <h2>{title}</h2>
        <p>{subtitle}</p>
    </div>
    <div class="carousel" data-carousel>
        <div class="carousel-controls">
            <button type="button" data-scroll="prev" aria-label="{previous}">&larr;</button>
            <button type="button" data-scroll="next" aria-label="{next}">&rarr;</button>
        </div>
        <div class="carousel-track">{cards}</div>
    </div>
    <p style="text-align:center;margin-top:1.5rem"><a class="btn btn-outline" href="/diamonds">{view_all}</a></p>
</section>"#,
        title = ctx.t("featured.title"),
        subtitle = ctx.t("featured.subtitle"),
        previous = ctx.t("featured.previous"),
        next = ctx.t("featured.next"),
        view_all = ctx.t("common.viewAll"),
    )
}

/// Client testimonials.
pub fn render_testimonials(ctx: &ViewContext<'_>) -> String {
    let quotes: String = TESTIMONIALS
        .iter()
        .map(|t| {
            format!(
                r#"<blockquote class="testimonial">
    <div aria-label="{rating}/5">{stars}</div>
    <p>&ldquo;{text}&rdquo;</p>
    <cite>{name} <span>{location}</span></cite>
</blockquote>"#,
                rating = t.rating,
                stars = "&#9733;".repeat(t.rating),
                text = html_escape(t.text),
                name = html_escape(t.name),
                location = html_escape(t.location),
            )
        })
        .collect();

    format!(
        r#"<section class="section container" data-section="testimonials">
    <div class="section-title">
        <h2>{}</h2>
        <p>{}</p>
    </div>
    <div class="testimonials">{}</div>
</section>"#,
        ctx.t("testimonials.title"),
        ctx.t("testimonials.subtitle"),
        quotes
    )
}

/// Closing call to action.
pub fn render_cta(ctx: &ViewContext<'_>) -> String {
    format!(
        r#"<section class="container" data-section="cta">
    <div class="cta">
        <h2>{}</h2>
        <p>{}</p>
        <a class="btn btn-whatsapp" href="{}" target="_blank" rel="noopener noreferrer">{}</a>
    </div>
</section>"#,
        ctx.t("cta.title"),
        ctx.t("cta.text"),
        html_escape(&ctx.link.url(&Inquiry::general())),
        ctx.t("common.chatOnWhatsApp")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::Route;
    use crate::sections::test_support::Fixture;
    use jewel_i18n::Language;

    #[test]
    fn test_featured_lists_only_featured_in_catalog_order() {
        let catalog = Catalog::builtin().unwrap();
        let fixture = Fixture::new(Language::En, Route::Home);
        let html = render_featured(&fixture.ctx(), &catalog);

        let featured: Vec<&str> = catalog.featured().map(|d| d.id.as_str()).collect();
        let positions: Vec<usize> = featured
            .iter()
            .map(|id| html.find(&format!(r#"data-id="{}""#, id)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(!html.contains(r#"data-id="LJ-W-002""#));
        assert!(html.contains("data-carousel"));
    }

    #[test]
    fn test_group_cards_link_to_tabs() {
        let catalog = Catalog::builtin().unwrap();
        let fixture = Fixture::new(Language::En, Route::Home);
        let html = render_group_cards(&fixture.ctx(), &catalog);

        for group in Group::ALL {
            assert!(html.contains(&format!("/diamonds?group={}", group.slug())));
        }
        assert!(html.contains("Fancy Color Diamonds"));
    }

    #[test]
    fn test_testimonials() {
        let fixture = Fixture::new(Language::En, Route::Home);
        let html = render_testimonials(&fixture.ctx());
        assert!(html.contains("Sarah M."));
        assert!(html.contains("Riyadh, Saudi Arabia"));
    }
}
