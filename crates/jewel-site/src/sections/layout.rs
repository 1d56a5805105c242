//! Shell, header, footer and the floating chat button.

use jewel_catalog::catalog::Group;
use jewel_catalog::search::FilterState;
use jewel_i18n::Language;
use jewel_messaging::Inquiry;

use super::{group_label_key, ViewContext};
use crate::escape::html_escape;
use crate::request::listing_href;
use crate::route::NavItem;
use crate::shell::{HeadContent, Shell};
use crate::styles::SITE_STYLES;

/// Build the page shell: head, header and the opening of `<main>`. The
/// footer and floating button close it.
pub fn page_shell(ctx: &ViewContext<'_>, title: &str, description: &str) -> Shell {
    let full_title = if title.is_empty() {
        ctx.config.brand.name.clone()
    } else {
        format!("{} | {}", title, ctx.config.brand.name)
    };

    let mut head = HeadContent::new(full_title)
        .with_meta("viewport", "width=device-width, initial-scale=1")
        .with_meta("description", description)
        .with_style(SITE_STYLES);
    for language in Language::ALL {
        head = head.with_alternate(language.code(), &language_href(*language, ctx.current));
    }

    Shell::new(ctx.locale.attributes(), head)
        .with_body_start(format!("<body>\n{}\n<main>\n", render_header(ctx)))
        .with_body_end(format!(
            "</main>\n{}\n{}\n</body>\n</html>",
            render_footer(ctx),
            render_whatsapp_button(ctx)
        ))
}

/// Language switch link that returns to `current`.
pub fn language_href(language: Language, current: &str) -> String {
    format!(
        "/lang/{}?next={}",
        language.code(),
        urlencoding::encode(current)
    )
}

/// Site header with navigation and language switcher.
pub fn render_header(ctx: &ViewContext<'_>) -> String {
    let active = ctx.route.nav_section();

    let nav: String = NavItem::ALL
        .iter()
        .map(|item| {
            let current = if active == Some(*item) {
                r#" aria-current="page""#
            } else {
                ""
            };
            format!(
                r#"<a href="{}"{}>{}</a>"#,
                item.href(),
                current,
                ctx.t(item.label_key())
            )
        })
        .collect();

    let languages: String = Language::ALL
        .iter()
        .map(|language| {
            let current = if *language == ctx.locale.language() {
                r#" aria-current="true""#
            } else {
                ""
            };
            format!(
                r#"<a href="{}" hreflang="{code}" lang="{code}"{} title="{}">{}</a>"#,
                html_escape(&language_href(*language, ctx.current)),
                current,
                language.english_name(),
                language.native_name(),
                code = language.code(),
            )
        })
        .collect();

    format!(
        r#"<header class="site-header">
    <div class="container">
        <a href="/" class="logo">{brand}</a>
        <nav class="main-nav">{nav}</nav>
        <nav class="lang-switcher" aria-label="{language_label}">{languages}</nav>
    </div>
</header>"#,
        brand = ctx.brand(),
        language_label = ctx.t("nav.language"),
    )
}

/// Site footer: tagline, quick links, category links, contact details.
pub fn render_footer(ctx: &ViewContext<'_>) -> String {
    let quick_links: String = NavItem::ALL
        .iter()
        .map(|item| {
            format!(
                r#"<li><a href="{}">{}</a></li>"#,
                item.href(),
                ctx.t(item.label_key())
            )
        })
        .collect();

    let categories: String = Group::ALL
        .iter()
        .map(|group| {
            format!(
                r#"<li><a href="{}">{}</a></li>"#,
                html_escape(&listing_href(&FilterState::new(*group))),
                ctx.t(group_label_key(*group))
            )
        })
        .collect();

    let contact = &ctx.config.contact;
    let year = ctx.year.to_string();

    format!(
        r#"<footer class="site-footer">
    <div class="container">
        <div class="columns">
            <div>
                <h4>{brand}</h4>
                <p>{tagline}</p>
            </div>
            <div>
                <h4>{quick_links_title}</h4>
                <ul>{quick_links}</ul>
            </div>
            <div>
                <h4>{categories_title}</h4>
                <ul>{categories}</ul>
            </div>
            <div>
                <h4>{support_title}</h4>
                <ul>
                    <li>{phone_label}: <span dir="ltr">{phone}</span></li>
                    <li>{email_label}: {email}</li>
                    <li>{address_label}: {address}</li>
                </ul>
            </div>
        </div>
        <p class="copyright">{copyright}</p>
    </div>
</footer>"#,
        brand = ctx.brand(),
        tagline = ctx.t("footer.tagline"),
        quick_links_title = ctx.t("footer.quickLinks"),
        categories_title = ctx.t("footer.categories"),
        support_title = ctx.t("footer.support"),
        phone_label = ctx.t("contact.info.phone"),
        phone = html_escape(&contact.office_number),
        email_label = ctx.t("contact.info.email"),
        email = html_escape(&contact.email),
        address_label = ctx.t("contact.info.address"),
        address = html_escape(&contact.address),
        copyright = ctx.format(
            "footer.copyright",
            &[("year", year.as_str()), ("brand", ctx.config.brand.name.as_str())]
        ),
    )
}

/// Floating chat button. Sits on the leading edge's opposite side: right in
/// left-to-right documents, left in right-to-left ones.
pub fn render_whatsapp_button(ctx: &ViewContext<'_>) -> String {
    let side = if ctx.locale.is_rtl() { "left" } else { "right" };
    format!(
        r#"<a class="whatsapp-float {}" href="{}" target="_blank" rel="noopener noreferrer" aria-label="{}">&#128172;</a>"#,
        side,
        html_escape(&ctx.link.url(&Inquiry::general())),
        ctx.t("common.chatOnWhatsApp")
    )
}
