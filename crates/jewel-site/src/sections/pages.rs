//! About, contact, jewellery and not-found pages.

use jewel_messaging::{ContactField, ContactForm, Inquiry};

use super::ViewContext;
use crate::escape::html_escape;

/// Page title block.
pub fn render_page_hero(ctx: &ViewContext<'_>, title_key: &str, subtitle_key: &str) -> String {
    format!(
        r#"<section class="container page-hero" data-section="page-hero">
    <h1>{}</h1>
    <p>{}</p>
</section>"#,
        ctx.t(title_key),
        ctx.t(subtitle_key)
    )
}

/// Story, mission, values and the lab-grown explainer.
pub fn render_about(ctx: &ViewContext<'_>) -> String {
    let values: String = (1..=4)
        .map(|i| {
            format!(
                r#"<div class="group-card"><h3>{}</h3><p>{}</p></div>"#,
                ctx.t(&format!("about.value{}", i)),
                ctx.t(&format!("about.value{}Desc", i))
            )
        })
        .collect();

    format!(
        r#"<section class="section container" data-section="about">
    <h2>{story}</h2>
    <p>{story_text}</p>
    <h2>{mission}</h2>
    <p>{mission_text}</p>
    <h2>{values_title}</h2>
    <div class="values">{values}</div>
    <h2>{why}</h2>
    <p>{why_text}</p>
    <div class="hero-stats">
        <div><strong>70%</strong>{lower_cost}</div>
        <div><strong>0</strong>{mining}</div>
        <div><strong>100%</strong>{real}</div>
    </div>
</section>"#,
        story = ctx.t("about.story"),
        story_text = ctx.t("about.storyText"),
        mission = ctx.t("about.mission"),
        mission_text = ctx.t("about.missionText"),
        values_title = ctx.t("about.values"),
        why = ctx.t("about.whyLabGrown"),
        why_text = ctx.t("about.whyLabGrownText"),
        lower_cost = ctx.t("about.stats.lowerCost"),
        mining = ctx.t("about.stats.miningImpact"),
        real = ctx.t("about.stats.realDiamond"),
    )
}

/// Contact form and details. `missing` lists the required fields left
/// empty on a rejected submission; the form keeps what was typed.
pub fn render_contact(ctx: &ViewContext<'_>, form: &ContactForm, missing: &[ContactField]) -> String {
    let error = if missing.is_empty() {
        String::new()
    } else {
        let labels: Vec<&str> = missing.iter().map(|f| ctx.locale.t(f.label_key())).collect();
        let fields = labels.join(", ");
        format!(
            r#"<p class="form-error" role="alert">{}</p>"#,
            ctx.format("contact.form.required", &[("fields", fields.as_str())])
        )
    };

    let input = |field: ContactField, value: &str, kind: &str| {
        let required = if ContactField::REQUIRED.contains(&field) {
            " required"
        } else {
            ""
        };
        let invalid = if missing.contains(&field) {
            r#" aria-invalid="true""#
        } else {
            ""
        };
        format!(
            r#"<label>{label}<input type="{kind}" name="{name}" value="{value}"{required}{invalid}></label>"#,
            label = ctx.t(field.label_key()),
            name = field.as_str(),
            value = html_escape(value),
        )
    };

    let message_invalid = if missing.contains(&ContactField::Message) {
        r#" aria-invalid="true""#
    } else {
        ""
    };

    let contact = &ctx.config.contact;

    format!(
        r#"<section class="container contact-layout" data-section="contact">
    <form class="contact-form" method="post" action="/contact">
        {error}
        {name}
        {email}
        {phone}
        {subject}
        <label>{message_label}<textarea name="message" rows="6" required{message_invalid}>{message}</textarea></label>
        <button type="submit" class="btn btn-whatsapp">{submit}</button>
    </form>
    <div class="contact-info">
        <h2>{info_title}</h2>
        <p><strong>{phone_label}</strong><br><a href="tel:{office}" dir="ltr">{office}</a></p>
        <p><strong>{email_label}</strong><br><a href="mailto:{email_value}">{email_value}</a></p>
        <p><strong>{address_label}</strong><br>{address}</p>
        <p><strong>{hours_label}</strong><br>{hours}</p>
    </div>
</section>"#,
        name = input(ContactField::Name, &form.name, "text"),
        email = input(ContactField::Email, &form.email, "email"),
        phone = input(ContactField::Phone, &form.phone, "tel"),
        subject = input(ContactField::Subject, &form.subject, "text"),
        message_label = ctx.t(ContactField::Message.label_key()),
        message = html_escape(&form.message),
        submit = ctx.t("contact.form.submit"),
        info_title = ctx.t("contact.info.title"),
        phone_label = ctx.t("contact.info.phone"),
        office = html_escape(&contact.office_number),
        email_label = ctx.t("contact.info.email"),
        email_value = html_escape(&contact.email),
        address_label = ctx.t("contact.info.address"),
        address = html_escape(&contact.address),
        hours_label = ctx.t("contact.info.hours"),
        hours = ctx.t("contact.info.hoursText"),
    )
}

/// Placeholder for the jewellery collection.
pub fn render_coming_soon(ctx: &ViewContext<'_>) -> String {
    format!(
        r#"<section class="container coming-soon" data-section="coming-soon">
    <p class="eyebrow">{}</p>
    <h1>{}</h1>
    <p>{}</p>
    <div class="hero-actions">
        <a class="btn btn-primary" href="/diamonds">{}</a>
        <a class="btn btn-whatsapp" href="{}" target="_blank" rel="noopener noreferrer">{}</a>
    </div>
</section>"#,
        ctx.t("common.comingSoon"),
        ctx.t("nav.jewellery"),
        ctx.t("jewellery.text"),
        ctx.t("common.exploreDiamonds"),
        html_escape(&ctx.link.url(&Inquiry::general())),
        ctx.t("common.chatOnWhatsApp")
    )
}

/// Generic not-found page.
pub fn render_page_not_found(ctx: &ViewContext<'_>) -> String {
    format!(
        r#"<section class="container empty-state" data-section="not-found">
    <h1>404</h1>
    <h2>{}</h2>
    <p>{}</p>
    <a class="btn btn-primary" href="/">{}</a>
</section>"#,
        ctx.t("common.pageNotFound"),
        ctx.t("common.pageNotFoundText"),
        ctx.t("common.backHome")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::Route;
    use crate::sections::test_support::Fixture;
    use jewel_i18n::Language;

    #[test]
    fn test_contact_error_lists_localized_fields() {
        let fixture = Fixture::new(Language::En, Route::Contact);
        let form = ContactForm {
            name: "<Sam>".to_string(),
            ..ContactForm::default()
        };
        let html = render_contact(
            &fixture.ctx(),
            &form,
            &[ContactField::Email, ContactField::Subject, ContactField::Message],
        );

        assert!(html.contains("Please fill in: Email, Subject, Message"));
        assert!(html.contains(r#"name="name" value="&lt;Sam&gt;""#));
        assert!(html.contains(r#"name="email" value="" required aria-invalid="true""#));
        assert!(html.contains(r#"name="phone" value="">"#));
    }

    #[test]
    fn test_clean_contact_form_has_no_error() {
        let fixture = Fixture::new(Language::Fr, Route::Contact);
        let html = render_contact(&fixture.ctx(), &ContactForm::default(), &[]);
        assert!(!html.contains("form-error"));
        assert!(html.contains("mailto:[EMAIL]"));
    }

    #[test]
    fn test_about_values() {
        let fixture = Fixture::new(Language::En, Route::About);
        let html = render_about(&fixture.ctx());
        assert!(html.contains("Transparency"));
        assert!(html.contains("Real people, one message away"));
    }
}
