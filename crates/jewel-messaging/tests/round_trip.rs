//! Decoding the `text` parameter of a link gives back the exact message.

use jewel_messaging::{Inquiry, InquiryLink};

fn text_param(url: &str) -> String {
    let (_, query) = url.split_once('?').expect("link has a query string");
    let encoded = query.strip_prefix("text=").expect("text is the only parameter");
    urlencoding::decode(encoded).expect("valid UTF-8").into_owned()
}

fn builder() -> InquiryLink {
    InquiryLink::new("https://wa.me", "[WHATSAPP_NUMBER]", "Hi The Lab Jewel").unwrap()
}

#[test]
fn test_full_detail() {
    let inquiry = Inquiry::for_product("Blush Pink Oval 1.2ct", "LJ-C-002")
        .with_category("color")
        .with_filters("Color: Fancy Pink; In stock only");

    assert_eq!(
        text_param(&builder().url(&inquiry)),
        "Hi The Lab Jewel, I'm interested in: Blush Pink Oval 1.2ct (LJ-C-002). \
         Category: color. Filters: Color: Fancy Pink; In stock only. \
         Please share details and price."
    );
}

#[test]
fn test_name_and_id_only() {
    let inquiry = Inquiry::for_product("Heart Shape 1.02ct", "LJ-F-001");

    assert_eq!(
        text_param(&builder().url(&inquiry)),
        "Hi The Lab Jewel, I'm interested in: Heart Shape 1.02ct (LJ-F-001). \
         Please share details and price."
    );
}

#[test]
fn test_id_missing() {
    let inquiry = Inquiry {
        product_name: Some("Heart Shape".to_string()),
        ..Inquiry::default()
    }
    .with_category("fancy");

    assert_eq!(
        text_param(&builder().url(&inquiry)),
        "Hi The Lab Jewel, I would like to know more about your lab-grown diamonds."
    );
}

#[test]
fn test_both_missing() {
    assert_eq!(
        text_param(&builder().url(&Inquiry::general())),
        "Hi The Lab Jewel, I would like to know more about your lab-grown diamonds."
    );
}

#[test]
fn test_non_ascii_text_survives() {
    let link = builder();
    let text = "مرحبا & bonjour: 100% « naturel » ?";
    assert_eq!(text_param(&link.url_for_text(text)), text);
}
