use pdf_ergo::config::PageConfig;
use pdf_ergo::{Document, ParagraphStyle};
use pretty_assertions::assert_eq;

#[test]
fn json_pages_write_the_same_document_as_the_builder() {
    let config: PageConfig = serde_json::from_str(
        r#"{
            "paragraphs": [
                { "text": "Report", "font": "Helvetica-Bold", "font_size": 20, "alignment": "center" },
                {
                    "text": "Quarterly numbers are in.",
                    "font_color": "DarkSlateGray",
                    "border": [false, false, true, false],
                    "border_width": 0.5,
                    "padding": 4,
                    "margin": [12, 0, 12, 0]
                }
            ]
        }"#,
    )
    .unwrap();

    let mut from_config = Document::new();
    from_config.push_page(config.build().unwrap());

    let mut title = ParagraphStyle::new();
    title
        .font("Helvetica-Bold")
        .font_size(20)
        .alignment("center");
    let mut body = ParagraphStyle::new();
    body.font_colour("darkslategray")
        .border((false, false, true, false))
        .border_width(0.5)
        .padding(4)
        .margin((12, 0, 12, 0));

    let mut from_builder = Document::new();
    from_builder
        .add_page()
        .add("Report", &title)
        .unwrap()
        .add(pdf_ergo::Paragraph::styled("Quarterly numbers are in.", &body).unwrap());

    assert_eq!(
        from_config.to_bytes().unwrap(),
        from_builder.to_bytes().unwrap()
    );
}

#[test]
fn malformed_json_is_a_deserialization_error() {
    assert!(serde_json::from_str::<PageConfig>(r#"{ "paragraphs": [ { "font": "Courier" } ] }"#).is_err());
    assert!(serde_json::from_str::<PageConfig>(r#"{ "paragraphs": [ { "text": "x", "border": [true, false] } ] }"#).is_err());
}
