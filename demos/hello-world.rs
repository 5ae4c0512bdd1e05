use pdf_ergo::{Document, Info, Page, ParagraphStyle, SquareAnnotation};

fn main() -> Result<(), pdf_ergo::PDFError> {
    // paragraph styles take loose arguments: names, hex strings, tuples, plain numbers
    let mut title = ParagraphStyle::new();
    title
        .font("Helvetica-Bold")
        .font_size(24)
        .alignment("top center")
        .font_colour("#1f3a5f")
        .margin((0, 0, 18, 0));

    let mut body = ParagraphStyle::new();
    body.font("times-roman")
        .font_size(12)
        .text_alignment("justified")
        .padding(6)
        .border(true)
        .border_radius(4)
        .border_colour("lightsteelblue")
        .background_colour((240, 244, 250))
        .hyphenation("en-us");

    // an A5 page, given by name; `Page::with_size` takes any pair of lengths
    let mut page = Page::with_size_name("A5")?;
    page.add("Hello world!", &title)?;
    page.add(
        "Everything on this page was described with loosely typed arguments and \
         normalized before layout. Paragraphs that don't fit continue on a new page.",
        &body,
    )?;

    // outline the title with an annotation: lower left corner, width and height
    let mut annotation = SquareAnnotation::new((42, 500, 336, 36))?;
    annotation.stroke_colour("red")?;
    page.add_annotation(annotation);

    let mut doc = Document::new();
    doc.set_info(Info::new().title("Hello world").author("pdf-ergo").clone());
    doc.push_page(page);

    // render the document!
    doc.save("hello-world.pdf")
}
