use crate::annotation::SquareAnnotation;
use crate::colour::Colour;
use crate::content::render_contents;
use crate::font::Font;
use crate::layout::{Margins, Paragraph, SingleColumnLayout};
use crate::normalize::{normalize_rectangle, RectArg};
use crate::pagesize::{self, PageSize};
use crate::refs::{ObjectReferences, RefType};
use crate::{PDFError, ParagraphStyle, Pt, Rect};
use pdf_writer::{Filter, Finish, Name, Pdf, Ref};

/// A font at a specific size
#[derive(Clone, PartialEq, Debug)]
pub struct SpanFont {
    pub font: Font,
    pub size: Pt,
}

/// A run of text drawn in one font and colour, starting at a baseline position
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub colour: Colour,
    pub coords: (Pt, Pt),
}

#[derive(Clone, PartialEq, Debug)]
pub enum PageContents {
    Text(Vec<SpanLayout>),
    /// Raw content stream operators, i.e. as generated by [pdf_writer::Content].
    /// Graphics state changes are isolated from the rest of the page.
    RawContent(Vec<u8>),
}

pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// Where content can live, i.e. within the margins
    pub content_box: Rect,
    /// Content drawn directly onto the page, in order
    pub contents: Vec<PageContents>,
    pub annotations: Vec<SquareAnnotation>,
    layout: Option<SingleColumnLayout>,
}

impl Default for Page {
    /// A Letter sized page in portrait orientation
    fn default() -> Self {
        Page::new(pagesize::LETTER, None)
    }
}

impl Page {
    /// Create a new page. Without explicit margins, the content box leaves a tenth
    /// of the page's width free on the left and right, and a tenth of its height
    /// free on the top and bottom.
    pub fn new(size: PageSize, margins: Option<Margins>) -> Page {
        let (width, height) = size;
        let margins = margins.unwrap_or_else(|| Margins::symmetric(height * 0.1, width * 0.1));
        let media_box = Rect::new(0, 0, width, height);

        Page {
            media_box,
            content_box: media_box.inset(margins.top, margins.right, margins.bottom, margins.left),
            contents: Vec::default(),
            annotations: Vec::default(),
            layout: None,
        }
    }

    /// Create a page from a size name such as `"A4"` or `"letter landscape"`; see
    /// [pagesize::from_name]
    pub fn with_size_name(name: &str) -> Result<Page, PDFError> {
        Ok(Page::new(pagesize::from_name(name)?, None))
    }

    /// Create a page of a custom size, i.e. `Page::with_size(400, Mm(100.0))`
    pub fn with_size<W: Into<Pt>, H: Into<Pt>>(width: W, height: H) -> Page {
        Page::new((width.into(), height.into()), None)
    }

    pub fn width(&self) -> Pt {
        self.media_box.width()
    }

    pub fn height(&self) -> Pt {
        self.media_box.height()
    }

    /// The page's single column layout, created when first needed
    pub fn layout(&mut self) -> &mut SingleColumnLayout {
        self.layout.get_or_insert_with(SingleColumnLayout::new)
    }

    /// Add a paragraph of text to the page's single column layout, returning the
    /// layout so more paragraphs can be chained on
    pub fn add<S: ToString>(
        &mut self,
        text: S,
        style: &ParagraphStyle,
    ) -> Result<&mut SingleColumnLayout, PDFError> {
        let paragraph = Paragraph::styled(text, style)?;
        Ok(self.layout().add(paragraph))
    }

    /// Draw a paragraph inside a rectangle, independent of the page's layout. The
    /// paragraph's vertical and horizontal alignment position it within `rect`.
    pub fn paint<R: Into<RectArg>>(&mut self, paragraph: &Paragraph, rect: R) -> Result<(), PDFError> {
        let rect = normalize_rectangle(rect)?;
        self.contents.extend(paragraph.paint(rect));
        Ok(())
    }

    pub fn add_annotation(&mut self, annotation: SquareAnnotation) {
        self.annotations.push(annotation);
    }

    pub fn add_span(&mut self, span: SpanLayout) {
        self.contents.push(PageContents::Text(vec![span]));
    }

    /// Add custom content stream operators to the page
    pub fn add_raw_content(&mut self, content: Vec<u8>) {
        self.contents.push(PageContents::RawContent(content));
    }

    /// Everything that ends up on the page, one entry per written page: the
    /// directly drawn contents followed by the laid out column, then any
    /// continuation pages the column flowed onto
    pub(crate) fn laid_out(&self) -> Vec<Vec<PageContents>> {
        let mut pages = match &self.layout {
            Some(layout) => layout.layout(self.content_box),
            None => vec![Vec::new()],
        };
        if let Some(first) = pages.first_mut() {
            first.splice(0..0, self.contents.iter().cloned());
        }
        pages
    }

    /// Write one page object in this page's boxes. Continuation pages of a flowed
    /// layout are written with their own contents and no annotations.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        id: Ref,
        page_index: usize,
        page_tree_id: Ref,
        contents: &[PageContents],
        annotations: &[SquareAnnotation],
        fonts: &[Font],
        writer: &mut Pdf,
    ) -> Result<(), PDFError> {
        let content_id = refs.gen(RefType::ContentForPage(page_index));
        let annotation_ids: Vec<Ref> = (0..annotations.len())
            .map(|i| refs.gen(RefType::Annotation(page_index, i)))
            .collect();

        let mut page = writer.page(id);
        page.media_box(self.media_box.into());
        page.art_box(self.content_box.into());
        page.parent(page_tree_id);

        let mut resources = page.resources();
        let mut resource_fonts = resources.fonts();
        for i in 0..fonts.len() {
            let font_id = refs.get(RefType::Font(i)).ok_or_else(|| {
                PDFError::InvalidArgument(format!("font {i} was never written"))
            })?;
            resource_fonts.pair(Name(format!("F{i}").as_bytes()), font_id);
        }
        resource_fonts.finish();
        resources.finish();

        page.contents(content_id);
        if !annotation_ids.is_empty() {
            page.annotations(annotation_ids.iter().copied());
        }
        page.finish();

        let rendered = render_contents(contents, fonts)?;
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
            rendered.as_slice(),
            miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
        );
        writer
            .stream(content_id, compressed.as_slice())
            .filter(Filter::FlateDecode);

        for (annotation, annotation_id) in annotations.iter().zip(annotation_ids) {
            annotation.write(annotation_id, id, writer);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagesize::PageOrientation;

    #[test]
    fn default_page_is_letter_portrait() {
        let page = Page::default();
        assert_eq!(page.width(), Pt(612.0));
        assert_eq!(page.height(), Pt(792.0));
        assert_eq!(page.content_box.x1, Pt(612.0) * 0.1);
        assert_eq!(page.content_box.y2, Pt(792.0) - Pt(792.0) * 0.1);
    }

    #[test]
    fn pages_from_size_names() {
        let page = Page::with_size_name("A4 landscape").unwrap();
        assert_eq!((page.width(), page.height()), pagesize::A4.landscape());
        assert!(matches!(
            Page::with_size_name("napkin"),
            Err(PDFError::InvalidArgument(_))
        ));
    }

    #[test]
    fn pages_of_custom_sizes() {
        let page = Page::with_size(400, crate::Mm(100.0));
        assert_eq!(page.width(), Pt(400.0));
        assert!((page.height().0 - 283.464_6).abs() < 1e-3);
        assert!((page.content_box.x1.0 - 40.0).abs() < 1e-3);

        let page = Page::with_size(2.5_f64, crate::In(1.0));
        assert_eq!((page.width(), page.height()), (Pt(2.5), Pt(72.0)));
    }

    #[test]
    fn direct_contents_stay_on_the_first_page() {
        let mut page = Page::with_size(200, 100);
        page.paint(&Paragraph::new("stamp"), (0, 0, 200, 100)).unwrap();
        for _ in 0..10 {
            page.layout().add(Paragraph::new("flowing"));
        }

        let pages = page.laid_out();
        assert!(pages.len() > 1);
        assert_eq!(pages[0][0], page.contents[0]);
        assert!(pages[1..].iter().all(|contents| !contents.contains(&page.contents[0])));
    }

    #[test]
    fn add_returns_the_shared_layout() {
        let mut page = Page::default();
        let style = ParagraphStyle::default();
        page.add("one", &style)
            .unwrap()
            .add(Paragraph::new("two"));
        page.add("three", &style).unwrap();

        let texts: Vec<&str> = page
            .layout()
            .paragraphs()
            .iter()
            .map(|p| p.text.as_str())
            .collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
    }

    #[test]
    fn paint_accepts_tuples() {
        let mut page = Page::default();
        page.paint(&Paragraph::new("hi"), (72, 72, 200, 50)).unwrap();
        assert_eq!(page.contents.len(), 1);
        assert!(page.paint(&Paragraph::new("hi"), vec![1, 2, 3]).is_err());
    }
}
