use crate::{
    annotation::SquareAnnotation,
    font::Font,
    info::Info,
    page::{Page, PageContents},
    refs::{ObjectReferences, RefType},
    PDFError,
};
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Pdf, Ref};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

#[derive(Default)]
/// A document is the main object that stores all the contents of the PDF
/// then renders it out with a call to [Document::write] or [Document::save]
pub struct Document {
    pub info: Option<Info>,
    pub pages: Arena<Page>,
    pub page_order: Vec<Id<Page>>,
}

impl Document {
    pub fn new() -> Document {
        Document::default()
    }

    /// Sets information about the document. If not provided, no information block will be
    /// written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Add a Letter sized page in portrait orientation to the end of the document and
    /// return it for filling in
    pub fn add_page(&mut self) -> &mut Page {
        let id = self.push_page(Page::default());
        &mut self.pages[id]
    }

    /// Add a page to the end of the document, returning its ID. The ID stays valid
    /// when the page order changes.
    pub fn push_page(&mut self, page: Page) -> Id<Page> {
        let id = self.pages.alloc(page);
        self.page_order.push(id);
        id
    }

    /// Get the 0-based index of a page given its ID. Note that changing the page order
    /// after this call _will_ invalidate the returned page index
    pub fn index_of_page(&self, page: Id<Page>) -> Option<usize> {
        self.page_order.iter().position(|&p| p == page)
    }

    /// Get the page Id of a page at the given index. Returns [None] if
    /// `page_index >= self.page_order.len()`.
    pub fn id_of_page_index(&self, page_index: usize) -> Option<Id<Page>> {
        self.page_order.get(page_index).copied()
    }

    /// Write the entire document to the writer. Note: although this can write to arbitrary
    /// streams, the entire document is "rendered" in memory first. If you have a very large
    /// document, this could allocate a significant amount of memory.
    ///
    /// Page layouts are resolved here, so paragraphs can be added to pages right up until
    /// the document is written. A page whose paragraphs don't fit its column is followed by
    /// as many continuation pages as needed, of the same size. Every distinct font used on
    /// any page is embedded once and shared between pages.
    pub fn write<W: Write>(&self, mut w: W) -> Result<(), PDFError> {
        let mut refs = ObjectReferences::new();

        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        if let Some(info) = &self.info {
            info.write(&mut refs, &mut writer);
        }

        let pages = self
            .page_order
            .iter()
            .map(|&id| self.pages.get(id).ok_or(PDFError::PageMissing))
            .collect::<Result<Vec<&Page>, PDFError>>()?;
        // a page whose layout overflows is written as several pages
        let mut output: Vec<(&Page, &[SquareAnnotation])> = Vec::new();
        let mut contents: Vec<Vec<PageContents>> = Vec::new();
        for &page in pages.iter() {
            for (i, page_contents) in page.laid_out().into_iter().enumerate() {
                let annotations: &[SquareAnnotation] = if i == 0 { &page.annotations } else { &[] };
                output.push((page, annotations));
                contents.push(page_contents);
            }
        }

        let fonts = used_fonts(&contents);
        for (i, font) in fonts.iter().enumerate() {
            font.write(&mut refs, i, &mut writer);
        }

        let page_refs: Vec<Ref> = (0..output.len())
            .map(|i| refs.gen(RefType::Page(i)))
            .collect();

        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs.iter().copied());

        for (page_index, ((page, annotations), page_contents)) in
            output.iter().zip(contents.iter()).enumerate()
        {
            page.write(
                &mut refs,
                page_refs[page_index],
                page_index,
                page_tree_id,
                page_contents,
                annotations,
                &fonts,
                &mut writer,
            )?;
        }

        let mut catalog = writer.catalog(catalog_id);
        catalog.pages(page_tree_id);
        catalog.finish();

        log::debug!(
            "wrote document with {} pages and {} fonts",
            output.len(),
            fonts.len()
        );

        w.write_all(writer.finish().as_slice()).map_err(Into::into)
    }

    /// Render the document into memory
    pub fn to_bytes(&self) -> Result<Vec<u8>, PDFError> {
        let mut bytes = Vec::new();
        self.write(&mut bytes)?;
        Ok(bytes)
    }

    /// Write the document to a file, replacing the file if it already exists
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), PDFError> {
        let path = path.as_ref();
        let mut out = BufWriter::new(File::create(path)?);
        self.write(&mut out)?;
        out.flush()?;
        log::debug!("saved document to {}", path.display());
        Ok(())
    }
}

/// Every distinct font used by text on the given pages, in order of first use
fn used_fonts(contents: &[Vec<PageContents>]) -> Vec<Font> {
    let mut fonts: Vec<Font> = Vec::new();
    let spans = contents.iter().flatten().filter_map(|content| match content {
        PageContents::Text(spans) => Some(spans),
        PageContents::RawContent(_) => None,
    });
    for span in spans.flatten() {
        if !fonts.contains(&span.font.font) {
            fonts.push(span.font.font.clone());
        }
    }
    fonts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::StandardFont;
    use crate::layout::Paragraph;
    use crate::pagesize;
    use crate::{ParagraphStyle, Rect};

    #[test]
    fn add_page_defaults_to_letter() {
        let mut doc = Document::new();
        let page = doc.add_page();
        assert_eq!(page.media_box, Rect::new(0, 0, 612, 792));
        assert_eq!(doc.page_order.len(), 1);
    }

    #[test]
    fn pages_keep_their_order() {
        let mut doc = Document::new();
        let first = doc.push_page(Page::new(pagesize::A4, None));
        let second = doc.push_page(Page::default());
        assert_eq!(doc.index_of_page(first), Some(0));
        assert_eq!(doc.index_of_page(second), Some(1));
        assert_eq!(doc.id_of_page_index(1), Some(second));
        assert_eq!(doc.id_of_page_index(2), None);
    }

    #[test]
    fn fonts_are_shared_between_pages() {
        let mut doc = Document::new();
        let mut courier = ParagraphStyle::new();
        courier.font("Courier");

        doc.add_page().layout().add(Paragraph::new("one"));
        let page = doc.add_page();
        page.add("two", &courier).unwrap();
        page.add("three", &ParagraphStyle::new()).unwrap();

        let contents: Vec<Vec<PageContents>> = doc
            .page_order
            .iter()
            .flat_map(|&id| doc.pages[id].laid_out())
            .collect();
        assert_eq!(
            used_fonts(&contents),
            vec![
                Font::Standard(StandardFont::Helvetica),
                Font::Standard(StandardFont::Courier)
            ]
        );
    }

    #[test]
    fn writes_a_pdf() {
        let mut doc = Document::new();
        doc.add_page()
            .add("Hello, world!", &ParagraphStyle::new())
            .unwrap();
        let bytes = doc.to_bytes().unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        assert_eq!(bytes, doc.to_bytes().unwrap());
    }

    #[test]
    fn overflowing_pages_continue_on_new_pages() {
        let mut doc = Document::new();
        let page = doc.add_page();
        page.add_annotation(crate::SquareAnnotation::new((10, 10, 20, 20)).unwrap());
        for i in 0..80 {
            page.layout().add(Paragraph::new(format!("para{i:02}")));
        }
        let written = page.laid_out().len();
        assert!(written > 1);
        doc.add_page();

        let pdf = String::from_utf8_lossy(&doc.to_bytes().unwrap()).into_owned();
        assert!(pdf.contains(&format!("/Count {}", written + 1)));
        assert_eq!(pdf.matches("/Subtype /Square").count(), 1);
    }

    #[test]
    fn missing_pages_are_reported() {
        let mut doc = Document::new();
        let mut other = Document::new();
        let foreign = other.push_page(Page::default());
        doc.page_order.push(foreign);
        assert!(matches!(doc.to_bytes(), Err(PDFError::PageMissing)));
    }
}
