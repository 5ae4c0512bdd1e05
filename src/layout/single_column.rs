use super::Paragraph;
use crate::page::PageContents;
use crate::rect::Rect;
use crate::units::Pt;

/// Stacks paragraphs from the top of a column downwards. Adjacent vertical margins
/// collapse into the larger of the two. When the column is full, the remaining
/// paragraphs continue at the top of the same column on a new page.
///
/// Paragraphs are only laid out when the page is written, so they can be added in
/// any order relative to other page contents.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SingleColumnLayout {
    paragraphs: Vec<Paragraph>,
}

impl SingleColumnLayout {
    pub fn new() -> SingleColumnLayout {
        SingleColumnLayout::default()
    }

    /// Append a paragraph below the previous one, returning the layout so calls
    /// can be chained
    pub fn add(&mut self, paragraph: Paragraph) -> &mut Self {
        self.paragraphs.push(paragraph);
        self
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        self.paragraphs.as_slice()
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Lay the paragraphs out in `column`, one entry per page. Paragraphs that
    /// don't fit below the previous one start a new page; a paragraph taller than
    /// the whole column is split between lines and continues on the next page.
    pub(crate) fn layout(&self, column: Rect) -> Vec<Vec<PageContents>> {
        let mut pages: Vec<Vec<PageContents>> = vec![Vec::new()];
        let mut cursor = column.y2;
        let mut previous_bottom: Option<Pt> = None;

        for paragraph in self.paragraphs.iter() {
            let margin = paragraph.resolved_margin();
            let x1 = column.x1 + margin.left;
            let x2 = column.x2 - margin.right;
            let mut remaining = Some(paragraph.measure(x2 - x1));

            while let Some(laid_out) = remaining.take() {
                let gap = match previous_bottom {
                    Some(bottom) => bottom.max(margin.top),
                    None => margin.top,
                };
                let top = cursor - gap;

                let (laid_out, rest) = if top - laid_out.height >= column.y1 {
                    (laid_out, None)
                } else if previous_bottom.is_some() {
                    // retry at the top of a fresh page
                    pages.push(Vec::new());
                    cursor = column.y2;
                    previous_bottom = None;
                    remaining = Some(laid_out);
                    continue;
                } else {
                    paragraph.split(laid_out, top - column.y1)
                };

                let bottom = top - laid_out.height;
                if let Some(page) = pages.last_mut() {
                    page.extend(paragraph.place(
                        Rect {
                            x1,
                            y1: bottom,
                            x2,
                            y2: top,
                        },
                        laid_out,
                    ));
                }
                cursor = bottom;
                previous_bottom = Some(margin.bottom);

                if rest.is_some() {
                    pages.push(Vec::new());
                    cursor = column.y2;
                    previous_bottom = None;
                    remaining = rest;
                }
            }
        }

        if pages.len() > 1 {
            log::debug!(
                "{} paragraphs flowed onto {} pages",
                self.paragraphs.len(),
                pages.len()
            );
        }
        pages
    }
}
