use crate::colour::Colour;
use crate::layout::Sides;
use crate::normalize::{normalize_colour, normalize_rectangle, Broadcast, ColourArg, RectArg};
use crate::{PDFError, Pt, Rect};
use pdf_writer::types::AnnotationType;
use pdf_writer::{Name, Pdf, Ref};

/// A `/Square` annotation: a rectangle drawn over the page by the PDF viewer,
/// optionally filled, that readers can select and comment on.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareAnnotation {
    pub bounding_box: Rect,
    /// Interior colour (`/IC`)
    pub fill_colour: Option<Colour>,
    /// Border colour (`/C`)
    pub stroke_colour: Option<Colour>,
    /// How far the drawn square is inset from the bounding box on each side (`/RD`)
    pub rectangle_difference: Option<Sides<Pt>>,
}

impl SquareAnnotation {
    /// Create an annotation covering `bounding_box`, which may be a [Rect] or an
    /// `(x, y, width, height)` tuple
    pub fn new<R: Into<RectArg>>(bounding_box: R) -> Result<SquareAnnotation, PDFError> {
        Ok(SquareAnnotation {
            bounding_box: normalize_rectangle(bounding_box)?,
            fill_colour: None,
            stroke_colour: None,
            rectangle_difference: None,
        })
    }

    pub fn fill_colour<C: Into<ColourArg>>(&mut self, colour: C) -> Result<&mut Self, PDFError> {
        self.fill_colour = Some(normalize_colour(colour)?);
        Ok(self)
    }

    pub fn stroke_colour<C: Into<ColourArg>>(&mut self, colour: C) -> Result<&mut Self, PDFError> {
        self.stroke_colour = Some(normalize_colour(colour)?);
        Ok(self)
    }

    /// One inset for all sides, or four in (top, right, bottom, left) order
    pub fn rectangle_difference<B: Into<Broadcast<Pt>>>(&mut self, difference: B) -> &mut Self {
        self.rectangle_difference = Some(difference.into().sides());
        self
    }

    pub(crate) fn write(&self, id: Ref, page_id: Ref, writer: &mut Pdf) {
        let mut annotation = writer.annotation(id);
        annotation.subtype(AnnotationType::Square);
        annotation.rect(self.bounding_box.into());
        annotation.pair(Name(b"P"), page_id);

        if let Some(colour) = self.stroke_colour {
            annotation
                .insert(Name(b"C"))
                .array()
                .items(colour_components(colour));
        }
        if let Some(colour) = self.fill_colour {
            annotation
                .insert(Name(b"IC"))
                .array()
                .items(colour_components(colour));
        }
        if let Some(difference) = self.rectangle_difference {
            annotation.insert(Name(b"RD")).array().items([
                difference.left.0,
                difference.top.0,
                difference.right.0,
                difference.bottom.0,
            ]);
        }
    }
}

/// Annotation colours are arrays whose length picks the colour space
fn colour_components(colour: Colour) -> Vec<f32> {
    match colour {
        Colour::RGB { r, g, b } => vec![r, g, b],
        Colour::CMYK { c, m, y, k } => vec![c, m, y, k],
        Colour::Grey { g } => vec![g],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::colours;

    #[test]
    fn colours_are_normalized_only_when_given() {
        let mut annotation = SquareAnnotation::new((10, 20, 30, 40)).unwrap();
        assert_eq!(annotation.bounding_box, Rect::new(10, 20, 30, 40));
        assert_eq!(annotation.fill_colour, None);
        assert_eq!(annotation.stroke_colour, None);

        annotation
            .fill_colour("red")
            .unwrap()
            .stroke_colour("#0000ff")
            .unwrap()
            .rectangle_difference(2);
        assert_eq!(annotation.fill_colour, Some(Colour::new_rgb_bytes(255, 0, 0)));
        assert_eq!(annotation.stroke_colour, Some(Colour::new_rgb_bytes(0, 0, 255)));
        assert_eq!(annotation.rectangle_difference, Some(Sides::all(Pt(2.0))));
    }

    #[test]
    fn bad_colours_are_reported() {
        let mut annotation = SquareAnnotation::new(Rect::new(0, 0, 1, 1)).unwrap();
        assert!(annotation.fill_colour("not a colour").is_err());
        assert!(annotation.fill_colour(colours::BLUE).is_ok());
    }

    #[test]
    fn written_dictionary() {
        let mut annotation = SquareAnnotation::new((0, 0, 10, 10)).unwrap();
        annotation
            .stroke_colour(colours::BLACK)
            .unwrap()
            .rectangle_difference((1, 2, 3, 4));

        let mut pdf = Pdf::new();
        annotation.write(Ref::new(1), Ref::new(2), &mut pdf);
        let bytes = pdf.finish();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Subtype /Square"));
        assert!(text.contains("/C [0]"));
        assert!(text.contains("/RD [4 1 2 3]"));
        assert!(!text.contains("/IC"));
    }
}
