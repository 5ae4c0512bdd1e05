//! Content stream rendering for pages.

use crate::colour::Colour;
use crate::font::Font;
use crate::page::{PageContents, SpanFont, SpanLayout};
use pdf_writer::Content;
use std::io::Write;

/// Renders page contents to a PDF content stream, converting high-level content
/// items into low-level PDF operators. `fonts` is the document's font table; each
/// span refers to its font by position in that table (`/F{index}`).
#[allow(clippy::write_with_newline)]
pub(crate) fn render_contents(
    contents: &[PageContents],
    fonts: &[Font],
) -> Result<Vec<u8>, std::io::Error> {
    if contents.is_empty() {
        return Ok(Vec::default());
    }

    let mut content: Vec<u8> = Vec::default();

    for page_content in contents.iter() {
        match page_content {
            PageContents::Text(spans) => {
                render_text_spans(&mut content, spans, fonts)?;
            }
            PageContents::RawContent(c) => {
                write!(&mut content, "q\n")?;
                content.write_all(c.as_slice())?;
                write!(&mut content, "\nQ\n")?;
            }
        }
    }

    Ok(content)
}

fn font_index(fonts: &[Font], font: &Font) -> Result<usize, std::io::Error> {
    fonts.iter().position(|f| f == font).ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("font {} is missing from the document", font.name()),
        )
    })
}

#[allow(clippy::write_with_newline)]
fn render_text_spans(
    content: &mut Vec<u8>,
    spans: &[SpanLayout],
    fonts: &[Font],
) -> Result<(), std::io::Error> {
    let Some(first) = spans.first() else {
        return Ok(());
    };

    write!(content, "q\n")?;

    let mut current_font: &SpanFont = &first.font;
    let mut current_colour: Colour = first.colour;

    write!(
        content,
        "/F{} {} Tf\n",
        font_index(fonts, &current_font.font)?,
        current_font.size
    )?;
    write_colour(content, current_colour)?;

    for span in spans.iter() {
        if span.font != *current_font {
            current_font = &span.font;
            write!(
                content,
                "/F{} {} Tf\n",
                font_index(fonts, &current_font.font)?,
                current_font.size
            )?;
        }
        if span.colour != current_colour {
            current_colour = span.colour;
            write_colour(content, current_colour)?;
        }

        write!(content, "BT\n")?;
        write!(content, "{} {} Td\n", span.coords.0, span.coords.1)?;
        content.write_all(&current_font.font.encode(&span.text))?;
        write!(content, " Tj\n")?;
        write!(content, "ET\n")?;
    }

    write!(content, "Q\n")?;
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn write_colour(content: &mut Vec<u8>, colour: Colour) -> Result<(), std::io::Error> {
    match colour {
        Colour::RGB { r, g, b } => write!(content, "{r} {g} {b} rg\n"),
        Colour::CMYK { c, m, y, k } => write!(content, "{c} {m} {y} {k} k\n"),
        Colour::Grey { g } => write!(content, "{g} g\n"),
    }
}

pub(crate) fn set_fill_colour(content: &mut Content, colour: Colour) {
    match colour {
        Colour::RGB { r, g, b } => content.set_fill_rgb(r, g, b),
        Colour::CMYK { c, m, y, k } => content.set_fill_cmyk(c, m, y, k),
        Colour::Grey { g } => content.set_fill_gray(g),
    };
}

pub(crate) fn set_stroke_colour(content: &mut Content, colour: Colour) {
    match colour {
        Colour::RGB { r, g, b } => content.set_stroke_rgb(r, g, b),
        Colour::CMYK { c, m, y, k } => content.set_stroke_cmyk(c, m, y, k),
        Colour::Grey { g } => content.set_stroke_gray(g),
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::colours;
    use crate::font::StandardFont;
    use crate::units::Pt;

    fn span(text: &str, font: Font, colour: Colour) -> SpanLayout {
        SpanLayout {
            text: text.to_string(),
            font: SpanFont {
                font,
                size: Pt(12.0),
            },
            colour,
            coords: (Pt(10.0), Pt(20.0)),
        }
    }

    #[test]
    fn spans_switch_fonts_and_colours_only_when_needed() {
        let helvetica = Font::Standard(StandardFont::Helvetica);
        let courier = Font::Standard(StandardFont::Courier);
        let fonts = vec![helvetica.clone(), courier.clone()];
        let contents = vec![PageContents::Text(vec![
            span("a", helvetica.clone(), colours::BLACK),
            span("b", helvetica, colours::BLACK),
            span("c", courier, colours::RED),
        ])];

        let rendered = String::from_utf8(render_contents(&contents, &fonts).unwrap()).unwrap();
        assert_eq!(rendered.matches(" Tf\n").count(), 2);
        assert!(rendered.contains("/F0 12 Tf\n0 g\n"));
        assert!(rendered.contains("/F1 12 Tf\n1 0 0 rg\n"));
        assert!(rendered.contains("BT\n10 20 Td\n(a) Tj\nET\n"));
    }

    #[test]
    fn unknown_fonts_are_an_error() {
        let contents = vec![PageContents::Text(vec![span(
            "a",
            Font::Standard(StandardFont::Symbol),
            colours::BLACK,
        )])];
        assert!(render_contents(&contents, &[]).is_err());
    }
}
