use super::{Corners, HorizontalAlignment, Sides, TextAlignment, VerticalAlignment};
use crate::colour::{colours, Colour};
use crate::content::{set_fill_colour, set_stroke_colour};
use crate::font::Font;
use crate::hyphenate::Hyphenation;
use crate::page::{PageContents, SpanFont, SpanLayout};
use crate::rect::Rect;
use crate::units::Pt;
use pdf_writer::Content;
use std::collections::VecDeque;

const TABSIZE: usize = 4;

/// Control point distance for approximating a quarter circle with a cubic bezier
const KAPPA: f32 = 0.552_284_8;

/// A block of text in a single font, size and colour, laid out in lines within a
/// box that can have padding, a background and (optionally rounded) borders.
///
/// All fields are in their canonical form; see
/// [`ParagraphStyle`](crate::ParagraphStyle) for a builder that accepts looser
/// arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub text: String,
    /// Break lines at `\n`; otherwise newlines are treated like spaces
    pub respect_newlines_in_text: bool,
    /// Keep runs of spaces; otherwise all whitespace between words collapses to a
    /// single space
    pub respect_spaces_in_text: bool,
    pub font: Font,
    pub font_size: Pt,
    pub text_alignment: TextAlignment,
    pub vertical_alignment: VerticalAlignment,
    pub horizontal_alignment: HorizontalAlignment,
    pub font_colour: Colour,
    pub border: Sides<bool>,
    pub border_radius: Corners<Pt>,
    pub border_colour: Colour,
    pub border_width: Pt,
    pub padding: Sides<Pt>,
    /// `None` lets the layout decide
    pub margin: Sides<Option<Pt>>,
    /// When set, lines are `font_size + fixed_leading` apart
    pub fixed_leading: Option<Pt>,
    /// When set (and `fixed_leading` isn't), lines are `font_size * multiplied_leading` apart
    pub multiplied_leading: Option<f32>,
    pub background_colour: Option<Colour>,
    pub hyphenation: Option<Hyphenation>,
}

/// A single laid out line: the words on it along with their widths
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct Line {
    words: Vec<(String, Pt)>,
    /// Width of the words separated by single spaces
    width: Pt,
    /// The line ends a block of text (the end of the paragraph or a hard break)
    last: bool,
}

impl Line {
    fn push(&mut self, word: String, width: Pt, gap: Pt) {
        self.width += gap + width;
        self.words.push((word, width));
    }

    fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn text(&self) -> String {
        self.words
            .iter()
            .map(|(word, _)| word.as_str())
            .collect::<Vec<&str>>()
            .join(" ")
    }
}

/// The result of measuring a paragraph against an available width
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ParagraphBox {
    pub lines: Vec<Line>,
    /// Outer width, including padding
    pub width: Pt,
    /// Outer height, including padding
    pub height: Pt,
}

impl Paragraph {
    /// Create a paragraph with the default styling: 12pt black Helvetica, left
    /// aligned, positioned at the top left, with no border, padding or background
    pub fn new<S: ToString>(text: S) -> Paragraph {
        Paragraph {
            text: text.to_string(),
            respect_newlines_in_text: false,
            respect_spaces_in_text: false,
            font: Font::default(),
            font_size: Pt(12.0),
            text_alignment: TextAlignment::Left,
            vertical_alignment: VerticalAlignment::Top,
            horizontal_alignment: HorizontalAlignment::Left,
            font_colour: colours::BLACK,
            border: Sides::all(false),
            border_radius: Corners::all(Pt(0.0)),
            border_colour: colours::BLACK,
            border_width: Pt(1.0),
            padding: Sides::all(Pt(0.0)),
            margin: Sides::all(None),
            fixed_leading: None,
            multiplied_leading: None,
            background_colour: None,
            hyphenation: None,
        }
    }

    /// Distance between consecutive baselines
    pub fn line_height(&self) -> Pt {
        match (self.fixed_leading, self.multiplied_leading) {
            (Some(leading), _) => self.font_size + leading,
            (None, Some(factor)) => self.font_size * factor,
            (None, None) => self.font.line_height(self.font_size),
        }
    }

    /// The margins with layout defaults filled in: half the font size above and
    /// below, nothing to the sides
    pub fn resolved_margin(&self) -> Sides<Pt> {
        let vertical = self.font_size * 0.5;
        Sides {
            top: self.margin.top.unwrap_or(vertical),
            right: self.margin.right.unwrap_or_default(),
            bottom: self.margin.bottom.unwrap_or(vertical),
            left: self.margin.left.unwrap_or_default(),
        }
    }

    fn text_width(&self, text: &str) -> Pt {
        self.font.width_of_text(text, self.font_size)
    }

    /// Splits the text into blocks separated by hard line breaks, and each block
    /// into words
    fn blocks(&self) -> Vec<Vec<String>> {
        let text = self
            .text
            .replace('\t', &" ".repeat(TABSIZE))
            .replace("\r\n", "\n")
            .replace('\r', "\n");

        let blocks: Vec<&str> = if self.respect_newlines_in_text {
            text.split('\n').collect()
        } else {
            vec![text.as_str()]
        };

        blocks
            .into_iter()
            .map(|block| {
                if self.respect_spaces_in_text {
                    // every extra space becomes an empty word, so it keeps its width
                    block
                        .replace('\n', " ")
                        .split(' ')
                        .map(str::to_string)
                        .collect()
                } else {
                    block.split_whitespace().map(str::to_string).collect()
                }
            })
            .collect()
    }

    /// Split a word at the last hyphenation point where the first half (plus a hyphen)
    /// still fits in `available`
    fn hyphenate_to_fit(&self, word: &str, available: Pt) -> Option<(String, String)> {
        let hyphenation = self.hyphenation.as_ref()?;
        let hyphen = self.text_width("-");
        hyphenation
            .break_points(word)
            .into_iter()
            .rev()
            .find(|&at| self.text_width(&word[..at]) + hyphen <= available)
            .map(|at| (format!("{}-", &word[..at]), word[at..].to_string()))
    }

    /// Split a word at the last character that fits. At least one character is
    /// always taken so that layout makes progress on very narrow boxes.
    fn split_to_fit(&self, word: &str, available: Pt) -> (String, String) {
        let mut width = Pt(0.0);
        let mut end = 0;
        for (i, ch) in word.char_indices() {
            let advance = self.font.char_width(ch, self.font_size);
            if end > 0 && width + advance > available {
                break;
            }
            width += advance;
            end = i + ch.len_utf8();
        }
        (word[..end].to_string(), word[end..].to_string())
    }

    /// Greedily fill lines of at most `max_width`. Words that don't fit move to
    /// the next line, hyphenated first if a dictionary is available; words wider
    /// than a whole line are broken between characters.
    pub(crate) fn break_lines(&self, max_width: Pt) -> Vec<Line> {
        let space = self.text_width(" ");
        let mut lines: Vec<Line> = Vec::new();

        for words in self.blocks() {
            let mut current = Line::default();
            let mut queue: VecDeque<String> = words.into();

            while let Some(word) = queue.pop_front() {
                let width = self.text_width(&word);
                let gap = if current.is_empty() { Pt(0.0) } else { space };
                if current.width + gap + width <= max_width {
                    current.push(word, width, gap);
                    continue;
                }

                if let Some((head, tail)) =
                    self.hyphenate_to_fit(&word, max_width - current.width - gap)
                {
                    let head_width = self.text_width(&head);
                    current.push(head, head_width, gap);
                    lines.push(std::mem::take(&mut current));
                    queue.push_front(tail);
                    continue;
                }

                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    queue.push_front(word);
                    continue;
                }

                let (head, tail) = self.split_to_fit(&word, max_width);
                let head_width = self.text_width(&head);
                current.push(head, head_width, Pt(0.0));
                lines.push(std::mem::take(&mut current));
                if !tail.is_empty() {
                    queue.push_front(tail);
                }
            }

            current.last = true;
            lines.push(current);
        }

        log::trace!(
            "broke {} characters into {} lines of at most {max_width}",
            self.text.len(),
            lines.len()
        );
        lines
    }

    /// Lay the paragraph out against an available width. Left aligned paragraphs
    /// shrink to their widest line; all others take the full width.
    pub(crate) fn measure(&self, available_width: Pt) -> ParagraphBox {
        let inner = (available_width - self.padding.left - self.padding.right).max(Pt(0.0));
        let lines = self.break_lines(inner);

        let content_width = match self.text_alignment {
            TextAlignment::Left => lines.iter().map(|line| line.width).fold(Pt(0.0), Pt::max),
            _ => inner,
        };

        ParagraphBox {
            width: content_width + self.padding.left + self.padding.right,
            height: self.line_height() * lines.len() as f32 + self.padding.top + self.padding.bottom,
            lines,
        }
    }

    /// Split a measured box so that the first part is at most `available_height`
    /// tall. The first part always keeps at least one line; the second part is
    /// `None` when everything fits.
    pub(crate) fn split(
        &self,
        mut laid_out: ParagraphBox,
        available_height: Pt,
    ) -> (ParagraphBox, Option<ParagraphBox>) {
        let line_height = self.line_height();
        let padding = self.padding.top + self.padding.bottom;
        let room = available_height - padding;
        let fit = if line_height > Pt(0.0) {
            (room.0 / line_height.0).floor().max(1.0) as usize
        } else {
            laid_out.lines.len()
        };
        if fit >= laid_out.lines.len() {
            return (laid_out, None);
        }

        let rest = laid_out.lines.split_off(fit);
        let head = ParagraphBox {
            width: laid_out.width,
            height: line_height * fit as f32 + padding,
            lines: laid_out.lines,
        };
        let tail = ParagraphBox {
            width: laid_out.width,
            height: line_height * rest.len() as f32 + padding,
            lines: rest,
        };
        (head, Some(tail))
    }

    /// Lay out and draw the paragraph within `rect`, positioning its box according
    /// to the vertical and horizontal alignment
    pub fn paint(&self, rect: Rect) -> Vec<PageContents> {
        let laid_out = self.measure(rect.width());
        self.place(rect, laid_out)
    }

    pub(crate) fn place(&self, rect: Rect, laid_out: ParagraphBox) -> Vec<PageContents> {
        let x1 = match self.horizontal_alignment {
            HorizontalAlignment::Left => rect.x1,
            HorizontalAlignment::Centered => rect.x1 + (rect.width() - laid_out.width) / 2.0,
            HorizontalAlignment::Right => rect.x2 - laid_out.width,
        };
        let y2 = match self.vertical_alignment {
            VerticalAlignment::Top => rect.y2,
            VerticalAlignment::Middle => rect.y2 - (rect.height() - laid_out.height) / 2.0,
            VerticalAlignment::Bottom => rect.y1 + laid_out.height,
        };
        let bounds = Rect {
            x1,
            y1: y2 - laid_out.height,
            x2: x1 + laid_out.width,
            y2,
        };

        let mut contents: Vec<PageContents> = Vec::new();
        if let Some(colour) = self.background_colour {
            contents.push(PageContents::RawContent(self.background(bounds, colour)));
        }
        if self.border.any() && self.border_width > Pt(0.0) {
            contents.push(PageContents::RawContent(self.borders(bounds)));
        }

        let text_box = bounds.inset(
            self.padding.top,
            self.padding.right,
            self.padding.bottom,
            self.padding.left,
        );
        let spans = self.spans(&laid_out.lines, text_box);
        if !spans.is_empty() {
            contents.push(PageContents::Text(spans));
        }
        contents
    }

    fn spans(&self, lines: &[Line], text_box: Rect) -> Vec<SpanLayout> {
        let line_height = self.line_height();
        let ascent = self.font.ascent(self.font_size);
        let descent = self.font.descent(self.font_size);
        let half_leading = (line_height - (ascent - descent)) / 2.0;

        let span = |text: String, x: Pt, y: Pt| SpanLayout {
            text,
            font: SpanFont {
                font: self.font.clone(),
                size: self.font_size,
            },
            colour: self.font_colour,
            coords: (x, y),
        };

        let mut spans: Vec<SpanLayout> = Vec::new();
        let mut top = text_box.y2;
        for line in lines.iter() {
            let baseline = top - half_leading - ascent;
            let slack = text_box.width() - line.width;

            match self.text_alignment {
                TextAlignment::Justified if !line.last && line.words.len() > 1 => {
                    let words_width: Pt = line.words.iter().map(|(_, width)| *width).sum();
                    let gap =
                        (text_box.width() - words_width) / (line.words.len() - 1) as f32;
                    let mut x = text_box.x1;
                    for (word, width) in line.words.iter() {
                        if !word.is_empty() {
                            spans.push(span(word.clone(), x, baseline));
                        }
                        x += *width + gap;
                    }
                }
                alignment => {
                    let x = match alignment {
                        TextAlignment::Centered => text_box.x1 + slack / 2.0,
                        TextAlignment::Right => text_box.x1 + slack,
                        _ => text_box.x1,
                    };
                    let text = line.text();
                    if !text.trim().is_empty() {
                        spans.push(span(text, x, baseline));
                    }
                }
            }

            top -= line_height;
        }
        spans
    }

    fn corner_radii(&self, bounds: Rect) -> Corners<Pt> {
        let limit = bounds.width().min(bounds.height()) / 2.0;
        self.border_radius.map(|r| r.max(Pt(0.0)).min(limit))
    }

    fn background(&self, bounds: Rect, colour: Colour) -> Vec<u8> {
        let mut content = Content::new();
        set_fill_colour(&mut content, colour);
        trace_rounded_rect(&mut content, bounds, self.corner_radii(bounds));
        content.fill_nonzero();
        content.finish()
    }

    fn borders(&self, bounds: Rect) -> Vec<u8> {
        let mut content = Content::new();
        set_stroke_colour(&mut content, self.border_colour);
        content.set_line_width(self.border_width.0);

        let radii = self.corner_radii(bounds);
        if self.border.every() {
            trace_rounded_rect(&mut content, bounds, radii);
        } else {
            trace_border_sides(&mut content, bounds, radii, self.border);
        }
        content.stroke();
        content.finish()
    }
}

/// Add a closed rectangle with rounded corners to the current path, starting at the
/// top left and going clockwise
fn trace_rounded_rect(content: &mut Content, bounds: Rect, radii: Corners<Pt>) {
    let (x1, y1, x2, y2) = (bounds.x1.0, bounds.y1.0, bounds.x2.0, bounds.y2.0);
    let (tl, tr, br, bl) = (
        radii.top_left.0,
        radii.top_right.0,
        radii.bottom_right.0,
        radii.bottom_left.0,
    );

    content.move_to(x1 + tl, y2);
    content.line_to(x2 - tr, y2);
    if tr > 0.0 {
        content.cubic_to(x2 - tr + KAPPA * tr, y2, x2, y2 - tr + KAPPA * tr, x2, y2 - tr);
    }
    content.line_to(x2, y1 + br);
    if br > 0.0 {
        content.cubic_to(x2, y1 + br - KAPPA * br, x2 - br + KAPPA * br, y1, x2 - br, y1);
    }
    content.line_to(x1 + bl, y1);
    if bl > 0.0 {
        content.cubic_to(x1 + bl - KAPPA * bl, y1, x1, y1 + bl - KAPPA * bl, x1, y1 + bl);
    }
    content.line_to(x1, y2 - tl);
    if tl > 0.0 {
        content.cubic_to(x1, y2 - tl + KAPPA * tl, x1 + tl - KAPPA * tl, y2, x1 + tl, y2);
    }
    content.close_path();
}

/// Add the requested sides of a box to the current path as open segments. A corner
/// is only rounded when both of its sides are drawn.
fn trace_border_sides(content: &mut Content, bounds: Rect, radii: Corners<Pt>, sides: Sides<bool>) {
    let (x1, y1, x2, y2) = (bounds.x1.0, bounds.y1.0, bounds.x2.0, bounds.y2.0);
    let rounded = |radius: Pt, a: bool, b: bool| if a && b { radius.0 } else { 0.0 };
    let tl = rounded(radii.top_left, sides.top, sides.left);
    let tr = rounded(radii.top_right, sides.top, sides.right);
    let br = rounded(radii.bottom_right, sides.bottom, sides.right);
    let bl = rounded(radii.bottom_left, sides.bottom, sides.left);

    if sides.top {
        content.move_to(x1 + tl, y2);
        content.line_to(x2 - tr, y2);
        if tr > 0.0 {
            content.cubic_to(x2 - tr + KAPPA * tr, y2, x2, y2 - tr + KAPPA * tr, x2, y2 - tr);
        }
    }
    if sides.right {
        content.move_to(x2, y2 - tr);
        content.line_to(x2, y1 + br);
        if br > 0.0 {
            content.cubic_to(x2, y1 + br - KAPPA * br, x2 - br + KAPPA * br, y1, x2 - br, y1);
        }
    }
    if sides.bottom {
        content.move_to(x2 - br, y1);
        content.line_to(x1 + bl, y1);
        if bl > 0.0 {
            content.cubic_to(x1 + bl - KAPPA * bl, y1, x1, y1 + bl - KAPPA * bl, x1, y1 + bl);
        }
    }
    if sides.left {
        content.move_to(x1, y1 + bl);
        content.line_to(x1, y2 - tl);
        if tl > 0.0 {
            content.cubic_to(x1, y2 - tl + KAPPA * tl, x1 + tl - KAPPA * tl, y2, x1 + tl, y2);
        }
    }
}
