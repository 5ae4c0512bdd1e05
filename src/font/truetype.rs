use crate::{
    refs::{ObjectReferences, RefType},
    PDFError, Pt,
};
use owned_ttf_parser::{AsFaceRef, OwnedFace};
use pdf_writer::{
    types::{FontFlags, SystemInfo},
    Finish, Name, Pdf, Ref, Str,
};
use std::collections::HashMap;
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

/// A parsed TrueType / OpenType font. These fonts are embedded in their entirety in
/// the generated PDF, so large fonts may dramatically increase the size of the
/// generated PDF.
pub struct TrueTypeFont {
    pub face: OwnedFace,
    /// Where the font was loaded from, if it came from disk
    pub source: Option<PathBuf>,
}

impl TrueTypeFont {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<TrueTypeFont, PDFError> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(TrueTypeFont { face, source: None })
    }

    /// Read and parse a font file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<TrueTypeFont, PDFError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        log::debug!("loaded font file {} ({} bytes)", path.display(), bytes.len());
        let mut font = TrueTypeFont::load(bytes)?;
        font.source = Some(path.to_path_buf());
        Ok(font)
    }

    /// The raw font file
    pub fn data(&self) -> &[u8] {
        self.face.as_slice()
    }

    fn name_entry(&self, name_id: u16) -> Option<String> {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == name_id && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// Obtain the full name of the font
    pub fn name(&self) -> Option<String> {
        self.name_entry(owned_ttf_parser::name_id::FULL_NAME)
    }

    /// Obtain the family name of the font
    pub fn family(&self) -> Option<String> {
        self.name_entry(owned_ttf_parser::name_id::FAMILY)
    }

    fn scaling(&self, size: Pt) -> Pt {
        size / self.face.as_face_ref().units_per_em() as f32
    }

    /// Calculate the ascent (distance from the baseline to the top of the font) for the given font size
    pub fn ascent(&self, size: Pt) -> Pt {
        self.scaling(size) * self.face.as_face_ref().ascender() as f32
    }

    /// Calculate the descent (distance from the baseline to the bottom of the font) for the given font size.
    /// Note: this is usually negative
    pub fn descent(&self, size: Pt) -> Pt {
        self.scaling(size) * self.face.as_face_ref().descender() as f32
    }

    /// Calculate the default line height of the font for the given size. The returned value is
    /// how much to vertically offset a second row of text below a first row of text.
    pub fn line_height(&self, size: Pt) -> Pt {
        let face = self.face.as_face_ref();
        self.scaling(size) * (face.line_gap() as f32 + face.ascender() as f32 - face.descender() as f32)
    }

    /// Obtain the weight of the font. Numerical values generally map as follows:
    ///
    /// * 100: Thin (Hairline)
    /// * 400: Normal
    /// * 700: Bold
    /// * 900: Black (Heavy)
    pub fn weight(&self) -> u16 {
        self.face.as_face_ref().weight().to_number()
    }

    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face.as_face_ref().glyph_index(ch).map(|i| i.0)
    }

    pub fn replacement_glyph_id(&self) -> Option<u16> {
        self.face.as_face_ref().glyph_index('\u{FFFD}').map(|i| i.0)
    }

    /// The glyph used to draw `ch`, falling back to the replacement character, then
    /// `?`, then the `.notdef` glyph
    fn glyph_or_fallback(&self, ch: char) -> u16 {
        self.glyph_id(ch)
            .or_else(|| self.replacement_glyph_id())
            .or_else(|| self.glyph_id('?'))
            .unwrap_or(0)
    }

    /// Horizontal advance of a character at the given size
    pub fn char_width(&self, ch: char, size: Pt) -> Pt {
        let gid = owned_ttf_parser::GlyphId(self.glyph_or_fallback(ch));
        self.scaling(size)
            * self
                .face
                .as_face_ref()
                .glyph_hor_advance(gid)
                .unwrap_or_default() as f32
    }

    /// Encode text as a hex string of glyph ids, for use with `Identity-H`
    pub(crate) fn encode(&self, text: &str) -> Vec<u8> {
        let mut out: Vec<u8> = Vec::with_capacity(text.len() * 4 + 2);
        out.push(b'<');
        for ch in text.chars() {
            // writing into a Vec can't fail
            let _ = write!(&mut out, "{:04x}", self.glyph_or_fallback(ch));
        }
        out.push(b'>');
        out
    }

    fn write_cid(&self, refs: &mut ObjectReferences, font_index: usize, writer: &mut Pdf) -> Ref {
        let font_descriptor_id = self.write_descriptor(refs, font_index, writer);

        let id = refs.gen(RefType::CidFont(font_index));

        let mut cid_font = writer.cid_font(id);
        cid_font.subtype(pdf_writer::types::CidFontType::Type2);
        cid_font.base_font(Name(format!("F{font_index}").as_bytes()));
        cid_font.system_info(SystemInfo {
            registry: Str(b"Adobe"),
            ordering: Str(b"Identity"),
            supplement: 0,
        });
        cid_font.font_descriptor(font_descriptor_id);

        let ids = self.glyph_ids();
        let ids_augmented = self.glyphs_sizing(&ids);

        let scaling = 1000.0 / self.face.as_face_ref().units_per_em() as f32;

        // find the most popular width to use as the default
        // <width, count>
        let mut widths_counts: HashMap<u16, usize> = HashMap::new();
        for (_, (_, (width, _))) in ids_augmented.iter() {
            *widths_counts.entry(*width).or_insert(0) += 1;
        }
        let most_common_width = widths_counts
            .iter()
            .max_by_key(|&(&sz, &count)| (count, sz))
            .map(|(&sz, _)| sz as f32 * scaling)
            .unwrap_or(1000.0);

        let mut id_widths: Vec<(u16, f32)> = ids_augmented
            .iter()
            .map(|(&cid, &(_, (width, _)))| (cid, width as f32 * scaling))
            .collect();
        id_widths.sort_by_key(|(id, _)| *id);

        let mut widths = cid_font.widths();
        widths.consecutive(0, [1000.0]);

        // group consecutive glyph ids into runs
        let mut runs: Vec<(u16, Vec<f32>)> = Vec::new();
        for (cid, width) in id_widths.into_iter() {
            match runs.last_mut() {
                Some((start, run)) if *start as usize + run.len() == cid as usize => {
                    run.push(width)
                }
                _ => runs.push((cid, vec![width])),
            }
        }
        for (start, run) in runs.into_iter() {
            widths.consecutive(start, run);
        }

        widths.finish();

        cid_font.default_width(most_common_width);
        cid_font.cid_to_gid_map_predefined(Name(b"Identity"));

        id
    }

    fn write_font_data(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        writer: &mut Pdf,
    ) -> Ref {
        let id = refs.gen(RefType::FontData(font_index));

        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
            self.data(),
            miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
        );
        let mut stream = writer.stream(id, compressed.as_slice());
        stream.filter(pdf_writer::Filter::FlateDecode);
        stream.pair(Name(b"Length1"), self.data().len() as i32);

        id
    }

    fn write_descriptor(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        writer: &mut Pdf,
    ) -> Ref {
        let font_data_stream_id = self.write_font_data(refs, font_index, writer);

        let gids = self.glyph_ids();
        let gids_augmented = self.glyphs_sizing(&gids);

        let max_width = gids_augmented
            .values()
            .map(|&(_, (w, _))| w)
            .max()
            .unwrap_or_default();
        let max_height = gids_augmented
            .values()
            .map(|&(_, (_, h))| h)
            .max()
            .unwrap_or_default();
        let sum_width: usize = gids_augmented.values().map(|&(_, (w, _))| w as usize).sum();
        let avg_width = sum_width as f32 / gids_augmented.len().max(1) as f32;

        let id = refs.gen(RefType::FontDescriptor(font_index));
        let face = self.face.as_face_ref();
        let fallback_name = format!("F{font_index}");

        let mut descriptor = writer.font_descriptor(id);
        descriptor.name(Name(
            self.name()
                .map(|name| name.replace(' ', ""))
                .unwrap_or_else(|| fallback_name.clone())
                .as_bytes(),
        ));
        descriptor.family(Str(self
            .family()
            .unwrap_or_else(|| fallback_name.clone())
            .as_bytes()));
        descriptor.weight(face.weight().to_number());

        let mut flags: FontFlags = FontFlags::empty();
        if face.is_monospaced() {
            flags.set(FontFlags::FIXED_PITCH, true);
        }
        if face.is_italic() {
            flags.set(FontFlags::ITALIC, true);
        }
        flags.set(FontFlags::NON_SYMBOLIC, true);
        descriptor.flags(flags);

        let scaling = 1000.0 / face.units_per_em() as f32;
        descriptor.bbox(pdf_writer::Rect {
            x1: 0.0,
            y1: 0.0,
            x2: max_width as f32 * scaling,
            y2: max_height as f32 * scaling,
        });
        descriptor.italic_angle(face.italic_angle());
        descriptor.ascent(face.ascender() as f32 * scaling);
        descriptor.descent(face.descender() as f32 * scaling);
        descriptor.leading(face.line_gap() as f32 * scaling);
        descriptor.cap_height(
            face.capital_height()
                .map(|h| h as f32 * scaling)
                .unwrap_or(1000.0),
        );
        descriptor.x_height(
            face.x_height()
                .unwrap_or_else(|| face.capital_height().unwrap_or_default()) as f32
                * scaling,
        );
        // TODO: derive StemV from the font's OS/2 weight class instead of a constant
        descriptor.stem_v(80.0);
        descriptor.avg_width(avg_width * scaling);
        descriptor.max_width(max_width as f32 * scaling);
        descriptor.missing_width(max_width as f32 * scaling);

        descriptor.font_file2(font_data_stream_id);

        id
    }

    fn glyph_ids(&self) -> HashMap<u16, char> {
        let mut map: HashMap<u16, char> = HashMap::new();

        let Some(cmap) = self.face.as_face_ref().tables().cmap else {
            return map;
        };

        for subtable in cmap.subtables.into_iter().filter(|table| table.is_unicode()) {
            subtable.codepoints(|codepoint: u32| {
                if let Ok(ch) = char::try_from(codepoint) {
                    if let Some(index) = subtable.glyph_index(codepoint).filter(|index| index.0 > 0)
                    {
                        map.entry(index.0)
                            .and_modify(|existing| *existing = (*existing).min(ch))
                            .or_insert(ch);
                    }
                }
            });
        }

        map
    }

    fn glyphs_sizing(&self, ids: &HashMap<u16, char>) -> HashMap<u16, (char, (u16, i16))> {
        let face = self.face.as_face_ref();
        let mut ids_augmented: HashMap<u16, (char, (u16, i16))> = HashMap::new();
        for (&id, &ch) in ids.iter() {
            if let Some(gid) = face.glyph_index(ch) {
                if let Some(h_advance) = face.glyph_hor_advance(gid) {
                    let height = face
                        .glyph_bounding_box(gid)
                        .map(|bbox| bbox.y_max - bbox.y_min - face.descender())
                        .unwrap_or(1000);
                    ids_augmented.insert(id, (ch, (h_advance, height)));
                }
            }
        }
        ids_augmented
    }

    fn write_to_unicode(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        writer: &mut Pdf,
    ) -> Ref {
        let id = refs.gen(RefType::ToUnicode(font_index));

        let mut map: String = r#"/CIDInit /ProcSet findresource begin
12 dict begin
begincmap
/CIDSystemInfo
<< /Registry (Adobe)
/Ordering (UCS) /Supplement 0 >> def
/CMapName /Adobe-Identity-UCS def
/CMapType 2 def
1 begincodespacerange
<0000> <FFFF>
endcodespacerange
"#
        .replace("\r\n", "\n");

        let ids = self.glyph_ids();
        let mut ids: Vec<(u16, char)> = ids.into_iter().collect();
        ids.sort_by_key(|&(id, _)| id);

        // each bfchar block holds at most 100 entries sharing a common high byte
        let mut cmap_blocks: Vec<Vec<(u16, char)>> = Vec::new();
        let mut current_block: Vec<(u16, char)> = Vec::new();
        let mut high_byte: u8 = 0;
        for (id, ch) in ids.iter() {
            if (id >> 8) as u8 != high_byte || current_block.len() >= 100 {
                if !current_block.is_empty() {
                    cmap_blocks.push(std::mem::take(&mut current_block));
                }
                high_byte = (id >> 8) as u8;
            }

            current_block.push((*id, *ch));
        }
        if !current_block.is_empty() {
            cmap_blocks.push(current_block);
        }

        for block in cmap_blocks.into_iter() {
            map.push_str(&format!("{} beginbfchar\n", block.len()));
            for (id, ch) in block.into_iter() {
                let mut utf16 = [0u16; 2];
                let hex: String = ch
                    .encode_utf16(&mut utf16)
                    .iter()
                    .map(|unit| format!("{unit:04x}"))
                    .collect();
                map.push_str(&format!("<{id:04x}> <{hex}>\n"));
            }
            map.push_str("endbfchar\n");
        }

        map.push_str("endcmap CMapName currentdict /CMap defineresource pop end end\n");

        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
            map.as_bytes(),
            miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
        );
        let mut stream = writer.stream(id, compressed.as_slice());
        stream.filter(pdf_writer::Filter::FlateDecode);

        id
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, font_index: usize, writer: &mut Pdf) {
        let font_id = refs.gen(RefType::Font(font_index));
        let cid_font_id = self.write_cid(refs, font_index, writer);
        let to_unicode_id = self.write_to_unicode(refs, font_index, writer);

        let mut font = writer.type0_font(font_id);
        font.base_font(Name(format!("F{font_index}").as_bytes()));
        font.encoding_predefined(Name(b"Identity-H"));
        font.descendant_font(cid_font_id);
        font.to_unicode(to_unicode_id);
    }
}

impl fmt::Debug for TrueTypeFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrueTypeFont")
            .field("name", &self.name())
            .field("source", &self.source)
            .field("bytes", &self.data().len())
            .finish()
    }
}

/// Two fonts are the same if they were parsed from the same bytes
impl PartialEq for TrueTypeFont {
    fn eq(&self, other: &Self) -> bool {
        self.data() == other.data()
    }
}
