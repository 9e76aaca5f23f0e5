//! Decoding of content-stream byte strings through a [`PdfFont`].
//!
//! Bytes become character codes according to the font's addressing width,
//! and each code resolves through the font's ToUnicode CMap, then its
//! encoder, then [`MISSING_CODE_RUNE`]. Decoding never fails: anomalies are
//! reported to the sink and every input code produces output.

use pdffont_core::{
    CharCode, ExtractWarning, ExtractWarningCode, NoopSink, WarningSink, char_to_glyph_name,
};

use crate::font::PdfFont;

/// Placeholder emitted for a code with no Unicode mapping.
pub const MISSING_CODE_RUNE: char = '\u{FFFD}';

/// Glyph name reported for a code with no glyph.
pub const NOTDEF_GLYPH: &str = ".notdef";

impl PdfFont {
    /// Split `data` into character codes. See
    /// [`bytes_to_charcodes_with`](Self::bytes_to_charcodes_with).
    pub fn bytes_to_charcodes(&self, data: &[u8]) -> Vec<CharCode> {
        self.bytes_to_charcodes_with(data, &mut NoopSink)
    }

    /// Split `data` into character codes.
    ///
    /// Simple fonts use one byte per code. CID fonts pack byte pairs
    /// big-endian; a lone byte is taken as the low byte, and an odd trailing
    /// byte is padded with a zero low byte. Both paddings are reported as
    /// [`ExtractWarningCode::CidPadding`].
    pub fn bytes_to_charcodes_with(
        &self,
        data: &[u8],
        sink: &mut dyn WarningSink,
    ) -> Vec<CharCode> {
        if !self.is_cid() {
            return data.iter().map(|&b| CharCode::from(b)).collect();
        }
        match data {
            [] => Vec::new(),
            [b] => {
                self.report(
                    sink,
                    ExtractWarningCode::CidPadding,
                    format!("single byte 0x{b:02X} in a CID string, high byte set to zero"),
                );
                vec![CharCode::from(*b)]
            }
            _ => {
                let chunks = data.chunks_exact(2);
                let rest = chunks.remainder();
                let mut codes: Vec<CharCode> = chunks
                    .map(|pair| CharCode::from_be_bytes([pair[0], pair[1]]))
                    .collect();
                if let [last] = rest {
                    self.report(
                        sink,
                        ExtractWarningCode::CidPadding,
                        format!(
                            "CID string of odd length {}, trailing byte 0x{last:02X} padded",
                            data.len()
                        ),
                    );
                    codes.push(CharCode::from_be_bytes([*last, 0]));
                }
                codes
            }
        }
    }

    /// Decode `data` to text. See
    /// [`charcode_bytes_to_unicode_with`](Self::charcode_bytes_to_unicode_with).
    pub fn charcode_bytes_to_unicode(&self, data: &[u8]) -> (String, usize, usize) {
        self.charcode_bytes_to_unicode_with(data, &mut NoopSink)
    }

    /// Decode `data` to text.
    ///
    /// Returns the text, its length in runes and the number of codes that
    /// resolved to [`MISSING_CODE_RUNE`].
    pub fn charcode_bytes_to_unicode_with(
        &self,
        data: &[u8],
        sink: &mut dyn WarningSink,
    ) -> (String, usize, usize) {
        let codes = self.bytes_to_charcodes_with(data, sink);
        let mut text = String::with_capacity(codes.len());
        let mut misses = 0;
        for &code in &codes {
            if !self.push_code(code, &mut text) {
                misses += 1;
            }
        }
        self.report_misses(sink, misses, codes.len());
        let runes = text.chars().count();
        (text, runes, misses)
    }

    /// Resolve codes to runes. See
    /// [`charcodes_to_unicode_with_stats_with`](Self::charcodes_to_unicode_with_stats_with).
    pub fn charcodes_to_unicode_with_stats(&self, codes: &[CharCode]) -> (Vec<char>, usize, usize) {
        self.charcodes_to_unicode_with_stats_with(codes, &mut NoopSink)
    }

    /// Resolve codes to runes.
    ///
    /// Returns the runes plus the number of codes that resolved and the
    /// number that did not. A ToUnicode entry may contribute several runes.
    pub fn charcodes_to_unicode_with_stats_with(
        &self,
        codes: &[CharCode],
        sink: &mut dyn WarningSink,
    ) -> (Vec<char>, usize, usize) {
        let mut runes = Vec::with_capacity(codes.len());
        let mut hits = 0;
        let mut misses = 0;
        for &code in codes {
            if self.push_code(code, &mut runes) {
                hits += 1;
            } else {
                misses += 1;
            }
        }
        self.report_misses(sink, misses, codes.len());
        (runes, hits, misses)
    }

    /// One string per code, with the number of misses.
    pub fn charcodes_to_strings(&self, codes: &[CharCode]) -> (Vec<String>, usize) {
        let mut misses = 0;
        let strings = codes
            .iter()
            .map(|&code| {
                let mut text = String::new();
                if !self.push_code(code, &mut text) {
                    misses += 1;
                }
                text
            })
            .collect();
        (strings, misses)
    }

    /// Glyph names for `codes`, with the number of codes that had none.
    ///
    /// Names come from the encoder; failing that, a ToUnicode rune is named
    /// by its preferred glyph name. Unresolved codes become `.notdef`.
    pub fn charcodes_to_glyphs(&self, codes: &[CharCode]) -> (Vec<String>, usize) {
        let mut misses = 0;
        let glyphs = codes
            .iter()
            .map(|&code| match self.glyph_for(code) {
                Some(name) => name,
                None => {
                    misses += 1;
                    NOTDEF_GLYPH.to_string()
                }
            })
            .collect();
        (glyphs, misses)
    }

    /// The Unicode text of a single code, if it resolves.
    pub fn charcode_to_unicode(&self, code: CharCode) -> Option<String> {
        let mut text = String::new();
        self.push_code(code, &mut text).then_some(text)
    }

    fn glyph_for(&self, code: CharCode) -> Option<String> {
        if let Some(name) = self.encoder().and_then(|enc| enc.charcode_to_glyph(code)) {
            return Some(name);
        }
        let cmap = self.to_unicode()?;
        let mut runes = cmap.lookup(code)?.chars();
        match (runes.next(), runes.next()) {
            (Some(rune), None) => Some(char_to_glyph_name(rune)),
            _ => None,
        }
    }

    /// Append the runes of `code` to `out`; false when the placeholder was used.
    fn push_code(&self, code: CharCode, out: &mut impl Extend<char>) -> bool {
        if let Some(text) = self.to_unicode().and_then(|cmap| cmap.lookup(code)) {
            out.extend(text.chars());
            return true;
        }
        if let Some(rune) = self.encoder().and_then(|enc| enc.charcode_to_rune(code)) {
            out.extend(Some(rune));
            return true;
        }
        out.extend(Some(MISSING_CODE_RUNE));
        false
    }

    fn report_misses(&self, sink: &mut dyn WarningSink, misses: usize, total: usize) {
        if misses > 0 {
            self.report(
                sink,
                ExtractWarningCode::UnresolvedCharCodes,
                format!("{misses} of {total} character codes have no Unicode mapping"),
            );
        }
    }

    fn report(&self, sink: &mut dyn WarningSink, code: ExtractWarningCode, msg: String) {
        let warning = ExtractWarning::with_code(code, msg)
            .for_font(self.base_font())
            .at_object(self.object_id());
        #[cfg(feature = "tracing")]
        tracing::debug!(code = %warning.code, "{}", warning);
        sink.on_warning(warning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::standard_fonts::StandardFontName;

    fn helvetica() -> PdfFont {
        PdfFont::standard14(StandardFontName::Helvetica)
    }

    // ========== bytes to codes ==========

    #[test]
    fn simple_font_bytes_are_codes() {
        let codes = helvetica().bytes_to_charcodes(&[0x41, 0x00, 0xFF]);
        assert_eq!(codes, vec![0x41, 0x00, 0xFF]);
    }

    #[test]
    fn simple_font_never_pads() {
        let mut sink = Vec::new();
        let codes = helvetica().bytes_to_charcodes_with(&[0x41], &mut sink);
        assert_eq!(codes, vec![0x41]);
        assert!(sink.is_empty());
    }

    // ========== codes to text ==========

    #[test]
    fn encoder_resolves_codes() {
        let (text, runes, misses) = helvetica().charcode_bytes_to_unicode(b"Hi!");
        assert_eq!(text, "Hi!");
        assert_eq!(runes, 3);
        assert_eq!(misses, 0);
    }

    #[test]
    fn unmapped_codes_use_placeholder() {
        let mut sink = Vec::new();
        let (text, runes, misses) = helvetica().charcode_bytes_to_unicode_with(&[0x41, 0x00], &mut sink);
        assert_eq!(text, format!("A{MISSING_CODE_RUNE}"));
        assert_eq!(runes, 2);
        assert_eq!(misses, 1);
        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].code, ExtractWarningCode::UnresolvedCharCodes);
        assert_eq!(sink[0].font_name.as_deref(), Some("Helvetica"));
    }

    #[test]
    fn stats_count_hits_and_misses() {
        let (runes, hits, misses) = helvetica().charcodes_to_unicode_with_stats(&[0x41, 0x01, 0x42]);
        assert_eq!(runes, vec!['A', MISSING_CODE_RUNE, 'B']);
        assert_eq!(hits, 2);
        assert_eq!(misses, 1);
    }

    #[test]
    fn strings_per_code() {
        let (strings, misses) = helvetica().charcodes_to_strings(&[0x61, 0x02]);
        assert_eq!(strings, vec!["a".to_string(), MISSING_CODE_RUNE.to_string()]);
        assert_eq!(misses, 1);
    }

    #[test]
    fn glyph_names_from_encoder() {
        let (glyphs, misses) = helvetica().charcodes_to_glyphs(&[0x41, 0x20, 0x00]);
        assert_eq!(glyphs, vec!["A", "space", NOTDEF_GLYPH]);
        assert_eq!(misses, 1);
    }

    #[test]
    fn single_code_lookup() {
        let font = helvetica();
        assert_eq!(font.charcode_to_unicode(0x7A).as_deref(), Some("z"));
        assert_eq!(font.charcode_to_unicode(0x00), None);
    }

    #[test]
    fn empty_input_is_empty_output() {
        let (text, runes, misses) = helvetica().charcode_bytes_to_unicode(&[]);
        assert!(text.is_empty());
        assert_eq!((runes, misses), (0, 0));
    }
}
