//! Embedded TrueType / OpenType program metrics via `ttf-parser`.

use std::collections::{BTreeMap, HashMap};

use pdffont_core::{CharCode, TrueTypeEncoder};
use ttf_parser::{Face, GlyphId, PlatformId};

use crate::error::BackendError;

/// Structured metrics of an embedded TrueType program.
///
/// Widths are in font units; use [`TrueTypeProgram::scaled_width`] for
/// 1/1000 em.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrueTypeProgram {
    /// PostScript name from the `name` table.
    pub postscript_name: Option<String>,
    pub is_bold: bool,
    pub italic_angle: f32,
    pub underline_position: i16,
    pub underline_thickness: i16,
    pub is_fixed_pitch: bool,
    /// `[x_min, y_min, x_max, y_max]` in font units.
    pub bbox: [i16; 4],
    pub units_per_em: u16,
    /// Rune to glyph index, from the Unicode cmap subtables.
    pub rune_to_gid: BTreeMap<char, u16>,
    /// Byte code to glyph index, from the symbol and Macintosh subtables.
    pub code_to_gid: BTreeMap<CharCode, u16>,
    /// Advance width per glyph index.
    pub advances: Vec<u16>,
}

impl TrueTypeProgram {
    /// Parse raw font file bytes.
    pub fn parse(data: &[u8]) -> Result<Self, BackendError> {
        if data.is_empty() {
            return Err(BackendError::collaborator("empty TrueType program"));
        }
        let face = Face::parse(data, 0)
            .map_err(|e| BackendError::collaborator(format!("TrueType parse failed: {e}")))?;

        let postscript_name = face
            .names()
            .into_iter()
            .find(|name| name.name_id == ttf_parser::name_id::POST_SCRIPT_NAME)
            .and_then(|name| name.to_string());

        let (italic_angle, is_fixed_pitch) = face
            .tables()
            .post
            .map(|post| (post.italic_angle, post.is_monospaced))
            .unwrap_or((0.0, false));
        let underline = face.underline_metrics();

        let rect = face.global_bounding_box();
        let mut program = TrueTypeProgram {
            postscript_name,
            is_bold: face.is_bold(),
            italic_angle,
            underline_position: underline.map_or(0, |m| m.position),
            underline_thickness: underline.map_or(0, |m| m.thickness),
            is_fixed_pitch,
            bbox: [rect.x_min, rect.y_min, rect.x_max, rect.y_max],
            units_per_em: face.units_per_em(),
            ..TrueTypeProgram::default()
        };

        program.read_cmaps(&face);
        program.advances = (0..face.number_of_glyphs())
            .map(|gid| face.glyph_hor_advance(GlyphId(gid)).unwrap_or(0))
            .collect();

        Ok(program)
    }

    fn read_cmaps(&mut self, face: &Face<'_>) {
        let Some(cmap) = face.tables().cmap else {
            return;
        };
        for subtable in cmap.subtables {
            if subtable.is_unicode() {
                subtable.codepoints(|cp| {
                    let (Some(rune), Some(gid)) = (char::from_u32(cp), subtable.glyph_index(cp))
                    else {
                        return;
                    };
                    self.rune_to_gid.entry(rune).or_insert(gid.0);
                });
                continue;
            }
            let symbol = subtable.platform_id == PlatformId::Windows && subtable.encoding_id == 0;
            let mac_roman =
                subtable.platform_id == PlatformId::Macintosh && subtable.encoding_id == 0;
            if !symbol && !mac_roman {
                continue;
            }
            subtable.codepoints(|cp| {
                let Some(gid) = subtable.glyph_index(cp) else {
                    return;
                };
                // Symbol subtables place byte codes at 0xF000..=0xF0FF.
                let code = if symbol && (0xF000..=0xF0FF).contains(&cp) {
                    cp - 0xF000
                } else {
                    cp
                };
                if let Ok(code) = CharCode::try_from(code) {
                    self.code_to_gid.entry(code).or_insert(gid.0);
                }
            });
        }
    }

    /// Glyph index to rune; the lowest rune wins for shared glyphs.
    pub fn gid_to_rune(&self) -> HashMap<u16, char> {
        let mut map = HashMap::new();
        for (rune, gid) in &self.rune_to_gid {
            map.entry(*gid).or_insert(*rune);
        }
        map
    }

    /// Advance width of `gid` in font units.
    pub fn width(&self, gid: u16) -> Option<u16> {
        self.advances.get(usize::from(gid)).copied()
    }

    /// Advance width of `gid` in 1/1000 em.
    pub fn scaled_width(&self, gid: u16) -> Option<f64> {
        if self.units_per_em == 0 {
            return None;
        }
        self.width(gid)
            .map(|w| f64::from(w) * 1000.0 / f64::from(self.units_per_em))
    }

    /// Encoder whose codes are glyph indices.
    ///
    /// This is the right encoder for CID-keyed use with an identity
    /// CIDToGIDMap.
    pub fn glyph_encoder(&self) -> TrueTypeEncoder {
        TrueTypeEncoder::from_runes(
            self.rune_to_gid.iter().map(|(rune, gid)| (*gid, *rune)),
            true,
        )
    }

    /// Encoder for a simple font: byte codes from the symbol or Macintosh
    /// subtables joined with the Unicode subtables. Without a byte-code
    /// subtable, codes 0..=255 are taken as runes.
    pub fn simple_encoder(&self) -> TrueTypeEncoder {
        if self.code_to_gid.is_empty() {
            return TrueTypeEncoder::from_runes(
                self.rune_to_gid
                    .keys()
                    .filter_map(|rune| u8::try_from(u32::from(*rune)).ok())
                    .map(|code| (CharCode::from(code), char::from(code))),
                false,
            );
        }
        TrueTypeEncoder::new(&self.code_to_gid, &self.gid_to_rune(), false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdffont_core::FontError;

    fn sample() -> TrueTypeProgram {
        TrueTypeProgram {
            units_per_em: 2048,
            rune_to_gid: BTreeMap::from([('x', 0x5d), ('ё', 0x32a), ('A', 36)]),
            advances: {
                let mut v = vec![0u16; 0x32b];
                v[0x5d] = 1024;
                v[36] = 1366;
                v
            },
            ..TrueTypeProgram::default()
        }
    }

    #[test]
    fn garbage_is_collaborator_error() {
        let err = TrueTypeProgram::parse(b"not a font").unwrap_err();
        assert!(matches!(err, BackendError::Core(FontError::Collaborator(_))));
    }

    #[test]
    fn empty_is_collaborator_error() {
        let err = TrueTypeProgram::parse(&[]).unwrap_err();
        assert!(matches!(err, BackendError::Core(FontError::Collaborator(_))));
    }

    #[test]
    fn glyph_encoder_uses_glyph_indices_as_codes() {
        let enc = sample().glyph_encoder();
        assert_eq!(enc.rune_to_charcode('x'), Some(0x5d));
        assert_eq!(enc.rune_to_charcode('ё'), Some(0x32a));
        assert_eq!(enc.charcode_to_rune(0x32a), Some('ё'));
    }

    #[test]
    fn scaled_width_uses_units_per_em() {
        let prog = sample();
        assert_eq!(prog.width(0x5d), Some(1024));
        assert_eq!(prog.scaled_width(0x5d), Some(500.0));
        assert_eq!(prog.scaled_width(0xFFFF), None);
    }

    #[test]
    fn simple_encoder_falls_back_to_latin1_runes() {
        let enc = sample().simple_encoder();
        assert_eq!(enc.charcode_to_rune(0x78), Some('x'));
        assert_eq!(enc.charcode_to_rune(0x41), Some('A'));
        assert_eq!(enc.rune_to_charcode('ё'), None);
    }

    #[test]
    fn simple_encoder_joins_symbol_codes() {
        let mut prog = sample();
        prog.code_to_gid = BTreeMap::from([(0x61, 36)]);
        let enc = prog.simple_encoder();
        assert_eq!(enc.charcode_to_rune(0x61), Some('A'));
        assert_eq!(enc.charcode_to_rune(0x41), None);
    }
}
