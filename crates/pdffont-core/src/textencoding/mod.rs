//! Text encoders: bidirectional maps between character codes, Unicode
//! runes and glyph names.
//!
//! [`TextEncoder`] is a closed set of strategies. Every strategy answers the
//! same six lookups; the glyph-keyed lookups default to going through the
//! rune when a strategy has no glyph table of its own.

mod cjk;
mod identity;
mod simple;
mod truetype;

use std::collections::HashMap;
use std::fmt;

pub use cjk::{CjkEncoder, cjk_encoding_for_cmap};
pub use identity::IdentityEncoder;
pub use simple::SimpleEncoder;
pub use truetype::TrueTypeEncoder;

use crate::error::FontError;

/// Per-font address of a glyph in a content stream string.
pub type CharCode = u16;

/// How an encoder is written back into a font dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistedEncoding {
    /// A predefined encoding or CMap name, e.g. `WinAnsiEncoding` or `Identity-H`.
    Name(String),
    /// An encoding dictionary with optional `/BaseEncoding` and `/Differences`.
    Differences {
        /// Name of the base encoding, if one is written.
        base: Option<String>,
        /// `(code, glyph name)` overrides in code order.
        differences: Vec<(u8, String)>,
    },
}

impl PersistedEncoding {
    /// Group consecutive codes into `/Differences` runs: `[c1 /n1 /n2 c2 /n3]`.
    pub fn difference_runs(&self) -> Vec<(u8, Vec<&str>)> {
        let PersistedEncoding::Differences { differences, .. } = self else {
            return Vec::new();
        };
        let mut runs: Vec<(u8, Vec<&str>)> = Vec::new();
        let mut next: Option<u16> = None;
        for (code, name) in differences {
            match runs.last_mut() {
                Some((_, names)) if next == Some(u16::from(*code)) => names.push(name),
                _ => runs.push((*code, vec![name.as_str()])),
            }
            next = Some(u16::from(*code) + 1);
        }
        runs
    }
}

/// One of the supported encoding strategies.
#[derive(Debug, Clone, PartialEq)]
pub enum TextEncoder {
    /// Code equals rune; 2-byte codes.
    Identity(IdentityEncoder),
    /// Base encoding plus `/Differences`; 1-byte codes.
    Simple(SimpleEncoder),
    /// Derived from an embedded TrueType program's cmap.
    TrueType(TrueTypeEncoder),
    /// Predefined CJK CMap backed by a legacy multibyte charset.
    Cjk(CjkEncoder),
}

impl TextEncoder {
    /// Human-readable name of the encoding.
    pub fn name(&self) -> String {
        match self {
            TextEncoder::Identity(enc) => enc.base_name().to_string(),
            TextEncoder::Simple(enc) => enc.base_name().to_string(),
            TextEncoder::TrueType(_) => "TrueType".to_string(),
            TextEncoder::Cjk(enc) => enc.cmap_name().to_string(),
        }
    }

    /// Number of bytes written per code by [`encode`](Self::encode).
    pub fn bytes_per_code(&self) -> usize {
        match self {
            TextEncoder::Identity(_) | TextEncoder::Cjk(_) => 2,
            TextEncoder::Simple(_) => 1,
            TextEncoder::TrueType(enc) => {
                if enc.is_two_byte() {
                    2
                } else {
                    1
                }
            }
        }
    }

    /// The Unicode rune for `code`.
    pub fn charcode_to_rune(&self, code: CharCode) -> Option<char> {
        match self {
            TextEncoder::Identity(enc) => enc.charcode_to_rune(code),
            TextEncoder::Simple(enc) => enc.charcode_to_rune(code),
            TextEncoder::TrueType(enc) => enc.charcode_to_rune(code),
            TextEncoder::Cjk(enc) => enc.charcode_to_rune(code),
        }
    }

    /// The character code for `rune`.
    pub fn rune_to_charcode(&self, rune: char) -> Option<CharCode> {
        match self {
            TextEncoder::Identity(enc) => enc.rune_to_charcode(rune),
            TextEncoder::Simple(enc) => enc.rune_to_charcode(rune),
            TextEncoder::TrueType(enc) => enc.rune_to_charcode(rune),
            TextEncoder::Cjk(enc) => enc.rune_to_charcode(rune),
        }
    }

    /// The glyph name for `rune`.
    pub fn rune_to_glyph(&self, rune: char) -> Option<String> {
        match self {
            TextEncoder::Identity(enc) => enc.rune_to_glyph(rune),
            TextEncoder::Simple(enc) => enc.rune_to_glyph(rune),
            TextEncoder::TrueType(_) | TextEncoder::Cjk(_) => {
                self.rune_to_charcode(rune)?;
                Some(crate::encoding::char_to_glyph_name(rune))
            }
        }
    }

    /// The rune for glyph `name`.
    pub fn glyph_to_rune(&self, name: &str) -> Option<char> {
        match self {
            TextEncoder::Identity(enc) => enc.glyph_to_rune(name),
            TextEncoder::Simple(enc) => enc.glyph_to_rune(name),
            TextEncoder::TrueType(_) | TextEncoder::Cjk(_) => {
                crate::encoding::glyph_name_to_char(name)
            }
        }
    }

    /// The glyph name for `code`.
    pub fn charcode_to_glyph(&self, code: CharCode) -> Option<String> {
        match self {
            TextEncoder::Identity(enc) => enc.charcode_to_glyph(code),
            TextEncoder::Simple(enc) => enc.charcode_to_glyph(code),
            _ => self.rune_to_glyph(self.charcode_to_rune(code)?),
        }
    }

    /// The character code for glyph `name`.
    pub fn glyph_to_charcode(&self, name: &str) -> Option<CharCode> {
        match self {
            TextEncoder::Simple(enc) => enc.glyph_to_charcode(name),
            _ => self.rune_to_charcode(self.glyph_to_rune(name)?),
        }
    }

    /// Encode `text` as a content stream string.
    ///
    /// Codes are written as single bytes for 1-byte strategies and as
    /// big-endian pairs otherwise. The first rune without a code is an error.
    pub fn encode(&self, text: &str) -> Result<Vec<u8>, FontError> {
        let width = self.bytes_per_code();
        let mut out = Vec::with_capacity(text.len() * width);
        for rune in text.chars() {
            let code = self
                .rune_to_charcode(rune)
                .ok_or(FontError::UnmappedRune(rune))?;
            if width == 1 {
                let byte = u8::try_from(code).map_err(|_| FontError::UnmappedRune(rune))?;
                out.push(byte);
            } else {
                out.extend_from_slice(&code.to_be_bytes());
            }
        }
        Ok(out)
    }

    /// How this encoder is written into a font dictionary, if at all.
    pub fn to_persistable(&self) -> Option<PersistedEncoding> {
        match self {
            TextEncoder::Identity(enc) => enc.to_persistable(),
            TextEncoder::Simple(enc) => enc.to_persistable(),
            TextEncoder::TrueType(_) => None,
            TextEncoder::Cjk(enc) => Some(PersistedEncoding::Name(enc.cmap_name().to_string())),
        }
    }

    /// True for the Identity strategy.
    pub fn is_identity(&self) -> bool {
        matches!(self, TextEncoder::Identity(_))
    }
}

impl fmt::Display for TextEncoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextEncoder::Identity(_) => write!(f, "Identity({})", self.name()),
            TextEncoder::Simple(enc) => write!(
                f,
                "Simple({}, {} differences)",
                enc.base_name(),
                enc.differences().len()
            ),
            TextEncoder::TrueType(enc) => write!(f, "TrueType({} codes)", enc.len()),
            TextEncoder::Cjk(enc) => write!(f, "Cjk({})", enc.cmap_name()),
        }
    }
}

impl From<IdentityEncoder> for TextEncoder {
    fn from(enc: IdentityEncoder) -> Self {
        TextEncoder::Identity(enc)
    }
}

impl From<SimpleEncoder> for TextEncoder {
    fn from(enc: SimpleEncoder) -> Self {
        TextEncoder::Simple(enc)
    }
}

impl From<TrueTypeEncoder> for TextEncoder {
    fn from(enc: TrueTypeEncoder) -> Self {
        TextEncoder::TrueType(enc)
    }
}

impl From<CjkEncoder> for TextEncoder {
    fn from(enc: CjkEncoder) -> Self {
        TextEncoder::Cjk(enc)
    }
}

/// Rune frequencies in `text`.
pub fn alphabet(text: &str) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for rune in text.chars() {
        *counts.entry(rune).or_insert(0) += 1;
    }
    counts
}

/// The runes of an alphabet ordered by ascending frequency, ties by rune.
pub fn sorted_alphabet(alphabet: &HashMap<char, usize>) -> Vec<char> {
    let mut runes: Vec<char> = alphabet.keys().copied().collect();
    runes.sort_by_key(|r| (alphabet[r], *r));
    runes
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::encoding::BaseEncoding;

    fn identity() -> TextEncoder {
        IdentityEncoder::new("Identity-H").into()
    }

    fn win_ansi() -> TextEncoder {
        SimpleEncoder::new(BaseEncoding::WinAnsi, BTreeMap::new()).into()
    }

    // ========== encode ==========

    #[test]
    fn identity_encode_packs_big_endian_pairs() {
        assert_eq!(identity().encode("Aé").unwrap(), vec![0x00, 0x41, 0x00, 0xE9]);
    }

    #[test]
    fn simple_encode_writes_single_bytes() {
        assert_eq!(win_ansi().encode("A€").unwrap(), vec![0x41, 0x80]);
    }

    #[test]
    fn encode_reports_first_unmapped_rune() {
        let err = win_ansi().encode("aΩb").unwrap_err();
        assert_eq!(err, FontError::UnmappedRune('Ω'));
    }

    #[test]
    fn identity_encode_rejects_astral_runes() {
        assert!(identity().encode("\u{1F600}").is_err());
    }

    // ========== glyph lookups through the enum ==========

    #[test]
    fn charcode_to_glyph_per_strategy() {
        assert_eq!(identity().charcode_to_glyph(0x20).as_deref(), Some("space"));
        assert_eq!(identity().charcode_to_glyph(0x41).as_deref(), Some("uni0041"));
        assert_eq!(win_ansi().charcode_to_glyph(0x41).as_deref(), Some("A"));
    }

    #[test]
    fn glyph_to_charcode_per_strategy() {
        assert_eq!(identity().glyph_to_charcode("uni4E2D"), Some(0x4E2D));
        assert_eq!(win_ansi().glyph_to_charcode("Euro"), Some(0x80));
        assert_eq!(win_ansi().glyph_to_charcode("alpha"), None);
    }

    #[test]
    fn bytes_per_code() {
        assert_eq!(identity().bytes_per_code(), 2);
        assert_eq!(win_ansi().bytes_per_code(), 1);
    }

    // ========== persistence ==========

    #[test]
    fn to_persistable_per_strategy() {
        assert_eq!(
            identity().to_persistable(),
            Some(PersistedEncoding::Name("Identity-H".to_string()))
        );
        assert_eq!(
            TextEncoder::from(IdentityEncoder::new("")).to_persistable(),
            None
        );
        assert_eq!(
            win_ansi().to_persistable(),
            Some(PersistedEncoding::Name("WinAnsiEncoding".to_string()))
        );
    }

    #[test]
    fn difference_runs_group_consecutive_codes() {
        let persisted = PersistedEncoding::Differences {
            base: None,
            differences: vec![
                (32, "space".to_string()),
                (33, "exclam".to_string()),
                (40, "parenleft".to_string()),
                (255, "ydieresis".to_string()),
            ],
        };
        assert_eq!(
            persisted.difference_runs(),
            vec![
                (32, vec!["space", "exclam"]),
                (40, vec!["parenleft"]),
                (255, vec!["ydieresis"]),
            ]
        );
    }

    // ========== alphabet ==========

    #[test]
    fn alphabet_counts_runes() {
        let counts = alphabet("abca");
        assert_eq!(counts.get(&'a'), Some(&2));
        assert_eq!(counts.get(&'b'), Some(&1));
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn sorted_alphabet_orders_by_frequency_then_rune() {
        let counts = alphabet("cbbaaa");
        assert_eq!(sorted_alphabet(&counts), vec!['c', 'b', 'a']);
        let ties = alphabet("zyx");
        assert_eq!(sorted_alphabet(&ties), vec!['x', 'y', 'z']);
    }

    #[test]
    fn display_names_the_strategy() {
        assert_eq!(identity().to_string(), "Identity(Identity-H)");
        assert_eq!(win_ansi().to_string(), "Simple(WinAnsiEncoding, 0 differences)");
    }
}
