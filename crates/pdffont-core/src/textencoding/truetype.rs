use std::collections::{BTreeMap, HashMap};

use super::CharCode;

/// Encoder derived from an embedded TrueType program.
///
/// The program's code→glyph-index table is joined with its glyph-index→rune
/// table. Codes whose glyph has no Unicode mapping are absent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrueTypeEncoder {
    runes: BTreeMap<CharCode, char>,
    codes: HashMap<char, CharCode>,
    two_byte: bool,
}

impl TrueTypeEncoder {
    /// Join `code_to_gid` with `gid_to_rune`.
    ///
    /// `two_byte` marks CID-keyed use, where codes are written as pairs.
    pub fn new(
        code_to_gid: &BTreeMap<CharCode, u16>,
        gid_to_rune: &HashMap<u16, char>,
        two_byte: bool,
    ) -> Self {
        let runes = code_to_gid
            .iter()
            .filter_map(|(code, gid)| gid_to_rune.get(gid).map(|rune| (*code, *rune)));
        Self::from_runes(runes, two_byte)
    }

    /// Build directly from `(code, rune)` pairs. The lowest code wins on
    /// reverse lookup.
    pub fn from_runes(runes: impl IntoIterator<Item = (CharCode, char)>, two_byte: bool) -> Self {
        let runes: BTreeMap<CharCode, char> = runes.into_iter().collect();
        let mut codes = HashMap::new();
        for (code, rune) in &runes {
            codes.entry(*rune).or_insert(*code);
        }
        Self {
            runes,
            codes,
            two_byte,
        }
    }

    pub fn is_two_byte(&self) -> bool {
        self.two_byte
    }

    /// Number of codes with a rune.
    pub fn len(&self) -> usize {
        self.runes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runes.is_empty()
    }

    pub fn charcode_to_rune(&self, code: CharCode) -> Option<char> {
        if !self.two_byte && code > 0xFF {
            return None;
        }
        self.runes.get(&code).copied()
    }

    pub fn rune_to_charcode(&self, rune: char) -> Option<CharCode> {
        self.codes.get(&rune).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_codes_through_glyph_indices() {
        let code_to_gid = BTreeMap::from([(0x41, 36), (0x42, 37), (0x43, 99)]);
        let gid_to_rune = HashMap::from([(36, 'A'), (37, 'B')]);
        let enc = TrueTypeEncoder::new(&code_to_gid, &gid_to_rune, false);
        assert_eq!(enc.charcode_to_rune(0x41), Some('A'));
        assert_eq!(enc.charcode_to_rune(0x43), None);
        assert_eq!(enc.rune_to_charcode('B'), Some(0x42));
        assert_eq!(enc.len(), 2);
    }

    #[test]
    fn shared_glyph_reverse_maps_to_lowest_code() {
        let enc = TrueTypeEncoder::from_runes([(0x20, ' '), (0xA0, ' ')], false);
        assert_eq!(enc.rune_to_charcode(' '), Some(0x20));
    }

    #[test]
    fn single_byte_mode_ignores_wide_codes() {
        let enc = TrueTypeEncoder::from_runes([(0x141, 'Ł')], false);
        assert_eq!(enc.charcode_to_rune(0x141), None);
        let wide = TrueTypeEncoder::from_runes([(0x141, 'Ł')], true);
        assert_eq!(wide.charcode_to_rune(0x141), Some('Ł'));
    }
}
