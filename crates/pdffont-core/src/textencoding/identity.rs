use super::{CharCode, PersistedEncoding};

/// Encoder where every 16-bit code is its own Unicode rune.
///
/// Glyph names follow a fixed scheme: `space` for U+0020 and `uniXXXX`
/// (four uppercase hex digits) for everything else.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IdentityEncoder {
    base_name: String,
}

impl IdentityEncoder {
    /// Create an identity encoder persisted under `base_name`
    /// (typically `Identity-H` or `Identity-V`).
    pub fn new(base_name: impl Into<String>) -> Self {
        Self {
            base_name: base_name.into(),
        }
    }

    /// Name this encoder is persisted under. May be empty.
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// Surrogate code units have no rune.
    pub fn charcode_to_rune(&self, code: CharCode) -> Option<char> {
        char::from_u32(u32::from(code))
    }

    /// Runes outside the Basic Multilingual Plane have no code.
    pub fn rune_to_charcode(&self, rune: char) -> Option<CharCode> {
        u16::try_from(u32::from(rune)).ok()
    }

    pub fn charcode_to_glyph(&self, code: CharCode) -> Option<String> {
        Some(glyph_for_code(code))
    }

    pub fn rune_to_glyph(&self, rune: char) -> Option<String> {
        self.rune_to_charcode(rune).map(glyph_for_code)
    }

    /// Accepts exactly `space` or `uni` followed by four hex digits.
    pub fn glyph_to_rune(&self, name: &str) -> Option<char> {
        if name == "space" {
            return Some(' ');
        }
        if name.len() != 7 {
            return None;
        }
        let hex = name.strip_prefix("uni")?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let code = u16::from_str_radix(hex, 16).ok()?;
        self.charcode_to_rune(code)
    }

    /// `None` when the base name is empty.
    pub fn to_persistable(&self) -> Option<PersistedEncoding> {
        if self.base_name.is_empty() {
            None
        } else {
            Some(PersistedEncoding::Name(self.base_name.clone()))
        }
    }
}

fn glyph_for_code(code: CharCode) -> String {
    if code == 0x20 {
        "space".to_string()
    } else {
        format!("uni{code:04X}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enc() -> IdentityEncoder {
        IdentityEncoder::new("Identity-H")
    }

    #[test]
    fn space_has_a_literal_name() {
        assert_eq!(enc().rune_to_glyph(' ').as_deref(), Some("space"));
        assert_eq!(enc().glyph_to_rune("space"), Some(' '));
    }

    #[test]
    fn glyph_names_are_uppercase_hex() {
        assert_eq!(enc().rune_to_glyph('a').as_deref(), Some("uni0061"));
        assert_eq!(enc().rune_to_glyph('中').as_deref(), Some("uni4E2D"));
        assert_eq!(enc().rune_to_glyph('\u{FFFD}').as_deref(), Some("uniFFFD"));
    }

    #[test]
    fn glyph_round_trip_over_bmp() {
        let e = enc();
        for code in (0u32..0xD800).chain(0xE000..=0xFFFF).step_by(7) {
            let rune = char::from_u32(code).unwrap();
            let name = e.rune_to_glyph(rune).unwrap();
            assert_eq!(e.glyph_to_rune(&name), Some(rune), "{name}");
        }
    }

    #[test]
    fn lowercase_hex_is_accepted_on_parse() {
        assert_eq!(enc().glyph_to_rune("uni00e9"), Some('é'));
    }

    #[test]
    fn malformed_names_are_rejected() {
        let e = enc();
        for name in ["uniZZZZ", "uni12", "uni123456", "A", "", "Uni0041", "uni+041", "spaces"] {
            assert_eq!(e.glyph_to_rune(name), None, "{name}");
        }
    }

    #[test]
    fn surrogate_codes_have_names_but_no_rune() {
        assert_eq!(enc().charcode_to_glyph(0xD800).as_deref(), Some("uniD800"));
        assert_eq!(enc().charcode_to_rune(0xD800), None);
        assert_eq!(enc().glyph_to_rune("uniD800"), None);
    }

    #[test]
    fn code_and_rune_are_the_same_number() {
        let e = enc();
        assert_eq!(e.charcode_to_rune(0x0041), Some('A'));
        assert_eq!(e.rune_to_charcode('A'), Some(0x0041));
        assert_eq!(e.rune_to_charcode('\u{1F600}'), None);
    }

    #[test]
    fn persistable_requires_a_name() {
        assert_eq!(
            enc().to_persistable(),
            Some(PersistedEncoding::Name("Identity-H".to_string()))
        );
        assert_eq!(IdentityEncoder::default().to_persistable(), None);
    }
}
