//! Encoders for predefined CJK CMaps backed by legacy multibyte charsets.
//!
//! Codes up to 0xFF are single-byte characters; larger codes are a lead
//! byte followed by a trail byte.

use encoding_rs::Encoding;

use super::CharCode;

/// Detect the `encoding_rs` charset behind a predefined CMap name.
///
/// Returns `None` for Identity and Unicode (`Uni*`) CMaps, which are not
/// legacy charsets, and for unknown names.
pub fn cjk_encoding_for_cmap(cmap_name: &str) -> Option<&'static Encoding> {
    let base = cmap_name
        .strip_suffix("-H")
        .or_else(|| cmap_name.strip_suffix("-V"))
        .unwrap_or(cmap_name);

    match base {
        // Chinese Simplified
        "GBK-EUC" | "GB-EUC" | "GBpc-EUC" | "GBKp-EUC" | "GBK2K" => Some(encoding_rs::GBK),
        // Chinese Traditional
        "B5pc" | "ETen-B5" | "HKscs-B5" | "ETenms-B5" | "CNS-EUC" => Some(encoding_rs::BIG5),
        // Japanese
        "90ms-RKSJ" | "90pv-RKSJ" | "83pv-RKSJ" | "78-RKSJ" | "Add-RKSJ" | "Ext-RKSJ"
        | "90msp-RKSJ" | "78ms-RKSJ" => Some(encoding_rs::SHIFT_JIS),
        "EUC" | "78-EUC" => Some(encoding_rs::EUC_JP),
        // Korean
        "KSC-EUC" | "KSCms-UHC" | "KSCms-UHC-HW" | "KSCpc-EUC" => Some(encoding_rs::EUC_KR),
        _ => None,
    }
}

/// Encoder over a predefined CJK CMap.
#[derive(Debug, Clone, PartialEq)]
pub struct CjkEncoder {
    cmap_name: String,
    encoding: &'static Encoding,
}

impl CjkEncoder {
    /// Build an encoder for `cmap_name`, or `None` when the CMap is not a
    /// known legacy charset.
    pub fn for_cmap(cmap_name: &str) -> Option<Self> {
        cjk_encoding_for_cmap(cmap_name).map(|encoding| Self {
            cmap_name: cmap_name.to_string(),
            encoding,
        })
    }

    pub fn cmap_name(&self) -> &str {
        &self.cmap_name
    }

    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    /// True for vertical (`-V`) CMaps.
    pub fn is_vertical(&self) -> bool {
        self.cmap_name.ends_with("-V")
    }

    pub fn charcode_to_rune(&self, code: CharCode) -> Option<char> {
        let [hi, lo] = code.to_be_bytes();
        let bytes: &[u8] = if hi == 0 { &[lo] } else { &[hi, lo] };
        let decoded = self
            .encoding
            .decode_without_bom_handling_and_without_replacement(bytes)?;
        let mut chars = decoded.chars();
        match (chars.next(), chars.next()) {
            (Some(rune), None) => Some(rune),
            _ => None,
        }
    }

    pub fn rune_to_charcode(&self, rune: char) -> Option<CharCode> {
        let mut buf = [0u8; 4];
        let (bytes, _, had_errors) = self.encoding.encode(rune.encode_utf8(&mut buf));
        if had_errors {
            return None;
        }
        match bytes.as_ref() {
            [b] => Some(CharCode::from(*b)),
            [hi, lo] => Some(CharCode::from_be_bytes([*hi, *lo])),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========== cjk_encoding_for_cmap ==========

    #[test]
    fn known_cmaps_map_to_charsets() {
        assert_eq!(cjk_encoding_for_cmap("GBK-EUC-H"), Some(encoding_rs::GBK));
        assert_eq!(cjk_encoding_for_cmap("ETen-B5-V"), Some(encoding_rs::BIG5));
        assert_eq!(cjk_encoding_for_cmap("90ms-RKSJ-H"), Some(encoding_rs::SHIFT_JIS));
        assert_eq!(cjk_encoding_for_cmap("EUC-H"), Some(encoding_rs::EUC_JP));
        assert_eq!(cjk_encoding_for_cmap("KSCms-UHC-H"), Some(encoding_rs::EUC_KR));
    }

    #[test]
    fn identity_and_unicode_cmaps_are_not_charsets() {
        assert_eq!(cjk_encoding_for_cmap("Identity-H"), None);
        assert_eq!(cjk_encoding_for_cmap("UniGB-UCS2-H"), None);
        assert_eq!(cjk_encoding_for_cmap("UniJIS-UTF16-V"), None);
        assert_eq!(cjk_encoding_for_cmap("Bogus"), None);
    }

    // ========== CjkEncoder ==========

    #[test]
    fn gbk_two_byte_code_decodes() {
        let enc = CjkEncoder::for_cmap("GBK-EUC-H").unwrap();
        // 中 is D6 D0 in GBK.
        assert_eq!(enc.charcode_to_rune(0xD6D0), Some('中'));
        assert_eq!(enc.rune_to_charcode('中'), Some(0xD6D0));
    }

    #[test]
    fn single_byte_codes_decode_as_ascii() {
        let enc = CjkEncoder::for_cmap("90ms-RKSJ-H").unwrap();
        assert_eq!(enc.charcode_to_rune(0x41), Some('A'));
        assert_eq!(enc.rune_to_charcode('A'), Some(0x41));
    }

    #[test]
    fn shift_jis_round_trip() {
        let enc = CjkEncoder::for_cmap("90ms-RKSJ-H").unwrap();
        // あ is 82 A0 in Shift_JIS.
        assert_eq!(enc.charcode_to_rune(0x82A0), Some('あ'));
        assert_eq!(enc.rune_to_charcode('あ'), Some(0x82A0));
    }

    #[test]
    fn invalid_sequences_have_no_rune() {
        let enc = CjkEncoder::for_cmap("GBK-EUC-H").unwrap();
        assert_eq!(enc.charcode_to_rune(0xFF00), None);
    }

    #[test]
    fn unencodable_rune_has_no_code() {
        let enc = CjkEncoder::for_cmap("KSC-EUC-H").unwrap();
        assert_eq!(enc.rune_to_charcode('\u{1F600}'), None);
    }

    #[test]
    fn vertical_cmaps_are_flagged() {
        assert!(CjkEncoder::for_cmap("ETen-B5-V").unwrap().is_vertical());
        assert!(!CjkEncoder::for_cmap("ETen-B5-H").unwrap().is_vertical());
    }
}
