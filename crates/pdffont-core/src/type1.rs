//! Cleartext header scanner for embedded Type 1 font programs.
//!
//! Only the portion before `eexec` is inspected; it names the font and
//! declares the program's built-in encoding.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::bytes::Regex;

use crate::encoding::BaseEncoding;

static FONT_NAME_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"/FontName\s*/([^\s/\[\]{}()<>%]+)").ok());
static ENCODING_NAME_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"/Encoding\s+StandardEncoding\b").ok());
static DUP_PUT_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"dup\s+(\d+)\s*/([^\s/\[\]{}()<>%]+)\s+put").ok());

/// Built-in encoding declared by a Type 1 program.
#[derive(Debug, Clone, PartialEq)]
pub enum Type1Encoding {
    /// `/Encoding StandardEncoding def`.
    Standard,
    /// An explicit array filled with `dup <code> /<glyph> put`.
    Custom(BTreeMap<u8, String>),
}

impl Type1Encoding {
    /// The glyph name at `code`.
    pub fn glyph_name(&self, code: u8) -> Option<&str> {
        match self {
            Type1Encoding::Standard => BaseEncoding::Standard.glyph_name(code),
            Type1Encoding::Custom(map) => map.get(&code).map(String::as_str),
        }
    }

    /// Every `(code, glyph name)` pair in code order.
    pub fn entries(&self) -> Vec<(u8, String)> {
        match self {
            Type1Encoding::Standard => BaseEncoding::Standard
                .entries()
                .map(|(code, name)| (code, name.to_string()))
                .collect(),
            Type1Encoding::Custom(map) => {
                map.iter().map(|(code, name)| (*code, name.clone())).collect()
            }
        }
    }
}

/// Facts extracted from a Type 1 cleartext header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Type1Header {
    /// Value of `/FontName`.
    pub font_name: Option<String>,
    /// The program's built-in encoding, if declared.
    pub encoding: Option<Type1Encoding>,
}

/// Scan the cleartext portion of a Type 1 program.
///
/// `data` may be the whole program; scanning stops at the first `eexec`.
/// Malformed headers yield an empty [`Type1Header`].
pub fn parse_type1_header(data: &[u8]) -> Type1Header {
    let clear = match find(data, b"eexec") {
        Some(end) => &data[..end],
        None => data,
    };

    let font_name = FONT_NAME_RE
        .as_ref()
        .and_then(|re| re.captures(clear))
        .and_then(|caps| caps.get(1))
        .map(|m| String::from_utf8_lossy(m.as_bytes()).into_owned());

    let encoding = parse_encoding(clear);

    Type1Header {
        font_name,
        encoding,
    }
}

fn parse_encoding(clear: &[u8]) -> Option<Type1Encoding> {
    let start = find(clear, b"/Encoding")?;
    let tail = &clear[start..];

    if ENCODING_NAME_RE
        .as_ref()
        .is_some_and(|re| re.find(tail).is_some_and(|m| m.start() == 0))
    {
        return Some(Type1Encoding::Standard);
    }

    let re = DUP_PUT_RE.as_ref()?;
    let mut map = BTreeMap::new();
    for caps in re.captures_iter(tail) {
        let (Some(code), Some(name)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        let Some(code) = std::str::from_utf8(code.as_bytes())
            .ok()
            .and_then(|s| s.parse::<u8>().ok())
        else {
            continue;
        };
        map.insert(code, String::from_utf8_lossy(name.as_bytes()).into_owned());
    }

    if map.is_empty() {
        None
    } else {
        Some(Type1Encoding::Custom(map))
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &[u8] = b"%!PS-AdobeFont-1.0: CMR10 003.002\n\
        /FontName /CMR10 def\n\
        /PaintType 0 def\n\
        /Encoding 256 array\n\
        0 1 255 {1 index exch /.notdef put} for\n\
        dup 65 /A put\n\
        dup 66 /B put\n\
        dup 161 /Gamma put\n\
        readonly def\n\
        currentdict end\n\
        currentfile eexec\n\
        dup 67 /C put";

    #[test]
    fn reads_font_name() {
        let header = parse_type1_header(HEADER);
        assert_eq!(header.font_name.as_deref(), Some("CMR10"));
    }

    #[test]
    fn reads_custom_encoding_before_eexec() {
        let header = parse_type1_header(HEADER);
        let Some(Type1Encoding::Custom(map)) = header.encoding else {
            panic!("expected custom encoding");
        };
        assert_eq!(map.len(), 3);
        assert_eq!(map.get(&65).map(String::as_str), Some("A"));
        assert_eq!(map.get(&161).map(String::as_str), Some("Gamma"));
        assert!(!map.contains_key(&67));
    }

    #[test]
    fn reads_standard_encoding() {
        let data = b"/FontName /Foo def /Encoding StandardEncoding def currentfile eexec";
        let header = parse_type1_header(data);
        assert_eq!(header.encoding, Some(Type1Encoding::Standard));
        assert_eq!(
            header.encoding.as_ref().and_then(|e| e.glyph_name(0x41)),
            Some("A")
        );
    }

    #[test]
    fn out_of_range_dup_codes_are_skipped() {
        let data = b"/Encoding 256 array dup 300 /A put dup 32 /space put readonly def";
        let header = parse_type1_header(data);
        let enc = header.encoding.expect("encoding");
        assert_eq!(enc.entries(), vec![(32, "space".to_string())]);
    }

    #[test]
    fn garbage_yields_empty_header() {
        let header = parse_type1_header(&[0xFF, 0x00, 0x80, 0x7F]);
        assert_eq!(header, Type1Header::default());
    }
}
