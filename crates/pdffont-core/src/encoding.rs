//! Predefined PDF base encodings and glyph-name resolution.
//!
//! Implements StandardEncoding, WinAnsiEncoding, MacRomanEncoding,
//! MacExpertEncoding and the built-in encodings of the Symbol and
//! ZapfDingbats fonts. Every table maps a byte code to an Adobe glyph name;
//! runes are obtained through the glyph list.

use std::collections::HashMap;
use std::sync::LazyLock;

/// A predefined simple-font encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BaseEncoding {
    /// StandardEncoding: Adobe standard Latin encoding.
    Standard,
    /// WinAnsiEncoding: Windows code page 1252 superset.
    WinAnsi,
    /// MacRomanEncoding: classic Mac OS Roman.
    MacRoman,
    /// MacExpertEncoding: expert glyph set with small caps and old-style figures.
    MacExpert,
    /// Built-in encoding of the Symbol font.
    Symbol,
    /// Built-in encoding of the ZapfDingbats font.
    ZapfDingbats,
}

impl BaseEncoding {
    /// Every predefined encoding.
    pub const ALL: [BaseEncoding; 6] = [
        BaseEncoding::Standard,
        BaseEncoding::WinAnsi,
        BaseEncoding::MacRoman,
        BaseEncoding::MacExpert,
        BaseEncoding::Symbol,
        BaseEncoding::ZapfDingbats,
    ];

    /// Look up an encoding by its PDF name (e.g. `WinAnsiEncoding`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "StandardEncoding" => Some(BaseEncoding::Standard),
            "WinAnsiEncoding" => Some(BaseEncoding::WinAnsi),
            "MacRomanEncoding" => Some(BaseEncoding::MacRoman),
            "MacExpertEncoding" => Some(BaseEncoding::MacExpert),
            "SymbolEncoding" => Some(BaseEncoding::Symbol),
            "ZapfDingbatsEncoding" => Some(BaseEncoding::ZapfDingbats),
            _ => None,
        }
    }

    /// The PDF name of this encoding.
    pub fn name(self) -> &'static str {
        match self {
            BaseEncoding::Standard => "StandardEncoding",
            BaseEncoding::WinAnsi => "WinAnsiEncoding",
            BaseEncoding::MacRoman => "MacRomanEncoding",
            BaseEncoding::MacExpert => "MacExpertEncoding",
            BaseEncoding::Symbol => "SymbolEncoding",
            BaseEncoding::ZapfDingbats => "ZapfDingbatsEncoding",
        }
    }

    /// Whether the name may appear as a font's `/Encoding` or `/BaseEncoding`.
    ///
    /// Symbol and ZapfDingbats encodings are font-intrinsic and never written.
    pub fn is_persistable(self) -> bool {
        matches!(
            self,
            BaseEncoding::Standard
                | BaseEncoding::WinAnsi
                | BaseEncoding::MacRoman
                | BaseEncoding::MacExpert
        )
    }

    fn table(self) -> &'static CodeTable {
        let tables: &'static [CodeTable; 6] = &CODE_TABLES;
        match self {
            BaseEncoding::Standard => &tables[0],
            BaseEncoding::WinAnsi => &tables[1],
            BaseEncoding::MacRoman => &tables[2],
            BaseEncoding::MacExpert => &tables[3],
            BaseEncoding::Symbol => &tables[4],
            BaseEncoding::ZapfDingbats => &tables[5],
        }
    }

    /// The glyph name assigned to `code`, if any.
    pub fn glyph_name(self, code: u8) -> Option<&'static str> {
        self.table().names[code as usize]
    }

    /// The Unicode character for `code`, if any.
    pub fn decode(self, code: u8) -> Option<char> {
        self.table().runes[code as usize]
    }

    /// Decode a byte string, replacing unmapped bytes with U+FFFD.
    pub fn decode_bytes(self, bytes: &[u8]) -> String {
        bytes
            .iter()
            .map(|&b| self.decode(b).unwrap_or('\u{FFFD}'))
            .collect()
    }

    /// The lowest code assigned to `glyph`, if any.
    pub fn code_for_glyph(self, glyph: &str) -> Option<u8> {
        self.table().codes.get(glyph).copied()
    }

    /// Iterate over `(code, glyph name)` pairs in code order.
    pub fn entries(self) -> impl Iterator<Item = (u8, &'static str)> {
        self.table()
            .names
            .iter()
            .enumerate()
            .filter_map(|(code, name)| name.map(|n| (code as u8, n)))
    }
}

struct CodeTable {
    names: [Option<&'static str>; 256],
    runes: [Option<char>; 256],
    codes: HashMap<&'static str, u8>,
}

impl CodeTable {
    fn from_entries(entries: impl Iterator<Item = (u8, &'static str, Option<char>)>) -> Self {
        let mut names = [None; 256];
        let mut runes = [None; 256];
        let mut codes = HashMap::new();
        for (code, name, rune) in entries {
            names[code as usize] = Some(name);
            runes[code as usize] = rune;
            let lowest = codes.entry(name).or_insert(code);
            *lowest = (*lowest).min(code);
        }
        Self {
            names,
            runes,
            codes,
        }
    }

    fn latin(column: impl Fn(&LatinRow) -> Option<u8>) -> Self {
        Self::from_entries(LATIN_CHARSET.iter().filter_map(|row| {
            column(row).map(|code| (code, row.0, glyph_name_to_char(row.0)))
        }))
    }

    // Font-specific sets carry their own runes: Symbol's `mu` is Greek, not
    // the Latin micro sign.
    fn font_specific(rows: &'static [(u8, &'static str, char)]) -> Self {
        Self::from_entries(rows.iter().map(|&(code, name, ch)| (code, name, Some(ch))))
    }
}

static CODE_TABLES: LazyLock<[CodeTable; 6]> = LazyLock::new(|| {
    [
        CodeTable::latin(|row| row.1),
        CodeTable::latin(|row| row.3),
        CodeTable::latin(|row| row.2),
        CodeTable::font_specific(MAC_EXPERT_ENCODING),
        CodeTable::font_specific(SYMBOL_ENCODING),
        CodeTable::font_specific(ZAPF_DINGBATS_ENCODING),
    ]
});

static GLYPH_TO_CHAR: LazyLock<HashMap<&'static str, char>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    let font_specific = MAC_EXPERT_ENCODING
        .iter()
        .chain(SYMBOL_ENCODING)
        .chain(ZAPF_DINGBATS_ENCODING)
        .map(|&(_, name, ch)| (name, ch));
    for (name, ch) in GLYPH_LIST.iter().copied().chain(font_specific) {
        map.entry(name).or_insert(ch);
    }
    map
});

static CHAR_TO_GLYPH: LazyLock<HashMap<char, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    let font_specific = MAC_EXPERT_ENCODING
        .iter()
        .chain(SYMBOL_ENCODING)
        .chain(ZAPF_DINGBATS_ENCODING)
        .map(|&(_, name, ch)| (name, ch));
    for (name, ch) in GLYPH_LIST.iter().copied().chain(font_specific) {
        map.entry(ch).or_insert(name);
    }
    map
});

/// Resolve a PDF glyph name to its Unicode character.
///
/// Handles:
/// - Adobe glyph names of the Latin, Symbol, MacExpert and ZapfDingbats sets
/// - `uniXXXX` (first code point of `uniXXXXXXXX…` sequences)
/// - `uXXXX` to `uXXXXXX`
/// - suffixed variants such as `a.sc` or `one.oldstyle`
pub fn glyph_name_to_char(name: &str) -> Option<char> {
    if let Some(&ch) = GLYPH_TO_CHAR.get(name) {
        return Some(ch);
    }

    if let Some(hex) = name.strip_prefix("uni") {
        if hex.len() >= 4 && hex.len() % 4 == 0 && hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return u32::from_str_radix(&hex[..4], 16)
                .ok()
                .and_then(char::from_u32);
        }
    }

    if let Some(hex) = name.strip_prefix('u') {
        if (4..=6).contains(&hex.len()) && hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return u32::from_str_radix(hex, 16).ok().and_then(char::from_u32);
        }
    }

    match name.split_once('.') {
        Some((base, _)) if !base.is_empty() => glyph_name_to_char(base),
        _ => None,
    }
}

/// The preferred glyph name for a Unicode character.
///
/// Characters without a named glyph get `uniXXXX` (BMP) or `uXXXXXX`.
pub fn char_to_glyph_name(ch: char) -> String {
    if let Some(name) = CHAR_TO_GLYPH.get(&ch) {
        return (*name).to_string();
    }
    let cp = ch as u32;
    if cp <= 0xFFFF {
        format!("uni{cp:04X}")
    } else {
        format!("u{cp:06X}")
    }
}

// =============================================================================
// Glyph data
// =============================================================================

/// `(glyph name, StandardEncoding, MacRomanEncoding, WinAnsiEncoding)`
/// positions of the Latin character set.
type LatinRow = (&'static str, Option<u8>, Option<u8>, Option<u8>);

static LATIN_CHARSET: &[LatinRow] = &[
    ("A", Some(0x41), Some(0x41), Some(0x41)),
    ("AE", Some(0xE1), Some(0xAE), Some(0xC6)),
    ("Aacute", None, Some(0xE7), Some(0xC1)),
    ("Acircumflex", None, Some(0xE5), Some(0xC2)),
    ("Adieresis", None, Some(0x80), Some(0xC4)),
    ("Agrave", None, Some(0xCB), Some(0xC0)),
    ("Aring", None, Some(0x81), Some(0xC5)),
    ("Atilde", None, Some(0xCC), Some(0xC3)),
    ("B", Some(0x42), Some(0x42), Some(0x42)),
    ("C", Some(0x43), Some(0x43), Some(0x43)),
    ("Ccedilla", None, Some(0x82), Some(0xC7)),
    ("D", Some(0x44), Some(0x44), Some(0x44)),
    ("E", Some(0x45), Some(0x45), Some(0x45)),
    ("Eacute", None, Some(0x83), Some(0xC9)),
    ("Ecircumflex", None, Some(0xE6), Some(0xCA)),
    ("Edieresis", None, Some(0xE8), Some(0xCB)),
    ("Egrave", None, Some(0xE9), Some(0xC8)),
    ("Eth", None, None, Some(0xD0)),
    ("Euro", None, None, Some(0x80)),
    ("F", Some(0x46), Some(0x46), Some(0x46)),
    ("G", Some(0x47), Some(0x47), Some(0x47)),
    ("H", Some(0x48), Some(0x48), Some(0x48)),
    ("I", Some(0x49), Some(0x49), Some(0x49)),
    ("Iacute", None, Some(0xEA), Some(0xCD)),
    ("Icircumflex", None, Some(0xEB), Some(0xCE)),
    ("Idieresis", None, Some(0xEC), Some(0xCF)),
    ("Igrave", None, Some(0xED), Some(0xCC)),
    ("J", Some(0x4A), Some(0x4A), Some(0x4A)),
    ("K", Some(0x4B), Some(0x4B), Some(0x4B)),
    ("L", Some(0x4C), Some(0x4C), Some(0x4C)),
    ("Lslash", Some(0xE8), None, None),
    ("M", Some(0x4D), Some(0x4D), Some(0x4D)),
    ("N", Some(0x4E), Some(0x4E), Some(0x4E)),
    ("Ntilde", None, Some(0x84), Some(0xD1)),
    ("O", Some(0x4F), Some(0x4F), Some(0x4F)),
    ("OE", Some(0xEA), Some(0xCE), Some(0x8C)),
    ("Oacute", None, Some(0xEE), Some(0xD3)),
    ("Ocircumflex", None, Some(0xEF), Some(0xD4)),
    ("Odieresis", None, Some(0x85), Some(0xD6)),
    ("Ograve", None, Some(0xF1), Some(0xD2)),
    ("Oslash", Some(0xE9), Some(0xAF), Some(0xD8)),
    ("Otilde", None, Some(0xCD), Some(0xD5)),
    ("P", Some(0x50), Some(0x50), Some(0x50)),
    ("Q", Some(0x51), Some(0x51), Some(0x51)),
    ("R", Some(0x52), Some(0x52), Some(0x52)),
    ("S", Some(0x53), Some(0x53), Some(0x53)),
    ("Scaron", None, None, Some(0x8A)),
    ("T", Some(0x54), Some(0x54), Some(0x54)),
    ("Thorn", None, None, Some(0xDE)),
    ("U", Some(0x55), Some(0x55), Some(0x55)),
    ("Uacute", None, Some(0xF2), Some(0xDA)),
    ("Ucircumflex", None, Some(0xF3), Some(0xDB)),
    ("Udieresis", None, Some(0x86), Some(0xDC)),
    ("Ugrave", None, Some(0xF4), Some(0xD9)),
    ("V", Some(0x56), Some(0x56), Some(0x56)),
    ("W", Some(0x57), Some(0x57), Some(0x57)),
    ("X", Some(0x58), Some(0x58), Some(0x58)),
    ("Y", Some(0x59), Some(0x59), Some(0x59)),
    ("Yacute", None, None, Some(0xDD)),
    ("Ydieresis", None, Some(0xD9), Some(0x9F)),
    ("Z", Some(0x5A), Some(0x5A), Some(0x5A)),
    ("Zcaron", None, None, Some(0x8E)),
    ("a", Some(0x61), Some(0x61), Some(0x61)),
    ("aacute", None, Some(0x87), Some(0xE1)),
    ("acircumflex", None, Some(0x89), Some(0xE2)),
    ("acute", Some(0xC2), Some(0xAB), Some(0xB4)),
    ("adieresis", None, Some(0x8A), Some(0xE4)),
    ("ae", Some(0xF1), Some(0xBE), Some(0xE6)),
    ("agrave", None, Some(0x88), Some(0xE0)),
    ("ampersand", Some(0x26), Some(0x26), Some(0x26)),
    ("aring", None, Some(0x8C), Some(0xE5)),
    ("asciicircum", Some(0x5E), Some(0x5E), Some(0x5E)),
    ("asciitilde", Some(0x7E), Some(0x7E), Some(0x7E)),
    ("asterisk", Some(0x2A), Some(0x2A), Some(0x2A)),
    ("at", Some(0x40), Some(0x40), Some(0x40)),
    ("atilde", None, Some(0x8B), Some(0xE3)),
    ("b", Some(0x62), Some(0x62), Some(0x62)),
    ("backslash", Some(0x5C), Some(0x5C), Some(0x5C)),
    ("bar", Some(0x7C), Some(0x7C), Some(0x7C)),
    ("braceleft", Some(0x7B), Some(0x7B), Some(0x7B)),
    ("braceright", Some(0x7D), Some(0x7D), Some(0x7D)),
    ("bracketleft", Some(0x5B), Some(0x5B), Some(0x5B)),
    ("bracketright", Some(0x5D), Some(0x5D), Some(0x5D)),
    ("breve", Some(0xC6), Some(0xF9), None),
    ("brokenbar", None, None, Some(0xA6)),
    ("bullet", Some(0xB7), Some(0xA5), Some(0x95)),
    ("c", Some(0x63), Some(0x63), Some(0x63)),
    ("caron", Some(0xCF), Some(0xFF), None),
    ("ccedilla", None, Some(0x8D), Some(0xE7)),
    ("cedilla", Some(0xCB), Some(0xFC), Some(0xB8)),
    ("cent", Some(0xA2), Some(0xA2), Some(0xA2)),
    ("circumflex", Some(0xC3), Some(0xF6), Some(0x88)),
    ("colon", Some(0x3A), Some(0x3A), Some(0x3A)),
    ("comma", Some(0x2C), Some(0x2C), Some(0x2C)),
    ("copyright", None, Some(0xA9), Some(0xA9)),
    ("currency", Some(0xA8), Some(0xDB), Some(0xA4)),
    ("d", Some(0x64), Some(0x64), Some(0x64)),
    ("dagger", Some(0xB2), Some(0xA0), Some(0x86)),
    ("daggerdbl", Some(0xB3), Some(0xE0), Some(0x87)),
    ("degree", None, Some(0xA1), Some(0xB0)),
    ("dieresis", Some(0xC8), Some(0xAC), Some(0xA8)),
    ("divide", None, Some(0xD6), Some(0xF7)),
    ("dollar", Some(0x24), Some(0x24), Some(0x24)),
    ("dotaccent", Some(0xC7), Some(0xFA), None),
    ("dotlessi", Some(0xF5), Some(0xF5), None),
    ("e", Some(0x65), Some(0x65), Some(0x65)),
    ("eacute", None, Some(0x8E), Some(0xE9)),
    ("ecircumflex", None, Some(0x90), Some(0xEA)),
    ("edieresis", None, Some(0x91), Some(0xEB)),
    ("egrave", None, Some(0x8F), Some(0xE8)),
    ("eight", Some(0x38), Some(0x38), Some(0x38)),
    ("ellipsis", Some(0xBC), Some(0xC9), Some(0x85)),
    ("emdash", Some(0xD0), Some(0xD1), Some(0x97)),
    ("endash", Some(0xB1), Some(0xD0), Some(0x96)),
    ("equal", Some(0x3D), Some(0x3D), Some(0x3D)),
    ("eth", None, None, Some(0xF0)),
    ("exclam", Some(0x21), Some(0x21), Some(0x21)),
    ("exclamdown", Some(0xA1), Some(0xC1), Some(0xA1)),
    ("f", Some(0x66), Some(0x66), Some(0x66)),
    ("fi", Some(0xAE), Some(0xDE), None),
    ("five", Some(0x35), Some(0x35), Some(0x35)),
    ("fl", Some(0xAF), Some(0xDF), None),
    ("florin", Some(0xA6), Some(0xC4), Some(0x83)),
    ("four", Some(0x34), Some(0x34), Some(0x34)),
    ("fraction", Some(0xA4), Some(0xDA), None),
    ("g", Some(0x67), Some(0x67), Some(0x67)),
    ("germandbls", Some(0xFB), Some(0xA7), Some(0xDF)),
    ("grave", Some(0xC1), Some(0x60), Some(0x60)),
    ("greater", Some(0x3E), Some(0x3E), Some(0x3E)),
    ("guillemotleft", Some(0xAB), Some(0xC7), Some(0xAB)),
    ("guillemotright", Some(0xBB), Some(0xC8), Some(0xBB)),
    ("guilsinglleft", Some(0xAC), Some(0xDC), Some(0x8B)),
    ("guilsinglright", Some(0xAD), Some(0xDD), Some(0x9B)),
    ("h", Some(0x68), Some(0x68), Some(0x68)),
    ("hungarumlaut", Some(0xCD), Some(0xFD), None),
    ("hyphen", Some(0x2D), Some(0x2D), Some(0x2D)),
    ("i", Some(0x69), Some(0x69), Some(0x69)),
    ("iacute", None, Some(0x92), Some(0xED)),
    ("icircumflex", None, Some(0x94), Some(0xEE)),
    ("idieresis", None, Some(0x95), Some(0xEF)),
    ("igrave", None, Some(0x93), Some(0xEC)),
    ("j", Some(0x6A), Some(0x6A), Some(0x6A)),
    ("k", Some(0x6B), Some(0x6B), Some(0x6B)),
    ("l", Some(0x6C), Some(0x6C), Some(0x6C)),
    ("less", Some(0x3C), Some(0x3C), Some(0x3C)),
    ("logicalnot", None, Some(0xC2), Some(0xAC)),
    ("lslash", Some(0xF8), None, None),
    ("m", Some(0x6D), Some(0x6D), Some(0x6D)),
    ("macron", Some(0xC5), Some(0xF8), Some(0xAF)),
    ("mu", None, Some(0xB5), Some(0xB5)),
    ("multiply", None, None, Some(0xD7)),
    ("n", Some(0x6E), Some(0x6E), Some(0x6E)),
    ("nbspace", None, Some(0xCA), Some(0xA0)),
    ("nine", Some(0x39), Some(0x39), Some(0x39)),
    ("ntilde", None, Some(0x96), Some(0xF1)),
    ("numbersign", Some(0x23), Some(0x23), Some(0x23)),
    ("o", Some(0x6F), Some(0x6F), Some(0x6F)),
    ("oacute", None, Some(0x97), Some(0xF3)),
    ("ocircumflex", None, Some(0x99), Some(0xF4)),
    ("odieresis", None, Some(0x9A), Some(0xF6)),
    ("oe", Some(0xFA), Some(0xCF), Some(0x9C)),
    ("ogonek", Some(0xCE), Some(0xFE), None),
    ("ograve", None, Some(0x98), Some(0xF2)),
    ("one", Some(0x31), Some(0x31), Some(0x31)),
    ("onehalf", None, None, Some(0xBD)),
    ("onequarter", None, None, Some(0xBC)),
    ("onesuperior", None, None, Some(0xB9)),
    ("ordfeminine", Some(0xE3), Some(0xBB), Some(0xAA)),
    ("ordmasculine", Some(0xEB), Some(0xBC), Some(0xBA)),
    ("oslash", Some(0xF9), Some(0xBF), Some(0xF8)),
    ("otilde", None, Some(0x9B), Some(0xF5)),
    ("p", Some(0x70), Some(0x70), Some(0x70)),
    ("paragraph", Some(0xB6), Some(0xA6), Some(0xB6)),
    ("parenleft", Some(0x28), Some(0x28), Some(0x28)),
    ("parenright", Some(0x29), Some(0x29), Some(0x29)),
    ("percent", Some(0x25), Some(0x25), Some(0x25)),
    ("period", Some(0x2E), Some(0x2E), Some(0x2E)),
    ("periodcentered", Some(0xB4), Some(0xE1), Some(0xB7)),
    ("perthousand", Some(0xBD), Some(0xE4), Some(0x89)),
    ("plus", Some(0x2B), Some(0x2B), Some(0x2B)),
    ("plusminus", None, Some(0xB1), Some(0xB1)),
    ("q", Some(0x71), Some(0x71), Some(0x71)),
    ("question", Some(0x3F), Some(0x3F), Some(0x3F)),
    ("questiondown", Some(0xBF), Some(0xC0), Some(0xBF)),
    ("quotedbl", Some(0x22), Some(0x22), Some(0x22)),
    ("quotedblbase", Some(0xB9), Some(0xE3), Some(0x84)),
    ("quotedblleft", Some(0xAA), Some(0xD2), Some(0x93)),
    ("quotedblright", Some(0xBA), Some(0xD3), Some(0x94)),
    ("quoteleft", Some(0x60), Some(0xD4), Some(0x91)),
    ("quoteright", Some(0x27), Some(0xD5), Some(0x92)),
    ("quotesinglbase", Some(0xB8), Some(0xE2), Some(0x82)),
    ("quotesingle", Some(0xA9), Some(0x27), Some(0x27)),
    ("r", Some(0x72), Some(0x72), Some(0x72)),
    ("registered", None, Some(0xA8), Some(0xAE)),
    ("ring", Some(0xCA), Some(0xFB), None),
    ("s", Some(0x73), Some(0x73), Some(0x73)),
    ("scaron", None, None, Some(0x9A)),
    ("section", Some(0xA7), Some(0xA4), Some(0xA7)),
    ("semicolon", Some(0x3B), Some(0x3B), Some(0x3B)),
    ("seven", Some(0x37), Some(0x37), Some(0x37)),
    ("six", Some(0x36), Some(0x36), Some(0x36)),
    ("slash", Some(0x2F), Some(0x2F), Some(0x2F)),
    ("space", Some(0x20), Some(0x20), Some(0x20)),
    ("sterling", Some(0xA3), Some(0xA3), Some(0xA3)),
    ("t", Some(0x74), Some(0x74), Some(0x74)),
    ("thorn", None, None, Some(0xFE)),
    ("three", Some(0x33), Some(0x33), Some(0x33)),
    ("threequarters", None, None, Some(0xBE)),
    ("threesuperior", None, None, Some(0xB3)),
    ("tilde", Some(0xC4), Some(0xF7), Some(0x98)),
    ("trademark", None, Some(0xAA), Some(0x99)),
    ("two", Some(0x32), Some(0x32), Some(0x32)),
    ("twosuperior", None, None, Some(0xB2)),
    ("u", Some(0x75), Some(0x75), Some(0x75)),
    ("uacute", None, Some(0x9C), Some(0xFA)),
    ("ucircumflex", None, Some(0x9E), Some(0xFB)),
    ("udieresis", None, Some(0x9F), Some(0xFC)),
    ("ugrave", None, Some(0x9D), Some(0xF9)),
    ("underscore", Some(0x5F), Some(0x5F), Some(0x5F)),
    ("v", Some(0x76), Some(0x76), Some(0x76)),
    ("w", Some(0x77), Some(0x77), Some(0x77)),
    ("x", Some(0x78), Some(0x78), Some(0x78)),
    ("y", Some(0x79), Some(0x79), Some(0x79)),
    ("yacute", None, None, Some(0xFD)),
    ("ydieresis", None, Some(0xD8), Some(0xFF)),
    ("yen", Some(0xA5), Some(0xB4), Some(0xA5)),
    ("z", Some(0x7A), Some(0x7A), Some(0x7A)),
    ("zcaron", None, None, Some(0x9E)),
    ("zero", Some(0x30), Some(0x30), Some(0x30)),
    ("sfthyphen", None, None, Some(0xAD)),
];

/// Latin glyph names and their Unicode characters.
static GLYPH_LIST: &[(&str, char)] = &[
    ("A", 'A'),
    ("AE", '\u{00C6}'),
    ("Aacute", '\u{00C1}'),
    ("Acircumflex", '\u{00C2}'),
    ("Adieresis", '\u{00C4}'),
    ("Agrave", '\u{00C0}'),
    ("Aring", '\u{00C5}'),
    ("Atilde", '\u{00C3}'),
    ("B", 'B'),
    ("C", 'C'),
    ("Ccedilla", '\u{00C7}'),
    ("D", 'D'),
    ("E", 'E'),
    ("Eacute", '\u{00C9}'),
    ("Ecircumflex", '\u{00CA}'),
    ("Edieresis", '\u{00CB}'),
    ("Egrave", '\u{00C8}'),
    ("Eth", '\u{00D0}'),
    ("Euro", '\u{20AC}'),
    ("F", 'F'),
    ("G", 'G'),
    ("H", 'H'),
    ("I", 'I'),
    ("Iacute", '\u{00CD}'),
    ("Icircumflex", '\u{00CE}'),
    ("Idieresis", '\u{00CF}'),
    ("Igrave", '\u{00CC}'),
    ("J", 'J'),
    ("K", 'K'),
    ("L", 'L'),
    ("Lslash", '\u{0141}'),
    ("M", 'M'),
    ("N", 'N'),
    ("Ntilde", '\u{00D1}'),
    ("O", 'O'),
    ("OE", '\u{0152}'),
    ("Oacute", '\u{00D3}'),
    ("Ocircumflex", '\u{00D4}'),
    ("Odieresis", '\u{00D6}'),
    ("Ograve", '\u{00D2}'),
    ("Oslash", '\u{00D8}'),
    ("Otilde", '\u{00D5}'),
    ("P", 'P'),
    ("Q", 'Q'),
    ("R", 'R'),
    ("S", 'S'),
    ("Scaron", '\u{0160}'),
    ("T", 'T'),
    ("Thorn", '\u{00DE}'),
    ("U", 'U'),
    ("Uacute", '\u{00DA}'),
    ("Ucircumflex", '\u{00DB}'),
    ("Udieresis", '\u{00DC}'),
    ("Ugrave", '\u{00D9}'),
    ("V", 'V'),
    ("W", 'W'),
    ("X", 'X'),
    ("Y", 'Y'),
    ("Yacute", '\u{00DD}'),
    ("Ydieresis", '\u{0178}'),
    ("Z", 'Z'),
    ("Zcaron", '\u{017D}'),
    ("a", 'a'),
    ("aacute", '\u{00E1}'),
    ("acircumflex", '\u{00E2}'),
    ("acute", '\u{00B4}'),
    ("adieresis", '\u{00E4}'),
    ("ae", '\u{00E6}'),
    ("agrave", '\u{00E0}'),
    ("ampersand", '&'),
    ("aring", '\u{00E5}'),
    ("asciicircum", '^'),
    ("asciitilde", '~'),
    ("asterisk", '*'),
    ("at", '@'),
    ("atilde", '\u{00E3}'),
    ("b", 'b'),
    ("backslash", '\\'),
    ("bar", '|'),
    ("braceleft", '{'),
    ("braceright", '}'),
    ("bracketleft", '['),
    ("bracketright", ']'),
    ("breve", '\u{02D8}'),
    ("brokenbar", '\u{00A6}'),
    ("bullet", '\u{2022}'),
    ("c", 'c'),
    ("caron", '\u{02C7}'),
    ("ccedilla", '\u{00E7}'),
    ("cedilla", '\u{00B8}'),
    ("cent", '\u{00A2}'),
    ("circumflex", '\u{02C6}'),
    ("colon", ':'),
    ("comma", ','),
    ("copyright", '\u{00A9}'),
    ("currency", '\u{00A4}'),
    ("d", 'd'),
    ("dagger", '\u{2020}'),
    ("daggerdbl", '\u{2021}'),
    ("degree", '\u{00B0}'),
    ("dieresis", '\u{00A8}'),
    ("divide", '\u{00F7}'),
    ("dollar", '$'),
    ("dotaccent", '\u{02D9}'),
    ("dotlessi", '\u{0131}'),
    ("e", 'e'),
    ("eacute", '\u{00E9}'),
    ("ecircumflex", '\u{00EA}'),
    ("edieresis", '\u{00EB}'),
    ("egrave", '\u{00E8}'),
    ("eight", '8'),
    ("ellipsis", '\u{2026}'),
    ("emdash", '\u{2014}'),
    ("endash", '\u{2013}'),
    ("equal", '='),
    ("eth", '\u{00F0}'),
    ("exclam", '!'),
    ("exclamdown", '\u{00A1}'),
    ("f", 'f'),
    ("fi", '\u{FB01}'),
    ("five", '5'),
    ("fl", '\u{FB02}'),
    ("florin", '\u{0192}'),
    ("four", '4'),
    ("fraction", '\u{2044}'),
    ("g", 'g'),
    ("germandbls", '\u{00DF}'),
    ("grave", '`'),
    ("greater", '>'),
    ("guillemotleft", '\u{00AB}'),
    ("guillemotright", '\u{00BB}'),
    ("guilsinglleft", '\u{2039}'),
    ("guilsinglright", '\u{203A}'),
    ("h", 'h'),
    ("hungarumlaut", '\u{02DD}'),
    ("hyphen", '-'),
    ("i", 'i'),
    ("iacute", '\u{00ED}'),
    ("icircumflex", '\u{00EE}'),
    ("idieresis", '\u{00EF}'),
    ("igrave", '\u{00EC}'),
    ("j", 'j'),
    ("k", 'k'),
    ("l", 'l'),
    ("less", '<'),
    ("logicalnot", '\u{00AC}'),
    ("lslash", '\u{0142}'),
    ("m", 'm'),
    ("macron", '\u{00AF}'),
    ("minus", '\u{2212}'),
    ("mu", '\u{00B5}'),
    ("multiply", '\u{00D7}'),
    ("n", 'n'),
    ("nbspace", '\u{00A0}'),
    ("nine", '9'),
    ("ntilde", '\u{00F1}'),
    ("numbersign", '#'),
    ("o", 'o'),
    ("oacute", '\u{00F3}'),
    ("ocircumflex", '\u{00F4}'),
    ("odieresis", '\u{00F6}'),
    ("oe", '\u{0153}'),
    ("ogonek", '\u{02DB}'),
    ("ograve", '\u{00F2}'),
    ("one", '1'),
    ("onehalf", '\u{00BD}'),
    ("onequarter", '\u{00BC}'),
    ("onesuperior", '\u{00B9}'),
    ("ordfeminine", '\u{00AA}'),
    ("ordmasculine", '\u{00BA}'),
    ("oslash", '\u{00F8}'),
    ("otilde", '\u{00F5}'),
    ("p", 'p'),
    ("paragraph", '\u{00B6}'),
    ("parenleft", '('),
    ("parenright", ')'),
    ("percent", '%'),
    ("period", '.'),
    ("periodcentered", '\u{00B7}'),
    ("perthousand", '\u{2030}'),
    ("plus", '+'),
    ("plusminus", '\u{00B1}'),
    ("q", 'q'),
    ("question", '?'),
    ("questiondown", '\u{00BF}'),
    ("quotedbl", '"'),
    ("quotedblbase", '\u{201E}'),
    ("quotedblleft", '\u{201C}'),
    ("quotedblright", '\u{201D}'),
    ("quoteleft", '\u{2018}'),
    ("quoteright", '\u{2019}'),
    ("quotesinglbase", '\u{201A}'),
    ("quotesingle", '\''),
    ("r", 'r'),
    ("registered", '\u{00AE}'),
    ("ring", '\u{02DA}'),
    ("s", 's'),
    ("scaron", '\u{0161}'),
    ("section", '\u{00A7}'),
    ("semicolon", ';'),
    ("seven", '7'),
    ("sfthyphen", '\u{00AD}'),
    ("six", '6'),
    ("slash", '/'),
    ("space", ' '),
    ("sterling", '\u{00A3}'),
    ("t", 't'),
    ("thorn", '\u{00FE}'),
    ("three", '3'),
    ("threequarters", '\u{00BE}'),
    ("threesuperior", '\u{00B3}'),
    ("tilde", '\u{02DC}'),
    ("trademark", '\u{2122}'),
    ("two", '2'),
    ("twosuperior", '\u{00B2}'),
    ("u", 'u'),
    ("uacute", '\u{00FA}'),
    ("ucircumflex", '\u{00FB}'),
    ("udieresis", '\u{00FC}'),
    ("ugrave", '\u{00F9}'),
    ("underscore", '_'),
    ("v", 'v'),
    ("w", 'w'),
    ("x", 'x'),
    ("y", 'y'),
    ("yacute", '\u{00FD}'),
    ("ydieresis", '\u{00FF}'),
    ("yen", '\u{00A5}'),
    ("z", 'z'),
    ("zcaron", '\u{017E}'),
    ("zero", '0'),
];

/// MacExpertEncoding: `(code, glyph name, character)`.
static MAC_EXPERT_ENCODING: &[(u8, &str, char)] = &[
    (0x20, "space", ' '),
    (0x21, "exclamsmall", '\u{F721}'),
    (0x22, "Hungarumlautsmall", '\u{F6F8}'),
    (0x23, "centoldstyle", '\u{F7A2}'),
    (0x24, "dollaroldstyle", '\u{F724}'),
    (0x25, "dollarsuperior", '\u{F6E4}'),
    (0x26, "ampersandsmall", '\u{F726}'),
    (0x27, "Acutesmall", '\u{F7B4}'),
    (0x28, "parenleftsuperior", '\u{207D}'),
    (0x29, "parenrightsuperior", '\u{207E}'),
    (0x2A, "twodotenleader", '\u{2025}'),
    (0x2B, "onedotenleader", '\u{2024}'),
    (0x2C, "comma", ','),
    (0x2D, "hyphen", '-'),
    (0x2E, "period", '.'),
    (0x2F, "fraction", '\u{2044}'),
    (0x30, "zerooldstyle", '\u{F730}'),
    (0x31, "oneoldstyle", '\u{F731}'),
    (0x32, "twooldstyle", '\u{F732}'),
    (0x33, "threeoldstyle", '\u{F733}'),
    (0x34, "fouroldstyle", '\u{F734}'),
    (0x35, "fiveoldstyle", '\u{F735}'),
    (0x36, "sixoldstyle", '\u{F736}'),
    (0x37, "sevenoldstyle", '\u{F737}'),
    (0x38, "eightoldstyle", '\u{F738}'),
    (0x39, "nineoldstyle", '\u{F739}'),
    (0x3A, "colon", ':'),
    (0x3B, "semicolon", ';'),
    (0x3D, "threequartersemdash", '\u{F6DE}'),
    (0x3F, "questionsmall", '\u{F73F}'),
    (0x44, "Ethsmall", '\u{F7F0}'),
    (0x47, "onequarter", '\u{00BC}'),
    (0x48, "onehalf", '\u{00BD}'),
    (0x49, "threequarters", '\u{00BE}'),
    (0x4A, "oneeighth", '\u{215B}'),
    (0x4B, "threeeighths", '\u{215C}'),
    (0x4C, "fiveeighths", '\u{215D}'),
    (0x4D, "seveneighths", '\u{215E}'),
    (0x4E, "onethird", '\u{2153}'),
    (0x4F, "twothirds", '\u{2154}'),
    (0x56, "ff", '\u{FB00}'),
    (0x57, "fi", '\u{FB01}'),
    (0x58, "fl", '\u{FB02}'),
    (0x59, "ffi", '\u{FB03}'),
    (0x5A, "ffl", '\u{FB04}'),
    (0x5B, "parenleftinferior", '\u{208D}'),
    (0x5D, "parenrightinferior", '\u{208E}'),
    (0x5E, "Circumflexsmall", '\u{F6F6}'),
    (0x5F, "hypheninferior", '\u{F6E5}'),
    (0x60, "Gravesmall", '\u{F760}'),
    (0x61, "Asmall", '\u{F761}'),
    (0x62, "Bsmall", '\u{F762}'),
    (0x63, "Csmall", '\u{F763}'),
    (0x64, "Dsmall", '\u{F764}'),
    (0x65, "Esmall", '\u{F765}'),
    (0x66, "Fsmall", '\u{F766}'),
    (0x67, "Gsmall", '\u{F767}'),
    (0x68, "Hsmall", '\u{F768}'),
    (0x69, "Ismall", '\u{F769}'),
    (0x6A, "Jsmall", '\u{F76A}'),
    (0x6B, "Ksmall", '\u{F76B}'),
    (0x6C, "Lsmall", '\u{F76C}'),
    (0x6D, "Msmall", '\u{F76D}'),
    (0x6E, "Nsmall", '\u{F76E}'),
    (0x6F, "Osmall", '\u{F76F}'),
    (0x70, "Psmall", '\u{F770}'),
    (0x71, "Qsmall", '\u{F771}'),
    (0x72, "Rsmall", '\u{F772}'),
    (0x73, "Ssmall", '\u{F773}'),
    (0x74, "Tsmall", '\u{F774}'),
    (0x75, "Usmall", '\u{F775}'),
    (0x76, "Vsmall", '\u{F776}'),
    (0x77, "Wsmall", '\u{F777}'),
    (0x78, "Xsmall", '\u{F778}'),
    (0x79, "Ysmall", '\u{F779}'),
    (0x7A, "Zsmall", '\u{F77A}'),
    (0x7B, "colonmonetary", '\u{20A1}'),
    (0x7C, "onefitted", '\u{F6DC}'),
    (0x7D, "rupiah", '\u{F6DD}'),
    (0x7E, "Tildesmall", '\u{F6FE}'),
    (0x81, "asuperior", '\u{F6E9}'),
    (0x82, "centsuperior", '\u{F6E0}'),
    (0x87, "Aacutesmall", '\u{F7E1}'),
    (0x88, "Agravesmall", '\u{F7E0}'),
    (0x89, "Acircumflexsmall", '\u{F7E2}'),
    (0x8A, "Adieresissmall", '\u{F7E4}'),
    (0x8B, "Atildesmall", '\u{F7E3}'),
    (0x8C, "Aringsmall", '\u{F7E5}'),
    (0x8D, "Ccedillasmall", '\u{F7E7}'),
    (0x8E, "Eacutesmall", '\u{F7E9}'),
    (0x8F, "Egravesmall", '\u{F7E8}'),
    (0x90, "Ecircumflexsmall", '\u{F7EA}'),
    (0x91, "Edieresissmall", '\u{F7EB}'),
    (0x92, "Iacutesmall", '\u{F7ED}'),
    (0x93, "Igravesmall", '\u{F7EC}'),
    (0x94, "Icircumflexsmall", '\u{F7EE}'),
    (0x95, "Idieresissmall", '\u{F7EF}'),
    (0x96, "Ntildesmall", '\u{F7F1}'),
    (0x97, "Oacutesmall", '\u{F7F3}'),
    (0x98, "Ogravesmall", '\u{F7F2}'),
    (0x99, "Ocircumflexsmall", '\u{F7F4}'),
    (0x9A, "Odieresissmall", '\u{F7F6}'),
    (0x9B, "Otildesmall", '\u{F7F5}'),
    (0x9C, "Uacutesmall", '\u{F7FA}'),
    (0x9D, "Ugravesmall", '\u{F7F9}'),
    (0x9E, "Ucircumflexsmall", '\u{F7FB}'),
    (0x9F, "Udieresissmall", '\u{F7FC}'),
    (0xA1, "eightsuperior", '\u{2078}'),
    (0xA2, "fourinferior", '\u{2084}'),
    (0xA3, "threeinferior", '\u{2083}'),
    (0xA4, "sixinferior", '\u{2086}'),
    (0xA5, "eightinferior", '\u{2088}'),
    (0xA6, "seveninferior", '\u{2087}'),
    (0xA7, "Scaronsmall", '\u{F6FD}'),
    (0xA9, "centinferior", '\u{F6DF}'),
    (0xAA, "twoinferior", '\u{2082}'),
    (0xAC, "Dieresissmall", '\u{F7A8}'),
    (0xAE, "Caronsmall", '\u{F6F5}'),
    (0xAF, "osuperior", '\u{F6F0}'),
    (0xB0, "fiveinferior", '\u{2085}'),
    (0xB2, "commainferior", '\u{F6E1}'),
    (0xB3, "periodinferior", '\u{F6E7}'),
    (0xB4, "Yacutesmall", '\u{F7FD}'),
    (0xB6, "dollarinferior", '\u{F6E3}'),
    (0xB9, "Thornsmall", '\u{F7FE}'),
    (0xBB, "nineinferior", '\u{2089}'),
    (0xBC, "zeroinferior", '\u{2080}'),
    (0xBD, "Zcaronsmall", '\u{F6FF}'),
    (0xBE, "AEsmall", '\u{F7E6}'),
    (0xBF, "Oslashsmall", '\u{F7F8}'),
    (0xC0, "questiondownsmall", '\u{F7BF}'),
    (0xC1, "oneinferior", '\u{2081}'),
    (0xC2, "Lslashsmall", '\u{F6F9}'),
    (0xC9, "Cedillasmall", '\u{F7B8}'),
    (0xCF, "OEsmall", '\u{F6FA}'),
    (0xD0, "figuredash", '\u{2012}'),
    (0xD1, "hyphensuperior", '\u{F6E6}'),
    (0xD6, "exclamdownsmall", '\u{F7A1}'),
    (0xD8, "Ydieresissmall", '\u{F7FF}'),
    (0xDA, "onesuperior", '\u{00B9}'),
    (0xDB, "twosuperior", '\u{00B2}'),
    (0xDC, "threesuperior", '\u{00B3}'),
    (0xDD, "foursuperior", '\u{2074}'),
    (0xDE, "fivesuperior", '\u{2075}'),
    (0xDF, "sixsuperior", '\u{2076}'),
    (0xE0, "sevensuperior", '\u{2077}'),
    (0xE1, "ninesuperior", '\u{2079}'),
    (0xE2, "zerosuperior", '\u{2070}'),
    (0xE4, "esuperior", '\u{F6EC}'),
    (0xE5, "rsuperior", '\u{F6F1}'),
    (0xE6, "tsuperior", '\u{F6F3}'),
    (0xE9, "isuperior", '\u{F6ED}'),
    (0xEA, "ssuperior", '\u{F6F2}'),
    (0xEB, "dsuperior", '\u{F6EB}'),
    (0xF1, "lsuperior", '\u{F6EE}'),
    (0xF2, "Ogoneksmall", '\u{F6FB}'),
    (0xF3, "Brevesmall", '\u{F6F4}'),
    (0xF4, "Macronsmall", '\u{F7AF}'),
    (0xF5, "bsuperior", '\u{F6EA}'),
    (0xF6, "nsuperior", '\u{207F}'),
    (0xF7, "msuperior", '\u{F6EF}'),
    (0xF8, "commasuperior", '\u{F6E2}'),
    (0xF9, "periodsuperior", '\u{F6E8}'),
    (0xFA, "Dotaccentsmall", '\u{F6F7}'),
    (0xFB, "Ringsmall", '\u{F6FC}'),
];

/// Built-in encoding of the Symbol font.
static SYMBOL_ENCODING: &[(u8, &str, char)] = &[
    (0x20, "space", ' '),
    (0x21, "exclam", '!'),
    (0x22, "universal", '\u{2200}'),
    (0x23, "numbersign", '#'),
    (0x24, "existential", '\u{2203}'),
    (0x25, "percent", '%'),
    (0x26, "ampersand", '&'),
    (0x27, "suchthat", '\u{220B}'),
    (0x28, "parenleft", '('),
    (0x29, "parenright", ')'),
    (0x2A, "asteriskmath", '\u{2217}'),
    (0x2B, "plus", '+'),
    (0x2C, "comma", ','),
    (0x2D, "minus", '\u{2212}'),
    (0x2E, "period", '.'),
    (0x2F, "slash", '/'),
    (0x30, "zero", '0'),
    (0x31, "one", '1'),
    (0x32, "two", '2'),
    (0x33, "three", '3'),
    (0x34, "four", '4'),
    (0x35, "five", '5'),
    (0x36, "six", '6'),
    (0x37, "seven", '7'),
    (0x38, "eight", '8'),
    (0x39, "nine", '9'),
    (0x3A, "colon", ':'),
    (0x3B, "semicolon", ';'),
    (0x3C, "less", '<'),
    (0x3D, "equal", '='),
    (0x3E, "greater", '>'),
    (0x3F, "question", '?'),
    (0x40, "congruent", '\u{2245}'),
    (0x41, "Alpha", '\u{0391}'),
    (0x42, "Beta", '\u{0392}'),
    (0x43, "Chi", '\u{03A7}'),
    (0x44, "Delta", '\u{0394}'),
    (0x45, "Epsilon", '\u{0395}'),
    (0x46, "Phi", '\u{03A6}'),
    (0x47, "Gamma", '\u{0393}'),
    (0x48, "Eta", '\u{0397}'),
    (0x49, "Iota", '\u{0399}'),
    (0x4A, "theta1", '\u{03D1}'),
    (0x4B, "Kappa", '\u{039A}'),
    (0x4C, "Lambda", '\u{039B}'),
    (0x4D, "Mu", '\u{039C}'),
    (0x4E, "Nu", '\u{039D}'),
    (0x4F, "Omicron", '\u{039F}'),
    (0x50, "Pi", '\u{03A0}'),
    (0x51, "Theta", '\u{0398}'),
    (0x52, "Rho", '\u{03A1}'),
    (0x53, "Sigma", '\u{03A3}'),
    (0x54, "Tau", '\u{03A4}'),
    (0x55, "Upsilon", '\u{03A5}'),
    (0x56, "sigma1", '\u{03C2}'),
    (0x57, "Omega", '\u{03A9}'),
    (0x58, "Xi", '\u{039E}'),
    (0x59, "Psi", '\u{03A8}'),
    (0x5A, "Zeta", '\u{0396}'),
    (0x5B, "bracketleft", '['),
    (0x5C, "therefore", '\u{2234}'),
    (0x5D, "bracketright", ']'),
    (0x5E, "perpendicular", '\u{22A5}'),
    (0x5F, "underscore", '_'),
    (0x60, "radicalex", '\u{F8E5}'),
    (0x61, "alpha", '\u{03B1}'),
    (0x62, "beta", '\u{03B2}'),
    (0x63, "chi", '\u{03C7}'),
    (0x64, "delta", '\u{03B4}'),
    (0x65, "epsilon", '\u{03B5}'),
    (0x66, "phi", '\u{03C6}'),
    (0x67, "gamma", '\u{03B3}'),
    (0x68, "eta", '\u{03B7}'),
    (0x69, "iota", '\u{03B9}'),
    (0x6A, "phi1", '\u{03D5}'),
    (0x6B, "kappa", '\u{03BA}'),
    (0x6C, "lambda", '\u{03BB}'),
    (0x6D, "mu", '\u{03BC}'),
    (0x6E, "nu", '\u{03BD}'),
    (0x6F, "omicron", '\u{03BF}'),
    (0x70, "pi", '\u{03C0}'),
    (0x71, "theta", '\u{03B8}'),
    (0x72, "rho", '\u{03C1}'),
    (0x73, "sigma", '\u{03C3}'),
    (0x74, "tau", '\u{03C4}'),
    (0x75, "upsilon", '\u{03C5}'),
    (0x76, "omega1", '\u{03D6}'),
    (0x77, "omega", '\u{03C9}'),
    (0x78, "xi", '\u{03BE}'),
    (0x79, "psi", '\u{03C8}'),
    (0x7A, "zeta", '\u{03B6}'),
    (0x7B, "braceleft", '{'),
    (0x7C, "bar", '|'),
    (0x7D, "braceright", '}'),
    (0x7E, "similar", '\u{223C}'),
    (0xA0, "Euro", '\u{20AC}'),
    (0xA1, "Upsilon1", '\u{03D2}'),
    (0xA2, "minute", '\u{2032}'),
    (0xA3, "lessequal", '\u{2264}'),
    (0xA4, "fraction", '\u{2044}'),
    (0xA5, "infinity", '\u{221E}'),
    (0xA6, "florin", '\u{0192}'),
    (0xA7, "club", '\u{2663}'),
    (0xA8, "diamond", '\u{2666}'),
    (0xA9, "heart", '\u{2665}'),
    (0xAA, "spade", '\u{2660}'),
    (0xAB, "arrowboth", '\u{2194}'),
    (0xAC, "arrowleft", '\u{2190}'),
    (0xAD, "arrowup", '\u{2191}'),
    (0xAE, "arrowright", '\u{2192}'),
    (0xAF, "arrowdown", '\u{2193}'),
    (0xB0, "degree", '\u{00B0}'),
    (0xB1, "plusminus", '\u{00B1}'),
    (0xB2, "second", '\u{2033}'),
    (0xB3, "greaterequal", '\u{2265}'),
    (0xB4, "multiply", '\u{00D7}'),
    (0xB5, "proportional", '\u{221D}'),
    (0xB6, "partialdiff", '\u{2202}'),
    (0xB7, "bullet", '\u{2022}'),
    (0xB8, "divide", '\u{00F7}'),
    (0xB9, "notequal", '\u{2260}'),
    (0xBA, "equivalence", '\u{2261}'),
    (0xBB, "approxequal", '\u{2248}'),
    (0xBC, "ellipsis", '\u{2026}'),
    (0xBD, "arrowvertex", '\u{F8E6}'),
    (0xBE, "arrowhorizex", '\u{F8E7}'),
    (0xBF, "carriagereturn", '\u{21B5}'),
    (0xC0, "aleph", '\u{2135}'),
    (0xC1, "Ifraktur", '\u{2111}'),
    (0xC2, "Rfraktur", '\u{211C}'),
    (0xC3, "weierstrass", '\u{2118}'),
    (0xC4, "circlemultiply", '\u{2297}'),
    (0xC5, "circleplus", '\u{2295}'),
    (0xC6, "emptyset", '\u{2205}'),
    (0xC7, "intersection", '\u{2229}'),
    (0xC8, "union", '\u{222A}'),
    (0xC9, "propersuperset", '\u{2283}'),
    (0xCA, "reflexsuperset", '\u{2287}'),
    (0xCB, "notsubset", '\u{2284}'),
    (0xCC, "propersubset", '\u{2282}'),
    (0xCD, "reflexsubset", '\u{2286}'),
    (0xCE, "element", '\u{2208}'),
    (0xCF, "notelement", '\u{2209}'),
    (0xD0, "angle", '\u{2220}'),
    (0xD1, "gradient", '\u{2207}'),
    (0xD2, "registerserif", '\u{F6DA}'),
    (0xD3, "copyrightserif", '\u{F6D9}'),
    (0xD4, "trademarkserif", '\u{F6DB}'),
    (0xD5, "product", '\u{220F}'),
    (0xD6, "radical", '\u{221A}'),
    (0xD7, "dotmath", '\u{22C5}'),
    (0xD8, "logicalnot", '\u{00AC}'),
    (0xD9, "logicaland", '\u{2227}'),
    (0xDA, "logicalor", '\u{2228}'),
    (0xDB, "arrowdblboth", '\u{21D4}'),
    (0xDC, "arrowdblleft", '\u{21D0}'),
    (0xDD, "arrowdblup", '\u{21D1}'),
    (0xDE, "arrowdblright", '\u{21D2}'),
    (0xDF, "arrowdbldown", '\u{21D3}'),
    (0xE0, "lozenge", '\u{25CA}'),
    (0xE1, "angleleft", '\u{2329}'),
    (0xE2, "registersans", '\u{F8E8}'),
    (0xE3, "copyrightsans", '\u{F8E9}'),
    (0xE4, "trademarksans", '\u{F8EA}'),
    (0xE5, "summation", '\u{2211}'),
    (0xE6, "parenlefttp", '\u{F8EB}'),
    (0xE7, "parenleftex", '\u{F8EC}'),
    (0xE8, "parenleftbt", '\u{F8ED}'),
    (0xE9, "bracketlefttp", '\u{F8EE}'),
    (0xEA, "bracketleftex", '\u{F8EF}'),
    (0xEB, "bracketleftbt", '\u{F8F0}'),
    (0xEC, "bracelefttp", '\u{F8F1}'),
    (0xED, "braceleftmid", '\u{F8F2}'),
    (0xEE, "braceleftbt", '\u{F8F3}'),
    (0xEF, "braceex", '\u{F8F4}'),
    (0xF1, "angleright", '\u{232A}'),
    (0xF2, "integral", '\u{222B}'),
    (0xF3, "integraltp", '\u{2320}'),
    (0xF4, "integralex", '\u{F8F5}'),
    (0xF5, "integralbt", '\u{2321}'),
    (0xF6, "parenrighttp", '\u{F8F6}'),
    (0xF7, "parenrightex", '\u{F8F7}'),
    (0xF8, "parenrightbt", '\u{F8F8}'),
    (0xF9, "bracketrighttp", '\u{F8F9}'),
    (0xFA, "bracketrightex", '\u{F8FA}'),
    (0xFB, "bracketrightbt", '\u{F8FB}'),
    (0xFC, "bracerighttp", '\u{F8FC}'),
    (0xFD, "bracerightmid", '\u{F8FD}'),
    (0xFE, "bracerightbt", '\u{F8FE}'),
];

/// Built-in encoding of the ZapfDingbats font.
static ZAPF_DINGBATS_ENCODING: &[(u8, &str, char)] = &[
    (0x20, "space", ' '),
    (0x21, "a1", '\u{2701}'),
    (0x22, "a2", '\u{2702}'),
    (0x23, "a202", '\u{2703}'),
    (0x24, "a3", '\u{2704}'),
    (0x25, "a4", '\u{260E}'),
    (0x26, "a5", '\u{2706}'),
    (0x27, "a119", '\u{2707}'),
    (0x28, "a118", '\u{2708}'),
    (0x29, "a117", '\u{2709}'),
    (0x2A, "a11", '\u{261B}'),
    (0x2B, "a12", '\u{261E}'),
    (0x2C, "a13", '\u{270C}'),
    (0x2D, "a14", '\u{270D}'),
    (0x2E, "a15", '\u{270E}'),
    (0x2F, "a16", '\u{270F}'),
    (0x30, "a105", '\u{2710}'),
    (0x31, "a17", '\u{2711}'),
    (0x32, "a18", '\u{2712}'),
    (0x33, "a19", '\u{2713}'),
    (0x34, "a20", '\u{2714}'),
    (0x35, "a21", '\u{2715}'),
    (0x36, "a22", '\u{2716}'),
    (0x37, "a23", '\u{2717}'),
    (0x38, "a24", '\u{2718}'),
    (0x39, "a25", '\u{2719}'),
    (0x3A, "a26", '\u{271A}'),
    (0x3B, "a27", '\u{271B}'),
    (0x3C, "a28", '\u{271C}'),
    (0x3D, "a6", '\u{271D}'),
    (0x3E, "a7", '\u{271E}'),
    (0x3F, "a8", '\u{271F}'),
    (0x40, "a9", '\u{2720}'),
    (0x41, "a10", '\u{2721}'),
    (0x42, "a29", '\u{2722}'),
    (0x43, "a30", '\u{2723}'),
    (0x44, "a31", '\u{2724}'),
    (0x45, "a32", '\u{2725}'),
    (0x46, "a33", '\u{2726}'),
    (0x47, "a34", '\u{2727}'),
    (0x48, "a35", '\u{2605}'),
    (0x49, "a36", '\u{2729}'),
    (0x4A, "a37", '\u{272A}'),
    (0x4B, "a38", '\u{272B}'),
    (0x4C, "a39", '\u{272C}'),
    (0x4D, "a40", '\u{272D}'),
    (0x4E, "a41", '\u{272E}'),
    (0x4F, "a42", '\u{272F}'),
    (0x50, "a43", '\u{2730}'),
    (0x51, "a44", '\u{2731}'),
    (0x52, "a45", '\u{2732}'),
    (0x53, "a46", '\u{2733}'),
    (0x54, "a47", '\u{2734}'),
    (0x55, "a48", '\u{2735}'),
    (0x56, "a49", '\u{2736}'),
    (0x57, "a50", '\u{2737}'),
    (0x58, "a51", '\u{2738}'),
    (0x59, "a52", '\u{2739}'),
    (0x5A, "a53", '\u{273A}'),
    (0x5B, "a54", '\u{273B}'),
    (0x5C, "a55", '\u{273C}'),
    (0x5D, "a56", '\u{273D}'),
    (0x5E, "a57", '\u{273E}'),
    (0x5F, "a58", '\u{273F}'),
    (0x60, "a59", '\u{2740}'),
    (0x61, "a60", '\u{2741}'),
    (0x62, "a61", '\u{2742}'),
    (0x63, "a62", '\u{2743}'),
    (0x64, "a63", '\u{2744}'),
    (0x65, "a64", '\u{2745}'),
    (0x66, "a65", '\u{2746}'),
    (0x67, "a66", '\u{2747}'),
    (0x68, "a67", '\u{2748}'),
    (0x69, "a68", '\u{2749}'),
    (0x6A, "a69", '\u{274A}'),
    (0x6B, "a70", '\u{274B}'),
    (0x6C, "a71", '\u{25CF}'),
    (0x6D, "a72", '\u{274D}'),
    (0x6E, "a73", '\u{25A0}'),
    (0x6F, "a74", '\u{274F}'),
    (0x70, "a203", '\u{2750}'),
    (0x71, "a75", '\u{2751}'),
    (0x72, "a204", '\u{2752}'),
    (0x73, "a76", '\u{25B2}'),
    (0x74, "a77", '\u{25BC}'),
    (0x75, "a78", '\u{25C6}'),
    (0x76, "a79", '\u{2756}'),
    (0x77, "a81", '\u{25D7}'),
    (0x78, "a82", '\u{2758}'),
    (0x79, "a83", '\u{2759}'),
    (0x7A, "a84", '\u{275A}'),
    (0x7B, "a97", '\u{275B}'),
    (0x7C, "a98", '\u{275C}'),
    (0x7D, "a99", '\u{275D}'),
    (0x7E, "a100", '\u{275E}'),
    (0x80, "a89", '\u{2768}'),
    (0x81, "a90", '\u{2769}'),
    (0x82, "a93", '\u{276A}'),
    (0x83, "a94", '\u{276B}'),
    (0x84, "a91", '\u{276C}'),
    (0x85, "a92", '\u{276D}'),
    (0x86, "a205", '\u{276E}'),
    (0x87, "a85", '\u{276F}'),
    (0x88, "a206", '\u{2770}'),
    (0x89, "a86", '\u{2771}'),
    (0x8A, "a87", '\u{2772}'),
    (0x8B, "a88", '\u{2773}'),
    (0x8C, "a95", '\u{2774}'),
    (0x8D, "a96", '\u{2775}'),
    (0xA1, "a101", '\u{2761}'),
    (0xA2, "a102", '\u{2762}'),
    (0xA3, "a103", '\u{2763}'),
    (0xA4, "a104", '\u{2764}'),
    (0xA5, "a106", '\u{2765}'),
    (0xA6, "a107", '\u{2766}'),
    (0xA7, "a108", '\u{2767}'),
    (0xA8, "a112", '\u{2663}'),
    (0xA9, "a111", '\u{2666}'),
    (0xAA, "a110", '\u{2665}'),
    (0xAB, "a109", '\u{2660}'),
    (0xAC, "a120", '\u{2460}'),
    (0xAD, "a121", '\u{2461}'),
    (0xAE, "a122", '\u{2462}'),
    (0xAF, "a123", '\u{2463}'),
    (0xB0, "a124", '\u{2464}'),
    (0xB1, "a125", '\u{2465}'),
    (0xB2, "a126", '\u{2466}'),
    (0xB3, "a127", '\u{2467}'),
    (0xB4, "a128", '\u{2468}'),
    (0xB5, "a129", '\u{2469}'),
    (0xB6, "a130", '\u{2776}'),
    (0xB7, "a131", '\u{2777}'),
    (0xB8, "a132", '\u{2778}'),
    (0xB9, "a133", '\u{2779}'),
    (0xBA, "a134", '\u{277A}'),
    (0xBB, "a135", '\u{277B}'),
    (0xBC, "a136", '\u{277C}'),
    (0xBD, "a137", '\u{277D}'),
    (0xBE, "a138", '\u{277E}'),
    (0xBF, "a139", '\u{277F}'),
    (0xC0, "a140", '\u{2780}'),
    (0xC1, "a141", '\u{2781}'),
    (0xC2, "a142", '\u{2782}'),
    (0xC3, "a143", '\u{2783}'),
    (0xC4, "a144", '\u{2784}'),
    (0xC5, "a145", '\u{2785}'),
    (0xC6, "a146", '\u{2786}'),
    (0xC7, "a147", '\u{2787}'),
    (0xC8, "a148", '\u{2788}'),
    (0xC9, "a149", '\u{2789}'),
    (0xCA, "a150", '\u{278A}'),
    (0xCB, "a151", '\u{278B}'),
    (0xCC, "a152", '\u{278C}'),
    (0xCD, "a153", '\u{278D}'),
    (0xCE, "a154", '\u{278E}'),
    (0xCF, "a155", '\u{278F}'),
    (0xD0, "a156", '\u{2790}'),
    (0xD1, "a157", '\u{2791}'),
    (0xD2, "a158", '\u{2792}'),
    (0xD3, "a159", '\u{2793}'),
    (0xD4, "a160", '\u{2794}'),
    (0xD5, "a161", '\u{2192}'),
    (0xD6, "a163", '\u{2194}'),
    (0xD7, "a164", '\u{2195}'),
    (0xD8, "a196", '\u{2798}'),
    (0xD9, "a165", '\u{2799}'),
    (0xDA, "a192", '\u{279A}'),
    (0xDB, "a166", '\u{279B}'),
    (0xDC, "a167", '\u{279C}'),
    (0xDD, "a168", '\u{279D}'),
    (0xDE, "a169", '\u{279E}'),
    (0xDF, "a170", '\u{279F}'),
    (0xE0, "a171", '\u{27A0}'),
    (0xE1, "a172", '\u{27A1}'),
    (0xE2, "a173", '\u{27A2}'),
    (0xE3, "a162", '\u{27A3}'),
    (0xE4, "a174", '\u{27A4}'),
    (0xE5, "a175", '\u{27A5}'),
    (0xE6, "a176", '\u{27A6}'),
    (0xE7, "a177", '\u{27A7}'),
    (0xE8, "a178", '\u{27A8}'),
    (0xE9, "a179", '\u{27A9}'),
    (0xEA, "a193", '\u{27AA}'),
    (0xEB, "a180", '\u{27AB}'),
    (0xEC, "a199", '\u{27AC}'),
    (0xED, "a181", '\u{27AD}'),
    (0xEE, "a200", '\u{27AE}'),
    (0xEF, "a182", '\u{27AF}'),
    (0xF1, "a201", '\u{27B1}'),
    (0xF2, "a183", '\u{27B2}'),
    (0xF3, "a184", '\u{27B3}'),
    (0xF4, "a197", '\u{27B4}'),
    (0xF5, "a185", '\u{27B5}'),
    (0xF6, "a194", '\u{27B6}'),
    (0xF7, "a198", '\u{27B7}'),
    (0xF8, "a186", '\u{27B8}'),
    (0xF9, "a195", '\u{27B9}'),
    (0xFA, "a187", '\u{27BA}'),
    (0xFB, "a188", '\u{27BB}'),
    (0xFC, "a189", '\u{27BC}'),
    (0xFD, "a190", '\u{27BD}'),
    (0xFE, "a191", '\u{27BE}'),
];
