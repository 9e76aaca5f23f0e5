//! ToUnicode CMap parser for mapping character codes to Unicode strings.
//!
//! Parses CMap data embedded in PDF `/ToUnicode` streams. Supports
//! `beginbfchar`/`endbfchar` (single mappings) and `beginbfrange`/`endbfrange`
//! (range mappings, both the incrementing and the array form) with UTF-16BE
//! encoded destinations.

use std::collections::HashMap;

use pdffont_core::CharCode;

use crate::error::BackendError;

/// Longest source range expanded from a single `bfrange` line.
const MAX_RANGE_SPAN: u32 = 0xFFFF;

/// A parsed ToUnicode CMap.
///
/// Destinations may be several characters long (ligatures such as "ffi").
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToUnicodeCMap {
    mappings: HashMap<CharCode, String>,
    is_cid: bool,
    name: Option<String>,
}

impl ToUnicodeCMap {
    /// Parse a ToUnicode CMap from decoded stream bytes.
    ///
    /// `is_cid` selects 2-byte source codes; for simple fonts source codes
    /// wider than one byte are ignored.
    pub fn parse(data: &[u8], is_cid: bool) -> Result<Self, BackendError> {
        let text = String::from_utf8_lossy(data);
        let mut cmap = ToUnicodeCMap {
            mappings: HashMap::new(),
            is_cid,
            name: parse_cmap_name(&text),
        };

        for section in sections(&text, "beginbfchar", "endbfchar") {
            cmap.parse_bfchar(section)?;
        }
        for section in sections(&text, "beginbfrange", "endbfrange") {
            cmap.parse_bfrange(section)?;
        }

        Ok(cmap)
    }

    /// The Unicode text for `code`.
    pub fn lookup(&self, code: CharCode) -> Option<&str> {
        self.mappings.get(&code).map(String::as_str)
    }

    /// The first rune of the text for `code`.
    pub fn charcode_to_unicode(&self, code: CharCode) -> Option<char> {
        self.lookup(code).and_then(|s| s.chars().next())
    }

    pub fn is_cid(&self) -> bool {
        self.is_cid
    }

    /// Value of `/CMapName`, if declared.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    fn insert(&mut self, code: u32, text: String) {
        let limit = if self.is_cid { 0xFFFF } else { 0xFF };
        if code <= limit {
            if let Ok(code) = CharCode::try_from(code) {
                self.mappings.insert(code, text);
            }
        }
    }

    /// `<src> <dst>` pairs.
    fn parse_bfchar(&mut self, section: &str) -> Result<(), BackendError> {
        let tokens = tokenize(section);
        for pair in tokens.chunks(2) {
            let [Token::Hex(src), Token::Hex(dst)] = pair else {
                continue;
            };
            let src = parse_hex_code(src)?;
            let dst = decode_utf16be_hex(dst)?;
            self.insert(src, dst);
        }
        Ok(())
    }

    /// `<lo> <hi> <dst>` or `<lo> <hi> [<d1> <d2> ...]`.
    fn parse_bfrange(&mut self, section: &str) -> Result<(), BackendError> {
        let tokens = tokenize(section);
        let mut i = 0;
        while i + 2 < tokens.len() {
            let (Token::Hex(lo), Token::Hex(hi)) = (&tokens[i], &tokens[i + 1]) else {
                i += 1;
                continue;
            };
            let lo = parse_hex_code(lo)?;
            let hi = parse_hex_code(hi)?;
            if hi < lo || hi - lo > MAX_RANGE_SPAN {
                return Err(BackendError::collaborator(format!(
                    "invalid bfrange <{lo:X}> <{hi:X}>"
                )));
            }
            match &tokens[i + 2] {
                Token::Hex(dst) => {
                    let mut units = hex_to_utf16_units(dst)?;
                    for code in lo..=hi {
                        if let Ok(text) = String::from_utf16(&units) {
                            self.insert(code, text);
                        }
                        if let Some(last) = units.last_mut() {
                            *last = last.wrapping_add(1);
                        }
                    }
                    i += 3;
                }
                Token::ArrayStart => {
                    let mut code = Some(lo);
                    i += 3;
                    while i < tokens.len() {
                        match (&tokens[i], code) {
                            (Token::ArrayEnd, _) => break,
                            (Token::Hex(dst), Some(c)) if c <= hi => {
                                let text = decode_utf16be_hex(dst)?;
                                self.insert(c, text);
                                code = c.checked_add(1);
                            }
                            _ => {}
                        }
                        i += 1;
                    }
                    i += 1;
                }
                Token::ArrayEnd => i += 3,
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Token<'a> {
    Hex(&'a str),
    ArrayStart,
    ArrayEnd,
}

/// Split a section into hex strings and array brackets. Whitespace inside
/// hex strings is dropped when the digits are parsed.
fn tokenize(section: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut rest = section;
    while let Some(pos) = rest.find(['<', '[', ']']) {
        match rest.as_bytes()[pos] {
            b'[' => {
                tokens.push(Token::ArrayStart);
                rest = &rest[pos + 1..];
            }
            b']' => {
                tokens.push(Token::ArrayEnd);
                rest = &rest[pos + 1..];
            }
            _ => {
                let after = &rest[pos + 1..];
                let Some(end) = after.find('>') else {
                    break;
                };
                tokens.push(Token::Hex(&after[..end]));
                rest = &after[end + 1..];
            }
        }
    }
    tokens
}

/// Bodies between every `begin`/`end` keyword pair.
fn sections<'t>(text: &'t str, begin: &str, end: &str) -> Vec<&'t str> {
    let mut out = Vec::new();
    let mut search_from = 0;
    while let Some(start) = text[search_from..].find(begin) {
        let body_start = search_from + start + begin.len();
        let Some(len) = text[body_start..].find(end) else {
            break;
        };
        out.push(&text[body_start..body_start + len]);
        search_from = body_start + len + end.len();
    }
    out
}

fn parse_cmap_name(text: &str) -> Option<String> {
    let idx = text.find("/CMapName")?;
    let rest = text[idx + "/CMapName".len()..].trim_start();
    let rest = rest.strip_prefix('/')?;
    let end = rest
        .find(|c: char| c.is_whitespace() || c == '/')
        .unwrap_or(rest.len());
    Some(rest[..end].to_string())
}

fn clean_hex(hex: &str) -> String {
    hex.chars().filter(|c| !c.is_whitespace()).collect()
}

fn parse_hex_code(hex: &str) -> Result<u32, BackendError> {
    let hex = clean_hex(hex);
    if hex.is_empty() || hex.len() > 8 {
        return Err(BackendError::collaborator(format!("invalid source code <{hex}>")));
    }
    u32::from_str_radix(&hex, 16)
        .map_err(|e| BackendError::collaborator(format!("invalid hex code <{hex}>: {e}")))
}

/// Destination hex as UTF-16 code units. A lone byte is widened to one unit.
fn hex_to_utf16_units(hex: &str) -> Result<Vec<u16>, BackendError> {
    let mut hex = clean_hex(hex);
    if hex.len() == 2 {
        hex.insert_str(0, "00");
    }
    if hex.is_empty() || hex.len() % 4 != 0 {
        return Err(BackendError::collaborator(format!(
            "UTF-16BE destination <{hex}> has length {}",
            hex.len()
        )));
    }
    hex.as_bytes()
        .chunks(4)
        .map(|chunk| {
            std::str::from_utf8(chunk)
                .ok()
                .and_then(|s| u16::from_str_radix(s, 16).ok())
                .ok_or_else(|| BackendError::collaborator(format!("invalid UTF-16BE hex <{hex}>")))
        })
        .collect()
}

fn decode_utf16be_hex(hex: &str) -> Result<String, BackendError> {
    let units = hex_to_utf16_units(hex)?;
    Ok(String::from_utf16_lossy(&units))
}
