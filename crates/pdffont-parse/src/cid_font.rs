//! CID-keyed descendant fonts (CIDFontType0 and CIDFontType2).
//!
//! Handles the `/W` and `/DW` widths, the `/CIDToGIDMap` of
//! TrueType-based CID fonts and the required `/CIDSystemInfo`.

use std::collections::{BTreeMap, HashMap};

use lopdf::{Dictionary, Object};
use pdffont_core::{CharCode, ExtractWarningCode, FontError, TextEncoder, TrueTypeEncoder};

use crate::error::BackendError;
use crate::font::FontCommon;
use crate::fontfile::FontProgram;
use crate::loader::Loader;
use crate::objects::{ObjectAccess, int_of, kind_of, name_of, number_of, text_of};

/// Default CID width when `/DW` is absent (a full em).
pub const DEFAULT_CID_WIDTH: f64 = 1000.0;

/// Keys of a CIDFont dictionary written back verbatim.
const CID_KEYS: [&str; 6] = ["CIDSystemInfo", "DW", "W", "DW2", "W2", "CIDToGIDMap"];

/// CID font subtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CidFontType {
    /// CIDFontType0: CFF-based glyph descriptions.
    Type0,
    /// CIDFontType2: TrueType-based glyph descriptions.
    Type2,
}

impl CidFontType {
    pub fn subtype(self) -> &'static str {
        match self {
            CidFontType::Type0 => "CIDFontType0",
            CidFontType::Type2 => "CIDFontType2",
        }
    }
}

/// CID-to-GID (glyph index) mapping.
#[derive(Debug, Clone, PartialEq)]
pub enum CidToGidMap {
    /// CID equals GID.
    Identity,
    /// GID for CID `n` is the big-endian u16 at bytes `2n..2n+2`.
    Explicit(Vec<u16>),
}

impl CidToGidMap {
    /// Map a CID to a GID; CIDs past the end of an explicit table map to 0.
    pub fn map(&self, cid: CharCode) -> u16 {
        match self {
            CidToGidMap::Identity => cid,
            CidToGidMap::Explicit(table) => table.get(usize::from(cid)).copied().unwrap_or(0),
        }
    }

    /// Parse a CIDToGIDMap stream's decoded bytes.
    pub fn from_stream(data: &[u8]) -> Self {
        CidToGidMap::Explicit(
            data.chunks_exact(2)
                .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
                .collect(),
        )
    }
}

/// Character collection from `/CIDSystemInfo`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CidSystemInfo {
    /// Registry, e.g. "Adobe".
    pub registry: String,
    /// Ordering, e.g. "Japan1", "GB1", "CNS1", "Korea1" or "Identity".
    pub ordering: String,
    pub supplement: i64,
}

impl CidSystemInfo {
    /// Check if this is an Adobe CJK character collection.
    pub fn is_adobe_cjk(&self) -> bool {
        self.registry == "Adobe"
            && matches!(self.ordering.as_str(), "Japan1" | "GB1" | "CNS1" | "Korea1")
    }
}

/// A CID-keyed font, normally the descendant of a Type0 font.
#[derive(Debug, Clone)]
pub struct CidFont {
    pub(crate) common: FontCommon,
    font_type: CidFontType,
    system_info: CidSystemInfo,
    default_width: f64,
    widths: HashMap<u32, f64>,
    cid_to_gid: Option<CidToGidMap>,
    encoder: Option<TextEncoder>,
    verbatim: Vec<(&'static str, Object)>,
}

impl CidFont {
    pub(crate) fn load(
        loader: &mut Loader<'_, '_>,
        dict: &Dictionary,
        common: FontCommon,
        font_type: CidFontType,
    ) -> Result<Self, BackendError> {
        let verbatim = CID_KEYS
            .into_iter()
            .filter_map(|key| dict.get(key.as_bytes()).ok().map(|v| (key, v.clone())))
            .collect();

        let info = loader
            .access
            .get_dict(dict, b"CIDSystemInfo")?
            .ok_or_else(|| FontError::missing("CIDSystemInfo", font_type.subtype()))?;
        let system_info = parse_cid_system_info(loader.access, info);

        let default_width = loader
            .access
            .get_number(dict, b"DW")?
            .unwrap_or(DEFAULT_CID_WIDTH);
        let widths = match loader.access.get_array(dict, b"W")? {
            Some(items) => parse_w_array(loader.access, items),
            None => HashMap::new(),
        };

        let mut font = CidFont {
            common,
            font_type,
            system_info,
            default_width,
            widths,
            cid_to_gid: None,
            encoder: None,
            verbatim,
        };

        if font_type == CidFontType::Type2 {
            let map = font.parse_cid_to_gid_map(loader, dict)?;
            font.encoder = font.truetype_encoder(&map);
            font.cid_to_gid = Some(map);
        }

        Ok(font)
    }

    fn parse_cid_to_gid_map(
        &self,
        loader: &mut Loader<'_, '_>,
        dict: &Dictionary,
    ) -> Result<CidToGidMap, BackendError> {
        match loader.access.get(dict, b"CIDToGIDMap")? {
            None => Ok(CidToGidMap::Identity),
            Some(Object::Stream(stream)) => {
                let data = loader.access.decode_stream(stream)?;
                Ok(CidToGidMap::from_stream(&data))
            }
            Some(obj @ Object::Name(_)) => {
                let name = name_of(obj).unwrap_or_default();
                if name != "Identity" {
                    loader.warn_for(
                        ExtractWarningCode::MalformedObject,
                        format!("unknown /CIDToGIDMap /{name}, using Identity"),
                        &self.common.base_font,
                        self.common.object_id,
                    )?;
                }
                Ok(CidToGidMap::Identity)
            }
            Some(other) => Err(
                FontError::mismatch("CIDToGIDMap", "name or stream", kind_of(other)).into(),
            ),
        }
    }

    fn truetype_encoder(&self, map: &CidToGidMap) -> Option<TextEncoder> {
        let program = self
            .common
            .descriptor
            .as_ref()?
            .program()
            .and_then(FontProgram::as_truetype)?;
        let encoder = match map {
            CidToGidMap::Identity => program.glyph_encoder(),
            CidToGidMap::Explicit(table) => {
                let code_to_gid: BTreeMap<CharCode, u16> = table
                    .iter()
                    .enumerate()
                    .filter_map(|(cid, gid)| CharCode::try_from(cid).ok().map(|cid| (cid, *gid)))
                    .collect();
                TrueTypeEncoder::new(&code_to_gid, &program.gid_to_rune(), true)
            }
        };
        Some(encoder.into())
    }

    pub fn font_type(&self) -> CidFontType {
        self.font_type
    }

    pub fn system_info(&self) -> &CidSystemInfo {
        &self.system_info
    }

    /// Width from `/DW`, 1000 by default.
    pub fn default_width(&self) -> f64 {
        self.default_width
    }

    /// Width of `cid` in 1/1000 em: its `/W` entry, else `/DW`.
    pub fn char_width(&self, cid: CharCode) -> f64 {
        self.widths
            .get(&u32::from(cid))
            .copied()
            .unwrap_or(self.default_width)
    }

    /// The CID-to-GID map of a CIDFontType2 font.
    pub fn cid_to_gid(&self) -> Option<&CidToGidMap> {
        self.cid_to_gid.as_ref()
    }

    /// Encoder derived from an embedded TrueType program.
    pub fn encoder(&self) -> Option<&TextEncoder> {
        self.encoder.as_ref()
    }

    pub(crate) fn write_fields(&self, dict: &mut Dictionary) {
        for (key, value) in &self.verbatim {
            dict.set(*key, value.clone());
        }
    }
}

/// Parse a `/W` array.
///
/// ```text
/// [ c [w1 w2 ...] c_first c_last w ... ]
/// ```
/// `c [w1 w2 ...]` assigns consecutive widths starting at CID `c`;
/// `c_first c_last w` assigns `w` to the whole range. Malformed entries are
/// skipped.
pub fn parse_w_array(access: ObjectAccess<'_>, objects: &[Object]) -> HashMap<u32, f64> {
    let as_cid = |obj: Option<&Object>| obj.and_then(int_of).and_then(|v| u32::try_from(v).ok());

    let mut widths = HashMap::new();
    let mut i = 0;
    while i < objects.len() {
        let Some(cid_start) = as_cid(resolved(&access, &objects[i])) else {
            i += 1;
            continue;
        };
        i += 1;
        let Some(next) = objects.get(i).and_then(|o| resolved(&access, o)) else {
            break;
        };

        if let Object::Array(list) = next {
            for (offset, width) in access.numbers(list).into_iter().enumerate() {
                if let (Some(w), Ok(offset)) = (width, u32::try_from(offset)) {
                    widths.insert(cid_start.saturating_add(offset), w);
                }
            }
            i += 1;
        } else if let Some(cid_end) = as_cid(Some(next)) {
            i += 1;
            let width = objects.get(i).and_then(|o| resolved(&access, o)).and_then(number_of);
            if let Some(w) = width {
                // Ranges are capped at 65536 CIDs.
                let cid_end = cid_end.min(cid_start.saturating_add(0xFFFF));
                for cid in cid_start..=cid_end {
                    widths.insert(cid, w);
                }
            }
            i += 1;
        } else {
            i += 1;
        }
    }
    widths
}

fn resolved<'d>(access: &ObjectAccess<'d>, obj: &'d Object) -> Option<&'d Object> {
    access.resolve(obj).ok()
}

fn parse_cid_system_info(access: ObjectAccess<'_>, info: &Dictionary) -> CidSystemInfo {
    let text = |key: &[u8]| {
        access
            .get(info, key)
            .ok()
            .flatten()
            .and_then(text_of)
            .unwrap_or_default()
    };
    CidSystemInfo {
        registry: text(b"Registry"),
        ordering: text(b"Ordering"),
        supplement: access
            .get(info, b"Supplement")
            .ok()
            .flatten()
            .and_then(int_of)
            .unwrap_or(0),
    }
}
