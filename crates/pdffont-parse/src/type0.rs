//! Type0 (composite) fonts.

use lopdf::{Dictionary, Object};
use pdffont_core::{
    CjkEncoder, ExtractWarningCode, FontError, IdentityEncoder, TextEncoder,
};

use crate::error::BackendError;
use crate::font::{FontCommon, PdfFont, WritingMode, build_font};
use crate::loader::Loader;
use crate::objects::{int_of, kind_of, name_of};
use crate::simple::persisted_encoding_object;

/// A composite font delegating glyph selection to one CID font.
#[derive(Debug, Clone)]
pub struct Type0Font {
    pub(crate) common: FontCommon,
    cmap_name: Option<String>,
    encoder: Option<TextEncoder>,
    writing_mode: WritingMode,
    descendant: Box<PdfFont>,
    encoding_obj: Option<Object>,
    descendants_obj: Option<Object>,
}

impl Type0Font {
    pub(crate) fn load(
        loader: &mut Loader<'_, '_>,
        dict: &Dictionary,
        common: FontCommon,
    ) -> Result<Self, BackendError> {
        let items = loader
            .access
            .get_array(dict, b"DescendantFonts")?
            .ok_or_else(|| FontError::missing("DescendantFonts", "Type0 font"))?;
        let [first] = items else {
            return Err(FontError::mismatch(
                "DescendantFonts",
                "array of one CIDFont",
                format!("array of {}", items.len()),
            )
            .into());
        };
        let descendant = build_font(loader, first, false)?;
        if !matches!(descendant, PdfFont::CidType0(_) | PdfFont::CidType2(_)) {
            return Err(FontError::mismatch(
                "DescendantFonts",
                "CIDFontType0 or CIDFontType2",
                descendant.subtype(),
            )
            .into());
        }

        let mut font = Type0Font {
            common,
            cmap_name: None,
            encoder: None,
            writing_mode: WritingMode::Horizontal,
            descendant: Box::new(descendant),
            encoding_obj: dict.get(b"Encoding").ok().cloned(),
            descendants_obj: dict.get(b"DescendantFonts").ok().cloned(),
        };
        font.read_encoding(loader, dict)?;
        Ok(font)
    }

    fn read_encoding(
        &mut self,
        loader: &mut Loader<'_, '_>,
        dict: &Dictionary,
    ) -> Result<(), BackendError> {
        let (code, msg) = match loader.access.get(dict, b"Encoding")? {
            None => (
                ExtractWarningCode::MissingEncoder,
                "Type0 font has no /Encoding".to_string(),
            ),
            Some(Object::Name(name)) => {
                let name = String::from_utf8_lossy(name).into_owned();
                if name.ends_with("-V") {
                    self.writing_mode = WritingMode::Vertical;
                }
                self.encoder = cmap_encoder(&name);
                let missing = self.encoder.is_none();
                self.cmap_name = Some(name);
                if !missing {
                    return Ok(());
                }
                (
                    ExtractWarningCode::EncodingFallback,
                    format!(
                        "CMap /{} has no encoder",
                        self.cmap_name.as_deref().unwrap_or_default()
                    ),
                )
            }
            Some(Object::Stream(stream)) => {
                self.cmap_name = stream.dict.get(b"CMapName").ok().and_then(name_of);
                if stream.dict.get(b"WMode").ok().and_then(int_of) == Some(1) {
                    self.writing_mode = WritingMode::Vertical;
                }
                (
                    ExtractWarningCode::EncodingFallback,
                    "embedded CMap streams are not decoded".to_string(),
                )
            }
            Some(other) => {
                return Err(
                    FontError::mismatch("Encoding", "name or stream", kind_of(other)).into(),
                );
            }
        };
        loader.warn_for(code, msg, &self.common.base_font, self.common.object_id)
    }

    /// Name of the predefined or embedded CMap.
    pub fn cmap_name(&self) -> Option<&str> {
        self.cmap_name.as_deref()
    }

    pub fn writing_mode(&self) -> WritingMode {
        self.writing_mode
    }

    /// The descendant CID font.
    pub fn descendant(&self) -> &PdfFont {
        &self.descendant
    }

    /// Encoder used for decoding.
    ///
    /// An identity CMap defers to the descendant's TrueType-derived encoder
    /// when there is one.
    pub fn encoder(&self) -> Option<&TextEncoder> {
        let descendant = self.descendant.encoder();
        match &self.encoder {
            Some(own) if own.is_identity() => descendant
                .filter(|enc| matches!(enc, TextEncoder::TrueType(_)))
                .or(Some(own)),
            Some(own) => Some(own),
            None => descendant,
        }
    }

    /// The encoder built from `/Encoding` alone.
    pub fn own_encoder(&self) -> Option<&TextEncoder> {
        self.encoder.as_ref()
    }

    pub(crate) fn write_fields(&self, dict: &mut Dictionary) {
        match (&self.encoding_obj, self.encoder.as_ref().and_then(TextEncoder::to_persistable)) {
            (Some(obj), _) => dict.set("Encoding", obj.clone()),
            (None, Some(persisted)) => dict.set("Encoding", persisted_encoding_object(&persisted)),
            (None, None) => {}
        }
        let descendants = match &self.descendants_obj {
            Some(obj) => obj.clone(),
            None => Object::Array(vec![Object::Dictionary(self.descendant.to_dictionary())]),
        };
        dict.set("DescendantFonts", descendants);
    }
}

/// Encoder for a predefined CMap name.
pub fn cmap_encoder(name: &str) -> Option<TextEncoder> {
    if matches!(name, "Identity-H" | "Identity-V") {
        return Some(IdentityEncoder::new(name).into());
    }
    if let Some(cjk) = CjkEncoder::for_cmap(name) {
        return Some(cjk.into());
    }
    if name.starts_with("Uni") && (name.contains("-UCS2") || name.contains("-UTF16")) {
        return Some(IdentityEncoder::new(name).into());
    }
    None
}
