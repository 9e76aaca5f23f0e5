//! The [`PdfFont`] facade: construction from font dictionaries, variant
//! dispatch and serialization.

use std::sync::Arc;

use lopdf::{Dictionary, Document, Object, ObjectId};
use pdffont_core::{
    CharCode, ExtractResult, FontError, LoadOptions, NoopSink, TextEncoder, WarningSink,
};

use crate::cid_font::{CidFont, CidFontType};
use crate::cmap::ToUnicodeCMap;
use crate::descriptor::PdfFontDescriptor;
use crate::error::BackendError;
use crate::loader::Loader;
use crate::objects::{ObjectAccess, kind_of, name_of, reference_of};
use crate::simple::SimpleFont;
use crate::standard_fonts::StandardFontName;
use crate::type0::Type0Font;

/// Subtypes decoded with two-byte codes.
pub fn is_cid_subtype(subtype: &str) -> bool {
    matches!(subtype, "Type0" | "CIDFontType0" | "CIDFontType2")
}

/// Glyph progression direction of a font.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WritingMode {
    #[default]
    Horizontal,
    Vertical,
}

/// Fields shared by every font variant.
#[derive(Debug, Clone, Default)]
pub struct FontCommon {
    pub(crate) base_font: String,
    pub(crate) subtype: String,
    pub(crate) name: Option<String>,
    pub(crate) to_unicode: Option<Arc<ToUnicodeCMap>>,
    pub(crate) to_unicode_obj: Option<Object>,
    pub(crate) descriptor: Option<PdfFontDescriptor>,
    pub(crate) object_id: Option<ObjectId>,
}

impl FontCommon {
    pub fn base_font(&self) -> &str {
        &self.base_font
    }

    pub fn subtype(&self) -> &str {
        &self.subtype
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn to_unicode(&self) -> Option<&ToUnicodeCMap> {
        self.to_unicode.as_deref()
    }

    pub fn descriptor(&self) -> Option<&PdfFontDescriptor> {
        self.descriptor.as_ref()
    }

    pub fn object_id(&self) -> Option<ObjectId> {
        self.object_id
    }

    fn write_fields(&self, dict: &mut Dictionary, with_descriptor: bool) {
        dict.set("Type", Object::Name(b"Font".to_vec()));
        dict.set("Subtype", Object::Name(self.subtype.as_bytes().to_vec()));
        if let Some(name) = &self.name {
            dict.set("Name", Object::Name(name.as_bytes().to_vec()));
        }
        dict.set("BaseFont", Object::Name(self.base_font.as_bytes().to_vec()));
        if with_descriptor {
            if let Some(desc) = &self.descriptor {
                dict.set("FontDescriptor", Object::Dictionary(desc.to_dictionary()));
            }
        }
        if let Some(obj) = &self.to_unicode_obj {
            dict.set("ToUnicode", obj.clone());
        }
    }
}

/// A font resolved from a PDF font dictionary.
#[derive(Debug, Clone)]
pub enum PdfFont {
    /// Type1, MMType1 or TrueType with one-byte codes.
    Simple(SimpleFont),
    /// Composite font over one CID descendant.
    Type0(Type0Font),
    /// CID font with CFF outlines.
    CidType0(CidFont),
    /// CID font with TrueType outlines.
    CidType2(CidFont),
}

impl PdfFont {
    /// Build a font from a font dictionary (or a reference to one).
    pub fn from_object(doc: &Document, obj: &Object) -> Result<PdfFont, BackendError> {
        Self::from_object_with(doc, obj, &LoadOptions::default(), &mut NoopSink)
    }

    /// Like [`from_object`](Self::from_object), reporting warnings to `sink`.
    pub fn from_object_with(
        doc: &Document,
        obj: &Object,
        options: &LoadOptions,
        sink: &mut dyn WarningSink,
    ) -> Result<PdfFont, BackendError> {
        let mut loader = Loader::new(ObjectAccess::new(doc, options), options, sink);
        build_font(&mut loader, obj, true)
    }

    /// Build a font and collect its construction warnings.
    pub fn load(
        doc: &Document,
        obj: &Object,
        options: &LoadOptions,
    ) -> Result<ExtractResult<PdfFont>, BackendError> {
        let mut warnings = Vec::new();
        let font = Self::from_object_with(doc, obj, options, &mut warnings)?;
        Ok(ExtractResult::with_warnings(font, warnings))
    }

    /// One of the 14 standard fonts, with canonical metrics.
    pub fn standard14(name: StandardFontName) -> PdfFont {
        PdfFont::Simple(SimpleFont::standard(name))
    }

    /// Helvetica, used when a text operator names no usable font.
    pub fn default_font() -> PdfFont {
        Self::standard14(StandardFontName::Helvetica)
    }

    pub fn common(&self) -> &FontCommon {
        match self {
            PdfFont::Simple(font) => &font.common,
            PdfFont::Type0(font) => &font.common,
            PdfFont::CidType0(font) | PdfFont::CidType2(font) => &font.common,
        }
    }

    /// True for Type0 and CID fonts, decoded with two-byte codes.
    pub fn is_cid(&self) -> bool {
        is_cid_subtype(self.subtype())
    }

    pub fn base_font(&self) -> &str {
        &self.common().base_font
    }

    pub fn subtype(&self) -> &str {
        &self.common().subtype
    }

    /// Subtype including the descendant's, e.g. `Type0:CIDFontType2`.
    pub fn full_subtype(&self) -> String {
        match self {
            PdfFont::Type0(font) => format!("Type0:{}", font.descendant().subtype()),
            _ => self.subtype().to_string(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.common().name.as_deref()
    }

    pub fn object_id(&self) -> Option<ObjectId> {
        self.common().object_id
    }

    /// The font descriptor; a Type0 font reports its descendant's.
    pub fn descriptor(&self) -> Option<&PdfFontDescriptor> {
        match (self.common().descriptor.as_ref(), self) {
            (Some(desc), _) => Some(desc),
            (None, PdfFont::Type0(font)) => font.descendant().descriptor(),
            (None, _) => None,
        }
    }

    /// True when the descriptor was synthesized for a standard font.
    pub fn builtin_descriptor(&self) -> bool {
        match self {
            PdfFont::Simple(font) => font.builtin_descriptor(),
            _ => false,
        }
    }

    pub fn to_unicode(&self) -> Option<&ToUnicodeCMap> {
        match (self.common().to_unicode(), self) {
            (Some(cmap), _) => Some(cmap),
            (None, PdfFont::Type0(font)) => font.descendant().to_unicode(),
            (None, _) => None,
        }
    }

    pub fn encoder(&self) -> Option<&TextEncoder> {
        match self {
            PdfFont::Simple(font) => font.encoder(),
            PdfFont::Type0(font) => font.encoder(),
            PdfFont::CidType0(font) | PdfFont::CidType2(font) => font.encoder(),
        }
    }

    /// Advance width of `code` in 1/1000 em, if known.
    pub fn char_width(&self, code: CharCode) -> Option<f64> {
        match self {
            PdfFont::Simple(font) => font.char_width(code),
            PdfFont::Type0(font) => font.descendant().char_width(code),
            PdfFont::CidType0(font) | PdfFont::CidType2(font) => Some(font.char_width(code)),
        }
    }

    pub fn writing_mode(&self) -> WritingMode {
        match self {
            PdfFont::Type0(font) => font.writing_mode(),
            _ => WritingMode::Horizontal,
        }
    }

    pub fn as_simple(&self) -> Option<&SimpleFont> {
        match self {
            PdfFont::Simple(font) => Some(font),
            _ => None,
        }
    }

    pub fn as_type0(&self) -> Option<&Type0Font> {
        match self {
            PdfFont::Type0(font) => Some(font),
            _ => None,
        }
    }

    pub fn as_cid(&self) -> Option<&CidFont> {
        match self {
            PdfFont::CidType0(font) | PdfFont::CidType2(font) => Some(font),
            _ => None,
        }
    }

    /// The CID descendant of a Type0 font.
    pub fn descendant(&self) -> Option<&PdfFont> {
        self.as_type0().map(Type0Font::descendant)
    }

    /// Serialize back to a font dictionary.
    ///
    /// Fields read from the source are written as they were, references
    /// included. A synthesized standard-font descriptor is omitted.
    pub fn to_dictionary(&self) -> Dictionary {
        let mut dict = Dictionary::new();
        self.common()
            .write_fields(&mut dict, !self.builtin_descriptor());
        match self {
            PdfFont::Simple(font) => font.write_fields(&mut dict),
            PdfFont::Type0(font) => font.write_fields(&mut dict),
            PdfFont::CidType0(font) | PdfFont::CidType2(font) => font.write_fields(&mut dict),
        }
        dict
    }
}

impl Default for PdfFont {
    fn default() -> Self {
        Self::default_font()
    }
}

/// Build any font variant. Nested Type0 fonts are rejected unless
/// `allow_type0` is set.
pub(crate) fn build_font(
    loader: &mut Loader<'_, '_>,
    obj: &Object,
    allow_type0: bool,
) -> Result<PdfFont, BackendError> {
    let object_id = reference_of(obj);
    let dict = match loader.access.resolve(obj)? {
        Object::Dictionary(dict) => dict,
        other => {
            return Err(BackendError::unsupported(format!(
                "font object is a {}, not a dictionary",
                kind_of(other)
            )));
        }
    };

    let subtype = loader
        .access
        .get_name(dict, b"Subtype")?
        .ok_or_else(|| FontError::missing("Subtype", "font"))?;
    let mut common = FontCommon {
        subtype,
        name: loader.access.get(dict, b"Name").ok().flatten().and_then(name_of),
        object_id,
        ..FontCommon::default()
    };

    if common.subtype == "Type3" {
        return Err(type3_unsupported(loader, dict, common));
    }

    match loader.access.get_name(dict, b"Type")? {
        None => return Err(FontError::missing("Type", "font").into()),
        Some(ty) if ty != "Font" => {
            return Err(FontError::mismatch("Type", "/Font", format!("/{ty}")).into());
        }
        Some(_) => {}
    }
    common.base_font = loader
        .access
        .get_name(dict, b"BaseFont")?
        .ok_or_else(|| FontError::missing("BaseFont", "font"))?;
    if let Ok(desc) = dict.get(b"FontDescriptor") {
        common.descriptor = Some(PdfFontDescriptor::load(loader, desc, &common.base_font)?);
    }
    load_to_unicode(loader, dict, &mut common)?;

    match common.subtype.as_str() {
        "Type0" if !allow_type0 => Err(FontError::CyclicalReference(format!(
            "cyclical type0 loading: {} is nested in a Type0 font",
            common.base_font
        ))
        .into()),
        "Type0" => Type0Font::load(loader, dict, common).map(PdfFont::Type0),
        "Type1" | "MMType1" | "TrueType" => build_simple(loader, dict, common),
        "CIDFontType0" => {
            CidFont::load(loader, dict, common, CidFontType::Type0).map(PdfFont::CidType0)
        }
        "CIDFontType2" => {
            CidFont::load(loader, dict, common, CidFontType::Type2).map(PdfFont::CidType2)
        }
        other => Err(BackendError::unsupported(format!(
            "unsupported font subtype /{other}"
        ))),
    }
}

fn load_to_unicode(
    loader: &mut Loader<'_, '_>,
    dict: &Dictionary,
    common: &mut FontCommon,
) -> Result<(), BackendError> {
    let Ok(obj) = dict.get(b"ToUnicode") else {
        return Ok(());
    };
    let stream = match loader.access.resolve(obj)? {
        Object::Stream(stream) => stream,
        other => {
            return Err(FontError::mismatch("ToUnicode", "stream", kind_of(other)).into());
        }
    };
    let data = loader.access.decode_stream(stream)?;
    let cmap = ToUnicodeCMap::parse(&data, is_cid_subtype(&common.subtype))?;
    common.to_unicode = Some(Arc::new(cmap));
    common.to_unicode_obj = Some(obj.clone());
    Ok(())
}

/// Type1, MMType1 and TrueType. A standard-14 base font is overlaid on its
/// canonical dictionary so that missing fields take the built-in values.
fn build_simple(
    loader: &mut Loader<'_, '_>,
    dict: &Dictionary,
    common: FontCommon,
) -> Result<PdfFont, BackendError> {
    let standard = StandardFontName::from_name(&common.base_font);
    let merged;
    let dict = match standard {
        Some(standard) => {
            let mut canonical = standard.canonical_dictionary();
            for (key, value) in dict.iter() {
                canonical.set(key.clone(), value.clone());
            }
            merged = canonical;
            &merged
        }
        None => dict,
    };

    let mut font = SimpleFont::load(loader, dict, common)?;
    if let Some(standard) = standard {
        font.apply_standard(standard);
    }
    font.add_encoding(loader, dict)?;
    if standard.is_some() {
        font.finalize_standard(loader)?;
    }

    if font.has_type1c_program() {
        return Err(BackendError::Unsupported {
            reason: format!("Type1C font program of {}", font.common.base_font),
            degraded: Some(Box::new(PdfFont::Simple(font))),
        });
    }
    Ok(PdfFont::Simple(font))
}

/// Type3 glyphs are content streams; only the simple-font fields are read.
fn type3_unsupported(
    loader: &mut Loader<'_, '_>,
    dict: &Dictionary,
    mut common: FontCommon,
) -> BackendError {
    common.base_font = loader
        .access
        .get(dict, b"BaseFont")
        .ok()
        .flatten()
        .and_then(name_of)
        .unwrap_or_default();
    let degraded = SimpleFont::load(loader, dict, common)
        .and_then(|mut font| {
            font.add_encoding(loader, dict)?;
            Ok(font)
        })
        .ok();
    BackendError::Unsupported {
        reason: "Type3 fonts are not supported".to_string(),
        degraded: degraded.map(|font| Box::new(PdfFont::Simple(font))),
    }
}
