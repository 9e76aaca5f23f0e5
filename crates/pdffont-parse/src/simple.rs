//! Simple (single-byte) fonts: Type1, MMType1, TrueType and Type3.

use std::collections::BTreeMap;

use lopdf::{Dictionary, Object};
use pdffont_core::{
    BaseEncoding, CharCode, ExtractWarningCode, FontError, PersistedEncoding, SimpleEncoder,
    TextEncoder,
};

use crate::descriptor::PdfFontDescriptor;
use crate::error::BackendError;
use crate::font::FontCommon;
use crate::fontfile::FontProgram;
use crate::loader::Loader;
use crate::objects::{int_of, kind_of, name_of};
use crate::standard_fonts::StandardFontName;

/// Keys of a simple font dictionary written back verbatim.
const SIMPLE_KEYS: [&str; 4] = ["FirstChar", "LastChar", "Widths", "Encoding"];

/// A font addressed by one byte per code.
#[derive(Debug, Clone)]
pub struct SimpleFont {
    pub(crate) common: FontCommon,
    first_char: Option<CharCode>,
    last_char: Option<CharCode>,
    widths: Vec<Option<f64>>,
    verbatim: Vec<(&'static str, Object)>,
    encoder: Option<TextEncoder>,
    std14_encoder: Option<TextEncoder>,
    standard: Option<StandardFontName>,
    standard_widths: BTreeMap<char, f64>,
    builtin_descriptor: bool,
}

impl SimpleFont {
    /// Read the width fields of a simple font dictionary.
    pub(crate) fn load(
        loader: &mut Loader<'_, '_>,
        dict: &Dictionary,
        common: FontCommon,
    ) -> Result<Self, BackendError> {
        let verbatim = SIMPLE_KEYS
            .into_iter()
            .filter_map(|key| dict.get(key.as_bytes()).ok().map(|v| (key, v.clone())))
            .collect();

        let first_char = loader.access.get_int(dict, b"FirstChar")?;
        let last_char = loader.access.get_int(dict, b"LastChar")?;
        let widths = match loader.access.get_array(dict, b"Widths")? {
            Some(items) => loader.access.numbers(items),
            None => Vec::new(),
        };

        let mut font = SimpleFont {
            common,
            first_char: None,
            last_char: None,
            widths,
            verbatim,
            encoder: None,
            std14_encoder: None,
            standard: None,
            standard_widths: BTreeMap::new(),
            builtin_descriptor: false,
        };

        let in_range = |v: i64| CharCode::try_from(v).ok().filter(|c| *c <= 0xFF);
        font.first_char = match first_char {
            None => None,
            Some(v) => match in_range(v) {
                Some(c) => Some(c),
                None => {
                    font.warn(loader, format!("/FirstChar {v} is out of range"))?;
                    None
                }
            },
        };
        font.last_char = last_char.and_then(in_range);

        if !font.widths.is_empty() {
            if font.first_char.is_none() {
                font.warn(loader, "/Widths without /FirstChar, assuming 0")?;
            }
            let first = font.first_char.unwrap_or(0);
            if let Some(last) = font.last_char {
                let expected = usize::from(last.saturating_sub(first)) + 1;
                if expected != font.widths.len() {
                    font.warn(
                        loader,
                        format!(
                            "/Widths has {} entries, /FirstChar..=/LastChar spans {expected}",
                            font.widths.len()
                        ),
                    )?;
                }
            }
        }

        Ok(font)
    }

    /// The canonical standard font: built-in descriptor, encoding and widths.
    pub(crate) fn standard(standard: StandardFontName) -> Self {
        let common = FontCommon {
            base_font: standard.name().to_string(),
            subtype: "Type1".to_string(),
            ..FontCommon::default()
        };
        let mut font = SimpleFont {
            common,
            first_char: None,
            last_char: None,
            widths: Vec::new(),
            verbatim: Vec::new(),
            encoder: None,
            std14_encoder: None,
            standard: None,
            standard_widths: BTreeMap::new(),
            builtin_descriptor: false,
        };
        font.apply_standard(standard);
        font
    }

    /// Copy the canonical widths, metrics and built-in encoder of `standard`.
    pub(crate) fn apply_standard(&mut self, standard: StandardFontName) {
        self.standard = Some(standard);
        self.standard_widths = standard.widths();
        self.std14_encoder = Some(SimpleEncoder::new(standard.builtin_encoding(), BTreeMap::new()).into());
        if self.common.descriptor.is_none() {
            self.common.descriptor = Some(PdfFontDescriptor::builtin(&standard.metrics()));
            self.builtin_descriptor = true;
        }
    }

    /// Attach the encoder described by `/Encoding` and the font program.
    pub(crate) fn add_encoding(
        &mut self,
        loader: &mut Loader<'_, '_>,
        dict: &Dictionary,
    ) -> Result<(), BackendError> {
        let builtin = self.program_encoding();
        self.encoder = match loader.access.get(dict, b"Encoding")? {
            None => self.implicit_encoder(loader, builtin)?,
            Some(Object::Name(name)) => {
                let name = String::from_utf8_lossy(name).into_owned();
                Some(SimpleEncoder::new(self.base_encoding(loader, &name)?, BTreeMap::new()).into())
            }
            Some(Object::Dictionary(enc)) => {
                let differences = self.differences(loader, enc)?;
                let encoder = match loader.access.get_name(enc, b"BaseEncoding")? {
                    Some(name) => SimpleEncoder::new(self.base_encoding(loader, &name)?, differences),
                    None => match (builtin, self.standard) {
                        (Some(entries), _) => {
                            SimpleEncoder::from_glyph_names("FontSpecific", entries, differences)
                        }
                        (None, Some(standard)) => {
                            SimpleEncoder::new(standard.builtin_encoding(), differences)
                        }
                        (None, None) => SimpleEncoder::new(BaseEncoding::Standard, differences),
                    },
                };
                Some(encoder.into())
            }
            Some(other) => {
                return Err(
                    FontError::mismatch("Encoding", "name or dictionary", kind_of(other)).into(),
                );
            }
        };
        Ok(())
    }

    fn implicit_encoder(
        &self,
        loader: &mut Loader<'_, '_>,
        builtin: Option<Vec<(u8, String)>>,
    ) -> Result<Option<TextEncoder>, BackendError> {
        if let Some(entries) = builtin {
            return Ok(Some(
                SimpleEncoder::from_glyph_names("FontSpecific", entries, BTreeMap::new()).into(),
            ));
        }
        if let Some(program) = self.program().and_then(FontProgram::as_truetype) {
            let encoder = program.simple_encoder();
            if !encoder.is_empty() {
                return Ok(Some(encoder.into()));
            }
        }
        if self.standard.is_some() {
            return Ok(None);
        }
        let symbolic = self
            .common
            .descriptor
            .as_ref()
            .is_some_and(PdfFontDescriptor::is_symbolic);
        if symbolic {
            self.warn_code(
                loader,
                ExtractWarningCode::MissingEncoder,
                "symbolic font has no /Encoding and no built-in encoding",
            )?;
            return Ok(None);
        }
        self.warn_code(
            loader,
            ExtractWarningCode::EncodingFallback,
            "no /Encoding, using StandardEncoding",
        )?;
        Ok(Some(SimpleEncoder::new(BaseEncoding::Standard, BTreeMap::new()).into()))
    }

    fn base_encoding(
        &self,
        loader: &mut Loader<'_, '_>,
        name: &str,
    ) -> Result<BaseEncoding, BackendError> {
        match BaseEncoding::from_name(name) {
            Some(base) => Ok(base),
            None => {
                self.warn_code(
                    loader,
                    ExtractWarningCode::EncodingFallback,
                    format!("unknown encoding /{name}, using StandardEncoding"),
                )?;
                Ok(BaseEncoding::Standard)
            }
        }
    }

    /// Parse `/Differences` runs: `[code /name /name ... code /name ...]`.
    fn differences(
        &self,
        loader: &mut Loader<'_, '_>,
        enc: &Dictionary,
    ) -> Result<BTreeMap<u8, String>, BackendError> {
        let mut map = BTreeMap::new();
        let Some(items) = loader.access.get_array(enc, b"Differences")? else {
            return Ok(map);
        };
        let mut code: Option<i64> = None;
        let mut skipped = 0usize;
        for item in items {
            let item = loader.access.resolve(item)?;
            if let Some(start) = int_of(item) {
                code = Some(start);
                continue;
            }
            match (name_of(item), code) {
                (Some(name), Some(c)) => {
                    match u8::try_from(c) {
                        Ok(byte) => {
                            map.insert(byte, name);
                        }
                        Err(_) => skipped += 1,
                    }
                    // Overflow ends the run; the names after it are skipped.
                    code = c.checked_add(1);
                }
                _ => skipped += 1,
            }
        }
        if skipped > 0 {
            self.warn(loader, format!("skipped {skipped} malformed /Differences entries"))?;
        }
        Ok(map)
    }

    /// Reconcile the explicit and built-in encoders of a standard font.
    pub(crate) fn finalize_standard(
        &mut self,
        loader: &mut Loader<'_, '_>,
    ) -> Result<(), BackendError> {
        if self.encoder.is_some() {
            self.std14_encoder = None;
        } else if self.std14_encoder.is_none() {
            self.warn_code(
                loader,
                ExtractWarningCode::MissingEncoder,
                "standard font has neither an encoder nor a built-in encoder",
            )?;
            self.encoder = Some(SimpleEncoder::new(BaseEncoding::Standard, BTreeMap::new()).into());
        }
        Ok(())
    }

    fn program(&self) -> Option<&FontProgram> {
        self.common.descriptor.as_ref().and_then(PdfFontDescriptor::program)
    }

    fn program_encoding(&self) -> Option<Vec<(u8, String)>> {
        self.program()
            .and_then(FontProgram::as_type1)
            .and_then(|header| header.encoding.as_ref())
            .map(|encoding| encoding.entries())
    }

    pub(crate) fn has_type1c_program(&self) -> bool {
        self.program().is_some_and(FontProgram::is_type1c)
    }

    fn warn(&self, loader: &mut Loader<'_, '_>, msg: impl Into<String>) -> Result<(), BackendError> {
        self.warn_code(loader, ExtractWarningCode::MalformedObject, msg)
    }

    fn warn_code(
        &self,
        loader: &mut Loader<'_, '_>,
        code: ExtractWarningCode,
        msg: impl Into<String>,
    ) -> Result<(), BackendError> {
        loader.warn_for(code, msg, &self.common.base_font, self.common.object_id)
    }

    /// The active encoder: the explicit one, else the standard font's built-in.
    pub fn encoder(&self) -> Option<&TextEncoder> {
        self.encoder.as_ref().or(self.std14_encoder.as_ref())
    }

    /// The standard font this font was resolved to, if any.
    pub fn standard_font(&self) -> Option<StandardFontName> {
        self.standard
    }

    /// True when the descriptor is the canonical one of a standard font.
    pub fn builtin_descriptor(&self) -> bool {
        self.builtin_descriptor
    }

    pub fn first_char(&self) -> Option<CharCode> {
        self.first_char
    }

    pub fn last_char(&self) -> Option<CharCode> {
        self.last_char
    }

    /// Explicit `/Widths` entries, starting at `/FirstChar`.
    pub fn widths(&self) -> &[Option<f64>] {
        &self.widths
    }

    /// Canonical standard-font widths keyed by rune.
    pub fn standard_widths(&self) -> &BTreeMap<char, f64> {
        &self.standard_widths
    }

    /// Width of `code` in 1/1000 em.
    ///
    /// Explicit `/Widths`, then the standard font's width of the encoded
    /// rune, then the descriptor's `/MissingWidth`.
    pub fn char_width(&self, code: CharCode) -> Option<f64> {
        let first = self.first_char.unwrap_or(0);
        if let Some(index) = code.checked_sub(first) {
            if let Some(Some(width)) = self.widths.get(usize::from(index)) {
                return Some(*width);
            }
        }
        if let Some(width) = self
            .encoder()
            .and_then(|enc| enc.charcode_to_rune(code))
            .and_then(|rune| self.standard_widths.get(&rune))
        {
            return Some(*width);
        }
        self.common
            .descriptor
            .as_ref()
            .and_then(PdfFontDescriptor::missing_width)
    }

    /// Write the variant-specific entries into `dict`.
    pub(crate) fn write_fields(&self, dict: &mut Dictionary) {
        for (key, value) in &self.verbatim {
            dict.set(*key, value.clone());
        }
        if dict.get(b"Encoding").is_ok() {
            return;
        }
        if let Some(persisted) = self.encoder().and_then(TextEncoder::to_persistable) {
            dict.set("Encoding", persisted_encoding_object(&persisted));
        }
    }
}

/// Object form of a persistable encoding.
pub(crate) fn persisted_encoding_object(persisted: &PersistedEncoding) -> Object {
    match persisted {
        PersistedEncoding::Name(name) => Object::Name(name.as_bytes().to_vec()),
        PersistedEncoding::Differences { base, .. } => {
            let mut enc = Dictionary::new();
            enc.set("Type", Object::Name(b"Encoding".to_vec()));
            if let Some(base) = base {
                enc.set("BaseEncoding", Object::Name(base.as_bytes().to_vec()));
            }
            let mut runs = Vec::new();
            for (code, names) in persisted.difference_runs() {
                runs.push(Object::Integer(i64::from(code)));
                runs.extend(names.into_iter().map(|n| Object::Name(n.as_bytes().to_vec())));
            }
            enc.set("Differences", Object::Array(runs));
            Object::Dictionary(enc)
        }
    }
}
