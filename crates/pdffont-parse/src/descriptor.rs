//! Font descriptor extraction and re-serialization.
//!
//! Recognised entries are kept verbatim, references included, so that
//! writing a descriptor back reproduces its source. `/Flags` and
//! `/MissingWidth` are decoded once at parse time; the embedded program,
//! if any, is parsed eagerly.

use lopdf::{Dictionary, Object, ObjectId};
use pdffont_core::{ExtractWarningCode, FontError, FontFlags};

use crate::error::BackendError;
use crate::fontfile::{FontFileSlot, FontProgram, Loaded, load_program};
use crate::loader::Loader;
use crate::objects::{int_of, kind_of, name_of, number_of, reference_of};

/// Descriptor keys copied verbatim, in serialization order.
pub const DESCRIPTOR_KEYS: [&str; 25] = [
    "FontName",
    "FontFamily",
    "FontStretch",
    "FontWeight",
    "Flags",
    "FontBBox",
    "ItalicAngle",
    "Ascent",
    "Descent",
    "Leading",
    "CapHeight",
    "XHeight",
    "StemV",
    "StemH",
    "AvgWidth",
    "MaxWidth",
    "MissingWidth",
    "FontFile",
    "FontFile2",
    "FontFile3",
    "CharSet",
    "Style",
    "Lang",
    "FD",
    "CIDSet",
];

/// Metric and flag bundle accompanying a font.
#[derive(Debug, Clone, Default)]
pub struct PdfFontDescriptor {
    entries: Vec<(&'static str, Object)>,
    font_name: Option<String>,
    flags: FontFlags,
    missing_width: Option<f64>,
    italic_angle: Option<f64>,
    ascent: Option<f64>,
    descent: Option<f64>,
    cap_height: Option<f64>,
    x_height: Option<f64>,
    stem_v: Option<f64>,
    font_bbox: Option<[f64; 4]>,
    program: Option<FontProgram>,
    program_slot: Option<FontFileSlot>,
    object_id: Option<ObjectId>,
}

/// Canonical metrics used to synthesize a descriptor for a built-in font.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescriptorMetrics {
    pub font_name: &'static str,
    pub font_family: &'static str,
    pub flags: FontFlags,
    pub font_bbox: [i16; 4],
    pub italic_angle: f64,
    pub ascent: i64,
    pub descent: i64,
    pub cap_height: i64,
    pub x_height: i64,
    pub stem_v: i64,
    pub stem_h: i64,
}

impl PdfFontDescriptor {
    /// Parse a descriptor object (direct or indirect).
    pub(crate) fn load(
        loader: &mut Loader<'_, '_>,
        obj: &Object,
        font_name: &str,
    ) -> Result<Self, BackendError> {
        let object_id = reference_of(obj);
        let dict = match loader.access.resolve(obj)? {
            Object::Dictionary(dict) => dict,
            other => {
                return Err(
                    FontError::mismatch("FontDescriptor", "dictionary", kind_of(other)).into(),
                );
            }
        };

        let mut desc = PdfFontDescriptor {
            object_id,
            ..PdfFontDescriptor::default()
        };

        if let Ok(ty) = dict.get(b"Type") {
            let ty = loader.access.resolve(ty)?;
            if name_of(ty).as_deref() != Some("FontDescriptor") {
                loader.warn_for(
                    ExtractWarningCode::MalformedObject,
                    format!("font descriptor /Type is {}, not FontDescriptor", kind_label(ty)),
                    font_name,
                    object_id,
                )?;
            }
        }

        for key in DESCRIPTOR_KEYS {
            if let Ok(value) = dict.get(key.as_bytes()) {
                desc.entries.push((key, value.clone()));
            }
        }

        desc.font_name = loader.access.get(dict, b"FontName")?.and_then(name_of);
        if desc.font_name.is_none() {
            loader.warn_for(
                ExtractWarningCode::MalformedObject,
                "font descriptor has no /FontName",
                font_name,
                object_id,
            )?;
        }

        match loader.access.get(dict, b"Flags")? {
            None => {}
            Some(flags) => match int_of(flags) {
                Some(raw) => desc.flags = FontFlags::from_raw(raw),
                None => loader.warn_for(
                    ExtractWarningCode::MalformedObject,
                    format!("/Flags is {}, not an integer", kind_of(flags)),
                    font_name,
                    object_id,
                )?,
            },
        }

        match loader.access.get(dict, b"MissingWidth")? {
            None => {}
            Some(width) => match number_of(width) {
                Some(w) => desc.missing_width = Some(w),
                None => loader.warn_for(
                    ExtractWarningCode::MalformedObject,
                    format!("/MissingWidth is {}, not a number", kind_of(width)),
                    font_name,
                    object_id,
                )?,
            },
        }

        let number = |key: &[u8]| -> Option<f64> {
            loader.access.get(dict, key).ok().flatten().and_then(number_of)
        };
        desc.italic_angle = number(b"ItalicAngle");
        desc.ascent = number(b"Ascent");
        desc.descent = number(b"Descent");
        desc.cap_height = number(b"CapHeight");
        desc.x_height = number(b"XHeight");
        desc.stem_v = number(b"StemV");
        desc.font_bbox = match loader.access.get(dict, b"FontBBox").ok().flatten() {
            Some(Object::Array(items)) if items.len() == 4 => {
                let values = loader.access.numbers(items);
                match values.as_slice() {
                    [Some(a), Some(b), Some(c), Some(d)] => Some([*a, *b, *c, *d]),
                    _ => None,
                }
            }
            _ => None,
        };

        desc.load_program(loader, dict, font_name)?;
        Ok(desc)
    }

    fn load_program(
        &mut self,
        loader: &mut Loader<'_, '_>,
        dict: &Dictionary,
        font_name: &str,
    ) -> Result<(), BackendError> {
        let present: Vec<FontFileSlot> = FontFileSlot::ALL
            .into_iter()
            .filter(|slot| dict.get(slot.key().as_bytes()).is_ok())
            .collect();
        let Some(&slot) = present.first() else {
            return Ok(());
        };
        if present.len() > 1 {
            loader.warn_for(
                ExtractWarningCode::MalformedObject,
                format!(
                    "font descriptor has {} embedded programs, using /{}",
                    present.len(),
                    slot.key()
                ),
                font_name,
                self.object_id,
            )?;
        }

        let Some(stream) = loader.access.get_stream(dict, slot.key().as_bytes())? else {
            return Ok(());
        };
        let data = loader.access.decode_stream(stream)?;
        self.program_slot = Some(slot);
        match load_program(slot, stream, &data)? {
            Loaded::Program(program) => self.program = Some(program),
            Loaded::Unrecognized(subtype) => loader.warn_for(
                ExtractWarningCode::UnsupportedFontProgram,
                format!("/{} subtype {subtype:?} is not supported", slot.key()),
                font_name,
                self.object_id,
            )?,
        }
        Ok(())
    }

    /// Synthesize the canonical descriptor of a built-in font.
    pub fn builtin(metrics: &DescriptorMetrics) -> Self {
        let bbox: Vec<Object> = metrics
            .font_bbox
            .iter()
            .map(|v| Object::Integer(i64::from(*v)))
            .collect();
        let entries = vec![
            ("FontName", Object::Name(metrics.font_name.as_bytes().to_vec())),
            (
                "FontFamily",
                Object::string_literal(metrics.font_family.as_bytes().to_vec()),
            ),
            ("Flags", Object::Integer(i64::from(metrics.flags.bits()))),
            ("FontBBox", Object::Array(bbox)),
            ("ItalicAngle", Object::Real(metrics.italic_angle as f32)),
            ("Ascent", Object::Integer(metrics.ascent)),
            ("Descent", Object::Integer(metrics.descent)),
            ("CapHeight", Object::Integer(metrics.cap_height)),
            ("XHeight", Object::Integer(metrics.x_height)),
            ("StemV", Object::Integer(metrics.stem_v)),
            ("StemH", Object::Integer(metrics.stem_h)),
        ];
        let [a, b, c, d] = metrics.font_bbox.map(f64::from);
        PdfFontDescriptor {
            entries,
            font_name: Some(metrics.font_name.to_string()),
            flags: metrics.flags,
            italic_angle: Some(metrics.italic_angle),
            ascent: Some(metrics.ascent as f64),
            descent: Some(metrics.descent as f64),
            cap_height: Some(metrics.cap_height as f64),
            x_height: Some(metrics.x_height as f64),
            stem_v: Some(metrics.stem_v as f64),
            font_bbox: Some([a, b, c, d]),
            ..PdfFontDescriptor::default()
        }
    }

    /// The raw value stored under `key`, exactly as it appeared in the source.
    pub fn entry(&self, key: &str) -> Option<&Object> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, value)| value)
    }

    /// Every recognised entry present in the source, in canonical order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Object)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    pub fn font_name(&self) -> Option<&str> {
        self.font_name.as_deref()
    }

    /// Flags decoded from `/Flags`; empty when absent or malformed.
    pub fn flags(&self) -> FontFlags {
        self.flags
    }

    pub fn is_symbolic(&self) -> bool {
        self.flags.is_symbolic()
    }

    /// Fallback advance for codes without an explicit width.
    pub fn missing_width(&self) -> Option<f64> {
        self.missing_width
    }

    pub fn italic_angle(&self) -> Option<f64> {
        self.italic_angle
    }

    pub fn ascent(&self) -> Option<f64> {
        self.ascent
    }

    pub fn descent(&self) -> Option<f64> {
        self.descent
    }

    pub fn cap_height(&self) -> Option<f64> {
        self.cap_height
    }

    pub fn x_height(&self) -> Option<f64> {
        self.x_height
    }

    pub fn stem_v(&self) -> Option<f64> {
        self.stem_v
    }

    pub fn font_bbox(&self) -> Option<[f64; 4]> {
        self.font_bbox
    }

    /// The parsed embedded program.
    pub fn program(&self) -> Option<&FontProgram> {
        self.program.as_ref()
    }

    /// The slot the embedded program was read from.
    pub fn program_slot(&self) -> Option<FontFileSlot> {
        self.program_slot
    }

    pub fn object_id(&self) -> Option<ObjectId> {
        self.object_id
    }

    /// Regenerate the descriptor dictionary.
    pub fn to_dictionary(&self) -> Dictionary {
        let mut dict = Dictionary::new();
        dict.set("Type", Object::Name(b"FontDescriptor".to_vec()));
        for (key, value) in &self.entries {
            dict.set(*key, value.clone());
        }
        dict
    }
}

fn kind_label(obj: &Object) -> String {
    match name_of(obj) {
        Some(name) => format!("/{name}"),
        None => kind_of(obj).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::ObjectAccess;
    use lopdf::{Document, Stream, dictionary};
    use pdffont_core::{ExtractWarning, LoadOptions};

    fn load(
        doc: &Document,
        obj: &Object,
    ) -> (Result<PdfFontDescriptor, BackendError>, Vec<ExtractWarning>) {
        let options = LoadOptions::default();
        let mut sink = Vec::new();
        let result = {
            let mut loader = Loader::new(ObjectAccess::new(doc, &options), &options, &mut sink);
            PdfFontDescriptor::load(&mut loader, obj, "Test")
        };
        (result, sink)
    }

    fn full_descriptor() -> Dictionary {
        dictionary! {
            "Type" => "FontDescriptor",
            "FontName" => "ABCDEF+Foo-Bold",
            "Flags" => 34,
            "FontBBox" => vec![Object::Integer(-10), Object::Integer(-200), Object::Integer(1000), Object::Integer(900)],
            "ItalicAngle" => 0,
            "Ascent" => 720,
            "Descent" => Object::Real(-210.5),
            "CapHeight" => 700,
            "StemV" => 80,
            "MissingWidth" => 250,
            "Lang" => Object::string_literal("en"),
        }
    }

    // ========== extraction ==========

    #[test]
    fn extracts_derived_fields() {
        let doc = Document::with_version("1.7");
        let (desc, warnings) = load(&doc, &Object::Dictionary(full_descriptor()));
        let desc = desc.unwrap();
        assert!(warnings.is_empty());
        assert_eq!(desc.font_name(), Some("ABCDEF+Foo-Bold"));
        assert_eq!(desc.flags(), FontFlags::SERIF | FontFlags::NONSYMBOLIC);
        assert_eq!(desc.missing_width(), Some(250.0));
        assert_eq!(desc.descent(), Some(-210.5));
        assert_eq!(desc.font_bbox(), Some([-10.0, -200.0, 1000.0, 900.0]));
        assert!(desc.program().is_none());
    }

    #[test]
    fn not_a_dictionary_is_type_mismatch() {
        let doc = Document::with_version("1.7");
        let (result, _) = load(&doc, &Object::Integer(3));
        assert!(matches!(
            result,
            Err(BackendError::Core(FontError::TypeMismatch { .. }))
        ));
    }

    #[test]
    fn lenient_fields_warn() {
        let doc = Document::with_version("1.7");
        let dict = dictionary! {
            "Type" => "Font",
            "Flags" => "Bogus",
            "MissingWidth" => Object::string_literal("wide"),
        };
        let (desc, warnings) = load(&doc, &Object::Dictionary(dict));
        let desc = desc.unwrap();
        assert_eq!(desc.flags(), FontFlags::empty());
        assert_eq!(desc.missing_width(), None);
        assert_eq!(warnings.len(), 4);
        assert!(
            warnings
                .iter()
                .all(|w| w.code == ExtractWarningCode::MalformedObject)
        );
        // Raw values are still kept for re-serialization.
        assert!(desc.entry("Flags").is_some());
    }

    #[test]
    fn indirect_descriptor_records_object_id() {
        let mut doc = Document::with_version("1.7");
        let id = doc.add_object(full_descriptor());
        let (desc, _) = load(&doc, &Object::Reference(id));
        assert_eq!(desc.unwrap().object_id(), Some(id));
    }

    // ========== embedded programs ==========

    #[test]
    fn bad_truetype_program_is_an_error() {
        let mut doc = Document::with_version("1.7");
        let file = doc.add_object(Stream::new(dictionary! {}, b"not a font".to_vec()));
        let mut dict = full_descriptor();
        dict.set("FontFile2", Object::Reference(file));
        let (result, _) = load(&doc, &Object::Dictionary(dict));
        assert!(matches!(
            result,
            Err(BackendError::Core(FontError::Collaborator(_)))
        ));
    }

    #[test]
    fn type1_program_is_scanned() {
        let mut doc = Document::with_version("1.7");
        let data = b"%!FontType1-1.0: Foo\n/FontName /Foo def\n/Encoding StandardEncoding def\ncurrentfile eexec".to_vec();
        let file = doc.add_object(Stream::new(dictionary! {}, data));
        let mut dict = full_descriptor();
        dict.set("FontFile", Object::Reference(file));
        let (desc, _) = load(&doc, &Object::Dictionary(dict));
        let desc = desc.unwrap();
        assert_eq!(desc.program_slot(), Some(FontFileSlot::FontFile));
        let header = desc.program().and_then(FontProgram::as_type1).unwrap();
        assert_eq!(header.font_name.as_deref(), Some("Foo"));
    }

    #[test]
    fn unknown_fontfile3_subtype_warns() {
        let mut doc = Document::with_version("1.7");
        let file = doc.add_object(Stream::new(dictionary! { "Subtype" => "Weird" }, vec![0]));
        let mut dict = full_descriptor();
        dict.set("FontFile3", Object::Reference(file));
        let (desc, warnings) = load(&doc, &Object::Dictionary(dict));
        assert!(desc.unwrap().program().is_none());
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, ExtractWarningCode::UnsupportedFontProgram);
    }

    // ========== re-serialization ==========

    #[test]
    fn round_trip_reproduces_present_fields() {
        let mut doc = Document::with_version("1.7");
        let width = doc.add_object(Object::Integer(333));
        let mut source = full_descriptor();
        source.set("MissingWidth", Object::Reference(width));
        let (desc, _) = load(&doc, &Object::Dictionary(source.clone()));
        let out = desc.unwrap().to_dictionary();

        for (key, value) in source.iter() {
            let written = out.get(key).unwrap();
            assert_eq!(format!("{written:?}"), format!("{value:?}"));
        }
        assert_eq!(out.len(), source.len());
        assert!(out.get(b"XHeight").is_err());
        assert!(out.get(b"FontFile").is_err());
    }

    #[test]
    fn style_is_written_under_its_own_key() {
        let doc = Document::with_version("1.7");
        let style = dictionary! { "Panose" => Object::string_literal(vec![0u8; 12]) };
        let source = dictionary! {
            "Type" => "FontDescriptor",
            "FontName" => "Foo",
            "Style" => style,
        };
        let (desc, _) = load(&doc, &Object::Dictionary(source));
        let out = desc.unwrap().to_dictionary();
        assert!(out.get(b"Style").and_then(Object::as_dict).is_ok());
        assert_eq!(
            out.get(b"FontName").and_then(Object::as_name).ok(),
            Some(&b"Foo"[..])
        );
    }

    #[test]
    fn type_is_always_written() {
        let doc = Document::with_version("1.7");
        let (desc, _) = load(&doc, &Object::Dictionary(dictionary! { "FontName" => "Foo" }));
        let out = desc.unwrap().to_dictionary();
        assert_eq!(
            out.get(b"Type").and_then(Object::as_name).ok(),
            Some(&b"FontDescriptor"[..])
        );
    }

    #[test]
    fn builtin_descriptor_carries_metrics() {
        let desc = PdfFontDescriptor::builtin(&DescriptorMetrics {
            font_name: "Helvetica",
            font_family: "Helvetica",
            flags: FontFlags::NONSYMBOLIC,
            font_bbox: [-166, -225, 1000, 931],
            italic_angle: 0.0,
            ascent: 718,
            descent: -207,
            cap_height: 718,
            x_height: 523,
            stem_v: 88,
            stem_h: 76,
        });
        assert_eq!(desc.ascent(), Some(718.0));
        assert_eq!(desc.flags(), FontFlags::NONSYMBOLIC);
        assert_eq!(
            desc.entry("StemH").and_then(|o| o.as_i64().ok()),
            Some(76)
        );
    }
}
