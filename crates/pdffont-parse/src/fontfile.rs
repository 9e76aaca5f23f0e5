//! Embedded font programs referenced from a font descriptor.

use lopdf::Stream;
use pdffont_core::{Type1Header, parse_type1_header};

use crate::error::BackendError;
use crate::objects::{int_of, name_of};
use crate::truetype::TrueTypeProgram;

/// Descriptor key an embedded program was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFileSlot {
    /// `/FontFile`: a Type 1 program.
    FontFile,
    /// `/FontFile2`: a TrueType program.
    FontFile2,
    /// `/FontFile3`: a program identified by its stream `/Subtype`.
    FontFile3,
}

impl FontFileSlot {
    pub const ALL: [FontFileSlot; 3] = [
        FontFileSlot::FontFile,
        FontFileSlot::FontFile2,
        FontFileSlot::FontFile3,
    ];

    pub fn key(self) -> &'static str {
        match self {
            FontFileSlot::FontFile => "FontFile",
            FontFileSlot::FontFile2 => "FontFile2",
            FontFileSlot::FontFile3 => "FontFile3",
        }
    }
}

/// A parsed (or identified) embedded font program.
#[derive(Debug, Clone, PartialEq)]
pub enum FontProgram {
    /// Type 1 cleartext header.
    Type1(Type1Header),
    /// TrueType or OpenType outlines.
    TrueType(TrueTypeProgram),
    /// Bare CFF for a simple font. Not decoded.
    Type1C,
    /// Bare CFF for a CIDFontType0. Not decoded.
    CidType0C,
}

impl FontProgram {
    /// Short label used in messages.
    pub fn kind(&self) -> &'static str {
        match self {
            FontProgram::Type1(_) => "Type1",
            FontProgram::TrueType(_) => "TrueType",
            FontProgram::Type1C => "Type1C",
            FontProgram::CidType0C => "CIDFontType0C",
        }
    }

    pub fn as_truetype(&self) -> Option<&TrueTypeProgram> {
        match self {
            FontProgram::TrueType(program) => Some(program),
            _ => None,
        }
    }

    pub fn as_type1(&self) -> Option<&Type1Header> {
        match self {
            FontProgram::Type1(header) => Some(header),
            _ => None,
        }
    }

    pub fn is_type1c(&self) -> bool {
        matches!(self, FontProgram::Type1C)
    }
}

/// Outcome of reading one font file stream.
#[derive(Debug)]
pub(crate) enum Loaded {
    Program(FontProgram),
    /// A `/FontFile3` subtype with no reader; carries the subtype name.
    Unrecognized(String),
}

/// Parse the decoded content of the stream stored under `slot`.
pub(crate) fn load_program(
    slot: FontFileSlot,
    stream: &Stream,
    data: &[u8],
) -> Result<Loaded, BackendError> {
    match slot {
        FontFileSlot::FontFile => {
            if stream.dict.get(b"Subtype").ok().and_then(name_of).as_deref() == Some("Type1C") {
                return Ok(Loaded::Program(FontProgram::Type1C));
            }
            let length1 = stream
                .dict
                .get(b"Length1")
                .ok()
                .and_then(int_of)
                .and_then(|n| usize::try_from(n).ok())
                .filter(|n| *n > 0 && *n <= data.len());
            let clear = match length1 {
                Some(n) => &data[..n],
                None => data,
            };
            parse_type1(clear).map(|header| Loaded::Program(FontProgram::Type1(header)))
        }
        FontFileSlot::FontFile2 => {
            TrueTypeProgram::parse(data).map(|p| Loaded::Program(FontProgram::TrueType(p)))
        }
        FontFileSlot::FontFile3 => {
            let subtype = stream
                .dict
                .get(b"Subtype")
                .ok()
                .and_then(name_of)
                .unwrap_or_default();
            match subtype.as_str() {
                "Type1C" => Ok(Loaded::Program(FontProgram::Type1C)),
                "CIDFontType0C" => Ok(Loaded::Program(FontProgram::CidType0C)),
                "OpenType" => {
                    TrueTypeProgram::parse(data).map(|p| Loaded::Program(FontProgram::TrueType(p)))
                }
                _ => Ok(Loaded::Unrecognized(subtype)),
            }
        }
    }
}

/// Validate and scan a Type 1 program.
///
/// Accepts PFA text and PFB files whose first segment is ASCII.
pub(crate) fn parse_type1(data: &[u8]) -> Result<Type1Header, BackendError> {
    let body = match data {
        [0x80, 0x01, rest @ ..] if rest.len() >= 4 => &rest[4..],
        _ => data,
    };
    if !body.starts_with(b"%!") {
        return Err(BackendError::collaborator(
            "Type1 program: invalid start of ASCII segment",
        ));
    }
    Ok(parse_type1_header(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::dictionary;
    use pdffont_core::{FontError, Type1Encoding};

    const PFA: &[u8] = b"%!PS-AdobeFont-1.0: Foo 001\n/FontName /Foo def\n\
        /Encoding 256 array\n0 1 255 {1 index exch /.notdef put} for\n\
        dup 65 /Alpha put\nreadonly def\ncurrentfile eexec\n\x00\x01\x02";

    #[test]
    fn type1_header_is_scanned() {
        let header = parse_type1(PFA).unwrap();
        assert_eq!(header.font_name.as_deref(), Some("Foo"));
        let Some(Type1Encoding::Custom(map)) = header.encoding else {
            panic!("expected custom encoding");
        };
        assert_eq!(map.get(&65).map(String::as_str), Some("Alpha"));
    }

    #[test]
    fn pfb_segment_header_is_skipped() {
        let mut data = vec![0x80, 0x01, 0x10, 0x00, 0x00, 0x00];
        data.extend_from_slice(PFA);
        assert!(parse_type1(&data).is_ok());
    }

    #[test]
    fn type1_garbage_is_collaborator_error() {
        let err = parse_type1(b"garbage").unwrap_err();
        assert!(matches!(err, BackendError::Core(FontError::Collaborator(_))));
    }

    #[test]
    fn fontfile_respects_length1() {
        let stream = Stream::new(dictionary! { "Length1" => 20 }, PFA.to_vec());
        let Loaded::Program(FontProgram::Type1(header)) =
            load_program(FontFileSlot::FontFile, &stream, PFA).unwrap()
        else {
            panic!("expected Type1 program");
        };
        assert_eq!(header.font_name, None);
    }

    #[test]
    fn fontfile3_subtypes_are_identified() {
        let cff = Stream::new(dictionary! { "Subtype" => "Type1C" }, vec![1, 0, 4, 1]);
        let loaded = load_program(FontFileSlot::FontFile3, &cff, &cff.content).unwrap();
        assert!(matches!(loaded, Loaded::Program(FontProgram::Type1C)));

        let cid = Stream::new(dictionary! { "Subtype" => "CIDFontType0C" }, vec![1, 0, 4, 1]);
        let loaded = load_program(FontFileSlot::FontFile3, &cid, &cid.content).unwrap();
        assert!(matches!(loaded, Loaded::Program(FontProgram::CidType0C)));

        let labelled = Stream::new(dictionary! { "Subtype" => "Type1C" }, vec![1, 0, 4, 1]);
        let loaded = load_program(FontFileSlot::FontFile, &labelled, &labelled.content).unwrap();
        assert!(matches!(loaded, Loaded::Program(FontProgram::Type1C)));

        let odd = Stream::new(dictionary! { "Subtype" => "Weird" }, Vec::new());
        let loaded = load_program(FontFileSlot::FontFile3, &odd, &odd.content).unwrap();
        assert!(matches!(loaded, Loaded::Unrecognized(ref s) if s == "Weird"));
    }

    #[test]
    fn fontfile2_garbage_propagates() {
        let stream = Stream::new(dictionary! {}, b"nope".to_vec());
        let err = load_program(FontFileSlot::FontFile2, &stream, b"nope").unwrap_err();
        assert!(matches!(err, BackendError::Core(FontError::Collaborator(_))));
    }
}
