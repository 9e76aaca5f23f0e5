//! Typed access to `lopdf` objects.
//!
//! Every lookup resolves indirect references to a bounded depth and
//! reports wrong shapes as [`FontError::TypeMismatch`]. Absent keys are
//! `Ok(None)`.

use std::io::Read;

use flate2::read::ZlibDecoder;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use pdffont_core::{FontError, LoadOptions};

use crate::error::BackendError;

/// Read-only view over a document with the limits from [`LoadOptions`].
#[derive(Debug, Clone, Copy)]
pub struct ObjectAccess<'a> {
    doc: &'a Document,
    max_depth: usize,
    max_stream_bytes: usize,
}

impl<'a> ObjectAccess<'a> {
    pub fn new(doc: &'a Document, options: &LoadOptions) -> Self {
        Self {
            doc,
            max_depth: options.max_reference_depth,
            max_stream_bytes: options.max_stream_bytes,
        }
    }

    pub fn document(&self) -> &'a Document {
        self.doc
    }

    /// Follow a chain of references to a direct object.
    pub fn resolve<'d>(&self, obj: &'d Object) -> Result<&'d Object, BackendError>
    where
        'a: 'd,
    {
        let mut current = obj;
        let mut depth = 0;
        while let Object::Reference(id) = current {
            if depth >= self.max_depth {
                return Err(FontError::CyclicalReference(format!(
                    "reference chain through {} {} R exceeds depth {}",
                    id.0, id.1, self.max_depth
                ))
                .into());
            }
            current = self.doc.get_object(*id)?;
            depth += 1;
        }
        Ok(current)
    }

    /// The resolved value of `key`.
    pub fn get<'d>(&self, dict: &'d Dictionary, key: &[u8]) -> Result<Option<&'d Object>, BackendError>
    where
        'a: 'd,
    {
        match dict.get(key) {
            Ok(obj) => self.resolve(obj).map(Some),
            Err(_) => Ok(None),
        }
    }

    pub fn get_name(&self, dict: &Dictionary, key: &[u8]) -> Result<Option<String>, BackendError> {
        match self.get(dict, key)? {
            None => Ok(None),
            Some(obj) => name_of(obj)
                .map(Some)
                .ok_or_else(|| mismatch(key, "name", obj)),
        }
    }

    pub fn get_dict<'d>(
        &self,
        dict: &'d Dictionary,
        key: &[u8],
    ) -> Result<Option<&'d Dictionary>, BackendError>
    where
        'a: 'd,
    {
        match self.get(dict, key)? {
            None => Ok(None),
            Some(Object::Dictionary(d)) => Ok(Some(d)),
            Some(Object::Stream(s)) => Ok(Some(&s.dict)),
            Some(obj) => Err(mismatch(key, "dictionary", obj)),
        }
    }

    pub fn get_array<'d>(&self, dict: &'d Dictionary, key: &[u8]) -> Result<Option<&'d [Object]>, BackendError>
    where
        'a: 'd,
    {
        match self.get(dict, key)? {
            None => Ok(None),
            Some(Object::Array(items)) => Ok(Some(items.as_slice())),
            Some(obj) => Err(mismatch(key, "array", obj)),
        }
    }

    pub fn get_stream<'d>(&self, dict: &'d Dictionary, key: &[u8]) -> Result<Option<&'d Stream>, BackendError>
    where
        'a: 'd,
    {
        match self.get(dict, key)? {
            None => Ok(None),
            Some(Object::Stream(s)) => Ok(Some(s)),
            Some(obj) => Err(mismatch(key, "stream", obj)),
        }
    }

    pub fn get_int(&self, dict: &Dictionary, key: &[u8]) -> Result<Option<i64>, BackendError> {
        match self.get(dict, key)? {
            None => Ok(None),
            Some(obj) => int_of(obj)
                .map(Some)
                .ok_or_else(|| mismatch(key, "integer", obj)),
        }
    }

    /// Integers and reals both coerce to `f64`.
    pub fn get_number(&self, dict: &Dictionary, key: &[u8]) -> Result<Option<f64>, BackendError> {
        match self.get(dict, key)? {
            None => Ok(None),
            Some(obj) => number_of(obj)
                .map(Some)
                .ok_or_else(|| mismatch(key, "number", obj)),
        }
    }

    /// Resolve every element of an array that is itself a number.
    pub fn numbers(&self, items: &[Object]) -> Vec<Option<f64>> {
        items
            .iter()
            .map(|item| self.resolve(item).ok().and_then(number_of))
            .collect()
    }

    /// Decoded stream content, bounded by `max_stream_bytes`.
    ///
    /// Unfiltered streams are returned as stored. A lone `/FlateDecode`
    /// without `/DecodeParms` is inflated here and stops one byte past the
    /// limit; other filter chains go through `lopdf` and are checked after
    /// decoding.
    pub fn decode_stream(&self, stream: &Stream) -> Result<Vec<u8>, BackendError> {
        let Ok(filter) = stream.dict.get(b"Filter") else {
            self.check_stream_len(stream.content.len())?;
            return Ok(stream.content.clone());
        };
        let data = if is_lone_flate(self.resolve(filter)?) && stream.dict.get(b"DecodeParms").is_err() {
            self.inflate(&stream.content)?
        } else {
            stream
                .decompressed_content()
                .map_err(|e| BackendError::Parse(format!("failed to decode stream: {e}")))?
        };
        self.check_stream_len(data.len())?;
        Ok(data)
    }

    fn inflate(&self, compressed: &[u8]) -> Result<Vec<u8>, BackendError> {
        let cap = u64::try_from(self.max_stream_bytes)
            .unwrap_or(u64::MAX)
            .saturating_add(1);
        let mut out = Vec::new();
        ZlibDecoder::new(compressed)
            .take(cap)
            .read_to_end(&mut out)
            .map_err(|e| BackendError::Parse(format!("failed to inflate stream: {e}")))?;
        Ok(out)
    }

    fn check_stream_len(&self, len: usize) -> Result<(), BackendError> {
        if len > self.max_stream_bytes {
            return Err(FontError::ResourceLimitExceeded {
                limit_name: "max_stream_bytes".to_string(),
                limit_value: self.max_stream_bytes,
                actual_value: len,
            }
            .into());
        }
        Ok(())
    }
}

fn is_lone_flate(filter: &Object) -> bool {
    match filter {
        Object::Name(name) => name == b"FlateDecode",
        Object::Array(items) => matches!(items.as_slice(), [Object::Name(name)] if name == b"FlateDecode"),
        _ => false,
    }
}

/// The object id when `obj` is an indirect reference.
pub fn reference_of(obj: &Object) -> Option<ObjectId> {
    match obj {
        Object::Reference(id) => Some(*id),
        _ => None,
    }
}

pub fn name_of(obj: &Object) -> Option<String> {
    match obj {
        Object::Name(bytes) => Some(String::from_utf8_lossy(bytes).into_owned()),
        _ => None,
    }
}

pub fn int_of(obj: &Object) -> Option<i64> {
    match obj {
        Object::Integer(i) => Some(*i),
        Object::Real(f) if f.fract() == 0.0 => Some(*f as i64),
        _ => None,
    }
}

pub fn number_of(obj: &Object) -> Option<f64> {
    match obj {
        Object::Integer(i) => Some(*i as f64),
        Object::Real(f) => Some(f64::from(*f)),
        _ => None,
    }
}

/// Text of a PDF string object, treating bytes as Latin-1.
pub fn text_of(obj: &Object) -> Option<String> {
    match obj {
        Object::String(bytes, _) => Some(bytes.iter().map(|b| char::from(*b)).collect()),
        Object::Name(bytes) => Some(String::from_utf8_lossy(bytes).into_owned()),
        _ => None,
    }
}

/// Short label for an object's shape, used in mismatch errors.
pub fn kind_of(obj: &Object) -> &'static str {
    match obj {
        Object::Null => "null",
        Object::Boolean(_) => "boolean",
        Object::Integer(_) => "integer",
        Object::Real(_) => "real",
        Object::Name(_) => "name",
        Object::String(..) => "string",
        Object::Array(_) => "array",
        Object::Dictionary(_) => "dictionary",
        Object::Stream(_) => "stream",
        Object::Reference(_) => "reference",
    }
}

fn mismatch(key: &[u8], expected: &str, found: &Object) -> BackendError {
    FontError::mismatch(String::from_utf8_lossy(key), expected, kind_of(found)).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::{StringFormat, dictionary};

    fn options() -> LoadOptions {
        LoadOptions::default()
    }

    // ========== resolve ==========

    #[test]
    fn resolve_follows_reference_chain() {
        let mut doc = Document::with_version("1.7");
        let inner = doc.add_object(Object::Integer(42));
        let outer = doc.add_object(Object::Reference(inner));
        let access = ObjectAccess::new(&doc, &options());
        let obj = Object::Reference(outer);
        assert_eq!(access.resolve(&obj).ok().and_then(int_of), Some(42));
    }

    #[test]
    fn resolve_stops_self_referencing_objects() {
        let mut doc = Document::with_version("1.7");
        let id = doc.new_object_id();
        doc.objects.insert(id, Object::Reference(id));
        let access = ObjectAccess::new(&doc, &options());
        let err = access.resolve(&Object::Reference(id)).unwrap_err();
        assert!(matches!(err, BackendError::Core(FontError::CyclicalReference(_))));
    }

    #[test]
    fn resolve_missing_object_is_parse_error() {
        let doc = Document::with_version("1.7");
        let access = ObjectAccess::new(&doc, &options());
        let err = access.resolve(&Object::Reference((99, 0))).unwrap_err();
        assert!(matches!(err, BackendError::Parse(_)));
    }

    // ========== typed getters ==========

    #[test]
    fn typed_getters_return_values() {
        let doc = Document::with_version("1.7");
        let access = ObjectAccess::new(&doc, &options());
        let dict = dictionary! {
            "Type" => "Font",
            "Flags" => 32,
            "ItalicAngle" => Object::Real(-12.5),
            "Widths" => vec![Object::Integer(500), Object::Real(250.5)],
        };
        assert_eq!(access.get_name(&dict, b"Type").unwrap().as_deref(), Some("Font"));
        assert_eq!(access.get_int(&dict, b"Flags").unwrap(), Some(32));
        assert_eq!(access.get_number(&dict, b"ItalicAngle").unwrap(), Some(-12.5));
        let widths = access.get_array(&dict, b"Widths").unwrap().unwrap();
        assert_eq!(access.numbers(widths), vec![Some(500.0), Some(250.5)]);
    }

    #[test]
    fn absent_keys_are_none() {
        let doc = Document::with_version("1.7");
        let access = ObjectAccess::new(&doc, &options());
        let dict = dictionary! {};
        assert_eq!(access.get_name(&dict, b"BaseFont").unwrap(), None);
        assert!(access.get_dict(&dict, b"FontDescriptor").unwrap().is_none());
    }

    #[test]
    fn wrong_shape_is_type_mismatch() {
        let doc = Document::with_version("1.7");
        let access = ObjectAccess::new(&doc, &options());
        let dict = dictionary! { "BaseFont" => 12 };
        let err = access.get_name(&dict, b"BaseFont").unwrap_err();
        let BackendError::Core(FontError::TypeMismatch { field, expected, found }) = err else {
            panic!("expected type mismatch, got {err:?}");
        };
        assert_eq!(field, "BaseFont");
        assert_eq!(expected, "name");
        assert_eq!(found, "integer");
    }

    #[test]
    fn text_of_reads_latin1_strings() {
        let obj = Object::String(vec![b'A', 0xE9], StringFormat::Literal);
        assert_eq!(text_of(&obj).as_deref(), Some("Aé"));
    }

    // ========== decode_stream ==========

    #[test]
    fn decode_stream_returns_raw_content_without_filter() {
        let doc = Document::with_version("1.7");
        let access = ObjectAccess::new(&doc, &options());
        let stream = Stream::new(dictionary! {}, b"hello".to_vec());
        assert_eq!(access.decode_stream(&stream).unwrap(), b"hello");
    }

    #[test]
    fn decode_stream_enforces_size_limit() {
        let doc = Document::with_version("1.7");
        let opts = LoadOptions {
            max_stream_bytes: 4,
            ..LoadOptions::default()
        };
        let access = ObjectAccess::new(&doc, &opts);
        let stream = Stream::new(dictionary! {}, b"hello".to_vec());
        let err = access.decode_stream(&stream).unwrap_err();
        assert!(matches!(
            err,
            BackendError::Core(FontError::ResourceLimitExceeded { actual_value: 5, .. })
        ));
    }

    fn deflated(data: &[u8]) -> Vec<u8> {
        use flate2::{Compression, write::ZlibEncoder};
        use std::io::Write;
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn decode_stream_inflates_flate() {
        let doc = Document::with_version("1.7");
        let access = ObjectAccess::new(&doc, &options());
        let stream = Stream::new(dictionary! { "Filter" => "FlateDecode" }, deflated(b"hello"));
        assert_eq!(access.decode_stream(&stream).unwrap(), b"hello");

        let stream = Stream::new(
            dictionary! { "Filter" => vec![Object::Name(b"FlateDecode".to_vec())] },
            deflated(b"world"),
        );
        assert_eq!(access.decode_stream(&stream).unwrap(), b"world");
    }

    #[test]
    fn decode_stream_stops_inflating_at_limit() {
        let doc = Document::with_version("1.7");
        let opts = LoadOptions {
            max_stream_bytes: 16,
            ..LoadOptions::default()
        };
        let access = ObjectAccess::new(&doc, &opts);
        let stream = Stream::new(dictionary! { "Filter" => "FlateDecode" }, deflated(&[0u8; 1 << 20]));
        let err = access.decode_stream(&stream).unwrap_err();
        assert!(matches!(
            err,
            BackendError::Core(FontError::ResourceLimitExceeded { limit_value: 16, actual_value: 17, .. })
        ));
    }

    #[test]
    fn decode_stream_rejects_corrupt_flate() {
        let doc = Document::with_version("1.7");
        let access = ObjectAccess::new(&doc, &options());
        let stream = Stream::new(dictionary! { "Filter" => "FlateDecode" }, b"not zlib".to_vec());
        assert!(matches!(access.decode_stream(&stream), Err(BackendError::Parse(_))));
    }
}
