//! Error and warning types for pdffont-rs.
//!
//! Provides [`FontError`] for failures that stop construction of a font,
//! [`ExtractWarning`] for anomalies that allow best-effort continuation,
//! [`ExtractResult`] for pairing a value with collected warnings,
//! [`WarningSink`] for receiving warnings as they happen, and
//! [`LoadOptions`] for configuring resource limits and warning behavior.

use std::fmt;

/// Fatal error types for font construction and encoding.
///
/// Decoding character codes to text never produces one of these; unresolved
/// codes are counted and replaced instead.
#[derive(Debug, Clone, PartialEq)]
pub enum FontError {
    /// A font subtype or embedded program format that is not implemented.
    Unsupported(String),
    /// A mandatory dictionary entry is absent.
    MissingField {
        /// Name of the missing key (e.g., "BaseFont").
        field: String,
        /// Kind of object the key was expected in (e.g., "font").
        context: String,
    },
    /// A dictionary entry has the wrong structural shape.
    TypeMismatch {
        /// Name of the offending key.
        field: String,
        /// Shape that was expected (e.g., "name").
        expected: String,
        /// Shape that was found.
        found: String,
    },
    /// A composite font refers to another composite font.
    CyclicalReference(String),
    /// An embedded font program or ToUnicode map could not be parsed.
    Collaborator(String),
    /// A rune has no character code in the font's encoding.
    UnmappedRune(char),
    /// A configured resource limit was exceeded.
    ResourceLimitExceeded {
        /// Name of the limit that was exceeded (e.g., "max_stream_bytes").
        limit_name: String,
        /// The configured limit value.
        limit_value: usize,
        /// The actual value that exceeded the limit.
        actual_value: usize,
    },
    /// Any other error not covered by specific variants.
    Other(String),
}

impl FontError {
    /// Shorthand for a [`FontError::MissingField`].
    pub fn missing(field: impl Into<String>, context: impl Into<String>) -> Self {
        FontError::MissingField {
            field: field.into(),
            context: context.into(),
        }
    }

    /// Shorthand for a [`FontError::TypeMismatch`].
    pub fn mismatch(
        field: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        FontError::TypeMismatch {
            field: field.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontError::Unsupported(msg) => write!(f, "unsupported: {msg}"),
            FontError::MissingField { field, context } => {
                write!(f, "required field /{field} missing from {context}")
            }
            FontError::TypeMismatch {
                field,
                expected,
                found,
            } => write!(f, "type mismatch for /{field}: expected {expected}, found {found}"),
            FontError::CyclicalReference(msg) => write!(f, "cyclical reference: {msg}"),
            FontError::Collaborator(msg) => write!(f, "collaborator failure: {msg}"),
            FontError::UnmappedRune(ch) => {
                write!(f, "rune {ch:?} (U+{:04X}) has no character code", *ch as u32)
            }
            FontError::ResourceLimitExceeded {
                limit_name,
                limit_value,
                actual_value,
            } => write!(
                f,
                "resource limit exceeded: {limit_name} (limit: {limit_value}, actual: {actual_value})"
            ),
            FontError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for FontError {}

/// Machine-readable warning code for categorizing font anomalies.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", content = "detail")
)]
pub enum ExtractWarningCode {
    /// A CID byte string had a single or trailing byte that was zero-padded.
    CidPadding,
    /// A standard font ended up with no resolvable encoder.
    MissingEncoder,
    /// One or more character codes had no Unicode mapping.
    UnresolvedCharCodes,
    /// A PDF object is malformed or has unexpected structure.
    MalformedObject,
    /// Character encoding fell back to a default mapping.
    EncodingFallback,
    /// An embedded font program was present but not interpreted.
    UnsupportedFontProgram,
    /// Any other warning not covered by specific variants.
    Other(String),
}

impl ExtractWarningCode {
    /// Returns the string tag for this warning code.
    pub fn as_str(&self) -> &str {
        match self {
            ExtractWarningCode::CidPadding => "CID_PADDING",
            ExtractWarningCode::MissingEncoder => "MISSING_ENCODER",
            ExtractWarningCode::UnresolvedCharCodes => "UNRESOLVED_CHAR_CODES",
            ExtractWarningCode::MalformedObject => "MALFORMED_OBJECT",
            ExtractWarningCode::EncodingFallback => "ENCODING_FALLBACK",
            ExtractWarningCode::UnsupportedFontProgram => "UNSUPPORTED_FONT_PROGRAM",
            ExtractWarningCode::Other(_) => "OTHER",
        }
    }
}

impl fmt::Display for ExtractWarningCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-fatal anomaly encountered while building or decoding a font.
///
/// Warnings carry a structured [`code`](ExtractWarning::code), a
/// human-readable description and, when known, the font and object they
/// relate to.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtractWarning {
    /// Machine-readable warning code.
    pub code: ExtractWarningCode,
    /// Human-readable description of the warning.
    pub description: String,
    /// BaseFont of the font the warning relates to, if known.
    pub font_name: Option<String>,
    /// Object number and generation of the font object, if known.
    pub object_id: Option<(u32, u16)>,
}

impl ExtractWarning {
    /// Create a warning with just a description.
    ///
    /// Uses [`ExtractWarningCode::Other`] as the default code.
    pub fn new(description: impl Into<String>) -> Self {
        let desc = description.into();
        Self {
            code: ExtractWarningCode::Other(desc.clone()),
            description: desc,
            font_name: None,
            object_id: None,
        }
    }

    /// Create a warning with a specific code and description.
    pub fn with_code(code: ExtractWarningCode, description: impl Into<String>) -> Self {
        Self {
            code,
            description: description.into(),
            font_name: None,
            object_id: None,
        }
    }

    /// Attach the font name (builder pattern).
    pub fn for_font(mut self, font_name: impl Into<String>) -> Self {
        self.font_name = Some(font_name.into());
        self
    }

    /// Attach the font object id (builder pattern).
    pub fn at_object(mut self, object_id: Option<(u32, u16)>) -> Self {
        self.object_id = object_id;
        self
    }

    /// Convert this warning into a [`FontError`].
    ///
    /// Used by strict mode to escalate construction anomalies.
    pub fn to_error(&self) -> FontError {
        FontError::Other(self.to_string())
    }
}

impl fmt::Display for ExtractWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.description)?;
        if let Some(ref font_name) = self.font_name {
            write!(f, " [font {font_name}]")?;
        }
        if let Some((num, generation)) = self.object_id {
            write!(f, " [object {num} {generation} R]")?;
        }
        Ok(())
    }
}

/// Receiver for warnings emitted while a font is built or decoded.
pub trait WarningSink {
    /// Called once per anomaly.
    fn on_warning(&mut self, warning: ExtractWarning);
}

impl WarningSink for Vec<ExtractWarning> {
    fn on_warning(&mut self, warning: ExtractWarning) {
        self.push(warning);
    }
}

/// A sink that discards every warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl WarningSink for NoopSink {
    fn on_warning(&mut self, _warning: ExtractWarning) {}
}

/// Result wrapper that pairs a value with collected warnings.
#[derive(Debug, Clone)]
pub struct ExtractResult<T> {
    /// The extracted value.
    pub value: T,
    /// Warnings collected during extraction.
    pub warnings: Vec<ExtractWarning>,
}

impl<T> ExtractResult<T> {
    /// Create a result with no warnings.
    pub fn ok(value: T) -> Self {
        Self {
            value,
            warnings: Vec::new(),
        }
    }

    /// Create a result with warnings.
    pub fn with_warnings(value: T, warnings: Vec<ExtractWarning>) -> Self {
        Self { value, warnings }
    }

    /// Returns true if there are no warnings.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Transform the value while preserving warnings.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ExtractResult<U> {
        ExtractResult {
            value: f(self.value),
            warnings: self.warnings,
        }
    }
}

/// Options controlling font loading and resource limits.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Whether warnings are forwarded to the sink (default: true).
    pub collect_warnings: bool,
    /// When true, construction-time anomalies become errors (default: false).
    ///
    /// Decode-time anomalies such as CID padding are never escalated.
    pub strict_mode: bool,
    /// Maximum decoded size of a ToUnicode or font program stream (default: 32 MiB).
    pub max_stream_bytes: usize,
    /// Maximum length of an indirect reference chain (default: 16).
    pub max_reference_depth: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            collect_warnings: true,
            strict_mode: false,
            max_stream_bytes: 32 * 1024 * 1024,
            max_reference_depth: 16,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- FontError tests ---

    #[test]
    fn font_error_unsupported_display() {
        let err = FontError::Unsupported("Type3 fonts".to_string());
        assert_eq!(err.to_string(), "unsupported: Type3 fonts");
    }

    #[test]
    fn font_error_missing_field_display() {
        let err = FontError::missing("BaseFont", "font");
        assert_eq!(err.to_string(), "required field /BaseFont missing from font");
    }

    #[test]
    fn font_error_type_mismatch_display() {
        let err = FontError::mismatch("Subtype", "name", "integer");
        assert_eq!(
            err.to_string(),
            "type mismatch for /Subtype: expected name, found integer"
        );
    }

    #[test]
    fn font_error_unmapped_rune_display() {
        let err = FontError::UnmappedRune('€');
        assert_eq!(err.to_string(), "rune '€' (U+20AC) has no character code");
    }

    #[test]
    fn font_error_resource_limit_exceeded() {
        let err = FontError::ResourceLimitExceeded {
            limit_name: "max_stream_bytes".to_string(),
            limit_value: 1024,
            actual_value: 2048,
        };
        assert_eq!(
            err.to_string(),
            "resource limit exceeded: max_stream_bytes (limit: 1024, actual: 2048)"
        );
    }

    #[test]
    fn font_error_implements_std_error() {
        let err: Box<dyn std::error::Error> =
            Box::new(FontError::CyclicalReference("Type0 in Type0".to_string()));
        assert_eq!(err.to_string(), "cyclical reference: Type0 in Type0");
    }

    #[test]
    fn font_error_clone_and_eq() {
        let err1 = FontError::Collaborator("bad cmap".to_string());
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }

    // --- ExtractWarning tests ---

    #[test]
    fn warning_new_uses_other_code() {
        let w = ExtractWarning::new("odd thing");
        assert_eq!(w.code, ExtractWarningCode::Other("odd thing".to_string()));
        assert_eq!(w.description, "odd thing");
        assert!(w.font_name.is_none());
    }

    #[test]
    fn warning_display_includes_font_and_object() {
        let w = ExtractWarning::with_code(ExtractWarningCode::CidPadding, "odd length")
            .for_font("MSGothic")
            .at_object(Some((12, 0)));
        assert_eq!(
            w.to_string(),
            "[CID_PADDING] odd length [font MSGothic] [object 12 0 R]"
        );
    }

    #[test]
    fn warning_to_error_escalates_to_other() {
        let w = ExtractWarning::with_code(ExtractWarningCode::MissingEncoder, "no encoder");
        assert_eq!(
            w.to_error(),
            FontError::Other("[MISSING_ENCODER] no encoder".to_string())
        );
    }

    #[test]
    fn warning_codes_have_distinct_tags() {
        let codes = [
            ExtractWarningCode::CidPadding,
            ExtractWarningCode::MissingEncoder,
            ExtractWarningCode::UnresolvedCharCodes,
            ExtractWarningCode::MalformedObject,
            ExtractWarningCode::EncodingFallback,
            ExtractWarningCode::UnsupportedFontProgram,
            ExtractWarningCode::Other(String::new()),
        ];
        let mut tags: Vec<&str> = codes.iter().map(|c| c.as_str()).collect();
        tags.sort_unstable();
        tags.dedup();
        assert_eq!(tags.len(), codes.len());
    }

    // --- WarningSink tests ---

    #[test]
    fn vec_sink_collects_in_order() {
        let mut sink: Vec<ExtractWarning> = Vec::new();
        sink.on_warning(ExtractWarning::new("first"));
        sink.on_warning(ExtractWarning::new("second"));
        assert_eq!(sink.len(), 2);
        assert_eq!(sink[1].description, "second");
    }

    #[test]
    fn noop_sink_discards() {
        let mut sink = NoopSink;
        sink.on_warning(ExtractWarning::new("ignored"));
    }

    // --- ExtractResult tests ---

    #[test]
    fn extract_result_map_keeps_warnings() {
        let result = ExtractResult::with_warnings(2, vec![ExtractWarning::new("w")]);
        let mapped = result.map(|v| v * 10);
        assert_eq!(mapped.value, 20);
        assert!(!mapped.is_clean());
    }

    // --- LoadOptions tests ---

    #[test]
    fn load_options_defaults() {
        let opts = LoadOptions::default();
        assert!(opts.collect_warnings);
        assert!(!opts.strict_mode);
        assert_eq!(opts.max_stream_bytes, 32 * 1024 * 1024);
        assert_eq!(opts.max_reference_depth, 16);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn warning_serde_roundtrip() {
        let w = ExtractWarning::with_code(ExtractWarningCode::EncodingFallback, "fallback")
            .for_font("Helvetica");
        let json = serde_json::to_string(&w).unwrap();
        let back: ExtractWarning = serde_json::from_str(&json).unwrap();
        assert_eq!(back, w);
    }
}
