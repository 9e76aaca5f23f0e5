//! Error types for the font parsing layer.
//!
//! Uses [`thiserror`] for ergonomic error derivation. Provides [`BackendError`]
//! that wraps object-model failures and converts them to [`FontError`].

use pdffont_core::FontError;
use thiserror::Error;

use crate::font::PdfFont;

/// Error type for font construction from document objects.
///
/// The [`Unsupported`](BackendError::Unsupported) variant may carry a
/// best-effort simple font so that callers can still inspect its metadata.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Error from the object model (missing object, bad stream).
    #[error("PDF parse error: {0}")]
    Parse(String),

    /// A font subtype or program format that is not implemented.
    #[error("unsupported: {reason}")]
    Unsupported {
        /// What was not supported.
        reason: String,
        /// A degraded simple font built from the common fields, if any.
        degraded: Option<Box<PdfFont>>,
    },

    /// A core library error.
    #[error(transparent)]
    Core(#[from] FontError),
}

impl BackendError {
    /// Shorthand for an [`Unsupported`](BackendError::Unsupported) error
    /// without a degraded font.
    pub fn unsupported(reason: impl Into<String>) -> Self {
        BackendError::Unsupported {
            reason: reason.into(),
            degraded: None,
        }
    }

    /// Shorthand for a collaborator (font program or CMap) failure.
    pub fn collaborator(msg: impl Into<String>) -> Self {
        BackendError::Core(FontError::Collaborator(msg.into()))
    }

    /// The degraded font attached to an unsupported construct.
    pub fn degraded(&self) -> Option<&PdfFont> {
        match self {
            BackendError::Unsupported { degraded, .. } => degraded.as_deref(),
            _ => None,
        }
    }

    /// Take the degraded font out of the error.
    pub fn into_degraded(self) -> Option<PdfFont> {
        match self {
            BackendError::Unsupported { degraded, .. } => degraded.map(|font| *font),
            _ => None,
        }
    }
}

impl From<lopdf::Error> for BackendError {
    fn from(err: lopdf::Error) -> Self {
        BackendError::Parse(err.to_string())
    }
}

impl From<BackendError> for FontError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Parse(msg) => FontError::Other(msg),
            BackendError::Unsupported { reason, .. } => FontError::Unsupported(reason),
            BackendError::Core(e) => e,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_error_parse() {
        let err = BackendError::Parse("object 12 0 R not found".to_string());
        assert_eq!(err.to_string(), "PDF parse error: object 12 0 R not found");
    }

    #[test]
    fn backend_error_unsupported_display() {
        let err = BackendError::unsupported("Type3 font");
        assert_eq!(err.to_string(), "unsupported: Type3 font");
        assert!(err.degraded().is_none());
    }

    #[test]
    fn backend_error_from_font_error() {
        let err: BackendError = FontError::missing("BaseFont", "font").into();
        assert!(matches!(err, BackendError::Core(_)));
        assert_eq!(err.to_string(), "required field /BaseFont missing from font");
    }

    #[test]
    fn backend_error_to_font_error_parse() {
        let fe: FontError = BackendError::Parse("bad xref".to_string()).into();
        assert_eq!(fe, FontError::Other("bad xref".to_string()));
    }

    #[test]
    fn backend_error_to_font_error_unsupported_drops_payload() {
        let fe: FontError = BackendError::unsupported("Type1C program").into();
        assert_eq!(fe, FontError::Unsupported("Type1C program".to_string()));
    }

    #[test]
    fn backend_error_to_font_error_core_passthrough() {
        let original = FontError::CyclicalReference("Type0 inside Type0".to_string());
        let fe: FontError = BackendError::Core(original.clone()).into();
        assert_eq!(fe, original);
    }

    #[test]
    fn collaborator_shorthand() {
        let err = BackendError::collaborator("bad cmap");
        assert!(matches!(
            err,
            BackendError::Core(FontError::Collaborator(ref m)) if m == "bad cmap"
        ));
    }

    #[test]
    fn backend_error_implements_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(BackendError::Parse("test".to_string()));
        assert!(err.to_string().contains("test"));
    }
}
