//! Shared construction context: object access, options and the warning sink.

use lopdf::ObjectId;
use pdffont_core::{ExtractWarning, ExtractWarningCode, LoadOptions, WarningSink};

use crate::error::BackendError;
use crate::objects::ObjectAccess;

pub(crate) struct Loader<'a, 's> {
    pub(crate) access: ObjectAccess<'a>,
    pub(crate) options: &'a LoadOptions,
    sink: &'s mut dyn WarningSink,
}

impl<'a, 's> Loader<'a, 's> {
    pub(crate) fn new(
        access: ObjectAccess<'a>,
        options: &'a LoadOptions,
        sink: &'s mut dyn WarningSink,
    ) -> Self {
        Self {
            access,
            options,
            sink,
        }
    }

    /// Report a construction anomaly.
    ///
    /// In strict mode the warning is returned as an error instead.
    pub(crate) fn warn(&mut self, warning: ExtractWarning) -> Result<(), BackendError> {
        #[cfg(feature = "tracing")]
        tracing::debug!(code = %warning.code, "{}", warning);
        if self.options.strict_mode {
            return Err(warning.to_error().into());
        }
        if self.options.collect_warnings {
            self.sink.on_warning(warning);
        }
        Ok(())
    }

    /// [`warn`](Self::warn) with the font name and object attached.
    pub(crate) fn warn_for(
        &mut self,
        code: ExtractWarningCode,
        description: impl Into<String>,
        font_name: &str,
        object_id: Option<ObjectId>,
    ) -> Result<(), BackendError> {
        let mut warning = ExtractWarning::with_code(code, description).at_object(object_id);
        if !font_name.is_empty() {
            warning = warning.for_font(font_name);
        }
        self.warn(warning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::Document;
    use pdffont_core::FontError;

    #[test]
    fn warnings_reach_the_sink() {
        let doc = Document::with_version("1.7");
        let options = LoadOptions::default();
        let mut sink: Vec<ExtractWarning> = Vec::new();
        let mut loader = Loader::new(ObjectAccess::new(&doc, &options), &options, &mut sink);
        loader
            .warn_for(ExtractWarningCode::MissingEncoder, "no encoder", "Foo", Some((3, 0)))
            .unwrap();
        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].font_name.as_deref(), Some("Foo"));
        assert_eq!(sink[0].object_id, Some((3, 0)));
    }

    #[test]
    fn collect_warnings_off_discards() {
        let doc = Document::with_version("1.7");
        let options = LoadOptions {
            collect_warnings: false,
            ..LoadOptions::default()
        };
        let mut sink: Vec<ExtractWarning> = Vec::new();
        let mut loader = Loader::new(ObjectAccess::new(&doc, &options), &options, &mut sink);
        loader.warn(ExtractWarning::new("dropped")).unwrap();
        assert!(sink.is_empty());
    }

    #[test]
    fn strict_mode_escalates() {
        let doc = Document::with_version("1.7");
        let options = LoadOptions {
            strict_mode: true,
            ..LoadOptions::default()
        };
        let mut sink: Vec<ExtractWarning> = Vec::new();
        let mut loader = Loader::new(ObjectAccess::new(&doc, &options), &options, &mut sink);
        let err = loader.warn(ExtractWarning::new("fatal now")).unwrap_err();
        assert!(matches!(err, BackendError::Core(FontError::Other(ref m)) if m.contains("fatal now")));
        assert!(sink.is_empty());
    }
}
