//! pdffont-parse: PDF font construction and character-code decoding.
//!
//! This crate builds a [`PdfFont`] from a `lopdf` font dictionary: the
//! descriptor and its embedded program, the ToUnicode CMap, the encoder and
//! the glyph widths. The resulting font decodes content-stream strings to
//! Unicode. It depends on pdffont-core for encoders and shared types.

pub mod cid_font;
pub mod cmap;
mod decode;
pub mod descriptor;
pub mod error;
pub mod font;
pub mod fontfile;
mod loader;
pub mod objects;
pub mod simple;
pub mod standard_fonts;
pub mod truetype;
pub mod type0;

pub use cid_font::{CidFont, CidFontType, CidSystemInfo, CidToGidMap, DEFAULT_CID_WIDTH};
pub use cmap::ToUnicodeCMap;
pub use decode::{MISSING_CODE_RUNE, NOTDEF_GLYPH};
pub use descriptor::{DescriptorMetrics, PdfFontDescriptor};
pub use error::BackendError;
pub use font::{FontCommon, PdfFont, WritingMode, is_cid_subtype};
pub use fontfile::{FontFileSlot, FontProgram};
pub use pdffont_core;
pub use simple::SimpleFont;
pub use standard_fonts::StandardFontName;
pub use truetype::TrueTypeProgram;
pub use type0::Type0Font;
