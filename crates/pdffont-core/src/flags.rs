//! Font descriptor `/Flags` bitmask.

use bitflags::bitflags;

bitflags! {
    /// Characteristics declared in a font descriptor's `/Flags` entry.
    ///
    /// Unknown bits are retained so that re-serialization is lossless.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FontFlags: u32 {
        /// All glyphs have the same width.
        const FIXED_PITCH = 1 << 0;
        /// Glyphs have serifs.
        const SERIF = 1 << 1;
        /// Font contains glyphs outside the standard Latin character set.
        const SYMBOLIC = 1 << 2;
        /// Glyphs resemble cursive handwriting.
        const SCRIPT = 1 << 3;
        /// Font uses the standard Latin character set.
        const NONSYMBOLIC = 1 << 5;
        /// Glyphs have dominant vertical strokes that are slanted.
        const ITALIC = 1 << 6;
        /// Font contains no lowercase letters.
        const ALL_CAP = 1 << 16;
        /// Lowercase letters are small capitals.
        const SMALL_CAP = 1 << 17;
        /// Bold glyphs are painted with extra pixels at small sizes.
        const FORCE_BOLD = 1 << 18;

        const _ = !0;
    }
}

impl FontFlags {
    /// Decode a raw `/Flags` integer.
    ///
    /// Negative values are reinterpreted as their 32-bit two's complement.
    pub fn from_raw(raw: i64) -> Self {
        Self::from_bits_retain(raw as u32)
    }

    /// True when the font is symbolic and not also flagged non-symbolic.
    pub fn is_symbolic(self) -> bool {
        self.contains(Self::SYMBOLIC) && !self.contains(Self::NONSYMBOLIC)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_decodes_known_bits() {
        let flags = FontFlags::from_raw(0x40022);
        assert!(flags.contains(FontFlags::SERIF));
        assert!(flags.contains(FontFlags::NONSYMBOLIC));
        assert!(flags.contains(FontFlags::FORCE_BOLD));
        assert!(!flags.contains(FontFlags::ITALIC));
    }

    #[test]
    fn from_raw_retains_unknown_bits() {
        let flags = FontFlags::from_raw(1 << 10 | 4);
        assert_eq!(flags.bits(), 1 << 10 | 4);
    }

    #[test]
    fn symbolic_requires_nonsymbolic_clear() {
        assert!(FontFlags::from_raw(4).is_symbolic());
        assert!(!FontFlags::from_raw(4 | 32).is_symbolic());
        assert!(!FontFlags::from_raw(32).is_symbolic());
    }

    #[test]
    fn default_is_empty() {
        assert!(FontFlags::default().is_empty());
    }
}
