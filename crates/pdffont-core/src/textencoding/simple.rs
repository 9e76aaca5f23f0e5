use std::collections::{BTreeMap, HashMap};

use super::{CharCode, PersistedEncoding};
use crate::encoding::{BaseEncoding, char_to_glyph_name, glyph_name_to_char};

/// Single-byte encoder: a base encoding table with per-code overrides.
///
/// The forward tables are resolved once at construction. When several codes
/// share a glyph or rune the lowest code wins on reverse lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleEncoder {
    base_name: String,
    base: Option<BaseEncoding>,
    differences: BTreeMap<u8, String>,
    glyphs: BTreeMap<u8, String>,
    runes: BTreeMap<u8, char>,
    code_by_glyph: HashMap<String, u8>,
    code_by_rune: HashMap<char, u8>,
}

impl SimpleEncoder {
    /// Build from a predefined base encoding and a `/Differences` table.
    pub fn new(base: BaseEncoding, differences: BTreeMap<u8, String>) -> Self {
        let entries = base
            .entries()
            .map(|(code, name)| (code, name.to_string(), base.decode(code)));
        let mut enc = Self::build(base.name().to_string(), entries, differences);
        enc.base = Some(base);
        enc
    }

    /// Build from an arbitrary code→glyph table, e.g. a font program's
    /// built-in encoding. Such an encoder is not persistable by name.
    pub fn from_glyph_names(
        base_name: impl Into<String>,
        entries: impl IntoIterator<Item = (u8, String)>,
        differences: BTreeMap<u8, String>,
    ) -> Self {
        let entries = entries
            .into_iter()
            .map(|(code, name)| {
                let rune = glyph_name_to_char(&name);
                (code, name, rune)
            });
        Self::build(base_name.into(), entries, differences)
    }

    /// Base entries carry their own rune so that font-specific tables
    /// (Symbol `mu` is Greek, not the micro sign) decode correctly.
    fn build(
        base_name: String,
        entries: impl IntoIterator<Item = (u8, String, Option<char>)>,
        differences: BTreeMap<u8, String>,
    ) -> Self {
        let mut glyphs = BTreeMap::new();
        let mut runes = BTreeMap::new();
        for (code, name, rune) in entries {
            glyphs.insert(code, name);
            if let Some(rune) = rune {
                runes.insert(code, rune);
            }
        }
        for (code, name) in &differences {
            glyphs.insert(*code, name.clone());
            match glyph_name_to_char(name) {
                Some(rune) => runes.insert(*code, rune),
                None => runes.remove(code),
            };
        }

        let mut code_by_glyph = HashMap::new();
        let mut code_by_rune = HashMap::new();
        for (code, name) in &glyphs {
            code_by_glyph.entry(name.clone()).or_insert(*code);
        }
        for (code, rune) in &runes {
            code_by_rune.entry(*rune).or_insert(*code);
        }

        Self {
            base_name,
            base: None,
            differences,
            glyphs,
            runes,
            code_by_glyph,
            code_by_rune,
        }
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// The predefined base, when built from one.
    pub fn base_encoding(&self) -> Option<BaseEncoding> {
        self.base
    }

    pub fn differences(&self) -> &BTreeMap<u8, String> {
        &self.differences
    }

    pub fn charcode_to_glyph(&self, code: CharCode) -> Option<String> {
        let code = u8::try_from(code).ok()?;
        self.glyphs.get(&code).cloned()
    }

    pub fn glyph_to_charcode(&self, name: &str) -> Option<CharCode> {
        self.code_by_glyph.get(name).map(|c| CharCode::from(*c))
    }

    pub fn charcode_to_rune(&self, code: CharCode) -> Option<char> {
        let code = u8::try_from(code).ok()?;
        self.runes.get(&code).copied()
    }

    pub fn rune_to_charcode(&self, rune: char) -> Option<CharCode> {
        self.code_by_rune.get(&rune).map(|c| CharCode::from(*c))
    }

    /// The glyph name actually used by this encoding for `rune`, falling back
    /// to the generic name only when the rune is encodable.
    pub fn rune_to_glyph(&self, rune: char) -> Option<String> {
        let code = self.code_by_rune.get(&rune)?;
        Some(
            self.glyphs
                .get(code)
                .cloned()
                .unwrap_or_else(|| char_to_glyph_name(rune)),
        )
    }

    pub fn glyph_to_rune(&self, name: &str) -> Option<char> {
        let code = self.code_by_glyph.get(name)?;
        self.runes.get(code).copied()
    }

    pub fn to_persistable(&self) -> Option<PersistedEncoding> {
        let base = self.base.filter(|b| b.is_persistable());
        if self.differences.is_empty() {
            return base.map(|b| PersistedEncoding::Name(b.name().to_string()));
        }
        Some(PersistedEncoding::Differences {
            base: base.map(|b| b.name().to_string()),
            differences: self
                .differences
                .iter()
                .map(|(code, name)| (*code, name.clone()))
                .collect(),
        })
    }
}
