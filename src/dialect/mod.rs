//! JaPy dialect vocabulary
//!
//! JaPy spells Python's keywords, built-in functions and built-in types as
//! katakana tokens. Each token maps to exactly one Python identifier. The
//! vocabulary is split into three ordered tables (see [`tables`]), which are
//! compiled into the binary and never change at runtime.

pub mod coverage;
pub mod tables;

pub use tables::{BUILTIN_FUNCTIONS, BUILTIN_TYPES, KEYWORDS};

/// Which part of the Python vocabulary a table covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Keyword,
    BuiltinFunction,
    BuiltinType,
}

impl Category {
    /// Human-readable name used in logs and validation errors
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Keyword => "keyword",
            Category::BuiltinFunction => "built-in function",
            Category::BuiltinType => "built-in type",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dialect token paired with the Python identifier it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappingEntry {
    /// Katakana token as written in JaPy source
    pub source: &'static str,
    /// Python identifier the token means
    pub target: &'static str,
}

impl MappingEntry {
    pub const fn new(source: &'static str, target: &'static str) -> Self {
        Self { source, target }
    }
}

/// An ordered, categorized list of mappings.
///
/// Source tokens are unique within a table. Nothing prevents the same token
/// from appearing in two different tables.
#[derive(Debug)]
pub struct MappingTable {
    pub category: Category,
    pub entries: &'static [MappingEntry],
}

impl MappingTable {
    pub const fn new(category: Category, entries: &'static [MappingEntry]) -> Self {
        Self { category, entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static MappingEntry> {
        self.entries.iter()
    }

    /// Looks up the Python identifier for a dialect token.
    pub fn target_for(&self, source: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|entry| entry.source == source)
            .map(|entry| entry.target)
    }

    /// Looks up the dialect token for a Python identifier.
    pub fn source_for(&self, target: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|entry| entry.target == target)
            .map(|entry| entry.source)
    }
}

/// All tables in completion order: keywords, functions, types.
pub fn all_tables() -> [&'static MappingTable; 3] {
    [&KEYWORDS, &BUILTIN_FUNCTIONS, &BUILTIN_TYPES]
}

/// Total number of mappings across every table.
pub fn total_entries() -> usize {
    all_tables().iter().map(|table| table.len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_and_categories() {
        let categories: Vec<Category> = all_tables().iter().map(|t| t.category).collect();
        assert_eq!(
            categories,
            vec![Category::Keyword, Category::BuiltinFunction, Category::BuiltinType]
        );
    }

    #[test]
    fn test_target_lookup() {
        assert_eq!(KEYWORDS.target_for("デフ"), Some("def"));
        assert_eq!(BUILTIN_FUNCTIONS.target_for("プリント"), Some("print"));
        assert_eq!(BUILTIN_TYPES.target_for("リスト"), Some("list"));
        assert_eq!(KEYWORDS.target_for("プリント"), None);
    }

    #[test]
    fn test_source_lookup() {
        assert_eq!(KEYWORDS.source_for("nonlocal"), Some("ノンローカル"));
        assert_eq!(BUILTIN_FUNCTIONS.source_for("divmod"), Some("ディブモッド"));
        assert_eq!(BUILTIN_TYPES.source_for("staticmethod"), Some("スタティックメソッド"));
        assert_eq!(BUILTIN_TYPES.source_for("print"), None);
    }

    #[test]
    fn test_total_entries() {
        assert_eq!(total_entries(), KEYWORDS.len() + BUILTIN_FUNCTIONS.len() + BUILTIN_TYPES.len());
        assert_eq!(total_entries(), 110);
    }
}
