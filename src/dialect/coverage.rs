//! Coverage checks for the dialect tables
//!
//! Verifies that every Python keyword and every commonly used built-in has a
//! katakana spelling, and that no table repeats a token.

use std::collections::HashSet;

use thiserror::Error;
use tracing::{debug, error, info};

use super::{BUILTIN_FUNCTIONS, BUILTIN_TYPES, KEYWORDS, MappingTable, all_tables};

/// `keyword.kwlist` as of Python 3.12
pub const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break",
    "class", "continue", "def", "del", "elif", "else", "except", "finally", "for",
    "from", "global", "if", "import", "in", "is", "lambda", "nonlocal", "not", "or",
    "pass", "raise", "return", "try", "while", "with", "yield",
];

/// Public callables in `builtins` that are not themselves types
pub const PYTHON_BUILTIN_FUNCTIONS: &[&str] = &[
    "abs", "aiter", "all", "anext", "any", "ascii", "bin", "breakpoint", "callable",
    "chr", "compile", "copyright", "credits", "delattr", "dir", "divmod", "eval",
    "exec", "exit", "format", "getattr", "globals", "hasattr", "hash", "help", "hex",
    "id", "input", "isinstance", "issubclass", "iter", "len", "license", "locals",
    "max", "min", "next", "oct", "open", "ord", "pow", "print", "quit", "repr",
    "round", "setattr", "sorted", "sum", "vars",
];

/// Built-in types that are routinely called like functions
pub const PYTHON_BUILTIN_TYPES: &[&str] = &[
    "bool", "bytearray", "bytes", "classmethod", "complex", "dict", "enumerate",
    "filter", "float", "frozenset", "int", "list", "map", "memoryview", "object",
    "property", "range", "reversed", "set", "slice", "staticmethod", "str", "super",
    "tuple", "type", "zip",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoverageError {
    #[error("keyword '{0}' has no JaPy spelling")]
    MissingKeyword(String),

    #[error("{kind} without a JaPy spelling: {}", names.join(", "))]
    MissingBuiltins { kind: &'static str, names: Vec<String> },

    #[error("duplicate {category} token '{token}'")]
    DuplicateToken { category: &'static str, token: String },
}

/// Fails on the first Python keyword that `table` does not spell, or whose
/// spelling reads back as a different keyword.
pub fn check_keywords_in(table: &MappingTable) -> Result<(), CoverageError> {
    for keyword in PYTHON_KEYWORDS {
        let round_trip = table.source_for(keyword).and_then(|source| table.target_for(source));
        if round_trip != Some(*keyword) {
            return Err(CoverageError::MissingKeyword((*keyword).to_string()));
        }
    }
    Ok(())
}

pub fn check_keywords() -> Result<(), CoverageError> {
    check_keywords_in(&KEYWORDS)?;
    debug!("All {} keywords have JaPy spellings", PYTHON_KEYWORDS.len());
    Ok(())
}

/// Collects every name in `names` that none of `tables` maps to.
fn missing_from(names: &[&str], tables: &[&MappingTable]) -> Vec<String> {
    names
        .iter()
        .filter(|name| tables.iter().all(|table| table.source_for(name).is_none()))
        .map(|name| name.to_string())
        .collect()
}

fn check_names_in(
    kind: &'static str,
    names: &[&str],
    tables: &[&MappingTable],
) -> Result<(), CoverageError> {
    let missing = missing_from(names, tables);
    if !missing.is_empty() {
        return Err(CoverageError::MissingBuiltins { kind, names: missing });
    }
    debug!("All {} {} have JaPy spellings", names.len(), kind);
    Ok(())
}

pub fn check_builtin_functions() -> Result<(), CoverageError> {
    check_names_in("built-in functions", PYTHON_BUILTIN_FUNCTIONS, &[&BUILTIN_FUNCTIONS, &BUILTIN_TYPES])
}

pub fn check_builtin_types() -> Result<(), CoverageError> {
    check_names_in("built-in types", PYTHON_BUILTIN_TYPES, &[&BUILTIN_FUNCTIONS, &BUILTIN_TYPES])
}

pub fn check_builtins() -> Result<(), CoverageError> {
    check_builtin_functions()?;
    check_builtin_types()
}

/// Enforces that `table` never repeats a source token.
pub fn check_distinct(table: &MappingTable) -> Result<(), CoverageError> {
    let mut seen = HashSet::with_capacity(table.len());
    for entry in table.iter() {
        if !seen.insert(entry.source) {
            return Err(CoverageError::DuplicateToken {
                category: table.category.as_str(),
                token: entry.source.to_string(),
            });
        }
    }
    Ok(())
}

/// Runs every check against `[keywords, functions, types]` and logs a summary.
pub fn validate_tables(tables: [&MappingTable; 3]) -> Result<(), CoverageError> {
    let [keywords, functions, types] = tables;
    for table in tables {
        check_distinct(table)?;
    }
    check_keywords_in(keywords)?;
    check_names_in("built-in functions", PYTHON_BUILTIN_FUNCTIONS, &[functions, types])?;
    check_names_in("built-in types", PYTHON_BUILTIN_TYPES, &[functions, types])?;

    info!(
        "All {} built-ins have JaPy spellings (functions: {}, types: {}, total mappings: {})",
        PYTHON_BUILTIN_FUNCTIONS.len() + PYTHON_BUILTIN_TYPES.len(),
        PYTHON_BUILTIN_FUNCTIONS.len(),
        PYTHON_BUILTIN_TYPES.len(),
        functions.len() + types.len(),
    );
    Ok(())
}

/// Validates the shipped tables.
pub fn validate_all() -> Result<(), CoverageError> {
    validate_tables(all_tables())
}

/// Process exit code for `--validate`: 0 when every check passes, 1 otherwise.
pub fn run_validation(tables: [&MappingTable; 3]) -> i32 {
    info!("Validating JaPy keyword and built-in mappings");
    match validate_tables(tables) {
        Ok(()) => {
            info!("All validations passed");
            0
        }
        Err(e) => {
            error!("Validation failed: {}", e);
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{Category, MappingEntry};

    const PARTIAL_ENTRIES: &[MappingEntry] =
        &[MappingEntry::new("トゥルー", "True"), MappingEntry::new("フォルス", "False")];
    static PARTIAL_KEYWORDS: MappingTable = MappingTable::new(Category::Keyword, PARTIAL_ENTRIES);

    const DUPLICATED_ENTRIES: &[MappingEntry] =
        &[MappingEntry::new("リスト", "list"), MappingEntry::new("リスト", "tuple")];
    static DUPLICATED: MappingTable = MappingTable::new(Category::BuiltinType, DUPLICATED_ENTRIES);

    #[test]
    fn test_shipped_tables_pass() {
        assert_eq!(validate_all(), Ok(()));
    }

    #[test]
    fn test_keyword_list_matches_table_size() {
        assert_eq!(PYTHON_KEYWORDS.len(), KEYWORDS.len());
    }

    #[test]
    fn test_missing_keyword_reported() {
        assert_eq!(
            check_keywords_in(&PARTIAL_KEYWORDS),
            Err(CoverageError::MissingKeyword("None".to_string()))
        );
    }

    #[test]
    fn test_missing_builtins_listed() {
        let missing = missing_from(&["print", "list", "nope"], &[&BUILTIN_FUNCTIONS]);
        assert_eq!(missing, vec!["list".to_string(), "nope".to_string()]);
    }

    #[test]
    fn test_duplicate_token_reported() {
        let err = check_distinct(&DUPLICATED).unwrap_err();
        assert_eq!(
            err,
            CoverageError::DuplicateToken { category: "built-in type", token: "リスト".to_string() }
        );
        assert_eq!(err.to_string(), "duplicate built-in type token 'リスト'");
    }

    const SHADOWED_ENTRIES: &[MappingEntry] =
        &[MappingEntry::new("フォルス", "True"), MappingEntry::new("フォルス", "False")];
    static SHADOWED_KEYWORDS: MappingTable = MappingTable::new(Category::Keyword, SHADOWED_ENTRIES);

    #[test]
    fn test_shadowed_keyword_does_not_round_trip() {
        // "False" is spelled フォルス, but フォルス reads back as "True"
        assert_eq!(SHADOWED_KEYWORDS.source_for("False"), Some("フォルス"));
        assert_eq!(SHADOWED_KEYWORDS.target_for("フォルス"), Some("True"));
        assert_eq!(
            check_keywords_in(&SHADOWED_KEYWORDS),
            Err(CoverageError::MissingKeyword("False".to_string()))
        );
    }

    #[test]
    fn test_run_validation_exit_codes() {
        assert_eq!(run_validation(all_tables()), 0);
        assert_eq!(run_validation([&PARTIAL_KEYWORDS, &BUILTIN_FUNCTIONS, &BUILTIN_TYPES]), 1);
        assert_eq!(run_validation([&KEYWORDS, &DUPLICATED, &BUILTIN_TYPES]), 1);
    }

    #[test]
    fn test_validate_tables_reports_missing_types() {
        let err = validate_tables([&KEYWORDS, &BUILTIN_FUNCTIONS, &PARTIAL_KEYWORDS]).unwrap_err();
        let CoverageError::MissingBuiltins { kind, names } = err else {
            panic!("expected missing built-ins, got {:?}", err);
        };
        assert_eq!(kind, "built-in types");
        assert_eq!(names.first().map(String::as_str), Some("bool"));
        assert!(names.contains(&"staticmethod".to_string()));
        // Called-like-a-function types live in the functions table
        assert!(!names.contains(&"map".to_string()));
        assert!(!names.contains(&"range".to_string()));
    }

    #[test]
    fn test_missing_builtins_message() {
        let err = CoverageError::MissingBuiltins {
            kind: "built-in types",
            names: vec!["bool".to_string(), "int".to_string()],
        };
        assert_eq!(err.to_string(), "built-in types without a JaPy spelling: bool, int");
    }
}
