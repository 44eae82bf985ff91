//! Completion candidates derived from the dialect tables

use crate::dialect::{Category, MappingEntry, MappingTable, all_tables, total_entries};

/// Suffix appended to built-in functions so they are inserted as a call.
pub const CALL_SUFFIX: &str = "()";

/// Host action requested after a candidate's text has been inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostInsertAction {
    /// Move the cursor one position left, between the inserted parentheses
    CursorLeft,
}

/// A single completion suggestion, independent of any editor protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionCandidate {
    pub label: String,
    pub category: Category,
    pub insert_text: String,
    pub detail: String,
    /// Markdown body shown in the documentation panel
    pub documentation: String,
    pub post_insert: Option<PostInsertAction>,
}

impl CompletionCandidate {
    pub fn from_entry(category: Category, entry: &MappingEntry) -> Self {
        let (heading, note) = match category {
            Category::Keyword => (
                "JaPy キーワード",
                "JaPyでは日本語キーワードを使用してPythonと同じ機能を実現できます",
            ),
            Category::BuiltinFunction => (
                "JaPy 組み込み関数",
                "JaPyでは日本語関数名を使用してPythonの組み込み関数を呼び出せます",
            ),
            Category::BuiltinType => (
                "JaPy 組み込み型",
                "JaPyでは日本語型名を使用してPythonのデータ型を扱えます",
            ),
        };

        let suffix = match category {
            Category::BuiltinFunction => CALL_SUFFIX,
            Category::Keyword | Category::BuiltinType => "",
        };

        let source = format!("{}{}", entry.source, suffix);
        let target = format!("{}{}", entry.target, suffix);

        Self {
            label: entry.source.to_string(),
            category,
            insert_text: source.clone(),
            detail: format!("Python: {}", target),
            documentation: format!(
                "**{heading}:** `{source}`\n\n**対応するPython:** `{target}`\n\n---\n\n*{note}*"
            ),
            post_insert: match category {
                Category::BuiltinFunction => Some(PostInsertAction::CursorLeft),
                Category::Keyword | Category::BuiltinType => None,
            },
        }
    }
}

fn table_candidates(table: &MappingTable) -> impl Iterator<Item = CompletionCandidate> + '_ {
    table
        .iter()
        .map(move |entry| CompletionCandidate::from_entry(table.category, entry))
}

/// Builds one candidate per table entry: keywords, then functions, then types.
///
/// The result never depends on the document or cursor, and nothing is
/// filtered, sorted or cached.
pub fn generate_completions() -> Vec<CompletionCandidate> {
    let mut candidates = Vec::with_capacity(total_entries());
    for table in all_tables() {
        candidates.extend(table_candidates(table));
    }
    candidates
}
