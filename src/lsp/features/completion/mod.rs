//! Code completion for JaPy
//!
//! This module provides:
//! - Candidate generation from the static dialect tables (`candidate`)
//! - The JaPy completion provider and its conversion to LSP completion items

pub mod candidate;

pub use candidate::{CALL_SUFFIX, CompletionCandidate, PostInsertAction, generate_completions};

use tower_lsp::lsp_types::{
    Command, CompletionItem, CompletionItemKind, Documentation, InsertTextFormat, MarkupContent,
    MarkupKind,
};
use tracing::trace;

use super::traits::{CompletionContext, CompletionProvider};
use crate::dialect::Category;

/// Editor command that moves the cursor one character left
pub const CURSOR_LEFT_COMMAND: &str = "cursorLeft";

/// Completion provider for JaPy documents.
///
/// Offers every dialect token on every request and ignores the request
/// context entirely.
#[derive(Debug, Clone, Default)]
pub struct JapyCompletionProvider {
    trigger_characters: Vec<String>,
}

impl JapyCompletionProvider {
    pub fn new(trigger_characters: Vec<String>) -> Self {
        Self { trigger_characters }
    }
}

impl CompletionProvider for JapyCompletionProvider {
    fn complete_at(&self, context: &CompletionContext) -> Vec<CompletionCandidate> {
        trace!(
            "Ignoring completion context {}:{}:{} (trigger {:?})",
            context.uri,
            context.position.line,
            context.position.character,
            context.trigger_character
        );
        generate_completions()
    }

    fn trigger_characters(&self) -> Vec<String> {
        self.trigger_characters.clone()
    }
}

/// Maps a dialect category to the LSP item kind shown by the editor.
pub fn completion_kind(category: Category) -> CompletionItemKind {
    match category {
        Category::Keyword => CompletionItemKind::KEYWORD,
        Category::BuiltinFunction => CompletionItemKind::FUNCTION,
        Category::BuiltinType => CompletionItemKind::CLASS,
    }
}

fn post_insert_command(action: PostInsertAction) -> Command {
    match action {
        PostInsertAction::CursorLeft => Command {
            title: "Move cursor left".to_string(),
            command: CURSOR_LEFT_COMMAND.to_string(),
            arguments: None,
        },
    }
}

impl From<CompletionCandidate> for CompletionItem {
    fn from(candidate: CompletionCandidate) -> Self {
        CompletionItem {
            label: candidate.label,
            kind: Some(completion_kind(candidate.category)),
            detail: Some(candidate.detail),
            documentation: Some(Documentation::MarkupContent(MarkupContent {
                kind: MarkupKind::Markdown,
                value: candidate.documentation,
            })),
            insert_text: Some(candidate.insert_text),
            insert_text_format: Some(InsertTextFormat::PLAIN_TEXT),
            command: candidate.post_insert.map(post_insert_command),
            ..Default::default()
        }
    }
}
