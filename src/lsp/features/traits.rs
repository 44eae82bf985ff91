//! Provider traits separating completion logic from the LSP host
//!
//! The backend builds a [`CompletionContext`] from each request and hands it to
//! a [`CompletionProvider`]. Providers return protocol-neutral
//! [`CompletionCandidate`]s, so they can be tested without a client or runtime.

use tower_lsp::lsp_types::{CompletionParams, CompletionTriggerKind, Position as LspPosition, Url};

use super::completion::CompletionCandidate;

/// Context for completion operations
///
/// Everything the host tells us about a completion request. Providers may
/// ignore any of it.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionContext {
    /// URI of the document
    pub uri: Url,
    /// Cursor position in LSP coordinates
    pub position: LspPosition,
    /// How the request was triggered (invoked, trigger character, incomplete)
    pub trigger_kind: Option<CompletionTriggerKind>,
    /// Trigger character, if the request was triggered by one
    pub trigger_character: Option<String>,
}

impl CompletionContext {
    pub fn new(uri: Url, position: LspPosition) -> Self {
        Self {
            uri,
            position,
            trigger_kind: None,
            trigger_character: None,
        }
    }
}

impl From<&CompletionParams> for CompletionContext {
    fn from(params: &CompletionParams) -> Self {
        let text_position = &params.text_document_position;
        Self {
            uri: text_position.text_document.uri.clone(),
            position: text_position.position,
            trigger_kind: params.context.as_ref().map(|ctx| ctx.trigger_kind),
            trigger_character: params
                .context
                .as_ref()
                .and_then(|ctx| ctx.trigger_character.clone()),
        }
    }
}

/// Provider trait for code completion
pub trait CompletionProvider: Send + Sync {
    /// Generate completion candidates for the given context
    ///
    /// # Returns
    /// Candidates in presentation order. Hosts may filter and re-rank them.
    fn complete_at(&self, context: &CompletionContext) -> Vec<CompletionCandidate>;

    /// Characters that should make the host request completions
    fn trigger_characters(&self) -> Vec<String> {
        vec![]
    }
}
