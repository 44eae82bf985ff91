//! LSP protocol handler implementations
//!
//! This module contains the `tower_lsp::LanguageServer` implementation for the
//! JaPy backend:
//! - Lifecycle handlers (initialize, initialized, shutdown)
//! - Document lifecycle (did_open, did_close), tracked for logging only
//! - Completion

use std::sync::atomic::Ordering;

use tower_lsp::LanguageServer;
use tower_lsp::lsp_types::{
    CompletionItem, CompletionParams, CompletionResponse, DidCloseTextDocumentParams,
    DidOpenTextDocumentParams, InitializeParams, InitializeResult, InitializedParams,
    ServerCapabilities, ServerInfo, TextDocumentSyncCapability, TextDocumentSyncKind,
    TextDocumentSyncOptions,
};
use tower_lsp::jsonrpc::Result as LspResult;

use tracing::{debug, info};

use super::state::JapyBackend;
use crate::lsp::features::traits::CompletionContext;

#[tower_lsp::async_trait]
impl LanguageServer for JapyBackend {
    /// Handles the LSP initialize request, advertising completion either
    /// statically or, when the client supports it, deferring to dynamic
    /// registration in `initialized`.
    async fn initialize(&self, params: InitializeParams) -> LspResult<InitializeResult> {
        info!(
            "Received initialize from {}",
            params
                .client_info
                .as_ref()
                .map(|client| client.name.as_str())
                .unwrap_or("<unknown client>")
        );
        debug!("Initialize params: {:?}", params);

        let dynamic = Self::client_supports_dynamic_completion(&params);
        self.dynamic_registration.store(dynamic, Ordering::SeqCst);

        let completion_provider = if dynamic {
            debug!("Client supports dynamic completion registration; deferring to initialized");
            None
        } else {
            Some(self.completion_options())
        };

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                // Open/close only: document text is never needed for completion
                text_document_sync: Some(TextDocumentSyncCapability::Options(TextDocumentSyncOptions {
                    open_close: Some(true),
                    change: Some(TextDocumentSyncKind::NONE),
                    ..Default::default()
                })),
                completion_provider,
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    /// Handles the LSP initialized notification.
    async fn initialized(&self, _: InitializedParams) {
        info!("JaPy language server initialized");
        if self.uses_dynamic_registration() {
            self.register_completion().await;
        }
    }

    /// Handles the LSP shutdown request. Nothing needs releasing.
    async fn shutdown(&self) -> LspResult<()> {
        info!("Received shutdown request");
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let document = params.text_document;
        if document.language_id != self.config.language_id {
            debug!(
                "Opened {} with language '{}', expected '{}'",
                document.uri, document.language_id, self.config.language_id
            );
        }
        let open_count = {
            let mut open_documents = self.open_documents.write().await;
            open_documents.insert(document.uri.clone());
            open_documents.len()
        };
        info!("Opened document: URI={}, version={} ({} open)", document.uri, document.version, open_count);
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;
        let removed = self.open_documents.write().await.remove(&uri);
        if removed {
            info!("Closed document: {}", uri);
        } else {
            debug!("Closed document was not tracked: {}", uri);
        }
    }

    /// Provides code completion suggestions
    ///
    /// Every request yields the complete dialect vocabulary; the host filters
    /// it against whatever the user has typed.
    async fn completion(&self, params: CompletionParams) -> LspResult<Option<CompletionResponse>> {
        let context = CompletionContext::from(&params);
        debug!(
            "Completion request at {}:{:?} (trigger: {:?})",
            context.uri, context.position, context.trigger_character
        );

        let items: Vec<CompletionItem> = self
            .completion
            .complete_at(&context)
            .into_iter()
            .map(CompletionItem::from)
            .collect();

        debug!("Returning {} completion items", items.len());
        Ok(Some(CompletionResponse::Array(items)))
    }
}
