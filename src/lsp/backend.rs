use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::RwLock;

use tower_lsp::Client;
use tower_lsp::lsp_types::{
    CompletionOptions, CompletionRegistrationOptions, InitializeParams, Registration,
    TextDocumentRegistrationOptions,
};

use tracing::{debug, info, warn};

use crate::lsp::config::ServerConfig;
use crate::lsp::features::completion::JapyCompletionProvider;
use crate::lsp::features::traits::CompletionProvider;

mod handlers;
mod state;

pub use state::JapyBackend;

/// Registration id for the dynamically registered completion provider
pub const COMPLETION_REGISTRATION_ID: &str = "japy-completion";
const COMPLETION_METHOD: &str = "textDocument/completion";

impl JapyBackend {
    /// Creates a backend serving the built-in JaPy completion provider.
    pub fn new(client: Client, config: ServerConfig) -> Self {
        let provider = JapyCompletionProvider::new(config.trigger_characters.clone());
        Self::with_provider(client, config, Arc::new(provider))
    }

    /// Creates a backend around an arbitrary completion provider.
    pub fn with_provider(
        client: Client,
        config: ServerConfig,
        completion: Arc<dyn CompletionProvider>,
    ) -> Self {
        Self {
            client,
            config: Arc::new(config),
            completion,
            open_documents: Arc::new(RwLock::new(HashSet::new())),
            dynamic_registration: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether the client asked to register completion via `client/registerCapability`.
    fn client_supports_dynamic_completion(params: &InitializeParams) -> bool {
        params
            .capabilities
            .text_document
            .as_ref()
            .and_then(|text_document| text_document.completion.as_ref())
            .and_then(|completion| completion.dynamic_registration)
            .unwrap_or(false)
    }

    fn completion_options(&self) -> CompletionOptions {
        CompletionOptions {
            trigger_characters: Some(self.completion.trigger_characters()),
            resolve_provider: Some(false),
            ..Default::default()
        }
    }

    /// Registers the completion provider for the configured document selector.
    ///
    /// Failures are logged and otherwise ignored; without registration the
    /// client simply never asks for completions.
    async fn register_completion(&self) {
        let options = CompletionRegistrationOptions {
            text_document_registration_options: TextDocumentRegistrationOptions {
                document_selector: Some(self.config.document_selector()),
            },
            completion_options: self.completion_options(),
        };

        let register_options = match serde_json::to_value(options) {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to serialize completion registration options: {}", e);
                return;
            }
        };

        let registration = Registration {
            id: COMPLETION_REGISTRATION_ID.to_string(),
            method: COMPLETION_METHOD.to_string(),
            register_options: Some(register_options),
        };

        debug!(
            "Registering completion for language '{}' ({})",
            self.config.language_id, self.config.file_pattern
        );

        match self.client.register_capability(vec![registration]).await {
            Ok(()) => info!("Registered completion provider for '{}' documents", self.config.language_id),
            Err(e) => warn!("Client rejected completion registration: {}", e),
        }
    }

    fn uses_dynamic_registration(&self) -> bool {
        self.dynamic_registration.load(Ordering::SeqCst)
    }
}
