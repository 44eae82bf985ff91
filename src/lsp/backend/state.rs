//! Backend state management
//!
//! This module defines the JapyBackend struct, which holds everything the LSP
//! server keeps between requests. Completion itself is stateless.

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use tokio::sync::RwLock;
use tower_lsp::Client;
use tower_lsp::lsp_types::Url;

use crate::lsp::config::ServerConfig;
use crate::lsp::features::traits::CompletionProvider;

/// The JaPy language server backend.
#[derive(Clone)]
pub struct JapyBackend {
    pub(super) client: Client,
    pub(super) config: Arc<ServerConfig>,
    /// Completion provider consulted on every `textDocument/completion` request
    pub(super) completion: Arc<dyn CompletionProvider>,
    /// URIs of JaPy documents currently open in the client, for logging only
    pub(super) open_documents: Arc<RwLock<HashSet<Url>>>,
    /// Set during `initialize` when the client wants completion registered dynamically
    pub(super) dynamic_registration: Arc<AtomicBool>,
}

// Manual Debug implementation since Client and the provider don't implement Debug
impl std::fmt::Debug for JapyBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JapyBackend")
            .field("config", &self.config)
            .field("open_documents", &"<HashSet>")
            .finish()
    }
}
