//! In-process LSP client for integration tests
//!
//! Drives a `JapyBackend` through `tower_lsp::LspService` without spawning a
//! process or opening a transport.

use std::sync::atomic::{AtomicI64, Ordering};

use serde_json::{Value, json};
use tower::{Service, ServiceExt};
use tower_lsp::jsonrpc::{self, Request};
use tower_lsp::lsp_types::{CompletionItem, InitializeResult, Position};
use tower_lsp::{ClientSocket, LspService};

use japy_language_server::lsp::backend::JapyBackend;
use japy_language_server::lsp::config::ServerConfig;

pub struct LspClient {
    service: LspService<JapyBackend>,
    next_id: AtomicI64,
}

impl LspClient {
    /// Creates a client and returns the socket carrying server-to-client traffic.
    pub fn new(config: ServerConfig) -> (Self, ClientSocket) {
        let (service, socket) = LspService::new(|client| JapyBackend::new(client, config));
        let client = LspClient { service, next_id: AtomicI64::new(1) };
        (client, socket)
    }

    pub async fn request(&mut self, method: &'static str, params: Option<Value>) -> jsonrpc::Result<Value> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let builder = Request::build(method).id(id);
        let request = match params {
            Some(params) => builder.params(params).finish(),
            None => builder.finish(),
        };
        let response = self
            .service
            .ready()
            .await
            .expect("service ready")
            .call(request)
            .await
            .expect("server has not exited")
            .expect("requests always get a response");
        let (_, result) = response.into_parts();
        result
    }

    pub async fn notify(&mut self, method: &'static str, params: Value) {
        let notification = Request::build(method).params(params).finish();
        let response = self
            .service
            .ready()
            .await
            .expect("service ready")
            .call(notification)
            .await
            .expect("server has not exited");
        assert!(response.is_none(), "notifications never get a response");
    }

    /// Sends `initialize` with or without dynamic completion registration support.
    pub async fn initialize(&mut self, dynamic_registration: bool) -> InitializeResult {
        let params = json!({
            "processId": null,
            "rootUri": null,
            "clientInfo": { "name": "japy-test-client" },
            "capabilities": {
                "textDocument": {
                    "completion": { "dynamicRegistration": dynamic_registration }
                }
            }
        });
        let result = self.request("initialize", Some(params)).await.expect("initialize succeeds");
        serde_json::from_value(result).expect("valid InitializeResult")
    }

    pub async fn open(&mut self, uri: &str, text: &str) {
        let params = json!({
            "textDocument": { "uri": uri, "languageId": "japy", "version": 1, "text": text }
        });
        self.notify("textDocument/didOpen", params).await;
    }

    pub async fn close(&mut self, uri: &str) {
        self.notify("textDocument/didClose", json!({ "textDocument": { "uri": uri } })).await;
    }

    pub async fn completion(
        &mut self,
        uri: &str,
        position: Position,
        trigger_character: Option<&str>,
    ) -> Vec<CompletionItem> {
        let context = match trigger_character {
            Some(ch) => json!({ "triggerKind": 2, "triggerCharacter": ch }),
            None => json!({ "triggerKind": 1 }),
        };
        let params = json!({
            "textDocument": { "uri": uri },
            "position": { "line": position.line, "character": position.character },
            "context": context
        });
        let result = self
            .request("textDocument/completion", Some(params))
            .await
            .expect("completion succeeds");
        serde_json::from_value(result).expect("completion returns an item array")
    }

    pub async fn shutdown(&mut self) {
        let result = self.request("shutdown", None).await.expect("shutdown succeeds");
        assert_eq!(result, Value::Null);
    }
}
