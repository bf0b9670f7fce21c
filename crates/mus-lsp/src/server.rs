use serde_json::Value;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};

use crate::capabilities;
use crate::session::Session;

pub struct Backend {
    client: Client,
    session: Session,
    debug: bool,
}

impl Backend {
    pub fn new(client: Client, debug: bool) -> Self {
        Self {
            client,
            session: Session::new(),
            debug,
        }
    }

    async fn log_debug(&self, message: &str) {
        if self.debug {
            self.client
                .log_message(MessageType::INFO, format!("[DEBUG] {}", message))
                .await;
        }
    }

    async fn load_settings(&self, value: Option<Value>) {
        match self.session.load_settings(value) {
            Ok(Some(settings)) => {
                tracing::debug!(?settings, "settings applied");
                if settings.enable_diagnostics {
                    tracing::info!(
                        max_problems = settings.max_number_of_problems,
                        "enableDiagnostics is set, but this server publishes no diagnostics"
                    );
                }
            }
            Ok(None) => {
                tracing::debug!("no mus settings in payload, keeping previous settings");
            }
            Err(e) => {
                tracing::warn!(error = %e, "keeping previous settings");
                self.client
                    .log_message(MessageType::WARNING, format!("Mus LSP: {}", e))
                    .await;
            }
        }
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        self.log_debug("Initializing Mus LSP server").await;
        self.load_settings(params.initialization_options).await;

        Ok(InitializeResult {
            capabilities: capabilities::server_capabilities(),
            server_info: Some(ServerInfo {
                name: "mus-lsp".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        tracing::info!("server initialized");
        self.client
            .log_message(MessageType::INFO, "Mus LSP server initialized")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        self.log_debug("Shutting down server").await;
        let symbols = self.session.symbols();
        if symbols.is_empty() {
            tracing::info!("shutting down");
        } else {
            tracing::info!(tables = symbols.len(), "shutting down, dropping symbol tables");
        }
        Ok(())
    }

    async fn did_change_configuration(&self, params: DidChangeConfigurationParams) {
        self.log_debug("Configuration changed").await;
        self.load_settings(Some(params.settings)).await;
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let uri = params.text_document.uri;
        let summary = self.session.open(uri.clone(), params.text_document.text);

        tracing::debug!(
            %uri,
            variables = summary.variables,
            functions = summary.functions,
            classes = summary.classes,
            "document opened"
        );
        self.log_debug(&format!("Document opened: {}", uri)).await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;

        // Full sync: the last change carries the whole text
        let Some(change) = params.content_changes.into_iter().last() else {
            return;
        };
        let summary = self.session.change(uri.clone(), change.text);

        tracing::debug!(
            %uri,
            variables = summary.variables,
            functions = summary.functions,
            classes = summary.classes,
            "document rescanned"
        );
        self.log_debug(&format!("Document changed: {}", uri)).await;
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;
        let evicted = self.session.close(&uri);

        tracing::debug!(%uri, evicted, "document closed");
        self.log_debug(&format!("Document closed: {}", uri)).await;
    }

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        let uri = &params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;

        self.log_debug(&format!("Hover request at {:?}", position))
            .await;

        Ok(self.session.hover(uri, position))
    }

    async fn completion(
        &self,
        params: CompletionParams,
    ) -> Result<Option<CompletionResponse>> {
        let uri = &params.text_document_position.text_document.uri;
        let position = params.text_document_position.position;

        self.log_debug(&format!("Completion request at {:?}", position))
            .await;

        let items = self.session.completion(uri);
        tracing::trace!(%uri, count = items.len(), "completion");
        Ok(Some(CompletionResponse::Array(items)))
    }

    async fn completion_resolve(&self, item: CompletionItem) -> Result<CompletionItem> {
        self.log_debug(&format!("Completion resolve for {}", item.label))
            .await;

        Ok(self.session.resolve_completion(item))
    }

    async fn signature_help(
        &self,
        params: SignatureHelpParams,
    ) -> Result<Option<SignatureHelp>> {
        let uri = &params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;

        self.log_debug(&format!("Signature help request at {:?}", position))
            .await;

        Ok(self.session.signature_help(uri, position))
    }

    async fn document_symbol(
        &self,
        params: DocumentSymbolParams,
    ) -> Result<Option<DocumentSymbolResponse>> {
        let uri = &params.text_document.uri;

        self.log_debug(&format!("Document symbols for: {}", uri))
            .await;

        Ok(self.session.document_symbols(uri))
    }
}
