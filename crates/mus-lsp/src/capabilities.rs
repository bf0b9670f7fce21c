use tower_lsp::lsp_types::*;

/// Define the server capabilities for the Mus LSP
pub fn server_capabilities() -> ServerCapabilities {
    ServerCapabilities {
        // Full text sync: every change carries the whole document and triggers a full re-scan
        text_document_sync: Some(TextDocumentSyncCapability::Options(
            TextDocumentSyncOptions {
                open_close: Some(true),
                change: Some(TextDocumentSyncKind::FULL),
                ..Default::default()
            },
        )),

        // Hover information (keywords, types, builtins, document symbols)
        hover_provider: Some(HoverProviderCapability::Simple(true)),

        // Document symbols (outline)
        document_symbol_provider: Some(OneOf::Left(true)),

        // Color details are attached on resolve
        completion_provider: Some(CompletionOptions {
            trigger_characters: Some(vec![".".to_string(), ">".to_string(), "(".to_string()]),
            resolve_provider: Some(true),
            ..Default::default()
        }),

        // Signature help (function parameter hints)
        signature_help_provider: Some(SignatureHelpOptions {
            trigger_characters: Some(vec!["(".to_string(), ",".to_string()]),
            retrigger_characters: Some(vec![",".to_string()]),
            work_done_progress_options: Default::default(),
        }),

        ..Default::default()
    }
}
