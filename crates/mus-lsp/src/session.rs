use std::sync::{PoisonError, RwLock};

use dashmap::DashMap;
use mus_lsp_core::extract_symbols;
use serde_json::Value;
use tower_lsp::lsp_types::*;

use crate::config::{ConfigError, Settings};
use crate::document::Document;
use crate::handlers;
use crate::store::SymbolStore;

/// Server state shared by all requests
///
/// `documents` mirrors the client's open buffers; `symbols` holds the derived
/// symbol tables. Only [`Session::open`] and [`Session::change`] write symbol
/// tables, and they always re-scan the full text before returning, so any
/// query handled afterwards sees the new table.
#[derive(Default)]
pub struct Session {
    documents: DashMap<Url, Document>,
    symbols: SymbolStore,
    settings: RwLock<Settings>,
}

/// What a document sync did, for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    pub variables: usize,
    pub functions: usize,
    pub classes: usize,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn settings(&self) -> Settings {
        self.settings
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Merge a client settings payload into the current settings
    ///
    /// Returns the new settings, or `None` when the payload had nothing for
    /// this server and the current settings were kept. On error nothing
    /// changes.
    pub fn load_settings(&self, value: Option<Value>) -> Result<Option<Settings>, ConfigError> {
        let mut current = self.settings.write().unwrap_or_else(PoisonError::into_inner);
        let merged = current.merged_with(value)?;
        if let Some(settings) = &merged {
            *current = settings.clone();
        }
        Ok(merged)
    }

    pub fn symbols(&self) -> &SymbolStore {
        &self.symbols
    }

    pub fn open(&self, uri: Url, text: String) -> ScanSummary {
        let summary = self.rescan(&uri, &text);
        self.documents.insert(uri, Document::new(text));
        summary
    }

    /// Replace the document text and its symbol table
    ///
    /// A change for a document that was never opened is treated as an open.
    pub fn change(&self, uri: Url, text: String) -> ScanSummary {
        let summary = self.rescan(&uri, &text);
        match self.documents.get_mut(&uri) {
            Some(mut doc) => doc.update_text(text),
            None => {
                self.documents.insert(uri, Document::new(text));
            }
        }
        summary
    }

    /// Forget the document text; returns whether its symbol table was evicted too
    pub fn close(&self, uri: &Url) -> bool {
        self.documents.remove(uri);
        if self.settings().evict_on_close {
            self.symbols.remove(uri)
        } else {
            false
        }
    }

    fn rescan(&self, uri: &Url, text: &str) -> ScanSummary {
        let table = extract_symbols(text);
        let summary = ScanSummary {
            variables: table.variables.len(),
            functions: table.functions.len(),
            classes: table.classes.len(),
        };
        self.symbols.upsert(uri.clone(), table);
        summary
    }

    pub fn completion(&self, uri: &Url) -> Vec<CompletionItem> {
        match self.symbols.get(uri) {
            Some(table) => handlers::completion::get_completions(&table),
            None => Vec::new(),
        }
    }

    pub fn resolve_completion(&self, item: CompletionItem) -> CompletionItem {
        handlers::resolve::resolve_completion(item)
    }

    pub fn hover(&self, uri: &Url, position: Position) -> Option<Hover> {
        let doc = self.documents.get(uri)?;
        let table = self.symbols.get(uri);
        handlers::hover::get_hover(&doc, table.as_deref(), position)
    }

    pub fn signature_help(&self, uri: &Url, position: Position) -> Option<SignatureHelp> {
        let doc = self.documents.get(uri)?;
        let table = self.symbols.get(uri);
        handlers::signature_help::get_signature_help(&doc, table.as_deref(), position)
    }

    pub fn document_symbols(&self, uri: &Url) -> Option<DocumentSymbolResponse> {
        let doc = self.documents.get(uri)?;
        let table = self.symbols.get(uri)?;
        handlers::symbols::get_document_symbols(&doc, &table, uri)
    }
}
