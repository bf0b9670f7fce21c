use mus_lsp_core::{DocumentSymbolTable, SymbolEntry};
use tower_lsp::lsp_types::*;

use crate::document::Document;

/// Get document symbols (outline) from the stored symbol table
pub fn get_document_symbols(
    doc: &Document,
    table: &DocumentSymbolTable,
    uri: &Url,
) -> Option<DocumentSymbolResponse> {
    let symbols: Vec<SymbolInformation> = table
        .iter()
        .filter_map(|entry| symbol_information(doc, entry, uri))
        .collect();

    if symbols.is_empty() {
        None
    } else {
        Some(DocumentSymbolResponse::Flat(symbols))
    }
}

fn symbol_information(doc: &Document, entry: &SymbolEntry, uri: &Url) -> Option<SymbolInformation> {
    let kind = match entry.kind {
        mus_lsp_core::SymbolKind::Variable => SymbolKind::VARIABLE,
        mus_lsp_core::SymbolKind::Function => SymbolKind::FUNCTION,
        mus_lsp_core::SymbolKind::Class => SymbolKind::CLASS,
        _ => return None,
    };
    let span = entry.name_range.clone()?;

    #[allow(deprecated)]
    Some(SymbolInformation {
        name: entry.name.clone(),
        kind,
        tags: None,
        deprecated: None,
        location: Location {
            uri: uri.clone(),
            range: doc.range_of(span),
        },
        container_name: None,
    })
}
