use std::sync::Arc;

use dashmap::DashMap;
use mus_lsp_core::DocumentSymbolTable;
use tower_lsp::lsp_types::Url;

/// Symbol tables of scanned documents, keyed by URI
///
/// This is the only shared mutable state of the server. The document sync
/// path is its single writer: every open or change replaces the document's
/// table wholesale with the result of a fresh full scan. Query handlers only
/// read. Entries outlive the document being closed unless [`SymbolStore::remove`]
/// is called, which the server only does when `evictOnClose` is enabled.
#[derive(Default)]
pub struct SymbolStore {
    tables: DashMap<Url, Arc<DocumentSymbolTable>>,
}

impl SymbolStore {
    /// Replace the table for `uri`, returning the previous one
    pub fn upsert(&self, uri: Url, table: DocumentSymbolTable) -> Option<Arc<DocumentSymbolTable>> {
        self.tables.insert(uri, Arc::new(table))
    }

    pub fn get(&self, uri: &Url) -> Option<Arc<DocumentSymbolTable>> {
        self.tables.get(uri).map(|entry| Arc::clone(entry.value()))
    }

    pub fn remove(&self, uri: &Url) -> bool {
        self.tables.remove(uri).is_some()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mus_lsp_core::extract_symbols;

    fn uri(name: &str) -> Url {
        Url::parse(&format!("file:///{}", name)).unwrap()
    }

    #[test]
    fn test_get_unknown() {
        let store = SymbolStore::default();
        assert!(store.get(&uri("missing.mus")).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_upsert_replaces() {
        let store = SymbolStore::default();
        let doc = uri("a.mus");

        assert!(store.upsert(doc.clone(), extract_symbols("fun old() { }")).is_none());
        let previous = store.upsert(doc.clone(), extract_symbols("fun new() { }"));

        assert_eq!(previous.unwrap().functions[0].name, "old");
        let current = store.get(&doc).unwrap();
        assert_eq!(current.functions.len(), 1);
        assert_eq!(current.functions[0].name, "new");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_readers_keep_their_snapshot() {
        let store = SymbolStore::default();
        let doc = uri("a.mus");
        store.upsert(doc.clone(), extract_symbols("var x => integer = 1"));

        let snapshot = store.get(&doc).unwrap();
        store.upsert(doc.clone(), DocumentSymbolTable::default());

        assert_eq!(snapshot.variables.len(), 1);
        assert!(store.get(&doc).unwrap().is_empty());
    }

    #[test]
    fn test_remove() {
        let store = SymbolStore::default();
        let doc = uri("a.mus");
        store.upsert(doc.clone(), DocumentSymbolTable::default());

        assert!(store.get(&doc).is_some());
        assert!(store.remove(&doc));
        assert!(!store.remove(&doc));
        assert!(store.get(&doc).is_none());
    }
}
