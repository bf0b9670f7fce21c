use mus_lsp_core::lexicon::{BUILTIN_SYMBOLS, COLOR_SYMBOLS, KEYWORD_SYMBOLS, TYPE_SYMBOLS};
use mus_lsp_core::{DocumentSymbolTable, SymbolEntry, SymbolKind};
use once_cell::sync::Lazy;
use serde_json::Value;
use tower_lsp::lsp_types::*;

/// Cached LSP completion items converted from the static lexicon
static KEYWORD_COMPLETIONS: Lazy<Vec<CompletionItem>> =
    Lazy::new(|| KEYWORD_SYMBOLS.iter().map(to_completion_item).collect());

static TYPE_COMPLETIONS: Lazy<Vec<CompletionItem>> =
    Lazy::new(|| TYPE_SYMBOLS.iter().map(to_completion_item).collect());

static COLOR_COMPLETIONS: Lazy<Vec<CompletionItem>> =
    Lazy::new(|| COLOR_SYMBOLS.iter().map(to_completion_item).collect());

static BUILTIN_COMPLETIONS: Lazy<Vec<CompletionItem>> =
    Lazy::new(|| BUILTIN_SYMBOLS.iter().map(to_completion_item).collect());

fn completion_kind(kind: SymbolKind) -> CompletionItemKind {
    match kind {
        SymbolKind::Variable => CompletionItemKind::VARIABLE,
        SymbolKind::Function | SymbolKind::BuiltinFunction => CompletionItemKind::FUNCTION,
        SymbolKind::Class => CompletionItemKind::CLASS,
        SymbolKind::Keyword => CompletionItemKind::KEYWORD,
        SymbolKind::Type => CompletionItemKind::TYPE_PARAMETER,
        SymbolKind::Color => CompletionItemKind::COLOR,
    }
}

/// Convert a symbol entry to an LSP completion item
pub fn to_completion_item(entry: &SymbolEntry) -> CompletionItem {
    let callable = matches!(entry.kind, SymbolKind::Function | SymbolKind::BuiltinFunction);

    let documentation = (!entry.documentation.is_empty()).then(|| {
        Documentation::MarkupContent(MarkupContent {
            kind: MarkupKind::Markdown,
            value: entry.documentation.clone(),
        })
    });

    CompletionItem {
        label: entry.name.clone(),
        kind: Some(completion_kind(entry.kind)),
        detail: Some(entry.detail.clone()),
        label_details: Some(CompletionItemLabelDetails {
            detail: None,
            description: Some(entry.kind.as_str().to_string()),
        }),
        documentation,
        insert_text: callable.then(|| format!("{}($1)", entry.name)),
        insert_text_format: callable.then_some(InsertTextFormat::SNIPPET),
        data: entry.data.clone().map(Value::String),
        ..Default::default()
    }
}

/// Get completion items for a scanned document
///
/// Items come in a fixed order: document variables, functions and classes,
/// then keywords, types, colors and builtins. Nothing is filtered by prefix
/// or de-duplicated, so a document function named like a builtin shows up
/// twice.
pub fn get_completions(table: &DocumentSymbolTable) -> Vec<CompletionItem> {
    let mut items = Vec::with_capacity(
        table.len()
            + KEYWORD_COMPLETIONS.len()
            + TYPE_COMPLETIONS.len()
            + COLOR_COMPLETIONS.len()
            + BUILTIN_COMPLETIONS.len(),
    );
    items.extend(table.iter().map(to_completion_item));
    items.extend(KEYWORD_COMPLETIONS.iter().cloned());
    items.extend(TYPE_COMPLETIONS.iter().cloned());
    items.extend(COLOR_COMPLETIONS.iter().cloned());
    items.extend(BUILTIN_COMPLETIONS.iter().cloned());
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use mus_lsp_core::extract_symbols;

    #[test]
    fn test_static_completions_count() {
        assert_eq!(KEYWORD_COMPLETIONS.len(), 26);
        assert_eq!(TYPE_COMPLETIONS.len(), 20);
        assert_eq!(COLOR_COMPLETIONS.len(), 9);
        assert_eq!(BUILTIN_COMPLETIONS.len(), 3);
    }

    #[test]
    fn test_empty_document_gets_lexicon() {
        let items = get_completions(&DocumentSymbolTable::default());
        assert_eq!(items.len(), 26 + 20 + 9 + 3);
    }

    #[test]
    fn test_fixed_order() {
        let table = extract_symbols("class C { }\nfun f() { }\nvar v => integer = 1");
        let items = get_completions(&table);

        let labels: Vec<&str> = items.iter().take(4).map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["v", "f", "C", "fun"]);

        let kinds: Vec<CompletionItemKind> = items.iter().filter_map(|c| c.kind).collect();
        let first_type = kinds.iter().position(|k| *k == CompletionItemKind::TYPE_PARAMETER).unwrap();
        let first_color = kinds.iter().position(|k| *k == CompletionItemKind::COLOR).unwrap();
        let last_keyword = kinds.iter().rposition(|k| *k == CompletionItemKind::KEYWORD).unwrap();
        assert!(last_keyword < first_type);
        assert!(first_type < first_color);
        assert_eq!(items.last().unwrap().label, "warn");
    }

    #[test]
    fn test_builtin_collision_is_not_deduplicated() {
        let table = extract_symbols("fun out(msg) { }");
        let items = get_completions(&table);

        let outs: Vec<&CompletionItem> = items.iter().filter(|c| c.label == "out").collect();
        assert_eq!(outs.len(), 2);
        assert_eq!(outs[0].detail.as_deref(), Some("fun out(msg)"));
        assert_eq!(outs[1].detail.as_deref(), Some("out(message => any)"));
    }

    #[test]
    fn test_color_items_are_unresolved() {
        let red = COLOR_COMPLETIONS.iter().find(|c| c.label == "red").unwrap();
        assert_eq!(red.kind, Some(CompletionItemKind::COLOR));
        assert_eq!(red.data, Some(Value::String("color".to_string())));
        assert_eq!(red.detail.as_deref(), Some("color constant"));
        assert!(red.documentation.is_none());
    }

    #[test]
    fn test_items_describe_their_category() {
        let table = extract_symbols("var v => integer = 1\nfun f() { }");
        let items = get_completions(&table);
        let description = |label: &str| {
            items
                .iter()
                .find(|c| c.label == label)
                .and_then(|c| c.label_details.as_ref())
                .and_then(|d| d.description.clone())
        };

        assert_eq!(description("v").as_deref(), Some("variable"));
        assert_eq!(description("f").as_deref(), Some("function"));
        assert_eq!(description("while").as_deref(), Some("keyword"));
        assert_eq!(description("integer").as_deref(), Some("type"));
        assert_eq!(description("gray").as_deref(), Some("color"));
        assert_eq!(description("error").as_deref(), Some("builtin"));
    }

    #[test]
    fn test_function_items_are_snippets() {
        let out = BUILTIN_COMPLETIONS.iter().find(|c| c.label == "out").unwrap();
        assert_eq!(out.insert_text.as_deref(), Some("out($1)"));
        assert_eq!(out.insert_text_format, Some(InsertTextFormat::SNIPPET));

        let fun = KEYWORD_COMPLETIONS.iter().find(|c| c.label == "fun").unwrap();
        assert!(fun.insert_text.is_none());
        assert!(fun.documentation.is_some());
    }
}
