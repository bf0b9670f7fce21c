use mus_lsp_core::{lexicon, word_span_at, DocumentSymbolTable};
use tower_lsp::lsp_types::*;

use crate::document::Document;

/// Get hover information for a position in the document
///
/// Lookup order is fixed and the first hit wins: keywords, types, builtins,
/// then the document's variables and functions. A keyword therefore hides a
/// document symbol of the same name.
pub fn get_hover(
    doc: &Document,
    table: Option<&DocumentSymbolTable>,
    position: Position,
) -> Option<Hover> {
    let offset = doc.offset_at(position);
    let span = word_span_at(doc.text(), offset)?;
    let word = &doc.text()[span.clone()];

    let info = get_lexicon_info(word).or_else(|| {
        let table = table?;
        table
            .find_variable(word)
            .or_else(|| table.find_function(word))
            .map(|entry| entry.documentation.clone())
    })?;

    Some(Hover {
        contents: HoverContents::Markup(MarkupContent {
            kind: MarkupKind::Markdown,
            value: info,
        }),
        range: Some(doc.range_of(span)),
    })
}

fn get_lexicon_info(word: &str) -> Option<String> {
    if let Some(keyword) = lexicon::keyword(word) {
        return Some(format!("**{}** (keyword)\n\n{}", keyword.name, keyword.description));
    }
    if let Some(ty) = lexicon::type_name(word) {
        return Some(format!("**{}** (type)\n\n{}", ty.name, ty.description));
    }
    lexicon::builtin(word).map(lexicon::builtin_documentation)
}
