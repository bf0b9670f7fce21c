use mus_lsp_core::lexicon::resolve_color;
use mus_lsp_core::COLOR_TAG;
use serde_json::Value;
use tower_lsp::lsp_types::*;

/// Fill in the details deferred at completion time
///
/// Only color items carry deferred work: their hex value is looked up here,
/// once the client focuses the item. Everything else comes back unchanged.
pub fn resolve_completion(mut item: CompletionItem) -> CompletionItem {
    let is_color = matches!(&item.data, Some(Value::String(tag)) if tag == COLOR_TAG);
    if !is_color {
        return item;
    }

    if let Some(color) = resolve_color(&item.label) {
        item.detail = Some(color.detail);
        item.documentation = Some(Documentation::MarkupContent(MarkupContent {
            kind: MarkupKind::Markdown,
            value: color.documentation,
        }));
    }
    item
}
