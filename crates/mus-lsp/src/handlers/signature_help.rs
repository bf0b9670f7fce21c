use mus_lsp_core::{find_call_context, lexicon, parse_signature_parameters, DocumentSymbolTable};
use tower_lsp::lsp_types::*;

use crate::document::Document;

/// Get signature help for a position in the document
pub fn get_signature_help(
    doc: &Document,
    table: Option<&DocumentSymbolTable>,
    position: Position,
) -> Option<SignatureHelp> {
    // Find the function call we're inside, on the current line only
    let context = find_call_context(doc.line_prefix(position))?;

    let signature_info = match lexicon::builtin(&context.name) {
        Some(builtin) => builtin_signature(builtin),
        None => {
            let function = table?.find_function(&context.name)?;
            // Document functions are shown as their raw declaration
            SignatureInformation {
                label: function.detail.clone(),
                documentation: None,
                parameters: None,
                active_parameter: None,
            }
        }
    };

    Some(SignatureHelp {
        signatures: vec![signature_info],
        active_signature: Some(0),
        active_parameter: Some(context.active_parameter),
    })
}

fn builtin_signature(builtin: &lexicon::BuiltinFunction) -> SignatureInformation {
    let parameters: Vec<ParameterInformation> = parse_signature_parameters(builtin.signature)
        .into_iter()
        .map(|p| {
            let documentation = match &p.type_name {
                Some(ty) => format!("{}: {}", p.name, ty),
                None => p.name.clone(),
            };
            ParameterInformation {
                label: ParameterLabel::Simple(p.label),
                documentation: Some(Documentation::String(documentation)),
            }
        })
        .collect();

    SignatureInformation {
        label: builtin.signature.to_string(),
        documentation: Some(Documentation::MarkupContent(MarkupContent {
            kind: MarkupKind::Markdown,
            value: builtin.description.to_string(),
        })),
        parameters: Some(parameters),
        active_parameter: None,
    }
}
