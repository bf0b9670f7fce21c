//! Core code intelligence for the Mus language
//!
//! This crate holds the protocol-agnostic pieces of the Mus language server:
//! everything here works on plain strings and byte offsets and knows nothing
//! about LSP wire types.
//!
//! # Features
//!
//! - **Lexicon**: the fixed tables of keywords, types, builtin functions and colors
//! - **Extraction**: pattern scans turning document text into a symbol table
//! - **Locator**: the identifier touching a cursor offset
//! - **Calls**: call-context detection and builtin signature parsing for signature help
//!
//! # Example
//!
//! ```
//! use mus_lsp_core::{extract_symbols, lexicon, word_at};
//!
//! let table = extract_symbols("var total => integer = 0\nfun add(a, b) { }");
//! assert_eq!(table.variables[0].name, "total");
//! assert_eq!(table.functions[0].parameters.as_deref(), Some("a, b"));
//!
//! assert_eq!(word_at("out(total)", 6), Some("total"));
//! assert_eq!(lexicon::color_hex("red"), Some("#FF0000"));
//! ```

pub mod calls;
pub mod extract;
pub mod lexicon;
pub mod locator;
pub mod symbol;

// Re-export main types for convenience
pub use calls::{find_call_context, parse_signature_parameters, CallContext, SignatureParameter};
pub use extract::extract_symbols;
pub use locator::{is_identifier_char, word_at, word_span_at};
pub use symbol::{DocumentSymbolTable, SymbolEntry, SymbolKind, COLOR_TAG};
