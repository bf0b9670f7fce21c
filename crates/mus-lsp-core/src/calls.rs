//! Call-site detection and signature parsing for signature help
//!
//! Both operations are deliberately shallow. The call is the nearest
//! `name(` before the cursor on the current line, so inside
//! `outer(inner(1), ` the call is still `inner`. The active parameter is the
//! count of every comma after that parenthesis, including commas nested in
//! inner calls or string literals.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::locator::{is_identifier_char, IDENTIFIER_PATTERN};

static CALL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?<name>{ident})\s*\(", ident = IDENTIFIER_PATTERN)).unwrap()
});

/// The call surrounding the cursor
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallContext {
    pub name: String,
    pub active_parameter: u32,
}

/// Find the call context in `line_prefix`, the current line up to the cursor
pub fn find_call_context(line_prefix: &str) -> Option<CallContext> {
    let caps = CALL_RE
        .captures_iter(line_prefix)
        .filter(|caps| {
            // `1abc(` has no callee: a name never starts inside a word
            caps.get(0).is_some_and(|m| {
                !line_prefix[..m.start()]
                    .chars()
                    .next_back()
                    .is_some_and(is_identifier_char)
            })
        })
        .last()?;
    let whole = caps.get(0)?;
    let name = caps.name("name")?.as_str().to_string();

    // The match ends right after the '('
    let active_parameter = line_prefix[whole.end()..].matches(',').count() as u32;

    Some(CallContext {
        name,
        active_parameter,
    })
}

/// A parameter of a builtin signature
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignatureParameter {
    /// The parameter as written, e.g. `message => any`
    pub label: String,
    pub name: String,
    pub type_name: Option<String>,
}

/// Split a literal signature such as `out(message => any)` into its parameters
///
/// The parameter list is the text between the first `(` and the last `)`,
/// split on commas; each piece is split on `=>` into name and type.
pub fn parse_signature_parameters(signature: &str) -> Vec<SignatureParameter> {
    let (Some(open), Some(close)) = (signature.find('('), signature.rfind(')')) else {
        return Vec::new();
    };
    if close <= open {
        return Vec::new();
    }

    signature[open + 1..close]
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| {
            let (name, type_name) = match p.split_once("=>") {
                Some((name, ty)) => (name.trim(), Some(ty.trim().to_string())),
                None => (p, None),
            };
            SignatureParameter {
                label: p.to_string(),
                name: name.to_string(),
                type_name,
            }
        })
        .collect()
}
