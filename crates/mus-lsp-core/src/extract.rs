//! Syntactic symbol extraction
//!
//! Document symbols are found with three independent regex scans over the
//! full text, one per declaration form. This is a lexical pass, not a parse:
//! nothing is validated, and each list keeps matches in text order.
//!
//! Recognized forms:
//!
//! ```text
//! var total => integer = 0        variable (also `const`)
//! fun add(a => integer, b) { }    function, parameters up to the first `)`
//! class Student extends Person    class, the parent is not recorded
//! ```
//!
//! A variable written with a colon (`var x: integer = 5`) is not indexed, and
//! a parameter list containing parentheses is cut at its first `)`.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::locator::IDENTIFIER_PATTERN;
use crate::symbol::{DocumentSymbolTable, SymbolEntry, SymbolKind};

static VARIABLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"\b(?<decl>var|const)\s+(?<name>{ident})\s*=>\s*(?<type>{ident})\s*=",
        ident = IDENTIFIER_PATTERN
    ))
    .unwrap()
});

static FUNCTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"\bfun\s+(?<name>{ident})\s*\((?<params>[^)]*)\)",
        ident = IDENTIFIER_PATTERN
    ))
    .unwrap()
});

static CLASS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"\bclass\s+(?<name>{ident})", ident = IDENTIFIER_PATTERN)).unwrap()
});

/// Scan the full document text into a fresh symbol table
pub fn extract_symbols(text: &str) -> DocumentSymbolTable {
    DocumentSymbolTable {
        variables: scan_variables(text),
        functions: scan_functions(text),
        classes: scan_classes(text),
    }
}

fn scan_variables(text: &str) -> Vec<SymbolEntry> {
    VARIABLE_RE
        .captures_iter(text)
        .map(|caps| {
            let decl = &caps["decl"];
            let name = &caps["name"];
            let type_name = &caps["type"];
            let what = if decl == "const" { "Constant" } else { "Variable" };

            SymbolEntry::new(
                name,
                SymbolKind::Variable,
                format!("{} {} => {}", decl, name, type_name),
                format!(
                    "```mus\n{} {} => {}\n```\n{} of type `{}`",
                    decl, name, type_name, what, type_name
                ),
            )
            .with_name_range(name_range(&caps))
        })
        .collect()
}

fn scan_functions(text: &str) -> Vec<SymbolEntry> {
    FUNCTION_RE
        .captures_iter(text)
        .map(|caps| {
            let name = &caps["name"];
            let params = &caps["params"];
            let declaration = format!("fun {}({})", name, params);

            SymbolEntry::new(
                name,
                SymbolKind::Function,
                declaration.clone(),
                format!("```mus\n{}\n```\nFunction declared in this document", declaration),
            )
            .with_parameters(params)
            .with_name_range(name_range(&caps))
        })
        .collect()
}

fn scan_classes(text: &str) -> Vec<SymbolEntry> {
    CLASS_RE
        .captures_iter(text)
        .map(|caps| {
            let name = &caps["name"];

            SymbolEntry::new(
                name,
                SymbolKind::Class,
                format!("class {}", name),
                format!("```mus\nclass {}\n```\nClass declared in this document", name),
            )
            .with_name_range(name_range(&caps))
        })
        .collect()
}

fn name_range(caps: &Captures) -> std::ops::Range<usize> {
    caps.name("name").map(|m| m.range()).unwrap_or_default()
}
