//! Static lexicon of the Mus language
//!
//! Keywords, type names, builtin functions and named colors. The exact
//! membership of these tables is observable by clients (completion lists,
//! hover text), so entries are only ever added or removed deliberately.

use once_cell::sync::Lazy;

use crate::symbol::{SymbolEntry, SymbolKind, COLOR_TAG};

/// A keyword or type name with its description
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LexiconEntry {
    pub name: &'static str,
    pub description: &'static str,
}

/// A builtin function with its literal signature
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuiltinFunction {
    pub name: &'static str,
    pub signature: &'static str,
    pub description: &'static str,
}

/// A named color constant
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorConstant {
    pub name: &'static str,
    pub hex: &'static str,
}

const fn entry(name: &'static str, description: &'static str) -> LexiconEntry {
    LexiconEntry { name, description }
}

pub static KEYWORDS: [LexiconEntry; 26] = [
    entry("fun", "Declare a function: `fun name(param => type) { body }`"),
    entry("var", "Declare a mutable variable: `var name => type = value`"),
    entry("const", "Declare a constant: `const name => type = value`"),
    entry("if", "Conditional statement: `if condition { ... }`"),
    entry("else", "Alternative branch of an `if` statement"),
    entry("elif", "Additional conditional branch of an `if` statement"),
    entry("while", "Loop while a condition holds: `while condition { ... }`"),
    entry("for", "Iterate over a range or collection: `for item in items { ... }`"),
    entry("in", "Separates the loop variable from the iterable in a `for` loop"),
    entry("return", "Return a value from the enclosing function"),
    entry("break", "Exit the innermost loop"),
    entry("continue", "Skip to the next iteration of the innermost loop"),
    entry("class", "Declare a class: `class Name extends Parent { ... }`"),
    entry("extends", "Name the parent class in a class declaration"),
    entry("new", "Create an instance of a class: `new Name(args)`"),
    entry("this", "Reference to the current instance inside a method"),
    entry("super", "Reference to the parent class inside a method"),
    entry("and", "Logical conjunction"),
    entry("or", "Logical disjunction"),
    entry("not", "Logical negation"),
    entry("true", "Boolean literal true"),
    entry("false", "Boolean literal false"),
    entry("null", "The absence of a value"),
    entry("import", "Import names from another module: `import name from \"module\"`"),
    entry("from", "Name the source module of an `import`"),
    entry("export", "Make a declaration visible to other modules"),
];

pub static TYPES: [LexiconEntry; 20] = [
    entry("integer", "Whole number"),
    entry("float", "Single precision floating point number"),
    entry("double", "Double precision floating point number"),
    entry("string", "Sequence of characters"),
    entry("char", "Single character"),
    entry("bool", "Boolean value, `true` or `false`"),
    entry("array", "Fixed-size indexed collection"),
    entry("list", "Growable ordered collection"),
    entry("map", "Collection of key/value pairs"),
    entry("set", "Collection of unique values"),
    entry("tuple", "Fixed-size group of values of mixed types"),
    entry("any", "Value of any type"),
    entry("void", "No value; the return type of procedures"),
    entry("object", "Instance of a class"),
    entry("function", "Callable value"),
    entry("byte", "8-bit unsigned integer"),
    entry("long", "64-bit signed integer"),
    entry("short", "16-bit signed integer"),
    entry("number", "Integer or floating point number"),
    entry("color", "Color value, written as a name or a hex string"),
];

pub static BUILTINS: [BuiltinFunction; 3] = [
    BuiltinFunction {
        name: "out",
        signature: "out(message => any)",
        description: "Print the message to standard output",
    },
    BuiltinFunction {
        name: "error",
        signature: "error(message => any)",
        description: "Print the message to standard error",
    },
    BuiltinFunction {
        name: "warn",
        signature: "warn(message => any)",
        description: "Print the message to standard error, prefixed with `Warning:`",
    },
];

pub static COLORS: [ColorConstant; 9] = [
    ColorConstant { name: "red", hex: "#FF0000" },
    ColorConstant { name: "green", hex: "#00FF00" },
    ColorConstant { name: "blue", hex: "#0000FF" },
    ColorConstant { name: "yellow", hex: "#FFFF00" },
    ColorConstant { name: "cyan", hex: "#00FFFF" },
    ColorConstant { name: "magenta", hex: "#FF00FF" },
    ColorConstant { name: "white", hex: "#FFFFFF" },
    ColorConstant { name: "black", hex: "#000000" },
    ColorConstant { name: "gray", hex: "#808080" },
];

/// Keyword symbols cached at startup
pub static KEYWORD_SYMBOLS: Lazy<Vec<SymbolEntry>> = Lazy::new(|| {
    KEYWORDS
        .iter()
        .map(|k| {
            SymbolEntry::new(
                k.name,
                SymbolKind::Keyword,
                "keyword",
                format!("**{}** - {}", k.name, k.description),
            )
        })
        .collect()
});

/// Type symbols cached at startup
pub static TYPE_SYMBOLS: Lazy<Vec<SymbolEntry>> = Lazy::new(|| {
    TYPES
        .iter()
        .map(|t| {
            SymbolEntry::new(
                t.name,
                SymbolKind::Type,
                "type",
                format!("**{}** - {}", t.name, t.description),
            )
        })
        .collect()
});

/// Color symbols cached at startup
///
/// These are summaries only: the hex value is attached by [`resolve_color`]
/// when a client asks for it.
pub static COLOR_SYMBOLS: Lazy<Vec<SymbolEntry>> = Lazy::new(|| {
    COLORS
        .iter()
        .map(|c| SymbolEntry::new(c.name, SymbolKind::Color, "color constant", "").with_data(COLOR_TAG))
        .collect()
});

/// Builtin function symbols cached at startup
pub static BUILTIN_SYMBOLS: Lazy<Vec<SymbolEntry>> = Lazy::new(|| {
    BUILTINS
        .iter()
        .map(|b| {
            SymbolEntry::new(
                b.name,
                SymbolKind::BuiltinFunction,
                b.signature,
                builtin_documentation(b),
            )
        })
        .collect()
});

pub fn keyword(name: &str) -> Option<&'static LexiconEntry> {
    KEYWORDS.iter().find(|k| k.name == name)
}

pub fn type_name(name: &str) -> Option<&'static LexiconEntry> {
    TYPES.iter().find(|t| t.name == name)
}

pub fn builtin(name: &str) -> Option<&'static BuiltinFunction> {
    BUILTINS.iter().find(|b| b.name == name)
}

pub fn color_hex(name: &str) -> Option<&'static str> {
    COLORS.iter().find(|c| c.name == name).map(|c| c.hex)
}

/// Markdown shown for a builtin function
pub fn builtin_documentation(builtin: &BuiltinFunction) -> String {
    format!("```mus\n{}\n```\n{}", builtin.signature, builtin.description)
}

/// Extended detail for a color, computed on demand
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorDetail {
    pub detail: String,
    pub documentation: String,
}

/// Compute the hex detail for a color completion
pub fn resolve_color(name: &str) -> Option<ColorDetail> {
    let hex = color_hex(name)?;
    Some(ColorDetail {
        detail: hex.to_string(),
        documentation: format!("**{}** color\n\nHex value: `{}`", name, hex),
    })
}
