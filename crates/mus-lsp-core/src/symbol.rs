//! Symbol records shared by the lexicon and the document extractor

use std::ops::Range;

/// Auxiliary tag carried by color entries; their hex detail is attached on resolve
pub const COLOR_TAG: &str = "color";

/// The kind of a symbol
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Variable,
    Function,
    Class,
    Keyword,
    Type,
    Color,
    BuiltinFunction,
}

impl SymbolKind {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolKind::Variable => "variable",
            SymbolKind::Function => "function",
            SymbolKind::Class => "class",
            SymbolKind::Keyword => "keyword",
            SymbolKind::Type => "type",
            SymbolKind::Color => "color",
            SymbolKind::BuiltinFunction => "builtin",
        }
    }
}

/// A named symbol with the metadata shown to the user
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolEntry {
    pub name: String,
    pub kind: SymbolKind,
    /// Short one-line description
    pub detail: String,
    /// Markdown long-form description
    pub documentation: String,
    /// Tag naming the detail to compute lazily, if any
    pub data: Option<String>,
    /// Raw parameter text of a document function
    pub parameters: Option<String>,
    /// Byte range of the declared name, for document symbols
    pub name_range: Option<Range<usize>>,
}

impl SymbolEntry {
    pub fn new(
        name: impl Into<String>,
        kind: SymbolKind,
        detail: impl Into<String>,
        documentation: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            detail: detail.into(),
            documentation: documentation.into(),
            data: None,
            parameters: None,
            name_range: None,
        }
    }

    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    pub fn with_parameters(mut self, parameters: impl Into<String>) -> Self {
        self.parameters = Some(parameters.into());
        self
    }

    pub fn with_name_range(mut self, range: Range<usize>) -> Self {
        self.name_range = Some(range);
        self
    }
}

/// Symbols declared in one document, as found by the last full scan
///
/// Each list keeps the order in which declarations appear in the text.
/// Names are not de-duplicated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentSymbolTable {
    pub variables: Vec<SymbolEntry>,
    pub functions: Vec<SymbolEntry>,
    pub classes: Vec<SymbolEntry>,
}

impl DocumentSymbolTable {
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty() && self.functions.is_empty() && self.classes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.variables.len() + self.functions.len() + self.classes.len()
    }

    /// All entries: variables, then functions, then classes
    pub fn iter(&self) -> impl Iterator<Item = &SymbolEntry> {
        self.variables
            .iter()
            .chain(self.functions.iter())
            .chain(self.classes.iter())
    }

    pub fn find_variable(&self, name: &str) -> Option<&SymbolEntry> {
        self.variables.iter().find(|v| v.name == name)
    }

    pub fn find_function(&self, name: &str) -> Option<&SymbolEntry> {
        self.functions.iter().find(|f| f.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_kind_as_str() {
        assert_eq!(SymbolKind::Variable.as_str(), "variable");
        assert_eq!(SymbolKind::BuiltinFunction.as_str(), "builtin");
        assert_eq!(SymbolKind::Color.as_str(), "color");
    }

    #[test]
    fn test_table_iter_order() {
        let table = DocumentSymbolTable {
            variables: vec![SymbolEntry::new("x", SymbolKind::Variable, "", "")],
            functions: vec![SymbolEntry::new("f", SymbolKind::Function, "", "")],
            classes: vec![SymbolEntry::new("C", SymbolKind::Class, "", "")],
        };

        let names: Vec<&str> = table.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["x", "f", "C"]);
        assert_eq!(table.len(), 3);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_find_returns_first_duplicate() {
        let table = DocumentSymbolTable {
            functions: vec![
                SymbolEntry::new("f", SymbolKind::Function, "fun f(a)", ""),
                SymbolEntry::new("f", SymbolKind::Function, "fun f(a, b)", ""),
            ],
            ..Default::default()
        };

        assert_eq!(table.find_function("f").unwrap().detail, "fun f(a)");
        assert!(table.find_variable("f").is_none());
    }
}
