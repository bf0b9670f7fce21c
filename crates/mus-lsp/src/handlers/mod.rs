pub mod completion;
pub mod hover;
pub mod resolve;
pub mod signature_help;
pub mod symbols;
