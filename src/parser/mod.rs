// Module declarations
pub mod common;
pub mod type_name;
pub mod qualified_name;

// Re-exports for convenience
pub use type_name::parse_type_name;
pub use qualified_name::{QualifiedName, parse_qualified_name, quote_ident};
