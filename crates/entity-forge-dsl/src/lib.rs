//! # entity-forge-dsl
//!
//! Parser and printer for the entity schema language.
//!
//! This crate provides:
//! - A lenient single-pass line parser producing [`Entity`] values
//! - A lint pass reporting every line the lenient parser tolerated
//! - A printer that renders entities back to canonical DSL text
//!
//! # Example
//!
//! ```
//! use entity_forge_dsl::{lint, parse, print};
//!
//! let source = r#"
//! ## accounts
//! entity User {
//!     username: string @NotNull
//!     age: integer;
//! }
//! "#;
//!
//! let entities = parse(source);
//! assert_eq!(entities.len(), 1);
//! assert_eq!(entities[0].name.as_str(), "User");
//! assert_eq!(entities[0].fields[1].type_name, "integer");
//! assert!(lint(source).is_empty());
//!
//! let dsl_text = print(&entities[0]);
//! assert!(dsl_text.contains("username: string @NotNull"));
//! ```
//!
//! [`Entity`]: entity_forge_core::types::Entity

pub mod error;
mod line;
pub mod parser;
pub mod printer;

pub use error::{DslError, ReadError, Span};
pub use parser::{lint, parse, parse_file, parse_reader, parse_strict, parse_with_findings};
pub use printer::{print, print_all};
