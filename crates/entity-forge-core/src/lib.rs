//! # entity-forge-core
//!
//! Data model shared by the entity-forge parser and code generator.
//!
//! A schema is an ordered list of [`Entity`](types::Entity) values, each
//! holding its [`Field`](types::Field)s in declaration order. Values are
//! built once by the parser and then only read.

pub mod error;
pub mod types;

pub use error::SchemaError;
