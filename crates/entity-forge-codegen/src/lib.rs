//! # entity-forge-codegen
//!
//! Generates one Java class per entity: private members, a no-argument
//! constructor, and a getter/setter pair per field.
//!
//! [`render_entity`] is pure and returns the source text. [`Generator`]
//! writes files into an output directory, either stopping at the first
//! failure ([`Generator::generate`]) or recording each entity's outcome
//! ([`Generator::generate_each`]).
//!
//! # Example
//!
//! ```
//! use entity_forge_codegen::{render_entity, GeneratorOptions};
//!
//! let entities = entity_forge_dsl::parse("entity User {\n  age: integer\n}\n");
//! let code = render_entity(&entities[0], &GeneratorOptions::default()).unwrap();
//! assert!(code.contains("public class User {"));
//! assert!(code.contains("public Integer getAge() {"));
//! ```

pub mod error;
pub mod generator;
pub mod options;
pub mod render;
pub mod type_map;

pub use error::CodegenError;
pub use generator::{EntityOutcome, GenerationReport, Generator};
pub use options::GeneratorOptions;
pub use render::render_entity;
pub use type_map::{java_type, java_type_for_token, JavaType};
