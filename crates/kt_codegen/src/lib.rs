// kt_codegen - Name resolution, import synthesis, and source emission
//! Turns a [`kt_ast`] declaration tree into a complete, compilable source
//! file. The core is the name-resolution engine: for every type or
//! static-member reference it decides between a short and a fully qualified
//! rendering, honoring lexical shadowing by nested declarations and
//! first-use priority for the import table, then synthesizes the sorted
//! import blocks.
//!
//! ```
//! use kt_ast::{ClassName, PropertySpec, TypeSpec};
//! use kt_codegen::KotlinFile;
//!
//! let taco = TypeSpec::class_builder("Taco")
//!     .add_property(PropertySpec::new(
//!         "madeFreshDate",
//!         ClassName::new("java.util", "Date"),
//!     ))
//!     .build();
//! let file = KotlinFile::builder("com.squareup.tacos", taco).build();
//! let source = file.to_source().unwrap();
//! assert!(source.contains("import java.util.Date"));
//! assert!(source.contains("madeFreshDate: Date;"));
//! ```

mod config;
mod error;
mod file;
mod resolver;
mod scope;
mod writer;

pub use config::CodeGenConfig;
pub use error::CodeGenError;
pub use file::{KotlinFile, KotlinFileBuilder};
pub use resolver::{Reference, RenderingDecision, Resolver, StaticImport, StaticImportTable};
pub use scope::{ScopeId, ScopeTree};
pub use writer::{CodeWriter, SourceWriter};
