// kt_ast - Declaration model for Kotlin-flavored source generation
//! This crate provides the declaration model consumed by the code emitter:
//! qualified class names, type references, placeholder code blocks, and the
//! fluent builders that assemble declared types, properties, and methods.
//!
//! The model is pure data. Name resolution, import synthesis, and text
//! layout live in the `kt_codegen` crate.

pub mod code;
pub mod name;
pub mod spec;

pub use code::{CodeBlock, CodeBlockBuilder, CodePart, FormatArg, FormatError};
pub use name::{ClassName, TypeName};
pub use spec::{
    AnnotationSpec, MethodSpec, MethodSpecBuilder, Modifier, ParameterSpec, PropertySpec,
    PropertySpecBuilder, TypeKind, TypeSpec, TypeSpecBuilder,
};
