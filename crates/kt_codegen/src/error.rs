use kt_ast::FormatError;
use thiserror::Error;

/// Error variants produced while rendering a source file.
#[derive(Debug, Error)]
pub enum CodeGenError {
    /// A code block carried a malformed placeholder template.
    #[error("invalid code template: {0}")]
    Format(#[from] FormatError),

    /// Raised by [`crate::KotlinFile::write_to`].
    #[error("failed to write source file: {0}")]
    Io(#[from] std::io::Error),
}
