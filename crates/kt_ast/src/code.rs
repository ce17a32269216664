// kt_ast/code - Placeholder templates for embedded code fragments
use crate::name::{ClassName, TypeName};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Argument supplied to a placeholder template.
///
/// Text arguments satisfy `$L` (raw literal), `$S` (escaped string literal)
/// and `$N` (identifier) placeholders; type arguments satisfy `$T`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FormatArg {
    Text(String),
    Type(TypeName),
}

impl From<&str> for FormatArg {
    fn from(value: &str) -> Self {
        FormatArg::Text(value.to_string())
    }
}

impl From<String> for FormatArg {
    fn from(value: String) -> Self {
        FormatArg::Text(value)
    }
}

impl From<ClassName> for FormatArg {
    fn from(value: ClassName) -> Self {
        FormatArg::Type(TypeName::Class(value))
    }
}

impl From<TypeName> for FormatArg {
    fn from(value: TypeName) -> Self {
        FormatArg::Type(value)
    }
}

/// Error raised for a malformed placeholder template.
///
/// Templates are parsed lazily, so these surface from the build that renders
/// the enclosing file rather than from the fluent assembly calls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("dangling '$' in format string {format:?}")]
    DanglingPlaceholder { format: String },

    #[error("unknown placeholder '${placeholder}' in format string {format:?}")]
    UnknownPlaceholder { placeholder: char, format: String },

    #[error("cannot mix indexed and positional placeholders in format string {format:?}")]
    MixedIndexing { format: String },

    #[error("placeholder index {index} is out of range for {count} argument(s)")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("placeholder '${placeholder}' expects a type, but argument {index} is text")]
    ExpectedTypeArgument { placeholder: char, index: usize },

    #[error("placeholder '${placeholder}' expects text, but argument {index} is a type")]
    ExpectedTextArgument { placeholder: char, index: usize },

    #[error("{unused} argument(s) left unused by format string {format:?}")]
    UnusedArguments { unused: usize, format: String },
}

/// One parsed element of a code block, ready for emission.
#[derive(Debug, Clone, PartialEq)]
pub enum CodePart {
    /// Verbatim template text between placeholders.
    Text(String),
    /// A `$L` raw literal fragment.
    Literal(String),
    /// A `$S` fragment, emitted as an escaped, double-quoted string literal.
    Str(String),
    /// A `$N` identifier fragment.
    Name(String),
    /// A `$T` type reference, resolved against the import tables.
    Type(TypeName),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Piece {
    format: String,
    args: Vec<FormatArg>,
}

/// A fragment of generated code: one or more placeholder templates with
/// their arguments, in written order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CodeBlock {
    pieces: Vec<Piece>,
}

impl CodeBlock {
    pub fn builder() -> CodeBlockBuilder {
        CodeBlockBuilder {
            block: CodeBlock::default(),
        }
    }

    /// A single-template block.
    pub fn of(format: &str, args: impl IntoIterator<Item = FormatArg>) -> Self {
        CodeBlock::builder().add(format, args).build()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Reopen this block for further assembly.
    pub fn to_builder(self) -> CodeBlockBuilder {
        CodeBlockBuilder { block: self }
    }

    /// Parse every template into a flat part stream.
    ///
    /// Adjacent templates contribute to one stream, so a type placeholder at
    /// the end of one template still sees the text that follows it in the
    /// next.
    pub fn parse(&self) -> Result<Vec<CodePart>, FormatError> {
        let mut parts = Vec::new();
        for piece in &self.pieces {
            parse_piece(&piece.format, &piece.args, &mut parts)?;
        }
        Ok(parts)
    }
}

fn text_arg(
    args: &[FormatArg],
    index: usize,
    placeholder: char,
) -> Result<String, FormatError> {
    match &args[index] {
        FormatArg::Text(text) => Ok(text.clone()),
        FormatArg::Type(_) => Err(FormatError::ExpectedTextArgument {
            placeholder,
            index: index + 1,
        }),
    }
}

fn type_arg(
    args: &[FormatArg],
    index: usize,
    placeholder: char,
) -> Result<TypeName, FormatError> {
    match &args[index] {
        FormatArg::Type(type_name) => Ok(type_name.clone()),
        FormatArg::Text(_) => Err(FormatError::ExpectedTypeArgument {
            placeholder,
            index: index + 1,
        }),
    }
}

fn parse_piece(
    format: &str,
    args: &[FormatArg],
    parts: &mut Vec<CodePart>,
) -> Result<(), FormatError> {
    let mut chars = format.chars().peekable();
    let mut text = String::new();
    let mut next_relative = 0usize;
    let mut has_relative = false;
    let mut has_indexed = false;
    let mut used = vec![false; args.len()];

    while let Some(c) = chars.next() {
        if c != '$' {
            text.push(c);
            continue;
        }

        let mut digits = String::new();
        while let Some(d) = chars.peek().copied() {
            if !d.is_ascii_digit() {
                break;
            }
            digits.push(d);
            chars.next();
        }

        let Some(selector) = chars.next() else {
            return Err(FormatError::DanglingPlaceholder {
                format: format.to_string(),
            });
        };

        if selector == '$' && digits.is_empty() {
            text.push('$');
            continue;
        }

        if !matches!(selector, 'L' | 'S' | 'T' | 'N') {
            return Err(FormatError::UnknownPlaceholder {
                placeholder: selector,
                format: format.to_string(),
            });
        }

        let index = if digits.is_empty() {
            has_relative = true;
            let index = next_relative;
            next_relative += 1;
            index
        } else {
            has_indexed = true;
            // Parsing cannot overflow in practice; templates are short.
            let one_based: usize = digits.parse().unwrap_or(usize::MAX);
            if one_based == 0 || one_based > args.len() {
                return Err(FormatError::IndexOutOfRange {
                    index: one_based,
                    count: args.len(),
                });
            }
            one_based - 1
        };

        if has_relative && has_indexed {
            return Err(FormatError::MixedIndexing {
                format: format.to_string(),
            });
        }
        if index >= args.len() {
            return Err(FormatError::IndexOutOfRange {
                index: index + 1,
                count: args.len(),
            });
        }
        used[index] = true;

        if !text.is_empty() {
            parts.push(CodePart::Text(std::mem::take(&mut text)));
        }
        let part = match selector {
            'L' => CodePart::Literal(text_arg(args, index, 'L')?),
            'S' => CodePart::Str(text_arg(args, index, 'S')?),
            'N' => CodePart::Name(text_arg(args, index, 'N')?),
            'T' => CodePart::Type(type_arg(args, index, 'T')?),
            _ => unreachable!(),
        };
        parts.push(part);
    }

    if !text.is_empty() {
        parts.push(CodePart::Text(text));
    }

    let unused = used.iter().filter(|used| !**used).count();
    if unused > 0 {
        return Err(FormatError::UnusedArguments {
            unused,
            format: format.to_string(),
        });
    }
    Ok(())
}

/// Assembles a [`CodeBlock`] from templates and arguments.
#[derive(Debug, Clone, Default)]
pub struct CodeBlockBuilder {
    block: CodeBlock,
}

impl CodeBlockBuilder {
    /// Splice a raw template fragment.
    pub fn add(mut self, format: &str, args: impl IntoIterator<Item = FormatArg>) -> Self {
        self.block.pieces.push(Piece {
            format: format.to_string(),
            args: args.into_iter().collect(),
        });
        self
    }

    /// Add a statement: the template followed by a line terminator.
    pub fn add_statement(self, format: &str, args: impl IntoIterator<Item = FormatArg>) -> Self {
        let mut format = format.to_string();
        format.push('\n');
        let mut builder = self;
        builder.block.pieces.push(Piece {
            format,
            args: args.into_iter().collect(),
        });
        builder
    }

    pub fn build(self) -> CodeBlock {
        self.block
    }
}
