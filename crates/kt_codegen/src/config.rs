use serde::{Deserialize, Serialize};

/// Configuration options that drive source emission behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeGenConfig {
    /// Indentation string used when pretty-printing generated source.
    pub indent: String,
    /// Suppress `import` lines for `java.lang` types. Suppressed types
    /// still take part in simple-name resolution, so a later type with the
    /// same simple name renders fully qualified.
    pub skip_java_lang_imports: bool,
}

impl Default for CodeGenConfig {
    fn default() -> Self {
        Self {
            indent: "  ".to_string(),
            skip_java_lang_imports: false,
        }
    }
}
