// kt_codegen/file - File-level builder and the two-pass build
use crate::config::CodeGenConfig;
use crate::error::CodeGenError;
use crate::resolver::{Resolver, StaticImport, StaticImportTable};
use crate::scope::ScopeTree;
use crate::writer::CodeWriter;
use indexmap::IndexSet;
use kt_ast::{ClassName, TypeSpec};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// A complete source file: package, optional header comment, declared
/// static imports, and one or more top-level types.
///
/// Building the file runs two passes over the identical declaration walk:
/// a collection pass discovers every reference and populates the first-use
/// import candidates, then the frozen tables drive the emission pass. The
/// output is deterministic for identical inputs.
#[derive(Debug, Clone)]
pub struct KotlinFile {
    pub(crate) package_name: String,
    pub(crate) file_comment: String,
    pub(crate) types: Vec<TypeSpec>,
    pub(crate) static_imports: IndexSet<StaticImport>,
    pub(crate) config: CodeGenConfig,
}

impl KotlinFile {
    /// Start a file in the given package (empty for the default package)
    /// with its first top-level type.
    pub fn builder(package_name: impl Into<String>, type_spec: TypeSpec) -> KotlinFileBuilder {
        KotlinFileBuilder {
            file: KotlinFile {
                package_name: package_name.into(),
                file_comment: String::new(),
                types: vec![type_spec],
                static_imports: IndexSet::new(),
                config: CodeGenConfig::default(),
            },
        }
    }

    /// Render the file.
    pub fn to_source(&self) -> Result<String, CodeGenError> {
        let scopes = ScopeTree::build(&self.package_name, &self.types);
        let static_imports = StaticImportTable::from_declarations(&self.static_imports);

        // Collection pass: same walk as emission, output discarded.
        let mut resolver = Resolver::collecting(&scopes, &self.package_name, &static_imports);
        let mut collector = CodeWriter::new(&self.config.indent, &scopes, &mut resolver);
        collector.emit_file(self)?;

        let mut resolver = resolver.freeze();
        let mut writer = CodeWriter::new(&self.config.indent, &scopes, &mut resolver);
        writer.emit_file(self)?;
        Ok(writer.into_source())
    }

    /// Write the file under `directory`, creating one subdirectory per
    /// package segment. The file is named after the first top-level type.
    pub fn write_to(&self, directory: &Path) -> Result<PathBuf, CodeGenError> {
        let source = self.to_source()?;
        let mut path = directory.to_path_buf();
        if !self.package_name.is_empty() {
            for segment in self.package_name.split('.') {
                path.push(segment);
            }
        }
        fs::create_dir_all(&path)?;
        path.push(format!("{}.kt", self.types[0].name));
        fs::write(&path, source)?;
        Ok(path)
    }
}

impl fmt::Display for KotlinFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = self.to_source().map_err(|_| fmt::Error)?;
        f.write_str(&source)
    }
}

/// Assembles a [`KotlinFile`].
#[derive(Debug, Clone)]
pub struct KotlinFileBuilder {
    file: KotlinFile,
}

impl KotlinFileBuilder {
    /// Append header comment text. Line breaks are preserved, including
    /// leading and trailing empty lines.
    pub fn add_file_comment(mut self, text: &str) -> Self {
        self.file.file_comment.push_str(text);
        self
    }

    /// Add a further top-level type.
    pub fn add_type(mut self, type_spec: TypeSpec) -> Self {
        self.file.types.push(type_spec);
        self
    }

    /// Declare a static import for `owner`'s `member`, or every member with
    /// `"*"`. All declared static imports are emitted, used or not.
    ///
    /// Whether two wildcard owners both export a member of the same name is
    /// unknowable here (no symbol information is consulted); both imports
    /// are emitted verbatim, and member elision in code fragments only ever
    /// matches the owner the fragment itself names.
    pub fn add_static_import(mut self, owner: ClassName, member: &str) -> Self {
        self.file
            .static_imports
            .insert(StaticImport::new(owner, member));
        self
    }

    /// Suppress `import` lines for `java.lang` types. They still occupy
    /// their simple-name slot, so conflicting types render fully qualified.
    pub fn skip_java_lang_imports(mut self, skip: bool) -> Self {
        self.file.config.skip_java_lang_imports = skip;
        self
    }

    pub fn indent(mut self, indent: &str) -> Self {
        self.file.config.indent = indent.to_string();
        self
    }

    pub fn config(mut self, config: CodeGenConfig) -> Self {
        self.file.config = config;
        self
    }

    pub fn build(self) -> KotlinFile {
        self.file
    }
}
