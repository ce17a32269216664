// kt_codegen/writer - Indentation-aware sink and the declaration emitter
use crate::error::CodeGenError;
use crate::file::KotlinFile;
use crate::resolver::Resolver;
use crate::scope::{ScopeId, ScopeTree};
use kt_ast::{
    AnnotationSpec, CodeBlock, CodePart, MethodSpec, Modifier, PropertySpec, TypeKind, TypeName,
    TypeSpec,
};

/// Utility that incrementally constructs source text with indentation
/// handling. Indentation is applied lazily, when the first character of a
/// line is written, so blank lines stay empty and multi-line fragments
/// re-indent on every line.
#[derive(Debug, Default, Clone)]
pub struct SourceWriter {
    content: String,
    indent_level: usize,
    indent: String,
    trailing_newline: bool,
}

impl SourceWriter {
    pub fn new(indent: String) -> Self {
        Self {
            content: String::new(),
            indent_level: 0,
            indent,
            trailing_newline: true,
        }
    }

    pub fn emit(&mut self, text: &str) {
        for c in text.chars() {
            if c == '\n' {
                self.content.push('\n');
                self.trailing_newline = true;
                continue;
            }
            if self.trailing_newline {
                for _ in 0..self.indent_level {
                    self.content.push_str(&self.indent);
                }
                self.trailing_newline = false;
            }
            self.content.push(c);
        }
    }

    pub fn push_line(&mut self, line: &str) {
        self.emit(line);
        self.newline();
    }

    pub fn newline(&mut self) {
        self.emit("\n");
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    pub fn build(self) -> String {
        self.content
    }
}

/// Escape special characters for a double-quoted string literal.
///
/// Handles: backslash, double quotes, newline, carriage return, tab.
fn escape_string(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// The leading `.member` of a code fragment, if it starts with one.
fn leading_member(text: &str) -> Option<&str> {
    let rest = text.strip_prefix('.')?;
    let mut end = 0;
    for (offset, c) in rest.char_indices() {
        let is_part = c.is_ascii_alphanumeric() || c == '_' || c == '$';
        if offset == 0 && (c.is_ascii_digit() || !is_part) {
            return None;
        }
        if !is_part {
            break;
        }
        end = offset + c.len_utf8();
    }
    if end == 0 {
        return None;
    }
    Some(&rest[..end])
}

/// Walks the declared types and their embedded code in declaration order,
/// rendering every reference through the resolver. The same walk runs
/// twice per build: once against a collecting resolver to discover the
/// import tables, then against the frozen resolver to produce the output.
pub struct CodeWriter<'r, 'a> {
    out: SourceWriter,
    scopes: &'a ScopeTree,
    resolver: &'r mut Resolver<'a>,
    scope: ScopeId,
}

impl<'r, 'a> CodeWriter<'r, 'a> {
    pub fn new(indent: &str, scopes: &'a ScopeTree, resolver: &'r mut Resolver<'a>) -> Self {
        Self {
            out: SourceWriter::new(indent.to_string()),
            scopes,
            resolver,
            scope: ScopeTree::ROOT,
        }
    }

    pub fn into_source(self) -> String {
        self.out.build()
    }

    pub fn emit_file(&mut self, file: &KotlinFile) -> Result<(), CodeGenError> {
        if !file.file_comment.is_empty() {
            for segment in file.file_comment.split('\n') {
                if segment.is_empty() {
                    self.out.push_line("//");
                } else {
                    self.out.emit("// ");
                    self.out.push_line(segment);
                }
            }
        }

        if !file.package_name.is_empty() {
            self.out.emit("package ");
            self.out.push_line(&file.package_name);
            self.out.newline();
        }

        if !file.static_imports.is_empty() {
            let lines: Vec<String> = self
                .resolver
                .static_import_table()
                .lines()
                .map(str::to_string)
                .collect();
            for line in lines {
                self.out.emit("import static ");
                self.out.push_line(&line);
            }
            self.out.newline();
        }

        let type_imports = self
            .resolver
            .type_import_lines(file.config.skip_java_lang_imports);
        if !type_imports.is_empty() {
            for line in &type_imports {
                self.out.emit("import ");
                self.out.push_line(line);
            }
            self.out.newline();
        }

        for (index, spec) in file.types.iter().enumerate() {
            if index > 0 {
                self.out.newline();
            }
            self.emit_type(spec)?;
        }
        Ok(())
    }

    fn emit_type(&mut self, spec: &TypeSpec) -> Result<(), CodeGenError> {
        // Annotations and header clauses resolve in the enclosing scope;
        // the type's own scope opens at the brace.
        for annotation in &spec.annotations {
            self.emit_annotation(annotation)?;
        }

        let mut header = String::new();
        for modifier in &spec.modifiers {
            header.push_str(modifier.keyword());
            header.push(' ');
        }
        header.push_str(match spec.kind {
            TypeKind::Class => "class ",
            TypeKind::Interface => "interface ",
        });
        header.push_str(&spec.name);

        if let Some(superclass) = &spec.superclass {
            header.push_str(" extends ");
            header.push_str(&self.render_type_name(superclass));
        }
        if !spec.superinterfaces.is_empty() {
            header.push_str(match spec.kind {
                TypeKind::Class => " implements ",
                TypeKind::Interface => " extends ",
            });
            let rendered: Vec<String> = spec
                .superinterfaces
                .iter()
                .map(|name| self.render_type_name(name))
                .collect();
            header.push_str(&rendered.join(", "));
        }
        header.push_str(" {");
        self.out.push_line(&header);

        let enclosing = self.scope;
        self.scope = self.scopes.child(enclosing, &spec.name);
        self.out.indent();

        let mut first_member = true;
        if let Some(static_block) = &spec.static_block {
            self.member_gap(&mut first_member);
            self.out.push_line("static {");
            self.out.indent();
            self.emit_code(static_block)?;
            self.out.dedent();
            self.out.push_line("}");
        }
        for property in &spec.properties {
            self.member_gap(&mut first_member);
            self.emit_property(property)?;
        }
        for method in spec.methods.iter().filter(|method| method.constructor) {
            self.member_gap(&mut first_member);
            self.emit_method(method)?;
        }
        for method in spec.methods.iter().filter(|method| !method.constructor) {
            self.member_gap(&mut first_member);
            self.emit_method(method)?;
        }
        for nested in &spec.types {
            self.member_gap(&mut first_member);
            self.emit_type(nested)?;
        }

        self.out.dedent();
        self.out.push_line("}");
        self.scope = enclosing;
        Ok(())
    }

    fn member_gap(&mut self, first_member: &mut bool) {
        if !*first_member {
            self.out.newline();
        }
        *first_member = false;
    }

    fn emit_annotation(&mut self, annotation: &AnnotationSpec) -> Result<(), CodeGenError> {
        let decision = self
            .resolver
            .resolve_type(self.scope, &annotation.type_name);
        self.out.emit("@");
        self.out.emit(&decision.render(&annotation.type_name));
        if !annotation.members.is_empty() {
            self.out.emit("(");
            for (index, member) in annotation.members.iter().enumerate() {
                if index > 0 {
                    self.out.emit(", ");
                }
                self.emit_code(member)?;
            }
            self.out.emit(")");
        }
        self.out.newline();
        Ok(())
    }

    fn emit_property(&mut self, property: &PropertySpec) -> Result<(), CodeGenError> {
        for annotation in &property.annotations {
            self.emit_annotation(annotation)?;
        }
        let mut line = String::new();
        for modifier in &property.modifiers {
            line.push_str(modifier.keyword());
            line.push(' ');
        }
        line.push_str(&property.name);
        line.push_str(": ");
        line.push_str(&self.render_type_name(&property.type_name));
        self.out.emit(&line);
        if let Some(initializer) = &property.initializer {
            self.out.emit(" = ");
            self.emit_code(initializer)?;
        }
        self.out.push_line(";");
        Ok(())
    }

    fn emit_method(&mut self, method: &MethodSpec) -> Result<(), CodeGenError> {
        for annotation in &method.annotations {
            self.emit_annotation(annotation)?;
        }

        let mut signature = String::new();
        for modifier in &method.modifiers {
            signature.push_str(modifier.keyword());
            signature.push(' ');
        }
        if method.constructor {
            signature.push_str("constructor(");
        } else {
            signature.push_str("fun ");
            signature.push_str(&method.name);
            signature.push('(');
        }
        for (index, parameter) in method.parameters.iter().enumerate() {
            if index > 0 {
                signature.push_str(", ");
            }
            if method.varargs && index == method.parameters.len() - 1 {
                signature.push_str("vararg ");
            }
            signature.push_str(&parameter.name);
            signature.push_str(": ");
            signature.push_str(&self.render_type_name(&parameter.type_name));
        }
        signature.push(')');
        if !method.constructor {
            if let Some(returns) = &method.returns {
                signature.push_str(": ");
                signature.push_str(&self.render_type_name(returns));
            }
        }

        if method.modifiers.contains(&Modifier::Abstract) && method.code.is_empty() {
            signature.push(';');
            self.out.push_line(&signature);
            return Ok(());
        }

        signature.push_str(" {");
        self.out.push_line(&signature);
        self.out.indent();
        self.emit_code(&method.code)?;
        self.out.dedent();
        self.out.push_line("}");
        Ok(())
    }

    fn render_type_name(&mut self, type_name: &TypeName) -> String {
        match type_name {
            TypeName::Class(target) => {
                let decision = self.resolver.resolve_type(self.scope, target);
                decision.render(target)
            }
            TypeName::Parameterized {
                raw,
                type_arguments,
            } => {
                let decision = self.resolver.resolve_type(self.scope, raw);
                let mut rendered = decision.render(raw);
                rendered.push('<');
                for (index, argument) in type_arguments.iter().enumerate() {
                    if index > 0 {
                        rendered.push_str(", ");
                    }
                    rendered.push_str(&self.render_type_name(argument));
                }
                rendered.push('>');
                rendered
            }
        }
    }

    fn emit_code(&mut self, code: &CodeBlock) -> Result<(), CodeGenError> {
        let parts = code.parse()?;
        let mut index = 0;
        while index < parts.len() {
            match &parts[index] {
                CodePart::Text(text) => self.out.emit(text),
                CodePart::Literal(literal) => self.out.emit(literal),
                CodePart::Name(name) => self.out.emit(name),
                CodePart::Str(value) => {
                    self.out.emit("\"");
                    self.out.emit(&escape_string(value));
                    self.out.emit("\"");
                }
                CodePart::Type(type_name) => {
                    // A class reference followed by `.member` renders as the
                    // bare member when a static import covers it; the owner
                    // is elided and never becomes an import candidate.
                    if let TypeName::Class(owner) = type_name {
                        if let Some(CodePart::Text(next)) = parts.get(index + 1) {
                            if let Some(member) = leading_member(next) {
                                if self.resolver.resolve_static(owner, member) {
                                    let rest = &next[1..];
                                    self.out.emit(rest);
                                    index += 2;
                                    continue;
                                }
                            }
                        }
                    }
                    let rendered = self.render_type_name(type_name);
                    self.out.emit(&rendered);
                }
            }
            index += 1;
        }
        Ok(())
    }
}
