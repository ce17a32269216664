// kt_ast/spec - Declared-type model and fluent builders
use crate::code::{CodeBlock, FormatArg};
use crate::name::{ClassName, TypeName};
use serde::{Deserialize, Serialize};

/// Declaration modifiers, rendered lowercase in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Abstract,
    Static,
    Final,
}

impl Modifier {
    pub fn keyword(self) -> &'static str {
        match self {
            Modifier::Public => "public",
            Modifier::Protected => "protected",
            Modifier::Private => "private",
            Modifier::Abstract => "abstract",
            Modifier::Static => "static",
            Modifier::Final => "final",
        }
    }
}

/// An annotation applied to a type, property, or method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationSpec {
    pub type_name: ClassName,
    /// Argument fragments, rendered comma-separated inside parentheses.
    #[serde(default)]
    pub members: Vec<CodeBlock>,
}

impl AnnotationSpec {
    pub fn get(type_name: ClassName) -> Self {
        Self {
            type_name,
            members: Vec::new(),
        }
    }

    pub fn add_member(mut self, member: CodeBlock) -> Self {
        self.members.push(member);
        self
    }
}

impl From<ClassName> for AnnotationSpec {
    fn from(type_name: ClassName) -> Self {
        AnnotationSpec::get(type_name)
    }
}

/// A single method or constructor parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSpec {
    pub name: String,
    pub type_name: TypeName,
}

impl ParameterSpec {
    /// # Panics
    /// Panics if the parameter name is empty.
    pub fn new(name: impl Into<String>, type_name: impl Into<TypeName>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "parameter name must not be empty");
        Self {
            name,
            type_name: type_name.into(),
        }
    }
}

/// A declared property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySpec {
    pub name: String,
    pub type_name: TypeName,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    #[serde(default)]
    pub annotations: Vec<AnnotationSpec>,
    #[serde(default)]
    pub initializer: Option<CodeBlock>,
}

impl PropertySpec {
    /// A plain property with no modifiers and no initializer.
    pub fn new(name: impl Into<String>, type_name: impl Into<TypeName>) -> Self {
        PropertySpec::builder(name, type_name).build()
    }

    /// # Panics
    /// Panics if the property name is empty.
    pub fn builder(name: impl Into<String>, type_name: impl Into<TypeName>) -> PropertySpecBuilder {
        let name = name.into();
        assert!(!name.is_empty(), "property name must not be empty");
        PropertySpecBuilder {
            spec: PropertySpec {
                name,
                type_name: type_name.into(),
                modifiers: Vec::new(),
                annotations: Vec::new(),
                initializer: None,
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct PropertySpecBuilder {
    spec: PropertySpec,
}

impl PropertySpecBuilder {
    pub fn add_modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.spec.modifiers.extend(modifiers);
        self
    }

    pub fn add_annotation(mut self, annotation: impl Into<AnnotationSpec>) -> Self {
        self.spec.annotations.push(annotation.into());
        self
    }

    pub fn initializer(mut self, initializer: CodeBlock) -> Self {
        self.spec.initializer = Some(initializer);
        self
    }

    pub fn build(self) -> PropertySpec {
        self.spec
    }
}

/// A declared method, constructor, or abstract signature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodSpec {
    pub name: String,
    pub constructor: bool,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    #[serde(default)]
    pub annotations: Vec<AnnotationSpec>,
    #[serde(default)]
    pub parameters: Vec<ParameterSpec>,
    #[serde(default)]
    pub returns: Option<TypeName>,
    /// Whether the trailing parameter is a vararg.
    #[serde(default)]
    pub varargs: bool,
    #[serde(default)]
    pub code: CodeBlock,
}

impl MethodSpec {
    /// # Panics
    /// Panics if the method name is empty.
    pub fn method_builder(name: impl Into<String>) -> MethodSpecBuilder {
        let name = name.into();
        assert!(!name.is_empty(), "method name must not be empty");
        MethodSpecBuilder::new(name, false)
    }

    pub fn constructor_builder() -> MethodSpecBuilder {
        MethodSpecBuilder::new("<init>".to_string(), true)
    }
}

impl From<&MethodSpec> for FormatArg {
    fn from(method: &MethodSpec) -> Self {
        FormatArg::Text(method.name.clone())
    }
}

#[derive(Debug, Clone)]
pub struct MethodSpecBuilder {
    spec: MethodSpec,
    code: CodeBlock,
}

impl MethodSpecBuilder {
    fn new(name: String, constructor: bool) -> Self {
        Self {
            spec: MethodSpec {
                name,
                constructor,
                modifiers: Vec::new(),
                annotations: Vec::new(),
                parameters: Vec::new(),
                returns: None,
                varargs: false,
                code: CodeBlock::default(),
            },
            code: CodeBlock::default(),
        }
    }

    pub fn add_modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.spec.modifiers.extend(modifiers);
        self
    }

    pub fn add_annotation(mut self, annotation: impl Into<AnnotationSpec>) -> Self {
        self.spec.annotations.push(annotation.into());
        self
    }

    pub fn add_parameter(mut self, name: impl Into<String>, type_name: impl Into<TypeName>) -> Self {
        self.spec.parameters.push(ParameterSpec::new(name, type_name));
        self
    }

    pub fn returns(mut self, type_name: impl Into<TypeName>) -> Self {
        self.spec.returns = Some(type_name.into());
        self
    }

    pub fn varargs(mut self, varargs: bool) -> Self {
        self.spec.varargs = varargs;
        self
    }

    /// Splice a raw code fragment into the body.
    pub fn add_code(mut self, format: &str, args: impl IntoIterator<Item = FormatArg>) -> Self {
        self.code = std::mem::take(&mut self.code).to_builder().add(format, args).build();
        self
    }

    /// Add one body statement.
    pub fn add_statement(
        mut self,
        format: &str,
        args: impl IntoIterator<Item = FormatArg>,
    ) -> Self {
        self.code = std::mem::take(&mut self.code)
            .to_builder()
            .add_statement(format, args)
            .build();
        self
    }

    pub fn build(mut self) -> MethodSpec {
        self.spec.code = self.code;
        self.spec
    }
}

/// The kind of a declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeKind {
    Class,
    Interface,
}

/// A declared type: kind, header clauses, members, and nested types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeSpec {
    pub kind: TypeKind,
    pub name: String,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    #[serde(default)]
    pub annotations: Vec<AnnotationSpec>,
    #[serde(default)]
    pub superclass: Option<TypeName>,
    #[serde(default)]
    pub superinterfaces: Vec<TypeName>,
    #[serde(default)]
    pub properties: Vec<PropertySpec>,
    #[serde(default)]
    pub static_block: Option<CodeBlock>,
    /// Constructors and methods, in declaration order.
    #[serde(default)]
    pub methods: Vec<MethodSpec>,
    /// Directly nested types, in declaration order. Simple names must be
    /// unique among siblings; the emitter does not re-check this.
    #[serde(default)]
    pub types: Vec<TypeSpec>,
}

impl TypeSpec {
    /// # Panics
    /// Panics if the type name is empty.
    pub fn class_builder(name: impl Into<String>) -> TypeSpecBuilder {
        TypeSpecBuilder::new(TypeKind::Class, name.into())
    }

    /// # Panics
    /// Panics if the type name is empty.
    pub fn interface_builder(name: impl Into<String>) -> TypeSpecBuilder {
        TypeSpecBuilder::new(TypeKind::Interface, name.into())
    }
}

#[derive(Debug, Clone)]
pub struct TypeSpecBuilder {
    spec: TypeSpec,
}

impl TypeSpecBuilder {
    fn new(kind: TypeKind, name: String) -> Self {
        assert!(!name.is_empty(), "type name must not be empty");
        Self {
            spec: TypeSpec {
                kind,
                name,
                modifiers: Vec::new(),
                annotations: Vec::new(),
                superclass: None,
                superinterfaces: Vec::new(),
                properties: Vec::new(),
                static_block: None,
                methods: Vec::new(),
                types: Vec::new(),
            },
        }
    }

    pub fn add_modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.spec.modifiers.extend(modifiers);
        self
    }

    pub fn add_annotation(mut self, annotation: impl Into<AnnotationSpec>) -> Self {
        self.spec.annotations.push(annotation.into());
        self
    }

    pub fn superclass(mut self, type_name: impl Into<TypeName>) -> Self {
        self.spec.superclass = Some(type_name.into());
        self
    }

    pub fn add_superinterface(mut self, type_name: impl Into<TypeName>) -> Self {
        self.spec.superinterfaces.push(type_name.into());
        self
    }

    pub fn add_property(mut self, property: PropertySpec) -> Self {
        self.spec.properties.push(property);
        self
    }

    pub fn static_block(mut self, code: CodeBlock) -> Self {
        self.spec.static_block = Some(code);
        self
    }

    pub fn add_method(mut self, method: MethodSpec) -> Self {
        self.spec.methods.push(method);
        self
    }

    pub fn add_type(mut self, type_spec: TypeSpec) -> Self {
        self.spec.types.push(type_spec);
        self
    }

    pub fn build(self) -> TypeSpec {
        self.spec
    }
}
