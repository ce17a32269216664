// kt_ast/name - Qualified class names and type references
use serde::{Deserialize, Serialize};
use std::fmt;

fn check_identifier(segment: &str, role: &str) {
    assert!(!segment.is_empty(), "{} must not be empty", role);
    assert!(
        !segment.contains('.'),
        "{} {:?} must not contain '.'",
        role,
        segment
    );
}

/// A fully qualified class name: package path plus the nested simple-name
/// path from the top-level class down to the named class.
///
/// An empty package string means the default (unnamed) package. Values are
/// immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassName {
    package_name: String,
    simple_names: Vec<String>,
}

impl ClassName {
    /// Build a top-level class name.
    ///
    /// # Panics
    /// Panics if the simple name is empty or any package segment is empty.
    pub fn new(package_name: impl Into<String>, simple_name: impl Into<String>) -> Self {
        let simple_name = simple_name.into();
        Self::get(&package_name.into(), &[simple_name.as_str()])
    }

    /// Build a (possibly nested) class name from a package and one or more
    /// simple-name path segments, outermost first.
    ///
    /// # Panics
    /// Panics if no simple name is given or any segment is empty.
    pub fn get(package_name: &str, simple_names: &[&str]) -> Self {
        assert!(
            !simple_names.is_empty(),
            "a class name needs at least one simple name"
        );
        if !package_name.is_empty() {
            for segment in package_name.split('.') {
                check_identifier(segment, "package segment");
            }
        }
        for name in simple_names {
            check_identifier(name, "simple name");
        }
        Self {
            package_name: package_name.to_string(),
            simple_names: simple_names.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// The name of a class nested directly inside this one.
    pub fn nested(&self, simple_name: &str) -> Self {
        check_identifier(simple_name, "simple name");
        let mut simple_names = self.simple_names.clone();
        simple_names.push(simple_name.to_string());
        Self {
            package_name: self.package_name.clone(),
            simple_names,
        }
    }

    /// The class this one is nested inside, or `None` for a top-level class.
    pub fn enclosing(&self) -> Option<ClassName> {
        if self.simple_names.len() == 1 {
            return None;
        }
        Some(Self {
            package_name: self.package_name.clone(),
            simple_names: self.simple_names[..self.simple_names.len() - 1].to_vec(),
        })
    }

    /// The outermost class of this name's nesting chain.
    pub fn top_level(&self) -> ClassName {
        Self {
            package_name: self.package_name.clone(),
            simple_names: vec![self.simple_names[0].clone()],
        }
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// The trailing simple name.
    pub fn simple_name(&self) -> &str {
        self.simple_names
            .last()
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// The nested simple-name path, outermost first.
    pub fn simple_names(&self) -> &[String] {
        &self.simple_names
    }

    /// The dotted canonical name. For default-package classes this is the
    /// bare simple-name path.
    pub fn canonical_name(&self) -> String {
        if self.package_name.is_empty() {
            self.simple_names.join(".")
        } else {
            format!("{}.{}", self.package_name, self.simple_names.join("."))
        }
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_name())
    }
}

/// A type reference appearing in a declaration or a code fragment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeName {
    Class(ClassName),
    Parameterized {
        raw: ClassName,
        type_arguments: Vec<TypeName>,
    },
}

impl TypeName {
    /// A generic type application such as `List<Hoverboard>`.
    ///
    /// # Panics
    /// Panics if no type arguments are given.
    pub fn parameterized(raw: ClassName, type_arguments: Vec<TypeName>) -> Self {
        assert!(
            !type_arguments.is_empty(),
            "a parameterized type needs at least one type argument"
        );
        TypeName::Parameterized {
            raw,
            type_arguments,
        }
    }

    /// The class whose name is resolved for this reference: the class
    /// itself, or the raw class of a parameterized type.
    pub fn raw_class(&self) -> &ClassName {
        match self {
            TypeName::Class(name) => name,
            TypeName::Parameterized { raw, .. } => raw,
        }
    }
}

impl From<ClassName> for TypeName {
    fn from(name: ClassName) -> Self {
        TypeName::Class(name)
    }
}
