// kt_codegen/scope - Tree mirroring the nesting of declared types
use kt_ast::{ClassName, TypeSpec};
use std::collections::HashMap;

/// Identifies a node in a [`ScopeTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(usize);

#[derive(Debug)]
struct ScopeNode {
    /// Qualified name of the declared type; `None` for the file root.
    name: Option<ClassName>,
    parent: Option<ScopeId>,
    /// Direct children by simple name. Sibling names are unique by
    /// assembly-API contract; this is not re-checked here.
    children_by_name: HashMap<String, ScopeId>,
}

/// A tree with one node per declared type plus a synthetic file-root node
/// whose children are the file's top-level types. Built once per build and
/// read-only afterwards.
#[derive(Debug)]
pub struct ScopeTree {
    nodes: Vec<ScopeNode>,
}

impl ScopeTree {
    pub const ROOT: ScopeId = ScopeId(0);

    /// Mirror the declaration nesting of the given top-level types.
    pub fn build(package_name: &str, types: &[TypeSpec]) -> Self {
        let mut tree = ScopeTree {
            nodes: vec![ScopeNode {
                name: None,
                parent: None,
                children_by_name: HashMap::new(),
            }],
        };
        for spec in types {
            let qualified = ClassName::get(package_name, &[spec.name.as_str()]);
            tree.insert(Self::ROOT, qualified, spec);
        }
        tree
    }

    fn insert(&mut self, parent: ScopeId, qualified: ClassName, spec: &TypeSpec) -> ScopeId {
        let id = ScopeId(self.nodes.len());
        self.nodes.push(ScopeNode {
            name: Some(qualified.clone()),
            parent: Some(parent),
            children_by_name: HashMap::new(),
        });
        self.nodes[parent.0]
            .children_by_name
            .insert(spec.name.clone(), id);
        for nested in &spec.types {
            let child_name = qualified.nested(&nested.name);
            self.insert(id, child_name, nested);
        }
        id
    }

    /// The scope of a type declared directly inside `scope`.
    ///
    /// # Panics
    /// Panics if no such child exists; the tree is built from the same
    /// declarations the emitter walks, so a miss is a caller bug.
    pub fn child(&self, scope: ScopeId, simple_name: &str) -> ScopeId {
        self.nodes[scope.0].children_by_name[simple_name]
    }

    /// The qualified name of the type a scope represents, or `None` for the
    /// file root.
    pub fn qualified_name(&self, scope: ScopeId) -> Option<&ClassName> {
        self.nodes[scope.0].name.as_ref()
    }

    /// Resolve a simple name lexically: walk the ancestor chain from
    /// `scope` to the file root and return the first ancestor's direct
    /// child with that name. Only direct children count; a type nested two
    /// levels below an ancestor is not visible.
    pub fn resolve(&self, scope: ScopeId, simple_name: &str) -> Option<&ClassName> {
        let mut current = Some(scope);
        while let Some(id) = current {
            let node = &self.nodes[id.0];
            if let Some(child) = node.children_by_name.get(simple_name) {
                return self.nodes[child.0].name.as_ref();
            }
            current = node.parent;
        }
        None
    }
}
