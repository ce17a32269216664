// kt_codegen/resolver - Name binding against scopes and import tables
use crate::scope::{ScopeId, ScopeTree};
use kt_ast::ClassName;
use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap, HashSet};
use tracing::{debug, trace};

/// An explicit static-member import declared for one build: an owner class
/// plus a member name, or `*` for a wildcard.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StaticImport {
    pub owner: ClassName,
    pub member: String,
}

impl StaticImport {
    /// # Panics
    /// Panics if the member name is empty.
    pub fn new(owner: ClassName, member: impl Into<String>) -> Self {
        let member = member.into();
        assert!(!member.is_empty(), "static import member must not be empty");
        Self { owner, member }
    }

    /// The rendered key, `owner.member`, also used for sorting.
    pub fn rendered(&self) -> String {
        format!("{}.{}", self.owner.canonical_name(), self.member)
    }
}

/// The static-import table: rendered keys plus the set of owner classes,
/// populated directly from the declarations supplied to the build.
#[derive(Debug, Default)]
pub struct StaticImportTable {
    entries: BTreeSet<String>,
    owners: HashSet<String>,
}

impl StaticImportTable {
    pub fn from_declarations<'a>(imports: impl IntoIterator<Item = &'a StaticImport>) -> Self {
        let mut table = StaticImportTable::default();
        for import in imports {
            table.entries.insert(import.rendered());
            table.owners.insert(import.owner.canonical_name());
        }
        table
    }

    /// Rendered entries in ascending order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn matches(&self, owner: &str, member: &str) -> bool {
        if !self.owners.contains(owner) {
            return false;
        }
        self.entries.contains(&format!("{owner}.{member}"))
            || self.entries.contains(&format!("{owner}.*"))
    }
}

/// How a single type reference is rendered at its use site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderingDecision {
    /// The trailing simple name alone.
    Unqualified,
    /// A dot-joined suffix of the simple-name path, starting at the given
    /// segment index.
    QualifiedSuffix { first_segment: usize },
    /// The full canonical name, package-prefixed when a package exists.
    FullyQualified,
}

impl RenderingDecision {
    pub fn render(self, target: &ClassName) -> String {
        match self {
            RenderingDecision::Unqualified => target.simple_name().to_string(),
            RenderingDecision::QualifiedSuffix { first_segment } => {
                target.simple_names()[first_segment..].join(".")
            }
            RenderingDecision::FullyQualified => target.canonical_name(),
        }
    }
}

/// A discovered use of a type or static member. The position in the
/// recorded stream is the discovery index.
#[derive(Debug, Clone, PartialEq)]
pub enum Reference {
    Type { target: ClassName, scope: ScopeId },
    Static { owner: ClassName, member: String },
}

/// Resolves references against the scope tree and the import tables.
///
/// A resolver starts in collecting mode: lookups record the reference
/// stream and populate the first-use import candidates, while the import
/// table itself is still empty. [`Resolver::freeze`] turns the candidates
/// into the frozen table for the emission pass. Both passes share the same
/// lookup code, so every reference gets the same decision the table was
/// built for.
pub struct Resolver<'a> {
    scopes: &'a ScopeTree,
    package_name: &'a str,
    static_imports: &'a StaticImportTable,
    /// Frozen simple-name bindings; empty while collecting.
    imported: HashMap<String, ClassName>,
    /// First-use import candidates, keyed by top-level simple name.
    importable: HashMap<String, ClassName>,
    /// Top-level simple names referenced from the file's own package.
    referenced: HashSet<String>,
    references: Vec<Reference>,
    collecting: bool,
}

impl<'a> Resolver<'a> {
    pub fn collecting(
        scopes: &'a ScopeTree,
        package_name: &'a str,
        static_imports: &'a StaticImportTable,
    ) -> Self {
        Self {
            scopes,
            package_name,
            static_imports,
            imported: HashMap::new(),
            importable: HashMap::new(),
            referenced: HashSet::new(),
            references: Vec::new(),
            collecting: true,
        }
    }

    /// Freeze the import tables after the collection pass. Candidates whose
    /// simple name was also referenced from the file's own package are
    /// dropped, so the same-package short name stays unambiguous.
    pub fn freeze(mut self) -> Resolver<'a> {
        let mut imported = std::mem::take(&mut self.importable);
        imported.retain(|simple_name, _| !self.referenced.contains(simple_name));
        debug!(
            type_imports = imported.len(),
            references = self.references.len(),
            "import tables frozen"
        );
        Resolver {
            scopes: self.scopes,
            package_name: self.package_name,
            static_imports: self.static_imports,
            imported,
            importable: HashMap::new(),
            referenced: HashSet::new(),
            references: Vec::new(),
            collecting: false,
        }
    }

    /// The reference stream recorded so far, in discovery order.
    pub fn references(&self) -> &[Reference] {
        &self.references
    }

    pub fn static_import_table(&self) -> &StaticImportTable {
        self.static_imports
    }

    /// Decide how a type reference is rendered in the given scope.
    pub fn resolve_type(&mut self, scope: ScopeId, target: &ClassName) -> RenderingDecision {
        if self.collecting {
            self.references.push(Reference::Type {
                target: target.clone(),
                scope,
            });
        }

        // Walk the target's nesting chain innermost-out. The first chain
        // element the scope resolves to itself anchors a suffix rendering;
        // a chain element that resolves to a different entity shadows the
        // name if it is still shadowed at the top-level segment.
        let segments = target.simple_names();
        let mut last_lookup_hit = false;
        for prefix_len in (1..=segments.len()).rev() {
            let simple_name = segments[prefix_len - 1].as_str();
            let resolved = self.lookup_visible(scope, simple_name);
            last_lookup_hit = resolved.is_some();
            if let Some(found) = resolved {
                if found.package_name() == target.package_name()
                    && found.simple_names() == &segments[..prefix_len]
                {
                    return if prefix_len == segments.len() {
                        RenderingDecision::Unqualified
                    } else {
                        RenderingDecision::QualifiedSuffix {
                            first_segment: prefix_len - 1,
                        }
                    };
                }
            }
        }

        if last_lookup_hit {
            // The top-level segment names a different visible entity.
            trace!(reference = %target, "simple name shadowed; rendering fully qualified");
            return RenderingDecision::FullyQualified;
        }

        if target.package_name() == self.package_name {
            if self.collecting {
                self.referenced
                    .insert(target.top_level().simple_name().to_string());
            }
            return if segments.len() == 1 {
                RenderingDecision::Unqualified
            } else {
                RenderingDecision::QualifiedSuffix { first_segment: 0 }
            };
        }

        self.mark_importable(target);
        RenderingDecision::FullyQualified
    }

    /// Whether `owner.member` is covered by an exact or wildcard static
    /// import, i.e. the member renders bare and the owner is elided.
    pub fn resolve_static(&mut self, owner: &ClassName, member: &str) -> bool {
        let matched = self
            .static_imports
            .matches(&owner.canonical_name(), member);
        if matched && self.collecting {
            self.references.push(Reference::Static {
                owner: owner.clone(),
                member: member.to_string(),
            });
        }
        matched
    }

    /// Sorted `import` line payloads from the frozen table. Types from
    /// `java.lang` are withheld when the suppression flag is set; they keep
    /// their table slot either way.
    pub fn type_import_lines(&self, skip_java_lang: bool) -> Vec<String> {
        self.imported
            .values()
            .filter(|name| !(skip_java_lang && name.package_name() == "java.lang"))
            .map(ClassName::canonical_name)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    fn lookup_visible(&self, scope: ScopeId, simple_name: &str) -> Option<&ClassName> {
        self.scopes
            .resolve(scope, simple_name)
            .or_else(|| self.imported.get(simple_name))
    }

    /// Record a first-use import candidate for the target's top-level
    /// class. Default-package types never enter the table.
    fn mark_importable(&mut self, target: &ClassName) {
        if !self.collecting || target.package_name().is_empty() {
            return;
        }
        let top_level = target.top_level();
        match self.importable.entry(top_level.simple_name().to_string()) {
            Entry::Occupied(slot) => {
                if slot.get() != &top_level {
                    trace!(
                        loser = %top_level,
                        winner = %slot.get(),
                        "import slot already taken; first use wins"
                    );
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(top_level);
            }
        }
    }
}
