//! Dependency resolution - computes the set of components a root needs

use std::collections::{HashSet, VecDeque};

use super::catalog::ComponentCatalog;
use super::extract::extract_references;

/// Ordered set of component names reachable from a root.
///
/// Names appear in first-discovery order, each exactly once, and every name
/// has a definition in the catalog it was resolved against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyClosure {
    names: Vec<String>,
}

impl DependencyClosure {
    /// Component names in discovery order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<'a> IntoIterator for &'a DependencyClosure {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

/// Resolve the components that must be registered for `root`.
///
/// With `optimize` disabled, every catalog component is returned in scan
/// order regardless of the root - the include-everything development mode.
///
/// With `optimize` enabled, a breadth-first walk from `root` follows usage
/// references through component bodies. Names without a catalog entry
/// (third-party or client-only tags, or an undefined root) contribute no
/// statement and no further references; the visited-set guard makes cyclic
/// references terminate. The result is a pure function of
/// `(root, catalog, optimize)`.
pub fn resolve(root: &str, catalog: &ComponentCatalog, optimize: bool) -> DependencyClosure {
    if !optimize {
        return DependencyClosure {
            names: catalog.names().map(str::to_owned).collect(),
        };
    }

    let mut names = Vec::new();
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    queue.push_back(root.to_string());

    while let Some(name) = queue.pop_front() {
        if !visited.insert(name.clone()) {
            continue;
        }
        let Some(definition) = catalog.get(&name) else {
            continue;
        };
        names.push(name);
        for reference in extract_references(&definition.body) {
            if !visited.contains(&reference.name) {
                queue.push_back(reference.name);
            }
        }
    }

    DependencyClosure { names }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> ComponentCatalog {
        ComponentCatalog::scan([
            (
                "view-one.vue",
                r#"<template id="view-one"><dependency-one></dependency-one></template>"#,
            ),
            (
                "nested-view.vue",
                r#"<template id="nested-view"><nested-dependency></nested-dependency></template>"#,
            ),
            (
                "nested-dependency.vue",
                r#"<template id="nested-dependency">
                    <dependency-one></dependency-one>
                    <dependency-two></dependency-two>
                </template>"#,
            ),
            ("dependency-one.vue", r#"<template id="dependency-one"><p>1</p></template>"#),
            ("dependency-two.vue", r#"<template id="dependency-two"><p>2</p></template>"#),
            (
                "cycle.vue",
                r#"
                <template id="cycle-a"><cycle-b></cycle-b></template>
                <template id="cycle-b"><cycle-a></cycle-a></template>
                "#,
            ),
        ])
    }

    fn resolved(root: &str, optimize: bool) -> Vec<String> {
        resolve(root, &catalog(), optimize)
            .iter()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn test_leaf_component_resolves_to_itself() {
        assert_eq!(resolved("dependency-one", true), vec!["dependency-one"]);
    }

    #[test]
    fn test_direct_dependency() {
        assert_eq!(resolved("view-one", true), vec!["view-one", "dependency-one"]);
    }

    #[test]
    fn test_transitive_dependencies_in_discovery_order() {
        assert_eq!(
            resolved("nested-view", true),
            vec![
                "nested-view",
                "nested-dependency",
                "dependency-one",
                "dependency-two"
            ]
        );
    }

    #[test]
    fn test_undefined_root_yields_empty_closure() {
        assert!(resolve("no-such-component", &catalog(), true).is_empty());
    }

    #[test]
    fn test_undefined_references_dropped() {
        let catalog = ComponentCatalog::scan([(
            "view.vue",
            r#"<template id="lonely-view"><third-party-widget></third-party-widget></template>"#,
        )]);
        let closure = resolve("lonely-view", &catalog, true);
        assert_eq!(closure.iter().collect::<Vec<_>>(), vec!["lonely-view"]);
    }

    #[test]
    fn test_cyclic_references_terminate() {
        let names = resolved("cycle-a", true);
        assert_eq!(names, vec!["cycle-a", "cycle-b"]);
    }

    #[test]
    fn test_repeated_usage_deduplicated() {
        let catalog = ComponentCatalog::scan([
            (
                "view.vue",
                r#"<template id="busy-view">
                    <dependency-one></dependency-one>
                    <dependency-one></dependency-one>
                </template>"#,
            ),
            ("dep.vue", r#"<template id="dependency-one">1</template>"#),
        ]);
        let closure = resolve("busy-view", &catalog, true);
        assert_eq!(
            closure.iter().collect::<Vec<_>>(),
            vec!["busy-view", "dependency-one"]
        );
    }

    #[test]
    fn test_unoptimized_returns_whole_catalog_in_scan_order() {
        let all = resolved("view-one", false);
        assert_eq!(
            all,
            vec![
                "view-one",
                "nested-view",
                "nested-dependency",
                "dependency-one",
                "dependency-two",
                "cycle-a",
                "cycle-b"
            ]
        );
        // Root does not matter in this mode
        assert_eq!(all, resolved("no-such-component", false));
    }

    #[test]
    fn test_resolution_is_repeatable() {
        assert_eq!(resolved("nested-view", true), resolved("nested-view", true));
    }
}
