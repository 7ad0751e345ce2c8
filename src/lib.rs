//! Vue Inliner - server-side dependency resolution for inlined Vue components
//!
//! Given the raw text of the component templates a server knows about, this
//! library determines which components a requested root transitively uses
//! and renders the client-side registration statements the served page must
//! carry. The HTTP layer stays in charge of routing and of placing the root
//! usage tag in the response body; this crate is a pure in-process text
//! transformation.
//!
//! # Example
//!
//! ```rust
//! use vue_inliner::{resolve_and_render, ComponentCatalog, VueConfig};
//!
//! let catalog = ComponentCatalog::scan([
//!     (
//!         "view-one.vue",
//!         r#"<template id="view-one"><dependency-one></dependency-one></template>"#,
//!     ),
//!     (
//!         "dependency-one.vue",
//!         r#"<template id="dependency-one"><p>ok</p></template>"#,
//!     ),
//! ]);
//!
//! let script = resolve_and_render("<view-one></view-one>", &catalog, &VueConfig::default());
//! assert_eq!(
//!     script,
//!     "Vue.component('view-one',{template:\"#view-one\"})\n\
//!      Vue.component('dependency-one',{template:\"#dependency-one\"})"
//! );
//! ```

pub mod component;
pub mod config;
pub mod store;

pub use component::{
    extract_references, render_registrations, resolve, root_component_name, ComponentCatalog,
    ComponentDefinition, ComponentReference, DependencyClosure, RegistrationStyle,
};
pub use config::{ConfigError, VueConfig};
pub use store::{list_template_sources, StoreError, TemplateSource};

/// Build a catalog from directory-store sources
pub fn build_catalog(sources: &[TemplateSource]) -> ComponentCatalog {
    ComponentCatalog::scan(sources.iter().map(|s| (s.id.as_str(), s.text.as_str())))
}

/// Resolve a root component reference and render its registration script.
///
/// This is the entry point the route handler calls per request. The root
/// reference may be a bare component name or the literal usage tag placed in
/// the response body. The returned text is the script to embed next to that
/// tag; it is empty when nothing resolvable was found, which leaves the page
/// renderable rather than failing the request.
pub fn resolve_and_render(
    root_reference: &str,
    catalog: &ComponentCatalog,
    config: &VueConfig,
) -> String {
    let root = root_component_name(root_reference).unwrap_or_default();
    let closure = resolve(&root, catalog, config.optimize_dependencies);
    render_registrations(&closure, catalog, config.app_name.as_deref())
}
