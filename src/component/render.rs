//! Registration rendering - emits client-side registration statements

use super::catalog::ComponentCatalog;
use super::resolver::DependencyClosure;

/// Render one registration statement per resolved component, in closure
/// order, joined with newlines.
///
/// With an application name configured, every statement targets that
/// application object (the Vue 3 form); otherwise the legacy global form is
/// used. The quoting difference between the two forms is a compatibility
/// contract with existing client code and is kept verbatim:
///
/// ```text
/// Vue.component('name',{template:"#name"})
/// app.component("name",{template:"#name"})
/// ```
///
/// Names without a catalog entry produce no statement and no error.
pub fn render_registrations(
    closure: &DependencyClosure,
    catalog: &ComponentCatalog,
    app_name: Option<&str>,
) -> String {
    closure
        .iter()
        .filter(|name| catalog.contains(name))
        .map(|name| registration(name, app_name))
        .collect::<Vec<_>>()
        .join("\n")
}

fn registration(name: &str, app_name: Option<&str>) -> String {
    match app_name {
        Some(app) => format!("{app}.component(\"{name}\",{{template:\"#{name}\"}})"),
        None => format!("Vue.component('{name}',{{template:\"#{name}\"}})"),
    }
}
