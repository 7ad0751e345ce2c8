//! Component dependency resolution for server-rendered Vue pages
//!
//! This module holds the algorithmic core: scanning template sources for
//! component definitions, extracting component-to-component usage
//! references, computing the dependency closure of a requested root, and
//! rendering the closure into client-side registration statements.
//!
//! # Example
//!
//! ```text
//! // view-one.vue
//! <template id="view-one">
//!     <dependency-one></dependency-one>
//! </template>
//! ```
//!
//! Serving `<view-one></view-one>` resolves to `view-one` plus
//! `dependency-one` and renders one registration statement for each.

mod catalog;
mod extract;
pub mod lexer;
mod render;
mod resolver;

pub use catalog::{ComponentCatalog, ComponentDefinition, RegistrationStyle};
pub use extract::{extract_references, root_component_name, ComponentReference};
pub use render::render_registrations;
pub use resolver::{resolve, DependencyClosure};
