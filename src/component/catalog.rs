//! Component catalog built by scanning template sources

use std::collections::HashMap;

use super::lexer::{lex, Token};

/// Client-side registration syntax observed in a component's defining file.
///
/// Recorded per file for diagnostics; the rendered style is a single global
/// choice driven by the configured application name, never negotiated per
/// component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationStyle {
    /// Vue 2 global registration: `Vue.component(...)`
    LegacyGlobal,
    /// Vue 3 application-scoped registration: `app.component(...)`
    AppScoped,
}

impl RegistrationStyle {
    /// Detect the style of a defining file from its script text
    fn of_source(text: &str) -> Self {
        if text.contains("createApp") {
            Self::AppScoped
        } else {
            Self::LegacyGlobal
        }
    }
}

/// A stored component definition
#[derive(Debug, Clone)]
pub struct ComponentDefinition {
    /// Component name (the `id` of its definition marker)
    pub name: String,
    /// Template body between the definition markers
    pub body: String,
    /// Identifier of the source the definition came from
    pub origin: String,
    /// Registration syntax of the defining file
    pub style: RegistrationStyle,
}

/// All component definitions known to the server, keyed by name.
///
/// A catalog is an immutable snapshot once built: resolution borrows it,
/// never mutates it, so concurrent resolutions need no locking. Scan order
/// is preserved for the include-everything resolution mode and for
/// deterministic output.
#[derive(Debug, Default)]
pub struct ComponentCatalog {
    order: Vec<String>,
    components: HashMap<String, ComponentDefinition>,
}

impl ComponentCatalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan template sources and extract every component definition.
    ///
    /// Each source may define any number of components. Malformed
    /// definitions (no closing marker) are skipped; the scan itself
    /// never fails.
    pub fn scan<'a, I>(sources: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut catalog = Self::new();
        for (origin, text) in sources {
            catalog.scan_source(origin, text);
        }
        catalog
    }

    fn scan_source(&mut self, origin: &str, text: &str) {
        let style = RegistrationStyle::of_source(text);
        let mut open: Option<(String, usize)> = None;
        for (token, span) in lex(text) {
            match token {
                Token::DefinitionOpen(name) => {
                    // An opening marker while one is pending means the
                    // pending definition never terminated; drop it
                    open = Some((name, span.end));
                }
                Token::DefinitionClose => {
                    if let Some((name, body_start)) = open.take() {
                        self.insert(ComponentDefinition {
                            name,
                            body: text[body_start..span.start].to_string(),
                            origin: origin.to_string(),
                            style,
                        });
                    }
                }
                _ => {}
            }
        }
        // A definition still open at end of source is unterminated: skipped
    }

    /// First definition of a name wins; later duplicates are ignored
    fn insert(&mut self, definition: ComponentDefinition) {
        if self.components.contains_key(&definition.name) {
            return;
        }
        self.order.push(definition.name.clone());
        self.components.insert(definition.name.clone(), definition);
    }

    /// Get a component definition by name
    pub fn get(&self, name: &str) -> Option<&ComponentDefinition> {
        self.components.get(name)
    }

    /// Check if a component is defined
    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    /// Component names in scan order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Definitions in scan order
    pub fn definitions(&self) -> impl Iterator<Item = &ComponentDefinition> {
        self.order.iter().filter_map(|name| self.components.get(name))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
