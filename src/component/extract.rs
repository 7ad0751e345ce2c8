//! Reference extraction - finds component usages in template text

use super::lexer::{is_component_name, lex, Token};

/// A single component usage found in a block of template text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentReference {
    pub name: String,
}

/// Extract every component usage from a body of template text.
///
/// Usages may span multiple lines and repeat; duplicates are preserved here
/// and de-duplicated by the resolver. The scan is textual - it does not
/// track DOM nesting, which is sufficient for usage discovery.
pub fn extract_references(body: &str) -> Vec<ComponentReference> {
    lex(body)
        .filter_map(|(token, _)| match token {
            Token::ComponentTag(name) => Some(ComponentReference { name }),
            _ => None,
        })
        .collect()
}

/// Normalize a root component reference.
///
/// Route handlers pass either a bare component name or the literal usage tag
/// placed verbatim in the response body (`"<view-one></view-one>"`). Tag form
/// goes through the extractor; bare form is accepted when it fits the
/// component identifier grammar.
pub fn root_component_name(reference: &str) -> Option<String> {
    let reference = reference.trim();
    if reference.contains('<') {
        extract_references(reference)
            .into_iter()
            .next()
            .map(|reference| reference.name)
    } else if is_component_name(reference) {
        Some(reference.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(body: &str) -> Vec<String> {
        extract_references(body)
            .into_iter()
            .map(|r| r.name)
            .collect()
    }

    #[test]
    fn test_extract_single_usage() {
        assert_eq!(
            names("<div><dependency-one></dependency-one></div>"),
            vec!["dependency-one"]
        );
    }

    #[test]
    fn test_extract_multiple_distinct_usages() {
        let body = "<dependency-three></dependency-three><dependency-four></dependency-four>";
        assert_eq!(names(body), vec!["dependency-three", "dependency-four"]);
    }

    #[test]
    fn test_extract_keeps_duplicates() {
        let body = "<dependency-one></dependency-one><dependency-one></dependency-one>";
        assert_eq!(names(body), vec!["dependency-one", "dependency-one"]);
    }

    #[test]
    fn test_extract_nested_usage() {
        let body = r#"
            <div>
                <ul>
                    <li><nested-dependency></nested-dependency></li>
                </ul>
            </div>
        "#;
        assert_eq!(names(body), vec!["nested-dependency"]);
    }

    #[test]
    fn test_extract_multiline_usage() {
        let body = "<dependency-1\n    v-if=\"ready\"\n    class=\"numbered\">\n</dependency-1>";
        assert_eq!(names(body), vec!["dependency-1"]);
    }

    #[test]
    fn test_extract_self_closing_usage() {
        assert_eq!(names("<dependency-one/>"), vec!["dependency-one"]);
    }

    #[test]
    fn test_numeric_suffix_boundary() {
        // A usage of dependency-123 is exactly that, never dependency-1
        assert_eq!(names("<dependency-123></dependency-123>"), vec!["dependency-123"]);
        assert_eq!(
            names("<dependency-1></dependency-1><dependency-123></dependency-123>"),
            vec!["dependency-1", "dependency-123"]
        );
    }

    #[test]
    fn test_plain_tags_are_not_references() {
        assert_eq!(names("<div><span>text</span><br/></div>"), Vec::<String>::new());
    }

    #[test]
    fn test_root_component_name_from_tag() {
        assert_eq!(
            root_component_name("<view-one></view-one>"),
            Some("view-one".to_string())
        );
    }

    #[test]
    fn test_root_component_name_bare() {
        assert_eq!(
            root_component_name("view-one"),
            Some("view-one".to_string())
        );
        assert_eq!(root_component_name("  view-one  "), Some("view-one".to_string()));
    }

    #[test]
    fn test_root_component_name_invalid() {
        assert_eq!(root_component_name("view"), None);
        assert_eq!(root_component_name("<div></div>"), None);
        assert_eq!(root_component_name(""), None);
    }
}
