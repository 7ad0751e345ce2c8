//! Lexer for component template markup using logos
//!
//! The scan is deliberately flat: it recognizes component definition markers
//! and component-shaped tags, and skips everything else. Identifier boundaries
//! fall out of maximal munch - `<dependency-123` is consumed as one token, so
//! it can never be mistaken for a usage of `dependency-1`.

use logos::{Lexer, Logos};

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[^<]+")]
pub enum Token {
    /// Closing marker of a component definition
    #[regex(r"</template[ \t\r\n]*>")]
    DefinitionClose,

    /// Opening marker of a component definition: `<template id="name" ...>`.
    /// Attributes may span lines. Markers without a valid `id` lex as errors
    /// and are skipped by the driver.
    #[regex(r"<template[ \t\r\n][^>]*>", definition_name)]
    DefinitionOpen(String),

    /// A component usage: an opening tag whose name fits the component
    /// identifier grammar (lowercase, digits, at least one hyphen)
    #[regex(r"<[a-z][a-z0-9]*(-[a-z0-9]+)+", component_name)]
    ComponentTag(String),

    /// Any other `<` (plain HTML tags, closing tags, comments)
    #[regex(r"<", logos::skip)]
    Angle,
}

/// Check a name against the component identifier grammar:
/// `[a-z][a-z0-9]*(-[a-z0-9]+)+`
pub fn is_component_name(name: &str) -> bool {
    let mut segments = name.split('-');
    let Some(first) = segments.next() else {
        return false;
    };
    if !first.starts_with(|c: char| c.is_ascii_lowercase()) {
        return false;
    }
    if !segment_chars_valid(first) {
        return false;
    }
    let mut hyphenated = false;
    for segment in segments {
        if segment.is_empty() || !segment_chars_valid(segment) {
            return false;
        }
        hyphenated = true;
    }
    hyphenated
}

fn segment_chars_valid(segment: &str) -> bool {
    segment
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
}

fn component_name(lex: &mut Lexer<Token>) -> String {
    lex.slice()[1..].to_string()
}

fn definition_name(lex: &mut Lexer<Token>) -> Option<String> {
    let name = attribute_value(lex.slice(), "id")?;
    is_component_name(name).then(|| name.to_string())
}

/// Find the quoted value of an attribute inside an opening tag slice.
///
/// Textual lookup is sufficient here: template sources are trusted
/// server-side files, not arbitrary HTML.
fn attribute_value<'a>(tag: &'a str, attr: &str) -> Option<&'a str> {
    for quote in ['"', '\''] {
        let needle = format!("{attr}={quote}");
        for (pos, _) in tag.match_indices(&needle) {
            // Require whitespace before the attribute name so `data-id=`
            // does not match `id=`
            if !tag[..pos]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_ascii_whitespace())
            {
                continue;
            }
            let rest = &tag[pos + needle.len()..];
            if let Some(end) = rest.find(quote) {
                return Some(&rest[..end]);
            }
        }
    }
    None
}

/// Lex input text into tokens with spans, dropping unrecognized input
pub fn lex(input: &str) -> impl Iterator<Item = (Token, Span)> + '_ {
    Token::lexer(input)
        .spanned()
        .filter_map(|(tok, span)| tok.ok().map(|t| (t, span)))
}
