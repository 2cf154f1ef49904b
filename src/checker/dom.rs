// src/checker/dom.rs
// =============================================================================
// This module answers the one question at the heart of the tool:
// "does this selector match anything in this HTML document?"
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// html5ever is permissive by design: malformed HTML is recovered
// best-effort, the same way a browser would, so parsing never fails.
// Malformed *selectors* are a different story - those come from the
// user's checks file, so they fail loudly with a Selector error instead
// of silently reporting "not present".
//
// Rust concepts:
// - Result<T, E>: For operations that can fail
// - Iterators: .next().is_some() to test "at least one match"
// =============================================================================

use scraper::{Html, Selector};

use super::error::CheckError;

// Parses raw HTML into a queryable document
//
// Never fails: html5ever recovers from malformed input the way a
// browser does, so even garbage bytes produce a (mostly empty) document.
pub fn parse_document(html: &str) -> Html {
    Html::parse_document(html)
}

// Reports whether at least one element in the document matches a selector
//
// Parameters:
//   document: the parsed HTML document
//   selector: a CSS-style selector string from the checks file
//
// Returns:
//   Ok(true)  - the selector matched one or more elements
//   Ok(false) - the selector is valid but matched nothing
//   Err(..)   - the selector string is not valid CSS
//
// Example:
//   document = parse_document("<h1>Hi</h1>")
//   selector_present(&document, "h1")      -> Ok(true)
//   selector_present(&document, "h2")      -> Ok(false)
//   selector_present(&document, "di v??")  -> Err(Selector error)
pub fn selector_present(document: &Html, selector: &str) -> Result<bool, CheckError> {
    let parsed = Selector::parse(selector).map_err(|e| CheckError::Selector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })?;

    // .select() is lazy; asking for the first match is enough
    Ok(document.select(&parsed).next().is_some())
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does parse_document not return a Result?
//    - HTML parsers follow the browser's recovery rules
//    - Any byte soup yields *some* document, so there is no error case
//
// 2. Why does selector_present return a Result?
//    - Selector strings come from user input (the checks file)
//    - "div[" is a typo the user needs to hear about, not a quiet false
//
// 3. What does .next().is_some() do?
//    - document.select() returns an iterator over matching elements
//    - .next() pulls the first match (or None)
//    - .is_some() turns that into the boolean we need
//    - This stops at the first hit instead of collecting every match
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_present() {
        let document = parse_document("<html><body><h1>Hello</h1></body></html>");
        assert!(selector_present(&document, "h1").unwrap());
    }

    #[test]
    fn test_tag_absent() {
        let document = parse_document("<html><body><h1>Hello</h1></body></html>");
        assert!(!selector_present(&document, "h2").unwrap());
    }

    #[test]
    fn test_attribute_selector() {
        let document = parse_document(r#"<img src="cat.png"><img alt="no src">"#);
        assert!(selector_present(&document, "img[src]").unwrap());
        assert!(!selector_present(&document, "a[href]").unwrap());
    }

    #[test]
    fn test_nonexistent_custom_tag() {
        let document = parse_document("<html><body></body></html>");
        assert!(!selector_present(&document, "foo-nonexistent-tag").unwrap());
    }

    #[test]
    fn test_malformed_html_is_recovered() {
        // Unclosed tags and stray brackets still parse
        let document = parse_document("<html><body><h1>broken<div><p>text");
        assert!(selector_present(&document, "h1").unwrap());
        assert!(selector_present(&document, "p").unwrap());
    }

    #[test]
    fn test_malformed_selector_is_an_error() {
        let document = parse_document("<html></html>");
        let err = selector_present(&document, "div[").unwrap_err();
        assert!(err.to_string().contains("div["));
    }

    #[test]
    fn test_descendant_combinator() {
        let document = parse_document("<div><span>nested</span></div>");
        assert!(selector_present(&document, "div span").unwrap());
        assert!(!selector_present(&document, "span div").unwrap());
    }
}
