//! HTML parsing and selector-based queries over one archived game page.
//!
//! This module provides the [`Document`] and [`Element`] types for parsing
//! HTML and navigating the DOM tree using CSS selectors. The rest of the
//! engine is written against this surface only, so the underlying parsing
//! library can be swapped without touching the extraction logic.
//!
//! # Example
//!
//! ```rust
//! use cluecards_core::document::Document;
//!
//! let html = r#"
//!     <table id="jeopardy_round">
//!         <td class="category_name">POTPOURRI</td>
//!     </table>
//! "#;
//!
//! let doc = Document::parse(html);
//! let categories = doc.select("td.category_name").unwrap();
//! assert_eq!(categories[0].normalized_text(), "POTPOURRI");
//! ```

use scraper::{Html, Selector};

use crate::{CluecardsError, Result};

/// Represents a parsed HTML page.
///
/// A Document wraps one archived game page and provides read-only methods
/// for querying elements by CSS selector. The archive's markup encodes game
/// structure through element ids, class-name conventions, and visibility
/// attributes, so the selector forms that matter here are id queries
/// (`#jeopardy_round`), class-substring queries (`td[class*='clue_value']`),
/// and attribute-presence queries (`div[onmouseover]`).
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses a full HTML page.
    ///
    /// Malformed markup never fails to parse; isolated broken nodes simply
    /// produce whatever tree the HTML recovery rules yield.
    pub fn parse(html: &str) -> Self {
        Self { html: Html::parse_document(html) }
    }

    /// Parses an HTML fragment as a secondary micro-document.
    ///
    /// The archive stores some reveal data as escaped markup inside
    /// attribute values (the `onmouseover` fragments). Those strings are
    /// parsed here into a document exposing the same query contract.
    pub fn parse_fragment(html: &str) -> Self {
        Self { html: Html::parse_fragment(html) }
    }

    /// Selects elements using a CSS selector, in document order.
    ///
    /// Missing nodes are not an error: a selector that matches nothing
    /// returns an empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`CluecardsError::HtmlParseError`] if the selector is invalid.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cluecards_core::document::Document;
    ///
    /// let doc = Document::parse(r#"<table><tr><td class="clue">A</td><td class="clue">B</td></tr></table>"#);
    /// assert_eq!(doc.select("td.clue").unwrap().len(), 2);
    /// assert!(doc.select("td.category_name").unwrap().is_empty());
    /// ```
    pub fn select(&self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel = Selector::parse(selector)
            .map_err(|e| CluecardsError::HtmlParseError(format!("Invalid selector: {}", e)))?;

        Ok(self.html.select(&sel).map(|element| Element { element }).collect())
    }

    /// Gets the title of the page.
    ///
    /// Returns the content of the `<title>` element if present.
    pub fn title(&self) -> Option<String> {
        let selector = Selector::parse("title").ok()?;
        self.html
            .select(&selector)
            .next()
            .map(|el| el.text().collect::<String>())
    }
}

/// A read-only wrapper around scraper's ElementRef.
///
/// Element represents a single node in the page tree and provides methods
/// for reading its attributes and text content and for querying within its
/// subtree.
#[derive(Clone, Debug)]
pub struct Element<'a> {
    element: scraper::ElementRef<'a>,
}

impl<'a> Element<'a> {
    /// Gets the raw text content of this element.
    ///
    /// Returns the concatenation of all text nodes within this element,
    /// hidden or not.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Gets the whitespace-normalized text content of this element.
    ///
    /// Leading and trailing whitespace is trimmed and internal runs of
    /// whitespace collapse to a single space.
    pub fn normalized_text(&self) -> String {
        let text = self.text();
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Gets the value of an attribute.
    ///
    /// Returns `None` if the attribute is not present.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    /// Gets the tag name of this element.
    pub fn tag_name(&self) -> String {
        self.element.value().name().to_lowercase()
    }

    /// Gets the ancestor elements of this element, nearest first.
    ///
    /// Used for row-scoped lookups, where a clue's hidden response cell
    /// lives under a shared ancestor `<tr>` rather than inside the clue
    /// element itself.
    pub fn ancestors(&self) -> Vec<Element<'a>> {
        self.element
            .ancestors()
            .filter_map(scraper::ElementRef::wrap)
            .map(|element| Element { element })
            .collect()
    }

    /// Selects descendant elements using a CSS selector, in document order.
    ///
    /// # Errors
    ///
    /// Returns [`CluecardsError::HtmlParseError`] if the selector is invalid.
    pub fn select(&self, selector: &str) -> Result<Vec<Element<'a>>> {
        let sel = Selector::parse(selector)
            .map_err(|e| CluecardsError::HtmlParseError(format!("Invalid selector: {}", e)))?;

        Ok(self.element.select(&sel).map(|element| Element { element }).collect())
    }
}
