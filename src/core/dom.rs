// src/core/dom.rs
//! The slice of a browser document the extractor needs.
//!
//! The pipeline only ever clicks one element and snapshots one structural
//! query, so that is all `Dom` offers. `HtmlDocument` backs it with a parsed
//! page; tests can hand in anything else that implements the trait.

use crate::error::Result;

pub trait Dom {
    /// Simulate a user click on the element with this `id`.
    ///
    /// Fails with `ChannelError::ElementNotFound` when no such element exists.
    fn click(&mut self, id: &str) -> Result<()>;

    /// Snapshot every element matching `selector`, in document order.
    /// The result is detached from the document and does not change afterwards.
    fn query(&self, selector: &str) -> Result<Vec<ElementSnapshot>>;
}

/// Owned copy of one matched element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ElementSnapshot {
    /// Text content of each element child, in order.
    children: Vec<String>,
    attrs: Vec<(String, String)>,
}

impl ElementSnapshot {
    pub fn new(children: Vec<String>, attrs: Vec<(String, String)>) -> Self {
        Self { children, attrs }
    }

    /// `firstElementChild.textContent`
    pub fn first_child_text(&self) -> Option<&str> {
        self.children.first().map(String::as_str)
    }

    /// `lastElementChild.textContent`
    pub fn last_child_text(&self) -> Option<&str> {
        self.children.last().map(String::as_str)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}
