// src/core/html.rs
// `Dom` over a static HTML page, parsed with `scraper`.

use std::collections::HashMap;

use scraper::{ElementRef, Html, Selector};

use super::dom::{Dom, ElementSnapshot};
use crate::error::{ChannelError, Result};

/// A parsed page plus the state a browser would keep for clicked toggles.
///
/// Clicking cannot reveal anything on a static page (the dropdown list is
/// already in the markup), so a click only flips a recorded expanded flag.
pub struct HtmlDocument {
    html: Html,
    expanded: HashMap<String, bool>,
    clicks: usize,
}

impl HtmlDocument {
    pub fn parse(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
            expanded: HashMap::new(),
            clicks: 0,
        }
    }

    /// Whether the toggle with this id is currently open.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.get(id).copied().unwrap_or(false)
    }

    /// Number of clicks performed on this document so far.
    pub fn clicks(&self) -> usize {
        self.clicks
    }

    fn find_by_id(&self, id: &str) -> Result<Option<ElementRef<'_>>> {
        // Attribute form sidesteps CSS escaping of ids like `a__b`.
        let sel = compile(&format!(r#"[id="{}"]"#, id.replace('"', "\\\"")))?;
        Ok(self.html.select(&sel).next())
    }
}

impl Dom for HtmlDocument {
    fn click(&mut self, id: &str) -> Result<()> {
        if self.find_by_id(id)?.is_none() {
            return Err(ChannelError::ElementNotFound(s!(id)));
        }
        let open = self.expanded.entry(s!(id)).or_insert(false);
        *open = !*open;
        self.clicks += 1;
        log::debug!("click #{id} → expanded={}", *open);
        Ok(())
    }

    fn query(&self, selector: &str) -> Result<Vec<ElementSnapshot>> {
        let sel = compile(selector)?;
        Ok(self.html.select(&sel).map(snapshot).collect())
    }
}

pub fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| ChannelError::Selector {
        selector: s!(selector),
        message: e.to_string(),
    })
}

/// Trimmed text of the first match of `sel` under `el`.
pub fn first_text(el: ElementRef<'_>, sel: &Selector) -> Option<String> {
    el.select(sel).next().map(|hit| s!(text_content(hit).trim()))
}

fn snapshot(el: ElementRef<'_>) -> ElementSnapshot {
    let children = el
        .children()
        .filter_map(ElementRef::wrap)
        .map(text_content)
        .collect();
    let attrs = el
        .value()
        .attrs()
        .map(|(k, v)| (s!(k), s!(v)))
        .collect();
    ElementSnapshot::new(children, attrs)
}

/// All descendant text, untouched (same as DOM `textContent`).
pub fn text_content(el: ElementRef<'_>) -> String {
    el.text().collect()
}
