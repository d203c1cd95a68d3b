// src/catalog.rs
//
// The exported artifact: category code → { name, channels: code → { name, url } }.
// Maps keep insertion order so the JSON lists things the way the page does.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::specs::channels::ChannelEntry;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub name: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub channels: IndexMap<String, Channel>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), channels: IndexMap::new() }
    }
}

/// A lookup hit, tagged with the category it was found in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChannelMatch {
    pub code: String,
    pub category: String,
    pub name: String,
    pub url: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelCatalog {
    categories: IndexMap<String, Category>,
}

impl ChannelCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put one collected entry into the catalog.
    ///
    /// Incomplete entries are skipped and `false` comes back. The category
    /// keeps the display name it was first created with; a channel code seen
    /// again in the same category replaces the earlier channel.
    pub fn add_entry(&mut self, entry: &ChannelEntry) -> bool {
        if !entry.is_complete() {
            log::debug!("Skipping incomplete entry {entry:?}");
            return false;
        }

        let category = self
            .categories
            .entry(entry.category.clone())
            .or_insert_with(|| Category::new(entry.category_name.clone()));

        let channel = Channel { name: entry.name.clone(), url: entry.url.clone() };
        if let Some(previous) = category.channels.insert(entry.code.clone(), channel) {
            // Last write wins. Kept as-is; it may hide two distinct channels.
            log::debug!(
                "Channel {}/{} replaced (was {:?} at {})",
                entry.category, entry.code, previous.name, previous.url
            );
        }
        true
    }

    pub fn get(&self, category: &str) -> Option<&Category> {
        self.categories.get(category)
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, &Category)> {
        self.categories.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Number of distinct channels across all categories.
    pub fn channel_count(&self) -> usize {
        self.categories.values().map(|c| c.channels.len()).sum()
    }

    /* ---------------- Reading an export back ---------------- */

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Pretty JSON, two-space indent.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /* ---------------- Lookup ---------------- */

    /// First channel whose code is exactly `code`, in category order.
    pub fn find_channel(&self, code: &str) -> Option<ChannelMatch> {
        let code = code.to_lowercase();
        self.matches(|c| c == code).next()
    }

    /// Every channel whose code contains `fragment`.
    pub fn find_channels(&self, fragment: &str) -> Vec<ChannelMatch> {
        let fragment = fragment.to_lowercase();
        self.matches(|c| c.contains(fragment.as_str())).collect()
    }

    fn matches<'a, F>(&'a self, pred: F) -> impl Iterator<Item = ChannelMatch> + 'a
    where
        F: Fn(&str) -> bool + 'a,
    {
        self.categories.iter().flat_map(move |(cat_code, cat)| {
            cat.channels
                .iter()
                .filter(|(code, _)| pred(code.as_str()))
                .map(move |(code, ch)| ChannelMatch {
                    code: code.clone(),
                    category: cat_code.clone(),
                    name: ch.name.clone(),
                    url: ch.url.clone(),
                })
                .collect::<Vec<_>>()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(category_name: &str, name: &str, url: &str) -> ChannelEntry {
        ChannelEntry {
            name: s!(name),
            code: crate::core::sanitize::normalize_name(name),
            category: crate::core::sanitize::normalize_name(category_name),
            category_name: s!(category_name),
            url: s!(url),
        }
    }

    #[test]
    fn first_category_name_wins() {
        let mut cat = ChannelCatalog::new();
        assert!(cat.add_entry(&entry("Notícias", "Globo News", "/gn")));
        assert!(cat.add_entry(&entry("Noticias", "G1", "/g1")));

        assert_eq!(cat.len(), 1);
        let noticias = cat.get("noticias").unwrap();
        assert_eq!(noticias.name, "Notícias");
        assert_eq!(noticias.channels.len(), 2);
    }

    #[test]
    fn later_channel_overwrites_earlier() {
        let mut cat = ChannelCatalog::new();
        cat.add_entry(&entry("Sul", "RBS TV", "/rbs-old"));
        cat.add_entry(&entry("Sul", "RBS  TV", "/other"));
        cat.add_entry(&entry("Sul", "rbs tv", "/rbs-new"));

        let sul = cat.get("sul").unwrap();
        assert_eq!(sul.channels.len(), 2);
        assert_eq!(sul.channels["rbs-tv"], Channel { name: s!("rbs tv"), url: s!("/rbs-new") });
        // overwritten key keeps its original slot
        assert_eq!(sul.channels.get_index_of("rbs-tv"), Some(0));
    }

    #[test]
    fn incomplete_entries_are_not_counted() {
        let mut cat = ChannelCatalog::new();
        assert!(!cat.add_entry(&entry("", "Globo", "/g")));
        assert!(!cat.add_entry(&entry("Sul", "", "/g")));
        assert!(!cat.add_entry(&entry("Sul", "Globo", "")));
        assert!(cat.is_empty());
        assert_eq!(cat.channel_count(), 0);
    }

    #[test]
    fn json_shape_matches_export_format() {
        let mut cat = ChannelCatalog::new();
        cat.add_entry(&entry("Esportes", "Globo Rio", "/globorio/programacao"));

        let value: serde_json::Value = serde_json::from_str(&cat.to_json_pretty().unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "esportes": {
                    "name": "Esportes",
                    "channels": {
                        "globo-rio": { "name": "Globo Rio", "url": "/globorio/programacao" }
                    }
                }
            })
        );
    }

    #[test]
    fn pretty_json_uses_two_spaces() {
        let mut cat = ChannelCatalog::new();
        cat.add_entry(&entry("Sul", "RBS", "/rbs"));
        let text = cat.to_json_pretty().unwrap();
        assert!(text.starts_with("{\n  \"sul\": {\n    \"name\": \"Sul\""));
    }

    #[test]
    fn reload_keeps_order() {
        let mut cat = ChannelCatalog::new();
        cat.add_entry(&entry("Sudeste", "TV Vanguarda", "/vanguarda"));
        cat.add_entry(&entry("Nordeste", "TV Bahia", "/bahia"));
        cat.add_entry(&entry("Centro-Oeste", "Globo Brasília", "/globobrasilia"));

        let back = ChannelCatalog::from_json(&cat.to_json_pretty().unwrap()).unwrap();
        let order: Vec<&str> = back.categories().map(|(k, _)| k).collect();
        assert_eq!(order, ["sudeste", "nordeste", "centro-oeste"]);
        assert_eq!(back, cat);
    }

    #[test]
    fn lookup_by_code_and_fragment() {
        let mut cat = ChannelCatalog::new();
        cat.add_entry(&entry("Centro-Oeste", "Globo Brasília", "/globobrasilia"));
        cat.add_entry(&entry("Sudeste", "Globo Rio", "/globorio"));
        cat.add_entry(&entry("Sudeste", "TV Vanguarda", "/vanguarda"));

        let hit = cat.find_channel("Globo-Rio").unwrap();
        assert_eq!(hit.category, "sudeste");
        assert_eq!(hit.url, "/globorio");
        assert!(cat.find_channel("globo").is_none());

        let codes: Vec<String> = cat.find_channels("globo").into_iter().map(|m| m.code).collect();
        assert_eq!(codes, ["globo-brasilia", "globo-rio"]);
    }
}
