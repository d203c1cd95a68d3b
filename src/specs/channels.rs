// src/specs/channels.rs
// The programming page's channel dropdown.
//
// Each option is an anchor inside `li[aria-describedby=dropdown-option-description]`:
//   <a href="/globorio/programacao/"><span>Category</span> ... <span>Channel</span></a>
// First element child holds the category label, last one the channel label.

use crate::config::consts::{CHANNEL_SELECTOR, DROPDOWN_TOGGLE_ID, LINK_ATTR, SITE_PREFIX};
use crate::core::dom::{Dom, ElementSnapshot};
use crate::core::sanitize::{normalize_name, strip_last_char};
use crate::error::{ChannelError, Result};

/// True only for addresses on the Globo programming site.
pub fn check_url(location: &str) -> bool {
    location.starts_with(SITE_PREFIX)
}

/// Open the dropdown so its option list is in the document.
pub fn reveal(dom: &mut dyn Dom) -> Result<()> {
    dom.click(DROPDOWN_TOGGLE_ID)
}

/// Click the toggle again to put the dropdown back the way it was.
pub fn restore(dom: &mut dyn Dom) -> Result<()> {
    dom.click(DROPDOWN_TOGGLE_ID)
}

/// Snapshot the channel anchors in document order.
pub fn collect(dom: &dyn Dom) -> Result<Vec<ElementSnapshot>> {
    dom.query(CHANNEL_SELECTOR)
}

/// The fields derived from one dropdown option.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChannelEntry {
    /// Channel display name (trimmed).
    pub name: String,
    /// Channel slug.
    pub code: String,
    /// Category slug.
    pub category: String,
    /// Category display name (trimmed).
    pub category_name: String,
    /// Link target minus its final character.
    pub url: String,
}

impl ChannelEntry {
    /// Read one snapshot. `index` is only used for error messages.
    ///
    /// An anchor with no element children or no link is malformed; that ends
    /// the run instead of being skipped.
    pub fn from_element(index: usize, el: &ElementSnapshot) -> Result<Self> {
        let channel_text = el
            .last_child_text()
            .ok_or(ChannelError::MalformedElement { index, reason: "no channel label" })?;
        let category_text = el
            .first_child_text()
            .ok_or(ChannelError::MalformedElement { index, reason: "no category label" })?;
        let href = el
            .attr(LINK_ATTR)
            .ok_or(ChannelError::MalformedElement { index, reason: "no link target" })?;

        Ok(Self {
            name: s!(channel_text.trim()),
            code: normalize_name(channel_text),
            category: normalize_name(category_text),
            category_name: s!(category_text.trim()),
            url: s!(strip_last_char(href)),
        })
    }

    /// All four keys must survive normalization.
    pub fn is_complete(&self) -> bool {
        !self.category_name.is_empty()
            && !self.category.is_empty()
            && !self.code.is_empty()
            && !self.url.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor(category: &str, channel: &str, href: &str) -> ElementSnapshot {
        ElementSnapshot::new(
            vec![s!(category), s!(channel)],
            vec![(s!("href"), s!(href))],
        )
    }

    #[test]
    fn guard_accepts_site_pages_only() {
        assert!(check_url("https://redeglobo.globo.com/globobrasilia/programacao"));
        assert!(check_url("https://redeglobo.globo.com/"));
        assert!(!check_url("http://redeglobo.globo.com/globobrasilia/programacao"));
        assert!(!check_url("https://g1.globo.com/"));
        assert!(!check_url(""));
    }

    #[test]
    fn entry_fields_follow_the_labels() {
        let e = ChannelEntry::from_element(0, &anchor(" Esportes ", "Globo Rio", "/globorio/programacao/")).unwrap();
        assert_eq!(e.name, "Globo Rio");
        assert_eq!(e.code, "globo-rio");
        assert_eq!(e.category, "esportes");
        assert_eq!(e.category_name, "Esportes");
        assert_eq!(e.url, "/globorio/programacao");
        assert!(e.is_complete());
    }

    #[test]
    fn blank_label_makes_entry_incomplete() {
        let e = ChannelEntry::from_element(0, &anchor("   ", "Globo Rio", "/x/")).unwrap();
        assert!(!e.is_complete());

        // A one-character href strips down to nothing.
        let e = ChannelEntry::from_element(0, &anchor("Sul", "RBS", "/")).unwrap();
        assert!(!e.is_complete());
    }

    #[test]
    fn missing_link_is_fatal() {
        let el = ElementSnapshot::new(vec![s!("Sul"), s!("RBS")], vec![]);
        let err = ChannelEntry::from_element(3, &el).unwrap_err();
        assert!(matches!(err, ChannelError::MalformedElement { index: 3, .. }));
    }

    #[test]
    fn childless_anchor_is_fatal() {
        let el = ElementSnapshot::new(vec![], vec![(s!("href"), s!("/x/"))]);
        assert!(ChannelEntry::from_element(0, &el).is_err());
    }
}
