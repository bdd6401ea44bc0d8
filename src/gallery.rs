// src/gallery.rs
use crate::paper_data::{ResultEntry, DEFAULT_PLACEHOLDER_IMAGE};
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryItem {
    pub media_source: String,
    pub alt_text: String,
    pub title: String,
    pub description: String,
}

/// Gallery items in render order. Rebuilt as a whole whenever the gallery is
/// re-rendered; never patched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GalleryIndex {
    items: Rc<Vec<GalleryItem>>,
}

impl GalleryItem {
    pub fn from_entry(entry: &ResultEntry) -> Self {
        Self {
            media_source: entry.src.clone(),
            alt_text: entry.alt_text().to_string(),
            title: entry.title.clone(),
            description: entry.description.clone(),
        }
    }
}

impl GalleryIndex {
    pub fn new(items: Vec<GalleryItem>) -> Self {
        Self {
            items: Rc::new(items),
        }
    }

    pub fn from_entries(entries: &[ResultEntry]) -> Self {
        Self::new(entries.iter().map(GalleryItem::from_entry).collect())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&GalleryItem> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GalleryItem> {
        self.items.iter()
    }
}

/// The gallery shown before `results-gallery.json` arrives (or when it never
/// does).
pub fn placeholder_entries() -> Vec<ResultEntry> {
    [
        ("Main Results", "Headline comparison against the baselines."),
        ("Qualitative Samples", "Representative outputs on held-out inputs."),
        ("Ablation Study", "Contribution of each component to the final score."),
    ]
    .iter()
    .map(|(title, description)| ResultEntry {
        category: None,
        placeholder: None,
        alt: None,
        title: title.to_string(),
        src: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
        description: description.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, src: &str, description: &str) -> ResultEntry {
        ResultEntry {
            title: title.to_string(),
            src: src.to_string(),
            description: description.to_string(),
            ..ResultEntry::default()
        }
    }

    #[test]
    fn test_index_keeps_render_order() {
        let index = GalleryIndex::from_entries(&[
            entry("A", "a.jpg", "d1"),
            entry("B", "b.jpg", "d2"),
        ]);
        assert_eq!(index.len(), 2);
        assert_eq!(index.get(0).unwrap().title, "A");
        assert_eq!(index.get(1).unwrap().media_source, "b.jpg");
        assert!(index.get(2).is_none());
    }

    #[test]
    fn test_item_alt_falls_back_to_title() {
        let item = GalleryItem::from_entry(&entry("Loss curve", "loss.png", ""));
        assert_eq!(item.alt_text, "Loss curve");
    }

    #[test]
    fn test_placeholder_gallery() {
        let entries = placeholder_entries();
        assert_eq!(entries.len(), 3);
        assert!(entries.iter().all(|e| e.src == DEFAULT_PLACEHOLDER_IMAGE));
        assert!(!GalleryIndex::from_entries(&entries).is_empty());
    }
}
