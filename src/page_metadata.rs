// src/page_metadata.rs
use crate::paper_data::PaperInfo;
use crate::utils::truncate_with_ellipsis;

pub const META_DESCRIPTION_MAX: usize = 160;
pub const SOCIAL_DESCRIPTION_MAX: usize = 200;

/// One `<meta>` update: CSS selector and the new `content`.
#[derive(Debug, Clone, PartialEq)]
pub struct MetaUpdate {
    pub selector: &'static str,
    pub content: String,
}

/// Head updates derived from the paper data. Missing title or abstract only
/// skips the tags that depend on them.
pub fn meta_updates(paper: &PaperInfo) -> Vec<MetaUpdate> {
    let mut updates = Vec::new();
    let title = paper.title.trim();
    let summary = paper.abstract_text.trim();

    if !summary.is_empty() {
        updates.push(MetaUpdate {
            selector: "meta[name=\"description\"]",
            content: truncate_with_ellipsis(summary, META_DESCRIPTION_MAX),
        });
    }
    if !title.is_empty() {
        updates.push(MetaUpdate {
            selector: "meta[property=\"og:title\"]",
            content: title.to_string(),
        });
    }
    if !summary.is_empty() {
        updates.push(MetaUpdate {
            selector: "meta[property=\"og:description\"]",
            content: truncate_with_ellipsis(summary, SOCIAL_DESCRIPTION_MAX),
        });
    }
    if !title.is_empty() {
        updates.push(MetaUpdate {
            selector: "meta[property=\"twitter:title\"]",
            content: title.to_string(),
        });
    }
    if !summary.is_empty() {
        updates.push(MetaUpdate {
            selector: "meta[property=\"twitter:description\"]",
            content: truncate_with_ellipsis(summary, SOCIAL_DESCRIPTION_MAX),
        });
    }
    updates
}

pub fn apply_page_metadata(paper: &PaperInfo) {
    let document = gloo_utils::document();
    if !paper.title.trim().is_empty() {
        document.set_title(paper.title.trim());
    }

    for update in meta_updates(paper) {
        if let Ok(Some(meta)) = document.query_selector(update.selector) {
            let _ = meta.set_attribute("content", &update.content);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_updates_truncate_descriptions() {
        let paper = PaperInfo {
            title: "A Paper".to_string(),
            abstract_text: "x".repeat(250),
            ..PaperInfo::default()
        };
        let updates = meta_updates(&paper);
        assert_eq!(updates.len(), 5);

        let description = &updates[0];
        assert_eq!(description.selector, "meta[name=\"description\"]");
        assert_eq!(description.content.len(), 160);
        assert!(description.content.ends_with("..."));

        let og = updates
            .iter()
            .find(|u| u.selector.contains("og:description"))
            .unwrap();
        assert_eq!(og.content.len(), 200);
        assert_eq!(&og.content[..197], &"x".repeat(197)[..]);
    }

    #[test]
    fn test_short_abstract_is_kept() {
        let paper = PaperInfo {
            abstract_text: "Short.".to_string(),
            ..PaperInfo::default()
        };
        let updates = meta_updates(&paper);
        assert_eq!(updates.len(), 3);
        assert!(updates.iter().all(|u| u.content == "Short."));
    }

    #[test]
    fn test_missing_fields_skip_tags() {
        assert!(meta_updates(&PaperInfo::default()).is_empty());
    }
}
