// src/paper_data.rs
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaperInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    pub subtitle: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub authors: Vec<Author>,
    #[serde(deserialize_with = "null_as_default")]
    pub venue: String,
    pub publication_date: Option<String>,
    pub pdf_url: Option<String>,
    pub code_url: Option<String>,
    #[serde(rename = "abstract", deserialize_with = "null_as_default")]
    pub abstract_text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub key_contributions: Vec<String>,
    pub bibtex: Option<String>,
    pub doi: Option<String>,
    pub arxiv_id: Option<String>,
    pub dataset_url: Option<String>,
    pub supplementary_url: Option<String>,
    pub slides_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub affiliation: Option<String>,
    pub website: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultsGallery {
    #[serde(deserialize_with = "null_as_default")]
    pub results: Vec<ResultEntry>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultEntry {
    pub category: Option<String>,
    pub placeholder: Option<String>,
    pub alt: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub src: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MethodologyDocument {
    pub methodology: Option<Methodology>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Methodology {
    #[serde(deserialize_with = "null_as_default")]
    pub overview: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sections: Vec<MethodologySection>,
    #[serde(deserialize_with = "null_as_default")]
    pub related_work: Vec<RelatedWork>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MethodologySection {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(deserialize_with = "null_as_default")]
    pub details: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedWork {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub authors: String,
    pub year: serde_json::Value,
    #[serde(deserialize_with = "null_as_default")]
    pub relevance: String,
}

/// Explicit `null` in hand-written JSON reads the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "assets/images/placeholder.svg";
pub const DEFAULT_CATEGORY: &str = "main";

/// Treats `None`, `""` and whitespace-only strings alike.
pub fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl PaperInfo {
    /// Affiliations in first-seen order, without duplicates or blanks.
    pub fn unique_affiliations(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for author in &self.authors {
            if let Some(affiliation) = non_blank(&author.affiliation) {
                if !seen.iter().any(|a| a == affiliation) {
                    seen.push(affiliation.to_string());
                }
            }
        }
        seen
    }

    pub fn author_names(&self) -> String {
        self.authors
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn publication_date(&self) -> Option<NaiveDate> {
        self.publication_date.as_deref().and_then(parse_iso_date)
    }

    pub fn publication_year(&self) -> Option<i32> {
        use chrono::Datelike;
        self.publication_date().map(|d| d.year())
    }

    /// "March 15, 2024" style, the way the hero shows it.
    pub fn formatted_publication_date(&self) -> Option<String> {
        self.publication_date()
            .map(|d| d.format("%B %-d, %Y").to_string())
    }

    pub fn doi_url(&self) -> Option<String> {
        non_blank(&self.doi).map(|doi| {
            if doi.starts_with("http") {
                doi.to_string()
            } else {
                format!("https://doi.org/{}", doi)
            }
        })
    }

    pub fn arxiv_url(&self) -> Option<String> {
        non_blank(&self.arxiv_id).map(|id| {
            if id.starts_with("http") {
                id.to_string()
            } else {
                format!("https://arxiv.org/abs/{}", id)
            }
        })
    }
}

impl ResultEntry {
    pub fn alt_text(&self) -> &str {
        non_blank(&self.alt).unwrap_or(&self.title)
    }

    pub fn placeholder_src(&self) -> &str {
        non_blank(&self.placeholder).unwrap_or(DEFAULT_PLACEHOLDER_IMAGE)
    }

    pub fn category(&self) -> &str {
        non_blank(&self.category).unwrap_or(DEFAULT_CATEGORY)
    }
}

impl RelatedWork {
    /// Years show up as numbers or strings in hand-written JSON.
    pub fn year_label(&self) -> String {
        match &self.year {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Null => String::new(),
            other => other.to_string(),
        }
    }

    pub fn byline(&self) -> String {
        format!("{} ({})", self.authors, self.year_label())
    }
}

impl MethodologySection {
    pub fn content_id(&self) -> String {
        format!("section-{}", self.id)
    }
}

/// Accepts a plain `YYYY-MM-DD` or anything that starts with one
/// (`2024-03-15T00:00:00Z`).
fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let head = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_paper() -> PaperInfo {
        serde_json::from_value(json!({
            "title": "Sparse Attention at Scale",
            "authors": [
                {"name": "Ada Lovelace", "affiliation": "Analytical Lab",
                 "website": "https://ada.example"},
                {"name": "Alan Turing", "affiliation": "Analytical Lab",
                 "email": "alan@example.org"},
                {"name": "Grace Hopper", "affiliation": "Navy Research"}
            ],
            "venue": "NeurIPS 2024",
            "publicationDate": "2024-03-15",
            "abstract": "We study things.",
            "keyContributions": ["One", "Two"],
            "doi": "10.1000/xyz123",
            "arxivId": "https://arxiv.org/abs/2403.00001"
        }))
        .unwrap()
    }

    #[test]
    fn test_paper_info_camel_case_fields() {
        let paper = sample_paper();
        assert_eq!(paper.title, "Sparse Attention at Scale");
        assert_eq!(paper.abstract_text, "We study things.");
        assert_eq!(paper.key_contributions.len(), 2);
        assert_eq!(paper.authors[1].email.as_deref(), Some("alan@example.org"));
        assert!(paper.pdf_url.is_none());
    }

    #[test]
    fn test_partial_paper_info_uses_defaults() {
        let paper: PaperInfo = serde_json::from_str(r#"{"title": "Only a title"}"#).unwrap();
        assert_eq!(paper.title, "Only a title");
        assert!(paper.authors.is_empty());
        assert!(paper.formatted_publication_date().is_none());
    }

    #[test]
    fn test_unique_affiliations_keep_order() {
        let paper = sample_paper();
        assert_eq!(
            paper.unique_affiliations(),
            vec!["Analytical Lab".to_string(), "Navy Research".to_string()]
        );
        assert_eq!(
            paper.author_names(),
            "Ada Lovelace, Alan Turing, Grace Hopper"
        );
    }

    #[test]
    fn test_publication_date_formatting() {
        let mut paper = sample_paper();
        assert_eq!(
            paper.formatted_publication_date().as_deref(),
            Some("March 15, 2024")
        );
        assert_eq!(paper.publication_year(), Some(2024));

        paper.publication_date = Some("2023-07-04T12:00:00Z".to_string());
        assert_eq!(
            paper.formatted_publication_date().as_deref(),
            Some("July 4, 2023")
        );

        paper.publication_date = Some("soon".to_string());
        assert!(paper.formatted_publication_date().is_none());
    }

    #[test]
    fn test_identifier_urls() {
        let paper = sample_paper();
        assert_eq!(
            paper.doi_url().as_deref(),
            Some("https://doi.org/10.1000/xyz123")
        );
        assert_eq!(
            paper.arxiv_url().as_deref(),
            Some("https://arxiv.org/abs/2403.00001")
        );

        let empty = PaperInfo {
            doi: Some("  ".to_string()),
            ..PaperInfo::default()
        };
        assert!(empty.doi_url().is_none());
        assert!(empty.arxiv_url().is_none());
    }

    #[test]
    fn test_result_entry_fallbacks() {
        let gallery: ResultsGallery = serde_json::from_value(json!({
            "results": [
                {"title": "A", "src": "a.jpg", "description": "d1"},
                {"title": "B", "src": "b.jpg", "description": "d2", "alt": "Bee",
                 "placeholder": "thumb/b.jpg", "category": "ablation"}
            ]
        }))
        .unwrap();

        let a = &gallery.results[0];
        assert_eq!(a.alt_text(), "A");
        assert_eq!(a.placeholder_src(), DEFAULT_PLACEHOLDER_IMAGE);
        assert_eq!(a.category(), "main");

        let b = &gallery.results[1];
        assert_eq!(b.alt_text(), "Bee");
        assert_eq!(b.placeholder_src(), "thumb/b.jpg");
        assert_eq!(b.category(), "ablation");
    }

    #[test]
    fn test_methodology_document() {
        let doc: MethodologyDocument = serde_json::from_value(json!({
            "methodology": {
                "overview": "How it works.",
                "sections": [
                    {"id": "training", "title": "Training", "summary": "s", "content": "c",
                     "details": ["lr 3e-4"]},
                    {"id": "evaluation", "title": "Evaluation", "summary": "s", "content": "c"}
                ],
                "relatedWork": [
                    {"title": "Prior", "authors": "Smith et al.", "year": 2021, "relevance": "r"},
                    {"title": "Other", "authors": "Doe", "year": "2019", "relevance": "r"}
                ]
            }
        }))
        .unwrap();

        let methodology = doc.methodology.unwrap();
        assert_eq!(methodology.sections[0].content_id(), "section-training");
        assert!(methodology.sections[1].details.is_empty());
        assert_eq!(methodology.related_work[0].byline(), "Smith et al. (2021)");
        assert_eq!(methodology.related_work[1].byline(), "Doe (2019)");
    }

    #[test]
    fn test_null_fields_read_as_missing() {
        let paper: PaperInfo = serde_json::from_str(
            r#"{"title":"T","venue":null,"authors":null,"abstract":null,
                "keyContributions":null,"doi":null}"#,
        )
        .unwrap();
        assert_eq!(paper.title, "T");
        assert!(paper.venue.is_empty());
        assert!(paper.authors.is_empty());
        assert!(paper.abstract_text.is_empty());
        assert!(paper.doi.is_none());

        let doc: MethodologyDocument = serde_json::from_value(json!({
            "methodology": {
                "overview": "How it works.",
                "sections": [
                    {"id": "training", "title": "Training", "summary": null,
                     "content": "c", "details": null}
                ],
                "relatedWork": null
            }
        }))
        .unwrap();
        let methodology = doc.methodology.unwrap();
        assert_eq!(methodology.overview, "How it works.");
        assert_eq!(methodology.sections[0].title, "Training");
        assert!(methodology.sections[0].summary.is_empty());
        assert!(methodology.sections[0].details.is_empty());
        assert!(methodology.related_work.is_empty());

        let gallery: ResultsGallery = serde_json::from_value(json!({
            "results": [{"title": "A", "src": "a.jpg", "description": null}]
        }))
        .unwrap();
        assert_eq!(gallery.results[0].src, "a.jpg");
        assert!(gallery.results[0].description.is_empty());
    }

    #[test]
    fn test_sample_gallery_images_ship_with_the_site() {
        let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
        let json = include_str!("../data/results-gallery.json");
        let gallery: ResultsGallery = serde_json::from_str(json).unwrap();
        assert!(!gallery.results.is_empty());
        for entry in &gallery.results {
            assert!(root.join(&entry.src).is_file(), "missing {}", entry.src);
            assert!(root.join(entry.placeholder_src()).is_file());
        }
    }

    #[test]
    fn test_methodology_document_without_body() {
        let doc: MethodologyDocument = serde_json::from_str("{}").unwrap();
        assert!(doc.methodology.is_none());
    }
}
