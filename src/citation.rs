// src/citation.rs
use crate::paper_data::{non_blank, PaperInfo};

const DEFAULT_VENUE: &str = "Conference Proceedings";
const DEFAULT_YEAR: i32 = 2024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CitationStyle {
    Bibtex,
    Apa,
    Mla,
}

impl CitationStyle {
    pub const ALL: [CitationStyle; 3] = [
        CitationStyle::Bibtex,
        CitationStyle::Apa,
        CitationStyle::Mla,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CitationStyle::Bibtex => "BibTeX",
            CitationStyle::Apa => "APA",
            CitationStyle::Mla => "MLA",
        }
    }

    pub fn copied_message(self) -> String {
        format!("{} citation copied!", self.label())
    }
}

/// Citation text in the requested style. BibTeX prefers the hand-written
/// entry from the data file.
pub fn format_citation(paper: &PaperInfo, style: CitationStyle) -> String {
    match style {
        CitationStyle::Bibtex => non_blank(&paper.bibtex)
            .map(str::to_string)
            .unwrap_or_else(|| generate_bibtex(paper)),
        CitationStyle::Apa => generate_apa(paper),
        CitationStyle::Mla => generate_mla(paper),
    }
}

fn year(paper: &PaperInfo) -> i32 {
    paper.publication_year().unwrap_or(DEFAULT_YEAR)
}

fn venue(paper: &PaperInfo) -> &str {
    if paper.venue.trim().is_empty() {
        DEFAULT_VENUE
    } else {
        &paper.venue
    }
}

fn last_name(full_name: &str) -> &str {
    full_name.split_whitespace().last().unwrap_or(full_name)
}

pub fn generate_bibtex(paper: &PaperInfo) -> String {
    if paper.title.is_empty() || paper.authors.is_empty() {
        return String::new();
    }
    let key = format!(
        "{}{}",
        last_name(&paper.authors[0].name).to_lowercase(),
        year(paper)
    );
    let authors = paper
        .authors
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(" and ");

    let mut entry = format!(
        "@article{{{},\n  title={{{}}},\n  author={{{}}},\n  journal={{{}}},\n  year={{{}}}",
        key,
        paper.title,
        authors,
        venue(paper),
        year(paper)
    );
    if let Some(doi) = non_blank(&paper.doi) {
        entry.push_str(&format!(",\n  doi={{{}}}", doi));
    }
    entry.push_str("\n}");
    entry
}

pub fn generate_apa(paper: &PaperInfo) -> String {
    if paper.title.is_empty() || paper.authors.is_empty() {
        return String::new();
    }
    let authors = paper
        .authors
        .iter()
        .map(|author| {
            let mut parts: Vec<&str> = author.name.split_whitespace().collect();
            let last = parts.pop().unwrap_or("");
            let initials = parts
                .iter()
                .filter_map(|p| p.chars().next())
                .map(|c| c.to_uppercase().to_string())
                .collect::<Vec<_>>()
                .join(". ");
            if initials.is_empty() {
                last.to_string()
            } else {
                format!("{}, {}.", last, initials)
            }
        })
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{} ({}). {}. {}.",
        authors,
        year(paper),
        paper.title,
        venue(paper)
    )
}

pub fn generate_mla(paper: &PaperInfo) -> String {
    let Some(first) = paper.authors.first() else {
        return String::new();
    };
    if paper.title.is_empty() {
        return String::new();
    }
    let parts: Vec<&str> = first.name.split_whitespace().collect();
    let author = match parts.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{}, {}", last, rest.join(" ")),
        Some((last, _)) => last.to_string(),
        None => first.name.clone(),
    };
    let et_al = if paper.authors.len() > 1 {
        ", et al"
    } else {
        ""
    };

    format!(
        "{}{}. \"{}.\" {}, {}.",
        author,
        et_al,
        paper.title,
        venue(paper),
        year(paper)
    )
}

/// Fields a citation cannot do without. Empty when the data is complete.
pub fn validate_citation_data(paper: &PaperInfo) -> Vec<&'static str> {
    let mut errors = Vec::new();
    if paper.title.trim().is_empty() {
        errors.push("Missing paper title");
    }
    if paper.authors.is_empty() {
        errors.push("Missing authors");
    }
    if paper.venue.trim().is_empty() {
        errors.push("Missing publication venue");
    }
    if non_blank(&paper.publication_date).is_none() {
        errors.push("Missing publication date");
    }
    errors
}
