// src/components/hero.rs
use crate::paper_data::{non_blank, PaperInfo};
use std::rc::Rc;
use yew::prelude::*;

const TITLE_PLACEHOLDER: &str = "Paper Title";
const SUBTITLE_PLACEHOLDER: &str = "A short description of the contribution";
const AUTHORS_PLACEHOLDER: &str = "Author One, Author Two";
const AFFILIATION_PLACEHOLDER: &str = "Institution";
const VENUE_PLACEHOLDER: &str = "Conference";

#[derive(Debug, Clone, PartialEq)]
pub struct HeroAuthor {
    pub name: String,
    pub website: Option<String>,
}

/// Hero text after merging the paper data into the placeholders. Each field
/// only replaces its placeholder when the data carries a usable value.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroContent {
    pub title: String,
    /// `None` hides the subtitle line.
    pub subtitle: Option<String>,
    pub authors: Vec<HeroAuthor>,
    pub affiliations: Vec<String>,
    pub venue: String,
    /// Display text and the raw value for `datetime`.
    pub date: Option<(String, String)>,
    pub pdf_url: Option<String>,
    pub code_url: Option<String>,
}

impl HeroContent {
    pub fn placeholder() -> Self {
        Self {
            title: TITLE_PLACEHOLDER.to_string(),
            subtitle: Some(SUBTITLE_PLACEHOLDER.to_string()),
            authors: vec![HeroAuthor {
                name: AUTHORS_PLACEHOLDER.to_string(),
                website: None,
            }],
            affiliations: vec![AFFILIATION_PLACEHOLDER.to_string()],
            venue: VENUE_PLACEHOLDER.to_string(),
            date: None,
            pdf_url: None,
            code_url: None,
        }
    }

    pub fn from_paper(paper: Option<&PaperInfo>) -> Self {
        let mut content = Self::placeholder();
        let Some(paper) = paper else {
            return content;
        };

        if !paper.title.trim().is_empty() {
            content.title = paper.title.clone();
        }
        content.subtitle = non_blank(&paper.subtitle).map(str::to_string);
        if !paper.authors.is_empty() {
            content.authors = paper
                .authors
                .iter()
                .map(|a| HeroAuthor {
                    name: a.name.clone(),
                    website: non_blank(&a.website).map(str::to_string),
                })
                .collect();
            content.affiliations = paper.unique_affiliations();
        }
        if !paper.venue.trim().is_empty() {
            content.venue = paper.venue.clone();
        }
        content.date = paper
            .formatted_publication_date()
            .zip(paper.publication_date.clone());
        content.pdf_url = non_blank(&paper.pdf_url).map(str::to_string);
        content.code_url = non_blank(&paper.code_url).map(str::to_string);
        content
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub paper: Option<Rc<PaperInfo>>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let content = use_memo(props.paper.clone(), |paper| {
        HeroContent::from_paper(paper.as_deref())
    });

    let last = content.authors.len().saturating_sub(1);
    let authors = content.authors.iter().enumerate().map(|(i, author)| {
        let name = match &author.website {
            Some(website) => html! {
                <a
                    href={website.clone()}
                    class="author-name"
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label={format!("Visit {}'s website", author.name)}
                >
                    { author.name.clone() }
                </a>
            },
            None => html! { <span class="author-name">{ author.name.clone() }</span> },
        };
        html! {
            <>
                { name }
                if i < last { {", "} }
            </>
        }
    });

    let last = content.affiliations.len().saturating_sub(1);
    let affiliations = content.affiliations.iter().enumerate().map(|(i, affiliation)| {
        html! {
            <>
                <span class="affiliation">{ affiliation.clone() }</span>
                if i < last { {" • "} }
            </>
        }
    });

    html! {
        <div class="hero-content">
            <h1 id="paper-title" class="paper-title">{ content.title.clone() }</h1>
            if let Some(subtitle) = &content.subtitle {
                <p id="paper-subtitle" class="paper-subtitle">{ subtitle.clone() }</p>
            }
            <div class="authors">
                <p id="authors-list" class="authors-list">{ for authors }</p>
                <p id="authors-affiliations" class="authors-affiliations">{ for affiliations }</p>
            </div>
            <div class="publication-info">
                <span id="publication-venue" class="publication-venue">{ content.venue.clone() }</span>
                if let Some((display, raw)) = &content.date {
                    <time id="publication-date" class="publication-date" datetime={raw.clone()}>
                        { display.clone() }
                    </time>
                }
            </div>
            <div class="hero-actions">
                if let Some(url) = &content.pdf_url {
                    <a id="paper-pdf-link" class="btn btn-primary" href={url.clone()} target="_blank" rel="noopener noreferrer">
                        {"Read Paper"}
                    </a>
                }
                if let Some(url) = &content.code_url {
                    <a id="code-link" class="btn btn-secondary" href={url.clone()} target="_blank" rel="noopener noreferrer">
                        {"View Code"}
                    </a>
                }
            </div>
        </div>
    }
}
