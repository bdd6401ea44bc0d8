// src/components/footer.rs
use crate::paper_data::{non_blank, Author, PaperInfo};
use crate::site_config::SiteConfig;
use crate::utils::smooth_scroll_to;
use gloo::timers::callback::Timeout;
use gloo_utils::document;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

const COPYRIGHT_PLACEHOLDER: &str = "The Authors";

/// Optional resource links, in footer order: `(element id, label, url)`.
pub fn resource_links(paper: &PaperInfo) -> Vec<(&'static str, &'static str, String)> {
    [
        ("dataset-link", "Dataset", &paper.dataset_url),
        ("supplementary-link", "Supplementary Materials", &paper.supplementary_url),
        ("slides-link", "Presentation Slides", &paper.slides_url),
    ]
    .into_iter()
    .filter_map(|(id, label, url)| non_blank(url).map(|url| (id, label, url.to_string())))
    .collect()
}

pub fn copyright_authors(paper: Option<&PaperInfo>) -> String {
    match paper {
        Some(paper) if !paper.authors.is_empty() => paper.author_names(),
        _ => COPYRIGHT_PLACEHOLDER.to_string(),
    }
}

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

fn contact_card(author: &Author) -> Html {
    let website = non_blank(&author.website).map(|url| {
        html! {
            <a
                href={url.to_string()}
                class="contact-link"
                target="_blank"
                rel="noopener noreferrer"
                aria-label={format!("Visit {}'s website", author.name)}
            >
                <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <circle cx="12" cy="12" r="10"></circle>
                    <path d="M2 12h20"></path>
                    <path d="M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z"></path>
                </svg>
                {"Website"}
            </a>
        }
    });
    let email = non_blank(&author.email).map(|email| {
        html! {
            <a
                href={format!("mailto:{}", email)}
                class="contact-link"
                aria-label={format!("Send email to {}", author.name)}
            >
                <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <path d="M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z"></path>
                    <polyline points="22,6 12,13 2,6"></polyline>
                </svg>
                {"Email"}
            </a>
        }
    });
    let has_links = website.is_some() || email.is_some();

    html! {
        <div class="author-contact">
            <h4 class="contact-name">{ author.name.clone() }</h4>
            if let Some(affiliation) = non_blank(&author.affiliation) {
                <p class="contact-affiliation">{ affiliation.to_string() }</p>
            }
            if has_links {
                <div class="contact-links">
                    { website.unwrap_or_default() }
                    { email.unwrap_or_default() }
                </div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub paper: Option<Rc<PaperInfo>>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let config = use_context::<Rc<SiteConfig>>().unwrap_or_default();
    let tabindex_timer = use_mut_ref(|| None::<Timeout>);
    let paper = props.paper.as_deref();

    let back_to_top = {
        let delay = config.timing.focus_delay_ms;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            smooth_scroll_to(0.0);

            let Some(hero) = document()
                .get_element_by_id("hero")
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            else {
                return;
            };
            let _ = hero.set_attribute("tabindex", "-1");
            let _ = hero.focus();
            *tabindex_timer.borrow_mut() = Some(Timeout::new(delay, move || {
                let _ = hero.remove_attribute("tabindex");
            }));
        })
    };

    let contacts = match paper {
        Some(paper) if !paper.authors.is_empty() => {
            html! { <>{ for paper.authors.iter().map(contact_card) }</> }
        }
        _ => contact_card(&Author {
            name: "Corresponding Author".to_string(),
            affiliation: Some("Institution".to_string()),
            ..Author::default()
        }),
    };

    let links = paper.map(resource_links).unwrap_or_default();

    html! {
        <footer class="footer">
            <div class="footer-content">
                <div class="footer-section">
                    <h3 class="footer-heading">{"Contact"}</h3>
                    <div id="authors-contact" class="authors-contact">{ contacts }</div>
                </div>
                <div class="footer-section">
                    <h3 class="footer-heading">{"Resources"}</h3>
                    <ul class="footer-links">
                        { for links.into_iter().map(|(id, label, url)| html! {
                            <li>
                                <a id={id} class="footer-link" href={url} target="_blank" rel="noopener noreferrer">
                                    { label }
                                </a>
                            </li>
                        }) }
                        <li>
                            <a class="footer-link" href="#hero" onclick={back_to_top}>{"Back to top"}</a>
                        </li>
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">
                <p class="copyright">
                    {"© "}
                    <span id="current-year">{ current_year().to_string() }</span>
                    {" "}
                    <span id="copyright-authors">{ copyright_authors(paper) }</span>
                    {". All rights reserved."}
                </p>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_links_skip_missing() {
        let paper = PaperInfo {
            dataset_url: Some("https://data.example".to_string()),
            supplementary_url: Some("  ".to_string()),
            slides_url: None,
            ..PaperInfo::default()
        };
        assert_eq!(
            resource_links(&paper),
            vec![("dataset-link", "Dataset", "https://data.example".to_string())]
        );
        assert!(resource_links(&PaperInfo::default()).is_empty());
    }

    #[test]
    fn test_copyright_authors() {
        let paper = PaperInfo {
            authors: vec![
                Author {
                    name: "Ada Lovelace".to_string(),
                    ..Author::default()
                },
                Author {
                    name: "Alan Turing".to_string(),
                    ..Author::default()
                },
            ],
            ..PaperInfo::default()
        };
        assert_eq!(copyright_authors(Some(&paper)), "Ada Lovelace, Alan Turing");
        assert_eq!(copyright_authors(None), COPYRIGHT_PLACEHOLDER);
    }
}
