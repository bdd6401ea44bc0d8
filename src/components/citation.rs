// src/components/citation.rs
use crate::announcer::use_announcer;
use crate::citation::{format_citation, CitationStyle};
use crate::clipboard::{copy_text, feedback_schedule, select_contents, CopyFeedback};
use crate::paper_data::{non_blank, PaperInfo};
use crate::site_config::SiteConfig;
use gloo::timers::callback::Timeout;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, KeyboardEvent};
use yew::prelude::*;

const BIBTEX_PLACEHOLDER: &str = "@article{author2024paper,\n  title={Paper Title},\n  \
     author={Author One and Author Two},\n  journal={Conference},\n  year={2024}\n}";
const APA_PLACEHOLDER: &str = "One, A., & Two, A. (2024). Paper Title. Conference.";
const MLA_PLACEHOLDER: &str = "One, Author, and Author Two. \"Paper Title.\" Conference, 2024.";

fn placeholder(style: CitationStyle) -> &'static str {
    match style {
        CitationStyle::Bibtex => BIBTEX_PLACEHOLDER,
        CitationStyle::Apa => APA_PLACEHOLDER,
        CitationStyle::Mla => MLA_PLACEHOLDER,
    }
}

/// Text for the citation block. Falls back to the style's placeholder
/// entry when the data is missing or too incomplete to format.
pub fn citation_text(paper: Option<&PaperInfo>, style: CitationStyle) -> String {
    paper
        .map(|p| format_citation(p, style))
        .filter(|text| !text.trim().is_empty())
        .unwrap_or_else(|| placeholder(style).to_string())
}

pub fn keyboard_copied_message(style: CitationStyle) -> String {
    format!("{} citation copied via keyboard!", style.label())
}

fn is_copy_shortcut(event: &KeyboardEvent) -> bool {
    (event.ctrl_key() || event.meta_key()) && event.key().eq_ignore_ascii_case("c")
}

#[derive(Clone)]
pub struct CopyRequest {
    pub text: String,
    pub message: String,
    /// Selected in place when both copy paths fail.
    pub source: NodeRef,
}

/// Copy with status feedback in `#copy-feedback` and an announcement.
/// A newer copy cancels the fade timers of the previous one.
#[hook]
pub fn use_copy_action() -> (Option<CopyFeedback>, Callback<CopyRequest>) {
    let config = use_context::<Rc<SiteConfig>>().unwrap_or_default();
    let announcer = use_announcer();
    let feedback = use_state(|| None::<CopyFeedback>);
    let timers = use_mut_ref(Vec::<Timeout>::new);

    let copy = {
        let feedback = feedback.clone();
        let (hide_after, clear_after) = feedback_schedule(&config.timing);
        Callback::from(move |request: CopyRequest| {
            let feedback = feedback.clone();
            let timers = timers.clone();
            let announcer = announcer.clone();

            spawn_local(async move {
                let outcome = copy_text(&request.text).await;
                log::debug!("Copy outcome: {:?}", outcome);
                if !outcome.succeeded() {
                    if let Some(source) = request.source.cast::<Element>() {
                        select_contents(&source);
                    }
                }

                let shown = outcome.feedback(&request.message);
                announcer.announce(shown.message.clone());
                feedback.set(Some(shown.clone()));

                let hide = {
                    let feedback = feedback.clone();
                    Timeout::new(hide_after, move || {
                        feedback.set(Some(CopyFeedback {
                            visible: false,
                            ..shown
                        }))
                    })
                };
                let clear = Timeout::new(clear_after, move || feedback.set(None));

                let mut timers = timers.borrow_mut();
                timers.clear();
                timers.push(hide);
                timers.push(clear);
            });
        })
    };

    ((*feedback).clone(), copy)
}

struct Identifier<'a> {
    id: &'a str,
    label: &'a str,
    value: Option<&'a str>,
    url: Option<String>,
    message: &'a str,
}

/// DOI / arXiv block; renders nothing when the paper has no such identifier.
fn identifier_block(
    identifier: Identifier<'_>,
    node: &NodeRef,
    copy: &Callback<CopyRequest>,
) -> Html {
    let Identifier {
        id,
        label,
        value,
        url,
        message,
    } = identifier;
    let (Some(value), Some(url)) = (value, url) else {
        return html! {};
    };
    let onclick = {
        let copy = copy.clone();
        let request = CopyRequest {
            text: value.to_string(),
            message: message.to_string(),
            source: node.clone(),
        };
        Callback::from(move |_: MouseEvent| copy.emit(request.clone()))
    };
    html! {
        <div id={format!("{}-container", id)} class="identifier-container">
            <span class="identifier-label">{ label.to_string() }</span>
            <span id={format!("{}-text", id)} ref={node.clone()} class="identifier-text">{ value.to_string() }</span>
            <a
                id={format!("{}-link", id)}
                class="identifier-link"
                href={url}
                target="_blank"
                rel="noopener noreferrer"
                aria-label={format!("Open {} {} in new tab", label, value)}
            >
                {"Open"}
            </a>
            <button class="copy-identifier-btn" aria-label={format!("Copy {}", label)} {onclick}>
                {"Copy"}
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CitationProps {
    pub paper: Option<Rc<PaperInfo>>,
}

#[function_component(Citation)]
pub fn citation(props: &CitationProps) -> Html {
    let style = use_state_eq(|| CitationStyle::Bibtex);
    let code_ref = use_node_ref();
    let doi_ref = use_node_ref();
    let arxiv_ref = use_node_ref();
    let (feedback, copy) = use_copy_action();

    let paper = props.paper.as_deref();
    let text = citation_text(paper, *style);

    let tabs = CitationStyle::ALL.iter().map(|&option| {
        let onclick = {
            let style = style.clone();
            Callback::from(move |_: MouseEvent| style.set(option))
        };
        let selected = *style == option;
        html! {
            <button
                class={classes!("citation-tab", selected.then_some("active"))}
                role="tab"
                aria-selected={selected.to_string()}
                {onclick}
            >
                { option.label() }
            </button>
        }
    });

    let copy_citation = {
        let copy = copy.clone();
        let text = text.clone();
        let message = style.copied_message();
        let source = code_ref.clone();
        Callback::from(move |_: MouseEvent| {
            copy.emit(CopyRequest {
                text: text.clone(),
                message: message.clone(),
                source: source.clone(),
            })
        })
    };

    let onkeydown = {
        let copy = copy.clone();
        let text = text.clone();
        let message = keyboard_copied_message(*style);
        let source = code_ref.clone();
        Callback::from(move |e: KeyboardEvent| {
            if is_copy_shortcut(&e) {
                e.prevent_default();
                copy.emit(CopyRequest {
                    text: text.clone(),
                    message: message.clone(),
                    source: source.clone(),
                });
            }
        })
    };

    let doi = identifier_block(
        Identifier {
            id: "doi",
            label: "DOI",
            value: paper.and_then(|p| non_blank(&p.doi)),
            url: paper.and_then(PaperInfo::doi_url),
            message: "DOI copied!",
        },
        &doi_ref,
        &copy,
    );
    let arxiv = identifier_block(
        Identifier {
            id: "arxiv",
            label: "arXiv",
            value: paper.and_then(|p| non_blank(&p.arxiv_id)),
            url: paper.and_then(PaperInfo::arxiv_url),
            message: "arXiv ID copied!",
        },
        &arxiv_ref,
        &copy,
    );

    let feedback_class = feedback
        .as_ref()
        .map(CopyFeedback::class_list)
        .unwrap_or_else(|| "copy-feedback".to_string());
    let feedback_text = feedback.map(|f| f.message).unwrap_or_default();

    html! {
        <div class="citation-content">
            if paper.is_some() {
                <div class="citation-tabs" role="tablist">
                    { for tabs }
                </div>
            }
            <div class="bibtex-container" {onkeydown}>
                <pre id="bibtex-code" class="bibtex-code" tabindex="0">
                    <code ref={code_ref}>{ text }</code>
                </pre>
                <button class="copy-bibtex-btn" aria-label="Copy citation" onclick={copy_citation}>
                    {"Copy"}
                </button>
            </div>
            <div class="citation-identifiers">
                { doi }
                { arxiv }
            </div>
            <div id="copy-feedback" class={feedback_class} role="status" aria-live="polite">
                { feedback_text }
            </div>
        </div>
    }
}
