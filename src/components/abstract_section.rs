// src/components/abstract_section.rs
use crate::paper_data::PaperInfo;
use std::rc::Rc;
use yew::prelude::*;

const ABSTRACT_PLACEHOLDER: &str = "The paper abstract will appear here.";

fn placeholder_contributions() -> Vec<String> {
    vec![
        "First key contribution".to_string(),
        "Second key contribution".to_string(),
        "Third key contribution".to_string(),
    ]
}

#[derive(Properties, PartialEq)]
pub struct AbstractSectionProps {
    pub paper: Option<Rc<PaperInfo>>,
}

/// Abstract text and contributions, falling back to placeholders per field.
pub fn abstract_content(paper: Option<&PaperInfo>) -> (String, Vec<String>) {
    let text = paper
        .map(|p| p.abstract_text.trim())
        .filter(|t| !t.is_empty())
        .unwrap_or(ABSTRACT_PLACEHOLDER)
        .to_string();
    let contributions = paper
        .map(|p| p.key_contributions.clone())
        .filter(|c| !c.is_empty())
        .unwrap_or_else(placeholder_contributions);
    (text, contributions)
}

#[function_component(AbstractSection)]
pub fn abstract_section(props: &AbstractSectionProps) -> Html {
    let content = use_memo(props.paper.clone(), |p| abstract_content(p.as_deref()));
    let (text, contributions) = &*content;

    html! {
        <div class="abstract-content">
            <p id="abstract-text" class="abstract-text">{ text.clone() }</p>
            <div class="key-contributions">
                <h3>{"Key Contributions"}</h3>
                <ul id="contributions-list" class="contributions-list">
                    { for contributions.iter().map(|c| html! {
                        <li class="contribution-item">{ c.clone() }</li>
                    }) }
                </ul>
            </div>
        </div>
    }
}
