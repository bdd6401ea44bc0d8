// src/components/methodology.rs
use crate::announcer::use_announcer;
use crate::collapsible::{
    bulk_announcement, bulk_shortcut, toggle_announcement, BulkShortcut, SectionAction, SectionSet,
};
use crate::paper_data::{Methodology, MethodologySection, RelatedWork};
use crate::site_config::SiteConfig;
use crate::utils::{header_height, offset_scroll_target, smooth_scroll_to};
use crate::viewport::{observer_supported, ViewportWatch};
use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use gloo_utils::{document, window};
use std::collections::HashSet;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent};
use yew::prelude::*;

const OVERVIEW_PLACEHOLDER: &str =
    "An overview of the approach and how it was evaluated will appear here.";

#[derive(Properties, PartialEq)]
pub struct MethodologyProps {
    /// `None` until `methodology.json` has loaded (or when it never does).
    pub methodology: Option<Rc<Methodology>>,
}

/// What the section shows: every part the data provides replaces its
/// placeholder, the rest keep theirs.
pub fn resolve_methodology(data: Option<&Methodology>) -> Methodology {
    let mut view = Methodology {
        overview: OVERVIEW_PLACEHOLDER.to_string(),
        sections: placeholder_sections(),
        related_work: Vec::new(),
    };
    let Some(data) = data else {
        return view;
    };
    if !data.overview.trim().is_empty() {
        view.overview = data.overview.clone();
    }
    if !data.sections.is_empty() {
        view.sections = data.sections.clone();
        dedupe_section_ids(&mut view.sections);
    }
    if !data.related_work.is_empty() {
        view.related_work = data.related_work.clone();
    }
    view
}

/// Repeated ids get a numeric suffix so each section keeps its own state.
fn dedupe_section_ids(sections: &mut [MethodologySection]) {
    let mut seen = HashSet::new();
    for section in sections.iter_mut() {
        let mut id = section.id.clone();
        let mut n = 2;
        while !seen.insert(id.clone()) {
            id = format!("{}-{}", section.id, n);
            n += 1;
        }
        if id != section.id {
            log::warn!("Duplicate section id {:?} renamed to {:?}", section.id, id);
            section.id = id;
        }
    }
}

fn placeholder_sections() -> Vec<MethodologySection> {
    [
        ("architecture", "Model Architecture", "Components and how they connect"),
        ("training", "Training Procedure", "Data, objectives and schedule"),
        ("evaluation", "Evaluation Protocol", "Benchmarks and metrics"),
        ("implementation", "Implementation Details", "Frameworks and hardware"),
    ]
    .iter()
    .map(|(id, title, summary)| MethodologySection {
        id: id.to_string(),
        title: title.to_string(),
        summary: summary.to_string(),
        content: String::new(),
        details: Vec::new(),
    })
    .collect()
}

pub fn diagram_label(section_id: &str) -> &'static str {
    match section_id {
        "architecture" => "Architecture Diagram",
        "training" => "Training Pipeline",
        "evaluation" => "Evaluation Metrics",
        "implementation" => "Implementation Stack",
        _ => "Technical Diagram",
    }
}

fn diagram_icon(section_id: &str) -> Html {
    match section_id {
        "training" => html! {
            <>
                <path d="M12 2L2 7l10 5 10-5-10-5z"></path>
                <path d="M2 17l10 5 10-5"></path>
                <path d="M2 12l10 5 10-5"></path>
            </>
        },
        "evaluation" => html! {
            <>
                <path d="M3 3v18h18"></path>
                <path d="M18.7 8l-5.1 5.2-2.8-2.7L7 14.3"></path>
            </>
        },
        "implementation" => html! {
            <>
                <polyline points="16 18 22 12 16 6"></polyline>
                <polyline points="8 6 2 12 8 18"></polyline>
            </>
        },
        // architecture, and anything without its own icon
        _ => html! {
            <>
                <rect x="3" y="3" width="18" height="18" rx="2" ry="2"></rect>
                <path d="M9 9h6v6H9z"></path>
                <path d="M9 1v6M15 1v6M9 17v6M15 17v6M1 9h6M1 15h6M17 9h6M17 15h6"></path>
            </>
        },
    }
}

fn measure(node: &NodeRef) -> f64 {
    node.cast::<Element>()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0)
}

/// Natural content height of every section, in page order.
fn measure_all(ids: &[String], refs: &[NodeRef]) -> Vec<(String, f64)> {
    ids.iter()
        .zip(refs)
        .map(|(id, node)| (id.clone(), measure(node)))
        .collect()
}

/// Bring a freshly expanded section's header out from under the fixed page
/// header.
fn reveal_toggle(toggle: &NodeRef, gap: f64) {
    let Some(toggle) = toggle.cast::<HtmlElement>() else {
        return;
    };
    let header = header_height();
    if toggle.get_bounding_client_rect().top() < header + gap {
        smooth_scroll_to(offset_scroll_target(toggle.offset_top() as f64, header, gap));
    }
}

#[function_component(MethodologyView)]
pub fn methodology_view(props: &MethodologyProps) -> Html {
    let config = use_context::<Rc<SiteConfig>>().unwrap_or_default();
    let announcer = use_announcer();

    let view = use_memo(props.methodology.clone(), |data| {
        resolve_methodology(data.as_deref())
    });
    let ids = use_memo(view.clone(), |view| {
        view.sections.iter().map(|s| s.id.clone()).collect::<Vec<_>>()
    });

    let sections = {
        let ids = ids.clone();
        use_reducer(move || SectionSet::new(ids.iter().cloned()))
    };

    // One ref per section for each of: wrapper, toggle, content.
    let refs = use_memo(ids.len(), |len| {
        let make = || (0..*len).map(|_| NodeRef::default()).collect::<Vec<_>>();
        (make(), make(), make())
    });
    let scroll_timer = use_mut_ref(|| None::<Timeout>);

    {
        let dispatcher = sections.dispatcher();
        use_effect_with(ids.clone(), move |ids| {
            dispatcher.dispatch(SectionAction::Reset(ids.to_vec()));
            || ()
        });
    }

    // Bulk toggles announce once and never scroll, unlike single toggles.
    let bulk = {
        let dispatcher = sections.dispatcher();
        let announcer = announcer.clone();
        let ids = ids.clone();
        let refs = refs.clone();
        Callback::from(move |expand: bool| {
            let heights = measure_all(&ids, &refs.2);
            dispatcher.dispatch(SectionAction::ToggleMany { expand, heights });
            announcer.announce(bulk_announcement(expand));
        })
    };

    // ------ ALT+E / ALT+C ------
    {
        let bulk = bulk.clone();
        use_effect_with(ids.clone(), move |_| {
            let listener = EventListener::new_with_options(
                &document(),
                "keydown",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    if let Some(shortcut) = bulk_shortcut(&event.key(), event.alt_key()) {
                        event.prevent_default();
                        bulk.emit(shortcut == BulkShortcut::ExpandAll);
                    }
                },
            );
            move || drop(listener)
        });
    }

    // ------ RESIZE ------
    {
        let dispatcher = sections.dispatcher();
        let refs = refs.clone();
        use_effect_with(ids.clone(), move |ids| {
            let ids = ids.clone();
            let listener = EventListener::new(&window(), "resize", move |_| {
                dispatcher.dispatch(SectionAction::Remeasure(measure_all(&ids, &refs.2)));
            });
            move || drop(listener)
        });
    }

    // ------ IN-VIEW MARKERS ------
    {
        let refs = refs.clone();
        use_effect_with(ids.clone(), move |_| {
            let targets: Vec<Element> = refs.0.iter().filter_map(|r| r.cast::<Element>()).collect();
            let watch = if observer_supported() {
                ViewportWatch::new(&targets, "0px 0px -50px 0px", 0.1, |el| {
                    let _ = el.class_list().add_1("in-view");
                })
                .map_err(|e| log::debug!("Section observer not started: {:?}", e))
                .ok()
            } else {
                None
            };
            move || drop(watch)
        });
    }

    let toggle = {
        let dispatcher = sections.dispatcher();
        let state = sections.clone();
        let view = view.clone();
        let refs = refs.clone();
        let scroll_timer = scroll_timer.clone();
        let delay = config.timing.expand_scroll_delay_ms;
        let gap = config.scroll_offset;
        Callback::from(move |index: usize| {
            let Some(section) = view.sections.get(index) else {
                return;
            };
            let expand = !state.is_expanded(&section.id);
            let height = refs.2.get(index).map(measure).unwrap_or(0.0);
            dispatcher.dispatch(SectionAction::Toggle {
                id: section.id.clone(),
                expand,
                height,
            });
            announcer.announce(toggle_announcement(Some(&section.title), expand));

            if expand {
                if let Some(toggle_ref) = refs.1.get(index).cloned() {
                    let timer = Timeout::new(delay, move || reveal_toggle(&toggle_ref, gap));
                    *scroll_timer.borrow_mut() = Some(timer);
                }
            }
        })
    };

    let section_items = view.sections.iter().enumerate().map(|(index, section)| {
        let expanded = sections.is_expanded(&section.id);
        let content_id = section.content_id();

        let onclick = toggle.reform(move |_: MouseEvent| index);
        let onkeydown = {
            let toggle = toggle.clone();
            Callback::from(move |e: KeyboardEvent| {
                if matches!(e.key().as_str(), "Enter" | " ") {
                    e.prevent_default();
                    toggle.emit(index);
                }
            })
        };

        let icon_style = if expanded {
            "transform: rotate(180deg)"
        } else {
            "transform: rotate(0deg)"
        };

        html! {
            <div
                key={section.id.clone()}
                ref={refs.0[index].clone()}
                class="methodology-section"
                data-section={section.id.clone()}
            >
                <div class="section-header">
                    <button
                        ref={refs.1[index].clone()}
                        class="section-toggle"
                        aria-expanded={expanded.to_string()}
                        aria-controls={content_id.clone()}
                        {onclick}
                        {onkeydown}
                    >
                        <div class="section-title-group">
                            <h3 class="section-title">{ section.title.clone() }</h3>
                            <p class="section-summary">{ section.summary.clone() }</p>
                        </div>
                        <div class="section-icon">
                            <svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" style={icon_style}>
                                <polyline points="6 9 12 15 18 9"></polyline>
                            </svg>
                        </div>
                    </button>
                </div>
                <div
                    ref={refs.2[index].clone()}
                    class="section-content"
                    id={content_id}
                    aria-hidden={(!expanded).to_string()}
                    style={format!("max-height: {}", sections.max_height(&section.id))}
                >
                    <div class="content-layout">
                        <div class="content-text">
                            <p class="content-description">{ section.content.clone() }</p>
                            if !section.details.is_empty() {
                                <ul class="content-details">
                                    { for section.details.iter().map(|d| html! { <li>{ d.clone() }</li> }) }
                                </ul>
                            }
                        </div>
                        <div class="content-diagram">
                            <div class="diagram-placeholder">
                                <svg class="diagram-icon" width="48" height="48" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5">
                                    { diagram_icon(&section.id) }
                                </svg>
                                <p class="diagram-label">{ diagram_label(&section.id) }</p>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        }
    });

    let expand_all = bulk.reform(|_: MouseEvent| true);
    let collapse_all = bulk.reform(|_: MouseEvent| false);

    html! {
        <>
            <p id="methodology-overview" class="methodology-overview">{ view.overview.clone() }</p>
            <div class="methodology-controls">
                <button class="expand-all-btn" onclick={expand_all} title="Alt+E">{"Expand all"}</button>
                <button class="collapse-all-btn" onclick={collapse_all} title="Alt+C">{"Collapse all"}</button>
            </div>
            <div id="methodology-sections" class="methodology-sections">
                { for section_items }
            </div>
            if !view.related_work.is_empty() {
                <div class="related-work">
                    <h3 class="related-work-heading">{"Related Work"}</h3>
                    <div class="related-work-grid">
                        { for view.related_work.iter().map(related_work_card) }
                    </div>
                </div>
            }
        </>
    }
}

fn related_work_card(work: &RelatedWork) -> Html {
    html! {
        <div class="related-work-item">
            <h4 class="work-title">{ work.title.clone() }</h4>
            <p class="work-authors">{ work.byline() }</p>
            <p class="work-relevance">{ work.relevance.clone() }</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_document_keeps_placeholders() {
        let view = resolve_methodology(None);
        assert_eq!(view.overview, OVERVIEW_PLACEHOLDER);
        assert_eq!(view.sections.len(), 4);
        assert!(view.related_work.is_empty());
    }

    #[test]
    fn test_duplicate_section_ids_are_made_unique() {
        let section = |id: &str| MethodologySection {
            id: id.to_string(),
            ..MethodologySection::default()
        };
        let data = Methodology {
            sections: vec![section("training"), section("training"), section("eval")],
            ..Methodology::default()
        };
        let view = resolve_methodology(Some(&data));
        let ids: Vec<_> = view.sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["training", "training-2", "eval"]);

        let mut set = SectionSet::new(ids);
        assert!(set.toggle("training-2", true, 120.0));
        assert!(set.is_expanded("training-2"));
        assert!(!set.is_expanded("training"));
    }

    #[test]
    fn test_data_replaces_only_what_it_provides() {
        let data = Methodology {
            overview: "We train a small model.".to_string(),
            ..Methodology::default()
        };
        let view = resolve_methodology(Some(&data));
        assert_eq!(view.overview, "We train a small model.");
        assert_eq!(view.sections, placeholder_sections());

        let data = Methodology {
            overview: "   ".to_string(),
            sections: vec![MethodologySection {
                id: "data".to_string(),
                title: "Data".to_string(),
                ..MethodologySection::default()
            }],
            related_work: vec![RelatedWork {
                title: "Prior".to_string(),
                authors: "Smith et al.".to_string(),
                year: json!(2021),
                relevance: "Baseline".to_string(),
            }],
        };
        let view = resolve_methodology(Some(&data));
        assert_eq!(view.overview, OVERVIEW_PLACEHOLDER);
        assert_eq!(view.sections.len(), 1);
        assert_eq!(view.sections[0].content_id(), "section-data");
        assert_eq!(view.related_work[0].byline(), "Smith et al. (2021)");
    }

    #[test]
    fn test_diagram_labels() {
        assert_eq!(diagram_label("architecture"), "Architecture Diagram");
        assert_eq!(diagram_label("training"), "Training Pipeline");
        assert_eq!(diagram_label("evaluation"), "Evaluation Metrics");
        assert_eq!(diagram_label("implementation"), "Implementation Stack");
        assert_eq!(diagram_label("ablations"), "Technical Diagram");
    }

    #[test]
    fn test_measure_all_pairs_ids_with_refs() {
        let ids = vec!["a".to_string(), "b".to_string()];
        let refs = vec![NodeRef::default(), NodeRef::default()];
        // unmounted refs measure as zero
        assert_eq!(
            measure_all(&ids, &refs),
            vec![("a".to_string(), 0.0), ("b".to_string(), 0.0)]
        );
    }
}
