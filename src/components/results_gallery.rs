// src/components/results_gallery.rs
use crate::announcer::use_announcer;
use crate::components::lazy_image::LazyImage;
use crate::components::lightbox::Lightbox;
use crate::focus::focus_node;
use crate::gallery::{placeholder_entries, GalleryIndex};
use crate::gesture::{TapTracker, TouchPoint};
use crate::lightbox::{Direction, LightboxAction, LightboxPhase, LightboxState};
use crate::paper_data::ResultEntry;
use crate::site_config::SiteConfig;
use crate::utils::set_body_overflow;
use std::rc::Rc;
use web_sys::{KeyboardEvent, TouchEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ResultsGalleryProps {
    /// `None` until `results-gallery.json` has loaded.
    pub results: Option<Rc<Vec<ResultEntry>>>,
}

/// The entries to render: the fetched list, or the placeholders when the
/// document is missing or empty.
pub fn gallery_entries(results: Option<&[ResultEntry]>) -> Vec<ResultEntry> {
    match results {
        Some(results) if !results.is_empty() => results.to_vec(),
        _ => placeholder_entries(),
    }
}

pub fn item_label(title: &str) -> String {
    let title = title.trim();
    format!(
        "View {} in full size",
        if title.is_empty() { "image" } else { title }
    )
}

/// Enter and Space open the item under focus.
fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

#[function_component(ResultsGallery)]
pub fn results_gallery(props: &ResultsGalleryProps) -> Html {
    let config = use_context::<Rc<SiteConfig>>().unwrap_or_default();
    let announcer = use_announcer();

    let entries = use_memo(props.results.clone(), |results| {
        gallery_entries(results.as_ref().map(|r| r.as_slice()))
    });

    let lightbox = {
        let entries = entries.clone();
        use_reducer(move || LightboxState::new(GalleryIndex::from_entries(&entries)))
    };

    let item_refs = use_memo(entries.len(), |len| {
        (0..*len).map(|_| NodeRef::default()).collect::<Vec<_>>()
    });
    let tap = use_mut_ref(TapTracker::default);

    // Fresh markup means a fresh index; an open overlay is closed by it.
    {
        let dispatcher = lightbox.dispatcher();
        use_effect_with(entries.clone(), move |entries| {
            dispatcher.dispatch(LightboxAction::Rebuild(GalleryIndex::from_entries(entries)));
            || ()
        });
    }

    // ------ PHASE SIDE EFFECTS ------
    {
        let item_refs = item_refs.clone();
        let announcement = lightbox.announcement();
        use_effect_with(lightbox.phase().clone(), move |phase| {
            match phase {
                LightboxPhase::Open { index } => {
                    log::debug!("Lightbox open at {}", index);
                    set_body_overflow("hidden");
                    if let Some(message) = announcement {
                        announcer.announce(message);
                    }
                }
                LightboxPhase::Closed { return_focus } => {
                    set_body_overflow("");
                    if let Some(node) = return_focus.and_then(|i| item_refs.get(i)) {
                        focus_node(node);
                    }
                }
            }
            || ()
        });
    }

    let open = {
        let dispatcher = lightbox.dispatcher();
        Callback::from(move |index: usize| dispatcher.dispatch(LightboxAction::Open(index)))
    };
    let on_close = {
        let dispatcher = lightbox.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(LightboxAction::Close))
    };
    let on_navigate = {
        let dispatcher = lightbox.dispatcher();
        Callback::from(move |direction: Direction| {
            dispatcher.dispatch(LightboxAction::Navigate(direction))
        })
    };

    let items = entries.iter().enumerate().map(|(index, entry)| {
        let onclick = open.reform(move |_: MouseEvent| index);

        let onkeydown = {
            let open = open.clone();
            Callback::from(move |e: KeyboardEvent| {
                if is_activation_key(&e.key()) {
                    e.prevent_default();
                    open.emit(index);
                }
            })
        };

        let ontouchstart = {
            let tap = tap.clone();
            Callback::from(move |e: TouchEvent| {
                if let Some(t) = e.touches().get(0) {
                    let point = TouchPoint::new(t.client_x() as f64, t.client_y() as f64);
                    tap.borrow_mut().begin(point, js_sys::Date::now());
                }
            })
        };

        let ontouchend = {
            let tap = tap.clone();
            let open = open.clone();
            let limits = config.gestures.clone();
            Callback::from(move |e: TouchEvent| {
                let Some(t) = e.changed_touches().get(0) else {
                    return;
                };
                let point = TouchPoint::new(t.client_x() as f64, t.client_y() as f64);
                if tap.borrow_mut().finish(point, js_sys::Date::now(), &limits) {
                    e.prevent_default();
                    open.emit(index);
                }
            })
        };

        let on_zoom = open.reform(move |e: MouseEvent| {
            e.stop_propagation();
            index
        });

        html! {
            <div
                key={index}
                ref={item_refs[index].clone()}
                class="result-item"
                tabindex="0"
                role="button"
                aria-label={item_label(&entry.title)}
                data-category={entry.category().to_string()}
                {onclick}
                {onkeydown}
                {ontouchstart}
                {ontouchend}
            >
                <div class="result-image-container">
                    <LazyImage
                        src={entry.src.clone()}
                        placeholder={entry.placeholder_src().to_string()}
                        alt={entry.alt_text().to_string()}
                    />
                    <button class="zoom-btn" aria-label={item_label(&entry.title)} onclick={on_zoom}>
                        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                            <circle cx="11" cy="11" r="8"></circle>
                            <path d="m21 21-4.35-4.35"></path>
                            <path d="M11 8v6"></path>
                            <path d="M8 11h6"></path>
                        </svg>
                    </button>
                </div>
                <div class="result-info">
                    <h3 class="result-title">{ entry.title.clone() }</h3>
                    <p class="result-description">{ entry.description.clone() }</p>
                </div>
            </div>
        }
    });

    html! {
        <>
            <div class="results-gallery" id="results-gallery">
                { for items }
            </div>
            <Lightbox
                item={lightbox.current_item().cloned()}
                index={lightbox.current_index()}
                prev_disabled={lightbox.prev_disabled()}
                next_disabled={lightbox.next_disabled()}
                {on_close}
                {on_navigate}
            />
        </>
    }
}
