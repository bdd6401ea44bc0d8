// src/components/lightbox.rs
use crate::focus::{focus_node, trap_tab, FOCUSABLE_SELECTOR};
use crate::gallery::GalleryItem;
use crate::gesture::{SwipeTracker, TouchPoint};
use crate::lightbox::{key_command, Direction, KeyCommand};
use crate::site_config::SiteConfig;
use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use gloo_utils::document;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent, TouchEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LightboxProps {
    /// `None` while closed.
    pub item: Option<GalleryItem>,
    pub index: Option<usize>,
    pub prev_disabled: bool,
    pub next_disabled: bool,
    pub on_close: Callback<()>,
    pub on_navigate: Callback<Direction>,
}

fn first_touch(e: &TouchEvent, changed: bool) -> Option<TouchPoint> {
    let list = if changed {
        e.changed_touches()
    } else {
        e.touches()
    };
    list.get(0)
        .map(|t| TouchPoint::new(t.client_x() as f64, t.client_y() as f64))
}

#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    let config = use_context::<Rc<SiteConfig>>().unwrap_or_default();
    let overlay_ref = use_node_ref();
    let close_ref = use_node_ref();
    let swipe = use_mut_ref(SwipeTracker::default);
    let is_open = props.item.is_some();

    // ------ FOCUS THE CLOSE BUTTON ------
    {
        let close_ref = close_ref.clone();
        let delay = config.timing.focus_delay_ms;
        use_effect_with(props.index, move |index| {
            let timeout = index.map(|_| Timeout::new(delay, move || focus_node(&close_ref)));
            move || drop(timeout)
        });
    }

    // ------ KEYBOARD WHILE OPEN ------
    {
        let on_close = props.on_close.clone();
        let on_navigate = props.on_navigate.clone();
        let overlay_ref = overlay_ref.clone();

        use_effect_with(is_open, move |open| {
            let listener = open.then(|| {
                EventListener::new_with_options(
                    &document(),
                    "keydown",
                    EventListenerOptions::enable_prevent_default(),
                    move |event| {
                        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                            return;
                        };
                        match key_command(&event.key(), event.shift_key()) {
                            Some(KeyCommand::Close) => on_close.emit(()),
                            Some(KeyCommand::Navigate(direction)) => {
                                event.prevent_default();
                                on_navigate.emit(direction);
                            }
                            Some(KeyCommand::TrapFocus { .. }) => {
                                if let Some(overlay) = overlay_ref.cast::<Element>() {
                                    trap_tab(&overlay, FOCUSABLE_SELECTOR, event);
                                }
                            }
                            None => {}
                        }
                    },
                )
            });

            // Cleanup closure
            move || drop(listener)
        });
    }

    // ------ SWIPE ------
    let ontouchstart = {
        let swipe = swipe.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(point) = first_touch(&e, false) {
                swipe.borrow_mut().begin(point);
            }
        })
    };

    let ontouchmove = {
        let swipe = swipe.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(point) = first_touch(&e, false) {
                swipe.borrow_mut().moved(point);
            }
        })
    };

    let ontouchend = {
        let swipe = swipe.clone();
        let on_navigate = props.on_navigate.clone();
        let min_distance = config.gestures.min_swipe_distance;
        Callback::from(move |_: TouchEvent| {
            let direction = swipe.borrow_mut().finish(min_distance);
            if let Some(direction) = direction {
                on_navigate.emit(direction);
            }
        })
    };

    // ------ BUTTONS ------
    let close = props.on_close.reform(|_: MouseEvent| ());
    let prev = props.on_navigate.reform(|_: MouseEvent| Direction::Prev);
    let next = props.on_navigate.reform(|_: MouseEvent| Direction::Next);

    let nav_style = |disabled: bool| {
        if disabled {
            "opacity: 0.5"
        } else {
            "opacity: 1"
        }
    };

    let (src, alt, title, description) = match &props.item {
        Some(item) => (
            item.media_source.clone(),
            item.alt_text.clone(),
            item.title.clone(),
            item.description.clone(),
        ),
        None => Default::default(),
    };

    html! {
        <div
            id="lightbox"
            ref={overlay_ref}
            class={classes!("lightbox", is_open.then_some("active"))}
            role="dialog"
            aria-modal="true"
            aria-labelledby="lightbox-title"
            aria-hidden={(!is_open).to_string()}
        >
            <div class="lightbox-backdrop" onclick={close.clone()}></div>
            <div class="lightbox-container" {ontouchstart} {ontouchmove} {ontouchend}>
                <button ref={close_ref} class="lightbox-close" aria-label="Close image viewer" onclick={close}>
                    {"×"}
                </button>
                <button
                    class="lightbox-prev"
                    aria-label="Previous image"
                    disabled={props.prev_disabled}
                    style={nav_style(props.prev_disabled)}
                    onclick={prev}
                >
                    {"‹"}
                </button>
                <figure class="lightbox-content">
                    <img class="lightbox-image" src={src} alt={alt} style="max-height: 70vh;" />
                    <figcaption class="lightbox-caption">
                        <h3 id="lightbox-title" class="lightbox-title">{ title }</h3>
                        <p class="lightbox-description">{ description }</p>
                    </figcaption>
                </figure>
                <button
                    class="lightbox-next"
                    aria-label="Next image"
                    disabled={props.next_disabled}
                    style={nav_style(props.next_disabled)}
                    onclick={next}
                >
                    {"›"}
                </button>
            </div>
        </div>
    }
}
