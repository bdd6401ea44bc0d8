// src/components/lazy_image.rs
use crate::site_config::SiteConfig;
use crate::viewport::{observer_supported, ViewportWatch};
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{Element, HtmlImageElement};
use yew::prelude::*;

pub const FAILED_ALT: &str = "Image failed to load";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageLoad {
    Pending,
    Loaded,
    Failed,
}

impl ImageLoad {
    pub fn class_names(self) -> &'static [&'static str] {
        match self {
            ImageLoad::Pending => &["lazy-load"],
            ImageLoad::Loaded => &["loaded"],
            // a failed image keeps its pending marker
            ImageLoad::Failed => &["lazy-load", "error"],
        }
    }

    pub fn display_src<'a>(self, src: &'a str, placeholder: &'a str) -> &'a str {
        match self {
            ImageLoad::Loaded => src,
            _ => placeholder,
        }
    }

    pub fn display_alt<'a>(self, alt: &'a str) -> &'a str {
        match self {
            ImageLoad::Failed => FAILED_ALT,
            _ => alt,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LazyImageProps {
    pub src: AttrValue,
    pub placeholder: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Shows `placeholder` until the image nears the viewport, then swaps in
/// `src` once a detached preloader has fetched and decoded it.
#[function_component(LazyImage)]
pub fn lazy_image(props: &LazyImageProps) -> Html {
    let config = use_context::<Rc<SiteConfig>>().unwrap_or_default();
    let load = use_state_eq(|| ImageLoad::Pending);
    let img_ref = use_node_ref();

    {
        let load = load.clone();
        let img_ref = img_ref.clone();
        use_effect_with(props.src.clone(), move |src| {
            load.set(ImageLoad::Pending);

            let preload_listeners = Rc::new(RefCell::new(Vec::<EventListener>::new()));
            let start = {
                let src = src.to_string();
                let load = load.clone();
                let listeners = preload_listeners.clone();
                move || start_preload(&src, load, &listeners)
            };

            let watch = match img_ref.cast::<Element>() {
                Some(img) if observer_supported() => {
                    let mut start = Some(start);
                    ViewportWatch::new(
                        &[img],
                        &config.lazy_load.root_margin,
                        config.lazy_load.threshold,
                        move |_| {
                            if let Some(start) = start.take() {
                                start();
                            }
                        },
                    )
                    .map_err(|e| log::warn!("IntersectionObserver unavailable: {:?}", e))
                    .ok()
                }
                _ => {
                    start();
                    None
                }
            };

            move || {
                drop(watch);
                preload_listeners.borrow_mut().clear();
            }
        });
    }

    let state = *load;
    let mut class = classes!("result-image", props.class.clone());
    for name in state.class_names() {
        class.push(*name);
    }

    html! {
        <img
            ref={img_ref}
            class={class}
            src={state.display_src(&props.src, &props.placeholder).to_string()}
            alt={state.display_alt(&props.alt).to_string()}
            data-src={props.src.clone()}
            loading="lazy"
        />
    }
}

fn start_preload(
    src: &str,
    load: UseStateHandle<ImageLoad>,
    listeners: &RefCell<Vec<EventListener>>,
) {
    let loader = match HtmlImageElement::new() {
        Ok(loader) => loader,
        Err(e) => {
            log::warn!("Could not create image preloader for {}: {:?}", src, e);
            load.set(ImageLoad::Failed);
            return;
        }
    };

    let on_load = {
        let load = load.clone();
        EventListener::once(&loader, "load", move |_| load.set(ImageLoad::Loaded))
    };
    let on_error = {
        let src = src.to_string();
        EventListener::once(&loader, "error", move |_| {
            log::warn!("Failed to load image: {}", src);
            load.set(ImageLoad::Failed);
        })
    };

    loader.set_src(src);
    listeners.borrow_mut().extend([on_load, on_error]);
}
