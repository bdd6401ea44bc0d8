// src/components/navigation.rs
use crate::focus::{focus_node, trap_tab};
use crate::site_config::SiteConfig;
use crate::utils::{header_height, offset_scroll_target, scroll_y, smooth_scroll_to};
use gloo::events::{EventListener, EventListenerOptions};
use gloo::render::{request_animation_frame, AnimationFrame};
use gloo::timers::callback::Timeout;
use gloo_utils::{body, document, window};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent, Node};
use yew::prelude::*;

/// In-page sections reachable from the menu, in page order.
pub const NAV_SECTIONS: [(&str, &str); 5] = [
    ("hero", "Home"),
    ("abstract", "Abstract"),
    ("results", "Results"),
    ("methodology", "Methodology"),
    ("citation", "Citation"),
];

const NAV_TITLE_PLACEHOLDER: &str = "Paper Title";

/// Vertical extent of a page section, as laid out.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBox {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// The section the reader is in: the last one whose band
/// `[top - header - 100, top - header - 100 + height)` contains `scroll_y`.
/// Near the top of the page the first section wins.
pub fn active_section(
    scroll_y: f64,
    header_height: f64,
    sections: &[SectionBox],
) -> Option<String> {
    let mut current = None;
    for section in sections {
        let start = section.top - header_height - 100.0;
        if scroll_y >= start && scroll_y < start + section.height {
            current = Some(section.id.clone());
        }
    }
    if scroll_y < 100.0 {
        if let Some(first) = sections.first() {
            current = Some(first.id.clone());
        }
    }
    current
}

fn section_element(id: &str) -> Option<HtmlElement> {
    document()
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn section_boxes() -> Vec<SectionBox> {
    NAV_SECTIONS
        .iter()
        .filter_map(|(id, _)| {
            section_element(id).map(|el| SectionBox {
                id: id.to_string(),
                top: el.offset_top() as f64,
                height: el.offset_height() as f64,
            })
        })
        .collect()
}

fn contains_target(node: &NodeRef, target: &Node) -> bool {
    node.cast::<Node>()
        .map(|n| n.contains(Some(target)))
        .unwrap_or(false)
}

#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    #[prop_or_default]
    pub title: Option<AttrValue>,
}

#[function_component(Navigation)]
pub fn navigation(props: &NavigationProps) -> Html {
    let config = use_context::<Rc<SiteConfig>>().unwrap_or_default();
    let scrolled = use_state_eq(|| false);
    let active = use_state_eq(|| None::<String>);
    let menu_open = use_state_eq(|| false);
    let toggle_ref = use_node_ref();
    let menu_ref = use_node_ref();

    // ------ SCROLL EFFECTS ------
    {
        let scrolled = scrolled.clone();
        let active = active.clone();
        let threshold = config.header_scrolled_after;
        use_effect_with((), move |_| {
            let update = Rc::new(move || {
                let y = scroll_y();
                scrolled.set(y > threshold);
                active.set(active_section(y, header_height(), &section_boxes()));
            });
            update();

            // one update per animation frame
            let ticking = Rc::new(Cell::new(false));
            let frame = Rc::new(RefCell::new(None::<AnimationFrame>));
            let listener = EventListener::new(&window(), "scroll", move |_| {
                if ticking.replace(true) {
                    return;
                }
                let update = update.clone();
                let ticking = ticking.clone();
                *frame.borrow_mut() = Some(request_animation_frame(move |_| {
                    update();
                    ticking.set(false);
                }));
            });

            move || drop(listener)
        });
    }

    // ------ MOBILE MENU ------
    {
        let menu_open = menu_open.clone();
        let toggle_ref = toggle_ref.clone();
        let menu_ref = menu_ref.clone();
        let focus_delay = config.timing.focus_delay_ms;
        let breakpoint = config.mobile_breakpoint;

        use_effect_with(*menu_open, move |open| {
            let _ = body().class_list().toggle_with_force("nav-open", *open);

            let mut guards: Vec<EventListener> = Vec::new();
            let mut focus_first = None;

            if *open {
                log::debug!("Mobile menu opened");
                let first_link = menu_ref.clone();
                focus_first = Some(Timeout::new(focus_delay, move || {
                    if let Some(link) = first_link
                        .cast::<Element>()
                        .and_then(|menu| menu.query_selector("a").ok().flatten())
                        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                    {
                        let _ = link.focus();
                    }
                }));

                let keydown = {
                    let menu_open = menu_open.clone();
                    let toggle_ref = toggle_ref.clone();
                    let menu_ref = menu_ref.clone();
                    EventListener::new_with_options(
                        &document(),
                        "keydown",
                        EventListenerOptions::enable_prevent_default(),
                        move |event| {
                            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                                return;
                            };
                            match event.key().as_str() {
                                "Escape" => {
                                    menu_open.set(false);
                                    focus_node(&toggle_ref);
                                }
                                "Tab" => {
                                    if let Some(menu) = menu_ref.cast::<Element>() {
                                        trap_tab(&menu, "a", event);
                                    }
                                }
                                _ => {}
                            }
                        },
                    )
                };

                let outside_click = {
                    let menu_open = menu_open.clone();
                    let toggle_ref = toggle_ref.clone();
                    let menu_ref = menu_ref.clone();
                    EventListener::new(&document(), "click", move |event| {
                        let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
                        let Some(target) = target else {
                            return;
                        };
                        let outside = !contains_target(&toggle_ref, &target)
                            && !contains_target(&menu_ref, &target);
                        if outside {
                            menu_open.set(false);
                        }
                    })
                };

                let resize = {
                    let menu_open = menu_open.clone();
                    EventListener::new(&window(), "resize", move |_| {
                        let width = window()
                            .inner_width()
                            .ok()
                            .and_then(|w| w.as_f64())
                            .unwrap_or(0.0);
                        if width >= breakpoint {
                            menu_open.set(false);
                        }
                    })
                };

                guards.extend([keydown, outside_click, resize]);
            }

            move || {
                drop(focus_first);
                drop(guards);
            }
        });
    }

    let on_toggle = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            menu_open.set(!*menu_open);
        })
    };

    let on_overlay = {
        let menu_open = menu_open.clone();
        let toggle_ref = toggle_ref.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            focus_node(&toggle_ref);
        })
    };

    let links = NAV_SECTIONS.iter().map(|&(id, label)| {
        let onclick = {
            let active = active.clone();
            let menu_open = menu_open.clone();
            let gap = config.scroll_offset;
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                if let Some(section) = section_element(id) {
                    let top = section.offset_top() as f64;
                    let target = offset_scroll_target(top, header_height(), gap);
                    smooth_scroll_to(target);
                    active.set(Some(id.to_string()));
                }
                menu_open.set(false);
            })
        };
        let is_active = active.as_deref() == Some(id);
        html! {
            <li>
                <a
                    href={format!("#{}", id)}
                    class={classes!("nav-link", is_active.then_some("active"))}
                    {onclick}
                >
                    { label }
                </a>
            </li>
        }
    });

    let title = props
        .title
        .clone()
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| AttrValue::from(NAV_TITLE_PLACEHOLDER));
    let open = *menu_open;

    html! {
        <header class={classes!("header", scrolled.then_some("scrolled"))}>
            <nav class="nav" aria-label="Main navigation">
                <span class="nav-title">{ title }</span>
                <button
                    ref={toggle_ref}
                    class="nav-toggle"
                    aria-label="Toggle navigation menu"
                    aria-expanded={open.to_string()}
                    aria-controls="nav-menu"
                    onclick={on_toggle}
                >
                    <span class="hamburger-line"></span>
                    <span class="hamburger-line"></span>
                    <span class="hamburger-line"></span>
                </button>
                <ul id="nav-menu" ref={menu_ref} class={classes!("nav-menu", open.then_some("active"))}>
                    { for links }
                </ul>
            </nav>
            <div class={classes!("nav-overlay", open.then_some("active"))} onclick={on_overlay}></div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxes() -> Vec<SectionBox> {
        [("hero", 0.0, 600.0), ("abstract", 600.0, 400.0), ("results", 1000.0, 800.0)]
            .iter()
            .map(|(id, top, height)| SectionBox {
                id: id.to_string(),
                top: *top,
                height: *height,
            })
            .collect()
    }

    #[test]
    fn test_top_of_page_selects_first_section() {
        let at = |y| active_section(y, 60.0, &boxes());
        assert_eq!(at(0.0).as_deref(), Some("hero"));
        assert_eq!(at(99.0).as_deref(), Some("hero"));
    }

    #[test]
    fn test_band_includes_header_and_slack() {
        // abstract band starts at 600 - 60 - 100 = 440
        let at = |y| active_section(y, 60.0, &boxes());
        assert_eq!(at(440.0).as_deref(), Some("abstract"));
        assert_eq!(at(839.0).as_deref(), Some("abstract"));
        assert_eq!(at(840.0).as_deref(), Some("results"));
        assert_eq!(at(500.0).as_deref(), Some("abstract"));
    }

    #[test]
    fn test_past_last_section_selects_nothing() {
        assert_eq!(active_section(5_000.0, 60.0, &boxes()), None);
        assert_eq!(active_section(500.0, 60.0, &[]), None);
    }
}
