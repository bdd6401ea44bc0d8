// src/focus.rs
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent};

pub const FOCUSABLE_SELECTOR: &str = "button:not([disabled]), [href], input:not([disabled]), \
     select:not([disabled]), textarea:not([disabled]), [tabindex]:not([tabindex=\"-1\"])";

/// Index of the element Tab should jump to so focus stays inside a container,
/// or `None` to let the browser move focus normally.
pub fn focus_wrap_target(active: Option<usize>, count: usize, backwards: bool) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let last = count - 1;
    match (active, backwards) {
        (Some(0), true) => Some(last),
        (Some(i), false) if i == last => Some(0),
        _ => None,
    }
}

/// Drops elements the browser skips when tabbing.
pub fn tab_stops<T>(candidates: Vec<T>, is_disabled: impl Fn(&T) -> bool) -> Vec<T> {
    candidates.into_iter().filter(|c| !is_disabled(c)).collect()
}

pub fn focusable_elements(container: &Element, selector: &str) -> Vec<HtmlElement> {
    let mut found = Vec::new();
    if let Ok(nodes) = container.query_selector_all(selector) {
        for i in 0..nodes.length() {
            if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
                found.push(el);
            }
        }
    }
    tab_stops(found, |el| el.has_attribute("disabled"))
}

/// Keep Tab / Shift+Tab cycling inside `container`.
pub fn trap_tab(container: &Element, selector: &str, event: &KeyboardEvent) {
    let elements = focusable_elements(container, selector);
    let Some(active) = gloo_utils::document().active_element() else {
        return;
    };
    let position = elements
        .iter()
        .position(|el| el.is_same_node(Some(active.as_ref())));

    if let Some(target) = focus_wrap_target(position, elements.len(), event.shift_key()) {
        event.prevent_default();
        let _ = elements[target].focus();
    }
}

pub fn focus_node(node: &yew::NodeRef) {
    if let Some(el) = node.cast::<HtmlElement>() {
        let _ = el.focus();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_wrap_target() {
        assert_eq!(focus_wrap_target(Some(3), 4, false), Some(0));
        assert_eq!(focus_wrap_target(Some(0), 4, true), Some(3));
        assert_eq!(focus_wrap_target(Some(1), 4, false), None);
        assert_eq!(focus_wrap_target(Some(1), 4, true), None);
        assert_eq!(focus_wrap_target(None, 4, false), None);
    }

    #[test]
    fn test_disabled_next_button_is_not_a_tab_stop() {
        // close, prev, next (disabled on the last image)
        let buttons = vec![("close", false), ("prev", false), ("next", true)];
        let stops = tab_stops(buttons, |b| b.1);
        assert_eq!(stops.len(), 2);
        let prev = stops.iter().position(|b| b.0 == "prev");
        assert_eq!(focus_wrap_target(prev, stops.len(), false), Some(0));

        // a single image disables both arrows
        let buttons = vec![("close", false), ("prev", true), ("next", true)];
        let stops = tab_stops(buttons, |b| b.1);
        assert_eq!(focus_wrap_target(Some(0), stops.len(), false), Some(0));
        assert_eq!(focus_wrap_target(Some(0), stops.len(), true), Some(0));
    }

    #[test]
    fn test_selector_excludes_disabled_controls() {
        assert!(FOCUSABLE_SELECTOR.starts_with("button:not([disabled])"));
        assert!(!FOCUSABLE_SELECTOR.split(", ").any(|part| part == "button"));
    }

    #[test]
    fn test_single_and_empty_containers() {
        assert_eq!(focus_wrap_target(Some(0), 1, false), Some(0));
        assert_eq!(focus_wrap_target(Some(0), 1, true), Some(0));
        assert_eq!(focus_wrap_target(Some(0), 0, true), None);
    }
}
