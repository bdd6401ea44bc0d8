// src/utils.rs
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, ScrollBehavior, ScrollToOptions};

/// Directory part of the page path, so data files resolve next to
/// `index.html` whether the site is served from `/` or `/my-paper/`.
pub fn get_base_url() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| base_from_pathname(&path))
        .unwrap_or_default()
}

fn base_from_pathname(pathname: &str) -> String {
    match pathname.rfind('/') {
        Some(idx) => pathname[..idx].to_string(),
        None => String::new(),
    }
}

/// Build a resource URL with the correct base path
pub fn resource_url(path: &str) -> String {
    join_base(&get_base_url(), path)
}

fn join_base(base: &str, path: &str) -> String {
    let clean_path = path.trim_start_matches('/');
    let base = base.trim_end_matches('/');

    if base.is_empty() {
        format!("/{}", clean_path)
    } else {
        format!("{}/{}", base, clean_path)
    }
}

/// Cuts `text` to at most `max` characters, ending in `...` when cut.
pub fn truncate_with_ellipsis(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let keep = max.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}

pub fn header_height() -> f64 {
    gloo_utils::document()
        .query_selector(".header")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| el.offset_height() as f64)
        .unwrap_or(0.0)
}

pub fn scroll_y() -> f64 {
    gloo_utils::window().scroll_y().unwrap_or(0.0)
}

pub fn smooth_scroll_to(top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top.max(0.0));
    options.set_behavior(ScrollBehavior::Smooth);
    gloo_utils::window().scroll_to_with_scroll_to_options(&options);
}

/// Where to scroll so an element lands just below the fixed header.
pub fn offset_scroll_target(offset_top: f64, header_height: f64, gap: f64) -> f64 {
    (offset_top - header_height - gap).max(0.0)
}

pub fn set_body_overflow(value: &str) {
    let _ = gloo_utils::body().style().set_property("overflow", value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_url_formatting() {
        assert_eq!(
            join_base("", "/data/paper-info.json"),
            "/data/paper-info.json"
        );
        assert_eq!(
            join_base("", "data/paper-info.json"),
            "/data/paper-info.json"
        );
        assert_eq!(
            join_base("/my-paper", "data/methodology.json"),
            "/my-paper/data/methodology.json"
        );
        assert_eq!(
            join_base("/my-paper/", "/data/x.json"),
            "/my-paper/data/x.json"
        );
    }

    #[test]
    fn test_base_from_pathname() {
        assert_eq!(base_from_pathname("/"), "");
        assert_eq!(base_from_pathname("/index.html"), "");
        assert_eq!(base_from_pathname("/my-paper/"), "/my-paper");
        assert_eq!(base_from_pathname("/my-paper/index.html"), "/my-paper");
    }

    #[test]
    fn test_truncate_with_ellipsis() {
        assert_eq!(truncate_with_ellipsis("short", 160), "short");

        let long = "a".repeat(161);
        let cut = truncate_with_ellipsis(&long, 160);
        assert_eq!(cut.chars().count(), 160);
        assert!(cut.ends_with("..."));
        assert_eq!(&cut[..157], &long[..157]);

        let exact = "b".repeat(200);
        assert_eq!(truncate_with_ellipsis(&exact, 200), exact);
    }

    #[test]
    fn test_truncate_counts_characters() {
        let text = "é".repeat(10);
        assert_eq!(truncate_with_ellipsis(&text, 5), "éé...");
    }

    #[test]
    fn test_offset_scroll_target() {
        assert_eq!(offset_scroll_target(800.0, 64.0, 20.0), 716.0);
        assert_eq!(offset_scroll_target(10.0, 64.0, 20.0), 0.0);
    }
}
