// src/site_config.rs
use serde::{Deserialize, Serialize};

/// Tunables shared by every section of the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub data: DataPaths,
    pub lazy_load: LazyLoadOptions,
    pub gestures: GestureLimits,
    pub timing: Timing,
    /// Space kept between the fixed header and a scrolled-to section.
    pub scroll_offset: f64,
    /// Viewport width at which the mobile menu is force-closed.
    pub mobile_breakpoint: f64,
    /// `scrollY` past which the header gets the `scrolled` class.
    pub header_scrolled_after: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataPaths {
    pub paper_info: String,
    pub results_gallery: String,
    pub methodology: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LazyLoadOptions {
    pub root_margin: String,
    pub threshold: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureLimits {
    pub min_swipe_distance: f64,
    pub max_tap_duration_ms: f64,
    pub max_tap_movement: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timing {
    pub focus_delay_ms: u32,
    pub feedback_ms: u32,
    pub feedback_fade_ms: u32,
    pub expand_scroll_delay_ms: u32,
    pub announce_delay_ms: u32,
    pub announce_clear_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            data: DataPaths::default(),
            lazy_load: LazyLoadOptions::default(),
            gestures: GestureLimits::default(),
            timing: Timing::default(),
            scroll_offset: 20.0,
            mobile_breakpoint: 768.0,
            header_scrolled_after: 50.0,
        }
    }
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            paper_info: String::from("data/paper-info.json"),
            results_gallery: String::from("data/results-gallery.json"),
            methodology: String::from("data/methodology.json"),
        }
    }
}

impl Default for LazyLoadOptions {
    fn default() -> Self {
        Self {
            root_margin: String::from("100px 0px"),
            threshold: 0.01,
        }
    }
}

impl Default for GestureLimits {
    fn default() -> Self {
        Self {
            min_swipe_distance: 50.0,
            max_tap_duration_ms: 300.0,
            max_tap_movement: 10.0,
        }
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            focus_delay_ms: 100,
            feedback_ms: 3000,
            feedback_fade_ms: 300,
            expand_scroll_delay_ms: 300,
            announce_delay_ms: 100,
            announce_clear_ms: 3000,
        }
    }
}

impl SiteConfig {
    pub fn with_data_dir(mut self, dir: &str) -> Self {
        let dir = dir.trim_end_matches('/');
        self.data = DataPaths {
            paper_info: format!("{}/paper-info.json", dir),
            results_gallery: format!("{}/results-gallery.json", dir),
            methodology: format!("{}/methodology.json", dir),
        };
        self
    }

    /// Page-provided overrides: an inline `<script type="application/json"
    /// id="site-config">` block, then a `data-content-dir` attribute on
    /// `<body>` pointing the data paths elsewhere.
    pub fn from_document() -> Self {
        let inline = gloo_utils::document()
            .get_element_by_id("site-config")
            .and_then(|el| el.text_content());
        let mut config = inline
            .as_deref()
            .and_then(parse_inline_config)
            .unwrap_or_default();

        if let Some(dir) = gloo_utils::body().get_attribute("data-content-dir") {
            config = config.with_data_dir(&dir);
        }
        config
    }
}

fn parse_inline_config(raw: &str) -> Option<SiteConfig> {
    if raw.trim().is_empty() {
        return None;
    }
    match serde_json::from_str(raw) {
        Ok(config) => Some(config),
        Err(e) => {
            log::warn!("Ignoring invalid site config: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.data.methodology, "data/methodology.json");
        assert_eq!(config.lazy_load.root_margin, "100px 0px");
        assert_eq!(config.gestures.min_swipe_distance, 50.0);
        assert_eq!(config.timing.feedback_ms, 3000);
        assert_eq!(config.mobile_breakpoint, 768.0);
    }

    #[test]
    fn test_with_data_dir() {
        let config = SiteConfig::default().with_data_dir("content/");
        assert_eq!(config.data.paper_info, "content/paper-info.json");
        assert_eq!(config.data.results_gallery, "content/results-gallery.json");
    }

    #[test]
    fn test_partial_config_from_json() {
        let config: SiteConfig =
            serde_json::from_str(r#"{"scroll_offset": 32.0, "mobile_breakpoint": 900.0}"#)
                .unwrap();
        assert_eq!(config.scroll_offset, 32.0);
        assert_eq!(config.mobile_breakpoint, 900.0);
        assert_eq!(config.timing, Timing::default());
    }

    #[test]
    fn test_inline_config() {
        let config = parse_inline_config(r#"{"timing": {"feedback_ms": 5000}}"#).unwrap();
        assert_eq!(config.timing.feedback_ms, 5000);
        assert_eq!(config.timing.focus_delay_ms, 100);

        assert!(parse_inline_config("   ").is_none());
        assert!(parse_inline_config("{not json").is_none());
    }
}
