// src/collapsible.rs
use std::rc::Rc;
use yew::Reducible;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SectionPhase {
    Collapsed,
    /// `height` is the content's natural height when it was last measured.
    Expanded {
        height: f64,
    },
}

#[derive(Debug, Clone, PartialEq)]
struct SectionEntry {
    id: String,
    phase: SectionPhase,
}

/// Expand/collapse state of every methodology section, in page order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SectionSet {
    sections: Vec<SectionEntry>,
}

pub enum SectionAction {
    /// Start over with a freshly rendered list of sections, all collapsed.
    Reset(Vec<String>),
    Toggle {
        id: String,
        expand: bool,
        height: f64,
    },
    /// Apply several toggles at once; used by expand/collapse all.
    ToggleMany {
        expand: bool,
        heights: Vec<(String, f64)>,
    },
    Remeasure(Vec<(String, f64)>),
}

impl SectionSet {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sections: ids
                .into_iter()
                .map(|id| SectionEntry {
                    id: id.into(),
                    phase: SectionPhase::Collapsed,
                })
                .collect(),
        }
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.id.as_str())
    }

    pub fn phase(&self, id: &str) -> Option<SectionPhase> {
        self.entry(id).map(|s| s.phase)
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        matches!(self.phase(id), Some(SectionPhase::Expanded { .. }))
    }

    /// Sections that a bulk expand (or collapse) would actually change.
    pub fn pending(&self, expand: bool) -> Vec<String> {
        self.sections
            .iter()
            .filter(|s| matches!(s.phase, SectionPhase::Expanded { .. }) != expand)
            .map(|s| s.id.clone())
            .collect()
    }

    pub fn toggle(&mut self, id: &str, expand: bool, height: f64) -> bool {
        let Some(entry) = self.entry_mut(id) else {
            return false;
        };
        let next = if expand {
            SectionPhase::Expanded {
                height: height.max(0.0),
            }
        } else {
            SectionPhase::Collapsed
        };
        if entry.phase == next {
            return false;
        }
        entry.phase = next;
        true
    }

    pub fn remeasure(&mut self, id: &str, height: f64) -> bool {
        match self.entry_mut(id) {
            Some(entry) if matches!(entry.phase, SectionPhase::Expanded { .. }) => {
                let next = SectionPhase::Expanded {
                    height: height.max(0.0),
                };
                let changed = entry.phase != next;
                entry.phase = next;
                changed
            }
            _ => false,
        }
    }

    /// Inline `max-height` for the section's content block.
    pub fn max_height(&self, id: &str) -> String {
        match self.phase(id) {
            Some(SectionPhase::Expanded { height }) => format!("{}px", height),
            _ => "0px".to_string(),
        }
    }

    fn entry(&self, id: &str) -> Option<&SectionEntry> {
        self.sections.iter().find(|s| s.id == id)
    }

    fn entry_mut(&mut self, id: &str) -> Option<&mut SectionEntry> {
        self.sections.iter_mut().find(|s| s.id == id)
    }
}

impl Reducible for SectionSet {
    type Action = SectionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            SectionAction::Reset(ids) => {
                next = SectionSet::new(ids);
                next != *self
            }
            SectionAction::Toggle { id, expand, height } => next.toggle(&id, expand, height),
            SectionAction::ToggleMany { expand, heights } => {
                let mut any = false;
                for (id, height) in heights {
                    // toggle() skips sections already in the target state
                    any |= next.toggle(&id, expand, height);
                }
                any
            }
            SectionAction::Remeasure(heights) => {
                let mut any = false;
                for (id, height) in heights {
                    any |= next.remeasure(&id, height);
                }
                any
            }
        };
        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}

pub fn toggle_announcement(title: Option<&str>, expanded: bool) -> String {
    let title = title
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or("Section");
    format!(
        "{} {}",
        title,
        if expanded { "expanded" } else { "collapsed" }
    )
}

pub fn bulk_announcement(expanded: bool) -> String {
    format!(
        "All methodology sections {}",
        if expanded { "expanded" } else { "collapsed" }
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkShortcut {
    ExpandAll,
    CollapseAll,
}

/// `Alt+E` / `Alt+C`.
pub fn bulk_shortcut(key: &str, alt: bool) -> Option<BulkShortcut> {
    if !alt {
        return None;
    }
    match key {
        "e" | "E" => Some(BulkShortcut::ExpandAll),
        "c" | "C" => Some(BulkShortcut::CollapseAll),
        _ => None,
    }
}
