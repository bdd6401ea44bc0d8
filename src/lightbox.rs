// src/lightbox.rs
//
// Lightbox state: which gallery item is enlarged, if any. Rendering and
// browser side effects live in `components::lightbox`; everything here is
// plain data so it can be driven from tests.

use crate::gallery::{GalleryIndex, GalleryItem};
use std::rc::Rc;
use yew::Reducible;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    pub fn offset(self) -> isize {
        match self {
            Direction::Prev => -1,
            Direction::Next => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LightboxPhase {
    /// `return_focus` is the item that was showing when the overlay closed.
    Closed {
        return_focus: Option<usize>,
    },
    Open {
        index: usize,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct LightboxState {
    gallery: GalleryIndex,
    phase: LightboxPhase,
}

pub enum LightboxAction {
    Open(usize),
    Close,
    Navigate(Direction),
    Rebuild(GalleryIndex),
}

impl LightboxState {
    pub fn new(gallery: GalleryIndex) -> Self {
        Self {
            gallery,
            phase: LightboxPhase::Closed { return_focus: None },
        }
    }

    pub fn gallery(&self) -> &GalleryIndex {
        &self.gallery
    }

    pub fn phase(&self) -> &LightboxPhase {
        &self.phase
    }

    pub fn is_open(&self) -> bool {
        matches!(self.phase, LightboxPhase::Open { .. })
    }

    pub fn current_index(&self) -> Option<usize> {
        match self.phase {
            LightboxPhase::Open { index } => Some(index),
            LightboxPhase::Closed { .. } => None,
        }
    }

    pub fn current_item(&self) -> Option<&GalleryItem> {
        self.current_index().and_then(|i| self.gallery.get(i))
    }

    /// Out-of-range indices are ignored; they can only come from markup that
    /// has since been replaced.
    pub fn open(&mut self, index: usize) -> bool {
        if index >= self.gallery.len() {
            log::debug!(
                "Ignoring lightbox open for index {} (gallery has {} items)",
                index,
                self.gallery.len()
            );
            return false;
        }
        self.phase = LightboxPhase::Open { index };
        true
    }

    /// Returns the gallery item that should get focus back.
    pub fn close(&mut self) -> Option<usize> {
        let index = self.current_index()?;
        self.phase = LightboxPhase::Closed {
            return_focus: Some(index),
        };
        Some(index)
    }

    pub fn navigate(&mut self, direction: Direction) -> bool {
        let Some(current) = self.current_index() else {
            return false;
        };
        match current.checked_add_signed(direction.offset()) {
            Some(next) if next < self.gallery.len() => self.open(next),
            _ => false,
        }
    }

    /// Swap in a freshly rendered gallery. Any open overlay belongs to the old
    /// markup, so it closes without returning focus.
    pub fn rebuild(&mut self, gallery: GalleryIndex) -> bool {
        if gallery == self.gallery {
            return false;
        }
        self.gallery = gallery;
        self.phase = LightboxPhase::Closed { return_focus: None };
        true
    }

    pub fn prev_disabled(&self) -> bool {
        self.current_index().map_or(true, |i| i == 0)
    }

    pub fn next_disabled(&self) -> bool {
        self.current_index()
            .map_or(true, |i| i + 1 >= self.gallery.len())
    }

    pub fn announcement(&self) -> Option<String> {
        let index = self.current_index()?;
        let item = self.gallery.get(index)?;
        Some(format!(
            "Viewing image {} of {}: {}",
            index + 1,
            self.gallery.len(),
            item.title
        ))
    }
}

impl Default for LightboxState {
    fn default() -> Self {
        Self::new(GalleryIndex::default())
    }
}

impl Reducible for LightboxState {
    type Action = LightboxAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            LightboxAction::Open(index) => next.open(index) && next != *self,
            LightboxAction::Close => next.close().is_some(),
            LightboxAction::Navigate(direction) => next.navigate(direction),
            LightboxAction::Rebuild(gallery) => next.rebuild(gallery),
        };
        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}

/// What a key press means while the overlay is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Close,
    Navigate(Direction),
    TrapFocus { backwards: bool },
}

pub fn key_command(key: &str, shift: bool) -> Option<KeyCommand> {
    match key {
        "Escape" => Some(KeyCommand::Close),
        "ArrowLeft" => Some(KeyCommand::Navigate(Direction::Prev)),
        "ArrowRight" => Some(KeyCommand::Navigate(Direction::Next)),
        "Tab" => Some(KeyCommand::TrapFocus { backwards: shift }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paper_data::ResultEntry;

    fn gallery(titles: &[(&str, &str)]) -> GalleryIndex {
        let entries: Vec<ResultEntry> = titles
            .iter()
            .map(|(title, description)| ResultEntry {
                title: title.to_string(),
                src: format!("{}.jpg", title.to_lowercase()),
                description: description.to_string(),
                ..ResultEntry::default()
            })
            .collect();
        GalleryIndex::from_entries(&entries)
    }

    fn two_items() -> LightboxState {
        LightboxState::new(gallery(&[("A", "d1"), ("B", "d2")]))
    }

    #[test]
    fn test_starts_closed() {
        let state = two_items();
        assert!(!state.is_open());
        assert_eq!(state.current_index(), None);
        assert!(state.announcement().is_none());
    }

    #[test]
    fn test_open_valid_and_invalid_indices() {
        let mut state = LightboxState::new(gallery(&[("A", ""), ("B", ""), ("C", "")]));
        for i in 0..3 {
            assert!(state.open(i));
            assert!(state.is_open());
            assert_eq!(state.current_index(), Some(i));
        }

        let before = state.clone();
        assert!(!state.open(3));
        assert!(!state.open(usize::MAX));
        assert_eq!(state, before);

        let mut closed = LightboxState::new(gallery(&[("A", "")]));
        assert!(!closed.open(1));
        assert!(!closed.is_open());
    }

    #[test]
    fn test_two_item_walkthrough() {
        let mut state = two_items();

        assert!(state.open(0));
        let item = state.current_item().unwrap();
        assert_eq!(item.title, "A");
        assert_eq!(item.description, "d1");
        assert!(state.prev_disabled());
        assert!(!state.next_disabled());

        assert!(state.navigate(Direction::Next));
        assert_eq!(state.current_item().unwrap().title, "B");
        assert!(state.next_disabled());
        assert!(!state.prev_disabled());

        assert!(!state.navigate(Direction::Next));
        assert_eq!(state.current_item().unwrap().title, "B");
    }

    #[test]
    fn test_navigate_moves_by_one_and_stops_at_ends() {
        let mut state = LightboxState::new(gallery(&[("A", ""), ("B", ""), ("C", "")]));
        state.open(0);
        assert!(!state.navigate(Direction::Prev));
        assert_eq!(state.current_index(), Some(0));

        assert!(state.navigate(Direction::Next));
        assert_eq!(state.current_index(), Some(1));
        assert!(state.navigate(Direction::Prev));
        assert_eq!(state.current_index(), Some(0));

        state.open(2);
        assert!(!state.navigate(Direction::Next));
        assert_eq!(state.current_index(), Some(2));
    }

    #[test]
    fn test_navigate_when_closed_is_ignored() {
        let mut state = two_items();
        assert!(!state.navigate(Direction::Next));
        assert!(!state.is_open());
    }

    #[test]
    fn test_close_returns_focus_to_opened_item() {
        let mut state = LightboxState::new(gallery(&[("A", ""), ("B", ""), ("C", "")]));
        assert_eq!(state.close(), None);

        state.open(2);
        assert_eq!(state.close(), Some(2));
        assert!(!state.is_open());
        assert_eq!(
            state.phase(),
            &LightboxPhase::Closed {
                return_focus: Some(2)
            }
        );

        state.open(1);
        state.navigate(Direction::Prev);
        assert_eq!(state.close(), Some(0));
        assert_eq!(state.close(), None);
    }

    #[test]
    fn test_rebuild_invalidates_stale_indices() {
        let mut state = LightboxState::new(gallery(&[("A", ""), ("B", ""), ("C", "")]));
        state.open(2);

        assert!(state.rebuild(gallery(&[("X", "x1"), ("Y", "y1")])));
        assert!(!state.is_open());
        assert_eq!(state.close(), None);

        assert!(!state.open(2));
        assert!(state.open(1));
        assert_eq!(state.current_item().unwrap().title, "Y");
    }

    #[test]
    fn test_rebuild_with_same_gallery_is_noop() {
        let mut state = two_items();
        state.open(1);
        assert!(!state.rebuild(gallery(&[("A", "d1"), ("B", "d2")])));
        assert_eq!(state.current_index(), Some(1));
    }

    #[test]
    fn test_announcement_text() {
        let mut state = two_items();
        state.open(1);
        assert_eq!(
            state.announcement().as_deref(),
            Some("Viewing image 2 of 2: B")
        );
    }

    #[test]
    fn test_reducer_returns_same_rc_for_noops() {
        let state = Rc::new(two_items());
        let same = state.clone().reduce(LightboxAction::Close);
        assert!(Rc::ptr_eq(&state, &same));

        let opened = state.clone().reduce(LightboxAction::Open(0));
        assert!(opened.is_open());
        let reopened = opened.clone().reduce(LightboxAction::Open(0));
        assert!(Rc::ptr_eq(&opened, &reopened));

        let stale = opened.clone().reduce(LightboxAction::Open(7));
        assert!(Rc::ptr_eq(&opened, &stale));

        let moved = opened.reduce(LightboxAction::Navigate(Direction::Next));
        assert_eq!(moved.current_index(), Some(1));
    }

    #[test]
    fn test_key_commands() {
        assert_eq!(key_command("Escape", false), Some(KeyCommand::Close));
        assert_eq!(
            key_command("ArrowLeft", false),
            Some(KeyCommand::Navigate(Direction::Prev))
        );
        assert_eq!(
            key_command("ArrowRight", true),
            Some(KeyCommand::Navigate(Direction::Next))
        );
        assert_eq!(
            key_command("Tab", true),
            Some(KeyCommand::TrapFocus { backwards: true })
        );
        assert_eq!(key_command("Enter", false), None);
    }
}
