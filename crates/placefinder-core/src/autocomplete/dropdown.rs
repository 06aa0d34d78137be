// crates/placefinder-core/src/autocomplete/dropdown.rs
use super::{MAX_SUGGESTIONS, NO_MATCHES};
use crate::text::{fold_key, starts_with_folded};
use serde::{Deserialize, Serialize};

/// Filter state, highlight cursor and visibility of one suggestion dropdown.
///
/// The highlight, when present, always points at a rendered match; it is
/// reset on every re-filter and on close.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dropdown {
    matches: Vec<String>,
    highlight: Option<usize>,
    open: bool,
}

/// A rendered suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionItem {
    pub value: String,
    pub highlighted: bool,
}

/// Render state of one dropdown.
///
/// When `placeholder` is set, `items` is empty and the view shows the inert
/// [`NO_MATCHES`] entry instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownView {
    pub open: bool,
    pub items: Vec<SuggestionItem>,
    pub placeholder: bool,
}

impl DropdownView {
    pub fn placeholder_text(&self) -> Option<&'static str> {
        self.placeholder.then_some(NO_MATCHES)
    }
}

impl Dropdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-filter against `candidates` for `raw_query`.
    ///
    /// An empty (after trimming) query closes the dropdown. Otherwise the
    /// dropdown opens with the first [`MAX_SUGGESTIONS`] candidates whose
    /// folded form starts with the folded query, in candidate order.
    pub fn filter(&mut self, candidates: &[String], raw_query: &str) {
        let q = fold_key(raw_query);
        if q.is_empty() {
            self.close();
            return;
        }

        self.matches = candidates
            .iter()
            .filter(|c| starts_with_folded(c, &q))
            .take(MAX_SUGGESTIONS)
            .cloned()
            .collect();
        self.highlight = None;
        self.open = true;
    }

    pub fn close(&mut self) {
        self.matches.clear();
        self.highlight = None;
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn matches(&self) -> &[String] {
        &self.matches
    }

    pub fn highlight(&self) -> Option<usize> {
        self.highlight
    }

    /// Value of the highlighted item, if any.
    pub fn highlighted(&self) -> Option<&str> {
        self.highlight
            .and_then(|i| self.matches.get(i))
            .map(String::as_str)
    }

    /// Open and showing at least one selectable item.
    pub fn is_navigable(&self) -> bool {
        self.open && !self.matches.is_empty()
    }

    /// Highlight the next item, or the first if none is highlighted.
    /// Clamps at the last item.
    pub fn move_down(&mut self) -> bool {
        if !self.is_navigable() {
            return false;
        }
        let last = self.matches.len() - 1;
        self.highlight = Some(match self.highlight {
            None => 0,
            Some(i) => (i + 1).min(last),
        });
        true
    }

    /// Highlight the previous item, or the last if none is highlighted.
    /// Clamps at the first item.
    pub fn move_up(&mut self) -> bool {
        if !self.is_navigable() {
            return false;
        }
        self.highlight = Some(match self.highlight {
            None => self.matches.len() - 1,
            Some(i) => i.saturating_sub(1),
        });
        true
    }

    pub fn view(&self) -> DropdownView {
        if !self.open {
            return DropdownView::default();
        }
        let items = self
            .matches
            .iter()
            .enumerate()
            .map(|(i, value)| SuggestionItem {
                value: value.clone(),
                highlighted: self.highlight == Some(i),
            })
            .collect();
        DropdownView {
            open: true,
            items,
            placeholder: self.matches.is_empty(),
        }
    }
}
