// src/domain/folder_card.rs

use crate::domain::changes::{filter_updates, ChangeKind, ChangeRecord, FilterSelection};
use crate::domain::disclosure;
use crate::domain::folder::Folder;
use crate::errors::ServerError;
use std::collections::HashMap;

/// Local state of one folder card. Never shared between cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FolderCardState {
    pub filter: FilterSelection,
    pub expanded: bool,
}

impl FolderCardState {
    /// Picking the active kind again clears the filter. Picking a new kind
    /// also expands the card so every match is visible at once.
    pub fn select_filter(&mut self, kind: ChangeKind) {
        if self.filter == FilterSelection::Kind(kind) {
            self.filter = FilterSelection::All;
        } else {
            self.filter = FilterSelection::Kind(kind);
            self.expanded = true;
        }
    }

    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn after_select(self, kind: ChangeKind) -> Self {
        let mut next = self;
        next.select_filter(kind);
        next
    }

    pub fn after_toggle(self) -> Self {
        let mut next = self;
        next.toggle_expanded();
        next
    }

    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, ServerError> {
        let filter = FilterSelection::parse(params.get("filter").map(String::as_str))?;
        let expanded = matches!(params.get("expanded").map(String::as_str), Some("true" | "1"));
        Ok(Self { filter, expanded })
    }

    /// Query string that reproduces this state.
    pub fn to_query(self) -> String {
        format!("filter={}&expanded={}", self.filter.code(), self.expanded)
    }

    pub fn derive(self, folder: &Folder) -> CardView<'_> {
        let filtered = filter_updates(&folder.recent_updates, self.filter);
        let total = filtered.len();
        let visible = disclosure::visible(&filtered, self.expanded).to_vec();

        CardView {
            state: self,
            visible,
            matching: total,
            has_more: disclosure::has_more(total),
            remainder: disclosure::remainder(total),
        }
    }
}

/// Everything a card render needs, derived fresh on each request.
#[derive(Debug)]
pub struct CardView<'a> {
    pub state: FolderCardState,
    pub visible: Vec<&'a ChangeRecord>,
    pub matching: usize,
    pub has_more: bool,
    pub remainder: usize,
}

impl CardView<'_> {
    pub fn is_empty(&self) -> bool {
        self.matching == 0
    }
}

/// The page hosting the cards. Calls are fire-and-forget.
pub trait FolderActions {
    fn refresh(&self, folder_id: &str);
    fn open(&self, folder_id: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Refresh,
    Open,
}

impl CardAction {
    pub fn parse(segment: &str) -> Option<Self> {
        match segment {
            "refresh" => Some(CardAction::Refresh),
            "open" => Some(CardAction::Open),
            _ => None,
        }
    }

    pub fn forward(self, folder_id: &str, actions: &dyn FolderActions) {
        match self {
            CardAction::Refresh => actions.refresh(folder_id),
            CardAction::Open => actions.open(folder_id),
        }
    }
}
