use std::sync::Arc;

use crate::dashboard::filter::filter_indexed;
use crate::model::MemberRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    NoSelection,
    Selected(MemberRecord),
}

/// Everything a render depends on: the shared dataset, the raw search text
/// and the inspected member.
///
/// Transitions consume the state and return the next one. There is no
/// deselect; a selection is only ever replaced by another.
#[derive(Debug, Clone)]
pub struct DashboardState {
    dataset: Arc<[MemberRecord]>,
    search: String,
    selection: Selection,
}

impl DashboardState {
    pub fn new(dataset: impl Into<Arc<[MemberRecord]>>) -> Self {
        Self {
            dataset: dataset.into(),
            search: String::new(),
            selection: Selection::NoSelection,
        }
    }

    pub fn dataset(&self) -> &[MemberRecord] {
        &self.dataset
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected(&self) -> Option<&MemberRecord> {
        match &self.selection {
            Selection::Selected(m) => Some(m),
            Selection::NoSelection => None,
        }
    }

    pub fn set_search(self, text: impl Into<String>) -> Self {
        Self {
            search: text.into(),
            ..self
        }
    }

    pub fn select_member(self, member: MemberRecord) -> Self {
        Self {
            selection: Selection::Selected(member),
            ..self
        }
    }

    pub fn is_selected(&self, member: &MemberRecord) -> bool {
        self.selected().is_some_and(|s| s.name == member.name)
    }

    pub fn visible(&self) -> Vec<(usize, &MemberRecord)> {
        filter_indexed(&self.dataset, &self.search)
    }

    /// Looks a row up among the visible ones, by exact name first and then
    /// by 1-based row number.
    pub fn find_visible(&self, query: &str) -> Option<&MemberRecord> {
        let visible = self.visible();
        if let Some((_, m)) = visible.iter().find(|(_, m)| m.name == query) {
            return Some(*m);
        }
        let row = query.trim().parse::<usize>().ok()?;
        visible.get(row.checked_sub(1)?).map(|(_, m)| *m)
    }

    pub fn find_member(&self, name: &str) -> Option<&MemberRecord> {
        self.dataset.iter().find(|m| m.name == name)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/dashboard/state.rs"]
mod tests;
