use serde::Serialize;

use crate::dashboard::state::{DashboardState, Selection};
use crate::model::thresholds::classify;
use crate::model::tiers::{
    BarTier, LegendEntry, TotalTier, bar_color_tier, bar_fill, total_color_tier, total_legend,
};
use crate::model::{Category, MemberRecord, category_order};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub search: String,
    pub list: ListView,
    pub detail: DetailView,
    pub legend: &'static [LegendEntry],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListView {
    pub count: usize,
    pub rows: Vec<RowView>,
    pub no_results: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowView {
    /// Index of the record in the full dataset.
    pub position: usize,
    pub name: String,
    pub total: i32,
    pub total_tier: TotalTier,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DetailView {
    Placeholder,
    Member {
        name: String,
        total: i32,
        total_tier: TotalTier,
        bars: Vec<BarView>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarView {
    pub key: &'static str,
    pub label: &'static str,
    pub score: i32,
    pub max: i32,
    pub fill: f64,
    pub tier: BarTier,
    pub status: &'static str,
}

pub fn render(state: &DashboardState) -> DashboardView {
    let rows: Vec<RowView> = state
        .visible()
        .into_iter()
        .map(|(position, member)| RowView {
            position,
            name: member.name.clone(),
            total: member.total_score,
            total_tier: total_color_tier(member.total_score),
            selected: state.is_selected(member),
        })
        .collect();

    let detail = match state.selection() {
        Selection::Selected(member) => detail_view(member),
        Selection::NoSelection => DetailView::Placeholder,
    };

    DashboardView {
        search: state.search().to_string(),
        list: ListView {
            count: rows.len(),
            no_results: rows.is_empty(),
            rows,
        },
        detail,
        legend: total_legend(),
    }
}

pub fn detail_view(member: &MemberRecord) -> DetailView {
    DetailView::Member {
        name: member.name.clone(),
        total: member.total_score,
        total_tier: total_color_tier(member.total_score),
        bars: category_order()
            .iter()
            .map(|&c| bar_view(c, member.score(c)))
            .collect(),
    }
}

pub fn bar_view(category: Category, score: i32) -> BarView {
    let fill = bar_fill(score, category.max());
    BarView {
        key: category.key(),
        label: category.label(),
        score,
        max: category.max(),
        fill,
        tier: bar_color_tier(fill),
        status: classify(category.key(), score),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/dashboard/view.rs"]
mod tests;
