use crate::dashboard::view::{BarView, DashboardView, DetailView, ListView};
use crate::report::{filled_cells, format_fill};

const BAR_WIDTH: usize = 20;
/// Over-range bars are drawn past the track up to this many cells, then cut
/// with a `+` marker.
const BAR_DRAW_LIMIT: usize = 2 * BAR_WIDTH;
const NAME_WIDTH: usize = 24;
const LABEL_WIDTH: usize = 16;

pub fn render_dashboard_text(view: &DashboardView) -> String {
    let mut out = String::new();

    out.push_str("Member Scoreboard\n");
    out.push_str("=================\n\n");

    out.push_str(&format!("Search: \"{}\"\n\n", view.search));

    render_list(&mut out, &view.list);
    out.push('\n');
    render_detail(&mut out, &view.detail);
    out.push('\n');

    let legend = view
        .legend
        .iter()
        .map(|e| format!("{} {}", e.range, e.tier.name()))
        .collect::<Vec<_>>()
        .join(" | ");
    out.push_str(&format!("Score ranges: {}\n", legend));

    out
}

fn render_list(out: &mut String, list: &ListView) {
    out.push_str(&format!("Members ({})\n", list.count));
    if list.no_results {
        out.push_str("  No matching members\n");
        return;
    }
    for (i, row) in list.rows.iter().enumerate() {
        let marker = if row.selected { '>' } else { ' ' };
        out.push_str(&format!(
            "{} {:>2}. {:<name_w$} {:>4}  [{}]\n",
            marker,
            i + 1,
            row.name,
            row.total,
            row.total_tier.name(),
            name_w = NAME_WIDTH
        ));
    }
}

fn render_detail(out: &mut String, detail: &DetailView) {
    match detail {
        DetailView::Placeholder => {
            out.push_str("Select a member\n");
            out.push_str("Pick a row from the list to see the per-category score bars.\n");
        }
        DetailView::Member {
            name,
            total,
            total_tier,
            bars,
        } => {
            out.push_str(&format!("{}  {} [{}]\n", name, total, total_tier.name()));
            out.push_str("Detailed scores\n");
            for bar in bars {
                out.push_str(&render_bar_line(bar));
                out.push('\n');
            }
        }
    }
}

pub fn render_bar_line(bar: &BarView) -> String {
    let filled = filled_cells(bar.fill, BAR_WIDTH);
    let drawn = if filled > BAR_DRAW_LIMIT {
        format!("{}+", "#".repeat(BAR_DRAW_LIMIT))
    } else {
        "#".repeat(filled)
    };
    let line = format!(
        "  {:<label_w$} {:>2}/{:<2} [{}{}] {:>6} {:<6} {}",
        bar.label,
        bar.score,
        bar.max,
        drawn,
        " ".repeat(BAR_WIDTH.saturating_sub(filled)),
        format_fill(bar.fill),
        bar.tier.name(),
        bar.status,
        label_w = LABEL_WIDTH
    );
    line.trim_end().to_string()
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
