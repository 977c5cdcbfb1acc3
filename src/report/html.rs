//! Static HTML rendering of a dashboard view.
//!
//! Pages are self contained: inline CSS plus a short script that narrows the
//! member list as the search box changes. Without the script the page still
//! shows the list it was rendered with.

use crate::dashboard::view::{BarView, DashboardView, DetailView, ListView};
use crate::report::format_fill;
use crate::report::site::SiteConfig;

pub fn render_dashboard_html(view: &DashboardView, site: &SiteConfig) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
    <div class="container">
        <header>
            <h1><a href="{home}">{title}</a></h1>
            <p>Per-member performance scores</p>
        </header>
        <div class="card">
            <input id="search" type="text" placeholder="Search member names..." value="{search}">
        </div>
        <div class="grid">
{list}
{detail}
        </div>
{legend}
    </div>
    <script>{js}</script>
</body>
</html>
"#,
        title = html_escape(&site.title),
        home = site.home_href(),
        css = inline_css(),
        search = html_escape(&view.search),
        list = render_list(&view.list, site),
        detail = render_detail(&view.detail),
        legend = render_legend(view),
        js = inline_javascript(),
    )
}

fn render_list(list: &ListView, site: &SiteConfig) -> String {
    let mut rows = String::new();
    for row in &list.rows {
        let class = if row.selected { "row selected" } else { "row" };
        rows.push_str(&format!(
            r#"                <a class="{class}" href="{href}" data-name="{key}">
                    <span class="name">{name}</span>
                    <span class="total" style="color: {color}">{total}</span>
                </a>
"#,
            class = class,
            href = site.member_href(row.position),
            key = html_escape(&row.name.to_lowercase()),
            name = html_escape(&row.name),
            color = row.total_tier.swatch(),
            total = row.total,
        ));
    }
    let hidden = if list.no_results { "" } else { " hidden" };
    format!(
        r#"            <section class="card">
                <h2>Members (<span id="member-count">{count}</span>)</h2>
                <div class="rows">
{rows}                </div>
                <p id="no-results" class="empty"{hidden}>No matching members</p>
            </section>"#,
        count = list.count,
        rows = rows,
        hidden = hidden,
    )
}

fn render_detail(detail: &DetailView) -> String {
    match detail {
        DetailView::Placeholder => r#"            <section class="card placeholder">
                <h3>Select a member</h3>
                <p>Pick a member from the list to see the per-category score bars.</p>
            </section>"#
            .to_string(),
        DetailView::Member {
            name,
            total,
            total_tier,
            bars,
        } => {
            let bars_html = bars.iter().map(render_bar).collect::<Vec<_>>().join("\n");
            format!(
                r#"            <section class="card detail">
                <h2>{name}</h2>
                <div class="headline" style="color: {color}">{total}</div>
                <h3>Detailed scores</h3>
{bars}
            </section>"#,
                name = html_escape(name),
                color = total_tier.swatch(),
                total = total,
                bars = bars_html,
            )
        }
    }
}

fn render_bar(bar: &BarView) -> String {
    format!(
        r#"                <div class="bar" data-key="{key}">
                    <div class="bar-head"><span>{label}</span><span>{score}/{max}</span></div>
                    <div class="bar-body">
                        <div class="track"><div class="fill {tier}" style="width: {width}; background: {color}"></div></div>
                        <span class="status">{status}</span>
                    </div>
                </div>"#,
        key = bar.key,
        label = html_escape(bar.label),
        score = bar.score,
        max = bar.max,
        tier = bar.tier.name(),
        width = format_fill(bar.fill),
        color = bar.tier.swatch(),
        status = html_escape(bar.status),
    )
}

fn render_legend(view: &DashboardView) -> String {
    let entries = view
        .legend
        .iter()
        .map(|e| {
            format!(
                r#"                <div class="legend-entry" style="color: {}">{}</div>"#,
                e.tier.swatch(),
                html_escape(e.range)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        r#"        <section class="card">
            <h2>Score ranges</h2>
            <div class="legend">
{entries}
            </div>
        </section>"#
    )
}

fn inline_css() -> &'static str {
    r#"
body { margin: 0; background: #f9fafb; font-family: system-ui, sans-serif; color: #1f2937; }
.container { max-width: 72rem; margin: 0 auto; padding: 1.5rem; }
header { text-align: center; margin-bottom: 2rem; }
header a { color: inherit; text-decoration: none; }
.card { background: #fff; border-radius: 0.5rem; box-shadow: 0 4px 12px rgba(0,0,0,0.08); padding: 1.5rem; margin-bottom: 1.5rem; }
#search { width: 100%; box-sizing: border-box; padding: 0.75rem 1rem; border: 1px solid #d1d5db; border-radius: 0.5rem; }
.grid { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; }
.rows { max-height: 24rem; overflow-y: auto; }
.row { display: flex; justify-content: space-between; padding: 1rem; margin-bottom: 0.75rem; border: 2px solid #e5e7eb; border-radius: 0.5rem; color: inherit; text-decoration: none; }
.row.selected { border-color: #3b82f6; background: #eff6ff; }
.row .total, .headline { font-weight: 700; font-size: 1.5rem; }
.empty, .placeholder { text-align: center; color: #6b7280; }
.bar { margin-bottom: 1rem; }
.bar-head { display: flex; justify-content: space-between; }
.bar-body { display: flex; align-items: center; gap: 0.75rem; }
.track { flex: 1; height: 1.5rem; background: #e5e7eb; border-radius: 9999px; overflow: hidden; }
.fill { height: 100%; transition: width 0.5s ease-out; }
.status { min-width: 100px; font-size: 0.75rem; color: #6b7280; }
.legend { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1rem; text-align: center; font-weight: 700; }
@media (max-width: 1024px) { .grid { grid-template-columns: 1fr; } }
"#
}

fn inline_javascript() -> &'static str {
    r#"
(function () {
    var input = document.getElementById('search');
    var rows = Array.prototype.slice.call(document.querySelectorAll('.row'));
    var count = document.getElementById('member-count');
    var empty = document.getElementById('no-results');
    function apply() {
        var needle = input.value.toLowerCase();
        var shown = 0;
        rows.forEach(function (row) {
            var match = row.getAttribute('data-name').indexOf(needle) !== -1;
            row.style.display = match ? '' : 'none';
            if (match) { shown += 1; }
        });
        count.textContent = shown;
        empty.hidden = shown !== 0;
    }
    input.addEventListener('input', apply);
    apply();
})();
"#
}

pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/html.rs"]
mod tests;
