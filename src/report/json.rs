use crate::dashboard::view::DashboardView;

pub fn render_dashboard_json(view: &DashboardView) -> Result<String, serde_json::Error> {
    let mut out = serde_json::to_string_pretty(view)?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;
