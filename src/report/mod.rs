pub mod html;
pub mod json;
pub mod site;
pub mod text;

/// Bar fill as a percentage: whole numbers without decimals, otherwise one
/// decimal place.
pub fn format_fill(fill: f64) -> String {
    if fill.fract() == 0.0 {
        format!("{:.0}%", fill)
    } else {
        format!("{:.1}%", fill)
    }
}

/// Number of filled cells for a bar `width` cells wide. Over-range fills
/// produce more than `width` cells, negative fills produce none.
pub fn filled_cells(fill: f64, width: usize) -> usize {
    let cells = (fill / 100.0 * width as f64).round();
    if cells <= 0.0 { 0 } else { cells as usize }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
