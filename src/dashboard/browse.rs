use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::dashboard::state::DashboardState;
use crate::dashboard::view::render;
use crate::report::text::render_dashboard_text;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseEvent {
    Search(String),
    Select(String),
    Show,
    Quit,
    Empty,
    Unknown(String),
}

/// One event per input line. Everything after the first space is the raw
/// argument, so `search ` sets an empty search and `search  ki` keeps the
/// leading space.
pub fn parse_event(line: &str) -> BrowseEvent {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return BrowseEvent::Empty;
    }
    let (command, arg) = match line.split_once(' ') {
        Some((command, arg)) => (command, arg),
        None => (line, ""),
    };
    match command {
        "search" => BrowseEvent::Search(arg.to_string()),
        "select" => BrowseEvent::Select(arg.to_string()),
        "show" => BrowseEvent::Show,
        "quit" | "exit" => BrowseEvent::Quit,
        _ => BrowseEvent::Unknown(line.to_string()),
    }
}

/// Drives the dashboard from line events until `quit` or end of input and
/// returns the final state.
pub fn run_browse<R: BufRead, W: Write>(
    mut state: DashboardState,
    input: R,
    out: &mut W,
) -> io::Result<DashboardState> {
    write!(out, "{}", render_dashboard_text(&render(&state)))?;
    for line in input.lines() {
        let line = line?;
        let event = parse_event(&line);
        debug!(?event, "browse event");
        state = match event {
            BrowseEvent::Empty => continue,
            BrowseEvent::Quit => break,
            BrowseEvent::Show => state,
            BrowseEvent::Search(text) => state.set_search(text),
            BrowseEvent::Select(query) => match state.find_visible(&query).cloned() {
                Some(member) => state.select_member(member),
                None => {
                    writeln!(out, "No visible member matches \"{query}\".")?;
                    continue;
                }
            },
            BrowseEvent::Unknown(line) => {
                writeln!(
                    out,
                    "Unknown command \"{line}\". Use: search <text> | select <name|row> | show | quit"
                )?;
                continue;
            }
        };
        write!(out, "{}", render_dashboard_text(&render(&state)))?;
    }
    Ok(state)
}

#[cfg(test)]
#[path = "../../tests/src_inline/dashboard/browse.rs"]
mod tests;
