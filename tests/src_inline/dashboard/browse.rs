use super::*;
use crate::model::MemberRecord;

fn member(name: &str, total: i32) -> MemberRecord {
    MemberRecord {
        name: name.to_string(),
        total_score: total,
        ..MemberRecord::default()
    }
}

fn sample_state() -> DashboardState {
    DashboardState::new(vec![member("Kim", 75), member("Lee", 45)])
}

fn browse(script: &str) -> (DashboardState, String) {
    let mut out = Vec::new();
    let state = run_browse(sample_state(), script.as_bytes(), &mut out).unwrap();
    (state, String::from_utf8(out).unwrap())
}

#[test]
fn test_parse_event() {
    assert_eq!(parse_event("search ki"), BrowseEvent::Search("ki".to_string()));
    assert_eq!(parse_event("search"), BrowseEvent::Search(String::new()));
    assert_eq!(parse_event("search "), BrowseEvent::Search(String::new()));
    assert_eq!(parse_event("search  ki"), BrowseEvent::Search(" ki".to_string()));
    assert_eq!(
        parse_event("select Lee Seoyeon\r\n"),
        BrowseEvent::Select("Lee Seoyeon".to_string())
    );
    assert_eq!(parse_event("show"), BrowseEvent::Show);
    assert_eq!(parse_event("quit"), BrowseEvent::Quit);
    assert_eq!(parse_event("exit"), BrowseEvent::Quit);
    assert_eq!(parse_event("   "), BrowseEvent::Empty);
    assert_eq!(parse_event("sort"), BrowseEvent::Unknown("sort".to_string()));
}

#[test]
fn test_session_search_then_select() {
    let (state, out) = browse("search le\nselect 1\nquit\n");
    assert_eq!(state.search(), "le");
    assert_eq!(state.selected().map(|m| m.name.as_str()), Some("Lee"));
    assert_eq!(out.matches("Member Scoreboard").count(), 3);
}

#[test]
fn test_session_select_outside_filter_is_rejected() {
    let (state, out) = browse("search ki\nselect Lee\n");
    assert!(state.selected().is_none());
    assert!(out.contains("No visible member matches \"Lee\"."));
}

#[test]
fn test_session_selection_kept_when_filter_empties() {
    let (state, out) = browse("select Lee\nsearch xyz\n");
    assert_eq!(state.selected().map(|m| m.name.as_str()), Some("Lee"));
    assert!(out.contains("No matching members"));
    assert!(out.trim_end().contains("Lee  45 [weak]"));
}

#[test]
fn test_session_unknown_command_keeps_state() {
    let (state, out) = browse("dance\nquit\nsearch ki\n");
    assert_eq!(state.search(), "");
    assert!(out.contains("Unknown command \"dance\""));
    assert_eq!(out.matches("Member Scoreboard").count(), 1);
}
