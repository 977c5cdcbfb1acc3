use super::*;

#[test]
fn test_cli_show_defaults() {
    let cli = Cli::try_parse_from(["member-scoreboard", "show"]).unwrap();
    assert!(!cli.verbose);
    assert!(cli.data.is_none());
    match cli.command {
        Commands::Show {
            search,
            select,
            format,
        } => {
            assert_eq!(search, "");
            assert!(select.is_none());
            assert_eq!(format, OutputFormat::Text);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_cli_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "member-scoreboard",
        "show",
        "--search",
        "ki",
        "--format",
        "json",
        "--data",
        "members.json",
        "--verbose",
    ])
    .unwrap();
    assert!(cli.verbose);
    assert_eq!(cli.data, Some(PathBuf::from("members.json")));
    let Commands::Show { search, format, .. } = cli.command else {
        panic!("expected show");
    };
    assert_eq!(search, "ki");
    assert_eq!(format, OutputFormat::Json);
}

#[test]
fn test_cli_render_defaults() {
    let cli = Cli::try_parse_from(["member-scoreboard", "render", "--out", "site"]).unwrap();
    let Commands::Render {
        out,
        base_path,
        title,
    } = cli.command
    else {
        panic!("expected render");
    };
    assert_eq!(out, PathBuf::from("site"));
    assert_eq!(base_path, "/member-management");
    assert_eq!(title, "Member Scoreboard");
}

#[test]
fn test_cli_rejects_unknown_format() {
    assert!(Cli::try_parse_from(["member-scoreboard", "show", "--format", "xml"]).is_err());
}

#[test]
fn test_show_args_select_known_member() {
    let state = load_state(None).unwrap();
    let name = state.dataset()[0].name.clone();
    let state = apply_show_args(state, "zzz".to_string(), Some(name.as_str())).unwrap();
    assert_eq!(state.search(), "zzz");
    assert_eq!(state.selected().map(|m| m.name.clone()), Some(name));
}

#[test]
fn test_show_args_unknown_member() {
    let state = load_state(None).unwrap();
    let err = apply_show_args(state, String::new(), Some("Nobody")).unwrap_err();
    assert!(matches!(err, AppError::UnknownMember(ref n) if n == "Nobody"));
    assert_eq!(err.to_string(), "no member named \"Nobody\"");
}

#[test]
fn test_render_view_formats() {
    let state = load_state(None).unwrap();
    let text = render_view(&state, OutputFormat::Text).unwrap();
    assert!(text.starts_with("Member Scoreboard"));
    let json = render_view(&state, OutputFormat::Json).unwrap();
    assert!(json.trim_start().starts_with('{'));
}
