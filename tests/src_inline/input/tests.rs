use std::io::Write;

use super::*;

#[test]
fn test_bundled_dataset_loads() {
    let members = load_members(&DatasetSource::Bundled).unwrap();
    assert!(!members.is_empty());
    assert!(members.iter().all(|m| !m.name.is_empty()));
    for m in &members {
        assert!(m.is_total_consistent(), "{}", m.name);
        assert!(m.out_of_range().is_empty(), "{}", m.name);
    }
}

#[test]
fn test_bundled_names_are_unique() {
    let members = load_members(&DatasetSource::Bundled).unwrap();
    let mut names: Vec<&str> = members.iter().map(|m| m.name.as_str()).collect();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), members.len());
}

#[test]
fn test_parse_keeps_order() {
    let members = parse_members(
        r#"[{"name":"Kim","totalScore":75},{"name":"Lee","totalScore":45}]"#,
    )
    .unwrap();
    let names: Vec<&str> = members.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Kim", "Lee"]);
}

#[test]
fn test_empty_list_is_zero_rows() {
    assert!(parse_members("[]").unwrap().is_empty());
}

#[test]
fn test_inconsistent_total_is_kept() {
    let members = parse_members(r#"[{"name":"Odd","referralScore":20,"totalScore":3}]"#).unwrap();
    assert_eq!(members[0].total_score, 3);
    assert_eq!(members[0].category_sum(), 20);
}

#[test]
fn test_unknown_fields_are_ignored() {
    let members = parse_members(r#"[{"name":"Kim","team":"blue","totalScore":70}]"#).unwrap();
    assert_eq!(members[0].total_score, 70);
}

#[test]
fn test_non_list_is_parse_error() {
    let err = parse_members(r#"{"name":"Kim"}"#).unwrap_err();
    assert!(matches!(err, InputError::Parse(_)));
    assert!(err.to_string().starts_with("dataset is not a list"));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let err = load_members(&DatasetSource::File(path.clone())).unwrap_err();
    match err {
        InputError::Io { path: p, .. } => assert_eq!(p, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_file_dataset_loads() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"[{{"name":"Kim","trainingScore":10,"totalScore":10}}]"#).unwrap();
    let members = load_members(&DatasetSource::File(file.path().to_path_buf())).unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].training_score, 10);
}

#[test]
fn test_source_from_arg() {
    assert_eq!(DatasetSource::from_arg(None), DatasetSource::Bundled);
    let p = std::path::Path::new("members.json");
    assert_eq!(
        DatasetSource::from_arg(Some(p)),
        DatasetSource::File(p.to_path_buf())
    );
    assert_eq!(DatasetSource::Bundled.describe(), "bundled");
}

#[test]
fn test_huge_scores_load_without_panicking() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"name":"Big","referralScore":2000000000,"thankYouScore":2000000000,"totalScore":1}}]"#
    )
    .unwrap();
    let members = load_members(&DatasetSource::File(file.path().to_path_buf())).unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].category_sum(), 4_000_000_000);
    assert_eq!(members[0].total_score, 1);
}

#[test]
fn test_null_and_fractional_scores_are_kept() {
    let members = parse_members(
        r#"[{"name":"A","referralScore":null},{"name":"B","trainingScore":7.5,"totalScore":7}]"#,
    )
    .unwrap();
    assert_eq!(members.len(), 2);
    assert_eq!(members[0].referral_score, 0);
    assert_eq!(members[1].training_score, 7);
    assert!(members[1].is_total_consistent());
}

#[test]
fn test_non_object_entries_are_skipped() {
    let members = parse_members(r#"[{"name":"Kim","totalScore":70}, 5, null, "Lee"]"#).unwrap();
    let names: Vec<&str> = members.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Kim"]);
}

#[test]
fn test_invalid_json_is_parse_error() {
    assert!(matches!(parse_members("[{"), Err(InputError::Parse(_))));
}
