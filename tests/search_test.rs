use rematch::{Config, Error, FormatMode, run, run_on_reader};
use std::fs;
use std::io::Cursor;

fn create_config(pattern: &str) -> Config {
    Config {
        pattern: pattern.to_string(),
        ..Default::default()
    }
}

#[test]
fn searches_a_file_when_path_is_set() {
    let td = tempfile::tempdir().unwrap();
    let path = td.path().join("input.txt");
    fs::write(&path, b"first\nsecond match\nthird\n").unwrap();

    let mut cfg = create_config("match");
    cfg.file = Some(path.to_string_lossy().to_string());

    let mut out: Vec<u8> = Vec::new();
    let matched = run(&cfg, &mut out).unwrap();
    assert_eq!(matched, 1);
    assert_eq!(String::from_utf8(out).unwrap(), "2: second match\n");
}

#[test]
fn nonexistent_file_fails_naming_the_path() {
    let mut cfg = create_config("x");
    cfg.file = Some("/definitely/not/exist.txt".to_string());

    let mut out: Vec<u8> = Vec::new();
    let res = run(&cfg, &mut out);
    match res {
        Err(Error::Open { path, .. }) => assert_eq!(path, "/definitely/not/exist.txt"),
        other => panic!("expected Open error, got {:?}", other.map(|_| ())),
    }
    assert!(out.is_empty());
}

#[test]
fn invalid_pattern_aborts_before_reading() {
    let cfg = create_config("[unclosed");
    let res = run_on_reader(&cfg, Cursor::new("data\n"));
    assert!(matches!(res, Err(Error::Pattern(_))));
}

#[test]
fn invalid_pattern_error_is_human_readable() {
    let cfg = create_config("(");
    let err = run_on_reader(&cfg, Cursor::new("")).unwrap_err();
    assert!(err.to_string().contains("invalid regular expression"));
}

#[test]
fn matches_are_found_in_input_order() {
    let cfg = create_config("n");
    let data = "one\ntwo\nnine\nten\n";
    let res = run_on_reader(&cfg, Cursor::new(data)).unwrap();
    let lines: Vec<_> = res.output.lines().collect();
    assert_eq!(lines, vec!["1: one", "3: nine", "4: ten"]);
}

#[test]
fn input_without_trailing_newline_still_counts_last_line() {
    let cfg = create_config("end");
    let res = run_on_reader(&cfg, Cursor::new("start\nend")).unwrap();
    assert_eq!(res.output, "2: end\n");
}

#[test]
fn empty_pattern_matches_every_line() {
    let cfg = create_config("");
    let res = run_on_reader(&cfg, Cursor::new("a\nb\n")).unwrap();
    assert_eq!(res.matched, 2);
}

#[test]
fn anchors_apply_per_line() {
    let cfg = create_config("^b$");
    let data = "ab\nb\nba\n";
    let res = run_on_reader(&cfg, Cursor::new(data)).unwrap();
    assert_eq!(res.output, "2: b\n");
}

#[test]
fn greedy_matches_do_not_overlap() {
    let mut cfg = create_config("a+");
    cfg.format = FormatMode::Machine;
    let res = run_on_reader(&cfg, Cursor::new("aaab aa\n")).unwrap();
    let lines: Vec<_> = res.output.lines().collect();
    assert_eq!(lines, vec!["1\t0\t3\taaa", "1\t5\t7\taa"]);
}

#[test]
fn crlf_line_endings_are_stripped() {
    let cfg = create_config("end$");
    let res = run_on_reader(&cfg, Cursor::new("the end\r\n")).unwrap();
    assert_eq!(res.matched, 1);
    assert_eq!(res.output, "1: the end\n");
}

#[test]
fn run_result_is_debug_printable() {
    let cfg = create_config("a");
    let res = run_on_reader(&cfg, Cursor::new("a\n")).unwrap();
    let dbg = format!("{:?}", res);
    assert!(dbg.contains("matched: 1"));
}

#[test]
fn dash_path_reads_are_not_treated_as_a_file() {
    // open_input maps "-" to stdin rather than a file named "-"
    let reader = rematch::io_utils::open_input(Some("-"));
    assert!(reader.is_ok());
}
