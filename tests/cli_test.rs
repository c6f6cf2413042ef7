use clap::Parser;
use kiln::cli::Args;
use kiln::request::SourceKind;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("kiln")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_git_source() {
    let args = make_args(&["--git", "https://github.com/user/template.git"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.source(), ("https://github.com/user/template.git", SourceKind::Remote));
    assert_eq!(parsed.branch, None);
    assert_eq!(parsed.output_dir, PathBuf::from("."));
    assert!(!parsed.yes);
    assert!(!parsed.json);
    assert!(!parsed.verbose);
}

#[test]
fn test_local_source() {
    let args = make_args(&["--local=./template"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.source(), ("./template", SourceKind::Local));
}

#[test]
fn test_all_flags() {
    let args = make_args(&[
        "--git=git@github.com:user/template.git",
        "--branch=main",
        "--name",
        "myapp",
        "--output-dir",
        "/tmp/projects",
        "--yes",
        "--json",
        "--verbose",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.branch.as_deref(), Some("main"));
    assert_eq!(parsed.name.as_deref(), Some("myapp"));
    assert_eq!(parsed.output_dir, PathBuf::from("/tmp/projects"));
    assert!(parsed.yes);
    assert!(parsed.json);
    assert!(parsed.verbose);
}

#[test]
fn test_short_flags() {
    let args = make_args(&["--local", "./template", "-n", "myapp", "-o", "out", "-y", "-v"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.name.as_deref(), Some("myapp"));
    assert_eq!(parsed.output_dir, PathBuf::from("out"));
    assert!(parsed.yes);
    assert!(parsed.verbose);
}

#[test]
fn test_missing_source() {
    let args = make_args(&["--name", "myapp"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_both_sources() {
    let args = make_args(&["--git", "https://github.com/user/t.git", "--local", "./template"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_branch_requires_git() {
    let args = make_args(&["--local", "./template", "--branch", "main"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_branch_with_local_source_is_rejected() {
    let args = make_args(&["--local=./template", "--branch=main", "--name", "myapp"]);
    let err = Args::try_parse_from(args).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
}
