//! CLI parsing and settings-merge tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use clap::Parser;

use maraline_collector::cli::Cli;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("maraline").chain(args.iter().copied())).unwrap()
}

#[test]
fn flags_only() {
    let s = parse(&["-u", "http://m:8080", "-a", "ops:pw", "-t", "3"])
        .into_settings()
        .unwrap();
    assert_eq!(s.url, "http://m:8080");
    assert_eq!(s.basic_auth.as_deref(), Some("ops:pw"));
    assert_eq!(s.timeout.as_secs(), 3);
}

#[test]
fn timeout_defaults_to_fifteen() {
    let s = parse(&["--url", "http://m:8080"]).into_settings().unwrap();
    assert_eq!(s.timeout.as_secs(), 15);
    assert!(s.basic_auth.is_none());
}

#[test]
fn missing_url_is_bad_config() {
    let err = parse(&[]).into_settings().unwrap_err();
    assert_eq!(err.code().as_str(), "BAD_CONFIG");
}

#[test]
fn zero_timeout_flag_rejected() {
    let err = parse(&["-u", "http://m:8080", "-t", "0"])
        .into_settings()
        .unwrap_err();
    assert_eq!(err.code().as_str(), "BAD_CONFIG");
}

#[test]
fn flags_override_config_file() {
    let path = std::env::temp_dir().join(format!("maraline-test-{}.yaml", std::process::id()));
    std::fs::write(
        &path,
        "url: \"http://from-file:8080\"\nbasic_auth: \"file:creds\"\ntimeout_secs: 9\n",
    )
    .unwrap();

    let s = parse(&["-c", path.to_str().unwrap(), "-u", "http://from-flag:8080"])
        .into_settings()
        .unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(s.url, "http://from-flag:8080");
    assert_eq!(s.basic_auth.as_deref(), Some("file:creds"));
    assert_eq!(s.timeout.as_secs(), 9);
}
