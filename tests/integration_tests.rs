//! Integration tests for end-to-end credential loading.
//!
//! These tests verify that the complete pipeline works correctly from a file
//! on disk through discovery, reading, parsing and lookup.

use std::fs;

use authinfo::{
    discovery::discovery::{load, SearchPaths, DEFAULT_MAX_FILE_SIZE},
    errors::errors::{ParseErrorKind, ResultCode},
    parser::{
        handler::Control,
        parser::{collect, parse},
        record::Host,
    },
    query::query::Query,
    render_error, Position,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const AUTHINFO: &str = "\
# personal mail
machine imap.example.com login jane port imap password s3cret

machine smtp.example.com login jane port 587 password s3cret force yes
macdef upload
put report.txt
machine ignored.example.com

  machine git.example.com user jdoe password tok
default login anonymous password anonymous@
";

fn home_with(name: &str, content: &str) -> TempDir {
    let home = TempDir::new().expect("Failed to create temp directory");
    fs::write(home.path().join(name), content).expect("Failed to write test file");
    home
}

#[test]
fn test_load_and_parse_authinfo() {
    let home = home_with(".authinfo", AUTHINFO);
    let sysconf = TempDir::new().unwrap();
    let paths = SearchPaths::new(Some(home.path().to_path_buf()), sysconf.path());

    let (path, text) = load(&paths, DEFAULT_MAX_FILE_SIZE).unwrap();
    assert_eq!(path, home.path().join(".authinfo"));

    let parsed = collect(&text);
    assert!(parsed.errors.is_empty(), "unexpected errors: {:?}", parsed.errors);

    let hosts: Vec<String> = parsed
        .records
        .iter()
        .map(|record| record.host.unwrap().to_string())
        .collect();
    assert_eq!(
        hosts,
        vec![
            "imap.example.com",
            "smtp.example.com",
            "git.example.com",
            "default",
        ]
    );

    let smtp = &parsed.records[1];
    assert!(smtp.force);
    assert_eq!(smtp.protocol.unwrap(), "587");
    assert_eq!(parsed.records[3].host, Some(Host::Default));
}

#[test]
fn test_lookup_through_netrc() {
    let home = home_with(".netrc", AUTHINFO);
    let sysconf = TempDir::new().unwrap();
    let paths = SearchPaths::new(Some(home.path().to_path_buf()), sysconf.path());

    let (_, text) = load(&paths, DEFAULT_MAX_FILE_SIZE).unwrap();

    let git = Query::new().host("git.example.com").find(&text).unwrap().unwrap();
    assert_eq!(git.user.unwrap(), "jdoe");
    assert_eq!(git.password.unwrap(), "tok");

    let smtp = Query::new()
        .host("smtp.example.com")
        .protocol("587")
        .find(&text)
        .unwrap()
        .unwrap();
    assert!(smtp.force);

    let fallback = Query::new().host("ignored.example.com").find(&text).unwrap().unwrap();
    assert!(fallback.is_default());
}

#[test]
fn test_missing_file_is_reported() {
    let home = TempDir::new().unwrap();
    let sysconf = TempDir::new().unwrap();
    let paths = SearchPaths::new(Some(home.path().to_path_buf()), sysconf.path());

    let error = load(&paths, DEFAULT_MAX_FILE_SIZE).unwrap_err();
    assert_eq!(error.code(), ResultCode::NotFound);
}

#[test]
fn test_oversized_file_is_rejected() {
    let home = home_with(".authinfo", AUTHINFO);
    let sysconf = TempDir::new().unwrap();
    let paths = SearchPaths::new(Some(home.path().to_path_buf()), sysconf.path());

    let error = load(&paths, 16).unwrap_err();
    assert_eq!(error.code(), ResultCode::TooBig);
}

#[test]
fn test_lenient_parse_collects_all_diagnostics() {
    let text = b"machine a login\nforce maybe\nmachine b machine c\n";
    let mut errors = Vec::new();
    let mut records = 0;

    parse(
        text,
        |_| {
            records += 1;
            Control::Continue
        },
        |error| {
            errors.push((error.kind, error.position));
            Control::Continue
        },
    );

    assert_eq!(records, 2);
    assert_eq!(
        errors,
        vec![
            (ParseErrorKind::MissingValue, Position::new(1, 15)),
            (ParseErrorKind::BadValue, Position::new(2, 6)),
            (ParseErrorKind::MissingHost, Position::new(2, 0)),
            (ParseErrorKind::DuplicatedKeyword, Position::new(3, 10)),
        ]
    );
}

#[test]
fn test_strict_parse_stops_at_first_error() {
    let text = b"machine a\nmachine b bogus\nmachine c\n";
    let mut hosts = Vec::new();
    let mut first_error = None;

    parse(
        text,
        |record| {
            hosts.push(record.host.unwrap().to_string());
            Control::Continue
        },
        |error| {
            first_error = Some(error);
            Control::Stop
        },
    );

    assert_eq!(hosts, vec!["a"]);

    let error = first_error.unwrap();
    let rendered = render_error(&error, text, "authinfo");
    assert!(rendered.contains("-> authinfo:2:10"));
    assert!(rendered.contains("2 | machine b bogus"));
}
