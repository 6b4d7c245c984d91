//! Unit tests for record lookup.

use super::query::Query;
use crate::{errors::errors::ParseErrorKind, parser::record::Host};

const NETRC: &[u8] = b"\
# work
machine api.example.com login alice password a1
machine api.example.com login bob port imap password b2
machine mail.example.com login carol password c3
default login anonymous password guest
";

fn found_user(query: &Query, text: &[u8]) -> Option<String> {
    query
        .find(text)
        .unwrap()
        .and_then(|record| record.user)
        .map(|user| user.to_string())
}

#[test]
fn test_find_by_host() {
    let query = Query::new().host("mail.example.com");

    assert_eq!(found_user(&query, NETRC).as_deref(), Some("carol"));
}

#[test]
fn test_first_match_wins() {
    let query = Query::new().host("api.example.com");

    assert_eq!(found_user(&query, NETRC).as_deref(), Some("alice"));
}

#[test]
fn test_find_by_host_and_user() {
    let query = Query::new().host("api.example.com").user("bob");

    let record = query.find(NETRC).unwrap().unwrap();
    assert_eq!(record.password.unwrap(), "b2");
}

#[test]
fn test_record_without_protocol_matches_any_protocol() {
    let query = Query::new().host("api.example.com").protocol("smtp");

    assert_eq!(found_user(&query, NETRC).as_deref(), Some("alice"));
}

#[test]
fn test_protocol_must_match_when_present() {
    let query = Query::new().host("api.example.com").user("bob").protocol("smtp");

    // bob's entry is imap-only and the default entry names another user
    let record = query.find(NETRC).unwrap();
    assert!(record.is_none());
}

#[test]
fn test_default_entry_matches_unknown_host() {
    let query = Query::new().host("unknown.example.org");

    let record = query.find(NETRC).unwrap().unwrap();
    assert_eq!(record.host, Some(Host::Default));
    assert_eq!(record.user.unwrap(), "anonymous");
}

#[test]
fn test_empty_query_matches_first_record() {
    assert_eq!(found_user(&Query::new(), NETRC).as_deref(), Some("alice"));
}

#[test]
fn test_no_match() {
    let query = Query::new().host("nowhere");

    assert_eq!(query.find(b"machine a login b\n").unwrap(), None);
}

#[test]
fn test_find_stops_at_syntax_error() {
    let text = b"machine a bogus\nmachine b login x\n";
    let query = Query::new().host("b");

    let error = query.find(text).unwrap_err();
    assert_eq!(error.kind, ParseErrorKind::BadKeyword);
}

#[test]
fn test_find_lenient_skips_errors() {
    let text = b"machine a bogus\nmachine b login x\n";
    let query = Query::new().host("b");

    let record = query.find_lenient(text).unwrap();
    assert_eq!(record.user.unwrap(), "x");
}
